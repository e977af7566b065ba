//! What a single driver update did.

use serde::{Deserialize, Serialize};

use crate::blend::LocomotionBlend;
use crate::params::{GraphState, TriggerParam};

/// Summary of one [`update`](crate::driver::CharacterAnimDriver::update) call.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameReport {
    /// Known graph state observed this frame, if any.
    pub state: Option<GraphState>,
    /// Blend values written this frame.
    pub blend: LocomotionBlend,
    /// Triggers fired this frame, in firing order.
    pub fired: Vec<TriggerParam>,
}

impl FrameReport {
    pub fn fired_names(&self) -> Vec<&'static str> {
        self.fired.iter().map(|t| t.name()).collect()
    }

    pub fn fired_any(&self) -> bool {
        !self.fired.is_empty()
    }
}
