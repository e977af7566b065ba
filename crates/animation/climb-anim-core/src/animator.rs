//! Boundary to the host engine's animation graph.
//!
//! The driver never evaluates animation itself. It reads and writes named
//! parameters and asks which state is active through [`AnimatorGraph`].
//! Hosts implement the trait over their own animator. [`ParameterStore`] is
//! a plain in-memory implementation for tests and headless runs.

use hashbrown::{HashMap, HashSet};
use serde::{Deserialize, Serialize};

use crate::error::{AnimatorError, ParamKind};
use crate::params::{BoolParam, FloatParam, GraphState, TriggerParam};

/// Named-parameter API of an externally owned animation graph.
pub trait AnimatorGraph {
    fn get_bool(&self, name: &str) -> Result<bool, AnimatorError>;
    fn set_bool(&mut self, name: &str, value: bool) -> Result<(), AnimatorError>;

    fn get_float(&self, name: &str) -> Result<f32, AnimatorError>;
    fn set_float(&mut self, name: &str, value: f32) -> Result<(), AnimatorError>;

    /// Arm a one-shot trigger. The graph clears it when a transition consumes it.
    fn set_trigger(&mut self, name: &str) -> Result<(), AnimatorError>;
    /// Disarm a trigger that has not been consumed yet.
    fn reset_trigger(&mut self, name: &str) -> Result<(), AnimatorError>;

    /// Whether the current state on `layer` carries `state_name`.
    /// Names the graph was not authored with are an error, not `false`.
    fn is_in_state(&self, layer: usize, state_name: &str) -> Result<bool, AnimatorError>;

    fn set_apply_root_motion(&mut self, enabled: bool) -> Result<(), AnimatorError>;
    /// Plain query of the current root-motion flag.
    fn apply_root_motion(&self) -> bool;
}

/// A trigger call recorded by [`ParameterStore`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", content = "name", rename_all = "snake_case")]
pub enum TriggerCall {
    Set(String),
    Reset(String),
}

/// In-memory animation graph parameters.
///
/// Only declared names are accepted. Using anything else yields
/// [`AnimatorError::UnknownParameter`], the same way a real graph would
/// refuse a parameter it was not authored with.
#[derive(Debug, Default, Clone)]
pub struct ParameterStore {
    bools: HashMap<String, bool>,
    floats: HashMap<String, f32>,
    triggers: HashMap<String, bool>,
    states: HashSet<String>,
    /// Current state name per layer.
    layers: Vec<Option<String>>,
    root_motion: bool,
    calls: Vec<TriggerCall>,
}

impl ParameterStore {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store declaring every bool, float, trigger and state of the character
    /// graph, with one layer and no active state.
    pub fn with_character_params() -> Self {
        let mut store = Self::new();
        for p in BoolParam::ALL {
            store.declare_bool(p.name(), false);
        }
        for p in FloatParam::ALL {
            store.declare_float(p.name(), 0.0);
        }
        for t in TriggerParam::ALL {
            store.declare_trigger(t.name());
        }
        for s in GraphState::ALL {
            store.declare_state(s.name());
        }
        store.layers.push(None);
        store
    }

    pub fn declare_bool(&mut self, name: &str, initial: bool) -> &mut Self {
        self.bools.insert(name.to_string(), initial);
        self
    }

    pub fn declare_float(&mut self, name: &str, initial: f32) -> &mut Self {
        self.floats.insert(name.to_string(), initial);
        self
    }

    pub fn declare_trigger(&mut self, name: &str) -> &mut Self {
        self.triggers.insert(name.to_string(), false);
        self
    }

    pub fn declare_state(&mut self, name: &str) -> &mut Self {
        self.states.insert(name.to_string());
        self
    }

    /// Put `layer` into the named state, growing the layer list if needed.
    /// The name is declared if it was not already.
    pub fn set_state(&mut self, layer: usize, state_name: impl Into<String>) {
        let state_name = state_name.into();
        if self.layers.len() <= layer {
            self.layers.resize(layer + 1, None);
        }
        self.states.insert(state_name.clone());
        self.layers[layer] = Some(state_name);
    }

    pub fn clear_state(&mut self, layer: usize) {
        if let Some(slot) = self.layers.get_mut(layer) {
            *slot = None;
        }
    }

    pub fn current_state(&self, layer: usize) -> Option<&str> {
        self.layers.get(layer).and_then(|s| s.as_deref())
    }

    /// Whether a trigger is armed and not yet consumed.
    pub fn is_trigger_set(&self, name: &str) -> bool {
        self.triggers.get(name).copied().unwrap_or(false)
    }

    /// Names of armed triggers, sorted for stable comparisons.
    pub fn armed_triggers(&self) -> Vec<String> {
        let mut armed: Vec<String> = self
            .triggers
            .iter()
            .filter(|(_, set)| **set)
            .map(|(n, _)| n.clone())
            .collect();
        armed.sort();
        armed
    }

    /// Consume every armed trigger, as the graph does when transitions fire.
    pub fn take_triggers(&mut self) -> Vec<String> {
        let armed = self.armed_triggers();
        for set in self.triggers.values_mut() {
            *set = false;
        }
        armed
    }

    /// Every set/reset call in call order.
    pub fn trigger_calls(&self) -> &[TriggerCall] {
        &self.calls
    }

    pub fn clear_trigger_calls(&mut self) {
        self.calls.clear();
    }

    fn unknown(kind: ParamKind, name: &str) -> AnimatorError {
        AnimatorError::UnknownParameter {
            kind,
            name: name.to_string(),
        }
    }
}

impl AnimatorGraph for ParameterStore {
    fn get_bool(&self, name: &str) -> Result<bool, AnimatorError> {
        self.bools
            .get(name)
            .copied()
            .ok_or_else(|| Self::unknown(ParamKind::Bool, name))
    }

    fn set_bool(&mut self, name: &str, value: bool) -> Result<(), AnimatorError> {
        let slot = self
            .bools
            .get_mut(name)
            .ok_or_else(|| Self::unknown(ParamKind::Bool, name))?;
        *slot = value;
        Ok(())
    }

    fn get_float(&self, name: &str) -> Result<f32, AnimatorError> {
        self.floats
            .get(name)
            .copied()
            .ok_or_else(|| Self::unknown(ParamKind::Float, name))
    }

    fn set_float(&mut self, name: &str, value: f32) -> Result<(), AnimatorError> {
        let slot = self
            .floats
            .get_mut(name)
            .ok_or_else(|| Self::unknown(ParamKind::Float, name))?;
        *slot = value;
        Ok(())
    }

    fn set_trigger(&mut self, name: &str) -> Result<(), AnimatorError> {
        let slot = self
            .triggers
            .get_mut(name)
            .ok_or_else(|| Self::unknown(ParamKind::Trigger, name))?;
        *slot = true;
        self.calls.push(TriggerCall::Set(name.to_string()));
        Ok(())
    }

    fn reset_trigger(&mut self, name: &str) -> Result<(), AnimatorError> {
        let slot = self
            .triggers
            .get_mut(name)
            .ok_or_else(|| Self::unknown(ParamKind::Trigger, name))?;
        *slot = false;
        self.calls.push(TriggerCall::Reset(name.to_string()));
        Ok(())
    }

    fn is_in_state(&self, layer: usize, state_name: &str) -> Result<bool, AnimatorError> {
        let slot = self
            .layers
            .get(layer)
            .ok_or(AnimatorError::UnknownLayer { layer })?;
        if !self.states.contains(state_name) {
            return Err(AnimatorError::UnknownState {
                name: state_name.to_string(),
            });
        }
        Ok(slot.as_deref() == Some(state_name))
    }

    fn set_apply_root_motion(&mut self, enabled: bool) -> Result<(), AnimatorError> {
        self.root_motion = enabled;
        Ok(())
    }

    fn apply_root_motion(&self) -> bool {
        self.root_motion
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undeclared_names_are_errors() {
        let mut store = ParameterStore::new();
        assert_eq!(
            store.set_bool("isGrounded", true),
            Err(AnimatorError::UnknownParameter {
                kind: ParamKind::Bool,
                name: "isGrounded".into()
            })
        );
        assert!(store.get_float("yVelocity").is_err());
        assert!(store.set_trigger("FallTrigger").is_err());
        assert_eq!(
            store.is_in_state(0, "Idle Free Hang"),
            Err(AnimatorError::UnknownLayer { layer: 0 })
        );
    }

    #[test]
    fn character_params_are_declared() {
        let mut store = ParameterStore::with_character_params();
        store.set_bool("isCrouching", true).unwrap();
        store.set_float("forwardSpeed", 3.5).unwrap();
        assert!(store.get_bool("isCrouching").unwrap());
        assert_eq!(store.get_float("forwardSpeed").unwrap(), 3.5);
        assert_eq!(store.current_state(0), None);
        assert!(!store.is_in_state(0, "Standing Blend Tree").unwrap());
    }

    #[test]
    fn triggers_arm_reset_and_drain() {
        let mut store = ParameterStore::with_character_params();
        store.set_trigger("FallTrigger").unwrap();
        store.set_trigger("FreeHangTrigger").unwrap();
        assert!(store.is_trigger_set("FallTrigger"));
        store.reset_trigger("FallTrigger").unwrap();
        assert!(!store.is_trigger_set("FallTrigger"));

        assert_eq!(store.take_triggers(), vec!["FreeHangTrigger".to_string()]);
        assert!(store.armed_triggers().is_empty());
        assert_eq!(
            store.trigger_calls(),
            &[
                TriggerCall::Set("FallTrigger".into()),
                TriggerCall::Set("FreeHangTrigger".into()),
                TriggerCall::Reset("FallTrigger".into()),
            ]
        );
    }

    #[test]
    fn state_per_layer() {
        let mut store = ParameterStore::with_character_params();
        store.set_state(2, "Idle Braced Hang");
        assert!(store.is_in_state(2, "Idle Braced Hang").unwrap());
        assert!(!store.is_in_state(1, "Idle Braced Hang").unwrap());
        store.clear_state(2);
        assert_eq!(store.current_state(2), None);
    }

    #[test]
    fn undeclared_state_name_is_an_error() {
        let mut store = ParameterStore::with_character_params();
        assert_eq!(
            store.is_in_state(0, "Wall Run"),
            Err(AnimatorError::UnknownState {
                name: "Wall Run".into()
            })
        );
        // entering a state declares it
        store.set_state(0, "Wall Run");
        assert!(store.is_in_state(0, "Wall Run").unwrap());
        assert!(!store.is_in_state(0, "Idle Free Hang").unwrap());
    }
}
