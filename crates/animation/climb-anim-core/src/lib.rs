//! climb-anim core (engine-agnostic)
//!
//! Drives a character's animation graph from gameplay flags: locomotion
//! blends from speed tiers, and one-shot triggers for entering, shimmying
//! along and dropping from ledge hangs. The graph itself belongs to the host
//! engine and is reached through [`AnimatorGraph`].

pub mod animator;
pub mod blend;
pub mod config;
pub mod driver;
pub mod error;
pub mod hang;
pub mod inputs;
pub mod outputs;
pub mod params;

// Re-exports for consumers (adapters)
pub use animator::{AnimatorGraph, ParameterStore, TriggerCall};
pub use blend::LocomotionBlend;
pub use config::DriverConfig;
pub use driver::{CharacterAnimDriver, IkPass, LastFrame};
pub use error::{AnimatorError, ConfigError, DriverError, DriverResult, ParamError, ParamKind};
pub use hang::HangType;
pub use inputs::FrameInputs;
pub use outputs::FrameReport;
pub use params::{BoolParam, FloatParam, GraphState, TriggerParam};
