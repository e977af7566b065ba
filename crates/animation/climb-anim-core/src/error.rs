//! Error types shared by the parameter tables, the animator boundary and the driver.

use thiserror::Error;

/// Raised when an index does not address an entry of a fixed name table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    #[error("{table} index {index} out of range (table has {len} entries)")]
    IndexOutOfRange {
        table: &'static str,
        index: usize,
        len: usize,
    },
}

/// Failures reported by an [`AnimatorGraph`](crate::animator::AnimatorGraph) implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnimatorError {
    #[error("animator has no {kind} parameter named '{name}'")]
    UnknownParameter { kind: ParamKind, name: String },
    #[error("animator has no state named '{name}'")]
    UnknownState { name: String },
    #[error("animator layer {layer} does not exist")]
    UnknownLayer { layer: usize },
}

/// Parameter category, used in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKind {
    Bool,
    Float,
    Trigger,
}

impl std::fmt::Display for ParamKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ParamKind::Bool => "bool",
            ParamKind::Float => "float",
            ParamKind::Trigger => "trigger",
        };
        f.write_str(s)
    }
}

/// Errors produced while loading or validating a [`DriverConfig`](crate::config::DriverConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("driver config json parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid driver config: {0}")]
    Invalid(String),
}

/// Anything the frame driver can fail with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DriverError {
    #[error(transparent)]
    Animator(#[from] AnimatorError),
    #[error(transparent)]
    Param(#[from] ParamError),
}

pub type DriverResult<T> = Result<T, DriverError>;
