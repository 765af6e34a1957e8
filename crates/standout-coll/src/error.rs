//! Error types for the coll crate.

use thiserror::Error;

/// Errors that can occur when scanning loosely-typed input or building predicates.
#[derive(Debug, Error)]
pub enum CollError {
    /// The input has no iteration semantics (neither a sequence, a map, nor a scalar).
    #[error("{kind} values cannot be scanned as a collection")]
    NotIterable { kind: &'static str },

    /// Invalid regular expression pattern.
    #[cfg(feature = "regex")]
    #[error("invalid regex pattern: {0}")]
    InvalidRegex(#[from] regex::Error),

    /// An element could not be converted into a [`Value`](crate::Value).
    #[error("element cannot be represented as a value: {0}")]
    Serialize(String),
}

impl serde::ser::Error for CollError {
    fn custom<T: std::fmt::Display>(msg: T) -> Self {
        CollError::Serialize(msg.to_string())
    }
}

/// Result type for coll operations.
pub type Result<T> = std::result::Result<T, CollError>;
