//! Error types for node construction.
//!
//! `process` is total, so errors only occur when validating parameters in
//! the checked `try_new` constructors.

use thiserror::Error;

/// Error type for node parameter validation.
#[derive(Error, Debug)]
pub enum NodeError {
    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Unknown node type name (registry lookup).
    #[error("unknown node type: {0}")]
    UnknownNode(String),
}

/// Result type for node operations.
pub type NodeResult<T> = Result<T, NodeError>;
