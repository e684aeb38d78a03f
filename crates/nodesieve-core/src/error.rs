//! Error types for nodesieve

use thiserror::Error;

/// Main error type for nodesieve operations.
///
/// Every variant is raised synchronously at construction time, when a node
/// or a name-bearing filter is built from malformed input. Once a value has
/// been constructed, filter evaluation is total and never fails.
#[derive(Debug, Error)]
pub enum NodeSieveError {
    /// Malformed element, attribute, or entity name.
    #[error("invalid name {name:?}: {reason}")]
    InvalidName {
        /// The rejected name.
        name: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// Malformed comment text.
    #[error("invalid comment: {reason}")]
    InvalidComment {
        /// Why it was rejected.
        reason: &'static str,
    },

    /// Malformed or reserved processing-instruction target.
    #[error("invalid processing instruction target {target:?}: {reason}")]
    InvalidTarget {
        /// The rejected target.
        target: String,
        /// Why it was rejected.
        reason: &'static str,
    },
}

/// Result type alias for nodesieve operations.
pub type Result<T> = std::result::Result<T, NodeSieveError>;
