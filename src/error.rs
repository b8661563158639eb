//! Error types shared by the table layers.

/// Errors raised while constructing a table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// The requested table shape cannot be built (e.g. zero buckets).
    #[error("invalid table configuration: {0}")]
    InvalidConfiguration(String),
}
