//! Error types for the feed engine.

/// Errors that can occur at the edges of the feed engine.
///
/// The ordering and projection functions themselves are total and never
/// fail; only the timestamp helpers return errors.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// A timestamp string was not in the canonical feed format.
    #[error("timestamp not in canonical feed format: {0}")]
    BadTimestamp(String),
}
