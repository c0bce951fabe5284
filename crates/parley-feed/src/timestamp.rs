//! Canonical feed timestamp format.
//!
//! `created` values are fixed-width `YYYY-MM-DD HH:mm:ss.mmm` strings so
//! that lexicographic comparison equals chronological comparison. The
//! sequencer relies on that property; any change to the representation
//! must preserve it.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::FeedError;

/// strftime specification of the canonical feed timestamp.
pub const FEED_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Formats an instant as a canonical feed timestamp.
pub fn format_feed_timestamp(at: DateTime<Utc>) -> String {
    at.format(FEED_TIMESTAMP_FORMAT).to_string()
}

/// Parses a canonical feed timestamp.
///
/// # Errors
///
/// Returns [`FeedError::BadTimestamp`] if the string is not in the
/// canonical format. The sequencer never calls this: it compares timestamp
/// strings directly, and a malformed one simply gets a best-effort
/// lexicographic position.
pub fn parse_feed_timestamp(value: &str) -> Result<NaiveDateTime, FeedError> {
    NaiveDateTime::parse_from_str(value, FEED_TIMESTAMP_FORMAT)
        .map_err(|_| FeedError::BadTimestamp(value.to_string()))
}
