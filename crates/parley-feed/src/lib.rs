//! Report action feed ordering and visibility for the Parley platform.
//!
//! Implements the canonical total order over a report's actions and the
//! display projection that renderers consume: visibility filtering,
//! newest-first ordering, and origin anchoring. Both entry points are pure
//! functions over an in-memory snapshot; the external store merges pending
//! and confirmed actions and re-invokes them whenever the snapshot changes.
//!
//! # Visibility classes
//!
//! Every [`ActionKind`](parley_types::ActionKind) belongs to exactly one
//! visibility class, consumed in a single filter pass:
//!
//! | Class | Kinds | Dropped when |
//! |-------|-------|--------------|
//! | `AlwaysHidden` | `CLOSED` | always |
//! | `WriteGated` | the `ACTIONABLE_*` whispers | the room no longer accepts writes |
//! | `ContentGated` | `ADD_COMMENT` | content removed and nothing pending |
//! | `Ordinary` | everything else | never |
//!
//! # Usage
//!
//! ```rust,ignore
//! use parley_feed::{display_actions, sorted_actions};
//!
//! let canonical = sorted_actions(&actions, false);
//! let feed = display_actions(&actions, room.can_perform_write_action);
//! ```

mod classify;
mod error;
mod project;
mod sequence;
mod timestamp;

pub mod integrity;

pub use classify::{is_actionable_whisper, is_deleted_comment, visibility_class, VisibilityClass};
pub use error::FeedError;
pub use project::{display_actions, last_visible_action};
pub use sequence::sorted_actions;
pub use timestamp::{format_feed_timestamp, parse_feed_timestamp, FEED_TIMESTAMP_FORMAT};

#[cfg(test)]
mod tests;
