//! Visibility classification for report actions.
//!
//! One table maps every [`ActionKind`] to a visibility class; the display
//! projector consumes the table in a single filter pass. The match is
//! exhaustive, so adding a kind without deciding its visibility fails to
//! compile.

use parley_types::{ActionKind, ReportAction};
use serde::{Deserialize, Serialize};

/// How an action kind participates in display filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisibilityClass {
    /// Never rendered as a feed item.
    AlwaysHidden,
    /// Rendered only while the room still accepts writes.
    WriteGated,
    /// Rendered unless its content is removed and nothing is pending.
    ContentGated,
    /// Always rendered.
    Ordinary,
}

/// Returns the visibility class for an action kind.
pub fn visibility_class(kind: ActionKind) -> VisibilityClass {
    match kind {
        ActionKind::Closed => VisibilityClass::AlwaysHidden,
        ActionKind::ActionableJoinRequest
        | ActionKind::ActionableMentionWhisper
        | ActionKind::ActionableReportMentionWhisper => VisibilityClass::WriteGated,
        ActionKind::Comment => VisibilityClass::ContentGated,
        ActionKind::Created
        | ActionKind::Renamed
        | ActionKind::Payment
        | ActionKind::ReimbursementQueued
        | ActionKind::FieldUpdated
        | ActionKind::TaskEdited => VisibilityClass::Ordinary,
    }
}

/// Returns true if the action is a transient prompt soliciting a write
/// (join this room, invite this member, create this room).
///
/// These prompts are meaningless once the room no longer accepts writes.
pub fn is_actionable_whisper(action: &ReportAction) -> bool {
    visibility_class(action.kind) == VisibilityClass::WriteGated
}

/// Returns true if the action is a comment whose content has been removed
/// and whose removal the store has confirmed.
///
/// An empty comment with a pending status is *not* deleted in this sense:
/// the user should still see the transient state (a delete awaiting
/// confirmation, or a comment mid-creation).
pub fn is_deleted_comment(action: &ReportAction) -> bool {
    action.kind == ActionKind::Comment && action.has_blank_message() && !action.is_pending()
}
