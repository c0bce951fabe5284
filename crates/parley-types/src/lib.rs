//! Shared domain types for the Parley platform.
//!
//! This crate provides the foundational types used across all Parley crates:
//! the report action record, its closed kind enumeration, pending-write
//! markers, and message fragments, together with the parse errors for their
//! wire labels (via `thiserror`).
//!
//! No crate in the workspace depends on anything *except* `parley-types` for
//! cross-cutting type definitions. This keeps the dependency graph clean and
//! prevents circular dependencies.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Semantic class of a report action.
///
/// This is a closed set: every action stored against a report carries exactly
/// one of these kinds, and downstream visibility logic matches on it
/// exhaustively. Adding a kind without classifying it is a compile error,
/// not a silently mis-rendered feed item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    /// A text comment from a participant.
    #[serde(rename = "ADD_COMMENT")]
    Comment,
    /// The origin action marking the report's creation. At most one per
    /// report.
    #[serde(rename = "CREATED")]
    Created,
    /// The room was renamed.
    #[serde(rename = "RENAMED")]
    Renamed,
    /// The room was closed or archived.
    #[serde(rename = "CLOSED")]
    Closed,
    /// A payment was requested or settled on the report.
    #[serde(rename = "PAYMENT")]
    Payment,
    /// A reimbursement is waiting on an external bank account.
    #[serde(rename = "REIMBURSEMENT_QUEUED")]
    ReimbursementQueued,
    /// A workspace field on the report was changed.
    #[serde(rename = "FIELD_UPDATED")]
    FieldUpdated,
    /// A task attached to the report was edited.
    #[serde(rename = "TASK_EDITED")]
    TaskEdited,
    /// Whisper prompting the sender to join the mentioned room.
    #[serde(rename = "ACTIONABLE_JOIN_REQUEST")]
    ActionableJoinRequest,
    /// Whisper prompting the sender to invite a mentioned non-member.
    #[serde(rename = "ACTIONABLE_MENTION_WHISPER")]
    ActionableMentionWhisper,
    /// Whisper prompting the sender to create a mentioned room that does
    /// not exist yet.
    #[serde(rename = "ACTIONABLE_REPORT_MENTION_WHISPER")]
    ActionableReportMentionWhisper,
}

impl ActionKind {
    /// Returns the canonical wire label for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Comment => "ADD_COMMENT",
            Self::Created => "CREATED",
            Self::Renamed => "RENAMED",
            Self::Closed => "CLOSED",
            Self::Payment => "PAYMENT",
            Self::ReimbursementQueued => "REIMBURSEMENT_QUEUED",
            Self::FieldUpdated => "FIELD_UPDATED",
            Self::TaskEdited => "TASK_EDITED",
            Self::ActionableJoinRequest => "ACTIONABLE_JOIN_REQUEST",
            Self::ActionableMentionWhisper => "ACTIONABLE_MENTION_WHISPER",
            Self::ActionableReportMentionWhisper => "ACTIONABLE_REPORT_MENTION_WHISPER",
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ActionKind {
    type Err = ParseActionKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADD_COMMENT" => Ok(Self::Comment),
            "CREATED" => Ok(Self::Created),
            "RENAMED" => Ok(Self::Renamed),
            "CLOSED" => Ok(Self::Closed),
            "PAYMENT" => Ok(Self::Payment),
            "REIMBURSEMENT_QUEUED" => Ok(Self::ReimbursementQueued),
            "FIELD_UPDATED" => Ok(Self::FieldUpdated),
            "TASK_EDITED" => Ok(Self::TaskEdited),
            "ACTIONABLE_JOIN_REQUEST" => Ok(Self::ActionableJoinRequest),
            "ACTIONABLE_MENTION_WHISPER" => Ok(Self::ActionableMentionWhisper),
            "ACTIONABLE_REPORT_MENTION_WHISPER" => Ok(Self::ActionableReportMentionWhisper),
            _ => Err(ParseActionKindError(s.to_string())),
        }
    }
}

/// Error returned when parsing an unknown action kind label.
#[derive(Debug, Clone, Error)]
#[error("unknown action kind: {0}")]
pub struct ParseActionKindError(pub String);

/// Marker for an action whose effect is locally applied but not yet
/// confirmed by the authoritative store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PendingStatus {
    /// The action was created locally and the store has not acknowledged it.
    #[serde(rename = "add")]
    Add,
    /// A local edit to the action is awaiting confirmation.
    #[serde(rename = "update")]
    Update,
    /// A local deletion of the action is awaiting confirmation.
    #[serde(rename = "delete")]
    Delete,
}

impl PendingStatus {
    /// Returns the canonical wire label for this status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl std::str::FromStr for PendingStatus {
    type Err = ParsePendingStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Self::Add),
            "update" => Ok(Self::Update),
            "delete" => Ok(Self::Delete),
            _ => Err(ParsePendingStatusError(s.to_string())),
        }
    }
}

/// Error returned when parsing an unknown pending status label.
#[derive(Debug, Clone, Error)]
#[error("unknown pending status: {0}")]
pub struct ParsePendingStatusError(pub String);

/// One rendering segment of an action's message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragment {
    /// Plain-text form of the segment.
    pub text: String,
    /// Rendered HTML form of the segment. An empty string marks removed
    /// content.
    pub html: String,
}

/// One action in a report's feed.
///
/// Actions are immutable once confirmed; only locally pending actions
/// (those with a `pending_status`) may still change. The feed engine never
/// mutates actions, it only re-orders and filters them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportAction {
    /// Unique ID assigned by the store, as a base-10 integer string.
    ///
    /// Ids are wider than 64-bit float precision; compare them as integers
    /// or length-then-lexicographic strings, never through a float.
    pub report_action_id: String,
    /// Creation timestamp, `YYYY-MM-DD HH:mm:ss.mmm`. The fixed width makes
    /// lexicographic order equal chronological order.
    pub created: String,
    /// Semantic class of the action.
    pub kind: ActionKind,
    /// Rendering segments. A comment whose content is gone has no segments
    /// or a first segment with empty html.
    pub message: Vec<Fragment>,
    /// Pending-write marker; `None` means the store has confirmed the
    /// action.
    pub pending_status: Option<PendingStatus>,
    /// Account IDs the action is privately visible to. Empty means visible
    /// to all participants.
    pub whispered_to: Vec<i64>,
}

impl ReportAction {
    /// Returns true if this is the report's origin action.
    pub fn is_origin(&self) -> bool {
        self.kind == ActionKind::Created
    }

    /// Returns true if the action is restricted to a recipient subset.
    pub fn is_whisper(&self) -> bool {
        !self.whispered_to.is_empty()
    }

    /// Returns true if the action's rendered content is empty.
    pub fn has_blank_message(&self) -> bool {
        self.message.first().map_or(true, |f| f.html.is_empty())
    }

    /// Returns true if the action has an unconfirmed local effect.
    pub fn is_pending(&self) -> bool {
        self.pending_status.is_some()
    }
}
