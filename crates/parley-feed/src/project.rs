//! Display projection: visibility filtering, newest-first ordering, and
//! origin anchoring.

use parley_types::ReportAction;

use crate::classify::{is_deleted_comment, visibility_class, VisibilityClass};
use crate::integrity;
use crate::sequence::sorted_actions;

/// Returns true if the action should appear in the rendered feed.
fn is_visible(action: &ReportAction, can_perform_write_action: bool) -> bool {
    match visibility_class(action.kind) {
        VisibilityClass::AlwaysHidden => false,
        VisibilityClass::WriteGated => can_perform_write_action,
        VisibilityClass::ContentGated => !is_deleted_comment(action),
        VisibilityClass::Ordinary => true,
    }
}

/// Returns the actions to render, newest first.
///
/// Three steps:
///
/// 1. Drop actions that must never be user-visible: `CLOSED` markers,
///    actionable whispers once the room stopped accepting writes, and
///    confirmed-deleted comments.
/// 2. Order the survivors with the canonical sequencer, descending.
/// 3. If an origin action survived, move it to the end of the sequence
///    unconditionally. The origin marks the report's conceptual beginning;
///    timestamp noise from clock skew or backfilled history must not let it
///    interleave with later actions. Every other survivor keeps its step-2
///    position.
///
/// The output is always a subset of the input: nothing is synthesised and
/// no action is mutated.
pub fn display_actions(
    actions: &[ReportAction],
    can_perform_write_action: bool,
) -> Vec<ReportAction> {
    let visible: Vec<ReportAction> = actions
        .iter()
        .filter(|a| is_visible(a, can_perform_write_action))
        .cloned()
        .collect();

    let mut ordered = sorted_actions(&visible, true);

    if ordered.iter().filter(|a| a.is_origin()).count() > 1 {
        integrity::record_duplicate_origins(&ordered);
    }

    // Anchor the first origin encountered; duplicates (a data-integrity
    // violation recorded above, never auto-corrected) stay where the
    // sequencer put them.
    if let Some(idx) = ordered.iter().position(ReportAction::is_origin) {
        let origin = ordered.remove(idx);
        ordered.push(origin);
    }

    ordered
}

/// Returns the newest action the user can currently see, if any.
///
/// Thread-list surfaces use this to preview a report without projecting
/// the whole feed themselves.
pub fn last_visible_action(
    actions: &[ReportAction],
    can_perform_write_action: bool,
) -> Option<ReportAction> {
    display_actions(actions, can_perform_write_action)
        .into_iter()
        .next()
}
