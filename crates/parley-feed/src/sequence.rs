//! Canonical total ordering over report actions.
//!
//! The order is `(created, origin-first, id)`. Store-assigned ids are
//! unique within a report, so the comparator is a total order and the sort
//! is deterministic for any permutation of the same input. Ids are assigned
//! monotonically by the store but are *not* monotonic with `created` under
//! optimistic submission, so id order is only ever a same-timestamp
//! tie-break.

use std::cmp::Ordering;

use parley_types::ReportAction;

/// Compares two report action ids with exact integer semantics.
///
/// Ids are base-10 strings that can exceed 64-bit float precision, so they
/// must never round-trip through a float. Well-formed ids parse as `u128`;
/// anything else falls back to length-then-lexicographic comparison, which
/// matches integer order for well-formed ids and gives a malformed id a
/// stable best-effort position without disturbing its neighbours.
fn compare_ids(a: &str, b: &str) -> Ordering {
    if let (Ok(x), Ok(y)) = (a.parse::<u128>(), b.parse::<u128>()) {
        return x.cmp(&y);
    }
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Comparator defining the canonical ascending order.
fn compare_actions(a: &ReportAction, b: &ReportAction) -> Ordering {
    // `created` is fixed-width, so lexicographic equals chronological.
    if a.created != b.created {
        return a.created.cmp(&b.created);
    }

    // Same-millisecond tie: the origin action is conceptually the report's
    // earliest action even when clock skew makes its timestamp collide with
    // another action's.
    if a.is_origin() != b.is_origin() {
        return if a.is_origin() {
            Ordering::Less
        } else {
            Ordering::Greater
        };
    }

    compare_ids(&a.report_action_id, &b.report_action_id)
}

/// Returns the actions in canonical order.
///
/// Ascending order sorts by `created`, breaks same-timestamp ties in favour
/// of the origin action, then by id. Descending order is the exact reverse
/// of the ascending result — not an independently negated comparator — so
/// same-timestamp ties mirror too (origin last, ids descending), which
/// callers depend on.
///
/// The sort is stable: a tie the comparator cannot resolve (which unique
/// ids rule out for well-formed input) keeps the input's relative order.
pub fn sorted_actions(actions: &[ReportAction], descending: bool) -> Vec<ReportAction> {
    let mut ordered = actions.to_vec();
    ordered.sort_by(compare_actions);
    if descending {
        ordered.reverse();
    }
    ordered
}
