//! Process-wide counters for data-integrity violations observed by the
//! feed engine.
//!
//! The engine never auto-corrects malformed report data; it records the
//! violation here and carries on with best-effort output. Counters are
//! monotonic and cheap to read from a health or stats surface.

use std::sync::atomic::{AtomicU64, Ordering};

use parley_types::ReportAction;

static DUPLICATE_ORIGIN: AtomicU64 = AtomicU64::new(0);

/// Total number of projections that saw more than one origin action in a
/// single report snapshot.
pub fn duplicate_origin_total() -> u64 {
    DUPLICATE_ORIGIN.load(Ordering::Relaxed)
}

/// Records a report snapshot containing more than one origin action.
pub(crate) fn record_duplicate_origins(actions: &[ReportAction]) {
    DUPLICATE_ORIGIN.fetch_add(1, Ordering::Relaxed);
    let origin_ids: Vec<&str> = actions
        .iter()
        .filter(|a| a.is_origin())
        .map(|a| a.report_action_id.as_str())
        .collect();
    tracing::warn!(?origin_ids, "report contains more than one origin action");
}
