//! Unit tests for ordering, classification, timestamps, and integrity
//! counters.

use chrono::{Duration, TimeZone, Utc};
use parley_types::{ActionKind, Fragment, PendingStatus, ReportAction};

use crate::classify::{is_actionable_whisper, is_deleted_comment, visibility_class, VisibilityClass};
use crate::project::display_actions;
use crate::sequence::sorted_actions;
use crate::timestamp::{format_feed_timestamp, parse_feed_timestamp};
use crate::{integrity, FeedError};

fn action(kind: ActionKind, id: &str, created: &str) -> ReportAction {
    ReportAction {
        report_action_id: id.to_string(),
        created: created.to_string(),
        kind,
        message: vec![Fragment {
            text: "Hello world".to_string(),
            html: "<p>Hello world</p>".to_string(),
        }],
        pending_status: None,
        whispered_to: Vec::new(),
    }
}

fn comment(id: &str, created: &str) -> ReportAction {
    action(ActionKind::Comment, id, created)
}

fn ids(actions: &[ReportAction]) -> Vec<&str> {
    actions.iter().map(|a| a.report_action_id.as_str()).collect()
}

// ── Canonical sequencer ──────────────────────────────────────────────

#[test]
fn big_ids_sort_with_integer_semantics() {
    // All three share one millisecond; the ids are wider than f64 mantissa
    // precision, so a float comparison would mis-order them.
    let actions = vec![
        comment("2962390724708756", "2022-11-09 22:26:48.789"),
        comment("1609646094152486", "2022-11-09 22:26:48.789"),
        comment("1661970171066218", "2022-11-09 22:26:48.789"),
    ];

    let ascending = sorted_actions(&actions, false);
    assert_eq!(
        ids(&ascending),
        vec!["1609646094152486", "1661970171066218", "2962390724708756"]
    );
}

#[test]
fn origin_wins_same_timestamp_tie() {
    let actions = vec![
        comment("3", "2023-01-10 22:25:47.132"),
        action(ActionKind::Created, "2", "2023-01-10 22:25:47.132"),
        comment("1", "2023-01-10 22:25:47.132"),
    ];

    let ascending = sorted_actions(&actions, false);
    assert_eq!(ids(&ascending), vec!["2", "1", "3"]);
}

#[test]
fn descending_is_reverse_of_ascending() {
    let actions = vec![
        comment("8401445780099176", "2022-11-09 22:27:01.825"),
        action(ActionKind::Created, "2", "2022-11-09 22:26:48.789"),
        comment("2962390724708756", "2022-11-09 22:26:48.789"),
        comment("1609646094152486", "2022-11-09 22:26:48.789"),
    ];

    let ascending = sorted_actions(&actions, false);
    let mut mirrored = sorted_actions(&actions, true);
    mirrored.reverse();
    assert_eq!(ascending, mirrored);

    // Ties mirror with the whole sequence: origin last, ids descending.
    let descending = sorted_actions(&actions, true);
    assert_eq!(
        ids(&descending),
        vec![
            "8401445780099176",
            "2962390724708756",
            "1609646094152486",
            "2"
        ]
    );
}

#[test]
fn order_is_deterministic_for_any_input_permutation() {
    let base = vec![
        comment("2962390724708756", "2022-11-09 22:26:48.789"),
        comment("1609646094152486", "2022-11-09 22:26:48.789"),
        action(ActionKind::Created, "1661970171066218", "2022-11-09 22:26:48.789"),
        comment("8401445780099176", "2022-11-09 22:27:01.825"),
    ];
    let expected = sorted_actions(&base, false);

    for rotation in 0..base.len() {
        let mut permuted = base.clone();
        permuted.rotate_left(rotation);
        assert_eq!(sorted_actions(&permuted, false), expected);

        permuted.reverse();
        assert_eq!(sorted_actions(&permuted, false), expected);
    }
}

#[test]
fn malformed_id_gets_best_effort_position_without_crashing() {
    let actions = vec![
        comment("not-an-id", "2022-11-09 22:26:48.789"),
        comment("7", "2022-11-09 22:26:48.789"),
        comment("12", "2022-11-09 22:26:48.789"),
    ];

    // Length-then-lexicographic fallback: "7" < "12" keeps integer order
    // for the well-formed pair; the malformed id lands after both.
    let ascending = sorted_actions(&actions, false);
    assert_eq!(ids(&ascending), vec!["7", "12", "not-an-id"]);
}

#[test]
fn malformed_timestamp_is_compared_as_opaque_string() {
    let actions = vec![
        comment("2", "garbage"),
        comment("1", "2022-11-09 22:26:48.789"),
    ];

    // "2022-…" < "garbage" lexicographically; both actions survive.
    let ascending = sorted_actions(&actions, false);
    assert_eq!(ids(&ascending), vec!["1", "2"]);
}

#[test]
fn stable_sort_keeps_input_order_on_full_tie() {
    // Duplicate ids violate the store's invariant; the sort must still not
    // reorder them relative to each other.
    let mut first = comment("5", "2022-11-09 22:26:48.789");
    first.whispered_to = vec![1];
    let second = comment("5", "2022-11-09 22:26:48.789");

    let ascending = sorted_actions(&[first.clone(), second.clone()], false);
    assert_eq!(ascending, vec![first, second]);
}

// ── Classification table ─────────────────────────────────────────────

#[test]
fn classification_table() {
    let cases = [
        (ActionKind::Closed, VisibilityClass::AlwaysHidden),
        (ActionKind::ActionableJoinRequest, VisibilityClass::WriteGated),
        (ActionKind::ActionableMentionWhisper, VisibilityClass::WriteGated),
        (
            ActionKind::ActionableReportMentionWhisper,
            VisibilityClass::WriteGated,
        ),
        (ActionKind::Comment, VisibilityClass::ContentGated),
        (ActionKind::Created, VisibilityClass::Ordinary),
        (ActionKind::Renamed, VisibilityClass::Ordinary),
        (ActionKind::Payment, VisibilityClass::Ordinary),
        (ActionKind::ReimbursementQueued, VisibilityClass::Ordinary),
        (ActionKind::FieldUpdated, VisibilityClass::Ordinary),
        (ActionKind::TaskEdited, VisibilityClass::Ordinary),
    ];

    for (kind, expected) in cases {
        assert_eq!(visibility_class(kind), expected, "kind {kind}");
    }
}

#[test]
fn actionable_whisper_detection() {
    let whisper = action(
        ActionKind::ActionableMentionWhisper,
        "1",
        "2022-11-09 22:26:48.789",
    );
    assert!(is_actionable_whisper(&whisper));
    assert!(!is_actionable_whisper(&comment("2", "2022-11-09 22:26:48.789")));
}

#[test]
fn deleted_comment_requires_confirmed_removal() {
    let mut deleted = comment("1", "2022-11-09 22:26:48.789");
    deleted.message = vec![Fragment {
        text: String::new(),
        html: String::new(),
    }];
    assert!(is_deleted_comment(&deleted));

    let mut pending = deleted.clone();
    pending.pending_status = Some(PendingStatus::Delete);
    assert!(!is_deleted_comment(&pending));

    // An empty non-comment is not a deleted comment.
    let mut renamed = action(ActionKind::Renamed, "2", "2022-11-09 22:26:48.789");
    renamed.message = Vec::new();
    assert!(!is_deleted_comment(&renamed));
}

// ── Timestamp helpers ────────────────────────────────────────────────

#[test]
fn timestamp_formats_to_canonical_shape() {
    let at = Utc.with_ymd_and_hms(2022, 11, 9, 22, 26, 48).unwrap() + Duration::milliseconds(789);
    assert_eq!(format_feed_timestamp(at), "2022-11-09 22:26:48.789");
}

#[test]
fn timestamp_round_trips() {
    let at = Utc.with_ymd_and_hms(2024, 11, 19, 8, 4, 13).unwrap() + Duration::milliseconds(728);
    let formatted = format_feed_timestamp(at);
    let parsed = parse_feed_timestamp(&formatted).expect("canonical timestamp should parse");
    assert_eq!(parsed, at.naive_utc());
}

#[test]
fn timestamp_order_matches_string_order() {
    let earlier = Utc.with_ymd_and_hms(2022, 11, 9, 22, 26, 48).unwrap() + Duration::milliseconds(789);
    let later = earlier + Duration::milliseconds(1);
    assert!(format_feed_timestamp(earlier) < format_feed_timestamp(later));
}

#[test]
fn timestamp_rejects_malformed_input() {
    let err = parse_feed_timestamp("not a timestamp").unwrap_err();
    match err {
        FeedError::BadTimestamp(value) => assert_eq!(value, "not a timestamp"),
    }
    assert!(parse_feed_timestamp("").is_err());
    assert!(parse_feed_timestamp("2022-11-09").is_err());
}

// ── Integrity counters ───────────────────────────────────────────────

#[test]
fn duplicate_origins_are_counted_and_first_is_anchored() {
    let actions = vec![
        action(ActionKind::Created, "2", "2023-01-10 22:25:47.132"),
        action(ActionKind::Created, "9", "2023-01-10 22:25:49.000"),
        comment("5", "2023-01-10 22:25:48.000"),
    ];

    let before = integrity::duplicate_origin_total();
    let feed = display_actions(&actions, true);
    let after = integrity::duplicate_origin_total();

    assert!(after > before, "duplicate origin should be counted");

    // Descending order is [9, 5, 2]; the first origin encountered (id 9)
    // is anchored last, the duplicate keeps its sequencer position.
    assert_eq!(ids(&feed), vec!["5", "2", "9"]);
}
