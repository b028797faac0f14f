//! Tests for the duplicate filter.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use herald_types::Priority;

use super::filter::DuplicateFilter;

fn t0() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn primed_filter(text: &str, priority: Priority) -> DuplicateFilter {
    let mut filter = DuplicateFilter::new(500);
    filter.record(text.to_string(), priority, t0());
    filter
}

#[test]
fn test_identical_text_inside_window_is_suppressed() {
    let filter = primed_filter("Turn 3. Your turn", Priority::Normal);
    let at = t0() + Duration::milliseconds(100);
    assert!(filter.should_suppress("Turn 3. Your turn", Priority::Normal, at));
}

#[test]
fn test_high_priority_bypasses_suppression() {
    let filter = primed_filter("Turn 3. Your turn", Priority::Normal);
    let at = t0() + Duration::milliseconds(100);
    assert!(!filter.should_suppress("Turn 3. Your turn", Priority::High, at));
    assert!(!filter.should_suppress("Turn 3. Your turn", Priority::Immediate, at));
}

#[test]
fn test_expired_window_is_not_suppressed() {
    let filter = primed_filter("Turn 3. Your turn", Priority::Normal);
    let at = t0() + Duration::milliseconds(600);
    assert!(!filter.should_suppress("Turn 3. Your turn", Priority::Normal, at));
}

#[test]
fn test_different_text_is_not_suppressed() {
    let filter = primed_filter("Turn 3. Your turn", Priority::Normal);
    let at = t0() + Duration::milliseconds(100);
    assert!(!filter.should_suppress("Turn 4. Opponent's turn", Priority::Normal, at));
}

#[test]
fn test_empty_filter_suppresses_nothing() {
    let filter = DuplicateFilter::new(500);
    assert!(!filter.should_suppress("Drew 1 card", Priority::Low, t0()));
}

#[test]
fn test_admit_updates_last_record() {
    let mut filter = DuplicateFilter::new(500);

    let first = filter.admit("Drew 1 card".to_string(), Priority::Normal, t0());
    assert!(first.is_some());

    // Same text right away: gone.
    let again = filter.admit(
        "Drew 1 card".to_string(),
        Priority::Normal,
        t0() + Duration::milliseconds(50),
    );
    assert!(again.is_none());

    // An admitted emission becomes the new reference point.
    let later = filter.admit(
        "Drew 1 card".to_string(),
        Priority::Normal,
        t0() + Duration::milliseconds(600),
    );
    assert!(later.is_some());
    assert_eq!(
        filter.last().map(|r| r.timestamp),
        Some(t0() + Duration::milliseconds(600))
    );
}

#[test]
fn test_suppressed_candidate_does_not_refresh_window() {
    let mut filter = DuplicateFilter::new(500);
    filter.admit("Spell resolved".to_string(), Priority::Normal, t0());

    // Suppressed at +400ms; the record still dates from t0, so +550ms
    // is past the window.
    assert!(
        filter
            .admit(
                "Spell resolved".to_string(),
                Priority::Normal,
                t0() + Duration::milliseconds(400)
            )
            .is_none()
    );
    assert!(
        filter
            .admit(
                "Spell resolved".to_string(),
                Priority::Normal,
                t0() + Duration::milliseconds(550)
            )
            .is_some()
    );
}

#[test]
fn test_custom_window_length() {
    let mut filter = DuplicateFilter::new(100);
    filter.admit("Card exiled".to_string(), Priority::Normal, t0());
    assert!(
        filter
            .admit(
                "Card exiled".to_string(),
                Priority::Normal,
                t0() + Duration::milliseconds(150)
            )
            .is_some()
    );
}

#[test]
fn test_reset_forgets_last_record() {
    let mut filter = primed_filter("Victory!", Priority::Immediate);
    filter.reset();
    assert!(filter.last().is_none());
}
