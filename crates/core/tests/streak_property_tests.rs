//! Property-based integration tests for the streak and progress engine.
//!
//! These tests verify that universal properties hold across all valid inputs,
//! using the `proptest` crate for random test case generation.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use streakwise_core::completions::GoalCompletion;
use streakwise_core::progress::{
    calculate_streaks, current_streak, distinct_completion_dates, longest_streak,
    value_progress_percent,
};

// =============================================================================
// Generators
// =============================================================================

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

/// Day offsets from the base date, duplicates allowed.
fn arb_offsets(max_count: usize) -> impl Strategy<Value = Vec<i64>> {
    proptest::collection::vec(0i64..120, 0..=max_count)
}

fn completions_for(offsets: &[i64]) -> Vec<GoalCompletion> {
    let base = base_date();
    offsets
        .iter()
        .enumerate()
        .map(|(i, offset)| {
            let date = base + Duration::days(*offset);
            GoalCompletion {
                id: format!("c{}", i),
                goal_id: "g1".to_string(),
                user_id: "u1".to_string(),
                completed_date: date,
                value: None,
                completed_at: date.and_hms_opt(12, 0, 0).unwrap(),
            }
        })
        .collect()
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The current run is always one of the runs in the history.
    #[test]
    fn prop_current_never_exceeds_longest(
        offsets in arb_offsets(60),
        today_offset in 0i64..130,
    ) {
        let today = base_date() + Duration::days(today_offset);
        let summary = calculate_streaks(&completions_for(&offsets), today);
        prop_assert!(summary.current_streak <= summary.longest_streak);
    }

    /// Logging the same day twice never changes either streak.
    #[test]
    fn prop_duplicates_do_not_change_streaks(
        offsets in arb_offsets(40),
        today_offset in 0i64..130,
    ) {
        let today = base_date() + Duration::days(today_offset);
        let once = calculate_streaks(&completions_for(&offsets), today);

        let mut doubled = offsets.clone();
        doubled.extend(offsets.iter().copied());
        let twice = calculate_streaks(&completions_for(&doubled), today);

        prop_assert_eq!(once, twice);
    }

    /// A latest completion more than a day before today means no current streak.
    #[test]
    fn prop_gap_breaks_current_streak(
        offsets in arb_offsets(40),
        gap in 2i64..30,
    ) {
        let dates = distinct_completion_dates(&completions_for(&offsets));
        let latest = dates.iter().next_back().copied().unwrap_or_else(base_date);
        let today = latest + Duration::days(gap);
        prop_assert_eq!(current_streak(&dates, today), 0);
    }

    /// A completion dated after today means no current streak.
    #[test]
    fn prop_future_latest_date_has_no_current_streak(
        offsets in arb_offsets(40),
        today_offset in 0i64..120,
        ahead in 1i64..30,
    ) {
        let today = base_date() + Duration::days(today_offset);
        let mut dates = distinct_completion_dates(&completions_for(&offsets));
        dates.insert(today + Duration::days(ahead));
        prop_assert_eq!(current_streak(&dates, today), 0);
    }

    /// Longest streak is bounded by the number of distinct days.
    #[test]
    fn prop_longest_bounded_by_distinct_days(offsets in arb_offsets(60)) {
        let dates = distinct_completion_dates(&completions_for(&offsets));
        let longest = longest_streak(&dates) as usize;
        prop_assert!(longest <= dates.len());
        prop_assert_eq!(longest == 0, dates.is_empty());
    }

    /// Value progress is always a whole percentage in range.
    #[test]
    fn prop_value_progress_in_range(
        starting in -1.0e6f64..1.0e6,
        target in -1.0e6f64..1.0e6,
        current in -2.0e6f64..2.0e6,
    ) {
        let pct = value_progress_percent(starting, target, current);
        prop_assert!(pct <= 100);
    }

    /// Reaching or passing the target reports 100, in either direction.
    #[test]
    fn prop_value_progress_complete_at_target(
        starting in -1.0e6f64..1.0e6,
        delta in 1.0f64..1.0e5,
        overshoot in 0.0f64..1.0e5,
        decreasing in any::<bool>(),
    ) {
        let (target, current) = if decreasing {
            (starting - delta, starting - delta - overshoot)
        } else {
            (starting + delta, starting + delta + overshoot)
        };
        prop_assert_eq!(value_progress_percent(starting, target, current), 100);
    }
}
