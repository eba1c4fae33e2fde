use chrono::NaiveDate;
use std::collections::BTreeSet;

use super::progress_model::StreakSummary;
use crate::completions::GoalCompletion;
use crate::utils::time_utils::days_between;

/// Distinct completion dates. Several completions on one day count once.
pub fn distinct_completion_dates(completions: &[GoalCompletion]) -> BTreeSet<NaiveDate> {
    completions.iter().map(|c| c.completed_date).collect()
}

/// Length of the run of consecutive days ending today or yesterday.
///
/// The run is anchored on the latest completion date. Unless that date is
/// today or yesterday the result is 0, including when it lies after `today`.
pub fn current_streak(dates: &BTreeSet<NaiveDate>, today: NaiveDate) -> u32 {
    let Some(&anchor) = dates.iter().next_back() else {
        return 0;
    };
    if !matches!(days_between(anchor, today), 0 | 1) {
        return 0;
    }

    let mut streak = 1;
    let mut cursor = anchor;
    while let Some(previous) = cursor.pred_opt() {
        if !dates.contains(&previous) {
            break;
        }
        streak += 1;
        cursor = previous;
    }
    streak
}

/// Longest run of consecutive days anywhere in the history.
pub fn longest_streak(dates: &BTreeSet<NaiveDate>) -> u32 {
    let mut longest = 0;
    let mut run = 0;
    let mut previous: Option<NaiveDate> = None;

    for &date in dates {
        run = match previous {
            Some(prev) if days_between(prev, date) == 1 => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        previous = Some(date);
    }
    longest
}

pub fn calculate_streaks(completions: &[GoalCompletion], today: NaiveDate) -> StreakSummary {
    let dates = distinct_completion_dates(completions);
    StreakSummary {
        current_streak: current_streak(&dates, today),
        longest_streak: longest_streak(&dates),
    }
}
