use chrono::NaiveDate;

use super::progress_model::GoalProgress;
use crate::completions::GoalCompletion;
use crate::goals::Goal;

/// Percentage of the way from `starting` to `target`, clamped to `0..=100`
/// and rounded to the nearest whole number.
///
/// Works for both directions: a goal whose target is below its start
/// (e.g. weight loss) progresses as the value decreases. An empty range or
/// non-finite input yields 0.
pub fn value_progress_percent(starting: f64, target: f64, current: f64) -> u8 {
    if !(starting.is_finite() && target.is_finite() && current.is_finite()) {
        return 0;
    }
    if starting == target {
        return 0;
    }

    let ratio = if starting > target {
        (starting - current) / (starting - target)
    } else {
        (current - starting) / (target - starting)
    };

    (ratio * 100.0).clamp(0.0, 100.0).round() as u8
}

/// Value of the most recent completion that carries one.
///
/// "Most recent" orders by `completed_date`, then by `completed_at`.
pub fn latest_value(completions: &[GoalCompletion]) -> Option<f64> {
    completions
        .iter()
        .filter(|c| c.value.is_some())
        .max_by(|a, b| {
            (a.completed_date, a.completed_at).cmp(&(b.completed_date, b.completed_at))
        })
        .and_then(|c| c.value)
}

/// Progress of `goal` as of `today`.
///
/// Value-tracked goals measure the latest logged value against their range,
/// defaulting to the starting value before anything is logged. Every other
/// goal is a daily check-off: 100 when completed today, otherwise 0.
pub fn calculate_progress(
    goal: &Goal,
    completions: &[GoalCompletion],
    today: NaiveDate,
) -> GoalProgress {
    let completion_count = u32::try_from(completions.len()).unwrap_or(u32::MAX);

    if let Some(tracking) = goal.value_tracking() {
        let current = latest_value(completions).unwrap_or(tracking.starting_value);
        return GoalProgress {
            completion_count,
            progress: value_progress_percent(
                tracking.starting_value,
                tracking.target_value,
                current,
            ),
            current_value: Some(current),
            starting_value: Some(tracking.starting_value),
            target_value: Some(tracking.target_value),
            unit: Some(tracking.unit.to_string()),
        };
    }

    let done_today = completions.iter().any(|c| c.completed_date == today);
    GoalProgress {
        completion_count,
        progress: if done_today { 100 } else { 0 },
        current_value: None,
        starting_value: goal.starting_value,
        target_value: goal.target_value,
        unit: goal.unit.clone(),
    }
}
