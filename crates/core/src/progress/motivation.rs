use serde::{Deserialize, Serialize};

/// Which rule produced a motivational message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotivationTier {
    StreakMonth,
    StreakFortnight,
    StreakWeek,
    StreakHot,
    StreakStarted,
    BusyDay,
    ProductiveDay,
    CompletedToday,
    ReadyToStart,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MotivationalMessage {
    pub tier: MotivationTier,
    pub message: String,
}

const DEFAULT_NAME: &str = "Champion";

/// Picks an encouragement for the dashboard.
///
/// Streak tiers win over same-day completion tiers.
pub fn motivational_message(
    best_streak: u32,
    completions_today: u32,
    name: Option<&str>,
) -> MotivationalMessage {
    let (tier, message) = match (best_streak, completions_today) {
        (s, _) if s >= 30 => (
            MotivationTier::StreakMonth,
            format!("Incredible! {} days strong! You're unstoppable!", s),
        ),
        (s, _) if s >= 14 => (
            MotivationTier::StreakFortnight,
            format!("Amazing {}-day streak! Keep the momentum going!", s),
        ),
        (s, _) if s >= 7 => (
            MotivationTier::StreakWeek,
            "One week strong! You're building something great!".to_string(),
        ),
        (s, _) if s >= 3 => (
            MotivationTier::StreakHot,
            format!("{} days in a row! You're on fire!", s),
        ),
        (s, _) if s >= 1 => (
            MotivationTier::StreakStarted,
            format!("Great start! Day {} of your journey!", s),
        ),
        (_, c) if c >= 5 => (
            MotivationTier::BusyDay,
            format!("Wow! {} goals completed today! You're crushing it!", c),
        ),
        (_, c) if c >= 3 => (
            MotivationTier::ProductiveDay,
            "Three goals down! You're having an amazing day!".to_string(),
        ),
        (_, c) if c >= 1 => (
            MotivationTier::CompletedToday,
            "Great job completing a goal today!".to_string(),
        ),
        _ => {
            let name = name
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .unwrap_or(DEFAULT_NAME);
            (
                MotivationTier::ReadyToStart,
                format!("Ready to make today count, {}?", name),
            )
        }
    };

    MotivationalMessage { tier, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_streak_tiers_take_priority() {
        assert_eq!(
            motivational_message(30, 10, None).tier,
            MotivationTier::StreakMonth
        );
        assert_eq!(
            motivational_message(14, 0, None).tier,
            MotivationTier::StreakFortnight
        );
        assert_eq!(
            motivational_message(7, 0, None).tier,
            MotivationTier::StreakWeek
        );
        assert_eq!(
            motivational_message(3, 0, None).message,
            "3 days in a row! You're on fire!"
        );
        assert_eq!(
            motivational_message(1, 6, None).tier,
            MotivationTier::StreakStarted
        );
    }

    #[test]
    fn test_completion_tiers_without_streak() {
        assert_eq!(motivational_message(0, 5, None).tier, MotivationTier::BusyDay);
        assert_eq!(
            motivational_message(0, 3, None).tier,
            MotivationTier::ProductiveDay
        );
        assert_eq!(
            motivational_message(0, 1, None).tier,
            MotivationTier::CompletedToday
        );
    }

    #[test]
    fn test_idle_message_uses_name() {
        assert_eq!(
            motivational_message(0, 0, Some("Ada")).message,
            "Ready to make today count, Ada?"
        );
        assert_eq!(
            motivational_message(0, 0, Some(" ")).message,
            "Ready to make today count, Champion?"
        );
    }
}
