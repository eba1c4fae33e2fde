/// Maximum length of a goal title.
pub const GOAL_TITLE_MAX_LEN: usize = 200;

/// Maximum length of a measurement unit label (e.g. "lbs", "pages").
pub const GOAL_UNIT_MAX_LEN: usize = 32;

/// Timezone used to derive "today" when none is configured.
pub const DEFAULT_EVALUATION_TZ: chrono_tz::Tz = chrono_tz::UTC;
