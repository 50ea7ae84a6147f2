use std::time::Duration;

/// UTC offset every wall-clock decision is made in (+07:00, no DST)
pub const ANCHOR_UTC_OFFSET_SECS: i32 = 7 * 3600;

/// Label appended to rendered times
pub const ANCHOR_TZ_LABEL: &str = "WIB";

/// The reminder loop wakes this many seconds past every minute boundary
pub const TICK_OFFSET_SECS: i64 = 1;

/// Upper bound for a single Discord send issued by the reminder sink
pub const SEND_TIMEOUT: Duration = Duration::from_secs(10);

/// Holiday greetings go out at 07:00
pub const HOLIDAY_HOUR: u32 = 7;
pub const HOLIDAY_MINUTE: u32 = 0;

/// Minutes between the sahoor call and imsak
pub const IMSAK_OFFSET_MINUTES: i64 = 30;

/// Number of upcoming holidays shown by `/reminder view`
pub const UPCOMING_HOLIDAY_LIMIT: usize = 5;

/// Languages picked from when a guild has no language configured
pub const ROTATION_LANGUAGES: [&str; 3] = ["ID", "JP", "KR"];

/// Log directive for the application
pub const LOG_DIRECTIVE: &str = "reminder_bot=info";
