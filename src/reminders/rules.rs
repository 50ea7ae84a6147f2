/// Rule evaluators: pure functions from the anchor-local wall clock to the
/// reminders that should fire during that minute
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday};
use std::fmt;

use super::calendar::{Holiday, holidays_on, is_holiday, ramadan_entry};
use super::locale::Locale;
use crate::constants::{ANCHOR_TZ_LABEL, HOLIDAY_HOUR, HOLIDAY_MINUTE, IMSAK_OFFSET_MINUTES};
use crate::utils::datetime::format_hm;

/// Identifies a reminder within a calendar day
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ReminderKey {
    Holiday(String),
    Sahoor,
    Iftar,
    WorkStart,
    WorkEnd,
}

impl fmt::Display for ReminderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReminderKey::Holiday(name) => write!(f, "holiday-{}", name),
            ReminderKey::Sahoor => f.write_str("sahoor"),
            ReminderKey::Iftar => f.write_str("iftar"),
            ReminderKey::WorkStart => f.write_str("work-start"),
            ReminderKey::WorkEnd => f.write_str("work-end"),
        }
    }
}

/// Start and end of the working day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkHours {
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub ramadan: bool,
}

impl WorkHours {
    pub fn for_ramadan(ramadan: bool) -> Self {
        let (start, end) = if ramadan {
            (hm(8, 0), hm(16, 0))
        } else {
            (hm(9, 0), hm(17, 30))
        };
        Self { start, end, ramadan }
    }
}

/// A reminder that is due, carrying whatever its message needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reminder {
    Holiday { name: &'static str },
    Sahoor { sahoor: NaiveTime },
    Iftar { iftar: NaiveTime },
    WorkStart(WorkHours),
    WorkEnd(WorkHours),
}

impl Reminder {
    pub fn key(&self) -> ReminderKey {
        match self {
            Reminder::Holiday { name } => ReminderKey::Holiday((*name).to_string()),
            Reminder::Sahoor { .. } => ReminderKey::Sahoor,
            Reminder::Iftar { .. } => ReminderKey::Iftar,
            Reminder::WorkStart(_) => ReminderKey::WorkStart,
            Reminder::WorkEnd(_) => ReminderKey::WorkEnd,
        }
    }

    /// Render the message text in the given locale
    pub fn render(&self, locale: &Locale) -> String {
        match self {
            Reminder::Holiday { name } => format!(
                "@everyone — Happy {}! 🇮🇩 Enjoy the holiday and stay safe.",
                name
            ),
            Reminder::Sahoor { sahoor } => {
                let imsak = *sahoor + Duration::minutes(IMSAK_OFFSET_MINUTES);
                format!(
                    "{}\n{}",
                    locale.sahoor_label,
                    locale.sahoor_note.replace("{imsak}", &wib(imsak))
                )
            }
            Reminder::Iftar { iftar } => format!(
                "{}\n{}",
                locale.iftar_label,
                locale.iftar_note.replace("{time}", &wib(*iftar))
            ),
            Reminder::WorkStart(hours) => format!("🏢 {}", work_body(locale, hours)),
            Reminder::WorkEnd(hours) => format!("🏠 {}", work_body(locale, hours)),
        }
    }
}

fn work_body(locale: &Locale, hours: &WorkHours) -> String {
    let body = if hours.ramadan {
        locale.work_ramadan_body
    } else {
        locale.work_body
    };
    body.replace("{start}", &wib(hours.start))
        .replace("{end}", &wib(hours.end))
}

fn wib(time: NaiveTime) -> String {
    format!("{} {}", format_hm(time), ANCHOR_TZ_LABEL)
}

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}

/// True when both times fall within the same minute
fn same_minute(a: NaiveTime, b: NaiveTime) -> bool {
    a.hour() == b.hour() && a.minute() == b.minute()
}

/// Holiday greetings due at `now`
pub fn holiday_reminders(now: NaiveDateTime) -> Vec<Reminder> {
    holiday_reminders_in(&holidays_on(now.date()), now)
}

/// One greeting per holiday in `holidays` that falls on `now`'s date, at 07:00
pub fn holiday_reminders_in(holidays: &[Holiday], now: NaiveDateTime) -> Vec<Reminder> {
    if now.hour() != HOLIDAY_HOUR || now.minute() != HOLIDAY_MINUTE {
        return Vec::new();
    }

    holidays
        .iter()
        .filter(|holiday| holiday.falls_on(now.date()))
        .map(|holiday| Reminder::Holiday { name: holiday.name })
        .collect()
}

/// Sahoor and iftar calls due at `now`
pub fn ramadan_reminders(now: NaiveDateTime) -> Vec<Reminder> {
    let Some(entry) = ramadan_entry(now.date()) else {
        return Vec::new();
    };

    let mut due = Vec::new();
    if same_minute(now.time(), entry.sahoor) {
        due.push(Reminder::Sahoor {
            sahoor: entry.sahoor,
        });
    }
    if same_minute(now.time(), entry.iftar) {
        due.push(Reminder::Iftar { iftar: entry.iftar });
    }
    due
}

/// Working hours for a date, or `None` on weekends and holidays
pub fn work_hours_on(date: NaiveDate) -> Option<WorkHours> {
    if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) || is_holiday(date) {
        return None;
    }
    Some(WorkHours::for_ramadan(ramadan_entry(date).is_some()))
}

/// Workday start/end reminders due at `now`
pub fn workday_reminders(now: NaiveDateTime) -> Vec<Reminder> {
    let Some(hours) = work_hours_on(now.date()) else {
        return Vec::new();
    };

    let mut due = Vec::new();
    if same_minute(now.time(), hours.start) {
        due.push(Reminder::WorkStart(hours));
    }
    if same_minute(now.time(), hours.end) {
        due.push(Reminder::WorkEnd(hours));
    }
    due
}

/// All reminders due at `now`, in firing order: holidays, Ramadan, workday
pub fn due_reminders(now: NaiveDateTime) -> Vec<Reminder> {
    let mut due = holiday_reminders(now);
    due.extend(ramadan_reminders(now));
    due.extend(workday_reminders(now));
    due
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reminders::calendar::{indonesian_holidays, ramadan_schedule};
    use crate::reminders::ledger::FiredLedger;
    use crate::reminders::locale::Language;

    fn at(y: i32, m: u32, d: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn keys(reminders: &[Reminder]) -> Vec<String> {
        reminders.iter().map(|r| r.key().to_string()).collect()
    }

    #[test]
    fn test_holidays_sharing_a_date_each_fire_under_their_own_key() {
        let day = NaiveDate::from_ymd_opt(2026, 3, 20).unwrap();
        let holidays = [
            Holiday {
                name: "Hari Raya Idul Fitri",
                date: day,
            },
            Holiday {
                name: "Hari Raya Nyepi",
                date: day,
            },
            Holiday {
                name: "Hari Raya Natal",
                date: NaiveDate::from_ymd_opt(2026, 12, 25).unwrap(),
            },
        ];

        let due = holiday_reminders_in(&holidays, at(2026, 3, 20, 7, 0));
        assert_eq!(
            due.iter().map(Reminder::key).collect::<Vec<_>>(),
            vec![
                ReminderKey::Holiday("Hari Raya Idul Fitri".into()),
                ReminderKey::Holiday("Hari Raya Nyepi".into()),
            ]
        );
        assert!(holiday_reminders_in(&holidays, at(2026, 3, 20, 7, 1)).is_empty());

        // A second evaluation in the same minute finds both keys already fired
        let mut ledger = FiredLedger::new();
        ledger.roll_over(day);
        for reminder in &due {
            assert!(ledger.mark(reminder.key()));
        }
        let again = holiday_reminders_in(&holidays, at(2026, 3, 20, 7, 0));
        assert!(again.iter().all(|reminder| !ledger.mark(reminder.key())));
    }

    #[test]
    fn test_key_encoding() {
        assert_eq!(
            ReminderKey::Holiday("Hari Raya Natal".into()).to_string(),
            "holiday-Hari Raya Natal"
        );
        assert_eq!(ReminderKey::Sahoor.to_string(), "sahoor");
        assert_eq!(ReminderKey::Iftar.to_string(), "iftar");
        assert_eq!(ReminderKey::WorkStart.to_string(), "work-start");
        assert_eq!(ReminderKey::WorkEnd.to_string(), "work-end");
    }

    #[test]
    fn test_every_holiday_fires_at_seven() {
        for year in [2025, 2026, 2027] {
            for holiday in indonesian_holidays(year) {
                let date = holiday.date;
                let seven = date.and_hms_opt(7, 0, 0).unwrap();
                assert!(holiday_reminders(seven).contains(&Reminder::Holiday { name: holiday.name }));

                for (h, m) in [(6, 59), (7, 1), (0, 0), (19, 0)] {
                    assert!(holiday_reminders(date.and_hms_opt(h, m, 0).unwrap()).is_empty());
                }
            }
        }
    }

    #[test]
    fn test_holiday_matches_seconds_within_minute() {
        let due = holiday_reminders(
            NaiveDate::from_ymd_opt(2025, 12, 25)
                .unwrap()
                .and_hms_opt(7, 0, 42)
                .unwrap(),
        );
        assert_eq!(keys(&due), vec!["holiday-Hari Raya Natal"]);
    }

    #[test]
    fn test_every_ramadan_row_fires_at_its_minutes() {
        for year in [2025, 2026, 2027] {
            for entry in ramadan_schedule(year) {
                let sahoor = entry.date.and_time(entry.sahoor);
                let iftar = entry.date.and_time(entry.iftar);
                assert_eq!(keys(&ramadan_reminders(sahoor)), vec!["sahoor"]);
                assert_eq!(keys(&ramadan_reminders(iftar)), vec!["iftar"]);
                assert!(ramadan_reminders(sahoor + Duration::minutes(1)).is_empty());
            }
        }
    }

    #[test]
    fn test_no_ramadan_reminders_outside_ramadan() {
        assert!(ramadan_reminders(at(2025, 4, 10, 3, 50)).is_empty());
        assert!(ramadan_reminders(at(2025, 4, 10, 18, 2)).is_empty());
    }

    #[test]
    fn test_weekend_has_no_work_reminders() {
        // 2025-06-07 is a Saturday, 2025-06-08 a Sunday
        for day in [7, 8] {
            assert!(work_hours_on(NaiveDate::from_ymd_opt(2025, 6, day).unwrap()).is_none());
            assert!(workday_reminders(at(2025, 6, day, 9, 0)).is_empty());
            assert!(workday_reminders(at(2025, 6, day, 17, 30)).is_empty());
        }
    }

    #[test]
    fn test_holiday_weekday_has_no_work_reminders() {
        // Independence Day 2026 is a Monday
        assert_eq!(
            NaiveDate::from_ymd_opt(2026, 8, 17).unwrap().weekday(),
            Weekday::Mon
        );
        assert!(workday_reminders(at(2026, 8, 17, 9, 0)).is_empty());
        assert!(workday_reminders(at(2026, 8, 17, 17, 30)).is_empty());
    }

    #[test]
    fn test_regular_work_hours() {
        assert_eq!(keys(&workday_reminders(at(2025, 6, 2, 9, 0))), vec!["work-start"]);
        assert_eq!(keys(&workday_reminders(at(2025, 6, 2, 17, 30))), vec!["work-end"]);
        assert!(workday_reminders(at(2025, 6, 2, 8, 0)).is_empty());
        assert!(workday_reminders(at(2025, 6, 2, 16, 0)).is_empty());
    }

    #[test]
    fn test_ramadan_work_hours() {
        assert_eq!(keys(&workday_reminders(at(2025, 3, 10, 8, 0))), vec!["work-start"]);
        assert_eq!(keys(&workday_reminders(at(2025, 3, 10, 16, 0))), vec!["work-end"]);
        assert!(workday_reminders(at(2025, 3, 10, 9, 0)).is_empty());
        assert!(workday_reminders(at(2025, 3, 10, 17, 30)).is_empty());
    }

    #[test]
    fn test_due_reminders_follow_family_order() {
        // Christmas 2025 at 07:00 only yields the holiday
        assert_eq!(
            keys(&due_reminders(at(2025, 12, 25, 7, 0))),
            vec!["holiday-Hari Raya Natal"]
        );
        assert!(due_reminders(at(2025, 6, 2, 10, 13)).is_empty());
    }

    #[test]
    fn test_sahoor_message_mentions_imsak() {
        let text = Reminder::Sahoor { sahoor: hm(3, 50) }.render(Locale::get(Language::En));
        assert!(text.contains("04:20 WIB"));
    }

    #[test]
    fn test_iftar_message_mentions_time() {
        let text = Reminder::Iftar { iftar: hm(18, 2) }.render(Locale::get(Language::Id));
        assert!(text.contains("18:02 WIB"));
        assert!(text.contains("berbuka"));
    }

    #[test]
    fn test_work_body_differs_during_ramadan() {
        let locale = Locale::get(Language::En);
        let ramadan = Reminder::WorkStart(WorkHours::for_ramadan(true)).render(locale);
        let regular = Reminder::WorkStart(WorkHours::for_ramadan(false)).render(locale);
        assert!(ramadan.contains("Ramadan") && ramadan.contains("08:00 WIB"));
        assert!(!regular.contains("Ramadan") && regular.contains("09:00 WIB"));
    }

    #[test]
    fn test_holiday_message() {
        let text = Reminder::Holiday {
            name: "Hari Kemerdekaan Republik Indonesia",
        }
        .render(Locale::get(Language::En));
        assert!(text.starts_with("@everyone"));
        assert!(text.contains("Hari Kemerdekaan Republik Indonesia"));
    }
}
