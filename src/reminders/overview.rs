/// Read-only summary behind `/reminder view`
use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Weekday};

use super::calendar::{Holiday, RamadanSchedule, indonesian_holidays, ramadan_entry};
use super::locale::Locale;
use super::rules::{WorkHours, work_hours_on};
use crate::constants::{ANCHOR_TZ_LABEL, IMSAK_OFFSET_MINUTES};
use crate::utils::datetime::{format_date_display, format_hm};

/// Informational entries shown in the day's reminder list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DailyReminderKind {
    Standup,
    Lunch,
    FridayPrayer,
    LoveNote,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyReminder {
    pub time: NaiveTime,
    pub kind: DailyReminderKind,
}

impl DailyReminder {
    pub fn label(&self, locale: &Locale, ramadan: bool) -> &'static str {
        match self.kind {
            DailyReminderKind::Standup if ramadan => locale.standup_ramadan,
            DailyReminderKind::Standup => locale.standup,
            DailyReminderKind::Lunch => locale.lunch,
            DailyReminderKind::FridayPrayer => locale.friday_prayer,
            DailyReminderKind::LoveNote => locale.love_note,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReminderOverview {
    pub today: NaiveDate,
    pub upcoming_holidays: Vec<Holiday>,
    pub ramadan_today: Option<RamadanSchedule>,
    pub work_hours: Option<WorkHours>,
    pub daily_reminders: Vec<DailyReminder>,
}

/// Next `limit` holidays from `today` onwards, across this year and next
pub fn upcoming_holidays(today: NaiveDate, limit: usize) -> Vec<Holiday> {
    let mut holidays: Vec<Holiday> = indonesian_holidays(today.year())
        .into_iter()
        .chain(indonesian_holidays(today.year() + 1))
        .filter(|h| h.date >= today)
        .collect();

    holidays.sort_by_key(|h| h.date);
    holidays.truncate(limit);
    holidays
}

/// The day's reminder plan; empty on weekends and holidays
pub fn daily_reminders(date: NaiveDate) -> Vec<DailyReminder> {
    let Some(hours) = work_hours_on(date) else {
        return Vec::new();
    };

    let mut reminders = vec![DailyReminder {
        time: hours.start + Duration::minutes(30),
        kind: DailyReminderKind::Standup,
    }];

    if date.weekday() == Weekday::Fri {
        reminders.push(DailyReminder {
            time: time(11, 30),
            kind: DailyReminderKind::FridayPrayer,
        });
    }
    if !hours.ramadan {
        reminders.push(DailyReminder {
            time: time(12, 0),
            kind: DailyReminderKind::Lunch,
        });
    }
    reminders.push(DailyReminder {
        time: time(15, 0),
        kind: DailyReminderKind::LoveNote,
    });

    reminders
}

pub fn build_overview(today: NaiveDate, holiday_limit: usize) -> ReminderOverview {
    ReminderOverview {
        today,
        upcoming_holidays: upcoming_holidays(today, holiday_limit),
        ramadan_today: ramadan_entry(today),
        work_hours: work_hours_on(today),
        daily_reminders: daily_reminders(today),
    }
}

/// Render the overview as (field name, field value) pairs
pub fn overview_fields(overview: &ReminderOverview, locale: &Locale) -> Vec<(String, String)> {
    let mut fields = Vec::new();

    let holidays = if overview.upcoming_holidays.is_empty() {
        "-".to_string()
    } else {
        overview
            .upcoming_holidays
            .iter()
            .map(|h| {
                format!(
                    "`{} {}` {}",
                    format_date_display(h.date.month() as i32, h.date.day() as i32),
                    h.date.year(),
                    h.name
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };
    fields.push((locale.holidays_header.to_string(), holidays));

    if let Some(entry) = &overview.ramadan_today {
        let imsak = entry.sahoor + Duration::minutes(IMSAK_OFFSET_MINUTES);
        fields.push((
            locale.ramadan_header.to_string(),
            format!(
                "`{}` {}\n{}",
                wib(entry.sahoor),
                locale.sahoor_note.replace("{imsak}", &wib(imsak)),
                locale.iftar_note.replace("{time}", &wib(entry.iftar))
            ),
        ));
    }

    let daily = match &overview.work_hours {
        Some(hours) => {
            let body = if hours.ramadan {
                locale.work_ramadan_body
            } else {
                locale.work_body
            };
            let mut lines = vec![
                body.replace("{start}", &wib(hours.start))
                    .replace("{end}", &wib(hours.end)),
            ];
            lines.extend(overview.daily_reminders.iter().map(|r| {
                format!("`{}` {}", format_hm(r.time), r.label(locale, hours.ramadan))
            }));
            lines.join("\n")
        }
        None => locale.no_reminders.to_string(),
    };
    fields.push((locale.daily_header.to_string(), daily));

    fields
}

fn wib(t: NaiveTime) -> String {
    format!("{} {}", format_hm(t), ANCHOR_TZ_LABEL)
}

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reminders::locale::Language;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_upcoming_holidays_sorted_and_truncated() {
        let holidays = upcoming_holidays(date(2025, 8, 1), 5);
        assert_eq!(holidays.len(), 5);
        assert!(holidays.windows(2).all(|w| w[0].date <= w[1].date));
        assert!(holidays.iter().all(|h| h.date >= date(2025, 8, 1)));
        assert_eq!(holidays[0].name, "Hari Kemerdekaan Republik Indonesia");
    }

    #[test]
    fn test_upcoming_holidays_include_today() {
        let holidays = upcoming_holidays(date(2025, 12, 25), 5);
        assert_eq!(holidays[0].date, date(2025, 12, 25));
    }

    #[test]
    fn test_upcoming_holidays_cross_into_next_year() {
        let holidays = upcoming_holidays(date(2025, 12, 26), 3);
        assert_eq!(holidays.len(), 3);
        assert!(holidays.iter().all(|h| h.date.year() == 2026));
        assert_eq!(holidays[0].name, "Tahun Baru Masehi");
    }

    #[test]
    fn test_daily_reminders_weekday() {
        // 2025-06-06 is Idul Adha; 2025-06-13 is an ordinary Friday
        assert!(daily_reminders(date(2025, 6, 6)).is_empty());

        let kinds: Vec<_> = daily_reminders(date(2025, 6, 13))
            .into_iter()
            .map(|r| r.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                DailyReminderKind::Standup,
                DailyReminderKind::FridayPrayer,
                DailyReminderKind::Lunch,
                DailyReminderKind::LoveNote,
            ]
        );
    }

    #[test]
    fn test_daily_reminders_during_ramadan_skip_lunch() {
        let reminders = daily_reminders(date(2025, 3, 10));
        assert!(reminders.iter().all(|r| r.kind != DailyReminderKind::Lunch));
        assert_eq!(reminders[0].time, time(8, 30));
    }

    #[test]
    fn test_overview_for_ramadan_monday() {
        let overview = build_overview(date(2025, 3, 10), 5);
        assert!(overview.ramadan_today.is_some());
        assert_eq!(overview.work_hours, Some(WorkHours::for_ramadan(true)));

        let fields = overview_fields(&overview, Locale::get(Language::En));
        assert_eq!(fields.len(), 3);
        assert!(fields[1].1.contains("03:50 WIB"));
        assert!(fields[1].1.contains("04:20 WIB"));
        assert!(fields[2].1.contains("08:00 WIB"));
    }

    #[test]
    fn test_overview_on_weekend_shows_no_reminders() {
        let overview = build_overview(date(2025, 6, 7), 5);
        let locale = Locale::get(Language::Id);
        let fields = overview_fields(&overview, locale);
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[1].1, locale.no_reminders);
    }
}
