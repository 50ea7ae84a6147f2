/// Static Indonesian holiday and Ramadan tables (pure data, no I/O)
use chrono::{Datelike, NaiveDate, NaiveTime};

/// A national holiday; matching is by month and day only
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Holiday {
    pub name: &'static str,
    pub date: NaiveDate,
}

impl Holiday {
    pub fn falls_on(&self, date: NaiveDate) -> bool {
        self.date.month() == date.month() && self.date.day() == date.day()
    }
}

/// Sahoor and iftar wall times for a single Ramadan date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RamadanSchedule {
    pub date: NaiveDate,
    pub sahoor: NaiveTime,
    pub iftar: NaiveTime,
}

impl RamadanSchedule {
    pub fn falls_on(&self, date: NaiveDate) -> bool {
        self.date.month() == date.month() && self.date.day() == date.day()
    }
}

/// (month, day, sahoor hour, sahoor minute, iftar hour, iftar minute)
type TableRow = (u32, u32, u32, u32, u32, u32);

const FIXED_HOLIDAYS: [(&str, u32, u32); 5] = [
    ("Tahun Baru Masehi", 1, 1),
    ("Hari Buruh Internasional", 5, 1),
    ("Hari Lahir Pancasila", 6, 1),
    ("Hari Kemerdekaan Republik Indonesia", 8, 17),
    ("Hari Raya Natal", 12, 25),
];

const MOVING_HOLIDAYS_2025: [(&str, u32, u32); 11] = [
    ("Isra Mikraj Nabi Muhammad SAW", 1, 27),
    ("Tahun Baru Imlek", 1, 29),
    ("Hari Suci Nyepi", 3, 29),
    ("Hari Raya Idul Fitri", 3, 31),
    ("Hari Raya Idul Fitri (Hari Kedua)", 4, 1),
    ("Wafat Yesus Kristus", 4, 18),
    ("Hari Raya Waisak", 5, 12),
    ("Kenaikan Yesus Kristus", 5, 29),
    ("Hari Raya Idul Adha", 6, 6),
    ("Tahun Baru Islam", 6, 27),
    ("Maulid Nabi Muhammad SAW", 9, 5),
];

const MOVING_HOLIDAYS_2026: [(&str, u32, u32); 11] = [
    ("Isra Mikraj Nabi Muhammad SAW", 1, 16),
    ("Tahun Baru Imlek", 2, 17),
    ("Hari Suci Nyepi", 3, 19),
    ("Hari Raya Idul Fitri", 3, 20),
    ("Hari Raya Idul Fitri (Hari Kedua)", 3, 21),
    ("Wafat Yesus Kristus", 4, 3),
    ("Kenaikan Yesus Kristus", 5, 14),
    ("Hari Raya Idul Adha", 5, 27),
    ("Hari Raya Waisak", 5, 31),
    ("Tahun Baru Islam", 6, 16),
    ("Maulid Nabi Muhammad SAW", 8, 25),
];

const MOVING_HOLIDAYS_2027: [(&str, u32, u32); 11] = [
    ("Isra Mikraj Nabi Muhammad SAW", 1, 5),
    ("Tahun Baru Imlek", 2, 6),
    ("Hari Suci Nyepi", 3, 8),
    ("Hari Raya Idul Fitri", 3, 10),
    ("Hari Raya Idul Fitri (Hari Kedua)", 3, 11),
    ("Wafat Yesus Kristus", 3, 26),
    ("Kenaikan Yesus Kristus", 5, 6),
    ("Hari Raya Idul Adha", 5, 17),
    ("Hari Raya Waisak", 5, 20),
    ("Tahun Baru Islam", 6, 6),
    ("Maulid Nabi Muhammad SAW", 8, 15),
];

const RAMADAN_2025: [TableRow; 30] = [
    (3, 1, 3, 52, 18, 4), (3, 2, 3, 52, 18, 4), (3, 3, 3, 52, 18, 4),
    (3, 4, 3, 52, 18, 4), (3, 5, 3, 51, 18, 3), (3, 6, 3, 51, 18, 3),
    (3, 7, 3, 51, 18, 3), (3, 8, 3, 51, 18, 2), (3, 9, 3, 51, 18, 2),
    (3, 10, 3, 50, 18, 2), (3, 11, 3, 50, 18, 1), (3, 12, 3, 50, 18, 1),
    (3, 13, 3, 50, 18, 1), (3, 14, 3, 50, 18, 0), (3, 15, 3, 49, 18, 0),
    (3, 16, 3, 49, 18, 0), (3, 17, 3, 49, 18, 0), (3, 18, 3, 49, 17, 59),
    (3, 19, 3, 49, 17, 59), (3, 20, 3, 48, 17, 59), (3, 21, 3, 48, 17, 58),
    (3, 22, 3, 48, 17, 58), (3, 23, 3, 48, 17, 58), (3, 24, 3, 48, 17, 57),
    (3, 25, 3, 47, 17, 57), (3, 26, 3, 47, 17, 57), (3, 27, 3, 47, 17, 56),
    (3, 28, 3, 47, 17, 56), (3, 29, 3, 47, 17, 56), (3, 30, 3, 46, 17, 55),
];

const RAMADAN_2026: [TableRow; 29] = [
    (2, 19, 3, 52, 18, 4), (2, 20, 3, 52, 18, 4), (2, 21, 3, 52, 18, 4),
    (2, 22, 3, 52, 18, 4), (2, 23, 3, 51, 18, 3), (2, 24, 3, 51, 18, 3),
    (2, 25, 3, 51, 18, 3), (2, 26, 3, 51, 18, 2), (2, 27, 3, 51, 18, 2),
    (2, 28, 3, 50, 18, 2), (3, 1, 3, 50, 18, 1), (3, 2, 3, 50, 18, 1),
    (3, 3, 3, 50, 18, 1), (3, 4, 3, 50, 18, 0), (3, 5, 3, 49, 18, 0),
    (3, 6, 3, 49, 18, 0), (3, 7, 3, 49, 17, 59), (3, 8, 3, 49, 17, 59),
    (3, 9, 3, 49, 17, 59), (3, 10, 3, 48, 17, 58), (3, 11, 3, 48, 17, 58),
    (3, 12, 3, 48, 17, 58), (3, 13, 3, 48, 17, 57), (3, 14, 3, 48, 17, 57),
    (3, 15, 3, 47, 17, 57), (3, 16, 3, 47, 17, 56), (3, 17, 3, 47, 17, 56),
    (3, 18, 3, 47, 17, 56), (3, 19, 3, 47, 17, 55),
];

const RAMADAN_2027: [TableRow; 30] = [
    (2, 8, 3, 52, 18, 4), (2, 9, 3, 52, 18, 4), (2, 10, 3, 52, 18, 4),
    (2, 11, 3, 52, 18, 4), (2, 12, 3, 51, 18, 3), (2, 13, 3, 51, 18, 3),
    (2, 14, 3, 51, 18, 3), (2, 15, 3, 51, 18, 2), (2, 16, 3, 51, 18, 2),
    (2, 17, 3, 50, 18, 2), (2, 18, 3, 50, 18, 1), (2, 19, 3, 50, 18, 1),
    (2, 20, 3, 50, 18, 1), (2, 21, 3, 50, 18, 0), (2, 22, 3, 49, 18, 0),
    (2, 23, 3, 49, 18, 0), (2, 24, 3, 49, 18, 0), (2, 25, 3, 49, 17, 59),
    (2, 26, 3, 49, 17, 59), (2, 27, 3, 48, 17, 59), (2, 28, 3, 48, 17, 58),
    (3, 1, 3, 48, 17, 58), (3, 2, 3, 48, 17, 58), (3, 3, 3, 48, 17, 57),
    (3, 4, 3, 47, 17, 57), (3, 5, 3, 47, 17, 57), (3, 6, 3, 47, 17, 56),
    (3, 7, 3, 47, 17, 56), (3, 8, 3, 47, 17, 56), (3, 9, 3, 46, 17, 55),
];

/// All national holidays for a year, sorted by date.
///
/// The fixed holidays are returned for any year; the moving set is only
/// known for the years baked into the tables.
pub fn indonesian_holidays(year: i32) -> Vec<Holiday> {
    let moving: &[(&'static str, u32, u32)] = match year {
        2025 => &MOVING_HOLIDAYS_2025,
        2026 => &MOVING_HOLIDAYS_2026,
        2027 => &MOVING_HOLIDAYS_2027,
        _ => &[],
    };

    let mut holidays: Vec<Holiday> = FIXED_HOLIDAYS
        .iter()
        .chain(moving.iter())
        .filter_map(|&(name, month, day)| {
            NaiveDate::from_ymd_opt(year, month, day).map(|date| Holiday { name, date })
        })
        .collect();

    holidays.sort_by_key(|h| h.date);
    holidays
}

/// Ramadan timetable for a year (empty when the year is not tabulated)
pub fn ramadan_schedule(year: i32) -> Vec<RamadanSchedule> {
    let rows: &[TableRow] = match year {
        2025 => &RAMADAN_2025,
        2026 => &RAMADAN_2026,
        2027 => &RAMADAN_2027,
        _ => &[],
    };

    rows.iter()
        .filter_map(|&(month, day, sahoor_h, sahoor_m, iftar_h, iftar_m)| {
            Some(RamadanSchedule {
                date: NaiveDate::from_ymd_opt(year, month, day)?,
                sahoor: NaiveTime::from_hms_opt(sahoor_h, sahoor_m, 0)?,
                iftar: NaiveTime::from_hms_opt(iftar_h, iftar_m, 0)?,
            })
        })
        .collect()
}

/// Holidays falling on the given date (several may share a date)
pub fn holidays_on(date: NaiveDate) -> Vec<Holiday> {
    indonesian_holidays(date.year())
        .into_iter()
        .filter(|h| h.falls_on(date))
        .collect()
}

pub fn is_holiday(date: NaiveDate) -> bool {
    !holidays_on(date).is_empty()
}

/// The Ramadan row for a date, if the date is a Ramadan date
pub fn ramadan_entry(date: NaiveDate) -> Option<RamadanSchedule> {
    ramadan_schedule(date.year())
        .into_iter()
        .find(|entry| entry.falls_on(date))
}
