//! Calendar dates and months.
//!
//! Weeks start on Sunday: weekday indices run from 0 (Sunday) to 6 (Saturday).

use chrono::{Datelike, NaiveDate};
use std::fmt;
use thiserror::Error;

/// Earliest year accepted by [`CalendarDate`] and [`YearMonth`].
pub const MIN_YEAR: i32 = 1;
/// Latest year accepted; matches the four-digit `YYYY` token of annotation files.
pub const MAX_YEAR: i32 = 9999;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("Invalid date '{input}': expected YYYY.MM.DD")]
    Unparseable { input: String },
    #[error("Year {0} is outside the supported range 1..=9999")]
    YearOutOfRange(i32),
    #[error("Month {0} is outside 1..=12")]
    InvalidMonth(u32),
    #[error("Day {day} does not exist in {year:04}-{month:02}")]
    InvalidDay { year: i32, month: u32, day: u32 },
}

/// Returns true for Gregorian leap years.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1..=12) of `year`.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

fn check_year(year: i32) -> Result<(), DateError> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(DateError::YearOutOfRange(year))
    }
}

/// A single day, ordered by (year, month, day).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CalendarDate {
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        check_year(year)?;
        if !(1..=12).contains(&month) {
            return Err(DateError::InvalidMonth(month));
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(DateError::InvalidDay { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Parses the fixed `YYYY.MM.DD` token used by annotation files.
    pub fn parse_dotted(input: &str) -> Result<Self, DateError> {
        let unparseable = || DateError::Unparseable {
            input: input.to_string(),
        };
        let mut parts = input.split('.');
        let (Some(year), Some(month), Some(day), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(unparseable());
        };
        if year.len() != 4 || month.len() != 2 || day.len() != 2 {
            return Err(unparseable());
        }
        let parsed = NaiveDate::parse_from_str(input, "%Y.%m.%d").map_err(|_| unparseable())?;
        Self::new(parsed.year(), parsed.month(), parsed.day())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn year_month(&self) -> YearMonth {
        YearMonth {
            year: self.year,
            month: self.month,
        }
    }

    /// Weekday index, 0 = Sunday .. 6 = Saturday.
    pub fn weekday(&self) -> u32 {
        // Components are range-checked on construction.
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .map(|date| date.weekday().num_days_from_sunday())
            .unwrap_or_default()
    }

    /// Shifts by whole months, clamping the day to the target month's length.
    pub fn add_months(&self, months: i32) -> Result<Self, DateError> {
        let target = self.year_month().add_months(months)?;
        let day = self.day.min(target.days_in_month());
        Self::new(target.year, target.month, day)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}.{:02}.{:02}", self.year, self.month, self.day)
    }
}

/// A month of a specific year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, DateError> {
        check_year(year)?;
        if !(1..=12).contains(&month) {
            return Err(DateError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// English month name, e.g. "January".
    pub fn name(&self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }

    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year, self.month)
    }

    pub fn first_day(&self) -> CalendarDate {
        CalendarDate {
            year: self.year,
            month: self.month,
            day: 1,
        }
    }

    /// Returns the date for `day` of this month, if it exists.
    pub fn date(&self, day: u32) -> Option<CalendarDate> {
        CalendarDate::new(self.year, self.month, day).ok()
    }

    /// Weekday index of the 1st, 0 = Sunday .. 6 = Saturday.
    pub fn first_weekday(&self) -> u32 {
        self.first_day().weekday()
    }

    /// Zero-based index of the Sunday-first week that contains `day`.
    pub fn week_of_month(&self, day: u32) -> u32 {
        (self.first_weekday() + day.saturating_sub(1)) / 7
    }

    /// Number of Sunday-first weeks the month touches (4, 5 or 6).
    pub fn weeks_in_month(&self) -> u32 {
        self.week_of_month(self.days_in_month()) + 1
    }

    /// Shifts by whole months with year rollover.
    pub fn add_months(&self, months: i32) -> Result<Self, DateError> {
        let index = self.year as i64 * 12 + (self.month as i64 - 1) + months as i64;
        let year = index.div_euclid(12);
        let month = index.rem_euclid(12) as u32 + 1;
        let year = i32::try_from(year).map_err(|_| DateError::YearOutOfRange(i32::MAX))?;
        Self::new(year, month)
    }

    /// The month before this one; January rolls back to December of the previous year.
    ///
    /// Returns `None` only when that month falls outside the supported year range.
    pub fn previous(&self) -> Option<Self> {
        self.add_months(-1).ok()
    }

    /// The month after this one; December rolls over to January of the next year.
    pub fn next(&self) -> Option<Self> {
        self.add_months(1).ok()
    }

    /// All twelve months of `year`, January first.
    pub fn months_of(year: i32) -> Result<Vec<Self>, DateError> {
        (1..=12).map(|month| Self::new(year, month)).collect()
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.year)
    }
}
