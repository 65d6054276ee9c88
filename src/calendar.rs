//! Calendar context consumed by the picker.
//!
//! All arithmetic runs on `DateTime<Utc>`, so field decomposition and
//! composition are never shifted by a daylight-saving transition. The
//! locale a calendar carries only affects label formatting.

use crate::consts::{DECEMBER, FIRST_QUARTER, JANUARY, LAST_QUARTER, MAX_YEAR, MIN_DAY, MIN_YEAR};
use crate::types::LogicalField;
use chrono::{DateTime, Datelike, Locale, NaiveDate, Timelike, Utc};
use std::cmp::Ordering;
use std::ops::RangeInclusive;

/// Calendar fields of a date. Absent fields take the calendar's default on
/// composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DateComponents {
    pub year:   Option<i32>,
    pub month:  Option<u32>,
    pub day:    Option<u32>,
    pub hour:   Option<u32>,
    pub minute: Option<u32>,
    pub second: Option<u32>,
}

impl DateComponents {
    /// Keeps only hour, minute and second
    pub const fn time_of_day(&self) -> Self {
        Self {
            year:   None,
            month:  None,
            day:    None,
            hour:   self.hour,
            minute: self.minute,
            second: self.second,
        }
    }
}

/// Field decomposition, composition and range queries.
pub trait Calendar {
    /// Largest range a field can take, or `None` if the calendar cannot tell
    fn maximum_range(&self, field: LogicalField) -> Option<RangeInclusive<i32>>;

    /// Splits `date` into its calendar fields
    fn components(&self, date: &DateTime<Utc>) -> DateComponents;

    /// Builds a date from fields, or `None` if the combination does not exist
    fn date_from(&self, components: &DateComponents) -> Option<DateTime<Utc>>;

    /// Locale used for labels
    fn locale(&self) -> Option<Locale>;

    fn set_locale(&mut self, locale: Option<Locale>);

    /// Orders two dates by year and month only
    fn compare_months(&self, a: &DateTime<Utc>, b: &DateTime<Utc>) -> Ordering {
        let a = self.components(a);
        let b = self.components(b);
        (a.year, a.month).cmp(&(b.year, b.month))
    }

    /// First instant of the month containing `date`
    fn start_of_month(&self, date: &DateTime<Utc>) -> Option<DateTime<Utc>> {
        let components = self.components(date);
        self.date_from(&DateComponents {
            year: components.year,
            month: components.month,
            ..DateComponents::default()
        })
    }
}

/// Proleptic Gregorian calendar pinned to UTC, years `MIN_YEAR..=MAX_YEAR`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Gregorian {
    locale: Option<Locale>,
}

impl Gregorian {
    pub const fn new() -> Self {
        Self { locale: None }
    }

    pub const fn with_locale(locale: Locale) -> Self {
        Self { locale: Some(locale) }
    }
}

impl Calendar for Gregorian {
    fn maximum_range(&self, field: LogicalField) -> Option<RangeInclusive<i32>> {
        let range = match field {
            LogicalField::Month => JANUARY as i32..=DECEMBER as i32,
            LogicalField::Quarter => FIRST_QUARTER as i32..=LAST_QUARTER as i32,
            LogicalField::Year => MIN_YEAR..=MAX_YEAR,
        };
        Some(range)
    }

    fn components(&self, date: &DateTime<Utc>) -> DateComponents {
        DateComponents {
            year:   Some(date.year()),
            month:  Some(date.month()),
            day:    Some(date.day()),
            hour:   Some(date.hour()),
            minute: Some(date.minute()),
            second: Some(date.second()),
        }
    }

    fn date_from(&self, components: &DateComponents) -> Option<DateTime<Utc>> {
        let year = components.year?;
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return None;
        }
        let date = NaiveDate::from_ymd_opt(
            year,
            components.month.unwrap_or(JANUARY),
            components.day.unwrap_or(MIN_DAY),
        )?;
        let time = date.and_hms_opt(
            components.hour.unwrap_or(0),
            components.minute.unwrap_or(0),
            components.second.unwrap_or(0),
        )?;
        Some(time.and_utc())
    }

    fn locale(&self) -> Option<Locale> {
        self.locale
    }

    fn set_locale(&mut self, locale: Option<Locale>) {
        self.locale = locale;
    }
}
