//! Row label text for month, quarter and year columns.

use chrono::{DateTime, Locale, Utc};

use crate::calendar::Calendar;
use crate::consts::{MONTH_NAME_FORMAT, QUARTER_LABEL_PREFIX, YEAR_FORMAT};
use crate::rows::quarter_of_month;
use crate::types::LogicalField;

/// Formatting state derived from a calendar's locale. Rebuild it whenever the
/// calendar or its locale changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelFormatter {
    locale: Option<Locale>,
}

impl LabelFormatter {
    pub fn for_calendar<C: Calendar + ?Sized>(calendar: &C) -> Self {
        Self { locale: calendar.locale() }
    }

    pub const fn locale(&self) -> Option<Locale> {
        self.locale
    }

    /// Text for `field` of `date`: full month name, "Q" + quarter, or year
    pub fn format<C: Calendar + ?Sized>(
        &self,
        field: LogicalField,
        date: &DateTime<Utc>,
        calendar: &C,
    ) -> Option<String> {
        match field {
            LogicalField::Month => Some(self.pattern(date, MONTH_NAME_FORMAT)),
            LogicalField::Quarter => {
                let month = calendar.components(date).month?;
                Some(format!("{QUARTER_LABEL_PREFIX}{}", quarter_of_month(month)))
            },
            LogicalField::Year => Some(self.pattern(date, YEAR_FORMAT)),
        }
    }

    fn pattern(&self, date: &DateTime<Utc>, pattern: &str) -> String {
        match self.locale {
            Some(locale) => date.format_localized(pattern, locale).to_string(),
            None => date.format(pattern).to_string(),
        }
    }
}
