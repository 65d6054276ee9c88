//! Row index <-> calendar field value conversion.

use crate::calendar::Calendar;
use crate::consts::MONTHS_PER_QUARTER;
use crate::types::LogicalField;
use log::warn;

/// Quarter containing `month` (1..=12), by ceiling division
pub const fn quarter_of_month(month: u32) -> u32 {
    month.div_ceil(MONTHS_PER_QUARTER)
}

/// First month of `quarter` (1..=4)
pub const fn first_month_of_quarter(quarter: u32) -> u32 {
    MONTHS_PER_QUARTER * quarter.saturating_sub(1) + 1
}

/// Maps wheel rows to field values using a calendar's maximum field ranges.
#[derive(Debug, Clone, Copy)]
pub struct RowMapper<'a, C: ?Sized> {
    calendar: &'a C,
}

impl<'a, C: Calendar + ?Sized> RowMapper<'a, C> {
    pub const fn new(calendar: &'a C) -> Self {
        Self { calendar }
    }

    /// Row showing `value`, or `None` if the value lies outside the field's range
    pub fn row_for(&self, value: i32, field: LogicalField) -> Option<usize> {
        let range = self.calendar.maximum_range(field)?;
        if !range.contains(&value) {
            return None;
        }
        usize::try_from(value - range.start()).ok()
    }

    /// Field value shown on `row`, or `None` past the last row
    pub fn value_for(&self, row: usize, field: LogicalField) -> Option<i32> {
        let range = self.calendar.maximum_range(field)?;
        let value = i32::try_from(row).ok()?.checked_add(*range.start())?;
        range.contains(&value).then_some(value)
    }

    /// Number of rows in a column showing `field`; 0 if the calendar has no range for it
    pub fn row_count(&self, field: LogicalField) -> usize {
        match self.calendar.maximum_range(field) {
            Some(range) => usize::try_from(i64::from(*range.end()) - i64::from(*range.start()) + 1).unwrap_or(0),
            None => {
                warn!("calendar has no range for the {field} field, column will be empty");
                0
            },
        }
    }
}
