//! Headless core of a month / quarter / year wheel picker.
//!
//! A [`MonthYearPicker`] owns one canonical date and projects it onto one or
//! two wheel columns depending on its [`Mode`]. The wheel widget itself is
//! abstracted behind [`WheelHost`]; the picker answers the widget through
//! [`LayoutProvider`] and receives user selections through [`EventSink`].
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use month_year_picker::{ColumnIndex, EventSink, MemoryHost, Mode, MonthYearPicker};
//!
//! let mut picker = MonthYearPicker::new(MemoryHost::new());
//! picker.set_mode(Mode::QuarterAndYear);
//! picker.set_date(Utc.with_ymd_and_hms(2023, 3, 15, 0, 0, 0).unwrap());
//!
//! // the user spins the quarter wheel to Q3
//! picker.row_selected(ColumnIndex::new(0), 2);
//! assert_eq!(picker.date(), Utc.with_ymd_and_hms(2023, 7, 1, 0, 0, 0).unwrap());
//! ```

mod bounds;
mod calendar;
mod config;
mod consts;
mod host;
mod labels;
mod layout;
mod period;
mod picker;
mod prelude;
mod rows;
mod types;

#[cfg(test)]
mod test_utils;

pub use bounds::Bounds;
pub use calendar::{Calendar, DateComponents, Gregorian};
pub use config::{PickerConfig, parse_locale};
pub use consts::*;
pub use host::{EventOrigin, EventSink, LayoutProvider, MemoryHost, WheelEvent, WheelHost};
pub use labels::LabelFormatter;
pub use period::end_of_period;
pub use picker::{ChangeHandler, MonthYearPicker, RangeHandler};
pub use rows::{RowMapper, first_month_of_quarter, quarter_of_month};
pub use types::{ColumnIndex, LogicalField, Mode, RowLabel};

/// Errors from the fallible configuration surfaces. The picker itself never
/// fails; it ignores inputs it cannot represent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PickerError {
    /// Locale name not known to the formatting tables
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    /// Mode name other than `month-year`, `quarter-year` or `year`
    #[error("Unknown picker mode: {0} (expected month-year, quarter-year or year)")]
    UnknownMode(String),
}
