//! Keeps one canonical date and the wheel selections in step.
//!
//! Every external mutation (date, mode, bounds, calendar) updates internal
//! state first, then pushes the derived row selections to the host, then
//! fires notifications. User selections take the opposite path: rows are
//! composed into a date which is fed back through [`MonthYearPicker::set_date`].

use std::fmt;
use std::ops::RangeInclusive;

use chrono::{DateTime, Datelike, Locale, Utc};
use log::{debug, trace, warn};

use crate::PickerError;
use crate::bounds::Bounds;
use crate::calendar::{Calendar, Gregorian};
use crate::config::PickerConfig;
use crate::consts::{MAX_YEAR, MIN_YEAR};
use crate::host::{EventOrigin, EventSink, LayoutProvider, WheelEvent, WheelHost};
use crate::labels::LabelFormatter;
use crate::period::end_of_period;
use crate::rows::{RowMapper, first_month_of_quarter, quarter_of_month};
use crate::types::{ColumnIndex, LogicalField, Mode, RowLabel};

/// Called with the new canonical date
pub type ChangeHandler = Box<dyn FnMut(DateTime<Utc>)>;
/// Called with the canonical date and the end of its period
pub type RangeHandler = Box<dyn FnMut(RangeInclusive<DateTime<Utc>>)>;

/// Month/quarter/year picker bound to a wheel host.
pub struct MonthYearPicker<H, C = Gregorian> {
    host:            H,
    calendar:        C,
    formatter:       LabelFormatter,
    date:            DateTime<Utc>,
    mode:            Mode,
    bounds:          Bounds,
    on_change:       Option<ChangeHandler>,
    on_change_range: Option<RangeHandler>,
}

impl<H: WheelHost> MonthYearPicker<H, Gregorian> {
    /// Gregorian picker starting at the current time
    pub fn new(host: H) -> Self {
        Self::with_calendar(host, Gregorian::new())
    }

    /// Gregorian picker built from `config`. No notifications fire.
    ///
    /// # Errors
    /// Returns `PickerError::UnknownLocale` if the configured locale is unknown.
    pub fn with_config(host: H, config: &PickerConfig) -> Result<Self, PickerError> {
        let mut calendar = Gregorian::new();
        calendar.set_locale(config.parsed_locale()?);
        let bounds = config.bounds();
        let date = config
            .date
            .filter(|date| (MIN_YEAR..=MAX_YEAR).contains(&date.year()))
            .unwrap_or_else(Utc::now);
        let date = bounds.clamp(date, &calendar);
        Ok(Self::from_parts(host, calendar, config.mode, bounds, date))
    }
}

impl<H: WheelHost, C: Calendar> MonthYearPicker<H, C> {
    /// Picker over a custom calendar, starting at the current time
    pub fn with_calendar(host: H, calendar: C) -> Self {
        Self::from_parts(host, calendar, Mode::default(), Bounds::default(), Utc::now())
    }

    fn from_parts(host: H, calendar: C, mode: Mode, bounds: Bounds, date: DateTime<Utc>) -> Self {
        let formatter = LabelFormatter::for_calendar(&calendar);
        let mut picker = Self {
            host,
            calendar,
            formatter,
            date,
            mode,
            bounds,
            on_change: None,
            on_change_range: None,
        };
        picker.reload_display();
        picker
    }

    pub const fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub const fn mode(&self) -> Mode {
        self.mode
    }

    pub const fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub const fn minimum_date(&self) -> Option<DateTime<Utc>> {
        self.bounds.minimum()
    }

    pub const fn maximum_date(&self) -> Option<DateTime<Utc>> {
        self.bounds.maximum()
    }

    pub const fn calendar(&self) -> &C {
        &self.calendar
    }

    pub fn locale(&self) -> Option<Locale> {
        self.calendar.locale()
    }

    pub const fn host(&self) -> &H {
        &self.host
    }

    pub const fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Registers the handler fired on every canonical date change
    pub fn on_change(&mut self, handler: impl FnMut(DateTime<Utc>) + 'static) {
        self.on_change = Some(Box::new(handler));
    }

    /// Registers the handler fired with the selected period on every change
    pub fn on_change_range(&mut self, handler: impl FnMut(RangeInclusive<DateTime<Utc>>) + 'static) {
        self.on_change_range = Some(Box::new(handler));
    }

    /// Stores `date` clamped to the bounds, moves the wheels and notifies.
    /// Dates whose year the calendar cannot show are ignored.
    pub fn set_date(&mut self, date: DateTime<Utc>) {
        let date = self.bounds.clamp(date, &self.calendar);
        if !self.has_year_row(&date) {
            warn!("ignoring {date}: its year is outside the calendar's year range");
            return;
        }
        self.date = date;
        self.sync_display(true);
        self.notify();
    }

    /// Switches the column layout. The date is kept, even fields the new
    /// mode hides.
    pub fn set_mode(&mut self, mode: Mode) {
        debug!("switching picker mode from {} to {mode}", self.mode);
        self.mode = mode;
        self.reload_display();
    }

    /// Replaces the minimum and pulls the date up to it if needed. The
    /// maximum is not re-checked.
    pub fn set_minimum_date(&mut self, minimum: Option<DateTime<Utc>>) {
        self.bounds.set_minimum(minimum);
        match self.bounds.clamp_to_minimum(&self.date, &self.calendar) {
            Some(clamped) => self.set_date(clamped),
            None => self.host.reload_all_columns(),
        }
    }

    /// Replaces the maximum and pulls the date down to it if needed. The
    /// minimum is not re-checked.
    pub fn set_maximum_date(&mut self, maximum: Option<DateTime<Utc>>) {
        self.bounds.set_maximum(maximum);
        match self.bounds.clamp_to_maximum(&self.date, &self.calendar) {
            Some(clamped) => self.set_date(clamped),
            None => self.host.reload_all_columns(),
        }
    }

    /// Replaces the calendar and everything formatted from it
    pub fn set_calendar(&mut self, calendar: C) {
        self.calendar = calendar;
        self.formatter = LabelFormatter::for_calendar(&self.calendar);
        self.reload_display();
    }

    pub fn set_locale(&mut self, locale: Option<Locale>) {
        self.calendar.set_locale(locale);
        self.formatter = LabelFormatter::for_calendar(&self.calendar);
        self.host.reload_all_columns();
    }

    /// Whether `date` is inside the active bounds at month granularity
    pub fn is_valid_date(&self, date: &DateTime<Utc>) -> bool {
        self.bounds.is_valid(date, &self.calendar)
    }

    /// The canonical date through the last second of its period
    pub fn period(&self) -> Option<RangeInclusive<DateTime<Utc>>> {
        end_of_period(self.date, self.mode).map(|end| self.date..=end)
    }

    /// Row each visible column should show for the canonical date
    pub fn selected_rows(&self) -> Vec<(ColumnIndex, usize)> {
        let mapper = RowMapper::new(&self.calendar);
        self.mode
            .fields()
            .iter()
            .enumerate()
            .filter_map(|(index, field)| {
                let value = self.field_value(*field)?;
                Some((ColumnIndex::new(index), mapper.row_for(value, *field)?))
            })
            .collect()
    }

    /// Routes a host event; echoes of our own pushes are dropped
    pub fn handle_event(&mut self, event: WheelEvent) {
        match event.origin {
            EventOrigin::User => self.row_selected(event.column, event.row),
            EventOrigin::Programmatic => {
                trace!("dropping programmatic selection of row {} in column {}", event.row, event.column);
            },
        }
    }

    /// `false` only when the calendar has a year range and `date` falls outside it
    fn has_year_row(&self, date: &DateTime<Utc>) -> bool {
        let Some(years) = self.calendar.maximum_range(LogicalField::Year) else {
            return true;
        };
        self.calendar.components(date).year.is_some_and(|year| years.contains(&year))
    }

    fn field_value(&self, field: LogicalField) -> Option<i32> {
        let components = self.calendar.components(&self.date);
        match field {
            LogicalField::Month => i32::try_from(components.month?).ok(),
            LogicalField::Quarter => i32::try_from(quarter_of_month(components.month?)).ok(),
            LogicalField::Year => components.year,
        }
    }

    /// Date produced by showing `row` in `column` while every other column
    /// keeps the host's current selection. Time of day is preserved.
    fn compose(&self, column: ColumnIndex, row: usize) -> Option<(LogicalField, DateTime<Utc>)> {
        let field = self.mode.field_for(column)?;
        let mapper = RowMapper::new(&self.calendar);
        let mut components = self.calendar.components(&self.date).time_of_day();

        for (index, active) in self.mode.fields().iter().copied().enumerate() {
            let active_row = if active == field {
                row
            } else {
                self.host.selected_row(ColumnIndex::new(index))?
            };
            let value = mapper.value_for(active_row, active)?;
            match active {
                LogicalField::Month => components.month = Some(u32::try_from(value).ok()?),
                LogicalField::Quarter => {
                    components.month = Some(first_month_of_quarter(u32::try_from(value).ok()?));
                },
                LogicalField::Year => components.year = Some(value),
            }
        }

        self.calendar.date_from(&components).map(|date| (field, date))
    }

    fn reload_display(&mut self) {
        self.host.reload_all_columns();
        self.sync_display(false);
    }

    fn sync_display(&mut self, animated: bool) {
        for (column, row) in self.selected_rows() {
            self.host.set_selected_row(column, row, animated);
        }
        self.host.reload_all_columns();
    }

    fn notify(&mut self) {
        let date = self.date;
        if let Some(handler) = self.on_change.as_mut() {
            handler(date);
        }
        let Some(handler) = self.on_change_range.as_mut() else {
            return;
        };
        match end_of_period(date, self.mode) {
            Some(end) => handler(date..=end),
            None => warn!("end of the {} period after {date} is not representable", self.mode),
        }
    }
}

impl<H: WheelHost, C: Calendar> EventSink for MonthYearPicker<H, C> {
    fn row_selected(&mut self, column: ColumnIndex, row: usize) {
        match self.compose(column, row) {
            Some((_, date)) => self.set_date(date),
            None => debug!("row {row} in column {column} does not form a date in {} mode", self.mode),
        }
    }
}

impl<H: WheelHost, C: Calendar> LayoutProvider for MonthYearPicker<H, C> {
    fn number_of_columns(&self) -> usize {
        self.mode.column_count()
    }

    fn number_of_rows(&self, column: ColumnIndex) -> usize {
        self.mode
            .field_for(column)
            .map_or(0, |field| RowMapper::new(&self.calendar).row_count(field))
    }

    fn label_for(&self, column: ColumnIndex, row: usize) -> Option<RowLabel> {
        let (field, date) = self.compose(column, row)?;
        Some(RowLabel {
            text:    self.formatter.format(field, &date, &self.calendar)?,
            enabled: self.bounds.is_valid(&date, &self.calendar),
        })
    }
}

impl<H: fmt::Debug, C: fmt::Debug> fmt::Debug for MonthYearPicker<H, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MonthYearPicker")
            .field("host", &self.host)
            .field("calendar", &self.calendar)
            .field("date", &self.date)
            .field("mode", &self.mode)
            .field("bounds", &self.bounds)
            .finish_non_exhaustive()
    }
}
