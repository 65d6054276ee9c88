//! Shared helpers for unit tests.

use std::cell::RefCell;
use std::ops::RangeInclusive;
use std::rc::Rc;

use chrono::{DateTime, Locale, NaiveDate, Utc};

use crate::calendar::{Calendar, DateComponents, Gregorian};
use crate::host::{MemoryHost, WheelEvent, WheelHost};
use crate::picker::MonthYearPicker;
use crate::types::{ColumnIndex, LogicalField};

/// Midnight UTC on the given day
pub fn utc(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    utc_hms(year, month, day, 0, 0, 0)
}

pub fn utc_hms(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, second))
        .expect("test date should be valid")
        .and_utc()
}

/// Host that reports every programmatic selection back as an event, the way
/// a toolkit without echo suppression would.
#[derive(Debug, Default)]
pub struct EchoHost {
    inner:   MemoryHost,
    pending: Vec<WheelEvent>,
}

impl EchoHost {
    pub fn take_events(&mut self) -> Vec<WheelEvent> {
        std::mem::take(&mut self.pending)
    }
}

impl WheelHost for EchoHost {
    fn selected_row(&self, column: ColumnIndex) -> Option<usize> {
        self.inner.selected_row(column)
    }

    fn set_selected_row(&mut self, column: ColumnIndex, row: usize, animated: bool) {
        self.inner.set_selected_row(column, row, animated);
        self.pending.push(WheelEvent::programmatic(column, row));
    }
}

/// Gregorian arithmetic with no field ranges at all
#[derive(Debug, Default)]
pub struct RangelessCalendar {
    inner: Gregorian,
}

impl Calendar for RangelessCalendar {
    fn maximum_range(&self, _field: LogicalField) -> Option<RangeInclusive<i32>> {
        None
    }

    fn components(&self, date: &DateTime<Utc>) -> DateComponents {
        self.inner.components(date)
    }

    fn date_from(&self, components: &DateComponents) -> Option<DateTime<Utc>> {
        self.inner.date_from(components)
    }

    fn locale(&self) -> Option<Locale> {
        self.inner.locale()
    }

    fn set_locale(&mut self, locale: Option<Locale>) {
        self.inner.set_locale(locale);
    }
}

type Shared<T> = Rc<RefCell<Vec<T>>>;

/// Collects picker notifications
#[derive(Debug, Default)]
pub struct Recorder {
    changes: Shared<DateTime<Utc>>,
    ranges:  Shared<RangeInclusive<DateTime<Utc>>>,
}

impl Recorder {
    pub fn attach<H: WheelHost, C: Calendar>(picker: &mut MonthYearPicker<H, C>) -> Self {
        let recorder = Self::default();

        let changes = Rc::clone(&recorder.changes);
        picker.on_change(move |date| changes.borrow_mut().push(date));

        let ranges = Rc::clone(&recorder.ranges);
        picker.on_change_range(move |range| ranges.borrow_mut().push(range));

        recorder
    }

    pub fn changes(&self) -> Vec<DateTime<Utc>> {
        self.changes.borrow().clone()
    }

    pub fn ranges(&self) -> Vec<RangeInclusive<DateTime<Utc>>> {
        self.ranges.borrow().clone()
    }
}
