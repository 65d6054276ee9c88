use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::calendar::Calendar;

/// Optional inclusive `[minimum, maximum]` limits, compared at month
/// granularity.
///
/// When both limits are present and the minimum's month is after the
/// maximum's, the pair is inactive: nothing is clamped and every date is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Bounds {
    minimum: Option<DateTime<Utc>>,
    maximum: Option<DateTime<Utc>>,
}

impl Bounds {
    pub const fn new(minimum: Option<DateTime<Utc>>, maximum: Option<DateTime<Utc>>) -> Self {
        Self { minimum, maximum }
    }

    /// Returns the minimum date, if any
    pub const fn minimum(&self) -> Option<DateTime<Utc>> {
        self.minimum
    }

    /// Returns the maximum date, if any
    pub const fn maximum(&self) -> Option<DateTime<Utc>> {
        self.maximum
    }

    pub fn set_minimum(&mut self, minimum: Option<DateTime<Utc>>) {
        self.minimum = minimum;
    }

    pub fn set_maximum(&mut self, maximum: Option<DateTime<Utc>>) {
        self.maximum = maximum;
    }

    /// `false` when the minimum's month is after the maximum's
    pub fn is_active<C: Calendar + ?Sized>(&self, calendar: &C) -> bool {
        match (self.minimum, self.maximum) {
            (Some(minimum), Some(maximum)) => calendar.compare_months(&minimum, &maximum) != Ordering::Greater,
            _ => true,
        }
    }

    /// Whether `date`'s month lies within the limits
    pub fn is_valid<C: Calendar + ?Sized>(&self, date: &DateTime<Utc>, calendar: &C) -> bool {
        if !self.is_active(calendar) {
            return true;
        }
        !self.is_before_minimum(date, calendar) && !self.is_after_maximum(date, calendar)
    }

    /// Moves `date` into the limits, truncated to the first instant of the
    /// limiting month. Dates already in range are returned unchanged.
    pub fn clamp<C: Calendar + ?Sized>(&self, date: DateTime<Utc>, calendar: &C) -> DateTime<Utc> {
        if !self.is_active(calendar) {
            return date;
        }
        self.clamp_to_minimum(&date, calendar)
            .or_else(|| self.clamp_to_maximum(&date, calendar))
            .unwrap_or(date)
    }

    /// Replacement for `date` if it falls before the minimum; ignores the maximum
    pub fn clamp_to_minimum<C: Calendar + ?Sized>(
        &self,
        date: &DateTime<Utc>,
        calendar: &C,
    ) -> Option<DateTime<Utc>> {
        let minimum = self.minimum?;
        if !self.is_before_minimum(date, calendar) {
            return None;
        }
        debug!("{date} is before minimum {minimum}");
        Some(calendar.start_of_month(&minimum).unwrap_or(minimum))
    }

    /// Replacement for `date` if it falls after the maximum; ignores the minimum
    pub fn clamp_to_maximum<C: Calendar + ?Sized>(
        &self,
        date: &DateTime<Utc>,
        calendar: &C,
    ) -> Option<DateTime<Utc>> {
        let maximum = self.maximum?;
        if !self.is_after_maximum(date, calendar) {
            return None;
        }
        debug!("{date} is after maximum {maximum}");
        Some(calendar.start_of_month(&maximum).unwrap_or(maximum))
    }

    fn is_before_minimum<C: Calendar + ?Sized>(&self, date: &DateTime<Utc>, calendar: &C) -> bool {
        self.minimum
            .is_some_and(|minimum| calendar.compare_months(&minimum, date) == Ordering::Greater)
    }

    fn is_after_maximum<C: Calendar + ?Sized>(&self, date: &DateTime<Utc>, calendar: &C) -> bool {
        self.maximum
            .is_some_and(|maximum| calendar.compare_months(date, &maximum) == Ordering::Greater)
    }
}
