use chrono::{DateTime, Duration, Months, Utc};

use crate::types::Mode;

/// Last second of the period starting at `date`: one month, quarter or year
/// later, minus one second.
///
/// Day-of-month overflow clamps to the end of the target month. Returns
/// `None` if the result is not representable.
pub fn end_of_period(date: DateTime<Utc>, mode: Mode) -> Option<DateTime<Utc>> {
    date.checked_add_months(Months::new(mode.period_months()))?
        .checked_sub_signed(Duration::seconds(1))
}
