/// First representable year of the Gregorian calendar (inclusive)
pub const MIN_YEAR: i32 = 1;
/// Last representable year of the Gregorian calendar (inclusive)
pub const MAX_YEAR: i32 = 9999;

/// Month number for January
pub const JANUARY: u32 = 1;
/// Month number for December
pub const DECEMBER: u32 = 12;

/// Quarter number for the first quarter
pub const FIRST_QUARTER: u32 = 1;
/// Quarter number for the last quarter
pub const LAST_QUARTER: u32 = 4;

/// Number of months covered by one quarter
pub const MONTHS_PER_QUARTER: u32 = 3;
/// Number of months covered by one year
pub const MONTHS_PER_YEAR: u32 = 12;

/// First day of month, used when truncating to a month boundary
pub const MIN_DAY: u32 = 1;

/// Prefix for quarter labels, never localized ("Q1".."Q4")
pub const QUARTER_LABEL_PREFIX: &str = "Q";

/// strftime pattern for the full month name
pub(crate) const MONTH_NAME_FORMAT: &str = "%B";
/// strftime pattern for the year number, without zero padding
pub(crate) const YEAR_FORMAT: &str = "%-Y";
