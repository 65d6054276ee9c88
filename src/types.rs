use crate::PickerError;
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Column layout of the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum Mode {
    /// Month wheel followed by a year wheel
    #[default]
    #[display(fmt = "month-year")]
    MonthAndYear,
    /// Quarter wheel followed by a year wheel
    #[display(fmt = "quarter-year")]
    QuarterAndYear,
    /// A single year wheel
    #[display(fmt = "year")]
    YearOnly,
}

impl Mode {
    /// All modes, in declaration order
    pub const ALL: [Self; 3] = [Self::MonthAndYear, Self::QuarterAndYear, Self::YearOnly];

    /// Logical fields shown by this mode, ordered by column
    pub const fn fields(self) -> &'static [LogicalField] {
        match self {
            Self::MonthAndYear => &[LogicalField::Month, LogicalField::Year],
            Self::QuarterAndYear => &[LogicalField::Quarter, LogicalField::Year],
            Self::YearOnly => &[LogicalField::Year],
        }
    }

    /// Length of one selectable period, in months
    pub const fn period_months(self) -> u32 {
        match self {
            Self::MonthAndYear => 1,
            Self::QuarterAndYear => crate::MONTHS_PER_QUARTER,
            Self::YearOnly => crate::MONTHS_PER_YEAR,
        }
    }
}

impl FromStr for Mode {
    type Err = PickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "month-year" => Ok(Self::MonthAndYear),
            "quarter-year" => Ok(Self::QuarterAndYear),
            "year" => Ok(Self::YearOnly),
            other => Err(PickerError::UnknownMode(other.to_owned())),
        }
    }
}

impl Serialize for Mode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Mode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A semantic date component, independent of the column showing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum LogicalField {
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "quarter")]
    Quarter,
    #[display(fmt = "year")]
    Year,
}

/// Zero-based index of a physical wheel column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into)]
pub struct ColumnIndex(usize);

impl ColumnIndex {
    /// Creates a column index
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw index
    #[inline]
    pub const fn get(self) -> usize {
        self.0
    }
}

/// Text and enabled state for one wheel row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RowLabel {
    pub text:    String,
    /// `false` when the row would produce a date outside the active bounds
    pub enabled: bool,
}
