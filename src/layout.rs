//! Mapping between logical fields and physical wheel columns.
//!
//! | mode             | column 0 | column 1 |
//! |------------------|----------|----------|
//! | `MonthAndYear`   | month    | year     |
//! | `QuarterAndYear` | quarter  | year     |
//! | `YearOnly`       | year     |          |

use crate::types::{ColumnIndex, LogicalField, Mode};

impl Mode {
    /// Number of wheel columns shown in this mode
    pub const fn column_count(self) -> usize {
        self.fields().len()
    }

    /// Column occupied by `field`, or `None` if the field is hidden in this mode
    pub fn column_for(self, field: LogicalField) -> Option<ColumnIndex> {
        self.fields()
            .iter()
            .position(|candidate| *candidate == field)
            .map(ColumnIndex::new)
    }

    /// Field shown in `column`, or `None` for a column this mode does not have
    pub fn field_for(self, column: ColumnIndex) -> Option<LogicalField> {
        self.fields().get(column.get()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_count() {
        assert_eq!(Mode::MonthAndYear.column_count(), 2);
        assert_eq!(Mode::QuarterAndYear.column_count(), 2);
        assert_eq!(Mode::YearOnly.column_count(), 1);
    }

    #[test]
    fn test_column_for_cases() {
        struct TestCase {
            mode:     Mode,
            field:    LogicalField,
            expected: Option<usize>,
        }

        let cases = [
            TestCase { mode: Mode::MonthAndYear, field: LogicalField::Month, expected: Some(0) },
            TestCase { mode: Mode::MonthAndYear, field: LogicalField::Quarter, expected: None },
            TestCase { mode: Mode::MonthAndYear, field: LogicalField::Year, expected: Some(1) },
            TestCase { mode: Mode::QuarterAndYear, field: LogicalField::Month, expected: None },
            TestCase { mode: Mode::QuarterAndYear, field: LogicalField::Quarter, expected: Some(0) },
            TestCase { mode: Mode::QuarterAndYear, field: LogicalField::Year, expected: Some(1) },
            TestCase { mode: Mode::YearOnly, field: LogicalField::Month, expected: None },
            TestCase { mode: Mode::YearOnly, field: LogicalField::Quarter, expected: None },
            TestCase { mode: Mode::YearOnly, field: LogicalField::Year, expected: Some(0) },
        ];

        for case in &cases {
            assert_eq!(
                case.mode.column_for(case.field),
                case.expected.map(ColumnIndex::new),
                "column for {} in {}",
                case.field,
                case.mode
            );
        }
    }

    #[test]
    fn test_field_for_out_of_range() {
        assert_eq!(Mode::YearOnly.field_for(ColumnIndex::new(1)), None);
        assert_eq!(Mode::MonthAndYear.field_for(ColumnIndex::new(2)), None);
    }

    #[test]
    fn test_field_for_inverts_column_for() {
        for mode in Mode::ALL {
            for index in 0..mode.column_count() {
                let column = ColumnIndex::new(index);
                let field = mode.field_for(column).expect("every column has a field");
                assert_eq!(mode.column_for(field), Some(column));
            }
        }
    }
}
