//! Capability interfaces between the picker and a multi-column wheel widget.
//!
//! The widget (the host) implements [`WheelHost`]. The picker implements
//! [`LayoutProvider`] and [`EventSink`], which the host calls to learn what
//! to draw and to report user interaction.

use crate::types::{ColumnIndex, RowLabel};

/// Operations the picker needs from the wheel widget.
pub trait WheelHost {
    /// Row currently selected in `column`, or `None` if the column does not exist
    fn selected_row(&self, column: ColumnIndex) -> Option<usize>;

    /// Moves `column` to `row`. Hosts that report this back to the picker must
    /// tag the event [`EventOrigin::Programmatic`].
    fn set_selected_row(&mut self, column: ColumnIndex, row: usize, animated: bool);

    /// Re-query column count, row counts and labels
    fn reload_all_columns(&mut self) {}
}

/// What the host draws.
pub trait LayoutProvider {
    fn number_of_columns(&self) -> usize;

    fn number_of_rows(&self, column: ColumnIndex) -> usize;

    /// Text and enabled flag for a row, or `None` if it cannot be labelled
    fn label_for(&self, column: ColumnIndex, row: usize) -> Option<RowLabel>;
}

/// Receives user selections from the host.
pub trait EventSink {
    /// The user settled `column` on `row`
    fn row_selected(&mut self, column: ColumnIndex, row: usize);
}

/// Who moved a wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventOrigin {
    User,
    /// Echo of a [`WheelHost::set_selected_row`] call made by the picker
    Programmatic,
}

/// A selection change reported by a host that cannot tell its own events apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WheelEvent {
    pub column: ColumnIndex,
    pub row:    usize,
    pub origin: EventOrigin,
}

impl WheelEvent {
    pub const fn user(column: ColumnIndex, row: usize) -> Self {
        Self { column, row, origin: EventOrigin::User }
    }

    pub const fn programmatic(column: ColumnIndex, row: usize) -> Self {
        Self { column, row, origin: EventOrigin::Programmatic }
    }
}

/// Headless host keeping selections in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryHost {
    rows:    Vec<usize>,
    reloads: usize,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected rows by column
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    /// Number of times the picker asked for a full reload
    pub const fn reloads(&self) -> usize {
        self.reloads
    }

    /// Simulates the user scrolling `column` to `row` without telling the picker
    pub fn scroll_to(&mut self, column: ColumnIndex, row: usize) {
        self.set_selected_row(column, row, false);
    }
}

impl WheelHost for MemoryHost {
    fn selected_row(&self, column: ColumnIndex) -> Option<usize> {
        self.rows.get(column.get()).copied()
    }

    fn set_selected_row(&mut self, column: ColumnIndex, row: usize, _animated: bool) {
        let index = column.get();
        if self.rows.len() <= index {
            self.rows.resize(index + 1, 0);
        }
        self.rows[index] = row;
    }

    fn reload_all_columns(&mut self) {
        self.reloads += 1;
    }
}
