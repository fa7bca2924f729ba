//! Row selection with a tri-state select-all indicator.

use super::row::Row;

/// Aggregate state shown by the header's select-all control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckedState {
    /// Nothing is checked.
    #[default]
    None,
    /// Some rows are checked, some are not.
    Partial,
    /// Every row is checked.
    All,
}

/// Tracks checked rows in check order.
///
/// Rows are matched structurally (see [`Row::matches`]): the selection has
/// no notion of row identity beyond the row's property values. It is kept
/// verbatim when the dataset grows by appending and goes stale if rows are
/// removed or replaced.
#[derive(Debug, Clone, Default)]
pub struct RowSelection {
    checked: Vec<Row>,
    state: CheckedState,
}

impl RowSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn checked(&self) -> &[Row] {
        &self.checked
    }

    pub fn state(&self) -> CheckedState {
        self.state
    }

    pub fn len(&self) -> usize {
        self.checked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checked.is_empty()
    }

    /// Check whether a row is selected (structural match).
    pub fn is_checked(&self, row: &Row) -> bool {
        self.checked.iter().any(|r| r.matches(row))
    }

    /// Select-all toggle: if everything is checked, clear; otherwise check
    /// every row in the dataset.
    pub fn toggle_all(&mut self, rows: &[Row]) -> &[Row] {
        if self.state == CheckedState::All {
            self.checked.clear();
        } else {
            self.checked = rows.to_vec();
        }
        self.recompute(rows.len());
        self.checked()
    }

    /// Check or uncheck a single row.
    ///
    /// Unchecking removes every stored row that structurally matches
    /// `row`, so duplicates are removed together.
    pub fn set_checked(&mut self, row: &Row, checked: bool, total_rows: usize) -> &[Row] {
        if checked {
            if !self.is_checked(row) {
                self.checked.push(row.clone());
            }
        } else {
            self.checked.retain(|r| !r.matches(row));
        }
        self.recompute(total_rows);
        self.checked()
    }

    /// Drop the whole selection.
    pub fn clear(&mut self) {
        self.checked.clear();
        self.state = CheckedState::None;
    }

    // The indicator is derived from the counts after every mutation, so it
    // can never disagree with the selection it describes.
    fn recompute(&mut self, total_rows: usize) {
        self.state = if self.checked.is_empty() {
            CheckedState::None
        } else if self.checked.len() >= total_rows && total_rows > 0 {
            CheckedState::All
        } else {
            CheckedState::Partial
        };
    }
}
