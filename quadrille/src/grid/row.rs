//! Row data model and per-cell text production.

use std::collections::BTreeMap;

use quadrille_core::measure::display_width;

use super::column::{ColumnKind, ColumnSpec};

/// One data row: an opaque mapping from column `prop` to a displayable
/// value.
///
/// Rows have no identity key. Selection tracks rows structurally, so two
/// rows with equal properties are the same row as far as the grid is
/// concerned. The owner keeps whatever richer model it has and projects it
/// into rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    values: BTreeMap<String, String>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style property setter.
    pub fn with(mut self, prop: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(prop.into(), value.into());
        self
    }

    pub fn set(&mut self, prop: impl Into<String>, value: impl Into<String>) {
        self.values.insert(prop.into(), value.into());
    }

    pub fn get(&self, prop: &str) -> Option<&str> {
        self.values.get(prop).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Structural match: every property of `self` is present in `other`
    /// with an equal value. Selection removal uses this, which means
    /// duplicate rows match each other and are removed together.
    pub fn matches(&self, other: &Row) -> bool {
        self.values
            .iter()
            .all(|(prop, value)| other.get(prop) == Some(value.as_str()))
    }

    /// Produce the text for one body cell of this row.
    ///
    /// `checked` and `expanded` drive the control-column glyphs; plain
    /// columns go through the content renderer when one is set.
    pub fn cell_text(
        &self,
        row_index: usize,
        column: &ColumnSpec,
        checked: bool,
        expanded: bool,
    ) -> String {
        match column.kind {
            ColumnKind::Index => (row_index + 1).to_string(),
            ColumnKind::Checkbox => checkbox_glyph(checked).to_string(),
            ColumnKind::Expand => expand_glyph(expanded).to_string(),
            ColumnKind::Plain => match &column.renderer {
                Some(render) => render(self),
                None => self.get(&column.prop).unwrap_or("").to_string(),
            },
        }
    }

    /// Measured display width of this row's cell in the given column.
    /// Reported upward to seed the column's minimum width.
    pub fn cell_width(&self, row_index: usize, column: &ColumnSpec) -> u16 {
        display_width(&self.cell_text(row_index, column, false, false))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Checkbox glyph for a body cell.
pub(super) fn checkbox_glyph(checked: bool) -> &'static str {
    if checked { "■" } else { "□" }
}

/// Expansion-toggle glyph for a body cell.
pub(super) fn expand_glyph(expanded: bool) -> &'static str {
    if expanded { "▾" } else { "▸" }
}
