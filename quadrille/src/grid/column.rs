//! Column specification for the data grid.

use std::fmt;
use std::sync::Arc;

use super::row::Row;

/// Default width for control columns (index, checkbox, expand) when the
/// owner doesn't specify one.
pub const CONTROL_COLUMN_WIDTH: u16 = 40;

/// Owner-supplied cell content. For a `Plain` column this replaces the
/// default `prop` lookup; for an `Expand` column it produces the expansion
/// body shown beneath the row.
pub type CellRenderer = Arc<dyn Fn(&Row) -> String + Send + Sync>;

/// Horizontal alignment for column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// What a column renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnKind {
    /// Renders the row's `prop` value (or the content renderer's output).
    #[default]
    Plain,
    /// Renders the row ordinal.
    Index,
    /// Renders a per-row checkbox; the header shows the select-all control.
    Checkbox,
    /// Renders an expansion toggle; the expansion body comes from the
    /// column's content renderer.
    Expand,
}

impl ColumnKind {
    /// Control columns render fixed-purpose cells: they are center-aligned
    /// and never take part in shrink-to-content measurement or slack
    /// distribution.
    pub fn is_control(self) -> bool {
        !matches!(self, ColumnKind::Plain)
    }
}

/// A column definition.
///
/// Built through the kind constructors plus chained setters:
///
/// ```ignore
/// let col = ColumnSpec::plain("Name", "name").width(24).sortable().fixed();
/// ```
#[derive(Clone)]
pub struct ColumnSpec {
    /// What this column renders.
    pub kind: ColumnKind,
    /// Header text.
    pub label: String,
    /// Row property this column displays (`Plain` columns).
    pub prop: String,
    /// Owner-specified width in cells; 0 means unset (auto-computed).
    pub width: u16,
    /// Pinned to the fixed sub-table.
    pub fixed: bool,
    /// Header click toggles sort state.
    pub sortable: bool,
    /// Horizontal alignment of header and cells.
    pub align: Alignment,
    /// Explicit minimum width, overriding the measured one.
    pub min_width: Option<u16>,
    /// Owner-supplied content renderer.
    pub renderer: Option<CellRenderer>,
}

impl ColumnSpec {
    fn with_kind(kind: ColumnKind) -> Self {
        Self {
            kind,
            label: String::new(),
            prop: String::new(),
            width: 0,
            fixed: false,
            sortable: false,
            align: if kind.is_control() {
                Alignment::Center
            } else {
                Alignment::Left
            },
            min_width: None,
            renderer: None,
        }
    }

    /// A data column displaying `prop` under the `label` header.
    pub fn plain(label: impl Into<String>, prop: impl Into<String>) -> Self {
        let mut col = Self::with_kind(ColumnKind::Plain);
        col.label = label.into();
        col.prop = prop.into();
        col
    }

    /// A row-ordinal column.
    pub fn index() -> Self {
        Self::with_kind(ColumnKind::Index)
    }

    /// A selection-checkbox column.
    pub fn checkbox() -> Self {
        Self::with_kind(ColumnKind::Checkbox)
    }

    /// An expansion-toggle column. The expansion body is produced by the
    /// content renderer set with [`ColumnSpec::renderer`].
    pub fn expand() -> Self {
        Self::with_kind(ColumnKind::Expand)
    }

    /// Set the owner-specified width in cells.
    pub fn width(mut self, width: u16) -> Self {
        self.width = width;
        self
    }

    /// Pin the column to the fixed sub-table.
    pub fn fixed(mut self) -> Self {
        self.fixed = true;
        self
    }

    /// Make the column header toggle sort state on click.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Set the column alignment.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Override the computed minimum width.
    pub fn min_width(mut self, min: u16) -> Self {
        self.min_width = Some(min);
        self
    }

    /// Set the content renderer.
    pub fn renderer<F>(mut self, renderer: F) -> Self
    where
        F: Fn(&Row) -> String + Send + Sync + 'static,
    {
        self.renderer = Some(Arc::new(renderer));
        self
    }

    /// Width this column starts out with: the owner's width, or the control
    /// default for control columns, or 0 (auto) for plain columns.
    pub fn initial_width(&self) -> u16 {
        if self.kind.is_control() && self.width == 0 {
            CONTROL_COLUMN_WIDTH
        } else {
            self.width
        }
    }

    /// Whether the column border can be dragged to resize.
    pub fn resizable(&self) -> bool {
        self.kind == ColumnKind::Plain
    }
}

impl fmt::Debug for ColumnSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnSpec")
            .field("kind", &self.kind)
            .field("label", &self.label)
            .field("prop", &self.prop)
            .field("width", &self.width)
            .field("fixed", &self.fixed)
            .field("sortable", &self.sortable)
            .field("align", &self.align)
            .field("min_width", &self.min_width)
            .field("renderer", &self.renderer.is_some())
            .finish()
    }
}
