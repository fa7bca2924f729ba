//! A data-grid widget for the terminal.
//!
//! Given a column specification and a row dataset, [`DataGrid`] renders a
//! scrollable table with pinned (fixed) columns, fixed bottom rows, per-row
//! selection, per-row expansion, interactive column resizing, zebra striping,
//! and auto-fit column-width distribution. The fixed-column sub-table and the
//! main table are painted from one shared layout state, so they stay visually
//! and behaviorally synchronized.

pub mod grid;

pub use grid::{
    Alignment, BorderDrag, CheckedState, ColumnKind, ColumnSpec, DataGrid, EventResult, GridId,
    Minimums, Row, RowSelection, SyncState, WidthSolution,
};

pub mod prelude {
    pub use crate::grid::{
        Alignment, CheckedState, ColumnKind, ColumnSpec, DataGrid, EventResult, Row,
    };
    pub use quadrille_core::{
        ClickEvent, Modifiers, MouseButton, PointerEvent, Position, ScrollDirection, ScrollEvent,
    };
}
