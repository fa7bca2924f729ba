//! The data-grid widget.
//!
//! The grid provides:
//! - Column-based layout with auto-fit width distribution
//! - Pinned (fixed) columns rendered as a synchronized left sub-table
//! - Fixed bottom rows pinned beneath the scrolling body
//! - Row selection with a tri-state select-all control
//! - Row expansion with owner-supplied content
//! - Interactive column resizing with a live drag indicator
//! - Zebra striping and an empty-state placeholder
//!
//! # Example
//!
//! ```ignore
//! use quadrille::prelude::*;
//!
//! let columns = vec![
//!     ColumnSpec::checkbox().fixed(),
//!     ColumnSpec::index().fixed(),
//!     ColumnSpec::plain("Host", "host").sortable(),
//!     ColumnSpec::plain("Status", "status").width(12),
//! ];
//! let rows = vec![
//!     Row::new().with("host", "alpha").with("status", "up"),
//!     Row::new().with("host", "beta").with("status", "down"),
//! ];
//! let grid = DataGrid::new(columns)
//!     .with_rows(rows)
//!     .with_body_height(20)
//!     .with_zebra(true)
//!     .on_selection_change(|checked| println!("{} rows checked", checked.len()));
//! ```

pub mod column;
pub mod events;
mod render;
pub mod resize;
pub mod row;
pub mod selection;
mod state;
pub mod sync;
pub mod width;

pub use column::{Alignment, CellRenderer, ColumnKind, ColumnSpec, CONTROL_COLUMN_WIDTH};
pub use events::EventResult;
pub use resize::BorderDrag;
pub use row::Row;
pub use selection::{CheckedState, RowSelection};
pub use state::{DataGrid, GridId};
pub use sync::SyncState;
pub use width::{Minimums, WidthSolution, HEADER_PADDING};
