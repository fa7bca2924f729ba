//! Grid state container.
//!
//! All mutable state lives behind one `Arc<RwLock<GridInner>>` shared by the
//! renderer and the event handlers, with an atomic dirty flag the host polls
//! to decide when to redraw. Lock accessors are poison-tolerant: a poisoned
//! lock degrades to a default or a no-op, never a panic.

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use quadrille_core::geometry::Rect;

use super::column::ColumnSpec;
use super::resize::BorderDrag;
use super::row::Row;
use super::selection::{CheckedState, RowSelection};
use super::sync::SyncState;
use super::width::{self, Minimums};

/// Unique identifier for a grid instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridId(usize);

impl GridId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl fmt::Display for GridId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "__grid_{}", self.0)
    }
}

/// Default empty-state message when the owner doesn't supply one.
pub(super) const DEFAULT_EMPTY_TIP: &str = "no data";

/// Internal state for the grid.
#[derive(Debug)]
pub(super) struct GridInner {
    /// Column definitions, treated immutable per render cycle.
    pub columns: Vec<ColumnSpec>,
    /// The scrolling row dataset.
    pub rows: Vec<Row>,
    /// Rows pinned beneath the scrolling body.
    pub fixed_rows: Vec<Row>,
    /// One width per column. Replaced wholesale by the width engine or a
    /// resize commit; the two surfaces never see a partially updated list.
    pub width_list: Vec<u16>,
    /// Total computed width: sum of widths plus the placeholder lane.
    pub computed_width: u16,
    /// Reserved vertical-scrollbar lane width, when one is shown.
    pub placeholder: Option<u16>,
    /// Measured minimums feeding the width engine.
    pub minimums: Minimums,
    /// Checked rows plus the tri-state indicator.
    pub selection: RowSelection,
    /// Cross-surface view state (hover, expansion, shadow, mirrored
    /// scroll).
    pub sync: SyncState,
    /// Whether any column is pinned, i.e. the fixed surface exists.
    pub has_fixed: bool,
    /// Active column-border drag.
    pub drag: Option<BorderDrag>,
    /// Sort state as (column index, ascending). Stored and displayed only;
    /// the owner sorts the data and replaces the rows.
    pub sort: Option<(usize, bool)>,
    /// Main body vertical offset in content lines.
    pub scroll_top: u16,
    /// Main surface horizontal offset in cells.
    pub scroll_left: u16,
    /// Owner-requested body height; vertical scrolling only happens when
    /// set.
    pub body_height: Option<u16>,
    pub zebra: bool,
    pub empty_tip: Option<String>,
    /// Outer area of the last render, for hit testing.
    pub viewport: Rect,
    /// Main body rows region of the last render.
    pub body_area: Rect,
    /// First structure pass (header measurement + width correction) done.
    pub initialized: bool,
    /// Run the structure pass on the next render.
    pub needs_layout: bool,
}

impl GridInner {
    fn new(columns: Vec<ColumnSpec>) -> Self {
        let width_list: Vec<u16> = columns.iter().map(ColumnSpec::initial_width).collect();
        let computed_width = width_list
            .iter()
            .fold(0u16, |acc, w| acc.saturating_add(*w));
        let has_fixed = columns.iter().any(|c| c.fixed);
        let minimums = Minimums::new(columns.len());
        Self {
            columns,
            rows: Vec::new(),
            fixed_rows: Vec::new(),
            width_list,
            computed_width,
            placeholder: None,
            minimums,
            selection: RowSelection::new(),
            sync: SyncState::default(),
            has_fixed,
            drag: None,
            sort: None,
            scroll_top: 0,
            scroll_left: 0,
            body_height: None,
            zebra: false,
            empty_tip: None,
            viewport: Rect::default(),
            body_area: Rect::default(),
            initialized: false,
            needs_layout: true,
        }
    }

    /// Expansion body lines for a row, if that row is the expanded one.
    pub fn expansion_lines(&self, row_index: usize) -> Vec<String> {
        let Some((row, col)) = self.sync.expanded else {
            return Vec::new();
        };
        if row != row_index {
            return Vec::new();
        }
        let (Some(column), Some(data)) = (self.columns.get(col), self.rows.get(row)) else {
            return Vec::new();
        };
        let Some(render) = &column.renderer else {
            return Vec::new();
        };
        render(data).lines().map(str::to_string).collect()
    }

    /// Extra lines a row occupies because it is expanded.
    pub fn expansion_height(&self, row_index: usize) -> u16 {
        self.expansion_lines(row_index).len() as u16
    }

    /// Total scrollable content height in lines (rows plus expansion).
    pub fn content_lines(&self) -> u16 {
        let expansion = self
            .sync
            .expanded
            .map(|(row, _)| self.expansion_height(row))
            .unwrap_or(0);
        (self.rows.len().min(usize::from(u16::MAX)) as u16).saturating_add(expansion)
    }

    /// Height of the pinned bottom-row band.
    pub fn fixed_band_height(&self) -> u16 {
        self.fixed_rows.len().min(usize::from(u16::MAX)) as u16
    }

    /// Whether the main surface scrolls horizontally.
    pub fn scrolls_x(&self) -> bool {
        self.computed_width > self.viewport.width
    }

    /// Displayed body height: the owner-requested height clamped to what
    /// the viewport leaves after the header, the pinned band, and the
    /// horizontal-scrollbar lane.
    pub fn body_viewport(&self) -> u16 {
        let chrome = 1u16
            .saturating_add(u16::from(self.scrolls_x()))
            .saturating_add(self.fixed_band_height());
        let avail = self.viewport.height.saturating_sub(chrome);
        match self.body_height {
            Some(h) => h.min(avail),
            None => avail,
        }
    }

    pub fn max_scroll_top(&self) -> u16 {
        if self.body_height.is_none() {
            return 0;
        }
        self.content_lines().saturating_sub(self.body_viewport())
    }

    pub fn max_scroll_left(&self) -> u16 {
        self.computed_width.saturating_sub(self.viewport.width)
    }

    /// Width of the fixed sub-table: the pinned columns' shared widths.
    pub fn fixed_width(&self) -> u16 {
        self.columns
            .iter()
            .zip(&self.width_list)
            .filter(|(col, _)| col.fixed)
            .fold(0u16, |acc, (_, w)| acc.saturating_add(*w))
    }

    /// Map a content line index to the data row occupying it. Lines inside
    /// an expansion region map to `None`.
    pub fn row_at_line(&self, line: u16) -> Option<usize> {
        let mut current = 0u16;
        for i in 0..self.rows.len() {
            if line == current {
                return Some(i);
            }
            current = current.saturating_add(1);
            let ext = self.expansion_height(i);
            if line < current.saturating_add(ext) {
                return None;
            }
            current = current.saturating_add(ext);
        }
        None
    }

    /// The structure pass: probe for the scrollbar lane, then run the width
    /// engine over the current widths and measurements. Returns true if the
    /// layout changed.
    pub fn init_structure(&mut self) -> bool {
        let area = self.viewport;
        if area.width == 0 || self.columns.is_empty() {
            return false;
        }

        // Scrollbar probe: reserve the lane before distributing widths so
        // the columns fill exactly the space beside it.
        let lane = match self.body_height {
            Some(h) => u16::from(self.content_lines() > h),
            None => 0,
        };
        let container = area.width.saturating_sub(lane);

        let solution = width::solve(&self.columns, &self.width_list, &self.minimums, container);
        let computed = solution.total.saturating_add(lane);
        let changed = solution.widths != self.width_list
            || computed != self.computed_width
            || (lane > 0) != self.placeholder.is_some();

        log::debug!(
            "[DataGrid::init_structure] container={} lane={} total={} widths={:?}",
            container,
            lane,
            solution.total,
            solution.widths
        );

        self.width_list = solution.widths;
        self.placeholder = (lane > 0).then_some(lane);
        self.computed_width = computed;
        self.needs_layout = false;
        changed
    }
}

/// The data-grid widget.
///
/// Cheap to clone; clones share the same state. The grid is configured with
/// builder-style setters, rendered with [`DataGrid::render`], and driven
/// with the `on_*` event methods.
pub struct DataGrid {
    id: GridId,
    pub(super) inner: Arc<RwLock<GridInner>>,
    pub(super) dirty: Arc<AtomicBool>,
    pub(super) on_selection_change: Option<Arc<dyn Fn(&[Row]) + Send + Sync>>,
}

impl DataGrid {
    /// Create a grid with column definitions.
    pub fn new(columns: Vec<ColumnSpec>) -> Self {
        Self {
            id: GridId::new(),
            inner: Arc::new(RwLock::new(GridInner::new(columns))),
            dirty: Arc::new(AtomicBool::new(false)),
            on_selection_change: None,
        }
    }

    /// Set the initial row dataset.
    pub fn with_rows(self, rows: Vec<Row>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.rows = rows;
        }
        self
    }

    /// Set rows pinned beneath the scrolling body.
    pub fn with_fixed_rows(self, rows: Vec<Row>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.fixed_rows = rows;
        }
        self
    }

    /// Set the body height in lines; vertical scrolling requires it.
    pub fn with_body_height(self, height: u16) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.body_height = Some(height);
        }
        self
    }

    /// Enable zebra striping.
    pub fn with_zebra(self, zebra: bool) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.zebra = zebra;
        }
        self
    }

    /// Set the empty-state message shown when there are no rows.
    pub fn with_empty_tip(self, tip: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.empty_tip = Some(tip.into());
        }
        self
    }

    /// Register the selection-changed callback. It receives the full
    /// current selection after every mutation.
    pub fn on_selection_change<F>(mut self, f: F) -> Self
    where
        F: Fn(&[Row]) + Send + Sync + 'static,
    {
        self.on_selection_change = Some(Arc::new(f));
        self
    }

    /// Get the unique ID.
    pub fn id(&self) -> GridId {
        self.id
    }

    /// Get the ID as a string.
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Get the column definitions.
    pub fn columns(&self) -> Vec<ColumnSpec> {
        self.inner
            .read()
            .map(|g| g.columns.clone())
            .unwrap_or_default()
    }

    /// Get the number of rows.
    pub fn len(&self) -> usize {
        self.inner.read().map(|g| g.rows.len()).unwrap_or(0)
    }

    /// Check if the grid has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current width list, one entry per column.
    pub fn width_list(&self) -> Vec<u16> {
        self.inner
            .read()
            .map(|g| g.width_list.clone())
            .unwrap_or_default()
    }

    /// Total computed width (column widths plus the placeholder lane).
    pub fn computed_width(&self) -> u16 {
        self.inner.read().map(|g| g.computed_width).unwrap_or(0)
    }

    /// Reserved scrollbar-lane width, when one is shown.
    pub fn placeholder(&self) -> Option<u16> {
        self.inner.read().ok().and_then(|g| g.placeholder)
    }

    /// Rows currently checked, in check order.
    pub fn checked_rows(&self) -> Vec<Row> {
        self.inner
            .read()
            .map(|g| g.selection.checked().to_vec())
            .unwrap_or_default()
    }

    /// Tri-state select-all indicator.
    pub fn checked_state(&self) -> CheckedState {
        self.inner
            .read()
            .map(|g| g.selection.state())
            .unwrap_or_default()
    }

    /// Cross-surface sync state. Only present when at least one column is
    /// fixed; without a fixed surface there is nothing to synchronize.
    pub fn sync_state(&self) -> Option<SyncState> {
        self.inner
            .read()
            .ok()
            .and_then(|g| g.has_fixed.then_some(g.sync))
    }

    /// Currently expanded cell as `(row, column)`.
    pub fn expanded_cell(&self) -> Option<(usize, usize)> {
        self.inner.read().ok().and_then(|g| g.sync.expanded)
    }

    /// Row index under the pointer.
    pub fn hovered_row(&self) -> Option<usize> {
        self.inner.read().ok().and_then(|g| g.sync.hovered_row)
    }

    /// Current sort state as (column index, ascending).
    pub fn sort(&self) -> Option<(usize, bool)> {
        self.inner.read().ok().and_then(|g| g.sort)
    }

    /// Main body vertical offset.
    pub fn scroll_top(&self) -> u16 {
        self.inner.read().map(|g| g.scroll_top).unwrap_or(0)
    }

    /// Main surface horizontal offset.
    pub fn scroll_left(&self) -> u16 {
        self.inner.read().map(|g| g.scroll_left).unwrap_or(0)
    }

    /// Active column-border drag, if any.
    pub fn active_drag(&self) -> Option<BorderDrag> {
        self.inner.read().ok().and_then(|g| g.drag)
    }

    // -------------------------------------------------------------------------
    // Row and column mutation
    // -------------------------------------------------------------------------

    /// Replace the row dataset. Selection is kept verbatim; the structure
    /// pass reruns on the next render.
    pub fn set_rows(&self, rows: Vec<Row>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.rows = rows;
            guard.needs_layout = true;
            if let Some((row, _)) = guard.sync.expanded
                && row >= guard.rows.len()
            {
                guard.sync.expanded = None;
            }
            if let Some(row) = guard.sync.hovered_row
                && row >= guard.rows.len()
            {
                guard.sync.hovered_row = None;
            }
            let top = guard.scroll_top.min(guard.max_scroll_top());
            guard.scroll_top = top;
            if guard.has_fixed {
                guard.sync.mirror_scroll(top);
            }
            self.mark_dirty();
        }
    }

    /// Replace the column definitions: widths, measurements, sort, and the
    /// horizontal scroll are re-initialized; selection is kept.
    pub fn set_columns(&self, columns: Vec<ColumnSpec>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.width_list = columns.iter().map(ColumnSpec::initial_width).collect();
            guard.computed_width = guard
                .width_list
                .iter()
                .fold(0u16, |acc, w| acc.saturating_add(*w));
            guard.minimums.reset(columns.len());
            guard.has_fixed = columns.iter().any(|c| c.fixed);
            guard.columns = columns;
            guard.placeholder = None;
            guard.sync = SyncState::default();
            guard.drag = None;
            guard.sort = None;
            guard.scroll_left = 0;
            guard.initialized = false;
            guard.needs_layout = true;
            self.mark_dirty();
        }
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Select-all toggle: everything checked clears, anything else checks
    /// every row. Broadcasts the new selection.
    pub fn toggle_all(&self) {
        let snapshot = if let Ok(mut guard) = self.inner.write() {
            let rows = guard.rows.clone();
            let checked = guard.selection.toggle_all(&rows).to_vec();
            log::debug!(
                "[DataGrid::toggle_all] checked={} state={:?}",
                checked.len(),
                guard.selection.state()
            );
            Some(checked)
        } else {
            None
        };
        if let Some(checked) = snapshot {
            self.mark_dirty();
            self.emit_selection(&checked);
        }
    }

    /// Check or uncheck one row. Broadcasts the new selection.
    pub fn set_row_checked(&self, row: &Row, checked: bool) {
        let snapshot = if let Ok(mut guard) = self.inner.write() {
            let total = guard.rows.len();
            let checked = guard.selection.set_checked(row, checked, total).to_vec();
            log::debug!(
                "[DataGrid::set_row_checked] checked={} state={:?}",
                checked.len(),
                guard.selection.state()
            );
            Some(checked)
        } else {
            None
        };
        if let Some(checked) = snapshot {
            self.mark_dirty();
            self.emit_selection(&checked);
        }
    }

    /// Drop the whole selection. Broadcasts the (empty) selection.
    pub fn clear_selection(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.selection.clear();
        }
        self.mark_dirty();
        self.emit_selection(&[]);
    }

    pub(super) fn emit_selection(&self, checked: &[Row]) {
        if let Some(callback) = &self.on_selection_change {
            callback(checked);
        }
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// Toggle sort for a column.
    ///
    /// A column already sorted flips direction; a different column starts
    /// ascending. This does NOT sort the rows — it stores the indicator
    /// state; the owner sorts the data and calls `set_rows()`.
    pub fn toggle_sort(&self, column: usize) -> Option<(usize, bool)> {
        if let Ok(mut guard) = self.inner.write()
            && guard.columns.get(column).is_some_and(|c| c.sortable)
        {
            let next = match guard.sort {
                Some((i, ascending)) if i == column => (column, !ascending),
                _ => (column, true),
            };
            guard.sort = Some(next);
            self.mark_dirty();
            return Some(next);
        }
        None
    }

    // -------------------------------------------------------------------------
    // Scrolling
    // -------------------------------------------------------------------------

    /// Set the main body's vertical offset. With a fixed surface present
    /// the offset is mirrored onto it — the main body is authoritative.
    pub fn scroll_body(&self, top: u16) {
        if let Ok(mut guard) = self.inner.write() {
            let top = top.min(guard.max_scroll_top());
            let changed = top != guard.scroll_top;
            guard.scroll_top = top;
            if guard.has_fixed {
                guard.sync.mirror_scroll(top);
            }
            if changed {
                self.mark_dirty();
            }
        }
    }

    /// Set the main surface's horizontal offset, updating the fixed-column
    /// shadow.
    pub fn scroll_horizontal(&self, left: u16) {
        if let Ok(mut guard) = self.inner.write() {
            let left = left.min(guard.max_scroll_left());
            let changed = left != guard.scroll_left;
            guard.scroll_left = left;
            let flipped = guard.has_fixed && guard.sync.set_scrolled(left);
            if changed || flipped {
                self.mark_dirty();
            }
        }
    }

    // -------------------------------------------------------------------------
    // Hover and expansion
    // -------------------------------------------------------------------------

    /// Move hover to a row (or clear it); both surfaces highlight it.
    pub fn hover(&self, row: Option<usize>) {
        if let Ok(mut guard) = self.inner.write()
            && guard.sync.hover(row)
        {
            self.mark_dirty();
        }
    }

    /// Toggle expansion of a cell; both surfaces expand the row.
    pub fn toggle_expand(&self, row: usize, column: usize) {
        if let Ok(mut guard) = self.inner.write() {
            guard.sync.toggle_expand(row, column);
            // Expansion changes the content height; keep the offset valid.
            let top = guard.scroll_top.min(guard.max_scroll_top());
            guard.scroll_top = top;
            if guard.has_fixed {
                guard.sync.mirror_scroll(top);
            }
            self.mark_dirty();
        }
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the grid has changed since the last render.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    pub(super) fn mark_dirty(&self) {
        self.dirty.store(true, Ordering::SeqCst);
    }
}

impl Clone for DataGrid {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
            on_selection_change: self.on_selection_change.clone(),
        }
    }
}

impl fmt::Debug for DataGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataGrid")
            .field("id", &self.id)
            .field("inner", &self.inner)
            .field("on_selection_change", &self.on_selection_change.is_some())
            .finish_non_exhaustive()
    }
}
