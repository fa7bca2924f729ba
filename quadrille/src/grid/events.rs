//! Event dispatch for the grid.
//!
//! The host translates terminal input into [`PointerEvent`]s (or calls the
//! `on_*` methods directly) and re-renders when the grid reports dirty.
//! Handlers decide what to do under the lock, then apply mutations through
//! the public operations after releasing it, so selection callbacks never
//! run while the state is locked.

use quadrille_core::events::{Modifiers, MouseButton, PointerEvent, ScrollDirection};

use super::column::ColumnKind;
use super::resize::{self, BorderDrag};
use super::row::Row;
use super::state::{DataGrid, GridInner};

/// Result of handling an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
    /// Event started a drag operation on this widget.
    StartDrag,
}

impl EventResult {
    /// Check if the event was handled (consumed or started a drag).
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}

/// What a header click landed on.
enum HeaderHit {
    /// The resize border of a column.
    Border(usize),
    /// The select-all control.
    SelectAll,
    /// A sortable column's header.
    Sort(usize),
}

/// Deferred click outcome, executed after the lock is released.
enum ClickAction {
    ToggleAll,
    ToggleSort(usize),
    ToggleRow(Row, bool),
    ToggleExpand(usize, usize),
}

impl DataGrid {
    /// Dispatch one translated pointer event.
    pub fn on_pointer(&self, event: &PointerEvent) -> EventResult {
        match event {
            PointerEvent::Click(click) => match click.button {
                MouseButton::Left => {
                    self.on_click(click.position.x, click.position.y, click.modifiers)
                }
                _ => EventResult::Ignored,
            },
            PointerEvent::Move(pos) => self.on_hover(pos.x, pos.y),
            PointerEvent::Drag(pos) => self.on_drag(pos.x, pos.y),
            PointerEvent::Release(pos) => self.on_release(pos.x, pos.y),
            PointerEvent::Scroll(scroll) => self.on_scroll(scroll.direction, scroll.amount),
        }
    }

    /// Handle a primary click.
    pub fn on_click(&self, x: u16, y: u16, _modifiers: Modifiers) -> EventResult {
        let action = {
            let Ok(mut guard) = self.inner.write() else {
                return EventResult::Ignored;
            };
            if guard.columns.is_empty() || !guard.viewport.contains(x, y) {
                return EventResult::Ignored;
            }

            if y == guard.viewport.y {
                match Self::header_hit(&guard, x) {
                    Some(HeaderHit::Border(col)) => {
                        let offset = Self::drag_offset(&guard, x);
                        guard.drag = Some(BorderDrag::begin(col, offset));
                        log::debug!(
                            "[DataGrid::on_click] border drag start col={} offset={}",
                            col,
                            offset
                        );
                        drop(guard);
                        self.mark_dirty();
                        return EventResult::StartDrag;
                    }
                    Some(HeaderHit::SelectAll) => ClickAction::ToggleAll,
                    Some(HeaderHit::Sort(col)) => ClickAction::ToggleSort(col),
                    None => return EventResult::Ignored,
                }
            } else {
                let Some((row_idx, col_idx)) = Self::body_hit(&guard, x, y) else {
                    return EventResult::Ignored;
                };
                let Some(column) = guard.columns.get(col_idx) else {
                    return EventResult::Ignored;
                };
                match column.kind {
                    ColumnKind::Checkbox => {
                        let Some(row) = guard.rows.get(row_idx).cloned() else {
                            return EventResult::Ignored;
                        };
                        let checked = guard.selection.is_checked(&row);
                        ClickAction::ToggleRow(row, !checked)
                    }
                    ColumnKind::Expand => ClickAction::ToggleExpand(row_idx, col_idx),
                    _ => return EventResult::Ignored,
                }
            }
        };

        match action {
            ClickAction::ToggleAll => self.toggle_all(),
            ClickAction::ToggleSort(col) => {
                self.toggle_sort(col);
            }
            ClickAction::ToggleRow(row, checked) => self.set_row_checked(&row, checked),
            ClickAction::ToggleExpand(row, col) => self.toggle_expand(row, col),
        }
        EventResult::Consumed
    }

    /// Track the pointer for the hover highlight; both surfaces follow.
    pub fn on_hover(&self, x: u16, y: u16) -> EventResult {
        let (inside, row) = {
            let Ok(guard) = self.inner.read() else {
                return EventResult::Ignored;
            };
            let inside = guard.viewport.contains(x, y);
            let row = if guard.body_area.contains(x, y) {
                Self::body_row_at(&guard, x, y)
            } else {
                None
            };
            (inside, row)
        };
        self.hover(row);
        if inside {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }

    /// Move the live resize indicator while a border drag is active.
    pub fn on_drag(&self, x: u16, _y: u16) -> EventResult {
        if let Ok(mut guard) = self.inner.write() {
            if guard.drag.is_none() {
                return EventResult::Ignored;
            }
            let offset = Self::drag_offset(&guard, x);
            if let Some(drag) = guard.drag.as_mut() {
                drag.move_to(offset);
            }
            drop(guard);
            self.mark_dirty();
            return EventResult::Consumed;
        }
        EventResult::Ignored
    }

    /// Finish a border drag: clamp to the column minimum, absorb any
    /// container shortfall, and commit the new width list atomically. A
    /// drag that never moved is a no-op.
    pub fn on_release(&self, x: u16, _y: u16) -> EventResult {
        if let Ok(mut guard) = self.inner.write() {
            let Some(mut drag) = guard.drag.take() else {
                return EventResult::Ignored;
            };
            drag.move_to(Self::drag_offset(&guard, x));
            let delta = drag.delta();
            if delta != 0
                && let Some(column) = guard.columns.get(drag.column)
            {
                let min = guard.minimums.column_min(drag.column, column);
                let lane = guard.placeholder.unwrap_or(0);
                let container = guard.viewport.width.saturating_sub(lane);
                if let Some(solution) =
                    resize::commit(&guard.width_list, drag.column, delta, min, container)
                {
                    log::debug!(
                        "[DataGrid::resize] col={} delta={} width={} total={}",
                        drag.column,
                        delta,
                        solution.widths[drag.column],
                        solution.total
                    );
                    guard.width_list = solution.widths;
                    guard.computed_width = solution.total.saturating_add(lane);
                }
            }
            drop(guard);
            self.mark_dirty();
            return EventResult::Consumed;
        }
        EventResult::Ignored
    }

    /// Wheel scroll: vertical drives the main body (mirrored to the fixed
    /// surface), horizontal drives the main surface and the shadow.
    pub fn on_scroll(&self, direction: ScrollDirection, amount: u16) -> EventResult {
        let (top, left) = {
            let Ok(guard) = self.inner.read() else {
                return EventResult::Ignored;
            };
            (guard.scroll_top, guard.scroll_left)
        };
        match direction {
            ScrollDirection::Up => self.scroll_body(top.saturating_sub(amount)),
            ScrollDirection::Down => self.scroll_body(top.saturating_add(amount)),
            ScrollDirection::Left => self.scroll_horizontal(left.saturating_sub(amount)),
            ScrollDirection::Right => self.scroll_horizontal(left.saturating_add(amount)),
        }
        EventResult::Consumed
    }

    // -------------------------------------------------------------------------
    // Hit testing
    // -------------------------------------------------------------------------

    /// Pointer offset relative to the table's scroll-adjusted origin, the
    /// coordinate space of the resize indicator.
    fn drag_offset(guard: &GridInner, x: u16) -> u16 {
        x.saturating_sub(guard.viewport.x)
            .saturating_add(guard.scroll_left)
    }

    /// Find the column under an absolute x, on whichever surface the
    /// pointer is over, plus whether it landed on the column's right border
    /// cell.
    fn surface_column_hit(guard: &GridInner, x: u16) -> Option<(usize, bool)> {
        let rel = x.checked_sub(guard.viewport.x)?;

        if guard.has_fixed && rel < guard.fixed_width() {
            // The fixed surface packs pinned columns together and never
            // scrolls horizontally.
            let mut off = 0u16;
            for (i, (col, w)) in guard.columns.iter().zip(&guard.width_list).enumerate() {
                if !col.fixed {
                    continue;
                }
                if *w > 0 && rel >= off && rel < off.saturating_add(*w) {
                    return Some((i, rel == off.saturating_add(*w) - 1));
                }
                off = off.saturating_add(*w);
            }
            return None;
        }

        let content_x = rel.checked_add(guard.scroll_left)?;
        let mut off = 0u16;
        for (i, w) in guard.width_list.iter().enumerate() {
            if *w > 0 && content_x >= off && content_x < off.saturating_add(*w) {
                return Some((i, content_x == off.saturating_add(*w) - 1));
            }
            off = off.saturating_add(*w);
        }
        None
    }

    fn header_hit(guard: &GridInner, x: u16) -> Option<HeaderHit> {
        let (col, on_border) = Self::surface_column_hit(guard, x)?;
        let column = guard.columns.get(col)?;
        if on_border && column.resizable() {
            return Some(HeaderHit::Border(col));
        }
        match column.kind {
            ColumnKind::Checkbox => Some(HeaderHit::SelectAll),
            ColumnKind::Plain if column.sortable => Some(HeaderHit::Sort(col)),
            _ => None,
        }
    }

    /// Row index under an absolute body position, honoring each surface's
    /// own vertical offset.
    fn body_row_at(guard: &GridInner, x: u16, y: u16) -> Option<usize> {
        let rel_y = y.checked_sub(guard.body_area.y)?;
        let in_fixed =
            guard.has_fixed && x.saturating_sub(guard.viewport.x) < guard.fixed_width();
        let offset = if in_fixed {
            guard.sync.fixed_scroll_top
        } else {
            guard.scroll_top
        };
        guard.row_at_line(offset.saturating_add(rel_y))
    }

    fn body_hit(guard: &GridInner, x: u16, y: u16) -> Option<(usize, usize)> {
        if !guard.body_area.contains(x, y) {
            return None;
        }
        let (col, _) = Self::surface_column_hit(guard, x)?;
        let row = Self::body_row_at(guard, x, y)?;
        Some((row, col))
    }
}
