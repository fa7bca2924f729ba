//! Cross-surface synchronization between the fixed and main tables.
//!
//! The two surfaces render the same rows independently, so hover, row
//! expansion, and the vertical scroll position are broadcast through this
//! one state object rather than duplicated per surface. The main surface is
//! authoritative for scrolling: its offset is mirrored onto the fixed
//! surface, never the other way around.

/// Shared view state read by both table surfaces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncState {
    /// Row index currently under the pointer.
    pub hovered_row: Option<usize>,
    /// Expanded cell as `(row, column)`; at most one row is expanded.
    pub expanded: Option<(usize, usize)>,
    /// Whether the fixed sub-table casts its shadow (main surface is
    /// horizontally scrolled, so content is obscured beneath it).
    pub shadow: bool,
    /// The fixed surface's vertical offset, mirrored from the main body.
    pub fixed_scroll_top: u16,
}

impl SyncState {
    /// Move hover to a row (or clear it). Returns true if anything changed.
    pub fn hover(&mut self, row: Option<usize>) -> bool {
        if self.hovered_row == row {
            return false;
        }
        self.hovered_row = row;
        true
    }

    /// Toggle expansion of a cell: expanding a second cell collapses the
    /// first.
    pub fn toggle_expand(&mut self, row: usize, column: usize) {
        self.expanded = if self.expanded == Some((row, column)) {
            None
        } else {
            Some((row, column))
        };
    }

    /// Mirror the main body's vertical offset onto the fixed surface.
    pub fn mirror_scroll(&mut self, main_scroll_top: u16) {
        self.fixed_scroll_top = main_scroll_top;
    }

    /// Update the shadow flag from the main surface's horizontal offset.
    /// Returns true if the flag flipped.
    pub fn set_scrolled(&mut self, scroll_left: u16) -> bool {
        let shadow = scroll_left > 0;
        if self.shadow == shadow {
            return false;
        }
        self.shadow = shadow;
        true
    }
}
