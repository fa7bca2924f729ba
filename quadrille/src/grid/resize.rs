//! Column-border drag: Idle → Dragging → Idle.
//!
//! While a drag is live only the visual indicator moves; widths mutate
//! once, at commit. Offsets are measured relative to the table's
//! scroll-adjusted origin so a drag that crosses a horizontal scroll stays
//! consistent.

use super::width::WidthSolution;

/// An active column-border drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderDrag {
    /// Index of the column being resized.
    pub column: usize,
    /// Pointer offset at drag start.
    pub start_offset: u16,
    /// Live indicator offset, updated on every drag move.
    pub indicator: u16,
}

impl BorderDrag {
    pub fn begin(column: usize, offset: u16) -> Self {
        Self {
            column,
            start_offset: offset,
            indicator: offset,
        }
    }

    pub fn move_to(&mut self, offset: u16) {
        self.indicator = offset;
    }

    /// Width delta produced by the drag so far. Zero means the drag never
    /// moved and the commit is a no-op.
    pub fn delta(&self) -> i32 {
        i32::from(self.indicator) - i32::from(self.start_offset)
    }
}

/// Commit a finished drag against the current width list.
///
/// The new width is clamped to the column minimum; if the shrink leaves the
/// table narrower than its container, the shortfall is absorbed back into
/// the resized column so the table never shows dead space after an explicit
/// resize.
pub fn commit(
    widths: &[u16],
    column: usize,
    delta: i32,
    min_width: u16,
    container_width: u16,
) -> Option<WidthSolution> {
    let old = *widths.get(column)?;

    let mut new_width = (i32::from(old) + delta)
        .clamp(i32::from(min_width), i32::from(u16::MAX)) as u16;

    let total = widths.iter().map(|w| u32::from(*w)).sum::<u32>();
    let mut new_total = total - u32::from(old) + u32::from(new_width);

    if u32::from(container_width) > new_total {
        new_width = new_width.saturating_add((u32::from(container_width) - new_total) as u16);
        new_total = u32::from(container_width);
    }

    let mut next = widths.to_vec();
    next[column] = new_width;
    Some(WidthSolution {
        widths: next,
        total: u16::try_from(new_total).unwrap_or(u16::MAX),
    })
}
