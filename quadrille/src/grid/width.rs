//! The width engine: pure column-width computation and redistribution.
//!
//! Widths satisfy three competing goals, resolved in fixed priority order:
//! never render below a column's minimum, fill the container when there is
//! slack, and respect explicit owner widths when present
//! (minimum > explicit > auto-fill).

use super::column::ColumnSpec;

/// Cells added to a measured header width when deriving a plain column's
/// minimum, leaving room for the sort indicator and the resize border.
pub const HEADER_PADDING: u16 = 20;

/// Measured minimum inputs to the width solver, reported upward by the
/// header and row renderers. A zero entry means "not measured yet".
#[derive(Debug, Clone, Default)]
pub struct Minimums {
    header: Vec<u16>,
    content: Vec<u16>,
}

impl Minimums {
    pub fn new(columns: usize) -> Self {
        Self {
            header: vec![0; columns],
            content: vec![0; columns],
        }
    }

    /// Drop all measurements, e.g. when the column list is replaced.
    pub fn reset(&mut self, columns: usize) {
        self.header = vec![0; columns];
        self.content = vec![0; columns];
    }

    /// Record the measured display width of a column's header text.
    pub fn report_header(&mut self, column: usize, width: u16) {
        if let Some(slot) = self.header.get_mut(column) {
            *slot = (*slot).max(width);
        }
    }

    /// Record the measured display width of one body cell; the widest cell
    /// seen so far wins.
    pub fn report_content(&mut self, column: usize, width: u16) {
        if let Some(slot) = self.content.get_mut(column) {
            *slot = (*slot).max(width);
        }
    }

    pub fn header(&self, column: usize) -> u16 {
        self.header.get(column).copied().unwrap_or(0)
    }

    pub fn content(&self, column: usize) -> u16 {
        self.content.get(column).copied().unwrap_or(0)
    }

    /// Minimum width for a column under the current measurements.
    ///
    /// Control columns keep their construction-time width as the floor.
    /// Plain columns floor at the measured header width plus padding, or the
    /// widest measured cell if that is larger; before the header has been
    /// measured the owner-specified width stands in. An explicit override
    /// wins over all of it.
    pub fn column_min(&self, index: usize, column: &ColumnSpec) -> u16 {
        if let Some(explicit) = column.min_width {
            return explicit;
        }
        if column.kind.is_control() {
            return column.initial_width();
        }
        let header = self.header(index);
        if header == 0 {
            return column.width;
        }
        self.content(index).max(header.saturating_add(HEADER_PADDING))
    }
}

/// Result of a width computation: one width per column plus the corrected
/// total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidthSolution {
    pub widths: Vec<u16>,
    pub total: u16,
}

impl WidthSolution {
    /// Recompute the total from a width list (used after a direct width
    /// replacement, e.g. a resize commit).
    pub fn from_widths(widths: Vec<u16>) -> Self {
        let total = sum(&widths);
        Self { widths, total }
    }
}

/// Compute a new width list for `columns` from the current one.
///
/// 1. Container slack (`container_width - sum(current)`) is distributed:
///    evenly across columns with an unset (zero) width if any exist,
///    otherwise proportionally to each non-control column's share of the
///    growable width. Control columns never grow from this step.
/// 2. Every width is then floored at the column's minimum; upward
///    corrections flow into the returned total.
///
/// Shares are assigned by floor with the remainder handed out left to
/// right, so when slack is distributed the widths sum to the container
/// exactly. Re-running the solver on its own output with an unchanged
/// container is a fixed point.
pub fn solve(
    columns: &[ColumnSpec],
    current: &[u16],
    minimums: &Minimums,
    container_width: u16,
) -> WidthSolution {
    let count = columns.len().min(current.len());
    let mut widths: Vec<u16> = current[..count].to_vec();

    let computed = u32::from(sum(&widths));
    let control: u32 = widths
        .iter()
        .zip(columns)
        .filter(|(_, col)| col.kind.is_control())
        .map(|(w, _)| u32::from(*w))
        .sum();
    let slack = i64::from(container_width) - i64::from(computed);

    if slack > 0 {
        let slack = slack as u32;
        let unset: Vec<usize> = (0..count).filter(|&i| widths[i] == 0).collect();
        if !unset.is_empty() {
            // Unset columns absorb the slack evenly.
            let share = slack / unset.len() as u32;
            let extra = (slack % unset.len() as u32) as usize;
            for (k, &i) in unset.iter().enumerate() {
                widths[i] = (share + u32::from(k < extra)) as u16;
            }
        } else {
            let base = computed - control;
            let growable: Vec<usize> = (0..count)
                .filter(|&i| !columns[i].kind.is_control())
                .collect();
            if base > 0 && !growable.is_empty() {
                // Grow proportionally to each column's share of the
                // growable width.
                let mut assigned: u32 = 0;
                for &i in &growable {
                    let add =
                        (u64::from(slack) * u64::from(widths[i]) / u64::from(base)) as u32;
                    widths[i] = widths[i].saturating_add(add as u16);
                    assigned += add;
                }
                let mut rest = slack - assigned;
                for &i in &growable {
                    if rest == 0 {
                        break;
                    }
                    widths[i] = widths[i].saturating_add(1);
                    rest -= 1;
                }
            }
        }
    }

    for (i, width) in widths.iter_mut().enumerate() {
        let min = minimums.column_min(i, &columns[i]);
        if *width < min {
            *width = min;
        }
    }

    WidthSolution::from_widths(widths)
}

fn sum(widths: &[u16]) -> u16 {
    let total: u32 = widths.iter().map(|w| u32::from(*w)).sum();
    u16::try_from(total).unwrap_or(u16::MAX)
}
