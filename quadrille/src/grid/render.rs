//! Rendering: one layout state, two surface passes.
//!
//! The fixed-column sub-table and the main table are painted by the same
//! pure surface pass over the same width list and row dataset, so the two
//! can never disagree about layout within a frame. The main surface paints
//! first across the full width; the fixed surface then overlays the pinned
//! columns at the left edge, unaffected by horizontal scroll.

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};

use quadrille_core::geometry::Rect as HitRect;
use quadrille_core::measure::display_width;

use super::column::{Alignment, ColumnKind, ColumnSpec};
use super::row::Row;
use super::selection::CheckedState;
use super::state::{DEFAULT_EMPTY_TIP, DataGrid, GridInner};

const HEADER_BG: Color = Color::Rgb(0x1e, 0x1e, 0x2e);
const HEADER_FG: Color = Color::Rgb(0xcd, 0xd6, 0xf4);
const ZEBRA_BG: Color = Color::Rgb(0x24, 0x24, 0x36);
const HOVER_BG: Color = Color::Rgb(0x31, 0x32, 0x44);
const BAND_BG: Color = Color::Rgb(0x18, 0x18, 0x25);
const SHADOW_FG: Color = Color::Rgb(0x6c, 0x70, 0x86);
const LANE_TRACK_FG: Color = Color::Rgb(0x31, 0x32, 0x44);
const LANE_THUMB_FG: Color = Color::Rgb(0x6c, 0x70, 0x86);
const INDICATOR_FG: Color = Color::Rgb(0xa2, 0x77, 0xff);

fn header_style() -> Style {
    Style::default()
        .fg(HEADER_FG)
        .bg(HEADER_BG)
        .add_modifier(Modifier::BOLD)
}

/// Which table surface a pass is painting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Surface {
    Fixed,
    Main,
}

/// A column as one surface sees it: its index in the shared lists, its
/// shared width, and its x offset within the surface's content.
struct SurfaceColumn<'a> {
    index: usize,
    spec: &'a ColumnSpec,
    width: u16,
    offset: u16,
}

impl DataGrid {
    /// Paint the grid into `area`.
    ///
    /// The first render paints with the owner-specified widths, measures
    /// header and cell text, then runs the structure pass and marks the
    /// grid dirty — the host repaints once with the corrected widths. After
    /// that, layout only reruns when the dataset or columns change.
    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        let Ok(mut guard) = self.inner.write() else {
            return;
        };
        // No column specification: render yields nothing.
        if area.width == 0 || area.height == 0 || guard.columns.is_empty() {
            return;
        }

        guard.viewport = HitRect::new(area.x, area.y, area.width, area.height);

        let lane = guard.placeholder.unwrap_or(0);
        let band = guard.fixed_band_height();
        let body_h = guard.body_viewport();
        let columns_w = area.width.saturating_sub(lane);
        let header_y = area.y;
        let body = Rect {
            x: area.x,
            y: area.y.saturating_add(1),
            width: columns_w,
            height: body_h,
        };
        guard.body_area = HitRect::new(body.x, body.y, body.width, body.height);

        let buf = frame.buffer_mut();

        render_surface(&guard, buf, header_y, body, Surface::Main);

        if guard.has_fixed {
            let fixed = Rect {
                x: body.x,
                y: body.y,
                width: guard.fixed_width().min(body.width),
                height: body.height,
            };
            render_surface(&guard, buf, header_y, fixed, Surface::Fixed);
            if guard.sync.shadow {
                render_shadow(&guard, buf, header_y, fixed, band);
            }
        }

        if lane > 0 {
            render_vertical_lane(&guard, buf, area.x.saturating_add(columns_w), body);
        }
        if guard.scrolls_x() {
            render_horizontal_lane(
                &guard,
                buf,
                body.y.saturating_add(body.height).saturating_add(band),
                body,
            );
        }
        if guard.drag.is_some() {
            render_resize_indicator(&guard, buf, header_y, body, band);
        }

        // Measure-phase: a one-shot correction after the paint, not a
        // continuous observer.
        if !guard.initialized || guard.needs_layout {
            measure_text(&mut guard);
            let changed = guard.init_structure();
            guard.initialized = true;
            if changed {
                self.mark_dirty();
            }
        }
    }
}

/// Collect header and cell display widths into the measured minimums.
fn measure_text(guard: &mut GridInner) {
    let count = guard.columns.len();
    let mut header = vec![0u16; count];
    let mut content = vec![0u16; count];

    for (ci, col) in guard.columns.iter().enumerate() {
        if col.kind != ColumnKind::Plain {
            continue;
        }
        header[ci] = display_width(&col.label);
        for (ri, row) in guard.rows.iter().enumerate() {
            content[ci] = content[ci].max(row.cell_width(ri, col));
        }
    }

    for ci in 0..count {
        if header[ci] > 0 {
            guard.minimums.report_header(ci, header[ci]);
        }
        if content[ci] > 0 {
            guard.minimums.report_content(ci, content[ci]);
        }
    }
}

fn surface_columns(inner: &GridInner, surface: Surface) -> Vec<SurfaceColumn<'_>> {
    let mut cols = Vec::new();
    let mut offset = 0u16;
    for (index, (spec, width)) in inner.columns.iter().zip(&inner.width_list).enumerate() {
        if surface == Surface::Fixed && !spec.fixed {
            continue;
        }
        cols.push(SurfaceColumn {
            index,
            spec,
            width: *width,
            offset,
        });
        offset = offset.saturating_add(*width);
    }
    cols
}

fn render_surface(inner: &GridInner, buf: &mut Buffer, header_y: u16, body: Rect, surface: Surface) {
    if body.width == 0 {
        return;
    }
    let cols = surface_columns(inner, surface);
    let scroll_left = match surface {
        Surface::Main => inner.scroll_left,
        Surface::Fixed => 0,
    };
    let scroll_top = match surface {
        Surface::Main => inner.scroll_top,
        Surface::Fixed => inner.sync.fixed_scroll_top,
    };

    render_header(inner, buf, header_y, body, &cols, scroll_left);

    if inner.rows.is_empty() {
        if surface == Surface::Main {
            render_empty_tip(inner, buf, body);
        }
    } else {
        render_body(inner, buf, body, &cols, scroll_left, scroll_top, surface);
    }

    render_fixed_band(inner, buf, body, &cols, scroll_left);
}

fn render_header(
    inner: &GridInner,
    buf: &mut Buffer,
    y: u16,
    body: Rect,
    cols: &[SurfaceColumn<'_>],
    scroll_left: u16,
) {
    let style = header_style();
    fill_line(buf, body.x, y, body.width, style);

    for col in cols {
        let text = header_text(inner, col);
        paint_cell(buf, body, y, col, scroll_left, &text, style);
        if col.spec.resizable() && col.width > 0 {
            // The border cell doubles as the drag handle.
            let border_x = col.offset.saturating_add(col.width) - 1;
            if border_x >= scroll_left {
                let rel = border_x - scroll_left;
                if rel < body.width {
                    buf.set_stringn(body.x.saturating_add(rel), y, "│", 1, style);
                }
            }
        }
    }
}

fn header_text(inner: &GridInner, col: &SurfaceColumn<'_>) -> String {
    match col.spec.kind {
        ColumnKind::Checkbox => select_all_glyph(inner.selection.state()).to_string(),
        ColumnKind::Index | ColumnKind::Expand => String::new(),
        ColumnKind::Plain => {
            let mut text = col.spec.label.clone();
            if let Some((sorted, ascending)) = inner.sort
                && sorted == col.index
                && col.spec.sortable
            {
                text.push(' ');
                text.push(if ascending { '▲' } else { '▼' });
            }
            text
        }
    }
}

fn select_all_glyph(state: CheckedState) -> &'static str {
    match state {
        CheckedState::All => "■",
        CheckedState::Partial => "▣",
        CheckedState::None => "□",
    }
}

fn render_body(
    inner: &GridInner,
    buf: &mut Buffer,
    body: Rect,
    cols: &[SurfaceColumn<'_>],
    scroll_left: u16,
    scroll_top: u16,
    surface: Surface,
) {
    let bottom = body.y.saturating_add(body.height);
    let mut line = 0u16;
    let mut y = body.y;

    for (index, row) in inner.rows.iter().enumerate() {
        if y >= bottom {
            break;
        }
        if line >= scroll_top {
            render_row_line(inner, buf, body, cols, scroll_left, index, row, y);
            y += 1;
        }
        line = line.saturating_add(1);

        for text in inner.expansion_lines(index) {
            if y >= bottom {
                break;
            }
            if line >= scroll_top {
                fill_line(buf, body.x, y, body.width, Style::default());
                if surface == Surface::Main {
                    let indent = 2u16.min(body.width);
                    buf.set_stringn(
                        body.x.saturating_add(indent),
                        y,
                        &text,
                        usize::from(body.width.saturating_sub(indent)),
                        Style::default().add_modifier(Modifier::DIM),
                    );
                }
                y += 1;
            }
            line = line.saturating_add(1);
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn render_row_line(
    inner: &GridInner,
    buf: &mut Buffer,
    body: Rect,
    cols: &[SurfaceColumn<'_>],
    scroll_left: u16,
    index: usize,
    row: &Row,
    y: u16,
) {
    let hovered = inner.sync.hovered_row == Some(index);
    let style = if hovered {
        Style::default().bg(HOVER_BG)
    } else if inner.zebra && index % 2 == 1 {
        Style::default().bg(ZEBRA_BG)
    } else {
        Style::default()
    };
    fill_line(buf, body.x, y, body.width, style);

    for col in cols {
        let checked = col.spec.kind == ColumnKind::Checkbox && inner.selection.is_checked(row);
        let expanded = inner.sync.expanded == Some((index, col.index));
        let text = row.cell_text(index, col.spec, checked, expanded);
        paint_cell(buf, body, y, col, scroll_left, &text, style);
    }
}

/// Pinned bottom rows, rendered beneath the scrolling body on both
/// surfaces. They carry data cells only: control columns stay blank and
/// the rows take no part in selection or scrolling.
fn render_fixed_band(
    inner: &GridInner,
    buf: &mut Buffer,
    body: Rect,
    cols: &[SurfaceColumn<'_>],
    scroll_left: u16,
) {
    if inner.fixed_rows.is_empty() {
        return;
    }
    let style = Style::default().bg(BAND_BG).add_modifier(Modifier::BOLD);
    let limit = inner.viewport.bottom();

    for (k, row) in inner.fixed_rows.iter().enumerate() {
        let y = body.y.saturating_add(body.height).saturating_add(k as u16);
        if y >= limit {
            break;
        }
        fill_line(buf, body.x, y, body.width, style);
        for col in cols {
            let text = if col.spec.kind.is_control() {
                String::new()
            } else {
                row.cell_text(0, col.spec, false, false)
            };
            paint_cell(buf, body, y, col, scroll_left, &text, style);
        }
    }
}

fn render_empty_tip(inner: &GridInner, buf: &mut Buffer, body: Rect) {
    if body.height == 0 {
        return;
    }
    let tip = inner.empty_tip.as_deref().unwrap_or(DEFAULT_EMPTY_TIP);
    let width = display_width(tip).min(body.width);
    let x = body.x + (body.width - width) / 2;
    let y = body.y + body.height / 2;
    buf.set_stringn(
        x,
        y,
        tip,
        usize::from(width),
        Style::default().add_modifier(Modifier::DIM),
    );
}

/// Seam on the fixed sub-table's right edge while the main surface is
/// horizontally scrolled, marking the content sliding beneath it.
fn render_shadow(inner: &GridInner, buf: &mut Buffer, header_y: u16, fixed: Rect, band: u16) {
    let x = fixed.x.saturating_add(fixed.width);
    if x >= inner.viewport.right() {
        return;
    }
    let bottom = fixed
        .y
        .saturating_add(fixed.height)
        .saturating_add(band)
        .min(inner.viewport.bottom());
    buf.set_stringn(x, header_y, "▏", 1, header_style().fg(SHADOW_FG));
    for y in fixed.y..bottom {
        buf.set_stringn(x, y, "▏", 1, Style::default().fg(SHADOW_FG));
    }
}

fn render_vertical_lane(inner: &GridInner, buf: &mut Buffer, x: u16, body: Rect) {
    let content = inner.content_lines();
    let viewport = body.height;
    if viewport == 0 || content <= viewport {
        return;
    }
    let thumb = ((u32::from(viewport) * u32::from(viewport)) / u32::from(content)).max(1) as u16;
    let range = viewport.saturating_sub(thumb);
    let max_offset = content - viewport;
    let pos = ((u32::from(inner.scroll_top) * u32::from(range)) / u32::from(max_offset)) as u16;

    for i in 0..viewport {
        let (glyph, style) = if i >= pos && i < pos.saturating_add(thumb) {
            ("█", Style::default().fg(LANE_THUMB_FG))
        } else {
            ("│", Style::default().fg(LANE_TRACK_FG))
        };
        buf.set_stringn(x, body.y.saturating_add(i), glyph, 1, style);
    }
}

fn render_horizontal_lane(inner: &GridInner, buf: &mut Buffer, y: u16, body: Rect) {
    let content = inner.computed_width;
    let viewport = inner.viewport.width;
    if y >= inner.viewport.bottom() || viewport == 0 || content <= viewport {
        return;
    }
    let thumb = ((u32::from(viewport) * u32::from(body.width)) / u32::from(content)).max(1) as u16;
    let range = body.width.saturating_sub(thumb);
    let max_offset = content - viewport;
    let pos = ((u32::from(inner.scroll_left) * u32::from(range)) / u32::from(max_offset)) as u16;

    for i in 0..body.width {
        let (glyph, style) = if i >= pos && i < pos.saturating_add(thumb) {
            ("▄", Style::default().fg(LANE_THUMB_FG))
        } else {
            ("─", Style::default().fg(LANE_TRACK_FG))
        };
        buf.set_stringn(body.x.saturating_add(i), y, glyph, 1, style);
    }
}

/// Vertical guide line shown while a border drag is live. Widths don't
/// move until the drag commits; this is the only visual feedback.
fn render_resize_indicator(
    inner: &GridInner,
    buf: &mut Buffer,
    header_y: u16,
    body: Rect,
    band: u16,
) {
    let Some(drag) = inner.drag else {
        return;
    };
    let x = u32::from(inner.viewport.x) + u32::from(drag.indicator);
    let Some(x) = x.checked_sub(u32::from(inner.scroll_left)) else {
        return;
    };
    let Ok(x) = u16::try_from(x) else {
        return;
    };
    if x < inner.viewport.x || x >= inner.viewport.right() {
        return;
    }
    let bottom = body
        .y
        .saturating_add(body.height)
        .saturating_add(band)
        .min(inner.viewport.bottom());
    let style = Style::default().fg(INDICATOR_FG);
    for y in header_y..bottom {
        buf.set_stringn(x, y, "│", 1, style);
    }
}

fn fill_line(buf: &mut Buffer, x: u16, y: u16, width: u16, style: Style) {
    if width == 0 {
        return;
    }
    let blank = " ".repeat(usize::from(width));
    buf.set_stringn(x, y, &blank, usize::from(width), style);
}

/// Paint one cell's text into a surface, clipping against the horizontal
/// scroll on the left edge and the surface width on the right.
fn paint_cell(
    buf: &mut Buffer,
    body: Rect,
    y: u16,
    col: &SurfaceColumn<'_>,
    scroll_left: u16,
    text: &str,
    style: Style,
) {
    if col.width == 0 {
        return;
    }
    let rel = col.offset.saturating_sub(scroll_left);
    if rel >= body.width {
        return;
    }
    let visible_start = scroll_left.saturating_sub(col.offset);
    let visible_width = col
        .width
        .saturating_sub(visible_start)
        .min(body.width - rel);
    if visible_width == 0 {
        return;
    }

    let aligned = match col.spec.align {
        Alignment::Left => format!("{:<width$}", text, width = usize::from(col.width)),
        Alignment::Center => format!("{:^width$}", text, width = usize::from(col.width)),
        Alignment::Right => format!("{:>width$}", text, width = usize::from(col.width)),
    };
    let display: String = aligned
        .chars()
        .skip(usize::from(visible_start))
        .take(usize::from(visible_width))
        .collect();
    buf.set_stringn(
        body.x.saturating_add(rel),
        y,
        display,
        usize::from(visible_width),
        style,
    );
}
