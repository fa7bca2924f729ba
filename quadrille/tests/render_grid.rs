//! Renderer and event-dispatch behavior against a test backend.

use quadrille::grid::events::EventResult;
use quadrille::prelude::*;
use ratatui::Terminal;
use ratatui::backend::TestBackend;

fn columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::checkbox().width(3).fixed(),
        ColumnSpec::index().width(3).fixed(),
        ColumnSpec::expand()
            .width(3)
            .renderer(|row| format!("info: {}", row.get("name").unwrap_or(""))),
        ColumnSpec::plain("Name", "name").width(10).min_width(6),
        ColumnSpec::plain("Role", "role").width(10).min_width(6).sortable(),
    ]
}

fn rows(n: usize) -> Vec<Row> {
    (0..n)
        .map(|i| {
            Row::new()
                .with("name", format!("row-{i}"))
                .with("role", "crew")
        })
        .collect()
}

fn grid() -> DataGrid {
    DataGrid::new(columns())
        .with_rows(rows(8))
        .with_body_height(5)
        .with_zebra(true)
}

fn draw(grid: &DataGrid, width: u16, height: u16) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    // First paint measures; the second consumes the corrected layout.
    terminal.draw(|f| grid.render(f, f.area())).unwrap();
    terminal.draw(|f| grid.render(f, f.area())).unwrap();
    terminal
}

fn redraw(terminal: &mut Terminal<TestBackend>, grid: &DataGrid) {
    terminal.draw(|f| grid.render(f, f.area())).unwrap();
}

fn row_text(terminal: &Terminal<TestBackend>, y: u16) -> String {
    let buffer = terminal.backend().buffer();
    (0..buffer.area.width)
        .map(|x| {
            buffer
                .cell((x, y))
                .map(|c| c.symbol().to_string())
                .unwrap_or_default()
        })
        .collect()
}

#[test]
fn test_corrective_pass_fills_container_and_reserves_lane() {
    let grid = grid();
    let _terminal = draw(&grid, 40, 12);

    // 8 rows overflow the 5-line body: one scrollbar lane is reserved and
    // the plain columns absorb the remaining slack.
    assert_eq!(grid.placeholder(), Some(1));
    assert_eq!(grid.width_list(), vec![3, 3, 3, 15, 15]);
    assert_eq!(grid.computed_width(), 40);
}

#[test]
fn test_first_render_requests_exactly_one_correction() {
    let grid = grid();
    let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();

    terminal.draw(|f| grid.render(f, f.area())).unwrap();
    assert!(grid.is_dirty());

    grid.clear_dirty();
    terminal.draw(|f| grid.render(f, f.area())).unwrap();
    assert!(!grid.is_dirty());
}

#[test]
fn test_header_and_rows_painted() {
    let grid = grid();
    let terminal = draw(&grid, 40, 12);

    let header = row_text(&terminal, 0);
    assert!(header.contains("Name"));
    assert!(header.contains("Role"));
    assert!(header.contains("□"));

    let first = row_text(&terminal, 1);
    assert!(first.contains("row-0"));
    assert!(first.contains("▸"));
    assert!(first.contains('1'));
}

#[test]
fn test_zebra_stripes_alternate() {
    let grid = grid();
    let terminal = draw(&grid, 40, 12);
    let buffer = terminal.backend().buffer();

    let even = buffer.cell((10u16, 1u16)).unwrap().style().bg;
    let odd = buffer.cell((10u16, 2u16)).unwrap().style().bg;
    assert!(even.is_none());
    assert!(odd.is_some());
}

#[test]
fn test_empty_dataset_renders_tip() {
    let grid = DataGrid::new(columns())
        .with_body_height(5)
        .with_empty_tip("nothing here");
    let terminal = draw(&grid, 40, 12);

    let middle = row_text(&terminal, 3);
    assert!(middle.contains("nothing here"));
}

#[test]
fn test_default_empty_tip() {
    let grid = DataGrid::new(columns()).with_body_height(5);
    let terminal = draw(&grid, 40, 12);

    let all: String = (0..12).map(|y| row_text(&terminal, y)).collect();
    assert!(all.contains("no data"));
}

#[test]
fn test_no_columns_renders_nothing() {
    let grid = DataGrid::new(Vec::new()).with_rows(rows(3));
    let terminal = draw(&grid, 40, 12);

    for y in 0..12 {
        assert_eq!(row_text(&terminal, y).trim(), "");
    }
}

#[test]
fn test_select_all_from_header_click() {
    let grid = grid();
    let mut terminal = draw(&grid, 40, 12);

    let result = grid.on_click(1, 0, Modifiers::NONE);
    assert_eq!(result, EventResult::Consumed);
    assert_eq!(grid.checked_rows().len(), 8);

    redraw(&mut terminal, &grid);
    assert!(row_text(&terminal, 0).contains("■"));

    // Unchecking one row drops the header glyph to the partial state.
    grid.on_click(1, 1, Modifiers::NONE);
    assert_eq!(grid.checked_rows().len(), 7);
    redraw(&mut terminal, &grid);
    assert!(row_text(&terminal, 0).contains("▣"));
}

#[test]
fn test_expand_click_inserts_expansion_line() {
    let grid = grid();
    let mut terminal = draw(&grid, 40, 12);

    // Expand column sits at content x 6..9; row 1 is on line y=2.
    let result = grid.on_click(7, 2, Modifiers::NONE);
    assert_eq!(result, EventResult::Consumed);
    assert_eq!(grid.expanded_cell(), Some((1, 2)));

    redraw(&mut terminal, &grid);
    assert!(row_text(&terminal, 2).contains("▾"));
    assert!(row_text(&terminal, 3).contains("info: row-1"));
    // The next data row moved down one line.
    assert!(row_text(&terminal, 4).contains("row-2"));
}

#[test]
fn test_border_drag_resizes_column() {
    let grid = grid();
    let mut terminal = draw(&grid, 40, 12);

    // Name column spans content x 9..24 after the corrective pass; its
    // border cell is x=23 in the header.
    assert_eq!(grid.on_click(23, 0, Modifiers::NONE), EventResult::StartDrag);
    assert_eq!(grid.on_drag(28, 0), EventResult::Consumed);

    // Widths don't move until release.
    assert_eq!(grid.width_list()[3], 15);

    assert_eq!(grid.on_release(28, 0), EventResult::Consumed);
    assert_eq!(grid.width_list()[3], 20);
    assert!(grid.active_drag().is_none());

    redraw(&mut terminal, &grid);
    assert!(row_text(&terminal, 1).contains("row-0"));
}

#[test]
fn test_zero_movement_drag_is_noop() {
    let grid = grid();
    let _terminal = draw(&grid, 40, 12);

    assert_eq!(grid.on_click(23, 0, Modifiers::NONE), EventResult::StartDrag);
    assert_eq!(grid.on_release(23, 0), EventResult::Consumed);

    assert_eq!(grid.width_list()[3], 15);
}

#[test]
fn test_wheel_scroll_mirrors_to_fixed_surface() {
    let grid = grid();
    let _terminal = draw(&grid, 40, 12);

    grid.on_scroll(ScrollDirection::Down, 2);
    assert_eq!(grid.scroll_top(), 2);
    assert_eq!(grid.sync_state().unwrap().fixed_scroll_top, 2);

    grid.on_scroll(ScrollDirection::Up, 1);
    assert_eq!(grid.scroll_top(), 1);
    assert_eq!(grid.sync_state().unwrap().fixed_scroll_top, 1);
}

#[test]
fn test_shadow_seam_painted_when_scrolled_right() {
    let columns = vec![
        ColumnSpec::index().width(4).fixed(),
        ColumnSpec::plain("Name", "name").width(30).min_width(6),
        ColumnSpec::plain("Role", "role").width(30).min_width(6),
    ];
    let grid = DataGrid::new(columns)
        .with_rows(rows(4))
        .with_body_height(6);
    let mut terminal = draw(&grid, 40, 12);

    grid.scroll_horizontal(4);
    assert!(grid.sync_state().unwrap().shadow);

    redraw(&mut terminal, &grid);
    assert!(row_text(&terminal, 1).contains('▏'));
}

#[test]
fn test_hover_tracks_rows_and_clears_outside() {
    let grid = grid();
    let _terminal = draw(&grid, 40, 12);

    assert_eq!(grid.on_hover(12, 3), EventResult::Consumed);
    assert_eq!(grid.hovered_row(), Some(2));

    assert_eq!(grid.on_hover(39, 11), EventResult::Consumed);
    assert_eq!(grid.hovered_row(), None);

    grid.on_hover(12, 2);
    assert_eq!(grid.hovered_row(), Some(1));
}

#[test]
fn test_sort_toggles_from_header_click() {
    let grid = grid();
    let mut terminal = draw(&grid, 40, 12);

    // Role column spans content x 24..39; click the middle of its header.
    grid.on_click(30, 0, Modifiers::NONE);
    assert_eq!(grid.sort(), Some((4, true)));

    redraw(&mut terminal, &grid);
    assert!(row_text(&terminal, 0).contains('▲'));

    grid.on_click(30, 0, Modifiers::NONE);
    assert_eq!(grid.sort(), Some((4, false)));
}

#[test]
fn test_fixed_bottom_rows_pinned_below_body() {
    let total = Row::new().with("name", "total").with("role", "8 crew");
    let grid = DataGrid::new(columns())
        .with_rows(rows(8))
        .with_fixed_rows(vec![total])
        .with_body_height(5);
    let mut terminal = draw(&grid, 40, 12);

    // Band sits on the line right after the 5-line body.
    assert!(row_text(&terminal, 6).contains("total"));

    // Scrolling the body leaves the band in place.
    grid.on_scroll(ScrollDirection::Down, 3);
    redraw(&mut terminal, &grid);
    assert!(row_text(&terminal, 6).contains("total"));
    assert!(row_text(&terminal, 1).contains("row-3"));
}
