//! Scroll mirroring, shadow toggling, and hover/expansion broadcast
//! between the fixed and main surfaces.

use quadrille::prelude::*;

fn fixed_grid(rows: usize) -> DataGrid {
    let columns = vec![
        ColumnSpec::index().width(4).fixed(),
        ColumnSpec::plain("Name", "name").width(30),
        ColumnSpec::plain("Role", "role").width(30),
    ];
    let data = (0..rows)
        .map(|i| {
            Row::new()
                .with("name", format!("row-{i}"))
                .with("role", "crew")
        })
        .collect();
    DataGrid::new(columns).with_rows(data).with_body_height(5)
}

#[test]
fn test_fixed_surface_mirrors_every_vertical_offset() {
    let grid = fixed_grid(30);

    for offset in [3u16, 0, 9, 2, 7, 7, 1] {
        grid.scroll_body(offset);
        let sync = grid.sync_state().expect("fixed column present");
        assert_eq!(sync.fixed_scroll_top, grid.scroll_top());
    }
}

#[test]
fn test_vertical_offset_clamps_to_content() {
    let grid = fixed_grid(30);

    grid.scroll_body(10_000);

    let top = grid.scroll_top();
    assert!(top <= 30);
    assert_eq!(
        grid.sync_state().expect("fixed column present").fixed_scroll_top,
        top
    );
}

#[test]
fn test_shadow_follows_horizontal_scroll() {
    let grid = fixed_grid(10);

    assert!(!grid.sync_state().expect("sync").shadow);

    grid.scroll_horizontal(5);
    assert!(grid.sync_state().expect("sync").shadow);

    grid.scroll_horizontal(0);
    assert!(!grid.sync_state().expect("sync").shadow);
}

#[test]
fn test_sync_state_absent_without_fixed_columns() {
    let columns = vec![ColumnSpec::plain("Name", "name").width(10)];
    let grid = DataGrid::new(columns).with_rows(vec![Row::new().with("name", "a")]);

    assert!(grid.sync_state().is_none());
}

#[test]
fn test_hover_broadcast_is_shared() {
    let grid = fixed_grid(10);

    grid.hover(Some(4));
    assert_eq!(grid.hovered_row(), Some(4));
    assert_eq!(grid.sync_state().expect("sync").hovered_row, Some(4));

    grid.hover(None);
    assert_eq!(grid.hovered_row(), None);
}

#[test]
fn test_expansion_broadcast_and_toggle() {
    let grid = fixed_grid(10);

    grid.toggle_expand(2, 1);
    assert_eq!(grid.expanded_cell(), Some((2, 1)));

    // Expanding another cell collapses the first.
    grid.toggle_expand(5, 1);
    assert_eq!(grid.expanded_cell(), Some((5, 1)));

    // Toggling the same cell collapses it.
    grid.toggle_expand(5, 1);
    assert_eq!(grid.expanded_cell(), None);
}

#[test]
fn test_stale_hover_and_expansion_dropped_on_row_shrink() {
    let grid = fixed_grid(10);
    grid.hover(Some(8));
    grid.toggle_expand(9, 1);

    let remaining = (0..3)
        .map(|i| Row::new().with("name", format!("row-{i}")).with("role", "crew"))
        .collect();
    grid.set_rows(remaining);

    assert_eq!(grid.hovered_row(), None);
    assert_eq!(grid.expanded_cell(), None);
}
