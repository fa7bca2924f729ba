//! Width engine behavior: distribution, minimums, idempotence.

use quadrille::grid::column::ColumnSpec;
use quadrille::grid::width::{Minimums, solve};

fn plain(width: u16) -> ColumnSpec {
    ColumnSpec::plain("col", "col").width(width)
}

#[test]
fn test_zero_width_column_takes_all_slack() {
    let columns = vec![plain(0), plain(100)];
    let minimums = Minimums::new(columns.len());

    let solution = solve(&columns, &[0, 100], &minimums, 300);

    assert_eq!(solution.widths, vec![200, 100]);
    assert_eq!(solution.total, 300);
}

#[test]
fn test_even_split_across_unset_columns_keeps_total_exact() {
    let columns = vec![plain(0), plain(0), plain(10)];
    let minimums = Minimums::new(columns.len());

    let solution = solve(&columns, &[0, 0, 10], &minimums, 21);

    // 11 cells of slack over two unset columns: 6 and 5.
    assert_eq!(solution.widths, vec![6, 5, 10]);
    assert_eq!(solution.total, 21);
}

#[test]
fn test_proportional_growth_without_unset_columns() {
    let columns = vec![plain(100), plain(300)];
    let minimums = Minimums::new(columns.len());

    let solution = solve(&columns, &[100, 300], &minimums, 500);

    assert_eq!(solution.widths, vec![125, 375]);
    assert_eq!(solution.total, 500);
}

#[test]
fn test_control_columns_never_grow() {
    let columns = vec![
        ColumnSpec::checkbox().width(4),
        plain(8),
        plain(8),
    ];
    let minimums = Minimums::new(columns.len());

    let solution = solve(&columns, &[4, 8, 8], &minimums, 36);

    assert_eq!(solution.widths, vec![4, 16, 16]);
    assert_eq!(solution.total, 36);
}

#[test]
fn test_fill_invariant() {
    let columns = vec![plain(10), plain(20)];
    let minimums = Minimums::new(columns.len());

    let solution = solve(&columns, &[10, 20], &minimums, 100);

    assert!(solution.total >= 100);
    assert_eq!(u16::try_from(solution.widths.iter().map(|w| u32::from(*w)).sum::<u32>()).unwrap(), solution.total);
}

#[test]
fn test_minimum_floor_from_measured_header() {
    let columns = vec![plain(5), plain(50)];
    let mut minimums = Minimums::new(columns.len());
    minimums.report_header(0, 10);

    // Container already overfull: no growth, but the measured minimum
    // (header + padding) still floors the first column.
    let solution = solve(&columns, &[5, 50], &minimums, 40);

    assert_eq!(solution.widths[0], 30);
    assert_eq!(solution.widths[1], 50);
    assert_eq!(solution.total, 80);
}

#[test]
fn test_measured_content_beats_padded_header() {
    let columns = vec![plain(5)];
    let mut minimums = Minimums::new(columns.len());
    minimums.report_header(0, 4);
    minimums.report_content(0, 40);

    let solution = solve(&columns, &[5], &minimums, 10);

    assert_eq!(solution.widths[0], 40);
}

#[test]
fn test_explicit_min_width_override_wins() {
    let columns = vec![plain(5).min_width(8)];
    let mut minimums = Minimums::new(columns.len());
    minimums.report_header(0, 30);

    let solution = solve(&columns, &[5], &minimums, 4);

    assert_eq!(solution.widths[0], 8);
}

#[test]
fn test_idempotent_on_own_output() {
    let columns = vec![
        ColumnSpec::index().width(4),
        plain(50),
        plain(80),
        plain(0),
    ];
    let mut minimums = Minimums::new(columns.len());
    minimums.report_header(1, 6);
    minimums.report_content(2, 90);

    let first = solve(&columns, &[4, 50, 80, 0], &minimums, 400);
    let second = solve(&columns, &first.widths, &minimums, 400);

    assert_eq!(first, second);
}

#[test]
fn test_idempotent_when_minimums_push_past_container() {
    let columns = vec![plain(5), plain(5)];
    let mut minimums = Minimums::new(columns.len());
    minimums.report_header(0, 30);
    minimums.report_header(1, 30);

    let first = solve(&columns, &[5, 5], &minimums, 60);
    let second = solve(&columns, &first.widths, &minimums, 60);

    assert_eq!(first, second);
    assert!(first.total > 60);
}

#[test]
fn test_all_control_columns_leave_slack_unfilled() {
    let columns = vec![ColumnSpec::checkbox().width(4), ColumnSpec::index().width(4)];
    let minimums = Minimums::new(columns.len());

    let solution = solve(&columns, &[4, 4], &minimums, 50);

    // Nothing is eligible to grow, so the table stays narrower than the
    // container.
    assert_eq!(solution.widths, vec![4, 4]);
    assert_eq!(solution.total, 8);
}

#[test]
fn test_control_column_defaults_to_forty() {
    let col = ColumnSpec::checkbox();
    assert_eq!(col.initial_width(), 40);
    let col = ColumnSpec::expand().width(6);
    assert_eq!(col.initial_width(), 6);
    let col = ColumnSpec::plain("a", "a");
    assert_eq!(col.initial_width(), 0);
}
