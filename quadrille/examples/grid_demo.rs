//! Minimal host loop for the grid.
//!
//! Run with `cargo run --example grid_demo`. Mouse: click the header
//! checkbox to select all, click a row checkbox to select one, click ▸ to
//! expand a row, drag a column border to resize, wheel to scroll. Press
//! `q` or Esc to quit. Logs go to `grid_demo.log`.

use std::fs::File;
use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use simplelog::{Config, LevelFilter, WriteLogger};

use quadrille::prelude::*;

fn main() -> io::Result<()> {
    let log_file = File::create("grid_demo.log")?;
    let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);

    let columns = vec![
        ColumnSpec::checkbox().width(4).fixed(),
        ColumnSpec::index().width(5).fixed(),
        ColumnSpec::expand().width(4).renderer(|row| {
            format!(
                "address: {}\nuptime:  {}",
                row.get("addr").unwrap_or("-"),
                row.get("uptime").unwrap_or("-"),
            )
        }),
        ColumnSpec::plain("Host", "host").sortable().min_width(10),
        ColumnSpec::plain("Address", "addr").width(18).min_width(9),
        ColumnSpec::plain("Status", "status").width(12).min_width(8),
        ColumnSpec::plain("Uptime", "uptime").width(14).min_width(8),
    ];

    let rows: Vec<Row> = (0..30)
        .map(|i| {
            Row::new()
                .with("host", format!("node-{i:02}"))
                .with("addr", format!("10.0.0.{}", i + 1))
                .with("status", if i % 7 == 0 { "down" } else { "up" })
                .with("uptime", format!("{}d", i * 3 + 1))
        })
        .collect();

    let totals = Row::new()
        .with("host", "30 hosts")
        .with("status", "5 down");

    let grid = DataGrid::new(columns)
        .with_rows(rows)
        .with_fixed_rows(vec![totals])
        .with_body_height(20)
        .with_zebra(true)
        .with_empty_tip("nothing to show")
        .on_selection_change(|checked| {
            log::info!("selection changed: {} rows", checked.len());
        });

    let mut terminal = setup_terminal()?;
    let result = run(&mut terminal, &grid);
    restore_terminal(&mut terminal)?;
    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, grid: &DataGrid) -> io::Result<()> {
    loop {
        terminal.draw(|frame| grid.render(frame, frame.area()))?;
        grid.clear_dirty();

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.code == KeyCode::Char('q') || key.code == KeyCode::Esc => {
                return Ok(());
            }
            Event::Mouse(mouse) => {
                if let Some(pointer) = PointerEvent::from_mouse(mouse) {
                    grid.on_pointer(&pointer);
                }
            }
            _ => {}
        }
    }
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()
}
