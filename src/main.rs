// pulseboard - Terminal analytics dashboard
// Stat cards, charts and a top pages table over an animated particle field

mod app;
mod error;
mod metrics;
mod particles;
mod random;
mod theme;
mod ui;

use anyhow::{Context, Result};
use app::config::{parse_seed, DEFAULT_LOG_FILTER, LOG_FILE_ENV, SEED_ENV};
use app::{event::handle_key_event, Dashboard};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the file logger when PULSEBOARD_LOG is set
///
/// The TUI owns stdout, so without a log file tracing output is dropped.
fn init_logging() -> Result<()> {
    let Some(path) = std::env::var_os(LOG_FILE_ENV) else {
        return Ok(());
    };
    let file = File::create(&path)
        .with_context(|| format!("cannot create log file {}", path.to_string_lossy()))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();

    tracing::info!("Pulseboard v{}", env!("CARGO_PKG_VERSION"));
    Ok(())
}

fn main() -> Result<()> {
    init_logging()?;
    let seed = parse_seed(std::env::var(SEED_ENV).ok().as_deref())?;

    // Setup terminal
    enable_raw_mode().context("cannot enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, seed);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Dashboard stopped");
        println!("Error: {:?}", err);
    }
    tracing::info!("Pulseboard shutdown complete");
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    seed: Option<u64>,
) -> Result<()> {
    let size = terminal.size()?;
    let mut app = Dashboard::new(size.width, size.height, seed);

    loop {
        app.on_tick();
        app.on_frame_due();
        terminal.draw(|f| ui::draw(f, &app))?;

        if !app.running {
            return Ok(());
        }

        if event::poll(app.until_next_frame())? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    handle_key_event(&mut app, key.code);
                }
                Event::Resize(cols, rows) => app.on_resize(cols, rows),
                _ => {}
            }
        }
    }
}
