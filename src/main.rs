//! vitals — a minimal terminal system monitor.
//!
//! Samples host CPU and RAM at a fixed cadence and redraws a single panel
//! in place: usage bars, bounded history sparklines, absolute memory
//! figures. Press q (or Ctrl+C) to exit, z to freeze sampling.

mod app;
mod config;
mod error;
mod input;
mod system;
mod ui;

use std::io;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use app::App;
use config::Settings;
use error::MonitorError;
use system::collector::Collector;

/// Live CPU and RAM monitor for the terminal.
#[derive(Parser)]
#[command(name = "vitals", version, about = "Live CPU and RAM monitor")]
struct Args {
    /// Samples kept per sparkline (default: 50)
    #[arg(long, value_name = "N")]
    history_size: Option<usize>,

    /// Usage bar width in characters (default: 30)
    #[arg(long, value_name = "N")]
    bar_width: Option<usize>,

    /// Sampling interval in milliseconds (default: 250)
    #[arg(long, value_name = "MS")]
    interval_ms: Option<u64>,

    /// Display refresh interval in milliseconds (default: 250)
    #[arg(long, value_name = "MS")]
    refresh_ms: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging();

    let mut settings = Settings::load();
    settings.apply_overrides(
        args.history_size,
        args.bar_width,
        args.interval_ms,
        args.refresh_ms,
    );
    tracing::info!(
        history_size = settings.history_size,
        bar_width = settings.bar_width,
        interval_ms = settings.interval_ms,
        refresh_ms = settings.refresh_ms,
        "starting"
    );

    // Without a first sample there is no state worth displaying; bail out
    // before touching the terminal.
    let mut collector = Collector::new();
    let mut app = App::new(settings.history_size, settings.bar_width);
    app.update(&mut collector)
        .context("could not take the initial metrics sample")?;

    println!("Starting real-time system monitor... press q or Ctrl+C to exit.");

    // Setup terminal
    enable_raw_mode().map_err(|source| MonitorError::DisplayUnavailable { source })?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|source| MonitorError::DisplayUnavailable { source })?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal =
        Terminal::new(backend).map_err(|source| MonitorError::DisplayUnavailable { source })?;
    terminal
        .clear()
        .map_err(|source| MonitorError::DisplayUnavailable { source })?;

    // Run the monitor loop
    let result = run_app(&mut terminal, &mut app, &mut collector, settings);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    tracing::info!(ticks = app.tick, "stopped");
    println!("Monitoring stopped.");
    Ok(())
}

/// Main monitor loop.
///
/// Redraws every pass, paced by the refresh interval used as the event-poll
/// timeout; samples only when the (independent) sampling interval has
/// elapsed. The quit flag is checked at the top of the pass, so an
/// in-flight update and render always complete before shutdown.
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    collector: &mut Collector,
    settings: Settings,
) -> Result<()> {
    let sample_interval = Duration::from_millis(settings.interval_ms);
    let refresh = Duration::from_millis(settings.refresh_ms);
    let mut last_sample = Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if app.should_quit {
            return Ok(());
        }

        if event::poll(refresh)? {
            match event::read()? {
                Event::Key(key) => {
                    // On Windows, crossterm fires Press and Release; only handle Press
                    if key.kind == KeyEventKind::Press {
                        input::handle_input(app, key);
                    }
                }
                Event::Resize(_, _) => {
                    // Terminal resize - will be handled on next draw
                }
                _ => {}
            }
        }

        if should_sample(app, last_sample.elapsed(), sample_interval) {
            last_sample = Instant::now();
            if let Err(e) = app.update(collector) {
                // Keep the previous frame on screen; retry next tick.
                tracing::warn!(tick = app.tick, "sample skipped: {e}");
            }
        }
    }
}

/// Whether this pass should take a new sample.
///
/// A quit key handled earlier in the same pass suppresses the sample: once
/// the operator has interrupted, no further update may land, only the
/// shutdown on the next pass.
fn should_sample(app: &App, elapsed: Duration, interval: Duration) -> bool {
    !app.paused && !app.should_quit && elapsed >= interval
}

/// Logging goes to stderr and stays quiet by default — the TUI owns the
/// terminal. `RUST_LOG` overrides the filter as usual.
fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("vitals=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
