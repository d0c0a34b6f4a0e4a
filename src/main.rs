// Clippy configuration: enable pedantic but allow overly strict lints
#![allow(clippy::missing_errors_doc)] // Internal functions don't need # Errors docs
#![allow(clippy::module_name_repetitions)] // e.g., DialogConfig in config module is fine
#![allow(clippy::doc_markdown)] // Don't require backticks around TOML, ratatui, etc.
#![allow(clippy::cast_possible_truncation)] // We're careful with our casts

//! Modalis demo - async modal dialogs in a ratatui app
//!
//! Mounts a dialog provider, then lets you trigger alerts, confirms, and
//! custom prompts from the keyboard. Each prompt runs in its own task and
//! reports the value its awaited call returned.
//!
//! Usage:
//!   modalis                      # Start the demo TUI
//!   modalis config               # Print an example config file
//!   modalis completions zsh      # Generate shell completions

mod app;
mod cli;
mod event;
mod screen;
mod tui;

use app::App;
use clap::Parser;
use cli::{Cli, Commands};
use color_eyre::Result;
use modalis::config::ModalisConfig;
use std::path::PathBuf;
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Get the log directory path
fn get_log_dir() -> PathBuf {
    directories::BaseDirs::new().map_or_else(
        || std::env::temp_dir().join("modalis").join("logs"),
        |dirs| dirs.cache_dir().join("modalis").join("logs"),
    )
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Config) => {
            print!("{}", ModalisConfig::example());
            return Ok(());
        }
        Some(Commands::Completions { shell }) => {
            cli::print_completions(shell);
            return Ok(());
        }
        None => {
            // TUI mode: continue with full setup
        }
    }

    // Initialize error handling
    color_eyre::install()?;

    // File logging only; stdout belongs to the TUI
    let log_dir = get_log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "modalis.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    let log_filter = format!("modalis={}", cli.log_level);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&log_filter))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(non_blocking),
        )
        .init();

    tracing::info!("Starting modalis v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Log directory: {:?}", log_dir);

    let config = match &cli.config {
        Some(path) => ModalisConfig::load_from_path(path),
        None => ModalisConfig::load(),
    };
    tracing::info!(
        "Loaded config: dialog.default_width = {}, dialog.show_key_hints = {}",
        config.dialog.default_width,
        config.dialog.show_key_hints
    );

    run_tui(config, cli.tick_rate, cli.frame_rate).await
}

async fn run_tui(config: ModalisConfig, tick_rate: f64, frame_rate: f64) -> Result<()> {
    use std::time::{Duration, Instant};
    use tokio_util::sync::CancellationToken;

    // Calculate durations from rates
    let tick_duration = Duration::from_secs_f64(1.0 / tick_rate.max(0.1));
    let frame_duration = Duration::from_secs_f64(1.0 / frame_rate.max(1.0));

    tracing::info!(
        "TUI starting: {:.1} FPS, {:.1} ticks/sec",
        frame_rate,
        tick_rate
    );

    let (event_tx, mut event_rx) = mpsc::channel(100);

    // Initialize terminal (raw mode, alternate screen, mouse capture)
    let mut terminal = tui::init()?;

    // RAII guard ensures terminal is restored on panic or early return
    let _guard = tui::TerminalGuard;

    let mut app = App::new(config, event_tx.clone());
    let mut dialog_rx = app.provider.subscribe();

    // Create cancellation token for graceful shutdown
    let cancel = CancellationToken::new();

    // Spawn input event handler with cancellation support
    let input_tx = event_tx.clone();
    let input_cancel = cancel.clone();
    let input_handle = tokio::spawn(async move {
        event::input::listen(input_tx, input_cancel).await;
    });

    // Frame rate limiting state
    let mut last_frame = Instant::now();

    // Main loop
    loop {
        let now = Instant::now();
        if app.needs_render && now.duration_since(last_frame) >= frame_duration {
            let mut area = ratatui::layout::Rect::default();
            terminal.draw(|f| {
                area = f.area();
                screen::render(f, &app);
            })?;
            app.rendered(area);
            last_frame = now;
        }

        // A pending repaint only waits out the frame limit
        let wait = if app.needs_render {
            frame_duration
        } else {
            tick_duration
        };

        tokio::select! {
            Some(event) = event_rx.recv() => {
                app.handle_event(event);
            }
            Ok(()) = dialog_rx.changed() => {
                app.dialog_changed();
            }
            () = tokio::time::sleep(wait) => {
                app.tick();
            }
        }

        if app.should_quit {
            break;
        }
    }

    // Graceful shutdown: signal input listener to stop
    tracing::debug!("Shutting down input listener");
    cancel.cancel();
    input_handle.abort();

    // Restore terminal (guard will also restore on drop, but explicit is cleaner)
    tui::restore()?;
    terminal.show_cursor()?;

    Ok(())
}
