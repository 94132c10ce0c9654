// bitboard - interactive 8×8 bitboard editor
//
// Main entry point: parses the command line, sets up logging, and either
// runs a one-shot subcommand or hands the board to the TUI.

mod board;
mod cli;
mod codec;
mod config;
mod logging;
mod theme;
mod tui;

use anyhow::Result;
use board::BitState;
use clap::Parser;
use config::{Config, LogRotation, LoggingConfig};
use logging::{LogBuffer, TuiLogLayer};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing
///
/// In TUI mode logs go to the in-memory buffer (stderr would garble the
/// board); subcommands log to stderr. File logging, when enabled, writes
/// JSON to rotating files in addition to either.
///
/// Precedence: RUST_LOG env var > config file > default "info"
///
/// The returned guard must be kept alive so buffered file logs flush.
fn init_tracing(logging: &LoggingConfig, log_buffer: Option<LogBuffer>) -> Option<WorkerGuard> {
    let default_filter = format!("bitboard={}", logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let tui_layer = log_buffer.clone().map(TuiLogLayer::new);
    let stderr_layer = log_buffer
        .is_none()
        .then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    let mut guard = None;
    let file_layer = if logging.file_enabled {
        match std::fs::create_dir_all(&logging.file_dir) {
            Ok(()) => {
                let file_appender = match logging.file_rotation {
                    LogRotation::Hourly => {
                        tracing_appender::rolling::hourly(&logging.file_dir, &logging.file_prefix)
                    }
                    LogRotation::Daily => {
                        tracing_appender::rolling::daily(&logging.file_dir, &logging.file_prefix)
                    }
                    LogRotation::Never => {
                        tracing_appender::rolling::never(&logging.file_dir, &logging.file_prefix)
                    }
                };
                let (non_blocking, file_guard) = tracing_appender::non_blocking(file_appender);
                guard = Some(file_guard);
                Some(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(non_blocking)
                        .with_ansi(false),
                )
            }
            Err(e) => {
                eprintln!(
                    "Warning: Could not create log directory {:?}: {}",
                    logging.file_dir, e
                );
                None
            }
        }
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tui_layer)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    guard
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Subcommands run before the template is written so `config --reset`
    // and `config --update` see the user's real file state
    if let Some(command) = cli.command {
        let _file_guard = init_tracing(&Config::from_env().logging, None);
        return cli::handle_command(command);
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();
    let config = Config::from_env();

    // Reject a bad start value before the terminal is taken over
    let bits = match cli.value.as_deref() {
        Some(text) => cli::parse_value(text)?,
        None => 0,
    };

    let log_buffer = LogBuffer::new();
    let _file_guard = init_tracing(&config.logging, Some(log_buffer.clone()));

    tracing::info!(
        "Starting bitboard v{} (theme {}, base {})",
        config::VERSION,
        config.theme,
        config.output_base
    );

    let state = BitState::new(bits, config.output_base);
    if let Err(e) = tui::run_tui(state, config, log_buffer).await {
        tracing::error!("TUI error: {:?}", e);
        return Err(e);
    }

    tracing::info!("Shutting down");
    Ok(())
}
