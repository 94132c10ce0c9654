// CLI module - command-line argument parsing and handlers
//
// With no subcommand the editor starts, optionally preloaded with a value.
// Subcommands run without the TUI:
// - show VALUE: print the grid and the formatted value
// - config --show: Display effective configuration
// - config --path: Print the config file location
// - config --reset: Regenerate config file with defaults
// - config --edit: Open config file in $EDITOR
// - config --update: Merge new defaults into existing config

use crate::board::BitState;
use crate::codec::{self, OutputBase};
use crate::config::{Config, VERSION};
use crate::theme::Theme;
use crate::tui::components::board_panel;
use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::process::Command;

/// bitboard - edit a 64-bit value as an 8×8 grid
#[derive(Parser)]
#[command(name = "bitboard")]
#[command(version = VERSION)]
#[command(about = "Interactive 8x8 bitboard editor", long_about = None)]
pub struct Cli {
    /// Start value: decimal, 0x-prefixed hex or 0b-prefixed binary
    pub value: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print a value as a grid and exit
    Show {
        /// Value to show: decimal, 0x-prefixed hex or 0b-prefixed binary
        value: String,

        /// Base for the value line: hex, binary, decimal
        #[arg(long, short)]
        base: Option<String>,
    },

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Open config file in $EDITOR
        #[arg(long)]
        edit: bool,

        /// Update config with new defaults (preserves user values)
        #[arg(long)]
        update: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

/// Parse a value given on the command line
///
/// Unlike the interactive prompt, text without digits is an error here.
pub fn parse_value(text: &str) -> Result<u64> {
    codec::parse(text).ok_or_else(|| anyhow!("No digits found in {:?}", text))
}

/// Run a subcommand to completion
pub fn handle_command(command: Commands) -> Result<()> {
    match command {
        Commands::Show { value, base } => handle_show(&value, base.as_deref()),
        Commands::Config {
            show,
            reset,
            edit,
            update,
            path,
        } => {
            if path {
                handle_config_path()
            } else if show {
                handle_config_show();
                Ok(())
            } else if reset {
                handle_config_reset()
            } else if edit {
                handle_config_edit()
            } else if update {
                handle_config_update()
            } else {
                // No flag provided, show help
                println!("Usage: bitboard config [--show|--reset|--edit|--update|--path]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --reset   Reset config file to defaults");
                println!("  --edit    Open config file in $EDITOR");
                println!("  --update  Update config with new defaults (preserves user values)");
                println!("  --path    Show config file path");
                Ok(())
            }
        }
    }
}

/// Plain-text grid and value line for `show`
pub fn show_text(bits: u64, base: OutputBase) -> String {
    let state = BitState::new(bits, base);
    let mut out = String::new();
    for line in board_panel::grid_lines(&state, &Theme::auto()) {
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        out.push_str(text.trim_end());
        out.push('\n');
    }
    out.push('\n');
    out.push_str(&board_panel::value_line(&state));
    out.push('\n');
    out
}

fn handle_show(value: &str, base: Option<&str>) -> Result<()> {
    let bits = parse_value(value)?;
    let base = match base {
        Some(name) => OutputBase::from_name(name)
            .ok_or_else(|| anyhow!("Unknown base {:?} (expected hex, binary or decimal)", name))?,
        None => Config::from_env().output_base,
    };
    tracing::debug!("Showing {:#018x} in {}", bits, base);
    print!("{}", show_text(bits, base));
    Ok(())
}

fn config_path() -> Result<std::path::PathBuf> {
    Config::config_path().context("Could not determine config path")
}

fn handle_config_path() -> Result<()> {
    println!("{}", config_path()?.display());
    Ok(())
}

fn handle_config_show() {
    let config = Config::from_env();

    println!("# Effective configuration (env > file > defaults)");
    println!();
    println!("theme = {:?}", config.theme);
    println!("use_theme_background = {}", config.use_theme_background);
    println!("output_base = {:?}", config.output_base.as_str());
    println!("clipboard = {}", config.clipboard);
    println!();
    println!("[logging]");
    println!("level = {:?}", config.logging.level);
    println!("file_enabled = {}", config.logging.file_enabled);
    println!(
        "file_dir = {:?}",
        config.logging.file_dir.display().to_string()
    );
    println!("file_rotation = {:?}", config.logging.file_rotation.as_str());
    println!("file_prefix = {:?}", config.logging.file_prefix);

    println!();
    println!("# Available themes: {}", Theme::names().join(", "));
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() -> Result<()> {
    let path = config_path()?;

    // Confirm if file exists
    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush()?;

        let mut input = String::new();
        std::io::stdin()
            .read_line(&mut input)
            .context("Failed to read answer")?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    Config::default().save()?;
    println!("Config reset to defaults: {}", path.display());
    Ok(())
}

fn handle_config_edit() -> Result<()> {
    let path = config_path()?;

    if !path.exists() {
        Config::ensure_config_exists();
        println!("Created new config file: {}", path.display());
    }

    let editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            // Platform-specific fallback
            if cfg!(windows) {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    println!("Opening {} with {}", path.display(), editor);

    let status = Command::new(&editor).arg(&path).status().with_context(|| {
        format!(
            "Failed to launch editor '{}' (set $EDITOR to your preferred editor)",
            editor
        )
    })?;

    if !status.success() {
        bail!("Editor exited with status: {}", status);
    }
    Ok(())
}

fn handle_config_update() -> Result<()> {
    let path = config_path()?;

    if !path.exists() {
        Config::ensure_config_exists();
        println!("Created new config file: {}", path.display());
        return Ok(());
    }

    // Current values, rewritten in the latest template
    let existing = Config::from_env();

    let backup_path = path.with_extension("toml.bak");
    if let Err(e) = std::fs::copy(&path, &backup_path) {
        eprintln!("Warning: Could not create backup: {}", e);
    } else {
        println!("Backup created: {}", backup_path.display());
    }

    existing.save()?;

    println!("Config updated with latest structure: {}", path.display());
    println!("Your values have been preserved.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_value_accepts_all_encodings() {
        assert_eq!(parse_value("0xff").unwrap(), 255);
        assert_eq!(parse_value("0b101").unwrap(), 5);
        assert_eq!(parse_value("  42").unwrap(), 42);
        assert!(parse_value("board").is_err());
    }

    #[test]
    fn test_show_text() {
        let text = show_text(0x8000_0000_0000_0001, OutputBase::Hex);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "    A B C D E F G H");
        assert_eq!(lines[2], "8 │ 1 . . . . . . . │ 8");
        assert_eq!(lines[9], "1 │ . . . . . . . 1 │ 1");
        assert_eq!(lines.last(), Some(&"hex: 0x8000000000000001"));
    }

    #[test]
    fn test_cli_parses_start_value_and_subcommands() {
        let cli = Cli::try_parse_from(["bitboard", "0x10"]).unwrap();
        assert_eq!(cli.value.as_deref(), Some("0x10"));
        assert!(cli.command.is_none());

        let cli = Cli::try_parse_from(["bitboard", "show", "7", "--base", "binary"]).unwrap();
        match cli.command {
            Some(Commands::Show { value, base }) => {
                assert_eq!(value, "7");
                assert_eq!(base.as_deref(), Some("binary"));
            }
            _ => panic!("expected show"),
        }
    }
}
