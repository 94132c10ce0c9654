//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;
use anyhow::{Context, Result};

impl Config {
    /// Serialize config to TOML string
    pub fn to_toml(&self) -> String {
        format!(
            r#"# bitboard configuration

# Theme: auto, dracula, nord, gruvbox, monokai
# "auto" uses your terminal's ANSI palette
theme = "{theme}"

# Use theme's background color (true) or terminal's default (false)
use_theme_background = {use_bg}

# Base for the value line and yank: hex, binary, decimal
# Press 'o' in the editor to cycle
output_base = "{base}"

# System clipboard for yank (y) and paste (p)
# BITBOARD_NO_CLIPBOARD=1 disables it for a single run
clipboard = {clipboard}

# Logging configuration (RUST_LOG env var overrides level)
[logging]
level = "{log_level}"
file_enabled = {file_enabled}
file_dir = {file_dir:?}
file_rotation = "{file_rotation}"
file_prefix = "{file_prefix}"
"#,
            theme = self.theme,
            use_bg = self.use_theme_background,
            base = self.output_base.as_str(),
            clipboard = self.clipboard,
            log_level = self.logging.level,
            file_enabled = self.logging.file_enabled,
            file_dir = self.logging.file_dir.display().to_string(),
            file_rotation = self.logging.file_rotation.as_str(),
            file_prefix = self.logging.file_prefix,
        )
    }

    /// Save current configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path().context("Could not determine config path")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        std::fs::write(&path, self.to_toml())
            .with_context(|| format!("Failed to write {}", path.display()))
    }
}
