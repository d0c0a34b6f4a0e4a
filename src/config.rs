use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration loaded from file
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ModalisConfig {
    /// Dialog frame configuration
    #[serde(default)]
    pub dialog: DialogConfig,
}

/// Dialog frame configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogConfig {
    /// Frame width in columns when a request sets no size
    #[serde(default = "default_width")]
    pub default_width: u16,

    /// Maximum frame height as a percentage of the terminal
    #[serde(default = "default_max_height_percent")]
    pub max_height_percent: u16,

    /// Show the key hint line under the footer
    #[serde(default = "default_show_key_hints")]
    pub show_key_hints: bool,
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            default_width: default_width(),
            max_height_percent: default_max_height_percent(),
            show_key_hints: default_show_key_hints(),
        }
    }
}

fn default_width() -> u16 {
    56
}

fn default_max_height_percent() -> u16 {
    80
}

fn default_show_key_hints() -> bool {
    true
}

impl ModalisConfig {
    /// Load configuration from default path (~/.config/modalis/config.toml)
    pub fn load() -> Self {
        Self::load_from_path(&Self::default_path())
    }

    /// Get the default configuration path
    pub fn default_path() -> PathBuf {
        directories::BaseDirs::new().map_or_else(
            || PathBuf::from("~/.config/modalis/config.toml"),
            |dirs| dirs.config_dir().join("modalis").join("config.toml"),
        )
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!("Config file not found at {:?}, using defaults", path);
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(config) => {
                    tracing::info!("Loaded configuration from {:?}", path);
                    config.sanitized()
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config file: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config file: {}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Clamp values that would produce an unusable frame
    fn sanitized(mut self) -> Self {
        self.dialog.default_width = self.dialog.default_width.max(20);
        self.dialog.max_height_percent = self.dialog.max_height_percent.clamp(20, 100);
        self
    }

    /// Generate example configuration file content
    pub fn example() -> String {
        r#"# Modalis Configuration
# Place this file at ~/.config/modalis/config.toml

[dialog]
# Frame width in columns for dialogs without a size
default_width = 56

# Maximum frame height as a percentage of the terminal (20-100)
max_height_percent = 80

# Show "[Tab] Next  [Enter] Select  [Esc] Close" under the buttons
show_key_hints = true
"#
        .to_string()
    }
}

/// Tokyo Night color palette
pub mod colors {
    use super::Color;

    pub const BG: Color = Color::Rgb(26, 27, 38); // #1a1b26
    pub const BG_LIGHT: Color = Color::Rgb(41, 46, 66); // #292e42 lighter bg
    pub const FG: Color = Color::Rgb(192, 202, 245); // #c0caf5
    pub const MUTED: Color = Color::Rgb(86, 95, 137); // #565f89 gray
    pub const BORDER: Color = Color::Rgb(59, 66, 97); // #3b4261
    pub const HIGHLIGHT: Color = Color::Rgb(187, 154, 247); // #bb9af7 purple
    pub const INFO: Color = Color::Rgb(122, 162, 247); // #7aa2f7 blue
    pub const SUCCESS: Color = Color::Rgb(158, 206, 106); // #9ece6a green
    pub const WARNING: Color = Color::Rgb(224, 175, 104); // #e0af68 yellow
    pub const ERROR: Color = Color::Rgb(247, 118, 142); // #f7768e red
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ModalisConfig::load_from_path(&dir.path().join("absent.toml"));
        assert_eq!(config.dialog.default_width, 56);
        assert!(config.dialog.show_key_hints);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[dialog]\ndefault_width = 72").unwrap();
        let config = ModalisConfig::load_from_path(file.path());
        assert_eq!(config.dialog.default_width, 72);
        assert_eq!(config.dialog.max_height_percent, 80);
    }

    #[test]
    fn test_invalid_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[dialog\ndefault_width = ").unwrap();
        let config = ModalisConfig::load_from_path(file.path());
        assert_eq!(config.dialog.default_width, 56);
    }

    #[test]
    fn test_values_are_clamped() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[dialog]\ndefault_width = 4\nmax_height_percent = 250").unwrap();
        let config = ModalisConfig::load_from_path(file.path());
        assert_eq!(config.dialog.default_width, 20);
        assert_eq!(config.dialog.max_height_percent, 100);
    }

    #[test]
    fn test_example_parses() {
        let config: ModalisConfig = toml::from_str(&ModalisConfig::example()).unwrap();
        assert_eq!(config.dialog.default_width, 56);
    }
}
