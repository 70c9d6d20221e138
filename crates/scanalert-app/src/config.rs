//! Launch configuration from `~/.config/scanalert/config.toml`.
//!
//! This configures how the app runs (timer durations, poll rate), not the
//! account settings edited in the UI -- those live in [`AppState`] and are
//! never persisted.
//!
//! Loading is tolerant: a missing file yields defaults, an unreadable or
//! invalid file logs a warning and yields defaults.
//!
//! [`AppState`]: crate::state::AppState

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

const CONFIG_DIR: &str = "scanalert";
const CONFIG_FILENAME: &str = "config.toml";

/// Application launch configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(default)]
    pub ui: UiConfig,
}

/// Mock-scan timing
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScanConfig {
    /// How long the fake scan runs before completing
    #[serde(default = "default_scan_duration_ms")]
    pub duration_ms: u64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_scan_duration_ms(),
        }
    }
}

/// UI timing knobs
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiConfig {
    /// How long a toast stays on screen
    #[serde(default = "default_toast_ttl_ms")]
    pub toast_ttl_ms: u64,

    /// Terminal event poll timeout (drives the Tick cadence)
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            toast_ttl_ms: default_toast_ttl_ms(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

fn default_scan_duration_ms() -> u64 {
    3000
}

fn default_toast_ttl_ms() -> u64 {
    3500
}

fn default_tick_rate_ms() -> u64 {
    50
}

impl AppConfig {
    /// Load from the default config path, falling back to defaults
    pub fn load() -> Self {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load from an explicit path, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Self::default();
            }
            Err(e) => {
                warn!("Failed to read config {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match toml::from_str(&contents) {
            Ok(config) => config,
            Err(e) => {
                warn!("Invalid config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// `~/.config/scanalert/config.toml` (platform equivalent)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(CONFIG_DIR).join(CONFIG_FILENAME))
    }

    pub fn scan_duration(&self) -> Duration {
        Duration::from_millis(self.scan.duration_ms)
    }

    pub fn toast_ttl(&self) -> Duration {
        Duration::from_millis(self.ui.toast_ttl_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.ui.tick_rate_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.scan.duration_ms, 3000);
        assert_eq!(config.ui.toast_ttl_ms, 3500);
        assert_eq!(config.ui.tick_rate_ms, 50);
        assert_eq!(config.scan_duration(), Duration::from_millis(3000));
    }

    #[test]
    fn test_parse_partial_config() {
        let config: AppConfig = toml::from_str(
            r#"
            [scan]
            duration_ms = 1200
            "#,
        )
        .unwrap();
        assert_eq!(config.scan.duration_ms, 1200);
        // Unspecified sections keep their defaults
        assert_eq!(config.ui.toast_ttl_ms, 3500);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("nope.toml"));
        assert_eq!(config.scan.duration_ms, 3000);
    }

    #[test]
    fn test_invalid_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "scan = 'not a table'").unwrap();
        let config = AppConfig::load_from(&path);
        assert_eq!(config.scan.duration_ms, 3000);
    }

    #[test]
    fn test_load_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(
            &path,
            "[scan]\nduration_ms = 500\n\n[ui]\ntoast_ttl_ms = 1000\n",
        )
        .unwrap();
        let config = AppConfig::load_from(&path);
        assert_eq!(config.scan.duration_ms, 500);
        assert_eq!(config.ui.toast_ttl_ms, 1000);
        assert_eq!(config.ui.tick_rate_ms, 50);
    }
}
