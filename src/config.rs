//! Runtime settings
//!
//! Stored in `~/.config/quadnav/config.yaml`. Every field is optional; a
//! missing or broken file falls back to the defaults.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::model::DEFAULT_NUDGE_FRACTION;

/// Tunables for the navigator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// A click this soon after a warp waits for the pointer to settle
    pub settle_window_ms: u64,
    /// Settle delay before a left button press
    pub settle_primary_ms: u64,
    /// Settle delay before a right or middle button press
    pub settle_secondary_ms: u64,
    /// Nudge step as a fraction of the selection's size
    pub nudge_fraction: f64,
    /// Lines per scroll action
    pub scroll_lines: i32,
    /// Reload bindings when the bindings file changes
    pub watch_bindings: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            settle_window_ms: 100,
            settle_primary_ms: 50,
            settle_secondary_ms: 20,
            nudge_fraction: DEFAULT_NUDGE_FRACTION,
            scroll_lines: 3,
            watch_bindings: true,
        }
    }
}

impl Settings {
    /// Load settings from the default location, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load settings from `path`, falling back to defaults with a warning
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str::<Settings>(&content) {
                Ok(settings) => {
                    tracing::info!("Loaded config from {}", path.display());
                    settings.sanitized()
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Clamp out-of-range values into something usable
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !self.nudge_fraction.is_finite() || self.nudge_fraction <= 0.0 {
            tracing::warn!(
                "nudge_fraction {} out of range, using {}",
                self.nudge_fraction,
                defaults.nudge_fraction
            );
            self.nudge_fraction = defaults.nudge_fraction;
        }
        self.nudge_fraction = self.nudge_fraction.min(1.0);
        self.scroll_lines = self.scroll_lines.clamp(1, 100);
        self.settle_window_ms = self.settle_window_ms.min(5_000);
        self.settle_primary_ms = self.settle_primary_ms.min(1_000);
        self.settle_secondary_ms = self.settle_secondary_ms.min(1_000);
        self
    }

    pub fn settle_window(&self) -> Duration {
        Duration::from_millis(self.settle_window_ms)
    }

    pub fn settle_primary(&self) -> Duration {
        Duration::from_millis(self.settle_primary_ms)
    }

    pub fn settle_secondary(&self) -> Duration {
        Duration::from_millis(self.settle_secondary_ms)
    }
}
