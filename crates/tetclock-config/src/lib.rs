//! Optional read-only configuration file for tetclock.
//!
//! The file lives at `<config dir>/tetclock/config.toml`. Every key is optional
//! and a missing file simply means defaults.

use std::{fs, path::PathBuf, time::Duration};

use color_eyre::eyre::{Result, WrapErr};
use directories::ProjectDirs;
use log::warn;
use serde::{Deserialize, Serialize};
use tetclock_core::{DEFAULT_PALETTE, OUTLINE, Rgba};

/// Accepted frame rate range in frames per second.
const FRAME_RATE_RANGE: (u32, u32) = (1, 240);

/// Shortest allowed minute-check interval.
const MIN_TICK_INTERVAL_MS: u64 = 50;

/// User configuration, deserialized from TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Animation frames per second.
    pub frame_rate: u32,
    /// How often the wall clock is checked for a minute rollover.
    pub tick_interval_ms: u64,
    /// Block colors as `#rgb` or `#rrggbb` strings.
    pub palette: Vec<String>,
    /// Block outline color.
    pub outline: String,
    /// Color shown behind the blocks.
    pub background: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frame_rate: 60,
            tick_interval_ms: 1000,
            palette: ["#0ff", "#0f0", "#f0f", "#ff0", "#f00", "#00f"]
                .into_iter()
                .map(String::from)
                .collect(),
            outline: "#000".to_string(),
            background: "#000".to_string(),
        }
    }
}

impl Config {
    /// Path of the configuration file, if a config directory can be determined.
    pub fn path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "tetclock").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load the configuration file, falling back to defaults when it does not exist.
    pub fn load() -> Result<Self> {
        match Self::path() {
            Some(path) if path.exists() => {
                let contents = fs::read_to_string(&path)
                    .wrap_err_with(|| format!("failed to read {}", path.display()))?;
                Self::from_toml_str(&contents)
                    .wrap_err_with(|| format!("failed to parse {}", path.display()))
            }
            _ => Ok(Self::default()),
        }
    }

    /// Parse a configuration from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Palette colors. Invalid entries are skipped; an empty result means the default palette.
    pub fn palette_colors(&self) -> Vec<Rgba> {
        let colors: Vec<Rgba> = self
            .palette
            .iter()
            .filter_map(|hex| {
                let color = Rgba::from_hex(hex);
                if color.is_none() {
                    warn!("ignoring invalid palette color {hex:?}");
                }
                color
            })
            .collect();

        if colors.is_empty() {
            DEFAULT_PALETTE.to_vec()
        } else {
            colors
        }
    }

    pub fn outline_color(&self) -> Rgba {
        parse_or(&self.outline, OUTLINE, "outline")
    }

    pub fn background_color(&self) -> Rgba {
        parse_or(&self.background, Rgba::BLACK, "background")
    }

    /// Interval between animation frames.
    pub fn frame_period(&self) -> Duration {
        let (min, max) = FRAME_RATE_RANGE;
        Duration::from_secs(1) / self.frame_rate.clamp(min, max)
    }

    /// Interval between minute-rollover checks.
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(MIN_TICK_INTERVAL_MS))
    }
}

fn parse_or(hex: &str, fallback: Rgba, key: &str) -> Rgba {
    Rgba::from_hex(hex).unwrap_or_else(|| {
        warn!("ignoring invalid {key} color {hex:?}");
        fallback
    })
}
