// Configuration management
//
// Operator-facing settings, persisted as TOML next to the binary. Any
// load problem (missing file, parse error) falls back to the defaults so
// a bad config never blocks a run.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default configuration file name
const CONFIG_FILE: &str = "famicore.toml";

/// Emulator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmulatorConfig {
    /// Video settings
    pub video: VideoConfig,

    /// Audio settings
    pub audio: AudioConfig,
}

/// Video configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoConfig {
    /// Integer window scale (1-8)
    pub scale: u32,
}

/// Audio configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Master enable for sound output
    pub enabled: bool,

    /// Master volume (0.0-1.0)
    pub volume: f32,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self { scale: 3 }
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            volume: 0.5,
        }
    }
}

impl Default for EmulatorConfig {
    fn default() -> Self {
        Self {
            video: VideoConfig::default(),
            audio: AudioConfig::default(),
        }
    }
}

impl EmulatorConfig {
    /// Load the configuration from the default location, falling back to
    /// defaults when the file is absent or malformed
    pub fn load_or_default() -> Self {
        Self::load_from(CONFIG_FILE)
    }

    /// Load from an explicit path with the same fallback behavior
    pub fn load_from<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(path) {
            Ok(text) => match toml::from_str(&text) {
                Ok(config) => config,
                Err(err) => {
                    eprintln!("config parse error, using defaults: {}", err);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Serialize back to TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
