//! Playback configuration resource.
//!
//! Settings for the headless demo driver, loaded from an INI file. Provides
//! defaults for safe startup; missing files or keys keep the defaults.
//!
//! # Configuration File Format
//!
//! ```ini
//! [playback]
//! tick_rate = 60
//! ticks = 240
//!
//! [content]
//! animation_set = ./assets/animations/demo.json
//! ```

use bevy_ecs::prelude::Resource;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_TICK_RATE: u32 = 60;
const DEFAULT_TICKS: u64 = 240;
const DEFAULT_SET_PATH: &str = "./assets/animations/demo.json";
const DEFAULT_CONFIG_PATH: &str = "./flipbook.ini";

/// Demo driver configuration.
#[derive(Resource, Debug, Clone)]
pub struct PlaybackConfig {
    /// Simulation ticks per second.
    pub tick_rate: u32,
    /// Number of ticks the demo runs before exiting.
    pub ticks: u64,
    /// Path to the animation set file loaded at startup.
    pub set_path: PathBuf,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaybackConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            tick_rate: DEFAULT_TICK_RATE,
            ticks: DEFAULT_TICKS,
            set_path: PathBuf::from(DEFAULT_SET_PATH),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Fixed frame delta derived from the tick rate, in seconds.
    pub fn delta(&self) -> f32 {
        1.0 / self.tick_rate as f32
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [playback] section
        if let Some(rate) = config.getuint("playback", "tick_rate").ok().flatten() {
            self.tick_rate = (rate as u32).max(1);
        }
        if let Some(ticks) = config.getuint("playback", "ticks").ok().flatten() {
            self.ticks = ticks;
        }

        // [content] section
        if let Some(path) = config.get("content", "animation_set") {
            self.set_path = PathBuf::from(path);
        }

        info!(
            "Loaded config: tick_rate={}, ticks={}, animation_set={:?}",
            self.tick_rate, self.ticks, self.set_path
        );

        Ok(())
    }
}
