//! Game configuration resource.
//!
//! Manages game settings loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [interaction]
//! debug_mode = true
//! help_level_min = 0
//! help_level_max = 2
//! help_level_start = 2
//!
//! [player]
//! max_interaction_distance = 5.0
//!
//! [grid]
//! cell_size = 1.0
//!
//! [content]
//! path = ./content.json
//! ```

use crate::components::player::DEFAULT_MAX_INTERACTION_DISTANCE;
use crate::error::ConfigError;
use crate::resources::interactionstate::{HelpLevelBounds, default_debug_mode};
use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_HELP_LEVEL_MIN: i32 = 0;
const DEFAULT_HELP_LEVEL_MAX: i32 = 2;
const DEFAULT_HELP_LEVEL_START: i32 = 2;
const DEFAULT_CELL_SIZE: f32 = 1.0;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";
const DEFAULT_CONTENT_PATH: &str = "./content.json";

/// Game configuration resource.
///
/// Read once at startup; the setup hook uses it to build the collaborators
/// and the [`InteractionState`](crate::resources::interactionstate::InteractionState).
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Initial debug mode. Defaults to on in development builds.
    pub debug_mode: bool,
    /// Lowest help level offered by the UI.
    pub help_level_min: i32,
    /// Highest help level offered by the UI.
    pub help_level_max: i32,
    /// Help level at startup.
    pub help_level_start: i32,
    /// Player reach in world units.
    pub max_interaction_distance: f32,
    /// Grid cell side in world units. Always finite and positive.
    pub cell_size: f32,
    /// Path to the JSON content tables.
    pub content_path: PathBuf,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            debug_mode: default_debug_mode(),
            help_level_min: DEFAULT_HELP_LEVEL_MIN,
            help_level_max: DEFAULT_HELP_LEVEL_MAX,
            help_level_start: DEFAULT_HELP_LEVEL_START,
            max_interaction_distance: DEFAULT_MAX_INTERACTION_DISTANCE,
            cell_size: DEFAULT_CELL_SIZE,
            content_path: PathBuf::from(DEFAULT_CONTENT_PATH),
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

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values. Values that are
    /// present but malformed are reported and skipped.
    pub fn load_from_file(&mut self) -> Result<(), ConfigError> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|message| ConfigError::Settings {
                path: self.config_path.clone(),
                message,
            })?;

        // [interaction] section
        if let Some(debug_mode) = read_setting(config.getbool("interaction", "debug_mode")) {
            self.debug_mode = debug_mode;
        }
        if let Some(min) = read_setting(read_i32(&config, "interaction", "help_level_min")) {
            self.help_level_min = min;
        }
        if let Some(max) = read_setting(read_i32(&config, "interaction", "help_level_max")) {
            self.help_level_max = max;
        }
        if let Some(start) = read_setting(read_i32(&config, "interaction", "help_level_start")) {
            self.help_level_start = start;
        }

        // [player] section
        if let Some(distance) = read_setting(config.getfloat("player", "max_interaction_distance"))
        {
            self.max_interaction_distance = distance as f32;
        }

        // [grid] section
        if let Some(cell_size) = read_setting(config.getfloat("grid", "cell_size")) {
            let cell_size = cell_size as f32;
            if cell_size.is_finite() && cell_size > 0.0 {
                self.cell_size = cell_size;
            } else {
                warn!("Ignoring invalid setting: grid.cell_size must be positive, got {}", cell_size);
            }
        }

        // [content] section
        if let Some(path) = config.get("content", "path") {
            self.content_path = PathBuf::from(path);
        }

        info!(
            "Loaded config: debug={}, help={}..={} start {}, reach={}, cell={}, content={:?}",
            self.debug_mode,
            self.help_level_min,
            self.help_level_max,
            self.help_level_start,
            self.max_interaction_distance,
            self.cell_size,
            self.content_path
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), ConfigError> {
        let mut config = Ini::new();

        // [interaction] section
        config.set("interaction", "debug_mode", Some(self.debug_mode.to_string()));
        config.set(
            "interaction",
            "help_level_min",
            Some(self.help_level_min.to_string()),
        );
        config.set(
            "interaction",
            "help_level_max",
            Some(self.help_level_max.to_string()),
        );
        config.set(
            "interaction",
            "help_level_start",
            Some(self.help_level_start.to_string()),
        );

        // [player] section
        config.set(
            "player",
            "max_interaction_distance",
            Some(self.max_interaction_distance.to_string()),
        );

        // [grid] section
        config.set("grid", "cell_size", Some(self.cell_size.to_string()));

        // [content] section
        config.set(
            "content",
            "path",
            Some(self.content_path.display().to_string()),
        );

        config
            .write(&self.config_path)
            .map_err(|source| ConfigError::SaveSettings {
                path: self.config_path.clone(),
                source,
            })?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Help-level range and start value.
    pub fn help_level_bounds(&self) -> HelpLevelBounds {
        HelpLevelBounds {
            min: self.help_level_min,
            max: self.help_level_max,
            start: self.help_level_start,
        }
    }
}

fn read_i32(config: &Ini, section: &str, key: &str) -> Result<Option<i32>, String> {
    match config.getint(section, key)? {
        Some(value) => i32::try_from(value)
            .map(Some)
            .map_err(|_| format!("{}.{} out of range: {}", section, key, value)),
        None => Ok(None),
    }
}

fn read_setting<T>(value: Result<Option<T>, String>) -> Option<T> {
    match value {
        Ok(value) => value,
        Err(e) => {
            warn!("Ignoring invalid setting: {}", e);
            None
        }
    }
}
