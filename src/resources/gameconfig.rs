//! Game configuration resource.
//!
//! Holds the actor, level and simulation tunables, loaded from an INI file.
//! Defaults reproduce the stock game so a missing or partial file is fine.
//!
//! # Configuration File Format
//!
//! ```ini
//! [actor]
//! move_duration = 0.2
//! base_height = 0.2
//! spawn_x = 0
//! spawn_y = -1
//!
//! [level]
//! min_x = -5
//! max_x = 5
//! min_y = -4
//! max_y = -1
//!
//! [simulation]
//! tick_rate = 60
//! time_scale = 1.0
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

use crate::components::gridposition::GridPosition;
use crate::components::motiontask::MotionParams;
use crate::resources::actor::DEFAULT_SPAWN;
use crate::resources::level::StartArea;

/// Default values for startup
const DEFAULT_MOVE_DURATION: f32 = 0.2;
const DEFAULT_BASE_HEIGHT: f32 = 0.2;
const DEFAULT_TICK_RATE: u32 = 60;
const DEFAULT_TIME_SCALE: f32 = 1.0;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Seconds one hop takes.
    pub move_duration: f32,
    /// Actor height while standing on a cell.
    pub base_height: f32,
    /// Cell the actor starts on.
    pub spawn: GridPosition,
    /// Open starting region.
    pub start_area: StartArea,
    /// Simulation ticks per second.
    pub tick_rate: u32,
    /// Multiplier applied to every tick delta.
    pub time_scale: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            move_duration: DEFAULT_MOVE_DURATION,
            base_height: DEFAULT_BASE_HEIGHT,
            spawn: DEFAULT_SPAWN,
            start_area: StartArea::default(),
            tick_rate: DEFAULT_TICK_RATE,
            time_scale: DEFAULT_TIME_SCALE,
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
    /// Missing values retain their current values. Out-of-range values are
    /// ignored with a warning. Returns an error if the file cannot be read or
    /// parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply_ini(&config);

        info!(
            "Loaded config: move_duration={}, base_height={}, spawn={}, tick_rate={}, time_scale={}",
            self.move_duration, self.base_height, self.spawn, self.tick_rate, self.time_scale
        );

        Ok(())
    }

    /// Load configuration from INI text instead of a file.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply_ini(&config);
        Ok(())
    }

    fn apply_ini(&mut self, config: &Ini) {
        // [actor] section
        if let Some(duration) = config.getfloat("actor", "move_duration").ok().flatten() {
            if duration.is_finite() && duration >= 0.0 {
                self.move_duration = duration as f32;
            } else {
                warn!("Ignoring invalid move_duration {}", duration);
            }
        }
        if let Some(height) = config.getfloat("actor", "base_height").ok().flatten() {
            if height.is_finite() {
                self.base_height = height as f32;
            } else {
                warn!("Ignoring invalid base_height {}", height);
            }
        }
        if let Some(x) = config.getint("actor", "spawn_x").ok().flatten() {
            self.spawn.x = x as i32;
        }
        if let Some(y) = config.getint("actor", "spawn_y").ok().flatten() {
            self.spawn.y = y as i32;
        }

        // [level] section
        if let Some(v) = config.getint("level", "min_x").ok().flatten() {
            self.start_area.min_x = v as i32;
        }
        if let Some(v) = config.getint("level", "max_x").ok().flatten() {
            self.start_area.max_x = v as i32;
        }
        if let Some(v) = config.getint("level", "min_y").ok().flatten() {
            self.start_area.min_y = v as i32;
        }
        if let Some(v) = config.getint("level", "max_y").ok().flatten() {
            self.start_area.max_y = v as i32;
        }

        // [simulation] section
        if let Some(rate) = config.getuint("simulation", "tick_rate").ok().flatten() {
            if rate > 0 {
                self.tick_rate = rate as u32;
            } else {
                warn!("Ignoring zero tick_rate");
            }
        }
        if let Some(scale) = config.getfloat("simulation", "time_scale").ok().flatten() {
            if scale.is_finite() && scale >= 0.0 {
                self.time_scale = scale as f32;
            } else {
                warn!("Ignoring invalid time_scale {}", scale);
            }
        }

        if !self.start_area.contains(self.spawn) {
            warn!(
                "Spawn cell {} lies outside the start area {:?}",
                self.spawn, self.start_area
            );
        }
    }

    fn to_ini(&self) -> Ini {
        let mut config = Ini::new();

        // [actor] section
        config.set("actor", "move_duration", Some(self.move_duration.to_string()));
        config.set("actor", "base_height", Some(self.base_height.to_string()));
        config.set("actor", "spawn_x", Some(self.spawn.x.to_string()));
        config.set("actor", "spawn_y", Some(self.spawn.y.to_string()));

        // [level] section
        config.set("level", "min_x", Some(self.start_area.min_x.to_string()));
        config.set("level", "max_x", Some(self.start_area.max_x.to_string()));
        config.set("level", "min_y", Some(self.start_area.min_y.to_string()));
        config.set("level", "max_y", Some(self.start_area.max_y.to_string()));

        // [simulation] section
        config.set("simulation", "tick_rate", Some(self.tick_rate.to_string()));
        config.set("simulation", "time_scale", Some(self.time_scale.to_string()));

        config
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        self.to_ini()
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Render the configuration as INI text.
    pub fn to_ini_string(&self) -> String {
        self.to_ini().writes()
    }

    /// Motion tunables for the actor.
    pub fn motion_params(&self) -> MotionParams {
        MotionParams {
            move_duration: self.move_duration,
            base_height: self.base_height,
        }
    }

    /// Unscaled seconds per tick.
    pub fn tick_delta(&self) -> f32 {
        1.0 / self.tick_rate.max(1) as f32
    }
}
