//! Config domain: motion tunables loaded from disk at startup.

mod loader;
mod validation;

#[cfg(test)]
mod tests;

use bevy::prelude::*;
use std::path::PathBuf;

pub use loader::{
    ConfigLoadError, load_motion_config, parse_motion_config_json, parse_motion_config_ron,
};
pub use validation::{ValidationError, validate_motion_config};

use crate::movement::{MotionConfig, MotionController};

/// Default location of the motion config.
pub const DEFAULT_MOTION_CONFIG_PATH: &str = "assets/data/motion.ron";

/// Environment variable overriding the motion config path.
pub const MOTION_CONFIG_ENV: &str = "WALLRUN_MOTION_CONFIG";

/// Resolve the config path from the environment, falling back to the default.
pub fn motion_config_path() -> PathBuf {
    std::env::var(MOTION_CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_MOTION_CONFIG_PATH))
}

/// Load and validate the motion config. Falls back to defaults if the file is
/// missing or unparseable; validation problems are reported but not corrected.
pub fn load_or_default() -> MotionConfig {
    let path = motion_config_path();

    let config = match load_motion_config(&path) {
        Ok(config) => {
            info!("Loaded motion config from {}", path.display());
            config
        }
        Err(e) => {
            warn!("{}, using default motion config", e);
            MotionConfig::default()
        }
    };

    for error in validate_motion_config(&config) {
        warn!("Motion config: {}", error);
    }

    config
}

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(MotionController::new(load_or_default()));
    }
}
