//! Loader for the motion config file at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use crate::movement::MotionConfig;

/// Error type for config loading failures.
#[derive(Debug)]
pub struct ConfigLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ConfigLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse a motion config from RON text.
pub fn parse_motion_config_ron(contents: &str) -> Result<MotionConfig, String> {
    ron_options()
        .from_str(contents)
        .map_err(|e| format!("Parse error: {}", e))
}

/// Parse a motion config from JSON text.
pub fn parse_motion_config_json(contents: &str) -> Result<MotionConfig, String> {
    serde_json::from_str(contents).map_err(|e| format!("Parse error: {}", e))
}

/// Load a motion config file. `.json` files are read as JSON, anything else as RON.
pub fn load_motion_config(path: &Path) -> Result<MotionConfig, ConfigLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ConfigLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    let is_json = path
        .extension()
        .is_some_and(|extension| extension.eq_ignore_ascii_case("json"));

    let parsed = if is_json {
        parse_motion_config_json(&contents)
    } else {
        parse_motion_config_ron(&contents)
    };

    parsed.map_err(|message| ConfigLoadError {
        file: file_name,
        message,
    })
}
