//! Loader for RON motor configuration at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::*;
use crate::motor::MotorDefaults;

/// Schema version understood by this loader.
pub const MOTOR_SCHEMA_VERSION: u32 = 1;

pub const MOTOR_CONFIG_FILE: &str = "motor.ron";

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse and validate motor config text. `file_name` is only used in errors.
pub fn parse_motor_config(
    file_name: &str,
    contents: &str,
) -> Result<MotorDefaults, Vec<ContentLoadError>> {
    let def: MotorConfigDef = ron_options().from_str(contents).map_err(|e| {
        vec![ContentLoadError {
            file: file_name.to_string(),
            message: format!("Parse error: {}", e),
        }]
    })?;

    let mut errors = Vec::new();

    if def.schema_version != MOTOR_SCHEMA_VERSION {
        errors.push(ContentLoadError {
            file: file_name.to_string(),
            message: format!(
                "unsupported schema_version {} (expected {})",
                def.schema_version, MOTOR_SCHEMA_VERSION
            ),
        });
    }

    if !def.gravity.is_finite() || def.gravity < 0.0 {
        errors.push(ContentLoadError {
            file: file_name.to_string(),
            message: format!("gravity must be a finite value >= 0, got {}", def.gravity),
        });
    }

    let defaults = MotorDefaults::from(&def);
    if let Err(tuning_errors) = defaults.tuning.validate() {
        errors.extend(tuning_errors.into_iter().map(|e| ContentLoadError {
            file: file_name.to_string(),
            message: e.to_string(),
        }));
    }

    if errors.is_empty() {
        Ok(defaults)
    } else {
        Err(errors)
    }
}

/// Load assets/data/motor.ron (or `base_path`/motor.ron).
pub fn load_motor_config(base_path: &Path) -> Result<MotorDefaults, Vec<ContentLoadError>> {
    let path = base_path.join(MOTOR_CONFIG_FILE);
    let file_name = path.display().to_string();

    let contents = fs::read_to_string(&path).map_err(|e| {
        vec![ContentLoadError {
            file: file_name.clone(),
            message: format!("IO error: {}", e),
        }]
    })?;

    parse_motor_config(&file_name, &contents)
}
