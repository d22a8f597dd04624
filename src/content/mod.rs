//! Content domain: data-driven configuration loaded from assets/data.

mod data;
mod loader;

#[cfg(test)]
mod tests;

pub use loader::load_motor_config;

use bevy::prelude::*;
use std::path::Path;

use crate::motor::MotorDefaults;

pub const CONTENT_DIR: &str = "assets/data";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        // Loaded synchronously so defaults exist before any Startup system runs
        let defaults = match load_motor_config(Path::new(CONTENT_DIR)) {
            Ok(defaults) => {
                info!(
                    "Motor config loaded: speed={}, jump_impulse={}, gravity={}",
                    defaults.tuning.speed, defaults.tuning.jump_impulse, defaults.gravity
                );
                defaults
            }
            Err(errors) => {
                for e in &errors {
                    error!("{}", e);
                }
                warn!("Motor config invalid or missing, using built-in defaults");
                MotorDefaults::default()
            }
        };

        app.insert_resource(defaults);
    }
}
