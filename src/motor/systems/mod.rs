//! Motor domain: system modules for input, physics and stepping.

pub(crate) mod input;
pub(crate) mod physics;
pub(crate) mod steps;

pub(crate) use input::read_input;
pub(crate) use steps::{attach_new_motors, drive_player_motor, tick_attack_timers};
