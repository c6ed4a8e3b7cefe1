//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub use collisions::{GROUND_PROBE_RADIUS, probe_origins};
pub(crate) use collisions::probe_surroundings;
pub(crate) use input::read_input;
pub use movement::apply_dash;
pub(crate) use movement::{apply_motion, sense_and_decide};
