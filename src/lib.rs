//! 2D platformer locomotion: a motion state machine for a wall-jumping, dashing
//! character, a timed camera shake, and the bevy/avian plugins that drive them.

pub mod camera;
pub mod config;
pub mod movement;
pub mod sprites;

pub use camera::CameraPlugin;
pub use config::ConfigPlugin;
pub use movement::MovementPlugin;
pub use sprites::SpritesPlugin;
