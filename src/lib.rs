//! Ball Eater - big ball eats small ball
//!
//! Core modules:
//! - `sim`: Deterministic simulation (actors, absorption, game state)
//! - `game`: Fixed-order game loop over an abstract drawing surface
//! - `renderer`: WebGPU circle renderer
//! - `platform`: Native window and input integration
//! - `settings`: Game configuration

pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::{EventSource, Game, Surface};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Default screen dimensions
    pub const SCREEN_WIDTH: u32 = 800;
    pub const SCREEN_HEIGHT: u32 = 600;
    /// Largest accepted screen extent on either axis
    pub const MAX_SCREEN_EXTENT: u32 = 16384;

    /// Delay between ticks (ms)
    pub const FRAME_DELAY_MS: u64 = 50;
    /// Ticks between enemy spawns
    pub const SPAWN_INTERVAL_TICKS: u64 = 50;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 50.0;
    /// Distance the player travels per tick
    pub const PLAYER_STEP: f32 = 10.0;

    /// Enemy radius range (inclusive)
    pub const ENEMY_MIN_RADIUS: i32 = 10;
    pub const ENEMY_MAX_RADIUS: i32 = 50;
    /// Enemy per-axis speed range (inclusive)
    pub const ENEMY_MAX_SPEED: i32 = 10;

    /// Default spawn region (inclusive, screen pixels)
    pub const SPAWN_MIN: i32 = 100;
    pub const SPAWN_MAX: i32 = 500;

    /// Fraction of the prey's radius gained by the eater (floored)
    pub const GROWTH_FACTOR: f64 = 0.146;
}
