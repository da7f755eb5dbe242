//! Rice Rocks - a wrap-around asteroid shooter
//!
//! Core modules:
//! - `sim`: Entity simulation (movement, wrapping, collisions, spawning, session)
//! - `input`: Device events to simulation commands
//! - `audio`: Event-driven sound playback
//! - `renderer`: Draw-order contract for a frame
//! - `assets`: Startup asset manifest and validation
//! - `settings`: User preferences
//! - `driver`: Fixed-rate frame loop

pub mod assets;
pub mod audio;
pub mod driver;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (pixels)
    pub const WIDTH: f32 = 800.0;
    pub const HEIGHT: f32 = 600.0;

    /// Target frame rate
    pub const TICK_RATE: u32 = 60;
    /// Rock spawner period (wall clock)
    pub const SPAWN_INTERVAL_MS: u64 = 1000;

    /// Velocity damping applied to the ship every tick
    pub const SHIP_DAMPING: f32 = 0.015;
    /// Acceleration added along the ship's heading while thrusting
    pub const SHIP_THRUST: f32 = 0.1;
    /// Angular velocity while a turn key is held (degrees per tick)
    pub const SHIP_TURN_RATE: f32 = 5.0;
    /// Missile speed relative to the ship
    pub const MISSILE_SPEED: f32 = 6.0;
    /// Gap between the ship hull and a freshly fired missile
    pub const MISSILE_CLEARANCE: f32 = 5.0;

    /// Lives at the start of a game
    pub const STARTING_LIVES: i32 = 3;
    /// The spawner stops adding rocks at this population
    pub const MAX_ROCKS: usize = 11;
    /// Rocks may not spawn this close to the ship
    pub const SPAWN_SAFE_DISTANCE: f32 = 100.0;
    /// Inclusive range of rock spin (degrees per tick)
    pub const ROCK_SPIN_MIN: i32 = -5;
    pub const ROCK_SPIN_MAX: i32 = 10;

    /// Initial background scroll phase
    pub const SCROLL_PHASE_START: f32 = 0.5;
}

/// Unit vector for an angle in radians (screen Y not yet inverted)
#[inline]
pub fn angle_to_vector(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// Euclidean distance between two points
#[inline]
pub fn dist(p: Vec2, q: Vec2) -> f32 {
    p.distance(q)
}
