//! Coin Dash - A grid-locked coin collecting arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, session state)
//! - `settings`: Data-driven game configuration
//! - `error`: Crate-wide error types

pub mod error;
pub mod settings;
pub mod sim;

pub use error::{ConfigError, Error, Result};
pub use settings::{GameConfig, WorldBounds};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (one tick per rendered frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Grid cell dimensions (world units)
    pub const CELL_SIZE: f32 = 32.0;
    /// World anchor the level grid is centered on
    pub const CENTER_X: f32 = 400.0;
    pub const CENTER_Y: f32 = 300.0;
    /// World rectangle the player may not leave
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 600.0;

    /// Distance below which the player touches an entity
    pub const CONTACT_RADIUS: f32 = 20.0;

    /// Duration of one grid step (seconds, linear tween)
    pub const MOVE_DURATION: f32 = 0.15;

    /// Star defaults
    pub const STAR_VELOCITY_X: f32 = -50.0;
    pub const STAR_VELOCITY_Y: f32 = 0.0;
    pub const STAR_BOUNCE_RANGE: f32 = 100.0;
    /// Cosmetic spin (degrees per tick, clockwise)
    pub const STAR_SPIN_DEGREES: f32 = 2.0;

    /// Coin spin (radians per tick) and the narrowest the coin gets
    pub const COIN_SPIN: f32 = 0.05;
    pub const COIN_MIN_SCALE: f32 = 0.2;

    /// Lives at session start
    pub const DEFAULT_LIVES: u32 = 3;
}
