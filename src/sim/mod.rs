//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Stable iteration order (by entity ID)
//! - No rendering, input-device or platform dependencies

pub mod collision;
pub mod grid;
pub mod level;
pub mod player;
pub mod session;
pub mod star;
pub mod state;
pub mod tick;

pub use collision::{CollisionReport, in_contact, resolve_collisions};
pub use grid::{GridLayout, cell_to_world};
pub use level::{GridCell, Level, MalformedLevelError, RawLevel, TileColor};
pub use player::{Direction, MoveState, Player};
pub use session::{GameSession, HudSnapshot, SessionPhase};
pub use star::Star;
pub use state::{Coin, GameEvent, GameState, Hazard, HitSource};
pub use tick::{TickInput, tick};
