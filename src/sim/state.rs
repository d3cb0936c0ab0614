//! Game state and core simulation types
//!
//! Built once from a parsed level; mutated only by `tick`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::grid::GridLayout;
use super::level::{GridCell, Level, TileColor};
use super::player::Player;
use super::session::GameSession;
use super::star::Star;
use crate::consts::COIN_MIN_SCALE;
use crate::settings::GameConfig;

/// A collectible coin (never moves)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coin {
    pub id: u32,
    pub pos: Vec2,
    /// Cosmetic spin phase (radians)
    pub spin: f32,
}

impl Coin {
    pub fn new(id: u32, pos: Vec2) -> Self {
        Self { id, pos, spin: 0.0 }
    }

    pub fn advance_spin(&mut self, step: f32) {
        self.spin += step;
    }

    /// Horizontal sprite scale faking a spin about the vertical axis
    pub fn scale_x(&self) -> f32 {
        self.spin.cos().abs() * (1.0 - COIN_MIN_SCALE) + COIN_MIN_SCALE
    }
}

/// A static hazard tile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hazard {
    pub id: u32,
    pub pos: Vec2,
    pub color: TileColor,
}

/// What the player ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitSource {
    Hazard { id: u32 },
    Star { id: u32 },
}

/// Things that happened during a tick, for the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    MoveStarted { from: Vec2, to: Vec2 },
    /// Remove the coin's visual
    CoinCollected { id: u32, pos: Vec2 },
    /// Player was sent back to spawn from `pos`
    PlayerHit { source: HitSource, pos: Vec2 },
    AllCoinsCollected,
    GameOver,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub config: GameConfig,
    pub session: GameSession,
    pub player: Player,
    /// Coins still on the board (collected coins are removed)
    pub coins: Vec<Coin>,
    pub hazards: Vec<Hazard>,
    pub stars: Vec<Star>,
    /// Goal position (decorative)
    pub goal: Option<Vec2>,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events produced since the last `drain_events`
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Where the player was hit (not gameplay-affecting)
    #[serde(skip)]
    pub death_markers: Vec<Vec2>,
    next_id: u32,
}

impl GameState {
    /// Place every entity of a level
    pub fn new(level: &Level, config: GameConfig) -> Self {
        let layout = GridLayout::new(config.cell_size, config.center);
        let row_count = level.row_count();

        let mut state = Self {
            session: GameSession::new(config.initial_lives, level.name.clone(), level.coin_count),
            player: Player::new(config.center, config.cell_size, config.move_duration),
            coins: Vec::new(),
            hazards: Vec::new(),
            stars: Vec::new(),
            goal: None,
            time_ticks: 0,
            events: Vec::new(),
            death_markers: Vec::new(),
            next_id: 1,
            config,
        };

        for (row, col, row_len, cell) in Level::cells(&level.terrain) {
            if let GridCell::Hazard(color) = cell {
                let id = state.next_entity_id();
                let pos = layout.cell_to_world(row, col, row_len, row_count);
                state.hazards.push(Hazard { id, pos, color });
            }
        }

        for (row, col, row_len, cell) in Level::cells(&level.items) {
            let pos = layout.cell_to_world(row, col, row_len, row_count);
            match cell {
                GridCell::Coin => {
                    let id = state.next_entity_id();
                    state.coins.push(Coin::new(id, pos));
                }
                GridCell::Star => {
                    let id = state.next_entity_id();
                    state.stars.push(Star::new(
                        id,
                        pos,
                        state.config.star_velocity,
                        state.config.star_bounce_range,
                    ));
                }
                GridCell::Start => {
                    state.player =
                        Player::new(pos, state.config.cell_size, state.config.move_duration);
                }
                GridCell::Goal => state.goal = Some(pos),
                _ => {}
            }
        }

        log::info!(
            "Session started on '{}': {} coins, {} hazards, {} stars, spawn {}",
            level.name,
            state.coins.len(),
            state.hazards.len(),
            state.stars.len(),
            state.player.spawn()
        );

        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Start the level over with the current config
    ///
    /// Collected coins come back, the player returns to spawn, and the session
    /// counters, pending events and death markers are cleared.
    pub fn restart(&mut self, level: &Level) {
        log::info!("Restarting '{}'", level.name);
        *self = Self::new(level, self.config.clone());
    }
}
