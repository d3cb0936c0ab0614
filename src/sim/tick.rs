//! Fixed timestep simulation tick
//!
//! One tick per frame, always in this order:
//! 1. input (start a move if the player is idle)
//! 2. kinematics (player tween, stars, coin spin)
//! 3. collision resolution
//! 4. session observation (events, death markers, game over)

use super::collision::resolve_collisions;
use super::player::{Direction, MoveState};
use super::state::{GameEvent, GameState};

/// Input for a single tick
///
/// Flags are edge-triggered ("just pressed this frame"). When several are
/// set, left wins over right, right over up, up over down.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl TickInput {
    pub fn pressed(direction: Direction) -> Self {
        let mut input = Self::default();
        match direction {
            Direction::Left => input.left = true,
            Direction::Right => input.right = true,
            Direction::Up => input.up = true,
            Direction::Down => input.down = true,
        }
        input
    }

    /// The single intent this tick carries, if any
    pub fn direction(&self) -> Option<Direction> {
        if self.left {
            Some(Direction::Left)
        } else if self.right {
            Some(Direction::Right)
        } else if self.up {
            Some(Direction::Up)
        } else if self.down {
            Some(Direction::Down)
        } else {
            None
        }
    }
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    // Game over is terminal
    if state.session.is_game_over() {
        return;
    }

    state.time_ticks += 1;

    if let Some(direction) = input.direction() {
        if state
            .player
            .try_move(direction, state.config.world_bounds.as_ref())
        {
            if let MoveState::Moving { from, to, .. } = state.player.state() {
                state.events.push(GameEvent::MoveStarted { from, to });
            }
        }
    }

    state.player.update(dt);
    for star in &mut state.stars {
        star.update(dt, state.config.star_spin);
    }
    for coin in &mut state.coins {
        coin.advance_spin(state.config.coin_spin);
    }

    let report = resolve_collisions(state);

    let picked_up = !report.coins.is_empty();
    for (id, pos) in report.coins {
        log::debug!("Coin {} collected at {}", id, pos);
        state.events.push(GameEvent::CoinCollected { id, pos });
    }
    if picked_up && state.session.all_coins_collected() {
        log::info!("All {} coins collected", state.session.total_coins());
        state.events.push(GameEvent::AllCoinsCollected);
    }

    if let Some((source, pos)) = report.hit {
        log::debug!(
            "Player hit by {:?} at {}, {} lives left",
            source,
            pos,
            state.session.lives()
        );
        state.events.push(GameEvent::PlayerHit { source, pos });

        if report.game_over {
            log::info!(
                "Game over on '{}' after {} ticks ({} / {} coins)",
                state.session.level_name(),
                state.time_ticks,
                state.session.coins_collected(),
                state.session.total_coins()
            );
            state.death_markers.clear();
            state.events.push(GameEvent::GameOver);
        } else {
            state.death_markers.push(pos);
        }
    }
}
