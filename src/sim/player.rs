//! Grid-locked player movement
//!
//! The player moves exactly one grid step per intent, tweened linearly over a
//! fixed duration. Intents arriving while a step is in flight are dropped.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::settings::WorldBounds;

/// A logical movement intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Unit offset in world axes (y grows downward)
    pub fn offset(&self) -> Vec2 {
        match self {
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Right => Vec2::new(1.0, 0.0),
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Down => Vec2::new(0.0, 1.0),
        }
    }
}

/// Movement state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MoveState {
    Idle,
    /// Tweening from `from` to `to`; `elapsed` seconds into the step
    Moving { from: Vec2, to: Vec2, elapsed: f32 },
}

/// The player token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pos: Vec2,
    /// Respawn anchor, fixed at level start
    spawn: Vec2,
    /// Distance covered by one move on each axis
    step: Vec2,
    /// Seconds per move
    move_duration: f32,
    state: MoveState,
}

impl Player {
    pub fn new(spawn: Vec2, step: Vec2, move_duration: f32) -> Self {
        Self {
            pos: spawn,
            spawn,
            step,
            move_duration,
            state: MoveState::Idle,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.pos
    }

    pub fn spawn(&self) -> Vec2 {
        self.spawn
    }

    pub fn state(&self) -> MoveState {
        self.state
    }

    pub fn is_moving(&self) -> bool {
        matches!(self.state, MoveState::Moving { .. })
    }

    /// Where a move in `direction` would end from the current position
    pub fn target_for(&self, direction: Direction) -> Vec2 {
        self.pos + direction.offset() * self.step
    }

    /// Start a one-cell move if idle
    ///
    /// Returns false (and changes nothing) while a move is in flight, or when
    /// the target lies outside `bounds` and further from them than the current
    /// position. A player placed outside the bounds can still work its way in.
    pub fn try_move(&mut self, direction: Direction, bounds: Option<&WorldBounds>) -> bool {
        if self.is_moving() {
            return false;
        }

        let to = self.target_for(direction);
        if let Some(bounds) = bounds {
            if !bounds.contains(to) && bounds.distance_to(to) > bounds.distance_to(self.pos) {
                log::trace!("Move {:?} to {} refused by world bounds", direction, to);
                return false;
            }
        }

        self.state = MoveState::Moving {
            from: self.pos,
            to,
            elapsed: 0.0,
        };
        true
    }

    /// Advance the in-flight move
    ///
    /// Returns true on the tick the move completes. The final position is
    /// exactly the target.
    pub fn update(&mut self, dt: f32) -> bool {
        let MoveState::Moving { from, to, elapsed } = self.state else {
            return false;
        };

        let elapsed = elapsed + dt;
        if elapsed >= self.move_duration {
            self.pos = to;
            self.state = MoveState::Idle;
            return true;
        }

        let t = (elapsed / self.move_duration).clamp(0.0, 1.0);
        self.pos = from.lerp(to, t);
        self.state = MoveState::Moving { from, to, elapsed };
        false
    }

    /// Snap back to the spawn anchor, cancelling any in-flight move
    pub fn reset_to_start(&mut self) {
        self.pos = self.spawn;
        self.state = MoveState::Idle;
    }
}
