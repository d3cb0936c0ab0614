//! Session bookkeeping: lives, coins and the game-over transition

use std::fmt;

use serde::{Deserialize, Serialize};

/// Session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    Playing,
    /// Terminal until `reset`
    GameOver,
}

/// Lives/coins for one playthrough of a level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    level_name: String,
    initial_lives: u32,
    lives: u32,
    coins_collected: u32,
    total_coins: u32,
    phase: SessionPhase,
}

impl GameSession {
    pub fn new(initial_lives: u32, level_name: impl Into<String>, total_coins: u32) -> Self {
        Self {
            level_name: level_name.into(),
            initial_lives,
            lives: initial_lives,
            coins_collected: 0,
            total_coins,
            phase: SessionPhase::Playing,
        }
    }

    pub fn level_name(&self) -> &str {
        &self.level_name
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn coins_collected(&self) -> u32 {
        self.coins_collected
    }

    pub fn total_coins(&self) -> u32 {
        self.total_coins
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == SessionPhase::GameOver
    }

    pub fn all_coins_collected(&self) -> bool {
        self.total_coins > 0 && self.coins_collected == self.total_coins
    }

    /// Count a coin pickup
    ///
    /// Ignored after game over and once every coin has been counted. Returns
    /// whether the pickup was counted.
    pub fn collect_coin(&mut self) -> bool {
        if self.is_game_over() || self.coins_collected >= self.total_coins {
            return false;
        }
        self.coins_collected += 1;
        true
    }

    /// Spend a life
    ///
    /// Returns true if a life was spent. With no lives left nothing is
    /// decremented, false is returned and the session moves to `GameOver`.
    pub fn lose_life(&mut self) -> bool {
        if self.lives > 0 {
            self.lives -= 1;
            return true;
        }
        self.phase = SessionPhase::GameOver;
        false
    }

    pub fn gain_life(&mut self) {
        self.lives = self.lives.saturating_add(1);
    }

    /// Back to the configured starting lives with no coins counted
    ///
    /// Only the counters are reset. Use `GameState::restart` to also put the
    /// collected coins back on the board.
    pub fn reset(&mut self) {
        self.coins_collected = 0;
        self.lives = self.initial_lives;
        self.phase = SessionPhase::Playing;
    }

    pub fn hud(&self) -> HudSnapshot {
        HudSnapshot {
            level_name: self.level_name.clone(),
            coins_collected: self.coins_collected,
            total_coins: self.total_coins,
            lives: self.lives,
        }
    }
}

/// Read-only header values, refreshed once per tick
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HudSnapshot {
    pub level_name: String,
    pub coins_collected: u32,
    pub total_coins: u32,
    pub lives: u32,
}

impl fmt::Display for HudSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Level: {}  Coins: {} / {}  Lives: {}",
            self.level_name, self.coins_collected, self.total_coins, self.lives
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let session = GameSession::new(3, "Intro", 4);
        assert_eq!(session.lives(), 3);
        assert_eq!(session.coins_collected(), 0);
        assert_eq!(session.total_coins(), 4);
        assert_eq!(session.level_name(), "Intro");
        assert_eq!(session.phase(), SessionPhase::Playing);
    }

    #[test]
    fn test_collect_saturates_at_total() {
        let mut session = GameSession::new(3, "", 2);
        assert!(session.collect_coin());
        assert!(session.collect_coin());
        assert!(session.all_coins_collected());
        assert!(!session.collect_coin());
        assert_eq!(session.coins_collected(), 2);
    }

    #[test]
    fn test_lose_life_until_game_over() {
        let mut session = GameSession::new(3, "", 0);
        assert!(session.lose_life());
        assert!(session.lose_life());
        assert!(session.lose_life());
        assert_eq!(session.lives(), 0);
        assert!(!session.is_game_over());

        assert!(!session.lose_life());
        assert_eq!(session.lives(), 0);
        assert!(session.is_game_over());

        // Still no underflow
        assert!(!session.lose_life());
        assert_eq!(session.lives(), 0);
    }

    #[test]
    fn test_no_coins_after_game_over() {
        let mut session = GameSession::new(0, "", 3);
        assert!(!session.lose_life());
        assert!(!session.collect_coin());
        assert_eq!(session.coins_collected(), 0);
    }

    #[test]
    fn test_reset_restores_configured_lives() {
        let mut session = GameSession::new(5, "", 3);
        session.collect_coin();
        for _ in 0..6 {
            session.lose_life();
        }
        assert!(session.is_game_over());

        session.reset();
        assert_eq!(session.lives(), 5);
        assert_eq!(session.coins_collected(), 0);
        assert_eq!(session.phase(), SessionPhase::Playing);
    }

    #[test]
    fn test_gain_life() {
        let mut session = GameSession::new(1, "", 0);
        session.gain_life();
        assert_eq!(session.lives(), 2);
    }

    #[test]
    fn test_hud_text() {
        let mut session = GameSession::new(3, "Caves", 5);
        session.collect_coin();
        assert_eq!(session.hud().to_string(), "Level: Caves  Coins: 1 / 5  Lives: 3");
    }
}
