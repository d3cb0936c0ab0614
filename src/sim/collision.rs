//! Player-vs-entity contact resolution
//!
//! Brute force over every live entity: the boards are small, so a distance
//! check per entity per tick is all that is needed.

use glam::Vec2;

use super::state::{GameState, HitSource};

/// Result of one collision pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionReport {
    /// Coins picked up this tick (id, position)
    pub coins: Vec<(u32, Vec2)>,
    /// First hazard or star touched, with the player position at contact
    pub hit: Option<(HitSource, Vec2)>,
    /// The hit ended the session
    pub game_over: bool,
}

/// Contact test: strictly closer than `radius`
#[inline]
pub fn in_contact(a: Vec2, b: Vec2, radius: f32) -> bool {
    a.distance_squared(b) < radius * radius
}

/// First hazard, then star, touching `pos` (lowest id wins within a kind)
pub fn find_hit(state: &GameState, pos: Vec2, radius: f32) -> Option<HitSource> {
    let hazard = state
        .hazards
        .iter()
        .find(|h| in_contact(pos, h.pos, radius))
        .map(|h| HitSource::Hazard { id: h.id });

    hazard.or_else(|| {
        state
            .stars
            .iter()
            .find(|s| in_contact(pos, s.pos, radius))
            .map(|s| HitSource::Star { id: s.id })
    })
}

/// Resolve all contacts for the player's current position
///
/// Coins are picked up first and removed, so each coin counts at most once.
/// A coin the session refuses (count already saturated) stays on the board.
/// At most one life is lost per tick: the first hazard or star contact sends
/// the player back to spawn and the pass ends there.
pub fn resolve_collisions(state: &mut GameState) -> CollisionReport {
    let mut report = CollisionReport::default();
    if state.session.is_game_over() {
        return report;
    }

    let pos = state.player.position();
    let radius = state.config.contact_radius;

    let session = &mut state.session;
    state.coins.retain(|coin| {
        if in_contact(pos, coin.pos, radius) && session.collect_coin() {
            report.coins.push((coin.id, coin.pos));
            false
        } else {
            true
        }
    });

    if let Some(source) = find_hit(state, pos, radius) {
        state.player.reset_to_start();
        let alive = state.session.lose_life();
        report.hit = Some((source, pos));
        report.game_over = !alive;
    }

    report
}
