//! Bouncing star
//!
//! Stars drift at constant speed inside a square of half-width
//! `bounce_range` around their home position. Each axis is clamped and
//! redirected independently, every tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A patrolling star hazard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Star {
    pub id: u32,
    /// Spawn point the bounce box is centered on
    home: Vec2,
    pub pos: Vec2,
    pub vel: Vec2,
    bounce_range: f32,
    /// Cosmetic rotation in degrees, kept in [0, 360)
    pub angle: f32,
}

impl Star {
    pub fn new(id: u32, home: Vec2, vel: Vec2, bounce_range: f32) -> Self {
        Self {
            id,
            home,
            pos: home,
            vel,
            bounce_range,
            angle: 0.0,
        }
    }

    pub fn home(&self) -> Vec2 {
        self.home
    }

    pub fn bounce_range(&self) -> f32 {
        self.bounce_range
    }

    /// Integrate, spin, then keep inside the bounce box
    pub fn update(&mut self, dt: f32, spin_degrees: f32) {
        self.pos += self.vel * dt;
        self.angle = (self.angle + spin_degrees).rem_euclid(360.0);
        self.apply_bounce();
    }

    /// Clamp each axis to `home ± bounce_range` and point velocity inward
    ///
    /// Runs unconditionally, so a star sitting exactly on an edge keeps being
    /// pushed back in. Speed on each axis is preserved.
    pub fn apply_bounce(&mut self) {
        let min = self.home - Vec2::splat(self.bounce_range);
        let max = self.home + Vec2::splat(self.bounce_range);

        if self.pos.x <= min.x {
            self.pos.x = min.x;
            self.vel.x = self.vel.x.abs();
        } else if self.pos.x >= max.x {
            self.pos.x = max.x;
            self.vel.x = -self.vel.x.abs();
        }

        if self.pos.y <= min.y {
            self.pos.y = min.y;
            self.vel.y = self.vel.y.abs();
        } else if self.pos.y >= max.y {
            self.pos.y = max.y;
            self.vel.y = -self.vel.y.abs();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn star() -> Star {
        Star::new(1, Vec2::new(100.0, 200.0), Vec2::new(-50.0, 0.0), 100.0)
    }

    #[test]
    fn test_rotates_each_update() {
        let mut s = star();
        s.update(0.0, 2.0);
        assert_eq!(s.angle, 2.0);
        s.update(0.0, 2.0);
        s.update(0.0, 2.0);
        assert_eq!(s.angle, 6.0);
    }

    #[test]
    fn test_angle_wraps() {
        let mut s = star();
        s.angle = 359.0;
        s.update(0.0, 2.0);
        assert_eq!(s.angle, 1.0);
    }

    #[test]
    fn test_left_boundary() {
        let mut s = star();
        s.pos.x = -1.0;
        s.apply_bounce();
        assert_eq!(s.pos.x, 0.0);
        assert_eq!(s.vel.x, 50.0);
    }

    #[test]
    fn test_right_boundary() {
        let mut s = star();
        s.pos.x = 201.0;
        s.vel.x = 50.0;
        s.apply_bounce();
        assert_eq!(s.pos.x, 200.0);
        assert_eq!(s.vel.x, -50.0);
    }

    #[test]
    fn test_top_and_bottom_boundary() {
        let mut s = star();
        s.pos.y = 99.0;
        s.vel.y = -50.0;
        s.apply_bounce();
        assert_eq!(s.pos.y, 100.0);
        assert_eq!(s.vel.y, 50.0);

        s.pos.y = 301.0;
        s.apply_bounce();
        assert_eq!(s.pos.y, 300.0);
        assert_eq!(s.vel.y, -50.0);
    }

    #[test]
    fn test_resting_on_edge_keeps_pointing_inward() {
        let mut s = star();
        s.pos.x = 0.0;
        s.vel.x = -50.0;
        s.apply_bounce();
        assert_eq!(s.vel.x, 50.0);
        // Already inward: stays inward
        s.apply_bounce();
        assert_eq!(s.vel.x, 50.0);
        assert_eq!(s.pos.x, 0.0);
    }

    #[test]
    fn test_drifts_left_then_turns_around() {
        let mut s = star();
        let dt = 1.0 / 60.0;
        let mut bounced = false;
        for _ in 0..200 {
            s.update(dt, 2.0);
            if s.vel.x > 0.0 {
                bounced = true;
                break;
            }
        }
        assert!(bounced);
        assert_eq!(s.pos.x, 0.0);
        assert_eq!(s.vel.x, 50.0);
        assert_eq!(s.home(), Vec2::new(100.0, 200.0));
    }

    proptest! {
        #[test]
        fn prop_stays_in_box_with_constant_speed(
            vx in -300.0f32..300.0,
            vy in -300.0f32..300.0,
            steps in 1usize..400,
        ) {
            let mut s = Star::new(1, Vec2::new(100.0, 200.0), Vec2::new(vx, vy), 100.0);
            for _ in 0..steps {
                s.update(1.0 / 60.0, 2.0);
                prop_assert!(s.pos.x >= 0.0 && s.pos.x <= 200.0);
                prop_assert!(s.pos.y >= 100.0 && s.pos.y <= 300.0);
                prop_assert_eq!(s.vel.x.abs(), vx.abs());
                prop_assert_eq!(s.vel.y.abs(), vy.abs());
            }
        }
    }
}
