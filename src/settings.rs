//! Game configuration
//!
//! Every tunable the simulation reads lives here. Missing JSON fields fall
//! back to the defaults in `crate::consts`.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{ConfigError, Result};

/// Axis-aligned rectangle the player's center is kept inside
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldBounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl WorldBounds {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Inclusive containment test
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Distance from `point` to the nearest point of the rectangle (0 inside)
    pub fn distance_to(&self, point: Vec2) -> f32 {
        point.distance(point.clamp(self.min, self.max))
    }
}

impl Default for WorldBounds {
    /// The world rectangle shrunk by half a cell, so a one-cell sprite
    /// never pokes past the edge
    fn default() -> Self {
        let half = Vec2::splat(CELL_SIZE / 2.0);
        Self {
            min: half,
            max: Vec2::new(WORLD_WIDTH, WORLD_HEIGHT) - half,
        }
    }
}

/// Gameplay configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Lives at session start (and after `reset`)
    pub initial_lives: u32,
    /// Size of one grid cell; also the player's grid step
    pub cell_size: Vec2,
    /// World point the level grid is centered on
    pub center: Vec2,
    /// Player movement limits (`None` = unbounded)
    pub world_bounds: Option<WorldBounds>,
    /// Player/entity contact distance
    pub contact_radius: f32,
    /// Seconds per grid step
    pub move_duration: f32,
    /// Initial star velocity (units/s)
    pub star_velocity: Vec2,
    /// Star oscillation half-range around home
    pub star_bounce_range: f32,
    /// Star spin (degrees per tick)
    pub star_spin: f32,
    /// Coin spin (radians per tick)
    pub coin_spin: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_lives: DEFAULT_LIVES,
            cell_size: Vec2::splat(CELL_SIZE),
            center: Vec2::new(CENTER_X, CENTER_Y),
            world_bounds: Some(WorldBounds::default()),
            contact_radius: CONTACT_RADIUS,
            move_duration: MOVE_DURATION,
            star_velocity: Vec2::new(STAR_VELOCITY_X, STAR_VELOCITY_Y),
            star_bounce_range: STAR_BOUNCE_RANGE,
            star_spin: STAR_SPIN_DEGREES,
            coin_spin: COIN_SPIN,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let finite = [
            ("cell_size", self.cell_size.is_finite()),
            ("center", self.center.is_finite()),
            ("contact_radius", self.contact_radius.is_finite()),
            ("move_duration", self.move_duration.is_finite()),
            ("star_velocity", self.star_velocity.is_finite()),
            ("star_bounce_range", self.star_bounce_range.is_finite()),
            ("star_spin", self.star_spin.is_finite()),
            ("coin_spin", self.coin_spin.is_finite()),
            (
                "world_bounds",
                self.world_bounds
                    .is_none_or(|b| b.min.is_finite() && b.max.is_finite()),
            ),
        ];
        if let Some((field, _)) = finite.iter().find(|(_, ok)| !ok) {
            return Err(invalid(*field, "must be finite"));
        }

        if self.cell_size.x <= 0.0 || self.cell_size.y <= 0.0 {
            return Err(invalid("cell_size", "must be positive on both axes"));
        }
        if self.move_duration <= 0.0 {
            return Err(invalid("move_duration", "must be positive"));
        }
        if self.contact_radius <= 0.0 {
            return Err(invalid("contact_radius", "must be positive"));
        }
        if self.star_bounce_range < 0.0 {
            return Err(invalid("star_bounce_range", "must not be negative"));
        }
        if let Some(bounds) = &self.world_bounds {
            if bounds.min.x > bounds.max.x || bounds.min.y > bounds.max.y {
                return Err(invalid("world_bounds", "min must not exceed max"));
            }
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field,
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_match_consts() {
        let config = GameConfig::default();
        assert_eq!(config.initial_lives, 3);
        assert_eq!(config.cell_size, Vec2::splat(32.0));
        assert_eq!(config.center, Vec2::new(400.0, 300.0));
        assert_eq!(config.contact_radius, 20.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = GameConfig::from_json(r#"{ "initial_lives": 5 }"#).unwrap();
        assert_eq!(config.initial_lives, 5);
        assert_eq!(config.move_duration, MOVE_DURATION);
        assert_eq!(config.world_bounds, Some(WorldBounds::default()));
    }

    #[test]
    fn test_unbounded_world() {
        let config = GameConfig::from_json(r#"{ "world_bounds": null }"#).unwrap();
        assert!(config.world_bounds.is_none());
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = GameConfig::from_json(r#"{ "move_duration": 0.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            crate::Error::Config(ConfigError::InvalidValue {
                field: "move_duration",
                ..
            })
        ));

        let err = GameConfig::from_json(r#"{ "cell_size": [32.0, -1.0] }"#).unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn test_rejects_non_finite() {
        // 1e39 overflows f32 and parses as infinity
        let err = GameConfig::from_json(r#"{ "move_duration": 1e39 }"#).unwrap_err();
        assert!(matches!(
            err,
            crate::Error::Config(ConfigError::InvalidValue {
                field: "move_duration",
                ..
            })
        ));

        for json in [
            r#"{ "contact_radius": 1e39 }"#,
            r#"{ "cell_size": [32.0, 1e39] }"#,
            r#"{ "star_bounce_range": 1e39 }"#,
            r#"{ "center": [-1e39, 300.0] }"#,
            r#"{ "star_velocity": [1e39, 0.0] }"#,
            r#"{ "world_bounds": { "min": [0.0, 0.0], "max": [1e39, 600.0] } }"#,
        ] {
            let err = GameConfig::from_json(json).unwrap_err();
            assert!(matches!(err, crate::Error::Config(_)), "{json} was accepted");
        }

        let mut config = GameConfig::default();
        config.move_duration = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bounds_contains_edges() {
        let bounds = WorldBounds::default();
        assert_eq!(bounds.min, Vec2::new(16.0, 16.0));
        assert_eq!(bounds.max, Vec2::new(784.0, 584.0));
        assert!(bounds.contains(Vec2::new(16.0, 16.0)));
        assert!(bounds.contains(Vec2::new(784.0, 584.0)));
        assert!(!bounds.contains(Vec2::new(15.5, 100.0)));
        assert!(!bounds.contains(Vec2::new(100.0, 584.5)));
    }

    #[test]
    fn test_bounds_distance() {
        let bounds = WorldBounds::default();
        assert_eq!(bounds.distance_to(Vec2::new(400.0, 300.0)), 0.0);
        assert_eq!(bounds.distance_to(Vec2::new(-16.0, 300.0)), 32.0);
    }

    #[test]
    fn test_load_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{ "initial_lives": 7, "contact_radius": 12.0 }"#)
            .unwrap();

        let config = GameConfig::load(file.path()).unwrap();
        assert_eq!(config.initial_lives, 7);
        assert_eq!(config.contact_radius, 12.0);
        assert_eq!(config.cell_size, Vec2::splat(CELL_SIZE));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = GameConfig::load(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
    }
}
