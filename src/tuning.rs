//! Data-driven game balance
//!
//! All per-role constants (radius, speed, color) and spawn pacing live in a
//! single immutable [`Tuning`] handed to the simulation at construction.
//! The defaults reproduce the shipped game; JSON files may override any
//! subset of fields.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Normalized [r, g, b, a] for GPU vertex colors
    pub fn to_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}

/// Fixed parameters of one circle role
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoleTuning {
    pub radius: f32,
    /// Speed in pixels/second
    pub velocity: f32,
    pub color: Color,
}

/// Enemy spawn pacing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnTuning {
    /// Seconds between spawns at the start of a run
    pub initial_rate: f32,
    /// Floor for the spawn interval
    pub min_rate: f32,
    /// Interval reduction applied after every spawn
    pub rate_step: f32,
    /// Minimum per-axis offset from the player
    pub offset_min: u32,
    /// Offsets are drawn from `offset_min..offset_min + offset_span`
    pub offset_span: u32,
}

impl Default for SpawnTuning {
    fn default() -> Self {
        Self {
            initial_rate: 5.0,
            min_rate: 0.5,
            rate_step: 0.5,
            offset_min: 100,
            offset_span: 100,
        }
    }
}

/// Complete balance configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub player: RoleTuning,
    pub enemy: RoleTuning,
    pub bullet: RoleTuning,
    /// Lives the player starts (and respawns) with
    pub player_health: u32,
    /// Where the player appears at the very start of a run
    pub player_start: Vec2,
    /// One extra life every N points
    pub health_bonus_every: u32,
    pub spawn: SpawnTuning,
    pub background: Color,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player: RoleTuning {
                radius: 30.0,
                velocity: 200.0,
                color: Color::RED,
            },
            enemy: RoleTuning {
                radius: 20.0,
                velocity: 20.0,
                color: Color::WHITE,
            },
            bullet: RoleTuning {
                radius: 10.0,
                velocity: 200.0,
                color: Color::RED,
            },
            player_health: 5,
            player_start: Vec2::new(400.0, 300.0),
            health_bonus_every: 10,
            spawn: SpawnTuning::default(),
            background: Color::rgb(30, 30, 30),
        }
    }
}

/// Failure to load a tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl TuningError {
    fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        TuningError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read, parse and validate a tuning file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.as_ref().display());
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        for (field, role) in [
            ("player", &self.player),
            ("enemy", &self.enemy),
            ("bullet", &self.bullet),
        ] {
            if !(role.radius.is_finite() && role.radius > 0.0) {
                return Err(TuningError::invalid(field, "radius must be positive"));
            }
            if !(role.velocity.is_finite() && role.velocity > 0.0) {
                return Err(TuningError::invalid(field, "velocity must be positive"));
            }
        }

        if self.player_health == 0 {
            return Err(TuningError::invalid("player_health", "must be at least 1"));
        }
        if !self.player_start.is_finite() {
            return Err(TuningError::invalid("player_start", "must be finite"));
        }
        if self.health_bonus_every == 0 {
            return Err(TuningError::invalid("health_bonus_every", "must be at least 1"));
        }

        let spawn = &self.spawn;
        if !(spawn.min_rate.is_finite() && spawn.min_rate > 0.0) {
            return Err(TuningError::invalid("spawn.min_rate", "must be positive"));
        }
        if !spawn.initial_rate.is_finite() || spawn.initial_rate < spawn.min_rate {
            return Err(TuningError::invalid(
                "spawn.initial_rate",
                format!("must be at least min_rate ({})", spawn.min_rate),
            ));
        }
        if !(spawn.rate_step.is_finite() && spawn.rate_step >= 0.0) {
            return Err(TuningError::invalid("spawn.rate_step", "must not be negative"));
        }
        if spawn.offset_span == 0 {
            return Err(TuningError::invalid("spawn.offset_span", "must be at least 1"));
        }
        if spawn.offset_min.checked_add(spawn.offset_span).is_none() {
            return Err(TuningError::invalid(
                "spawn.offset_min",
                "offset_min + offset_span must fit in u32",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.player.radius, 30.0);
        assert_eq!(tuning.enemy.radius, 20.0);
        assert_eq!(tuning.bullet.radius, 10.0);
        assert_eq!(tuning.player_health, 5);
        assert_eq!(tuning.spawn.initial_rate, 5.0);
    }

    #[test]
    fn test_partial_json_overrides_only_named_fields() {
        let tuning =
            Tuning::from_json(r#"{ "player_health": 3, "spawn": { "min_rate": 1.0 } }"#).unwrap();
        assert_eq!(tuning.player_health, 3);
        assert_eq!(tuning.spawn.min_rate, 1.0);
        assert_eq!(tuning.spawn.initial_rate, 5.0);
        assert_eq!(tuning.enemy, Tuning::default().enemy);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = Tuning::from_json("{ not json").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
    }

    #[test]
    fn test_rejects_floor_above_initial_rate() {
        let err = Tuning::from_json(r#"{ "spawn": { "initial_rate": 0.25 } }"#).unwrap_err();
        match err {
            TuningError::Invalid { field, .. } => assert_eq!(field, "spawn.initial_rate"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rejects_non_positive_radius() {
        let mut tuning = Tuning::default();
        tuning.bullet.radius = 0.0;
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::Invalid { field: "bullet", .. })
        ));
    }

    #[test]
    fn test_rejects_spawn_offset_overflow() {
        let json = format!(r#"{{ "spawn": {{ "offset_min": {} }} }}"#, u32::MAX);
        let err = Tuning::from_json(&json).unwrap_err();
        assert!(matches!(
            err,
            TuningError::Invalid {
                field: "spawn.offset_min",
                ..
            }
        ));

        let mut tuning = Tuning::default();
        tuning.spawn.offset_min = u32::MAX - tuning.spawn.offset_span;
        assert!(tuning.validate().is_ok());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Tuning::load("/nonexistent/shboot-tuning.json").unwrap_err();
        assert!(matches!(err, TuningError::Io(_)));
    }

    #[test]
    fn test_color_to_f32() {
        assert_eq!(Color::RED.to_f32(), [1.0, 0.0, 0.0, 1.0]);
    }
}
