//! Enemy spawn pacing and placement

use glam::Vec2;
use rand::Rng;

use crate::tuning::SpawnTuning;

/// Decaying-cooldown enemy spawner
///
/// Every spawn shortens the interval by `rate_step` until it reaches
/// `min_rate`, after which spawns arrive at a steady pace.
#[derive(Debug, Clone, PartialEq)]
pub struct Spawner {
    /// Interval the cooldown is reset to after a spawn (seconds)
    pub rate: f32,
    /// Seconds until the next spawn
    pub cooldown: f32,
    tuning: SpawnTuning,
}

impl Spawner {
    pub fn new(tuning: SpawnTuning) -> Self {
        Self {
            rate: tuning.initial_rate,
            cooldown: tuning.initial_rate,
            tuning,
        }
    }

    /// Count down by `dt`; when the cooldown runs out, return where the next
    /// enemy appears relative to `player` and tighten the interval.
    pub fn update<R: Rng + ?Sized>(&mut self, dt: f32, player: Vec2, rng: &mut R) -> Option<Vec2> {
        self.cooldown -= dt;
        if self.cooldown > 0.0 {
            return None;
        }

        let pos = self.spawn_point(player, rng);
        self.rate = (self.rate - self.tuning.rate_step).max(self.tuning.min_rate);
        self.cooldown = self.rate;
        Some(pos)
    }

    /// Put the interval back to its starting value. The running cooldown is
    /// left alone.
    pub fn reset_rate(&mut self) {
        self.rate = self.tuning.initial_rate;
    }

    /// Point offset from `player` by `offset_min..offset_min + offset_span`
    /// on each axis, in one of the four diagonal quadrants.
    pub fn spawn_point<R: Rng + ?Sized>(&self, player: Vec2, rng: &mut R) -> Vec2 {
        let min = self.tuning.offset_min;
        let span = self.tuning.offset_span;
        let dx = (min + rng.random_range(0..span)) as f32;
        let dy = (min + rng.random_range(0..span)) as f32;

        match rng.random_range(0..4u8) {
            0 => Vec2::new(player.x - dx, player.y - dy),
            1 => Vec2::new(player.x - dx, player.y + dy),
            2 => Vec2::new(player.x + dx, player.y - dy),
            _ => Vec2::new(player.x + dx, player.y + dy),
        }
    }
}
