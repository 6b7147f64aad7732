//! Game state and core simulation types
//!
//! Player, enemies and bullets share one [`Circle`] record, told apart by
//! [`Role`]. Everything the frame loop mutates lives in [`GameState`].

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::spawn::Spawner;
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::tuning::{Color, RoleTuning, Tuning};
use crate::{angle, inverse, normalize, subtract};

/// What a circle is in the arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Player,
    Enemy,
    Bullet,
}

/// Axis-aligned rectangle in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Motion-trail rectangle, rotated about its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tail {
    pub rect: Rect,
    /// Rotation in degrees, [0, 360)
    pub rotation: f32,
}

/// A circle entity: the player, an enemy, or a bullet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub role: Role,
    pub origin: Vec2,
    /// Stored heading; not renormalized on use, zero when idle
    pub direction: Vec2,
    pub radius: f32,
    /// Speed in pixels/second
    pub velocity: f32,
    /// Lives left (player only)
    pub health: u32,
    pub color: Color,
}

impl Circle {
    fn from_role(role: Role, params: &RoleTuning, origin: Vec2) -> Self {
        Self {
            role,
            origin,
            direction: Vec2::ZERO,
            radius: params.radius,
            velocity: params.velocity,
            health: 0,
            color: params.color,
        }
    }

    pub fn player(tuning: &Tuning, origin: Vec2) -> Self {
        let mut player = Self::from_role(Role::Player, &tuning.player, origin);
        player.health = tuning.player_health;
        player
    }

    pub fn enemy(tuning: &Tuning, origin: Vec2) -> Self {
        Self::from_role(Role::Enemy, &tuning.enemy, origin)
    }

    /// Bullet leaving the player's rim (not its center) along `direction`
    pub fn bullet(tuning: &Tuning, player: &Circle, direction: Vec2) -> Self {
        let origin = player.origin + direction * player.radius;
        let mut bullet = Self::from_role(Role::Bullet, &tuning.bullet, origin);
        bullet.direction = direction;
        bullet
    }

    /// Strict circle-circle overlap
    #[inline]
    pub fn overlaps(&self, other: &Circle) -> bool {
        crate::magnitude(self.origin, other.origin) < self.radius + other.radius
    }

    /// Move one step toward `target`. The stored direction points from the
    /// target to this circle, so the step is taken against it.
    pub fn seek(&mut self, target: Vec2, dt: f32) {
        self.direction = normalize(subtract(target, self.origin));
        self.origin -= self.direction * self.velocity * dt;
    }

    /// Straight-line motion along the stored direction
    pub fn advance(&mut self, dt: f32) {
        self.origin += self.direction * self.velocity * dt;
    }

    /// Keep the whole circle inside `[0, screen.x] x [0, screen.y]`
    pub fn clamp_to(&mut self, screen: Vec2) {
        // max-then-min: clamp() panics when the window is narrower than the circle
        self.origin.x = self.origin.x.max(self.radius).min(screen.x - self.radius);
        self.origin.y = self.origin.y.max(self.radius).min(screen.y - self.radius);
    }

    /// True once the center has left `(0, screen]` on either axis
    pub fn is_off_screen(&self, screen: Vec2) -> bool {
        self.origin.x > screen.x
            || self.origin.x <= 0.0
            || self.origin.y > screen.y
            || self.origin.y <= 0.0
    }

    /// Direction the trail extends toward (behind the motion)
    pub fn heading(&self) -> Vec2 {
        match self.role {
            Role::Player => inverse(self.direction),
            Role::Enemy => self.direction,
            Role::Bullet => Vec2::ZERO,
        }
    }

    /// Trail rectangle for this frame, if the circle is moving
    pub fn tail(&self) -> Option<Tail> {
        let heading = self.heading();
        if heading == Vec2::ZERO {
            return None;
        }

        let rect = Rect {
            x: self.origin.x,
            y: self.origin.y,
            width: self.radius,
            height: self.radius,
        };
        let corner = Vec2::new(rect.x + rect.width, rect.y + rect.height);

        Some(Tail {
            rect,
            rotation: angle(heading, corner),
        })
    }
}

/// Something that happened during a tick, for logging and HUD effects
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    EnemySpawned { pos: Vec2 },
    BulletFired { pos: Vec2, dir: Vec2 },
    PlayerHit { health: u32 },
    EnemyDestroyed { pos: Vec2 },
    HealthAwarded { health: u32 },
    NewHighScore { score: u32 },
    Reset,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    /// Spawn placement RNG
    pub rng: Pcg32,
    /// Current screen size (the window may be resized)
    pub screen: Vec2,
    /// The one and only player; respawned in place, never removed
    pub player: Circle,
    /// Live enemies, in spawn order
    pub enemies: Vec<Circle>,
    /// Live bullets, in fire order
    pub bullets: Vec<Circle>,
    pub spawner: Spawner,
    pub score: u32,
    pub high_score: u32,
    /// Frame counter
    pub time_ticks: u64,
    /// Events raised since the last drain
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game state with the given tuning and seed
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        Self::with_rng(tuning, seed, Pcg32::seed_from_u64(seed))
    }

    /// Create a state driven by a caller-supplied generator
    pub fn with_rng(tuning: Tuning, seed: u64, rng: Pcg32) -> Self {
        Self {
            seed,
            player: Circle::player(&tuning, tuning.player_start),
            spawner: Spawner::new(tuning.spawn),
            tuning,
            rng,
            screen: Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            enemies: Vec::new(),
            bullets: Vec::new(),
            score: 0,
            high_score: 0,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    /// Respawn the player at screen center with full health and clear the
    /// arena of enemies. Score and spawn pacing are the caller's to reset.
    pub fn reset_player(&mut self) {
        self.player.health = self.tuning.player_health;
        self.player.origin = self.screen / 2.0;
        self.player.color = self.tuning.player.color;
        self.enemies.clear();
        self.events.push(GameEvent::Reset);
    }

    /// Credit one kill: score, bonus life, high score
    pub fn award_point(&mut self) {
        self.score += 1;

        if self.score % self.tuning.health_bonus_every == 0 {
            self.player.health += 1;
            self.events.push(GameEvent::HealthAwarded {
                health: self.player.health,
            });
        }

        if self.score > self.high_score {
            self.high_score = self.score;
            self.events.push(GameEvent::NewHighScore {
                score: self.high_score,
            });
        }
    }

    /// Take the events raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
