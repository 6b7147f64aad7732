//! Per-frame simulation step
//!
//! Advances the arena by one frame of `dt` seconds in a fixed order:
//! spawn, player, bullets, enemies.

use glam::Vec2;

use super::collision::move_and_collide_enemies;
use super::state::{Circle, GameEvent, GameState};
use crate::consts::{FPS, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::{normalize, subtract};

/// Enemies closer than this make the autopilot back off
const AUTOPILOT_DANGER_RADIUS: f32 = 180.0;
/// Autopilot ignores center drift smaller than this
const AUTOPILOT_CENTER_SLACK: f32 = 20.0;
/// Autopilot shots per second
const AUTOPILOT_SHOTS_PER_SEC: u32 = 10;

/// Input sampled for a single frame
#[derive(Debug, Clone, PartialEq)]
pub struct TickInput {
    /// Movement keys held this frame (W/A/S/D)
    pub up: bool,
    pub left: bool,
    pub down: bool,
    pub right: bool,
    /// Fire button went down this frame (edge, not level)
    pub fire: bool,
    /// Pointer position in screen coordinates
    pub pointer: Vec2,
    /// Current screen size
    pub screen: Vec2,
    /// Idle/demo mode - autopilot plays the game
    pub idle_mode: bool,
}

impl Default for TickInput {
    fn default() -> Self {
        Self {
            up: false,
            left: false,
            down: false,
            right: false,
            fire: false,
            pointer: Vec2::ZERO,
            screen: Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            idle_mode: false,
        }
    }
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    let input = if input.idle_mode {
        autopilot(state, input)
    } else {
        input.clone()
    };

    state.screen = input.screen;
    state.time_ticks += 1;

    // Spawn uses the player's position from before this frame's move
    if let Some(pos) = state
        .spawner
        .update(dt, state.player.origin, &mut state.rng)
    {
        let enemy = Circle::enemy(&state.tuning, pos);
        state.enemies.push(enemy);
        state.events.push(GameEvent::EnemySpawned { pos });
        log::debug!(
            "Enemy spawned at ({:.0}, {:.0}), next in {:.1}s",
            pos.x,
            pos.y,
            state.spawner.rate
        );
    }

    move_player(&mut state.player, &input, dt, state.screen);

    if input.fire {
        fire(state, input.pointer);
    }
    update_bullets(state, dt);

    let report = move_and_collide_enemies(state, dt);
    if report.player_died {
        log::info!(
            "Player died with score {} (high score {})",
            state.score,
            state.high_score
        );
        state.reset_player();
        state.score = 0;
        state.spawner.reset_rate();
    }
}

/// Apply held movement keys, then keep the player on screen.
///
/// Each key sets its axis of the direction (opposing keys: last one wins)
/// and displaces the player independently, so diagonals are faster.
pub fn move_player(player: &mut Circle, input: &TickInput, dt: f32, screen: Vec2) {
    let step = player.velocity * dt;
    player.direction = Vec2::ZERO;

    if input.up {
        player.direction.y = -1.0;
        player.origin.y -= step;
    }
    if input.left {
        player.direction.x = -1.0;
        player.origin.x -= step;
    }
    if input.down {
        player.direction.y = 1.0;
        player.origin.y += step;
    }
    if input.right {
        player.direction.x = 1.0;
        player.origin.x += step;
    }

    player.clamp_to(screen);
}

/// Fire a bullet from the player's rim toward `pointer`
fn fire(state: &mut GameState, pointer: Vec2) {
    let dir = normalize(subtract(state.player.origin, pointer));
    if dir == Vec2::ZERO {
        // Pointer on the player's center: no aim, no shot
        return;
    }

    let bullet = Circle::bullet(&state.tuning, &state.player, dir);
    state.events.push(GameEvent::BulletFired {
        pos: bullet.origin,
        dir,
    });
    state.bullets.push(bullet);
}

/// Move bullets and drop the ones whose center left the screen
pub fn update_bullets(state: &mut GameState, dt: f32) {
    let screen = state.screen;
    for bullet in &mut state.bullets {
        bullet.advance(dt);
    }
    state.bullets.retain(|b| !b.is_off_screen(screen));
}

/// Build the frame's input from the arena: back away from the nearest enemy
/// (or drift to the center when nothing is close), aim at it, fire at a
/// fixed cadence.
fn autopilot(state: &GameState, input: &TickInput) -> TickInput {
    let mut out = TickInput {
        screen: input.screen,
        pointer: input.pointer,
        idle_mode: true,
        ..Default::default()
    };

    let player = state.player.origin;
    let nearest = state.enemies.iter().min_by(|a, b| {
        a.origin
            .distance_squared(player)
            .partial_cmp(&b.origin.distance_squared(player))
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let goal = match nearest {
        Some(enemy) if enemy.origin.distance(player) < AUTOPILOT_DANGER_RADIUS => {
            player - enemy.origin
        }
        _ => {
            let to_center = input.screen / 2.0 - player;
            if to_center.length() > AUTOPILOT_CENTER_SLACK {
                to_center
            } else {
                Vec2::ZERO
            }
        }
    };

    out.left = goal.x < -1.0;
    out.right = goal.x > 1.0;
    out.up = goal.y < -1.0;
    out.down = goal.y > 1.0;

    if let Some(enemy) = nearest {
        out.pointer = enemy.origin;
        let cadence = u64::from((FPS / AUTOPILOT_SHOTS_PER_SEC).max(1));
        out.fire = state.time_ticks % cadence == 0;
    }

    out
}
