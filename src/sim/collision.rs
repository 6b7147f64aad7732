//! Enemy motion and collision resolution
//!
//! Enemies are processed in spawn order. For each one: step toward the
//! player, then test against the player, then against the bullets. A hit on
//! the player wins over a bullet hit in the same frame. Removals are only
//! marked during the pass and compacted at the end, so a removal never
//! shifts the entity that is checked next.

use super::state::{Circle, GameEvent, GameState};

/// Outcome of one enemy pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollisionReport {
    /// Enemies that reached the player
    pub player_hits: u32,
    /// Enemies destroyed by bullets
    pub kills: u32,
    /// Player health ran out; the pass stopped early
    pub player_died: bool,
}

/// Move every enemy toward the player and resolve its collisions.
///
/// Scores and bonus lives are applied here. On death the pass stops and
/// reports `player_died`; resetting the run is up to the caller.
pub fn move_and_collide_enemies(state: &mut GameState, dt: f32) -> CollisionReport {
    let mut report = CollisionReport::default();
    let mut enemy_dead = vec![false; state.enemies.len()];
    let mut bullet_dead = vec![false; state.bullets.len()];

    for i in 0..state.enemies.len() {
        let target = state.player.origin;
        state.enemies[i].seek(target, dt);

        if state.player.overlaps(&state.enemies[i]) {
            enemy_dead[i] = true;
            report.player_hits += 1;
            state.player.health = state.player.health.saturating_sub(1);
            state.events.push(GameEvent::PlayerHit {
                health: state.player.health,
            });
            log::debug!("Player hit, health {}", state.player.health);

            if state.player.health == 0 {
                report.player_died = true;
                break;
            }
            continue;
        }

        let enemy = &state.enemies[i];
        let hit = state
            .bullets
            .iter()
            .enumerate()
            .find(|(bi, bullet)| !bullet_dead[*bi] && enemy.overlaps(bullet))
            .map(|(bi, _)| bi);

        if let Some(bi) = hit {
            bullet_dead[bi] = true;
            enemy_dead[i] = true;
            report.kills += 1;
            let pos = enemy.origin;
            state.events.push(GameEvent::EnemyDestroyed { pos });
            log::debug!("Enemy destroyed at ({:.0}, {:.0})", pos.x, pos.y);
            state.award_point();
        }
    }

    compact(&mut state.enemies, &enemy_dead);
    compact(&mut state.bullets, &bullet_dead);

    report
}

/// Drop the marked entries, keeping the survivors in order
fn compact(items: &mut Vec<Circle>, dead: &[bool]) {
    let mut idx = 0;
    items.retain(|_| {
        let keep = !dead.get(idx).copied().unwrap_or(false);
        idx += 1;
        keep
    });
}
