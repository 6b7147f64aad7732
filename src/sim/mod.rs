//! Arena simulation module
//!
//! All gameplay logic lives here. This module must stay deterministic for a
//! given seed and input sequence:
//! - Seeded RNG only
//! - Stable iteration order (spawn/fire order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{CollisionReport, move_and_collide_enemies};
pub use spawn::Spawner;
pub use state::{Circle, GameEvent, GameState, Rect, Role, Tail};
pub use tick::{TickInput, move_player, tick, update_bullets};
