//! Per-frame draw list
//!
//! The simulation never draws. Each frame the frame loop turns the current
//! [`GameState`] into a [`DrawList`] that a presentation backend replays.

use glam::Vec2;

use crate::consts::TEXT_SIZE;
use crate::sim::{Circle, GameState, Tail};
use crate::tuning::Color;

/// Where the FPS counter sits
pub const FPS_POS: Vec2 = Vec2::new(10.0, 10.0);
/// Health label offset from the player's center
const HEALTH_TEXT_OFFSET: Vec2 = Vec2::new(5.0, 5.0);
const HUD_TOP: f32 = 20.0;

/// One draw call for the presentation layer
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Fps { pos: Vec2, fps: u32 },
    Circle { center: Vec2, radius: f32, color: Color },
    Tail { tail: Tail, color: Color },
    Text { text: String, pos: Vec2, size: f32, color: Color },
}

/// Ordered draw calls for one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    /// Screen size the commands are laid out for
    pub screen: Vec2,
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    fn circle(&mut self, circle: &Circle) {
        if let Some(tail) = circle.tail() {
            self.push(DrawCommand::Tail {
                tail,
                color: circle.color,
            });
        }
        self.push(DrawCommand::Circle {
            center: circle.origin,
            radius: circle.radius,
            color: circle.color,
        });
    }

    fn text(&mut self, text: String, pos: Vec2) {
        self.push(DrawCommand::Text {
            text,
            pos,
            size: TEXT_SIZE,
            color: Color::WHITE,
        });
    }

    /// Texts in draw order (HUD checks, log output)
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

/// Everything visible this frame: background, FPS, player with its health,
/// bullets, enemies, then the score line
pub fn build_draw_list(state: &GameState, fps: u32) -> DrawList {
    let mut list = DrawList {
        screen: state.screen,
        commands: Vec::new(),
    };
    list.push(DrawCommand::Clear(state.tuning.background));
    list.push(DrawCommand::Fps { pos: FPS_POS, fps });

    list.circle(&state.player);
    list.text(
        state.player.health.to_string(),
        state.player.origin - HEALTH_TEXT_OFFSET,
    );

    for bullet in &state.bullets {
        list.circle(bullet);
    }
    for enemy in &state.enemies {
        list.circle(enemy);
    }

    let width = state.screen.x;
    list.text(
        format!("SCORE: {}", state.score),
        Vec2::new(width / 2.0 - 15.0, HUD_TOP),
    );
    list.text(
        format!("HIGH SCORE: {}", state.high_score),
        Vec2::new(width - 200.0, HUD_TOP),
    );

    list
}
