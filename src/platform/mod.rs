//! Platform abstraction layer
//!
//! What the frame loop needs from a window/input backend:
//! - Frame clock
//! - Held movement keys and the fire button edge
//! - Pointer position and screen size
//! - Close request

pub mod headless;

pub use headless::{HeadlessPlatform, ScriptedFrame};

use glam::Vec2;

use crate::consts::MAX_FRAME_DT;
use crate::sim::TickInput;

/// Movement keys (W/A/S/D)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Left,
    Down,
    Right,
}

/// Window, clock and input provider
pub trait Platform {
    /// Seconds elapsed since the previous frame. Called once per frame,
    /// before any input is read.
    fn frame_time(&mut self) -> f32;
    /// Key currently held
    fn is_key_down(&self, key: Key) -> bool;
    /// Fire button went down this frame
    fn fire_pressed(&self) -> bool;
    /// Pointer position in screen pixels
    fn pointer(&self) -> Vec2;
    fn screen_size(&self) -> Vec2;
    /// Window close / quit requested
    fn should_close(&self) -> bool;
    /// Let the autopilot play
    fn idle_mode(&self) -> bool {
        false
    }
}

/// Clamp a raw frame time into something the simulation can step with
#[inline]
pub fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt > 0.0 {
        dt.min(MAX_FRAME_DT)
    } else {
        0.0
    }
}

/// Read one frame's worth of input
pub fn sample_input<P: Platform + ?Sized>(platform: &mut P) -> (f32, TickInput) {
    let dt = sanitize_dt(platform.frame_time());
    let input = TickInput {
        up: platform.is_key_down(Key::Up),
        left: platform.is_key_down(Key::Left),
        down: platform.is_key_down(Key::Down),
        right: platform.is_key_down(Key::Right),
        fire: platform.fire_pressed(),
        pointer: platform.pointer(),
        screen: platform.screen_size(),
        idle_mode: platform.idle_mode(),
    };
    (dt, input)
}
