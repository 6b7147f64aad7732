//! Windowless platform with a fixed clock and scripted input

use std::collections::VecDeque;

use glam::Vec2;

use super::{Key, Platform};
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Input for one scripted frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScriptedFrame {
    pub up: bool,
    pub left: bool,
    pub down: bool,
    pub right: bool,
    pub fire: bool,
    pub pointer: Vec2,
}

/// Fixed-`dt` platform that closes after a set number of frames.
///
/// Frames beyond the end of the script are idle (no keys, no fire).
#[derive(Debug, Clone)]
pub struct HeadlessPlatform {
    dt: f32,
    frame_limit: u64,
    frames: u64,
    screen: Vec2,
    idle_mode: bool,
    script: VecDeque<ScriptedFrame>,
    current: ScriptedFrame,
}

impl HeadlessPlatform {
    pub fn new(dt: f32, frame_limit: u64) -> Self {
        Self {
            dt,
            frame_limit,
            frames: 0,
            screen: Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            idle_mode: false,
            script: VecDeque::new(),
            current: ScriptedFrame::default(),
        }
    }

    pub fn with_script(mut self, frames: impl IntoIterator<Item = ScriptedFrame>) -> Self {
        self.script.extend(frames);
        self
    }

    pub fn with_screen(mut self, screen: Vec2) -> Self {
        self.screen = screen;
        self
    }

    pub fn with_idle_mode(mut self, idle: bool) -> Self {
        self.idle_mode = idle;
        self
    }
}

impl Platform for HeadlessPlatform {
    fn frame_time(&mut self) -> f32 {
        self.current = self.script.pop_front().unwrap_or_default();
        self.frames += 1;
        self.dt
    }

    fn is_key_down(&self, key: Key) -> bool {
        match key {
            Key::Up => self.current.up,
            Key::Left => self.current.left,
            Key::Down => self.current.down,
            Key::Right => self.current.right,
        }
    }

    fn fire_pressed(&self) -> bool {
        self.current.fire
    }

    fn pointer(&self) -> Vec2 {
        self.current.pointer
    }

    fn screen_size(&self) -> Vec2 {
        self.screen
    }

    fn should_close(&self) -> bool {
        self.frames >= self.frame_limit
    }

    fn idle_mode(&self) -> bool {
        self.idle_mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closes_after_limit() {
        let mut platform = HeadlessPlatform::new(0.01, 2);
        assert!(!platform.should_close());
        platform.frame_time();
        assert!(!platform.should_close());
        platform.frame_time();
        assert!(platform.should_close());
    }

    #[test]
    fn test_script_runs_out_to_idle() {
        let mut platform = HeadlessPlatform::new(0.01, 10).with_script([ScriptedFrame {
            up: true,
            ..Default::default()
        }]);
        platform.frame_time();
        assert!(platform.is_key_down(Key::Up));
        platform.frame_time();
        assert!(!platform.is_key_down(Key::Up));
    }
}
