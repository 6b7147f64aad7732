//! Shboot - A top-down arena shooter
//!
//! Core modules:
//! - `sim`: Simulation (motion, spawning, collisions, score/health state)
//! - `renderer`: Draw list and triangle tessellation for a GPU backend
//! - `platform`: Input/clock abstraction the frame loop reads from
//! - `tuning`: Data-driven game balance
//! - `game`: Frame loop tying platform, simulation and presentation together

pub mod game;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use game::{Game, LogPresenter, Presenter, run};
pub use tuning::{Color, RoleTuning, SpawnTuning, Tuning, TuningError};

use glam::Vec2;

/// Window and frame-loop constants
pub mod consts {
    /// Target frame rate the presentation layer paces to
    pub const FPS: u32 = 360;
    /// Initial window size
    pub const SCREEN_WIDTH: f32 = 1080.0;
    pub const SCREEN_HEIGHT: f32 = 720.0;
    pub const WINDOW_TITLE: &str = "Shboot";

    /// Largest dt handed to the simulation (a stall must not teleport entities)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// HUD font size in pixels
    pub const TEXT_SIZE: f32 = 20.0;
}

/// Vector from `a` to `b` (note: `b - a`, source-to-target)
#[inline]
pub fn subtract(a: Vec2, b: Vec2) -> Vec2 {
    b - a
}

/// Unit vector in the direction of `v`, or zero if `v` has no usable length
#[inline]
pub fn normalize(v: Vec2) -> Vec2 {
    let length = v.length();
    if length != 0.0 && length.is_finite() {
        v / length
    } else {
        Vec2::ZERO
    }
}

/// Componentwise negation
#[inline]
pub fn inverse(v: Vec2) -> Vec2 {
    -v
}

/// Euclidean distance between two points
#[inline]
pub fn magnitude(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Signed angle from `a` to `b` in degrees, negated and wrapped into [0, 360)
pub fn angle(a: Vec2, b: Vec2) -> f32 {
    let dot = a.dot(b);
    let cross = a.perp_dot(b);

    let mut radians = -cross.atan2(dot);
    if radians < 0.0 {
        radians += std::f32::consts::TAU;
    }

    let degrees = radians.to_degrees();
    // TAU - epsilon can round up to exactly 360
    if degrees >= 360.0 { degrees - 360.0 } else { degrees }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_subtract_points_from_a_to_b() {
        let v = subtract(Vec2::new(1.0, 2.0), Vec2::new(4.0, 6.0));
        assert_eq!(v, Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_normalize_zero_is_zero() {
        assert_eq!(normalize(Vec2::ZERO), Vec2::ZERO);
    }

    #[test]
    fn test_normalize_non_finite_is_zero() {
        assert_eq!(normalize(Vec2::new(f32::NAN, 1.0)), Vec2::ZERO);
        assert_eq!(normalize(Vec2::new(f32::INFINITY, 0.0)), Vec2::ZERO);
    }

    #[test]
    fn test_inverse_and_magnitude() {
        assert_eq!(inverse(Vec2::new(1.0, -2.0)), Vec2::new(-1.0, 2.0));
        assert!((magnitude(Vec2::ZERO, Vec2::new(3.0, 4.0)) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_angle_quadrants() {
        // b is 90° counter-clockwise of a in math orientation; negated -> 270
        let deg = angle(Vec2::X, Vec2::Y);
        assert!((deg - 270.0).abs() < 1e-3);

        let deg = angle(Vec2::Y, Vec2::X);
        assert!((deg - 90.0).abs() < 1e-3);

        let deg = angle(Vec2::X, Vec2::X);
        assert!(deg.abs() < 1e-3);

        let deg = angle(Vec2::X, -Vec2::X);
        assert!((deg - 180.0).abs() < 1e-3);
    }

    proptest! {
        #[test]
        fn prop_normalize_is_unit(x in -1.0e4f32..1.0e4, y in -1.0e4f32..1.0e4) {
            prop_assume!(x.abs() > 1e-3 || y.abs() > 1e-3);
            let n = normalize(Vec2::new(x, y));
            prop_assert!((n.length() - 1.0).abs() < 1e-4);
        }

        #[test]
        fn prop_angle_in_range(
            ax in -100.0f32..100.0, ay in -100.0f32..100.0,
            bx in -100.0f32..100.0, by in -100.0f32..100.0,
        ) {
            let deg = angle(Vec2::new(ax, ay), Vec2::new(bx, by));
            prop_assert!((0.0..360.0).contains(&deg));
        }
    }
}
