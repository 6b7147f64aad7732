//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::draw::{DrawCommand, DrawList};
use super::vertex::Vertex;
use crate::sim::Rect;

/// Triangle-fan resolution for circles
pub const CIRCLE_SEGMENTS: u32 = 32;

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::at(center, color));
        vertices.push(Vertex::at(center + Vec2::from_angle(theta1) * radius, color));
        vertices.push(Vertex::at(center + Vec2::from_angle(theta2) * radius, color));
    }

    vertices
}

/// Generate vertices for a rectangle rotated by `degrees` about its
/// top-left corner
pub fn rotated_rect(rect: &Rect, degrees: f32, color: [f32; 4]) -> Vec<Vertex> {
    let pivot = Vec2::new(rect.x, rect.y);
    let rotation = Vec2::from_angle(degrees.to_radians());

    let corners = [
        Vec2::ZERO,
        Vec2::new(rect.width, 0.0),
        Vec2::new(rect.width, rect.height),
        Vec2::new(0.0, rect.height),
    ]
    .map(|c| pivot + rotation.rotate(c));

    // Two triangles
    [0, 1, 2, 2, 3, 0]
        .iter()
        .map(|&i| Vertex::at(corners[i], color))
        .collect()
}

/// Turn the geometric commands of a draw list into a triangle list in
/// screen coordinates. Text and the FPS counter belong to the host's text
/// renderer and are skipped.
pub fn tessellate(list: &DrawList) -> Vec<Vertex> {
    let mut vertices = Vec::new();

    for command in &list.commands {
        match command {
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => vertices.extend(circle(*center, *radius, color.to_f32(), CIRCLE_SEGMENTS)),
            DrawCommand::Tail { tail, color } => {
                vertices.extend(rotated_rect(&tail.rect, tail.rotation, color.to_f32()))
            }
            DrawCommand::Clear(_) | DrawCommand::Fps { .. } | DrawCommand::Text { .. } => {}
        }
    }

    vertices
}

/// Convert screen pixels (origin top-left, y down) to normalized device
/// coordinates (-1..1, y up)
#[inline]
pub fn screen_to_ndc(pos: Vec2, screen: Vec2) -> Vec2 {
    Vec2::new(pos.x / screen.x * 2.0 - 1.0, 1.0 - pos.y / screen.y * 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Color;

    #[test]
    fn test_circle_vertex_count() {
        let vertices = circle(Vec2::ZERO, 10.0, [1.0; 4], 16);
        assert_eq!(vertices.len(), 48);
        for v in &vertices {
            let p = Vec2::from(v.position);
            assert!(p.length() <= 10.0 + 1e-4);
        }
    }

    #[test]
    fn test_unrotated_rect_corners() {
        let rect = Rect {
            x: 10.0,
            y: 20.0,
            width: 5.0,
            height: 5.0,
        };
        let vertices = rotated_rect(&rect, 0.0, [1.0; 4]);
        assert_eq!(vertices.len(), 6);
        assert_eq!(vertices[0].position, [10.0, 20.0]);
        assert_eq!(vertices[2].position, [15.0, 25.0]);
    }

    #[test]
    fn test_quarter_turn_pivots_on_top_left() {
        let rect = Rect {
            x: 0.0,
            y: 0.0,
            width: 10.0,
            height: 10.0,
        };
        let vertices = rotated_rect(&rect, 90.0, [1.0; 4]);
        // (10, 0) swings to (0, 10) in y-down screen space
        let p = Vec2::from(vertices[1].position);
        assert!((p - Vec2::new(0.0, 10.0)).length() < 1e-4);
    }

    #[test]
    fn test_tessellate_skips_text() {
        let mut list = DrawList::default();
        list.push(DrawCommand::Clear(Color::WHITE));
        list.push(DrawCommand::Text {
            text: "SCORE: 0".into(),
            pos: Vec2::ZERO,
            size: 20.0,
            color: Color::WHITE,
        });
        list.push(DrawCommand::Circle {
            center: Vec2::ZERO,
            radius: 1.0,
            color: Color::RED,
        });
        assert_eq!(tessellate(&list).len(), (CIRCLE_SEGMENTS * 3) as usize);
    }

    #[test]
    fn test_screen_to_ndc_corners() {
        let screen = Vec2::new(1080.0, 720.0);
        assert_eq!(screen_to_ndc(Vec2::ZERO, screen), Vec2::new(-1.0, 1.0));
        assert_eq!(screen_to_ndc(screen, screen), Vec2::new(1.0, -1.0));
    }
}
