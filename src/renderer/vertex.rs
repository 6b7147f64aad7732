//! GPU-ready vertex data
//!
//! [`VertexUpload`] is what a GPU backend needs each frame: the triangle
//! list in clip space, its raw bytes and the buffer layout to bind them with.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use super::draw::DrawList;
use super::shapes::{screen_to_ndc, tessellate};

/// Colored 2D vertex
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

/// Shader locations: 0 = position, 1 = color
const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];

impl Vertex {
    pub const fn at(pos: Vec2, color: [f32; 4]) -> Self {
        Self {
            position: [pos.x, pos.y],
            color,
        }
    }

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &ATTRIBUTES,
        }
    }
}

/// One frame's vertex buffer contents
#[derive(Debug, Clone)]
pub struct VertexUpload {
    pub layout: wgpu::VertexBufferLayout<'static>,
    pub bytes: Vec<u8>,
    pub vertex_count: u32,
}

impl VertexUpload {
    /// Tessellate `list` and map it from screen pixels to clip space.
    /// A degenerate screen yields an empty upload.
    pub fn from_draw_list(list: &DrawList) -> Self {
        let screen = list.screen;
        let vertices: Vec<Vertex> = if screen.x > 0.0 && screen.y > 0.0 {
            tessellate(list)
                .into_iter()
                .map(|v| Vertex::at(screen_to_ndc(Vec2::from(v.position), screen), v.color))
                .collect()
        } else {
            Vec::new()
        };

        Self {
            layout: Vertex::layout(),
            bytes: bytemuck::cast_slice(&vertices).to_vec(),
            vertex_count: vertices.len() as u32,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::DrawCommand;
    use crate::tuning::Color;

    fn one_circle(screen: Vec2) -> DrawList {
        let mut list = DrawList {
            screen,
            ..Default::default()
        };
        list.push(DrawCommand::Circle {
            center: screen / 2.0,
            radius: 10.0,
            color: Color::RED,
        });
        list
    }

    #[test]
    fn test_layout_matches_struct() {
        let layout = Vertex::layout();
        assert_eq!(layout.array_stride, 24);
        assert_eq!(layout.attributes.len(), 2);
        assert_eq!(layout.attributes[1].offset, 8);
        assert_eq!(layout.attributes[1].shader_location, 1);
    }

    #[test]
    fn test_upload_bytes_follow_layout() {
        let upload = VertexUpload::from_draw_list(&one_circle(Vec2::new(1080.0, 720.0)));

        assert!(!upload.is_empty());
        assert_eq!(
            upload.bytes.len() as u64,
            u64::from(upload.vertex_count) * upload.layout.array_stride
        );
        // First vertex is the circle center: screen middle is clip-space origin
        let first: Vertex = bytemuck::pod_read_unaligned(&upload.bytes[..24]);
        assert_eq!(first.position, [0.0, 0.0]);
        assert_eq!(first.color, [1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_zero_screen_uploads_nothing() {
        let upload = VertexUpload::from_draw_list(&one_circle(Vec2::ZERO));
        assert!(upload.is_empty());
        assert!(upload.bytes.is_empty());
    }
}
