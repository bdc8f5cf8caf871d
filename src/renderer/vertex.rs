//! Vertex type for the circle pipeline

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use super::shapes::screen_to_ndc;
use crate::sim::{Bounds, Rgb};

/// 2D vertex with position and flat color
///
/// Shapes are built in screen pixels and moved to NDC with `to_ndc` right
/// before they join the frame batch.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Vertex at a screen-pixel position with an actor color
    pub fn at(pos: Vec2, color: Rgb) -> Self {
        Self::new(pos.x, pos.y, color.to_f32())
    }

    /// Same vertex with its position mapped from screen pixels to NDC
    pub fn to_ndc(self, bounds: Bounds) -> Self {
        let p = screen_to_ndc(Vec2::from(self.position), bounds);
        Self::new(p.x, p.y, self.color)
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
            wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];

        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &ATTRIBUTES,
        }
    }
}
