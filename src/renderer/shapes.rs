//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;
use crate::sim::{Bounds, Rgb};

/// Fewest segments used for any circle
pub const MIN_SEGMENTS: u32 = 16;
/// Most segments used for any circle
pub const MAX_SEGMENTS: u32 = 96;

/// Segment count giving roughly 4px edges
pub fn segments_for(radius: f32) -> u32 {
    let circumference = 2.0 * PI * radius.max(0.0);
    ((circumference / 4.0) as u32).clamp(MIN_SEGMENTS, MAX_SEGMENTS)
}

/// Convert screen pixels (origin top-left, y down) to normalized device coordinates
#[inline]
pub fn screen_to_ndc(pos: Vec2, bounds: Bounds) -> Vec2 {
    Vec2::new(
        pos.x / bounds.width * 2.0 - 1.0,
        1.0 - pos.y / bounds.height * 2.0,
    )
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: Rgb, segments: u32) -> Vec<Vertex> {
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
