//! CPU-side frame batch
//!
//! Collects the clear color and circle geometry for one frame, already in
//! normalized device coordinates, ready for upload.

use glam::Vec2;

use super::shapes::{circle, segments_for};
use super::vertex::Vertex;
use crate::sim::{Bounds, Rgb, palette};

#[derive(Debug, Clone)]
pub struct FrameBatch {
    /// Logical screen the game draws in
    pub bounds: Bounds,
    pub clear: Rgb,
    pub vertices: Vec<Vertex>,
}

impl FrameBatch {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            clear: palette::BACKGROUND,
            vertices: Vec::new(),
        }
    }

    /// Start a new frame
    pub fn clear(&mut self, color: Rgb) {
        self.clear = color;
        self.vertices.clear();
    }

    pub fn push_circle(&mut self, center: Vec2, radius: f32, color: Rgb) {
        let segments = segments_for(radius);
        let bounds = self.bounds;
        self.vertices.extend(
            circle(center, radius, color, segments)
                .into_iter()
                .map(|v| v.to_ndc(bounds)),
        );
    }

    pub fn clear_color(&self) -> wgpu::Color {
        let [r, g, b, a] = self.clear.to_f32();
        wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: a as f64,
        }
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_circle_in_ndc() {
        let mut batch = FrameBatch::new(Bounds::new(800.0, 600.0));
        batch.push_circle(Vec2::new(400.0, 300.0), 50.0, palette::RED);

        assert_eq!(batch.vertex_count(), segments_for(50.0) * 3);
        assert_eq!(batch.vertices[0].position, [0.0, 0.0]);
        assert!(batch.vertices.iter().all(|v| v.color == [1.0, 0.0, 0.0, 1.0]));
        assert!(
            batch
                .vertices
                .iter()
                .all(|v| v.position[0].abs() <= 0.2 && v.position[1].abs() <= 0.2)
        );
    }

    #[test]
    fn test_clear_resets_geometry() {
        let mut batch = FrameBatch::new(Bounds::new(800.0, 600.0));
        batch.push_circle(Vec2::new(10.0, 10.0), 5.0, palette::BLUE);
        batch.clear(palette::GRAY);

        assert_eq!(batch.vertex_count(), 0);
        assert_eq!(batch.clear, palette::GRAY);
        let c = batch.clear_color();
        assert!((c.r - 242.0 / 255.0).abs() < 1e-6);
        assert_eq!(c.a, 1.0);
    }
}
