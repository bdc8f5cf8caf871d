//! WebGPU rendering module
//!
//! Filled circles are tessellated on the CPU into a single triangle list per
//! frame and drawn with a flat-color pipeline.

pub mod batch;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use batch::FrameBatch;
pub use pipeline::{RenderState, SurfaceErrorAction};
