//! Platform abstraction layer
//!
//! Handles the native side of the game:
//! - Window creation and the winit event loop
//! - Keyboard/close events translated into `InputEvent`s
//! - Frame pacing

pub mod input;
pub mod native;

pub use input::{EventQueue, map_key};
pub use native::run;
