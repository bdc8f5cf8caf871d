//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed-size step per tick
//! - Seeded RNG only
//! - Stable iteration order (collection order, player last)
//! - No rendering or platform dependencies

pub mod actor;
pub mod collision;
pub mod color;
pub mod state;
pub mod tick;

pub use actor::{Actor, ActorKind, Bounds, Direction};
pub use collision::{Absorption, absorb, growth_for, overlaps, resolve_absorptions};
pub use color::{Rgb, palette};
pub use state::{GamePhase, GameState, SpawnRegion};
pub use tick::{InputEvent, advance, handle_input, prepare, tick};
