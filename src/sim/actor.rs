//! Circle actors: the player and the enemies
//!
//! Both variants share one record; they differ only in how `step` moves them.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::color::Rgb;
use crate::consts::PLAYER_STEP;

/// Screen extent the actors live in (origin top-left, y down)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Player facing direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    #[default]
    Left,
}

impl Direction {
    /// Unit step in screen space
    pub fn unit(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Right => Vec2::new(1.0, 0.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
        }
    }
}

/// Movement policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActorKind {
    /// Steps a fixed distance toward `facing`, clamped inside the screen
    Player { facing: Direction },
    /// Drifts by its velocity, bouncing off the screen edges
    Enemy,
}

/// A circle entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub id: u32,
    pub kind: ActorKind,
    pub pos: Vec2,
    pub radius: f32,
    /// Per-tick displacement (enemies only)
    pub vel: Vec2,
    pub color: Rgb,
    pub alive: bool,
}

impl Actor {
    pub fn player(id: u32, pos: Vec2, radius: f32, color: Rgb) -> Self {
        Self {
            id,
            kind: ActorKind::Player {
                facing: Direction::default(),
            },
            pos,
            radius,
            vel: Vec2::ZERO,
            color,
            alive: true,
        }
    }

    pub fn enemy(id: u32, pos: Vec2, radius: f32, vel: Vec2, color: Rgb) -> Self {
        Self {
            id,
            kind: ActorKind::Enemy,
            pos,
            radius,
            vel,
            color,
            alive: true,
        }
    }

    #[inline]
    pub fn is_player(&self) -> bool {
        matches!(self.kind, ActorKind::Player { .. })
    }

    /// Current facing, if this is the player
    pub fn facing(&self) -> Option<Direction> {
        match self.kind {
            ActorKind::Player { facing } => Some(facing),
            ActorKind::Enemy => None,
        }
    }

    /// Turn the player. No effect on enemies or dead actors.
    pub fn turn(&mut self, dir: Direction) {
        if !self.alive {
            return;
        }
        if let ActorKind::Player { facing } = &mut self.kind {
            *facing = dir;
        }
    }

    /// Advance one tick
    pub fn step(&mut self, bounds: Bounds) {
        match self.kind {
            ActorKind::Player { facing } => self.step_player(facing, bounds),
            ActorKind::Enemy => self.step_enemy(bounds),
        }
    }

    fn step_player(&mut self, facing: Direction, bounds: Bounds) {
        self.pos += facing.unit() * PLAYER_STEP;

        let r = self.radius;
        if self.pos.x <= r {
            self.pos.x = r;
        } else if self.pos.x + r >= bounds.width {
            self.pos.x = bounds.width - r;
        }
        if self.pos.y <= r {
            self.pos.y = r;
        } else if self.pos.y + r >= bounds.height {
            self.pos.y = bounds.height - r;
        }
    }

    // Reflection flips the velocity only; the position is not pulled back to
    // the wall, so an enemy may overshoot by up to one tick of travel.
    fn step_enemy(&mut self, bounds: Bounds) {
        self.pos += self.vel;

        let r = self.radius;
        if self.pos.x - r <= 0.0 || self.pos.x + r >= bounds.width {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y - r <= 0.0 || self.pos.y + r >= bounds.height {
            self.vel.y = -self.vel.y;
        }
    }
}
