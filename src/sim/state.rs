//! Game state and core simulation types

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::actor::{Actor, Bounds};
use super::color::Rgb;
use crate::consts::*;
use crate::settings::Settings;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Player was eaten or the window was closed
    Ended,
}

/// Inclusive integer range enemies spawn in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnRegion {
    pub x: (i32, i32),
    pub y: (i32, i32),
}

impl Default for SpawnRegion {
    fn default() -> Self {
        Self {
            x: (SPAWN_MIN, SPAWN_MAX),
            y: (SPAWN_MIN, SPAWN_MAX),
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    /// Screen extent
    pub bounds: Bounds,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Ticks between spawns (0 = never)
    pub spawn_interval: u64,
    pub spawn_region: SpawnRegion,
    /// Current phase
    pub phase: GamePhase,
    /// All actors in evaluation order. The player is kept last.
    pub actors: Vec<Actor>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new game with default tuning, the player centered
    pub fn new(seed: u64) -> Self {
        Self::with_settings(seed, &Settings::default())
    }

    /// Create a new game from `settings`, validated first
    pub fn with_settings(seed: u64, settings: &Settings) -> Self {
        let settings = settings.clone().validated();
        let bounds = Bounds::new(settings.width as f32, settings.height as f32);
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            bounds,
            time_ticks: 0,
            spawn_interval: settings.spawn_interval,
            spawn_region: settings.spawn_region(),
            phase: GamePhase::Running,
            actors: Vec::new(),
            next_id: 0,
        };

        let id = state.next_entity_id();
        let color = Rgb::random(&mut state.rng);
        state.actors.push(Actor::player(
            id,
            bounds.center(),
            settings.player_radius,
            color,
        ));

        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn player(&self) -> Option<&Actor> {
        self.actors.iter().rev().find(|a| a.is_player())
    }

    pub fn player_mut(&mut self) -> Option<&mut Actor> {
        self.actors.iter_mut().rev().find(|a| a.is_player())
    }

    pub fn player_alive(&self) -> bool {
        self.player().is_some_and(|p| p.alive)
    }

    /// Enemies, dead or alive
    pub fn enemies(&self) -> impl Iterator<Item = &Actor> {
        self.actors.iter().filter(|a| !a.is_player())
    }

    /// Insert an enemy ahead of the player
    pub fn add_enemy(&mut self, pos: Vec2, radius: f32, vel: Vec2, color: Rgb) -> u32 {
        let id = self.next_entity_id();
        let enemy = Actor::enemy(id, pos, radius, vel, color);
        let at = self
            .actors
            .iter()
            .position(|a| a.is_player())
            .unwrap_or(self.actors.len());
        self.actors.insert(at, enemy);
        id
    }

    /// Spawn one enemy with random placement, size, speed and color
    pub fn spawn_enemy(&mut self) -> u32 {
        let region = self.spawn_region;
        let x = self.rng.random_range(region.x.0..=region.x.1);
        let y = self.rng.random_range(region.y.0..=region.y.1);
        let radius = self.rng.random_range(ENEMY_MIN_RADIUS..=ENEMY_MAX_RADIUS);
        let sx = self.rng.random_range(-ENEMY_MAX_SPEED..=ENEMY_MAX_SPEED);
        let sy = self.rng.random_range(-ENEMY_MAX_SPEED..=ENEMY_MAX_SPEED);
        let color = Rgb::random(&mut self.rng);

        let id = self.add_enemy(
            Vec2::new(x as f32, y as f32),
            radius as f32,
            Vec2::new(sx as f32, sy as f32),
            color,
        );
        log::debug!("spawned enemy {id} at ({x}, {y}) r={radius} v=({sx}, {sy})");
        id
    }

    /// Whether the current tick is a spawn tick
    pub fn spawn_due(&self) -> bool {
        self.spawn_interval > 0 && self.time_ticks % self.spawn_interval == 0
    }

    /// Drop dead enemies. The player is never removed.
    pub fn prune_dead(&mut self) {
        self.actors.retain(|a| a.alive || a.is_player());
    }

    /// Actors that should be drawn this frame
    pub fn visible(&self) -> impl Iterator<Item = &Actor> {
        self.actors.iter().filter(|a| a.alive)
    }
}
