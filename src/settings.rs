//! Game settings
//!
//! Defaults reproduce the classic game. A `ball-eater.json` file in the working
//! directory may override any subset of fields.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::state::SpawnRegion;

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Window title
    pub title: String,

    // === Screen ===
    pub width: u32,
    pub height: u32,

    // === Timing ===
    /// Delay between ticks (ms)
    pub frame_delay_ms: u64,
    /// Ticks between enemy spawns (0 disables spawning)
    pub spawn_interval: u64,

    // === Spawning ===
    /// Inclusive x range for new enemies
    pub spawn_x: (i32, i32),
    /// Inclusive y range for new enemies
    pub spawn_y: (i32, i32),

    // === Player ===
    pub player_radius: f32,

    /// RNG seed (random when unset)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "Ball Eater".to_string(),

            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,

            frame_delay_ms: FRAME_DELAY_MS,
            spawn_interval: SPAWN_INTERVAL_TICKS,

            spawn_x: (SPAWN_MIN, SPAWN_MAX),
            spawn_y: (SPAWN_MIN, SPAWN_MAX),

            player_radius: PLAYER_RADIUS,

            seed: None,
        }
    }
}

impl Settings {
    /// Settings file name, looked up in the working directory
    pub const FILE_NAME: &'static str = "ball-eater.json";

    /// Load settings from `ball-eater.json`, falling back to defaults
    pub fn load() -> Self {
        Self::load_from(Path::new(Self::FILE_NAME))
    }

    /// Load settings from a JSON file, falling back to defaults
    ///
    /// A missing file is silent; an unreadable or malformed one is logged.
    pub fn load_from(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("Using default settings");
                return Self::default();
            }
            Err(e) => {
                log::warn!("Could not read {}: {e}; using defaults", path.display());
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings in {}: {e}; using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Parse and validate settings JSON
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        Ok(settings.validated())
    }

    /// Clamp values into something playable
    ///
    /// Screen size lies in 1..=`MAX_SCREEN_EXTENT`, the player fits on screen
    /// and the spawn region lies inside the screen with ordered bounds.
    pub fn validated(mut self) -> Self {
        self.width = self.width.clamp(1, MAX_SCREEN_EXTENT);
        self.height = self.height.clamp(1, MAX_SCREEN_EXTENT);

        let max_radius = (self.width.min(self.height) as f32 / 2.0).max(1.0);
        if !self.player_radius.is_finite() || self.player_radius <= 0.0 {
            self.player_radius = PLAYER_RADIUS;
        }
        self.player_radius = self.player_radius.min(max_radius);

        self.spawn_x = clamp_range(self.spawn_x, self.width as i32);
        self.spawn_y = clamp_range(self.spawn_y, self.height as i32);
        self
    }

    pub fn spawn_region(&self) -> SpawnRegion {
        SpawnRegion {
            x: self.spawn_x,
            y: self.spawn_y,
        }
    }

    pub fn frame_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.frame_delay_ms)
    }
}

fn clamp_range((lo, hi): (i32, i32), extent: i32) -> (i32, i32) {
    let lo = lo.clamp(0, extent);
    let hi = hi.clamp(0, extent);
    if lo <= hi { (lo, hi) } else { (hi, lo) }
}
