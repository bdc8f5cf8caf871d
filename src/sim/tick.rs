//! Fixed-step simulation tick
//!
//! One tick is split in two halves so the game loop can draw in between:
//! `prepare` (input, spawn, prune) runs before the frame is rendered and
//! `advance` (movement, absorption, game-over check) runs after it.

use serde::{Deserialize, Serialize};

use super::actor::Direction;
use super::collision::{Absorption, resolve_absorptions};
use super::state::{GamePhase, GameState};

/// Discrete input event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Window closed
    Quit,
    /// Arrow key pressed
    KeyDown(Direction),
}

/// Apply queued input. Returns false once the game has ended.
pub fn handle_input(state: &mut GameState, events: &[InputEvent]) -> bool {
    for event in events {
        match *event {
            InputEvent::Quit => {
                log::info!("quit requested at tick {}", state.time_ticks);
                state.phase = GamePhase::Ended;
            }
            InputEvent::KeyDown(dir) => {
                if let Some(player) = state.player_mut() {
                    player.turn(dir);
                }
            }
        }
    }
    state.phase == GamePhase::Running
}

/// First half of a tick: input, spawn gate, pruning
///
/// Returns false if the game ended during input handling; the rest of the tick
/// must then be skipped.
pub fn prepare(state: &mut GameState, events: &[InputEvent]) -> bool {
    if state.phase == GamePhase::Ended {
        return false;
    }
    if !handle_input(state, events) {
        return false;
    }

    state.time_ticks += 1;
    if state.spawn_due() {
        state.spawn_enemy();
    }

    state.prune_dead();
    true
}

/// Second half of a tick: move everything, resolve absorptions, check for death
pub fn advance(state: &mut GameState) -> Vec<Absorption> {
    if state.phase == GamePhase::Ended {
        return Vec::new();
    }

    let bounds = state.bounds;
    for actor in &mut state.actors {
        actor.step(bounds);
    }

    let events = resolve_absorptions(&mut state.actors);
    for e in &events {
        log::debug!("actor {} ate actor {} (+{})", e.eater, e.prey, e.gained);
    }

    if !state.player_alive() {
        log::info!("player eaten at tick {}", state.time_ticks);
        state.phase = GamePhase::Ended;
    }

    events
}

/// Advance the game state by one whole tick without rendering
pub fn tick(state: &mut GameState, events: &[InputEvent]) -> Vec<Absorption> {
    if !prepare(state, events) {
        return Vec::new();
    }
    advance(state)
}
