//! Game loop
//!
//! Couples the simulation to a drawing surface, an input source and a pacing
//! primitive. Each tick runs in a fixed order:
//!
//! 1. drain input
//! 2. spawn gate
//! 3. clear, draw every living actor, drop the dead ones
//! 4. present, then wait the frame delay
//! 5. move everything and resolve absorptions
//! 6. end the game if the player was eaten

use std::time::Duration;

use glam::Vec2;

use crate::settings::Settings;
use crate::sim::{self, GamePhase, GameState, InputEvent, Rgb, palette};

/// Something circles can be drawn on
pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    /// Clear the whole frame
    fn fill(&mut self, color: Rgb);
    fn draw_filled_circle(&mut self, center: Vec2, radius: f32, color: Rgb);
    /// Show what has been drawn since the last `fill`
    fn present(&mut self);
}

/// Non-blocking input queue
pub trait EventSource {
    /// Take every event queued so far
    fn poll(&mut self) -> Vec<InputEvent>;
}

/// A running game
#[derive(Debug, Clone)]
pub struct Game {
    pub state: GameState,
    frame_delay: Duration,
    /// Actors eaten by the player so far
    pub player_kills: u32,
}

impl Game {
    pub fn new(settings: &Settings, seed: u64) -> Self {
        Self {
            state: GameState::with_settings(seed, settings),
            frame_delay: settings.frame_delay(),
            player_kills: 0,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn frame_delay(&self) -> Duration {
        self.frame_delay
    }

    /// Draw the current state without advancing it
    ///
    /// The player goes first so enemies are painted over it.
    pub fn draw<S: Surface>(&self, surface: &mut S) {
        surface.fill(palette::BACKGROUND);
        let (players, enemies): (Vec<_>, Vec<_>) =
            self.state.visible().partition(|a| a.is_player());
        for actor in players.into_iter().chain(enemies) {
            surface.draw_filled_circle(actor.pos, actor.radius, actor.color);
        }
    }

    /// Steps 1-4 minus the wait: input, spawn, draw, present
    ///
    /// Returns the phase after input handling; nothing is drawn once the game
    /// has ended.
    pub fn render_frame<S: Surface>(&mut self, events: &[InputEvent], surface: &mut S) -> GamePhase {
        if !sim::prepare(&mut self.state, events) {
            return self.phase();
        }
        self.draw(surface);
        surface.present();
        self.phase()
    }

    /// Steps 5-6: movement, absorption, game-over check
    pub fn update(&mut self) -> GamePhase {
        let player_id = self.state.player().map(|p| p.id);
        let events = sim::advance(&mut self.state);
        self.player_kills += events
            .iter()
            .filter(|e| Some(e.eater) == player_id)
            .count() as u32;

        if self.phase() == GamePhase::Ended {
            self.log_summary();
        }
        self.phase()
    }

    fn log_summary(&self) {
        let radius = self.state.player().map(|p| p.radius).unwrap_or_default();
        log::info!(
            "game over after {} ticks: final radius {}, {} eaten",
            self.state.time_ticks,
            radius,
            self.player_kills
        );
    }
}

/// Drive `game` until it ends
///
/// `sleep` is called with the frame delay between presenting and updating.
/// Returns the number of ticks played.
pub fn run<S, E, F>(game: &mut Game, surface: &mut S, input: &mut E, mut sleep: F) -> u64
where
    S: Surface,
    E: EventSource,
    F: FnMut(Duration),
{
    loop {
        let events = input.poll();
        if game.render_frame(&events, surface) == GamePhase::Ended {
            break;
        }
        sleep(game.frame_delay());
        if game.update() == GamePhase::Ended {
            break;
        }
    }
    game.state.time_ticks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Direction;
    use std::collections::VecDeque;

    #[derive(Default)]
    struct Recorder {
        circles: Vec<(Vec2, f32, Rgb)>,
        fills: u32,
        presents: u32,
    }

    impl Surface for Recorder {
        fn width(&self) -> u32 {
            800
        }
        fn height(&self) -> u32 {
            600
        }
        fn fill(&mut self, _color: Rgb) {
            self.fills += 1;
            self.circles.clear();
        }
        fn draw_filled_circle(&mut self, center: Vec2, radius: f32, color: Rgb) {
            self.circles.push((center, radius, color));
        }
        fn present(&mut self) {
            self.presents += 1;
        }
    }

    struct Script(VecDeque<Vec<InputEvent>>);

    impl EventSource for Script {
        fn poll(&mut self) -> Vec<InputEvent> {
            self.0.pop_front().unwrap_or_default()
        }
    }

    fn quiet_settings() -> Settings {
        Settings {
            spawn_interval: 0,
            ..Settings::default()
        }
    }

    #[test]
    fn test_render_before_move() {
        let mut game = Game::new(&quiet_settings(), 1);
        let mut surface = Recorder::default();

        game.render_frame(&[], &mut surface);
        assert_eq!(surface.circles.len(), 1);
        assert_eq!(surface.circles[0].0, Vec2::new(400.0, 300.0));

        game.update();
        assert_eq!(game.state.player().unwrap().pos, Vec2::new(390.0, 300.0));
        // The frame shows where the player was, not where it is now
        assert_eq!(surface.circles[0].0, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_dead_actors_not_drawn() {
        let mut game = Game::new(&quiet_settings(), 1);
        game.state
            .add_enemy(Vec2::new(380.0, 300.0), 20.0, Vec2::ZERO, palette::GREEN);
        let mut surface = Recorder::default();

        game.render_frame(&[], &mut surface);
        assert_eq!(surface.circles.len(), 2);
        assert_eq!(surface.circles[0].1, 50.0);
        assert_eq!(surface.circles[1].1, 20.0);

        game.update();
        assert_eq!(game.player_kills, 1);

        game.render_frame(&[], &mut surface);
        assert_eq!(surface.circles.len(), 1);
        assert_eq!(surface.circles[0].1, 52.0);
        assert_eq!(surface.fills, 2);
        assert_eq!(surface.presents, 2);
    }

    #[test]
    fn test_run_sleeps_each_tick_until_quit() {
        let mut game = Game::new(&quiet_settings(), 1);
        let mut surface = Recorder::default();
        let mut script = Script(VecDeque::from(vec![
            vec![InputEvent::KeyDown(Direction::Up)],
            vec![],
            vec![InputEvent::Quit],
        ]));
        let mut sleeps = Vec::new();

        let ticks = run(&mut game, &mut surface, &mut script, |d| sleeps.push(d));
        assert_eq!(ticks, 2);
        assert_eq!(sleeps, vec![Duration::from_millis(50); 2]);
        assert_eq!(surface.presents, 2);
        assert_eq!(game.phase(), GamePhase::Ended);
        assert_eq!(game.state.player().unwrap().pos, Vec2::new(400.0, 280.0));
    }

    #[test]
    fn test_run_stops_when_player_eaten() {
        let mut game = Game::new(&quiet_settings(), 1);
        game.state
            .add_enemy(Vec2::new(300.0, 300.0), 90.0, Vec2::ZERO, palette::BLACK);
        let mut surface = Recorder::default();
        let mut script = Script(VecDeque::new());

        let ticks = run(&mut game, &mut surface, &mut script, |_| {});
        assert_eq!(game.phase(), GamePhase::Ended);
        assert!(!game.state.player_alive());
        assert!(ticks > 0);
    }
}
