//! Headless end-to-end runs of the game loop

use std::collections::VecDeque;
use std::time::Duration;

use ball_eater::game::{self, EventSource, Game, Surface};
use ball_eater::settings::Settings;
use ball_eater::sim::{Direction, GamePhase, InputEvent, Rgb};
use glam::Vec2;

/// Surface that keeps every presented frame
#[derive(Default)]
struct FrameLog {
    current: Vec<(Vec2, f32)>,
    frames: Vec<Vec<(Vec2, f32)>>,
    background: Option<Rgb>,
}

impl Surface for FrameLog {
    fn width(&self) -> u32 {
        800
    }
    fn height(&self) -> u32 {
        600
    }
    fn fill(&mut self, color: Rgb) {
        self.background = Some(color);
        self.current.clear();
    }
    fn draw_filled_circle(&mut self, center: Vec2, radius: f32, _color: Rgb) {
        self.current.push((center, radius));
    }
    fn present(&mut self) {
        self.frames.push(std::mem::take(&mut self.current));
    }
}

/// Plays back one batch of events per tick, then a final batch forever
struct Script {
    ticks: VecDeque<Vec<InputEvent>>,
    then: Vec<InputEvent>,
}

impl EventSource for Script {
    fn poll(&mut self) -> Vec<InputEvent> {
        self.ticks.pop_front().unwrap_or_else(|| self.then.clone())
    }
}

fn idle_for(ticks: usize) -> Script {
    Script {
        ticks: std::iter::repeat_with(Vec::new).take(ticks).collect(),
        then: vec![InputEvent::Quit],
    }
}

#[test]
fn empty_arena_ends_only_on_quit() {
    let settings = Settings {
        spawn_interval: 0,
        ..Settings::default()
    };
    let mut game = Game::new(&settings, 2024);
    let mut surface = FrameLog::default();
    let mut input = idle_for(500);

    let ticks = game::run(&mut game, &mut surface, &mut input, |_| {});

    assert_eq!(ticks, 500);
    assert_eq!(game.phase(), GamePhase::Ended);
    assert!(game.state.player_alive());
    assert_eq!(game.state.enemies().count(), 0);
    // Drifted left into the wall and stayed there
    assert_eq!(game.state.player().unwrap().pos, Vec2::new(50.0, 300.0));
    assert_eq!(surface.frames.len(), 500);
    assert_eq!(surface.background, Some(Rgb::new(255, 255, 255)));
}

#[test]
fn first_tick_moves_player_left() {
    let settings = Settings {
        spawn_interval: 0,
        ..Settings::default()
    };
    let mut game = Game::new(&settings, 1);
    let mut surface = FrameLog::default();
    let mut input = idle_for(1);

    game::run(&mut game, &mut surface, &mut input, |_| {});

    assert_eq!(game.state.player().unwrap().pos, Vec2::new(390.0, 300.0));
    assert_eq!(surface.frames[0], vec![(Vec2::new(400.0, 300.0), 50.0)]);
}

#[test]
fn seeded_runs_are_identical() {
    let settings = Settings {
        spawn_interval: 5,
        ..Settings::default()
    };
    let script = || Script {
        ticks: (0..300)
            .map(|i| match i % 40 {
                0 => vec![InputEvent::KeyDown(Direction::Up)],
                10 => vec![InputEvent::KeyDown(Direction::Right)],
                20 => vec![InputEvent::KeyDown(Direction::Down)],
                30 => vec![InputEvent::KeyDown(Direction::Left)],
                _ => vec![],
            })
            .collect(),
        then: vec![InputEvent::Quit],
    };

    let mut a = Game::new(&settings, 77);
    let mut b = Game::new(&settings, 77);
    let (mut sa, mut sb) = (FrameLog::default(), FrameLog::default());

    let ta = game::run(&mut a, &mut sa, &mut script(), |_| {});
    let tb = game::run(&mut b, &mut sb, &mut script(), |_| {});

    assert_eq!(ta, tb);
    assert_eq!(sa.frames, sb.frames);
}

#[test]
fn busy_arena_keeps_invariants() {
    let settings = Settings {
        spawn_interval: 3,
        ..Settings::default()
    };
    let mut game = Game::new(&settings, 5);
    let mut surface = FrameLog::default();
    let mut input = Script {
        ticks: (0..400)
            .map(|i| {
                let dir = [Direction::Up, Direction::Right, Direction::Down, Direction::Left]
                    [(i / 25) % 4];
                vec![InputEvent::KeyDown(dir)]
            })
            .collect(),
        then: vec![InputEvent::Quit],
    };

    let mut last_radius = settings.player_radius;
    let mut sleeps = 0;
    while game.render_frame(&input.poll(), &mut surface) == GamePhase::Running {
        sleeps += 1;
        let phase = game.update();

        let player = game.state.player().unwrap();
        if player.alive {
            let r = player.radius;
            assert!(r >= last_radius);
            assert!(player.pos.x >= r && player.pos.x <= 800.0 - r);
            assert!(player.pos.y >= r && player.pos.y <= 600.0 - r);
            last_radius = r;
        }
        for actor in &game.state.actors {
            if actor.alive {
                assert!(actor.radius > 0.0);
            }
        }
        if phase == GamePhase::Ended {
            break;
        }
    }

    assert_eq!(game.phase(), GamePhase::Ended);
    assert!(sleeps > 0);
    // Nothing presented ever contains a zero-size circle
    assert!(surface.frames.iter().flatten().all(|&(_, r)| r > 0.0));
}

#[test]
fn frame_delay_follows_settings() {
    let settings = Settings {
        spawn_interval: 0,
        frame_delay_ms: 16,
        ..Settings::default()
    };
    let mut game = Game::new(&settings, 1);
    let mut surface = FrameLog::default();
    let mut input = idle_for(3);
    let mut total = Duration::ZERO;

    game::run(&mut game, &mut surface, &mut input, |d| total += d);
    assert_eq!(total, Duration::from_millis(48));
}
