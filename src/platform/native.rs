//! Native window + event loop
//!
//! Owns the winit EventLoop and Window and drives one game tick per frame
//! delay from `about_to_wait`.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use super::input::{EventQueue, translate_key};
use crate::game::{EventSource, Game};
use crate::renderer::RenderState;
use crate::settings::Settings;
use crate::sim::{GamePhase, InputEvent};

/// Open the window and play until the player is eaten or the window closes
pub fn run(settings: Settings, seed: u64) -> Result<()> {
    let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
    let mut app = NativeApp::new(settings, seed);

    event_loop
        .run_app(&mut app)
        .context("winit event loop terminated with error")?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

struct NativeApp {
    settings: Settings,
    game: Game,
    input: EventQueue,
    window: Option<Arc<Window>>,
    render: Option<RenderState>,
    next_frame: Instant,
    /// Startup or fatal render error, reported after the loop exits
    error: Option<anyhow::Error>,
}

impl NativeApp {
    fn new(settings: Settings, seed: u64) -> Self {
        let game = Game::new(&settings, seed);
        Self {
            settings,
            game,
            input: EventQueue::default(),
            window: None,
            render: None,
            next_frame: Instant::now(),
            error: None,
        }
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.settings.title.clone())
            .with_inner_size(LogicalSize::new(self.settings.width, self.settings.height))
            .with_resizable(false);

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let surface = instance
            .create_surface(window.clone())
            .context("failed to create wgpu surface")?;

        let size = window.inner_size();
        let render = pollster::block_on(RenderState::new(
            &instance,
            surface,
            size.width,
            size.height,
            self.game.state.bounds,
        ))?;

        log::info!("window {}x{} ready", size.width, size.height);
        self.window = Some(window);
        self.render = Some(render);
        self.next_frame = Instant::now();
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: anyhow::Error) {
        log::error!("{error:#}");
        self.error = Some(error);
        event_loop.exit();
    }

    /// One tick: input, spawn, draw, present, then move and collide
    fn step(&mut self, event_loop: &ActiveEventLoop) {
        let Some(render) = self.render.as_mut() else {
            return;
        };

        let events = self.input.poll();
        if self.game.render_frame(&events, render) == GamePhase::Ended {
            event_loop.exit();
            return;
        }
        if render.fatal {
            self.fail(event_loop, anyhow::anyhow!("render surface lost"));
            return;
        }

        if self.game.update() == GamePhase::Ended {
            event_loop.exit();
        }
    }
}

impl ApplicationHandler for NativeApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init_window(event_loop) {
            self.fail(event_loop, e.context("failed to initialize graphics"));
        }
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => self.input.push(InputEvent::Quit),
            WindowEvent::KeyboardInput { event, .. } => {
                if let Some(ev) = translate_key(&event) {
                    self.input.push(ev);
                }
            }
            WindowEvent::Resized(size) => {
                if let Some(render) = self.render.as_mut() {
                    render.resize(size.width, size.height);
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.render.is_none() {
            return;
        }

        let now = Instant::now();
        if now >= self.next_frame {
            self.step(event_loop);
            self.next_frame = now + self.game.frame_delay();
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_frame));
    }
}
