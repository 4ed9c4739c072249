//! Game host
//!
//! Owns the window, the renderer and the game state, and drives the
//! frame loop: sample input, update, render, until the game stops.

use std::sync::Arc;

use glam::Vec2;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::consts::{DEFAULT_WINDOW_TITLE, WINDOW_POSITION};
use crate::error::InitError;
use crate::platform::InputState;
use crate::renderer::{self, RenderState};
use crate::settings::Settings;
use crate::sim::{FrameClock, GameEvent, GameState, advance};

/// Game instance holding all state
pub struct Game {
    state: GameState,
    input: InputState,
    title: String,
    window: Option<Arc<Window>>,
    render_state: Option<RenderState>,
}

impl Game {
    pub fn new(width: u32, height: u32, ball_vel: Vec2) -> Self {
        Self {
            state: GameState::new(width, height, ball_vel),
            input: InputState::new(),
            title: DEFAULT_WINDOW_TITLE.to_string(),
            window: None,
            render_state: None,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let mut game = Self::new(
            settings.window_width,
            settings.window_height,
            settings.ball_velocity,
        );
        game.title = settings.window_title.clone();
        game
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn is_initialized(&self) -> bool {
        self.window.is_some() && self.render_state.is_some()
    }

    /// Create the window and its renderer
    pub fn initialize(&mut self, event_loop: &ActiveEventLoop) -> Result<(), InitError> {
        let (width, height) = (self.state.width(), self.state.height());
        let attributes = Window::default_attributes()
            .with_title(self.title.as_str())
            .with_inner_size(winit::dpi::PhysicalSize::new(width, height))
            .with_position(winit::dpi::PhysicalPosition::new(
                WINDOW_POSITION.0,
                WINDOW_POSITION.1,
            ))
            .with_resizable(false);

        let window = match event_loop.create_window(attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                return Err(e.into());
            }
        };
        log::info!("Window created: {}x{}", width, height);
        self.window = Some(window.clone());

        let render_state = match RenderState::new(window, width, height) {
            Ok(render_state) => render_state,
            Err(e) => {
                log::error!("Failed to create renderer: {}", e);
                return Err(e);
            }
        };
        self.render_state = Some(render_state);

        // Pace from now, not from construction
        self.state.clock = FrameClock::new();
        Ok(())
    }

    /// Run one frame: input, update, render
    pub fn run_frame(&mut self) {
        let input = self.input.sample();
        advance(&mut self.state, &input);
        for event in &self.state.events {
            match event {
                GameEvent::WallBounce(wall) => log::debug!("Ball bounced off {:?} wall", wall),
                GameEvent::PaddleHit => log::debug!("Paddle hit"),
                GameEvent::BallLost => log::info!("Ball missed the paddle"),
            }
        }
        self.render();
    }

    /// Render the current frame
    fn render(&mut self) {
        let Some(render_state) = self.render_state.as_mut() else {
            return;
        };
        let rects = renderer::scene(&self.state);
        match render_state.render(&rects) {
            Ok(_) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                render_state.resize(render_state.size.0, render_state.size.1);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of memory!");
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }

    /// Release the renderer, then the window. Safe to call more than once,
    /// and without a prior `initialize`.
    pub fn shutdown(&mut self) {
        if let Some(render_state) = self.render_state.take() {
            drop(render_state);
            log::debug!("Renderer destroyed");
        }
        if let Some(window) = self.window.take() {
            drop(window);
            log::debug!("Window destroyed");
        }
    }
}

/// winit driver for a `Game`
struct App {
    game: Game,
    init_error: Option<InitError>,
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.game.is_initialized() || self.init_error.is_some() {
            return;
        }
        if let Err(e) = self.game.initialize(event_loop) {
            self.init_error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => self.game.input.request_close(),
            WindowEvent::KeyboardInput { event, .. } => {
                self.game.input.handle_key(event.physical_key, event.state);
            }
            WindowEvent::Focused(false) => self.game.input.release_all(),
            WindowEvent::Resized(size) => {
                if let Some(render_state) = self.game.render_state.as_mut() {
                    render_state.resize(size.width, size.height);
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if !self.game.is_initialized() {
            return;
        }
        if self.game.is_running() {
            self.game.run_frame();
        }
        if !self.game.is_running() {
            event_loop.exit();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.game.shutdown();
    }
}

/// Create the window and run the game until it ends.
///
/// Initialization failures skip the loop; teardown always happens.
pub fn run(settings: &Settings) -> Result<(), InitError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App {
        game: Game::from_settings(settings),
        init_error: None,
    };
    let result = event_loop.run_app(&mut app);
    app.game.shutdown();
    log::info!("Shut down");

    if let Some(e) = app.init_error {
        return Err(e);
    }
    result.map_err(InitError::from)
}
