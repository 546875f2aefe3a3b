//! Application states and the per-frame driver around them.
//!
//! Exactly one state is active. Each exposes the same lifecycle hooks:
//! `on_first_tick` when the session timer is 0, `on_tick` every frame,
//! `on_draw` (read-only) and `on_last_tick` when it is left.

pub mod context;
pub mod play;
pub mod title;

use log::info;

use crate::config::{Settings, StartState};
use crate::game::FieldError;
use crate::input::{InputEvents, Key};
use crate::render::{BACKGROUND, DrawSurface};

pub use context::SessionContext;
pub use play::{EndReason, PlayState, SessionEnd};
pub use title::TitleState;

/// State to enter at the end of the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Title,
    Play,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppState {
    Title(TitleState),
    Play(PlayState),
}

impl AppState {
    pub fn enter(transition: Transition) -> Self {
        match transition {
            Transition::Title => AppState::Title(TitleState),
            Transition::Play => AppState::Play(PlayState::default()),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AppState::Title(_) => "title",
            AppState::Play(_) => "play",
        }
    }

    pub fn on_first_tick(&mut self, ctx: &mut SessionContext) -> Result<(), FieldError> {
        match self {
            AppState::Title(s) => s.on_first_tick(ctx),
            AppState::Play(s) => s.on_first_tick(ctx),
        }
    }

    pub fn on_tick(
        &mut self,
        ctx: &mut SessionContext,
        inputs: &InputEvents,
    ) -> Option<Transition> {
        match self {
            AppState::Title(s) => s.on_tick(ctx, inputs),
            AppState::Play(s) => s.on_tick(ctx, inputs),
        }
    }

    pub fn on_draw(&self, ctx: &SessionContext, surface: &mut dyn DrawSurface) {
        surface.clear(BACKGROUND);
        match self {
            AppState::Title(s) => s.on_draw(ctx, surface),
            AppState::Play(s) => s.on_draw(ctx, surface),
        }
    }

    /// Nothing to tear down yet.
    pub fn on_last_tick(&mut self, ctx: &SessionContext) {
        info!(
            "Leaving {} after {} frames, score {}",
            self.name(),
            ctx.timer,
            ctx.simulation.score
        );
    }
}

/// Owns the active state, its session context and the input tracker.
pub struct App {
    pub state: AppState,
    pub ctx: SessionContext,
    pub inputs: InputEvents,
}

impl App {
    pub fn new(settings: &Settings) -> Self {
        let state = match settings.start_state {
            StartState::Title => AppState::enter(Transition::Title),
            StartState::Play => AppState::enter(Transition::Play),
        };
        Self {
            state,
            ctx: SessionContext::new(settings),
            inputs: InputEvents::new(),
        }
    }

    /// Feed this frame's held state for every logical key.
    pub fn sample_inputs(&mut self, mut held: impl FnMut(Key) -> bool) {
        for key in Key::ALL {
            self.inputs.tick(key, held(key));
        }
    }

    /// Run one frame of the active state.
    pub fn tick(&mut self) -> Result<(), FieldError> {
        if self.ctx.timer == 0 {
            self.state.on_first_tick(&mut self.ctx)?;
        }
        let transition = self.state.on_tick(&mut self.ctx, &self.inputs);
        self.ctx.timer += 1;

        if let Some(next) = transition {
            self.state.on_last_tick(&self.ctx);
            self.state = AppState::enter(next);
            self.ctx.timer = 0;
            info!("Entering {}", self.state.name());
        }
        Ok(())
    }

    pub fn draw(&self, surface: &mut dyn DrawSurface) {
        self.state.on_draw(&self.ctx, surface);
    }

    /// Set when a play session is over and waiting for the player.
    pub fn session_end(&self) -> Option<SessionEnd> {
        match &self.state {
            AppState::Play(play) => play.ended,
            AppState::Title(_) => None,
        }
    }
}
