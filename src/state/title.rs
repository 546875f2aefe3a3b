use log::{debug, info};

use super::Transition;
use super::context::SessionContext;
use super::play::draw_field;
use crate::game::{Cell, Direction, FieldError, Spawn};
use crate::input::{InputEvents, Key};
use crate::render::{DrawSurface, STATUS_BAR, STATUS_BAR_HEIGHT};

/// Attract mode: the snake patrols the border while the player picks a
/// difficulty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleState;

impl TitleState {
    pub fn on_first_tick(&mut self, ctx: &mut SessionContext) -> Result<(), FieldError> {
        let (width, height) = ctx.field_size();
        let spawn = Spawn {
            width,
            height,
            head: Cell::new(0, 0),
            dir: Direction::Right,
            len: 4,
            food: Cell::new(width / 2, height / 2),
            move_rate: ctx.difficulty.move_rate,
            player_controlled: false,
        };
        ctx.simulation.reset(&spawn)?;
        info!("Title screen on a {}x{} field", width, height);
        Ok(())
    }

    pub fn on_tick(
        &mut self,
        ctx: &mut SessionContext,
        inputs: &InputEvents,
    ) -> Option<Transition> {
        if inputs.is_pressed(Key::Confirm) {
            return Some(Transition::Play);
        }

        let step = match (inputs.is_pressed(Key::Left), inputs.is_pressed(Key::Right)) {
            (true, false) => -1,
            (false, true) => 1,
            _ => 0,
        };
        if step != 0 && ctx.step_difficulty(step) {
            ctx.simulation.move_rate = ctx.difficulty.move_rate;
            debug!("Difficulty set to {}", ctx.difficulty.name);
        }

        let outcome = ctx.simulation.tick(inputs, &mut ctx.rng);
        if outcome.ends_session() {
            // Only reachable on degenerate fields; start the demo over.
            debug!("Demo ended ({:?}), restarting", outcome);
            return Some(Transition::Title);
        }
        None
    }

    pub fn on_draw(&self, ctx: &SessionContext, surface: &mut dyn DrawSurface) {
        draw_field(ctx, surface);

        let top = (ctx.canvas_height / 2).saturating_sub(16);
        surface.draw_text("SNAKE", 4, top);
        surface.draw_text(&format!("< {} >", ctx.difficulty.name), 4, top + 12);

        let bottom_y = ctx.canvas_height.saturating_sub(STATUS_BAR_HEIGHT);
        surface.fill_rect(0, bottom_y, ctx.canvas_width, STATUS_BAR_HEIGHT, STATUS_BAR);
        surface.draw_text("Press Z to start", 0, bottom_y);
    }
}
