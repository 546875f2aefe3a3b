use log::info;

use super::Transition;
use super::context::SessionContext;
use crate::game::{Cell, Direction, FieldError, Spawn, TickOutcome};
use crate::input::{InputEvents, Key};
use crate::render::{
    self, BORDER, DrawSurface, FOOD_TILE, GLYPH_ADVANCE, STATUS_BAR, STATUS_BAR_HEIGHT,
};

const START_LEN: u32 = 4;

/// Why a play session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    LeftField,
    BoardFull,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionEnd {
    pub reason: EndReason,
    /// Session frame on which it ended; the clock freezes here.
    pub at: u64,
}

/// Interactive session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayState {
    pub ended: Option<SessionEnd>,
}

impl PlayState {
    pub fn on_first_tick(&mut self, ctx: &mut SessionContext) -> Result<(), FieldError> {
        let (width, height) = ctx.field_size();
        let head = Cell::new(1.min(width - 1), height / 2);
        let spawn = Spawn {
            width,
            height,
            head,
            dir: Direction::Right,
            len: START_LEN,
            food: Cell::new(width - 1, head.y),
            move_rate: ctx.difficulty.move_rate,
            player_controlled: true,
        };
        ctx.simulation.reset(&spawn)?;
        self.ended = None;
        info!(
            "Play started on a {}x{} field at difficulty {}",
            width, height, ctx.difficulty.name
        );
        Ok(())
    }

    pub fn on_tick(
        &mut self,
        ctx: &mut SessionContext,
        inputs: &InputEvents,
    ) -> Option<Transition> {
        if self.ended.is_some() {
            if inputs.is_pressed(Key::Confirm) {
                return Some(Transition::Play);
            }
            if inputs.is_pressed(Key::Cancel) {
                return Some(Transition::Title);
            }
            return None;
        }

        let reason = match ctx.simulation.tick(inputs, &mut ctx.rng) {
            TickOutcome::Exited => EndReason::LeftField,
            TickOutcome::BoardFull => EndReason::BoardFull,
            TickOutcome::Idle | TickOutcome::Moved | TickOutcome::Ate => return None,
        };
        info!("Session ended ({:?}) with score {}", reason, ctx.simulation.score);
        self.ended = Some(SessionEnd {
            reason,
            at: ctx.timer,
        });
        None
    }

    pub fn on_draw(&self, ctx: &SessionContext, surface: &mut dyn DrawSurface) {
        draw_field(ctx, surface);

        let bottom_y = ctx.canvas_height.saturating_sub(STATUS_BAR_HEIGHT);
        surface.fill_rect(0, bottom_y, ctx.canvas_width, STATUS_BAR_HEIGHT, STATUS_BAR);
        surface.draw_text(ctx.difficulty.name, 0, bottom_y);
        surface.draw_text(&format!("Score-{}", ctx.simulation.score), 6 * GLYPH_ADVANCE, bottom_y);
        let frames = self.ended.map_or(ctx.timer, |end| end.at);
        let clock = render::format_clock(frames, ctx.frame_rate);
        surface.draw_text(&clock, 18 * GLYPH_ADVANCE, bottom_y);

        if let Some(end) = self.ended {
            let banner = match end.reason {
                EndReason::LeftField => "GAME OVER",
                EndReason::BoardFull => "BOARD FULL!",
            };
            let top = (ctx.canvas_height / 2).saturating_sub(10);
            surface.fill_rect(0, top, ctx.canvas_width, 20, STATUS_BAR);
            surface.draw_text(banner, 4, top + 1);
            surface.draw_text("Z-retry X-title", 4, top + 11);
        }
    }
}

/// Border, trail and food. Shared with the title screen.
pub(super) fn draw_field(ctx: &SessionContext, surface: &mut dyn DrawSurface) {
    let sim = &ctx.simulation;
    let tile = ctx.tile_size;
    surface.stroke_rect(
        1,
        1,
        (tile * sim.field.width()).saturating_sub(2),
        (tile * sim.field.height()).saturating_sub(2),
        BORDER,
    );

    for (cell, age) in sim.field.iter().filter(|&(_, v)| v > 0) {
        surface.draw_tile(render::trail_tile(age, sim.len, sim.dir), 0, cell.x, cell.y);
    }

    if let Some(food) = sim.food {
        surface.draw_tile(FOOD_TILE, 0, food.x, food.y);
    }
}
