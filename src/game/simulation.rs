use log::debug;
use rand::RngCore;

use super::direction::Direction;
use super::field::{Cell, Field, FieldError};
use super::random::{FreeCell, random_free_cell};
use crate::input::{InputEvents, Key};

/// Keys checked for a new heading, highest priority first.
const STEER_KEYS: [(Key, Direction); 4] = [
    (Key::Up, Direction::Up),
    (Key::Right, Direction::Right),
    (Key::Down, Direction::Down),
    (Key::Left, Direction::Left),
];

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Move gate not reached yet.
    Idle,
    Moved,
    /// Moved onto the food and grew.
    Ate,
    /// The step would have left the field; the head did not move.
    Exited,
    /// Grew onto the food but no free cell is left for the next one.
    BoardFull,
}

impl TickOutcome {
    pub fn ends_session(self) -> bool {
        matches!(self, TickOutcome::Exited | TickOutcome::BoardFull)
    }
}

/// Starting layout for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spawn {
    pub width: u32,
    pub height: u32,
    pub head: Cell,
    pub dir: Direction,
    pub len: u32,
    pub food: Cell,
    pub move_rate: u32,
    pub player_controlled: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Simulation {
    pub head: Cell,
    pub dir: Direction,
    /// Snake length; also the value written into the head cell.
    pub len: u32,
    /// `None` only once the board has filled up.
    pub food: Option<Cell>,
    pub field: Field,
    pub score: u32,
    /// Pending decay steps to skip after eating.
    pub skip_shrink: u32,
    pub move_rate: u32,
    pub move_timer: u32,
    pub player_controlled: bool,
}

impl Simulation {
    pub fn from_spawn(spawn: &Spawn) -> Result<Self, FieldError> {
        let mut sim = Self::default();
        sim.reset(spawn)?;
        Ok(sim)
    }

    /// Re-initialise for a new session: the grid is resized and cleared,
    /// counters are zeroed. The head cell is not marked until the first move.
    pub fn reset(&mut self, spawn: &Spawn) -> Result<(), FieldError> {
        if self.field.width() == spawn.width && self.field.height() == spawn.height {
            self.field.clear();
        } else {
            self.field = Field::new(spawn.width, spawn.height)?;
        }
        self.head = spawn.head;
        self.dir = spawn.dir;
        self.len = spawn.len;
        self.food = Some(spawn.food);
        self.score = 0;
        self.skip_shrink = 0;
        self.move_rate = spawn.move_rate;
        self.move_timer = 0;
        self.player_controlled = spawn.player_controlled;
        Ok(())
    }

    /// Advance the world by one frame.
    pub fn tick<R: RngCore + ?Sized>(&mut self, inputs: &InputEvents, rng: &mut R) -> TickOutcome {
        self.move_timer = self.move_timer.saturating_add(1).max(1);

        if self.player_controlled {
            self.steer(inputs);
        } else {
            self.patrol();
        }

        if self.move_timer < self.move_rate {
            return TickOutcome::Idle;
        }

        if self.skip_shrink > 0 {
            self.skip_shrink -= 1;
        } else {
            self.field.decay();
        }
        self.move_timer = 0;

        let (x, y) = self.dir.offset(self.head.x as i32, self.head.y as i32);
        let Some(next) = self.field.cell_at(x, y) else {
            debug!(
                "Head at ({}, {}) left the field heading {}",
                self.head.x,
                self.head.y,
                self.dir.name()
            );
            return TickOutcome::Exited;
        };

        self.head = next;
        self.field.set(next, self.len);

        if self.food != Some(next) {
            return TickOutcome::Moved;
        }

        self.len += 1;
        self.skip_shrink += 1;
        self.score += 1;
        match random_free_cell(&self.field, self.food, rng) {
            FreeCell::Found(cell) => {
                debug!(
                    "Ate food at ({}, {}). Score: {}, next food at ({}, {})",
                    next.x, next.y, self.score, cell.x, cell.y
                );
                self.food = Some(cell);
                TickOutcome::Ate
            }
            FreeCell::BoardFull => {
                self.food = None;
                TickOutcome::BoardFull
            }
        }
    }

    /// Commit the highest-priority freshly pressed key that is a genuine turn.
    /// Presses along the current axis never mask a turn on the same frame.
    fn steer(&mut self, inputs: &InputEvents) {
        let turn = STEER_KEYS
            .iter()
            .find(|&&(key, dir)| inputs.is_pressed(key) && dir.is_ortho_to(self.dir));

        if let Some(&(_, dir)) = turn {
            self.dir = dir;
            self.move_timer = self.move_rate;
        }
    }

    /// Clockwise trace of the field border.
    fn patrol(&mut self) {
        let (x, y) = (self.head.x, self.head.y);
        let right = self.field.width() - 1;
        let bottom = self.field.height() - 1;

        self.dir = if y == 0 && x < right {
            Direction::Right
        } else if x == right && y < bottom {
            Direction::Down
        } else if y == bottom && x > 0 {
            Direction::Left
        } else {
            Direction::Up
        };
    }
}
