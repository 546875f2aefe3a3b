//! Grid simulation for the snake game.
//!
//! No windowing, drawing or timing lives here; the simulation is advanced one
//! frame at a time by whichever application state owns it.

pub mod difficulty;
pub mod direction;
pub mod field;
pub mod random;
pub mod simulation;

pub use difficulty::{
    DEFAULT_DIFFICULTY, DIFFICULTY_COUNT, DifficultyInfo, clamp_difficulty, difficulty,
};
pub use direction::Direction;
pub use field::{Cell, Field, FieldError, MAX_FIELD_SIZE};
pub use random::{FreeCell, random_free_cell, random_range};
pub use simulation::{Simulation, Spawn, TickOutcome};
