use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::config::Settings;
use crate::game::{DifficultyInfo, Field, Simulation, clamp_difficulty, difficulty};

/// Everything the active state works on between frames.
pub struct SessionContext {
    /// Frames since the active state was entered; 0 means its first tick is due.
    pub timer: u64,
    pub tile_size: u32,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub frame_rate: u32,
    pub difficulty_index: usize,
    pub difficulty: DifficultyInfo,
    pub simulation: Simulation,
    pub rng: SmallRng,
}

impl SessionContext {
    pub fn new(settings: &Settings) -> Self {
        let rng = match settings.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        let difficulty_index = clamp_difficulty(settings.difficulty);
        Self {
            timer: 0,
            tile_size: settings.tile_size.max(1),
            canvas_width: settings.canvas_width,
            canvas_height: settings.canvas_height,
            frame_rate: settings.frame_rate.max(1),
            difficulty_index,
            difficulty: difficulty(difficulty_index as i64),
            simulation: Simulation::default(),
            rng,
        }
    }

    /// Field dimensions for the configured canvas.
    pub fn field_size(&self) -> (u32, u32) {
        Field::size_for_canvas(self.canvas_width, self.canvas_height, self.tile_size)
    }

    /// Move the difficulty selection by `step`, saturating at the table ends.
    /// Returns true if the selection changed.
    pub fn step_difficulty(&mut self, step: i64) -> bool {
        let next = clamp_difficulty(self.difficulty_index as i64 + step);
        if next == self.difficulty_index {
            return false;
        }
        self.difficulty_index = next;
        self.difficulty = difficulty(next as i64);
        true
    }
}
