use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::game::DEFAULT_DIFFICULTY;

/// Smallest playable field: the head spawns one column in with food on the
/// far column, and the title patrol needs two rows to loop.
const MIN_FIELD_COLUMNS: u32 = 3;
const MIN_FIELD_ROWS: u32 = 2;

/// Which application state runs first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartState {
    Title,
    Play,
}

/// Runtime settings, read from an optional JSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Initial window size in physical pixels
    pub window_width: u32,
    pub window_height: u32,
    /// Size of the drawing canvas; scaled up to fill the window
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub tile_size: u32,
    /// Target frames (and simulation ticks) per second
    pub frame_rate: u32,
    pub start_state: StartState,
    /// Index into the difficulty table; out-of-range values saturate
    pub difficulty: i64,
    /// Seed for food placement; random when absent
    pub seed: Option<u64>,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: 800,
            window_height: 600,
            canvas_width: 160,
            canvas_height: 144,
            tile_size: 16,
            frame_rate: 60,
            start_state: StartState::Play,
            difficulty: DEFAULT_DIFFICULTY as i64,
            seed: None,
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("Invalid settings in {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.canvas_width == 0 || self.canvas_height == 0 {
            bail!("canvas size must be non-zero");
        }
        if self.tile_size == 0 {
            bail!("tile size must be non-zero");
        }
        if self.frame_rate == 0 {
            bail!("frame rate must be non-zero");
        }
        let columns = self.canvas_width / self.tile_size;
        // One tile row is taken by the status bar.
        let rows = (self.canvas_height / self.tile_size).saturating_sub(1);
        if columns < MIN_FIELD_COLUMNS || rows < MIN_FIELD_ROWS {
            bail!(
                "canvas {}x{} with {}px tiles gives a {}x{} field, need at least {}x{}",
                self.canvas_width,
                self.canvas_height,
                self.tile_size,
                columns,
                rows,
                MIN_FIELD_COLUMNS,
                MIN_FIELD_ROWS
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.canvas_width, 160);
        assert_eq!(settings.canvas_height, 144);
        assert_eq!(settings.tile_size, 16);
        assert_eq!(settings.difficulty, 3);
        assert_eq!(settings.start_state, StartState::Play);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "start_state": "title", "seed": 5 }"#).unwrap();
        assert_eq!(settings.start_state, StartState::Title);
        assert_eq!(settings.seed, Some(5));
        assert_eq!(settings.frame_rate, 60);
    }

    #[test]
    fn test_rejects_zero_tile() {
        assert!(Settings::from_json(r#"{ "tile_size": 0 }"#).is_err());
        assert!(Settings::from_json(r#"{ "frame_rate": 0 }"#).is_err());
        assert!(Settings::from_json("not json").is_err());
    }

    #[test]
    fn test_rejects_canvas_smaller_than_playable_field() {
        let narrow = Settings {
            canvas_width: 20,
            ..Settings::default()
        };
        let err = narrow.validate().unwrap_err();
        assert!(err.to_string().contains("1x8 field"));

        let short = Settings {
            canvas_height: 40,
            ..Settings::default()
        };
        assert!(short.validate().is_err());

        let smallest = Settings {
            canvas_width: 48,
            canvas_height: 48,
            ..Settings::default()
        };
        assert!(smallest.validate().is_ok());
    }

    #[test]
    fn test_load_missing_file() {
        let err = Settings::load(Path::new("/nonexistent/tilesnake.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read settings"));
    }
}
