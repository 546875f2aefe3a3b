//! Tile-grid snake with a decaying trail.
//!
//! - `game`: grid simulation, direction rules, difficulty table, food placement
//! - `input`: edge-triggered key tracking
//! - `state`: title/play lifecycle and the per-frame driver
//! - `render`: draw-surface contract and a frame-buffer renderer
//! - `config`, `logging`: settings file and logger set-up for the binary

pub mod config;
pub mod game;
pub mod input;
pub mod logging;
pub mod render;
pub mod state;
