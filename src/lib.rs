//! Grid snake simulation engine plus a ratatui terminal front-end.
//!
//! The engine (`game`, `step`, `snake`, `food`, `input`, `score`) is pure of
//! terminal concerns and driven entirely through [`game::GameState`]; the
//! remaining modules wrap it for interactive play.

pub mod config;
pub mod food;
pub mod game;
pub mod input;
pub mod renderer;
pub mod score;
pub mod snake;
pub mod step;
pub mod terminal_runtime;
pub mod ui;
