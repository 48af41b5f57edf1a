//! Calorie progress, daily tasks and XP streaks for a terminal dashboard.
//!
//! [`engine`] holds the state model; [`tui`] renders it with ratatui.

pub mod cli;
pub mod config;
pub mod engine;
pub mod models;
pub mod tui;
pub mod utils;
