//! Calorie progress math for the dashboard ring.
//!
//! The ring can only show `[0, 1]` of a turn, but the percentage text is
//! allowed to read "108%", so both values are returned side by side.

use serde::Serialize;
use std::num::NonZeroU32;

use super::error::{ModelError, Result};

const FULL_TURN_DEGREES: f64 = 360.0;

/// Consumed-to-goal progress for one day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalorieProgress {
    pub consumed: u32,
    pub goal: u32,
    /// `consumed / goal` clamped to `[0, 1]`, for rendering.
    pub ratio: f64,
    /// Raw `consumed / goal * 100`, unclamped, for display text.
    pub percent: f64,
}

impl CalorieProgress {
    /// Progress against a goal that is already known to be positive.
    pub fn new(consumed: u32, goal: NonZeroU32) -> Self {
        let goal = goal.get();
        let raw = consumed as f64 / goal as f64;
        Self {
            consumed,
            goal,
            ratio: raw.clamp(0.0, 1.0),
            percent: raw * 100.0,
        }
    }

    /// Percentage rounded to the nearest whole number.
    pub fn display_percent(&self) -> u32 {
        self.percent.round() as u32
    }

    pub fn angle_degrees(&self) -> f64 {
        progress_angle_degrees(self.ratio)
    }

    /// Calories left before the goal is reached; zero once it is met.
    pub fn remaining_kcal(&self) -> u32 {
        self.goal.saturating_sub(self.consumed)
    }

    pub fn over_goal(&self) -> bool {
        self.consumed > self.goal
    }
}

/// Convert a calorie pair into a bounded progress value.
///
/// Fails with [`ModelError::InvalidGoal`] when `goal <= 0`.
pub fn completion_ratio(consumed: u32, goal: i64) -> Result<CalorieProgress> {
    Ok(CalorieProgress::new(consumed, validate_goal(goal)?))
}

/// Narrow a configured goal to a positive kcal count.
pub fn validate_goal(goal: i64) -> Result<NonZeroU32> {
    u32::try_from(goal)
        .ok()
        .and_then(NonZeroU32::new)
        .ok_or(ModelError::InvalidGoal(goal))
}

/// Map a ratio onto a full turn. Inputs outside `[0, 1]` are clamped so the
/// ring never overshoots.
pub fn progress_angle_degrees(ratio: f64) -> f64 {
    ratio.clamp(0.0, 1.0) * FULL_TURN_DEGREES
}
