//! Progress and gamification model behind the dashboard.

pub mod error;
pub mod gamification;
pub mod levels;
pub mod progress;

pub use error::ModelError;
pub use gamification::{DayBoundary, GamificationEngine, QualifyRule};
pub use levels::{derive_level, Level};
pub use progress::{completion_ratio, progress_angle_degrees, CalorieProgress};
