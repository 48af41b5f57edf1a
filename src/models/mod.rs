pub mod insight;
pub mod meal;
pub mod stats;
pub mod task;

pub use insight::Insight;
pub use meal::{Macros, Meal, MealSlot};
pub use stats::{DashboardStats, Streak};
pub use task::{Task, TaskStatus, TaskTemplate};
