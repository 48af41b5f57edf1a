use thiserror::Error;

/// Recoverable failures from the progress and gamification model.
///
/// None of these leave the engine in a changed state; callers can drop the
/// error and keep rendering the previous snapshot.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Calorie goal must be positive, got {0}")]
    InvalidGoal(i64),

    #[error("Task '{0}' is not on today's list")]
    UnknownTask(String),

    #[error("Task '{0}' already exists on today's list")]
    DuplicateTask(String),

    #[error("Task '{0}' is completed and cannot be removed")]
    TaskCompleted(String),
}

pub type Result<T, E = ModelError> = std::result::Result<T, E>;
