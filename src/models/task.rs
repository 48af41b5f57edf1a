use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Pending,
    Completed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Completed => "completed",
        }
    }
}

impl FromStr for TaskStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(TaskStatus::Pending),
            "completed" | "done" => Ok(TaskStatus::Completed),
            _ => Err(anyhow::anyhow!("Unknown task status: {}", s)),
        }
    }
}

/// A task definition, instantiated once per day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskTemplate {
    pub id: String,
    pub label: String,
    pub reward: u32,
}

impl TaskTemplate {
    pub fn new(id: impl Into<String>, label: impl Into<String>, reward: u32) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            reward,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub id: String,
    pub label: String,
    pub status: TaskStatus,
    /// Fixed when the task is created.
    pub reward_points: u32,
}

impl Task {
    pub fn from_template(template: &TaskTemplate) -> Self {
        Self {
            id: template.id.clone(),
            label: template.label.clone(),
            status: TaskStatus::Pending,
            reward_points: template.reward,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }
}
