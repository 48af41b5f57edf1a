use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::engine::{GamificationEngine, QualifyRule};
use crate::models::TaskTemplate;

fn default_name() -> String {
    "Biohacker".to_string()
}
fn default_calorie_goal() -> i64 {
    2200
}
fn default_tick_rate_ms() -> u64 {
    500
}
fn default_meal_history() -> usize {
    5
}
fn default_tasks() -> Vec<TaskTemplate> {
    vec![
        TaskTemplate::new("log-breakfast", "Log breakfast", 50),
        TaskTemplate::new("morning-stack", "Take morning stack", 30),
        TaskTemplate::new("scan-lunch", "Scan lunch", 50),
        TaskTemplate::new("evening-meditation", "Evening meditation", 40),
    ]
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default = "default_name")]
    pub name: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Daily target in kcal. Must be positive; checked when the engine is built.
    #[serde(default = "default_calorie_goal")]
    pub calorie_goal: i64,
}

impl Default for NutritionConfig {
    fn default() -> Self {
        Self {
            calorie_goal: default_calorie_goal(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StreakConfig {
    /// Tasks that must be completed for a day to count. Unset = all of them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_completed_tasks: Option<usize>,
}

impl StreakConfig {
    pub fn rule(&self) -> QualifyRule {
        match self.min_completed_tasks {
            Some(n) => QualifyRule::AtLeast(n),
            None => QualifyRule::AllTasks,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    #[serde(default = "default_meal_history")]
    pub meal_history: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            meal_history: default_meal_history(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default)]
    pub nutrition: NutritionConfig,
    #[serde(default)]
    pub streak: StreakConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default = "default_tasks")]
    pub tasks: Vec<TaskTemplate>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            profile: ProfileConfig::default(),
            nutrition: NutritionConfig::default(),
            streak: StreakConfig::default(),
            ui: UiConfig::default(),
            tasks: default_tasks(),
        }
    }
}

impl AppConfig {
    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("", "", "biodash")
            .context("Could not determine project directories")
    }

    pub fn config_path() -> Result<PathBuf> {
        let dirs = Self::project_dirs()?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Reading {:?}", path))?;
        let config: AppConfig = toml::from_str(&content).context("Parsing config.toml")?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).context("Serializing config")?;
        std::fs::write(path, content).with_context(|| format!("Writing {:?}", path))?;
        Ok(())
    }

    /// Engine for a fresh day using this config's goal and task templates.
    pub fn build_engine(&self) -> Result<GamificationEngine> {
        let engine = GamificationEngine::new(self.nutrition.calorie_goal, self.tasks.clone())
            .context("Invalid dashboard configuration")?;
        Ok(engine.with_meal_history(self.ui.meal_history))
    }
}
