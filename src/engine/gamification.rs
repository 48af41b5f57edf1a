//! Points, level, streak and the day's task list.
//!
//! The engine is the single owner of this state. Points are never stored as
//! a running total: they are derived from the XP banked on previous days plus
//! the rewards of today's completed tasks, so completion and XP cannot drift.

use log::{debug, info};
use std::num::NonZeroU32;

use super::error::{ModelError, Result};
use super::levels::derive_level;
use super::progress::{validate_goal, CalorieProgress};
use crate::models::{DashboardStats, Meal, Streak, Task, TaskStatus, TaskTemplate};

pub const DEFAULT_MEAL_HISTORY: usize = 5;

/// A day-boundary event supplied by whatever keeps time for the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayBoundary {
    /// Whether the day being closed counts towards the streak.
    pub qualified: bool,
    /// Whole days that passed without a rollover (app closed, machine asleep).
    pub days_skipped: u32,
}

impl DayBoundary {
    pub fn next_day(qualified: bool) -> Self {
        Self {
            qualified,
            days_skipped: 0,
        }
    }
}

/// How the host decides whether a day qualifies for the streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualifyRule {
    /// Every task on a non-empty list is completed.
    AllTasks,
    /// At least this many tasks are completed.
    AtLeast(usize),
}

#[derive(Debug, Clone)]
pub struct GamificationEngine {
    calories_goal: NonZeroU32,
    calories_consumed: u32,
    templates: Vec<TaskTemplate>,
    tasks: Vec<Task>,
    banked_points: u32,
    streak: Streak,
    meals: Vec<Meal>,
    meal_history: usize,
}

impl GamificationEngine {
    /// Build an engine for a fresh day.
    ///
    /// Fails with `InvalidGoal` for a non-positive goal and `DuplicateTask`
    /// when two templates share an id.
    pub fn new(calories_goal: i64, templates: Vec<TaskTemplate>) -> Result<Self> {
        let calories_goal = validate_goal(calories_goal)?;
        for (i, template) in templates.iter().enumerate() {
            if templates[..i].iter().any(|t| t.id == template.id) {
                return Err(ModelError::DuplicateTask(template.id.clone()));
            }
        }
        let tasks = templates.iter().map(Task::from_template).collect();

        Ok(Self {
            calories_goal,
            calories_consumed: 0,
            templates,
            tasks,
            banked_points: 0,
            streak: Streak::default(),
            meals: Vec::new(),
            meal_history: DEFAULT_MEAL_HISTORY,
        })
    }

    /// Keep at most `n` meals in the recent list (at least one).
    pub fn with_meal_history(mut self, n: usize) -> Self {
        self.meal_history = n.max(1);
        self.meals.truncate(self.meal_history);
        self
    }

    // ─── Read side ───────────────────────────────────────────────────────────

    pub fn snapshot(&self) -> DashboardStats {
        let points = self.points();
        DashboardStats {
            calories_consumed: self.calories_consumed,
            calories_goal: self.calories_goal.get(),
            streak_days: self.streak.current,
            points,
            level: derive_level(points),
        }
    }

    pub fn tasks_for_today(&self) -> &[Task] {
        &self.tasks
    }

    pub fn recent_meals(&self) -> &[Meal] {
        &self.meals
    }

    pub fn streak(&self) -> Streak {
        self.streak
    }

    pub fn calorie_progress(&self) -> CalorieProgress {
        CalorieProgress::new(self.calories_consumed, self.calories_goal)
    }

    /// Rewards still up for grabs today.
    pub fn available_xp(&self) -> u32 {
        self.tasks
            .iter()
            .filter(|t| !t.is_completed())
            .fold(0u32, |acc, t| acc.saturating_add(t.reward_points))
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.is_completed()).count()
    }

    pub fn day_qualifies(&self, rule: QualifyRule) -> bool {
        match rule {
            QualifyRule::AllTasks => {
                !self.tasks.is_empty() && self.tasks.iter().all(Task::is_completed)
            }
            QualifyRule::AtLeast(n) => self.completed_count() >= n,
        }
    }

    fn points(&self) -> u32 {
        self.banked_points.saturating_add(self.earned_today())
    }

    fn earned_today(&self) -> u32 {
        self.tasks
            .iter()
            .filter(|t| t.is_completed())
            .fold(0u32, |acc, t| acc.saturating_add(t.reward_points))
    }

    // ─── Task transitions ────────────────────────────────────────────────────

    /// Pending → Completed. Completing an already completed task is a no-op.
    pub fn complete_task(&mut self, id: &str) -> Result<DashboardStats> {
        self.set_status(id, TaskStatus::Completed)
    }

    /// Completed → Pending, the exact inverse of [`Self::complete_task`].
    pub fn uncomplete_task(&mut self, id: &str) -> Result<DashboardStats> {
        self.set_status(id, TaskStatus::Pending)
    }

    /// Flip a task between Pending and Completed.
    pub fn toggle_task(&mut self, id: &str) -> Result<DashboardStats> {
        let target = match self.find(id)?.status {
            TaskStatus::Pending => TaskStatus::Completed,
            TaskStatus::Completed => TaskStatus::Pending,
        };
        self.set_status(id, target)
    }

    fn find(&self, id: &str) -> Result<&Task> {
        self.tasks
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| ModelError::UnknownTask(id.to_string()))
    }

    fn set_status(&mut self, id: &str, status: TaskStatus) -> Result<DashboardStats> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| ModelError::UnknownTask(id.to_string()))?;

        if task.status == status {
            debug!("task {} already {}, ignoring", id, status.as_str());
        } else {
            task.status = status;
            debug!(
                "task {} -> {} ({} XP)",
                id,
                status.as_str(),
                task.reward_points
            );
        }
        Ok(self.snapshot())
    }

    /// Append a task to today's list only; templates are untouched.
    pub fn add_task(&mut self, template: TaskTemplate) -> Result<DashboardStats> {
        if self.tasks.iter().any(|t| t.id == template.id) {
            return Err(ModelError::DuplicateTask(template.id));
        }
        self.tasks.push(Task::from_template(&template));
        Ok(self.snapshot())
    }

    /// Drop a pending task from today's list.
    ///
    /// Completed tasks cannot be removed, since that would take points away
    /// through a path other than [`Self::uncomplete_task`].
    pub fn remove_task(&mut self, id: &str) -> Result<Task> {
        let idx = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| ModelError::UnknownTask(id.to_string()))?;
        if self.tasks[idx].is_completed() {
            return Err(ModelError::TaskCompleted(id.to_string()));
        }
        Ok(self.tasks.remove(idx))
    }

    // ─── Meals ───────────────────────────────────────────────────────────────

    /// Add a meal's calories to today's total. Points are not affected.
    pub fn log_meal(&mut self, meal: Meal) -> DashboardStats {
        self.calories_consumed = self.calories_consumed.saturating_add(meal.calories);
        debug!("logged {} ({} kcal)", meal.name, meal.calories);
        self.meals.insert(0, meal);
        self.meals.truncate(self.meal_history);
        self.snapshot()
    }

    // ─── Day boundary ────────────────────────────────────────────────────────

    /// Close one day for the streak. The only writer of the streak counter.
    pub fn record_streak_day(&mut self, qualified: bool) -> DashboardStats {
        self.streak = self.streak.advance(qualified);
        self.snapshot()
    }

    /// Close the current day and start the next one.
    ///
    /// Today's completed XP is banked, the task list is rebuilt from the
    /// templates, and calories and meals start from zero.
    pub fn on_day_rollover(&mut self, boundary: DayBoundary) -> DashboardStats {
        self.record_streak_day(boundary.qualified);
        if boundary.days_skipped > 0 {
            self.record_streak_day(false);
        }

        self.banked_points = self.points();
        self.tasks = self.templates.iter().map(Task::from_template).collect();
        self.calories_consumed = 0;
        self.meals.clear();

        let stats = self.snapshot();
        info!(
            "day rollover: qualified={} skipped={} streak={} points={}",
            boundary.qualified, boundary.days_skipped, stats.streak_days, stats.points
        );
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::levels::Level;
    use chrono::NaiveTime;

    fn dashboard_templates() -> Vec<TaskTemplate> {
        vec![
            TaskTemplate::new("log-breakfast", "Log breakfast", 50),
            TaskTemplate::new("morning-stack", "Take morning stack", 30),
            TaskTemplate::new("scan-lunch", "Scan lunch", 50),
            TaskTemplate::new("evening-meditation", "Evening meditation", 40),
        ]
    }

    fn engine() -> GamificationEngine {
        GamificationEngine::new(2200, dashboard_templates()).unwrap()
    }

    fn completed_sum(engine: &GamificationEngine) -> u32 {
        engine
            .tasks_for_today()
            .iter()
            .filter(|t| t.is_completed())
            .map(|t| t.reward_points)
            .sum()
    }

    #[test]
    fn test_fresh_engine() {
        let engine = engine();
        let stats = engine.snapshot();
        assert_eq!(stats.points, 0);
        assert_eq!(stats.level, 1);
        assert_eq!(stats.streak_days, 0);
        assert_eq!(stats.calories_goal, 2200);
        assert_eq!(engine.available_xp(), 170);
    }

    #[test]
    fn test_invalid_goal_rejected() {
        let err = GamificationEngine::new(0, dashboard_templates()).unwrap_err();
        assert_eq!(err, ModelError::InvalidGoal(0));
        assert!(GamificationEngine::new(-2200, vec![]).is_err());
    }

    #[test]
    fn test_duplicate_template_rejected() {
        let templates = vec![
            TaskTemplate::new("a", "A", 10),
            TaskTemplate::new("a", "Again", 20),
        ];
        let err = GamificationEngine::new(2000, templates).unwrap_err();
        assert_eq!(err, ModelError::DuplicateTask("a".to_string()));
    }

    #[test]
    fn test_complete_first_two_then_all() {
        let mut engine = engine();
        engine.complete_task("log-breakfast").unwrap();
        let stats = engine.complete_task("morning-stack").unwrap();
        assert_eq!(stats.points, 80);
        assert_eq!(engine.available_xp(), 90);

        engine.complete_task("scan-lunch").unwrap();
        let stats = engine.complete_task("evening-meditation").unwrap();
        assert_eq!(stats.points, 170);
        assert_eq!(stats.level, 2);
        assert_eq!(engine.available_xp(), 0);
    }

    #[test]
    fn test_complete_is_idempotent() {
        let mut engine = engine();
        let first = engine.complete_task("scan-lunch").unwrap();
        let second = engine.complete_task("scan-lunch").unwrap();
        assert_eq!(first, second);
        assert_eq!(second.points, 50);
    }

    #[test]
    fn test_uncomplete_pending_is_noop() {
        let mut engine = engine();
        let stats = engine.uncomplete_task("scan-lunch").unwrap();
        assert_eq!(stats.points, 0);
    }

    #[test]
    fn test_complete_then_uncomplete_round_trip() {
        let mut engine = engine();
        engine.complete_task("log-breakfast").unwrap();
        let before = engine.snapshot();

        engine.complete_task("evening-meditation").unwrap();
        let after = engine.uncomplete_task("evening-meditation").unwrap();
        assert_eq!(after.points, before.points);
        assert_eq!(after.level, before.level);
    }

    #[test]
    fn test_unknown_task() {
        let mut engine = engine();
        engine.complete_task("log-breakfast").unwrap();

        let err = engine.complete_task("unknown-id").unwrap_err();
        assert_eq!(err, ModelError::UnknownTask("unknown-id".to_string()));
        assert!(engine.uncomplete_task("unknown-id").is_err());
        assert!(engine.toggle_task("unknown-id").is_err());
        assert_eq!(engine.snapshot().points, 50);
    }

    #[test]
    fn test_toggle_flips_state() {
        let mut engine = engine();
        assert_eq!(engine.toggle_task("morning-stack").unwrap().points, 30);
        assert_eq!(engine.toggle_task("morning-stack").unwrap().points, 0);
    }

    #[test]
    fn test_points_match_completed_rewards_over_sequence() {
        let mut engine = engine();
        let ids = ["log-breakfast", "morning-stack", "scan-lunch", "evening-meditation"];
        // Deterministic walk mixing completes, undos and repeats.
        for step in 0..200usize {
            let id = ids[(step * 7 + step / 3) % ids.len()];
            let result = match step % 5 {
                0 | 2 => engine.complete_task(id),
                1 => engine.uncomplete_task(id),
                3 => engine.toggle_task(id),
                _ => engine.complete_task(id),
            };
            let stats = result.unwrap();
            assert_eq!(stats.points, completed_sum(&engine), "step {step}");
            assert_eq!(stats.level, derive_level(stats.points));
            assert_eq!(stats.points + engine.available_xp(), 170);
        }
    }

    #[test]
    fn test_order_preserved_across_toggles() {
        let mut engine = engine();
        engine.complete_task("scan-lunch").unwrap();
        engine.toggle_task("log-breakfast").unwrap();
        let ids: Vec<&str> = engine.tasks_for_today().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(
            ids,
            ["log-breakfast", "morning-stack", "scan-lunch", "evening-meditation"]
        );
    }

    #[test]
    fn test_add_and_remove_tasks() {
        let mut engine = engine();
        engine
            .add_task(TaskTemplate::new("cold-plunge", "Cold plunge", 60))
            .unwrap();
        assert_eq!(engine.available_xp(), 230);

        let err = engine
            .add_task(TaskTemplate::new("scan-lunch", "Scan lunch", 50))
            .unwrap_err();
        assert_eq!(err, ModelError::DuplicateTask("scan-lunch".to_string()));

        let removed = engine.remove_task("cold-plunge").unwrap();
        assert_eq!(removed.reward_points, 60);
        assert_eq!(engine.available_xp(), 170);
        assert!(matches!(
            engine.remove_task("cold-plunge"),
            Err(ModelError::UnknownTask(_))
        ));
    }

    #[test]
    fn test_remove_completed_task_refused() {
        let mut engine = engine();
        engine.complete_task("log-breakfast").unwrap();
        let err = engine.remove_task("log-breakfast").unwrap_err();
        assert_eq!(err, ModelError::TaskCompleted("log-breakfast".to_string()));
        assert_eq!(engine.snapshot().points, 50);
        assert_eq!(engine.tasks_for_today().len(), 4);
    }

    #[test]
    fn test_streak_days() {
        let mut engine = engine();
        assert_eq!(engine.record_streak_day(true).streak_days, 1);
        assert_eq!(engine.record_streak_day(true).streak_days, 2);
        assert_eq!(engine.record_streak_day(false).streak_days, 0);
        assert_eq!(engine.streak().best, 2);
    }

    #[test]
    fn test_toggling_never_touches_streak() {
        let mut engine = engine();
        engine.record_streak_day(true);
        for id in ["log-breakfast", "morning-stack", "scan-lunch", "evening-meditation"] {
            engine.complete_task(id).unwrap();
        }
        engine.uncomplete_task("scan-lunch").unwrap();
        assert_eq!(engine.snapshot().streak_days, 1);
    }

    #[test]
    fn test_rollover_banks_points_and_resets_tasks() {
        let mut engine = engine();
        engine.complete_task("log-breakfast").unwrap();
        engine.complete_task("morning-stack").unwrap();
        engine.log_meal(Meal::quick(600, NaiveTime::from_hms_opt(8, 0, 0).unwrap()));

        let stats = engine.on_day_rollover(DayBoundary::next_day(false));
        assert_eq!(stats.points, 80);
        assert_eq!(stats.calories_consumed, 0);
        assert_eq!(stats.streak_days, 0);
        assert_eq!(engine.available_xp(), 170);
        assert!(engine.tasks_for_today().iter().all(|t| !t.is_completed()));
        assert!(engine.recent_meals().is_empty());

        // Undo on the new day cannot claw back banked XP.
        engine.complete_task("scan-lunch").unwrap();
        let stats = engine.uncomplete_task("scan-lunch").unwrap();
        assert_eq!(stats.points, 80);
    }

    #[test]
    fn test_rollover_after_gap_resets_streak() {
        let mut engine = engine();
        engine.on_day_rollover(DayBoundary::next_day(true));
        engine.on_day_rollover(DayBoundary::next_day(true));
        assert_eq!(engine.snapshot().streak_days, 2);

        let stats = engine.on_day_rollover(DayBoundary {
            qualified: true,
            days_skipped: 2,
        });
        assert_eq!(stats.streak_days, 0);
        assert_eq!(engine.streak().best, 3);

        let stats = engine.on_day_rollover(DayBoundary::next_day(true));
        assert_eq!(stats.streak_days, 1);
    }

    #[test]
    fn test_day_qualifies() {
        let mut engine = engine();
        assert!(!engine.day_qualifies(QualifyRule::AllTasks));
        assert!(engine.day_qualifies(QualifyRule::AtLeast(0)));

        engine.complete_task("log-breakfast").unwrap();
        engine.complete_task("morning-stack").unwrap();
        assert!(engine.day_qualifies(QualifyRule::AtLeast(2)));
        assert!(!engine.day_qualifies(QualifyRule::AtLeast(3)));

        engine.complete_task("scan-lunch").unwrap();
        engine.complete_task("evening-meditation").unwrap();
        assert!(engine.day_qualifies(QualifyRule::AllTasks));

        let empty = GamificationEngine::new(2000, vec![]).unwrap();
        assert!(!empty.day_qualifies(QualifyRule::AllTasks));
    }

    #[test]
    fn test_log_meal_updates_calories_only() {
        let mut engine = engine();
        engine.complete_task("log-breakfast").unwrap();
        let stats = engine.log_meal(Meal::quick(420, NaiveTime::from_hms_opt(8, 30, 0).unwrap()));
        assert_eq!(stats.calories_consumed, 420);
        assert_eq!(stats.points, 50);
        assert_eq!(engine.calorie_progress().remaining_kcal(), 1780);
    }

    #[test]
    fn test_meal_history_is_capped_newest_first() {
        let mut engine = engine().with_meal_history(2);
        let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
        for kcal in [100, 200, 300] {
            engine.log_meal(Meal::quick(kcal, noon));
        }
        let kcals: Vec<u32> = engine.recent_meals().iter().map(|m| m.calories).collect();
        assert_eq!(kcals, [300, 200]);
        assert_eq!(engine.snapshot().calories_consumed, 600);
    }

    #[test]
    fn test_huge_rewards_saturate() {
        let templates = vec![
            TaskTemplate::new("a", "A", 3_000_000_000),
            TaskTemplate::new("b", "B", 3_000_000_000),
        ];
        let mut engine = GamificationEngine::new(2000, templates).unwrap();
        assert_eq!(engine.available_xp(), u32::MAX);

        engine.complete_task("a").unwrap();
        let stats = engine.complete_task("b").unwrap();
        assert_eq!(stats.points, u32::MAX);
        assert_eq!(stats.level, Level::max_level());
        assert_eq!(engine.available_xp(), 0);
    }
}
