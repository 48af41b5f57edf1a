use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

use crate::config::AppConfig;
use crate::engine::levels::{level_progress, xp_to_next_level, LEVELS};
use crate::engine::{CalorieProgress, GamificationEngine, Level};
use crate::models::{DashboardStats, Task};
use crate::utils::format::{format_number, pad_display, progress_bar};

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const GREEN: &str = "\x1b[38;2;0;208;132m";
const AMBER: &str = "\x1b[33m";
const PURPLE: &str = "\x1b[38;2;124;58;237m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";

// ─── Summary ─────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct Summary {
    pub stats: DashboardStats,
    pub calories: CalorieProgress,
    pub level_title: &'static str,
    pub xp_to_next_level: Option<u32>,
    pub available_xp: u32,
    pub tasks: Vec<Task>,
}

impl Summary {
    pub fn from_engine(engine: &GamificationEngine) -> Self {
        let stats = engine.snapshot();
        Summary {
            stats,
            calories: engine.calorie_progress(),
            level_title: Level::for_xp(stats.points).title,
            xp_to_next_level: xp_to_next_level(stats.points),
            available_xp: engine.available_xp(),
            tasks: engine.tasks_for_today().to_vec(),
        }
    }
}

pub fn handle_summary(config: &AppConfig, engine: &GamificationEngine, json: bool) -> Result<()> {
    let summary = Summary::from_engine(engine);

    if json {
        let out = serde_json::to_string_pretty(&summary).context("Serializing summary")?;
        println!("{}", out);
        return Ok(());
    }

    let stats = &summary.stats;
    let calories = &summary.calories;

    println!();
    println_colored!(
        BOLD,
        "  {} · Level {} {} · {} XP",
        config.profile.name,
        stats.level,
        summary.level_title,
        format_number(stats.points)
    );
    println_colored!(GREEN, "  ⚡ {} day streak", stats.streak_days);
    println!();

    let color = if calories.over_goal() { AMBER } else { GREEN };
    println_colored!(
        color,
        "  Calories  {}  {} / {} kcal  ({}%)",
        progress_bar(calories.ratio, 20),
        format_number(calories.consumed),
        format_number(calories.goal),
        calories.display_percent()
    );
    println!();

    println_colored!(GREEN, "  Today's Tasks  ·  {} XP available", summary.available_xp);
    for task in &summary.tasks {
        let icon = if task.is_completed() { "●" } else { "○" };
        let color = if task.is_completed() { DIM } else { BOLD };
        print!("  {}{} {}\x1b[0m", color, icon, pad_display(&task.label, 28));
        println_colored!(PURPLE, "+{} XP", task.reward_points);
    }
    println!();
    Ok(())
}

// ─── Levels ──────────────────────────────────────────────────────────────────

pub fn handle_levels(engine: &GamificationEngine) -> Result<()> {
    let points = engine.snapshot().points;
    let current = Level::for_xp(points);

    println!();
    for level in LEVELS {
        let line = format!(
            "  {:>2}  {:>6} XP  {}",
            level.level,
            format_number(level.xp_required),
            level.title
        );
        if level.level == current.level {
            println_colored!(
                GREEN,
                "{}  ← {}",
                line,
                progress_bar(level_progress(points), 10)
            );
        } else {
            println_colored!(DIM, "{}", line);
        }
    }
    println!();
    Ok(())
}

// ─── Init ────────────────────────────────────────────────────────────────────

pub fn handle_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        println!(
            "Config already exists at {}. Use --force to overwrite.",
            path.display()
        );
        return Ok(());
    }
    AppConfig::default().save_to(path)?;
    println_colored!(GREEN, "  ✓ Wrote {}", path.display());
    Ok(())
}
