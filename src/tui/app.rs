use anyhow::Result;
use chrono::{Local, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use log::{info, warn};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::config::AppConfig;
use crate::engine::{DayBoundary, GamificationEngine, ModelError};
use crate::models::{Insight, Meal};
use crate::tui::events::{Event, EventHandler};
use crate::tui::theme;
use crate::tui::widgets::actions::{self, QuickAction};
use crate::tui::widgets::{calories, header, insight, meals, statusbar, tasks};

/// Largest single entry accepted from the calorie prompt.
const MAX_MEAL_KCAL: u32 = 10_000;

#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Dashboard,
    Help,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Normal,
    CalorieInput,
}

pub struct App {
    pub view: View,
    pub config: AppConfig,
    pub engine: GamificationEngine,
    pub insight: Insight,
    pub focus_idx: usize,
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub input_error: Option<String>,
    pub flash: Option<String>,
    /// Local date the engine's task list belongs to.
    pub today: NaiveDate,
}

impl App {
    pub fn new(config: AppConfig, engine: GamificationEngine, today: NaiveDate) -> Self {
        App {
            view: View::Dashboard,
            config,
            engine,
            insight: Insight::default(),
            focus_idx: 0,
            should_quit: false,
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            input_error: None,
            flash: None,
            today,
        }
    }

    pub fn tick(&mut self) {
        self.check_rollover(Local::now().date_naive());
    }

    /// Close out every day between the tracked date and `date`.
    pub fn check_rollover(&mut self, date: NaiveDate) {
        if date <= self.today {
            return;
        }
        let days_skipped = (date - self.today).num_days().saturating_sub(1);
        let qualified = self.engine.day_qualifies(self.config.streak.rule());
        let stats = self.engine.on_day_rollover(DayBoundary {
            qualified,
            days_skipped: u32::try_from(days_skipped).unwrap_or(u32::MAX),
        });
        info!("new day {}: streak {}", date, stats.streak_days);

        self.today = date;
        self.focus_idx = 0;
        self.flash = Some(if qualified {
            format!("New day! Streak is now {} days", stats.streak_days)
        } else {
            "New day. Streak reset, let's start a fresh one".to_string()
        });
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Ignore release/repeat events from terminals that report them
        if key.kind != KeyEventKind::Press {
            return;
        }
        match self.input_mode {
            InputMode::CalorieInput => self.handle_calorie_input(key),
            InputMode::Normal => match self.view {
                View::Dashboard => self.handle_dashboard_key(key),
                View::Help => self.handle_help_key(key),
            },
        }
    }

    fn handle_dashboard_key(&mut self, key: KeyEvent) {
        self.flash = None;

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Char('?') => {
                self.view = View::Help;
            }
            KeyCode::Char('a') => {
                self.input_mode = InputMode::CalorieInput;
                self.input_buffer.clear();
                self.input_error = None;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.focus_idx = self.focus_idx.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let max = self.engine.tasks_for_today().len().saturating_sub(1);
                if self.focus_idx < max {
                    self.focus_idx += 1;
                }
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                self.toggle_focused_task();
            }
            KeyCode::Char(c) => {
                if let Some(action) = QuickAction::from_key(c) {
                    self.flash = Some(format!("{} is not available yet", action.label()));
                }
            }
            _ => {}
        }
    }

    fn handle_help_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
            self.view = View::Dashboard;
        }
    }

    fn handle_calorie_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
                self.input_buffer.clear();
                self.input_error = None;
            }
            KeyCode::Enter => {
                let trimmed = self.input_buffer.trim().to_string();
                if trimmed.is_empty() {
                    self.input_error = Some("Enter calories first (e.g. 420)".to_string());
                    return;
                }
                match trimmed.parse::<u32>() {
                    Ok(kcal) if kcal > 0 && kcal <= MAX_MEAL_KCAL => {
                        let meal = Meal::quick(kcal, Local::now().time());
                        self.engine.log_meal(meal);
                        self.input_mode = InputMode::Normal;
                        self.input_buffer.clear();
                        self.input_error = None;
                    }
                    Ok(_) => {
                        self.input_error =
                            Some(format!("Calories must be between 1 and {}", MAX_MEAL_KCAL));
                    }
                    Err(_) => {
                        self.input_error = Some(format!("'{}' is not a whole number", trimmed));
                    }
                }
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
                self.input_error = None;
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                self.input_buffer.push(c);
                self.input_error = None;
            }
            _ => {}
        }
    }

    fn toggle_focused_task(&mut self) {
        let Some(id) = self
            .engine
            .tasks_for_today()
            .get(self.focus_idx)
            .map(|t| t.id.clone())
        else {
            return;
        };

        match self.engine.toggle_task(&id) {
            Ok(_) => {}
            // Stale id from a tap racing a rollover: keep the current state
            Err(ModelError::UnknownTask(id)) => warn!("ignoring toggle of unknown task {}", id),
            Err(e) => self.flash = Some(e.to_string()),
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        self.draw_dashboard(frame);

        if self.view == View::Help {
            self.draw_help_overlay(frame);
        }
        if self.input_mode == InputMode::CalorieInput {
            self.draw_calorie_input(frame);
        }
    }

    fn draw_dashboard(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(theme::base()), area);

        let outer_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // header
                Constraint::Min(0),    // body
                Constraint::Length(1), // status bar
            ])
            .split(area);

        let stats = self.engine.snapshot();
        header::render(frame, outer_chunks[0], &self.config.profile.name, &stats);
        statusbar::render(frame, outer_chunks[2], self.flash.as_deref());

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(outer_chunks[1]);

        // Left column: calorie ring + quick actions + insight
        let left_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(10), // calories
                Constraint::Length(4),  // quick actions
                Constraint::Min(0),     // insight
            ])
            .split(columns[0]);

        calories::render(frame, left_chunks[0], &self.engine.calorie_progress());
        actions::render(frame, left_chunks[1]);
        insight::render(frame, left_chunks[2], &self.insight);

        // Right column: tasks + meals
        let task_rows = self.engine.tasks_for_today().len() as u16 + 2;
        let right_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(task_rows), Constraint::Min(0)])
            .split(columns[1]);

        tasks::render(
            frame,
            right_chunks[0],
            self.engine.tasks_for_today(),
            self.engine.available_xp(),
            self.focus_idx,
        );
        meals::render(frame, right_chunks[1], self.engine.recent_meals());
    }

    fn draw_help_overlay(&self, frame: &mut Frame) {
        let area = frame.area();
        let popup_area = Rect {
            x: area.width / 4,
            y: area.height / 4,
            width: area.width / 2,
            height: (area.height / 2).max(12),
        }
        .intersection(area);

        frame.render_widget(Clear, popup_area);

        let bindings = [
            ("  [↑ ↓] / j k  ", "Select task"),
            ("  [Space/Enter]", "Complete / undo task"),
            ("  [a]          ", "Log calories"),
            ("  [1-4]        ", "Quick actions"),
            ("  [?]          ", "Toggle help"),
            ("  [Esc] / q    ", "Quit"),
        ];

        let mut help_text = vec![
            Line::from(Span::styled(
                "  Keybindings",
                theme::green().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        for (key, label) in bindings {
            help_text.push(Line::from(vec![
                Span::styled(key, theme::green()),
                Span::styled(format!("  {}", label), theme::dim()),
            ]));
        }

        let block = Block::default()
            .title(Span::styled(" Help ", theme::green()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::green())
            .style(theme::surface());

        frame.render_widget(Paragraph::new(help_text).block(block), popup_area);
    }

    fn draw_calorie_input(&self, frame: &mut Frame) {
        let area = frame.area();
        let height = if self.input_error.is_some() { 7 } else { 5 };

        let popup_area = Rect {
            x: area.width / 4,
            y: (area.height / 2).saturating_sub(3),
            width: area.width / 2,
            height,
        }
        .intersection(area);

        frame.render_widget(Clear, popup_area);

        let mut text = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("  Calories: ", theme::dim()),
                Span::styled(
                    self.input_buffer.as_str(),
                    theme::green().add_modifier(Modifier::BOLD),
                ),
                Span::styled("█", theme::amber()),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "  Type kcal, then [Enter]  ·  [Esc] cancel",
                theme::dim(),
            )),
        ];

        if let Some(err) = &self.input_error {
            text.push(Line::from(""));
            text.push(Line::from(Span::styled(format!("  ✗ {}", err), theme::red())));
        }

        let border_style = if self.input_error.is_some() {
            theme::red()
        } else {
            theme::amber()
        };

        let block = Block::default()
            .title(Span::styled(" Log Meal ", theme::green()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .style(theme::surface());

        frame.render_widget(Paragraph::new(text).block(block), popup_area);
    }
}

/// Run the TUI event loop.
pub fn run(config: AppConfig, engine: GamificationEngine) -> Result<()> {
    let tick_rate = config.ui.tick_rate_ms;
    let mut app = App::new(config, engine, Local::now().date_naive());

    let mut terminal = ratatui::init();
    let events = EventHandler::new(tick_rate);

    let result = loop {
        if let Err(e) = terminal.draw(|frame| app.draw(frame)) {
            break Err(e.into());
        }

        match events.next() {
            Ok(Event::Key(key)) => {
                app.handle_key(key);
                if app.should_quit {
                    break Ok(());
                }
            }
            Ok(Event::Resize) => {}
            Ok(Event::Tick) => app.tick(),
            Err(e) => break Err(e.into()),
        }
    };

    ratatui::restore();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    fn app() -> App {
        let config = AppConfig::default();
        let engine = config.build_engine().unwrap();
        App::new(config, engine, day(10))
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            app.handle_key(press(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_space_toggles_focused_task() {
        let mut app = app();
        app.handle_key(press(KeyCode::Down));
        app.handle_key(press(KeyCode::Char(' ')));
        assert_eq!(app.engine.snapshot().points, 30);

        app.handle_key(press(KeyCode::Enter));
        assert_eq!(app.engine.snapshot().points, 0);
    }

    #[test]
    fn test_focus_stays_in_bounds() {
        let mut app = app();
        app.handle_key(press(KeyCode::Up));
        assert_eq!(app.focus_idx, 0);
        for _ in 0..10 {
            app.handle_key(press(KeyCode::Down));
        }
        assert_eq!(app.focus_idx, 3);
    }

    #[test]
    fn test_log_calories_through_prompt() {
        let mut app = app();
        app.handle_key(press(KeyCode::Char('a')));
        assert_eq!(app.input_mode, InputMode::CalorieInput);

        type_str(&mut app, "42x0");
        app.handle_key(press(KeyCode::Enter));

        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.engine.snapshot().calories_consumed, 420);
        assert_eq!(app.engine.recent_meals().len(), 1);
    }

    #[test]
    fn test_calorie_prompt_rejects_bad_input() {
        let mut app = app();
        app.handle_key(press(KeyCode::Char('a')));
        app.handle_key(press(KeyCode::Enter));
        assert!(app.input_error.is_some());

        type_str(&mut app, "0");
        app.handle_key(press(KeyCode::Enter));
        assert!(app.input_error.is_some());
        assert_eq!(app.input_mode, InputMode::CalorieInput);

        app.handle_key(press(KeyCode::Esc));
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.engine.snapshot().calories_consumed, 0);
    }

    #[test]
    fn test_quick_action_sets_flash() {
        let mut app = app();
        app.handle_key(press(KeyCode::Char('1')));
        assert_eq!(app.flash.as_deref(), Some("Scan Meal is not available yet"));
        app.handle_key(press(KeyCode::Down));
        assert!(app.flash.is_none());
    }

    #[test]
    fn test_rollover_on_next_day() {
        let mut app = app();
        for _ in 0..4 {
            app.handle_key(press(KeyCode::Char(' ')));
            app.handle_key(press(KeyCode::Down));
        }
        assert_eq!(app.engine.snapshot().points, 170);

        app.check_rollover(day(10));
        assert_eq!(app.engine.snapshot().streak_days, 0);

        app.check_rollover(day(11));
        let stats = app.engine.snapshot();
        assert_eq!(stats.streak_days, 1);
        assert_eq!(stats.points, 170);
        assert_eq!(app.engine.available_xp(), 170);
        assert_eq!(app.focus_idx, 0);
        assert_eq!(app.today, day(11));
    }

    #[test]
    fn test_rollover_after_gap_resets_streak() {
        let mut app = app();
        app.engine.record_streak_day(true);
        app.check_rollover(day(14));
        assert_eq!(app.engine.snapshot().streak_days, 0);
        assert_eq!(app.engine.streak().best, 1);
    }

    #[test]
    fn test_help_view() {
        let mut app = app();
        app.handle_key(press(KeyCode::Char('?')));
        assert_eq!(app.view, View::Help);
        app.handle_key(press(KeyCode::Char(' ')));
        assert_eq!(app.engine.snapshot().points, 0);
        app.handle_key(press(KeyCode::Esc));
        assert_eq!(app.view, View::Dashboard);
        assert!(!app.should_quit);
        app.handle_key(press(KeyCode::Esc));
        assert!(app.should_quit);
    }

    #[test]
    fn test_draw_renders_dashboard() {
        let mut app = app();
        app.handle_key(press(KeyCode::Char(' ')));
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Today's Tasks"));
        assert!(text.contains("Log breakfast"));
        assert!(text.contains("120 XP available"));
        assert!(text.contains("Scan Meal"));
    }

    #[test]
    fn test_overlays_fit_small_terminal() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(40, 14)).unwrap();

        app.handle_key(press(KeyCode::Char('?')));
        terminal.draw(|frame| app.draw(frame)).unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Help"));

        app.handle_key(press(KeyCode::Esc));
        app.handle_key(press(KeyCode::Char('a')));
        assert_eq!(app.input_mode, InputMode::CalorieInput);
        terminal.draw(|frame| app.draw(frame)).unwrap();
    }
}
