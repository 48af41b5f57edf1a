use ratatui::style::{Color, Modifier, Style};

pub const BG: Color = Color::Rgb(10, 15, 10);
pub const SURFACE: Color = Color::Rgb(26, 47, 26);
pub const BORDER: Color = Color::Rgb(42, 79, 42);
pub const TEXT: Color = Color::Rgb(255, 255, 255);
pub const TEXT_DIM: Color = Color::Rgb(156, 163, 175);
pub const GREEN: Color = Color::Rgb(0, 208, 132);
pub const PURPLE: Color = Color::Rgb(124, 58, 237);
pub const AMBER: Color = Color::Rgb(245, 158, 11);
pub const CYAN: Color = Color::Rgb(6, 182, 212);
pub const RED: Color = Color::Rgb(220, 80, 70);

pub fn base() -> Style {
    Style::default().fg(TEXT).bg(BG)
}

pub fn dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn green() -> Style {
    Style::default().fg(GREEN)
}

pub fn purple() -> Style {
    Style::default().fg(PURPLE)
}

pub fn amber() -> Style {
    Style::default().fg(AMBER)
}

pub fn red() -> Style {
    Style::default().fg(RED)
}

pub fn bold() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

pub fn surface() -> Style {
    Style::default().fg(TEXT).bg(SURFACE)
}

pub fn border() -> Style {
    Style::default().fg(BORDER)
}
