use ratatui::style::{Color, Style, Stylize};

pub fn title_style() -> Style { Style::default().fg(Color::Yellow).bold() }
pub fn hint_style() -> Style { Style::default().fg(Color::DarkGray) }
pub fn selected_style() -> Style { Style::default().fg(Color::Yellow).bold() }
pub fn footer_style() -> Style { Style::default().fg(Color::Gray) }
pub fn script_style() -> Style { Style::default().fg(Color::White).bold() }
pub fn answer_style() -> Style { Style::default().fg(Color::Green).bold() }
pub fn badge_style() -> Style { Style::default().fg(Color::Black).bg(Color::Rgb(255, 170, 0)) }
pub fn gauge_style() -> Style { Style::default().fg(Color::Rgb(255, 170, 0)) }
pub fn animating_style() -> Style { Style::default().fg(Color::DarkGray) }
