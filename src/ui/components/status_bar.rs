//! Status bar component

use super::dialogs::common::{create_instructions_paragraph, shortcuts};
use crate::ui::app_component::Status;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status text on the left and key hints on the right
    pub fn render(f: &mut Frame, area: Rect, status: Status) {
        let status_color = match status {
            Status::Loading | Status::Converting => Color::Yellow,
            Status::LoadFailed => Color::Red,
            Status::Ready => Color::Gray,
        };

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(28), Constraint::Min(0)])
            .split(area);

        let status_text = Paragraph::new(format!(" {}", status)).style(Style::default().fg(status_color));

        let hints = create_instructions_paragraph(&[
            shortcuts::ENTER_CONVERT,
            shortcuts::SEPARATOR,
            shortcuts::TAB_FOCUS,
            shortcuts::SEPARATOR,
            shortcuts::CTRL_S_SWAP,
            shortcuts::SEPARATOR,
            shortcuts::F1_HELP,
            shortcuts::SEPARATOR,
            shortcuts::ESC_QUIT,
        ]);

        f.render_widget(status_text, chunks[0]);
        f.render_widget(hints, chunks[1]);
    }
}
