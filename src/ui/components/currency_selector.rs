//! Currency selector helpers and rendering.
//!
//! Selectors only ever move between codes of the loaded list, so a
//! selection is always one of the fetched codes (or empty before the first
//! successful load).

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Step to the next (or previous) code, wrapping around.
///
/// A current value that is not in the list starts from the first code.
pub fn cycle_code(codes: &[String], current: &str, forward: bool) -> Option<String> {
    if codes.is_empty() {
        return None;
    }

    let len = codes.len();
    let next = match codes.iter().position(|c| c == current) {
        Some(index) if forward => (index + 1) % len,
        Some(index) => (index + len - 1) % len,
        None => 0,
    };

    codes.get(next).cloned()
}

/// Jump to the next code after `current` that starts with `letter`.
///
/// Pressing the same letter repeatedly walks through every matching code.
pub fn jump_to_letter(codes: &[String], current: &str, letter: char) -> Option<String> {
    let letter = letter.to_ascii_uppercase();
    let start = codes.iter().position(|c| c == current).map(|i| i + 1).unwrap_or(0);

    codes
        .iter()
        .cycle()
        .skip(start)
        .take(codes.len())
        .find(|code| code.starts_with(letter))
        .cloned()
}

/// Draw one selector box
pub fn render_selector(f: &mut Frame, area: Rect, title: &str, codes: &[String], selected: &str, focused: bool) {
    let border_color = if focused { Color::Cyan } else { Color::Gray };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", title))
        .title_style(Style::default().fg(Color::White))
        .style(Style::default().fg(border_color));

    let content = if codes.is_empty() {
        Line::from(Span::styled("—", Style::default().fg(Color::DarkGray)))
    } else {
        let position = codes
            .iter()
            .position(|c| c == selected)
            .map(|i| format!(" ({}/{})", i + 1, codes.len()))
            .unwrap_or_default();

        let mut spans = Vec::new();
        if focused {
            spans.push(Span::styled("◀ ", Style::default().fg(Color::Cyan)));
        }
        spans.push(Span::styled(
            selected.to_string(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(position, Style::default().fg(Color::DarkGray)));
        if focused {
            spans.push(Span::styled(" ▶", Style::default().fg(Color::Cyan)));
        }
        Line::from(spans)
    };

    let paragraph = Paragraph::new(content).block(block).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}
