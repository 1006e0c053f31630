use super::common::{create_dialog_block, create_instructions_paragraph, shortcuts};
use crate::constants::DIALOG_TITLE_LOGS;
use crate::logger::Logger;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
    Frame,
};

const HELP_TEXT: &str = r"
CURRENCIST - Currency Converter
===============================

FORM
----
Tab / Shift+Tab   Move between Amount, From, To, Convert and Swap
0-9 . e           Type the amount (Amount focused)
Backspace         Delete last character
Delete            Clear the amount
↑↓ ←→             Pick the previous/next currency (From/To focused)
A-Z               Jump to the next currency starting with that letter
Enter             Convert (or press the focused button)
Space             Press the focused button

GLOBAL
------
Ctrl+S            Swap From and To
Ctrl+R            Reload the currency list after a failed load
Ctrl+L            Show logs
F1                Toggle this help
Esc               Close dialog, or quit
Ctrl+C            Quit

Rates are provided by the Frankfurter API.
";

/// Clamp `scroll_offset` and return the lines that fit in `visible_height`,
/// updating the scrollbar to match.
fn visible_window<'a>(
    lines: &[&'a str],
    visible_height: usize,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) -> Vec<&'a str> {
    let max_scroll = lines.len().saturating_sub(visible_height);
    let clamped_offset = scroll_offset.min(max_scroll);

    *scrollbar_state = scrollbar_state
        .content_length(lines.len())
        .viewport_content_length(visible_height)
        .position(clamped_offset);

    lines.iter().skip(clamped_offset).take(visible_height).copied().collect()
}

fn render_scrollbar(f: &mut Frame, area: Rect, scrollbar_state: &mut ScrollbarState) {
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(Some("↑"))
        .end_symbol(Some("↓"))
        .track_symbol(Some("│"))
        .thumb_symbol("▐")
        .style(Style::default().fg(Color::Gray))
        .thumb_style(Style::default().fg(Color::White));

    f.render_stateful_widget(scrollbar, area, scrollbar_state);
}

/// Modal error/warning box, dismissed by any key
pub fn render_message_dialog(
    f: &mut Frame,
    area: Rect,
    title: &str,
    message: &str,
    theme_color: Color,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let dialog_area = LayoutManager::centered_rect_lines(60, 10, area);
    f.render_widget(Clear, dialog_area);

    let block = create_dialog_block(format!(" {} ", title), theme_color);

    let content_area = Rect::new(
        dialog_area.x + 2,
        dialog_area.y + 1,
        dialog_area.width.saturating_sub(4),
        dialog_area.height.saturating_sub(4),
    );

    let instructions_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + dialog_area.height.saturating_sub(2),
        dialog_area.width.saturating_sub(2),
        1,
    );

    let lines: Vec<&str> = message.lines().collect();
    let visible_height = content_area.height as usize;
    let overflowing = lines.len() > visible_height;

    let message_text = if overflowing {
        visible_window(&lines, visible_height, scroll_offset, scrollbar_state).join("\n")
    } else {
        message.to_string()
    };

    let message_paragraph = Paragraph::new(message_text)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });

    let instructions = if overflowing {
        create_instructions_paragraph(&[shortcuts::ANY_KEY_CLOSE, shortcuts::SEPARATOR, shortcuts::SCROLL])
    } else {
        create_instructions_paragraph(&[shortcuts::ANY_KEY_CLOSE])
    };

    f.render_widget(block, dialog_area);
    f.render_widget(message_paragraph, content_area);
    f.render_widget(instructions, instructions_area);

    if overflowing {
        render_scrollbar(f, content_area, scrollbar_state);
    }
}

fn render_scrollable_panel(
    f: &mut Frame,
    area: Rect,
    title: &str,
    content: &str,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let panel_area = LayoutManager::centered_rect(90, 90, area);
    f.render_widget(Clear, panel_area);

    let lines: Vec<&str> = content.lines().collect();
    let visible_height = panel_area.height.saturating_sub(2) as usize;
    let text = visible_window(&lines, visible_height, scroll_offset, scrollbar_state).join("\n");

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_string())
                .title_alignment(Alignment::Center),
        )
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);

    f.render_widget(paragraph, panel_area);

    if lines.len() > visible_height {
        render_scrollbar(f, panel_area, scrollbar_state);
    }
}

pub fn render_help_dialog(f: &mut Frame, area: Rect, scroll_offset: usize, scrollbar_state: &mut ScrollbarState) {
    render_scrollable_panel(
        f,
        area,
        "📖 Help - Press any key to close",
        HELP_TEXT,
        scroll_offset,
        scrollbar_state,
    );
}

pub fn render_logs_dialog(
    f: &mut Frame,
    area: Rect,
    logger: &Logger,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let logs = logger.get_logs();
    let content = if logs.is_empty() {
        "No logs available".to_string()
    } else {
        logs.join("\n")
    };

    render_scrollable_panel(f, area, DIALOG_TITLE_LOGS, &content, scroll_offset, scrollbar_state);
}
