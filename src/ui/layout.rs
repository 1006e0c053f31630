//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Widest the form grows on large terminals
const FORM_MAX_WIDTH: u16 = 64;

/// Screen regions of the converter form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormAreas {
    pub title: Rect,
    pub amount: Rect,
    pub from: Rect,
    pub to: Rect,
    pub convert_button: Rect,
    pub swap_button: Rect,
    pub result: Rect,
    pub status: Rect,
}

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Calculate the main layout areas (form on top, status bar below)
    #[must_use]
    pub fn main_layout(area: Rect) -> (Rect, Rect) {
        let top_height = area.height.saturating_sub(1);
        let top_area = Rect::new(area.x, area.y, area.width, top_height);
        let status_area = Rect::new(area.x, area.y + top_height, area.width, area.height.min(1));

        (top_area, status_area)
    }

    /// Split the screen into the form's widgets, horizontally centered
    #[must_use]
    pub fn form_layout(area: Rect) -> FormAreas {
        let (top, status) = Self::main_layout(area);

        let width = top.width.min(FORM_MAX_WIDTH);
        let column = Rect::new(top.x + (top.width - width) / 2, top.y, width, top.height);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // title
                Constraint::Length(3), // amount
                Constraint::Length(3), // from / to
                Constraint::Length(3), // buttons
                Constraint::Length(3), // result
                Constraint::Min(0),
            ])
            .split(column);

        let halves = |r: Rect| {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(r)
        };
        let selectors = halves(rows[2]);
        let buttons = halves(rows[3]);

        FormAreas {
            title: rows[0],
            amount: rows[1],
            from: selectors[0],
            to: selectors[1],
            convert_button: buttons[0],
            swap_button: buttons[1],
            result: rows[4],
            status,
        }
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Calculate a centered rectangle with percentage width and fixed line height
    #[must_use]
    pub fn centered_rect_lines(percent_x: u16, height_lines: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(height_lines),
                Constraint::Min(0),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}
