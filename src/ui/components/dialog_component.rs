//! Modal dialog component.
//!
//! Shows error, warning and info messages raised by validation or by
//! background tasks, plus the help and log panels. While a dialog is
//! visible it receives every key.

use crate::logger::Logger;
use crate::ui::components::dialogs::system_dialogs;
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, style::Color, widgets::ScrollbarState, Frame};

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub scroll_offset: usize,
    pub scrollbar_state: ScrollbarState,
    logger: Logger,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            dialog_type: None,
            scroll_offset: 0,
            scrollbar_state: ScrollbarState::new(0),
            logger: Logger::new(),
        }
    }

    pub fn set_logger(&mut self, logger: Logger) {
        self.logger = logger;
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    fn clear_dialog(&mut self) {
        self.dialog_type = None;
        self.scroll_offset = 0;
        self.scrollbar_state = ScrollbarState::new(0);
    }

    fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.dialog_type.is_none() {
            return Action::None;
        }

        // Arrow keys scroll long content, anything else dismisses
        match key.code {
            KeyCode::Up => {
                self.scroll_up();
                Action::None
            }
            KeyCode::Down => {
                self.scroll_down();
                Action::None
            }
            _ => Action::HideDialog,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.clear_dialog();
                self.dialog_type = Some(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.clear_dialog();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let Some(dialog_type) = self.dialog_type.clone() else {
            return;
        };

        match dialog_type {
            DialogType::Error { title, message } => system_dialogs::render_message_dialog(
                f,
                rect,
                &title,
                &message,
                Color::Red,
                self.scroll_offset,
                &mut self.scrollbar_state,
            ),
            DialogType::Warning { title, message } => system_dialogs::render_message_dialog(
                f,
                rect,
                &title,
                &message,
                Color::Yellow,
                self.scroll_offset,
                &mut self.scrollbar_state,
            ),
            DialogType::Help => {
                system_dialogs::render_help_dialog(f, rect, self.scroll_offset, &mut self.scrollbar_state);
            }
            DialogType::Logs => system_dialogs::render_logs_dialog(
                f,
                rect,
                &self.logger,
                self.scroll_offset,
                &mut self.scrollbar_state,
            ),
        }
    }
}
