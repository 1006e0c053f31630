//! The converter form: amount input, currency selectors, buttons and result.

use crate::constants::APP_TITLE;
use crate::ui::app_component::AppState;
use crate::ui::components::currency_selector::render_selector;
use crate::ui::components::dialogs::common::create_input_paragraph;
use crate::ui::core::{Action, AmountEdit, CurrencySlot, FormField};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

/// Form component. Owns only the focus; field values are read from the
/// [`AppState`] passed to [`ConverterForm::render`].
#[derive(Default)]
pub struct ConverterForm {
    pub focus: FormField,
}

impl ConverterForm {
    pub fn new() -> Self {
        Self::default()
    }

    fn selector_key(&self, slot: CurrencySlot, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Left => Action::CycleCurrency { slot, forward: false },
            KeyCode::Down | KeyCode::Right => Action::CycleCurrency { slot, forward: true },
            KeyCode::Char(c) if c.is_ascii_alphabetic() => Action::JumpCurrency { slot, letter: c },
            _ => Action::None,
        }
    }

    fn render_button(f: &mut Frame, area: Rect, label: &str, focused: bool, enabled: bool) {
        let color = match (focused, enabled) {
            (_, false) => Color::DarkGray,
            (true, true) => Color::Cyan,
            (false, true) => Color::Gray,
        };
        let mut text_style = Style::default().fg(color);
        if focused {
            text_style = text_style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }

        let button = Paragraph::new(format!(" {} ", label))
            .style(text_style)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .style(Style::default().fg(color)),
            );
        f.render_widget(button, area);
    }

    pub fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return Action::None;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.previous();
                return Action::None;
            }
            KeyCode::Enter => {
                return match self.focus {
                    FormField::SwapButton => Action::Swap,
                    _ => Action::Convert,
                };
            }
            _ => {}
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) || key.modifiers.contains(KeyModifiers::ALT) {
            return Action::None;
        }

        match self.focus {
            FormField::Amount => match key.code {
                KeyCode::Char(c) => Action::EditAmount(AmountEdit::Insert(c)),
                KeyCode::Backspace => Action::EditAmount(AmountEdit::Backspace),
                KeyCode::Delete => Action::EditAmount(AmountEdit::Clear),
                _ => Action::None,
            },
            FormField::From => self.selector_key(CurrencySlot::From, key),
            FormField::To => self.selector_key(CurrencySlot::To, key),
            FormField::ConvertButton => match key.code {
                KeyCode::Char(' ') => Action::Convert,
                _ => Action::None,
            },
            FormField::SwapButton => match key.code {
                KeyCode::Char(' ') => Action::Swap,
                _ => Action::None,
            },
        }
    }

    pub fn render(&self, f: &mut Frame, rect: Rect, state: &AppState) {
        let areas = LayoutManager::form_layout(rect);

        let title = Paragraph::new(APP_TITLE)
            .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        f.render_widget(title, areas.title);

        let amount_focused = self.focus == FormField::Amount;
        let mut amount = create_input_paragraph(&state.amount_input, "Amount", amount_focused);
        if amount_focused {
            amount = amount.style(Style::default().fg(Color::Cyan));
        }
        f.render_widget(amount, areas.amount);

        render_selector(
            f,
            areas.from,
            "From",
            &state.currencies,
            &state.from,
            self.focus == FormField::From,
        );
        render_selector(
            f,
            areas.to,
            "To",
            &state.currencies,
            &state.to,
            self.focus == FormField::To,
        );

        let can_act = !state.currencies.is_empty();
        Self::render_button(
            f,
            areas.convert_button,
            "Convert",
            self.focus == FormField::ConvertButton,
            can_act,
        );
        Self::render_button(f, areas.swap_button, "Swap", self.focus == FormField::SwapButton, can_act);

        let result = Paragraph::new(state.result_text.as_str())
            .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(result, areas.result);
    }
}
