use crate::api::RatesApi;
use crate::config::Config;
use crate::constants::{
    ERROR_CONVERT, ERROR_INVALID_AMOUNT, ERROR_LOAD_CURRENCIES, STATUS_CONVERTING, STATUS_LOADING,
    STATUS_LOAD_FAILED, STATUS_READY, TITLE_CONVERSION_ERROR, TITLE_ERROR, TITLE_INVALID_INPUT,
    TITLE_SELECT_CURRENCIES, WARNING_MISSING_SELECTION,
};
use crate::conversion::{default_selection, normalize_codes, parse_amount, swap, ConversionRequest};
use crate::logger::Logger;
use crate::ui::components::currency_selector::{cycle_code, jump_to_letter};
use crate::ui::components::{ConverterForm, DialogComponent, StatusBar};
use crate::ui::core::{
    actions::{Action, AmountEdit, CurrencySlot, DialogType},
    event_handler::EventType,
    task_manager::{TaskId, TaskManager},
    Component,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};
use std::fmt;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Longest amount string the input accepts
const MAX_AMOUNT_LEN: usize = 32;

/// Status line states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Loading,
    Ready,
    LoadFailed,
    Converting,
}

impl Status {
    pub fn text(self) -> &'static str {
        match self {
            Status::Loading => STATUS_LOADING,
            Status::Ready => STATUS_READY,
            Status::LoadFailed => STATUS_LOAD_FAILED,
            Status::Converting => STATUS_CONVERTING,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Application state separate from UI concerns
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub amount_input: String,
    /// Codes from the last successful list fetch
    pub currencies: Vec<String>,
    pub from: String,
    pub to: String,
    pub result_text: String,
    pub status: Status,
}

impl AppState {
    fn selection_mut(&mut self, slot: CurrencySlot) -> &mut String {
        match slot {
            CurrencySlot::From => &mut self.from,
            CurrencySlot::To => &mut self.to,
        }
    }

    /// Replace the code list and pick initial selections
    pub fn apply_currencies(&mut self, codes: Vec<String>, preferred_from: &str, preferred_to: &str) {
        self.currencies = normalize_codes(codes);
        let (from, to) =
            default_selection(&self.currencies, Some(preferred_from), Some(preferred_to)).unwrap_or_default();
        self.from = from;
        self.to = to;
    }

    /// Forget the code list; nothing is selectable until the next load
    pub fn clear_currencies(&mut self) {
        self.currencies.clear();
        self.from.clear();
        self.to.clear();
    }
}

pub struct AppComponent {
    // Component composition
    form: ConverterForm,
    dialog: DialogComponent,

    // Application state
    state: AppState,
    preferred_from: String,
    preferred_to: String,

    // Services
    api: Arc<dyn RatesApi>,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,
    logger: Logger,

    // Simple UI state
    should_quit: bool,
    active_load_task: Option<TaskId>,
}

impl AppComponent {
    pub fn new(api: Arc<dyn RatesApi>, config: &Config, logger: Logger) -> Self {
        let (task_manager, background_action_rx) = TaskManager::new();
        let mut dialog = DialogComponent::new();
        dialog.set_logger(logger.clone());

        let state = AppState {
            amount_input: config.defaults.amount.clone(),
            ..Default::default()
        };

        Self {
            form: ConverterForm::new(),
            dialog,
            state,
            preferred_from: config.defaults.from.to_ascii_uppercase(),
            preferred_to: config.defaults.to.to_ascii_uppercase(),
            api,
            task_manager,
            background_action_rx,
            logger,
            should_quit: false,
            active_load_task: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dialog(&self) -> Option<&DialogType> {
        self.dialog.dialog_type.as_ref()
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Get the number of active background tasks
    pub fn active_task_count(&self) -> usize {
        self.task_manager.task_count()
    }

    /// Kick off the one-time currency list load
    pub fn start(&mut self) {
        if self.logger.is_enabled() {
            if let Ok(path) = Logger::get_log_file_path() {
                self.logger.log(format!("Writing logs to {}", path.display()));
            }
        }
        self.logger.log("AppComponent: Starting currency list load".to_string());
        self.dispatch(Action::LoadCurrencies);
    }

    /// Snapshot in-flight requests into the log before it is shown
    fn log_running_tasks(&self) {
        for (id, description, age) in self.task_manager.running_tasks() {
            self.logger
                .log(format!("Running task #{}: {} ({} ms)", id, description, age.as_millis()));
        }
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.logger.log("Global key: Ctrl+C - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('s') if ctrl => Action::Swap,
            KeyCode::Char('r') if ctrl => Action::LoadCurrencies,
            KeyCode::Char('l') if ctrl => {
                self.log_running_tasks();
                Action::ShowDialog(DialogType::Logs)
            }
            KeyCode::F(1) => Action::ShowDialog(DialogType::Help),
            KeyCode::Esc => {
                self.logger.log("Global key: Esc - quitting application".to_string());
                Action::Quit
            }
            _ => Action::None,
        }
    }

    /// Run an action and any follow-up actions it produces
    pub fn dispatch(&mut self, action: Action) {
        let mut next = action;
        while !matches!(next, Action::None) {
            next = self.dialog.update(next);
            next = self.handle_app_action(next);
        }
    }

    /// Handle app-level actions that require business logic
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.should_quit = true;
                self.task_manager.cancel_all_tasks();
                Action::None
            }
            Action::EditAmount(edit) => {
                match edit {
                    AmountEdit::Insert(c) if self.state.amount_input.len() < MAX_AMOUNT_LEN => {
                        self.state.amount_input.push(c);
                    }
                    AmountEdit::Insert(_) => {}
                    AmountEdit::Backspace => {
                        self.state.amount_input.pop();
                    }
                    AmountEdit::Clear => self.state.amount_input.clear(),
                }
                Action::None
            }
            Action::CycleCurrency { slot, forward } => {
                let current = self.state.selection_mut(slot).clone();
                if let Some(code) = cycle_code(&self.state.currencies, &current, forward) {
                    *self.state.selection_mut(slot) = code;
                }
                Action::None
            }
            Action::JumpCurrency { slot, letter } => {
                let current = self.state.selection_mut(slot).clone();
                if let Some(code) = jump_to_letter(&self.state.currencies, &current, letter) {
                    *self.state.selection_mut(slot) = code;
                }
                Action::None
            }
            Action::Swap => {
                let (from, to) = swap(
                    std::mem::take(&mut self.state.from),
                    std::mem::take(&mut self.state.to),
                );
                self.state.from = from;
                self.state.to = to;
                self.logger
                    .log(format!("Swap: now {} -> {}", self.state.from, self.state.to));
                Action::None
            }
            Action::Convert => self.start_conversion(),
            Action::LoadCurrencies => {
                if self.active_load_task.is_some() {
                    self.logger.log("Currency load already in progress, ignoring".to_string());
                } else if !self.state.currencies.is_empty() {
                    self.logger.log("Currencies already loaded, ignoring reload".to_string());
                } else {
                    self.state.status = Status::Loading;
                    let task_id = self.task_manager.spawn_currency_load(self.api.clone());
                    self.active_load_task = Some(task_id);
                    self.logger.log(format!("Background: Spawned currency load (task {})", task_id));
                }
                Action::None
            }
            Action::CurrenciesLoaded { task_id, codes } => {
                self.logger
                    .log(format!("Task {}: Loaded {} currencies", task_id, codes.len()));
                self.active_load_task = None;

                if codes.is_empty() {
                    self.state.clear_currencies();
                    self.state.status = Status::LoadFailed;
                    return Action::ShowDialog(DialogType::error(
                        TITLE_ERROR,
                        format!("{}:\nThe service returned no currencies", ERROR_LOAD_CURRENCIES),
                    ));
                }

                self.state
                    .apply_currencies(codes, &self.preferred_from, &self.preferred_to);
                self.state.status = Status::Ready;
                Action::None
            }
            Action::CurrenciesFailed { task_id, error } => {
                self.logger
                    .log(format!("Task {}: Currency load failed: {}", task_id, error));
                self.active_load_task = None;
                self.state.clear_currencies();
                self.state.status = Status::LoadFailed;
                Action::ShowDialog(DialogType::error(
                    TITLE_ERROR,
                    format!("{}:\n{}", ERROR_LOAD_CURRENCIES, error),
                ))
            }
            Action::ConversionCompleted { task_id, result } => {
                self.logger.log(format!("Task {}: Conversion done: {}", task_id, result));
                self.state.result_text = result.to_string();
                self.state.status = Status::Ready;
                Action::None
            }
            Action::ConversionFailed { task_id, error } => {
                self.logger
                    .log(format!("Task {}: Conversion failed: {}", task_id, error));
                self.state.status = Status::Ready;
                Action::ShowDialog(DialogType::error(
                    TITLE_CONVERSION_ERROR,
                    format!("{}:\n{}", ERROR_CONVERT, error),
                ))
            }
            // Dialog actions are consumed by the dialog component
            Action::ShowDialog(_) | Action::HideDialog | Action::None => Action::None,
        }
    }

    /// Validate the form and spawn a conversion request
    fn start_conversion(&mut self) -> Action {
        let amount = match parse_amount(&self.state.amount_input) {
            Ok(amount) => amount,
            Err(e) => {
                self.logger.log(format!("Convert: rejected amount: {}", e));
                return Action::ShowDialog(DialogType::error(TITLE_INVALID_INPUT, ERROR_INVALID_AMOUNT));
            }
        };

        if self.state.from.is_empty() || self.state.to.is_empty() {
            self.logger.log("Convert: missing currency selection".to_string());
            return Action::ShowDialog(DialogType::warning(
                TITLE_SELECT_CURRENCIES,
                WARNING_MISSING_SELECTION,
            ));
        }

        let request = ConversionRequest::new(amount, self.state.from.clone(), self.state.to.clone());
        self.state.status = Status::Converting;
        let task_id = self.task_manager.spawn_conversion(self.api.clone(), request);
        self.logger.log(format!(
            "Background: Spawned conversion {} {} -> {} (task {})",
            amount, self.state.from, self.state.to, task_id
        ));
        Action::None
    }

    /// Drain results sent by background tasks
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();

        // Process all available background actions
        while let Ok(action) = self.background_action_rx.try_recv() {
            actions.push(action);
        }

        // Clean up finished tasks
        let completed_tasks = self.task_manager.cleanup_finished_tasks();
        if !completed_tasks.is_empty() {
            self.logger.log(format!(
                "Background: Cleaned up {} finished tasks",
                completed_tasks.len()
            ));
        }

        actions
    }

    /// Apply everything background tasks have reported so far.
    /// Returns whether any state changed.
    pub fn apply_background_actions(&mut self) -> bool {
        let actions = self.process_background_actions();
        let changed = !actions.is_empty();
        for action in actions {
            self.dispatch(action);
        }
        changed
    }

    /// Wait for in-flight background tasks, then apply their results
    pub async fn settle(&mut self) {
        self.task_manager.join_all().await;
        self.apply_background_actions();
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) {
        let action = match event_type {
            EventType::Key(key) => {
                if self.dialog.is_visible() {
                    // Dialog is modal
                    self.dialog.handle_key_events(key)
                } else {
                    match self.handle_global_key(key) {
                        Action::None => self.form.handle_key_events(key),
                        action => action,
                    }
                }
            }
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };

        self.dispatch(action);
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        // This shouldn't be called directly - use handle_event instead
        self.handle_global_key(key)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let (_, status_area) = LayoutManager::main_layout(rect);

        self.form.render(f, rect, &self.state);
        StatusBar::render(f, status_area, self.state.status);

        // Render dialog on top if visible
        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}
