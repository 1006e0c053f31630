use super::task_manager::TaskId;
use crate::conversion::ConversionResult;

/// Fields of the converter form, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Amount,
    From,
    To,
    ConvertButton,
    SwapButton,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Amount => FormField::From,
            FormField::From => FormField::To,
            FormField::To => FormField::ConvertButton,
            FormField::ConvertButton => FormField::SwapButton,
            FormField::SwapButton => FormField::Amount,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            FormField::Amount => FormField::SwapButton,
            FormField::From => FormField::Amount,
            FormField::To => FormField::From,
            FormField::ConvertButton => FormField::To,
            FormField::SwapButton => FormField::ConvertButton,
        }
    }
}

/// Which currency selector an action targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrencySlot {
    From,
    To,
}

/// Edits applied to the amount input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountEdit {
    Insert(char),
    Backspace,
    Clear,
}

/// Messages applied to UI state on the UI task.
///
/// Key handlers produce them directly; background tasks send them through
/// the [`TaskManager`](super::TaskManager) channel.
#[derive(Debug, Clone)]
pub enum Action {
    // Form editing
    EditAmount(AmountEdit),
    CycleCurrency { slot: CurrencySlot, forward: bool },
    JumpCurrency { slot: CurrencySlot, letter: char },

    // Conversion
    Convert,
    Swap,

    // Background results
    LoadCurrencies,
    CurrenciesLoaded { task_id: TaskId, codes: Vec<String> },
    CurrenciesFailed { task_id: TaskId, error: String },
    ConversionCompleted { task_id: TaskId, result: ConversionResult },
    ConversionFailed { task_id: TaskId, error: String },

    // UI operations
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DialogType {
    Error { title: String, message: String },
    Warning { title: String, message: String },
    Help,
    Logs,
}

impl DialogType {
    pub fn error(title: &str, message: impl Into<String>) -> Self {
        DialogType::Error {
            title: title.to_string(),
            message: message.into(),
        }
    }

    pub fn warning(title: &str, message: impl Into<String>) -> Self {
        DialogType::Warning {
            title: title.to_string(),
            message: message.into(),
        }
    }
}
