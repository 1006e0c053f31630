//! Reusable UI components

pub mod converter_form;
pub mod currency_selector;
pub mod dialog_component;
pub mod dialogs;
pub mod status_bar;

// Component exports
pub use converter_form::ConverterForm;
pub use dialog_component::DialogComponent;
pub use status_bar::StatusBar;
