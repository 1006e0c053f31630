//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// API
pub const DEFAULT_API_BASE_URL: &str = "https://api.frankfurter.app";
pub const CURRENCIES_PATH: &str = "/currencies";
pub const LATEST_PATH: &str = "/latest";
/// Default HTTP request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const MIN_TIMEOUT_SECS: u64 = 1;
pub const MAX_TIMEOUT_SECS: u64 = 120;

// Form defaults
pub const DEFAULT_AMOUNT: &str = "1";
pub const DEFAULT_FROM_CURRENCY: &str = "USD";
pub const DEFAULT_TO_CURRENCY: &str = "INR";

// Status line
pub const STATUS_LOADING: &str = "Loading currencies...";
pub const STATUS_READY: &str = "Ready";
pub const STATUS_LOAD_FAILED: &str = "Failed to load currencies";
pub const STATUS_CONVERTING: &str = "Converting...";

// Dialog titles
pub const TITLE_ERROR: &str = "Error";
pub const TITLE_INVALID_INPUT: &str = "Invalid input";
pub const TITLE_SELECT_CURRENCIES: &str = "Select currencies";
pub const TITLE_CONVERSION_ERROR: &str = "Conversion Error";

// Dialog messages
pub const ERROR_INVALID_AMOUNT: &str = "Please enter a numeric amount";
pub const WARNING_MISSING_SELECTION: &str = "Please select both From and To currencies";
pub const ERROR_LOAD_CURRENCIES: &str = "Could not load currencies list";
pub const ERROR_CONVERT: &str = "Could not convert currencies";

// UI
pub const APP_TITLE: &str = "Currency Converter";
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const DIALOG_TITLE_LOGS: &str = "🔍 Logs - Press any key to close";
pub const LOG_FILE_NAME: &str = "currencist.log";
