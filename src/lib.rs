//! Currencist - A terminal currency converter
//!
//! Converts an amount between two currencies using the Frankfurter
//! exchange-rate service. Network calls run on background tasks and report
//! back to the UI loop through a channel, so the interface stays responsive
//! while requests are in flight.
//!
//! # Modules
//!
//! * [`api`] - Exchange-rate API client and abstraction
//! * [`config`] - Application configuration management
//! * [`conversion`] - Amount parsing, requests and results
//! * [`ui`] - Terminal user interface components

/// Exchange-rate API client and abstraction
pub mod api;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Conversion domain types
pub mod conversion;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Terminal user interface components and rendering
pub mod ui;
