//! Core UI functionality for Currencist.
//!
//! This module contains the building blocks the interface is made of:
//! actions, the component abstraction, terminal event polling and the
//! background task manager.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions and UI state transitions
//! - [`component`] - Base component trait and rendering abstractions
//! - [`event_handler`] - Terminal event polling and ticks
//! - [`task_manager`] - Background network calls and result dispatch
//!
//! # Architecture
//!
//! 1. **Components** implement the [`Component`] trait and turn keys into [`Action`]s
//! 2. **Actions** are the only way UI state changes
//! 3. **Tasks** run on tokio and report back by sending actions over a channel
//!    that the UI loop drains on every tick

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod task_manager;

// Re-export core types for easier access from other modules
pub use actions::{Action, AmountEdit, CurrencySlot, DialogType, FormField};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use task_manager::{TaskId, TaskManager};
