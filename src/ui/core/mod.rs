//! Core UI functionality for the Chatolution dashboard.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions and UI state transitions
//! - [`component`] - Base component trait and rendering abstractions
//! - [`event_handler`] - Terminal event polling and ticks
//!
//! Components translate key events into [`Action`]s; the app component applies
//! them to the section editor and feeds the resulting state back into the
//! components before the next render.

pub mod actions;
pub mod component;
pub mod event_handler;

// Re-export core types for easier access from other modules
pub use actions::{Action, DialogType, Focus, TextEdit};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
