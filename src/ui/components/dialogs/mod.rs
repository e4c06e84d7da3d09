//! Dialog rendering helpers

pub mod common;
pub mod input_dialogs;
pub mod scroll_behavior;
pub mod system_dialogs;
