//! UI module for Chatolution
//!
//! This module hosts the section editor in a terminal dashboard: sidebar,
//! formatting toolbar, content pane, card list, dialogs and status bar.

pub mod app_component;
pub mod components;
pub mod core;
pub mod layout;
pub mod renderer;

pub use app_component::AppComponent;
pub use layout::LayoutManager;
pub use renderer::run_app;
