//! Reusable UI components

// Component architecture
pub mod card_list_component;
pub mod dialog_component;
pub mod dialogs;
pub mod editor_component;
pub mod sidebar_component;
pub mod status_bar;
pub mod toolbar_component;

// Component exports
pub use card_list_component::CardListComponent;
pub use dialog_component::DialogComponent;
pub use editor_component::EditorComponent;
pub use sidebar_component::SidebarComponent;
pub use status_bar::StatusBar;
pub use toolbar_component::ToolbarComponent;
