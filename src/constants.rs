//! Constants used throughout the application
//!
//! This module centralizes UI text, built-in section defaults and other constant
//! values. Everything here is plain data; the editor receives it through
//! [`crate::config::EditorConfig`] and [`crate::config::Palette`] at construction.

// Built-in sections
pub const TAB_ABOUT: &str = "About";
pub const TAB_PORTFOLIO: &str = "Portfolio";
pub const TAB_SERVICES: &str = "Services";
pub const TAB_BLOG: &str = "Blog";

pub const PLACEHOLDER_ABOUT: &str = "Tell your visitors who you are and what drives your work.";
pub const PLACEHOLDER_PORTFOLIO: &str = "Showcase the projects you are most proud of.";
pub const PLACEHOLDER_SERVICES: &str = "Describe the services you offer and how clients can hire you.";
pub const PLACEHOLDER_BLOG: &str = "Share news, stories and ideas with your audience.";

// Seeded cards: (title, description)
pub const PORTFOLIO_CARDS: [(&str, &str); 2] = [
    ("Project One", "A short summary of your first featured project."),
    ("Project Two", "A short summary of your second featured project."),
];
pub const SERVICES_CARDS: [(&str, &str); 2] = [
    ("Service One", "What this service includes and who it is for."),
    ("Service Two", "What this service includes and who it is for."),
];

// Toolbar
/// Font sizes offered by the toolbar, in points
pub const TOOLBAR_FONT_SIZES: [u16; 3] = [16, 18, 20];
pub const THEME_COLORS: [&str; 10] = [
    "#000000", "#FFFFFF", "#E7E6E6", "#44546A", "#4472C4", "#ED7D31", "#A5A5A5", "#FFC000", "#5B9BD5", "#70AD47",
];
pub const STANDARD_COLORS: [&str; 10] = [
    "#C00000", "#FF0000", "#FFC000", "#FFFF00", "#92D050", "#00B050", "#00B0F0", "#0070C0", "#002060", "#7030A0",
];

// Save banner
pub const SAVE_STATUS_DELAY_MS: u64 = 2000;
pub const SUCCESS_CHANGES_SAVED: &str = "✅ Changes saved successfully!";

// Auth
pub const ERROR_INVALID_CREDENTIALS: &str = "Invalid email or password";
pub const PASSWORD_HASH_COST: u32 = 10;

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const DIALOG_TITLE_LOGS: &str = "🔍 Logs - Press 'Esc' or 'F12' to close";
pub const SUCCESS_TAB_ADDED: &str = "✅ Tab added";
pub const SUCCESS_CARD_ADDED: &str = "✅ Card added";

// UI Layout Constants
/// Period of the idle tick that expires the save banner
pub const TICK_RATE_MS: u64 = 100;
/// Minimum sidebar width in columns
pub const SIDEBAR_MIN_WIDTH: u16 = 15;
/// Maximum sidebar width in columns
pub const SIDEBAR_MAX_WIDTH: u16 = 50;
/// Default sidebar width in columns
pub const SIDEBAR_DEFAULT_WIDTH: u16 = 24;
/// Longest save banner delay accepted by the config validator
pub const SAVE_STATUS_MAX_DELAY_MS: u64 = 60_000;
