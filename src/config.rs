//! Configuration management for Chatolution
//!
//! This module handles loading, parsing, and validation of configuration files.
//! The editor-facing sections ([`EditorConfig`], [`Palette`]) are immutable data
//! handed to the section editor when it is built.

use crate::constants::{
    CONFIG_GENERATED, PLACEHOLDER_ABOUT, PLACEHOLDER_BLOG, PLACEHOLDER_PORTFOLIO, PLACEHOLDER_SERVICES,
    PORTFOLIO_CARDS, SAVE_STATUS_DELAY_MS, SAVE_STATUS_MAX_DELAY_MS, SERVICES_CARDS, SIDEBAR_DEFAULT_WIDTH,
    SIDEBAR_MAX_WIDTH, SIDEBAR_MIN_WIDTH, STANDARD_COLORS, SUCCESS_CHANGES_SAVED, TAB_ABOUT, TAB_BLOG,
    TAB_PORTFOLIO, TAB_SERVICES, THEME_COLORS, TOOLBAR_FONT_SIZES,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub editor: EditorConfig,
    pub palette: Palette,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Sidebar width in columns
    pub sidebar_width: u16,
    /// Start with the sidebar collapsed
    pub sidebar_collapsed: bool,
    /// Start with the content section collapsed
    pub content_collapsed: bool,
}

/// Editor configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// How long the save banner stays visible, in milliseconds
    pub save_status_delay_ms: u64,
    /// Banner text shown after a save
    pub save_message: String,
    /// Sections that show a card collection
    pub card_tabs: Vec<String>,
    /// Font sizes offered by the toolbar, in points
    pub font_sizes: Vec<u16>,
    /// Built-in sections, in sidebar order
    pub tabs: Vec<TabTemplate>,
}

/// A built-in section and its initial content
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TabTemplate {
    pub name: String,
    #[serde(default)]
    pub placeholder: String,
    #[serde(default)]
    pub cards: Vec<CardTemplate>,
}

/// A card seeded into a built-in section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CardTemplate {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Color swatches offered by the toolbar popovers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Palette {
    /// Foreground-only theme colors
    pub theme_colors: Vec<String>,
    /// Colors shared by the foreground and highlight popovers
    pub standard_colors: Vec<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to file
    pub enabled: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            sidebar_width: SIDEBAR_DEFAULT_WIDTH,
            sidebar_collapsed: false,
            content_collapsed: false,
        }
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        let seeded = |cards: &[(&str, &str)]| {
            cards
                .iter()
                .map(|(title, description)| CardTemplate {
                    title: title.to_string(),
                    description: description.to_string(),
                })
                .collect()
        };

        Self {
            save_status_delay_ms: SAVE_STATUS_DELAY_MS,
            save_message: SUCCESS_CHANGES_SAVED.to_string(),
            card_tabs: vec![TAB_PORTFOLIO.to_string(), TAB_SERVICES.to_string()],
            font_sizes: TOOLBAR_FONT_SIZES.to_vec(),
            tabs: vec![
                TabTemplate {
                    name: TAB_ABOUT.to_string(),
                    placeholder: PLACEHOLDER_ABOUT.to_string(),
                    cards: Vec::new(),
                },
                TabTemplate {
                    name: TAB_PORTFOLIO.to_string(),
                    placeholder: PLACEHOLDER_PORTFOLIO.to_string(),
                    cards: seeded(&PORTFOLIO_CARDS),
                },
                TabTemplate {
                    name: TAB_SERVICES.to_string(),
                    placeholder: PLACEHOLDER_SERVICES.to_string(),
                    cards: seeded(&SERVICES_CARDS),
                },
                TabTemplate {
                    name: TAB_BLOG.to_string(),
                    placeholder: PLACEHOLDER_BLOG.to_string(),
                    cards: Vec::new(),
                },
            ],
        }
    }
}

impl EditorConfig {
    pub fn save_status_delay(&self) -> Duration {
        Duration::from_millis(self.save_status_delay_ms)
    }

    pub fn is_card_tab(&self, name: &str) -> bool {
        self.card_tabs.iter().any(|tab| tab == name)
    }

    pub fn tab_names(&self) -> Vec<String> {
        self.tabs.iter().map(|tab| tab.name.clone()).collect()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            theme_colors: THEME_COLORS.iter().map(|c| c.to_string()).collect(),
            standard_colors: STANDARD_COLORS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl Palette {
    /// Swatches shown in the foreground popover: theme colors, then standard colors
    pub fn foreground_swatches(&self) -> Vec<&str> {
        self.theme_colors
            .iter()
            .chain(self.standard_colors.iter())
            .map(String::as_str)
            .collect()
    }

    /// Swatches shown in the highlight popover
    pub fn highlight_swatches(&self) -> Vec<&str> {
        self.standard_colors.iter().map(String::as_str).collect()
    }
}

/// Returns true for `#RRGGBB` strings
pub fn is_hex_color(value: &str) -> bool {
    value.len() == 7 && value.starts_with('#') && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("chatolution.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("chatolution").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.ui.sidebar_width < SIDEBAR_MIN_WIDTH || self.ui.sidebar_width > SIDEBAR_MAX_WIDTH {
            anyhow::bail!(
                "sidebar_width must be between {} and {} columns, got {}",
                SIDEBAR_MIN_WIDTH,
                SIDEBAR_MAX_WIDTH,
                self.ui.sidebar_width
            );
        }

        self.validate_editor()?;
        self.validate_palette()?;

        Ok(())
    }

    fn validate_editor(&self) -> Result<()> {
        let editor = &self.editor;

        if editor.save_status_delay_ms == 0 || editor.save_status_delay_ms > SAVE_STATUS_MAX_DELAY_MS {
            anyhow::bail!(
                "save_status_delay_ms must be between 1 and {}, got {}",
                SAVE_STATUS_MAX_DELAY_MS,
                editor.save_status_delay_ms
            );
        }

        if editor.tabs.is_empty() {
            anyhow::bail!("editor.tabs must declare at least one section");
        }

        let mut seen = HashSet::new();
        for tab in &editor.tabs {
            if tab.name.trim().is_empty() {
                anyhow::bail!("editor.tabs: section name cannot be empty");
            }
            if tab.name.trim() != tab.name {
                anyhow::bail!(
                    "editor.tabs: section name '{}' has leading or trailing whitespace",
                    tab.name
                );
            }
            if !seen.insert(tab.name.as_str()) {
                anyhow::bail!("editor.tabs: duplicate section name '{}'", tab.name);
            }
        }

        for card_tab in &editor.card_tabs {
            if !seen.contains(card_tab.as_str()) {
                anyhow::bail!("editor.card_tabs: '{}' is not a declared section", card_tab);
            }
        }

        if editor.font_sizes.is_empty() {
            anyhow::bail!("editor.font_sizes cannot be empty");
        }

        Ok(())
    }

    fn validate_palette(&self) -> Result<()> {
        for color in self.palette.theme_colors.iter().chain(self.palette.standard_colors.iter()) {
            if !is_hex_color(color) {
                anyhow::bail!("Invalid palette color '{}': expected #RRGGBB", color);
            }
        }

        if self.palette.standard_colors.is_empty() {
            anyhow::bail!("palette.standard_colors cannot be empty");
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# Chatolution Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("chatolution"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
