//! Ordered registry of section names.

use thiserror::Error;

/// Why a new tab name was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TabRejection {
    #[error("Tab name cannot be empty")]
    Empty,
    #[error("A tab named '{0}' already exists")]
    Duplicate(String),
}

/// Insertion-ordered, duplicate-free list of tab names.
///
/// The uniqueness check is an exact, case-sensitive match of the trimmed
/// candidate against the stored names.
#[derive(Debug, Clone, Default)]
pub struct TabRegistry {
    tabs: Vec<String>,
}

impl TabRegistry {
    pub fn new(defaults: Vec<String>) -> Self {
        let mut registry = Self::default();
        for name in defaults {
            if let Err(rejection) = registry.add_tab(&name) {
                log::warn!("Skipping built-in tab '{}': {}", name, rejection);
            }
        }
        registry
    }

    pub fn list_tabs(&self) -> &[String] {
        &self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tabs.iter().any(|tab| tab == name)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.tabs.iter().position(|tab| tab == name)
    }

    /// Append `name` and return the stored (trimmed) form
    pub fn add_tab(&mut self, name: &str) -> Result<String, TabRejection> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TabRejection::Empty);
        }
        if self.contains(name) {
            return Err(TabRejection::Duplicate(name.to_string()));
        }
        self.tabs.push(name.to_string());
        Ok(name.to_string())
    }
}
