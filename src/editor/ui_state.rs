//! Ephemeral editor UI state. None of it is ever persisted.

use super::commands::ColorPopover;
use std::time::{Duration, Instant};

/// Pending input of the "add tab" affordance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTabForm {
    pub open: bool,
    pub pending: String,
}

/// Save banner that clears itself once its deadline passes.
///
/// Flashing again replaces the deadline instead of stacking a second one.
#[derive(Debug, Clone, Default)]
pub struct SaveStatus {
    message: Option<String>,
    expires_at: Option<Instant>,
}

impl SaveStatus {
    pub fn flash(&mut self, message: impl Into<String>, now: Instant, delay: Duration) {
        self.message = Some(message.into());
        self.expires_at = Some(now + delay);
    }

    /// Clear the banner if its deadline has passed; returns true when it did
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.expires_at {
            Some(deadline) if now >= deadline => {
                self.message = None;
                self.expires_at = None;
                true
            }
            _ => false,
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn expires_at(&self) -> Option<Instant> {
        self.expires_at
    }
}

#[derive(Debug, Clone, Default)]
pub struct TransientUiState {
    pub active_tab: Option<String>,
    pub sidebar_collapsed: bool,
    pub content_collapsed: bool,
    pub open_popover: Option<ColorPopover>,
    pub new_tab_form: NewTabForm,
    pub save_status: SaveStatus,
}

impl TransientUiState {
    /// Open `popover`, closing the other one; opening the open one closes it
    pub fn toggle_popover(&mut self, popover: ColorPopover) {
        self.open_popover = if self.open_popover == Some(popover) {
            None
        } else {
            Some(popover)
        };
    }

    pub fn close_popovers(&mut self) {
        self.open_popover = None;
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }

    pub fn toggle_content(&mut self) {
        self.content_collapsed = !self.content_collapsed;
    }

    pub fn open_new_tab_form(&mut self) {
        self.new_tab_form.open = true;
    }

    pub fn set_pending_tab_name(&mut self, pending: impl Into<String>) {
        self.new_tab_form.pending = pending.into();
    }

    pub fn close_new_tab_form(&mut self) {
        self.new_tab_form = NewTabForm::default();
    }
}
