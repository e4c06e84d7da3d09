//! Modal dialog component.
//!
//! Hosts the text prompts (new tab, image paths, card title and description)
//! and the read-only system dialogs (help, logs, info, error). Prompts keep a
//! char-indexed cursor into their input buffer.

use crate::editor::CardPatch;
use crate::logger::Logger;
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};
use std::path::PathBuf;

use crate::ui::components::dialogs::{
    input_dialogs::{self, InputPrompt},
    scroll_behavior::DialogScroll,
    system_dialogs,
};

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub input_buffer: String,
    pub cursor_position: usize,
    pub error: Option<String>,
    pub scroll: DialogScroll,
    pub logger: Option<Logger>,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

/// Split a comma-separated path list, dropping blank entries
pub fn parse_paths(input: &str) -> Vec<PathBuf> {
    input
        .split(',')
        .map(str::trim)
        .filter(|path| !path.is_empty())
        .map(PathBuf::from)
        .collect()
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            dialog_type: None,
            input_buffer: String::new(),
            cursor_position: 0,
            error: None,
            scroll: DialogScroll::default(),
            logger: None,
        }
    }

    pub fn set_logger(&mut self, logger: Logger) {
        self.logger = Some(logger);
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    /// Keep the prompt open and show why the input was refused
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn close(&mut self) {
        self.clear_dialog();
    }

    fn clear_dialog(&mut self) {
        self.dialog_type = None;
        self.input_buffer.clear();
        self.cursor_position = 0;
        self.error = None;
        self.scroll.reset();
    }

    fn handle_submit(&mut self) -> Action {
        let action = match &self.dialog_type {
            // The app closes the prompt once the registry accepts the name
            Some(DialogType::NewTab) => return Action::AddTab(self.input_buffer.clone()),
            Some(DialogType::SectionImages) => Action::SetSectionImages(parse_paths(&self.input_buffer)),
            Some(DialogType::CardTitle { card_id, .. }) => Action::UpdateCard {
                card_id: *card_id,
                patch: CardPatch::title(self.input_buffer.clone()),
            },
            Some(DialogType::CardDescription { card_id, .. }) => Action::UpdateCard {
                card_id: *card_id,
                patch: CardPatch::description(self.input_buffer.clone()),
            },
            Some(DialogType::CardImage { card_id }) => match parse_paths(&self.input_buffer).into_iter().next() {
                Some(path) => Action::SetCardImage { card_id: *card_id, path },
                None => {
                    self.error = Some("Enter the path of an image file".to_string());
                    return Action::None;
                }
            },
            _ => Action::HideDialog,
        };
        self.clear_dialog();
        action
    }

    fn byte_position(&self, chars: usize) -> usize {
        self.input_buffer
            .char_indices()
            .nth(chars)
            .map(|(index, _)| index)
            .unwrap_or(self.input_buffer.len())
    }

    fn handle_input_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::HideDialog,
            KeyCode::Enter => self.handle_submit(),
            KeyCode::Char(c) => {
                let byte_pos = self.byte_position(self.cursor_position);
                self.input_buffer.insert(byte_pos, c);
                self.cursor_position += 1;
                self.error = None;
                Action::None
            }
            KeyCode::Backspace => {
                if self.cursor_position > 0 {
                    let byte_pos = self.byte_position(self.cursor_position - 1);
                    self.input_buffer.remove(byte_pos);
                    self.cursor_position -= 1;
                    self.error = None;
                }
                Action::None
            }
            KeyCode::Delete => {
                if self.cursor_position < self.input_buffer.chars().count() {
                    let byte_pos = self.byte_position(self.cursor_position);
                    self.input_buffer.remove(byte_pos);
                    self.error = None;
                }
                Action::None
            }
            KeyCode::Left => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
                Action::None
            }
            KeyCode::Right => {
                if self.cursor_position < self.input_buffer.chars().count() {
                    self.cursor_position += 1;
                }
                Action::None
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                Action::None
            }
            KeyCode::End => {
                self.cursor_position = self.input_buffer.chars().count();
                Action::None
            }
            _ => Action::None,
        }
    }

    /// Scroll keys shared by the long-content dialogs
    fn handle_scroll_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll.up(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll.down(),
            KeyCode::PageUp => self.scroll.page_up(),
            KeyCode::PageDown => self.scroll.page_down(),
            KeyCode::Home => self.scroll.to_top(),
            KeyCode::End => self.scroll.to_bottom(),
            _ => {}
        }
        Action::None
    }

    fn prompt(dialog_type: &DialogType) -> Option<InputPrompt<'static>> {
        let prompt = match dialog_type {
            DialogType::NewTab => InputPrompt {
                title: "New Tab",
                field_title: "Tab Name",
                hint: None,
                adds: true,
            },
            DialogType::SectionImages => InputPrompt {
                title: "Section Images",
                field_title: "Image Paths",
                hint: Some("Separate several files with commas; the first one is previewed"),
                adds: false,
            },
            DialogType::CardTitle { .. } => InputPrompt {
                title: "Card Title",
                field_title: "Title",
                hint: None,
                adds: false,
            },
            DialogType::CardDescription { .. } => InputPrompt {
                title: "Card Description",
                field_title: "Description",
                hint: None,
                adds: false,
            },
            DialogType::CardImage { .. } => InputPrompt {
                title: "Card Image",
                field_title: "Image Path",
                hint: None,
                adds: false,
            },
            _ => return None,
        };
        Some(prompt)
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match &self.dialog_type {
            None => Action::None,
            Some(DialogType::Help) => match key.code {
                KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('q') => Action::HideDialog,
                _ => self.handle_scroll_key(key),
            },
            Some(DialogType::Logs) => match key.code {
                KeyCode::Esc | KeyCode::F(12) | KeyCode::Char('q') => Action::HideDialog,
                _ => self.handle_scroll_key(key),
            },
            Some(DialogType::Info(_)) | Some(DialogType::Error(_)) => match key.code {
                KeyCode::Up | KeyCode::Char('k') | KeyCode::Down | KeyCode::Char('j') => self.handle_scroll_key(key),
                _ => Action::HideDialog,
            },
            Some(_) => self.handle_input_key(key),
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.clear_dialog();
                // Pre-populate input for edit dialogs
                if let DialogType::CardTitle { current, .. } | DialogType::CardDescription { current, .. } =
                    &dialog_type
                {
                    self.input_buffer = current.clone();
                    self.cursor_position = current.chars().count();
                }
                self.dialog_type = Some(dialog_type.clone());
                // The app still sees the action to open the matching form
                Action::ShowDialog(dialog_type)
            }
            Action::HideDialog => {
                self.clear_dialog();
                Action::HideDialog
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let Some(dialog_type) = self.dialog_type.clone() else {
            return;
        };

        if let Some(prompt) = Self::prompt(&dialog_type) {
            input_dialogs::render_input_dialog(
                f,
                rect,
                &prompt,
                &self.input_buffer,
                self.cursor_position,
                self.error.as_deref(),
            );
            return;
        }

        match dialog_type {
            DialogType::Info(message) => system_dialogs::render_info_dialog(f, rect, &message, &mut self.scroll),
            DialogType::Error(message) => system_dialogs::render_error_dialog(f, rect, &message, &mut self.scroll),
            DialogType::Help => system_dialogs::render_help_dialog(f, rect, &mut self.scroll),
            DialogType::Logs => system_dialogs::render_logs_dialog(f, rect, self.logger.as_ref(), &mut self.scroll),
            _ => {}
        }
    }
}
