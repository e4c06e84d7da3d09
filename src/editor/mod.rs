//! Section content editor state model.
//!
//! The [`SectionEditor`] composes the four parts of the dashboard editor:
//!
//! * [`tabs`] - ordered, duplicate-free registry of section names
//! * [`document`] - per-tab documents and cards, owned by the [`DocumentStore`]
//! * [`commands`] - toolbar commands routed to a [`TextEditingHost`]
//! * [`ui_state`] - transient menus, active tab and the save banner
//!
//! Host primitives stay behind two capability traits, [`TextEditingHost`] and
//! [`PreviewResources`], so the model runs without a real UI.

pub mod commands;
pub mod document;
pub mod markup;
pub mod resources;
pub mod tabs;
pub mod ui_state;

pub use commands::{Alignment, ColorPopover, CommandDispatcher, FontLevel, FormatCommand, TextEditingHost};
pub use document::{Card, CardPatch, Document, DocumentStore};
pub use markup::MarkupHost;
pub use resources::{replace_resource, LocalFile, ObjectUrlRegistry, PreviewResources, PreviewUrl};
pub use tabs::{TabRegistry, TabRejection};
pub use ui_state::{NewTabForm, SaveStatus, TransientUiState};

use crate::config::{EditorConfig, Palette};
use std::time::Instant;
use uuid::Uuid;

/// Editor wired to the dashboard's own hosts
pub type DashboardEditor = SectionEditor<MarkupHost, ObjectUrlRegistry>;

pub struct SectionEditor<H: TextEditingHost, R: PreviewResources> {
    config: EditorConfig,
    registry: TabRegistry,
    store: DocumentStore<R>,
    dispatcher: CommandDispatcher,
    host: H,
    ui: TransientUiState,
}

impl<H: TextEditingHost, R: PreviewResources> SectionEditor<H, R> {
    pub fn new(config: EditorConfig, palette: Palette, host: H, resources: R) -> Self {
        let registry = TabRegistry::new(config.tab_names());
        let store = DocumentStore::with_templates(&config.tabs, resources);
        let mut editor = Self {
            config,
            registry,
            store,
            dispatcher: CommandDispatcher::new(palette),
            host,
            ui: TransientUiState::default(),
        };

        if let Some(first) = editor.registry.list_tabs().first().cloned() {
            editor.select_tab(&first);
        }
        editor
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn dispatcher(&self) -> &CommandDispatcher {
        &self.dispatcher
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn resources(&self) -> &R {
        self.store.resources()
    }

    pub fn ui(&self) -> &TransientUiState {
        &self.ui
    }

    pub fn ui_mut(&mut self) -> &mut TransientUiState {
        &mut self.ui
    }

    pub fn list_tabs(&self) -> &[String] {
        self.registry.list_tabs()
    }

    pub fn active_tab(&self) -> Option<&str> {
        self.ui.active_tab.as_deref()
    }

    pub fn is_card_tab(&self, tab: &str) -> bool {
        self.config.is_card_tab(tab)
    }

    /// Make `tab` active and load its document into the editing region
    pub fn select_tab(&mut self, tab: &str) -> bool {
        let Some(document) = self.store.get_document(tab) else {
            return false;
        };
        self.host.load_region(&document.content);
        self.ui.active_tab = Some(tab.to_string());
        log::debug!("Active tab is now '{}'", tab);
        true
    }

    /// Register a new tab with an empty document and make it active
    pub fn add_tab(&mut self, name: &str) -> Result<String, TabRejection> {
        let name = self.registry.add_tab(name)?;
        self.store.init_document(&name);
        self.select_tab(&name);
        log::info!("Added tab '{}'", name);
        Ok(name)
    }

    /// Submit the pending name of the new-tab form; the form stays open on rejection
    pub fn submit_new_tab(&mut self) -> Result<String, TabRejection> {
        let pending = self.ui.new_tab_form.pending.clone();
        let name = self.add_tab(&pending)?;
        self.ui.close_new_tab_form();
        Ok(name)
    }

    pub fn get_document(&self, tab: &str) -> Option<&Document> {
        self.store.get_document(tab)
    }

    pub fn active_document(&self) -> Option<&Document> {
        self.active_tab().and_then(|tab| self.store.get_document(tab))
    }

    /// Replace a document's markup; the editing region follows when `tab` is active
    pub fn set_content(&mut self, tab: &str, markup: &str) {
        self.store.set_content(tab, markup);
        if self.active_tab() == Some(tab) {
            self.host.load_region(markup);
        }
    }

    /// Edit the active region directly (typing, caret moves) and store the result
    pub fn edit_region<F: FnOnce(&mut H)>(&mut self, edit: F) {
        let Some(tab) = self.ui.active_tab.as_deref() else {
            return;
        };
        edit(&mut self.host);
        self.store.set_content(tab, self.host.region_markup());
    }

    pub fn set_section_images(&mut self, tab: &str, files: Vec<LocalFile>) {
        log::debug!("Setting {} section image(s) on '{}'", files.len(), tab);
        self.store.set_section_images(tab, files);
    }

    pub fn add_card(&mut self, tab: &str) -> Option<Uuid> {
        self.store.add_card(tab)
    }

    pub fn update_card(&mut self, tab: &str, card_id: Uuid, patch: CardPatch) {
        self.store.update_card(tab, card_id, patch);
    }

    pub fn set_card_image(&mut self, tab: &str, card_id: Uuid, file: LocalFile) {
        self.store.set_card_image(tab, card_id, file);
    }

    pub fn apply_command(&mut self, command: &FormatCommand) -> bool {
        self.dispatcher
            .apply_command(&mut self.host, &mut self.store, self.ui.active_tab.as_deref(), command)
    }

    /// Apply a toolbar font size given in points
    pub fn set_font_size(&mut self, points: u16) -> bool {
        self.apply_command(&FormatCommand::font_size(points))
    }

    pub fn toggle_popover(&mut self, popover: ColorPopover) {
        self.ui.toggle_popover(popover);
    }

    /// Apply a swatch from `popover` and close every popover
    pub fn pick_color(&mut self, popover: ColorPopover, color: &str) -> bool {
        let applied = self.apply_command(&popover.command(color));
        self.ui.close_popovers();
        applied
    }

    /// Flash the save banner; nothing is written anywhere
    pub fn save(&mut self, now: Instant) {
        let delay = self.config.save_status_delay();
        self.ui.save_status.flash(self.config.save_message.clone(), now, delay);
        log::info!("Save requested for '{}'", self.active_tab().unwrap_or("-"));
    }

    pub fn tick(&mut self, now: Instant) -> bool {
        self.ui.save_status.tick(now)
    }
}
