use crate::config::Config;
use crate::constants::{SUCCESS_CARD_ADDED, SUCCESS_TAB_ADDED};
use crate::editor::{
    Alignment, ColorPopover, DashboardEditor, FormatCommand, LocalFile, MarkupHost, ObjectUrlRegistry,
};
use crate::logger::Logger;
use crate::ui::components::{
    CardListComponent, DialogComponent, EditorComponent, SidebarComponent, StatusBar, ToolbarComponent,
};
use crate::ui::core::{
    actions::{Action, DialogType, Focus, TextEdit},
    event_handler::EventType,
    Component,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};
use std::time::Instant;

pub struct AppComponent {
    // Component composition
    sidebar: SidebarComponent,
    toolbar: ToolbarComponent,
    editor_view: EditorComponent,
    card_list: CardListComponent,
    dialog: DialogComponent,

    // Editor state model
    editor: DashboardEditor,

    // Services
    logger: Logger,

    // Simple UI state
    focus: Focus,
    sidebar_width: u16,
    should_quit: bool,
}

impl AppComponent {
    pub fn new(config: &Config, logger: Logger) -> Self {
        let mut editor = DashboardEditor::new(
            config.editor.clone(),
            config.palette.clone(),
            MarkupHost::new(),
            ObjectUrlRegistry::new(),
        );
        editor.ui_mut().sidebar_collapsed = config.ui.sidebar_collapsed;
        editor.ui_mut().content_collapsed = config.ui.content_collapsed;

        let mut dialog = DialogComponent::new();
        dialog.set_logger(logger.clone());

        let mut app = Self {
            sidebar: SidebarComponent::new(),
            toolbar: ToolbarComponent::new(),
            editor_view: EditorComponent::new(),
            card_list: CardListComponent::new(),
            dialog,
            editor,
            logger,
            focus: Focus::Sidebar,
            sidebar_width: config.ui.sidebar_width,
            should_quit: false,
        };
        app.set_focus(Focus::Sidebar);
        app.sync_component_data();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn editor(&self) -> &DashboardEditor {
        &self.editor
    }

    pub fn dialog(&self) -> &DialogComponent {
        &self.dialog
    }

    /// Expire the save banner; returns true when the screen changed
    pub fn on_tick(&mut self, now: Instant) -> bool {
        self.editor.tick(now)
    }

    fn active_tab(&self) -> Option<String> {
        self.editor.active_tab().map(str::to_string)
    }

    fn active_is_card_tab(&self) -> bool {
        self.editor.active_tab().is_some_and(|tab| self.editor.is_card_tab(tab))
    }

    /// Update all components with current data
    fn sync_component_data(&mut self) {
        if self.focus == Focus::Cards && !self.active_is_card_tab() {
            self.set_focus(Focus::Editor);
        }

        let active = self.active_tab();
        let ui = self.editor.ui();

        self.sidebar.update_data(self.editor.list_tabs().to_vec(), active.clone());
        self.sidebar.collapsed = ui.sidebar_collapsed;

        self.editor_view
            .update_data(active, self.editor.host(), self.editor.active_document());
        self.editor_view.collapsed = ui.content_collapsed;

        let cards = self
            .editor
            .active_document()
            .map(|document| document.cards.clone())
            .unwrap_or_default();
        self.card_list.update_data(cards);

        let swatches = ui
            .open_popover
            .map(|popover| {
                self.editor
                    .dispatcher()
                    .swatches(popover)
                    .into_iter()
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        self.toolbar
            .update_data(ui.open_popover, swatches, self.editor.config().font_sizes.clone());
    }

    fn set_focus(&mut self, focus: Focus) {
        let focus = match focus {
            Focus::Sidebar if self.editor.ui().sidebar_collapsed => Focus::Editor,
            Focus::Cards if !self.active_is_card_tab() => Focus::Sidebar,
            other => other,
        };

        if focus == Focus::Editor {
            self.editor.edit_region(MarkupHost::focus);
        } else if self.focus == Focus::Editor {
            self.editor.edit_region(MarkupHost::blur);
        }

        self.focus = focus;
        self.sidebar.set_focused(focus == Focus::Sidebar);
        self.editor_view.set_focused(focus == Focus::Editor);
        self.card_list.set_focused(focus == Focus::Cards);
    }

    fn next_focus(&self) -> Focus {
        match self.focus {
            Focus::Sidebar => Focus::Editor,
            Focus::Editor if self.active_is_card_tab() => Focus::Cards,
            Focus::Editor | Focus::Cards => Focus::Sidebar,
        }
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        let control = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            KeyCode::Char('q') if control => {
                self.logger.log("Global key: Ctrl+Q - quitting application".to_string());
                Action::Quit
            }
            KeyCode::F(1) => Action::ShowDialog(DialogType::Help),
            KeyCode::F(12) => {
                self.logger.log("Global key: F12 - opening logs dialog".to_string());
                Action::ShowDialog(DialogType::Logs)
            }
            KeyCode::F(2) => Action::ToggleSidebar,
            KeyCode::F(3) => Action::ToggleContentSection,
            KeyCode::Tab => Action::CycleFocus,
            KeyCode::Char('s') if control => Action::Save,
            KeyCode::Char('n') if control => Action::ShowDialog(DialogType::NewTab),
            KeyCode::Char('p') if control => Action::ShowDialog(DialogType::SectionImages),
            KeyCode::Char('b') if control => Action::Format(FormatCommand::Bold),
            KeyCode::Char('i') if control => Action::Format(FormatCommand::Italic),
            KeyCode::Char('u') if control => Action::Format(FormatCommand::Underline),
            KeyCode::Char('t') if control => Action::Format(FormatCommand::Strikethrough),
            KeyCode::Char('o') if control => Action::Format(FormatCommand::OrderedList),
            KeyCode::Char('l') if control => Action::Format(FormatCommand::UnorderedList),
            KeyCode::Char('f') if control => Action::TogglePopover(ColorPopover::Foreground),
            KeyCode::Char('g') if control => Action::TogglePopover(ColorPopover::Highlight),
            KeyCode::Char('l') if alt => Action::Format(FormatCommand::Align(Alignment::Left)),
            KeyCode::Char('e') if alt => Action::Format(FormatCommand::Align(Alignment::Center)),
            KeyCode::Char('r') if alt => Action::Format(FormatCommand::Align(Alignment::Right)),
            KeyCode::Char(digit @ '1'..='9') if alt => {
                let index = digit as usize - '1' as usize;
                match self.editor.config().font_sizes.get(index) {
                    Some(points) => Action::SetFontSize(*points),
                    None => Action::None,
                }
            }
            _ => Action::None,
        }
    }

    fn route_key(&mut self, key: KeyEvent) -> Action {
        // Dialog has priority when visible, then an open color popover
        if self.dialog.is_visible() {
            let action = self.dialog.handle_key_events(key);
            self.sync_pending_tab_name();
            return action;
        }
        if self.toolbar.is_popover_open() {
            return self.toolbar.handle_key_events(key);
        }

        let global = self.handle_global_key(key);
        if !matches!(global, Action::None) {
            return global;
        }

        match self.focus {
            Focus::Sidebar => self.sidebar.handle_key_events(key),
            Focus::Editor => self.editor_view.handle_key_events(key),
            Focus::Cards => self.card_list.handle_key_events(key),
        }
    }

    /// Mirror the new-tab prompt's input into the form's pending name
    fn sync_pending_tab_name(&mut self) {
        if self.dialog.dialog_type == Some(DialogType::NewTab) && self.editor.ui().new_tab_form.open {
            self.editor.ui_mut().set_pending_tab_name(self.dialog.input_buffer.clone());
        }
    }

    /// Pasted text goes to an open prompt, else into the content region
    fn paste(&mut self, text: &str) -> Action {
        if self.dialog.is_visible() {
            let mut action = Action::None;
            for c in text.chars().filter(|c| !c.is_control()) {
                action = self.dialog.handle_key_events(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
            }
            self.sync_pending_tab_name();
            return action;
        }
        if self.focus == Focus::Editor {
            self.editor.edit_region(|host| host.insert_str(text));
        }
        Action::None
    }

    fn apply_text_edit(&mut self, edit: TextEdit) {
        if self.focus != Focus::Editor {
            return;
        }
        self.editor.edit_region(|host| match edit {
            TextEdit::Insert(c) => host.insert_str(c.encode_utf8(&mut [0; 4])),
            TextEdit::Newline => host.insert_str("\n"),
            TextEdit::Backspace => host.backspace(),
            TextEdit::Delete => host.delete(),
            TextEdit::Left { extend } => host.move_left(extend),
            TextEdit::Right { extend } => host.move_right(extend),
            TextEdit::Home { extend } => host.move_home(extend),
            TextEdit::End { extend } => host.move_end(extend),
            TextEdit::SelectAll => host.select_all(),
        });
    }

    /// Handle app-level actions that change the editor state model
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.should_quit = true;
                Action::None
            }
            Action::NavigateToTab(tab) => {
                if self.editor.select_tab(&tab) {
                    self.logger.log(format!("Navigation: switched to section '{}'", tab));
                    if self.focus == Focus::Editor {
                        self.editor.edit_region(MarkupHost::focus);
                    }
                }
                Action::None
            }
            Action::CycleFocus => {
                let next = self.next_focus();
                self.set_focus(next);
                Action::None
            }
            Action::FocusPane(focus) => {
                self.set_focus(focus);
                Action::None
            }
            Action::AddTab(name) => {
                self.editor.ui_mut().set_pending_tab_name(name);
                match self.editor.submit_new_tab() {
                    Ok(name) => {
                        self.logger.log(format!("{}: '{}'", SUCCESS_TAB_ADDED, name));
                        self.dialog.close();
                    }
                    Err(rejection) => {
                        self.logger.log(format!("New tab rejected: {}", rejection));
                        self.dialog.set_error(rejection.to_string());
                    }
                }
                Action::None
            }
            Action::Save => {
                self.editor.save(Instant::now());
                self.logger.log("Save: changes saved".to_string());
                Action::None
            }
            Action::ToggleSidebar => {
                self.editor.ui_mut().toggle_sidebar();
                if self.editor.ui().sidebar_collapsed && self.focus == Focus::Sidebar {
                    self.set_focus(Focus::Editor);
                }
                Action::None
            }
            Action::ToggleContentSection => {
                self.editor.ui_mut().toggle_content();
                Action::None
            }
            Action::EditText(edit) => {
                self.apply_text_edit(edit);
                Action::None
            }
            Action::Format(command) => {
                if !self.editor.apply_command(&command) {
                    self.logger.log(format!("Format: '{}' was not applied", command.name()));
                }
                Action::None
            }
            Action::SetFontSize(points) => {
                if self.editor.set_font_size(points) {
                    self.toolbar.current_font_size = Some(points);
                }
                Action::None
            }
            Action::TogglePopover(popover) => {
                self.editor.toggle_popover(popover);
                Action::None
            }
            Action::PickColor { popover, color } => {
                self.editor.pick_color(popover, &color);
                self.logger.log(format!("Format: {} {}", popover.title(), color));
                Action::None
            }
            Action::ClosePopover => {
                self.editor.ui_mut().close_popovers();
                Action::None
            }
            Action::SetSectionImages(paths) => {
                if let Some(tab) = self.active_tab() {
                    let files = paths.into_iter().map(LocalFile::from_path).collect();
                    self.editor.set_section_images(&tab, files);
                }
                Action::None
            }
            Action::AddCard => {
                if let Some(tab) = self.active_tab() {
                    if self.editor.add_card(&tab).is_some() {
                        self.logger.log(format!("{} to '{}'", SUCCESS_CARD_ADDED, tab));
                        let count = self.editor.get_document(&tab).map_or(0, |doc| doc.cards.len());
                        self.card_list.selected = count.saturating_sub(1);
                    }
                }
                Action::None
            }
            Action::UpdateCard { card_id, patch } => {
                if let Some(tab) = self.active_tab() {
                    self.editor.update_card(&tab, card_id, patch);
                }
                Action::None
            }
            Action::SetCardImage { card_id, path } => {
                if let Some(tab) = self.active_tab() {
                    self.editor.set_card_image(&tab, card_id, LocalFile::from_path(path));
                }
                Action::None
            }
            Action::ShowDialog(ref dialog_type) => {
                self.logger.log(format!("Dialog: Showing dialog {:?}", dialog_type));
                if *dialog_type == DialogType::NewTab {
                    self.editor.ui_mut().open_new_tab_form();
                }
                Action::None
            }
            Action::HideDialog => {
                if self.editor.ui().new_tab_form.open {
                    self.editor.ui_mut().close_new_tab_form();
                }
                Action::None
            }
            _ => Action::None,
        }
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) -> anyhow::Result<()> {
        let action = match event_type {
            EventType::Key(key) => self.route_key(key),
            EventType::Paste(text) => self.paste(&text),
            EventType::Tick => {
                self.on_tick(Instant::now());
                Action::None
            }
            EventType::Resize(_, _) => Action::None,
        };

        // Process action through component hierarchy
        let action = self.update(action);

        // Handle app-level actions
        let _final_action = self.handle_app_action(action);

        // Update component data after any changes
        self.sync_component_data();

        Ok(())
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        // This shouldn't be called directly - use handle_event instead
        self.route_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        let action = self.dialog.update(action);
        let action = self.sidebar.update(action);
        self.card_list.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let main_chunks = LayoutManager::main_layout(rect);
        let ui = self.editor.ui();
        let body = LayoutManager::body_layout(main_chunks[0], self.sidebar_width, ui.sidebar_collapsed);
        let save_status = ui.save_status.message().map(str::to_string);
        let areas = LayoutManager::main_pane_layout(body[1], ui.content_collapsed, self.active_is_card_tab());

        self.sidebar.render(f, body[0]);
        self.toolbar.render(f, areas.toolbar);
        self.editor_view.render(f, areas.editor);
        self.editor_view.render_section_images(f, areas.images);
        if let Some(cards_area) = areas.cards {
            self.card_list.render(f, cards_area);
        }
        StatusBar::render(f, main_chunks[1], save_status.as_deref(), self.focus);

        // Render dialog on top if visible (includes help dialog)
        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}
