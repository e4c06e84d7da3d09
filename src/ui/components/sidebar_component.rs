//! Sidebar listing the site sections.
//!
//! Sections appear in registry order with the active one highlighted, followed
//! by the "+ Add tab" affordance. Moving the cursor switches the active tab.

use crate::ui::core::{
    actions::{Action, DialogType, Focus},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{block::BorderType, Block, Borders, List, ListItem, ListState},
    Frame,
};

const ADD_TAB_LABEL: &str = "+ Add tab";

pub struct SidebarComponent {
    pub tabs: Vec<String>,
    pub active: Option<String>,
    pub focused: bool,
    pub collapsed: bool,
    list_state: ListState,
}

impl Default for SidebarComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl SidebarComponent {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            tabs: Vec::new(),
            active: None,
            focused: true,
            collapsed: false,
            list_state,
        }
    }

    pub fn update_data(&mut self, tabs: Vec<String>, active: Option<String>) {
        self.tabs = tabs;
        self.active = active;
        self.update_list_state();
    }

    fn active_index(&self) -> Option<usize> {
        let active = self.active.as_deref()?;
        self.tabs.iter().position(|tab| tab == active)
    }

    fn update_list_state(&mut self) {
        self.list_state.select(Some(self.active_index().unwrap_or(0)));
    }

    fn navigate(&self, forward: bool) -> Action {
        if self.tabs.is_empty() {
            return Action::None;
        }
        let len = self.tabs.len();
        let current = self.active_index().unwrap_or(0);
        let next = if forward { (current + 1) % len } else { (current + len - 1) % len };
        Action::NavigateToTab(self.tabs[next].clone())
    }
}

impl Component for SidebarComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.navigate(true),
            KeyCode::Up | KeyCode::Char('k') => self.navigate(false),
            KeyCode::Char('a') | KeyCode::Char('+') => Action::ShowDialog(DialogType::NewTab),
            KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => Action::FocusPane(Focus::Editor),
            KeyCode::Char('q') => Action::Quit,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NavigateToTab(tab) => {
                self.active = Some(tab.clone());
                self.update_list_state();
                Action::NavigateToTab(tab)
            }
            _ => action,
        }
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let border_color = if self.focused { Color::Cyan } else { Color::DarkGray };

        if self.collapsed {
            let rail = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border_color));
            f.render_widget(rail, rect);
            return;
        }

        let active = self.active.as_deref();
        let mut items: Vec<ListItem> = self
            .tabs
            .iter()
            .map(|tab| {
                let style = if Some(tab.as_str()) == active {
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                ListItem::new(format!(" {}", tab)).style(style)
            })
            .collect();
        items.push(ListItem::new(format!(" {}", ADD_TAB_LABEL)).style(Style::default().fg(Color::Green)));

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title("Sections")
                    .title_style(Style::default().fg(Color::White))
                    .border_style(Style::default().fg(border_color)),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("▶");

        f.render_stateful_widget(list, rect, &mut self.list_state);
    }
}
