//! Card collection of a card-bearing section.

use crate::editor::Card;
use crate::ui::core::{
    actions::{Action, DialogType, Focus},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, List, ListItem, ListState},
    Frame,
};

pub struct CardListComponent {
    pub cards: Vec<Card>,
    pub selected: usize,
    pub focused: bool,
    list_state: ListState,
}

impl Default for CardListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl CardListComponent {
    pub fn new() -> Self {
        Self {
            cards: Vec::new(),
            selected: 0,
            focused: false,
            list_state: ListState::default(),
        }
    }

    pub fn update_data(&mut self, cards: Vec<Card>) {
        self.cards = cards;
        if self.selected >= self.cards.len() {
            self.selected = self.cards.len().saturating_sub(1);
        }
        self.list_state
            .select(if self.cards.is_empty() { None } else { Some(self.selected) });
    }

    pub fn selected_card(&self) -> Option<&Card> {
        self.cards.get(self.selected)
    }

    fn with_selected(&self, build: impl FnOnce(&Card) -> DialogType) -> Action {
        match self.selected_card() {
            Some(card) => Action::ShowDialog(build(card)),
            None => Action::None,
        }
    }
}

impl Component for CardListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') if !self.cards.is_empty() => {
                Action::SelectCard((self.selected + 1) % self.cards.len())
            }
            KeyCode::Up | KeyCode::Char('k') if !self.cards.is_empty() => {
                Action::SelectCard((self.selected + self.cards.len() - 1) % self.cards.len())
            }
            KeyCode::Char('n') => Action::AddCard,
            KeyCode::Char('t') => self.with_selected(|card| DialogType::CardTitle {
                card_id: card.id,
                current: card.title.clone(),
            }),
            KeyCode::Char('d') => self.with_selected(|card| DialogType::CardDescription {
                card_id: card.id,
                current: card.description.clone(),
            }),
            KeyCode::Char('i') => self.with_selected(|card| DialogType::CardImage { card_id: card.id }),
            KeyCode::Esc => Action::FocusPane(Focus::Editor),
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::SelectCard(index) => {
                self.selected = index;
                self.list_state.select(Some(index));
                Action::None
            }
            _ => action,
        }
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let items: Vec<ListItem> = self
            .cards
            .iter()
            .map(|card| {
                let title = if card.title.is_empty() { "(untitled)" } else { card.title.as_str() };
                let image = if card.image_name.is_empty() {
                    "no image".to_string()
                } else {
                    card.image_name.clone()
                };
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(title.to_string(), Style::default().add_modifier(Modifier::BOLD)),
                        Span::styled(format!("  [{}]", image), Style::default().fg(Color::DarkGray)),
                    ]),
                    Line::from(Span::styled(
                        format!("  {}", card.description),
                        Style::default().fg(Color::Gray),
                    )),
                ])
            })
            .collect();

        let border_color = if self.focused { Color::Cyan } else { Color::DarkGray };
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(format!(" Cards ({}) • n add • t title • d description • i image ", self.cards.len()))
                    .border_style(Style::default().fg(border_color)),
            )
            .highlight_style(Style::default().bg(Color::DarkGray))
            .highlight_symbol("▶ ");

        f.render_stateful_widget(list, rect, &mut self.list_state);
    }
}
