//! Formatting toolbar and its color popovers.

use crate::editor::ColorPopover;
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, Paragraph},
    Frame,
};

pub struct ToolbarComponent {
    pub popover: Option<ColorPopover>,
    pub swatches: Vec<String>,
    pub selected_swatch: usize,
    pub font_sizes: Vec<u16>,
    /// Last size applied from the toolbar, in points
    pub current_font_size: Option<u16>,
}

impl Default for ToolbarComponent {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse `#RRGGBB` into a terminal color
pub fn swatch_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(hex.get(range)?, 16).ok();
    Some(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

impl ToolbarComponent {
    pub fn new() -> Self {
        Self {
            popover: None,
            swatches: Vec::new(),
            selected_swatch: 0,
            font_sizes: Vec::new(),
            current_font_size: None,
        }
    }

    /// Sync the popover; the swatch cursor resets whenever a different popover opens
    pub fn update_data(&mut self, popover: Option<ColorPopover>, swatches: Vec<String>, font_sizes: Vec<u16>) {
        if popover != self.popover {
            self.selected_swatch = 0;
        }
        self.popover = popover;
        self.swatches = swatches;
        self.font_sizes = font_sizes;
    }

    pub fn is_popover_open(&self) -> bool {
        self.popover.is_some()
    }

    fn shortcuts_line(&self) -> Line<'static> {
        let key = |k: &str| Span::styled(k.to_string(), Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
        let text = |t: &str| Span::styled(t.to_string(), Style::default().fg(Color::Gray));
        let sizes = self
            .font_sizes
            .iter()
            .enumerate()
            .map(|(i, size)| format!("{}={}", i + 1, size))
            .collect::<Vec<_>>()
            .join(" ");
        let current = self
            .current_font_size
            .map(|size| format!("{}pt", size))
            .unwrap_or_else(|| "default".to_string());

        Line::from(vec![
            key("^B"),
            text(" bold "),
            key("^I"),
            text(" italic "),
            key("^U"),
            text(" underline "),
            key("^T"),
            text(" strike │ "),
            key("^O/^L"),
            text(" lists │ "),
            key("M-l/e/r"),
            text(" align │ "),
            key("M-1..3"),
            text(format!(" size ({}, now {}) │ ", sizes, current).as_str()),
            key("^F"),
            text(" color "),
            key("^G"),
            text(" highlight"),
        ])
    }

    fn popover_line(&self, popover: ColorPopover) -> Line<'static> {
        let mut spans = vec![Span::styled(
            format!("{}: ", popover.title()),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )];
        for (index, hex) in self.swatches.iter().enumerate() {
            let color = swatch_color(hex).unwrap_or(Color::White);
            let marker = if index == self.selected_swatch { "[■]" } else { " ■ " };
            spans.push(Span::styled(marker.to_string(), Style::default().fg(color)));
        }
        if let Some(hex) = self.swatches.get(self.selected_swatch) {
            spans.push(Span::styled(
                format!("  {} • ←/→ choose • Enter apply • Esc close", hex),
                Style::default().fg(Color::Gray),
            ));
        }
        Line::from(spans)
    }
}

impl Component for ToolbarComponent {
    /// Only called while a popover is open
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let Some(popover) = self.popover else {
            return Action::None;
        };
        if self.swatches.is_empty() {
            return Action::ClosePopover;
        }

        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.selected_swatch = (self.selected_swatch + self.swatches.len() - 1) % self.swatches.len();
                Action::None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.selected_swatch = (self.selected_swatch + 1) % self.swatches.len();
                Action::None
            }
            KeyCode::Enter => match self.swatches.get(self.selected_swatch) {
                Some(color) => Action::PickColor {
                    popover,
                    color: color.clone(),
                },
                None => Action::ClosePopover,
            },
            KeyCode::Esc => Action::ClosePopover,
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let line = match self.popover {
            Some(popover) => self.popover_line(popover),
            None => self.shortcuts_line(),
        };

        let paragraph = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(" Format ")
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        f.render_widget(paragraph, rect);
    }
}
