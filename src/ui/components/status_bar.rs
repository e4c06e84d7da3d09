//! Status bar component

use crate::ui::core::Focus;
use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Shortcut hints for the focused pane
    pub fn hints(focus: Focus) -> &'static str {
        match focus {
            Focus::Sidebar => "j/k: switch section • a: add tab • Enter: edit • Tab: focus • F1: help • Ctrl+Q: quit",
            Focus::Editor => "Ctrl+S: save • Ctrl+B/I/U: format • Ctrl+F/G: colors • Ctrl+P: images • Esc: back",
            Focus::Cards => "n: add card • t: title • d: description • i: image • Esc: back",
        }
    }

    /// Render the save banner while it is live, otherwise the hints
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, save_status: Option<&str>, focus: Focus) {
        let (status_text, status_color) = match save_status {
            Some(message) => (message, Color::Green),
            None => (Self::hints(focus), Color::Gray),
        };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
