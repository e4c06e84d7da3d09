//! Content pane: the active section's editable markup region.

use crate::editor::{Document, MarkupHost};
use crate::ui::core::{
    actions::{Action, Focus, TextEdit},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, Paragraph},
    Frame,
};
use std::ops::Range;

pub struct EditorComponent {
    pub tab: Option<String>,
    pub markup: String,
    pub selection: Option<Range<usize>>,
    pub caret: Option<usize>,
    pub section_images: Vec<String>,
    pub preview: Option<String>,
    pub focused: bool,
    pub collapsed: bool,
}

impl Default for EditorComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorComponent {
    pub fn new() -> Self {
        Self {
            tab: None,
            markup: String::new(),
            selection: None,
            caret: None,
            section_images: Vec::new(),
            preview: None,
            focused: false,
            collapsed: false,
        }
    }

    pub fn update_data(&mut self, tab: Option<String>, host: &MarkupHost, document: Option<&Document>) {
        self.tab = tab;
        self.markup = host.markup().to_string();
        self.selection = host.selection();
        self.caret = host.caret();
        self.section_images = document
            .map(|doc| doc.section_images.iter().map(|file| file.name.clone()).collect())
            .unwrap_or_default();
        self.preview = document.and_then(|doc| doc.section_image_preview.as_ref().map(|url| url.to_string()));
    }

    fn show_caret(&self) -> bool {
        self.focused && self.selection.as_ref().is_some_and(|range| range.is_empty())
    }

    fn caret_span() -> Span<'static> {
        Span::styled("█", Style::default().fg(Color::Cyan))
    }

    fn flush(buffer: &mut String, selected: bool, spans: &mut Vec<Span<'static>>) {
        if buffer.is_empty() {
            return;
        }
        let text = std::mem::take(buffer);
        spans.push(if selected {
            Span::styled(text, Style::default().add_modifier(Modifier::REVERSED))
        } else {
            Span::raw(text)
        });
    }

    /// Split the markup into lines, reversing the selection and drawing the caret
    fn styled_lines(&self) -> (Vec<Line<'static>>, usize) {
        let selection = self.selection.clone().unwrap_or(0..0);
        let caret = self.caret.unwrap_or(usize::MAX);
        let show_caret = self.show_caret();

        let mut lines = Vec::new();
        let mut caret_line = 0;
        let mut line_start = 0;

        for (index, raw) in self.markup.split('\n').enumerate() {
            let line_end = line_start + raw.len();
            let mut spans: Vec<Span<'static>> = Vec::new();
            let mut buffer = String::new();
            let mut buffer_selected = false;

            for (offset, ch) in raw.char_indices() {
                let position = line_start + offset;
                if show_caret && position == caret {
                    Self::flush(&mut buffer, buffer_selected, &mut spans);
                    spans.push(Self::caret_span());
                }
                let selected = selection.contains(&position);
                if selected != buffer_selected {
                    Self::flush(&mut buffer, buffer_selected, &mut spans);
                    buffer_selected = selected;
                }
                buffer.push(ch);
            }
            Self::flush(&mut buffer, buffer_selected, &mut spans);

            if show_caret && caret == line_end {
                spans.push(Self::caret_span());
            }
            if (line_start..=line_end).contains(&caret) {
                caret_line = index;
            }

            lines.push(Line::from(spans));
            line_start = line_end + 1;
        }

        (lines, caret_line)
    }

    pub fn render_section_images(&self, f: &mut Frame, rect: Rect) {
        let text = if self.section_images.is_empty() {
            "No image selected (Ctrl+P to choose)".to_string()
        } else {
            format!(
                "{} • preview {}",
                self.section_images.join(", "),
                self.preview.as_deref().unwrap_or("-")
            )
        };

        let paragraph = Paragraph::new(text).style(Style::default().fg(Color::Gray)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(" Section image ")
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        f.render_widget(paragraph, rect);
    }
}

impl Component for EditorComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let extend = key.modifiers.contains(KeyModifiers::SHIFT);
        let control = key.modifiers.contains(KeyModifiers::CONTROL);

        let edit = match key.code {
            KeyCode::Char('a') if control => TextEdit::SelectAll,
            KeyCode::Char(c) if !control && !key.modifiers.contains(KeyModifiers::ALT) => TextEdit::Insert(c),
            KeyCode::Enter => TextEdit::Newline,
            KeyCode::Backspace => TextEdit::Backspace,
            KeyCode::Delete => TextEdit::Delete,
            KeyCode::Left => TextEdit::Left { extend },
            KeyCode::Right => TextEdit::Right { extend },
            KeyCode::Home => TextEdit::Home { extend },
            KeyCode::End => TextEdit::End { extend },
            KeyCode::Esc => return Action::FocusPane(Focus::Sidebar),
            _ => return Action::None,
        };
        Action::EditText(edit)
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let title = format!(" {} ", self.tab.as_deref().unwrap_or("No section"));
        let border_color = if self.focused { Color::Cyan } else { Color::DarkGray };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title)
            .title_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            .border_style(Style::default().fg(border_color));

        if self.collapsed {
            let hint = Paragraph::new("Content collapsed (F3 to expand)")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            f.render_widget(hint, rect);
            return;
        }

        let (lines, caret_line) = self.styled_lines();
        let visible = rect.height.saturating_sub(2) as usize;
        let scroll = caret_line.saturating_sub(visible.saturating_sub(1));

        let paragraph = Paragraph::new(lines)
            .block(block)
            .style(Style::default().fg(Color::White))
            .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0));
        f.render_widget(paragraph, rect);
    }
}
