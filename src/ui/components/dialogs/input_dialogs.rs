use super::common::{create_dialog_block, create_input_paragraph, create_instructions_paragraph, shortcuts};
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Clear, Paragraph},
    Frame,
};

/// Text prompt shared by the tab, card and image dialogs
pub struct InputPrompt<'a> {
    pub title: &'a str,
    pub field_title: &'a str,
    pub hint: Option<&'a str>,
    pub adds: bool,
}

pub fn render_input_dialog(
    f: &mut Frame,
    area: Rect,
    prompt: &InputPrompt,
    input_buffer: &str,
    cursor_position: usize,
    error: Option<&str>,
) {
    let dialog_area = LayoutManager::centered_rect_lines(65, 10, area);
    f.render_widget(Clear, dialog_area);

    let main_block = create_dialog_block(prompt.title, Color::Cyan);
    let inner_area = main_block.inner(dialog_area);
    f.render_widget(main_block, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Input field
            Constraint::Length(1), // Hint or validation error
            Constraint::Length(1), // Instructions
        ])
        .split(inner_area);

    f.render_widget(
        create_input_paragraph(input_buffer, cursor_position, prompt.field_title),
        chunks[0],
    );

    let status = match (error, prompt.hint) {
        (Some(error), _) => Paragraph::new(error.to_string()).style(Style::default().fg(Color::Red)),
        (None, Some(hint)) => Paragraph::new(hint.to_string()).style(Style::default().fg(Color::DarkGray)),
        (None, None) => Paragraph::new(""),
    };
    f.render_widget(status, chunks[1]);

    let submit = if prompt.adds { shortcuts::ENTER_ADD } else { shortcuts::ENTER_SAVE };
    f.render_widget(
        create_instructions_paragraph(&[submit, shortcuts::SEPARATOR, shortcuts::ESC_CANCEL]),
        chunks[2],
    );
}
