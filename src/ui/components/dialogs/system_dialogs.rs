use super::scroll_behavior::DialogScroll;
use crate::constants::DIALOG_TITLE_LOGS;
use crate::logger::Logger;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, Wrap},
    Frame,
};

const HELP_CONTENT: &str = r"
CHATOLUTION - Site Content Dashboard
====================================

NAVIGATION
----------
Tab         Cycle focus: sections, content, cards
j/k ↑↓      Switch section (sidebar)
a / +       Add a new section tab (sidebar)
Enter       Edit the selected section's content
Esc         Leave the current pane or close dialogs

CONTENT EDITING
---------------
Typing      Insert text at the caret
Shift+←→    Extend the selection
Ctrl+A      Select the whole region
Ctrl+S      Save (shows a confirmation banner)
Ctrl+N      Add a new section tab

FORMATTING
----------
Ctrl+B      Bold
Ctrl+I      Italic
Ctrl+U      Underline
Ctrl+T      Strikethrough
Ctrl+O      Ordered list
Ctrl+L      Unordered list
Alt+L/E/R   Align left / center / right
Alt+1/2/3   Font size 16 / 18 / 20
Ctrl+F      Text color palette
Ctrl+G      Highlight color palette
Ctrl+P      Choose section images

CARDS (Portfolio, Services)
---------------------------
n           Add a blank card
t           Edit the selected card's title
d           Edit the selected card's description
i           Choose the selected card's image

GENERAL CONTROLS
----------------
F1          Toggle this help
F2          Collapse or expand the sidebar
F3          Collapse or expand the content section
F12         Show the log viewer
Ctrl+Q      Quit application

HELP PANEL SCROLLING
--------------------
j/k ↑↓      Scroll line by line
PageUp/Down Page through help content
Home/End    Jump to top or bottom

Press 'Esc' or 'F1' to close this help panel
";

fn render_scrollbar(f: &mut Frame, area: Rect, scroll: &mut DialogScroll) {
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(Some("↑"))
        .end_symbol(Some("↓"))
        .track_symbol(Some("│"))
        .thumb_symbol("▐")
        .style(Style::default().fg(Color::Gray))
        .thumb_style(Style::default().fg(Color::White));

    f.render_stateful_widget(scrollbar, area, &mut scroll.scrollbar_state);
}

/// Slice `content` to the visible window, clamping the scroll offset
fn visible_window(content: &str, visible_height: usize, scroll: &mut DialogScroll) -> (String, bool) {
    let lines: Vec<&str> = content.lines().collect();
    let total_lines = lines.len();
    let max_scroll = total_lines.saturating_sub(visible_height);
    let clamped_offset = scroll.offset.min(max_scroll);
    scroll.offset = clamped_offset;

    scroll.scrollbar_state = scroll
        .scrollbar_state
        .content_length(total_lines)
        .viewport_content_length(visible_height)
        .position(clamped_offset);

    let text = lines
        .iter()
        .skip(clamped_offset)
        .take(visible_height)
        .copied()
        .collect::<Vec<_>>()
        .join("\n");
    (text, total_lines > visible_height)
}

fn render_message_dialog(
    f: &mut Frame,
    area: Rect,
    title: &str,
    color: Color,
    height: u16,
    message: &str,
    scroll: &mut DialogScroll,
) {
    let dialog_area = LayoutManager::centered_rect_lines(60, height, area);
    f.render_widget(Clear, dialog_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
        .style(Style::default().fg(color));

    let content_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + 1,
        dialog_area.width.saturating_sub(2),
        dialog_area.height.saturating_sub(4),
    );
    let instructions_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + dialog_area.height.saturating_sub(2),
        dialog_area.width.saturating_sub(2),
        1,
    );

    let (text, scrollable) = visible_window(message, content_area.height as usize, scroll);

    let message_paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });
    let instructions_paragraph = Paragraph::new("Press any key to continue • j/k to scroll if needed")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);

    f.render_widget(block, dialog_area);
    f.render_widget(message_paragraph, content_area);
    f.render_widget(instructions_paragraph, instructions_area);

    if scrollable {
        render_scrollbar(f, content_area, scroll);
    }
}

pub fn render_info_dialog(f: &mut Frame, area: Rect, message: &str, scroll: &mut DialogScroll) {
    render_message_dialog(f, area, "ℹ Info", Color::Blue, 10, message, scroll);
}

pub fn render_error_dialog(f: &mut Frame, area: Rect, message: &str, scroll: &mut DialogScroll) {
    render_message_dialog(f, area, "⚠ Error", Color::Red, 12, message, scroll);
}

fn render_full_screen_text(f: &mut Frame, area: Rect, title: &str, content: &str, scroll: &mut DialogScroll) {
    let outer = LayoutManager::centered_rect(90, 90, area);
    f.render_widget(Clear, outer);

    let margin_x = 2;
    let margin_y = 1;
    let content_area = Rect::new(
        outer.x + margin_x,
        outer.y + margin_y,
        outer.width.saturating_sub(margin_x * 2),
        outer.height.saturating_sub(margin_y * 2),
    );

    let visible_height = content_area.height.saturating_sub(2) as usize;
    let (text, scrollable) = visible_window(content, visible_height, scroll);

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_string())
                .title_alignment(Alignment::Center),
        )
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);
    f.render_widget(paragraph, content_area);

    if scrollable {
        render_scrollbar(f, content_area, scroll);
    }
}

pub fn render_help_dialog(f: &mut Frame, area: Rect, scroll: &mut DialogScroll) {
    render_full_screen_text(f, area, "📖 Help - Press 'Esc' or 'F1' to close", HELP_CONTENT, scroll);
}

pub fn render_logs_dialog(f: &mut Frame, area: Rect, logger: Option<&Logger>, scroll: &mut DialogScroll) {
    let logs = match logger {
        Some(logger) => logger.get_logs(),
        None => vec!["No logger available".to_string()],
    };
    let content = if logs.is_empty() {
        "No log entries yet".to_string()
    } else {
        logs.join("\n")
    };

    render_full_screen_text(f, area, DIALOG_TITLE_LOGS, &content, scroll);
}
