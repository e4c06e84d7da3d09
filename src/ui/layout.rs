//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the sidebar when collapsed to its rail
pub const COLLAPSED_SIDEBAR_WIDTH: u16 = 3;

/// Areas of the main pane, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainAreas {
    pub toolbar: Rect,
    pub editor: Rect,
    pub images: Rect,
    pub cards: Option<Rect>,
}

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Calculate the main layout areas (sidebar+content on top, status bar below)
    #[must_use]
    pub fn main_layout(area: Rect) -> Vec<Rect> {
        let top_height = area.height.saturating_sub(1);
        let top_area = Rect::new(area.x, area.y, area.width, top_height);
        let status_area = Rect::new(area.x, area.y + top_height, area.width, 1);

        vec![top_area, status_area]
    }

    /// Split the top area into sidebar and main pane
    #[must_use]
    pub fn body_layout(area: Rect, sidebar_width: u16, sidebar_collapsed: bool) -> Vec<Rect> {
        let sidebar_width = if sidebar_collapsed {
            COLLAPSED_SIDEBAR_WIDTH
        } else {
            sidebar_width.min(area.width / 2)
        };

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(sidebar_width), Constraint::Min(0)])
            .split(area)
            .to_vec()
    }

    /// Split the main pane into toolbar, editor, image line and optional card list
    #[must_use]
    pub fn main_pane_layout(area: Rect, content_collapsed: bool, with_cards: bool) -> MainAreas {
        let editor = if content_collapsed {
            Constraint::Length(3)
        } else {
            Constraint::Min(5)
        };
        let cards = if with_cards {
            Constraint::Percentage(40)
        } else {
            Constraint::Length(0)
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), editor, Constraint::Length(3), cards])
            .split(area);

        MainAreas {
            toolbar: chunks[0],
            editor: chunks[1],
            images: chunks[2],
            cards: with_cards.then_some(chunks[3]),
        }
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Calculate a centered rectangle with percentage width and fixed line height
    #[must_use]
    pub fn centered_rect_lines(percent_x: u16, height_lines: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(height_lines),
                Constraint::Min(0),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}
