use super::actions::Action;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

/// A pane or overlay of the dashboard.
///
/// Actions travel through [`Component::update`] as a chain: each component
/// consumes what it owns and hands the rest on.
pub trait Component {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action;

    fn update(&mut self, action: Action) -> Action {
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect);

    /// Keyboard focus entered (`true`) or left the pane
    fn set_focused(&mut self, _focused: bool) {}
}
