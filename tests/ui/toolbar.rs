use crate::support::key;
use chatolution::editor::ColorPopover;
use chatolution::ui::components::toolbar_component::swatch_color;
use chatolution::ui::components::ToolbarComponent;
use chatolution::ui::core::{Action, Component};
use crossterm::event::KeyCode;
use ratatui::style::Color;

fn swatches() -> Vec<String> {
    vec!["#FF0000".to_string(), "#00B050".to_string(), "#0070C0".to_string()]
}

#[test]
fn test_swatch_color() {
    assert_eq!(swatch_color("#FF8000"), Some(Color::Rgb(255, 128, 0)));
    assert_eq!(swatch_color("FF8000"), None);
    assert_eq!(swatch_color("#FF80"), None);
    assert_eq!(swatch_color("#GG0000"), None);
}

#[test]
fn test_keys_ignored_without_popover() {
    let mut toolbar = ToolbarComponent::new();
    assert!(!toolbar.is_popover_open());
    assert_eq!(toolbar.handle_key_events(key(KeyCode::Enter)), Action::None);
}

#[test]
fn test_choose_and_pick_swatch() {
    let mut toolbar = ToolbarComponent::new();
    toolbar.update_data(Some(ColorPopover::Highlight), swatches(), vec![16, 18, 20]);

    toolbar.handle_key_events(key(KeyCode::Left));
    assert_eq!(toolbar.selected_swatch, 2);
    toolbar.handle_key_events(key(KeyCode::Char('l')));
    toolbar.handle_key_events(key(KeyCode::Right));
    assert_eq!(toolbar.selected_swatch, 1);

    assert_eq!(
        toolbar.handle_key_events(key(KeyCode::Enter)),
        Action::PickColor {
            popover: ColorPopover::Highlight,
            color: "#00B050".to_string()
        }
    );
    assert_eq!(toolbar.handle_key_events(key(KeyCode::Esc)), Action::ClosePopover);
}

#[test]
fn test_cursor_resets_when_popover_changes() {
    let mut toolbar = ToolbarComponent::new();
    toolbar.update_data(Some(ColorPopover::Foreground), swatches(), Vec::new());
    toolbar.handle_key_events(key(KeyCode::Right));

    toolbar.update_data(Some(ColorPopover::Foreground), swatches(), Vec::new());
    assert_eq!(toolbar.selected_swatch, 1);

    toolbar.update_data(Some(ColorPopover::Highlight), swatches(), Vec::new());
    assert_eq!(toolbar.selected_swatch, 0);
}

#[test]
fn test_empty_palette_closes_popover() {
    let mut toolbar = ToolbarComponent::new();
    toolbar.update_data(Some(ColorPopover::Foreground), Vec::new(), Vec::new());
    assert_eq!(toolbar.handle_key_events(key(KeyCode::Right)), Action::ClosePopover);
}
