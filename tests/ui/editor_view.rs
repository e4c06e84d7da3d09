use crate::support::{ctrl, key};
use chatolution::editor::{MarkupHost, TextEditingHost};
use chatolution::ui::components::EditorComponent;
use chatolution::ui::core::{Action, Component, Focus, TextEdit};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[test]
fn test_keys_map_to_text_edits() {
    let mut view = EditorComponent::new();
    assert_eq!(
        view.handle_key_events(key(KeyCode::Char('x'))),
        Action::EditText(TextEdit::Insert('x'))
    );
    assert_eq!(view.handle_key_events(ctrl('a')), Action::EditText(TextEdit::SelectAll));
    assert_eq!(view.handle_key_events(key(KeyCode::Enter)), Action::EditText(TextEdit::Newline));
    assert_eq!(
        view.handle_key_events(KeyEvent::new(KeyCode::Left, KeyModifiers::SHIFT)),
        Action::EditText(TextEdit::Left { extend: true })
    );
    assert_eq!(
        view.handle_key_events(key(KeyCode::End)),
        Action::EditText(TextEdit::End { extend: false })
    );
    assert_eq!(view.handle_key_events(key(KeyCode::Esc)), Action::FocusPane(Focus::Sidebar));
}

#[test]
fn test_control_chords_are_not_typed() {
    let mut view = EditorComponent::new();
    assert_eq!(view.handle_key_events(ctrl('z')), Action::None);
}

#[test]
fn test_update_data_mirrors_host() {
    let mut host = MarkupHost::new();
    host.load_region("<b>Hi</b>");
    host.select(3..5);

    let mut view = EditorComponent::new();
    view.update_data(Some("About".to_string()), &host, None);
    assert_eq!(view.tab.as_deref(), Some("About"));
    assert_eq!(view.markup, "<b>Hi</b>");
    assert_eq!(view.selection, Some(3..5));
    assert_eq!(view.caret, Some(5));
    assert!(view.section_images.is_empty());
    assert!(view.preview.is_none());
}
