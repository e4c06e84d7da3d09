use crate::support::key;
use chatolution::editor::CardPatch;
use chatolution::ui::components::dialog_component::parse_paths;
use chatolution::ui::components::DialogComponent;
use chatolution::ui::core::{Action, Component, DialogType};
use crossterm::event::KeyCode;
use std::path::PathBuf;
use uuid::Uuid;

fn open(dialog_type: DialogType) -> DialogComponent {
    let mut dialog = DialogComponent::new();
    let passed = dialog.update(Action::ShowDialog(dialog_type.clone()));
    assert_eq!(passed, Action::ShowDialog(dialog_type));
    dialog
}

fn type_text(dialog: &mut DialogComponent, text: &str) {
    for c in text.chars() {
        dialog.handle_key_events(key(KeyCode::Char(c)));
    }
}

#[test]
fn test_parse_paths() {
    assert_eq!(
        parse_paths(" /a.png , ,/b.jpg,"),
        vec![PathBuf::from("/a.png"), PathBuf::from("/b.jpg")]
    );
    assert!(parse_paths("  ").is_empty());
}

#[test]
fn test_new_tab_submit_keeps_dialog_open() {
    let mut dialog = open(DialogType::NewTab);
    type_text(&mut dialog, "Team");
    assert_eq!(dialog.handle_key_events(key(KeyCode::Enter)), Action::AddTab("Team".to_string()));
    assert!(dialog.is_visible());

    dialog.set_error("A tab named 'Team' already exists");
    type_text(&mut dialog, "s");
    assert_eq!(dialog.error, None);
    assert_eq!(dialog.input_buffer, "Teams");
}

#[test]
fn test_cursor_editing_with_multibyte_input() {
    let mut dialog = open(DialogType::NewTab);
    type_text(&mut dialog, "Café");
    dialog.handle_key_events(key(KeyCode::Left));
    dialog.handle_key_events(key(KeyCode::Backspace));
    assert_eq!(dialog.input_buffer, "Caé");

    dialog.handle_key_events(key(KeyCode::Home));
    dialog.handle_key_events(key(KeyCode::Delete));
    assert_eq!(dialog.input_buffer, "aé");

    dialog.handle_key_events(key(KeyCode::End));
    type_text(&mut dialog, "s");
    assert_eq!(dialog.input_buffer, "aés");
    assert_eq!(dialog.cursor_position, 3);
}

#[test]
fn test_card_title_prefilled_and_submitted() {
    let card_id = Uuid::new_v4();
    let mut dialog = open(DialogType::CardTitle {
        card_id,
        current: "Old".to_string(),
    });
    assert_eq!(dialog.input_buffer, "Old");
    assert_eq!(dialog.cursor_position, 3);

    dialog.handle_key_events(key(KeyCode::Backspace));
    type_text(&mut dialog, "d!");
    assert_eq!(
        dialog.handle_key_events(key(KeyCode::Enter)),
        Action::UpdateCard {
            card_id,
            patch: CardPatch::title("Old!")
        }
    );
    assert!(!dialog.is_visible());
}

#[test]
fn test_card_image_requires_a_path() {
    let card_id = Uuid::new_v4();
    let mut dialog = open(DialogType::CardImage { card_id });
    assert_eq!(dialog.handle_key_events(key(KeyCode::Enter)), Action::None);
    assert!(dialog.is_visible());
    assert!(dialog.error.is_some());

    type_text(&mut dialog, "/tmp/x.png");
    assert_eq!(
        dialog.handle_key_events(key(KeyCode::Enter)),
        Action::SetCardImage {
            card_id,
            path: PathBuf::from("/tmp/x.png")
        }
    );
}

#[test]
fn test_empty_section_images_clears() {
    let mut dialog = open(DialogType::SectionImages);
    assert_eq!(
        dialog.handle_key_events(key(KeyCode::Enter)),
        Action::SetSectionImages(Vec::new())
    );
}

#[test]
fn test_system_dialogs_close_keys() {
    let mut help = open(DialogType::Help);
    assert_eq!(help.handle_key_events(key(KeyCode::Char('j'))), Action::None);
    assert_eq!(help.scroll.offset, 1);
    assert_eq!(help.handle_key_events(key(KeyCode::F(1))), Action::HideDialog);

    let mut info = open(DialogType::Info("Done".to_string()));
    assert_eq!(info.handle_key_events(key(KeyCode::Char('x'))), Action::HideDialog);

    let mut hidden = DialogComponent::new();
    assert_eq!(hidden.handle_key_events(key(KeyCode::Enter)), Action::None);
}

#[test]
fn test_hide_clears_input() {
    let mut dialog = open(DialogType::NewTab);
    type_text(&mut dialog, "abc");
    assert_eq!(dialog.update(Action::HideDialog), Action::HideDialog);
    assert!(!dialog.is_visible());
    assert_eq!(dialog.input_buffer, "");
    assert_eq!(dialog.cursor_position, 0);
}
