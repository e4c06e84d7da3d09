use crate::support::{alt, chars, ctrl, press};
use chatolution::config::Config;
use chatolution::constants::{PLACEHOLDER_ABOUT, SUCCESS_CHANGES_SAVED};
use chatolution::editor::ColorPopover;
use chatolution::logger::Logger;
use chatolution::ui::core::{Component, DialogType, EventType, Focus};
use chatolution::ui::AppComponent;
use crossterm::event::KeyCode;
use ratatui::{backend::TestBackend, Terminal};
use std::time::{Duration, Instant};

fn app() -> AppComponent {
    AppComponent::new(&Config::default(), Logger::new())
}

fn send(app: &mut AppComponent, events: impl IntoIterator<Item = EventType>) {
    for event in events {
        app.handle_event(event).unwrap();
    }
}

fn content(app: &AppComponent) -> String {
    app.editor()
        .active_document()
        .map(|doc| doc.content.clone())
        .unwrap_or_default()
}

#[test]
fn test_starts_on_first_section() {
    let app = app();
    assert_eq!(app.focus(), Focus::Sidebar);
    assert_eq!(app.editor().active_tab(), Some("About"));
    assert!(!app.dialog().is_visible());
    assert!(!app.should_quit());
}

#[test]
fn test_sidebar_navigation_switches_tab() {
    let mut app = app();
    send(&mut app, [press(KeyCode::Char('j'))]);
    assert_eq!(app.editor().active_tab(), Some("Portfolio"));

    send(&mut app, [press(KeyCode::Char('k')), press(KeyCode::Char('k'))]);
    assert_eq!(app.editor().active_tab(), Some("Blog"));
}

#[test]
fn test_new_tab_dialog_rejects_duplicate_then_adds() {
    let mut app = app();
    send(&mut app, [EventType::Key(ctrl('n'))]);
    assert_eq!(app.dialog().dialog_type, Some(DialogType::NewTab));
    assert!(app.editor().ui().new_tab_form.open);

    send(&mut app, chars("About"));
    assert_eq!(app.editor().ui().new_tab_form.pending, "About");
    send(&mut app, [press(KeyCode::Enter)]);
    assert!(app.dialog().is_visible());
    assert_eq!(app.dialog().error.as_deref(), Some("A tab named 'About' already exists"));
    assert!(app.editor().ui().new_tab_form.open);
    assert_eq!(app.editor().list_tabs().len(), 4);

    send(&mut app, (0..5).map(|_| press(KeyCode::Backspace)));
    assert_eq!(app.editor().ui().new_tab_form.pending, "");
    send(&mut app, chars("Team"));
    send(&mut app, [press(KeyCode::Enter)]);

    assert!(!app.dialog().is_visible());
    assert!(!app.editor().ui().new_tab_form.open);
    assert_eq!(app.editor().list_tabs().last().map(String::as_str), Some("Team"));
    assert_eq!(app.editor().active_tab(), Some("Team"));
    assert_eq!(content(&app), "");
}

#[test]
fn test_escape_cancels_new_tab_form() {
    let mut app = app();
    send(&mut app, [press(KeyCode::Char('a'))]);
    assert!(app.editor().ui().new_tab_form.open);

    send(&mut app, chars("Draft"));
    send(&mut app, [press(KeyCode::Esc)]);
    assert!(!app.dialog().is_visible());
    assert!(!app.editor().ui().new_tab_form.open);
    assert_eq!(app.editor().list_tabs().len(), 4);
}

#[test]
fn test_typing_and_formatting_in_editor() {
    let mut app = app();
    send(&mut app, [press(KeyCode::Tab)]);
    assert_eq!(app.focus(), Focus::Editor);

    send(&mut app, chars(" Hi"));
    assert_eq!(content(&app), format!("{} Hi", PLACEHOLDER_ABOUT));

    send(&mut app, [EventType::Key(ctrl('a')), EventType::Key(ctrl('b'))]);
    assert_eq!(content(&app), format!("<b>{} Hi</b>", PLACEHOLDER_ABOUT));

    // Other sections are untouched
    let portfolio = app.editor().get_document("Portfolio").map(|doc| doc.content.clone());
    assert_eq!(portfolio.as_deref(), Some(chatolution::constants::PLACEHOLDER_PORTFOLIO));
}

#[test]
fn test_sidebar_keys_do_not_edit_content() {
    let mut app = app();
    send(&mut app, [press(KeyCode::Char('x'))]);
    assert_eq!(content(&app), PLACEHOLDER_ABOUT);
}

#[test]
fn test_font_size_shortcut() {
    let mut app = app();
    send(&mut app, [press(KeyCode::Tab), EventType::Key(ctrl('a')), EventType::Key(alt('2'))]);
    assert_eq!(content(&app), format!("<font size=\"4\">{}</font>", PLACEHOLDER_ABOUT));
}

#[test]
fn test_color_popover_applies_swatch() {
    let mut app = app();
    send(&mut app, [press(KeyCode::Tab), EventType::Key(ctrl('a')), EventType::Key(ctrl('f'))]);
    assert_eq!(app.editor().ui().open_popover, Some(ColorPopover::Foreground));

    // Opening the other popover closes the first
    send(&mut app, [press(KeyCode::Esc), EventType::Key(ctrl('g'))]);
    assert_eq!(app.editor().ui().open_popover, Some(ColorPopover::Highlight));
    send(&mut app, [press(KeyCode::Esc), EventType::Key(ctrl('f'))]);

    send(&mut app, [press(KeyCode::Right), press(KeyCode::Enter)]);
    assert_eq!(app.editor().ui().open_popover, None);

    let swatch = app.editor().dispatcher().palette().foreground_swatches()[1].to_string();
    assert_eq!(content(&app), format!("<font color=\"{}\">{}</font>", swatch, PLACEHOLDER_ABOUT));
}

#[test]
fn test_save_banner_expires() {
    let mut app = app();
    send(&mut app, [EventType::Key(ctrl('s'))]);
    assert_eq!(app.editor().ui().save_status.message(), Some(SUCCESS_CHANGES_SAVED));

    assert!(!app.on_tick(Instant::now()));
    assert!(app.on_tick(Instant::now() + Duration::from_millis(2000)));
    assert_eq!(app.editor().ui().save_status.message(), None);
}

#[test]
fn test_card_flow() {
    let mut app = app();
    send(&mut app, [press(KeyCode::Char('j')), press(KeyCode::Tab), press(KeyCode::Tab)]);
    assert_eq!(app.editor().active_tab(), Some("Portfolio"));
    assert_eq!(app.focus(), Focus::Cards);

    let before = app.editor().active_document().map_or(0, |doc| doc.cards.len());
    send(&mut app, [press(KeyCode::Char('n'))]);
    let cards = app.editor().active_document().map(|doc| doc.cards.clone()).unwrap_or_default();
    assert_eq!(cards.len(), before + 1);

    send(&mut app, [press(KeyCode::Char('t'))]);
    assert!(matches!(app.dialog().dialog_type, Some(DialogType::CardTitle { .. })));
    send(&mut app, chars("Launch"));
    send(&mut app, [press(KeyCode::Enter)]);

    send(&mut app, [press(KeyCode::Char('i'))]);
    send(&mut app, chars("/tmp/launch.png"));
    send(&mut app, [press(KeyCode::Enter)]);

    let card = app
        .editor()
        .active_document()
        .and_then(|doc| doc.cards.last().cloned())
        .expect("card");
    assert_eq!(card.title, "Launch");
    assert_eq!(card.image_name, "launch.png");
    assert!(card.image_url.is_some());
    assert_eq!(app.editor().resources().live_count(), 1);
}

#[test]
fn test_focus_cycle_skips_cards_on_plain_sections() {
    let mut app = app();
    send(&mut app, [press(KeyCode::Tab), press(KeyCode::Tab)]);
    assert_eq!(app.focus(), Focus::Sidebar);
}

#[test]
fn test_section_images_dialog() {
    let mut app = app();
    send(&mut app, [EventType::Key(ctrl('p'))]);
    send(&mut app, chars("/tmp/hero.png, /tmp/alt.png"));
    send(&mut app, [press(KeyCode::Enter)]);

    let document = app.editor().active_document().expect("document");
    assert_eq!(document.section_images.len(), 2);
    assert_eq!(document.section_images[0].name, "hero.png");
    assert!(document.section_image_preview.is_some());
    assert_eq!(app.editor().resources().live_count(), 1);
}

#[test]
fn test_collapse_toggles_move_focus() {
    let mut app = app();
    send(&mut app, [press(KeyCode::F(2))]);
    assert!(app.editor().ui().sidebar_collapsed);
    assert_eq!(app.focus(), Focus::Editor);

    send(&mut app, [press(KeyCode::F(3))]);
    assert!(app.editor().ui().content_collapsed);
}

#[test]
fn test_help_dialog_and_quit() {
    let mut app = app();
    send(&mut app, [press(KeyCode::F(1))]);
    assert_eq!(app.dialog().dialog_type, Some(DialogType::Help));

    // Keys go to the dialog while it is open
    send(&mut app, [press(KeyCode::Char('j'))]);
    assert_eq!(app.editor().active_tab(), Some("About"));

    send(&mut app, [press(KeyCode::Esc), EventType::Key(ctrl('q'))]);
    assert!(!app.dialog().is_visible());
    assert!(app.should_quit());
}

#[test]
fn test_renders_sections_and_status() {
    let mut app = app();
    send(&mut app, [EventType::Key(ctrl('s'))]);

    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    terminal.draw(|f| app.render(f, f.area())).unwrap();

    let screen: String = terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect();
    assert!(screen.contains("Sections"));
    assert!(screen.contains("Portfolio"));
    assert!(screen.contains("Changes saved successfully"));
}

#[test]
fn test_paste_into_editor_and_prompt() {
    let mut app = app();
    send(&mut app, [EventType::Paste("ignored".to_string())]);
    assert_eq!(content(&app), PLACEHOLDER_ABOUT);

    send(&mut app, [press(KeyCode::Tab), EventType::Paste(" More".to_string())]);
    assert_eq!(content(&app), format!("{} More", PLACEHOLDER_ABOUT));

    send(&mut app, [EventType::Key(ctrl('n')), EventType::Paste("Team\n".to_string())]);
    assert_eq!(app.dialog().input_buffer, "Team");
    assert_eq!(app.editor().ui().new_tab_form.pending, "Team");
}

#[test]
fn test_event_handler_tick_rate() {
    use chatolution::constants::TICK_RATE_MS;
    use chatolution::ui::core::EventHandler;

    assert_eq!(EventHandler::new().tick_rate(), Duration::from_millis(TICK_RATE_MS));
    assert_eq!(
        EventHandler::with_tick_rate(Duration::from_millis(250)).tick_rate(),
        Duration::from_millis(250)
    );
}

#[test]
fn test_renders_prompt_with_rejection() {
    let mut app = app();
    send(&mut app, [EventType::Key(ctrl('n'))]);
    send(&mut app, chars("Blog"));
    send(&mut app, [press(KeyCode::Enter)]);

    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    terminal.draw(|f| app.render(f, f.area())).unwrap();

    let screen: String = terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect();
    assert!(screen.contains("New Tab"));
    assert!(screen.contains("A tab named 'Blog' already exists"));
}
