use chatolution::editor::{MarkupHost, TextEditingHost};

fn host_with(markup: &str) -> MarkupHost {
    let mut host = MarkupHost::new();
    host.load_region(markup);
    host
}

fn selected_all(markup: &str) -> MarkupHost {
    let mut host = host_with(markup);
    host.select_all();
    host
}

#[test]
fn test_bold_toggles_on_selection() {
    let mut host = host_with("Hello world");
    host.select(6..11);

    assert!(host.exec_command("bold", None));
    assert_eq!(host.markup(), "Hello <b>world</b>");
    assert_eq!(host.selection(), Some(9..14));

    assert!(host.exec_command("bold", None));
    assert_eq!(host.markup(), "Hello world");
    assert_eq!(host.selection(), Some(6..11));
}

#[test]
fn test_styles_nest() {
    let mut host = selected_all("word");
    host.exec_command("italic", None);
    host.exec_command("underline", None);
    host.exec_command("strikeThrough", None);
    assert_eq!(host.markup(), "<i><u><strike>word</strike></u></i>");
}

#[test]
fn test_list_kind_swaps() {
    let mut host = selected_all("item");
    host.exec_command("insertOrderedList", None);
    assert_eq!(host.markup(), "<ol><li>item</li></ol>");

    host.exec_command("insertUnorderedList", None);
    assert_eq!(host.markup(), "<ul><li>item</li></ul>");

    host.exec_command("insertUnorderedList", None);
    assert_eq!(host.markup(), "item");
}

#[test]
fn test_alignment_replaces_and_left_unwraps() {
    let mut host = selected_all("text");
    host.exec_command("justifyCenter", None);
    assert_eq!(host.markup(), "<div style=\"text-align: center;\">text</div>");

    host.exec_command("justifyRight", None);
    assert_eq!(host.markup(), "<div style=\"text-align: right;\">text</div>");

    host.exec_command("justifyLeft", None);
    assert_eq!(host.markup(), "text");

    // Already left aligned
    assert!(host.exec_command("justifyLeft", None));
    assert_eq!(host.markup(), "text");
}

#[test]
fn test_fore_color_replaces_value() {
    let mut host = selected_all("text");
    host.exec_command("foreColor", Some("#FF0000"));
    assert_eq!(host.markup(), "<font color=\"#FF0000\">text</font>");

    host.exec_command("foreColor", Some("#0070C0"));
    assert_eq!(host.markup(), "<font color=\"#0070C0\">text</font>");
}

#[test]
fn test_highlight_and_font_size() {
    let mut host = selected_all("text");
    host.exec_command("hiliteColor", Some("#FFFF00"));
    assert_eq!(host.markup(), "<span style=\"background-color: #FFFF00;\">text</span>");

    let mut host = selected_all("text");
    host.exec_command("fontSize", Some("4"));
    assert_eq!(host.markup(), "<font size=\"4\">text</font>");

    host.exec_command("fontSize", Some("5"));
    assert_eq!(host.markup(), "<font size=\"5\">text</font>");
}

#[test]
fn test_value_commands_need_a_value() {
    let mut host = selected_all("text");
    assert!(!host.exec_command("foreColor", None));
    assert!(!host.exec_command("unknownCommand", None));
    assert_eq!(host.markup(), "text");
}

#[test]
fn test_command_at_collapsed_caret_formats_what_follows() {
    let mut host = host_with("text");
    host.focus();
    assert_eq!(host.caret(), Some(4));

    host.exec_command("bold", None);
    host.insert_str("x");
    assert_eq!(host.markup(), "text<b>x</b>");
}

#[test]
fn test_commands_need_the_selection_in_region() {
    let mut host = host_with("text");
    assert!(!host.selection_in_region());
    assert!(!host.exec_command("bold", None));
    assert_eq!(host.markup(), "text");

    host.collapse_selection_to_end();
    assert!(host.selection_in_region());

    host.blur();
    assert!(!host.selection_in_region());
}

#[test]
fn test_typing_across_multibyte_chars() {
    let mut host = host_with("héllo");
    host.focus();
    host.backspace();
    assert_eq!(host.markup(), "héll");

    host.move_left(false);
    host.move_left(false);
    host.move_left(false);
    assert_eq!(host.caret(), Some(1));

    host.delete();
    host.insert_str("e");
    assert_eq!(host.markup(), "hell");
}

#[test]
fn test_select_clamps_to_char_boundary() {
    let mut host = host_with("héllo");
    host.select(0..2);
    assert_eq!(host.selection(), Some(0..1));
}

#[test]
fn test_home_and_end_stay_on_the_line() {
    let mut host = host_with("one\ntwo");
    host.select(5..5);

    host.move_home(false);
    assert_eq!(host.caret(), Some(4));

    host.move_end(true);
    assert_eq!(host.selection(), Some(4..7));

    host.insert_str("2");
    assert_eq!(host.markup(), "one\n2");
}

#[test]
fn test_extend_selection_then_replace() {
    let mut host = host_with("abc");
    host.focus();
    host.move_left(true);
    host.move_left(true);
    assert!(host.has_selection());

    host.backspace();
    assert_eq!(host.markup(), "a");
    assert!(!host.has_selection());
}
