use chatolution::ui::layout::{LayoutManager, COLLAPSED_SIDEBAR_WIDTH};
use ratatui::layout::Rect;

#[test]
fn test_status_line_at_bottom() {
    let chunks = LayoutManager::main_layout(Rect::new(0, 0, 100, 30));
    assert_eq!(chunks[0], Rect::new(0, 0, 100, 29));
    assert_eq!(chunks[1], Rect::new(0, 29, 100, 1));
}

#[test]
fn test_sidebar_width_and_collapse() {
    let area = Rect::new(0, 0, 100, 29);
    assert_eq!(LayoutManager::body_layout(area, 24, false)[0].width, 24);
    assert_eq!(LayoutManager::body_layout(area, 80, false)[0].width, 50);
    assert_eq!(
        LayoutManager::body_layout(area, 24, true)[0].width,
        COLLAPSED_SIDEBAR_WIDTH
    );
}

#[test]
fn test_card_area_only_on_card_sections() {
    let area = Rect::new(0, 0, 80, 40);
    let plain = LayoutManager::main_pane_layout(area, false, false);
    assert!(plain.cards.is_none());
    assert_eq!(plain.toolbar.height, 3);

    let with_cards = LayoutManager::main_pane_layout(area, false, true);
    assert!(with_cards.cards.is_some_and(|cards| cards.height > 0));

    let collapsed = LayoutManager::main_pane_layout(area, true, false);
    assert_eq!(collapsed.editor.height, 3);
}

#[test]
fn test_centered_rect_inside_area() {
    let area = Rect::new(0, 0, 100, 50);
    let popup = LayoutManager::centered_rect_lines(60, 10, area);
    assert_eq!(popup.height, 10);
    assert!(popup.x >= area.x && popup.right() <= area.right());
    assert!(popup.y >= area.y && popup.bottom() <= area.bottom());
}
