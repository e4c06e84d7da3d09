use ratatui::widgets::ScrollbarState;

/// Lines moved by PageUp/PageDown
pub const PAGE_SIZE: usize = 10;

/// Scroll position of a long-content dialog
#[derive(Debug, Default, Clone)]
pub struct DialogScroll {
    pub offset: usize,
    pub scrollbar_state: ScrollbarState,
}

impl DialogScroll {
    pub fn reset(&mut self) {
        self.offset = 0;
        self.scrollbar_state = ScrollbarState::new(0);
    }

    pub fn up(&mut self) {
        self.set(self.offset.saturating_sub(1));
    }

    pub fn down(&mut self) {
        self.set(self.offset.saturating_add(1));
    }

    pub fn page_up(&mut self) {
        self.set(self.offset.saturating_sub(PAGE_SIZE));
    }

    pub fn page_down(&mut self) {
        self.set(self.offset.saturating_add(PAGE_SIZE));
    }

    pub fn to_top(&mut self) {
        self.set(0);
    }

    /// Clamped to the content length when rendered
    pub fn to_bottom(&mut self) {
        self.set(usize::MAX);
    }

    fn set(&mut self, offset: usize) {
        self.offset = offset;
        self.scrollbar_state = self.scrollbar_state.position(offset);
    }
}
