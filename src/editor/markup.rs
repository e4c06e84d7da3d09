//! Markup editing region used as the dashboard's text-editing host.
//!
//! The region is raw markup with a byte-offset caret. Formatting commands wrap
//! the selection in elements; repeating a toggle command on a wrapped selection
//! unwraps it, and repeating a value command replaces the value in place.

use super::commands::TextEditingHost;
use std::ops::Range;

const ALIGN_PREFIX: &str = "<div style=\"text-align: ";
const ALIGN_CLOSE: &str = "</div>";
const FORE_COLOR_PREFIX: &str = "<font color=\"";
const FONT_SIZE_PREFIX: &str = "<font size=\"";
const FONT_CLOSE: &str = "</font>";
const HIGHLIGHT_PREFIX: &str = "<span style=\"background-color: ";
const HIGHLIGHT_CLOSE: &str = "</span>";
const ORDERED_LIST: (&str, &str) = ("<ol><li>", "</li></ol>");
const UNORDERED_LIST: (&str, &str) = ("<ul><li>", "</li></ul>");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Caret {
    anchor: usize,
    head: usize,
}

impl Caret {
    fn collapsed(at: usize) -> Self {
        Self { anchor: at, head: at }
    }

    fn range(&self) -> Range<usize> {
        self.anchor.min(self.head)..self.anchor.max(self.head)
    }
}

/// Editable markup region with an optional caret.
///
/// `caret == None` means the selection currently lives outside the region.
#[derive(Debug, Clone, Default)]
pub struct MarkupHost {
    markup: String,
    caret: Option<Caret>,
}

impl MarkupHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// Byte offset of the caret head, if the selection is in the region
    pub fn caret(&self) -> Option<usize> {
        self.caret.map(|caret| caret.head)
    }

    /// Selected byte range (possibly empty), if the selection is in the region
    pub fn selection(&self) -> Option<Range<usize>> {
        self.caret.map(|caret| caret.range())
    }

    pub fn has_selection(&self) -> bool {
        self.selection().is_some_and(|range| !range.is_empty())
    }

    /// Move the selection into the region, keeping it if already there
    pub fn focus(&mut self) {
        if self.caret.is_none() {
            self.collapse_selection_to_end();
        }
    }

    pub fn blur(&mut self) {
        self.caret = None;
    }

    pub fn select(&mut self, range: Range<usize>) {
        let anchor = self.floor_boundary(range.start);
        let head = self.floor_boundary(range.end);
        self.caret = Some(Caret { anchor, head });
    }

    pub fn select_all(&mut self) {
        self.select(0..self.markup.len());
    }

    /// Type `text` over the current selection
    pub fn insert_str(&mut self, text: &str) {
        let Some(caret) = self.caret else {
            return;
        };
        let range = caret.range();
        self.markup.replace_range(range.clone(), text);
        self.caret = Some(Caret::collapsed(range.start + text.len()));
    }

    pub fn backspace(&mut self) {
        let Some(caret) = self.caret else {
            return;
        };
        let range = caret.range();
        if !range.is_empty() {
            self.insert_str("");
        } else if range.start > 0 {
            let start = self.prev_boundary(range.start);
            self.markup.replace_range(start..range.start, "");
            self.caret = Some(Caret::collapsed(start));
        }
    }

    pub fn delete(&mut self) {
        let Some(caret) = self.caret else {
            return;
        };
        let range = caret.range();
        if !range.is_empty() {
            self.insert_str("");
        } else if range.start < self.markup.len() {
            let end = self.next_boundary(range.start);
            self.markup.replace_range(range.start..end, "");
        }
    }

    pub fn move_left(&mut self, extend: bool) {
        if let Some(caret) = self.caret {
            let head = self.prev_boundary(caret.head);
            self.move_head(head, extend);
        }
    }

    pub fn move_right(&mut self, extend: bool) {
        if let Some(caret) = self.caret {
            let head = self.next_boundary(caret.head);
            self.move_head(head, extend);
        }
    }

    pub fn move_home(&mut self, extend: bool) {
        if let Some(caret) = self.caret {
            let head = self.markup[..caret.head].rfind('\n').map(|i| i + 1).unwrap_or(0);
            self.move_head(head, extend);
        }
    }

    pub fn move_end(&mut self, extend: bool) {
        if let Some(caret) = self.caret {
            let head = self.markup[caret.head..]
                .find('\n')
                .map(|i| caret.head + i)
                .unwrap_or(self.markup.len());
            self.move_head(head, extend);
        }
    }

    fn move_head(&mut self, head: usize, extend: bool) {
        if let Some(caret) = self.caret.as_mut() {
            caret.head = head;
            if !extend {
                caret.anchor = head;
            }
        }
    }

    fn floor_boundary(&self, offset: usize) -> usize {
        let mut offset = offset.min(self.markup.len());
        while !self.markup.is_char_boundary(offset) {
            offset -= 1;
        }
        offset
    }

    fn prev_boundary(&self, offset: usize) -> usize {
        self.markup[..offset]
            .chars()
            .next_back()
            .map(|c| offset - c.len_utf8())
            .unwrap_or(0)
    }

    fn next_boundary(&self, offset: usize) -> usize {
        self.markup[offset..]
            .chars()
            .next()
            .map(|c| offset + c.len_utf8())
            .unwrap_or(offset)
    }

    fn is_wrapped(&self, range: &Range<usize>, open: &str, close: &str) -> bool {
        self.markup[..range.start].ends_with(open) && self.markup[range.end..].starts_with(close)
    }

    /// Byte range of the opening tag directly before the selection, when it
    /// starts with `prefix` and `close` directly follows the selection
    fn enclosing_tag(&self, range: &Range<usize>, prefix: &str, close: &str) -> Option<Range<usize>> {
        let before = &self.markup[..range.start];
        if !before.ends_with('>') || !self.markup[range.end..].starts_with(close) {
            return None;
        }
        let open_start = before.rfind('<')?;
        before[open_start..].starts_with(prefix).then_some(open_start..range.start)
    }

    fn wrap(&mut self, range: Range<usize>, open: &str, close: &str) {
        self.markup.insert_str(range.end, close);
        self.markup.insert_str(range.start, open);
        self.caret = Some(Caret {
            anchor: range.start + open.len(),
            head: range.end + open.len(),
        });
    }

    fn unwrap(&mut self, range: Range<usize>, open: Range<usize>, close_len: usize) {
        self.markup.replace_range(range.end..range.end + close_len, "");
        let open_len = open.len();
        self.markup.replace_range(open, "");
        self.caret = Some(Caret {
            anchor: range.start - open_len,
            head: range.end - open_len,
        });
    }

    fn replace_open(&mut self, range: Range<usize>, open: Range<usize>, new_open: &str) {
        let start = open.start + new_open.len();
        self.markup.replace_range(open, new_open);
        self.caret = Some(Caret {
            anchor: start,
            head: start + range.len(),
        });
    }

    fn toggle(&mut self, range: Range<usize>, open: &str, close: &str) -> bool {
        if self.is_wrapped(&range, open, close) {
            let open_range = range.start - open.len()..range.start;
            self.unwrap(range, open_range, close.len());
        } else {
            self.wrap(range, open, close);
        }
        true
    }

    fn toggle_list(&mut self, range: Range<usize>, list: (&str, &str), other: (&str, &str)) -> bool {
        if self.is_wrapped(&range, other.0, other.1) {
            let open_range = range.start - other.0.len()..range.start;
            self.unwrap(range.clone(), open_range, other.1.len());
            let range = range.start - other.0.len()..range.end - other.0.len();
            self.wrap(range, list.0, list.1);
            return true;
        }
        self.toggle(range, list.0, list.1)
    }

    fn restyle(&mut self, range: Range<usize>, prefix: &str, open: &str, close: &str) -> bool {
        match self.enclosing_tag(&range, prefix, close) {
            Some(open_range) => self.replace_open(range, open_range, open),
            None => self.wrap(range, open, close),
        }
        true
    }

    fn align(&mut self, range: Range<usize>, alignment: Option<&str>) -> bool {
        let existing = self.enclosing_tag(&range, ALIGN_PREFIX, ALIGN_CLOSE);
        match (existing, alignment) {
            (Some(open_range), None) => self.unwrap(range, open_range, ALIGN_CLOSE.len()),
            (Some(open_range), Some(alignment)) => {
                self.replace_open(range, open_range, &format!("{}{};\">", ALIGN_PREFIX, alignment))
            }
            (None, Some(alignment)) => self.wrap(range, &format!("{}{};\">", ALIGN_PREFIX, alignment), ALIGN_CLOSE),
            // Left is the default alignment
            (None, None) => {}
        }
        true
    }
}

impl TextEditingHost for MarkupHost {
    fn load_region(&mut self, markup: &str) {
        self.markup = markup.to_string();
        self.caret = None;
    }

    fn region_markup(&self) -> String {
        self.markup.clone()
    }

    fn selection_in_region(&self) -> bool {
        self.caret.is_some()
    }

    fn collapse_selection_to_end(&mut self) {
        self.caret = Some(Caret::collapsed(self.markup.len()));
    }

    fn exec_command(&mut self, name: &str, value: Option<&str>) -> bool {
        let Some(range) = self.selection() else {
            return false;
        };

        match (name, value) {
            ("bold", _) => self.toggle(range, "<b>", "</b>"),
            ("italic", _) => self.toggle(range, "<i>", "</i>"),
            ("underline", _) => self.toggle(range, "<u>", "</u>"),
            ("strikeThrough", _) => self.toggle(range, "<strike>", "</strike>"),
            ("insertOrderedList", _) => self.toggle_list(range, ORDERED_LIST, UNORDERED_LIST),
            ("insertUnorderedList", _) => self.toggle_list(range, UNORDERED_LIST, ORDERED_LIST),
            ("justifyLeft", _) => self.align(range, None),
            ("justifyCenter", _) => self.align(range, Some("center")),
            ("justifyRight", _) => self.align(range, Some("right")),
            ("foreColor", Some(color)) => {
                let open = format!("{}{}\">", FORE_COLOR_PREFIX, color);
                self.restyle(range, FORE_COLOR_PREFIX, &open, FONT_CLOSE)
            }
            ("hiliteColor", Some(color)) => {
                let open = format!("{}{};\">", HIGHLIGHT_PREFIX, color);
                self.restyle(range, HIGHLIGHT_PREFIX, &open, HIGHLIGHT_CLOSE)
            }
            ("fontSize", Some(level)) => {
                let open = format!("{}{}\">", FONT_SIZE_PREFIX, level);
                self.restyle(range, FONT_SIZE_PREFIX, &open, FONT_CLOSE)
            }
            _ => false,
        }
    }
}
