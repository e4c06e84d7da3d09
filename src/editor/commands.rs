//! Toolbar commands and their translation to host formatting primitives.

use super::document::DocumentStore;
use super::resources::PreviewResources;
use crate::config::Palette;

/// Host capability exposing a native rich-text editing region.
///
/// Commands are keyed by the primitive's command name (`"bold"`, `"foreColor"`,
/// `"fontSize"`, ...) and an optional value.
pub trait TextEditingHost {
    /// Replace the region's markup; the selection leaves the region
    fn load_region(&mut self, markup: &str);
    fn region_markup(&self) -> String;
    fn selection_in_region(&self) -> bool;
    /// Place a collapsed selection after the region's last character
    fn collapse_selection_to_end(&mut self);
    /// Returns false when the primitive did not apply the command
    fn exec_command(&mut self, name: &str, value: Option<&str>) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
}

/// Ordinal level understood by the `fontSize` primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontLevel {
    /// Level "3", the browser default
    Normal,
    Large,
    XLarge,
}

impl FontLevel {
    /// Map a toolbar size in points; anything unrecognized gets level "3"
    pub fn from_points(points: u16) -> Self {
        match points {
            18 => FontLevel::Large,
            20 => FontLevel::XLarge,
            _ => FontLevel::Normal,
        }
    }

    pub fn as_value(&self) -> &'static str {
        match self {
            FontLevel::Normal => "3",
            FontLevel::Large => "4",
            FontLevel::XLarge => "5",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatCommand {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    OrderedList,
    UnorderedList,
    Align(Alignment),
    ForeColor(String),
    HighlightColor(String),
    FontSize(FontLevel),
}

impl FormatCommand {
    pub fn name(&self) -> &'static str {
        match self {
            FormatCommand::Bold => "bold",
            FormatCommand::Italic => "italic",
            FormatCommand::Underline => "underline",
            FormatCommand::Strikethrough => "strikeThrough",
            FormatCommand::OrderedList => "insertOrderedList",
            FormatCommand::UnorderedList => "insertUnorderedList",
            FormatCommand::Align(Alignment::Left) => "justifyLeft",
            FormatCommand::Align(Alignment::Center) => "justifyCenter",
            FormatCommand::Align(Alignment::Right) => "justifyRight",
            FormatCommand::ForeColor(_) => "foreColor",
            FormatCommand::HighlightColor(_) => "hiliteColor",
            FormatCommand::FontSize(_) => "fontSize",
        }
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            FormatCommand::ForeColor(color) | FormatCommand::HighlightColor(color) => Some(color),
            FormatCommand::FontSize(level) => Some(level.as_value()),
            _ => None,
        }
    }

    /// Font-size command for a toolbar size in points
    pub fn font_size(points: u16) -> Self {
        FormatCommand::FontSize(FontLevel::from_points(points))
    }
}

/// The two mutually exclusive color popovers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorPopover {
    Foreground,
    Highlight,
}

impl ColorPopover {
    pub fn title(&self) -> &'static str {
        match self {
            ColorPopover::Foreground => "Text color",
            ColorPopover::Highlight => "Highlight",
        }
    }

    pub fn command(&self, color: &str) -> FormatCommand {
        match self {
            ColorPopover::Foreground => FormatCommand::ForeColor(color.to_string()),
            ColorPopover::Highlight => FormatCommand::HighlightColor(color.to_string()),
        }
    }
}

/// Routes toolbar commands to the host for the active document
#[derive(Debug, Clone)]
pub struct CommandDispatcher {
    palette: Palette,
}

impl CommandDispatcher {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn swatches(&self, popover: ColorPopover) -> Vec<&str> {
        match popover {
            ColorPopover::Foreground => self.palette.foreground_swatches(),
            ColorPopover::Highlight => self.palette.highlight_swatches(),
        }
    }

    /// Run `command` against the active tab's region and store the result.
    ///
    /// Without an active, known tab the command is ignored.
    pub fn apply_command<H, R>(
        &self,
        host: &mut H,
        store: &mut DocumentStore<R>,
        active_tab: Option<&str>,
        command: &FormatCommand,
    ) -> bool
    where
        H: TextEditingHost + ?Sized,
        R: PreviewResources,
    {
        let Some(tab) = active_tab.filter(|tab| store.get_document(tab).is_some()) else {
            log::debug!("Ignoring {} with no active document", command.name());
            return false;
        };

        if !host.selection_in_region() {
            host.collapse_selection_to_end();
        }

        let applied = host.exec_command(command.name(), command.value());
        store.set_content(tab, host.region_markup());
        log::debug!("Applied {} to '{}' (changed: {})", command.name(), tab, applied);
        applied
    }
}
