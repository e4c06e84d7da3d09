use crate::editor::{CardPatch, ColorPopover, FormatCommand};
use std::path::PathBuf;
use uuid::Uuid;

/// Pane that receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Sidebar,
    Editor,
    Cards,
}

/// Keystroke-level edit of the content region
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextEdit {
    Insert(char),
    Newline,
    Backspace,
    Delete,
    Left { extend: bool },
    Right { extend: bool },
    Home { extend: bool },
    End { extend: bool },
    SelectAll,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Navigation
    NavigateToTab(String),
    CycleFocus,
    FocusPane(Focus),
    SelectCard(usize),

    // Section operations
    AddTab(String),
    Save,
    ToggleSidebar,
    ToggleContentSection,

    // Editing
    EditText(TextEdit),
    Format(FormatCommand),
    SetFontSize(u16),
    TogglePopover(ColorPopover),
    PickColor { popover: ColorPopover, color: String },
    ClosePopover,

    // Images and cards
    SetSectionImages(Vec<PathBuf>),
    AddCard,
    UpdateCard { card_id: Uuid, patch: CardPatch },
    SetCardImage { card_id: Uuid, path: PathBuf },

    // UI operations
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DialogType {
    NewTab,
    SectionImages,
    CardTitle { card_id: Uuid, current: String },
    CardDescription { card_id: Uuid, current: String },
    CardImage { card_id: Uuid },
    Error(String),
    Info(String),
    Help,
    Logs,
}
