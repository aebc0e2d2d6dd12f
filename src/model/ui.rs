//! UI state - status message and the content / swap dialogs

use super::tile::{ContentKind, EditIntent, TileId};

// ============================================================================
// Modal System
// ============================================================================

/// Identifies which modal is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalId {
    /// Add or edit a tile's content
    ContentEditor,
    /// Pick another tile to swap content with
    SwapPicker,
}

/// State for the content editor dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentModalState {
    /// Tile being edited
    pub editing_id: TileId,
    /// Kind of the existing content; `None` when filling an empty tile
    pub initial_kind: Option<ContentKind>,
    /// Currently chosen kind
    pub kind: ContentKind,
    /// Current input (image URL or text body)
    pub input: String,
}

impl ContentModalState {
    pub fn from_intent(editing_id: TileId, intent: EditIntent) -> Self {
        match intent {
            EditIntent::Create => Self {
                editing_id,
                initial_kind: None,
                kind: ContentKind::default(),
                input: String::new(),
            },
            EditIntent::Edit { kind, content } => Self {
                editing_id,
                initial_kind: Some(kind),
                kind,
                input: content,
            },
        }
    }

    /// Whether the kind chooser is shown (only when creating)
    pub fn can_change_kind(&self) -> bool {
        self.initial_kind.is_none()
    }

    /// Change the kind; ignored when editing existing content
    pub fn set_kind(&mut self, kind: ContentKind) -> bool {
        if !self.can_change_kind() || self.kind == kind {
            return false;
        }
        self.kind = kind;
        true
    }

    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
    }

    pub fn can_save(&self) -> bool {
        !self.input.trim().is_empty()
    }

    pub fn title(&self) -> &'static str {
        if self.initial_kind.is_some() {
            "Edit content"
        } else {
            "Add content"
        }
    }
}

/// State for the swap picker dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapModalState {
    /// Tile whose content will move
    pub source_id: TileId,
    /// Chosen swap partner
    pub selected: Option<TileId>,
}

impl SwapModalState {
    pub fn new(source_id: TileId) -> Self {
        Self {
            source_id,
            selected: None,
        }
    }

    /// Select a target, or clear the selection if it is already selected
    pub fn toggle(&mut self, id: TileId) {
        if self.selected.as_ref() == Some(&id) {
            self.selected = None;
        } else {
            self.selected = Some(id);
        }
    }
}

/// Union of all modal states
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalState {
    ContentEditor(ContentModalState),
    SwapPicker(SwapModalState),
}

impl ModalState {
    /// Get the modal ID for this state
    pub fn id(&self) -> ModalId {
        match self {
            ModalState::ContentEditor(_) => ModalId::ContentEditor,
            ModalState::SwapPicker(_) => ModalId::SwapPicker,
        }
    }
}

/// UI state - status message and active modal
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Message displayed in the status line
    pub status_message: String,
    /// Currently active modal (if any)
    pub active_modal: Option<ModalState>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a modal is currently active
    pub fn has_modal(&self) -> bool {
        self.active_modal.is_some()
    }

    /// Open a modal, replacing any open one
    pub fn open_modal(&mut self, state: ModalState) {
        self.active_modal = Some(state);
    }

    /// Close the active modal
    pub fn close_modal(&mut self) {
        self.active_modal = None;
    }

    pub fn content_modal_mut(&mut self) -> Option<&mut ContentModalState> {
        match self.active_modal.as_mut() {
            Some(ModalState::ContentEditor(state)) => Some(state),
            _ => None,
        }
    }

    pub fn swap_modal_mut(&mut self) -> Option<&mut SwapModalState> {
        match self.active_modal.as_mut() {
            Some(ModalState::SwapPicker(state)) => Some(state),
            _ => None,
        }
    }

    /// Set the status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }
}
