//! Dialog update functions
//!
//! The content editor and the swap picker only ever touch the active grid
//! through the same operations as direct grid messages.

use crate::commands::Cmd;
use crate::messages::ModalMsg;
use crate::model::{AppModel, ContentKind, TileId};

use super::grid::{commit_edit, swap_tiles};

/// Handle dialog messages
pub fn update_modal(model: &mut AppModel, msg: ModalMsg) -> Option<Cmd> {
    match msg {
        ModalMsg::SetKind(kind) => set_kind(model, kind),
        ModalMsg::SetInput(text) => set_input(model, &text),
        ModalMsg::Save => save(model),
        ModalMsg::ToggleSwapTarget(id) => toggle_swap_target(model, id),
        ModalMsg::ConfirmSwap => confirm_swap(model),
        ModalMsg::Close => close(model),
    }
}

fn set_kind(model: &mut AppModel, kind: ContentKind) -> Option<Cmd> {
    let state = model.ui.content_modal_mut()?;
    state.set_kind(kind).then_some(Cmd::Redraw)
}

fn set_input(model: &mut AppModel, text: &str) -> Option<Cmd> {
    let state = model.ui.content_modal_mut()?;
    state.set_input(text);
    Some(Cmd::Redraw)
}

fn save(model: &mut AppModel) -> Option<Cmd> {
    let state = model.ui.content_modal_mut()?;
    if !state.can_save() {
        return None;
    }
    let id = state.editing_id.clone();
    let kind = state.kind;
    let input = state.input.clone();

    model.ui.close_modal();
    if commit_edit(model, &id, kind, &input).is_none() {
        tracing::debug!(target: "grid", %id, "edited tile no longer in grid");
    }
    Some(Cmd::Redraw)
}

fn toggle_swap_target(model: &mut AppModel, id: TileId) -> Option<Cmd> {
    let grid = model.editor.grid(model.active);
    let state = model.ui.swap_modal_mut()?;
    let is_candidate = grid
        .swap_candidates(&state.source_id)
        .iter()
        .any(|t| t.id == id);
    if !is_candidate {
        return None;
    }
    state.toggle(id);
    Some(Cmd::Redraw)
}

fn confirm_swap(model: &mut AppModel) -> Option<Cmd> {
    let state = model.ui.swap_modal_mut()?;
    let target = state.selected.clone()?;
    let source = state.source_id.clone();

    model.ui.close_modal();
    swap_tiles(model, &source, &target);
    Some(Cmd::Redraw)
}

fn close(model: &mut AppModel) -> Option<Cmd> {
    if !model.ui.has_modal() {
        return None;
    }
    model.ui.close_modal();
    Some(Cmd::Redraw)
}
