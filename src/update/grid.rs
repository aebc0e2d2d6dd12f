//! Grid update functions
//!
//! Handles GridMsg messages against the active breakpoint's grid.

use crate::commands::Cmd;
use crate::messages::GridMsg;
use crate::model::{
    AppModel, Breakpoint, ContentKind, ContentModalState, ModalState, SwapModalState, TileId,
};

/// Handle grid messages
pub fn update_grid(model: &mut AppModel, msg: GridMsg) -> Option<Cmd> {
    match msg {
        GridMsg::SelectBreakpoint(bp) => select_breakpoint(model, bp),
        GridMsg::StartEdit(id) => start_edit(model, id),
        GridMsg::CommitEdit { id, kind, content } => commit_edit(model, &id, kind, &content),
        GridMsg::Delete(id) => delete_tile(model, &id),
        GridMsg::StartSwap(id) => start_swap(model, id),
        GridMsg::Swap { source, target } => swap_tiles(model, &source, &target),
        GridMsg::AppendRow => append_row(model),
        GridMsg::Export => export(model),
    }
}

fn select_breakpoint(model: &mut AppModel, bp: Breakpoint) -> Option<Cmd> {
    if model.active == bp {
        return None;
    }
    model.active = bp;
    // Open dialogs refer to ids of the previous grid
    model.ui.close_modal();
    let columns = model.grid().column_count();
    model
        .ui
        .set_status(format!("Editing {} ({} columns)", bp.as_str().to_uppercase(), columns));
    Some(Cmd::Redraw)
}

fn start_edit(model: &mut AppModel, id: TileId) -> Option<Cmd> {
    let Some(intent) = model.grid().start_edit(&id) else {
        tracing::debug!(target: "grid", %id, "edit target not found");
        return None;
    };
    model
        .ui
        .open_modal(ModalState::ContentEditor(ContentModalState::from_intent(id, intent)));
    Some(Cmd::Redraw)
}

pub(super) fn commit_edit(
    model: &mut AppModel,
    id: &TileId,
    kind: ContentKind,
    content: &str,
) -> Option<Cmd> {
    if !model.grid_mut().commit_edit(id, kind, content) {
        return None;
    }
    model.ui.set_status(format!("Saved {} tile", kind));
    Some(Cmd::Redraw)
}

fn delete_tile(model: &mut AppModel, id: &TileId) -> Option<Cmd> {
    let new_id = model.grid_mut().delete_tile(id)?;
    tracing::debug!(target: "grid", old = %id, new = %new_id, "tile reset");
    model.ui.set_status("Deleted tile");
    Some(Cmd::Redraw)
}

fn start_swap(model: &mut AppModel, id: TileId) -> Option<Cmd> {
    match model.grid().tile(&id) {
        Some(tile) if !tile.is_empty() => {}
        _ => {
            tracing::debug!(target: "grid", %id, "swap source missing or empty");
            return None;
        }
    }
    model
        .ui
        .open_modal(ModalState::SwapPicker(SwapModalState::new(id)));
    Some(Cmd::Redraw)
}

pub(super) fn swap_tiles(model: &mut AppModel, source: &TileId, target: &TileId) -> Option<Cmd> {
    if !model.grid_mut().swap_tiles(source, target) {
        return None;
    }
    model.ui.set_status("Swapped tiles");
    Some(Cmd::Redraw)
}

fn append_row(model: &mut AppModel) -> Option<Cmd> {
    let row = model.grid_mut().append_row();
    model.ui.set_status(format!("Added row {}", row + 1));
    Some(Cmd::Redraw)
}

fn export(model: &mut AppModel) -> Option<Cmd> {
    let records = model.grid().export_filled();
    tracing::info!(
        breakpoint = %model.active,
        count = records.len(),
        "exported filled tiles"
    );
    model
        .ui
        .set_status(format!("Exported {} tile(s)", records.len()));
    Some(Cmd::Export {
        breakpoint: model.active,
        records,
    })
}
