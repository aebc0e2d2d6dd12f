//! Application lifecycle update functions

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::{AppModel, EditorState};

/// Handle app messages
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Reset => match EditorState::new(&model.config) {
            Ok(editor) => {
                model.editor = editor;
                model.ui.close_modal();
                model.ui.set_status("Reset all grids");
                Some(Cmd::Redraw)
            }
            Err(e) => {
                tracing::error!("Failed to reset grids: {}", e);
                None
            }
        },
        AppMsg::Quit => Some(Cmd::Quit),
    }
}
