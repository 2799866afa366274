//! File I/O action handlers

use std::path::PathBuf;

use crate::state::{AppAction, StatusMessage};

use super::ActionContext;

/// Handle file-related actions
pub fn handle_file_action(action: AppAction, ctx: &ActionContext) {
    if let AppAction::ExportStl(path) = action {
        handle_export_stl(path, ctx);
    }
}

fn handle_export_stl(path: PathBuf, ctx: &ActionContext) {
    let mut state = ctx.app_state.lock();
    match state.export_stl(&path) {
        Ok(()) => {
            tracing::info!("Exported {} to {:?}", state.variant, path);
            state.set_status(StatusMessage::info(format!("Exported {}", path.display())));
        }
        Err(e) => {
            tracing::error!("Failed to export STL: {}", e);
            state.set_status(StatusMessage::error(format!("Export failed: {}", e)));
        }
    }
}
