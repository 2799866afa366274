//! View toggle handlers

use crate::state::{AppAction, StatusMessage};

use super::ActionContext;

/// Handle view-related actions
pub fn handle_view_action(action: AppAction, ctx: &ActionContext) {
    let mut state = ctx.app_state.lock();
    match action {
        AppAction::View(command) => {
            if let Err(e) = state.apply_view_command(command) {
                tracing::error!("Failed to rebuild scene: {}", e);
                state.set_status(StatusMessage::error(format!("Failed to rebuild scene: {}", e)));
            }
        }
        AppAction::ResetView => state.controller.reset_view(),
        _ => {}
    }
}
