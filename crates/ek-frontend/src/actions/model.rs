//! Model selection handlers

use crate::state::{AppAction, StatusMessage};

use super::ActionContext;

/// Handle model-related actions
pub fn handle_model_action(action: AppAction, ctx: &ActionContext) {
    if let AppAction::SelectVariant(variant) = action {
        let mut state = ctx.app_state.lock();
        match state.load_variant(variant) {
            Ok(()) => state.set_status(StatusMessage::info(format!("Showing {}", variant))),
            Err(e) => {
                tracing::error!("Failed to build {}: {}", variant, e);
                state.set_status(StatusMessage::error(format!("Failed to build {}: {}", variant, e)));
            }
        }
    }
}
