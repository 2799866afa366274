//! Action handling module
//!
//! Actions are queued in AppState and processed each frame.

mod file;
mod model;
mod view;

use crate::state::{AppAction, SharedAppState};

pub use file::handle_file_action;
pub use model::handle_model_action;
pub use view::handle_view_action;

/// Context for action handlers
pub struct ActionContext<'a> {
    pub app_state: &'a SharedAppState,
}

impl<'a> ActionContext<'a> {
    pub fn new(app_state: &'a SharedAppState) -> Self {
        Self { app_state }
    }
}

/// Dispatch an action to the appropriate handler
pub fn dispatch_action(action: AppAction, ctx: &ActionContext) {
    match action {
        AppAction::ExportStl(_) => handle_file_action(action, ctx),
        AppAction::SelectVariant(_) => handle_model_action(action, ctx),
        AppAction::View(_) | AppAction::ResetView => handle_view_action(action, ctx),
    }
}
