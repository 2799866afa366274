//! Enclosure Kit Frontend
//!
//! egui shell around the software previewer: model selection, view toggles,
//! STL export and the interactive viewport.

pub mod actions;
pub mod app;
pub mod config;
pub mod panels;
pub mod state;

// Re-exports for convenience
pub use app::EnclosureKitApp;
pub use config::AppConfig;
pub use state::{AppAction, AppState, SharedAppState};
