//! Application state module

mod viewport;

pub use viewport::ViewportState;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use ek_cad::{CsgKernel, default_kernel};
use ek_core::{CoreResult, ExportOptions, Model, ModelVariant};
use ek_renderer::{InteractionController, Scene, ViewCommand, ViewParams};
use parking_lot::Mutex;

use crate::config::AppConfig;

/// Actions that can be performed on the app state
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    /// Build and show a sample model
    SelectVariant(ModelVariant),
    /// Write the current model as STL
    ExportStl(PathBuf),
    /// Toggle a view setting
    View(ViewCommand),
    /// Restore the initial rotation and scale
    ResetView,
}

/// One-line feedback shown in the status bar
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// Main application state
pub struct AppState {
    kernel: Box<dyn CsgKernel>,
    /// Sample model currently shown
    pub variant: ModelVariant,
    /// Last successfully built model
    pub model: Option<Model>,
    /// Triangulated model for the active render mode
    pub scene: Scene,
    /// Bumped whenever `scene` is replaced
    pub scene_revision: u64,
    /// Rotation, zoom and toggles
    pub controller: InteractionController,
    /// STL encoding used by exports
    pub export_options: ExportOptions,
    /// File name proposed by the export dialog
    pub export_file_name: String,
    /// Latest status bar message
    pub status: Option<StatusMessage>,
    pending_actions: Vec<AppAction>,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_kernel(config, default_kernel())
    }

    /// State using a specific CSG kernel; the initial variant is queued, not built
    pub fn with_kernel(config: &AppConfig, kernel: Box<dyn CsgKernel>) -> Self {
        Self {
            kernel,
            variant: config.initial_variant,
            model: None,
            scene: Scene::default(),
            scene_revision: 0,
            controller: InteractionController::new(config.renderer.view.clone()),
            export_options: config.export.clone(),
            export_file_name: config.export_file_name.clone(),
            status: None,
            pending_actions: vec![AppAction::SelectVariant(config.initial_variant)],
        }
    }

    /// Queue an action to be processed
    pub fn queue_action(&mut self, action: AppAction) {
        self.pending_actions.push(action);
    }

    /// Take all pending actions
    pub fn take_pending_actions(&mut self) -> Vec<AppAction> {
        std::mem::take(&mut self.pending_actions)
    }

    pub fn kernel(&self) -> &dyn CsgKernel {
        self.kernel.as_ref()
    }

    pub fn view_params(&self) -> &ViewParams {
        self.controller.params()
    }

    /// Build `variant` and make it the current model
    ///
    /// On failure the previous model and scene stay in place.
    pub fn load_variant(&mut self, variant: ModelVariant) -> CoreResult<()> {
        let model = variant.build(self.kernel.as_ref())?;
        let scene = Scene::build(&model, self.kernel.as_ref(), self.controller.params().mode)?;
        tracing::info!("Loaded {} ({} layers)", variant, model.layer_count());

        self.variant = variant;
        self.model = Some(model);
        self.replace_scene(scene);
        Ok(())
    }

    /// Re-triangulate the current model for the active render mode
    pub fn rebuild_scene(&mut self) -> CoreResult<()> {
        let scene = match &self.model {
            Some(model) => Scene::build(model, self.kernel.as_ref(), self.controller.params().mode)?,
            None => Scene::default(),
        };
        self.replace_scene(scene);
        Ok(())
    }

    fn replace_scene(&mut self, scene: Scene) {
        self.scene = scene;
        self.scene_revision += 1;
    }

    /// Apply a view toggle, rebuilding the scene when the command needs it
    pub fn apply_view_command(&mut self, command: ViewCommand) -> CoreResult<()> {
        if self.controller.apply(command) {
            self.rebuild_scene()?;
        }
        Ok(())
    }

    /// Write the current model to `path`
    pub fn export_stl(&self, path: &Path) -> CoreResult<()> {
        match &self.model {
            Some(model) => model.export_stl(self.kernel.as_ref(), path, &self.export_options),
            None => Err(ek_core::CoreError::NoLayers),
        }
    }

    pub fn set_status(&mut self, status: StatusMessage) {
        self.status = Some(status);
    }
}

/// Shared application state
pub type SharedAppState = Arc<Mutex<AppState>>;

/// Create a new shared app state
pub fn create_shared_state(config: &AppConfig) -> SharedAppState {
    Arc::new(Mutex::new(AppState::new(config)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ek_cad::NullKernel;
    use ek_renderer::RenderMode;

    fn loaded(variant: ModelVariant) -> AppState {
        let mut state = AppState::new(&AppConfig::default());
        state.take_pending_actions();
        state.load_variant(variant).unwrap();
        state
    }

    #[test]
    fn test_initial_variant_is_queued() {
        let config = AppConfig {
            initial_variant: ModelVariant::LayeredBlock,
            ..Default::default()
        };
        let mut state = AppState::new(&config);
        assert!(state.model.is_none());
        assert_eq!(
            state.take_pending_actions(),
            vec![AppAction::SelectVariant(ModelVariant::LayeredBlock)]
        );
        assert!(state.take_pending_actions().is_empty());
    }

    #[test]
    fn test_load_variant() {
        let state = loaded(ModelVariant::PlateWithHoles);
        assert_eq!(state.variant, ModelVariant::PlateWithHoles);
        assert!(state.model.is_some());
        assert!(!state.scene.is_empty());
        assert_eq!(state.scene_revision, 1);
    }

    #[test]
    fn test_wireframe_toggle_rebuilds_scene() {
        let mut state = loaded(ModelVariant::PlateWithHoles);
        state.apply_view_command(ViewCommand::ToggleWireframe).unwrap();
        assert_eq!(state.scene.mode(), RenderMode::Wireframe);
        assert_eq!(state.scene_revision, 2);
        assert!(state.scene.triangles().iter().any(|t| t.subtractive));

        state.apply_view_command(ViewCommand::ToggleShading).unwrap();
        assert_eq!(state.scene_revision, 2);
    }

    #[test]
    fn test_failed_load_keeps_previous_model() {
        let mut state = AppState::with_kernel(&AppConfig::default(), Box::new(NullKernel));
        assert!(state.load_variant(ModelVariant::FanPlate).is_err());
        assert!(state.model.is_none());
        assert_eq!(state.scene_revision, 0);
    }

    #[test]
    fn test_export_without_model_fails() {
        let state = AppState::new(&AppConfig::default());
        let dir = tempfile::tempdir().unwrap();
        assert!(state.export_stl(&dir.path().join("model.stl")).is_err());
    }
}
