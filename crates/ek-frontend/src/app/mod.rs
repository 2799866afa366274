//! Main application module

mod toolbar;

use crate::actions::{ActionContext, dispatch_action};
use crate::config::AppConfig;
use crate::panels::ViewportPanel;
use crate::state::{SharedAppState, create_shared_state};

pub use toolbar::render_toolbar;

/// Main application
pub struct EnclosureKitApp {
    app_state: SharedAppState,
    viewport: ViewportPanel,
}

impl EnclosureKitApp {
    /// Create a new app
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        if config.dark_mode {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
        } else {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
        }

        Self {
            app_state: create_shared_state(&config),
            viewport: ViewportPanel::new(config.renderer.clone()),
        }
    }

    /// Process pending actions
    fn process_actions(&mut self) {
        let actions = self.app_state.lock().take_pending_actions();
        let ctx = ActionContext::new(&self.app_state);

        for action in actions {
            dispatch_action(action, &ctx);
        }
    }

    fn show_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            let state = self.app_state.lock();
            ui.horizontal(|ui| {
                ui.label(format!("Model: {}", state.variant));
                ui.separator();
                ui.label(format!("{} triangles", state.scene.triangles().len()));
                if let Some(status) = &state.status {
                    ui.separator();
                    if status.is_error {
                        let color = ui.visuals().error_fg_color;
                        ui.colored_label(color, &status.text);
                    } else {
                        ui.label(&status.text);
                    }
                }
            });
        });
    }
}

impl eframe::App for EnclosureKitApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Process pending actions
        self.process_actions();

        render_toolbar(ctx, &self.app_state);
        self.show_status_bar(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                self.viewport.ui(ui, &self.app_state);
            });
    }
}
