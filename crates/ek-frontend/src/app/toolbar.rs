//! Toolbar: model selector, view toggles and export

use ek_core::ModelVariant;
use ek_renderer::ViewCommand;

use crate::state::{AppAction, SharedAppState};

/// Render the toolbar
pub fn render_toolbar(ctx: &egui::Context, app_state: &SharedAppState) {
    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Model:");
            let current = app_state.lock().variant;
            let mut selected = current;
            egui::ComboBox::from_id_salt("model_variant")
                .selected_text(current.name())
                .show_ui(ui, |ui| {
                    for variant in ModelVariant::ALL {
                        ui.selectable_value(&mut selected, *variant, variant.name());
                    }
                });
            if selected != current {
                app_state.lock().queue_action(AppAction::SelectVariant(selected));
            }

            ui.separator();

            for command in ViewCommand::ALL {
                if ui.button(command.label()).clicked() {
                    app_state.lock().queue_action(AppAction::View(*command));
                }
            }
            if ui.button("Reset View").clicked() {
                app_state.lock().queue_action(AppAction::ResetView);
            }

            ui.separator();

            if ui.button("Export STL").clicked() {
                let file_name = app_state.lock().export_file_name.clone();
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("STL files", &["stl", "STL"])
                    .set_file_name(file_name)
                    .save_file()
                {
                    app_state.lock().queue_action(AppAction::ExportStl(path));
                }
            }
        });
    });
}
