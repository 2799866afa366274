//! Software-rendered 3D viewport panel

use std::time::Instant;

use ek_core::Rgb;
use ek_renderer::{RendererConfig, ViewEvent};
use glam::DVec2;

use crate::state::{SharedAppState, ViewportState};

/// egui scroll points per wheel notch
const SCROLL_POINTS_PER_NOTCH: f32 = 50.0;

/// Viewport showing the current scene
pub struct ViewportPanel {
    state: ViewportState,
}

impl ViewportPanel {
    pub fn new(config: RendererConfig) -> Self {
        Self {
            state: ViewportState::new(config),
        }
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, app_state: &SharedAppState) {
        let available_size = ui.available_size();
        let (rect, response) = ui.allocate_exact_size(available_size, egui::Sense::click_and_drag());

        let width = rect.width() as u32;
        let height = rect.height() as u32;
        if width == 0 || height == 0 {
            return;
        }

        let mut app = app_state.lock();

        // Camera input
        let local = |p: egui::Pos2| DVec2::new((p.x - rect.min.x) as f64, (p.y - rect.min.y) as f64);
        if let Some(pos) = response.interact_pointer_pos() {
            if response.drag_started() {
                app.controller.handle_event(ViewEvent::PointerDown(local(pos)));
            } else if response.dragged() {
                app.controller.handle_event(ViewEvent::PointerDrag(local(pos)));
            }
        }
        if response.drag_stopped() {
            app.controller.handle_event(ViewEvent::PointerUp);
        }
        if response.hovered() {
            let scroll = ui.input(|i| i.raw_scroll_delta.y);
            if scroll != 0.0 {
                // Scrolling up zooms in
                let notches = -scroll / SCROLL_POINTS_PER_NOTCH;
                app.controller.handle_event(ViewEvent::Wheel(notches as f64));
            }
        }

        let params = *app.view_params();
        let redrawn = self.state.update(
            (width, height),
            &app.scene,
            app.scene_revision,
            &params,
            Instant::now(),
        );
        drop(app);

        if redrawn || self.state.texture.is_none() {
            let image = egui::ColorImage::from_rgba_unmultiplied(
                [width as usize, height as usize],
                self.state.canvas.as_bytes(),
            );
            match &mut self.state.texture {
                Some(texture) => texture.set(image, egui::TextureOptions::NEAREST),
                None => {
                    self.state.texture =
                        Some(ui.ctx().load_texture("viewport", image, egui::TextureOptions::NEAREST));
                }
            }
        }

        let painter = ui.painter_at(rect);
        if let Some(texture) = &self.state.texture {
            painter.image(
                texture.id(),
                rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );
        }

        for label in self.state.canvas.labels() {
            painter.text(
                rect.min + egui::vec2(label.position.x as f32, label.position.y as f32),
                egui::Align2::LEFT_BOTTOM,
                &label.text,
                egui::FontId::monospace(12.0),
                to_color32(label.color),
            );
        }

        ui.ctx().request_repaint_after(self.state.repaint_interval());
    }
}

fn to_color32(color: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(color.r, color.g, color.b)
}
