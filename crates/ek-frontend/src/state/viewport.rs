//! Viewport rendering state

use std::time::{Duration, Instant};

use ek_renderer::{Canvas, RendererConfig, RepaintScheduler, Scene, SoftwareRenderer, ViewParams};

/// Raster, renderer and repaint bookkeeping for the viewport
pub struct ViewportState {
    pub canvas: Canvas,
    pub renderer: SoftwareRenderer,
    scheduler: RepaintScheduler,
    seen_revision: Option<u64>,
    /// Uploaded copy of `canvas`
    pub texture: Option<egui::TextureHandle>,
}

impl ViewportState {
    pub fn new(config: RendererConfig) -> Self {
        let interval = Duration::from_millis(config.view.repaint_interval_ms);
        Self {
            canvas: Canvas::new(0, 0),
            renderer: SoftwareRenderer::new(config),
            scheduler: RepaintScheduler::new(interval),
            seen_revision: None,
            texture: None,
        }
    }

    /// How often the viewport re-checks for changes
    pub fn repaint_interval(&self) -> Duration {
        self.scheduler.interval()
    }

    /// Redraw the canvas if the size, scene or view changed
    ///
    /// Returns true when the canvas was redrawn and needs uploading.
    pub fn update(
        &mut self,
        size: (u32, u32),
        scene: &Scene,
        scene_revision: u64,
        params: &ViewParams,
        now: Instant,
    ) -> bool {
        if size != (self.canvas.width(), self.canvas.height()) {
            self.canvas.resize(size.0, size.1);
            self.scheduler.invalidate();
        }
        if self.seen_revision != Some(scene_revision) {
            self.seen_revision = Some(scene_revision);
            self.scheduler.invalidate();
        }

        if !self.scheduler.tick(now, params) {
            return false;
        }
        self.renderer.render(scene, params, &mut self.canvas);
        self.scheduler.mark_rendered(*params);
        true
    }
}
