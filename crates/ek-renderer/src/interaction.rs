//! Pointer, wheel and command handling for the viewport

use std::time::{Duration, Instant};

use glam::DVec2;

use crate::config::ViewConfig;
use crate::view::ViewParams;

/// Low-level input from the host window
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewEvent {
    /// Button pressed at a position (starts a drag)
    PointerDown(DVec2),
    /// Pointer moved to a position while pressed
    PointerDrag(DVec2),
    /// Button released
    PointerUp,
    /// Wheel rotated; positive notches zoom out
    Wheel(f64),
}

/// Discrete view toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewCommand {
    /// Switch between solid and wireframe drawing
    ToggleWireframe,
    /// Show or hide the boundary-edge outline
    ToggleEdges,
    /// Enable or disable flat shading
    ToggleShading,
    /// Show or hide the coordinate axes
    ToggleAxes,
}

impl ViewCommand {
    /// Every command, in toolbar order
    pub const ALL: &'static [ViewCommand] = &[
        ViewCommand::ToggleWireframe,
        ViewCommand::ToggleEdges,
        ViewCommand::ToggleShading,
        ViewCommand::ToggleAxes,
    ];

    /// Button label
    pub fn label(&self) -> &'static str {
        match self {
            ViewCommand::ToggleWireframe => "Toggle Wireframe",
            ViewCommand::ToggleEdges => "Toggle Edge Highlights",
            ViewCommand::ToggleShading => "Toggle Shading",
            ViewCommand::ToggleAxes => "Toggle Axes",
        }
    }
}

/// Turns input into [`ViewParams`] changes
#[derive(Debug, Clone)]
pub struct InteractionController {
    params: ViewParams,
    config: ViewConfig,
    last_pointer: Option<DVec2>,
}

impl InteractionController {
    /// Controller starting from the configured initial view
    pub fn new(config: ViewConfig) -> Self {
        Self {
            params: ViewParams::from_config(&config),
            config,
            last_pointer: None,
        }
    }

    /// Current parameters
    pub fn params(&self) -> &ViewParams {
        &self.params
    }

    /// True between `PointerDown` and `PointerUp`
    pub fn is_dragging(&self) -> bool {
        self.last_pointer.is_some()
    }

    /// Apply one input event
    pub fn handle_event(&mut self, event: ViewEvent) {
        match event {
            ViewEvent::PointerDown(position) => {
                self.last_pointer = Some(position);
            }
            ViewEvent::PointerDrag(position) => {
                // A drag without a press starts from here
                let last = self.last_pointer.unwrap_or(position);
                let delta = position - last;
                self.params.yaw += delta.x * self.config.drag_sensitivity;
                self.params.pitch += delta.y * self.config.drag_sensitivity;
                self.last_pointer = Some(position);
            }
            ViewEvent::PointerUp => {
                self.last_pointer = None;
            }
            ViewEvent::Wheel(notches) => {
                let scale = self.params.scale * self.config.zoom_factor.powf(-notches);
                self.params.scale = scale.clamp(self.config.min_scale, self.config.max_scale);
            }
        }
    }

    /// Apply a toggle; returns true when the scene must be re-triangulated
    pub fn apply(&mut self, command: ViewCommand) -> bool {
        tracing::debug!("View command: {}", command.label());
        match command {
            ViewCommand::ToggleWireframe => {
                self.params.mode = self.params.mode.toggled();
                true
            }
            ViewCommand::ToggleEdges => {
                self.params.show_edges = !self.params.show_edges;
                true
            }
            ViewCommand::ToggleShading => {
                self.params.show_shading = !self.params.show_shading;
                false
            }
            ViewCommand::ToggleAxes => {
                self.params.show_axes = !self.params.show_axes;
                false
            }
        }
    }

    /// Back to the configured initial view, keeping the toggles
    pub fn reset_view(&mut self) {
        let initial = ViewParams::from_config(&self.config);
        self.params.yaw = initial.yaw;
        self.params.pitch = initial.pitch;
        self.params.scale = initial.scale;
    }
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new(ViewConfig::default())
    }
}

/// Dirty-flag repaint check on a fixed interval
///
/// Compares the parameters of the last rendered frame with the live ones.
#[derive(Debug, Clone)]
pub struct RepaintScheduler {
    interval: Duration,
    last_check: Option<Instant>,
    rendered: Option<ViewParams>,
    invalidated: bool,
}

impl RepaintScheduler {
    /// Scheduler checking every `interval`
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_check: None,
            rendered: None,
            invalidated: true,
        }
    }

    /// Check interval
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Force a repaint on the next tick (scene replaced, viewport resized)
    pub fn invalidate(&mut self) {
        self.invalidated = true;
    }

    /// Record the parameters of a frame just drawn
    pub fn mark_rendered(&mut self, params: ViewParams) {
        self.rendered = Some(params);
        self.invalidated = false;
    }

    /// True when a repaint is due at `now`
    ///
    /// Calls closer together than the interval report false.
    pub fn tick(&mut self, now: Instant, live: &ViewParams) -> bool {
        if self
            .last_check
            .is_some_and(|last| now.saturating_duration_since(last) < self.interval)
        {
            return false;
        }
        self.last_check = Some(now);
        self.invalidated || self.rendered.as_ref() != Some(live)
    }
}

impl Default for RepaintScheduler {
    fn default() -> Self {
        Self::new(Duration::from_millis(ViewConfig::default().repaint_interval_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    use crate::view::RenderMode;

    #[test]
    fn test_drag_rotates() {
        let mut controller = InteractionController::default();
        controller.handle_event(ViewEvent::PointerDown(DVec2::new(100.0, 100.0)));
        controller.handle_event(ViewEvent::PointerDrag(DVec2::new(120.0, 90.0)));
        assert_relative_eq!(controller.params().yaw, -20.0);
        assert_relative_eq!(controller.params().pitch, 15.0);

        controller.handle_event(ViewEvent::PointerDrag(DVec2::new(124.0, 90.0)));
        assert_relative_eq!(controller.params().yaw, -18.0);

        controller.handle_event(ViewEvent::PointerUp);
        assert!(!controller.is_dragging());
    }

    #[test]
    fn test_wheel_zoom() {
        let mut controller = InteractionController::default();
        controller.handle_event(ViewEvent::Wheel(-1.0));
        assert_relative_eq!(controller.params().scale, 11.0, epsilon = 1e-9);
        controller.handle_event(ViewEvent::Wheel(1.0));
        assert_relative_eq!(controller.params().scale, 10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_scale_clamped() {
        let mut controller = InteractionController::default();
        for _ in 0..200 {
            controller.handle_event(ViewEvent::Wheel(1.0));
            assert!(controller.params().scale >= 1.0);
        }
        assert_relative_eq!(controller.params().scale, 1.0);

        for i in 0..200 {
            let notches = if i % 7 == 0 { 2.0 } else { -3.0 };
            controller.handle_event(ViewEvent::Wheel(notches));
            let scale = controller.params().scale;
            assert!((1.0..=100.0).contains(&scale));
        }
        assert_relative_eq!(controller.params().scale, 100.0);
    }

    #[test]
    fn test_commands() {
        let mut controller = InteractionController::default();
        assert!(controller.apply(ViewCommand::ToggleWireframe));
        assert_eq!(controller.params().mode, RenderMode::Wireframe);
        assert!(controller.apply(ViewCommand::ToggleEdges));
        assert!(!controller.params().show_edges);
        assert!(!controller.apply(ViewCommand::ToggleShading));
        assert!(controller.params().show_shading);
        assert!(!controller.apply(ViewCommand::ToggleAxes));
        assert!(!controller.params().show_axes);
    }

    #[test]
    fn test_reset_view_keeps_toggles() {
        let mut controller = InteractionController::default();
        controller.apply(ViewCommand::ToggleShading);
        controller.handle_event(ViewEvent::Wheel(-5.0));
        controller.reset_view();
        assert_eq!(controller.params().scale, 10.0);
        assert!(controller.params().show_shading);
    }

    #[test]
    fn test_scheduler_fires_only_on_change() {
        let start = Instant::now();
        let mut scheduler = RepaintScheduler::new(Duration::from_millis(16));
        let mut params = ViewParams::default();

        // Nothing rendered yet
        assert!(scheduler.tick(start, &params));
        scheduler.mark_rendered(params);

        let t1 = start + Duration::from_millis(16);
        assert!(!scheduler.tick(t1, &params));

        params.yaw += 1.0;
        // Too soon after the previous check
        assert!(!scheduler.tick(t1 + Duration::from_millis(5), &params));
        let t2 = t1 + Duration::from_millis(16);
        assert!(scheduler.tick(t2, &params));
        scheduler.mark_rendered(params);

        scheduler.invalidate();
        assert!(scheduler.tick(t2 + Duration::from_millis(16), &params));
    }
}
