//! Live view parameters

use crate::config::ViewConfig;

/// How the scene geometry is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Filled layer composites
    #[default]
    Solid,
    /// Edges of every shape, subtractive shapes highlighted
    Wireframe,
}

impl RenderMode {
    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            RenderMode::Solid => RenderMode::Wireframe,
            RenderMode::Wireframe => RenderMode::Solid,
        }
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            RenderMode::Solid => "Solid",
            RenderMode::Wireframe => "Wireframe",
        }
    }
}

/// Everything that determines one rendered frame, besides the scene itself
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewParams {
    /// Rotation about Y, in degrees
    pub yaw: f64,
    /// Rotation about X, in degrees
    pub pitch: f64,
    /// Pixels per model unit
    pub scale: f64,
    /// Solid or wireframe drawing
    pub mode: RenderMode,
    /// Outline boundary edges in solid mode
    pub show_edges: bool,
    /// Draw the coordinate axes
    pub show_axes: bool,
    /// Lambert-shade filled faces
    pub show_shading: bool,
}

impl ViewParams {
    /// Initial parameters taken from `config`
    pub fn from_config(config: &ViewConfig) -> Self {
        Self {
            yaw: config.initial_yaw,
            pitch: config.initial_pitch,
            scale: config.initial_scale.clamp(config.min_scale, config.max_scale),
            mode: RenderMode::Solid,
            show_edges: true,
            show_axes: true,
            show_shading: false,
        }
    }

    /// Status line drawn over the viewport
    pub fn overlay_text(&self) -> String {
        format!(
            "Rotation: X={:.1}°, Y={:.1}°, Scale={:.2}",
            self.pitch, self.yaw, self.scale
        )
    }
}

impl Default for ViewParams {
    fn default() -> Self {
        Self::from_config(&ViewConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = ViewParams::default();
        assert_eq!(params.yaw, -30.0);
        assert_eq!(params.pitch, 20.0);
        assert_eq!(params.scale, 10.0);
        assert_eq!(params.mode, RenderMode::Solid);
        assert!(params.show_edges && params.show_axes && !params.show_shading);
    }

    #[test]
    fn test_overlay_text() {
        assert_eq!(
            ViewParams::default().overlay_text(),
            "Rotation: X=20.0°, Y=-30.0°, Scale=10.00"
        );
    }

    #[test]
    fn test_initial_scale_clamped() {
        let config = ViewConfig {
            initial_scale: 500.0,
            ..Default::default()
        };
        assert_eq!(ViewParams::from_config(&config).scale, 100.0);
    }

    #[test]
    fn test_mode_toggle() {
        assert_eq!(RenderMode::Solid.toggled(), RenderMode::Wireframe);
        assert_eq!(RenderMode::Wireframe.toggled().name(), "Solid");
    }
}
