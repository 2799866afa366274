//! Enclosure Kit Renderer
//!
//! Deterministic software previewer for layered models.
//!
//! # Architecture
//!
//! - [`scene::Scene`] - Triangles of a model for one render mode, plus its outline
//! - [`renderer::SoftwareRenderer`] - Draws a scene onto any [`surface::Surface`]
//! - [`canvas::Canvas`] - RGBA framebuffer implementing `Surface`
//! - [`interaction::InteractionController`] - Pointer, wheel and toggle handling
//! - [`interaction::RepaintScheduler`] - Dirty-flag repaint check
//!
//! Projection is orthographic with no depth buffer and no culling: faces are
//! painted in scene order.
//!
//! # Module Structure
//!
//! ```text
//! ek-renderer/
//! ├── config.rs       # Colors, lighting, view and reference settings (RON)
//! ├── projection.rs   # Rotation matrix and screen mapping
//! ├── shading.rs      # Flat Lambert shading
//! ├── surface.rs      # Drawing target trait
//! ├── canvas.rs       # CPU framebuffer
//! ├── scene.rs        # Triangulated model
//! ├── view.rs         # Live view parameters
//! ├── interaction.rs  # Input handling and repaint scheduling
//! └── renderer.rs     # Frame assembly
//! ```

pub mod canvas;
pub mod config;
pub mod interaction;
pub mod projection;
pub mod renderer;
pub mod scene;
pub mod shading;
pub mod surface;
pub mod view;

// Re-exports for convenience
pub use canvas::{Canvas, Pixel, TextLabel};
pub use config::{ConfigError, RendererConfig};
pub use interaction::{InteractionController, RepaintScheduler, ViewCommand, ViewEvent};
pub use projection::{Projector, rotation_matrix};
pub use renderer::SoftwareRenderer;
pub use scene::Scene;
pub use surface::Surface;
pub use view::{RenderMode, ViewParams};
