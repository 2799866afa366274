//! Drawing target abstraction

use ek_core::Rgb;
use glam::IVec2;

/// Screen-space drawing primitives used by the renderer
///
/// Coordinates are integer pixels with the origin at the top-left corner.
/// Primitives that fall partly or fully outside the surface are clipped.
pub trait Surface {
    /// Width and height in pixels
    fn size(&self) -> (u32, u32);

    /// Fill the whole surface
    fn clear(&mut self, color: Rgb);

    /// Fill a triangle given in either winding
    fn fill_triangle(&mut self, points: [IVec2; 3], color: Rgb);

    /// One-pixel line between two points, inclusive
    fn draw_line(&mut self, from: IVec2, to: IVec2, color: Rgb);

    /// Text with its baseline starting at `position`
    fn draw_text(&mut self, position: IVec2, text: &str, color: Rgb);
}
