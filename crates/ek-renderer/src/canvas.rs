//! CPU framebuffer implementing [`Surface`]

use bytemuck::{Pod, Zeroable};
use ek_core::Rgb;
use glam::IVec2;

use crate::surface::Surface;

/// One RGBA8 pixel
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct Pixel {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
    /// Alpha (always opaque)
    pub a: u8,
}

impl From<Rgb> for Pixel {
    fn from(c: Rgb) -> Self {
        Pixel {
            r: c.r,
            g: c.g,
            b: c.b,
            a: 255,
        }
    }
}

/// Text queued for the host toolkit to draw over the raster
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    /// Baseline start, in pixels
    pub position: IVec2,
    /// Label contents
    pub text: String,
    /// Text color
    pub color: Rgb,
}

/// Row-major RGBA raster
///
/// Glyph rendering is left to the host: [`Surface::draw_text`] records a
/// [`TextLabel`] instead of touching pixels.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
    labels: Vec<TextLabel>,
}

impl Canvas {
    /// Black canvas of the given size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Pixel::zeroed(); (width as usize) * (height as usize)],
            labels: Vec::new(),
        }
    }

    /// Resize, discarding contents if the size changed
    pub fn resize(&mut self, width: u32, height: u32) {
        if (width, height) != (self.width, self.height) {
            *self = Self::new(width, height);
        }
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// All pixels, row by row
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Pixels as tightly packed RGBA bytes
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Text recorded since the last clear
    pub fn labels(&self) -> &[TextLabel] {
        &self.labels
    }

    /// Color at `(x, y)`, or `None` outside the canvas
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb> {
        self.index(x, y).map(|i| {
            let p = self.pixels[i];
            Rgb::new(p.r, p.g, p.b)
        })
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Pixel) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }
}

/// Twice the signed area of `(a, b, p)`
fn edge_function(a: IVec2, b: IVec2, px: i64, py: i64) -> i64 {
    // Sample at pixel centers: coordinates are doubled so the half offset stays integral
    let (ax, ay) = (2 * a.x as i64, 2 * a.y as i64);
    let (bx, by) = (2 * b.x as i64, 2 * b.y as i64);
    (bx - ax) * (py - ay) - (by - ay) * (px - ax)
}

impl Surface for Canvas {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self, color: Rgb) {
        self.pixels.fill(color.into());
        self.labels.clear();
    }

    fn fill_triangle(&mut self, points: [IVec2; 3], color: Rgb) {
        let [p0, p1, p2] = points;
        let area = edge_function(p0, p1, 2 * p2.x as i64, 2 * p2.y as i64);
        if area == 0 || self.width == 0 || self.height == 0 {
            return;
        }
        let sign = area.signum();

        let min = p0.min(p1).min(p2).max(IVec2::ZERO);
        let max = p0
            .max(p1)
            .max(p2)
            .min(IVec2::new(self.width as i32 - 1, self.height as i32 - 1));
        let pixel: Pixel = color.into();

        for y in min.y..=max.y {
            let py = 2 * y as i64 + 1;
            for x in min.x..=max.x {
                let px = 2 * x as i64 + 1;
                let inside = [(p0, p1), (p1, p2), (p2, p0)]
                    .iter()
                    .all(|&(a, b)| edge_function(a, b, px, py) * sign >= 0);
                if inside {
                    self.set_pixel(x, y, pixel);
                }
            }
        }
    }

    fn draw_line(&mut self, from: IVec2, to: IVec2, color: Rgb) {
        let pixel: Pixel = color.into();
        let (mut x, mut y) = (from.x as i64, from.y as i64);
        let (x1, y1) = (to.x as i64, to.y as i64);
        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            if let (Ok(px), Ok(py)) = (i32::try_from(x), i32::try_from(y)) {
                self.set_pixel(px, py, pixel);
            }
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    fn draw_text(&mut self, position: IVec2, text: &str, color: Rgb) {
        self.labels.push(TextLabel {
            position,
            text: text.to_string(),
            color,
        });
    }
}
