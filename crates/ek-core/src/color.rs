//! 8-bit RGB colors and the automatic color palette

use serde::{Deserialize, Serialize};

/// An 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Multiply every channel by `factor`, truncating and clamping to [0, 255]
    pub fn scaled(self, factor: f64) -> Rgb {
        let channel = |c: u8| (c as f64 * factor).clamp(0.0, 255.0) as u8;
        Rgb::new(channel(self.r), channel(self.g), channel(self.b))
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Rgb::new(r, g, b)
    }
}

/// Fixed cyclic sequence of colors for shapes added without one
#[derive(Debug, Clone, Default)]
pub struct Palette {
    index: usize,
}

impl Palette {
    /// Palette entries, in assignment order
    pub const COLORS: [Rgb; 5] = [
        Rgb::new(100, 150, 255),
        Rgb::new(255, 150, 100),
        Rgb::new(150, 255, 100),
        Rgb::new(255, 255, 100),
        Rgb::new(200, 100, 255),
    ];

    pub fn new() -> Self {
        Self::default()
    }

    /// Take the next color and advance, wrapping after the last entry
    pub fn next_color(&mut self) -> Rgb {
        let color = Self::COLORS[self.index % Self::COLORS.len()];
        self.index = (self.index + 1) % Self::COLORS.len();
        color
    }

    /// Number of colors handed out since the last wrap
    pub fn index(&self) -> usize {
        self.index
    }
}
