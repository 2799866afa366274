//! Flat Lambert shading

use ek_core::Rgb;
use glam::DVec3;

/// `ambient + (1 − ambient) · max(0, normal · light)`
pub fn brightness(normal: DVec3, light_direction: DVec3, ambient: f64) -> f64 {
    ambient + (1.0 - ambient) * normal.dot(light_direction).max(0.0)
}

/// Base color scaled by the face brightness, channels clamped to [0, 255]
pub fn shade(color: Rgb, normal: DVec3, light_direction: DVec3, ambient: f64) -> Rgb {
    color.scaled(brightness(normal, light_direction, ambient))
}
