//! Orthographic rotation and screen projection

use glam::{DMat3, DVec3, IVec2};

/// Rotation applying `pitch` about X first, then `yaw` about Y (degrees)
///
/// Rows are `[cy, sx·sy, cx·sy]`, `[0, cx, −sx]`, `[−sy, sx·cy, cx·cy]`.
pub fn rotation_matrix(pitch_degrees: f64, yaw_degrees: f64) -> DMat3 {
    DMat3::from_rotation_y(yaw_degrees.to_radians()) * DMat3::from_rotation_x(pitch_degrees.to_radians())
}

/// Maps model points to integer pixel coordinates
///
/// Depth is discarded; the screen Y axis points down.
#[derive(Debug, Clone, Copy)]
pub struct Projector {
    rotation: DMat3,
    center: IVec2,
    scale: f64,
}

impl Projector {
    /// Projector for a `width` × `height` viewport centered on the model origin
    pub fn new(pitch_degrees: f64, yaw_degrees: f64, scale: f64, width: u32, height: u32) -> Self {
        Self {
            rotation: rotation_matrix(pitch_degrees, yaw_degrees),
            center: IVec2::new((width / 2) as i32, (height / 2) as i32),
            scale,
        }
    }

    /// Rotated model point
    pub fn rotate(&self, point: DVec3) -> DVec3 {
        self.rotation * point
    }

    /// Pixel position of a model point (truncated toward zero)
    pub fn project(&self, point: DVec3) -> IVec2 {
        let r = self.rotate(point);
        IVec2::new(
            (self.center.x as f64 + r.x * self.scale) as i32,
            (self.center.y as f64 - r.y * self.scale) as i32,
        )
    }

    /// Viewport center in pixels
    pub fn center(&self) -> IVec2 {
        self.center
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_identity_rotation() {
        let r = rotation_matrix(0.0, 0.0);
        let p = DVec3::new(1.5, -2.0, 3.0);
        assert_relative_eq!((r * p - p).length(), 0.0, epsilon = 1e-12);

        let projector = Projector::new(0.0, 0.0, 1.0, 0, 0);
        assert_eq!(projector.project(DVec3::new(3.0, 4.0, 7.0)), IVec2::new(3, -4));
    }

    #[test]
    fn test_matrix_rows() {
        let (pitch, yaw) = (20.0_f64, -30.0_f64);
        let (sx, cx) = pitch.to_radians().sin_cos();
        let (sy, cy) = yaw.to_radians().sin_cos();
        let expected = DMat3::from_cols_array_2d(&[
            [cy, 0.0, -sy],
            [sx * sy, cx, sx * cy],
            [cx * sy, -sx, cx * cy],
        ]);

        let actual = rotation_matrix(pitch, yaw);
        for (a, e) in actual.to_cols_array().iter().zip(expected.to_cols_array()) {
            assert_relative_eq!(*a, e, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_projection_centers_and_scales() {
        let projector = Projector::new(0.0, 0.0, 10.0, 800, 600);
        assert_eq!(projector.center(), IVec2::new(400, 300));
        assert_eq!(projector.project(DVec3::ZERO), IVec2::new(400, 300));
        assert_eq!(projector.project(DVec3::new(2.0, 1.0, 99.0)), IVec2::new(420, 290));
    }

    #[test]
    fn test_yaw_turns_z_toward_screen_x() {
        let projector = Projector::new(0.0, 90.0, 1.0, 0, 0);
        let r = projector.rotate(DVec3::Z);
        assert_relative_eq!(r.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(r.z, 0.0, epsilon = 1e-12);
    }
}
