//! Axis-aligned bounding boxes

use glam::DVec3;

/// Axis-aligned bounding box
///
/// Empty inputs produce the degenerate zero box at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub min: DVec3,
    pub max: DVec3,
}

impl Bounds {
    pub fn new(min: DVec3, max: DVec3) -> Self {
        Self { min, max }
    }

    /// Tight box around `points`, or the zero box if there are none
    pub fn from_points(points: impl IntoIterator<Item = DVec3>) -> Self {
        let mut points = points.into_iter();
        let Some(first) = points.next() else {
            return Self::default();
        };
        points.fold(Self::new(first, first), |acc, p| Self {
            min: acc.min.min(p),
            max: acc.max.max(p),
        })
    }

    /// Smallest box containing both
    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }

    pub fn min_x(&self) -> f64 {
        self.min.x
    }

    pub fn max_x(&self) -> f64 {
        self.max.x
    }

    pub fn min_y(&self) -> f64 {
        self.min.y
    }

    pub fn max_y(&self) -> f64 {
        self.max.y
    }

    pub fn min_z(&self) -> f64 {
        self.min.z
    }

    pub fn max_z(&self) -> f64 {
        self.max.z
    }

    /// `[min_x, max_x, min_y, max_y, min_z, max_z]`
    pub fn to_array(&self) -> [f64; 6] {
        [
            self.min.x, self.max.x, self.min.y, self.max.y, self.min.z, self.max.z,
        ]
    }
}

impl std::fmt::Display for Bounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "X[{:.2}, {:.2}], Y[{:.2}, {:.2}], Z[{:.2}, {:.2}]",
            self.min.x, self.max.x, self.min.y, self.max.y, self.min.z, self.max.z
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_points_give_zero_box() {
        let bounds = Bounds::from_points(std::iter::empty());
        assert_eq!(bounds.to_array(), [0.0; 6]);
    }

    #[test]
    fn test_from_points_and_union() {
        let a = Bounds::from_points([DVec3::new(1.0, -2.0, 3.0), DVec3::new(-1.0, 2.0, 0.0)]);
        assert_eq!(a.to_array(), [-1.0, 1.0, -2.0, 2.0, 0.0, 3.0]);
        assert_eq!(a.center(), DVec3::new(0.0, 0.0, 1.5));

        let b = Bounds::new(DVec3::splat(5.0), DVec3::splat(6.0));
        let merged = a.union(&b);
        assert_eq!(merged.size(), DVec3::new(7.0, 8.0, 6.0));
    }

    #[test]
    fn test_display() {
        let bounds = Bounds::new(DVec3::splat(-1.0), DVec3::splat(1.0));
        assert_eq!(
            bounds.to_string(),
            "X[-1.00, 1.00], Y[-1.00, 1.00], Z[-1.00, 1.00]"
        );
    }
}
