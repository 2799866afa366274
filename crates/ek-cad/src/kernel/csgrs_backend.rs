//! csgrs CSG Kernel Backend
//!
//! Polygon boolean operations from the `csgrs` crate, which runs the csg.js
//! BSP construction over convex planar polygons.
//!
//! The backend validates inputs, places primitives the way the [`CsgKernel`]
//! contract describes and keeps faces that cannot touch the other operand out
//! of the BSP, so repeated cuts into a large plate only split nearby faces.

use csgrs::csg::CSG;
use glam::DVec3;

use super::{BooleanType, CadError, CadResult, CsgKernel};
use crate::solid::Solid;

/// Faces with less area than this are dropped from generated primitives
const MIN_FACE_AREA: f64 = 1e-12;

/// Slack added to extents so touching faces still go through the BSP
const EXTENT_MARGIN: f64 = 1e-9;

/// Axis-aligned extent of a point set
#[derive(Debug, Clone, Copy)]
struct Extent {
    min: DVec3,
    max: DVec3,
}

impl Extent {
    fn of(points: impl Iterator<Item = DVec3>) -> Self {
        points.fold(
            Extent {
                min: DVec3::splat(f64::INFINITY),
                max: DVec3::splat(f64::NEG_INFINITY),
            },
            |extent, p| Extent {
                min: extent.min.min(p),
                max: extent.max.max(p),
            },
        )
    }

    fn overlaps(&self, other: &Extent) -> bool {
        self.min.cmple(other.max + EXTENT_MARGIN).all()
            && other.min.cmple(self.max + EXTENT_MARGIN).all()
    }
}

/// Split `csg` into the faces whose extent overlaps `other` and the rest
fn partition(csg: &CSG<()>, other: &Extent) -> (CSG<()>, CSG<()>) {
    let (touching, apart): (Vec<_>, Vec<_>) = csg.polygons.iter().cloned().partition(|polygon| {
        Extent::of(
            polygon
                .vertices
                .iter()
                .map(|v| DVec3::new(v.pos.x, v.pos.y, v.pos.z)),
        )
        .overlaps(other)
    });
    (CSG::from_polygons(&touching), CSG::from_polygons(&apart))
}

/// csgrs-based CSG kernel
#[derive(Debug, Default)]
pub struct CsgrsKernel;

impl CsgrsKernel {
    /// Create a new csgrs kernel
    pub fn new() -> Self {
        Self
    }
}

/// Remove the zero-area faces csgrs emits at a collapsed cone apex
fn drop_degenerate_faces(mut csg: CSG<()>) -> CSG<()> {
    csg.polygons.retain(|polygon| {
        let points: Vec<DVec3> = polygon
            .vertices
            .iter()
            .map(|v| DVec3::new(v.pos.x, v.pos.y, v.pos.z))
            .collect();
        let doubled_area = points
            .iter()
            .zip(points.iter().cycle().skip(1))
            .map(|(a, b)| a.cross(*b))
            .sum::<DVec3>()
            .length();
        doubled_area * 0.5 > MIN_FACE_AREA
    });
    csg
}

impl CsgKernel for CsgrsKernel {
    fn name(&self) -> &str {
        "csgrs"
    }

    fn is_available(&self) -> bool {
        true
    }

    fn create_box(&self, center: DVec3, size: DVec3) -> CadResult<Solid> {
        if !center.is_finite() || !size.is_finite() {
            return Err(CadError::InvalidPrimitive(format!(
                "box has non-finite center {center} or size {size}"
            )));
        }
        if size.min_element() <= 0.0 {
            return Err(CadError::InvalidPrimitive(format!(
                "box size must be positive, got {size}"
            )));
        }

        // csgrs cubes span from the origin to `size`
        let corner = center - size * 0.5;
        let cube = CSG::cube(size.x, size.y, size.z, None).translate(corner.x, corner.y, corner.z);
        Ok(Solid::from_csg(cube))
    }

    fn create_cylinder(
        &self,
        top_radius: f64,
        bottom_radius: f64,
        height: f64,
        sides: u32,
    ) -> CadResult<Solid> {
        if sides < 3 {
            return Err(CadError::InvalidPrimitive(format!(
                "cylinder needs at least 3 sides, got {sides}"
            )));
        }
        if !(top_radius.is_finite() && bottom_radius.is_finite() && height.is_finite()) {
            return Err(CadError::InvalidPrimitive(
                "cylinder dimensions must be finite".into(),
            ));
        }
        if height <= 0.0 || top_radius < 0.0 || bottom_radius < 0.0 {
            return Err(CadError::InvalidPrimitive(format!(
                "invalid cylinder: top_radius={top_radius}, bottom_radius={bottom_radius}, height={height}"
            )));
        }
        if top_radius == 0.0 && bottom_radius == 0.0 {
            return Err(CadError::InvalidPrimitive(
                "cylinder needs at least one non-zero radius".into(),
            ));
        }

        // The first ring csgrs builds must have a radius, so an apex at the
        // bottom is built upside down and turned over.
        let frustum = if bottom_radius > 0.0 {
            CSG::frustum(bottom_radius, top_radius, height, sides as usize, None)
        } else {
            CSG::frustum(top_radius, bottom_radius, height, sides as usize, None)
                .rotate(180.0, 0.0, 0.0)
                .translate(0.0, 0.0, height)
        };
        Ok(Solid::from_csg(drop_degenerate_faces(frustum)))
    }

    fn boolean(&self, a: &Solid, b: &Solid, op: BooleanType) -> CadResult<Solid> {
        match op {
            BooleanType::Union if a.is_empty() => return Ok(b.clone()),
            BooleanType::Union if b.is_empty() => return Ok(a.clone()),
            BooleanType::Subtract if a.is_empty() || b.is_empty() => return Ok(a.clone()),
            BooleanType::Intersect if a.is_empty() || b.is_empty() => return Ok(Solid::empty()),
            _ => {}
        }

        let (a_clip, a_apart) = partition(a.csg(), &Extent::of(b.vertices()));
        let (b_clip, b_apart) = partition(b.csg(), &Extent::of(a.vertices()));

        // Faces outside the other operand's extent are outside it too
        let mut polygons = match op {
            BooleanType::Union => a_clip.union(&b_clip).polygons,
            BooleanType::Subtract => a_clip.difference(&b_clip).polygons,
            BooleanType::Intersect => a_clip.intersection(&b_clip).polygons,
        };
        match op {
            BooleanType::Union => {
                polygons.extend(a_apart.polygons);
                polygons.extend(b_apart.polygons);
            }
            BooleanType::Subtract => polygons.extend(a_apart.polygons),
            BooleanType::Intersect => {}
        }

        tracing::trace!(
            "{:?}: {} + {} polygons ({} + {} clipped) -> {}",
            op,
            a.polygon_count(),
            b.polygon_count(),
            a_clip.polygons.len(),
            b_clip.polygons.len(),
            polygons.len()
        );

        let solid = Solid::from_csg(CSG::from_polygons(&polygons));
        if !solid.is_finite() {
            return Err(CadError::BooleanFailed(format!(
                "{op:?} produced non-finite coordinates"
            )));
        }
        Ok(solid)
    }

    fn translate(&self, solid: &Solid, offset: DVec3) -> CadResult<Solid> {
        if !offset.is_finite() {
            return Err(CadError::InvalidPrimitive(format!(
                "non-finite translation {offset}"
            )));
        }
        if offset == DVec3::ZERO || solid.is_empty() {
            return Ok(solid.clone());
        }
        Ok(Solid::from_csg(
            solid.csg().translate(offset.x, offset.y, offset.z),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Enclosed volume by the divergence theorem over fan triangles
    fn volume(solid: &Solid) -> f64 {
        solid
            .faces()
            .map(|v| {
                (1..v.len() - 1)
                    .map(|i| v[0].dot(v[i].cross(v[i + 1])) / 6.0)
                    .sum::<f64>()
            })
            .sum()
    }

    fn extent(solid: &Solid) -> (DVec3, DVec3) {
        solid.vertices().fold(
            (DVec3::splat(f64::MAX), DVec3::splat(f64::MIN)),
            |(min, max), v| (min.min(v), max.max(v)),
        )
    }

    fn cube(kernel: &CsgrsKernel, center: DVec3, edge: f64) -> Solid {
        kernel.create_box(center, DVec3::splat(edge)).unwrap()
    }

    #[test]
    fn test_box_is_centered() {
        let kernel = CsgrsKernel::new();
        let solid = kernel
            .create_box(DVec3::new(1.0, 2.0, 3.0), DVec3::new(2.0, 4.0, 6.0))
            .unwrap();
        assert_eq!(solid.polygon_count(), 6);
        assert_relative_eq!(volume(&solid), 48.0, epsilon = 1e-9);

        let (min, max) = extent(&solid);
        assert_relative_eq!(min.x, 0.0);
        assert_relative_eq!(min.y, 0.0);
        assert_relative_eq!(min.z, 0.0);
        assert_relative_eq!(max.x, 2.0);
        assert_relative_eq!(max.y, 4.0);
        assert_relative_eq!(max.z, 6.0);
    }

    #[test]
    fn test_invalid_primitives_rejected() {
        let kernel = CsgrsKernel::new();
        assert!(matches!(
            kernel.create_box(DVec3::ZERO, DVec3::new(1.0, 0.0, 1.0)),
            Err(CadError::InvalidPrimitive(_))
        ));
        assert!(kernel.create_cylinder(1.0, 1.0, 1.0, 2).is_err());
        assert!(kernel.create_cylinder(0.0, 0.0, 1.0, 8).is_err());
        assert!(kernel.create_cylinder(1.0, 1.0, -1.0, 8).is_err());
        assert!(kernel.translate(&Solid::empty(), DVec3::NAN).is_err());
    }

    #[test]
    fn test_cylinder_stands_on_xy_plane() {
        let kernel = CsgrsKernel::new();
        let solid = kernel.create_cylinder(2.0, 2.0, 5.0, 32).unwrap();
        // One bottom wedge, one side quad and one top wedge per segment
        assert_eq!(solid.polygon_count(), 96);

        let (min, max) = extent(&solid);
        assert_relative_eq!(min.z, 0.0, epsilon = 1e-9);
        assert_relative_eq!(max.z, 5.0, epsilon = 1e-9);
        assert_relative_eq!(max.x, 2.0, epsilon = 1e-9);

        // Inscribed 32-gon prism
        let expected = 0.5 * 32.0 * 4.0 * (std::f64::consts::TAU / 32.0).sin() * 5.0;
        assert_relative_eq!(volume(&solid), expected, epsilon = 1e-6);
    }

    #[test]
    fn test_cone_apex_faces_dropped() {
        let kernel = CsgrsKernel::new();
        for (top, bottom) in [(0.0, 3.0), (3.0, 0.0)] {
            let solid = kernel.create_cylinder(top, bottom, 4.0, 8).unwrap();
            // Eight sides and one cap of eight wedges
            assert_eq!(solid.polygon_count(), 16);

            let expected = 0.5 * 8.0 * 9.0 * (std::f64::consts::TAU / 8.0).sin() * 4.0 / 3.0;
            assert_relative_eq!(volume(&solid), expected, epsilon = 1e-6);

            let (min, max) = extent(&solid);
            assert_relative_eq!(min.z, 0.0, epsilon = 1e-9);
            assert_relative_eq!(max.z, 4.0, epsilon = 1e-9);
        }

        // The wide ring stays where it was asked for
        let funnel = kernel.create_cylinder(3.0, 0.0, 4.0, 8).unwrap();
        assert!(funnel.vertices().filter(|v| v.z < 1e-9).all(|v| v.length() < 1e-9));
    }

    #[test]
    fn test_union_of_overlapping_boxes() {
        let kernel = CsgrsKernel::new();
        let a = cube(&kernel, DVec3::ZERO, 10.0);
        let b = cube(&kernel, DVec3::new(5.0, 0.0, 0.0), 10.0);

        let result = kernel.union(&a, &b).unwrap();
        assert_relative_eq!(volume(&result), 1500.0, epsilon = 1e-6);

        let (min, max) = extent(&result);
        assert_relative_eq!(min.x, -5.0);
        assert_relative_eq!(max.x, 10.0);
    }

    #[test]
    fn test_difference_cuts_through_hole() {
        let kernel = CsgrsKernel::new();
        let plate = cube(&kernel, DVec3::ZERO, 10.0);
        let hole = kernel
            .create_box(DVec3::ZERO, DVec3::new(4.0, 4.0, 20.0))
            .unwrap();

        let result = kernel.difference(&plate, &hole).unwrap();
        assert_relative_eq!(volume(&result), 1000.0 - 160.0, epsilon = 1e-6);

        // No material remains inside the hole
        assert!(
            result
                .vertices()
                .all(|v| v.x.abs() >= 2.0 - 1e-9 || v.y.abs() >= 2.0 - 1e-9)
        );
    }

    #[test]
    fn test_intersect_keeps_overlap() {
        let kernel = CsgrsKernel::new();
        let a = cube(&kernel, DVec3::ZERO, 10.0);
        let b = cube(&kernel, DVec3::new(5.0, 0.0, 0.0), 10.0);

        let result = kernel.intersect(&a, &b).unwrap();
        assert_relative_eq!(volume(&result), 500.0, epsilon = 1e-6);

        let (min, max) = extent(&result);
        assert_relative_eq!(min.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(max.x, 5.0, epsilon = 1e-9);
    }

    #[test]
    fn test_empty_operands() {
        let kernel = CsgrsKernel::new();
        let a = cube(&kernel, DVec3::ZERO, 2.0);
        let empty = Solid::empty();

        assert_eq!(kernel.union(&empty, &a).unwrap().polygon_count(), 6);
        assert_eq!(kernel.difference(&a, &empty).unwrap().polygon_count(), 6);
        assert!(kernel.difference(&empty, &a).unwrap().is_empty());
        assert!(kernel.intersect(&a, &empty).unwrap().is_empty());
    }

    #[test]
    fn test_disjoint_union_keeps_both() {
        let kernel = CsgrsKernel::new();
        let a = cube(&kernel, DVec3::ZERO, 2.0);
        let b = cube(&kernel, DVec3::new(10.0, 0.0, 0.0), 2.0);

        let result = kernel.union(&a, &b).unwrap();
        assert_eq!(result.polygon_count(), 12);
        assert_relative_eq!(volume(&result), 16.0, epsilon = 1e-9);
    }

    #[test]
    fn test_faces_away_from_cut_are_not_split() {
        let kernel = CsgrsKernel::new();
        let bar = kernel
            .create_box(DVec3::ZERO, DVec3::new(100.0, 10.0, 10.0))
            .unwrap();
        let notch = kernel
            .create_box(DVec3::new(50.0, 0.0, 0.0), DVec3::new(4.0, 20.0, 20.0))
            .unwrap();

        let result = kernel.difference(&bar, &notch).unwrap();
        assert_relative_eq!(volume(&result), 10_000.0 - 2.0 * 100.0, epsilon = 1e-6);

        // The far end cap keeps its single quad
        let far_caps = result
            .faces()
            .filter(|face| face.iter().all(|v| (v.x + 50.0).abs() < 1e-9))
            .count();
        assert_eq!(far_caps, 1);
    }

    #[test]
    fn test_translate_leaves_source_untouched() {
        let kernel = CsgrsKernel::new();
        let a = cube(&kernel, DVec3::ZERO, 2.0);
        let moved = kernel.translate(&a, DVec3::new(0.0, 0.0, 3.0)).unwrap();

        assert!(a.vertices().all(|v| v.z.abs() <= 1.0 + 1e-12));
        assert!(moved.vertices().all(|v| v.z >= 2.0 - 1e-12 && v.z <= 4.0 + 1e-12));
        assert_relative_eq!(volume(&moved), 8.0, epsilon = 1e-9);
    }

    #[test]
    fn test_cylinder_hole_in_plate() {
        let kernel = CsgrsKernel::new();
        let plate = kernel
            .create_box(DVec3::new(0.0, 0.0, 1.0), DVec3::new(20.0, 20.0, 2.0))
            .unwrap();
        let hole = kernel.create_cylinder(3.0, 3.0, 4.0, 16).unwrap();
        let hole = kernel.translate(&hole, DVec3::new(0.0, 0.0, -1.0)).unwrap();

        let result = kernel.difference(&plate, &hole).unwrap();
        assert!(volume(&result) < 800.0);
        assert!(volume(&result) > 800.0 - std::f64::consts::PI * 9.0 * 2.0);
    }

    #[test]
    fn test_many_cylinder_holes_stay_bounded() {
        let kernel = CsgrsKernel::new();
        let mut plate = kernel
            .create_box(DVec3::new(0.0, 0.0, 1.0), DVec3::new(100.0, 100.0, 2.0))
            .unwrap();
        let hole = kernel.create_cylinder(2.0, 2.0, 4.0, 16).unwrap();
        for i in 0..4 {
            for j in 0..4 {
                let offset = DVec3::new(i as f64 * 20.0 - 30.0, j as f64 * 20.0 - 30.0, -1.0);
                let placed = kernel.translate(&hole, offset).unwrap();
                plate = kernel.difference(&plate, &placed).unwrap();
            }
        }

        let hole_area = 0.5 * 16.0 * 4.0 * (std::f64::consts::TAU / 16.0).sin();
        assert_relative_eq!(volume(&plate), 20_000.0 - 16.0 * hole_area * 2.0, epsilon = 1e-6);
        assert!(plate.is_finite());
    }
}
