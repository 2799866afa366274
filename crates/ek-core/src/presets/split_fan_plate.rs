//! Fan plate split into two interlocking halves

use ek_cad::CsgKernel;
use glam::DVec3;

use crate::error::{CoreError, CoreResult};
use crate::layer::Layer;
use crate::model::Model;
use crate::shape::{Shape, ShapeKind};

use super::fan_plate::FanPlateBuilder;

/// Heights of the interlock tabs, as fractions of the plate height
const TAB_POSITIONS: [f64; 4] = [0.05, 0.26, 0.75, 0.9];

/// Cuts a built fan plate down the middle (along X) and adds alternating
/// tabs and matching recesses so the halves key into each other
#[derive(Debug, Clone, PartialEq)]
pub struct SplitFanPlateBuilder {
    pub source: FanPlateBuilder,
    pub tab_width: f64,
    pub tab_height: f64,
    pub tab_depth: f64,
    /// Gap between the two halves
    pub half_separation: f64,
}

impl Default for SplitFanPlateBuilder {
    fn default() -> Self {
        Self {
            source: FanPlateBuilder::default().with_cable_routing(true),
            tab_width: 30.0,
            tab_height: 20.0,
            tab_depth: 20.0,
            half_separation: 40.0,
        }
    }
}

impl SplitFanPlateBuilder {
    pub fn new(source: FanPlateBuilder) -> Self {
        Self {
            source,
            ..Default::default()
        }
    }

    pub fn build(&self, kernel: &dyn CsgKernel) -> CoreResult<Model> {
        let full = self.source.build(kernel)?;
        let full_solid = full.build(kernel)?;
        let bounds = full.bounds(kernel)?;

        let size = bounds.size();
        let center = bounds.center();
        let half_width = size.x / 2.0 - self.half_separation / 2.0;
        if self.half_separation < 0.0 || half_width <= 0.0 {
            return Err(CoreError::Configuration(format!(
                "half separation {} does not fit plate width {}",
                self.half_separation, size.x
            )));
        }

        tracing::debug!(
            "Splitting plate at X={:.2} (half width {:.2})",
            center.x,
            half_width
        );

        let cut_size = DVec3::new(half_width, size.y * 2.0, size.z * 2.0);
        let cut_offset = self.half_separation / 2.0 + half_width / 2.0;
        let left_cut = kernel.create_box(
            DVec3::new(center.x - cut_offset, center.y, center.z),
            cut_size,
        )?;
        let right_cut = kernel.create_box(
            DVec3::new(center.x + cut_offset, center.y, center.z),
            cut_size,
        )?;

        let left_half = kernel.intersect(&full_solid, &left_cut)?;
        let right_half = kernel.intersect(&full_solid, &right_cut)?;

        let mut model = Model::new();
        let mut left = Layer::with_color(0.0, model.next_color());
        let mut right = Layer::with_color(0.0, model.next_color());
        left.add_shape(Shape::additive("Left Half", left_half));
        right.add_shape(Shape::additive("Right Half", right_half));

        self.add_tabs(kernel, &mut left, &mut right, center.x, bounds.min_z(), size.z)?;

        model.push_layer(left);
        model.push_layer(right);
        tracing::info!("Split fan plate built with {} tabs", TAB_POSITIONS.len());
        Ok(model)
    }

    /// Even tabs stick out of the left half, odd tabs out of the right half;
    /// the other half gets a deeper recess where the tab lands
    fn add_tabs(
        &self,
        kernel: &dyn CsgKernel,
        left: &mut Layer,
        right: &mut Layer,
        mid_x: f64,
        min_z: f64,
        height: f64,
    ) -> CoreResult<()> {
        let shift = self.half_separation / 2.0;
        let tab = DVec3::new(self.tab_width, self.tab_depth, self.tab_height);
        let recess = DVec3::new(self.tab_width, self.tab_depth * 2.0, self.tab_height);

        for (i, fraction) in TAB_POSITIONS.iter().enumerate() {
            let z = min_z + fraction * height;
            let n = i + 1;

            if i % 2 == 0 {
                left.add_cube(
                    kernel,
                    format!("Left Tab {n}"),
                    DVec3::new(mid_x + self.tab_width / 2.0 - shift, 0.0, z),
                    tab,
                    ShapeKind::Additive,
                    None,
                )?;
                right.add_cube(
                    kernel,
                    format!("Right Recess {n}"),
                    DVec3::new(mid_x + self.tab_width / 2.0 + shift, 0.0, z),
                    recess,
                    ShapeKind::Subtractive,
                    None,
                )?;
            } else {
                right.add_cube(
                    kernel,
                    format!("Right Tab {n}"),
                    DVec3::new(mid_x - self.tab_width / 2.0 + shift, 0.0, z),
                    tab,
                    ShapeKind::Additive,
                    None,
                )?;
                left.add_cube(
                    kernel,
                    format!("Left Recess {n}"),
                    DVec3::new(mid_x - self.tab_width / 2.0 - shift, 0.0, z),
                    recess,
                    ShapeKind::Subtractive,
                    None,
                )?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ek_cad::CsgrsKernel;

    #[test]
    fn test_split_produces_two_layers() {
        let kernel = CsgrsKernel::new();
        let model = SplitFanPlateBuilder::default().build(&kernel).unwrap();
        assert_eq!(model.layer_count(), 2);

        let left = model.layers()[0].compose(&kernel).unwrap();
        let right = model.layers()[1].compose(&kernel).unwrap();
        let left_max_x = left.vertices().map(|v| v.x).fold(f64::MIN, f64::max);
        let right_min_x = right.vertices().map(|v| v.x).fold(f64::MAX, f64::min);
        let left_min_x = left.vertices().map(|v| v.x).fold(f64::MAX, f64::min);

        // Halves end at the separation gap; tabs reach 10 past the split line
        assert_relative_eq!(left_min_x, -210.0, epsilon = 1e-9);
        assert_relative_eq!(left_max_x, 10.0, epsilon = 1e-9);
        assert_relative_eq!(right_min_x, -10.0, epsilon = 1e-9);

        let tabs = model.layers()[0]
            .additive_shapes()
            .filter(|s| s.name.starts_with("Left Tab"))
            .count();
        assert_eq!(tabs, 2);
        assert_ne!(model.layers()[0].display_color(), model.layers()[1].display_color());
    }

    #[test]
    fn test_separation_wider_than_plate_rejected() {
        let kernel = CsgrsKernel::new();
        let builder = SplitFanPlateBuilder {
            source: FanPlateBuilder {
                fan_slots: 0,
                ..Default::default()
            },
            half_separation: 500.0,
            ..Default::default()
        };
        assert!(matches!(
            builder.build(&kernel),
            Err(CoreError::Configuration(_))
        ));
    }
}
