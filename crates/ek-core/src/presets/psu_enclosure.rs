//! Housing for a power supply with a control board behind it

use ek_cad::CsgKernel;
use glam::DVec3;

use crate::error::{CoreError, CoreResult};
use crate::layer::Layer;
use crate::model::Model;
use crate::shape::ShapeKind;

/// Open-ended box (X width, Y depth, Z height) hollowed by a through cavity,
/// with a partial front wall and two rail supports for the PSU
#[derive(Debug, Clone, PartialEq)]
pub struct PsuEnclosureBuilder {
    pub box_width: f64,
    pub box_depth: f64,
    pub box_height: f64,

    pub psu_width: f64,
    pub psu_depth: f64,
    pub psu_height: f64,

    pub pcb_width: f64,
    pub pcb_depth: f64,
    pub pcb_height: f64,

    /// Cavity size as a fraction of the outer box, in (0, 1)
    pub cavity_ratio: f64,
    /// Add the PSU and PCB volumes as separate layers for size checks
    pub reference_boxes: bool,
}

impl Default for PsuEnclosureBuilder {
    fn default() -> Self {
        Self {
            box_width: 120.0,
            box_depth: 210.0,
            box_height: 60.0,
            psu_width: 86.0,
            psu_depth: 197.0,
            psu_height: 32.0,
            pcb_width: 90.0,
            pcb_depth: 32.0,
            pcb_height: 47.0,
            cavity_ratio: 0.9,
            reference_boxes: false,
        }
    }
}

impl PsuEnclosureBuilder {
    const WALL_DEPTH: f64 = 10.0;
    /// Lift of the front wall and rails above the cavity floor, as a fraction
    const FLOOR_CLEARANCE: f64 = 0.05;

    fn validate(&self) -> CoreResult<()> {
        if !(self.cavity_ratio > 0.0 && self.cavity_ratio < 1.0) {
            return Err(CoreError::Configuration(format!(
                "cavity ratio must be in (0, 1), got {}",
                self.cavity_ratio
            )));
        }
        if self.box_height <= self.pcb_height {
            return Err(CoreError::Configuration(format!(
                "box height {} leaves no room for a front wall above a {} PCB",
                self.box_height, self.pcb_height
            )));
        }
        if self.cavity_width() <= self.psu_width {
            return Err(CoreError::Configuration(format!(
                "cavity width {:.2} is too narrow for a {} PSU",
                self.cavity_width(),
                self.psu_width
            )));
        }
        Ok(())
    }

    fn cavity_width(&self) -> f64 {
        self.box_width * self.cavity_ratio
    }

    fn cavity_height(&self) -> f64 {
        self.box_height * self.cavity_ratio
    }

    pub fn build(&self, kernel: &dyn CsgKernel) -> CoreResult<Model> {
        self.validate()?;
        let mut model = Model::new();

        let mut shell = Layer::with_color(0.0, model.next_color());
        self.add_outer_box(kernel, &mut shell)?;
        self.add_inner_cavity(kernel, &mut shell)?;
        tracing::debug!("Enclosure shell bounds: {}", shell.bounds(kernel)?);
        model.push_layer(shell);

        let mut supports = Layer::with_color(0.0, model.next_color());
        self.add_front_wall(kernel, &mut supports)?;
        let cavity_height = self.cavity_height();
        self.add_rail_supports(
            kernel,
            &mut supports,
            -cavity_height / 2.0 + Self::FLOOR_CLEARANCE * cavity_height,
        )?;
        model.push_layer(supports);

        if self.reference_boxes {
            let mut psu = Layer::with_color(0.0, model.next_color());
            psu.add_cube(
                kernel,
                "PSU Box",
                DVec3::new(0.0, -45.0, -self.box_height / 2.0 + self.psu_height / 2.0 + 5.0),
                DVec3::new(self.psu_width, self.psu_depth, self.psu_height),
                ShapeKind::Additive,
                None,
            )?;
            model.push_layer(psu);

            let mut pcb = Layer::with_color(0.0, model.next_color());
            pcb.add_cube(
                kernel,
                "PCB Box",
                DVec3::new(
                    0.0,
                    self.box_depth / 2.0 - 30.0,
                    -self.box_height / 2.0 + self.psu_height / 2.0 + 15.0,
                ),
                DVec3::new(self.pcb_width, self.pcb_depth, self.pcb_height),
                ShapeKind::Additive,
                None,
            )?;
            model.push_layer(pcb);
        }

        tracing::info!(
            "PSU enclosure built: {:.2} x {:.2} x {:.2}",
            self.box_width,
            self.box_depth,
            self.box_height
        );
        Ok(model)
    }

    fn add_outer_box(&self, kernel: &dyn CsgKernel, layer: &mut Layer) -> CoreResult<()> {
        layer.add_cube(
            kernel,
            "Outer Box",
            DVec3::ZERO,
            DVec3::new(self.box_width, self.box_depth, self.box_height),
            ShapeKind::Additive,
            None,
        )?;
        Ok(())
    }

    /// Runs past both ends so the housing is open front and back
    fn add_inner_cavity(&self, kernel: &dyn CsgKernel, layer: &mut Layer) -> CoreResult<()> {
        layer.add_cube(
            kernel,
            "Inner Cavity",
            DVec3::ZERO,
            DVec3::new(self.cavity_width(), self.box_depth * 1.1, self.cavity_height()),
            ShapeKind::Subtractive,
            None,
        )?;
        Ok(())
    }

    fn add_front_wall(&self, kernel: &dyn CsgKernel, layer: &mut Layer) -> CoreResult<()> {
        let wall_height = self.box_height - self.pcb_height;
        let z = -self.box_height / 2.0 + wall_height / 2.0 + self.box_height * Self::FLOOR_CLEARANCE;

        layer.add_cube(
            kernel,
            "Front Wall",
            DVec3::new(0.0, self.box_depth / 2.0 - Self::WALL_DEPTH / 2.0, z),
            DVec3::new(self.cavity_width(), Self::WALL_DEPTH, wall_height),
            ShapeKind::Additive,
            None,
        )?;
        Ok(())
    }

    fn add_rail_supports(&self, kernel: &dyn CsgKernel, layer: &mut Layer, rail_z: f64) -> CoreResult<()> {
        let w = self.cavity_width();
        let rail_depth = self.box_depth * 0.65;
        let depth_offset = (self.box_depth - rail_depth) / 2.0;
        let side = (w - self.psu_width) / 2.0;
        let size = DVec3::new(side, rail_depth, side);

        let left_x = -self.box_width / 2.0 + (self.box_width - w);
        layer.add_cube(
            kernel,
            "Left Corner Fill",
            DVec3::new(left_x - 3.0, -depth_offset, rail_z),
            size,
            ShapeKind::Additive,
            None,
        )?;

        let right_x = self.box_width / 2.0 - (self.box_width - w);
        layer.add_cube(
            kernel,
            "Right Corner Fill",
            DVec3::new(right_x + 3.0, -depth_offset, rail_z),
            size,
            ShapeKind::Additive,
            None,
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ek_cad::CsgrsKernel;

    #[test]
    fn test_default_enclosure() {
        let kernel = CsgrsKernel::new();
        let model = PsuEnclosureBuilder::default().build(&kernel).unwrap();
        assert_eq!(model.layer_count(), 2);

        let bounds = model.bounds(&kernel).unwrap();
        assert_relative_eq!(bounds.min_x(), -60.0);
        assert_relative_eq!(bounds.max_x(), 60.0);
        assert_relative_eq!(bounds.min_y(), -105.0);
        assert_relative_eq!(bounds.max_z(), 30.0);

        let supports = &model.layers()[1];
        assert_eq!(supports.shapes().len(), 3);
    }

    #[test]
    fn test_reference_boxes_add_layers() {
        let kernel = CsgrsKernel::new();
        let builder = PsuEnclosureBuilder {
            reference_boxes: true,
            ..Default::default()
        };
        let model = builder.build(&kernel).unwrap();
        assert_eq!(model.layer_count(), 4);
        assert_eq!(model.layers()[2].shapes()[0].name, "PSU Box");
    }

    #[test]
    fn test_invalid_cavity_ratio() {
        let kernel = CsgrsKernel::new();
        for ratio in [0.0, 1.0, 1.5] {
            let builder = PsuEnclosureBuilder {
                cavity_ratio: ratio,
                ..Default::default()
            };
            assert!(matches!(
                builder.build(&kernel),
                Err(CoreError::Configuration(_))
            ));
        }
    }

    #[test]
    fn test_psu_wider_than_cavity() {
        let kernel = CsgrsKernel::new();
        let builder = PsuEnclosureBuilder {
            psu_width: 110.0,
            ..Default::default()
        };
        assert!(matches!(
            builder.build(&kernel),
            Err(CoreError::Configuration(_))
        ));
    }
}
