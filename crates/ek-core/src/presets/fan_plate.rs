//! Fan mounting plate with evenly spaced slots

use ek_cad::CsgKernel;
use glam::DVec3;

use crate::error::{CoreError, CoreResult};
use crate::layer::Layer;
use crate::model::Model;
use crate::shape::ShapeKind;

use super::plates::evenly_spaced;

/// Upright plate (X width, Y depth, Z height) with rectangular fan cut-outs
/// and an optional cable routing slot near the bottom
#[derive(Debug, Clone, PartialEq)]
pub struct FanPlateBuilder {
    pub plate_width: f64,
    pub plate_depth: f64,
    pub plate_height: f64,

    pub fan_slots: usize,
    pub fan_width: f64,
    pub fan_depth: f64,
    pub fan_height: f64,
    pub fan_z_offset: f64,

    pub cable_routing: bool,
    pub cable_width: f64,
    pub cable_depth: f64,
    pub cable_height: f64,
    pub cable_z_offset: f64,
}

impl Default for FanPlateBuilder {
    fn default() -> Self {
        Self {
            plate_width: 420.0,
            plate_depth: 25.0,
            plate_height: 360.0,
            fan_slots: 3,
            fan_width: 120.0,
            fan_depth: 40.0,
            fan_height: 120.0,
            fan_z_offset: 0.0,
            cable_routing: false,
            cable_width: 300.0,
            cable_depth: 40.0,
            cable_height: 30.0,
            cable_z_offset: 0.0,
        }
    }
}

impl FanPlateBuilder {
    /// Clearance between the plate bottom and the cable slot
    const CABLE_CLEARANCE: f64 = 40.0;

    pub fn with_cable_routing(mut self, enabled: bool) -> Self {
        self.cable_routing = enabled;
        self
    }

    pub fn build(&self, kernel: &dyn CsgKernel) -> CoreResult<Model> {
        let mut model = Model::new();
        let mut layer = Layer::with_color(0.0, model.next_color());

        self.add_base_plate(kernel, &mut layer)?;
        self.add_fan_slots(kernel, &mut layer)?;
        self.add_cable_routing_hole(kernel, &mut layer)?;

        tracing::debug!("Fan plate bounds: {}", layer.bounds(kernel)?);
        tracing::info!(
            "Fan plate built: {:.2} x {:.2} x {:.2} with {} slots",
            self.plate_width,
            self.plate_depth,
            self.plate_height,
            self.fan_slots
        );

        model.push_layer(layer);
        Ok(model)
    }

    fn add_base_plate(&self, kernel: &dyn CsgKernel, layer: &mut Layer) -> CoreResult<()> {
        layer.add_cube(
            kernel,
            "Base Plate",
            DVec3::ZERO,
            DVec3::new(self.plate_width, self.plate_depth, self.plate_height),
            ShapeKind::Additive,
            None,
        )?;
        Ok(())
    }

    fn add_fan_slots(&self, kernel: &dyn CsgKernel, layer: &mut Layer) -> CoreResult<()> {
        if self.fan_slots == 0 {
            tracing::debug!("No fan slots to add");
            return Ok(());
        }
        if self.plate_width < self.fan_slots as f64 * self.fan_width {
            return Err(CoreError::Configuration(format!(
                "{} fan slots of width {} exceed plate width {}",
                self.fan_slots, self.fan_width, self.plate_width
            )));
        }

        let xs = evenly_spaced(self.plate_width, self.fan_width, self.fan_slots);
        for (i, x) in xs.into_iter().enumerate() {
            layer.add_cube(
                kernel,
                format!("Fan Slot {}", i + 1),
                DVec3::new(x, 0.0, self.fan_z_offset),
                DVec3::new(self.fan_width, self.fan_depth, self.fan_height),
                ShapeKind::Subtractive,
                None,
            )?;
        }
        Ok(())
    }

    fn add_cable_routing_hole(&self, kernel: &dyn CsgKernel, layer: &mut Layer) -> CoreResult<()> {
        if !self.cable_routing {
            tracing::debug!("Cable routing not enabled");
            return Ok(());
        }

        let bounds = layer.bounds(kernel)?;
        let center = bounds.center();
        let z = bounds.min_z() + self.cable_height / 2.0 + self.cable_z_offset + Self::CABLE_CLEARANCE;

        layer.add_cube(
            kernel,
            "Cable Routing Hole",
            DVec3::new(center.x, center.y, z),
            DVec3::new(self.cable_width, self.cable_depth, self.cable_height),
            ShapeKind::Subtractive,
            None,
        )?;
        Ok(())
    }
}
