//! Parametric sample models

mod fan_plate;
mod plates;
mod psu_enclosure;
mod split_fan_plate;

use ek_cad::CsgKernel;
use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::model::Model;

pub use fan_plate::FanPlateBuilder;
pub use plates::{layered_block, plate_with_three_square_holes};
pub use psu_enclosure::PsuEnclosureBuilder;
pub use split_fan_plate::SplitFanPlateBuilder;

/// Selectable sample model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ModelVariant {
    PlateWithHoles,
    LayeredBlock,
    FanPlate,
    SplitFanPlate,
    #[default]
    PsuHousing,
}

impl ModelVariant {
    pub fn name(&self) -> &'static str {
        match self {
            ModelVariant::PlateWithHoles => "Plate With Three Square Holes",
            ModelVariant::LayeredBlock => "Complex Layered Block",
            ModelVariant::FanPlate => "Fan Plate",
            ModelVariant::SplitFanPlate => "Split Fan Plate",
            ModelVariant::PsuHousing => "PSU Housing",
        }
    }

    pub const ALL: &'static [ModelVariant] = &[
        ModelVariant::PlateWithHoles,
        ModelVariant::LayeredBlock,
        ModelVariant::FanPlate,
        ModelVariant::SplitFanPlate,
        ModelVariant::PsuHousing,
    ];

    /// Build the model for this variant with default parameters
    pub fn build(&self, kernel: &dyn CsgKernel) -> CoreResult<Model> {
        tracing::debug!("Building sample model: {}", self.name());
        match self {
            ModelVariant::PlateWithHoles => plate_with_three_square_holes(kernel),
            ModelVariant::LayeredBlock => layered_block(kernel),
            ModelVariant::FanPlate => FanPlateBuilder::default()
                .with_cable_routing(true)
                .build(kernel),
            ModelVariant::SplitFanPlate => SplitFanPlateBuilder::default().build(kernel),
            ModelVariant::PsuHousing => PsuEnclosureBuilder::default().build(kernel),
        }
    }
}

impl std::fmt::Display for ModelVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
