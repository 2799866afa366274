//! Sample plates and blocks

use ek_cad::CsgKernel;
use glam::DVec3;

use crate::error::CoreResult;
use crate::layer::Layer;
use crate::model::Model;
use crate::shape::ShapeKind;

/// Centers of `count` equal slots spread evenly across `width` (centered on 0)
pub(crate) fn evenly_spaced(width: f64, slot_width: f64, count: usize) -> Vec<f64> {
    let gap = (width - count as f64 * slot_width) / (count + 1) as f64;
    (0..count)
        .map(|i| -width / 2.0 + gap * (i + 1) as f64 + slot_width * (i as f64 + 0.5))
        .collect()
}

/// 42 × 36 × 2 plate with three 12 × 12 through holes
pub fn plate_with_three_square_holes(kernel: &dyn CsgKernel) -> CoreResult<Model> {
    let mut model = Model::new();
    let mut base = Layer::with_color(0.0, model.next_color());

    base.add_cube(
        kernel,
        "Base Plate",
        DVec3::ZERO,
        DVec3::new(42.0, 36.0, 2.0),
        ShapeKind::Additive,
        None,
    )?;
    for (i, x) in evenly_spaced(42.0, 12.0, 3).into_iter().enumerate() {
        base.add_cube(
            kernel,
            format!("Hole {}", i + 1),
            DVec3::new(x, 0.0, 1.0),
            DVec3::new(12.0, 12.0, 4.0),
            ShapeKind::Subtractive,
            None,
        )?;
    }

    model.push_layer(base);
    Ok(model)
}

/// Three stacked layers: holed base, raised block with a bore, offset cube
pub fn layered_block(kernel: &dyn CsgKernel) -> CoreResult<Model> {
    let mut model = Model::new();

    let mut base = Layer::with_color(0.0, model.next_color());
    base.add_cube(
        kernel,
        "Base Plate",
        DVec3::new(0.0, 0.0, 2.0),
        DVec3::new(60.0, 40.0, 4.0),
        ShapeKind::Additive,
        None,
    )?;
    for (i, x) in evenly_spaced(60.0, 12.0, 3).into_iter().enumerate() {
        base.add_cube(
            kernel,
            format!("Hole {}", i + 1),
            DVec3::new(x, 0.0, 2.0),
            DVec3::new(12.0, 12.0, 6.0),
            ShapeKind::Subtractive,
            None,
        )?;
    }
    model.push_layer(base);

    let mut raised = Layer::with_color(8.0, model.next_color());
    raised.add_cube(
        kernel,
        "Raised Block",
        DVec3::new(0.0, 0.0, 6.0),
        DVec3::new(20.0, 20.0, 8.0),
        ShapeKind::Additive,
        None,
    )?;
    raised.add_cylinder(
        kernel,
        "Central Cylinder Hole",
        5.0,
        5.0,
        20.0,
        crate::constants::CYLINDER_SIDES,
        ShapeKind::Subtractive,
        None,
    )?;
    model.push_layer(raised);

    let mut side = Layer::with_color(16.0, model.next_color());
    side.add_cube(
        kernel,
        "Side Cube",
        DVec3::new(15.0, 10.0, 12.0),
        DVec3::new(10.0, 10.0, 5.0),
        ShapeKind::Additive,
        None,
    )?;
    model.push_layer(side);

    Ok(model)
}
