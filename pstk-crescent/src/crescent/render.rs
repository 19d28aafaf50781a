use anyhow::{Context, Result, ensure};
use geo::BooleanOps;
use geo_types::{MultiPolygon, Polygon};
use log::debug;

use crate::pstk::placement::shape_to_placed_polygon;
use crate::pstk::{PstkInstance, PstkShape, ShapeKind};
use crate::util::CrescentConfig;

/// Copper left of `shape` after cutting `hole` out of it, both placed by `instance`.
///
/// Stateless: the result is computed from scratch on every call and may be empty
/// (hole covering the shape, or a shape without area).
pub fn render_crescent(
    instance: &PstkInstance,
    shape: &PstkShape,
    hole: &PstkShape,
    config: &CrescentConfig,
) -> Result<MultiPolygon<f64>> {
    ensure!(
        shape.kind() != ShapeKind::HoleShadow,
        "a hole shadow has no copper to render"
    );

    let Some(shape_outline) =
        shape_to_placed_polygon(instance, shape, config).context("placing shape")?
    else {
        return Ok(MultiPolygon::new(vec![]));
    };
    let shape_poly = Polygon::from(&shape_outline);

    let result = match shape_to_placed_polygon(instance, hole, config).context("placing hole")? {
        Some(hole_outline) => shape_poly.difference(&Polygon::from(&hole_outline)),
        None => MultiPolygon::new(vec![shape_poly]),
    };

    debug!(
        "[CR] rendered {:?} against {:?} hole: {} polygon(s)",
        shape.kind(),
        hole.kind(),
        result.0.len()
    );
    Ok(result)
}
