use std::f64::consts::PI;

use anyhow::{Context, Result, bail};

use crate::geometry::Transformation;
use crate::geometry::geo_enums::CapEnd;
use crate::geometry::geo_traits::Transformable;
use crate::geometry::primitives::{Capsule, Circle, Point, SPolygon};
use crate::pstk::{PolyShape, PstkInstance, PstkShape};
use crate::util::CrescentConfig;

/// Outline of `shape` placed by `instance`.
/// Circles and round caps are approximated by `config.arc_segments` segments per full turn.
/// Shapes without area yield `None`.
/// A hole shadow's snapshot is already placed and is returned as is.
pub fn shape_to_placed_polygon(
    instance: &PstkInstance,
    shape: &PstkShape,
    config: &CrescentConfig,
) -> Result<Option<SPolygon>> {
    config.validate()?;
    let local = match shape {
        PstkShape::Circle(c) => circle_outline(&c.to_circle(), config)?,
        PstkShape::Line(l) => capsule_outline(&l.to_capsule(), config)?,
        PstkShape::Polygon(p) => Some(poly_outline(p)?),
        PstkShape::HoleShadow(Some(snapshot)) => return Ok(Some(snapshot.clone())),
        PstkShape::HoleShadow(None) => bail!("hole shadow without a placed outline snapshot"),
    };

    let local = match local {
        Some(local) => local,
        None => return Ok(None),
    };

    let t = Transformation::from(&instance.placement);
    Ok(Some(local.transform_clone(&t)))
}

fn poly_outline(poly: &PolyShape) -> Result<SPolygon> {
    match poly.contour() {
        Some(contour) => Ok(contour.clone()),
        None => {
            let vertices = poly
                .points
                .iter()
                .map(|&(x, y)| Point(x as f64, y as f64))
                .collect();
            SPolygon::new(vertices)
        }
    }
}

/// Points on the arc of `circle` from angle `from` over `sweep` radians, both ends included
fn arc_points(circle: &Circle, from: f64, sweep: f64, n_segments: usize) -> impl Iterator<Item = Point> {
    let Circle { center, radius } = circle.clone();
    (0..=n_segments).map(move |i| {
        let angle = from + sweep * (i as f64 / n_segments as f64);
        Point(center.0 + radius * angle.cos(), center.1 + radius * angle.sin())
    })
}

fn circle_outline(circle: &Circle, config: &CrescentConfig) -> Result<Option<SPolygon>> {
    if circle.radius == 0.0 {
        return Ok(None);
    }
    let n = config.arc_segments;
    //the last point coincides with the first one
    let vertices = arc_points(circle, 0.0, 2.0 * PI, n).take(n).collect();
    let outline = SPolygon::new(vertices).with_context(|| {
        format!("approximating circle of radius {} at {:?}", circle.radius, circle.center)
    })?;
    Ok(Some(outline))
}

fn capsule_outline(capsule: &Capsule, config: &CrescentConfig) -> Result<Option<SPolygon>> {
    if capsule.radius == 0.0 {
        return Ok(None);
    }
    if let Some(disc) = capsule.point_like() {
        return circle_outline(&disc, config);
    }

    let vertices = match capsule.square {
        true => capsule.body().to_vec(),
        false => {
            let half_turn = usize::max(config.arc_segments / 2, 1);
            let (tx, ty) = capsule.axis().tangent;
            let heading = ty.atan2(tx);
            let cap = |end: CapEnd, from: f64| {
                let circle = Circle::new(capsule.end_point(end), capsule.radius);
                arc_points(&circle, from, PI, half_turn).collect::<Vec<_>>()
            };
            let mut vertices = cap(CapEnd::End, heading - PI / 2.0);
            vertices.extend(cap(CapEnd::Start, heading + PI / 2.0));
            vertices
        }
    };
    let outline = SPolygon::new(vertices)
        .with_context(|| format!("approximating capsule along {:?}", capsule.centerline))?;
    Ok(Some(outline))
}
