use log::trace;

use crate::geometry::geo_enums::{CapEnd, GeoPosition, RelationState};
use crate::geometry::geo_traits::{CollidesWith, DistanceTo, Outline};
use crate::geometry::primitives::{Capsule, CapsuleCaps, Circle, Edge, SPolygon};

/// Borrowed view on the geometry of a shape or hole, in the prototype's frame
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry<'a> {
    Circle(Circle),
    Capsule(Capsule),
    Polygon(&'a SPolygon),
}

/// Relation of `shape` to `hole`, for any combination of geometry kinds
pub fn relate(shape: &Geometry, hole: &Geometry) -> RelationState {
    use Geometry as G;
    match (shape, hole) {
        (G::Circle(s), G::Circle(h)) => circle_circle(s, h),
        (G::Circle(s), G::Capsule(h)) => circle_capsule(s, h),
        (G::Circle(s), G::Polygon(h)) => circle_polygon(s, h),
        (G::Capsule(s), G::Circle(h)) => swapped(circle_capsule, s, h),
        (G::Capsule(s), G::Capsule(h)) => capsule_capsule(s, h),
        (G::Capsule(s), G::Polygon(h)) => capsule_polygon(s, h),
        (G::Polygon(s), G::Circle(h)) => swapped(circle_polygon, *s, h),
        (G::Polygon(s), G::Capsule(h)) => swapped(capsule_polygon, *s, h),
        (G::Polygon(s), G::Polygon(h)) => polygon_polygon(s, h),
    }
}

/// Evaluates a relation with the roles of shape and hole exchanged
fn swapped<A, B>(f: fn(&A, &B) -> RelationState, shape: &B, hole: &A) -> RelationState {
    f(hole, shape).invert()
}

pub fn circle_circle(shape: &Circle, hole: &Circle) -> RelationState {
    shape.relation_to(hole)
}

pub fn circle_capsule(shape: &Circle, hole: &Capsule) -> RelationState {
    if let Some(disc) = hole.point_like() {
        return circle_circle(shape, &disc);
    }

    let (cr, hr) = (shape.radius, hole.radius);
    let center = shape.center;

    let rel = match cr <= hr {
        true => match hole.square {
            false => {
                let sq_d = hole.centerline.sq_distance_to(&center);
                if sq_d >= (hr + cr).powi(2) {
                    RelationState::Disjoint
                } else if sq_d <= (hr - cr).powi(2) {
                    RelationState::ShapeInHole
                } else {
                    RelationState::Crossing
                }
            }
            true => {
                if hole.contains_circle(shape) {
                    return RelationState::ShapeInHole;
                }
                let offs = hole.centerline.projection_param(&center);
                match (0.0..=1.0).contains(&offs) {
                    true => {
                        //alongside the body, only the side lines can be reached
                        let (_, v) = hole.local_coords(&center);
                        match v.powi(2) >= (hr + cr).powi(2) {
                            true => RelationState::Disjoint,
                            false => RelationState::Crossing,
                        }
                    }
                    false => {
                        let end = match offs < 0.0 {
                            true => CapEnd::Start,
                            false => CapEnd::End,
                        };
                        let crosses_cap = shape.crosses_edge(&hole.square_cap_line(end));
                        let crosses_side = hole
                            .side_lines()
                            .iter()
                            .any(|side| shape.crosses_edge(side));
                        match crosses_cap || crosses_side {
                            true => RelationState::Crossing,
                            false => RelationState::Disjoint,
                        }
                    }
                }
            }
        },
        false => {
            let start_in = shape.contains_strict(&hole.true_end(CapEnd::Start));
            let end_in = shape.contains_strict(&hole.true_end(CapEnd::End));
            if start_in != end_in {
                return RelationState::Crossing;
            }
            let caps_cross = match hole.caps() {
                CapsuleCaps::Square(lines) => lines.iter().any(|l| shape.crosses_edge(l)),
                CapsuleCaps::Round(arcs) => arcs
                    .iter()
                    .any(|arc| arc.circle.relation_to(shape) == RelationState::Crossing),
            };
            if caps_cross {
                RelationState::Crossing
            } else if start_in {
                RelationState::HoleInShape
            } else if hole.sq_distance_to(&center) < cr.powi(2) {
                //the circle clips the body between the caps
                RelationState::Crossing
            } else {
                RelationState::Disjoint
            }
        }
    };
    trace!("[REL] circle r={cr} vs capsule r={hr}: {rel:?}");
    rel
}

pub fn capsule_capsule(shape: &Capsule, hole: &Capsule) -> RelationState {
    match (shape.point_like(), hole.point_like()) {
        (Some(s), Some(h)) => return circle_circle(&s, &h),
        (Some(s), None) => return circle_capsule(&s, hole),
        (None, Some(h)) => return swapped(circle_capsule, shape, &h),
        (None, None) => {}
    }

    let s_sides = shape.side_lines();
    let h_sides = hole.side_lines();
    let s_caps = shape.caps();
    let h_caps = hole.caps();

    let sides_cross = s_sides
        .iter()
        .any(|s| h_sides.iter().any(|h| s.crosses(h)));
    if sides_cross {
        trace!("[REL] capsule sides cross");
        return RelationState::Crossing;
    }

    let caps_cross_sides = h_sides.iter().any(|side| caps_cross_edge(&s_caps, side))
        || s_sides.iter().any(|side| caps_cross_edge(&h_caps, side));
    if caps_cross_sides {
        trace!("[REL] capsule cap crosses a side");
        return RelationState::Crossing;
    }

    if caps_cross(&s_caps, &h_caps) {
        trace!("[REL] capsule caps cross");
        return RelationState::Crossing;
    }

    relate_outlines(shape, hole)
}

/// Relation of two shapes whose outlines do not properly cross: nested, apart,
/// or overlapping while the outlines only meet at corners or along a shared stretch.
/// Every outline sample is located against the other shape; samples on the other
/// outline count for neither side. Identical shapes end up as ShapeInHole.
fn relate_outlines(shape: &impl Outline, hole: &impl Outline) -> RelationState {
    let (s_in, s_out) = locate_samples(shape, hole);
    let (h_in, h_out) = locate_samples(hole, shape);
    if (s_in && s_out) || (h_in && h_out) {
        trace!("[REL] outlines overlap without crossing");
        RelationState::Crossing
    } else if !s_out {
        RelationState::ShapeInHole
    } else if !h_out {
        RelationState::HoleInShape
    } else {
        RelationState::Disjoint
    }
}

/// Whether any outline sample of `a` lies strictly inside `b`, and whether any lies strictly outside
fn locate_samples(a: &impl Outline, b: &impl Outline) -> (bool, bool) {
    a.outline_samples()
        .iter()
        .map(|p| b.position_of(p))
        .fold((false, false), |(any_in, any_out), pos| {
            (
                any_in || pos == GeoPosition::Interior,
                any_out || pos == GeoPosition::Exterior,
            )
        })
}

fn caps_cross_edge(caps: &CapsuleCaps, edge: &Edge) -> bool {
    match caps {
        CapsuleCaps::Round(arcs) => arcs.iter().any(|arc| arc.crosses_edge(edge)),
        CapsuleCaps::Square(lines) => lines.iter().any(|line| line.crosses(edge)),
    }
}

fn caps_cross(a: &CapsuleCaps, b: &CapsuleCaps) -> bool {
    match (a, b) {
        (CapsuleCaps::Round(a_arcs), CapsuleCaps::Round(b_arcs)) => a_arcs
            .iter()
            .any(|a| b_arcs.iter().any(|b| a.crosses_arc(b))),
        (CapsuleCaps::Square(lines), CapsuleCaps::Round(arcs))
        | (CapsuleCaps::Round(arcs), CapsuleCaps::Square(lines)) => arcs
            .iter()
            .any(|arc| lines.iter().any(|line| arc.crosses_edge(line))),
        (CapsuleCaps::Square(a_lines), CapsuleCaps::Square(b_lines)) => a_lines
            .iter()
            .any(|a| b_lines.iter().any(|b| a.crosses(b))),
    }
}

pub fn circle_polygon(shape: &Circle, hole: &SPolygon) -> RelationState {
    if hole.edge_iter().any(|edge| shape.crosses_edge(&edge)) {
        trace!("[REL] polygon edge crosses circle");
        return RelationState::Crossing;
    }
    if shape.contains_strict(&hole.vertex(0)) {
        RelationState::HoleInShape
    } else if hole.collides_with(&shape.center) {
        RelationState::ShapeInHole
    } else {
        RelationState::Disjoint
    }
}

pub fn capsule_polygon(shape: &Capsule, hole: &SPolygon) -> RelationState {
    if let Some(disc) = shape.point_like() {
        return circle_polygon(&disc, hole);
    }
    if hole.edge_iter().any(|edge| shape.outline_crossed_by(&edge)) {
        trace!("[REL] polygon edge crosses capsule");
        return RelationState::Crossing;
    }
    relate_outlines(shape, hole)
}

pub fn polygon_polygon(shape: &SPolygon, hole: &SPolygon) -> RelationState {
    if !shape.bbox.collides_with(&hole.bbox) {
        return RelationState::Disjoint;
    }
    let edges_cross = shape
        .edge_iter()
        .any(|s| hole.edge_iter().any(|h| s.crosses(&h)));
    if edges_cross {
        trace!("[REL] polygon edges cross");
        return RelationState::Crossing;
    }
    relate_outlines(shape, hole)
}
