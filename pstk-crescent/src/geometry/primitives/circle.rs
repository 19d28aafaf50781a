use crate::geometry::Transformation;
use crate::geometry::geo_enums::RelationState;
use crate::geometry::geo_traits::{CollidesWith, DistanceTo, Transformable};
use crate::geometry::primitives::Edge;
use crate::geometry::primitives::Point;

/// Geometric primitive representing a circle
#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Self {
        debug_assert!(
            radius.is_finite() && radius >= 0.0,
            "invalid circle radius: {radius}"
        );
        debug_assert!(
            center.0.is_finite() && center.1.is_finite(),
            "invalid circle center: {center:?}"
        );

        Self { center, radius }
    }

    /// Relation of `self` (the shape) to `hole`.
    /// Touching circles (tangent from the outside) are [`RelationState::Disjoint`],
    /// touching from the inside counts as nested.
    pub fn relation_to(&self, hole: &Circle) -> RelationState {
        let (sr, hr) = (self.radius, hole.radius);

        if self.center == hole.center {
            //common case: concentric
            return match hr >= sr {
                true => RelationState::ShapeInHole,
                false => RelationState::HoleInShape,
            };
        }
        if hr < sr {
            //swap them so the hole is the bigger one
            return hole.relation_to(self).invert();
        }

        //everything relative to the hole's center
        let sq_d = self.center.sq_distance_to(&hole.center);

        let rd_min = hr - sr;
        if sq_d <= rd_min * rd_min {
            return RelationState::ShapeInHole;
        }
        let rd_max = hr + sr;
        if sq_d >= rd_max * rd_max {
            return RelationState::Disjoint;
        }
        RelationState::Crossing
    }

    /// Whether `point` is inside the circle, points on the perimeter are not.
    pub fn contains_strict(&self, point: &Point) -> bool {
        point.sq_distance_to(&self.center) < self.radius * self.radius
    }

    /// Whether the perimeter crosses the edge: one endpoint strictly inside and the other not,
    /// or both outside while the middle of the edge comes strictly closer than the radius.
    /// An edge completely inside the circle does not cross it.
    pub fn crosses_edge(&self, edge: &Edge) -> bool {
        let in_start = self.contains_strict(&edge.start);
        let in_end = self.contains_strict(&edge.end);

        match (in_start, in_end) {
            (true, true) => false,
            (true, false) | (false, true) => true,
            (false, false) => edge.sq_distance_to(&self.center) < self.radius * self.radius,
        }
    }

    /// Points where the perimeter properly intersects the edge (tangent contact excluded)
    pub fn edge_intersections(&self, edge: &Edge) -> impl Iterator<Item = Point> {
        let Point(cx, cy) = self.center;
        let start = edge.start;
        let (dx, dy) = (edge.end.0 - edge.start.0, edge.end.1 - edge.start.1);
        let (fx, fy) = (edge.start.0 - cx, edge.start.1 - cy);

        let a = dx * dx + dy * dy;
        let b = 2.0 * (fx * dx + fy * dy);
        let c = fx * fx + fy * fy - self.radius * self.radius;
        let discriminant = b * b - 4.0 * a * c;

        let params = match a == 0.0 || discriminant <= 0.0 {
            true => [None, None],
            false => {
                let sqrt_disc = discriminant.sqrt();
                [
                    Some((-b - sqrt_disc) / (2.0 * a)),
                    Some((-b + sqrt_disc) / (2.0 * a)),
                ]
            }
        };

        params
            .into_iter()
            .flatten()
            .filter(|t| (0.0..=1.0).contains(t))
            .map(move |t| Point(start.0 + t * dx, start.1 + t * dy))
    }

    /// Points where the two perimeters properly intersect (tangency and coincidence excluded)
    pub fn circle_intersections(&self, other: &Circle) -> impl Iterator<Item = Point> {
        let (r1, r2) = (self.radius, other.radius);
        let d = self.center.distance_to(&other.center);

        let points = match d == 0.0 || d >= r1 + r2 || d <= (r1 - r2).abs() {
            true => [None, None],
            false => {
                //distance from self's center to the chord through both intersections
                let a = (r1 * r1 - r2 * r2 + d * d) / (2.0 * d);
                let h = f64::max(r1 * r1 - a * a, 0.0).sqrt();
                let (ux, uy) = (
                    (other.center.0 - self.center.0) / d,
                    (other.center.1 - self.center.1) / d,
                );
                let chord_mid = self.center.offset((ux, uy), a);
                [
                    Some(chord_mid.offset((-uy, ux), h)),
                    Some(chord_mid.offset((uy, -ux), h)),
                ]
            }
        };

        points.into_iter().flatten()
    }
}

impl Transformable for Circle {
    fn transform(&mut self, t: &Transformation) -> &mut Self {
        let Circle { center, radius: _ } = self;
        center.transform(t);
        self
    }
}

impl CollidesWith<Point> for Circle {
    fn collides_with(&self, point: &Point) -> bool {
        point.sq_distance_to(&self.center) <= self.radius.powi(2)
    }
}

impl DistanceTo<Point> for Circle {
    fn distance_to(&self, point: &Point) -> f64 {
        let sq_d = point.sq_distance_to(&self.center);
        match sq_d < self.radius.powi(2) {
            true => 0.0, //point is inside circle
            false => f64::sqrt(sq_d) - self.radius,
        }
    }

    fn sq_distance_to(&self, point: &Point) -> f64 {
        self.distance_to(point).powi(2)
    }
}
