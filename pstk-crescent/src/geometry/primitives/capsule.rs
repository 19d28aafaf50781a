use crate::geometry::Transformation;
use crate::geometry::geo_enums::{CapEnd, GeoPosition};
use crate::geometry::geo_traits::{CollidesWith, DistanceTo, Outline, Transformable};
use crate::geometry::primitives::quadrangle::point_in_quadrangle;
use crate::geometry::primitives::{Circle, Edge, Point};

/// Obround ("line shape"): a centerline swept by a disc of `radius`, with round or square (flat) end caps.
/// Square caps extend the body by `radius` beyond both ends of the centerline.
#[derive(Clone, Debug, PartialEq)]
pub struct Capsule {
    pub centerline: Edge,
    /// Half of the thickness
    pub radius: f64,
    pub square: bool,
}

/// Unit tangent, unit normal and length of a capsule's centerline.
/// A zero-length centerline yields a null tangent and normal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CapsuleAxis {
    pub tangent: (f64, f64),
    pub normal: (f64, f64),
    pub length: f64,
}

impl CapsuleAxis {
    pub fn is_degenerate(&self) -> bool {
        self.length == 0.0
    }
}

/// Round end cap of a capsule. Only the outward half of the circle is part of the outline,
/// the inward half lies inside the capsule's body.
#[derive(Clone, Debug, PartialEq)]
pub struct CapArc {
    pub circle: Circle,
    /// Body quadrangle of the owning capsule
    pub body: [Point; 4],
}

impl CapArc {
    /// Whether a point of the cap circle belongs to the visible (outward) half
    pub fn is_visible(&self, point: &Point) -> bool {
        !point_in_quadrangle(&self.body, point)
    }

    /// Whether the visible half of the cap properly crosses `edge`
    pub fn crosses_edge(&self, edge: &Edge) -> bool {
        self.circle
            .edge_intersections(edge)
            .any(|p| self.is_visible(&p))
    }

    /// Whether the visible halves of two caps cross each other
    pub fn crosses_arc(&self, other: &CapArc) -> bool {
        self.circle
            .circle_intersections(&other.circle)
            .any(|p| self.is_visible(&p) && other.is_visible(&p))
    }
}

/// The end caps of a capsule's outline
#[derive(Clone, Debug, PartialEq)]
pub enum CapsuleCaps {
    Round([CapArc; 2]),
    /// The two end-cap lines
    Square([Edge; 2]),
}

impl Capsule {
    pub fn new(centerline: Edge, radius: f64, square: bool) -> Self {
        debug_assert!(
            radius.is_finite() && radius >= 0.0,
            "invalid capsule radius: {radius}"
        );
        Self {
            centerline,
            radius,
            square,
        }
    }

    pub fn axis(&self) -> CapsuleAxis {
        let Edge { start, end } = self.centerline;
        let (dx, dy) = (end.0 - start.0, end.1 - start.1);
        let sq_len = dx * dx + dy * dy;
        match sq_len == 0.0 {
            true => CapsuleAxis {
                tangent: (0.0, 0.0),
                normal: (0.0, 0.0),
                length: 0.0,
            },
            false => {
                let len = sq_len.sqrt();
                CapsuleAxis {
                    tangent: (dx / len, dy / len),
                    normal: (-dy / len, dx / len),
                    length: len,
                }
            }
        }
    }

    /// The disc a zero-length capsule degrades to, `None` for a proper capsule
    pub fn point_like(&self) -> Option<Circle> {
        match self.axis().is_degenerate() {
            true => Some(Circle::new(self.centerline.start, self.radius)),
            false => None,
        }
    }

    pub fn end_point(&self, end: CapEnd) -> Point {
        match end {
            CapEnd::Start => self.centerline.start,
            CapEnd::End => self.centerline.end,
        }
    }

    /// Outermost point of the capsule at `end`: the centerline end pushed outward by the radius
    pub fn true_end(&self, end: CapEnd) -> Point {
        let (tx, ty) = self.axis().tangent;
        match end {
            CapEnd::Start => self.centerline.start.offset((-tx, -ty), self.radius),
            CapEnd::End => self.centerline.end.offset((tx, ty), self.radius),
        }
    }

    /// Ends of the straight part of the outline: the true ends for square caps, the centerline ends for round ones
    fn body_ends(&self) -> (Point, Point) {
        match self.square {
            true => (self.true_end(CapEnd::Start), self.true_end(CapEnd::End)),
            false => (self.centerline.start, self.centerline.end),
        }
    }

    /// The two straight sides of the outline, offset by the radius on either side of the centerline
    pub fn side_lines(&self) -> [Edge; 2] {
        let n = self.axis().normal;
        let r = self.radius;
        let (s, e) = self.body_ends();
        [
            Edge::new(s.offset(n, r), e.offset(n, r)),
            Edge::new(s.offset(n, -r), e.offset(n, -r)),
        ]
    }

    /// The flat end line of a square cap, perpendicular to the centerline through the true end
    pub fn square_cap_line(&self, end: CapEnd) -> Edge {
        let n = self.axis().normal;
        let r = self.radius;
        let c = self.true_end(end);
        Edge::new(c.offset(n, r), c.offset(n, -r))
    }

    /// Quadrangle spanned by the side lines; includes the caps when they are square
    pub fn body(&self) -> [Point; 4] {
        let n = self.axis().normal;
        let r = self.radius;
        let (s, e) = self.body_ends();
        [s.offset(n, r), e.offset(n, r), e.offset(n, -r), s.offset(n, -r)]
    }

    pub fn caps(&self) -> CapsuleCaps {
        match self.square {
            true => CapsuleCaps::Square([
                self.square_cap_line(CapEnd::Start),
                self.square_cap_line(CapEnd::End),
            ]),
            false => {
                let body = self.body();
                let cap = |end| CapArc {
                    circle: Circle::new(self.end_point(end), self.radius),
                    body,
                };
                CapsuleCaps::Round([cap(CapEnd::Start), cap(CapEnd::End)])
            }
        }
    }

    /// Coordinates of `point` in the capsule's frame: along the tangent from the start, and along the normal
    pub fn local_coords(&self, point: &Point) -> (f64, f64) {
        let CapsuleAxis {
            tangent: (tx, ty),
            normal: (nx, ny),
            ..
        } = self.axis();
        let (dx, dy) = (
            point.0 - self.centerline.start.0,
            point.1 - self.centerline.start.1,
        );
        (dx * tx + dy * ty, dx * nx + dy * ny)
    }

    /// Whether `point` lies in the interior of the capsule, points on the outline are not
    pub fn contains_strict(&self, point: &Point) -> bool {
        let r = self.radius;
        match self.square {
            true => {
                let (u, v) = self.local_coords(point);
                let len = self.axis().length;
                u > -r && u < len + r && v.abs() < r
            }
            false => self.centerline.sq_distance_to(point) < r.powi(2),
        }
    }

    /// Whether `circle` lies completely within the capsule (touching the outline from the inside included)
    pub fn contains_circle(&self, circle: &Circle) -> bool {
        let (r, cr) = (self.radius, circle.radius);
        if cr > r {
            return false;
        }
        match self.square {
            true => {
                let (u, v) = self.local_coords(&circle.center);
                let len = self.axis().length;
                u - cr >= -r && u + cr <= len + r && v.abs() + cr <= r
            }
            false => self.centerline.sq_distance_to(&circle.center) <= (r - cr).powi(2),
        }
    }

    /// Whether any part of the outline (sides and caps) properly crosses `edge`.
    /// Straight parts that only touch `edge` at an endpoint do not count.
    pub fn outline_crossed_by(&self, edge: &Edge) -> bool {
        self.side_lines().iter().any(|side| side.crosses(edge))
            || match self.caps() {
                CapsuleCaps::Round(arcs) => arcs.iter().any(|arc| arc.crosses_edge(edge)),
                CapsuleCaps::Square(lines) => lines.iter().any(|line| line.crosses(edge)),
            }
    }
}

impl CollidesWith<Point> for Capsule {
    /// Whether `point` lies inside the body or the caps, boundary included
    fn collides_with(&self, point: &Point) -> bool {
        match self.square && self.radius > 0.0 {
            true => point_in_quadrangle(&self.body(), point),
            //without thickness the square body collapses onto the centerline
            false => self.centerline.sq_distance_to(point) <= self.radius.powi(2),
        }
    }
}

impl Outline for Capsule {
    fn position_of(&self, point: &Point) -> GeoPosition {
        if self.contains_strict(point) {
            GeoPosition::Interior
        } else if self.collides_with(point) {
            GeoPosition::Boundary
        } else {
            GeoPosition::Exterior
        }
    }

    /// Both true ends and the middle of both sides, plus the corners of square caps
    fn outline_samples(&self) -> Vec<Point> {
        let n = self.axis().normal;
        let r = self.radius;
        let mid = self.centerline.centroid();
        let mut samples = vec![
            self.true_end(CapEnd::Start),
            self.true_end(CapEnd::End),
            mid.offset(n, r),
            mid.offset(n, -r),
        ];
        if self.square {
            samples.extend(self.body());
        }
        samples
    }
}

impl DistanceTo<Point> for Capsule {
    fn distance_to(&self, point: &Point) -> f64 {
        self.sq_distance_to(point).sqrt()
    }

    fn sq_distance_to(&self, point: &Point) -> f64 {
        let r = self.radius;
        match self.square {
            true => {
                let (u, v) = self.local_coords(point);
                let len = self.axis().length;
                let du = f64::max(f64::max(-r - u, u - (len + r)), 0.0);
                let dv = f64::max(v.abs() - r, 0.0);
                du * du + dv * dv
            }
            false => f64::max(self.centerline.distance_to(point) - r, 0.0).powi(2),
        }
    }
}

impl Transformable for Capsule {
    fn transform(&mut self, t: &Transformation) -> &mut Self {
        let Capsule {
            centerline,
            radius: _,
            square: _,
        } = self;
        centerline.transform(t);
        self
    }
}
