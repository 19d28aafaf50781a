use crate::geometry::Transformation;
use crate::geometry::geo_traits::{CollidesWith, DistanceTo, Transformable};
use crate::geometry::primitives::Point;

/// Line segment between two [`Point`]s.
/// Zero-length edges are legal; they behave like a single point.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Edge {
    pub start: Point,
    pub end: Point,
}

impl Edge {
    pub fn new(start: Point, end: Point) -> Self {
        debug_assert!(
            start.0.is_finite() && start.1.is_finite() && end.0.is_finite() && end.1.is_finite(),
            "invalid edge: {start:?} -> {end:?}"
        );
        Edge { start, end }
    }

    /// Position of the perpendicular foot of `point` on the infinite line through the edge,
    /// as a fraction of the edge: 0 at `start`, 1 at `end`. Zero for degenerate edges.
    pub fn projection_param(&self, point: &Point) -> f64 {
        let Point(x1, y1) = self.start;
        let Point(x2, y2) = self.end;
        let Point(x, y) = point;

        let (c, d) = (x2 - x1, y2 - y1);
        let len_sq = c * c + d * d;
        match len_sq == 0.0 {
            true => 0.0,
            false => ((x - x1) * c + (y - y1) * d) / len_sq,
        }
    }

    /// Returns the closest point which lies on the edge to the given point
    pub fn closest_point_on_edge(&self, point: &Point) -> Point {
        //from https://stackoverflow.com/a/6853926
        let Point(x1, y1) = self.start;
        let Point(x2, y2) = self.end;

        let param = self.projection_param(point);
        match param {
            p if p <= 0.0 => Point(x1, y1), //start is the closest point
            p if p >= 1.0 => Point(x2, y2), //end is the closest point
            p => Point(x1 + p * (x2 - x1), y1 + p * (y2 - y1)), //closest point is on the edge
        }
    }

    pub fn x_min(&self) -> f64 {
        f64::min(self.start.0, self.end.0)
    }

    pub fn y_min(&self) -> f64 {
        f64::min(self.start.1, self.end.1)
    }

    pub fn x_max(&self) -> f64 {
        f64::max(self.start.0, self.end.0)
    }

    pub fn y_max(&self) -> f64 {
        f64::max(self.start.1, self.end.1)
    }

    pub fn centroid(&self) -> Point {
        Point(
            (self.start.0 + self.end.0) / 2.0,
            (self.start.1 + self.end.1) / 2.0,
        )
    }
}

impl Transformable for Edge {
    fn transform(&mut self, t: &Transformation) -> &mut Self {
        let Edge { start, end } = self;
        start.transform(t);
        end.transform(t);

        self
    }
}

impl DistanceTo<Point> for Edge {
    #[inline(always)]
    fn distance_to(&self, point: &Point) -> f64 {
        f64::sqrt(self.sq_distance_to(point))
    }

    #[inline(always)]
    fn sq_distance_to(&self, point: &Point) -> f64 {
        let Point(x, y) = point;
        let Point(xx, yy) = self.closest_point_on_edge(point);

        let (dx, dy) = (x - xx, y - yy);
        dx.powi(2) + dy.powi(2)
    }
}

impl CollidesWith<Edge> for Edge {
    /// Segment/segment intersection, endpoints inclusive. Parallel segments never intersect.
    #[inline(always)]
    fn collides_with(&self, other: &Edge) -> bool {
        edge_intersection(self, other)
            .is_some_and(|(t, u)| (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u))
    }
}

impl Edge {
    /// Whether the two segments properly cross: the intersection lies strictly inside both.
    /// Contacts at an endpoint (shared corners, T-junctions) and parallel segments do not cross.
    pub fn crosses(&self, other: &Edge) -> bool {
        let open = |p: f64| p > 0.0 && p < 1.0;
        edge_intersection(self, other).is_some_and(|(t, u)| open(t) && open(u))
    }
}

/// Parameters of the intersection of the lines through both edges, `t` along `e1` and `u` along `e2`
/// (both measured from the end point). `None` for parallel edges or non-overlapping bounding boxes.
#[inline(always)]
fn edge_intersection(e1: &Edge, e2: &Edge) -> Option<(f64, f64)> {
    if f64::max(e1.x_min(), e2.x_min()) > f64::min(e1.x_max(), e2.x_max())
        || f64::max(e1.y_min(), e2.y_min()) > f64::min(e1.y_max(), e2.y_max())
    {
        //bounding boxes do not overlap
        return None;
    }

    //based on: https://en.wikipedia.org/wiki/Line%E2%80%93line_intersection#Given_two_points_on_each_line_segment
    let Point(x1, y1) = e1.start;
    let Point(x2, y2) = e1.end;
    let Point(x3, y3) = e2.start;
    let Point(x4, y4) = e2.end;

    let t_nom = (x2 - x4) * (y4 - y3) - (y2 - y4) * (x4 - x3);
    let u_nom = (x2 - x4) * (y2 - y1) - (y2 - y4) * (x2 - x1);
    let denom = (x2 - x1) * (y4 - y3) - (y2 - y1) * (x4 - x3);

    if denom == 0.0 {
        //parallel (or degenerate) edges
        return None;
    }

    Some((t_nom / denom, u_nom / denom))
}
