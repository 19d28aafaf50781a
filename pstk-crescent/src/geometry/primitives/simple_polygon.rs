use anyhow::{Result, bail, ensure};
use itertools::Itertools;

use crate::geometry::Transformation;
use crate::geometry::geo_enums::GeoPosition;
use crate::geometry::geo_traits::{CollidesWith, DistanceTo, Outline, Transformable};
use crate::geometry::primitives::{Edge, Point, Rect};
use crate::util::FPA;

/// Geometric primitive representing a simple polygon: <https://en.wikipedia.org/wiki/Simple_polygon>
/// Vertices are always stored in counterclockwise order.
#[derive(Clone, Debug, PartialEq)]
pub struct SPolygon {
    /// Vertices, counterclockwise
    pub vertices: Vec<Point>,
    /// Bounding box
    pub bbox: Rect,
    pub area: f64,
    /// Whether the vertices had to be reversed to become counterclockwise
    pub reversed: bool,
}

impl SPolygon {
    /// Create a new simple polygon from a set of points.
    /// Clockwise input is reversed and flagged in [`SPolygon::reversed`].
    pub fn new(mut vertices: Vec<Point>) -> Result<Self> {
        ensure!(
            vertices.len() >= 3,
            "simple polygon must have at least 3 vertices, got {}",
            vertices.len()
        );
        ensure!(
            vertices.iter().all(|p| p.0.is_finite() && p.1.is_finite()),
            "simple polygon contains non-finite coordinates: {vertices:?}"
        );
        ensure!(
            vertices.iter().unique().count() == vertices.len(),
            "simple polygon should not contain duplicate vertices: {vertices:?}"
        );

        let (area, reversed) = match SPolygon::calculate_area(&vertices) {
            area if area == 0.0 => bail!("simple polygon has no area: {vertices:?}"),
            area if area < 0.0 => {
                //edges should always be ordered counterclockwise (positive area)
                vertices.reverse();
                (-area, true)
            }
            area => (area, false),
        };

        let Some(bbox) = Rect::bounding(&vertices) else {
            bail!("simple polygon without vertices");
        };

        Ok(SPolygon {
            vertices,
            bbox,
            area,
            reversed,
        })
    }

    pub fn vertex(&self, i: usize) -> Point {
        self.vertices[i]
    }

    pub fn edge(&self, i: usize) -> Edge {
        let j = (i + 1) % self.n_vertices();
        Edge::new(self.vertices[i], self.vertices[j])
    }

    pub fn edge_iter(&self) -> impl Iterator<Item = Edge> + '_ {
        (0..self.n_vertices()).map(move |i| self.edge(i))
    }

    pub fn n_vertices(&self) -> usize {
        self.vertices.len()
    }

    //https://en.wikipedia.org/wiki/Shoelace_formula
    //counterclockwise = positive area, clockwise = negative area
    pub fn calculate_area(points: &[Point]) -> f64 {
        let mut sigma = 0.0;
        for i in 0..points.len() {
            //next point
            let j = (i + 1) % points.len();

            let (x_i, y_i) = points[i].into();
            let (x_j, y_j) = points[j].into();

            sigma += (y_i + y_j) * (x_i - x_j)
        }

        0.5 * sigma
    }
}

impl Transformable for SPolygon {
    fn transform(&mut self, t: &Transformation) -> &mut Self {
        //destructuring pattern to ensure that the code is updated when the struct changes
        let SPolygon {
            vertices,
            bbox,
            area,
            reversed: _,
        } = self;

        vertices.iter_mut().for_each(|p| {
            p.transform(t);
        });

        //mirroring flips the orientation, restore counterclockwise order
        if SPolygon::calculate_area(vertices) < 0.0 {
            vertices.reverse();
        }
        *area = SPolygon::calculate_area(vertices);
        if let Some(b) = Rect::bounding(vertices) {
            *bbox = b;
        }

        self
    }
}

impl CollidesWith<Point> for SPolygon {
    fn collides_with(&self, point: &Point) -> bool {
        //based on the ray casting algorithm: https://en.wikipedia.org/wiki/Point_in_polygon#Ray_casting_algorithm
        match self.bbox.collides_with(point) {
            false => false,
            true => {
                //horizontal ray shot to the right.
                //Starting from the point to another point that is certainly outside the shape
                let point_outside = Point(self.bbox.x_max + self.bbox.width() + 1.0, point.1);
                let ray = Edge::new(*point, point_outside);

                let mut n_intersections = 0;
                for edge in self.edge_iter() {
                    //a ray passing through (or almost through) a vertex would be counted twice,
                    //only count the edge if it lies below the ray
                    let (s_x, s_y) = (FPA(edge.start.0), FPA(edge.start.1));
                    let (e_x, e_y) = (FPA(edge.end.0), FPA(edge.end.1));
                    let (p_x, p_y) = (FPA(point.0), FPA(point.1));

                    if (s_y == p_y && s_x > p_x) || (e_y == p_y && e_x > p_x) {
                        if s_y < p_y || e_y < p_y {
                            n_intersections += 1;
                        }
                    } else if ray.collides_with(&edge) {
                        n_intersections += 1;
                    }
                }

                n_intersections % 2 == 1
            }
        }
    }
}

impl Outline for SPolygon {
    /// Points (almost) on an edge are on the boundary, ray casting decides the rest
    fn position_of(&self, point: &Point) -> GeoPosition {
        let on_edge = self
            .edge_iter()
            .any(|edge| FPA(edge.sq_distance_to(point)) == FPA(0.0));
        match (on_edge, self.collides_with(point)) {
            (true, _) => GeoPosition::Boundary,
            (false, true) => GeoPosition::Interior,
            (false, false) => GeoPosition::Exterior,
        }
    }

    /// Every vertex and the middle of every edge
    fn outline_samples(&self) -> Vec<Point> {
        self.vertices
            .iter()
            .copied()
            .chain(self.edge_iter().map(|edge| edge.centroid()))
            .collect()
    }
}

impl DistanceTo<Point> for SPolygon {
    fn distance_to(&self, point: &Point) -> f64 {
        self.sq_distance_to(point).sqrt()
    }

    fn sq_distance_to(&self, point: &Point) -> f64 {
        match self.collides_with(point) {
            true => 0.0,
            false => self
                .edge_iter()
                .map(|edge| edge.sq_distance_to(point))
                .fold(f64::INFINITY, f64::min),
        }
    }
}

#[cfg(feature = "crescent-render")]
impl From<&SPolygon> for geo_types::Polygon<f64> {
    fn from(sp: &SPolygon) -> Self {
        let exterior = sp
            .vertices
            .iter()
            .map(|p| geo_types::Coord { x: p.0, y: p.1 })
            .collect::<Vec<_>>();
        geo_types::Polygon::new(geo_types::LineString::new(exterior), vec![])
    }
}
