use anyhow::{Context, Result, bail, ensure};
use log::debug;

use crate::crescent::Geometry;
use crate::geometry::primitives::{Capsule, Circle, Edge, Point, SPolygon};

/// Integer board coordinate
pub type Coord = i64;

#[derive(Clone, Debug, PartialEq)]
pub struct CircleShape {
    pub x: Coord,
    pub y: Coord,
    pub dia: Coord,
}

impl CircleShape {
    pub fn to_circle(&self) -> Circle {
        Circle::new(Point(self.x as f64, self.y as f64), self.dia as f64 / 2.0)
    }
}

/// Line shape: a capsule between two points
#[derive(Clone, Debug, PartialEq)]
pub struct LineShape {
    pub x1: Coord,
    pub y1: Coord,
    pub x2: Coord,
    pub y2: Coord,
    pub thickness: Coord,
    pub square: bool,
}

impl LineShape {
    pub fn to_capsule(&self) -> Capsule {
        let centerline = Edge::new(
            Point(self.x1 as f64, self.y1 as f64),
            Point(self.x2 as f64, self.y2 as f64),
        );
        Capsule::new(centerline, self.thickness as f64 / 2.0, self.square)
    }
}

/// Polygon shape with a lazily built contour.
/// The contour is cached until the next edit of the points.
#[derive(Clone, Debug, PartialEq)]
pub struct PolyShape {
    pub points: Vec<(Coord, Coord)>,
    contour: Option<SPolygon>,
}

impl PolyShape {
    pub fn new(points: Vec<(Coord, Coord)>) -> Self {
        Self {
            points,
            contour: None,
        }
    }

    /// Builds the contour if it is not cached yet and returns it
    pub fn update_polygon(&mut self) -> Result<&SPolygon> {
        let contour = match self.contour.take() {
            Some(contour) => contour,
            None => {
                let vertices = self
                    .points
                    .iter()
                    .map(|&(x, y)| Point(x as f64, y as f64))
                    .collect();
                let contour = SPolygon::new(vertices)
                    .with_context(|| format!("malformed polygon shape: {:?}", self.points))?;
                if contour.reversed {
                    debug!("[PS] clockwise polygon contour inverted");
                }
                contour
            }
        };
        Ok(self.contour.insert(contour))
    }

    pub fn contour(&self) -> Option<&SPolygon> {
        self.contour.as_ref()
    }

    /// Whether the points had to be inverted to obtain a counterclockwise contour.
    /// Only known once the contour has been built.
    pub fn is_inverted(&self) -> bool {
        self.contour.as_ref().is_some_and(|c| c.reversed)
    }

    pub fn clear_cache(&mut self) {
        self.contour = None;
    }

    /// Moves every point outward along the miter of its two adjacent edge normals.
    fn offset(&mut self, d: f64) -> Result<()> {
        let n = self.points.len();
        ensure!(n >= 3, "cannot offset a polygon with {n} points");
        let pts = self
            .points
            .iter()
            .map(|&(x, y)| Point(x as f64, y as f64))
            .collect::<Vec<_>>();

        //outward normal side depends on the orientation of the input
        let orientation = match SPolygon::calculate_area(&pts) {
            a if a > 0.0 => 1.0,
            a if a < 0.0 => -1.0,
            _ => bail!("cannot offset a polygon without area: {:?}", self.points),
        };

        let outward_normal = |a: Point, b: Point| -> (f64, f64) {
            let (dx, dy) = (b.0 - a.0, b.1 - a.1);
            let len = (dx * dx + dy * dy).sqrt();
            match len == 0.0 {
                true => (0.0, 0.0),
                false => (orientation * dy / len, -orientation * dx / len),
            }
        };

        let offset_points = (0..n)
            .map(|i| {
                let prev = pts[(i + n - 1) % n];
                let curr = pts[i];
                let next = pts[(i + 1) % n];
                let (n1x, n1y) = outward_normal(prev, curr);
                let (n2x, n2y) = outward_normal(curr, next);
                let denom = 1.0 + n1x * n2x + n1y * n2y;
                let moved = match denom.abs() < 1e-9 {
                    //edges folding back onto each other, no miter exists
                    true => curr.offset((n1x, n1y), d),
                    false => curr.offset(((n1x + n2x) / denom, (n1y + n2y) / denom), d),
                };
                (moved.0.round() as Coord, moved.1.round() as Coord)
            })
            .collect();

        self.points = offset_points;
        self.clear_cache();
        Ok(())
    }
}

/// A single shape of a pad-stack prototype
#[derive(Clone, Debug, PartialEq)]
pub enum PstkShape {
    Circle(CircleShape),
    Line(LineShape),
    Polygon(PolyShape),
    /// Placeholder standing in for the hole, optionally carrying a snapshot of its already placed outline
    HoleShadow(Option<SPolygon>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Line,
    Polygon,
    HoleShadow,
}

impl PstkShape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            PstkShape::Circle(_) => ShapeKind::Circle,
            PstkShape::Line(_) => ShapeKind::Line,
            PstkShape::Polygon(_) => ShapeKind::Polygon,
            PstkShape::HoleShadow(_) => ShapeKind::HoleShadow,
        }
    }

    /// Checks the size invariants of the shape
    pub fn validate(&self) -> Result<()> {
        match self {
            PstkShape::Circle(c) => ensure!(c.dia >= 0, "negative circle diameter: {}", c.dia),
            PstkShape::Line(l) => ensure!(
                l.thickness >= 0,
                "negative line thickness: {}",
                l.thickness
            ),
            PstkShape::Polygon(p) => ensure!(
                p.points.len() >= 3,
                "polygon shape needs at least 3 points, got {}",
                p.points.len()
            ),
            PstkShape::HoleShadow(_) => {}
        }
        Ok(())
    }

    /// Geometry of the shape in the prototype's frame, building the polygon contour when needed.
    /// A hole shadow has no geometry of its own.
    pub fn materialize(&mut self) -> Result<Geometry<'_>> {
        match self {
            PstkShape::Circle(c) => Ok(Geometry::Circle(c.to_circle())),
            PstkShape::Line(l) => Ok(Geometry::Capsule(l.to_capsule())),
            PstkShape::Polygon(p) => Ok(Geometry::Polygon(p.update_polygon()?)),
            PstkShape::HoleShadow(_) => bail!("a hole shadow has no geometry of its own"),
        }
    }

    /// Grows the shape by `val`, or sets its size to `val` when `is_absolute`.
    /// Circle diameters and line thicknesses never drop below 1.
    pub fn grow(&mut self, is_absolute: bool, val: Coord) -> Result<()> {
        let apply = |size: &mut Coord| {
            *size = match is_absolute {
                true => val,
                false => *size + val,
            }
            .max(1);
        };
        match self {
            PstkShape::Circle(c) => apply(&mut c.dia),
            PstkShape::Line(l) => apply(&mut l.thickness),
            PstkShape::Polygon(p) => match is_absolute {
                true => bail!("absolute grow is not supported for polygon shapes"),
                false => p.offset((val as f64 / 2.0).round())?,
            },
            PstkShape::HoleShadow(_) => {}
        }
        Ok(())
    }

    /// Scales coordinates by `sx` and `sy`; diameters and thicknesses by their mean, never below 1
    pub fn scale(&mut self, sx: f64, sy: f64) -> Result<()> {
        ensure!(
            sx.is_finite() && sy.is_finite() && sx != 0.0 && sy != 0.0,
            "invalid scale factors: ({sx}, {sy})"
        );
        let sx_c = |v: Coord| (v as f64 * sx).round() as Coord;
        let sy_c = |v: Coord| (v as f64 * sy).round() as Coord;
        let s_size = |v: Coord| ((v as f64 * (sx + sy) / 2.0).round() as Coord).max(1);

        match self {
            PstkShape::Circle(c) => {
                c.dia = s_size(c.dia);
                c.x = sx_c(c.x);
                c.y = sy_c(c.y);
            }
            PstkShape::Line(l) => {
                l.thickness = s_size(l.thickness);
                l.x1 = sx_c(l.x1);
                l.y1 = sy_c(l.y1);
                l.x2 = sx_c(l.x2);
                l.y2 = sy_c(l.y2);
            }
            PstkShape::Polygon(p) => {
                p.points
                    .iter_mut()
                    .for_each(|(x, y)| (*x, *y) = (sx_c(*x), sy_c(*y)));
                p.clear_cache();
            }
            PstkShape::HoleShadow(_) => {}
        }
        Ok(())
    }
}
