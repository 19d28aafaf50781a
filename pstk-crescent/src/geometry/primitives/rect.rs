use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::Point;
use anyhow::Result;
use anyhow::ensure;

///Axis-aligned rectangle
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Rect {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl Rect {
    pub fn try_new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Result<Self> {
        ensure!(
            x_min <= x_max && y_min <= y_max,
            "invalid rectangle, x_min: {x_min}, x_max: {x_max}, y_min: {y_min}, y_max: {y_max}"
        );
        Ok(Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    /// Smallest rectangle containing all `points`, `None` if there are none
    pub fn bounding(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let init = Rect {
            x_min: first.0,
            y_min: first.1,
            x_max: first.0,
            y_max: first.1,
        };
        Some(points.iter().fold(init, |r, p| Rect {
            x_min: r.x_min.min(p.0),
            y_min: r.y_min.min(p.1),
            x_max: r.x_max.max(p.0),
            y_max: r.y_max.max(p.1),
        }))
    }

    /// Grows the rectangle by `margin` on every side
    pub fn inflate(self, margin: f64) -> Self {
        Rect {
            x_min: self.x_min - margin,
            y_min: self.y_min - margin,
            x_max: self.x_max + margin,
            y_max: self.y_max + margin,
        }
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
}

impl CollidesWith<Point> for Rect {
    fn collides_with(&self, point: &Point) -> bool {
        let Point(x, y) = *point;
        x >= self.x_min && x <= self.x_max && y >= self.y_min && y <= self.y_max
    }
}

impl CollidesWith<Rect> for Rect {
    fn collides_with(&self, other: &Rect) -> bool {
        f64::max(self.x_min, other.x_min) <= f64::min(self.x_max, other.x_max)
            && f64::max(self.y_min, other.y_min) <= f64::min(self.y_max, other.y_max)
    }
}
