use crate::geometry::primitives::Point;

/// Whether `point` lies inside or on the boundary of the convex quadrangle `quad`.
/// The corners may be ordered clockwise or counterclockwise.
pub fn point_in_quadrangle(quad: &[Point; 4], point: &Point) -> bool {
    let Point(px, py) = *point;

    let (mut has_pos, mut has_neg) = (false, false);
    for i in 0..4 {
        let Point(x1, y1) = quad[i];
        let Point(x2, y2) = quad[(i + 1) % 4];
        //which side of corner i -> corner i+1 the point is on
        let cross = (x2 - x1) * (py - y1) - (y2 - y1) * (px - x1);
        has_pos |= cross > 0.0;
        has_neg |= cross < 0.0;
    }
    !(has_pos && has_neg)
}
