#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use pstk_crescent::crescent::{
        Geometry, capsule_capsule, capsule_polygon, circle_capsule, circle_polygon,
        polygon_polygon, relate,
    };
    use pstk_crescent::geometry::geo_enums::RelationState;
    use pstk_crescent::geometry::primitives::{Capsule, Circle, Edge, Point, SPolygon};
    use test_case::test_case;

    fn circle(x: f64, y: f64, r: f64) -> Circle {
        Circle::new(Point(x, y), r)
    }

    fn capsule(x1: f64, y1: f64, x2: f64, y2: f64, thickness: f64, square: bool) -> Capsule {
        Capsule::new(Edge::new(Point(x1, y1), Point(x2, y2)), thickness / 2.0, square)
    }

    fn rect(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> SPolygon {
        SPolygon::new(vec![
            Point(x_min, y_min),
            Point(x_max, y_min),
            Point(x_max, y_max),
            Point(x_min, y_max),
        ])
        .unwrap()
    }

    #[test]
    fn square_cap_extension() {
        let slot = capsule(0.0, 0.0, 100.0, 0.0, 20.0, true);
        //pokes through the flat end at x = -10
        assert_eq!(
            circle_capsule(&circle(-8.0, 0.0, 3.0), &slot),
            RelationState::Crossing
        );
        //in the corner of the square end, fully inside
        assert_eq!(
            circle_capsule(&circle(-8.0, 8.0, 1.0), &slot),
            RelationState::ShapeInHole
        );
        //beyond the flat end
        assert_eq!(
            circle_capsule(&circle(-15.0, 0.0, 3.0), &slot),
            RelationState::Disjoint
        );
        //beyond the flat end, clipping a corner
        assert_eq!(
            circle_capsule(&circle(-12.0, 12.0, 3.0), &slot),
            RelationState::Crossing
        );
    }

    #[test_case(circle(50.0, 0.0, 5.0), RelationState::ShapeInHole; "inside the body")]
    #[test_case(circle(50.0, 8.0, 5.0), RelationState::Crossing; "through a side")]
    #[test_case(circle(50.0, 15.0, 5.0), RelationState::Disjoint; "touching a side")]
    #[test_case(circle(-8.0, 0.0, 3.0), RelationState::Crossing; "through a round cap")]
    #[test_case(circle(-5.0, 0.0, 3.0), RelationState::ShapeInHole; "inside a round cap")]
    #[test_case(circle(-8.0, 8.0, 1.0), RelationState::Disjoint; "in the corner a round cap cuts off")]
    fn small_circle_vs_round_capsule(shape: Circle, expected: RelationState) {
        let slot = capsule(0.0, 0.0, 100.0, 0.0, 20.0, false);
        assert_eq!(circle_capsule(&shape, &slot), expected);
    }

    #[test_case(capsule(-20.0, 0.0, 20.0, 0.0, 10.0, false), RelationState::HoleInShape; "capsule inside")]
    #[test_case(capsule(-20.0, 0.0, 20.0, 0.0, 10.0, true), RelationState::HoleInShape; "square capsule inside")]
    #[test_case(capsule(0.0, 0.0, 100.0, 0.0, 10.0, false), RelationState::Crossing; "one end outside")]
    #[test_case(capsule(-100.0, 0.0, 100.0, 0.0, 10.0, false), RelationState::Crossing; "both ends outside")]
    #[test_case(capsule(-100.0, 60.0, 100.0, 60.0, 10.0, false), RelationState::Disjoint; "passing by")]
    #[test_case(capsule(-25.0, 0.0, 25.0, 0.0, 20.0, true), RelationState::Crossing; "square corners outside")]
    fn big_circle_vs_capsule(hole: Capsule, expected: RelationState) {
        let shape = circle(0.0, 0.0, 30.0);
        assert_eq!(circle_capsule(&shape, &hole), expected);
    }

    #[test]
    fn zero_length_capsule_behaves_like_a_disc() {
        let dot = capsule(0.0, 0.0, 0.0, 0.0, 10.0, false);
        assert_eq!(
            circle_capsule(&circle(0.0, 0.0, 20.0), &dot),
            RelationState::HoleInShape
        );
        assert_eq!(
            circle_capsule(&circle(30.0, 0.0, 5.0), &dot),
            RelationState::Disjoint
        );
        assert_eq!(
            capsule_capsule(&dot, &capsule(-50.0, 0.0, 50.0, 0.0, 20.0, false)),
            RelationState::ShapeInHole
        );
        assert_eq!(
            capsule_polygon(&dot, &rect(-1.0, -1.0, 1.0, 1.0)),
            RelationState::HoleInShape
        );
    }

    #[test]
    fn crossing_capsules() {
        let vertical = capsule(0.0, -50.0, 0.0, 50.0, 10.0, false);
        let horizontal = capsule(-50.0, 0.0, 50.0, 0.0, 10.0, false);
        assert_eq!(
            capsule_capsule(&vertical, &horizontal),
            RelationState::Crossing
        );
    }

    #[test]
    fn invisible_arc_intersections_do_not_cross() {
        //the cap circles of both ends overlap, but only inside the body of the outer capsule
        let shape = capsule(0.0, 0.0, 100.0, 0.0, 20.0, false);
        let hole = capsule(10.0, 0.0, 90.0, 0.0, 20.0, false);
        assert_eq!(capsule_capsule(&shape, &hole), RelationState::HoleInShape);
        assert_eq!(capsule_capsule(&hole, &shape), RelationState::ShapeInHole);
    }

    #[test_case(capsule(120.0, 0.0, 200.0, 0.0, 20.0, false), RelationState::Disjoint; "touching end to end")]
    #[test_case(capsule(0.0, 0.0, 100.0, 0.0, 20.0, false), RelationState::ShapeInHole; "identical")]
    #[test_case(capsule(-5.0, 0.0, 105.0, 0.0, 10.0, false), RelationState::HoleInShape; "thin hole touching both ends")]
    #[test_case(capsule(0.0, 0.0, 100.0, 0.0, 40.0, false), RelationState::ShapeInHole; "wider hole")]
    #[test_case(capsule(50.0, 0.0, 150.0, 0.0, 20.0, false), RelationState::Crossing; "overlapping ends")]
    #[test_case(capsule(0.0, 0.0, 100.0, 0.0, 20.0, true), RelationState::ShapeInHole; "square hole around round shape")]
    #[test_case(capsule(10.0, 30.0, 90.0, 30.0, 20.0, false), RelationState::Disjoint; "parallel apart")]
    fn round_capsule_vs_capsule(hole: Capsule, expected: RelationState) {
        let shape = capsule(0.0, 0.0, 100.0, 0.0, 20.0, false);
        assert_eq!(capsule_capsule(&shape, &hole), expected);
    }

    #[test_case(capsule(0.0, 0.0, 100.0, 0.0, 20.0, true), RelationState::ShapeInHole; "identical")]
    #[test_case(capsule(120.0, 0.0, 200.0, 0.0, 20.0, true), RelationState::Disjoint; "touching end to end")]
    #[test_case(capsule(120.0, 0.0, 200.0, 0.0, 20.0, false), RelationState::Disjoint; "round slot touching the flat end")]
    #[test_case(capsule(0.0, 20.0, 100.0, 20.0, 20.0, true), RelationState::Disjoint; "sharing a side")]
    #[test_case(capsule(50.0, 0.0, 150.0, 0.0, 20.0, true), RelationState::Crossing; "overlapping ends")]
    #[test_case(capsule(50.0, -50.0, 50.0, 50.0, 10.0, true), RelationState::Crossing; "perpendicular")]
    #[test_case(capsule(0.0, 0.0, 100.0, 0.0, 40.0, false), RelationState::ShapeInHole; "round hole around square shape")]
    fn square_capsule_vs_capsule(hole: Capsule, expected: RelationState) {
        let shape = capsule(0.0, 0.0, 100.0, 0.0, 20.0, true);
        assert_eq!(capsule_capsule(&shape, &hole), expected);
    }

    #[test]
    fn square_capsule_around_round_slot() {
        let shape = capsule(-30.0, 0.0, 30.0, 0.0, 40.0, true);
        let hole = capsule(-40.0, 0.0, 40.0, 0.0, 20.0, false);
        assert_eq!(capsule_capsule(&shape, &hole), RelationState::HoleInShape);
    }

    #[test_case(circle(50.0, 50.0, 10.0), RelationState::ShapeInHole; "circle inside")]
    #[test_case(circle(50.0, 50.0, 100.0), RelationState::HoleInShape; "polygon inside")]
    #[test_case(circle(0.0, 50.0, 10.0), RelationState::Crossing; "on an edge")]
    #[test_case(circle(200.0, 50.0, 10.0), RelationState::Disjoint; "apart")]
    fn circle_vs_polygon(shape: Circle, expected: RelationState) {
        let hole = rect(0.0, 0.0, 100.0, 100.0);
        assert_eq!(circle_polygon(&shape, &hole), expected);
    }

    #[test_case(capsule(20.0, 50.0, 80.0, 50.0, 10.0, false), RelationState::ShapeInHole; "capsule inside")]
    #[test_case(capsule(-50.0, 50.0, 150.0, 50.0, 10.0, true), RelationState::Crossing; "through the polygon")]
    #[test_case(capsule(-50.0, 50.0, 150.0, 50.0, 400.0, false), RelationState::HoleInShape; "polygon inside")]
    #[test_case(capsule(20.0, 150.0, 80.0, 150.0, 10.0, false), RelationState::Disjoint; "apart")]
    #[test_case(capsule(50.0, 104.0, 50.0, 150.0, 10.0, false), RelationState::Crossing; "round cap over an edge")]
    #[test_case(capsule(20.0, 110.0, 80.0, 110.0, 20.0, true), RelationState::Disjoint; "square capsule sitting on an edge")]
    #[test_case(capsule(10.0, 50.0, 90.0, 50.0, 20.0, true), RelationState::ShapeInHole; "square capsule spanning the polygon")]
    #[test_case(capsule(100.0, 20.0, 100.0, 80.0, 20.0, true), RelationState::Crossing; "square capsule straddling an edge")]
    fn capsule_vs_polygon(shape: Capsule, expected: RelationState) {
        let hole = rect(0.0, 0.0, 100.0, 100.0);
        assert_eq!(capsule_polygon(&shape, &hole), expected);
    }

    #[test_case(rect(10.0, 10.0, 20.0, 20.0), RelationState::ShapeInHole; "inside")]
    #[test_case(rect(-10.0, -10.0, 110.0, 110.0), RelationState::HoleInShape; "around")]
    #[test_case(rect(50.0, 50.0, 150.0, 150.0), RelationState::Crossing; "overlapping")]
    #[test_case(rect(200.0, 0.0, 300.0, 100.0), RelationState::Disjoint; "apart")]
    #[test_case(rect(0.0, 0.0, 100.0, 100.0), RelationState::ShapeInHole; "identical")]
    #[test_case(rect(100.0, 100.0, 200.0, 200.0), RelationState::Disjoint; "touching at a corner")]
    #[test_case(rect(100.0, 0.0, 200.0, 100.0), RelationState::Disjoint; "sharing an edge")]
    #[test_case(rect(50.0, 0.0, 150.0, 100.0), RelationState::Crossing; "overlapping along edges")]
    #[test_case(rect(0.0, 0.0, 50.0, 100.0), RelationState::ShapeInHole; "inside along edges")]
    fn polygon_vs_polygon(shape: SPolygon, expected: RelationState) {
        let hole = rect(0.0, 0.0, 100.0, 100.0);
        assert_eq!(polygon_polygon(&shape, &hole), expected);
    }

    #[test]
    fn multi_island_polygon_is_not_supported() {
        //a polygon can only hold a single contour: two islands joined by a zero-width bridge
        //form a self-touching contour, which is rejected as it repeats vertices
        let islands = SPolygon::new(vec![
            Point(0.0, 0.0),
            Point(10.0, 0.0),
            Point(10.0, 10.0),
            Point(0.0, 10.0),
            Point(0.0, 0.0),
            Point(20.0, 0.0),
            Point(30.0, 0.0),
            Point(30.0, 10.0),
            Point(20.0, 10.0),
        ]);
        assert!(islands.is_err());
    }

    /// Pairs of non-identical geometries of every kind combination
    fn geometry_zoo() -> Vec<(String, Geometry<'static>)> {
        let polys: &'static [SPolygon] = Box::leak(Box::new([
            rect(-30.0, -30.0, 30.0, 30.0),
            rect(-5.0, -60.0, 5.0, 60.0),
            rect(100.0, 100.0, 120.0, 120.0),
        ]));
        let mut zoo = vec![
            ("circle r30".to_string(), Geometry::Circle(circle(0.0, 0.0, 30.0))),
            ("circle r5".to_string(), Geometry::Circle(circle(0.0, 0.0, 5.0))),
            ("circle offset".to_string(), Geometry::Circle(circle(25.0, 0.0, 10.0))),
            (
                "round capsule".to_string(),
                Geometry::Capsule(capsule(-40.0, 0.0, 40.0, 0.0, 20.0, false)),
            ),
            (
                "square capsule".to_string(),
                Geometry::Capsule(capsule(0.0, -20.0, 0.0, 20.0, 8.0, true)),
            ),
            (
                "diagonal capsule".to_string(),
                Geometry::Capsule(capsule(-50.0, -50.0, 50.0, 50.0, 12.0, false)),
            ),
        ];
        zoo.extend(
            polys
                .iter()
                .enumerate()
                .map(|(i, p)| (format!("polygon {i}"), Geometry::Polygon(p))),
        );
        zoo
    }

    #[test]
    fn relation_is_symmetric() {
        let zoo = geometry_zoo();
        for ((a_name, a), (b_name, b)) in zoo.iter().tuple_combinations() {
            let forward = relate(a, b);
            let backward = relate(b, a);
            assert_eq!(
                forward,
                backward.invert(),
                "{a_name} vs {b_name}: {forward:?}, reversed: {backward:?}"
            );
        }
    }

    #[test]
    fn relate_dispatches_every_kind() {
        let zoo = geometry_zoo();
        for ((_, a), (_, b)) in zoo.iter().cartesian_product(zoo.iter()) {
            //exactly one of the four states, never a panic
            let _ = relate(a, b);
        }
        let states = zoo
            .iter()
            .tuple_combinations()
            .map(|((_, a), (_, b))| relate(a, b))
            .unique()
            .count();
        assert_eq!(states, 4);
    }
}
