#[cfg(test)]
mod tests {
    use pstk_crescent::crescent::{ClassificationFlags, classify};
    use pstk_crescent::geometry::geo_enums::RelationState;
    use pstk_crescent::pstk::{
        CircleShape, Coord, LineShape, PolyShape, PstkProto, PstkShape, ShapeKind,
    };
    use test_case::test_case;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn circle(x: Coord, y: Coord, dia: Coord) -> PstkShape {
        PstkShape::Circle(CircleShape { x, y, dia })
    }

    fn line(x1: Coord, y1: Coord, x2: Coord, y2: Coord, thickness: Coord, square: bool) -> PstkShape {
        PstkShape::Line(LineShape {
            x1,
            y1,
            x2,
            y2,
            thickness,
            square,
        })
    }

    fn poly(points: &[(Coord, Coord)]) -> PstkShape {
        PstkShape::Polygon(PolyShape::new(points.to_vec()))
    }

    fn flags(connected: bool, crescent: bool, full_cover: bool) -> ClassificationFlags {
        ClassificationFlags {
            connected,
            crescent,
            full_cover,
        }
    }

    #[test_case(RelationState::ShapeInHole, flags(true, false, true); "shape in hole")]
    #[test_case(RelationState::HoleInShape, flags(true, false, false); "hole in shape")]
    #[test_case(RelationState::Crossing, flags(true, true, false); "crossing")]
    #[test_case(RelationState::Disjoint, flags(false, false, false); "disjoint")]
    fn flags_from_relation(rel: RelationState, expected: ClassificationFlags) {
        assert_eq!(ClassificationFlags::from(rel), expected);
    }

    #[test]
    fn default_flags_are_connected() {
        assert_eq!(ClassificationFlags::default(), flags(true, false, false));
        assert_eq!(ClassificationFlags::unconnected(), flags(false, false, false));
    }

    #[test_case(circle(0, 0, 20), circle(100, 0, 10), flags(false, false, false); "disjoint circles")]
    #[test_case(circle(0, 0, 20), circle(15, 0, 10), flags(false, false, false); "tangent circles")]
    #[test_case(circle(0, 0, 10), circle(0, 0, 100), flags(true, false, true); "hole covers shape")]
    #[test_case(circle(0, 0, 60), circle(0, 0, 30), flags(true, false, false); "annular ring")]
    #[test_case(circle(20, 0, 30), circle(0, 0, 30), flags(true, true, false); "offset drill")]
    #[test_case(line(-50, 0, 50, 0, 10, false), line(0, -50, 0, 50, 10, false), flags(true, true, false); "crossing capsules")]
    #[test_case(poly(&[(-30, -30), (30, -30), (30, 30), (-30, 30)]), circle(0, 0, 24), flags(true, false, false); "square pad")]
    #[test_case(poly(&[(-10, -40), (-10, 40), (10, 40), (10, -40)]), circle(0, 0, 24), flags(true, true, false); "narrow pad")]
    #[test_case(line(30, 0, 80, 0, 20, true), circle(0, 0, 40), flags(false, false, false); "square line touching the drill")]
    #[test_case(line(0, 0, 100, 0, 20, true), line(0, 0, 100, 0, 20, true), flags(true, false, true); "identical square lines")]
    #[test_case(line(0, 0, 100, 0, 20, true), line(120, 0, 200, 0, 20, false), flags(false, false, false); "square line end touching a slot end")]
    #[test_case(poly(&[(0, 0), (40, 0), (40, 40), (0, 40)]), poly(&[(0, 0), (40, 0), (40, 40), (0, 40)]), flags(true, false, true); "identical polygons")]
    #[test_case(poly(&[(0, 0), (40, 0), (40, 40), (0, 40)]), poly(&[(40, 40), (80, 40), (80, 80), (40, 80)]), flags(false, false, false); "polygons touching at a corner")]
    fn classify_shapes(mut shape: PstkShape, mut hole: PstkShape, expected: ClassificationFlags) {
        init_logger();
        let result = classify(&mut shape, &mut hole).unwrap();
        assert_eq!(result, expected);
    }

    #[test]
    fn classification_is_idempotent() {
        let mut shape = poly(&[(-10, -40), (-10, 40), (10, 40), (10, -40)]);
        let mut hole = line(-20, 0, 20, 0, 10, true);
        let first = classify(&mut shape, &mut hole).unwrap();
        let second = classify(&mut shape, &mut hole).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, flags(true, true, false));
    }

    #[test]
    fn hole_shadow_as_hole_is_unconnected() {
        let mut shape = circle(0, 0, 60);
        let mut hole = PstkShape::HoleShadow(None);
        let result = classify(&mut shape, &mut hole).unwrap();
        assert_eq!(result, ClassificationFlags::unconnected());
    }

    #[test]
    #[should_panic]
    fn hole_shadow_as_shape_panics() {
        let mut shape = PstkShape::HoleShadow(None);
        let mut hole = circle(0, 0, 30);
        let _ = classify(&mut shape, &mut hole);
    }

    #[test]
    fn clockwise_polygon_is_inverted_once_built() {
        let mut shape = poly(&[(-10, -40), (-10, 40), (10, 40), (10, -40)]);
        let mut hole = circle(0, 0, 24);

        let PstkShape::Polygon(p) = &shape else { unreachable!() };
        assert!(p.contour().is_none());
        assert!(!p.is_inverted());

        classify(&mut shape, &mut hole).unwrap();
        let PstkShape::Polygon(p) = &shape else { unreachable!() };
        assert!(p.contour().is_some());
        assert!(p.is_inverted());
    }

    #[test]
    fn malformed_polygon_fails_lazily() {
        let mut shape = poly(&[(0, 0), (10, 0), (0, 0)]);
        assert!(shape.validate().is_ok());

        let mut hole = circle(0, 0, 24);
        assert!(classify(&mut shape, &mut hole).is_err());
        let PstkShape::Polygon(p) = &shape else { unreachable!() };
        assert!(p.contour().is_none());
    }

    #[test]
    fn proto_caches_and_invalidates_flags() {
        init_logger();
        let mut proto = PstkProto::new("round", 30, true).unwrap();
        let i = proto.push_shape(circle(0, 0, 60)).unwrap();
        assert_eq!(proto.shape_flags(i), None);

        proto.update().unwrap();
        assert_eq!(proto.shape_flags(i), Some(flags(true, false, false)));

        proto.set_hole_dia(100).unwrap();
        assert_eq!(proto.shape_flags(i), None);
        proto.update().unwrap();
        assert_eq!(proto.shape_flags(i), Some(flags(true, false, true)));

        //the slot replaces the drill
        proto.set_slot(Some(line(-40, 0, 40, 0, 20, false))).unwrap();
        assert_eq!(proto.hole_shape().map(|h| h.kind()), Some(ShapeKind::Line));
        proto.update().unwrap();
        assert_eq!(proto.shape_flags(i), Some(flags(true, true, false)));

        assert_eq!(proto.shape_flags(42), None);
    }

    #[test]
    fn proto_without_hole_has_nothing_connected() {
        let mut proto = PstkProto::new("smd", 0, false).unwrap();
        assert!(proto.hole_shape().is_none());
        proto.push_shape(circle(0, 0, 50)).unwrap();
        proto.update().unwrap();
        assert_eq!(proto.shape_flags(0), Some(ClassificationFlags::unconnected()));
    }

    #[test]
    fn hole_shadow_record_is_unconnected() {
        let mut proto = PstkProto::new("round", 30, true).unwrap();
        proto.push_shape(circle(0, 0, 60)).unwrap();
        proto.push_shape(PstkShape::HoleShadow(None)).unwrap();
        proto.update().unwrap();
        assert_eq!(proto.shape_flags(0), Some(flags(true, false, false)));
        assert_eq!(proto.shape_flags(1), Some(ClassificationFlags::unconnected()));
    }

    #[test]
    fn proto_rejects_invalid_input() {
        assert!(PstkProto::new("neg", -1, true).is_err());

        let mut proto = PstkProto::new("p", 30, true).unwrap();
        assert!(proto.push_shape(circle(0, 0, -5)).is_err());
        assert!(proto.push_shape(line(0, 0, 10, 0, -1, false)).is_err());
        assert!(proto.push_shape(poly(&[(0, 0), (10, 0)])).is_err());
        assert!(proto.set_slot(Some(PstkShape::HoleShadow(None))).is_err());
        assert!(proto.grow_shape(0, false, 10).is_err());
        assert!(proto.scale_shape(0, 2.0, 2.0).is_err());
        assert!(proto.shapes().is_empty());
    }

    #[test_case(false, 10, 30; "relative")]
    #[test_case(false, -50, 1; "relative below minimum")]
    #[test_case(true, 5, 5; "absolute")]
    #[test_case(true, -3, 1; "absolute below minimum")]
    fn grow_circle(is_absolute: bool, val: Coord, expected_dia: Coord) {
        let mut shape = circle(0, 0, 20);
        shape.grow(is_absolute, val).unwrap();
        assert_eq!(shape, circle(0, 0, expected_dia));
    }

    #[test]
    fn grow_line() {
        let mut shape = line(0, 0, 100, 0, 20, true);
        shape.grow(false, 4).unwrap();
        assert_eq!(shape, line(0, 0, 100, 0, 24, true));
        shape.grow(true, 8).unwrap();
        assert_eq!(shape, line(0, 0, 100, 0, 8, true));
    }

    #[test_case(&[(0, 0), (10, 0), (10, 10), (0, 10)]; "counterclockwise")]
    #[test_case(&[(0, 0), (0, 10), (10, 10), (10, 0)]; "clockwise")]
    fn grow_polygon_moves_outward(points: &[(Coord, Coord)]) {
        let mut shape = poly(points);
        shape.grow(false, 10).unwrap();
        let PstkShape::Polygon(p) = &shape else { unreachable!() };
        let expected = points
            .iter()
            .map(|&(x, y)| (if x == 0 { -5 } else { 15 }, if y == 0 { -5 } else { 15 }))
            .collect::<Vec<_>>();
        assert_eq!(p.points, expected);
    }

    #[test]
    fn grow_polygon_clears_contour() {
        let mut shape = poly(&[(-10, -40), (-10, 40), (10, 40), (10, -40)]);
        classify(&mut shape, &mut circle(0, 0, 24)).unwrap();
        shape.grow(false, 2).unwrap();
        let PstkShape::Polygon(p) = &shape else { unreachable!() };
        assert!(p.contour().is_none());
    }

    #[test]
    fn absolute_polygon_grow_is_rejected() {
        let mut shape = poly(&[(0, 0), (10, 0), (10, 10), (0, 10)]);
        assert!(shape.grow(true, 10).is_err());
    }

    #[test]
    fn scale_shapes() {
        let mut c = circle(10, 20, 10);
        c.scale(2.0, 4.0).unwrap();
        assert_eq!(c, circle(20, 80, 30));

        let mut l = line(10, 10, 20, -10, 2, false);
        l.scale(0.5, 0.5).unwrap();
        assert_eq!(l, line(5, 5, 10, -5, 1, false));

        let mut tiny = circle(0, 0, 1);
        tiny.scale(0.1, 0.1).unwrap();
        assert_eq!(tiny, circle(0, 0, 1));

        let mut p = poly(&[(0, 0), (10, 0), (10, 10)]);
        classify(&mut p, &mut circle(0, 0, 4)).unwrap();
        p.scale(3.0, -1.0).unwrap();
        let PstkShape::Polygon(p) = &p else { unreachable!() };
        assert_eq!(p.points, vec![(0, 0), (30, 0), (30, -10)]);
        assert!(p.contour().is_none());
    }

    #[test_case(0.0, 1.0; "zero")]
    #[test_case(f64::NAN, 1.0; "nan")]
    #[test_case(1.0, f64::INFINITY; "infinite")]
    fn scale_rejects_invalid_factors(sx: f64, sy: f64) {
        let mut shape = circle(0, 0, 10);
        assert!(shape.scale(sx, sy).is_err());
        assert_eq!(shape, circle(0, 0, 10));
    }

    #[test]
    fn grow_and_scale_invalidate_proto() {
        let mut proto = PstkProto::new("p", 30, true).unwrap();
        proto.push_shape(circle(0, 0, 20)).unwrap();
        proto.update().unwrap();
        assert_eq!(proto.shape_flags(0), Some(flags(true, false, true)));

        proto.grow_shape(0, false, 40).unwrap();
        assert_eq!(proto.shape_flags(0), None);
        proto.update().unwrap();
        assert_eq!(proto.shape_flags(0), Some(flags(true, false, false)));

        proto.scale_shape(0, 0.25, 0.25).unwrap();
        proto.update().unwrap();
        assert_eq!(proto.shape_flags(0), Some(flags(true, false, true)));

        proto.grow(true, 50).unwrap();
        assert_eq!(proto.shape_flags(0), None);
        proto.update().unwrap();
        assert_eq!(proto.shape_flags(0), Some(flags(true, false, false)));
    }
}
