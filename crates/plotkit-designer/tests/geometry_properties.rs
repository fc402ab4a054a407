//! Property tests for the geometry strategies.

use plotkit_designer::model::{ArrowStrategy, MAX_ARROW_LENGTH, STAR_POINTS};
use plotkit_designer::{DragInput, Extent, Geometry, GeometryStrategy, Point, ShapeType};
use proptest::prelude::*;

fn coord() -> impl Strategy<Value = f64> {
    -1.0e4..1.0e4f64
}

fn point() -> impl Strategy<Value = Point> {
    (coord(), coord()).prop_map(|(x, y)| Point::new(x, y))
}

fn generate(shape_type: ShapeType, points: Vec<Point>) -> Geometry {
    let input = DragInput::from_points(points).expect("non-empty input");
    shape_type.generate(&input)
}

proptest! {
    #[test]
    fn arrow_barbs_sit_at_capped_length_and_thirty_degrees(start in point(), end in point()) {
        let d = start.distance_to(&end);
        prop_assume!(d > 1.0);

        let geometry = generate(ShapeType::Arrow, vec![start, end]);
        let v = geometry.vertices();
        prop_assert_eq!(v.len(), 5);
        prop_assert_eq!(v[0], start);
        prop_assert_eq!(v[1], end);
        prop_assert_eq!(v[3], end);

        let expected = (d / 5.0).min(MAX_ARROW_LENGTH);
        let back = (start.x - end.x, start.y - end.y);
        for barb in [v[2], v[4]] {
            let len = barb.distance_to(&end);
            prop_assert!((len - expected).abs() < 1e-9 * d.max(1.0));
            let cos = ((barb.x - end.x) * back.0 + (barb.y - end.y) * back.1) / (len * d);
            // asin loses precision near vertical shafts.
            prop_assert!((cos - (std::f64::consts::PI / 6.0).cos()).abs() < 1e-6);
        }
    }

    #[test]
    fn arrow_left_barb_is_clockwise_of_back_bearing(start in point(), end in point()) {
        prop_assume!(start.distance_to(&end) > 1.0);
        let v = ArrowStrategy::generate_points(start, end);
        let back = (start.x - end.x, start.y - end.y);
        let left = (v[2].x - end.x, v[2].y - end.y);
        // Cross product of back x left is negative for a clockwise turn.
        prop_assert!(back.0 * left.1 - back.1 * left.0 < 0.0);
    }

    #[test]
    fn ellipse_spans_its_box(start in point(), end in point()) {
        let geometry = generate(ShapeType::Ellipse, vec![start, end]);
        prop_assert_eq!(geometry.vertex_count(), 101);

        let extent = geometry.extent().expect("ellipse has points");
        let center = start.midpoint(&end);
        let tol = 1e-9 * (1.0 + start.x.abs() + end.x.abs() + start.y.abs() + end.y.abs());
        prop_assert!((extent.width() - (end.x - start.x).abs()).abs() < tol);
        prop_assert!((extent.height() - (end.y - start.y).abs()).abs() < tol);
        prop_assert!(extent.center().distance_to(&center) < tol);

        // Centroid of the ring without its closing duplicate.
        let ring = &geometry.vertices()[..100];
        let cx = ring.iter().map(|p| p.x).sum::<f64>() / 100.0;
        let cy = ring.iter().map(|p| p.y).sum::<f64>() / 100.0;
        prop_assert!(Point::new(cx, cy).distance_to(&center) < tol);
    }

    #[test]
    fn rectangle_is_idempotent(points in prop::collection::vec(point(), 1..12)) {
        let first = generate(ShapeType::Rectangle, points);
        let again = generate(ShapeType::Rectangle, first.vertices().to_vec());
        prop_assert_eq!(first.vertices(), again.vertices());

        let v = first.vertices();
        prop_assert_eq!(v.len(), 4);
        prop_assert!(v[0].x <= v[1].x && v[0].y >= v[3].y);
    }

    #[test]
    fn star_alternates_radii(center in point(), edge in point()) {
        let radius = center.distance_to(&edge);
        let geometry = generate(ShapeType::Star, vec![center, edge]);
        let v = geometry.vertices();
        prop_assert_eq!(v.len(), STAR_POINTS + 1);
        prop_assert_eq!(v[0], v[STAR_POINTS]);

        let tol = 1e-9 * (1.0 + radius);
        for (i, p) in v.iter().take(STAR_POINTS).enumerate() {
            let expected = if i % 2 == 0 { radius } else { radius / 2.0 };
            prop_assert!((p.distance_to(&center) - expected).abs() < tol);
        }
        prop_assert!(v[6].distance_to(&edge) < tol);
    }

    #[test]
    fn free_line_is_identity(points in prop::collection::vec(point(), 1..40)) {
        let geometry = generate(ShapeType::FreeLine, points.clone());
        prop_assert_eq!(geometry.vertices(), points.as_slice());
    }

    #[test]
    fn every_strategy_is_finite(start in point(), end in point()) {
        for shape_type in ShapeType::ALL {
            let geometry = generate(shape_type, vec![start, end]);
            prop_assert!(geometry.vertices().iter().all(|p| p.x.is_finite() && p.y.is_finite()));
            prop_assert!(geometry.extent().is_some());
        }
    }
}

#[test]
fn arrow_end_to_end_horizontal() {
    let geometry = generate(
        ShapeType::Arrow,
        vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)],
    );
    let v = geometry.vertices();
    let dx = 2.0 * (std::f64::consts::PI / 6.0).cos();
    assert_eq!(&v[..2], &[Point::new(0.0, 0.0), Point::new(10.0, 0.0)]);
    assert!(v[2].distance_to(&Point::new(10.0 - dx, 1.0)) < 1e-9);
    assert_eq!(v[3], Point::new(10.0, 0.0));
    assert!(v[4].distance_to(&Point::new(10.0 - dx, -1.0)) < 1e-9);
}

#[test]
fn degenerate_drags_collapse_to_a_point() {
    let p = Point::new(3.0, -4.0);
    for shape_type in [ShapeType::Arrow, ShapeType::Star, ShapeType::Ellipse] {
        let geometry = generate(shape_type, vec![p, p]);
        let extent = geometry.extent().expect("points");
        assert_eq!(extent, Extent::new(3.0, -4.0, 3.0, -4.0), "{shape_type}");
    }
}
