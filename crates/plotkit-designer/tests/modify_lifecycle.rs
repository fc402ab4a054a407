//! Modify session lifecycle against the in-memory canvas.

use plotkit_designer::{
    Canvas, DrawingSurface, Feature, FeatureId, Geometry, ModifyCommand, ModifyController,
    ModifyOutcome, OverlayStyle, Point, ShapeDefaults, ShapeFactory, ShapeType,
};

const TOL: f64 = 0.5;

fn draw(canvas: &mut Canvas, shape_type: ShapeType, points: &[Point]) -> FeatureId {
    let mut session = ShapeFactory::new(shape_type).begin_draw(points[0]);
    for p in &points[1..] {
        session.update(*p);
    }
    let shape = session.finish(&ShapeDefaults::default());
    let id = shape.id();
    canvas.add_feature(Feature::Shape(shape));
    id
}

fn active(
    canvas: &mut Canvas,
    shape_type: ShapeType,
    points: &[Point],
) -> (FeatureId, ModifyController) {
    let id = draw(canvas, shape_type, points);
    let mut controller = ModifyController::new(id, OverlayStyle::default());
    assert!(controller.activate(canvas));
    (id, controller)
}

fn handle_position(canvas: &Canvas, id: FeatureId) -> Point {
    canvas
        .feature(id)
        .and_then(Feature::as_handle)
        .map(|h| h.position)
        .expect("handle on canvas")
}

/// Drags from `from` to `to` and forwards every event to the controller.
fn drag(
    canvas: &mut Canvas,
    controller: &mut ModifyController,
    from: Point,
    to: Point,
) -> ModifyOutcome {
    canvas.pointer_down(from, TOL).expect("drag should start");
    let mut outcome = ModifyOutcome::Unchanged;
    let mid = from.midpoint(&to);
    for p in [mid, to] {
        let event = canvas.pointer_move(p).expect("translate event");
        outcome = controller.apply(ModifyCommand::Translating(event), canvas);
    }
    let interaction = canvas.pointer_up().expect("drag in progress");
    controller.apply(ModifyCommand::TranslateEnded(interaction), canvas);
    outcome
}

fn assert_near(actual: Point, expected: Point) {
    assert!(
        actual.distance_to(&expected) < 1e-6,
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}

fn sample_points(shape_type: ShapeType) -> Vec<Point> {
    match shape_type {
        ShapeType::FreeLine => vec![
            Point::new(0.0, 0.0),
            Point::new(5.0, 10.0),
            Point::new(10.0, 0.0),
        ],
        ShapeType::Marker => vec![Point::new(100.0, 100.0)],
        _ => vec![Point::new(0.0, 0.0), Point::new(10.0, 10.0)],
    }
}

#[test]
fn test_activate_then_deactivate_leaves_only_the_shape() {
    for shape_type in ShapeType::ALL {
        let mut canvas = Canvas::new();
        let (id, mut controller) = active(&mut canvas, shape_type, &sample_points(shape_type));
        let before = canvas.shape(id).cloned();

        assert_eq!(canvas.feature_count(), 4, "{shape_type}");
        assert_eq!(canvas.interaction_count(), 2, "{shape_type}");

        controller.deactivate(&mut canvas);
        assert!(!controller.is_active());
        assert_eq!(canvas.feature_count(), 1, "{shape_type}");
        assert_eq!(canvas.interaction_count(), 0, "{shape_type}");
        assert_eq!(canvas.shape(id).cloned(), before, "{shape_type}");
    }
}

#[test]
fn test_delete_then_deactivate_is_safe() {
    let mut canvas = Canvas::new();
    let (id, mut controller) = active(
        &mut canvas,
        ShapeType::Star,
        &sample_points(ShapeType::Star),
    );

    let outcome = controller.apply(ModifyCommand::DeleteRequested, &mut canvas);
    assert!(outcome.is_removed());
    assert_eq!(canvas.feature_count(), 0);
    assert_eq!(canvas.interaction_count(), 0);

    controller.deactivate(&mut canvas);
    assert_eq!(
        controller.apply(ModifyCommand::DeleteRequested, &mut canvas),
        ModifyOutcome::Unchanged
    );
    assert!(!controller.activate(&mut canvas));
    assert!(canvas.shape(id).is_none());
}

#[test]
fn test_handle_positions_per_type() {
    let mut canvas = Canvas::new();

    let (_, arrow) = active(
        &mut canvas,
        ShapeType::Arrow,
        &[Point::new(0.0, 0.0), Point::new(10.0, 0.0)],
    );
    let session = arrow.session().copied().unwrap();
    assert_eq!(handle_position(&canvas, session.handles.delete), Point::new(0.0, 0.0));
    assert_eq!(handle_position(&canvas, session.handles.scale), Point::new(10.0, 0.0));

    let (_, star) = active(
        &mut canvas,
        ShapeType::Star,
        &[Point::new(50.0, 50.0), Point::new(50.0, 58.0)],
    );
    let session = star.session().copied().unwrap();
    assert_near(handle_position(&canvas, session.handles.delete), Point::new(50.0, 42.0));
    assert_near(handle_position(&canvas, session.handles.scale), Point::new(50.0, 58.0));

    let (_, ellipse) = active(
        &mut canvas,
        ShapeType::Ellipse,
        &[Point::new(20.0, 20.0), Point::new(30.0, 26.0)],
    );
    let session = ellipse.session().copied().unwrap();
    assert_near(handle_position(&canvas, session.handles.delete), Point::new(20.0, 26.0));
    assert_near(handle_position(&canvas, session.handles.scale), Point::new(30.0, 20.0));
}

#[test]
fn test_marker_frame_follows_icon_pixels() {
    let mut canvas = Canvas::new();
    let (id, marker) = active(&mut canvas, ShapeType::Marker, &[Point::new(100.0, 100.0)]);
    let session = marker.session().copied().unwrap();

    let frame = canvas.feature(session.handles.frame).and_then(Feature::as_frame).unwrap();
    assert_eq!(frame.ring()[0], Point::new(84.0, 116.0));
    assert_eq!(frame.ring()[2], Point::new(116.0, 84.0));
    assert_eq!(handle_position(&canvas, session.handles.delete), Point::new(84.0, 116.0));
    assert_eq!(handle_position(&canvas, session.handles.scale), Point::new(116.0, 84.0));

    // Twice the zoom halves the map footprint of the same pixel box.
    let mut zoomed = Canvas::new();
    zoomed.viewport_mut().set_zoom(2.0);
    let marker = canvas.shape(id).cloned().unwrap();
    let anchor = marker.geometry().vertex(0).unwrap();
    let extent = zoomed.icon_extent(anchor, marker.icon.as_ref().unwrap());
    assert!((extent.width() - 16.0).abs() < 1e-9);
    assert_near(extent.center(), anchor);
}

#[test]
fn test_group_translate_moves_shape_and_overlay() {
    let mut canvas = Canvas::new();
    let (id, mut controller) = active(
        &mut canvas,
        ShapeType::Rectangle,
        &[Point::new(0.0, 0.0), Point::new(10.0, 10.0)],
    );
    let session = controller.session().copied().unwrap();

    let outcome = drag(&mut canvas, &mut controller, Point::new(5.0, 5.0), Point::new(8.0, 9.0));
    assert_eq!(outcome, ModifyOutcome::Updated);

    let extent = canvas.shape(id).unwrap().extent().unwrap();
    assert_near(extent.top_left(), Point::new(3.0, 14.0));
    assert_near(extent.bottom_right(), Point::new(13.0, 4.0));
    assert_near(handle_position(&canvas, session.handles.delete), Point::new(3.0, 14.0));
    assert_near(handle_position(&canvas, session.handles.scale), Point::new(13.0, 4.0));
    let frame = canvas.feature(session.handles.frame).and_then(Feature::as_frame).unwrap();
    assert_near(frame.extent.top_left(), Point::new(3.0, 14.0));
}

#[test]
fn test_drag_on_delete_handle_does_not_translate() {
    let mut canvas = Canvas::new();
    let (id, _controller) = active(
        &mut canvas,
        ShapeType::Rectangle,
        &[Point::new(0.0, 0.0), Point::new(10.0, 10.0)],
    );
    let before = canvas.shape(id).cloned();

    assert!(canvas.pointer_down(Point::new(0.0, 10.0), TOL).is_none());
    assert!(canvas.pointer_move(Point::new(4.0, 4.0)).is_none());
    assert_eq!(canvas.shape(id).cloned(), before);
}

#[test]
fn test_rectangle_scale_keeps_top_left() {
    let mut canvas = Canvas::new();
    let (id, mut controller) = active(
        &mut canvas,
        ShapeType::Rectangle,
        &[Point::new(0.0, 0.0), Point::new(10.0, 10.0)],
    );
    let session = controller.session().copied().unwrap();

    let outcome = drag(&mut canvas, &mut controller, Point::new(10.0, 0.0), Point::new(20.0, -5.0));
    assert_eq!(outcome, ModifyOutcome::Updated);

    let extent = canvas.shape(id).unwrap().extent().unwrap();
    assert_eq!(extent.top_left(), Point::new(0.0, 10.0));
    assert_eq!(extent.bottom_right(), Point::new(20.0, -5.0));
    assert_eq!(handle_position(&canvas, session.handles.delete), Point::new(0.0, 10.0));
    assert_eq!(handle_position(&canvas, session.handles.scale), Point::new(20.0, -5.0));
}

#[test]
fn test_ellipse_scale_regenerates_ring() {
    let mut canvas = Canvas::new();
    let (id, mut controller) = active(
        &mut canvas,
        ShapeType::Ellipse,
        &[Point::new(0.0, 0.0), Point::new(10.0, 10.0)],
    );

    drag(&mut canvas, &mut controller, Point::new(10.0, 0.0), Point::new(20.0, -10.0));

    let shape = canvas.shape(id).unwrap();
    assert_eq!(shape.geometry().vertex_count(), 101);
    let extent = shape.extent().unwrap();
    assert!((extent.width() - 20.0).abs() < 1e-6);
    assert!((extent.height() - 20.0).abs() < 1e-6);
    assert_near(extent.center(), Point::new(10.0, 0.0));
}

#[test]
fn test_arrow_scale_keeps_first_vertex() {
    let mut canvas = Canvas::new();
    let (id, mut controller) = active(
        &mut canvas,
        ShapeType::Arrow,
        &[Point::new(0.0, 0.0), Point::new(10.0, 0.0)],
    );

    drag(&mut canvas, &mut controller, Point::new(10.0, 0.0), Point::new(0.0, 20.0));

    let geometry = canvas.shape(id).unwrap().geometry().clone();
    assert_eq!(geometry.vertex(0), Some(Point::new(0.0, 0.0)));
    assert_eq!(geometry.vertex(1), Some(Point::new(0.0, 20.0)));
    assert_eq!(geometry.vertex_count(), 5);
}

#[test]
fn test_star_scale_keeps_center() {
    let mut canvas = Canvas::new();
    let (id, mut controller) = active(
        &mut canvas,
        ShapeType::Star,
        &[Point::new(0.0, 0.0), Point::new(0.0, 8.0)],
    );
    let session = controller.session().copied().unwrap();

    drag(&mut canvas, &mut controller, Point::new(0.0, 8.0), Point::new(0.0, 16.0));

    let shape = canvas.shape(id).unwrap();
    assert_near(shape.extent().unwrap().center(), Point::new(0.0, 0.0));
    assert_near(shape.geometry().vertex(6).unwrap(), Point::new(0.0, 16.0));
    assert_near(handle_position(&canvas, session.handles.delete), Point::new(0.0, -16.0));
    assert_near(handle_position(&canvas, session.handles.scale), Point::new(0.0, 16.0));
}

#[test]
fn test_free_line_scales_about_top_left() {
    let mut canvas = Canvas::new();
    let (id, mut controller) = active(
        &mut canvas,
        ShapeType::FreeLine,
        &sample_points(ShapeType::FreeLine),
    );

    drag(&mut canvas, &mut controller, Point::new(10.0, 0.0), Point::new(20.0, -10.0));

    let geometry = canvas.shape(id).unwrap().geometry().clone();
    assert!(matches!(geometry, Geometry::LineString(_)));
    let expected = [Point::new(0.0, -10.0), Point::new(10.0, 10.0), Point::new(20.0, -10.0)];
    assert_eq!(geometry.vertex_count(), expected.len());
    for (actual, expected) in geometry.vertices().iter().zip(expected) {
        assert_near(*actual, expected);
    }
}

#[test]
fn test_free_line_recovers_after_collapsing_to_the_edge() {
    let mut canvas = Canvas::new();
    let points = sample_points(ShapeType::FreeLine);
    let (id, mut controller) = active(&mut canvas, ShapeType::FreeLine, &points);

    let interaction = canvas.pointer_down(Point::new(10.0, 0.0), TOL).unwrap();
    let width = |canvas: &Canvas| canvas.shape(id).unwrap().extent().unwrap().width();

    let event = canvas.pointer_move(Point::new(0.0, 0.0)).unwrap();
    controller.apply(ModifyCommand::Translating(event), &mut canvas);
    assert!(width(&canvas).abs() < 1e-9);

    let event = canvas.pointer_move(Point::new(20.0, 0.0)).unwrap();
    assert_eq!(
        controller.apply(ModifyCommand::Translating(event), &mut canvas),
        ModifyOutcome::Updated
    );
    assert!((width(&canvas) - 20.0).abs() < 1e-9);
    let expected = [Point::new(0.0, 0.0), Point::new(10.0, 10.0), Point::new(20.0, 0.0)];
    let geometry = canvas.shape(id).unwrap().geometry().clone();
    for (actual, expected) in geometry.vertices().iter().zip(expected) {
        assert_near(*actual, expected);
    }

    assert_eq!(canvas.pointer_up(), Some(interaction));
    controller.apply(ModifyCommand::TranslateEnded(interaction), &mut canvas);

    // A new gesture starts from the current geometry.
    drag(&mut canvas, &mut controller, Point::new(20.0, 0.0), Point::new(10.0, 5.0));
    let extent = canvas.shape(id).unwrap().extent().unwrap();
    assert_near(extent.top_left(), Point::new(0.0, 10.0));
    assert_near(extent.bottom_right(), Point::new(10.0, 5.0));
}

#[test]
fn test_rectangle_scale_past_the_anchor_keeps_the_anchor() {
    let mut canvas = Canvas::new();
    let (id, mut controller) = active(
        &mut canvas,
        ShapeType::Rectangle,
        &[Point::new(0.0, 0.0), Point::new(10.0, 10.0)],
    );

    canvas.pointer_down(Point::new(10.0, 0.0), TOL).unwrap();
    for p in [Point::new(-5.0, 0.0), Point::new(20.0, -5.0)] {
        let event = canvas.pointer_move(p).unwrap();
        controller.apply(ModifyCommand::Translating(event), &mut canvas);
    }

    let extent = canvas.shape(id).unwrap().extent().unwrap();
    assert_eq!(extent.top_left(), Point::new(0.0, 10.0));
    assert_eq!(extent.bottom_right(), Point::new(20.0, -5.0));
}

#[test]
fn test_marker_scale_uses_pixel_distance() {
    let mut canvas = Canvas::new();
    let (id, mut controller) = active(&mut canvas, ShapeType::Marker, &[Point::new(100.0, 100.0)]);
    let session = controller.session().copied().unwrap();

    drag(&mut canvas, &mut controller, Point::new(116.0, 84.0), Point::new(140.0, 100.0));

    let shape = canvas.shape(id).unwrap();
    assert_eq!(shape.geometry(), &Geometry::Point(Point::new(100.0, 100.0)));

    // d = 40px, half box = sqrt(d^2 / 2), scale = 2 * half box / 32.
    let half = (40.0f64 * 40.0 / 2.0).sqrt();
    let scale = shape.icon.as_ref().unwrap().scale;
    assert!((scale - 2.0 * half / 32.0).abs() < 1e-9);

    // The scale handle snaps to the frame corner instead of the cursor.
    assert_near(
        handle_position(&canvas, session.handles.scale),
        Point::new(100.0 + half, 100.0 - half),
    );
    assert_near(
        handle_position(&canvas, session.handles.delete),
        Point::new(100.0 - half, 100.0 + half),
    );
}

#[test]
fn test_events_after_deactivate_are_ignored() {
    let mut canvas = Canvas::new();
    let (id, mut controller) = active(
        &mut canvas,
        ShapeType::Rectangle,
        &[Point::new(0.0, 0.0), Point::new(10.0, 10.0)],
    );

    canvas.pointer_down(Point::new(10.0, 0.0), TOL).unwrap();
    let event = canvas.pointer_move(Point::new(12.0, -2.0)).unwrap();
    controller.deactivate(&mut canvas);

    let before = canvas.shape(id).cloned();
    assert_eq!(
        controller.apply(ModifyCommand::Translating(event), &mut canvas),
        ModifyOutcome::Unchanged
    );
    assert!(canvas.pointer_move(Point::new(15.0, -5.0)).is_none());
    assert_eq!(canvas.shape(id).cloned(), before);
    assert_eq!(canvas.feature_count(), 1);
}
