use glam::{DAffine2, DVec2};
use pretty_assertions::assert_eq;
use resize_cage::{EditorPart, GridGuides, HandleCategories, MouseCursorIcon, NoGuides, PointsElement, Rect, ResizableElement, ResizeModifiers, ShapeEditor, Side};

const EPSILON: f64 = 1e-9;

fn init_logger() {
	let _ = env_logger::builder().is_test(true).try_init();
}

/// A document zoomed in 2x and panned by (40, 20), as seen through the viewport.
fn document_to_viewport() -> DAffine2 {
	DAffine2::from_scale_angle_translation(DVec2::splat(2.), 0., DVec2::new(40., 20.))
}

fn selected_editor(bounds: Rect) -> ShapeEditor<PointsElement> {
	let mut editor = ShapeEditor::new(PointsElement::rectangle(bounds), HandleCategories::ALL);
	editor.set_selected(true);
	editor
}

fn assert_bounds(actual: Option<Rect>, expected: Rect) {
	let actual = actual.expect("Element should have bounds");
	assert!(
		actual.min().abs_diff_eq(expected.min(), EPSILON) && actual.max().abs_diff_eq(expected.max(), EPSILON),
		"Expected {expected:?}, got {actual:?}"
	);
}

#[test]
fn drag_bottom_right_through_zoomed_view() {
	init_logger();
	let mut editor = selected_editor(Rect::from_xywh(0., 0., 100., 50.));
	let to_viewport = document_to_viewport();
	let to_document = to_viewport.inverse();

	// The bottom right handle sits at (240, 120) in the viewport
	let part = editor.hit_test_part(DVec2::new(241., 119.), to_viewport, 0.).expect("Bottom right handle should be hit");
	let EditorPart::ResizeHandle(handle) = part;
	assert_eq!(handle.side, Side::BottomRight);
	assert_eq!(editor.cursor_at(DVec2::new(241., 119.), to_viewport, 0.), MouseCursorIcon::NWSEResize);

	assert!(editor.begin_part_move(&part));
	for x in [260., 300., 340.] {
		editor.move_part(&part, DVec2::new(x, 120.), to_document, &mut NoGuides, ResizeModifiers::default());
	}
	assert_bounds(editor.element().geometry_bounds(), Rect::from_xywh(0., 0., 100., 50.));
	assert_bounds(editor.element().rendered_bounds(), Rect::from_xywh(0., 0., 150., 50.));

	let committed = editor.apply_part_move(&part).expect("A move happened");
	assert!(committed.abs_diff_eq(DAffine2::from_scale(DVec2::new(1.5, 1.)), EPSILON));
	assert_bounds(editor.element().geometry_bounds(), Rect::from_xywh(0., 0., 150., 50.));
	assert_eq!(editor.element().preview(), None);
}

#[test]
fn centered_ratio_locked_drag_with_snapping() {
	init_logger();
	let mut editor = selected_editor(Rect::from_xywh(-50., -25., 100., 50.));
	let to_viewport = document_to_viewport();
	let to_document = to_viewport.inverse();

	let top_center = to_viewport.transform_point2(DVec2::new(0., -25.));
	let part = editor.hit_test_part(top_center, to_viewport, 0.).expect("Top center handle should be hit");

	// 6 viewport pixels up is 3 document units, which the 5 unit grid snaps to 5
	let mut guides = GridGuides::new(DVec2::ZERO, DVec2::splat(5.));
	let modifiers = ResizeModifiers { lock_ratio: true, center: true };
	editor.move_part(&part, top_center - DVec2::new(0., 6.), to_document, &mut guides, modifiers);
	editor.apply_part_move(&part);

	// Height grows by 2 * 5 about the center and the width follows by the same factor
	let scale = 60. / 50.;
	assert_bounds(editor.element().geometry_bounds(), Rect::from_xywh(-50. * scale, -30., 100. * scale, 60.));
}

#[test]
fn escape_mid_drag_restores_the_shape() {
	init_logger();
	let original = PointsElement::new([DVec2::new(10., 10.), DVec2::new(60., 30.), DVec2::new(20., 80.)]);
	let mut editor = ShapeEditor::new(original.clone(), HandleCategories::CORNERS);
	editor.set_highlighted(true);

	let part = editor.hit_test_part(DVec2::new(10., 10.), DAffine2::IDENTITY, 0.).expect("Top left handle should be hit");
	editor.move_part(&part, DVec2::new(-90., -40.), DAffine2::IDENTITY, &mut NoGuides, ResizeModifiers::default());
	assert!(editor.element().preview().is_some());

	editor.cancel_part_move();
	assert_eq!(editor.into_element(), original);
}

#[test]
fn edge_handles_are_ignored_when_only_corners_are_offered() {
	let mut editor = selected_editor(Rect::from_xywh(0., 0., 100., 50.));
	editor.flags.resize = HandleCategories::CORNERS;

	assert_eq!(editor.hit_test_part(DVec2::new(50., 0.), DAffine2::IDENTITY, 0.), None);
	assert!(editor.hit_test_part(DVec2::new(100., 0.), DAffine2::IDENTITY, 0.).is_some());
}

#[test]
fn flat_shape_offers_no_handles() {
	let mut editor = ShapeEditor::new(PointsElement::new([DVec2::new(0., 10.), DVec2::new(100., 10.)]), HandleCategories::ALL);
	editor.set_selected(true);

	assert_eq!(editor.hit_test_part(DVec2::new(0., 10.), DAffine2::IDENTITY, 20.), None);
}
