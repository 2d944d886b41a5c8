use crate::math::rect::Rect;

use glam::{DAffine2, DVec2};
use serde::{Deserialize, Serialize};

/// What the resize engine needs from the host's element model.
pub trait ResizableElement {
	/// The bounds of the persisted geometry, without any preview transform. `None` if the element has no geometry.
	fn geometry_bounds(&self) -> Option<Rect>;

	/// Sets the preview transform, replacing any previous preview. Persisted geometry is left untouched.
	fn transform(&mut self, transform: DAffine2);

	/// Bakes the current preview transform into the persisted geometry and clears the preview.
	fn apply_transform(&mut self);

	/// Drops the preview transform.
	fn reset_transform(&mut self);
}

/// A shape described by a list of points, such as a polygon or the anchors of a path.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PointsElement {
	points: Vec<DVec2>,
	preview: Option<DAffine2>,
}

impl PointsElement {
	pub fn new(points: impl IntoIterator<Item = DVec2>) -> Self {
		Self {
			points: points.into_iter().collect(),
			preview: None,
		}
	}

	/// An axis aligned rectangle shape.
	pub fn rectangle(bounds: Rect) -> Self {
		Self::new(crate::side::Side::CORNERS.map(|side| bounds.side_point(side)))
	}

	/// The persisted points.
	pub fn points(&self) -> &[DVec2] {
		&self.points
	}

	pub fn preview(&self) -> Option<DAffine2> {
		self.preview
	}

	/// The points as they are currently displayed, with the preview transform applied.
	pub fn rendered_points(&self) -> Vec<DVec2> {
		let transform = self.preview.unwrap_or(DAffine2::IDENTITY);
		self.points.iter().map(|&point| transform.transform_point2(point)).collect()
	}

	pub fn rendered_bounds(&self) -> Option<Rect> {
		Rect::point_iter(self.rendered_points().into_iter())
	}
}

impl ResizableElement for PointsElement {
	fn geometry_bounds(&self) -> Option<Rect> {
		Rect::point_iter(self.points.iter().copied())
	}

	fn transform(&mut self, transform: DAffine2) {
		self.preview = Some(transform);
	}

	fn apply_transform(&mut self) {
		if let Some(transform) = self.preview.take() {
			self.points.iter_mut().for_each(|point| *point = transform.transform_point2(*point));
		}
	}

	fn reset_transform(&mut self) {
		self.preview = None;
	}
}

#[cfg(test)]
mod test_element {
	use super::*;

	#[test]
	fn preview_leaves_points_untouched() {
		let mut element = PointsElement::rectangle(Rect::from_xywh(0., 0., 10., 20.));
		element.transform(DAffine2::from_scale(DVec2::splat(2.)));
		element.transform(DAffine2::from_scale(DVec2::splat(3.)));

		assert_eq!(element.geometry_bounds(), Some(Rect::from_xywh(0., 0., 10., 20.)));
		assert_eq!(element.rendered_bounds(), Some(Rect::from_xywh(0., 0., 30., 60.)));
	}

	#[test]
	fn apply_bakes_and_clears_preview() {
		let mut element = PointsElement::new([DVec2::ZERO, DVec2::new(4., 2.), DVec2::new(1., 8.)]);
		element.transform(DAffine2::from_translation(DVec2::new(1., 1.)));
		element.apply_transform();

		assert_eq!(element.preview(), None);
		assert_eq!(element.points(), [DVec2::ONE, DVec2::new(5., 3.), DVec2::new(2., 9.)]);
	}

	#[test]
	fn empty_element_has_no_bounds() {
		assert_eq!(PointsElement::default().geometry_bounds(), None);
	}
}
