use crate::consts::MAX_LENGTH_FOR_NO_WIDTH_OR_HEIGHT;
use crate::side::{HorizontalRole, Side, VerticalRole};

use glam::{DAffine2, DVec2};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Copy, PartialEq, Serialize, Deserialize)]
/// An axis aligned rect defined by two vertices, the min and the max corner.
pub struct Rect(pub [DVec2; 2]);

impl Rect {
	/// Create a zero sized rect at the point
	#[must_use]
	pub fn from_point(point: DVec2) -> Self {
		Self([point; 2])
	}

	/// Convert a box defined by two corner points to a rect.
	#[must_use]
	pub fn from_box(bbox: [DVec2; 2]) -> Self {
		Self([bbox[0].min(bbox[1]), bbox[0].max(bbox[1])])
	}

	/// Create a rect from its top left corner and its (possibly negative) size.
	#[must_use]
	pub fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
		let origin = DVec2::new(x, y);
		Self::from_box([origin, origin + DVec2::new(width, height)])
	}

	/// Create a rect from the center and offset (distance from center to middle of an edge)
	#[must_use]
	pub fn from_square(center: DVec2, offset: f64) -> Self {
		Self::from_box([center - offset, center + offset])
	}

	/// Create an AABB from an iter of points, returning None if empty.
	#[must_use]
	pub fn point_iter(points: impl Iterator<Item = DVec2>) -> Option<Self> {
		let mut bounds = None;
		for point in points {
			let bounds = bounds.get_or_insert(Self::from_point(point));
			bounds[0] = bounds[0].min(point);
			bounds[1] = bounds[1].max(point);
		}
		bounds
	}

	#[must_use]
	pub fn x(&self) -> f64 {
		self.min().x
	}

	#[must_use]
	pub fn y(&self) -> f64 {
		self.min().y
	}

	#[must_use]
	pub fn width(&self) -> f64 {
		self.size().x
	}

	#[must_use]
	pub fn height(&self) -> f64 {
		self.size().y
	}

	#[must_use]
	pub fn size(&self) -> DVec2 {
		self.max() - self.min()
	}

	/// A rect with no width or no height (or with non-finite coordinates) cannot be resized.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		let size = self.size();
		!size.is_finite() || size.x <= MAX_LENGTH_FOR_NO_WIDTH_OR_HEIGHT || size.y <= MAX_LENGTH_FOR_NO_WIDTH_OR_HEIGHT
	}

	/// Gets the center of a rect
	#[must_use]
	pub fn center(&self) -> DVec2 {
		self.0.iter().sum::<DVec2>() / 2.
	}

	/// Gets the canonical point of the rect for a side: a corner, an edge midpoint, or the center.
	#[must_use]
	pub fn side_point(&self, side: Side) -> DVec2 {
		let (min, max, center) = (self.min(), self.max(), self.center());
		let (horizontal, vertical) = side.roles();

		let x = match horizontal {
			HorizontalRole::Left => min.x,
			HorizontalRole::Right => max.x,
			HorizontalRole::None => center.x,
		};
		let y = match vertical {
			VerticalRole::Top => min.y,
			VerticalRole::Bottom => max.y,
			VerticalRole::None => center.y,
		};

		DVec2::new(x, y)
	}

	/// Does this rect contain a point, borders included
	#[must_use]
	pub fn contains(&self, p: DVec2) -> bool {
		let (min, max) = (self.min(), self.max());
		(min.x <= p.x && p.x <= max.x) && (min.y <= p.y && p.y <= max.y)
	}

	#[must_use]
	pub fn min(&self) -> DVec2 {
		self.0[0].min(self.0[1])
	}

	#[must_use]
	pub fn max(&self) -> DVec2 {
		self.0[0].max(self.0[1])
	}

	/// The axis aligned bounds of this rect after applying a transform to its four corners.
	#[must_use]
	pub fn transformed(&self, transform: DAffine2) -> Self {
		let corners = Side::CORNERS.map(|side| transform.transform_point2(self.side_point(side)));
		Self::point_iter(corners.into_iter()).unwrap_or_default()
	}
}

impl std::ops::Index<usize> for Rect {
	type Output = DVec2;
	fn index(&self, index: usize) -> &Self::Output {
		&self.0[index]
	}
}
impl std::ops::IndexMut<usize> for Rect {
	fn index_mut(&mut self, index: usize) -> &mut Self::Output {
		&mut self.0[index]
	}
}
