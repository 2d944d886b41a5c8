use crate::handles::{HandleCategories, active_sides};
use crate::hit_test::hit_test;
use crate::math::rect::Rect;
use crate::side::Side;

use glam::{DAffine2, DVec2};
use serde::{Deserialize, Serialize};

/// The painting primitive the host provides for drawing annotations, in viewport space.
pub trait PaintContext {
	/// Draws a square marker centered at `position`. Colors fall back to the host's defaults when `None`.
	fn square(&mut self, position: DVec2, size: f64, color_fill: Option<&str>, color_stroke: Option<&str>);
}

/// A resize handle marker ready to be painted.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HandleAnnotation {
	/// Center of the marker in viewport space
	pub position: DVec2,
	pub size: f64,
	pub side: Side,
}

impl HandleAnnotation {
	pub fn paint(&self, context: &mut dyn PaintContext) {
		context.square(self.position, self.size, None, None);
	}
}

/// The handle grabbed by a pointer-down: which side, and where that handle was in box space when the drag began.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResizeHandlePart {
	pub side: Side,
	pub point: DVec2,
}

/// A draggable part of an element editor.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum EditorPart {
	ResizeHandle(ResizeHandlePart),
}

/// One square marker for each active handle, positioned in viewport space.
pub fn parts_to_paint(bounds: Option<Rect>, categories: HandleCategories, to_viewport: DAffine2, size: f64) -> impl Iterator<Item = HandleAnnotation> {
	active_sides(bounds, categories).map(move |(point, side)| HandleAnnotation {
		position: to_viewport.transform_point2(point),
		size,
		side,
	})
}

/// The resize handle part under `location`, if any. `half_size` is the click target size from the editor options.
pub fn part_at(bounds: Option<Rect>, categories: HandleCategories, to_viewport: DAffine2, location: DVec2, half_size: f64) -> Option<EditorPart> {
	hit_test(bounds, categories, to_viewport, location, half_size).map(|(side, point)| EditorPart::ResizeHandle(ResizeHandlePart { side, point }))
}
