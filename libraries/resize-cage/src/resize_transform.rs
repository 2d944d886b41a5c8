//! Turns a single handle drag into the scale transform that resizes the dragged box.
//!
//! Every call starts from the box captured when the drag began, so repeated pointer moves never compound.

use crate::consts::MAX_LENGTH_FOR_NO_WIDTH_OR_HEIGHT;
use crate::error::ResizeError;
use crate::math::rect::Rect;
use crate::side::{HorizontalRole, Side, VerticalRole};

use glam::{DAffine2, DVec2};
use serde::{Deserialize, Serialize};

/// The modifier keys that change how a handle drag resizes the box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResizeModifiers {
	/// Keep the box proportional (usually Shift)
	pub lock_ratio: bool,
	/// Grow or shrink symmetrically about the box center (usually Alt/Option)
	pub center: bool,
}

impl ResizeModifiers {
	pub fn new(lock_ratio: bool, center: bool) -> Self {
		Self { lock_ratio, center }
	}
}

/// The result of a resize: a diagonal scale about `pivot`, after which the pivot lands on `target`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResizeTransform {
	pub scale: DVec2,
	/// Offset of the box origin caused by dragging a left or top handle
	pub translation: DVec2,
	pub pivot: DVec2,
	pub target: DVec2,
}

impl Default for ResizeTransform {
	fn default() -> Self {
		Self::IDENTITY
	}
}

impl ResizeTransform {
	pub const IDENTITY: Self = Self {
		scale: DVec2::ONE,
		translation: DVec2::ZERO,
		pivot: DVec2::ZERO,
		target: DVec2::ZERO,
	};

	/// Composes translate(-pivot), then scale, then translate(target).
	pub fn to_affine(&self) -> DAffine2 {
		DAffine2::from_translation(self.target) * DAffine2::from_scale(self.scale) * DAffine2::from_translation(-self.pivot)
	}

	/// The bounds the original box occupies once this transform is applied.
	pub fn resized_bounds(&self, original: Rect) -> Rect {
		original.transformed(self.to_affine())
	}
}

/// How a handle moves one axis of the box. Near is the left or top edge, far is the right or bottom edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AxisRole {
	Near,
	Far,
	Fixed,
}

impl From<HorizontalRole> for AxisRole {
	fn from(role: HorizontalRole) -> Self {
		match role {
			HorizontalRole::Left => AxisRole::Near,
			HorizontalRole::Right => AxisRole::Far,
			HorizontalRole::None => AxisRole::Fixed,
		}
	}
}

impl From<VerticalRole> for AxisRole {
	fn from(role: VerticalRole) -> Self {
		match role {
			VerticalRole::Top => AxisRole::Near,
			VerticalRole::Bottom => AxisRole::Far,
			VerticalRole::None => AxisRole::Fixed,
		}
	}
}

fn is_degenerate(extent: f64) -> bool {
	extent <= MAX_LENGTH_FOR_NO_WIDTH_OR_HEIGHT
}

/// Computes the (scale, translation) of one axis from the anchor and the new pointer coordinate on that axis.
fn resize_axis(extent: f64, anchor: f64, position: f64, role: AxisRole, center: bool) -> (f64, f64) {
	if is_degenerate(extent) {
		return (1., 0.);
	}

	let (mut scale, translation) = match role {
		AxisRole::Near => {
			let delta = anchor - position;
			((extent + delta) / extent, -delta)
		}
		AxisRole::Far => {
			let delta = position - anchor;
			((extent + delta) / extent, 0.)
		}
		AxisRole::Fixed => return (1., 0.),
	};

	// Mirror the delta onto the opposite edge
	if center {
		scale += scale - 1.;
	}

	(scale, translation)
}

/// The coordinate that stays put on an axis when resizing with a locked ratio.
fn opposite_coordinate(min: f64, extent: f64, role: AxisRole) -> f64 {
	match role {
		AxisRole::Near => min + extent,
		AxisRole::Far => min,
		AxisRole::Fixed => min + extent / 2.,
	}
}

/// Computes the transform that resizes `bounds` when the handle at `side`, which started at `anchor`, is dragged to `position`.
///
/// `position` must already be in the same space as `bounds` and passed through any snapping.
/// Negative scale factors are returned as-is: dragging a handle past the opposite side flips the box.
pub fn calculate(bounds: Rect, side: Side, anchor: DVec2, position: DVec2, modifiers: ResizeModifiers) -> Result<ResizeTransform, ResizeError> {
	if !side.is_handle() {
		return Err(ResizeError::NotAHandle(side));
	}
	if !anchor.is_finite() || !position.is_finite() || !bounds.min().is_finite() || !bounds.max().is_finite() {
		return Err(ResizeError::NonFinitePosition);
	}

	let (horizontal, vertical) = side.roles();
	let (horizontal, vertical) = (AxisRole::from(horizontal), AxisRole::from(vertical));
	let (width, height) = (bounds.width(), bounds.height());

	let (mut sx, tx) = resize_axis(width, anchor.x, position.x, horizontal, modifiers.center);
	let (mut sy, ty) = resize_axis(height, anchor.y, position.y, vertical, modifiers.center);
	let translation = DVec2::new(tx, ty);

	let (mut pivot, mut target) = if modifiers.center {
		(bounds.center(), bounds.center())
	} else {
		(bounds.min(), bounds.min() + translation)
	};

	if modifiers.lock_ratio {
		match (horizontal, vertical) {
			(AxisRole::Fixed, AxisRole::Fixed) => {}
			// Vertical drag drives the horizontal scale
			(AxisRole::Fixed, _) => sx = sy.abs(),
			// Horizontal drag drives the vertical scale
			(_, AxisRole::Fixed) => sy = sx.abs(),
			// Corner drag: grow the shorter extent to match the longer one, keeping flips
			_ if !is_degenerate(width) && !is_degenerate(height) => {
				let new_width = (width * sx).abs();
				let new_height = (height * sy).abs();
				if new_width > new_height {
					sy = sy.signum() * new_width / height;
				} else {
					sx = sx.signum() * new_height / width;
				}
			}
			_ => {}
		}

		if !modifiers.center {
			let min = bounds.min();
			pivot = DVec2::new(opposite_coordinate(min.x, width, horizontal), opposite_coordinate(min.y, height, vertical));
			target = pivot;
		}
	}

	Ok(ResizeTransform {
		scale: DVec2::new(sx, sy),
		translation,
		pivot,
		target,
	})
}
