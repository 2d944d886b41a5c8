use crate::math::rect::Rect;
use crate::side::Side;

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Which kinds of resize handles an editor offers. Both may be enabled at once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HandleCategories {
	/// The four corner handles
	pub corners: bool,
	/// The four edge-midpoint handles
	pub edges: bool,
}

impl HandleCategories {
	pub const NONE: Self = Self { corners: false, edges: false };
	pub const CORNERS: Self = Self { corners: true, edges: false };
	pub const EDGES: Self = Self { corners: false, edges: true };
	pub const ALL: Self = Self { corners: true, edges: true };

	pub fn any(&self) -> bool {
		self.corners || self.edges
	}

	/// Whether handles of this side's kind are enabled.
	pub fn allows(&self, side: Side) -> bool {
		(self.corners && side.is_corner()) || (self.edges && side.is_edge())
	}
}

/// Lists the active resize handles of a box as `(point, side)` pairs, corners first and then edge midpoints.
///
/// The order is fixed so painting and hit testing always agree on which handle is which.
/// An absent or empty box yields nothing.
pub fn active_sides(bounds: Option<Rect>, categories: HandleCategories) -> impl Iterator<Item = (DVec2, Side)> + Clone {
	let bounds = bounds.filter(|bounds| !bounds.is_empty());

	let corners = Side::CORNERS.into_iter().filter(move |_| categories.corners);
	let edges = Side::EDGES.into_iter().filter(move |_| categories.edges);

	bounds
		.into_iter()
		.flat_map(move |bounds| corners.clone().chain(edges.clone()).map(move |side| (bounds.side_point(side), side)))
}
