use glam::DVec2;
use serde::{Deserialize, Serialize};

/// The snapping facility every pointer move is passed through before a resize is calculated.
pub trait Guides {
	/// Returns the point, possibly adjusted to a snap target.
	fn map_point(&mut self, point: DVec2) -> DVec2;
}

/// Guides that never snap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoGuides;

impl Guides for NoGuides {
	fn map_point(&mut self, point: DVec2) -> DVec2 {
		point
	}
}

/// Snaps to the nearest intersection of a rectangular grid.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridGuides {
	pub origin: DVec2,
	pub spacing: DVec2,
}

impl Default for GridGuides {
	fn default() -> Self {
		Self { origin: DVec2::ZERO, spacing: DVec2::ONE }
	}
}

impl GridGuides {
	pub fn new(origin: DVec2, spacing: DVec2) -> Self {
		Self { origin, spacing }
	}
}

impl Guides for GridGuides {
	fn map_point(&mut self, point: DVec2) -> DVec2 {
		// A grid without spacing on an axis does not snap on that axis
		let snap = |value: f64, origin: f64, spacing: f64| {
			if spacing.is_finite() && spacing > 0. {
				((value - origin) / spacing).round() * spacing + origin
			} else {
				value
			}
		};
		DVec2::new(snap(point.x, self.origin.x, self.spacing.x), snap(point.y, self.origin.y, self.spacing.y))
	}
}

impl<T: Guides + ?Sized> Guides for &mut T {
	fn map_point(&mut self, point: DVec2) -> DVec2 {
		(**self).map_point(point)
	}
}
