use crate::consts::{ANNOTATION_SIZE_SMALL, ANNOTATION_SLACK, DEFAULT_HIT_TOLERANCE, RESIZE_HANDLE_SIZE};
use crate::hit_test::handle_half_size;

use serde::{Deserialize, Serialize};

/// Host-tunable settings for the resize handles, stored alongside the host's preferences.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResizeCageOptions {
	/// Edge length of a painted handle marker, in viewport pixels
	pub handle_size: f64,
	/// Edge length of the annotation used for hit testing and margins
	pub annotation_size: f64,
	/// Slack added around each annotation
	pub annotation_slack: f64,
	/// Smallest tolerance added around the click target, whatever the host passes
	pub hit_tolerance: f64,
}

impl Default for ResizeCageOptions {
	fn default() -> Self {
		Self {
			handle_size: RESIZE_HANDLE_SIZE,
			annotation_size: ANNOTATION_SIZE_SMALL,
			annotation_slack: ANNOTATION_SLACK,
			hit_tolerance: DEFAULT_HIT_TOLERANCE,
		}
	}
}

impl ResizeCageOptions {
	/// The margin reserved around an element whose handles are shown.
	pub fn handles_margin(&self) -> f64 {
		self.annotation_size + self.annotation_slack
	}

	/// Half the edge length of a handle's click target for the host's pointer tolerance.
	///
	/// The larger of the host tolerance and [`Self::hit_tolerance`] is used, never less than zero.
	pub fn click_target_half_size(&self, tolerance: f64) -> f64 {
		handle_half_size(self.annotation_size, self.annotation_slack) + tolerance.max(self.hit_tolerance).max(0.)
	}
}
