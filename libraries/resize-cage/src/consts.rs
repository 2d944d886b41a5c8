// ANNOTATIONS
/// Edge length, in viewport pixels, of the small square annotations drawn for resize handles.
pub const ANNOTATION_SIZE_SMALL: f64 = 6.;
/// Extra pixel of slack around an annotation, used both for hit testing and for the reserved bounding box margin.
pub const ANNOTATION_SLACK: f64 = 1.;

// RESIZE HANDLES
/// Default size of a painted resize handle marker.
pub const RESIZE_HANDLE_SIZE: f64 = ANNOTATION_SIZE_SMALL;
/// Margin an editor reserves around its element when no resize handles are shown.
pub const BASE_BBOX_MARGIN: f64 = 0.;
/// Margin an editor reserves around its element so the resize handles are never clipped.
pub const RESIZE_HANDLES_BBOX_MARGIN: f64 = ANNOTATION_SIZE_SMALL + ANNOTATION_SLACK;
/// Extra hit test tolerance applied by default on top of the handle region.
pub const DEFAULT_HIT_TOLERANCE: f64 = 0.;

// TRANSFORM CAGE
/// The width or height that the bounding box needs before it is considered to have no width or height.
pub const MAX_LENGTH_FOR_NO_WIDTH_OR_HEIGHT: f64 = 1e-4;
