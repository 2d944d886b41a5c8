use crate::annotations::{EditorPart, PaintContext, ResizeHandlePart, part_at, parts_to_paint};
use crate::consts::BASE_BBOX_MARGIN;
use crate::element::ResizableElement;
use crate::guides::Guides;
use crate::handles::HandleCategories;
use crate::math::rect::Rect;
use crate::options::ResizeCageOptions;
use crate::resize_transform::ResizeModifiers;
use crate::session::ResizeDragSession;
use crate::side::MouseCursorIcon;

use glam::{DAffine2, DVec2};
use serde::{Deserialize, Serialize};

/// Capabilities and display state of an editor, all set by the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EditorFlags {
	pub selected: bool,
	pub highlighted: bool,
	/// Which resize handles this editor offers
	pub resize: HandleCategories,
}

/// Customization points for shape-specific editors, painted beneath and on top of the resize handles.
///
/// `transform` already includes any live resize preview.
pub trait EditorDecorations {
	fn pre_paint(&self, _transform: DAffine2, _context: &mut dyn PaintContext) {}

	fn post_paint(&self, _transform: DAffine2, _context: &mut dyn PaintContext) {}
}

/// Decorations that paint nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoDecorations;

impl EditorDecorations for NoDecorations {}

/// Editor for a single element that offers resize handles on its bounding box.
#[derive(Clone, Debug, Default)]
pub struct ShapeEditor<E, D = NoDecorations> {
	element: E,
	pub flags: EditorFlags,
	pub options: ResizeCageOptions,
	session: ResizeDragSession,
	decorations: D,
}

impl<E: ResizableElement> ShapeEditor<E> {
	pub fn new(element: E, resize: HandleCategories) -> Self {
		Self::with_decorations(element, resize, NoDecorations)
	}
}

impl<E: ResizableElement, D: EditorDecorations> ShapeEditor<E, D> {
	pub fn with_decorations(element: E, resize: HandleCategories, decorations: D) -> Self {
		Self {
			element,
			flags: EditorFlags { resize, ..Default::default() },
			options: ResizeCageOptions::default(),
			session: ResizeDragSession::default(),
			decorations,
		}
	}

	pub fn element(&self) -> &E {
		&self.element
	}

	/// Gives the element back to the host, discarding any drag in progress.
	pub fn into_element(mut self) -> E {
		self.cancel_part_move();
		self.element
	}

	pub fn session(&self) -> &ResizeDragSession {
		&self.session
	}

	pub fn decorations(&self) -> &D {
		&self.decorations
	}

	pub fn set_selected(&mut self, selected: bool) {
		self.flags.selected = selected;
	}

	pub fn set_highlighted(&mut self, highlighted: bool) {
		self.flags.highlighted = highlighted;
	}

	fn shows_annotations(&self) -> bool {
		self.flags.selected || self.flags.highlighted
	}

	pub fn shows_resize_handles(&self) -> bool {
		self.shows_annotations() && self.flags.resize.any()
	}

	/// The preview transform of the drag in progress, identity otherwise.
	fn preview_transform(&self) -> DAffine2 {
		self.session.active().and_then(|active| active.preview).map_or(DAffine2::IDENTITY, |resize| resize.to_affine())
	}

	/// The bounds as currently displayed, following the live resize preview.
	pub fn paint_bounds(&self) -> Option<Rect> {
		let bounds = self.element.geometry_bounds()?;
		Some(bounds.transformed(self.preview_transform()))
	}

	/// Extra room the host must reserve around the element so the annotations are not clipped.
	pub fn bbox_margin(&self) -> f64 {
		if self.shows_resize_handles() { self.options.handles_margin() } else { BASE_BBOX_MARGIN }
	}

	pub fn paint(&self, transform: DAffine2, context: &mut dyn PaintContext) {
		if !self.shows_annotations() {
			return;
		}

		let target_transform = transform * self.preview_transform();
		self.decorations.pre_paint(target_transform, context);

		if self.shows_resize_handles() {
			for annotation in parts_to_paint(self.paint_bounds(), self.flags.resize, transform, self.options.handle_size) {
				annotation.paint(context);
			}
		}

		self.decorations.post_paint(target_transform, context);
	}

	/// Finds the resize handle under `location`, which is in the same space `transform` maps the element into.
	pub fn hit_test_part(&self, location: DVec2, transform: DAffine2, tolerance: f64) -> Option<EditorPart> {
		if !self.shows_resize_handles() {
			return None;
		}

		let half_size = self.options.click_target_half_size(tolerance);
		part_at(self.paint_bounds(), self.flags.resize, transform, location, half_size)
	}

	/// The cursor to show while hovering `location`.
	pub fn cursor_at(&self, location: DVec2, transform: DAffine2, tolerance: f64) -> MouseCursorIcon {
		if let Some(active) = self.session.active() {
			return active.side.cursor();
		}

		match self.hit_test_part(location, transform, tolerance) {
			Some(EditorPart::ResizeHandle(ResizeHandlePart { side, .. })) => side.cursor(),
			None => MouseCursorIcon::Default,
		}
	}

	/// Starts dragging a part. Returns whether a drag is now in progress.
	pub fn begin_part_move(&mut self, part: &EditorPart) -> bool {
		match part {
			EditorPart::ResizeHandle(handle) => {
				let enabled = self.flags.resize.allows(handle.side);
				match self.session.begin(*handle, self.element.geometry_bounds(), enabled) {
					Ok(started) => started,
					Err(error) => {
						log::warn!("Could not begin resize: {error}");
						self.session.is_active()
					}
				}
			}
		}
	}

	/// Moves a dragged part to the view-space `position`, previewing the result on the element.
	///
	/// A drag that was not explicitly begun is begun here. Returns the preview transform.
	pub fn move_part(&mut self, part: &EditorPart, position: DVec2, view_to_world: DAffine2, guides: &mut impl Guides, modifiers: ResizeModifiers) -> Option<DAffine2> {
		match part {
			EditorPart::ResizeHandle(_) => {
				if !self.session.is_active() && !self.begin_part_move(part) {
					return None;
				}

				self.session
					.update(&mut self.element, position, view_to_world, guides, modifiers)
					.map_err(|error| log::warn!("Could not update resize: {error}"))
					.ok()
			}
		}
	}

	/// Commits the dragged part's move into the element. Returns the committed transform, if any.
	pub fn apply_part_move(&mut self, part: &EditorPart) -> Option<DAffine2> {
		match part {
			EditorPart::ResizeHandle(_) => self.session.commit(&mut self.element).map_err(|error| log::warn!("Could not commit resize: {error}")).ok().flatten(),
		}
	}

	/// Abandons a drag in progress (focus loss, Escape), restoring the element as it was before the drag.
	pub fn cancel_part_move(&mut self) {
		if self.session.is_active() {
			if let Err(error) = self.session.cancel(&mut self.element) {
				log::warn!("Could not cancel resize: {error}");
			}
		}
	}
}
