use crate::annotations::ResizeHandlePart;
use crate::element::ResizableElement;
use crate::error::ResizeError;
use crate::guides::Guides;
use crate::math::rect::Rect;
use crate::resize_transform::{ResizeModifiers, ResizeTransform, calculate};
use crate::side::Side;

use glam::{DAffine2, DVec2};

/// Snapshot taken when a handle drag begins. Every pointer move is resolved against it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActiveResize {
	pub side: Side,
	pub original_bounds: Rect,
	pub anchor: DVec2,
	/// The last preview transform applied to the element, if the pointer has moved
	pub preview: Option<ResizeTransform>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ResizeDragState {
	#[default]
	Idle,
	Active(ActiveResize),
}

/// The state of one resize drag gesture: begin, any number of updates, then commit or cancel.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResizeDragSession {
	state: ResizeDragState,
}

impl ResizeDragSession {
	pub fn state(&self) -> &ResizeDragState {
		&self.state
	}

	pub fn is_active(&self) -> bool {
		matches!(self.state, ResizeDragState::Active(_))
	}

	pub fn active(&self) -> Option<&ActiveResize> {
		match &self.state {
			ResizeDragState::Active(active) => Some(active),
			ResizeDragState::Idle => None,
		}
	}

	/// Opens a drag for the grabbed handle.
	///
	/// Returns `Ok(false)` without starting a drag when resizing is disabled or the box is empty.
	pub fn begin(&mut self, part: ResizeHandlePart, bounds: Option<Rect>, enabled: bool) -> Result<bool, ResizeError> {
		if self.is_active() {
			return Err(ResizeError::SessionAlreadyActive);
		}
		if !part.side.is_handle() {
			return Err(ResizeError::NotAHandle(part.side));
		}
		let Some(original_bounds) = bounds.filter(|bounds| enabled && !bounds.is_empty()) else {
			log::trace!("Ignoring resize of {} on a disabled or empty box", part.side);
			return Ok(false);
		};

		log::trace!("Resize drag started on {} at {:?}", part.side, part.point);
		self.state = ResizeDragState::Active(ActiveResize {
			side: part.side,
			original_bounds,
			anchor: part.point,
			preview: None,
		});
		Ok(true)
	}

	/// Recomputes the resize for a pointer move and shows it on the element as a preview.
	///
	/// `pointer` is in view space; it is mapped to world space with `view_to_world` and then snapped by `guides`.
	pub fn update(
		&mut self,
		element: &mut impl ResizableElement,
		pointer: DVec2,
		view_to_world: DAffine2,
		guides: &mut impl Guides,
		modifiers: ResizeModifiers,
	) -> Result<DAffine2, ResizeError> {
		let ResizeDragState::Active(active) = &mut self.state else {
			return Err(ResizeError::NoActiveSession);
		};

		let position = guides.map_point(view_to_world.transform_point2(pointer));
		let resize = calculate(active.original_bounds, active.side, active.anchor, position, modifiers)?;
		let transform = resize.to_affine();

		element.transform(transform);
		active.preview = Some(resize);

		Ok(transform)
	}

	/// Bakes the latest preview into the element and ends the drag. Returns the committed transform, if any move happened.
	pub fn commit(&mut self, element: &mut impl ResizableElement) -> Result<Option<DAffine2>, ResizeError> {
		let ResizeDragState::Active(active) = std::mem::take(&mut self.state) else {
			return Err(ResizeError::NoActiveSession);
		};

		let committed = active.preview.map(|resize| resize.to_affine());
		if committed.is_some() {
			element.apply_transform();
		}
		log::debug!("Resize drag on {} committed with {committed:?}", active.side);

		Ok(committed)
	}

	/// Discards the preview and ends the drag, leaving the persisted geometry as it was before the drag.
	pub fn cancel(&mut self, element: &mut impl ResizableElement) -> Result<(), ResizeError> {
		let ResizeDragState::Active(active) = std::mem::take(&mut self.state) else {
			return Err(ResizeError::NoActiveSession);
		};

		element.reset_transform();
		log::debug!("Resize drag on {} cancelled", active.side);

		Ok(())
	}
}

#[cfg(test)]
mod test_session {
	use super::*;
	use crate::element::PointsElement;
	use crate::guides::{GridGuides, NoGuides};

	fn init_logger() {
		let _ = env_logger::builder().is_test(true).try_init();
	}

	fn bounds() -> Rect {
		Rect::from_xywh(0., 0., 100., 50.)
	}

	fn grab(side: Side) -> ResizeHandlePart {
		ResizeHandlePart { side, point: bounds().side_point(side) }
	}

	fn triangle() -> PointsElement {
		PointsElement::new([DVec2::new(0., 50.), DVec2::new(50., 0.), DVec2::new(100., 50.)])
	}

	#[test]
	fn begin_captures_snapshot() {
		init_logger();
		let mut session = ResizeDragSession::default();
		assert_eq!(session.begin(grab(Side::BottomRight), Some(bounds()), true), Ok(true));

		let active = session.active().unwrap();
		assert_eq!(active.side, Side::BottomRight);
		assert_eq!(active.original_bounds, bounds());
		assert_eq!(active.anchor, DVec2::new(100., 50.));
		assert_eq!(active.preview, None);
	}

	#[test]
	fn begin_is_a_no_op_when_disabled_or_empty() {
		let mut session = ResizeDragSession::default();
		assert_eq!(session.begin(grab(Side::TopLeft), Some(bounds()), false), Ok(false));
		assert_eq!(session.begin(grab(Side::TopLeft), Some(Rect::from_xywh(0., 0., 0., 5.)), true), Ok(false));
		assert_eq!(session.begin(grab(Side::TopLeft), None, true), Ok(false));
		assert!(!session.is_active());
	}

	#[test]
	fn invalid_transitions_are_rejected() {
		let mut session = ResizeDragSession::default();
		let mut element = triangle();

		assert_eq!(session.update(&mut element, DVec2::ZERO, DAffine2::IDENTITY, &mut NoGuides, ResizeModifiers::default()), Err(ResizeError::NoActiveSession));
		assert_eq!(session.commit(&mut element), Err(ResizeError::NoActiveSession));
		assert_eq!(session.cancel(&mut element), Err(ResizeError::NoActiveSession));

		session.begin(grab(Side::TopLeft), Some(bounds()), true).unwrap();
		assert_eq!(session.begin(grab(Side::TopLeft), Some(bounds()), true), Err(ResizeError::SessionAlreadyActive));
		assert_eq!(element, triangle());
	}

	#[test]
	fn center_cannot_be_grabbed() {
		let mut session = ResizeDragSession::default();
		assert_eq!(session.begin(grab(Side::Center), Some(bounds()), true), Err(ResizeError::NotAHandle(Side::Center)));
	}

	#[test]
	fn update_maps_through_view_and_guides() {
		let mut session = ResizeDragSession::default();
		let mut element = triangle();
		session.begin(grab(Side::BottomRight), Some(bounds()), true).unwrap();

		// The view is zoomed in 2x, so 303 view pixels is 151.5 world units, which the grid rounds to 150
		let view_to_world = DAffine2::from_scale(DVec2::splat(0.5));
		let mut guides = GridGuides::new(DVec2::ZERO, DVec2::splat(10.));
		let transform = session.update(&mut element, DVec2::new(303., 100.), view_to_world, &mut guides, ResizeModifiers::default()).unwrap();

		assert_eq!(transform, DAffine2::from_scale(DVec2::new(1.5, 1.)));
		assert_eq!(element.preview(), Some(transform));
		assert_eq!(element.points(), triangle().points());
	}

	#[test]
	fn updates_do_not_compound() {
		let mut session = ResizeDragSession::default();
		let mut element = triangle();
		session.begin(grab(Side::RightCenter), Some(bounds()), true).unwrap();

		let mut last = DAffine2::IDENTITY;
		for x in [120., 180., 90., 150.] {
			last = session.update(&mut element, DVec2::new(x, 25.), DAffine2::IDENTITY, &mut NoGuides, ResizeModifiers::default()).unwrap();
		}
		assert_eq!(last, DAffine2::from_scale(DVec2::new(1.5, 1.)));

		let committed = session.commit(&mut element).unwrap();
		assert_eq!(committed, Some(last));
		assert!(!session.is_active());

		let expected: Vec<_> = triangle().points().iter().map(|&point| last.transform_point2(point)).collect();
		assert_eq!(element.points(), expected.as_slice());
		assert_eq!(element.preview(), None);
	}

	#[test]
	fn cancel_restores_original_geometry() {
		let mut session = ResizeDragSession::default();
		let mut element = triangle();
		session.begin(grab(Side::TopLeft), Some(bounds()), true).unwrap();
		session
			.update(&mut element, DVec2::new(-40., -13.), DAffine2::IDENTITY, &mut NoGuides, ResizeModifiers::new(true, true))
			.unwrap();
		assert!(element.preview().is_some());

		session.cancel(&mut element).unwrap();
		assert_eq!(element, triangle());
		assert!(!session.is_active());
	}

	#[test]
	fn commit_without_moves_changes_nothing() {
		let mut session = ResizeDragSession::default();
		let mut element = triangle();
		session.begin(grab(Side::TopLeft), Some(bounds()), true).unwrap();
		assert_eq!(session.commit(&mut element), Ok(None));
		assert_eq!(element, triangle());
	}
}
