use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// One of the eight resize handle positions on a bounding box, plus its center.
///
/// [`Side::Center`] is only ever used as an anchor reference and is never offered as a handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum Side {
	TopLeft,
	TopCenter,
	TopRight,
	RightCenter,
	BottomRight,
	BottomCenter,
	BottomLeft,
	LeftCenter,
	Center,
}

/// Which vertical edge of the box a side moves when dragged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HorizontalRole {
	Left,
	Right,
	None,
}

/// Which horizontal edge of the box a side moves when dragged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VerticalRole {
	Top,
	Bottom,
	None,
}

/// The mouse cursor a host should show while hovering or dragging a handle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum MouseCursorIcon {
	#[default]
	Default,
	NSResize,
	EWResize,
	NWSEResize,
	NESWResize,
}

impl Side {
	/// Corner handles in their fixed enumeration order.
	pub const CORNERS: [Side; 4] = [Side::TopLeft, Side::TopRight, Side::BottomLeft, Side::BottomRight];
	/// Edge-midpoint handles in their fixed enumeration order.
	pub const EDGES: [Side; 4] = [Side::TopCenter, Side::RightCenter, Side::BottomCenter, Side::LeftCenter];

	/// Looks up the (horizontal, vertical) role of the side.
	pub fn roles(self) -> (HorizontalRole, VerticalRole) {
		use HorizontalRole as H;
		use VerticalRole as V;

		match self {
			Side::TopLeft => (H::Left, V::Top),
			Side::TopCenter => (H::None, V::Top),
			Side::TopRight => (H::Right, V::Top),
			Side::RightCenter => (H::Right, V::None),
			Side::BottomRight => (H::Right, V::Bottom),
			Side::BottomCenter => (H::None, V::Bottom),
			Side::BottomLeft => (H::Left, V::Bottom),
			Side::LeftCenter => (H::Left, V::None),
			Side::Center => (H::None, V::None),
		}
	}

	pub fn horizontal(self) -> HorizontalRole {
		self.roles().0
	}

	pub fn vertical(self) -> VerticalRole {
		self.roles().1
	}

	pub fn is_corner(self) -> bool {
		let (horizontal, vertical) = self.roles();
		horizontal != HorizontalRole::None && vertical != VerticalRole::None
	}

	pub fn is_edge(self) -> bool {
		let (horizontal, vertical) = self.roles();
		(horizontal == HorizontalRole::None) != (vertical == VerticalRole::None)
	}

	/// Whether the side can be grabbed as a resize handle at all.
	pub fn is_handle(self) -> bool {
		self != Side::Center
	}

	/// The side diagonally (or straight) across the box. The center is its own opposite.
	pub fn opposite(self) -> Side {
		match self {
			Side::TopLeft => Side::BottomRight,
			Side::TopCenter => Side::BottomCenter,
			Side::TopRight => Side::BottomLeft,
			Side::RightCenter => Side::LeftCenter,
			Side::BottomRight => Side::TopLeft,
			Side::BottomCenter => Side::TopCenter,
			Side::BottomLeft => Side::TopRight,
			Side::LeftCenter => Side::RightCenter,
			Side::Center => Side::Center,
		}
	}

	/// Gets the resize cursor matching the direction this handle moves in.
	pub fn cursor(self) -> MouseCursorIcon {
		match self {
			Side::TopCenter | Side::BottomCenter => MouseCursorIcon::NSResize,
			Side::LeftCenter | Side::RightCenter => MouseCursorIcon::EWResize,
			Side::TopLeft | Side::BottomRight => MouseCursorIcon::NWSEResize,
			Side::TopRight | Side::BottomLeft => MouseCursorIcon::NESWResize,
			Side::Center => MouseCursorIcon::Default,
		}
	}
}
