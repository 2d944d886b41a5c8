//! Resize-cage: the bounding box resize handles of a shape editor.
//!
//! Lays out and hit tests the eight handles of a box, turns a handle drag into a scale transform (with optional
//! ratio lock and center anchoring), and drives the drag from pointer-down through live preview to commit or cancel.

pub mod annotations;
pub mod consts;
pub mod editor;
pub mod element;
pub mod error;
pub mod guides;
pub mod handles;
pub mod math;
pub mod options;
pub mod resize_transform;
pub mod session;
pub mod side;

pub use annotations::{EditorPart, HandleAnnotation, PaintContext, ResizeHandlePart};
pub use editor::{EditorDecorations, EditorFlags, NoDecorations, ShapeEditor};
pub use element::{PointsElement, ResizableElement};
pub use error::ResizeError;
pub use guides::{GridGuides, Guides, NoGuides};
pub use handles::HandleCategories;
pub use math::rect::Rect;
pub use options::ResizeCageOptions;
pub use resize_transform::{ResizeModifiers, ResizeTransform};
pub use session::ResizeDragSession;
pub use side::{MouseCursorIcon, Side};
