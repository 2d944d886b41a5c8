use crate::side::Side;

use thiserror::Error;

/// The error type used by the resize engine.
///
/// Degenerate geometry is not an error: empty boxes simply disable the handles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ResizeError {
	#[error("The side {0} is not a resize handle")]
	NotAHandle(Side),

	#[error("The pointer or anchor position is not finite")]
	NonFinitePosition,

	#[error("No resize drag is in progress")]
	NoActiveSession,

	#[error("A resize drag is already in progress")]
	SessionAlreadyActive,
}
