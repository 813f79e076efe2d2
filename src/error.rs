//! Error types for acquiring the browser drawing surface.

use std::fmt;

/// Failures while wiring the neural field to a canvas element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanvasError {
	/// No global `window` (not running in a browser main thread).
	NoWindow,
	/// `getContext("2d")` threw or returned `null`.
	ContextUnavailable,
	/// The returned context object is not a `CanvasRenderingContext2D`.
	UnexpectedContext,
}

impl fmt::Display for CanvasError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			CanvasError::NoWindow => write!(f, "no browser window available"),
			CanvasError::ContextUnavailable => write!(f, "canvas 2d context is unavailable"),
			CanvasError::UnexpectedContext => {
				write!(f, "canvas returned a context that is not 2d")
			}
		}
	}
}

impl std::error::Error for CanvasError {}
