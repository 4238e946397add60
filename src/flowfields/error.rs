//! Failures reported by the grid and the navigator. Every operation hands these
//! back to its immediate caller, nothing in the core aborts the process
//!

use crate::prelude::Position;

/// Reasons a grid or navigator operation can fail
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
	/// Coordinate lies outside the grid
	#[error("position {0} is outside grid bounds")]
	InvalidPosition(Position),
	/// Traversal costs must be non-negative
	#[error("cost {0} must be non-negative")]
	InvalidCost(i32),
	/// The cell is not connected to the goal under the current costs
	#[error("no path exists from {0} to the goal")]
	NoPath(Position),
	/// Goal is out of bounds, blocked, invalidated by a cost update or not set
	#[error("goal {0} is invalid or blocked")]
	InvalidGoal(Position),
	/// A replacement cost grid does not match the navigator size
	#[error("cost grid is {found:?} (width, height) but the navigator expects {expected:?}")]
	DimensionMismatch {
		/// `(width, height)` of the navigator
		expected: (usize, usize),
		/// `(width, height)` of the supplied grid, the width being that of the first offending row
		found: (usize, usize),
	},
	/// A [crate::prelude::MovementModel] failed validation
	#[error("invalid configuration: {0}")]
	InvalidConfiguration(String),
	/// Reading a cost grid or configuration from disk failed
	#[cfg(any(feature = "ron", feature = "csv"))]
	#[error("failed loading {0}")]
	Load(String),
}
