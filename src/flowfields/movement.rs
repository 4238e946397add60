//! The [MovementModel] declares how an actor may step between cells: the set of
//! allowed directions, the multiplier applied to the cost of a diagonal step and
//! whether diagonals may squeeze between two blocked orthogonal neighbours.
//!
//! The order of [MovementModel::directions] matters, when two neighbours offer
//! the same distance to the goal the one declared first becomes the flow
//! direction.
//!
//! Corner cutting is recorded but the field calculation does not consult it,
//! a diagonal step is relaxed whatever its orthogonal neighbours hold.
//!

use crate::prelude::*;

/// Multiplier applied to diagonal steps by [MovementModel::eight_way]
pub const DEFAULT_DIAGONAL_COST: f64 = 1.4;

/// Grid size and the step rules used to build the fields
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct MovementModel {
	/// Number of columns in the grid
	pub width: usize,
	/// Number of rows in the grid
	pub height: usize,
	/// Allowed steps, in tie-break order
	pub directions: Vec<Direction>,
	/// Scale applied to the cost of entering a cell diagonally
	pub diagonal_cost: f64,
	/// Whether a diagonal may pass between two impassable orthogonal cells
	pub allow_corner_cutting: bool,
}

impl MovementModel {
	/// Create a validated [MovementModel]
	pub fn new(
		width: usize,
		height: usize,
		directions: Vec<Direction>,
		diagonal_cost: f64,
		allow_corner_cutting: bool,
	) -> Result<Self, NavigationError> {
		let model = MovementModel {
			width,
			height,
			directions,
			diagonal_cost,
			allow_corner_cutting,
		};
		model.validate()?;
		Ok(model)
	}
	/// Orthogonal movement only
	pub fn four_way(width: usize, height: usize) -> Self {
		MovementModel {
			width,
			height,
			directions: FOUR_WAY_DIRECTIONS.to_vec(),
			diagonal_cost: 1.0,
			allow_corner_cutting: false,
		}
	}
	/// Orthogonal and diagonal movement with diagonals costing [DEFAULT_DIAGONAL_COST] times more
	pub fn eight_way(width: usize, height: usize) -> Self {
		MovementModel {
			width,
			height,
			directions: EIGHT_WAY_DIRECTIONS.to_vec(),
			diagonal_cost: DEFAULT_DIAGONAL_COST,
			allow_corner_cutting: true,
		}
	}
	/// Check the grid has an area, at least one direction is allowed, every
	/// direction is a non-zero single step and the diagonal multiplier is positive
	pub fn validate(&self) -> Result<(), NavigationError> {
		if self.width == 0 || self.height == 0 {
			return Err(NavigationError::InvalidConfiguration(format!(
				"grid dimensions must be positive, got {}x{}",
				self.width, self.height
			)));
		}
		if self.width > i32::MAX as usize || self.height > i32::MAX as usize {
			return Err(NavigationError::InvalidConfiguration(format!(
				"grid dimensions {}x{} exceed the addressable range",
				self.width, self.height
			)));
		}
		if self.directions.is_empty() {
			return Err(NavigationError::InvalidConfiguration(
				"at least one movement direction is required".to_string(),
			));
		}
		if let Some(dir) = self.directions.iter().find(|d| d.is_zero() || !d.is_unit_step()) {
			return Err(NavigationError::InvalidConfiguration(format!(
				"direction ({}, {}) is not a single step",
				dir.x, dir.y
			)));
		}
		if !(self.diagonal_cost.is_finite() && self.diagonal_cost > 0.0) {
			return Err(NavigationError::InvalidConfiguration(format!(
				"diagonal cost multiplier must be positive, got {}",
				self.diagonal_cost
			)));
		}
		Ok(())
	}
	/// Cost of entering a cell costing `cell_cost` by stepping in `direction`.
	/// Diagonal steps are scaled by the multiplier and truncated
	pub fn step_cost(&self, cell_cost: i32, direction: Direction) -> i32 {
		if direction.is_diagonal() {
			(cell_cost as f64 * self.diagonal_cost) as i32
		} else {
			cell_cost
		}
	}
	/// `(width, height)` of the grid
	pub fn get_dimensions(&self) -> (usize, usize) {
		(self.width, self.height)
	}
}
