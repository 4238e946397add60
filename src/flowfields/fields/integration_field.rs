//! The IntegrationField contains a 2D array of 32-bit values and it uses a
//! [CostField] to produce a cumulative cost of reaching the goal from every cell.
//!
//! When the field is recalculated every cell is reset to [UNREACHED] and the
//! cell containing the goal is set to `0`. The goal is then pushed onto a FIFO
//! work queue and cells are popped and relaxed until the queue drains:
//!
//! 1. For each direction of the [MovementModel] find the neighbouring cell, skipping it if it is outside the field or [IMPASSABLE]
//! 2. The cost of stepping into the neighbour is its [CostField] value, scaled (and truncated) by the diagonal multiplier for diagonal steps
//! 3. If the current cell's value plus the step cost is strictly less than the neighbour's value the neighbour is updated and pushed back onto the queue
//!
//! A cell can be pushed many times as cheaper routes are discovered so this is a
//! queue based relaxation rather than a priority queue Dijkstra. Each relaxation
//! strictly lowers a non-negative integer so the process always terminates.
//!
//! With 8-way movement over a uniform cost field of `1` (the diagonal multiplier
//! truncates back to `1`) a goal in the middle produces rings of equal cost:
//!
//! ```text
//!  _____________________________
//! |     |     |     |     |     |
//! |  2  |  2  |  2  |  2  |  2  |
//! |_____|_____|_____|_____|_____|
//! |     |     |     |     |     |
//! |  2  |  1  |  1  |  1  |  2  |
//! |_____|_____|_____|_____|_____|
//! |     |     |     |     |     |
//! |  2  |  1  |  0  |  1  |  2  |
//! |_____|_____|_____|_____|_____|
//! |     |     |     |     |     |
//! |  2  |  1  |  1  |  1  |  2  |
//! |_____|_____|_____|_____|_____|
//! |     |     |     |     |     |
//! |  2  |  2  |  2  |  2  |  2  |
//! |_____|_____|_____|_____|_____|
//! ```
//!
//! [IMPASSABLE] cells are never entered so the wave flows around them and they
//! keep the value [UNREACHED], as does any pocket of cells walled off from the goal.
//!

use std::collections::VecDeque;

use crate::prelude::*;

/// Cumulative cost of reaching the goal from each cell
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct IntegrationField(FieldData<i32>);

impl Field<i32> for IntegrationField {
	fn data(&self) -> &FieldData<i32> {
		&self.0
	}
	fn data_mut(&mut self) -> &mut FieldData<i32> {
		&mut self.0
	}
}

impl IntegrationField {
	/// Creates a new [IntegrationField] where all cells are [UNREACHED]
	pub fn new(width: usize, height: usize) -> Self {
		IntegrationField(FieldData::new(width, height, UNREACHED))
	}
	/// Reset all the cells of the [IntegrationField] to [UNREACHED] apart from
	/// the `goal` which is the starting point of calculating the field and is set to `0`
	pub fn reset(&mut self, goal: Position) -> Result<(), NavigationError> {
		self.fill(UNREACHED);
		self.set_field_cell_value(0, goal)
	}
	/// Whether a finite cost to the goal has been found for `cell`
	pub fn is_reached(&self, cell: Position) -> bool {
		matches!(self.get_field_cell_value(cell), Ok(value) if value != UNREACHED)
	}
	/// From the `goal` iterate over successive neighbouring cells and calculate
	/// the field values from the `cost_field`. Returns the number of
	/// relaxations performed
	pub fn calculate_field(
		&mut self,
		goal: Position,
		cost_field: &CostField,
		model: &MovementModel,
	) -> Result<usize, NavigationError> {
		self.reset(goal)?;
		let mut relaxations = 0;
		let mut queue = VecDeque::new();
		queue.push_back(goal);
		while let Some(current) = queue.pop_front() {
			let current_cost = self.get_field_cell_value(current)?;
			for dir in model.directions.iter() {
				let next = current.step(*dir);
				let Ok(cell_cost) = cost_field.get_field_cell_value(next) else {
					continue;
				};
				// ignore impassable cells
				if cell_cost == IMPASSABLE {
					continue;
				}
				let step_cost = model.step_cost(cell_cost, *dir);
				let int_cost = current_cost.saturating_add(step_cost);
				// don't overwrite an int cell with a worse cost
				if int_cost < self.get_field_cell_value(next)? {
					self.set_field_cell_value(int_cost, next)?;
					queue.push_back(next);
					relaxations += 1;
				}
			}
		}
		Ok(relaxations)
	}
}
