//! A [FlowField] is a 2D array of [Direction]s. Each passable cell that can
//! reach the goal points at its cheapest neighbour in the [IntegrationField],
//! the goal itself and any cell walled off from it hold [Direction::ZERO]. A
//! steering pipeline/character controller should read and interpret a
//! [FlowField] to provide movement.
//!
//! For the 5x5 integration field with the goal in the centre (8-way, uniform
//! costs) the flow field would look like:
//!
//! ```text
//!  _____________________________
//! |     |     |     |     |     |
//! |  ↘  |  ↓  |  ↓  |  ↓  |  ↙  |
//! |_____|_____|_____|_____|_____|
//! |     |     |     |     |     |
//! |  →  |  ↘  |  ↓  |  ↙  |  ←  |
//! |_____|_____|_____|_____|_____|
//! |     |     |     |     |     |
//! |  →  |  →  |  G  |  ←  |  ←  |
//! |_____|_____|_____|_____|_____|
//! |     |     |     |     |     |
//! |  →  |  ↗  |  ↑  |  ↖  |  ←  |
//! |_____|_____|_____|_____|_____|
//! |     |     |     |     |     |
//! |  ↗  |  ↑  |  ↑  |  ↑  |  ↖  |
//! |_____|_____|_____|_____|_____|
//! ```
//!
//! Ties between neighbours of equal cost are broken by the declaration order of
//! the directions in the [MovementModel], the first cheapest direction wins.
//!

use crate::prelude::*;

/// The direction to step from each cell to make progress towards the goal
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct FlowField(FieldData<Direction>);

impl Field<Direction> for FlowField {
	fn data(&self) -> &FieldData<Direction> {
		&self.0
	}
	fn data_mut(&mut self) -> &mut FieldData<Direction> {
		&mut self.0
	}
}

impl FlowField {
	/// Create a new [FlowField] where every cell holds [Direction::ZERO]
	pub fn new(width: usize, height: usize) -> Self {
		FlowField(FieldData::new(width, height, Direction::ZERO))
	}
	/// Calculate the [FlowField] from an [IntegrationField]. Returns the number
	/// of cells which were given a direction
	pub fn calculate(
		&mut self,
		goal: Position,
		cost_field: &CostField,
		integration_field: &IntegrationField,
		model: &MovementModel,
	) -> usize {
		self.fill(Direction::ZERO);
		let mut flowing = 0;
		let costs = cost_field.get();
		let int_costs = integration_field.get();
		for (i, cost) in costs.iter().enumerate() {
			let cell = self.0.position_of(i);
			// skip obstacles and the goal
			if *cost == IMPASSABLE || cell == goal {
				continue;
			}
			// store the cheapest neighbour, it must beat this cell to be worth moving to
			let mut cheapest_value = int_costs[i];
			let mut cheapest_dir = Direction::ZERO;
			for dir in model.directions.iter() {
				if let Some(n) = self.0.index(cell.step(*dir)) {
					if int_costs[n] < cheapest_value {
						cheapest_value = int_costs[n];
						cheapest_dir = *dir;
					}
				}
			}
			if !cheapest_dir.is_zero() {
				self.0.cells[i] = cheapest_dir;
				flowing += 1;
			}
		}
		flowing
	}
}

#[rustfmt::skip]
#[cfg(test)]
mod tests {
	use super::*;
	/// Build the integration and flow fields for a goal
	fn build(cost_field: &CostField, goal: Position, model: &MovementModel) -> FlowField {
		let (width, height) = cost_field.get_dimensions();
		let mut int_field = IntegrationField::new(width, height);
		int_field.calculate_field(goal, cost_field, model).unwrap();
		let mut flow_field = FlowField::new(width, height);
		flow_field.calculate(goal, cost_field, &int_field, model);
		flow_field
	}
	#[test]
	fn eight_way_rings() {
		let cost_field = CostField::new(5, 5);
		let model = MovementModel::eight_way(5, 5);
		let flow_field = build(&cost_field, Position::new(2, 2), &model);
		let result = flow_field.get();

		let z = Direction::ZERO;
		let n = Direction::NORTH;
		let s = Direction::SOUTH;
		let e = Direction::EAST;
		let w = Direction::WEST;
		let se = Direction::SOUTH_EAST;
		let sw = Direction::SOUTH_WEST;
		let ne = Direction::NORTH_EAST;
		let nw = Direction::NORTH_WEST;
		let actual = vec![
			se, s,  s, s,  sw,
			e,  se, s, sw, w,
			e,  e,  z, w,  w,
			e,  ne, n, nw, w,
			ne, n,  n, n,  nw,
		];
		assert_eq!(actual, result);
	}
	#[test]
	fn walled_off_cells_have_no_direction() {
		let mut cost_field = CostField::new(3, 3);
		cost_field.set_field_cell_value(IMPASSABLE, Position::new(1, 0)).unwrap();
		cost_field.set_field_cell_value(IMPASSABLE, Position::new(0, 1)).unwrap();
		let model = MovementModel::four_way(3, 3);
		let flow_field = build(&cost_field, Position::new(2, 2), &model);
		assert_eq!(Ok(Direction::ZERO), flow_field.get_field_cell_value(Position::new(0, 0)));
		assert_eq!(Ok(Direction::ZERO), flow_field.get_field_cell_value(Position::new(1, 0)));
		assert_eq!(Ok(Direction::SOUTH), flow_field.get_field_cell_value(Position::new(1, 1)));
	}
	#[test]
	fn ties_follow_declaration_order() {
		let cost_field = CostField::new(3, 3);
		let model = MovementModel::four_way(3, 3);
		let flow_field = build(&cost_field, Position::new(2, 2), &model);
		// both (1, 1) -> south and (1, 1) -> east cost the same, south is declared first
		assert_eq!(Ok(Direction::SOUTH), flow_field.get_field_cell_value(Position::new(1, 1)));
	}
}
