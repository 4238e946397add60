//! The [FlowFieldNavigator] owns a [Grid] and a goal. Whenever the goal or the
//! costs change it recalculates the integration and flow layers so that any
//! number of actors can look up the next step towards the goal without running
//! their own search.
//!
//! The derived layers are always consistent with the costs and goal as of the
//! last successful change, a failed call leaves either the previous field or a
//! cleared one, never a partially built one.
//!

use bevy::log::{debug, warn};

use crate::prelude::*;

/// Owns the navigation [Grid] and recalculates the flow towards a single goal
#[derive(Clone, Debug)]
pub struct FlowFieldNavigator {
	/// Size and step rules of the grid
	model: MovementModel,
	/// Costs and derived layers
	grid: Grid,
	/// Cell the field flows towards
	goal: Position,
	/// Whether [FlowFieldNavigator::goal] has been set and is still valid
	goal_set: bool,
}

impl FlowFieldNavigator {
	/// Create a navigator over an open grid of [DEFAULT_COST] cells, sized by the `model`
	pub fn new(model: MovementModel) -> Result<Self, NavigationError> {
		model.validate()?;
		let grid = Grid::new(model.width, model.height);
		Ok(FlowFieldNavigator {
			model,
			grid,
			goal: Position::default(),
			goal_set: false,
		})
	}
	/// Move the goal to `goal` and rebuild the field
	pub fn set_goal(&mut self, goal: Position) -> Result<(), NavigationError> {
		if !self.grid.is_valid_position(goal) {
			return Err(NavigationError::InvalidPosition(goal));
		}
		if !self.grid.is_passable(goal) {
			return Err(NavigationError::InvalidGoal(goal));
		}
		if self.goal_set && self.grid.get_cell_kind(self.goal) == Ok(CellKind::Goal) {
			self.grid.mark_cell(self.goal, CellKind::Passable)?;
		}
		debug!("Goal moved to {}", goal);
		self.goal = goal;
		self.goal_set = true;
		self.grid.mark_cell(goal, CellKind::Goal)?;
		self.recompute()
	}
	/// Replace every cell cost from a matrix indexed `[row][column]`. If the goal
	/// becomes impassable it is cleared and [NavigationError::InvalidGoal] is
	/// returned, otherwise the field is rebuilt
	pub fn update_costs(&mut self, costs: &[Vec<i32>]) -> Result<(), NavigationError> {
		self.update_costs_with_buildings(costs, &[])
	}
	/// Replace every cell cost like [FlowFieldNavigator::update_costs] while
	/// keeping each cell of `buildings` blocked as a [CellKind::Building]
	/// whatever the new matrix holds for it. The field is rebuilt once
	pub fn update_costs_with_buildings(
		&mut self,
		costs: &[Vec<i32>],
		buildings: &[Position],
	) -> Result<(), NavigationError> {
		if let Some(cell) = buildings.iter().find(|c| !self.grid.is_valid_position(**c)) {
			return Err(NavigationError::InvalidPosition(*cell));
		}
		self.grid.replace_costs(costs)?;
		for cell in buildings.iter() {
			self.grid.set_building(*cell)?;
		}
		debug!(
			"Replaced costs of {}x{} grid, {} buildings kept",
			self.model.width,
			self.model.height,
			buildings.len()
		);
		self.refresh()
	}
	/// Block a single cell with a building and refresh the field the same way
	/// [FlowFieldNavigator::update_costs] does
	pub fn place_building(&mut self, cell: Position) -> Result<(), NavigationError> {
		self.grid.set_building(cell)?;
		debug!("Building placed at {}", cell);
		self.refresh()
	}
	/// The direction an actor in `cell` should step to approach the goal.
	/// [Direction::ZERO] is returned at the goal itself
	pub fn get_flow_direction(&self, cell: Position) -> Result<Direction, NavigationError> {
		if !self.goal_set {
			return Err(NavigationError::InvalidGoal(self.goal));
		}
		if !self.grid.is_valid_position(cell) {
			return Err(NavigationError::InvalidPosition(cell));
		}
		if cell == self.goal {
			return Ok(Direction::ZERO);
		}
		let direction = self.grid.get_flow_direction(cell)?;
		if direction.is_zero() {
			return Err(NavigationError::NoPath(cell));
		}
		Ok(direction)
	}
	/// An independent copy of the costs, distances, directions and classifications
	pub fn get_grid(&self) -> Grid {
		self.grid.clone()
	}
	/// The current goal, check [FlowFieldNavigator::is_goal_set] to know whether it is active
	pub fn get_goal(&self) -> Position {
		self.goal
	}
	/// Whether a goal is active
	pub fn is_goal_set(&self) -> bool {
		self.goal_set
	}
	/// Whether `cell` lies inside the grid and is not [IMPASSABLE]
	pub fn is_passable(&self, cell: Position) -> bool {
		self.grid.is_passable(cell)
	}
	/// Whether `cell` lies inside the grid
	pub fn is_in_bounds(&self, cell: Position) -> bool {
		self.grid.is_valid_position(cell)
	}
	/// Cost of entering `cell`
	pub fn get_cost(&self, cell: Position) -> Result<i32, NavigationError> {
		self.grid.get_cost(cell)
	}
	/// `(width, height)` of the grid
	pub fn dimensions(&self) -> (usize, usize) {
		self.grid.get_dimensions()
	}
	/// The [MovementModel] the field is built with
	pub fn movement_model(&self) -> &MovementModel {
		&self.model
	}
	/// Rebuild the field after the costs changed
	fn refresh(&mut self) -> Result<(), NavigationError> {
		if !self.goal_set {
			return Ok(());
		}
		if !self.grid.is_passable(self.goal) {
			warn!("Cost change blocked the goal at {}, clearing it", self.goal);
			self.goal_set = false;
			self.grid.clear_field();
			return Err(NavigationError::InvalidGoal(self.goal));
		}
		self.recompute()
	}
	/// Rebuild the integration and flow layers for the current goal
	fn recompute(&mut self) -> Result<(), NavigationError> {
		let (relaxations, flowing) = self.grid.calculate_field(self.goal, &self.model)?;
		debug!(
			"Recalculated field towards {}, {} relaxations, {} cells flowing",
			self.goal, relaxations, flowing
		);
		Ok(())
	}
}
