//! A [Grid] bundles the per-cell layers of a navigation area of fixed size:
//!
//! * [CostField] - the cost of entering each cell, [IMPASSABLE] for walls and buildings
//! * [IntegrationField] - the cumulative cost from each cell to the goal
//! * [FlowField] - the direction to step from each cell towards the goal
//! * [CellKindField] - what occupies each cell
//!
//! The grid never changes itself, all mutation happens through single cell
//! setters or a wholesale replacement of the costs. The integration and flow
//! layers are derived state written by [crate::prelude::FlowFieldNavigator].
//!

use crate::prelude::*;

/// Layers describing every cell of a navigation area
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
	/// Number of columns
	width: usize,
	/// Number of rows
	height: usize,
	/// Cost of entering each cell
	cost_field: CostField,
	/// Cumulative cost to the goal
	integration_field: IntegrationField,
	/// Step towards the goal
	flow_field: FlowField,
	/// Occupant of each cell
	cell_kinds: CellKindField,
}

impl Grid {
	/// Create a [Grid] where every cell is passable with [DEFAULT_COST]
	pub fn new(width: usize, height: usize) -> Self {
		Grid {
			width,
			height,
			cost_field: CostField::new(width, height),
			integration_field: IntegrationField::new(width, height),
			flow_field: FlowField::new(width, height),
			cell_kinds: CellKindField::new(width, height),
		}
	}
	/// Number of columns
	pub fn get_width(&self) -> usize {
		self.width
	}
	/// Number of rows
	pub fn get_height(&self) -> usize {
		self.height
	}
	/// `(width, height)` of the grid
	pub fn get_dimensions(&self) -> (usize, usize) {
		(self.width, self.height)
	}
	/// Whether `cell` lies inside the grid
	pub fn is_valid_position(&self, cell: Position) -> bool {
		self.cost_field.contains(cell)
	}
	/// Whether `cell` lies inside the grid and is not [IMPASSABLE]
	pub fn is_passable(&self, cell: Position) -> bool {
		self.cost_field.is_passable(cell)
	}
	/// Block `cell` as terrain
	pub fn set_obstacle(&mut self, cell: Position) -> Result<(), NavigationError> {
		self.block(cell, CellKind::Obstacle)
	}
	/// Block `cell` with a player construction
	pub fn set_building(&mut self, cell: Position) -> Result<(), NavigationError> {
		self.block(cell, CellKind::Building)
	}
	/// Mark `cell` impassable and classify it as `kind`
	fn block(&mut self, cell: Position, kind: CellKind) -> Result<(), NavigationError> {
		if !self.is_valid_position(cell) {
			return Err(NavigationError::InvalidPosition(cell));
		}
		self.cost_field.set_field_cell_value(IMPASSABLE, cell)?;
		self.cell_kinds.set_field_cell_value(kind, cell)
	}
	/// Assign a non-negative traversal cost to `cell`. A blocked cell becomes
	/// [CellKind::Passable] again, other classifications are kept
	pub fn set_cost(&mut self, cell: Position, cost: i32) -> Result<(), NavigationError> {
		if !self.is_valid_position(cell) {
			return Err(NavigationError::InvalidPosition(cell));
		}
		if cost < 0 {
			return Err(NavigationError::InvalidCost(cost));
		}
		self.cost_field.set_field_cell_value(cost, cell)?;
		if self.cell_kinds.get_field_cell_value(cell)?.is_blocking() {
			self.cell_kinds.set_field_cell_value(CellKind::Passable, cell)?;
		}
		Ok(())
	}
	/// Cost of entering `cell`
	pub fn get_cost(&self, cell: Position) -> Result<i32, NavigationError> {
		self.cost_field.get_field_cell_value(cell)
	}
	/// Cumulative cost from `cell` to the goal, [UNREACHED] if there is no route
	pub fn get_distance(&self, cell: Position) -> Result<i32, NavigationError> {
		self.integration_field.get_field_cell_value(cell)
	}
	/// Stored flow direction of `cell`
	pub fn get_flow_direction(&self, cell: Position) -> Result<Direction, NavigationError> {
		self.flow_field.get_field_cell_value(cell)
	}
	/// What occupies `cell`
	pub fn get_cell_kind(&self, cell: Position) -> Result<CellKind, NavigationError> {
		self.cell_kinds.get_field_cell_value(cell)
	}
	/// Reclassify a passable cell. Blocking kinds must go through
	/// [Grid::set_obstacle] or [Grid::set_building] so the cost stays in step
	pub(crate) fn mark_cell(&mut self, cell: Position, kind: CellKind) -> Result<(), NavigationError> {
		if kind.is_blocking() || !self.is_passable(cell) {
			return Err(NavigationError::InvalidPosition(cell));
		}
		self.cell_kinds.set_field_cell_value(kind, cell)
	}
	/// Replace every cost from a matrix indexed `[row][column]` and bring the
	/// classifications in line. Nothing changes if the matrix is rejected
	pub fn replace_costs(&mut self, rows: &[Vec<i32>]) -> Result<(), NavigationError> {
		self.cost_field.replace_from_rows(rows)?;
		self.cell_kinds.sync_with_costs(&self.cost_field);
		Ok(())
	}
	/// Copy the costs out as a matrix indexed `[row][column]`
	pub fn cost_rows(&self) -> Vec<Vec<i32>> {
		self.cost_field.to_rows()
	}
	/// Forget the derived distances and directions
	pub fn clear_field(&mut self) {
		self.integration_field.fill(UNREACHED);
		self.flow_field.fill(Direction::ZERO);
	}
	/// Rebuild the derived layers for `goal`. Returns the number of relaxations
	/// and the number of cells given a direction
	pub(crate) fn calculate_field(
		&mut self,
		goal: Position,
		model: &MovementModel,
	) -> Result<(usize, usize), NavigationError> {
		self.flow_field.fill(Direction::ZERO);
		let relaxations = self
			.integration_field
			.calculate_field(goal, &self.cost_field, model)?;
		let flowing =
			self.flow_field
				.calculate(goal, &self.cost_field, &self.integration_field, model);
		Ok((relaxations, flowing))
	}
	/// Get a reference to the [CostField]
	pub fn get_cost_field(&self) -> &CostField {
		&self.cost_field
	}
	/// Get a reference to the [IntegrationField]
	pub fn get_integration_field(&self) -> &IntegrationField {
		&self.integration_field
	}
	/// Get a reference to the [FlowField]
	pub fn get_flow_field(&self) -> &FlowField {
		&self.flow_field
	}
	/// Get a reference to the [CellKindField]
	pub fn get_cell_kind_field(&self) -> &CellKindField {
		&self.cell_kinds
	}
}
