//! Player constructions placed on the grid. A building makes its cell
//! impassable so the flow field is rebuilt around it, and every building is a
//! turret with a range within which it can target actors
//!

use bevy::log::{debug, warn};
use bevy::math::Vec2;

use crate::prelude::*;

/// Reasons a building cannot be placed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildingError {
	/// Cell lies outside the grid
	#[error("cannot build at {0}, it is outside the grid")]
	OutOfBounds(Position),
	/// Cell is a wall or another building
	#[error("cannot build at {0}, the cell is impassable")]
	Blocked(Position),
	/// A turret is already recorded on the cell
	#[error("cannot build at {0}, a turret already stands there")]
	Occupied(Position),
	/// Rebuilding the field failed
	#[error(transparent)]
	Navigation(#[from] NavigationError),
}

/// A building able to attack actors within range
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Turret {
	/// Cell the turret occupies
	pub position: Position,
	/// Reach in cells
	pub attack_range: i32,
	/// Attacks per second
	pub attack_speed: f64,
}

impl Turret {
	/// Create a [Turret] with a range of 3 cells attacking once a second
	pub fn new(position: Position) -> Self {
		Turret {
			position,
			attack_range: 3,
			attack_speed: 1.0,
		}
	}
	/// Whether an actor at world position `actor` is within range, measured
	/// between cells. The actor's cell is floored so positions left of or above
	/// the grid origin land in negative cells
	pub fn in_range(&self, actor: Vec2, layout: &GridLayout) -> bool {
		let cell = layout.world_to_cell(actor);
		let dx = (self.position.x - cell.x) as f64;
		let dy = (self.position.y - cell.y) as f64;
		(dx * dx + dy * dy).sqrt() <= self.attack_range as f64
	}
}

/// Tracks the turrets placed on the grid
#[derive(Clone, Debug, Default)]
pub struct BuildingPlacer {
	/// Turrets in placement order
	turrets: Vec<Turret>,
}

impl BuildingPlacer {
	/// Create a new instance of [BuildingPlacer]
	pub fn new() -> Self {
		BuildingPlacer::default()
	}
	/// Place a turret on `cell` and rebuild the flow field around it. A turret
	/// built on the goal is kept even though the goal is cleared
	pub fn place_building(
		&mut self,
		navigator: &mut FlowFieldNavigator,
		cell: Position,
	) -> Result<Turret, BuildingError> {
		if !navigator.is_in_bounds(cell) {
			warn!("Rejected building at {}, outside the grid", cell);
			return Err(BuildingError::OutOfBounds(cell));
		}
		if !navigator.is_passable(cell) {
			warn!("Rejected building at {}, cell is impassable", cell);
			return Err(BuildingError::Blocked(cell));
		}
		if self.turrets.iter().any(|t| t.position == cell) {
			warn!("Rejected building at {}, already occupied", cell);
			return Err(BuildingError::Occupied(cell));
		}
		let turret = Turret::new(cell);
		self.turrets.push(turret);
		match navigator.place_building(cell) {
			Ok(()) => {}
			Err(NavigationError::InvalidGoal(goal)) => {
				warn!("Building at {} displaced the goal {}", cell, goal);
			}
			Err(e) => return Err(e.into()),
		}
		debug!("Placed turret at {}, {} turrets in total", cell, self.turrets.len());
		Ok(turret)
	}
	/// Replace every cost of the `navigator` grid while every recorded turret
	/// keeps its cell blocked
	pub fn update_costs(
		&self,
		navigator: &mut FlowFieldNavigator,
		costs: &[Vec<i32>],
	) -> Result<(), NavigationError> {
		let cells: Vec<Position> = self.turrets.iter().map(|t| t.position).collect();
		navigator.update_costs_with_buildings(costs, &cells)
	}
	/// Turrets in placement order
	pub fn turrets(&self) -> &[Turret] {
		&self.turrets
	}
	/// Indices of the `agents` within range of `turret`
	pub fn agents_in_range(turret: &Turret, agents: &[Agent], layout: &GridLayout) -> Vec<usize> {
		agents
			.iter()
			.enumerate()
			.filter(|(_, a)| turret.in_range(a.position, layout))
			.map(|(i, _)| i)
			.collect()
	}
	/// Every `(turret, agent)` index pair where the agent is within range of the turret
	pub fn targets(&self, agents: &[Agent], layout: &GridLayout) -> Vec<(usize, usize)> {
		let mut targets = Vec::new();
		for (t, turret) in self.turrets.iter().enumerate() {
			for a in BuildingPlacer::agents_in_range(turret, agents, layout) {
				targets.push((t, a));
			}
		}
		targets
	}
}

// #[rustfmt::skip]
#[cfg(test)]
mod tests {
	use super::*;
	/// Open 8-way navigator
	fn navigator() -> FlowFieldNavigator {
		FlowFieldNavigator::new(MovementModel::eight_way(10, 10)).unwrap()
	}
	#[test]
	fn place_blocks_cell() {
		let mut nav = navigator();
		nav.set_goal(Position::new(0, 0)).unwrap();
		let mut placer = BuildingPlacer::new();
		let turret = placer.place_building(&mut nav, Position::new(4, 4)).unwrap();
		assert_eq!(3, turret.attack_range);
		assert_eq!(1.0, turret.attack_speed);
		assert!(!nav.is_passable(Position::new(4, 4)));
		assert_eq!(Ok(CellKind::Building), nav.get_grid().get_cell_kind(Position::new(4, 4)));
		assert_eq!(1, placer.turrets().len());
		assert_eq!(
			Err(NavigationError::NoPath(Position::new(4, 4))),
			nav.get_flow_direction(Position::new(4, 4))
		);
	}
	#[test]
	fn rejections() {
		let mut nav = navigator();
		let mut placer = BuildingPlacer::new();
		assert_eq!(
			Err(BuildingError::OutOfBounds(Position::new(10, 0))),
			placer.place_building(&mut nav, Position::new(10, 0))
		);
		placer.place_building(&mut nav, Position::new(1, 1)).unwrap();
		assert_eq!(
			Err(BuildingError::Blocked(Position::new(1, 1))),
			placer.place_building(&mut nav, Position::new(1, 1))
		);
		// clearing the cell behind the placer's back, the turret record still occupies it
		nav.update_costs(&vec![vec![1; 10]; 10]).unwrap();
		assert_eq!(
			Err(BuildingError::Occupied(Position::new(1, 1))),
			placer.place_building(&mut nav, Position::new(1, 1))
		);
		assert_eq!(1, placer.turrets().len());
	}
	#[test]
	fn cost_update_keeps_turrets_blocking() {
		let mut nav = navigator();
		nav.set_goal(Position::new(0, 0)).unwrap();
		let mut placer = BuildingPlacer::new();
		placer.place_building(&mut nav, Position::new(4, 4)).unwrap();
		placer.update_costs(&mut nav, &vec![vec![1; 10]; 10]).unwrap();
		assert!(!nav.is_passable(Position::new(4, 4)));
		assert_eq!(Ok(CellKind::Building), nav.get_grid().get_cell_kind(Position::new(4, 4)));
		placer.place_building(&mut nav, Position::new(6, 6)).unwrap();
		assert!(!nav.is_passable(Position::new(4, 4)));
		assert!(!nav.is_passable(Position::new(6, 6)));
		assert_eq!(
			Err(BuildingError::Blocked(Position::new(4, 4))),
			placer.place_building(&mut nav, Position::new(4, 4))
		);
		assert_eq!(2, placer.turrets().len());
	}
	#[test]
	fn actor_left_of_origin_is_floored() {
		let layout = GridLayout::default();
		let turret = Turret::new(Position::new(3, 0));
		// x = 20 lies in column -1, four columns from the turret
		assert!(!turret.in_range(Vec2::new(20.0, 55.0), &layout));
		assert!(turret.in_range(Vec2::new(31.0, 55.0), &layout));
	}
	#[test]
	fn building_on_goal_is_kept() {
		let mut nav = navigator();
		nav.set_goal(Position::new(3, 3)).unwrap();
		let mut placer = BuildingPlacer::new();
		assert!(placer.place_building(&mut nav, Position::new(3, 3)).is_ok());
		assert!(!nav.is_goal_set());
		assert_eq!(1, placer.turrets().len());
	}
	#[test]
	fn range_in_cells() {
		let layout = GridLayout::default();
		let turret = Turret::new(Position::new(5, 5));
		assert!(turret.in_range(layout.cell_centre(Position::new(5, 8)), &layout));
		assert!(turret.in_range(layout.cell_centre(Position::new(7, 7)), &layout));
		assert!(!turret.in_range(layout.cell_centre(Position::new(8, 8)), &layout));
		assert!(!turret.in_range(layout.cell_centre(Position::new(5, 9)), &layout));
	}
	#[test]
	fn targets_pairs() {
		let layout = GridLayout::default();
		let mut nav = navigator();
		let mut placer = BuildingPlacer::new();
		placer.place_building(&mut nav, Position::new(0, 0)).unwrap();
		placer.place_building(&mut nav, Position::new(9, 9)).unwrap();
		let agents = vec![
			Agent::new(layout.cell_centre(Position::new(1, 1)), 4.0, &layout),
			Agent::new(layout.cell_centre(Position::new(5, 5)), 4.0, &layout),
			Agent::new(layout.cell_centre(Position::new(8, 9)), 4.0, &layout),
		];
		assert_eq!(vec![0], BuildingPlacer::agents_in_range(&placer.turrets()[0], &agents, &layout));
		assert_eq!(vec![(0, 0), (1, 2)], placer.targets(&agents, &layout));
	}
}
