//! The [SwarmContext] is the single owner of everything the simulation needs:
//! the [FlowFieldNavigator], the [SwarmSimulator], the [BuildingPlacer] and the
//! [GridLayout] tying the grid to world space. Input handling and rendering
//! borrow it rather than reaching for shared global state.
//!
//! It is a Bevy [Resource] so that the systems of
//! [crate::plugin::FlowFieldSwarmPlugin] can drive it, but nothing about it
//! requires an `App`.
//!

use bevy::log::debug;
use bevy::math::Vec2;
use bevy::prelude::Resource;

use crate::prelude::*;

/// Owns the navigator, the swarm and the buildings of one map
#[derive(Resource, Clone, Debug)]
pub struct SwarmContext {
	/// Flow field towards the goal
	navigator: FlowFieldNavigator,
	/// Steered actors
	simulator: SwarmSimulator,
	/// Turrets placed on the map
	buildings: BuildingPlacer,
	/// Placement of the grid in world space
	layout: GridLayout,
}

impl SwarmContext {
	/// Create a new instance of [SwarmContext] with an open grid and no agents
	pub fn new(
		model: MovementModel,
		config: SteeringConfig,
		layout: GridLayout,
	) -> Result<Self, NavigationError> {
		Ok(SwarmContext {
			navigator: FlowFieldNavigator::new(model)?,
			simulator: SwarmSimulator::new(config, layout),
			buildings: BuildingPlacer::new(),
			layout,
		})
	}
	/// Create a new instance of [SwarmContext] whose spawning is reproducible
	pub fn with_seed(
		model: MovementModel,
		config: SteeringConfig,
		layout: GridLayout,
		seed: u64,
	) -> Result<Self, NavigationError> {
		Ok(SwarmContext {
			navigator: FlowFieldNavigator::new(model)?,
			simulator: SwarmSimulator::with_seed(config, layout, seed),
			buildings: BuildingPlacer::new(),
			layout,
		})
	}
	/// Read-only access to the navigator, cost changes go through [SwarmContext::update_costs]
	pub fn navigator(&self) -> &FlowFieldNavigator {
		&self.navigator
	}
	/// The steered actors
	pub fn simulator(&self) -> &SwarmSimulator {
		&self.simulator
	}
	/// Mutable access to the actors, for spawning or clearing them
	pub fn simulator_mut(&mut self) -> &mut SwarmSimulator {
		&mut self.simulator
	}
	/// The placed turrets
	pub fn buildings(&self) -> &BuildingPlacer {
		&self.buildings
	}
	/// Placement of the grid in world space
	pub fn layout(&self) -> &GridLayout {
		&self.layout
	}
	/// Add `count` actors to the spawn band
	pub fn spawn_agents(&mut self, count: usize) -> usize {
		self.simulator.spawn_agents(count, &self.navigator)
	}
	/// Move the goal to `cell`. An out of bounds or impassable cell is ignored
	/// and `false` returned
	pub fn set_goal(&mut self, cell: Position) -> bool {
		match self.navigator.set_goal(cell) {
			Ok(()) => true,
			Err(e) => {
				debug!("Ignoring goal request: {}", e);
				false
			}
		}
	}
	/// Move the goal to the cell under a world position, typically a click.
	/// Positions outside the grid or on impassable cells are ignored
	pub fn set_goal_at_world(&mut self, world: Vec2) -> bool {
		match self
			.layout
			.world_to_position(world, self.navigator.dimensions())
		{
			Some(cell) => self.set_goal(cell),
			None => {
				debug!("Ignoring goal request outside the grid at {}", world);
				false
			}
		}
	}
	/// Replace the costs of the whole grid, see [FlowFieldNavigator::update_costs].
	/// Cells holding a turret stay blocked whatever the new costs say
	pub fn update_costs(&mut self, costs: &[Vec<i32>]) -> Result<(), NavigationError> {
		self.buildings.update_costs(&mut self.navigator, costs)
	}
	/// Replace the costs of the whole grid from a `ron` file
	#[cfg(feature = "ron")]
	pub fn update_costs_from_ron(&mut self, path: &str) -> Result<(), NavigationError> {
		let costs = load_cost_grid_ron(path)?;
		self.update_costs(&costs)
	}
	/// Replace the costs of the whole grid from a `csv` file
	#[cfg(feature = "csv")]
	pub fn update_costs_from_csv(&mut self, path: &str) -> Result<(), NavigationError> {
		let costs = load_cost_grid_csv(path)?;
		self.update_costs(&costs)
	}
	/// Build a turret on `cell`
	pub fn place_building(&mut self, cell: Position) -> Result<Turret, BuildingError> {
		self.buildings.place_building(&mut self.navigator, cell)
	}
	/// Build a turret on the cell under a world position
	pub fn place_building_at_world(&mut self, world: Vec2) -> Result<Turret, BuildingError> {
		match self
			.layout
			.world_to_position(world, self.navigator.dimensions())
		{
			Some(cell) => self.place_building(cell),
			None => Err(BuildingError::OutOfBounds(self.layout.world_to_cell(world))),
		}
	}
	/// Advance the swarm by one step, returns the number of actors respawned
	pub fn step(&mut self) -> usize {
		self.simulator.step(&self.navigator)
	}
	/// Every `(turret, agent)` index pair where the agent is within range of the turret
	pub fn turret_targets(&self) -> Vec<(usize, usize)> {
		self.buildings
			.targets(self.simulator.agents(), &self.layout)
	}
}
