//! The [SwarmSimulator] owns a pool of [Agent]s and advances them one step at
//! a time along the flow field of a [FlowFieldNavigator].
//!
//! A step runs in two phases so the order of the pool never biases the result:
//!
//! 1. Snapshot the position and velocity of every agent and calculate the forces on each of them from that snapshot alone
//! 2. Integrate every agent: add the weighted forces to its velocity, cap the speed, move it and respawn it if it reached the goal
//!
//! An agent whose cell matches the goal is recycled into a random cell of the
//! spawn band at rest, nothing is removed from the pool.
//!

use bevy::log::{trace, warn};
use bevy::math::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::prelude::*;

/// Steers a pool of agents towards the goal of a [FlowFieldNavigator]
#[derive(Clone, Debug)]
pub struct SwarmSimulator {
	/// Pool of agents, never shrinks while stepping
	agents: Vec<Agent>,
	/// Steering parameters
	config: SteeringConfig,
	/// Placement of the grid in world space
	layout: GridLayout,
	/// Source of spawn positions
	rng: StdRng,
}

impl SwarmSimulator {
	/// Create an empty simulator seeded from the operating system
	pub fn new(config: SteeringConfig, layout: GridLayout) -> Self {
		SwarmSimulator {
			agents: Vec::new(),
			config,
			layout,
			rng: StdRng::from_os_rng(),
		}
	}
	/// Create an empty simulator whose spawning is reproducible
	pub fn with_seed(config: SteeringConfig, layout: GridLayout, seed: u64) -> Self {
		SwarmSimulator {
			agents: Vec::new(),
			config,
			layout,
			rng: StdRng::seed_from_u64(seed),
		}
	}
	/// Add `count` agents on random cells of the spawn band, each offset from
	/// its cell centre by up to [SteeringConfig::spawn_jitter]. Returns the
	/// number spawned which is `0` if the spawn band lies outside the grid
	pub fn spawn_agents(&mut self, count: usize, navigator: &FlowFieldNavigator) -> usize {
		let mut spawned = 0;
		for _ in 0..count {
			let Some(cell) = self.random_spawn_cell(navigator) else {
				warn!("Spawn band lies outside the grid, no agents spawned");
				break;
			};
			let jitter = i64::from(self.config.spawn_jitter);
			let offset = Vec2::new(
				self.rng.random_range(-jitter..=jitter) as f32,
				self.rng.random_range(-jitter..=jitter) as f32,
			);
			let position = self.layout.cell_centre(cell) + offset;
			self.agents
				.push(Agent::new(position, self.config.agent_radius, &self.layout));
			spawned += 1;
		}
		spawned
	}
	/// Add a stationary agent at a world position, returns its index
	pub fn spawn_agent_at(&mut self, position: Vec2) -> usize {
		self.agents
			.push(Agent::new(position, self.config.agent_radius, &self.layout));
		self.agents.len() - 1
	}
	/// Remove every agent
	pub fn clear(&mut self) {
		self.agents.clear();
	}
	/// Advance every agent by one step. Returns the number of agents that
	/// reached the goal and were respawned
	pub fn step(&mut self, navigator: &FlowFieldNavigator) -> usize {
		let snapshots = self.snapshot();
		let forces: Vec<SteeringForces> = self
			.agents
			.iter()
			.enumerate()
			.map(|(i, agent)| self.calculate_forces(i, agent, &snapshots, navigator))
			.collect();
		let mut respawned = 0;
		for i in 0..self.agents.len() {
			let total = forces[i].total(&self.config.weights);
			self.integrate(i, total);
			if self.has_arrived(i, navigator) {
				self.respawn(i, navigator);
				respawned += 1;
			}
		}
		trace!("Stepped {} agents, {} respawned", self.agents.len(), respawned);
		respawned
	}
	/// Forces acting on agent `i` given the state at the start of the step
	fn calculate_forces(
		&self,
		i: usize,
		agent: &Agent,
		snapshots: &[AgentSnapshot],
		navigator: &FlowFieldNavigator,
	) -> SteeringForces {
		let cell = agent.cell(&self.layout);
		SteeringForces {
			flow: flow_force(cell, navigator, &self.config),
			separation: separation(i, snapshots, &self.config),
			alignment: alignment(i, snapshots, &self.config),
			cohesion: cohesion(i, snapshots, &self.config),
			obstacle: obstacle_avoidance(agent.position, cell, navigator, &self.layout, &self.config),
		}
	}
	/// Apply the combined force to agent `i` and move it
	fn integrate(&mut self, i: usize, total: Vec2) {
		let unit_speed = self.config.unit_speed;
		let max_steer_force = self.config.max_steer_force;
		let agent = &mut self.agents[i];
		agent.velocity += total * max_steer_force;
		let speed = agent.velocity.length();
		if speed > unit_speed {
			agent.velocity = agent.velocity / speed * unit_speed;
		}
		agent.position += agent.velocity;
		agent.grid_position = self.layout.world_to_grid(agent.position);
	}
	/// Whether agent `i` stands in the goal cell
	fn has_arrived(&self, i: usize, navigator: &FlowFieldNavigator) -> bool {
		navigator.is_goal_set() && self.agents[i].cell(&self.layout) == navigator.get_goal()
	}
	/// Move agent `i` back to the spawn band
	fn respawn(&mut self, i: usize, navigator: &FlowFieldNavigator) {
		match self.random_spawn_cell(navigator) {
			Some(cell) => self.agents[i].respawn(cell, &self.layout),
			None => {
				warn!("Spawn band lies outside the grid, agent {} left at the goal", i);
				self.agents[i].velocity = Vec2::ZERO;
			}
		}
	}
	/// A random passable cell of the spawn band, or any cell of the band when
	/// all of it is blocked
	fn random_spawn_cell(&mut self, navigator: &FlowFieldNavigator) -> Option<Position> {
		let (width, height) = navigator.dimensions();
		let band = self.config.spawn_band_for(width, height)?;
		let mut open = Vec::new();
		for y in band.min_row..=band.max_row {
			for x in band.min_column..=band.max_column {
				let cell = Position::new(x, y);
				if navigator.is_passable(cell) {
					open.push(cell);
				}
			}
		}
		if open.is_empty() {
			let x = self.rng.random_range(band.min_column..=band.max_column);
			let y = self.rng.random_range(band.min_row..=band.max_row);
			return Some(Position::new(x, y));
		}
		let pick = self.rng.random_range(0..open.len());
		Some(open[pick])
	}
	/// The pool of agents
	pub fn agents(&self) -> &[Agent] {
		&self.agents
	}
	/// Position and velocity of every agent, for rendering
	pub fn snapshot(&self) -> Vec<AgentSnapshot> {
		self.agents.iter().map(|a| a.snapshot()).collect()
	}
	/// Number of agents
	pub fn len(&self) -> usize {
		self.agents.len()
	}
	/// Whether the pool is empty
	pub fn is_empty(&self) -> bool {
		self.agents.is_empty()
	}
	/// Steering parameters
	pub fn config(&self) -> &SteeringConfig {
		&self.config
	}
	/// Placement of the grid in world space
	pub fn layout(&self) -> &GridLayout {
		&self.layout
	}
}
