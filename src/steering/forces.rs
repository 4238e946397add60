//! The individual steering forces acting on an actor. Each is a pure function of
//! the state at the start of a step and none of them can fail:
//!
//! * Separation - push away from actors inside the separation radius, closer actors push harder
//! * Alignment - match the average velocity of actors inside the alignment radius
//! * Cohesion - pull towards the centre of actors inside the cohesion radius
//! * Obstacle avoidance - push away from impassable cells surrounding the actor
//! * Flow - follow the flow field towards the goal
//!
//! Neighbouring actors are found by scanning every other actor so a step costs
//! `O(n²)` in the number of actors.
//!

use bevy::math::Vec2;

use crate::prelude::*;

/// Every force acting on an actor before weighting
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SteeringForces {
	/// From [flow_force]
	pub flow: Vec2,
	/// From [separation]
	pub separation: Vec2,
	/// From [alignment]
	pub alignment: Vec2,
	/// From [cohesion]
	pub cohesion: Vec2,
	/// From [obstacle_avoidance]
	pub obstacle: Vec2,
}

impl SteeringForces {
	/// Weighted sum of the forces
	pub fn total(&self, weights: &SteeringWeights) -> Vec2 {
		self.flow * weights.flow
			+ self.separation * weights.separation
			+ self.alignment * weights.alignment
			+ self.cohesion * weights.cohesion
			+ self.obstacle * weights.obstacle
	}
}

/// Repulsion of actor `me` from every other actor closer than the separation
/// radius, each contribution scaled by `(radius - distance) / radius`
pub fn separation(me: usize, agents: &[AgentSnapshot], config: &SteeringConfig) -> Vec2 {
	let Some(agent) = agents.get(me) else {
		return Vec2::ZERO;
	};
	let radius = config.separation_radius;
	let mut steer = Vec2::ZERO;
	let mut count = 0;
	for (i, other) in agents.iter().enumerate() {
		if i == me {
			continue;
		}
		let delta = agent.position - other.position;
		// cheap rejection before the square root
		if delta.x.abs() > radius || delta.y.abs() > radius {
			continue;
		}
		let dist = delta.length();
		if dist > 0.0 && dist < radius {
			steer += (delta / dist) * (radius - dist) / radius;
			count += 1;
		}
	}
	if count > 0 {
		steer *= config.separation_force;
	}
	steer
}

/// Steer the velocity of actor `me` towards the average velocity of its
/// neighbours inside the alignment radius
pub fn alignment(me: usize, agents: &[AgentSnapshot], config: &SteeringConfig) -> Vec2 {
	let Some(agent) = agents.get(me) else {
		return Vec2::ZERO;
	};
	let (sum, count) = neighbours(me, agent, agents, config.alignment_radius)
		.fold((Vec2::ZERO, 0), |(sum, count), other| (sum + other.velocity, count + 1));
	if count == 0 {
		return Vec2::ZERO;
	}
	(sum / count as f32 - agent.velocity) * config.alignment_force
}

/// Pull actor `me` towards the centre of its neighbours inside the cohesion radius
pub fn cohesion(me: usize, agents: &[AgentSnapshot], config: &SteeringConfig) -> Vec2 {
	let Some(agent) = agents.get(me) else {
		return Vec2::ZERO;
	};
	let (sum, count) = neighbours(me, agent, agents, config.cohesion_radius)
		.fold((Vec2::ZERO, 0), |(sum, count), other| (sum + other.position, count + 1));
	if count == 0 {
		return Vec2::ZERO;
	}
	(sum / count as f32 - agent.position) * config.cohesion_force
}

/// Other actors strictly inside `radius` of `agent`, ignoring any sharing its position
fn neighbours<'a>(
	me: usize,
	agent: &'a AgentSnapshot,
	agents: &'a [AgentSnapshot],
	radius: f32,
) -> impl Iterator<Item = &'a AgentSnapshot> + 'a {
	agents.iter().enumerate().filter_map(move |(i, other)| {
		if i == me {
			return None;
		}
		let dist = agent.position.distance(other.position);
		(dist > 0.0 && dist < radius).then_some(other)
	})
}

/// Repulsion from the impassable cells among the 8 surrounding `cell` that lie
/// within the obstacle check radius of `position`
pub fn obstacle_avoidance(
	position: Vec2,
	cell: Position,
	navigator: &FlowFieldNavigator,
	layout: &GridLayout,
	config: &SteeringConfig,
) -> Vec2 {
	let reach = layout.cell_size * config.obstacle_check_radius;
	let mut steer = Vec2::ZERO;
	for neighbour in get_surrounding_cells(cell) {
		if !navigator.is_in_bounds(neighbour) || navigator.is_passable(neighbour) {
			continue;
		}
		let delta = position - layout.cell_centre(neighbour);
		let dist = delta.length();
		if dist > 0.0 && dist < reach {
			steer += (delta / dist) * ((reach - dist) / reach);
		}
	}
	steer
}

/// The flow direction of `cell` as a force. Cells without a direction, outside
/// the grid or a missing goal give no force
pub fn flow_force(cell: Position, navigator: &FlowFieldNavigator, config: &SteeringConfig) -> Vec2 {
	match navigator.get_flow_direction(cell) {
		Ok(dir) => Vec2::new(dir.x as f32, dir.y as f32) * config.flow_force_scale,
		Err(_) => Vec2::ZERO,
	}
}
