//! An actor steered across the grid. Actors are pooled, one reaching the goal is
//! moved back to the spawn band rather than removed
//!

use bevy::math::Vec2;

use crate::prelude::*;

/// A steered actor
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Agent {
	/// World position
	pub position: Vec2,
	/// World units moved per step
	pub velocity: Vec2,
	/// Continuous grid coordinate of [Agent::position], cell centres are whole numbers
	pub grid_position: Vec2,
	/// Collision radius
	pub radius: f32,
}

impl Agent {
	/// Create a stationary [Agent] at a world position
	pub fn new(position: Vec2, radius: f32, layout: &GridLayout) -> Self {
		Agent {
			position,
			velocity: Vec2::ZERO,
			grid_position: layout.world_to_grid(position),
			radius,
		}
	}
	/// The cell the agent steers from
	pub fn cell(&self, layout: &GridLayout) -> Position {
		layout.grid_to_cell(self.grid_position)
	}
	/// Place the agent on the centre of `cell` at rest
	pub fn respawn(&mut self, cell: Position, layout: &GridLayout) {
		self.position = layout.cell_centre(cell);
		self.grid_position = Vec2::new(cell.x as f32, cell.y as f32);
		self.velocity = Vec2::ZERO;
	}
	/// Read-only view used for rendering and for force calculation
	pub fn snapshot(&self) -> AgentSnapshot {
		AgentSnapshot {
			position: self.position,
			velocity: self.velocity,
		}
	}
}

/// Position and velocity of an [Agent] at the start of a step
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AgentSnapshot {
	/// World position
	pub position: Vec2,
	/// World units moved per step
	pub velocity: Vec2,
}

// #[rustfmt::skip]
#[cfg(test)]
mod tests {
	use super::*;
	#[test]
	fn new_agent_tracks_grid() {
		let layout = GridLayout::default();
		let agent = Agent::new(layout.cell_centre(Position::new(4, 2)), 4.0, &layout);
		assert_eq!(Vec2::ZERO, agent.velocity);
		assert_eq!(Position::new(4, 2), agent.cell(&layout));
	}
	#[test]
	fn respawn_resets_velocity() {
		let layout = GridLayout::default();
		let mut agent = Agent::new(Vec2::new(60.0, 60.0), 4.0, &layout);
		agent.velocity = Vec2::new(1.5, -0.5);
		agent.respawn(Position::new(1, 8), &layout);
		assert_eq!(Vec2::ZERO, agent.velocity);
		assert_eq!(Vec2::new(105.0, 455.0), agent.position);
		assert_eq!(Position::new(1, 8), agent.cell(&layout));
	}
}
