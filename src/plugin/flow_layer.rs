//! Logic relating to moving the goal of the [FlowField] and stepping the swarm
//! along it
//!

use crate::prelude::*;
use bevy::prelude::*;

/// Request the goal be moved, requests on impassable or out of bounds cells are ignored
#[derive(Event, Clone, Copy, Debug)]
pub enum EventSetGoal {
	/// Move the goal to a grid cell
	Cell(Position),
	/// Move the goal to the cell under a world position
	World(Vec2),
}

/// Read [EventSetGoal] and move the goal of the [SwarmContext]
#[cfg(not(tarpaulin_include))]
pub fn process_goal_requests(
	mut events: EventReader<EventSetGoal>,
	mut context: ResMut<SwarmContext>,
) {
	// several requests may arrive in one tick, the newest accepted one wins
	let requests: Vec<EventSetGoal> = events.read().copied().collect();
	for request in requests.iter().rev() {
		let accepted = match *request {
			EventSetGoal::Cell(cell) => context.set_goal(cell),
			EventSetGoal::World(world) => context.set_goal_at_world(world),
		};
		if accepted {
			break;
		}
	}
}

/// Advance the swarm by one step each tick
#[cfg(not(tarpaulin_include))]
pub fn step_swarm(mut context: ResMut<SwarmContext>) {
	let respawned = context.step();
	if respawned > 0 {
		trace!("{} agents reached the goal", respawned);
	}
}
