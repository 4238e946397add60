//! Logic for handling changes to the costs of the grid, either wholesale
//! replacement of every cost or the placement of buildings. Both end with the
//! [FlowField] rebuilt around the new costs
//!

use crate::prelude::*;
use bevy::prelude::*;

/// Replace every cost of the grid with a matrix indexed `[row][column]`
#[derive(Event, Clone, Debug)]
pub struct EventUpdateCosts(pub Vec<Vec<i32>>);

/// Request a turret to be built
#[derive(Event, Clone, Copy, Debug)]
pub enum EventPlaceBuilding {
	/// Build on a grid cell
	Cell(Position),
	/// Build on the cell under a world position
	World(Vec2),
}

/// Read [EventUpdateCosts] and apply the costs to the [SwarmContext]
#[cfg(not(tarpaulin_include))]
pub fn process_cost_updates(
	mut events: EventReader<EventUpdateCosts>,
	mut context: ResMut<SwarmContext>,
) {
	// every update replaces the whole grid so only the newest one matters
	let Some(latest) = events.read().last() else {
		return;
	};
	if let Err(e) = context.update_costs(&latest.0) {
		warn!("Cost update not applied cleanly: {}", e);
	}
}

/// Read [EventPlaceBuilding] and build turrets on the [SwarmContext]
#[cfg(not(tarpaulin_include))]
pub fn process_building_requests(
	mut events: EventReader<EventPlaceBuilding>,
	mut context: ResMut<SwarmContext>,
) {
	for event in events.read() {
		let result = match *event {
			EventPlaceBuilding::Cell(cell) => context.place_building(cell),
			EventPlaceBuilding::World(world) => context.place_building_at_world(world),
		};
		if let Ok(turret) = result {
			debug!("Turret built at {}", turret.position);
		}
	}
}
