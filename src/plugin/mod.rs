//! Defines the Bevy [Plugin] for FlowFieldSwarm
//!
//! The plugin drives a [SwarmContext] resource, which must be inserted by the
//! app. Each update the requests sent through events are applied first and then
//! the swarm is stepped once along the resulting field:
//!
//! ```text
//! EventUpdateCosts ───┐
//! EventPlaceBuilding ─┼──> OrderingSet::Mutate ──> OrderingSet::Simulate
//! EventSetGoal ───────┘
//! ```
//!

use crate::prelude::*;
use bevy::prelude::*;

pub mod cost_layer;
pub mod flow_layer;

/// Order of the plugin systems within [Update]
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum OrderingSet {
	/// Apply cost, building and goal requests
	Mutate,
	/// Step the swarm
	Simulate,
}

/// Registers the events and systems which drive a [SwarmContext]
pub struct FlowFieldSwarmPlugin;

impl Plugin for FlowFieldSwarmPlugin {
	#[cfg(not(tarpaulin_include))]
	fn build(&self, app: &mut App) {
		app.add_event::<cost_layer::EventUpdateCosts>()
			.add_event::<cost_layer::EventPlaceBuilding>()
			.add_event::<flow_layer::EventSetGoal>()
			.configure_sets(Update, (OrderingSet::Mutate, OrderingSet::Simulate).chain())
			.configure_sets(Update, OrderingSet::Mutate.run_if(resource_exists::<SwarmContext>))
			.configure_sets(Update, OrderingSet::Simulate.run_if(resource_exists::<SwarmContext>))
			.add_systems(
				Update,
				(
					(
						cost_layer::process_cost_updates,
						cost_layer::process_building_requests,
						flow_layer::process_goal_requests,
					)
						.chain()
						.in_set(OrderingSet::Mutate),
					flow_layer::step_swarm.in_set(OrderingSet::Simulate),
				),
			);
	}
}
