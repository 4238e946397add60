//! Runs a swarm without any rendering. A small wall is built, a goal is chosen
//! and the swarm is stepped for a fixed number of updates while the positions
//! of a few agents are logged
//!

use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy_flowfield_swarm_plugin::prelude::*;

/// Number of updates to run before exiting
const UPDATES: usize = 300;

fn main() {
	let mut app = App::new();
	app.add_plugins((LogPlugin::default(), FlowFieldSwarmPlugin))
		.insert_resource(setup_context())
		.add_systems(Update, report.after(OrderingSet::Simulate));

	let layout = GridLayout::default();
	for column in 2..8 {
		app.world_mut()
			.send_event(EventPlaceBuilding::Cell(Position::new(column, 5)));
	}
	app.world_mut()
		.send_event(EventSetGoal::World(layout.cell_centre(Position::new(1, 1))));

	for _ in 0..UPDATES {
		app.update();
	}
	let context = app.world().resource::<SwarmContext>();
	info!(
		"Finished with {} agents and {} turrets",
		context.simulator().len(),
		context.buildings().turrets().len()
	);
}

/// Build a 10x10 world with a swarm along the bottom rows
fn setup_context() -> SwarmContext {
	let mut context = SwarmContext::new(
		MovementModel::eight_way(10, 10),
		SteeringConfig::default(),
		GridLayout::default(),
	)
	.unwrap();
	context.spawn_agents(20);
	context
}

/// Log where the first few agents are and which of them the turrets can hit
fn report(context: Res<SwarmContext>, mut tick: Local<usize>) {
	*tick += 1;
	if *tick % 50 != 0 {
		return;
	}
	for (i, agent) in context.simulator().agents().iter().take(3).enumerate() {
		info!("Tick {}: agent {} at {}", *tick, i, agent.grid_position);
	}
	for (turret, agent) in context.turret_targets() {
		info!("Tick {}: turret {} can hit agent {}", *tick, turret, agent);
	}
}
