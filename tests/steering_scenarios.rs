//! Drive the swarm through small scenarios, both directly and through the Bevy plugin
//!

use bevy::prelude::*;
use bevy_flowfield_swarm_plugin::prelude::*;

/// Steering with only the flow field and obstacles, no flocking
fn solo_config() -> SteeringConfig {
	SteeringConfig {
		spawn_band: Some(SpawnBand::new(0, 9, 8, 9)),
		..Default::default()
	}
}

#[test]
fn single_agent_reaches_goal_and_respawns() {
	let layout = GridLayout::default();
	let mut nav = FlowFieldNavigator::new(MovementModel::eight_way(10, 10)).unwrap();
	nav.set_goal(Position::new(2, 2)).unwrap();
	let mut sim = SwarmSimulator::with_seed(solo_config(), layout, 21);
	sim.spawn_agent_at(layout.cell_centre(Position::new(2, 4)));
	let cap = sim.config().unit_speed;
	let mut respawned = false;
	for _ in 0..200 {
		let arrived = sim.step(&nav);
		let agent = sim.agents()[0];
		assert!(agent.velocity.length() <= cap + 1e-5);
		if arrived == 1 {
			respawned = true;
			assert_eq!(Vec2::ZERO, agent.velocity);
			let cell = agent.cell(&layout);
			assert!(cell.y >= 8, "respawned into {}", cell);
			break;
		}
	}
	assert!(respawned);
}

#[test]
fn agent_routes_around_wall() {
	let layout = GridLayout::default();
	let mut nav = FlowFieldNavigator::new(MovementModel::eight_way(10, 10)).unwrap();
	// wall across row 5 with a gap at the right
	let mut costs = vec![vec![1; 10]; 10];
	for cost in costs[5].iter_mut().take(8) {
		*cost = IMPASSABLE;
	}
	nav.update_costs(&costs).unwrap();
	nav.set_goal(Position::new(1, 1)).unwrap();
	let mut sim = SwarmSimulator::with_seed(solo_config(), layout, 5);
	sim.spawn_agent_at(layout.cell_centre(Position::new(1, 8)));
	let mut arrived = false;
	for _ in 0..1000 {
		if sim.step(&nav) == 1 {
			arrived = true;
			break;
		}
		// the wall holds the agent on the map until it finds the gap
		let agent = sim.agents()[0];
		assert!(agent.position.y > 0.0 && agent.position.x > 0.0);
	}
	assert!(arrived);
}

#[test]
fn two_close_agents_separate() {
	let layout = GridLayout::default();
	let nav = FlowFieldNavigator::new(MovementModel::eight_way(10, 10)).unwrap();
	let config = SteeringConfig {
		weights: SteeringWeights {
			alignment: 0.0,
			cohesion: 0.0,
			..Default::default()
		},
		..Default::default()
	};
	let mut sim = SwarmSimulator::with_seed(config, layout, 2);
	let centre = layout.cell_centre(Position::new(5, 5));
	sim.spawn_agent_at(centre);
	sim.spawn_agent_at(centre + Vec2::new(8.0, 0.0));
	let before = sim.agents()[0].position.distance(sim.agents()[1].position);
	sim.step(&nav);
	let after = sim.agents()[0].position.distance(sim.agents()[1].position);
	assert!(after > before);
	// both move by the same amount in opposite directions
	let a = sim.agents()[0].velocity;
	let b = sim.agents()[1].velocity;
	assert!((a + b).length() < 1e-5);
}

#[test]
fn step_order_does_not_bias() {
	let layout = GridLayout::default();
	let nav = FlowFieldNavigator::new(MovementModel::eight_way(10, 10)).unwrap();
	let centre = layout.cell_centre(Position::new(5, 5));
	let positions = [
		centre,
		centre + Vec2::new(6.0, 0.0),
		centre + Vec2::new(0.0, 9.0),
	];
	let mut forward = SwarmSimulator::with_seed(SteeringConfig::default(), layout, 1);
	let mut backward = SwarmSimulator::with_seed(SteeringConfig::default(), layout, 1);
	for p in positions.iter() {
		forward.spawn_agent_at(*p);
	}
	for p in positions.iter().rev() {
		backward.spawn_agent_at(*p);
	}
	forward.step(&nav);
	backward.step(&nav);
	let f = forward.snapshot();
	let mut b = backward.snapshot();
	b.reverse();
	assert_eq!(f, b);
}

/// Build an app with the plugin and a context on a 10x10 grid
fn app() -> App {
	let mut app = App::new();
	app.add_plugins(FlowFieldSwarmPlugin);
	let mut context = SwarmContext::with_seed(
		MovementModel::eight_way(10, 10),
		SteeringConfig::default(),
		GridLayout::default(),
		8,
	)
	.unwrap();
	context.spawn_agents(5);
	app.insert_resource(context);
	app
}

#[test]
fn plugin_applies_goal_and_steps() {
	let mut app = app();
	app.world_mut().send_event(EventSetGoal::Cell(Position::new(4, 0)));
	let start = app.world().resource::<SwarmContext>().simulator().snapshot();
	app.update();
	let context = app.world().resource::<SwarmContext>();
	assert!(context.navigator().is_goal_set());
	assert_eq!(Position::new(4, 0), context.navigator().get_goal());
	assert_ne!(start, context.simulator().snapshot());
}

#[test]
fn plugin_ignores_blocked_goal() {
	let mut app = app();
	app.world_mut().send_event(EventSetGoal::Cell(Position::new(1, 1)));
	app.update();
	app.world_mut().send_event(EventPlaceBuilding::Cell(Position::new(3, 3)));
	app.world_mut().send_event(EventSetGoal::Cell(Position::new(3, 3)));
	app.update();
	let context = app.world().resource::<SwarmContext>();
	assert_eq!(Position::new(1, 1), context.navigator().get_goal());
	assert_eq!(1, context.buildings().turrets().len());
	assert!(!context.navigator().is_passable(Position::new(3, 3)));
}

#[test]
fn plugin_applies_newest_costs() {
	let mut app = app();
	let mut blocked = vec![vec![1; 10]; 10];
	blocked[0][0] = IMPASSABLE;
	app.world_mut().send_event(EventUpdateCosts(vec![vec![5; 10]; 10]));
	app.world_mut().send_event(EventUpdateCosts(blocked));
	app.update();
	let context = app.world().resource::<SwarmContext>();
	assert!(!context.navigator().is_passable(Position::new(0, 0)));
	assert_eq!(Ok(1), context.navigator().get_cost(Position::new(1, 0)));
}

#[test]
fn plugin_cost_update_keeps_turrets() {
	let mut app = app();
	app.world_mut().send_event(EventPlaceBuilding::Cell(Position::new(4, 4)));
	app.update();
	app.world_mut().send_event(EventUpdateCosts(vec![vec![1; 10]; 10]));
	app.update();
	let context = app.world().resource::<SwarmContext>();
	assert!(!context.navigator().is_passable(Position::new(4, 4)));
	assert_eq!(
		Ok(CellKind::Building),
		context.navigator().get_grid().get_cell_kind(Position::new(4, 4))
	);
}

#[test]
fn plugin_idle_without_context() {
	let mut app = App::new();
	app.add_plugins(FlowFieldSwarmPlugin);
	app.world_mut().send_event(EventSetGoal::Cell(Position::new(1, 1)));
	app.update();
	assert!(app.world().get_resource::<SwarmContext>().is_none());
}
