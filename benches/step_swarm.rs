//! Measure a single step of a swarm of actors flowing across an open world
//!
//! World is 40 cells by 40 cells with 500 actors spawned along the bottom
//!

use bevy_flowfield_swarm_plugin::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Create a context with a goal and a spawned swarm before benchmarking
fn prepare_context(length: usize, depth: usize, actors: usize) -> SwarmContext {
	let mut context = SwarmContext::with_seed(
		MovementModel::eight_way(length, depth),
		SteeringConfig::default(),
		GridLayout::default(),
		0,
	)
	.unwrap();
	context.set_goal(Position::new(length as i32 / 2, 0));
	context.spawn_agents(actors);
	context
}

pub fn criterion_benchmark(c: &mut Criterion) {
	let mut group = c.benchmark_group("algorithm_use");
	group.significance_level(0.05).sample_size(100);
	let mut context = prepare_context(40, 40, 500);
	group.bench_function("step_swarm", |b| b.iter(|| black_box(&mut context).step()));
	group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
