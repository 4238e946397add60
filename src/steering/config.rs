//! Tuning for the steering of actors. Distances and speeds are in world units
//! per step, forces are unitless scales applied before the final
//! [SteeringConfig::max_steer_force] clamp
//!

#[cfg(feature = "ron")]
use crate::prelude::NavigationError;

/// Relative influence of each steering force when they are summed. Following
/// the flow and avoiding obstacles outweigh the flocking forces so that a crowd
/// still reaches the goal without pushing through walls
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SteeringWeights {
	/// Following the [crate::prelude::FlowField]
	pub flow: f32,
	/// Moving away from crowded neighbours
	pub separation: f32,
	/// Matching the heading of neighbours
	pub alignment: f32,
	/// Moving towards the centre of neighbours
	pub cohesion: f32,
	/// Pushing away from impassable cells
	pub obstacle: f32,
}

impl Default for SteeringWeights {
	fn default() -> Self {
		SteeringWeights {
			flow: 5.0,
			separation: 0.5,
			alignment: 0.2,
			cohesion: 0.1,
			obstacle: 10.0,
		}
	}
}

/// Inclusive rectangle of cells that actors are spawned into and respawned
/// into once they reach the goal
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpawnBand {
	/// Leftmost column
	pub min_column: i32,
	/// Rightmost column
	pub max_column: i32,
	/// Top row
	pub min_row: i32,
	/// Bottom row
	pub max_row: i32,
}

impl SpawnBand {
	/// Create a new instance of [SpawnBand]
	pub fn new(min_column: i32, max_column: i32, min_row: i32, max_row: i32) -> Self {
		SpawnBand {
			min_column,
			max_column,
			min_row,
			max_row,
		}
	}
	/// The bottom three rows across the full width of a grid
	pub fn bottom_rows(width: usize, height: usize) -> Self {
		let width = width as i32;
		let height = height as i32;
		SpawnBand::new(0, width - 1, (height - 3).max(0), height - 1)
	}
	/// Clip the band to a grid of `(width, height)` cells, [None] if nothing of
	/// it remains
	pub fn clamped(&self, width: usize, height: usize) -> Option<Self> {
		let band = SpawnBand::new(
			self.min_column.max(0),
			self.max_column.min(width as i32 - 1),
			self.min_row.max(0),
			self.max_row.min(height as i32 - 1),
		);
		if band.min_column > band.max_column || band.min_row > band.max_row {
			None
		} else {
			Some(band)
		}
	}
}

/// Parameters of the steering model
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Clone, Debug, PartialEq)]
pub struct SteeringConfig {
	/// Maximum speed of an actor
	pub unit_speed: f32,
	/// Neighbours closer than this push an actor away
	pub separation_radius: f32,
	/// Scale of the separation force
	pub separation_force: f32,
	/// Neighbours closer than this share their heading
	pub alignment_radius: f32,
	/// Scale of the alignment force
	pub alignment_force: f32,
	/// Neighbours closer than this pull an actor towards them
	pub cohesion_radius: f32,
	/// Scale of the cohesion force
	pub cohesion_force: f32,
	/// Scale of the combined force added to velocity each step
	pub max_steer_force: f32,
	/// Scale of a flow direction when turned into a force
	pub flow_force_scale: f32,
	/// Reach of obstacle avoidance measured in cells
	pub obstacle_check_radius: f32,
	/// Collision radius given to new actors
	pub agent_radius: f32,
	/// Largest offset in world units from a cell centre when first spawning
	pub spawn_jitter: u32,
	/// Blend of the individual forces
	pub weights: SteeringWeights,
	/// Where actors appear, the bottom three rows of the grid when [None]
	pub spawn_band: Option<SpawnBand>,
}

impl Default for SteeringConfig {
	fn default() -> Self {
		SteeringConfig {
			unit_speed: 2.0,
			separation_radius: 15.0,
			separation_force: 2.0,
			alignment_radius: 25.0,
			alignment_force: 0.3,
			cohesion_radius: 35.0,
			cohesion_force: 0.2,
			max_steer_force: 0.8,
			flow_force_scale: 0.8,
			obstacle_check_radius: 1.5,
			agent_radius: 4.0,
			spawn_jitter: 10,
			weights: SteeringWeights::default(),
			spawn_band: None,
		}
	}
}

impl SteeringConfig {
	/// Read a [SteeringConfig] from a `ron` file, missing fields take their default
	#[cfg(feature = "ron")]
	pub fn from_ron(path: &str) -> Result<Self, NavigationError> {
		let file = std::fs::File::open(path)
			.map_err(|e| NavigationError::Load(format!("{}: {}", path, e)))?;
		ron::de::from_reader(file).map_err(|e| NavigationError::Load(format!("{}: {}", path, e)))
	}
	/// The band actors spawn into on a grid of `(width, height)` cells
	pub fn spawn_band_for(&self, width: usize, height: usize) -> Option<SpawnBand> {
		self.spawn_band
			.unwrap_or_else(|| SpawnBand::bottom_rows(width, height))
			.clamped(width, height)
	}
}

// #[rustfmt::skip]
#[cfg(test)]
mod tests {
	use super::*;
	#[test]
	fn default_band_is_bottom_three_rows() {
		let config = SteeringConfig::default();
		let band = config.spawn_band_for(10, 10).unwrap();
		assert_eq!(SpawnBand::new(0, 9, 7, 9), band);
	}
	#[test]
	fn short_grid_band() {
		let band = SpawnBand::bottom_rows(4, 2);
		assert_eq!(SpawnBand::new(0, 3, 0, 1), band);
	}
	#[test]
	fn band_clamped_to_grid() {
		let config = SteeringConfig {
			spawn_band: Some(SpawnBand::new(-2, 20, 5, 12)),
			..Default::default()
		};
		assert_eq!(Some(SpawnBand::new(0, 9, 5, 9)), config.spawn_band_for(10, 10));
	}
	#[test]
	fn band_outside_grid() {
		let config = SteeringConfig {
			spawn_band: Some(SpawnBand::new(0, 3, 20, 25)),
			..Default::default()
		};
		assert_eq!(None, config.spawn_band_for(10, 10));
	}
	#[test]
	fn flow_outweighs_flocking() {
		let w = SteeringWeights::default();
		assert!(w.obstacle > w.flow);
		assert!(w.flow > w.separation && w.flow > w.alignment && w.flow > w.cohesion);
	}
	#[test]
	#[cfg(feature = "ron")]
	fn steering_config_ron_file() {
		let path = env!("CARGO_MANIFEST_DIR").to_string() + "/assets/steering.ron";
		let config = SteeringConfig::from_ron(&path).unwrap();
		assert_eq!(3.0, config.unit_speed);
		// unspecified fields keep their defaults
		assert_eq!(15.0, config.separation_radius);
		assert_eq!(Some(SpawnBand::new(0, 9, 8, 9)), config.spawn_band);
	}
}
