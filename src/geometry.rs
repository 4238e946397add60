//! Mapping between grid cells and the continuous world space actors move in.
//!
//! The grid is drawn from `origin`, the world position of the top-left corner
//! of cell `(0, 0)`, with every cell `cell_size` units square:
//!
//! ```text
//! origin
//!   x_____ _____ _____
//!   |     |     |     |
//!   | 0,0 | 1,0 | 2,0 |
//!   |_____|_____|_____|
//!   |     |     |     |
//!   | 0,1 | 1,1 | 2,1 |
//!   |_____|_____|_____|
//!    <--->
//!  cell_size
//! ```
//!
//! Two coordinate conventions are used. Input (a click) maps a world point to
//! the cell that contains it. Actors instead track a continuous grid
//! coordinate where each cell centre sits on a whole number, truncating it to
//! find the cell they steer from.
//!

use bevy::math::Vec2;

use crate::prelude::*;

/// Size and placement of the grid in world space
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLayout {
	/// Length of a cell side in world units
	pub cell_size: f32,
	/// World position of the top-left corner of the grid
	pub origin: Vec2,
}

impl Default for GridLayout {
	fn default() -> Self {
		GridLayout {
			cell_size: 50.0,
			origin: Vec2::new(30.0, 30.0),
		}
	}
}

impl GridLayout {
	/// Create a new instance of [GridLayout]
	pub fn new(cell_size: f32, origin: Vec2) -> Self {
		GridLayout { cell_size, origin }
	}
	/// World position of the centre of `cell`
	pub fn cell_centre(&self, cell: Position) -> Vec2 {
		let half = self.cell_size / 2.0;
		Vec2::new(
			self.origin.x + cell.x as f32 * self.cell_size + half,
			self.origin.y + cell.y as f32 * self.cell_size + half,
		)
	}
	/// Continuous grid coordinate of a world position, cell centres land on
	/// whole numbers
	pub fn world_to_grid(&self, world: Vec2) -> Vec2 {
		(world - self.origin - Vec2::splat(self.cell_size / 2.0)) / self.cell_size
	}
	/// The cell an actor steers from, truncating the continuous coordinate
	/// towards zero
	pub fn grid_to_cell(&self, grid: Vec2) -> Position {
		Position::new(grid.x as i32, grid.y as i32)
	}
	/// The cell containing a world position, whether or not it is inside the grid
	pub fn world_to_cell(&self, world: Vec2) -> Position {
		let local = (world - self.origin) / self.cell_size;
		Position::new(local.x.floor() as i32, local.y.floor() as i32)
	}
	/// The cell containing a world position, [None] if it lies outside a grid
	/// of `(width, height)` cells
	pub fn world_to_position(&self, world: Vec2, dimensions: (usize, usize)) -> Option<Position> {
		let cell = self.world_to_cell(world);
		let (width, height) = dimensions;
		if cell.x < 0 || cell.y < 0 || cell.x as usize >= width || cell.y as usize >= height {
			None
		} else {
			Some(cell)
		}
	}
}
