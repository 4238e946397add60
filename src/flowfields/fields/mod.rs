//! The kinds of fields used by the algorithm. Each field is a flat row-major
//! buffer of `width * height` cells addressed by `row * width + column`, so
//! taking a snapshot of a field is a single contiguous copy
//!

pub mod cell_kind_field;
pub mod cost_field;
pub mod flow_field;
pub mod integration_field;

use crate::prelude::*;

/// Backing storage shared by every field
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct FieldData<T> {
	/// Number of columns
	width: usize,
	/// Number of rows
	height: usize,
	/// Cell values, row-major
	cells: Vec<T>,
}

impl<T: Copy> FieldData<T> {
	/// Create a field of `width` by `height` cells all set to `value`
	pub fn new(width: usize, height: usize, value: T) -> Self {
		FieldData {
			width,
			height,
			cells: vec![value; width * height],
		}
	}
	/// Get the `(width, height)` of the field
	pub fn get_dimensions(&self) -> (usize, usize) {
		(self.width, self.height)
	}
	/// Flat index of a cell, [None] when it lies outside the field
	pub fn index(&self, cell: Position) -> Option<usize> {
		if cell.x < 0 || cell.y < 0 {
			return None;
		}
		let (column, row) = (cell.x as usize, cell.y as usize);
		if column < self.width && row < self.height {
			Some(row * self.width + column)
		} else {
			None
		}
	}
	/// The cell at a flat index
	pub fn position_of(&self, index: usize) -> Position {
		Position::new((index % self.width) as i32, (index / self.width) as i32)
	}
}

/// Defines required access to field buffers
pub trait Field<T: Copy> {
	/// Get a reference to the backing storage
	fn data(&self) -> &FieldData<T>;
	/// Get a mutable reference to the backing storage
	fn data_mut(&mut self) -> &mut FieldData<T>;
	/// Get a reference to the row-major cell values
	fn get(&self) -> &[T] {
		&self.data().cells
	}
	/// Get the `(width, height)` of the field
	fn get_dimensions(&self) -> (usize, usize) {
		self.data().get_dimensions()
	}
	/// Whether `cell` lies inside the field
	fn contains(&self, cell: Position) -> bool {
		self.data().index(cell).is_some()
	}
	/// Retrieve a field cell value
	fn get_field_cell_value(&self, cell: Position) -> Result<T, NavigationError> {
		let data = self.data();
		data.index(cell)
			.map(|i| data.cells[i])
			.ok_or(NavigationError::InvalidPosition(cell))
	}
	/// Set a field cell to a value
	fn set_field_cell_value(&mut self, value: T, cell: Position) -> Result<(), NavigationError> {
		let data = self.data_mut();
		let i = data
			.index(cell)
			.ok_or(NavigationError::InvalidPosition(cell))?;
		data.cells[i] = value;
		Ok(())
	}
	/// Set every cell to `value`
	fn fill(&mut self, value: T) {
		self.data_mut().cells.fill(value);
	}
}
