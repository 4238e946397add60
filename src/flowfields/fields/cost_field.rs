//! The CostField contains a 2D array of 32-bit values. The values correspond to
//! the cost of entering that cell. A value of 1 is the default, a value of `-1`
//! is a special case that indicates that the field cell is strictly forbidden
//! from being used in a pathing calculation (effectively saying there is a wall
//! or building there). Any other non-negative value indicates a harder cost of
//! movement which could be from a slope or marshland or others.
//!
//! An example cost field may look:
//!
//! ```text
//!  ___________________________________________________________
//! |     |     |     |     |     |     |     |     |     |     |
//! |  1  |  1  |  1  |  1  |  1  |  1  |  1  |  1  |  1  |  1  |
//! |_____|_____|_____|_____|_____|_____|_____|_____|_____|_____|
//! |     |     |     |     |     |     |     |     |     |     |
//! |  1  |  1  |  1  |  1  |  1  | -1  | -1  | -1  | -1  | -1  |
//! |_____|_____|_____|_____|_____|_____|_____|_____|_____|_____|
//! |     |     |     |     |     |     |     |     |     |     |
//! |  1  |  1  |  1  |  1  |  1  |  1  |  1  |  5  |  5  |  1  |
//! |_____|_____|_____|_____|_____|_____|_____|_____|_____|_____|
//! |     |     |     |     |     |     |     |     |     |     |
//! |  1  |  1  |  1  |  1  |  1  |  1  |  1  |  1  |  1  |  1  |
//! |_____|_____|_____|_____|_____|_____|_____|_____|_____|_____|
//! ```
//!

use crate::prelude::*;

/// Cost of entering each cell
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct CostField(FieldData<i32>);

impl Field<i32> for CostField {
	fn data(&self) -> &FieldData<i32> {
		&self.0
	}
	fn data_mut(&mut self) -> &mut FieldData<i32> {
		&mut self.0
	}
}

impl CostField {
	/// Create a new [CostField] where every cell is passable with [DEFAULT_COST]
	pub fn new(width: usize, height: usize) -> Self {
		CostField(FieldData::new(width, height, DEFAULT_COST))
	}
	/// Whether `cell` is inside the field and not [IMPASSABLE]
	pub fn is_passable(&self, cell: Position) -> bool {
		matches!(self.get_field_cell_value(cell), Ok(cost) if cost != IMPASSABLE)
	}
	/// Check that a matrix of `rows` has the same dimensions as this field and
	/// only contains non-negative costs or [IMPASSABLE]
	pub fn validate_rows(&self, rows: &[Vec<i32>]) -> Result<(), NavigationError> {
		let (width, height) = self.get_dimensions();
		if rows.len() != height {
			let found_width = rows.first().map_or(0, |r| r.len());
			return Err(NavigationError::DimensionMismatch {
				expected: (width, height),
				found: (found_width, rows.len()),
			});
		}
		for row in rows.iter() {
			if row.len() != width {
				return Err(NavigationError::DimensionMismatch {
					expected: (width, height),
					found: (row.len(), rows.len()),
				});
			}
			if let Some(bad) = row.iter().find(|c| **c < IMPASSABLE) {
				return Err(NavigationError::InvalidCost(*bad));
			}
		}
		Ok(())
	}
	/// Replace every cell cost from a matrix indexed `[row][column]`. Nothing is
	/// applied unless the whole matrix is valid
	pub fn replace_from_rows(&mut self, rows: &[Vec<i32>]) -> Result<(), NavigationError> {
		self.validate_rows(rows)?;
		let data = self.data_mut();
		if data.width == 0 {
			return Ok(());
		}
		for (dest, src) in data.cells.chunks_mut(data.width).zip(rows.iter()) {
			dest.copy_from_slice(src);
		}
		Ok(())
	}
	/// Copy the costs out as a matrix indexed `[row][column]`
	pub fn to_rows(&self) -> Vec<Vec<i32>> {
		let (width, height) = self.get_dimensions();
		if width == 0 {
			return vec![Vec::new(); height];
		}
		self.get().chunks(width).map(|r| r.to_vec()).collect()
	}
}

/// From a `ron` file containing a list of rows generate a cost matrix
#[cfg(feature = "ron")]
pub fn load_cost_grid_ron(path: &str) -> Result<Vec<Vec<i32>>, NavigationError> {
	let file = std::fs::File::open(path)
		.map_err(|e| NavigationError::Load(format!("{}: {}", path, e)))?;
	ron::de::from_reader(file).map_err(|e| NavigationError::Load(format!("{}: {}", path, e)))
}

/// From a `csv` file where each line is a row of comma separated costs generate
/// a cost matrix
#[cfg(feature = "csv")]
pub fn load_cost_grid_csv(path: &str) -> Result<Vec<Vec<i32>>, NavigationError> {
	let mut reader = csv::ReaderBuilder::new()
		.has_headers(false)
		.trim(csv::Trim::All)
		.from_path(path)
		.map_err(|e| NavigationError::Load(format!("{}: {}", path, e)))?;
	let mut rows = Vec::new();
	for record in reader.deserialize::<Vec<i32>>() {
		let row = record.map_err(|e| NavigationError::Load(format!("{}: {}", path, e)))?;
		rows.push(row);
	}
	Ok(rows)
}
