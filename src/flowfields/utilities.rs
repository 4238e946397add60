//! Useful structures and tools used by the fields
//!

/// Cost value marking a cell as strictly forbidden from being used in a
/// pathing calculation (a wall, obstacle or building)
pub const IMPASSABLE: i32 = -1;
/// Cost of a freshly created cell
pub const DEFAULT_COST: i32 = 1;
/// Distance value of a cell that has not been reached from the goal
pub const UNREACHED: i32 = i32::MAX;

/// Integer `(x, y)` coordinate of a grid cell. `x` is the column and `y` the
/// row, the origin `(0, 0)` sits in the top-left corner of the grid
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Hash)]
pub struct Position {
	/// Column
	pub x: i32,
	/// Row
	pub y: i32,
}

impl Position {
	/// Create a new instance of [Position]
	pub const fn new(x: i32, y: i32) -> Self {
		Position { x, y }
	}
	/// Get the cell reached by taking one step in `direction`
	pub fn step(&self, direction: Direction) -> Position {
		Position::new(self.x + direction.x, self.y + direction.y)
	}
}

impl std::fmt::Display for Position {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "({}, {})", self.x, self.y)
	}
}

/// A unit step between neighbouring cells, each component is one of
/// `{-1, 0, 1}`. [Direction::ZERO] means "no direction" and is stored for the
/// goal and for any cell that cannot reach it
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub struct Direction {
	/// Horizontal component
	pub x: i32,
	/// Vertical component, negative is up
	pub y: i32,
}

impl Direction {
	/// No movement
	pub const ZERO: Direction = Direction::new(0, 0);
	/// Up
	pub const NORTH: Direction = Direction::new(0, -1);
	/// Down
	pub const SOUTH: Direction = Direction::new(0, 1);
	/// Left
	pub const WEST: Direction = Direction::new(-1, 0);
	/// Right
	pub const EAST: Direction = Direction::new(1, 0);
	/// Up-left
	pub const NORTH_WEST: Direction = Direction::new(-1, -1);
	/// Down-left
	pub const SOUTH_WEST: Direction = Direction::new(-1, 1);
	/// Up-right
	pub const NORTH_EAST: Direction = Direction::new(1, -1);
	/// Down-right
	pub const SOUTH_EAST: Direction = Direction::new(1, 1);

	/// Create a new instance of [Direction]
	pub const fn new(x: i32, y: i32) -> Self {
		Direction { x, y }
	}
	/// Whether both components are non-zero
	pub fn is_diagonal(&self) -> bool {
		self.x != 0 && self.y != 0
	}
	/// Whether this is [Direction::ZERO]
	pub fn is_zero(&self) -> bool {
		self.x == 0 && self.y == 0
	}
	/// Whether each component lies within `{-1, 0, 1}`
	pub fn is_unit_step(&self) -> bool {
		(-1..=1).contains(&self.x) && (-1..=1).contains(&self.y)
	}
}

/// Cardinal movement only, in declaration order Up, Down, Left, Right. When
/// two neighbours tie for the cheapest route the earlier direction wins
pub const FOUR_WAY_DIRECTIONS: [Direction; 4] = [
	Direction::NORTH,
	Direction::SOUTH,
	Direction::WEST,
	Direction::EAST,
];

/// Cardinal and diagonal movement. Cardinals are declared first so they win ties
/// against diagonals
pub const EIGHT_WAY_DIRECTIONS: [Direction; 8] = [
	Direction::NORTH,
	Direction::SOUTH,
	Direction::WEST,
	Direction::EAST,
	Direction::NORTH_WEST,
	Direction::SOUTH_WEST,
	Direction::NORTH_EAST,
	Direction::SOUTH_EAST,
];

/// The 8 cells surrounding `cell`, ignoring grid bounds. Useful for scanning the
/// immediate surroundings of an actor
pub fn get_surrounding_cells(cell: Position) -> [Position; 8] {
	let mut cells = [cell; 8];
	for (i, dir) in EIGHT_WAY_DIRECTIONS.iter().enumerate() {
		cells[i] = cell.step(*dir);
	}
	cells
}

// #[rustfmt::skip]
#[cfg(test)]
mod tests {
	use super::*;
	#[test]
	fn step_north_west() {
		let cell = Position::new(4, 4);
		let result = cell.step(Direction::NORTH_WEST);
		let actual = Position::new(3, 3);
		assert_eq!(actual, result);
	}
	#[test]
	fn diagonal_detection() {
		for dir in FOUR_WAY_DIRECTIONS.iter() {
			assert!(!dir.is_diagonal());
		}
		let diagonals = EIGHT_WAY_DIRECTIONS
			.iter()
			.filter(|d| d.is_diagonal())
			.count();
		assert_eq!(4, diagonals);
	}
	#[test]
	fn unit_steps() {
		assert!(Direction::SOUTH_EAST.is_unit_step());
		assert!(!Direction::new(2, 0).is_unit_step());
		assert!(Direction::ZERO.is_zero());
	}
	#[test]
	fn surrounding_cells_of_corner() {
		let result = get_surrounding_cells(Position::new(0, 0));
		assert!(result.contains(&Position::new(-1, -1)));
		assert!(result.contains(&Position::new(1, 1)));
		assert!(!result.contains(&Position::new(0, 0)));
	}
}
