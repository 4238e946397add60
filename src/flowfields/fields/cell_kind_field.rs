//! A coarse classification of every cell. The classification is informational,
//! pathing only ever looks at the [CostField], but the two are kept in step so
//! that a cell costing [IMPASSABLE] is always an [CellKind::Obstacle] or a
//! [CellKind::Building] and vice versa
//!

use crate::prelude::*;

/// What occupies a cell
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum CellKind {
	/// Open terrain
	#[default]
	Passable,
	/// Impassable terrain such as a wall
	Obstacle,
	/// The cell actors are flowing towards
	Goal,
	/// Impassable player construction
	Building,
}

impl CellKind {
	/// Whether this classification requires the cell to cost [IMPASSABLE]
	pub fn is_blocking(&self) -> bool {
		matches!(self, CellKind::Obstacle | CellKind::Building)
	}
}

/// Per-cell [CellKind]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct CellKindField(FieldData<CellKind>);

impl Field<CellKind> for CellKindField {
	fn data(&self) -> &FieldData<CellKind> {
		&self.0
	}
	fn data_mut(&mut self) -> &mut FieldData<CellKind> {
		&mut self.0
	}
}

impl CellKindField {
	/// Create a new [CellKindField] where every cell is [CellKind::Passable]
	pub fn new(width: usize, height: usize) -> Self {
		CellKindField(FieldData::new(width, height, CellKind::Passable))
	}
	/// Bring every classification in line with the `cost_field` after its costs
	/// have been replaced wholesale. Newly blocked cells become
	/// [CellKind::Obstacle], cells that are no longer blocked revert to
	/// [CellKind::Passable] and everything else keeps its classification
	pub fn sync_with_costs(&mut self, cost_field: &CostField) {
		for (kind, cost) in self.0.cells.iter_mut().zip(cost_field.get().iter()) {
			let blocked = *cost == IMPASSABLE;
			if blocked && !kind.is_blocking() {
				*kind = CellKind::Obstacle;
			} else if !blocked && kind.is_blocking() {
				*kind = CellKind::Passable;
			}
		}
	}
}
