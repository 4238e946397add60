//! `use bevy_flowfield_swarm_plugin::prelude::*;` to import common structures and methods
//!

#[doc(hidden)]
pub use crate::flowfields::{
	error::*,
	fields::{cell_kind_field::*, cost_field::*, flow_field::*, integration_field::*, *},
	grid::*,
	movement::*,
	navigator::*,
	utilities::*,
};

#[doc(hidden)]
pub use crate::steering::{agent::*, config::*, forces::*, simulator::*};

#[doc(hidden)]
pub use crate::{
	buildings::*,
	context::*,
	geometry::*,
	plugin::{cost_layer::*, flow_layer::*, *},
};
