//! This is a plugin for Bevy game engine to calculate a single goal FlowField
//! over a grid and steer a flocking swarm of actors along it
//!

pub mod buildings;
pub mod context;
pub mod flowfields;
pub mod geometry;
pub mod plugin;
pub mod steering;

pub mod prelude;
