//! Local steering of a crowd along a flow field.
//!
//! Each actor blends the direction stored in the flow field with the classic
//! flocking behaviours of Reynolds' boids and a reactive push away from nearby
//! walls:
//!
//! [Steering Behaviors For Autonomous Characters](https://www.red3d.com/cwr/steer/gdc99/)
//!
//! ```text
//!   flow ──────────┐
//!   separation ────┤
//!   alignment ─────┼──> weighted sum ──> velocity (capped) ──> position
//!   cohesion ──────┤
//!   obstacles ─────┘
//! ```
//!

pub mod agent;
pub mod config;
pub mod forces;
pub mod simulator;
