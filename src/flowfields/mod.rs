//! Flowfields are a means of handling pathfinding for a crowd of actors.
//!
//! [Fixing Pathfinding Once and For All](https://web.archive.org/web/20150905073624/http://www.ai-blog.net/archives/000152.html)
//!
//! [jdxdev](https://www.jdxdev.com/blog/2020/05/03/flowfields/)
//!
//! [leifnode](https://leifnode.com/2013/12/flow-field-pathfinding/)
//!
//! Rather than each actor searching for its own route a single field is
//! calculated over the whole map, every cell records which neighbour to step
//! into to get closer to the goal. Any number of actors then only need to look
//! up the cell they occupy.
//!
//! Cells are addressed from the top-left corner of the map, `x` increasing to
//! the right and `y` increasing downwards.
//!
//! Definitions:
//!
//! * Grid - a `width x height` area of cells, each cell carrying a cost, a distance, a direction and a classification
//!
//! ```text
//!  _____________________________
//! |__|__|__|__|__|__|__|__|__|__|
//! |__|__|__|__|__|__|__|__|__|__|
//! |__|__|__|__|__|__|__|__|__|__|
//! |__|__|__|__|__|__|__|__|__|__|
//! |__|__|__|__|__|__|__|__|__|__|
//! ```
//!
//! * Cost field - 32-bit field where a value of `-1` represents impassable terrain and any value `>= 0`
//! represents the cost of entering that grid location, 1 being the default. You could define
//! a value of 5 for instance as being a slope or swamp and pathing will try to avoid it
//! * Integration field - uses the cost field as input and stores the calculated cost-to-goal
//! * Flow field - the direction an actor in each cell should step to follow the cheapest route to the goal
//! * Movement model - the allowed steps (4-way or 8-way) and how much more a diagonal step costs
//!

pub mod error;
pub mod fields;
pub mod grid;
pub mod movement;
pub mod navigator;
pub mod utilities;
