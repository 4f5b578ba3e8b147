//! {4, 5} tiling engine
//!
//! - `direction`: the four edge directions and their rotation algebra
//! - `path`: canonical access paths (tile identity)
//! - `chunk`: tiles, neighbor derivation by reflection
//! - `paving`: the viewer's tile, movement, breadth-first surroundings
//! - `walls`: deterministic wall placement

pub mod chunk;
pub mod direction;
pub mod path;
pub mod paving;
pub mod walls;

pub use chunk::{Chunk, origin_half_size};
pub use direction::Direction;
pub use path::{DirectionPath, Rewrite};
pub use paving::{Paving, VisibleTile, find_exit_edge};
pub use walls::WallOracle;
