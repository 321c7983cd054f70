//! Battlegrid - procedural battle maps with fog of war
//!
//! The computational core of a tabletop session surface: terrain
//! generation (dungeon, forest, town), door inference, token grid
//! snapping, and breadth-first visibility. Pure data in, pure data out;
//! rendering, persistence, and networking live in the surrounding shell.

pub mod rng;
pub mod snapshot;
pub mod state;
pub mod token;
pub mod world;

// Re-export commonly used types
pub use snapshot::{MapSnapshot, SnapshotError};
pub use state::{MapError, MapState};
pub use token::{snap, tile_of, SizeCategory, Token, TokenKind, TILE_SIZE};
pub use world::generation::{DungeonConfig, Environment};
pub use world::{
    compute_visibility, Door, DoorOrientation, Grid, LayoutResult, Position, Room, Tile,
    VisibilityMatrix,
};
