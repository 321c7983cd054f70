//! World module
//!
//! Grid data structures, layout primitives, generation, and visibility.

pub mod generation;
pub mod grid;
pub mod layout;
pub mod tile;
pub mod visibility;

pub use generation::Environment;
pub use grid::{Grid, Position};
pub use layout::{Door, DoorOrientation, LayoutResult, Room};
pub use tile::Tile;
pub use visibility::{compute_visibility, VisibilityMatrix};
