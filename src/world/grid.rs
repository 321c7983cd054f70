//! Grid data structure
//!
//! The row-major 2D tile array backing a battle map, with bounds-checked
//! access. Out-of-bounds reads return `None`, writes are no-ops; drag
//! coordinates translated from screen space routinely land outside the map.

use super::tile::Tile;
use serde::{Deserialize, Serialize};

/// A tile coordinate on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position
    pub fn euclidean_distance(&self, other: &Position) -> f64 {
        let dx = (self.x - other.x) as f64;
        let dy = (self.y - other.y) as f64;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A fixed-size tile grid, dimensions set at generation time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Create a new grid filled with the given tile
    pub fn new(width: i32, height: i32, fill: Tile) -> Self {
        let tiles = vec![fill; (width * height) as usize];
        Self {
            width,
            height,
            tiles,
        }
    }

    /// Rebuild a grid from a flattened row-major tile list.
    /// Returns `None` if the length does not match the dimensions.
    pub fn from_flat(width: i32, height: i32, tiles: Vec<Tile>) -> Option<Self> {
        if width < 0 || height < 0 || tiles.len() != (width * height) as usize {
            return None;
        }
        Some(Self {
            width,
            height,
            tiles,
        })
    }

    /// Convert 2D coordinates to 1D index
    #[inline]
    pub fn xy_to_idx(&self, x: i32, y: i32) -> usize {
        (y * self.width + x) as usize
    }

    /// Check if coordinates are within bounds
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    /// Get tile at position
    pub fn get(&self, x: i32, y: i32) -> Option<Tile> {
        if self.in_bounds(x, y) {
            Some(self.tiles[self.xy_to_idx(x, y)])
        } else {
            None
        }
    }

    /// Set tile at position (no-op out of bounds)
    pub fn set(&mut self, x: i32, y: i32, tile: Tile) {
        if self.in_bounds(x, y) {
            let idx = self.xy_to_idx(x, y);
            self.tiles[idx] = tile;
        }
    }

    /// Check if a position is walkable
    pub fn is_walkable(&self, x: i32, y: i32) -> bool {
        self.get(x, y).map_or(false, |t| t.is_walkable())
    }

    /// Check if a position blocks line of sight (out of bounds counts as opaque)
    pub fn blocks_vision(&self, x: i32, y: i32) -> bool {
        self.get(x, y).map_or(true, |t| t.blocks_vision())
    }

    /// The flattened row-major tile list (the wire form, with width/height)
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }
}
