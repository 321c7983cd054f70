//! Layout building blocks
//!
//! Rooms, doors, and the immutable bundle a generator hands back.

use super::grid::{Grid, Position};
use crate::token::TILE_SIZE;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangular region of passable tiles.
///
/// Dungeon rooms, forest clearings, and town house blocks all use this
/// shape; it anchors corridor routing and spawn points alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Room {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn center(&self) -> Position {
        Position::new(self.x + self.w / 2, self.y + self.h / 2)
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.x + self.w && y >= self.y && y < self.y + self.h
    }

    /// Overlap test including a 1-tile buffer on every side; two rooms that
    /// merely touch still count as overlapping
    pub fn intersects_buffered(&self, other: &Room) -> bool {
        self.x <= other.x + other.w + 1
            && self.x + self.w + 1 >= other.x
            && self.y <= other.y + other.h + 1
            && self.y + self.h + 1 >= other.y
    }
}

/// Which axis a door's flanking walls sit on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DoorOrientation {
    /// Walls above and below, passage runs left-right
    Horizontal,
    /// Walls left and right, passage runs top-bottom
    Vertical,
}

impl DoorOrientation {
    /// Base sprite rotation in radians for renderers
    pub fn rotation(&self) -> f32 {
        match self {
            DoorOrientation::Horizontal => 0.0,
            DoorOrientation::Vertical => std::f32::consts::FRAC_PI_2,
        }
    }
}

/// A toggleable occlusion point on the grid.
///
/// Doors are the only tile-level entities whose blocking behavior changes
/// at runtime; everything else is fixed once generated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Door {
    pub x: i32,
    pub y: i32,
    pub orientation: DoorOrientation,
    pub is_open: bool,
}

impl Door {
    /// New doors start closed
    pub fn new(x: i32, y: i32, orientation: DoorOrientation) -> Self {
        Self {
            x,
            y,
            orientation,
            is_open: false,
        }
    }
}

/// Everything a terrain generator produces, immutable once returned.
///
/// An empty `rooms` list with no entrance is a valid (if unplayable)
/// result when placement attempts run out; callers must handle it.
#[derive(Debug, Clone)]
pub struct LayoutResult {
    pub grid: Grid,
    pub rooms: Vec<Room>,
    pub doors: Vec<Door>,
    pub entrance: Option<Room>,
}

impl LayoutResult {
    /// World-space spawn point for a default monster: one tile past the
    /// last room's center, where a fresh map drops its starting foe.
    /// `None` when no rooms were placed.
    pub fn default_monster_spawn(&self) -> Option<(f32, f32)> {
        let last = self.rooms.last()?;
        let center = last.center();
        Some((
            center.x as f32 * TILE_SIZE + TILE_SIZE,
            center.y as f32 * TILE_SIZE + TILE_SIZE,
        ))
    }
}
