//! Token geometry and grid snapping
//!
//! Tokens live in world (pixel) space but are always re-aligned to the
//! grid after a placement or drag. Odd-footprint tokens center on tile
//! middles, even-footprint tokens on grid lines, so a token's persisted
//! and live positions agree bit-for-bit.

use serde::{Deserialize, Serialize};

/// Side length of one grid tile in world units
pub const TILE_SIZE: f32 = 32.0;

/// Creature size categories and their footprint on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeCategory {
    #[default]
    Medium,
    Large,
    Huge,
    Gargantuan,
    Colossal,
}

impl SizeCategory {
    /// Footprint side length in tiles
    pub fn footprint_tiles(&self) -> i32 {
        match self {
            SizeCategory::Medium => 1,
            SizeCategory::Large => 2,
            SizeCategory::Huge => 3,
            SizeCategory::Gargantuan => 4,
            SizeCategory::Colossal => 5,
        }
    }

    /// Snapping offset: odd footprints center mid-tile, even on grid lines
    pub fn snap_offset(&self) -> f32 {
        if self.footprint_tiles() % 2 == 1 {
            TILE_SIZE / 2.0
        } else {
            0.0
        }
    }
}

/// Snap one world-space axis value to the grid for the given size
pub fn snap(value: f32, size: SizeCategory) -> f32 {
    let offset = size.snap_offset();
    ((value - offset) / TILE_SIZE + 0.5).floor() * TILE_SIZE + offset
}

/// The grid column/row a world-space value falls in
pub fn tile_of(value: f32) -> i32 {
    (value / TILE_SIZE).floor() as i32
}

/// Who controls a token; only player tokens project vision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Player,
    Monster,
}

/// A movable entity on the map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub id: String,
    pub kind: TokenKind,
    /// World-space position (center of the token)
    pub x: f32,
    pub y: f32,
    pub size: SizeCategory,
    /// Opaque renderer handle for the token art
    pub image: Option<String>,
}

impl Token {
    pub fn new(id: impl Into<String>, kind: TokenKind, x: f32, y: f32) -> Self {
        Self {
            id: id.into(),
            kind,
            x,
            y,
            size: SizeCategory::Medium,
            image: None,
        }
    }

    pub fn with_size(mut self, size: SizeCategory) -> Self {
        self.size = size;
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Re-align both axes to the grid for this token's size
    pub fn snap_to_grid(&mut self) {
        self.x = snap(self.x, self.size);
        self.y = snap(self.y, self.size);
    }

    /// The tile this token's center occupies
    pub fn tile(&self) -> (i32, i32) {
        (tile_of(self.x), tile_of(self.y))
    }
}
