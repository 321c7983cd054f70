//! Tile definitions
//!
//! Terrain and obstacle classification for a single grid cell.

use serde::{Deserialize, Serialize};

/// Types of tiles on the battle map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    // Basic terrain
    Wall,
    Floor,

    // Outdoor terrain
    Grass,
    Cobblestone,

    // Obstacles
    Roof,
    Tree,
    Water,

    // Fixed passable door tile (town layouts); toggleable doors are
    // tracked separately as `Door` entities
    DoorMarker,
}

impl Tile {
    pub fn is_walkable(&self) -> bool {
        matches!(
            self,
            Tile::Floor | Tile::Grass | Tile::Cobblestone | Tile::DoorMarker
        )
    }

    /// Obstacles are rendered as silhouettes but sight does not pass them
    pub fn blocks_vision(&self) -> bool {
        matches!(self, Tile::Wall | Tile::Roof | Tile::Tree | Tile::Water)
    }

    pub fn glyph(&self) -> char {
        match self {
            Tile::Wall => '#',
            Tile::Floor => '.',
            Tile::Grass => ',',
            Tile::Cobblestone => ':',
            Tile::Roof => '▲',
            Tile::Tree => '♣',
            Tile::Water => '≈',
            Tile::DoorMarker => '+',
        }
    }
}

impl Default for Tile {
    fn default() -> Self {
        Tile::Wall
    }
}
