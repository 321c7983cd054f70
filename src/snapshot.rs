//! Serializable map snapshot
//!
//! The wire form handed to persistence consumers: the 2D grid flattened
//! to a 1D row-major list with explicit width/height, plus rooms, doors,
//! tokens, and entrance. Round-trips losslessly; the core does no I/O
//! itself, callers decide where the bytes go.

use crate::state::MapState;
use crate::token::Token;
use crate::world::{Door, Grid, LayoutResult, Room, Tile};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error("flat grid has {len} tiles, expected {width}x{height}")]
    GridSizeMismatch { len: usize, width: i32, height: i32 },
}

/// Full map snapshot in flattened wire form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapSnapshot {
    pub flat_grid: Vec<Tile>,
    pub width: i32,
    pub height: i32,
    pub rooms: Vec<Room>,
    pub doors: Vec<Door>,
    pub tokens: Vec<Token>,
    pub entrance: Option<Room>,
    /// Caller-supplied creation stamp; the core reads no clock
    pub created_at: u64,
}

impl MapSnapshot {
    pub fn from_state(state: &MapState, created_at: u64) -> Self {
        let grid = state.grid();
        Self {
            flat_grid: grid.tiles().to_vec(),
            width: grid.width,
            height: grid.height,
            rooms: state.rooms().to_vec(),
            doors: state.doors().to_vec(),
            tokens: state.tokens().to_vec(),
            entrance: state.entrance().copied(),
            created_at,
        }
    }

    /// Rebuild a live map state, restoring door open flags and tokens and
    /// re-deriving visibility from scratch
    pub fn into_state(self) -> Result<MapState, SnapshotError> {
        let len = self.flat_grid.len();
        let grid = Grid::from_flat(self.width, self.height, self.flat_grid).ok_or(
            SnapshotError::GridSizeMismatch {
                len,
                width: self.width,
                height: self.height,
            },
        )?;
        let layout = LayoutResult {
            grid,
            rooms: self.rooms,
            doors: self.doors,
            entrance: self.entrance,
        };
        Ok(MapState::from_parts(layout, self.tokens))
    }
}
