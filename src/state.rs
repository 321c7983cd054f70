//! Map state aggregate
//!
//! Owns the generated layout plus the mutable overlays (door open flags,
//! token list) and the derived visibility matrix. Every mutation runs to
//! completion, visibility recomputation included, before returning, so
//! callers always observe a consistent grid/visibility/token state.

use crate::token::{tile_of, Token, TokenKind};
use crate::world::generation::{self, Environment};
use crate::world::{compute_visibility, Door, Grid, LayoutResult, Position, Room, VisibilityMatrix};
use rand::rngs::StdRng;
use thiserror::Error;

/// Recoverable mutation failures; state is never corrupted by one
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("no door at ({x}, {y})")]
    DoorNotFound { x: i32, y: i32 },
    #[error("no token with id \"{id}\"")]
    TokenNotFound { id: String },
}

/// The in-memory battle map: layout, doors, tokens, and fog of war
#[derive(Debug, Clone)]
pub struct MapState {
    grid: Grid,
    rooms: Vec<Room>,
    doors: Vec<Door>,
    entrance: Option<Room>,
    tokens: Vec<Token>,
    visibility: VisibilityMatrix,
}

impl MapState {
    /// Seed a map from a generator result (no tokens yet)
    pub fn new(layout: LayoutResult) -> Self {
        let LayoutResult {
            grid,
            rooms,
            doors,
            entrance,
        } = layout;
        let mut state = Self {
            visibility: VisibilityMatrix::new(grid.width, grid.height),
            grid,
            rooms,
            doors,
            entrance,
            tokens: Vec::new(),
        };
        state.recompute_visibility();
        state
    }

    /// Replace the entire layout atomically, clearing all tokens.
    /// Grid dimensions are preserved for the lifetime of the state.
    pub fn regenerate(&mut self, environment: Environment, rng: &mut StdRng) {
        let layout = generation::generate(environment, self.grid.width, self.grid.height, rng);
        *self = MapState::new(layout);
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn doors(&self) -> &[Door] {
        &self.doors
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn entrance(&self) -> Option<&Room> {
        self.entrance.as_ref()
    }

    /// The current fog-of-war state, re-derived eagerly on every mutation
    pub fn visibility(&self) -> &VisibilityMatrix {
        &self.visibility
    }

    /// Flip the door at a grid cell and return the fresh visibility
    pub fn toggle_door(&mut self, x: i32, y: i32) -> Result<&VisibilityMatrix, MapError> {
        let door = self
            .doors
            .iter_mut()
            .find(|d| d.x == x && d.y == y)
            .ok_or(MapError::DoorNotFound { x, y })?;
        door.is_open = !door.is_open;
        log::debug!("Door at ({}, {}) now open={}", x, y, door.is_open);
        self.recompute_visibility();
        Ok(&self.visibility)
    }

    /// Snap a token to the grid and insert it, or replace the token with
    /// the same id. Returns the snapped position.
    pub fn place_or_move_token(&mut self, mut token: Token) -> (f32, f32) {
        token.snap_to_grid();
        let snapped = (token.x, token.y);
        match self.tokens.iter_mut().find(|t| t.id == token.id) {
            Some(existing) => *existing = token,
            None => self.tokens.push(token),
        }
        self.recompute_visibility();
        snapped
    }

    /// Move an existing token to a raw world position (snapped on the way
    /// in). Unknown ids leave the state untouched.
    pub fn move_token(&mut self, id: &str, raw_x: f32, raw_y: f32) -> Result<(f32, f32), MapError> {
        let token = self
            .tokens
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| MapError::TokenNotFound { id: id.to_string() })?;
        token.x = raw_x;
        token.y = raw_y;
        token.snap_to_grid();
        let snapped = (token.x, token.y);
        self.recompute_visibility();
        Ok(snapped)
    }

    pub fn remove_token(&mut self, id: &str) -> Result<Token, MapError> {
        let idx = self
            .tokens
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| MapError::TokenNotFound { id: id.to_string() })?;
        let token = self.tokens.remove(idx);
        self.recompute_visibility();
        Ok(token)
    }

    /// Fog gate for drag/drop placement; out-of-bounds is never visible
    pub fn is_tile_visible(&self, world_x: f32, world_y: f32) -> bool {
        self.visibility.is_visible(tile_of(world_x), tile_of(world_y))
    }

    /// Whether a token's tile is currently seen. Drives the monster
    /// show/hide rule: hidden monsters are fully removed from render,
    /// not dimmed.
    pub fn is_token_visible(&self, id: &str) -> Result<bool, MapError> {
        let token = self
            .tokens
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| MapError::TokenNotFound { id: id.to_string() })?;
        let (x, y) = token.tile();
        Ok(self.visibility.is_visible(x, y))
    }

    /// Rebuild from parts; used by snapshot restore. Token positions are
    /// trusted to be snapped already (snapping is idempotent anyway).
    pub(crate) fn from_parts(layout: LayoutResult, tokens: Vec<Token>) -> Self {
        let mut state = Self::new(layout);
        for token in tokens {
            state.place_or_move_token(token);
        }
        state
    }

    fn recompute_visibility(&mut self) {
        let observers: Vec<Position> = self
            .tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Player)
            .map(|t| {
                let (x, y) = t.tile();
                Position::new(x, y)
            })
            .collect();
        self.visibility = compute_visibility(
            &self.grid,
            &self.doors,
            &observers,
            self.entrance.as_ref(),
        );
    }
}
