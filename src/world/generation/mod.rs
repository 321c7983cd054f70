//! Procedural map generation
//!
//! One generator per environment, all meeting the same
//! `generate(width, height, rng) -> LayoutResult` contract.

pub mod doors;
pub mod dungeon;
pub mod forest;
pub mod town;

pub use dungeon::DungeonConfig;

use super::layout::LayoutResult;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// Playing surface variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Dungeon,
    Forest,
    Town,
}

impl Environment {
    pub fn name(&self) -> &'static str {
        match self {
            Environment::Dungeon => "dungeon",
            Environment::Forest => "forest",
            Environment::Town => "town",
        }
    }
}

/// Generate a layout for the given environment
pub fn generate(
    environment: Environment,
    width: i32,
    height: i32,
    rng: &mut StdRng,
) -> LayoutResult {
    let layout = match environment {
        Environment::Dungeon => dungeon::generate(width, height, rng),
        Environment::Forest => forest::generate(width, height, rng),
        Environment::Town => town::generate(width, height, rng),
    };
    log::info!(
        "Generated {} map {}x{} ({} rooms, {} doors)",
        environment.name(),
        width,
        height,
        layout.rooms.len(),
        layout.doors.len()
    );
    layout
}
