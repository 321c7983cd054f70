//! Town generator
//!
//! Template-driven layout: fixed street and plaza bands, a canal along
//! the east edge, house blocks registered as rooms, and fixed doors
//! opening onto the streets. Only the decorative tree scatter consumes
//! randomness, so the structure is identical across seeds.

use crate::world::grid::Grid;
use crate::world::layout::{LayoutResult, Room};
use crate::world::tile::Tile;
use rand::rngs::StdRng;
use rand::Rng;

/// Chance for a grass cell to grow a decorative tree
const TREE_DENSITY: f64 = 0.08;

/// Fixed entrance on the main street
const ENTRANCE: Room = Room {
    x: 20,
    y: 38,
    w: 2,
    h: 2,
};

pub fn generate(width: i32, height: i32, rng: &mut StdRng) -> LayoutResult {
    let mut grid = Grid::new(width, height, Tile::Grass);
    let mut rooms: Vec<Room> = Vec::new();

    // Main north-south street
    for y in 0..height {
        for x in 18..=22 {
            grid.set(x, y, Tile::Cobblestone);
        }
    }

    // East-west cross street
    for x in 10..30 {
        for y in 16..=20 {
            grid.set(x, y, Tile::Cobblestone);
        }
    }

    // Plaza where the streets meet
    for y in 16..=20 {
        for x in 18..=22 {
            grid.set(x, y, Tile::Cobblestone);
        }
    }

    // Canal along the east edge
    for y in 0..height {
        for x in 32..width {
            grid.set(x, y, Tile::Water);
        }
    }

    // House blocks flanking the main street
    make_house_block(&mut grid, &mut rooms, 8, 10, 16, 14);
    make_house_block(&mut grid, &mut rooms, 8, 18, 15, 23);
    make_house_block(&mut grid, &mut rooms, 24, 11, 31, 15);
    make_house_block(&mut grid, &mut rooms, 24, 19, 31, 25);

    // Small park north of the plaza
    for y in 10..=14 {
        for x in 18..=22 {
            grid.set(x, y, Tile::Grass);
        }
    }

    // Doors opening onto the streets; passable markers, not toggles
    for (x, y) in [(18, 16), (22, 16), (19, 20), (21, 20)] {
        grid.set(x, y, Tile::DoorMarker);
    }

    // Decorative tree scatter over remaining grass
    for y in 0..height {
        for x in 0..width {
            if grid.get(x, y) == Some(Tile::Grass) && rng.gen_bool(TREE_DENSITY) {
                grid.set(x, y, Tile::Tree);
            }
        }
    }

    // A few trees lining the canal
    for y in (8..24).step_by(4) {
        if grid.get(30, y) == Some(Tile::Grass) {
            grid.set(30, y, Tile::Tree);
        }
    }

    log::debug!("Town {}x{}: {} house blocks", width, height, rooms.len());

    LayoutResult {
        grid,
        rooms,
        doors: Vec::new(),
        entrance: Some(ENTRANCE),
    }
}

/// Fill a roof rectangle, stripe interior alleys, register it as a room
fn make_house_block(grid: &mut Grid, rooms: &mut Vec<Room>, x1: i32, y1: i32, x2: i32, y2: i32) {
    for y in y1..=y2 {
        for x in x1..=x2 {
            grid.set(x, y, Tile::Roof);
        }
    }
    // Narrow alleys every few rows for flavor
    for y in (y1 + 2..=y2 - 2).step_by(4) {
        for x in x1 + 1..=x2 - 1 {
            grid.set(x, y, Tile::Cobblestone);
        }
    }
    rooms.push(Room::new(x1, y1, x2 - x1 + 1, y2 - y1 + 1));
}
