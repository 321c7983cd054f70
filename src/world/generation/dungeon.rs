//! Room and corridor dungeon generator
//!
//! Classic layout: rectangular rooms sampled with rejection on buffered
//! overlap, consecutive rooms chained by L-shaped corridors, doors
//! inferred over the finished grid.

use super::doors;
use crate::world::grid::Grid;
use crate::world::layout::{LayoutResult, Room};
use crate::world::tile::Tile;
use rand::rngs::StdRng;
use rand::Rng;

/// Placement bounds for dungeon generation
#[derive(Debug, Clone, Copy)]
pub struct DungeonConfig {
    pub max_rooms: usize,
    pub min_room_size: i32,
    pub max_room_size: i32,
    pub attempts: u32,
}

impl Default for DungeonConfig {
    fn default() -> Self {
        Self {
            max_rooms: 25,
            min_room_size: 6,
            max_room_size: 12,
            attempts: 100,
        }
    }
}

/// Generate a dungeon with the reference bounds
pub fn generate(width: i32, height: i32, rng: &mut StdRng) -> LayoutResult {
    generate_with(width, height, rng, &DungeonConfig::default())
}

/// Generate a dungeon with explicit placement bounds.
///
/// Zero placed rooms after the attempt budget yields a roomless,
/// entrance-less layout; that is a valid result, not an error.
pub fn generate_with(
    width: i32,
    height: i32,
    rng: &mut StdRng,
    config: &DungeonConfig,
) -> LayoutResult {
    let mut grid = Grid::new(width, height, Tile::Wall);
    let mut rooms: Vec<Room> = Vec::new();

    for _ in 0..config.attempts {
        if rooms.len() >= config.max_rooms {
            break;
        }

        let w = rng.gen_range(config.min_room_size..=config.max_room_size);
        let h = rng.gen_range(config.min_room_size..=config.max_room_size);

        // A sample too big to keep the 1-tile border just spends the attempt
        if w + 2 >= width || h + 2 >= height {
            continue;
        }
        let x = rng.gen_range(1..width - w - 1);
        let y = rng.gen_range(1..height - h - 1);

        let new_room = Room::new(x, y, w, h);
        if rooms.iter().any(|r| new_room.intersects_buffered(r)) {
            continue;
        }

        carve_room(&mut grid, &new_room);
        rooms.push(new_room);
    }

    // Chain consecutive rooms with L-corridors; a coin flip picks which
    // leg is carved first, both legs are always carved
    for i in 1..rooms.len() {
        let prev = rooms[i - 1].center();
        let curr = rooms[i].center();

        if rng.gen_bool(0.5) {
            carve_h_corridor(&mut grid, prev.x, curr.x, prev.y);
            carve_v_corridor(&mut grid, prev.y, curr.y, curr.x);
        } else {
            carve_v_corridor(&mut grid, prev.y, curr.y, prev.x);
            carve_h_corridor(&mut grid, prev.x, curr.x, curr.y);
        }
    }

    // Door inference must run after every room and corridor is carved so
    // corridor-adjacent openings classify correctly
    let doors = doors::infer_doors(&grid, &rooms);
    let entrance = rooms.first().copied();

    log::debug!(
        "Dungeon {}x{}: {} rooms, {} doors",
        width,
        height,
        rooms.len(),
        doors.len()
    );

    LayoutResult {
        grid,
        rooms,
        doors,
        entrance,
    }
}

/// Carve out a room as floor
fn carve_room(grid: &mut Grid, room: &Room) {
    for y in room.y..room.y + room.h {
        for x in room.x..room.x + room.w {
            grid.set(x, y, Tile::Floor);
        }
    }
}

fn carve_h_corridor(grid: &mut Grid, x1: i32, x2: i32, y: i32) {
    for x in x1.min(x2)..=x1.max(x2) {
        grid.set(x, y, Tile::Floor);
    }
}

fn carve_v_corridor(grid: &mut Grid, y1: i32, y2: i32, x: i32) {
    for y in y1.min(y2)..=y1.max(y2) {
        grid.set(x, y, Tile::Floor);
    }
}
