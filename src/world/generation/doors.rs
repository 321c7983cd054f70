//! Door inference
//!
//! Derives door placements from a finished wall/floor grid. A cell one
//! ring outside a room's rectangle becomes a door only if it is a floor
//! tile flanked by walls on exactly one axis and passable floor on the
//! other; the rule is purely local, so running it after all rooms and
//! corridors are carved classifies corridor openings correctly.

use crate::world::grid::Grid;
use crate::world::layout::{Door, DoorOrientation, Room};

/// Scan every room's perimeter ring for door candidates
pub fn infer_doors(grid: &Grid, rooms: &[Room]) -> Vec<Door> {
    let mut doors: Vec<Door> = Vec::new();
    for room in rooms {
        // Top and bottom edges
        for x in room.x..room.x + room.w {
            check_candidate(grid, &mut doors, x, room.y - 1);
            check_candidate(grid, &mut doors, x, room.y + room.h);
        }
        // Left and right edges
        for y in room.y..room.y + room.h {
            check_candidate(grid, &mut doors, room.x - 1, y);
            check_candidate(grid, &mut doors, room.x + room.w, y);
        }
    }
    doors
}

fn check_candidate(grid: &Grid, doors: &mut Vec<Door>, x: i32, y: i32) {
    // Candidates need a full 4-neighborhood inside the grid
    if x < 1 || x >= grid.width - 1 || y < 1 || y >= grid.height - 1 {
        return;
    }
    // A door sits on a floor tile
    if !grid.is_walkable(x, y) {
        return;
    }
    // A shared wall segment can be scanned from both adjoining rooms
    if doors.iter().any(|d| d.x == x && d.y == y) {
        return;
    }

    let left = grid.is_walkable(x - 1, y);
    let right = grid.is_walkable(x + 1, y);
    let top = grid.is_walkable(x, y - 1);
    let bottom = grid.is_walkable(x, y + 1);

    // Walls above and below, floors left and right
    if !top && !bottom && left && right {
        doors.push(Door::new(x, y, DoorOrientation::Horizontal));
    }
    // Walls left and right, floors above and below
    else if !left && !right && top && bottom {
        doors.push(Door::new(x, y, DoorOrientation::Vertical));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::tile::Tile;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Room at (2,2) 4x4 with a one-tile corridor leaving through the
    /// right wall at y=4
    fn room_with_corridor() -> (Grid, Vec<Room>) {
        let mut grid = Grid::new(12, 9, Tile::Wall);
        let room = Room::new(2, 2, 4, 4);
        for y in room.y..room.y + room.h {
            for x in room.x..room.x + room.w {
                grid.set(x, y, Tile::Floor);
            }
        }
        for x in 6..11 {
            grid.set(x, 4, Tile::Floor);
        }
        (grid, vec![room])
    }

    #[test]
    fn test_corridor_opening_becomes_door() {
        let (grid, rooms) = room_with_corridor();
        let doors = infer_doors(&grid, &rooms);
        assert_eq!(doors.len(), 1);
        let door = doors[0];
        assert_eq!((door.x, door.y), (6, 4));
        // Passage runs left-right, walls flank above and below
        assert_eq!(door.orientation, DoorOrientation::Horizontal);
        assert!(!door.is_open);
    }

    #[test]
    fn test_sealed_room_has_no_doors() {
        let mut grid = Grid::new(10, 10, Tile::Wall);
        let room = Room::new(3, 3, 4, 4);
        for y in room.y..room.y + room.h {
            for x in room.x..room.x + room.w {
                grid.set(x, y, Tile::Floor);
            }
        }
        assert!(infer_doors(&grid, &[room]).is_empty());
    }

    #[test]
    fn test_no_duplicate_doors_for_adjacent_rooms() {
        // Two rooms sharing a corridor cell on the seam scan it twice
        let mut grid = Grid::new(13, 8, Tile::Wall);
        let a = Room::new(1, 2, 4, 4);
        let b = Room::new(8, 2, 4, 4);
        for room in [&a, &b] {
            for y in room.y..room.y + room.h {
                for x in room.x..room.x + room.w {
                    grid.set(x, y, Tile::Floor);
                }
            }
        }
        for x in 5..8 {
            grid.set(x, 4, Tile::Floor);
        }
        let doors = infer_doors(&grid, &[a, b]);
        let mut coords: Vec<(i32, i32)> = doors.iter().map(|d| (d.x, d.y)).collect();
        coords.sort_unstable();
        coords.dedup();
        assert_eq!(coords.len(), doors.len());
    }

    #[test]
    fn test_flank_invariant_on_generated_dungeons() {
        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let layout = super::super::dungeon::generate(60, 40, &mut rng);
            for door in &layout.doors {
                let grid = &layout.grid;
                let (x, y) = (door.x, door.y);
                assert!(grid.is_walkable(x, y));
                let horizontal_flank = !grid.is_walkable(x, y - 1)
                    && !grid.is_walkable(x, y + 1)
                    && grid.is_walkable(x - 1, y)
                    && grid.is_walkable(x + 1, y);
                let vertical_flank = !grid.is_walkable(x - 1, y)
                    && !grid.is_walkable(x + 1, y)
                    && grid.is_walkable(x, y - 1)
                    && grid.is_walkable(x, y + 1);
                // Exactly one axis wall/wall, the other floor/floor
                assert!(
                    horizontal_flank ^ vertical_flank,
                    "seed {}: bad flanking at ({}, {})",
                    seed,
                    x,
                    y
                );
                match door.orientation {
                    DoorOrientation::Horizontal => assert!(horizontal_flank),
                    DoorOrientation::Vertical => assert!(vertical_flank),
                }
            }
        }
    }
}
