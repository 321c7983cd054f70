//! Forest generator
//!
//! Random tree scatter tightened into clumps by one cellular-automata
//! pass, with an entrance clearing and a farther "boss" clearing found
//! by bounded rejection sampling.

use crate::world::grid::{Grid, Position};
use crate::world::layout::{LayoutResult, Room};
use crate::world::tile::Tile;
use rand::rngs::StdRng;
use rand::Rng;

/// Chance for any interior cell to start as a tree
const TREE_DENSITY: f64 = 0.15;
/// Budget for each clearing search
const CLEARING_ATTEMPTS: u32 = 100;
/// A boss clearing must sit farther than this from the entrance
const MIN_BOSS_DISTANCE: f64 = 20.0;
/// Fallback boss anchor when no clearing fits in the budget
const BOSS_FALLBACK: Room = Room {
    x: 10,
    y: 10,
    w: 1,
    h: 1,
};

pub fn generate(width: i32, height: i32, rng: &mut StdRng) -> LayoutResult {
    let mut grid = Grid::new(width, height, Tile::Grass);

    // Tree border plus random interior scatter
    for y in 0..height {
        for x in 0..width {
            if x == 0 || y == 0 || x == width - 1 || y == height - 1 {
                grid.set(x, y, Tile::Tree);
            } else if rng.gen_bool(TREE_DENSITY) {
                grid.set(x, y, Tile::Tree);
            }
        }
    }

    // One smoothing pass; neighbor counts read the pre-pass grid so the
    // rule stays order-independent
    let mut smoothed = grid.clone();
    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let trees = count_tree_neighbors(&grid, x, y);
            match grid.get(x, y) {
                // A lone tree dies back to grass
                Some(Tile::Tree) if trees < 2 => smoothed.set(x, y, Tile::Grass),
                // Crowded grass fills in
                Some(Tile::Grass) if trees > 5 => smoothed.set(x, y, Tile::Tree),
                _ => {}
            }
        }
    }
    let grid = smoothed;

    let mut rooms: Vec<Room> = Vec::new();

    let entrance = find_clearing(&grid, rng, 3).map(|(x, y)| Room::new(x, y, 3, 3));
    if let Some(entrance) = entrance {
        rooms.push(entrance);
    }

    // Boss clearing: far from the entrance, falling back to a fixed
    // anchor when the budget runs out
    let boss = entrance
        .and_then(|e| find_boss_clearing(&grid, rng, &e))
        .unwrap_or(BOSS_FALLBACK);
    rooms.push(boss);

    log::debug!(
        "Forest {}x{}: entrance {:?}, boss {:?}",
        width,
        height,
        entrance,
        boss
    );

    LayoutResult {
        grid,
        rooms,
        doors: Vec::new(),
        entrance,
    }
}

/// Count tree neighbors in the 8-neighborhood
fn count_tree_neighbors(grid: &Grid, x: i32, y: i32) -> i32 {
    let mut count = 0;
    for dy in -1..=1 {
        for dx in -1..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            if grid.get(x + dx, y + dy) == Some(Tile::Tree) {
                count += 1;
            }
        }
    }
    count
}

/// Rejection-sample a fully clear square window away from the border
fn find_clearing(grid: &Grid, rng: &mut StdRng, side: i32) -> Option<(i32, i32)> {
    if grid.width <= 10 || grid.height <= 10 {
        return None;
    }
    for _ in 0..CLEARING_ATTEMPTS {
        let x = rng.gen_range(5..grid.width - 5);
        let y = rng.gen_range(5..grid.height - 5);
        if is_area_clear(grid, x, y, side, side) {
            return Some((x, y));
        }
    }
    None
}

fn find_boss_clearing(grid: &Grid, rng: &mut StdRng, entrance: &Room) -> Option<Room> {
    if grid.width <= 10 || grid.height <= 10 {
        return None;
    }
    let anchor = Position::new(entrance.x, entrance.y);
    for _ in 0..CLEARING_ATTEMPTS {
        let x = rng.gen_range(5..grid.width - 5);
        let y = rng.gen_range(5..grid.height - 5);
        let dist = Position::new(x, y).euclidean_distance(&anchor);
        if dist > MIN_BOSS_DISTANCE && is_area_clear(grid, x, y, 4, 4) {
            return Some(Room::new(x, y, 4, 4));
        }
    }
    None
}

fn is_area_clear(grid: &Grid, x: i32, y: i32, w: i32, h: i32) -> bool {
    for dy in 0..h {
        for dx in 0..w {
            if !grid.is_walkable(x + dx, y + dy) {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_border_is_always_trees() {
        let mut rng = StdRng::seed_from_u64(3);
        let layout = generate(60, 40, &mut rng);
        let grid = &layout.grid;
        for x in 0..grid.width {
            assert_eq!(grid.get(x, 0), Some(Tile::Tree));
            assert_eq!(grid.get(x, grid.height - 1), Some(Tile::Tree));
        }
        for y in 0..grid.height {
            assert_eq!(grid.get(0, y), Some(Tile::Tree));
            assert_eq!(grid.get(grid.width - 1, y), Some(Tile::Tree));
        }
    }

    #[test]
    fn test_forest_has_no_doors() {
        let mut rng = StdRng::seed_from_u64(5);
        assert!(generate(60, 40, &mut rng).doors.is_empty());
    }

    #[test]
    fn test_entrance_window_is_clear() {
        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let layout = generate(60, 40, &mut rng);
            let Some(entrance) = layout.entrance else {
                // Bounded search may legitimately come up empty
                continue;
            };
            assert_eq!((entrance.w, entrance.h), (3, 3));
            for y in entrance.y..entrance.y + 3 {
                for x in entrance.x..entrance.x + 3 {
                    assert!(layout.grid.is_walkable(x, y), "seed {}", seed);
                }
            }
            // Entrance doubles as the first spawn room
            assert_eq!(layout.rooms.first(), Some(&entrance));
        }
    }

    #[test]
    fn test_boss_clearing_is_far_or_fallback() {
        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let layout = generate(60, 40, &mut rng);
            let boss = *layout.rooms.last().expect("always pushes a boss room");
            if boss == BOSS_FALLBACK {
                continue;
            }
            let entrance = layout.entrance.unwrap();
            let dist = Position::new(boss.x, boss.y)
                .euclidean_distance(&Position::new(entrance.x, entrance.y));
            assert!(dist > MIN_BOSS_DISTANCE, "seed {}: dist {}", seed, dist);
        }
    }

    #[test]
    fn test_neighbor_counting() {
        let mut grid = Grid::new(5, 5, Tile::Grass);
        grid.set(1, 1, Tile::Tree);
        grid.set(2, 1, Tile::Tree);
        grid.set(3, 3, Tile::Tree);
        assert_eq!(count_tree_neighbors(&grid, 2, 2), 3);
        assert_eq!(count_tree_neighbors(&grid, 1, 1), 1);
        assert_eq!(count_tree_neighbors(&grid, 4, 4), 1);
        assert_eq!(count_tree_neighbors(&grid, 0, 4), 0);
    }

    #[test]
    fn test_area_clear_check() {
        let mut grid = Grid::new(8, 8, Tile::Grass);
        assert!(is_area_clear(&grid, 2, 2, 3, 3));
        grid.set(3, 3, Tile::Tree);
        assert!(!is_area_clear(&grid, 2, 2, 3, 3));
        assert!(is_area_clear(&grid, 4, 4, 3, 3));
        // Windows hanging off the grid are never clear
        assert!(!is_area_clear(&grid, 6, 6, 3, 3));
    }

    #[test]
    fn test_terrain_has_both_kinds() {
        let mut rng = StdRng::seed_from_u64(11);
        let layout = generate(60, 40, &mut rng);
        let tiles = layout.grid.tiles();
        assert!(tiles.iter().any(|t| *t == Tile::Tree));
        assert!(tiles.iter().any(|t| *t == Tile::Grass));
    }

    #[test]
    fn test_tiny_grid_degrades_gracefully() {
        let mut rng = StdRng::seed_from_u64(0);
        let layout = generate(8, 8, &mut rng);
        assert!(layout.entrance.is_none());
        assert_eq!(layout.rooms, vec![BOSS_FALLBACK]);
    }
}
