//! Visibility (fog of war) calculation
//!
//! Breadth-first light propagation from every observer tile. Walls and
//! closed doors are visible as silhouettes but sight does not continue
//! past them; the entrance room is revealed unconditionally so players
//! can see the starting area before any token is placed.

use super::grid::{Grid, Position};
use super::layout::{Door, Room};
use std::collections::{HashSet, VecDeque};

/// Per-tile "currently seen" flags, same dimensions as the tile grid.
///
/// Purely derived state: rebuilt wholesale on every relevant mutation,
/// never patched incrementally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilityMatrix {
    pub width: i32,
    pub height: i32,
    cells: Vec<bool>,
}

impl VisibilityMatrix {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            cells: vec![false; (width * height) as usize],
        }
    }

    #[inline]
    fn idx(&self, x: i32, y: i32) -> usize {
        (y * self.width + x) as usize
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    /// Out-of-bounds coordinates are never visible (fail closed)
    pub fn is_visible(&self, x: i32, y: i32) -> bool {
        if self.in_bounds(x, y) {
            self.cells[self.idx(x, y)]
        } else {
            false
        }
    }

    fn set_visible(&mut self, x: i32, y: i32) {
        if self.in_bounds(x, y) {
            let idx = self.idx(x, y);
            self.cells[idx] = true;
        }
    }

    pub fn visible_count(&self) -> usize {
        self.cells.iter().filter(|v| **v).count()
    }

    /// True if every tile visible in `other` is also visible here
    pub fn covers(&self, other: &VisibilityMatrix) -> bool {
        self.width == other.width
            && self.height == other.height
            && self
                .cells
                .iter()
                .zip(other.cells.iter())
                .all(|(mine, theirs)| *mine || !*theirs)
    }
}

/// Compute the visible tile set from scratch.
///
/// Seeds: every observer tile, plus the entrance rectangle (revealed but
/// not expanded from). Expansion is 4-directional; a neighbor becomes
/// visible when the current cell does not block sight, and is expanded
/// from only when it does not block sight itself.
pub fn compute_visibility(
    grid: &Grid,
    doors: &[Door],
    observers: &[Position],
    entrance: Option<&Room>,
) -> VisibilityMatrix {
    let mut matrix = VisibilityMatrix::new(grid.width, grid.height);

    let closed_doors: HashSet<(i32, i32)> = doors
        .iter()
        .filter(|d| !d.is_open)
        .map(|d| (d.x, d.y))
        .collect();
    let blocks = |x: i32, y: i32| grid.blocks_vision(x, y) || closed_doors.contains(&(x, y));

    // Reveal the entrance regardless of reachability
    if let Some(entrance) = entrance {
        for y in entrance.y..entrance.y + entrance.h {
            for x in entrance.x..entrance.x + entrance.w {
                matrix.set_visible(x, y);
            }
        }
    }

    let mut visited = vec![false; (grid.width * grid.height) as usize];
    let mut queue: VecDeque<Position> = VecDeque::new();

    for observer in observers {
        if grid.in_bounds(observer.x, observer.y) {
            let idx = grid.xy_to_idx(observer.x, observer.y);
            if !visited[idx] {
                visited[idx] = true;
                matrix.set_visible(observer.x, observer.y);
                queue.push_back(*observer);
            }
        }
    }

    while let Some(Position { x, y }) = queue.pop_front() {
        // Sight stops at the current cell when it occludes; it stays
        // visible itself but reveals nothing beyond
        if blocks(x, y) {
            continue;
        }

        for (dx, dy) in [(0, 1), (0, -1), (1, 0), (-1, 0)] {
            let nx = x + dx;
            let ny = y + dy;
            if !grid.in_bounds(nx, ny) {
                continue;
            }
            let nidx = grid.xy_to_idx(nx, ny);
            if visited[nidx] {
                continue;
            }
            visited[nidx] = true;
            matrix.set_visible(nx, ny);
            if !blocks(nx, ny) {
                queue.push_back(Position::new(nx, ny));
            }
        }
    }

    matrix
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::layout::DoorOrientation;
    use crate::world::tile::Tile;

    /// 5x3 map, single horizontal corridor along y=1
    fn corridor_grid() -> Grid {
        let mut grid = Grid::new(5, 3, Tile::Wall);
        for x in 1..4 {
            grid.set(x, 1, Tile::Floor);
        }
        grid
    }

    #[test]
    fn test_closed_door_is_visible_but_opaque() {
        let grid = corridor_grid();
        let door = Door::new(2, 1, DoorOrientation::Vertical);
        let observers = [Position::new(1, 1)];

        let fog = compute_visibility(&grid, &[door], &observers, None);
        assert!(fog.is_visible(1, 1));
        // The closed door itself is seen as a silhouette
        assert!(fog.is_visible(2, 1));
        // ...but the floor beyond it is not
        assert!(!fog.is_visible(3, 1));

        // Reopening the door lets sight continue down the corridor
        let open = Door {
            is_open: true,
            ..door
        };
        let fog = compute_visibility(&grid, &[open], &observers, None);
        assert!(fog.is_visible(3, 1));
    }

    #[test]
    fn test_walls_are_silhouettes() {
        let grid = corridor_grid();
        let fog = compute_visibility(&grid, &[], &[Position::new(1, 1)], None);
        // Flanking walls are revealed
        assert!(fog.is_visible(1, 0));
        assert!(fog.is_visible(1, 2));
        assert!(fog.is_visible(0, 1));
        // Nothing propagates past the wall at x=0
        assert!(!fog.is_visible(0, 0));
    }

    #[test]
    fn test_entrance_visible_without_observers() {
        let grid = corridor_grid();
        let entrance = Room::new(1, 1, 2, 1);
        let fog = compute_visibility(&grid, &[], &[], Some(&entrance));
        assert!(fog.is_visible(1, 1));
        assert!(fog.is_visible(2, 1));
        // Entrance reveal does not expand outward
        assert!(!fog.is_visible(3, 1));
        assert_eq!(fog.visible_count(), 2);
    }

    #[test]
    fn test_no_observers_no_entrance_sees_nothing() {
        let fog = compute_visibility(&corridor_grid(), &[], &[], None);
        assert_eq!(fog.visible_count(), 0);
    }

    #[test]
    fn test_adding_observer_is_monotonic() {
        let mut grid = Grid::new(9, 9, Tile::Wall);
        for y in 1..8 {
            for x in 1..8 {
                grid.set(x, y, Tile::Floor);
            }
        }
        grid.set(4, 4, Tile::Wall);

        let one = compute_visibility(&grid, &[], &[Position::new(1, 1)], None);
        let two = compute_visibility(
            &grid,
            &[],
            &[Position::new(1, 1), Position::new(7, 7)],
            None,
        );
        assert!(two.covers(&one));
        assert!(two.visible_count() >= one.visible_count());
    }

    #[test]
    fn test_closing_door_is_monotonic() {
        let grid = corridor_grid();
        let door = Door::new(2, 1, DoorOrientation::Vertical);
        let observers = [Position::new(1, 1)];

        let open = compute_visibility(
            &grid,
            &[Door {
                is_open: true,
                ..door
            }],
            &observers,
            None,
        );
        let closed = compute_visibility(&grid, &[door], &observers, None);
        assert!(open.covers(&closed));
    }

    #[test]
    fn test_out_of_bounds_queries_fail_closed() {
        let fog = VisibilityMatrix::new(3, 3);
        assert!(!fog.is_visible(-1, 0));
        assert!(!fog.is_visible(0, 3));
        assert!(!fog.is_visible(100, 100));
    }

    #[test]
    fn test_out_of_bounds_observer_is_ignored() {
        let grid = corridor_grid();
        let fog = compute_visibility(&grid, &[], &[Position::new(-4, 2)], None);
        assert_eq!(fog.visible_count(), 0);
    }
}
