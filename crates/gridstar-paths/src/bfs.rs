use std::collections::VecDeque;

use gridstar_core::{Cell, Grid};

/// Sentinel distance for cells a breadth-first pass never reached.
pub const UNREACHABLE: u32 = u32::MAX;

/// Breadth-first distance map from `source` over open cells.
///
/// Each step has cost 1. The result is indexed like the grid (row-major);
/// blocked and unreached cells hold [`UNREACHABLE`]. If `source` is not an
/// open in-bounds cell every entry is [`UNREACHABLE`].
pub fn bfs_map(grid: &Grid, source: Cell) -> Vec<u32> {
    let mut dist = vec![UNREACHABLE; grid.len()];
    let Some(si) = grid.index(source).filter(|_| grid.is_open(source)) else {
        return dist;
    };

    let mut queue: VecDeque<usize> = VecDeque::new();
    dist[si] = 0;
    queue.push_back(si);

    while let Some(ci) = queue.pop_front() {
        let nd = dist[ci] + 1;
        for np in grid.cell(ci).neighbors_4() {
            let Some(ni) = grid.index(np) else {
                continue;
            };
            if dist[ni] != UNREACHABLE || !grid.is_open(np) {
                continue;
            }
            dist[ni] = nd;
            queue.push_back(ni);
        }
    }

    dist
}

/// Uninformed shortest move count from `start` to `goal`.
///
/// Returns `None` when the goal is unreachable or either endpoint is not an
/// open in-bounds cell. Used as a baseline to check informed searches.
pub fn bfs_distance(grid: &Grid, start: Cell, goal: Cell) -> Option<u32> {
    let gi = grid.index(goal)?;
    let d = bfs_map(grid, start)[gi];
    (d != UNREACHABLE).then_some(d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances_around_a_wall() {
        let grid = Grid::parse(
            "...
             ##.
             ...",
        )
        .unwrap();
        assert_eq!(bfs_distance(&grid, Cell::new(0, 0), Cell::new(2, 0)), Some(6));
        assert_eq!(bfs_distance(&grid, Cell::new(0, 0), Cell::new(0, 0)), Some(0));
        let map = bfs_map(&grid, Cell::new(0, 0));
        assert_eq!(map[grid.index(Cell::new(1, 0)).unwrap()], UNREACHABLE);
        assert_eq!(map[grid.index(Cell::new(1, 2)).unwrap()], 3);
    }

    #[test]
    fn invalid_endpoints_are_unreachable() {
        let grid = Grid::parse(".#\n..").unwrap();
        assert_eq!(bfs_distance(&grid, Cell::new(0, 1), Cell::new(0, 0)), None);
        assert_eq!(bfs_distance(&grid, Cell::new(0, 0), Cell::new(0, 1)), None);
        assert_eq!(bfs_distance(&grid, Cell::new(0, 0), Cell::new(3, 3)), None);
        assert!(bfs_map(&grid, Cell::new(-1, 0)).iter().all(|&d| d == UNREACHABLE));
    }
}
