//! Flood-fill reachability.

use gridstar_core::{Cell, Grid};

/// All open cells 4-connected to `from`, `from` included, in discovery order.
///
/// Empty if `from` is out of bounds or blocked.
pub fn flood_fill(grid: &Grid, from: Cell) -> Vec<Cell> {
    let mut result = Vec::new();
    let Some(si) = grid.index(from).filter(|_| grid.is_open(from)) else {
        return result;
    };

    let mut seen = vec![false; grid.len()];
    let mut stack = vec![si];
    seen[si] = true;
    result.push(from);

    // Iterative DFS.
    while let Some(ci) = stack.pop() {
        for np in grid.cell(ci).neighbors_4() {
            if let Some(ni) = grid.index(np) {
                if !seen[ni] && grid.is_open(np) {
                    seen[ni] = true;
                    stack.push(ni);
                    result.push(np);
                }
            }
        }
    }

    result
}

/// Whether a 4-connected path of open cells joins `a` and `b`.
pub fn connected(grid: &Grid, a: Cell, b: Cell) -> bool {
    grid.is_open(b) && flood_fill(grid, a).contains(&b)
}
