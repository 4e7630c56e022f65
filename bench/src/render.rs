use std::collections::HashSet;
use std::fmt::Write;

use gridstar_core::{Cell, Grid};
use gridstar_paths::Path;

/// Draw `grid` as text with the endpoints and an optional path overlaid.
///
/// `S` start, `G` goal, `*` path, `#` blocked, `.` open; every symbol is
/// followed by a space and the drawing ends with a blank line.
pub fn render(grid: &Grid, start: Cell, goal: Cell, path: Option<&Path>) -> String {
    let on_path: HashSet<Cell> = path.map(|p| p.iter().copied().collect()).unwrap_or_default();
    let mut out = String::with_capacity(grid.len() * 2 + grid.rows() as usize + 1);
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let c = Cell::new(row, col);
            let ch = if c == start {
                'S'
            } else if c == goal {
                'G'
            } else if on_path.contains(&c) {
                '*'
            } else if grid.is_open(c) {
                '.'
            } else {
                '#'
            };
            let _ = write!(out, "{ch} ");
        }
        out.push('\n');
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridstar_paths::{Manhattan, search};

    #[test]
    fn overlay() {
        let grid = Grid::parse("...\n.#.\n...").unwrap();
        let start = Cell::new(0, 0);
        let goal = Cell::new(2, 2);
        let r = search(&grid, start, goal, &Manhattan).unwrap();
        let text = render(&grid, start, goal, r.path.as_ref());
        assert_eq!(text, "S . . \n* # . \n* * G \n\n");
    }

    #[test]
    fn without_path() {
        let grid = Grid::parse(".#.").unwrap();
        let text = render(&grid, Cell::new(0, 0), Cell::new(0, 2), None);
        assert_eq!(text, "S # G \n\n");
    }
}
