//! The [`Grid`] type: a 2D array of [`Terrain`] values.
//!
//! A `Grid` is built mutably by whoever generates it and then handed to
//! searches by shared reference. It owns its buffer outright, so a finished
//! grid can be shared across threads without synchronization.

use std::fmt;
use std::str::FromStr;

use crate::geom::{Cell, Range};
use crate::terrain::Terrain;

/// A `rows × cols` grid of [`Terrain`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "GridRepr")
)]
pub struct Grid {
    cells: Vec<Terrain>,
    rows: i32,
    cols: i32,
}

impl Grid {
    /// Create a new grid of the given dimensions with every cell open.
    pub fn new(rows: i32, cols: i32) -> Self {
        Self::filled(rows, cols, Terrain::Open)
    }

    /// Create a new grid with every cell set to `terrain`.
    pub fn filled(rows: i32, cols: i32, terrain: Terrain) -> Self {
        let rows = rows.max(0);
        let cols = cols.max(0);
        Self {
            cells: vec![terrain; (rows as usize) * (cols as usize)],
            rows,
            cols,
        }
    }

    /// Build a grid from a row-major buffer.
    ///
    /// Fails if a dimension is negative or `cells` does not hold exactly
    /// `rows * cols` values.
    pub fn from_cells(rows: i32, cols: i32, cells: Vec<Terrain>) -> Result<Self, GridError> {
        let expected = (rows >= 0 && cols >= 0).then(|| (rows as usize) * (cols as usize));
        if expected != Some(cells.len()) {
            return Err(GridError::InvalidDimensions {
                rows,
                cols,
                len: cells.len(),
            });
        }
        Ok(Self { cells, rows, cols })
    }

    /// Parse the ASCII form: one line per row, `.` open, `#` blocked.
    ///
    /// Blank lines are skipped and each line is trimmed.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let mut cells = Vec::new();
        let mut rows = 0;
        let mut cols: Option<i32> = None;

        for line in s.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let mut width = 0;
            for (col, ch) in line.chars().enumerate() {
                let terrain = Terrain::from_rune(ch).ok_or(GridError::InvalidRune {
                    ch,
                    cell: Cell::new(rows, col as i32),
                })?;
                cells.push(terrain);
                width += 1;
            }
            match cols {
                None => cols = Some(width),
                Some(w) if w != width => {
                    return Err(GridError::InconsistentSize {
                        row: rows,
                        expected: w,
                        found: width,
                    });
                }
                Some(_) => {}
            }
            rows += 1;
        }

        Ok(Self {
            cells,
            rows,
            cols: cols.unwrap_or(0),
        })
    }

    /// The bounding range of this grid, anchored at (0, 0).
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.rows, self.cols)
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `c` is inside the grid.
    #[inline]
    pub fn contains(&self, c: Cell) -> bool {
        c.row >= 0 && c.col >= 0 && c.row < self.rows && c.col < self.cols
    }

    /// Flat row-major index of `c`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, c: Cell) -> Option<usize> {
        if self.contains(c) {
            Some((c.row as usize) * (self.cols as usize) + (c.col as usize))
        } else {
            None
        }
    }

    /// Inverse of [`index`](Self::index). `idx` must be below [`len`](Self::len).
    #[inline]
    pub fn cell(&self, idx: usize) -> Cell {
        let cols = self.cols.max(1) as usize;
        Cell::new((idx / cols) as i32, (idx % cols) as i32)
    }

    /// The terrain at `c`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, c: Cell) -> Option<Terrain> {
        self.index(c).map(|i| self.cells[i])
    }

    /// Whether `c` is in bounds and open.
    #[inline]
    pub fn is_open(&self, c: Cell) -> bool {
        self.at(c).is_some_and(Terrain::is_open)
    }

    /// Set the terrain at `c`. No-op if out of bounds.
    pub fn set(&mut self, c: Cell, terrain: Terrain) {
        if let Some(i) = self.index(c) {
            self.cells[i] = terrain;
        }
    }

    /// Set every cell of `r` that lies inside the grid to `terrain`.
    pub fn fill_range(&mut self, r: Range, terrain: Terrain) {
        for c in r.intersect(self.bounds()) {
            self.set(c, terrain);
        }
    }

    /// Count how many cells equal `terrain`.
    pub fn count(&self, terrain: Terrain) -> usize {
        self.cells.iter().filter(|&&t| t == terrain).count()
    }

    /// All open cells in row-major order.
    pub fn open_cells(&self) -> Vec<Cell> {
        self.iter()
            .filter_map(|(c, t)| t.is_open().then_some(c))
            .collect()
    }

    /// Row-major iterator over `(Cell, Terrain)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, Terrain)> + '_ {
        self.bounds().iter().zip(self.cells.iter().copied())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols.max(1) as usize) {
            for t in row {
                write!(f, "{}", t.rune())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GridRepr {
    cells: Vec<Terrain>,
    rows: i32,
    cols: i32,
}

#[cfg(feature = "serde")]
impl TryFrom<GridRepr> for Grid {
    type Error = GridError;

    fn try_from(repr: GridRepr) -> Result<Self, Self::Error> {
        Self::from_cells(repr.rows, repr.cols, repr.cells)
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Errors that can occur when building or parsing a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A row's width differs from the first row's.
    InconsistentSize { row: i32, expected: i32, found: i32 },
    /// A character other than `.` or `#` was found.
    InvalidRune { ch: char, cell: Cell },
    /// The buffer length does not match the dimensions, or a dimension is
    /// negative.
    InvalidDimensions { rows: i32, cols: i32, len: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentSize {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid: row {row} has width {found}, expected {expected}"
            ),
            Self::InvalidRune { ch, cell } => {
                write!(f, "grid contains invalid rune \u{201c}{ch}\u{201d} at {cell}")
            }
            Self::InvalidDimensions { rows, cols, len } => {
                write!(f, "grid: {len} cells do not fill {rows}×{cols}")
            }
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: &str = "\
....
.##.
....";

    #[test]
    fn new_and_size() {
        let g = Grid::new(3, 5);
        assert_eq!(g.rows(), 3);
        assert_eq!(g.cols(), 5);
        assert_eq!(g.len(), 15);
        assert_eq!(g.bounds().size(), Cell::new(3, 5));
        assert_eq!(g.count(Terrain::Open), 15);
    }

    #[test]
    fn negative_dimensions_clamp_to_empty() {
        let g = Grid::new(-2, 4);
        assert!(g.is_empty());
        assert!(!g.contains(Cell::ZERO));
    }

    #[test]
    fn set_and_at() {
        let mut g = Grid::new(4, 4);
        let c = Cell::new(2, 3);
        g.set(c, Terrain::Blocked);
        assert_eq!(g.at(c), Some(Terrain::Blocked));
        assert!(!g.is_open(c));
        assert!(g.is_open(Cell::new(0, 0)));
        assert_eq!(g.at(Cell::new(4, 0)), None);
        assert!(!g.is_open(Cell::new(-1, 0)));
        // out of bounds set is ignored
        g.set(Cell::new(9, 9), Terrain::Blocked);
        assert_eq!(g.count(Terrain::Blocked), 1);
    }

    #[test]
    fn index_round_trip() {
        let g = Grid::new(3, 4);
        for c in g.bounds() {
            let i = g.index(c).unwrap();
            assert_eq!(g.cell(i), c);
        }
        assert_eq!(g.index(Cell::new(0, 4)), None);
    }

    #[test]
    fn fill_range_clips_to_bounds() {
        let mut g = Grid::new(3, 3);
        g.fill_range(Range::new(0, 1, 10, 2), Terrain::Blocked);
        assert_eq!(g.count(Terrain::Blocked), 3);
        assert!(!g.is_open(Cell::new(2, 1)));
    }

    #[test]
    fn parse_and_display() {
        let g: Grid = ROOM.parse().unwrap();
        assert_eq!(g.rows(), 3);
        assert_eq!(g.cols(), 4);
        assert_eq!(g.at(Cell::new(1, 1)), Some(Terrain::Blocked));
        assert_eq!(g.at(Cell::new(1, 3)), Some(Terrain::Open));
        assert_eq!(g.to_string(), format!("{ROOM}\n"));
        assert_eq!(g.open_cells().len(), 10);
    }

    #[test]
    fn parse_skips_blank_lines_and_indentation() {
        let g = Grid::parse("\n  ..#\n  #..\n\n").unwrap();
        assert_eq!(g.rows(), 2);
        assert_eq!(g.cols(), 3);
    }

    #[test]
    fn parse_inconsistent_size() {
        let err = Grid::parse("...\n..").unwrap_err();
        assert_eq!(
            err,
            GridError::InconsistentSize {
                row: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn parse_invalid_rune() {
        let err = Grid::parse("..\n.x").unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidRune {
                ch: 'x',
                cell: Cell::new(1, 1)
            }
        );
        assert!(err.to_string().contains("(1, 1)"));
    }

    #[test]
    fn from_cells_checks_dimensions() {
        let g = Grid::from_cells(2, 2, vec![Terrain::Open, Terrain::Blocked, Terrain::Open, Terrain::Open]).unwrap();
        assert_eq!(g.at(Cell::new(0, 1)), Some(Terrain::Blocked));
        assert_eq!(
            Grid::from_cells(3, 3, vec![Terrain::Open]),
            Err(GridError::InvalidDimensions {
                rows: 3,
                cols: 3,
                len: 1
            })
        );
        assert!(Grid::from_cells(-1, 0, Vec::new()).is_err());
        assert!(Grid::from_cells(0, 4, Vec::new()).unwrap().is_empty());
    }

    #[test]
    fn grid_is_shareable_across_threads() {
        fn assert_sync<T: Send + Sync>() {}
        assert_sync::<Grid>();
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g = Grid::parse(".#\n#.").unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }

    #[test]
    fn short_buffer_is_rejected() {
        let err = serde_json::from_str::<Grid>(r#"{"cells":["Open"],"rows":3,"cols":3}"#).unwrap_err();
        assert!(err.to_string().contains("1 cells do not fill 3×3"));
    }

    #[test]
    fn negative_dimensions_are_rejected() {
        assert!(serde_json::from_str::<Grid>(r#"{"cells":[],"rows":-2,"cols":0}"#).is_err());
    }
}
