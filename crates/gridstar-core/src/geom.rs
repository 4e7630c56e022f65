//! Geometry primitives: [`Cell`] and [`Range`].
//!
//! Coordinates are `(row, col)` pairs. Rows grow downward, columns grow to
//! the right, and iteration is always row-major.

use std::fmt;
use std::ops::Add;

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// An integer grid coordinate. Value type with no identity beyond its
/// coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// The four unit moves in the fixed visiting order: up, down, left, right.
    const UNIT_MOVES: [Cell; 4] = [
        Cell::new(-1, 0),
        Cell::new(1, 0),
        Cell::new(0, -1),
        Cell::new(0, 1),
    ];

    /// Create a new cell.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a cell shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// Whether the cell is inside the half-open range.
    #[inline]
    pub fn in_range(self, r: &Range) -> bool {
        r.contains(self)
    }

    /// The four axis-aligned neighbours, in the order up, down, left, right.
    ///
    /// Neighbours may lie outside any particular grid; callers filter.
    #[inline]
    pub fn neighbors_4(self) -> [Cell; 4] {
        Self::UNIT_MOVES.map(|d| self + d)
    }

    /// Whether `other` is exactly one unit move away.
    #[inline]
    pub fn is_adjacent(self, other: Cell) -> bool {
        (self.row - other.row).abs() + (self.col - other.col).abs() == 1
    }
}

// --- trait impls for Cell ---

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Cell {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl Add for Cell {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// A half-open rectangle \[min, max). `min` is inclusive, `max` is exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Cell,
    pub max: Cell,
}

impl Range {
    /// Create a new range from two corners, canonicalized so that
    /// `min` ≤ `max` on each axis.
    #[inline]
    pub fn new(row0: i32, col0: i32, row1: i32, col1: i32) -> Self {
        Self {
            min: Cell::new(row0.min(row1), col0.min(col1)),
            max: Cell::new(row0.max(row1), col0.max(col1)),
        }
    }

    /// Size as a `Cell` (row = number of rows, col = number of columns).
    #[inline]
    pub fn size(self) -> Cell {
        Cell::new(self.rows(), self.cols())
    }

    /// Number of rows.
    #[inline]
    pub fn rows(self) -> i32 {
        self.max.row - self.min.row
    }

    /// Number of columns.
    #[inline]
    pub fn cols(self) -> i32 {
        self.max.col - self.min.col
    }

    /// Reduces the range to **relative** row `r` (0 = first row of the range).
    ///
    /// Returns an empty range if `r` is out of bounds.
    #[inline]
    pub fn row(self, r: i32) -> Self {
        if self.min.shift(r, 0).in_range(&self) {
            Self {
                min: Cell::new(self.min.row + r, self.min.col),
                max: Cell::new(self.min.row + r + 1, self.max.col),
            }
        } else {
            Self::default()
        }
    }

    /// Reduces the range to **relative** column `c` (0 = first column).
    ///
    /// Returns an empty range if `c` is out of bounds.
    #[inline]
    pub fn column(self, c: i32) -> Self {
        if self.min.shift(0, c).in_range(&self) {
            Self {
                min: Cell::new(self.min.row, self.min.col + c),
                max: Cell::new(self.max.row, self.min.col + c + 1),
            }
        } else {
            Self::default()
        }
    }

    /// Total number of cells in the range.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.rows() as usize) * (self.cols() as usize)
    }

    /// Whether the range has zero or negative area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.row >= self.max.row || self.min.col >= self.max.col
    }

    /// Whether `c` is inside the half-open range.
    #[inline]
    pub fn contains(self, c: Cell) -> bool {
        c.row >= self.min.row && c.row < self.max.row && c.col >= self.min.col && c.col < self.max.col
    }

    /// Intersection of two ranges. Disjoint ranges yield the empty range.
    #[inline]
    pub fn intersect(self, other: Range) -> Self {
        let r = Self {
            min: Cell::new(self.min.row.max(other.min.row), self.min.col.max(other.min.col)),
            max: Cell::new(self.max.row.min(other.max.row), self.max.col.min(other.max.col)),
        };
        if r.is_empty() { Self::default() } else { r }
    }

    /// Row-major iterator over every cell in the range.
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            cur: self.min,
        }
    }
}

impl IntoIterator for Range {
    type Item = Cell;
    type IntoIter = RangeIter;
    #[inline]
    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{})", self.min, self.max)
    }
}

// ---------------------------------------------------------------------------
// RangeIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the cells in a [`Range`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    cur: Cell,
}

impl Iterator for RangeIter {
    type Item = Cell;

    #[inline]
    fn next(&mut self) -> Option<Cell> {
        if self.cur.row >= self.range.max.row || self.range.is_empty() {
            return None;
        }
        let c = self.cur;
        self.cur.col += 1;
        if self.cur.col >= self.range.max.col {
            self.cur.col = self.range.min.col;
            self.cur.row += 1;
        }
        Some(c)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.range.is_empty() || self.cur.row >= self.range.max.row {
            return (0, Some(0));
        }
        let cols = self.range.cols() as usize;
        let remaining_in_row = (self.range.max.col - self.cur.col) as usize;
        let remaining_rows = (self.range.max.row - self.cur.row - 1) as usize;
        let total = remaining_in_row + remaining_rows * cols;
        (total, Some(total))
    }
}

impl ExactSizeIterator for RangeIter {}
