use std::fmt;

use gridstar_core::Cell;

/// A non-empty sequence of cells from start to goal, inclusive.
///
/// Consecutive cells of a path produced by the engine differ by exactly one
/// unit move.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Cell>", into = "Vec<Cell>")
)]
pub struct Path(Vec<Cell>);

impl Path {
    /// Wrap `cells` as a path, or `None` if it is empty.
    pub fn new(cells: Vec<Cell>) -> Option<Self> {
        if cells.is_empty() { None } else { Some(Self(cells)) }
    }

    /// Number of cells, both endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the path has no cells (never true).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Movement cost: the number of unit moves, `len() - 1`.
    #[inline]
    pub fn cost(&self) -> u32 {
        (self.0.len() - 1) as u32
    }

    /// First cell.
    #[inline]
    pub fn start(&self) -> Cell {
        self.0[0]
    }

    /// Last cell.
    #[inline]
    pub fn goal(&self) -> Cell {
        self.0[self.0.len() - 1]
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.0
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.0.iter()
    }

    pub fn contains(&self, c: Cell) -> bool {
        self.0.contains(&c)
    }

    /// Whether every consecutive pair differs by one unit move.
    pub fn is_contiguous(&self) -> bool {
        self.0.windows(2).all(|w| w[0].is_adjacent(w[1]))
    }

    pub fn into_vec(self) -> Vec<Cell> {
        self.0
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<Path> for Vec<Cell> {
    fn from(p: Path) -> Self {
        p.0
    }
}

impl TryFrom<Vec<Cell>> for Path {
    type Error = EmptyPathError;

    fn try_from(cells: Vec<Cell>) -> Result<Self, Self::Error> {
        Path::new(cells).ok_or(EmptyPathError)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "→")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// Returned when building a [`Path`] from no cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EmptyPathError;

impl fmt::Display for EmptyPathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "path must contain at least one cell")
    }
}

impl std::error::Error for EmptyPathError {}

/// Outcome of one search run.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// A minimum-cost path, or `None` if the goal is unreachable.
    pub path: Option<Path>,
    /// Number of frontier pops, stale pops included.
    pub expansions: usize,
}

impl SearchResult {
    /// Whether a path was found.
    #[inline]
    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }

    /// Path length in cells, or `None` when the goal was unreachable.
    #[inline]
    pub fn path_len(&self) -> Option<usize> {
        self.path.as_ref().map(Path::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_rejected() {
        assert!(Path::new(Vec::new()).is_none());
        assert_eq!(Path::try_from(Vec::<Cell>::new()), Err(EmptyPathError));
    }

    #[test]
    fn accessors() {
        let p = Path::new(vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 1)]).unwrap();
        assert_eq!(p.len(), 3);
        assert_eq!(p.cost(), 2);
        assert_eq!(p.start(), Cell::new(0, 0));
        assert_eq!(p.goal(), Cell::new(1, 1));
        assert!(p.contains(Cell::new(0, 1)));
        assert!(!p.contains(Cell::new(1, 0)));
        assert!(p.is_contiguous());
        assert_eq!(p.to_string(), "(0, 0)→(0, 1)→(1, 1)");
    }

    #[test]
    fn single_cell_path() {
        let p = Path::new(vec![Cell::new(4, 4)]).unwrap();
        assert_eq!(p.cost(), 0);
        assert_eq!(p.start(), p.goal());
        assert!(p.is_contiguous());
    }

    #[test]
    fn gaps_are_not_contiguous() {
        let p = Path::new(vec![Cell::new(0, 0), Cell::new(1, 1)]).unwrap();
        assert!(!p.is_contiguous());
    }

    #[test]
    fn result_helpers() {
        let r = SearchResult {
            path: None,
            expansions: 7,
        };
        assert!(!r.is_found());
        assert_eq!(r.path_len(), None);
    }
}
