//! Distance estimates used to guide the search.
//!
//! Any `Fn(Cell, Cell) -> f64` is a [`Heuristic`], so ad-hoc closures plug in
//! the same way as the named library values below.

use gridstar_core::Cell;

/// Estimate of the remaining movement cost from `from` to `to`.
///
/// Implementations must be pure, deterministic and non-negative. The engine
/// does not verify admissibility: an estimate that overshoots the true cost
/// can yield a longer-than-optimal path, never an error.
pub trait Heuristic {
    /// Estimated cost from `from` to `to`.
    fn estimate(&self, from: Cell, to: Cell) -> f64;
}

impl<F> Heuristic for F
where
    F: Fn(Cell, Cell) -> f64,
{
    #[inline]
    fn estimate(&self, from: Cell, to: Cell) -> f64 {
        self(from, to)
    }
}

/// Manhattan (L1) distance between two cells.
#[inline]
pub fn manhattan(a: Cell, b: Cell) -> f64 {
    f64::from((a.row - b.row).abs() + (a.col - b.col).abs())
}

/// Euclidean (L2) straight-line distance between two cells.
#[inline]
pub fn euclidean(a: Cell, b: Cell) -> f64 {
    let dr = f64::from(a.row - b.row);
    let dc = f64::from(a.col - b.col);
    dr.hypot(dc)
}

/// Chebyshev (L∞) distance between two cells.
#[inline]
pub fn chebyshev(a: Cell, b: Cell) -> f64 {
    f64::from((a.row - b.row).abs().max((a.col - b.col).abs()))
}

/// Axis-aligned distance. Exact on an empty grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Manhattan;

impl Heuristic for Manhattan {
    #[inline]
    fn estimate(&self, from: Cell, to: Cell) -> f64 {
        manhattan(from, to)
    }
}

/// Straight-line distance.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Euclidean;

impl Heuristic for Euclidean {
    #[inline]
    fn estimate(&self, from: Cell, to: Cell) -> f64 {
        euclidean(from, to)
    }
}

/// Diagonal distance: the larger of the two axis offsets.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Chebyshev;

impl Heuristic for Chebyshev {
    #[inline]
    fn estimate(&self, from: Cell, to: Cell) -> f64 {
        chebyshev(from, to)
    }
}

/// The library heuristics with display names, for consumers that compare
/// them side by side.
pub fn all() -> [(&'static str, &'static dyn Heuristic); 3] {
    [
        ("Manhattan", &Manhattan),
        ("Euclidean", &Euclidean),
        ("Diagonal", &Chebyshev),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances() {
        let a = Cell::new(1, 1);
        let b = Cell::new(4, 5);
        assert_eq!(manhattan(a, b), 7.0);
        assert!((euclidean(a, b) - 5.0).abs() < 1e-12);
        assert_eq!(chebyshev(a, b), 4.0);
    }

    #[test]
    fn symmetric_and_zero_on_self() {
        let a = Cell::new(-2, 7);
        let b = Cell::new(3, 1);
        for (_, h) in all() {
            assert_eq!(h.estimate(a, b), h.estimate(b, a));
            assert_eq!(h.estimate(a, a), 0.0);
        }
    }

    #[test]
    fn ordering_never_exceeds_manhattan() {
        // All three are bounded by the 4-way move count, so all are admissible.
        for r in -3..=3 {
            for c in -3..=3 {
                let a = Cell::ZERO;
                let b = Cell::new(r, c);
                assert!(chebyshev(a, b) <= euclidean(a, b));
                assert!(euclidean(a, b) <= manhattan(a, b));
            }
        }
    }

    #[test]
    fn closures_are_heuristics() {
        let zero = |_: Cell, _: Cell| 0.0;
        assert_eq!(zero.estimate(Cell::ZERO, Cell::new(9, 9)), 0.0);
        let named: &dyn Heuristic = &Manhattan;
        assert_eq!(named.estimate(Cell::ZERO, Cell::new(2, 2)), 4.0);
    }
}
