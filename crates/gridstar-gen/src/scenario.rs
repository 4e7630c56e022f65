//! Random obstacle grids and endpoint sampling.

use std::fmt;

use gridstar_core::{Cell, Grid, Terrain};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Default side length of a generated square grid.
pub const DEFAULT_SIZE: i32 = 10;

/// Default probability that any one cell is blocked.
pub const DEFAULT_OBSTACLE_PROB: f64 = 0.25;

/// A grid with two distinct open endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    pub grid: Grid,
    pub start: Cell,
    pub goal: Cell,
}

/// Scenario generator driven by any [`Rng`].
pub struct ScenarioGen<R: Rng> {
    pub rng: R,
}

impl ScenarioGen<StdRng> {
    /// A reproducible generator: the same seed yields the same scenarios.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// A generator seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> ScenarioGen<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// A `rows × cols` grid where each cell is blocked independently with
    /// probability `obstacle_prob`. Values outside `[0, 1]` saturate.
    pub fn obstacles(&mut self, rows: i32, cols: i32, obstacle_prob: f64) -> Grid {
        let mut grid = Grid::new(rows, cols);
        for c in grid.bounds() {
            let r: f64 = self.rng.random();
            if r < obstacle_prob {
                grid.set(c, Terrain::Blocked);
            }
        }
        grid
    }

    /// Two distinct open cells of `grid`, each uniform over the open cells.
    pub fn endpoints(&mut self, grid: &Grid) -> Result<(Cell, Cell), GenError> {
        let open = grid.open_cells();
        if open.len() < 2 {
            return Err(GenError::NotEnoughOpenCells { open: open.len() });
        }

        let start = open[self.rng.random_range(0..open.len())];
        let mut redraws = 0usize;
        let goal = loop {
            let g = open[self.rng.random_range(0..open.len())];
            if g != start {
                break g;
            }
            redraws += 1;
        };
        if redraws > 0 {
            debug!("endpoint sampling redrew the goal {redraws} times");
        }
        Ok((start, goal))
    }

    /// A fresh obstacle grid together with sampled endpoints.
    pub fn scenario(&mut self, rows: i32, cols: i32, obstacle_prob: f64) -> Result<Scenario, GenError> {
        if !(0.0..=1.0).contains(&obstacle_prob) {
            return Err(GenError::InvalidProbability(obstacle_prob));
        }
        let grid = self.obstacles(rows, cols, obstacle_prob);
        let (start, goal) = self.endpoints(&grid)?;
        Ok(Scenario { grid, start, goal })
    }
}

/// Errors that can occur while generating a scenario.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GenError {
    /// Fewer than two open cells exist, so distinct endpoints cannot be drawn.
    NotEnoughOpenCells { open: usize },
    /// The obstacle probability is not within `[0, 1]`.
    InvalidProbability(f64),
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotEnoughOpenCells { open } => {
                write!(f, "need at least 2 open cells for endpoints, grid has {open}")
            }
            Self::InvalidProbability(p) => {
                write!(f, "obstacle probability {p} is outside [0, 1]")
            }
        }
    }
}

impl std::error::Error for GenError {}
