use std::cmp::Ordering;
use std::collections::BinaryHeap;

use gridstar_core::{Cell, Grid};
use log::{debug, trace, warn};

use crate::error::{Endpoint, EndpointFault, SearchError};
use crate::heuristics::Heuristic;
use crate::monitor::{NoOpMonitor, SearchMonitor};
use crate::path::{Path, SearchResult};

const UNSEEN: u32 = u32::MAX;
const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Frontier entries
// ---------------------------------------------------------------------------

/// One frontier entry. Several may exist for the same cell; all but the
/// cheapest become stale and are skipped when popped.
#[derive(Clone, Copy, Debug)]
struct FrontierEntry {
    estimate: f64,
    cost: u32,
    seq: u64,
    idx: usize,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on every key so BinaryHeap (max-heap) pops the lowest
        // estimate, then the lowest cost, then the earliest push.
        other
            .estimate
            .total_cmp(&self.estimate)
            .then_with(|| other.cost.cmp(&self.cost))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

// ---------------------------------------------------------------------------
// Per-call search state
// ---------------------------------------------------------------------------

struct SearchState {
    best_cost: Vec<u32>,
    came_from: Vec<usize>,
    frontier: BinaryHeap<FrontierEntry>,
    next_seq: u64,
}

impl SearchState {
    fn new(len: usize) -> Self {
        Self {
            best_cost: vec![UNSEEN; len],
            came_from: vec![NO_PARENT; len],
            frontier: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    fn push(&mut self, idx: usize, cost: u32, estimate: f64) {
        self.frontier.push(FrontierEntry {
            estimate,
            cost,
            seq: self.next_seq,
            idx,
        });
        self.next_seq += 1;
    }

    fn reconstruct(&self, grid: &Grid, goal_idx: usize) -> Option<Path> {
        let mut cells = Vec::new();
        let mut ci = goal_idx;
        while ci != NO_PARENT {
            cells.push(grid.cell(ci));
            ci = self.came_from[ci];
        }
        cells.reverse();
        Path::new(cells)
    }
}

// ---------------------------------------------------------------------------
// SearchEngine
// ---------------------------------------------------------------------------

/// Best-first shortest-path search over one borrowed [`Grid`].
///
/// The engine holds no state between calls: every search allocates its own
/// cost map, predecessor map and frontier, so one engine (or one grid shared
/// by many engines) can serve concurrent searches on different threads.
///
/// Neighbours are visited up, down, left, right. Frontier ties on the
/// estimated total are broken by lower path cost, then by earlier insertion,
/// so results are fully reproducible.
#[derive(Clone, Copy, Debug)]
pub struct SearchEngine<'g> {
    grid: &'g Grid,
}

impl<'g> SearchEngine<'g> {
    pub fn new(grid: &'g Grid) -> Self {
        Self { grid }
    }

    /// The grid searches run on.
    #[inline]
    pub fn grid(&self) -> &'g Grid {
        self.grid
    }

    /// Compute a minimum-cost path from `start` to `goal`.
    ///
    /// With an admissible, consistent heuristic the path is optimal. An
    /// unreachable goal yields `Ok` with `path: None`; only endpoints that
    /// are out of bounds or blocked are errors, and those are rejected
    /// before any frontier work.
    pub fn search<H>(&self, start: Cell, goal: Cell, heuristic: &H) -> Result<SearchResult, SearchError>
    where
        H: Heuristic + ?Sized,
    {
        self.search_with_monitor(start, goal, heuristic, &mut NoOpMonitor)
    }

    /// Like [`search`](Self::search), reporting every step to `monitor`.
    pub fn search_with_monitor<H, M>(
        &self,
        start: Cell,
        goal: Cell,
        heuristic: &H,
        monitor: &mut M,
    ) -> Result<SearchResult, SearchError>
    where
        H: Heuristic + ?Sized,
        M: SearchMonitor + ?Sized,
    {
        let start_idx = self.validate(Endpoint::Start, start)?;
        let goal_idx = self.validate(Endpoint::Goal, goal)?;

        monitor.on_enter_search(start, goal);

        let grid = self.grid;
        let mut state = SearchState::new(grid.len());
        state.best_cost[start_idx] = 0;
        monitor.on_improve(start, None, 0);
        state.push(start_idx, 0, heuristic.estimate(start, goal));

        let mut expansions = 0usize;
        let mut path = None;

        while let Some(entry) = state.frontier.pop() {
            expansions += 1;
            let current = grid.cell(entry.idx);
            monitor.on_expand(current, entry.cost);

            if entry.idx == goal_idx {
                path = state.reconstruct(grid, goal_idx);
                break;
            }

            if entry.cost > state.best_cost[entry.idx] {
                trace!("skipping stale entry for {current} at cost {}", entry.cost);
                monitor.on_stale(current, entry.cost);
                continue;
            }

            let candidate = entry.cost + 1;
            for next in current.neighbors_4() {
                let Some(ni) = grid.index(next) else {
                    continue;
                };
                if !grid.is_open(next) {
                    continue;
                }
                let previous = state.best_cost[ni];
                if candidate >= previous {
                    continue;
                }
                monitor.on_improve(next, (previous != UNSEEN).then_some(previous), candidate);
                state.best_cost[ni] = candidate;
                state.came_from[ni] = entry.idx;
                state.push(ni, candidate, f64::from(candidate) + heuristic.estimate(next, goal));
            }
        }

        match &path {
            Some(p) => debug!(
                "search {start} -> {goal}: found path of {} cells after {expansions} expansions",
                p.len()
            ),
            None => debug!("search {start} -> {goal}: exhausted after {expansions} expansions"),
        }

        let result = SearchResult { path, expansions };
        monitor.on_exit_search(&result);
        Ok(result)
    }

    fn validate(&self, role: Endpoint, cell: Cell) -> Result<usize, SearchError> {
        let reason = match self.grid.index(cell) {
            None => EndpointFault::OutOfBounds,
            Some(_) if !self.grid.is_open(cell) => EndpointFault::Blocked,
            Some(i) => return Ok(i),
        };
        warn!("rejecting search: {role} {cell} {reason}");
        Err(SearchError::InvalidEndpoint { role, cell, reason })
    }
}

/// Run a single search on `grid`. Shorthand for
/// `SearchEngine::new(grid).search(start, goal, heuristic)`.
pub fn search<H>(grid: &Grid, start: Cell, goal: Cell, heuristic: &H) -> Result<SearchResult, SearchError>
where
    H: Heuristic + ?Sized,
{
    SearchEngine::new(grid).search(start, goal, heuristic)
}
