use gridstar_core::Cell;

use crate::path::SearchResult;

/// Observer of a single search run.
///
/// Every hook defaults to a no-op. Monitors see the search but cannot steer
/// it; the result is the same whichever monitor is attached.
pub trait SearchMonitor {
    /// Called once validation has passed, before the start cell is pushed.
    fn on_enter_search(&mut self, _start: Cell, _goal: Cell) {}

    /// Called for every frontier pop, stale or not, with the entry's path cost.
    fn on_expand(&mut self, _cell: Cell, _cost: u32) {}

    /// Called when a popped entry is discarded because a cheaper one for the
    /// same cell was already processed.
    fn on_stale(&mut self, _cell: Cell, _cost: u32) {}

    /// Called when the best known cost of `cell` is lowered.
    /// `previous` is `None` the first time a cell is reached.
    fn on_improve(&mut self, _cell: Cell, _previous: Option<u32>, _cost: u32) {}

    /// Called with the final result just before the search returns it.
    fn on_exit_search(&mut self, _result: &SearchResult) {}
}

/// A monitor that ignores every event.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NoOpMonitor;

impl SearchMonitor for NoOpMonitor {}
