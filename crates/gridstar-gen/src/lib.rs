//! **gridstar-gen**: random pathfinding scenarios.
//!
//! Supplies the `(grid, start, goal)` triples that searches and benchmarks
//! run on: grids with independently placed obstacles and uniformly sampled,
//! distinct open endpoints.

pub mod scenario;

pub use scenario::{GenError, Scenario, ScenarioGen};
