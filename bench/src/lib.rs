//! Heuristic comparison harness.
//!
//! Runs every library heuristic over the same random scenarios, timing each
//! call, and formats the per-run metrics, averages, and a textual rendering
//! of a grid with its path.

pub mod config;
pub mod error;
pub mod render;
pub mod report;

pub use config::BenchConfig;
pub use error::BenchError;
pub use render::render;
pub use report::{Averages, Comparison, Measurement, RunRecord, compare, measure};
