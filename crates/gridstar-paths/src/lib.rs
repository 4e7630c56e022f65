//! Heuristic-driven shortest-path search on 2D grids.
//!
//! The centre of this crate is [`SearchEngine`], a best-first (A\*) search
//! over a [`Grid`](gridstar_core::Grid) with 4-directional unit-cost
//! movement. The estimate it is guided by is injected as any value
//! implementing [`Heuristic`]; the library ships three:
//!
//! | Heuristic | Distance |
//! |---|---|
//! | [`Manhattan`] | L1, admissible and consistent for 4-way moves |
//! | [`Euclidean`] | L2, admissible and consistent |
//! | [`Chebyshev`] | L∞, admissible and consistent |
//!
//! Each call returns a [`SearchResult`] holding the path (if any) and the
//! number of frontier pops, which is what benchmarking consumers compare.
//! [`bfs_distance`] and [`flood_fill`] are uninformed baselines for
//! cross-checking search results.

mod bfs;
mod cc;
mod engine;
mod error;
pub mod heuristics;
mod monitor;
mod path;

pub use bfs::{UNREACHABLE, bfs_distance, bfs_map};
pub use cc::{connected, flood_fill};
pub use engine::{SearchEngine, search};
pub use error::{Endpoint, EndpointFault, SearchError};
pub use heuristics::{Chebyshev, Euclidean, Heuristic, Manhattan, chebyshev, euclidean, manhattan};
pub use monitor::{NoOpMonitor, SearchMonitor};
pub use path::{EmptyPathError, Path, SearchResult};
