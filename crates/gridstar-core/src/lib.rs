//! **gridstar-core**: grid geometry and terrain types.
//!
//! This crate provides the foundational types shared by the *gridstar*
//! crates: the [`Cell`] coordinate, the [`Range`] rectangle, per-cell
//! [`Terrain`], and the immutable-once-built [`Grid`] that searches run on.

pub mod geom;
pub mod grid;
pub mod terrain;

pub use geom::{Cell, Range, RangeIter};
pub use grid::{Grid, GridError};
pub use terrain::Terrain;
