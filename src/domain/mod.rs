//! This module has things for managing the domain:
//! the layer buffers, the triangular hole cut out of the plate,
//! and the restrictions that produce boundary values.
//! Mesh coordinates are `[x, y]` vectors, grids are addressed by
//! `(row, col)`, where row `j` samples `y = j * dy`
//! and column `i` samples `x = i * dx`.

mod bc;
mod gather_args;
mod grid;
mod hole;

pub use bc::*;
pub use gather_args::*;
pub use grid::*;
pub use hole::*;
