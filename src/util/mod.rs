pub use nalgebra::vector;
pub use num_traits::{Float, Zero};

pub mod indexing;
pub use indexing::*;

/// Integer mesh coordinate, `[x, y]` i.e. `[col, row]` in 2D.
pub type Coord<const GRID_DIMENSION: usize> =
    nalgebra::SVector<i32, { GRID_DIMENSION }>;

pub type Values<const NEIGHBORHOOD_SIZE: usize> =
    nalgebra::SVector<f64, { NEIGHBORHOOD_SIZE }>;

/// Continuous domain coordinate.
pub type Point = nalgebra::Point2<f64>;
