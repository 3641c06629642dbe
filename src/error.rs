use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Simulation(#[from] SimulationError),

    #[error(transparent)]
    Output(#[from] OutputError),

    #[error(transparent)]
    Args(#[from] ArgsError),
}

/// Errors raised by the layer container.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("access ({row}, {col}) is outside of a {rows}x{cols} grid")]
    OutOfBounds {
        row: isize,
        col: isize,
        rows: usize,
        cols: usize,
    },

    #[error("grid shape {found:?} does not match {expected:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
}

/// Errors raised while building or running a model.
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("(dt / dx)^2 = {ratio} exceeds 1/2")]
    StabilityViolation { ratio: f64 },

    #[error("parameter {parameter} = {value} must be finite and positive")]
    InvalidParameter { parameter: &'static str, value: f64 },

    #[error(
        "mesh of {rows}x{cols} nodes has no interior nodes, \
         at least 3 nodes per axis are required"
    )]
    DegenerateMesh { rows: usize, cols: usize },

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

/// Errors raised by layer sinks.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("unable to open {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write layer: {0}")]
    Write(#[from] std::io::Error),

    #[error("unable to save image {path:?}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Errors raised while interpreting command line values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgsError {
    #[error("invalid restriction {0:?}, expected fixed:<c>, flux:<c> or convective")]
    InvalidRestriction(String),

    #[error("invalid point {0:?}, expected <x>,<y>")]
    InvalidPoint(String),

    #[error("output kind {0} requires --output-path")]
    MissingOutputPath(&'static str),
}

/// Convenience type alias for results using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
