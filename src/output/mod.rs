//! Layer sinks.
//!
//! The model does not keep past layers, every completed layer is
//! handed to a [`LayerSink`] which decides what to keep.

mod csv;
mod frames;
mod gnuplot;
mod recorder;
mod stream;

pub use csv::*;
pub use frames::*;
pub use gnuplot::*;
pub use recorder::*;
pub use stream::*;

use crate::domain::Grid;
use crate::error::OutputError;

pub trait LayerSink {
    /// Receive one completed layer.
    fn commit_layer(&mut self, layer: &Grid) -> Result<(), OutputError>;
}

impl<S: LayerSink + ?Sized> LayerSink for Box<S> {
    fn commit_layer(&mut self, layer: &Grid) -> Result<(), OutputError> {
        (**self).commit_layer(layer)
    }
}

impl<S: LayerSink + ?Sized> LayerSink for &mut S {
    fn commit_layer(&mut self, layer: &Grid) -> Result<(), OutputError> {
        (**self).commit_layer(layer)
    }
}

/// Discards every layer.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl LayerSink for NullSink {
    fn commit_layer(&mut self, _layer: &Grid) -> Result<(), OutputError> {
        Ok(())
    }
}

/// Create `path` and all of its parents.
pub(crate) fn ensure_dir_exists<P: AsRef<std::path::Path>>(
    path: &P,
) -> Result<(), OutputError> {
    let p = path.as_ref();
    if p.is_dir() {
        log::debug!("Exists: {p:?}");
        return Ok(());
    }
    log::debug!("Creating: {p:?}");
    std::fs::create_dir_all(p).map_err(|source| OutputError::Open {
        path: p.to_path_buf(),
        source,
    })
}
