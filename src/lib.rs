//! Non-stationary heat conduction on a rectangular plate with a
//! triangular hole, integrated with an explicit five point scheme.
//!
//! A [`solver::Model`] owns two layers of node values. Every completed
//! layer is handed to an [`output::LayerSink`], which streams it,
//! writes it to disk, renders it, or records it.

pub mod build_info;
pub mod cli_args;
pub mod domain;
pub mod error;
pub mod output;
pub mod solver;
pub mod stencil;
pub mod util;

pub use error::{Error, Result};
