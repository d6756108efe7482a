//! Generation orchestrator.
//!
//! This module provides the generator that coordinates the letter table,
//! the index writer, a synthesis backend and the packager.

mod config;
mod generator;

pub use config::{DEFAULT_OUTDIR, RunConfig};
pub use generator::{CopyError, GenerateError, Generator, OutputRecord, RunSummary};
