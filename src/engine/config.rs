//! Run configuration.

use std::path::PathBuf;

use crate::backend::DEFAULT_VOICE;
use crate::cli::BackendKind;

/// Default output directory.
pub const DEFAULT_OUTDIR: &str = "output_wav";

/// Immutable settings for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub backend: BackendKind,
    /// Voice passed to the neural voice backend.
    pub voice: String,
    pub outdir: PathBuf,
    /// Archive to create after all letters are done.
    pub zip_name: Option<PathBuf>,
    /// Also write `NN_translit.wav` copies.
    pub emit_ascii_copies: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::default(),
            voice: DEFAULT_VOICE.to_string(),
            outdir: PathBuf::from(DEFAULT_OUTDIR),
            zip_name: None,
            emit_ascii_copies: false,
        }
    }
}
