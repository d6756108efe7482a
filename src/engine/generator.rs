//! Letter generation run.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

use crate::backend::{SynthesisError, Synthesizer};
use crate::index::{IndexError, write_index};
use crate::letters::{self, LETTER_COUNT, LetterEntry};
use crate::package::{PackageReport, PackagingError, package_dir};

use super::config::RunConfig;

/// Fatal errors that end a run.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Failed to create output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Index(#[from] IndexError),

    #[error(transparent)]
    Synthesis(#[from] SynthesisError),

    #[error(transparent)]
    Packaging(#[from] PackagingError),
}

/// A failed ASCII copy. Logged and collected, never fatal.
#[derive(Error, Debug)]
#[error("[ascii copy] Failed for {glyph}: {source}")]
pub struct CopyError {
    pub glyph: char,
    pub target: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Files produced for one letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRecord {
    pub letter: LetterEntry,
    pub native_path: PathBuf,
    /// Set only when the ASCII copy was requested and succeeded.
    pub ascii_path: Option<PathBuf>,
}

/// Outcome of a completed run.
#[derive(Debug)]
pub struct RunSummary {
    pub records: Vec<OutputRecord>,
    pub copy_failures: Vec<CopyError>,
    pub index_path: PathBuf,
    pub archive: Option<PackageReport>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl RunSummary {
    /// Wall-clock duration of the run.
    pub fn elapsed(&self) -> Duration {
        self.finished_at - self.started_at
    }
}

/// Drives synthesis of the whole letter table.
///
/// Letters are processed strictly in table order, one at a time. The first
/// synthesis failure aborts the run; ASCII copy failures do not.
pub struct Generator<S: Synthesizer> {
    synthesizer: S,
    config: RunConfig,
}

impl<S: Synthesizer> Generator<S> {
    /// Create a new generator.
    pub fn new(synthesizer: S, config: RunConfig) -> Self {
        Self {
            synthesizer,
            config,
        }
    }

    /// Get the run configuration.
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Run the full pipeline: index, letters, optional archive.
    pub fn run(&self) -> Result<RunSummary, GenerateError> {
        let started_at = Utc::now();
        let outdir = self.config.outdir.as_path();

        fs::create_dir_all(outdir).map_err(|source| GenerateError::OutputDir {
            path: outdir.to_path_buf(),
            source,
        })?;

        let index_path = write_index(outdir)?;
        log::info!("Index written: {}", index_path.display());

        let mut records = Vec::with_capacity(LETTER_COUNT);
        let mut copy_failures = Vec::new();

        for letter in letters::all() {
            let mut record = self.synthesize_letter(&letter)?;

            if self.config.emit_ascii_copies {
                match self.copy_ascii(&letter, &record.native_path) {
                    Ok(path) => record.ascii_path = Some(path),
                    Err(e) => {
                        log::warn!("{e}");
                        copy_failures.push(e);
                    }
                }
            }

            records.push(record);
        }

        let archive = match &self.config.zip_name {
            Some(zip_name) => {
                let report = package_dir(outdir, zip_name)?;
                log::info!(
                    "Archived {} files into {}",
                    report.entries.len(),
                    report.path.display()
                );
                Some(report)
            }
            None => None,
        };

        Ok(RunSummary {
            records,
            copy_failures,
            index_path,
            archive,
            started_at,
            finished_at: Utc::now(),
        })
    }

    fn synthesize_letter(&self, letter: &LetterEntry) -> Result<OutputRecord, SynthesisError> {
        let native_path = self.config.outdir.join(letters::native_name(letter));

        log::info!(
            "[{:02}/{LETTER_COUNT}] {} ({})",
            letter.ordinal,
            letter.glyph,
            letter.translit
        );

        self.synthesizer
            .synthesize(&letter.text(), &native_path, &self.config.voice)
            .map_err(|source| SynthesisError {
                backend: self.synthesizer.kind(),
                glyph: letter.glyph,
                source,
            })?;

        Ok(OutputRecord {
            letter: *letter,
            native_path,
            ascii_path: None,
        })
    }

    fn copy_ascii(&self, letter: &LetterEntry, native_path: &Path) -> Result<PathBuf, CopyError> {
        let target = self.config.outdir.join(letters::ascii_name(letter));

        fs::copy(native_path, &target).map_err(|source| CopyError {
            glyph: letter.glyph,
            target: target.clone(),
            source,
        })?;

        Ok(target)
    }
}
