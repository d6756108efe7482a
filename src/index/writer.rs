//! CSV index writer.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::letters::{self, LetterEntry};

/// File name of the index inside the output directory.
pub const INDEX_FILE_NAME: &str = "letters_index.csv";

/// Errors that can occur while writing the index.
#[derive(Error, Debug)]
pub enum IndexError {
    #[error("Failed to write index {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to flush index {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One row of the index. Field names double as the CSV header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexRow {
    pub letter: String,
    pub transliteration: String,
    pub filename_ar: String,
    pub filename_ascii: String,
}

impl From<&LetterEntry> for IndexRow {
    fn from(letter: &LetterEntry) -> Self {
        Self {
            letter: letter.text(),
            transliteration: letter.translit.to_string(),
            filename_ar: letters::native_name(letter),
            filename_ascii: letters::ascii_name(letter),
        }
    }
}

/// Build the index rows in table order.
pub fn index_rows() -> Vec<IndexRow> {
    letters::all().map(|l| IndexRow::from(&l)).collect()
}

/// Write `letters_index.csv` into `outdir`, replacing any previous index.
///
/// Filenames are listed for every letter regardless of whether its audio
/// has been (or will be) produced.
pub fn write_index(outdir: &Path) -> Result<PathBuf, IndexError> {
    let path = outdir.join(INDEX_FILE_NAME);
    let csv_err = |source| IndexError::Csv {
        path: path.clone(),
        source,
    };

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_path(&path)
        .map_err(csv_err)?;

    for row in index_rows() {
        writer.serialize(&row).map_err(csv_err)?;
    }

    writer.flush().map_err(|source| IndexError::Io {
        path: path.clone(),
        source,
    })?;

    log::debug!("Wrote {} index rows to {}", letters::LETTER_COUNT, path.display());
    Ok(path)
}
