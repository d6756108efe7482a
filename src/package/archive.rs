//! ZIP packaging of the output directory.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use zip::CompressionMethod;
use zip::write::SimpleFileOptions;

/// Errors that can occur while packaging.
#[derive(Error, Debug)]
pub enum PackagingError {
    #[error("Failed to list {path}: {source}")]
    ListDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read {path}: {source}")]
    ReadEntry {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create archive {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write archive {path}: {source}")]
    Zip {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },
}

/// What ended up in the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageReport {
    pub path: PathBuf,
    /// Entry names in archive order.
    pub entries: Vec<String>,
}

/// Regular files directly inside `outdir`, sorted by name.
///
/// `exclude` is skipped so an archive written into `outdir` never
/// contains itself.
pub(super) fn collect_files(
    outdir: &Path,
    exclude: &Path,
) -> Result<Vec<(String, PathBuf)>, PackagingError> {
    let list_err = |source| PackagingError::ListDir {
        path: outdir.to_path_buf(),
        source,
    };
    let excluded = fs::canonicalize(exclude).ok();

    let mut files = Vec::new();
    for entry in fs::read_dir(outdir).map_err(list_err)? {
        let entry = entry.map_err(list_err)?;
        let path = entry.path();

        if !entry.file_type().map_err(list_err)?.is_file() {
            continue;
        }
        if excluded.is_some() && fs::canonicalize(&path).ok() == excluded {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        files.push((name, path));
    }

    files.sort();
    Ok(files)
}

/// Archive every file in `outdir` into `archive`, flat.
///
/// The archive is assembled in a temporary file next to its destination and
/// only renamed into place once complete. On failure nothing is left at
/// `archive`.
pub fn package_dir(outdir: &Path, archive: &Path) -> Result<PackageReport, PackagingError> {
    let files = collect_files(outdir, archive)?;
    write_archive(files, archive)
}

/// Write the listed `(entry name, path)` pairs into `archive`.
pub(super) fn write_archive(
    files: Vec<(String, PathBuf)>,
    archive: &Path,
) -> Result<PackageReport, PackagingError> {
    let parent = match archive.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let create_err = |source| PackagingError::Create {
        path: archive.to_path_buf(),
        source,
    };
    let zip_err = |source| PackagingError::Zip {
        path: archive.to_path_buf(),
        source,
    };

    let mut staged = tempfile::Builder::new()
        .prefix(".letters-")
        .suffix(".zip.part")
        .tempfile_in(&parent)
        .map_err(create_err)?;

    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut zip = zip::ZipWriter::new(staged.as_file_mut());
    let mut entries = Vec::with_capacity(files.len());

    for (name, path) in files {
        let mut source = File::open(&path).map_err(|source| PackagingError::ReadEntry {
            path: path.clone(),
            source,
        })?;

        zip.start_file(name.as_str(), options).map_err(zip_err)?;
        io::copy(&mut source, &mut zip).map_err(|source| PackagingError::ReadEntry {
            path: path.clone(),
            source,
        })?;

        log::debug!("Archived {name}");
        entries.push(name);
    }

    zip.finish().map_err(zip_err)?;

    staged
        .persist(archive)
        .map_err(|e| create_err(e.error))?;

    Ok(PackageReport {
        path: archive.to_path_buf(),
        entries,
    })
}
