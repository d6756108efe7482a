//! Bundling of the generated files into a single archive.

mod archive;

pub use archive::{PackageReport, PackagingError, package_dir};
