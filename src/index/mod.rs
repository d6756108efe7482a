//! CSV manifest of the generated letter files.

mod writer;

pub use writer::{INDEX_FILE_NAME, IndexError, IndexRow, index_rows, write_index};
