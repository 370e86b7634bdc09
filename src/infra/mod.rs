//! File system enumeration and base-directory resolution

mod base_dir;
mod fs;

pub use base_dir::{BaseDir, PathResolver, normalize};
pub use fs::{enumerate, list_directory, single_file};
