use std::path::{Path, PathBuf};

/// Sibling header path for a command-line input.
///
/// The last extension of `input` is replaced by `extension`; an input
/// without one gets it appended. `gd_lz4.cpp`, `gd_lz4.h` and `gd_lz4` all
/// map to `gd_lz4.h`.
pub fn header_path_for(input: &Path, extension: &str) -> PathBuf {
    input.with_extension(extension.trim_start_matches('.'))
}
