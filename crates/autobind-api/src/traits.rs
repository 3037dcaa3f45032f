use crate::{
    config::BindConfig, errors::BindError, metrics::ParserMetrics, paths, record::MethodRecord,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Information about a successfully processed header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileBindings {
    /// Path to the header
    pub file_path: PathBuf,

    /// Methods selected for binding, in emission order
    pub methods: Vec<MethodRecord>,

    /// Number of classes with a body
    pub class_count: usize,

    /// Time taken to parse and extract this file
    #[serde(with = "crate::metrics::duration_serde")]
    pub parse_time: Duration,

    /// Number of lines in the file
    pub line_count: usize,

    /// File size in bytes
    pub byte_count: usize,
}

impl FileBindings {
    /// Number of methods selected for binding
    pub fn method_count(&self) -> usize {
        self.methods.len()
    }
}

/// Core trait implemented by every binding generator front end
///
/// A front end turns one header into an ordered list of [`MethodRecord`]s.
/// Rendering is left to [`crate::BindingEmitter`], which is shared by all
/// front ends.
pub trait BindingParser {
    /// Language identifier (e.g., "cpp")
    fn language(&self) -> &str;

    /// Header extensions this front end understands, including the dot
    fn file_extensions(&self) -> &[&str];

    /// Extract bindable methods from source text
    fn parse_source(&self, source: &str, file_path: &Path) -> Result<FileBindings, BindError>;

    /// Read and extract a header from disk
    fn parse_file(&self, path: &Path) -> Result<FileBindings, BindError>;

    /// Read the header derived from `input` (see [`paths::header_path_for`])
    fn parse_input(&self, input: &Path) -> Result<FileBindings, BindError> {
        let header = paths::header_path_for(input, &self.config().header_extension);
        self.parse_file(&header)
    }

    /// Check if this front end can handle the given file
    ///
    /// Default implementation checks file extension.
    fn can_parse(&self, path: &Path) -> bool {
        if let Some(ext) = path.extension() {
            let ext_str = format!(".{}", ext.to_string_lossy());
            self.file_extensions().contains(&ext_str.as_str())
        } else {
            false
        }
    }

    /// Get configuration
    fn config(&self) -> &BindConfig;

    /// Get accumulated metrics
    fn metrics(&self) -> ParserMetrics;

    /// Reset metrics
    fn reset_metrics(&mut self);
}
