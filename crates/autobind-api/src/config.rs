use crate::errors::{BindError, BindResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration for extraction and emission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BindConfig {
    /// Comment that drops the next public declaration.
    /// Compared after removing every space from the comment text.
    pub suppression_marker: String,

    /// Registry type the statements are issued on (`ClassDB::bind_method`)
    pub registry: String,

    /// Macro wrapping the method name and parameter names
    pub method_macro: String,

    /// Macro wrapping each default value expression
    pub default_wrapper: String,

    /// Extension of the header derived from the input path
    pub header_extension: String,

    /// Maximum header size to parse (in bytes)
    pub max_file_size: usize,
}

impl Default for BindConfig {
    fn default() -> Self {
        Self {
            suppression_marker: "/*gd_ignore*/".to_string(),
            registry: "ClassDB".to_string(),
            method_macro: "D_METHOD".to_string(),
            default_wrapper: "DEFVAL".to_string(),
            header_extension: "h".to_string(),
            max_file_size: 10 * 1024 * 1024, // 10 MB
        }
    }
}

impl BindConfig {
    /// Load a configuration from a JSON file. Missing keys keep their defaults.
    pub fn from_json_file(path: &Path) -> BindResult<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| BindError::Config(path.to_path_buf(), e.to_string()))?;
        Self::from_json_str(&text).map_err(|e| match e {
            BindError::Config(_, reason) => BindError::Config(path.to_path_buf(), reason),
            other => other,
        })
    }

    pub fn from_json_str(text: &str) -> BindResult<Self> {
        serde_json::from_str(text).map_err(|e| BindError::Config("<inline>".into(), e.to_string()))
    }

    pub fn with_suppression_marker(mut self, marker: impl Into<String>) -> Self {
        self.suppression_marker = marker.into();
        self
    }

    pub fn with_header_extension(mut self, extension: impl Into<String>) -> Self {
        self.header_extension = extension.into();
        self
    }

    /// Set maximum file size
    pub fn with_max_file_size(mut self, size: usize) -> Self {
        self.max_file_size = size;
        self
    }

    /// Whether a comment's text is the suppression marker
    pub fn is_suppression_marker(&self, comment: &str) -> bool {
        comment.replace(' ', "") == self.suppression_marker.replace(' ', "")
    }
}
