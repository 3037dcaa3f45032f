//! Implementation of the BindingParser trait for C++ headers

use autobind_api::{BindConfig, BindError, BindingParser, FileBindings, ParserMetrics};
use log::debug;
use std::fs;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use crate::extractor;
use crate::syntax::SourceTree;

/// C++ header front end implementing the BindingParser trait
pub struct CppBinder {
    config: BindConfig,
    metrics: Mutex<ParserMetrics>,
}

impl CppBinder {
    pub fn new() -> Self {
        Self::with_config(BindConfig::default())
    }

    pub fn with_config(config: BindConfig) -> Self {
        Self {
            config,
            metrics: Mutex::new(ParserMetrics::default()),
        }
    }

    fn lock_metrics(&self) -> MutexGuard<'_, ParserMetrics> {
        self.metrics.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn update_metrics(&self, result: Option<&FileBindings>, suppressed: usize, duration: Duration) {
        let mut metrics = self.lock_metrics();
        metrics.files_attempted += 1;
        metrics.total_parse_time += duration;
        match result {
            Some(bindings) => {
                metrics.files_succeeded += 1;
                metrics.total_classes += bindings.class_count;
                metrics.total_methods += bindings.method_count();
                metrics.total_suppressed += suppressed;
            }
            None => metrics.files_failed += 1,
        }
    }

    fn bindings_of(
        &self,
        tree: &SourceTree,
        start: Instant,
    ) -> Result<(FileBindings, usize), BindError> {
        let ir = extractor::extract_tree(tree, &self.config)?;
        let source = tree.source();

        let bindings = FileBindings {
            file_path: ir.file_path.clone(),
            class_count: ir.classes.len(),
            methods: ir.methods,
            parse_time: start.elapsed(),
            line_count: source.lines().count(),
            byte_count: source.len(),
        };

        debug!(
            "{}: {} methods from {} classes ({} suppressed)",
            bindings.file_path.display(),
            bindings.method_count(),
            bindings.class_count,
            ir.suppressed
        );

        Ok((bindings, ir.suppressed))
    }

    fn record(
        &self,
        result: Result<(FileBindings, usize), BindError>,
        start: Instant,
    ) -> Result<FileBindings, BindError> {
        let duration = start.elapsed();
        match result {
            Ok((bindings, suppressed)) => {
                self.update_metrics(Some(&bindings), suppressed, duration);
                Ok(bindings)
            }
            Err(e) => {
                self.update_metrics(None, 0, duration);
                Err(e)
            }
        }
    }
}

impl Default for CppBinder {
    fn default() -> Self {
        Self::new()
    }
}

impl BindingParser for CppBinder {
    fn language(&self) -> &str {
        "cpp"
    }

    fn file_extensions(&self) -> &[&str] {
        &[".h", ".hh", ".hpp", ".hxx"]
    }

    fn parse_file(&self, path: &Path) -> Result<FileBindings, BindError> {
        let start = Instant::now();
        let metadata =
            fs::metadata(path).map_err(|e| BindError::InputNotFound(path.to_path_buf(), e))?;

        if metadata.len() > self.config.max_file_size as u64 {
            return Err(BindError::FileTooLarge(path.to_path_buf(), metadata.len()));
        }

        let bytes = fs::read(path).map_err(|e| BindError::InputNotFound(path.to_path_buf(), e))?;
        let result =
            SourceTree::parse_bytes(bytes, path).and_then(|tree| self.bindings_of(&tree, start));
        self.record(result, start)
    }

    fn parse_source(&self, source: &str, file_path: &Path) -> Result<FileBindings, BindError> {
        let start = Instant::now();
        let result =
            SourceTree::parse(source, file_path).and_then(|tree| self.bindings_of(&tree, start));
        self.record(result, start)
    }

    fn config(&self) -> &BindConfig {
        &self.config
    }

    fn metrics(&self) -> ParserMetrics {
        self.lock_metrics().clone()
    }

    fn reset_metrics(&mut self) {
        *self.lock_metrics() = ParserMetrics::default();
    }
}
