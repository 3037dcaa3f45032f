use crate::record::MethodRecord;
use std::path::PathBuf;

/// Intermediate representation of one header's extraction
///
/// Extractors fill this in source order; the emitter consumes `methods`.
#[derive(Debug, Default, Clone)]
pub struct BindingIR {
    /// Source file path
    pub file_path: PathBuf,

    /// Names of the classes that have a body, in source order
    pub classes: Vec<String>,

    /// Selected methods, ordered by class then declaration
    pub methods: Vec<MethodRecord>,

    /// Declarations dropped by the suppression marker
    pub suppressed: usize,
}

impl BindingIR {
    pub fn new(file_path: PathBuf) -> Self {
        Self {
            file_path,
            ..Default::default()
        }
    }

    pub fn add_class(&mut self, name: impl Into<String>) {
        self.classes.push(name.into());
    }

    pub fn add_method(&mut self, method: MethodRecord) {
        self.methods.push(method);
    }

}
