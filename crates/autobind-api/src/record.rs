use serde::{Deserialize, Serialize};

/// A public method selected for binding
///
/// `default_values` holds the default expressions of the defaulted
/// parameters in the order they were encountered. It is not aligned to
/// `parameters`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MethodRecord {
    /// Owning class
    pub class_name: String,

    /// Method identifier
    pub name: String,

    /// Parameter names in declaration order
    pub parameters: Vec<String>,

    /// Default value expressions in encounter order
    pub default_values: Vec<String>,

    /// Declared with `static`
    pub is_static: bool,
}

impl MethodRecord {
    pub fn new(class_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            name: name.into(),
            parameters: Vec::new(),
            default_values: Vec::new(),
            is_static: false,
        }
    }

    pub fn with_parameter(mut self, name: impl Into<String>) -> Self {
        self.parameters.push(name.into());
        self
    }

    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_values.push(value.into());
        self
    }

    pub fn static_method(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Whether this is the class's own constructor or destructor
    pub fn is_special_member(&self) -> bool {
        is_special_member_name(&self.class_name, &self.name)
    }
}

/// `name` is `class_name` or `~class_name`
pub fn is_special_member_name(class_name: &str, name: &str) -> bool {
    name == class_name || name.strip_prefix('~') == Some(class_name)
}
