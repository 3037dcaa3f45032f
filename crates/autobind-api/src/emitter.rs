//! Rendering of method records into registration statements
//!
//! Every record becomes one line:
//!
//! ```text
//! ClassDB::bind_method(D_METHOD("get","key","fallback"), &Store::get,DEFVAL(Variant()));
//! ClassDB::bind_static_method("Store", D_METHOD("open","path"), &Store::open);
//! ```
//!
//! The parameter list and the default list, including their leading comma,
//! disappear when empty. A blank line opens every run of methods that
//! belongs to a different class than the previous one.

use crate::config::BindConfig;
use crate::errors::{BindError, BindResult};
use crate::record::MethodRecord;
use std::io::Write;

/// One rendered registration statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmissionLine {
    /// Class the statement belongs to
    pub class_name: String,

    /// Rendered statement, without line terminator
    pub text: String,
}

/// Renders [`MethodRecord`]s with the names from a [`BindConfig`]
pub struct BindingEmitter<'a> {
    config: &'a BindConfig,
}

impl<'a> BindingEmitter<'a> {
    pub fn new(config: &'a BindConfig) -> Self {
        Self { config }
    }

    /// Render a single record
    pub fn render(&self, record: &MethodRecord) -> EmissionLine {
        let registry = &self.config.registry;
        let method = self.method_descriptor(record);
        let reference = format!("&{}::{}", record.class_name, record.name);
        let defaults = self.default_arguments(record);

        let text = if record.is_static {
            format!(
                "{registry}::bind_static_method(\"{}\", {method}, {reference}{defaults});",
                record.class_name
            )
        } else {
            format!("{registry}::bind_method({method}, {reference}{defaults});")
        };

        EmissionLine {
            class_name: record.class_name.clone(),
            text,
        }
    }

    /// Render all records, in order
    pub fn render_all(&self, records: &[MethodRecord]) -> Vec<EmissionLine> {
        records.iter().map(|r| self.render(r)).collect()
    }

    /// Write all records to `out`
    pub fn emit<W: Write>(&self, records: &[MethodRecord], mut out: W) -> BindResult<()> {
        out.write_all(self.emit_to_string(records).as_bytes()).map_err(BindError::Output)?;
        out.flush().map_err(BindError::Output)
    }

    /// Render all records into a single string, a blank line before each class group
    pub fn emit_to_string(&self, records: &[MethodRecord]) -> String {
        let mut text = String::new();
        let mut last_class: Option<String> = None;

        for line in self.render_all(records) {
            if last_class.as_deref() != Some(line.class_name.as_str()) {
                text.push('\n');
                last_class = Some(line.class_name);
            }
            text.push_str(&line.text);
            text.push('\n');
        }

        text
    }

    /// `D_METHOD("name","a","b")`
    fn method_descriptor(&self, record: &MethodRecord) -> String {
        let mut descriptor = format!("{}(\"{}\"", self.config.method_macro, record.name);
        if !record.parameters.is_empty() {
            let quoted: Vec<String> = record
                .parameters
                .iter()
                .map(|p| format!("\"{}\"", p))
                .collect();
            descriptor.push(',');
            descriptor.push_str(&quoted.join(","));
        }
        descriptor.push(')');
        descriptor
    }

    /// `,DEFVAL(a),DEFVAL(b)` or nothing
    fn default_arguments(&self, record: &MethodRecord) -> String {
        if record.default_values.is_empty() {
            return String::new();
        }
        let wrapped: Vec<String> = record
            .default_values
            .iter()
            .map(|v| format!("{}({})", self.config.default_wrapper, v))
            .collect();
        format!(",{}", wrapped.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(record: &MethodRecord) -> String {
        let config = BindConfig::default();
        BindingEmitter::new(&config).render(record).text
    }

    #[test]
    fn test_instance_method_without_parameters() {
        let record = MethodRecord::new("Foo", "bar");
        assert_eq!(
            render(&record),
            r#"ClassDB::bind_method(D_METHOD("bar"), &Foo::bar);"#
        );
    }

    #[test]
    fn test_static_method_with_defaults() {
        let record = MethodRecord::new("Foo", "baz")
            .with_parameter("x")
            .with_parameter("y")
            .with_default("5")
            .static_method();
        assert_eq!(
            render(&record),
            r#"ClassDB::bind_static_method("Foo", D_METHOD("baz","x","y"), &Foo::baz,DEFVAL(5));"#
        );
    }

    #[test]
    fn test_instance_method_with_parameters_and_defaults() {
        let record = MethodRecord::new("GDLz4", "compress")
            .with_parameter("data")
            .with_parameter("level")
            .with_parameter("mode")
            .with_default("9")
            .with_default("Mode::FAST");
        assert_eq!(
            render(&record),
            r#"ClassDB::bind_method(D_METHOD("compress","data","level","mode"), &GDLz4::compress,DEFVAL(9),DEFVAL(Mode::FAST));"#
        );
    }

    #[test]
    fn test_custom_names() {
        let config = BindConfig {
            registry: "Registry".to_string(),
            method_macro: "M".to_string(),
            default_wrapper: "DEF".to_string(),
            ..Default::default()
        };
        let record = MethodRecord::new("Foo", "bar").with_parameter("a").with_default("1");
        assert_eq!(
            BindingEmitter::new(&config).render(&record).text,
            r#"Registry::bind_method(M("bar","a"), &Foo::bar,DEF(1));"#
        );
    }

    #[test]
    fn test_separators_between_classes() {
        let records = vec![
            MethodRecord::new("A", "one"),
            MethodRecord::new("A", "two"),
            MethodRecord::new("B", "three"),
            MethodRecord::new("A", "four"),
        ];
        let config = BindConfig::default();
        let output = BindingEmitter::new(&config).emit_to_string(&records);

        let expected = "\n\
ClassDB::bind_method(D_METHOD(\"one\"), &A::one);\n\
ClassDB::bind_method(D_METHOD(\"two\"), &A::two);\n\
\n\
ClassDB::bind_method(D_METHOD(\"three\"), &B::three);\n\
\n\
ClassDB::bind_method(D_METHOD(\"four\"), &A::four);\n";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_empty_input_emits_nothing() {
        let config = BindConfig::default();
        assert_eq!(BindingEmitter::new(&config).emit_to_string(&[]), "");
    }

    #[test]
    fn test_emit_is_deterministic() {
        let records = vec![
            MethodRecord::new("A", "one").with_parameter("x"),
            MethodRecord::new("B", "two").static_method(),
        ];
        let config = BindConfig::default();
        let emitter = BindingEmitter::new(&config);
        assert_eq!(emitter.emit_to_string(&records), emitter.emit_to_string(&records));
    }

    #[test]
    fn test_emit_writes_rendered_text() {
        let records = vec![MethodRecord::new("A", "one"), MethodRecord::new("B", "two")];
        let config = BindConfig::default();
        let emitter = BindingEmitter::new(&config);

        let mut buffer = Vec::new();
        emitter.emit(&records, &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), emitter.emit_to_string(&records));
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_emit_reports_write_failure() {
        let config = BindConfig::default();
        let records = [MethodRecord::new("A", "one")];
        let result = BindingEmitter::new(&config).emit(&records, ClosedPipe);
        assert!(matches!(result, Err(BindError::Output(_))));
    }
}
