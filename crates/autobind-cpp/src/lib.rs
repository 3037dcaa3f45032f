//! C++ header front end for autobind
//!
//! This crate parses a C++ header with tree-sitter, finds every class body
//! and selects the public methods worth registering with `ClassDB`:
//!
//! - members in `public:` regions only (class members start private)
//! - plain fields are ignored
//! - parameterless constructors and destructors are ignored
//! - a `/* gd_ignore */` comment drops the declaration that follows it
//!
//! # Example
//!
//! ```rust
//! use autobind_api::{BindConfig, BindingEmitter, BindingParser};
//! use autobind_cpp::CppBinder;
//! use std::path::Path;
//!
//! let binder = CppBinder::new();
//!
//! let source = r#"
//!     class Foo {
//!     public:
//!         Foo();
//!         void bar();
//!         static int baz(int x, int y = 5);
//!     };
//! "#;
//!
//! let bindings = binder.parse_source(source, Path::new("foo.h")).unwrap();
//! let config = BindConfig::default();
//! let text = BindingEmitter::new(&config).emit_to_string(&bindings.methods);
//! assert!(text.contains(r#"ClassDB::bind_method(D_METHOD("bar"), &Foo::bar);"#));
//! ```

mod access;
mod extractor;
mod parser_impl;
mod shape;
mod syntax;
mod walker;

pub use access::{AccessState, Action, BodyItem};
pub use extractor::{extract, extract_tree};
pub use parser_impl::CppBinder;
pub use syntax::{NodeKind, SourceTree, SyntaxNode};
pub use walker::{collect_kind, find_first, preorder, Preorder};

use autobind_api::{BindConfig, BindResult, BindingEmitter, BindingParser};
use std::path::Path;

/// Generate registration code for the header derived from `input`
pub fn generate(input: &Path, config: &BindConfig) -> BindResult<String> {
    let binder = CppBinder::with_config(config.clone());
    let bindings = binder.parse_input(input)?;
    Ok(BindingEmitter::new(config).emit_to_string(&bindings.methods))
}
