//! Autobind API
//!
//! Shared types for generating `ClassDB` registration code from headers.
//!
//! This crate provides the pieces every front end shares:
//!
//! - **BindingParser trait**: The interface a header front end implements
//! - **MethodRecord**: A public method selected for binding
//! - **BindingEmitter**: Renders records into registration statements
//! - **Configuration**: Marker comment, emitted names, header extension
//! - **Metrics**: Per-run counters
//! - **Error handling**: The fatal error taxonomy
//!
//! # Example
//!
//! ```rust
//! use autobind_api::{BindConfig, BindingEmitter, MethodRecord};
//!
//! let config = BindConfig::default();
//! let record = MethodRecord::new("Foo", "bar").with_parameter("value");
//! let line = BindingEmitter::new(&config).render(&record);
//! assert_eq!(line.text, r#"ClassDB::bind_method(D_METHOD("bar","value"), &Foo::bar);"#);
//! ```

pub mod config;
pub mod emitter;
pub mod errors;
pub mod ir;
pub mod metrics;
pub mod paths;
pub mod record;
pub mod traits;

// Re-export commonly used types
pub use config::BindConfig;
pub use emitter::{BindingEmitter, EmissionLine};
pub use errors::{BindError, BindResult};
pub use ir::BindingIR;
pub use metrics::ParserMetrics;
pub use paths::header_path_for;
pub use record::{is_special_member_name, MethodRecord};
pub use traits::{BindingParser, FileBindings};
