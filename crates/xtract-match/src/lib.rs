//! Compile `{{ tag }}` templates into matchers and pull typed values out of strings.
//!
//! A template is compiled once and can then be applied to many inputs. Each
//! input either matches the template in its entirety, producing a nested map of
//! text, integer and float values, or does not match at all.
//!
//! # Example
//!
//! ```
//! use xtract_match::{compile, Key, Scalar, Value};
//!
//! let extractor = compile("{{ foo.bar }}, {{ foo.baz }}!").unwrap();
//! let values = Value::Map(extractor.extract("Hello, World!").unwrap());
//!
//! assert_eq!(values.get("foo.bar").and_then(Value::as_str), Some("Hello"));
//! assert_eq!(values.get("foo.baz").and_then(Value::as_str), Some("World"));
//!
//! let extractor = compile("{{ tau: .2f }}, {{ pi: .2f }}").unwrap();
//! let values = extractor.extract("6.28, 3.14").unwrap();
//! assert_eq!(values[&Key::from("pi")], Value::Scalar(Scalar::Float(3.14)));
//! assert!(extractor.extract("6.283, 3.142").is_none());
//! ```

mod builder;
mod engine;
mod error;
mod extractor;
mod value;

pub use builder::{Capture, CompiledMatcher};
pub use error::{CompileError, InputError};
pub use extractor::{compile, Extractor};
pub use value::{Map, Scalar, Value};
pub use xtract_template::{Key, KeyPath, Specifier, Template};
