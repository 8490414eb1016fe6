//! Template parsing for xtract.
//!
//! A template is literal text with `{{ key }}` or `{{ key: specifier }}` tags:
//!
//! ```
//! use xtract_template::{Part, Template};
//!
//! let template = Template::parse("{{ day: 2d }}-{{ month: 2d }}-{{ year: 4d }}").unwrap();
//! let keys: Vec<String> = template.tags().map(|t| t.key.to_string()).collect();
//! assert_eq!(keys, ["day", "month", "year"]);
//! assert_eq!(template.parts()[1], Part::Literal("-".to_string()));
//! ```

mod error;
mod key;
mod lexer;
mod specifier;
mod tag;

pub use error::TemplateError;
pub use key::{Key, KeyPath};
pub use lexer::{lex, RawTag, Token, CLOSE, OPEN};
pub use specifier::{Bound, Kind, Length, Specifier};
pub use tag::{Part, Tag, Template};
