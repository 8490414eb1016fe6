use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("unterminated tag starting at byte {offset}")]
    UnterminatedTag { offset: usize },
    #[error("'{{{{' inside the tag starting at byte {offset}")]
    NestedTag { offset: usize },
    #[error("unexpected '}}}}' at byte {offset} outside of a tag")]
    UnexpectedClose { offset: usize },
    #[error("tag at byte {offset} has no key")]
    EmptyKey { offset: usize },
    #[error("invalid key '{key}' in tag at byte {offset}")]
    InvalidKey { key: String, offset: usize },
    #[error("empty specifier for key '{key}'")]
    EmptySpecifier { key: String },
    #[error("invalid length in specifier '{specifier}'")]
    InvalidLength { specifier: String },
    #[error("zero length in specifier '{specifier}'")]
    ZeroLength { specifier: String },
    #[error("float specifier '{specifier}' allows no digits")]
    InvalidFloat { specifier: String },
}
