use thiserror::Error;
use xtract_template::{KeyPath, TemplateError};

#[derive(Error, Debug)]
pub enum CompileError {
    #[error(transparent)]
    Template(#[from] TemplateError),
    #[error("template has no tags")]
    NoTags,
    #[error("key '{path}' is used both as a value and as a parent of other keys")]
    ConflictingKey { path: KeyPath },
    #[error("failed to build pattern regex: {0}")]
    RegexBuild(#[from] regex::Error),
}

#[derive(Error, Debug)]
pub enum InputError {
    #[error("input is not text: {0}")]
    NotText(#[from] std::str::Utf8Error),
}
