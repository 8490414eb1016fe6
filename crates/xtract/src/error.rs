use std::path::PathBuf;
use thiserror::Error;
use xtract_match::{CompileError, InputError};

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid template '{template}'")]
    Template {
        template: String,
        #[source]
        source: CompileError,
    },

    #[error("Failed to read input file '{path}'")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Input {index} is not text")]
    NotText {
        index: usize,
        #[source]
        source: InputError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
