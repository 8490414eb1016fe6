pub mod cli;
pub mod error;
pub mod input;
pub mod json;
pub mod output;
pub mod runner;

pub use xtract_match::{compile, CompileError, Extractor, Map, Scalar, Value};
