//! Gathers the inputs to run a template against.

use crate::error::{Error, Result};
use std::io::Read;
use std::path::Path;

/// Raw input read from the command line, a file, or stdin.
pub enum Source<'a> {
    Args(&'a [String]),
    File(&'a Path),
    Stdin,
}

impl Source<'_> {
    /// Splits the source into the inputs to extract from.
    ///
    /// Arguments are used as given. Otherwise the content is split into lines
    /// when `lines` is set, or used whole minus one trailing newline.
    pub fn inputs(&self, lines: bool) -> Result<Vec<Vec<u8>>> {
        let content = match self {
            Source::Args(args) => return Ok(args.iter().map(|a| a.as_bytes().to_vec()).collect()),
            Source::File(path) => std::fs::read(path).map_err(|source| Error::ReadInput {
                path: path.to_path_buf(),
                source,
            })?,
            Source::Stdin => {
                let mut buf = Vec::new();
                std::io::stdin().read_to_end(&mut buf)?;
                buf
            }
        };

        if lines {
            Ok(split_lines(&content))
        } else {
            Ok(vec![strip_newline(&content).to_vec()])
        }
    }
}

fn strip_newline(bytes: &[u8]) -> &[u8] {
    match bytes.strip_suffix(b"\n") {
        Some(rest) => rest.strip_suffix(b"\r").unwrap_or(rest),
        None => bytes,
    }
}

fn split_lines(content: &[u8]) -> Vec<Vec<u8>> {
    if content.is_empty() {
        return Vec::new();
    }
    strip_newline(content)
        .split(|&b| b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line).to_vec())
        .collect()
}
