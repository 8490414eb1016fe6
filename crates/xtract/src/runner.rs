use crate::error::{Error, Result};
use rayon::prelude::*;
use xtract_match::{Extractor, Map};

/// Extracts from every input, keeping results in input order.
///
/// Stops with [`Error::NotText`] if any input is not valid UTF-8. Inputs are
/// numbered from 1 in errors.
pub fn extract_all(
    extractor: &Extractor,
    inputs: &[Vec<u8>],
    parallel: bool,
) -> Result<Vec<Option<Map>>> {
    let extract = |(i, input): (usize, &Vec<u8>)| {
        extractor
            .extract_bytes(input)
            .map_err(|source| Error::NotText { index: i + 1, source })
    };

    if parallel && inputs.len() > 1 {
        inputs.par_iter().enumerate().map(&extract).collect()
    } else {
        inputs.iter().enumerate().map(&extract).collect()
    }
}
