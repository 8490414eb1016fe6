//! Runs a compiled matcher and turns captures into a nested, typed map.

use crate::builder::CompiledMatcher;
use crate::error::InputError;
use crate::value::{Map, Scalar, Value};
use tracing::trace;
use xtract_template::KeyPath;

impl CompiledMatcher {
    /// Matches `input` in its entirety and returns the extracted values, or
    /// `None` when it does not match.
    pub fn extract(&self, input: &str) -> Option<Map> {
        let Some(caps) = self.regex.captures(input) else {
            trace!(len = input.len(), "no match");
            return None;
        };

        let mut values = Map::new();
        for (capture, group) in self.captures.iter().zip(caps.iter().skip(1)) {
            if let Some(m) = group {
                insert(&mut values, &capture.key, Scalar::cast(m.as_str()));
            }
        }

        trace!(keys = values.len(), "matched");
        if values.is_empty() {
            None
        } else {
            Some(values)
        }
    }

    /// Like [`extract`](Self::extract), for input that has not been decoded yet.
    pub fn extract_bytes(&self, input: &[u8]) -> Result<Option<Map>, InputError> {
        let text = std::str::from_utf8(input)?;
        Ok(self.extract(text))
    }

    pub fn is_match(&self, input: &str) -> bool {
        self.regex.is_match(input)
    }
}

/// Places `value` at `path`, creating intermediate maps. A later value at the
/// same path replaces the earlier one.
fn insert(values: &mut Map, path: &KeyPath, value: Scalar) {
    let Some((leaf, parents)) = path.split_last() else {
        return;
    };

    let mut node = values;
    for key in parents {
        // Leaf/parent overlaps are rejected when the matcher is built.
        let Value::Map(inner) = node
            .entry(key.clone())
            .or_insert_with(|| Value::Map(Map::new()))
        else {
            return;
        };
        node = inner;
    }
    node.insert(leaf.clone(), Value::Scalar(value));
}
