//! Dotted key paths naming where a captured value lands.

use crate::error::TemplateError;
use std::fmt;
use std::str::FromStr;

/// One segment of a key path.
///
/// Indexes compare numerically and sort before names.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Key {
    Index(usize),
    Name(String),
}

impl Key {
    fn parse(segment: &str) -> Self {
        if !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(index) = segment.parse::<usize>() {
                if index.to_string() == segment {
                    return Key::Index(index);
                }
            }
        }
        Key::Name(segment.to_string())
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(i) => write!(f, "{}", i),
            Key::Name(name) => f.write_str(name),
        }
    }
}

impl From<&str> for Key {
    fn from(segment: &str) -> Self {
        Key::parse(segment)
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Key::Index(index)
    }
}

/// A non-empty sequence of keys, written `foo.bar.0` in a template.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPath(Vec<Key>);

impl KeyPath {
    /// Parses a raw tag key. `offset` is only used for error reporting.
    pub fn parse(raw: &str, offset: usize) -> Result<Self, TemplateError> {
        let key = raw.trim();
        if key.is_empty() {
            return Err(TemplateError::EmptyKey { offset });
        }

        let mut segments = Vec::new();
        for segment in key.split('.') {
            let segment = segment.trim();
            if segment.is_empty() {
                return Err(TemplateError::InvalidKey {
                    key: key.to_string(),
                    offset,
                });
            }
            segments.push(Key::parse(segment));
        }
        Ok(KeyPath(segments))
    }

    pub fn segments(&self) -> &[Key] {
        &self.0
    }

    /// Splits off the final segment, the one holding the leaf value.
    pub fn split_last(&self) -> Option<(&Key, &[Key])> {
        self.0.split_last()
    }

    /// True when `other` continues past the end of this path.
    pub fn is_prefix_of(&self, other: &KeyPath) -> bool {
        self.0.len() < other.0.len() && other.0.starts_with(&self.0)
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", key)?;
        }
        Ok(())
    }
}

impl FromStr for KeyPath {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KeyPath::parse(s, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_segment() {
        let path: KeyPath = " foo ".parse().unwrap();
        assert_eq!(path.segments(), &[Key::Name("foo".into())]);
    }

    #[test]
    fn test_nested_segments() {
        let path: KeyPath = "foo.bar".parse().unwrap();
        assert_eq!(
            path.segments(),
            &[Key::Name("foo".into()), Key::Name("bar".into())]
        );
        assert_eq!(path.to_string(), "foo.bar");
    }

    #[test]
    fn test_index_segments() {
        let path: KeyPath = "items.12.name".parse().unwrap();
        assert_eq!(path.segments()[1], Key::Index(12));
    }

    #[test]
    fn test_leading_zero_is_a_name() {
        let path: KeyPath = "items.007".parse().unwrap();
        assert_eq!(path.segments()[1], Key::Name("007".into()));
    }

    #[test]
    fn test_segments_are_trimmed() {
        let path: KeyPath = "foo . bar".parse().unwrap();
        assert_eq!(path.to_string(), "foo.bar");
    }

    #[test]
    fn test_empty_key() {
        assert_eq!(
            KeyPath::parse("   ", 4).unwrap_err(),
            TemplateError::EmptyKey { offset: 4 }
        );
    }

    #[test]
    fn test_dot_key() {
        assert!(matches!(
            KeyPath::parse(" . ", 0),
            Err(TemplateError::InvalidKey { .. })
        ));
    }

    #[test]
    fn test_empty_segment() {
        for raw in ["foo..bar", ".foo", "foo."] {
            assert!(
                matches!(KeyPath::parse(raw, 0), Err(TemplateError::InvalidKey { .. })),
                "{raw}"
            );
        }
    }

    #[test]
    fn test_prefix() {
        let foo: KeyPath = "foo".parse().unwrap();
        let foo_bar: KeyPath = "foo.bar".parse().unwrap();
        let foobar: KeyPath = "foobar".parse().unwrap();
        assert!(foo.is_prefix_of(&foo_bar));
        assert!(!foo_bar.is_prefix_of(&foo));
        assert!(!foo.is_prefix_of(&foo));
        assert!(!foo.is_prefix_of(&foobar));
    }

    #[test]
    fn test_key_ordering() {
        assert!(Key::Index(2) < Key::Index(10));
        assert!(Key::Index(10) < Key::Name("a".into()));
    }
}
