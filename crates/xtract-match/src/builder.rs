//! Builds one anchored regex out of a parsed template.

use crate::error::CompileError;
use regex::Regex;
use std::fmt;
use tracing::debug;
use xtract_template::{Bound, Kind, KeyPath, Length, Part, Specifier, Tag, Template};

/// Any character except the tag braces.
const TEXT: &str = "[^{}]";
/// ASCII digits only; `\d` would also accept other scripts' digits.
const DIGIT: &str = "[0-9]";

/// The capture group built for one tag.
#[derive(Debug, Clone, PartialEq)]
pub struct Capture {
    pub key: KeyPath,
    pub specifier: Option<Specifier>,
    pub pattern: String,
}

impl fmt::Display for Capture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.specifier {
            Some(spec) => write!(f, "{}: {} => ({})", self.key, spec, self.pattern),
            None => write!(f, "{} => ({})", self.key, self.pattern),
        }
    }
}

/// A template compiled into a regex with one group per tag, in tag order.
#[derive(Debug, Clone)]
pub struct CompiledMatcher {
    pub(crate) regex: Regex,
    pub(crate) captures: Vec<Capture>,
}

impl CompiledMatcher {
    pub fn build(template: &Template) -> Result<Self, CompileError> {
        let mut regex_str = String::new();
        let mut captures = Vec::new();

        for part in template.parts() {
            match part {
                Part::Literal(text) => regex_str.push_str(&regex::escape(text)),
                Part::Tag(tag) => {
                    let pattern = capture_pattern(tag);
                    regex_str.push_str(&format!("({})", pattern));
                    captures.push(Capture {
                        key: tag.key.clone(),
                        specifier: tag.specifier,
                        pattern,
                    });
                }
            }
        }

        if captures.is_empty() {
            return Err(CompileError::NoTags);
        }
        check_conflicts(&captures)?;

        // Use dotall mode for multiline matching
        let regex_str = format!("(?s)^{}$", regex_str);
        debug!(pattern = %regex_str, tags = captures.len(), "compiled template");

        Ok(Self {
            regex: Regex::new(&regex_str)?,
            captures,
        })
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    pub fn captures(&self) -> &[Capture] {
        &self.captures
    }

    pub fn keys(&self) -> impl Iterator<Item = &KeyPath> {
        self.captures.iter().map(|c| &c.key)
    }
}

fn capture_pattern(tag: &Tag) -> String {
    let Some(spec) = tag.specifier else {
        // Naked tags run up to the literal character that follows them. The
        // preceding character is already consumed by the literal before the group.
        return match tag.after {
            Some(c) => format!("[^{}]+", regex::escape(&c.to_string())),
            None => format!("{}+", TEXT),
        };
    };

    match (spec.kind, spec.length) {
        (_, Length::Float { before, after }) => format!(
            "{}{}\\.{}{}",
            DIGIT,
            quantifier(before),
            DIGIT,
            quantifier(after)
        ),
        (Kind::Integer, Length::Chars(bound)) => format!("{}{}", DIGIT, quantifier(bound)),
        (_, Length::Chars(bound)) => format!("{}{}", TEXT, quantifier(bound)),
    }
}

fn quantifier(bound: Bound) -> String {
    match bound {
        Bound::Exactly(n) => format!("{{{}}}", n),
        Bound::AtLeast(0) => "*".to_string(),
        Bound::AtLeast(1) => "+".to_string(),
        Bound::AtLeast(n) => format!("{{{},}}", n),
    }
}

/// Rejects templates where one key is both a leaf and a parent, e.g.
/// `{{ foo }}` together with `{{ foo.bar }}`.
fn check_conflicts(captures: &[Capture]) -> Result<(), CompileError> {
    for (i, a) in captures.iter().enumerate() {
        for b in &captures[i + 1..] {
            if a.key.is_prefix_of(&b.key) || b.key.is_prefix_of(&a.key) {
                let shorter = if a.key.segments().len() < b.key.segments().len() {
                    &a.key
                } else {
                    &b.key
                };
                return Err(CompileError::ConflictingKey {
                    path: shorter.clone(),
                });
            }
        }
    }
    Ok(())
}
