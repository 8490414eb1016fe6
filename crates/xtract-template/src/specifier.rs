//! Type and length specifiers: the part of a tag after the `:`.
//!
//! ```text
//! {{ name: 5 }}      exactly 5 characters
//! {{ name: s }}      one or more characters
//! {{ year: 4d }}     exactly 4 digits
//! {{ price: .2f }}   any digits, a point, exactly 2 digits
//! ```

use crate::error::TemplateError;
use std::fmt;
use std::num::NonZeroUsize;
use winnow::ascii::digit1;
use winnow::combinator::{opt, preceded};
use winnow::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    String,
    Integer,
    Float,
}

impl Kind {
    pub fn letter(self) -> char {
        match self {
            Kind::String => 's',
            Kind::Integer => 'd',
            Kind::Float => 'f',
        }
    }
}

/// How many characters (or digits) a capture may span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    AtLeast(usize),
    Exactly(NonZeroUsize),
}

impl Bound {
    pub const ONE_OR_MORE: Bound = Bound::AtLeast(1);
    pub const ANY: Bound = Bound::AtLeast(0);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Length {
    Chars(Bound),
    Float { before: Bound, after: Bound },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Specifier {
    pub kind: Kind,
    pub length: Length,
}

impl Specifier {
    pub fn string(bound: Bound) -> Self {
        Self {
            kind: Kind::String,
            length: Length::Chars(bound),
        }
    }

    pub fn integer(bound: Bound) -> Self {
        Self {
            kind: Kind::Integer,
            length: Length::Chars(bound),
        }
    }

    pub fn float(before: Bound, after: Bound) -> Self {
        Self {
            kind: Kind::Float,
            length: Length::Float { before, after },
        }
    }

    /// Parses the text after the `:` of the tag whose key is `key`.
    pub fn parse(raw: &str, key: &str) -> Result<Self, TemplateError> {
        let spec = raw.trim();
        let Some(last) = spec.chars().next_back() else {
            return Err(TemplateError::EmptySpecifier {
                key: key.to_string(),
            });
        };
        let prefix = &spec[..spec.len() - last.len_utf8()];

        match last {
            's' => Ok(Self::string(char_bound(prefix, spec)?)),
            'd' => Ok(Self::integer(char_bound(prefix, spec)?)),
            'f' => float_bounds(prefix, spec),
            _ => match exact(spec, spec)? {
                Some(n) => Ok(Self::string(Bound::Exactly(n))),
                None => Err(invalid_length(spec)),
            },
        }
    }
}

// ============ Winnow Parsers ============

fn count(input: &mut &str) -> ModalResult<usize> {
    digit1.try_map(str::parse::<usize>).parse_next(input)
}

fn float_prefix(input: &mut &str) -> ModalResult<(Option<usize>, Option<Option<usize>>)> {
    (opt(count), opt(preceded('.', opt(count)))).parse_next(input)
}

/// Runs `parser` over all of `text`; `None` if it fails or leaves input behind.
fn parse_all<O>(
    mut parser: impl FnMut(&mut &str) -> ModalResult<O>,
    text: &str,
) -> Option<O> {
    let mut input = text;
    let output = parser(&mut input).ok()?;
    input.is_empty().then_some(output)
}

fn invalid_length(spec: &str) -> TemplateError {
    TemplateError::InvalidLength {
        specifier: spec.to_string(),
    }
}

fn positive(n: usize, spec: &str) -> Result<NonZeroUsize, TemplateError> {
    NonZeroUsize::new(n).ok_or_else(|| TemplateError::ZeroLength {
        specifier: spec.to_string(),
    })
}

/// An exact count made only of digits, or `None` if `text` is empty.
fn exact(text: &str, spec: &str) -> Result<Option<NonZeroUsize>, TemplateError> {
    if text.is_empty() {
        return Ok(None);
    }
    let n = parse_all(count, text).ok_or_else(|| invalid_length(spec))?;
    positive(n, spec).map(Some)
}

fn char_bound(prefix: &str, spec: &str) -> Result<Bound, TemplateError> {
    Ok(exact(prefix, spec)?.map_or(Bound::ONE_OR_MORE, Bound::Exactly))
}

fn float_bounds(prefix: &str, spec: &str) -> Result<Specifier, TemplateError> {
    let (before, after) = parse_all(float_prefix, prefix).ok_or_else(|| invalid_length(spec))?;

    let exactly = |n: usize| positive(n, spec).map(Bound::Exactly);
    let (before, after) = match (before, after) {
        (None, None) => (Bound::ONE_OR_MORE, Bound::ONE_OR_MORE),
        (Some(b), None) => (exactly(b)?, Bound::ONE_OR_MORE),
        (None, Some(None)) => {
            return Err(TemplateError::InvalidFloat {
                specifier: spec.to_string(),
            })
        }
        (b, Some(a)) => (
            b.map_or(Ok(Bound::ANY), exactly)?,
            a.map_or(Ok(Bound::ANY), exactly)?,
        ),
    };
    Ok(Specifier::float(before, after))
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Exactly(n) => write!(f, "{}", n),
            Bound::AtLeast(_) => Ok(()),
        }
    }
}

impl fmt::Display for Specifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.length {
            Length::Chars(bound) => write!(f, "{}{}", bound, self.kind.letter()),
            Length::Float {
                before,
                after: Bound::AtLeast(1),
            } if before != Bound::ANY => write!(f, "{}f", before),
            Length::Float { before, after } => write!(f, "{}.{}f", before, after),
        }
    }
}
