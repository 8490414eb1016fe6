//! Resolves lexed tags into key paths and specifiers.

use crate::error::TemplateError;
use crate::key::KeyPath;
use crate::lexer::{lex, RawTag, Token};
use crate::specifier::Specifier;

/// A fully resolved `{{ key: specifier }}` tag.
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub key: KeyPath,
    pub specifier: Option<Specifier>,
    pub before: Option<char>,
    pub after: Option<char>,
    pub offset: usize,
}

impl Tag {
    pub fn resolve(raw: &RawTag<'_>) -> Result<Self, TemplateError> {
        let body = raw.body.trim();
        let (key_text, spec_text) = match body.split_once(':') {
            Some((key, spec)) => (key, Some(spec)),
            None => (body, None),
        };

        let key = KeyPath::parse(key_text, raw.offset)?;
        let specifier = spec_text
            .map(|spec| Specifier::parse(spec, key_text.trim()))
            .transpose()?;

        Ok(Tag {
            key,
            specifier,
            before: raw.before,
            after: raw.after,
            offset: raw.offset,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Part {
    Literal(String),
    Tag(Tag),
}

/// A parsed template: literal text interleaved with resolved tags.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    source: String,
    parts: Vec<Part>,
}

impl Template {
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let parts = lex(source)?
            .iter()
            .map(|token| match token {
                Token::Literal(text) => Ok(Part::Literal(text.to_string())),
                Token::Tag(raw) => Tag::resolve(raw).map(Part::Tag),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            source: source.to_string(),
            parts,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn tags(&self) -> impl Iterator<Item = &Tag> {
        self.parts.iter().filter_map(|part| match part {
            Part::Tag(tag) => Some(tag),
            Part::Literal(_) => None,
        })
    }
}
