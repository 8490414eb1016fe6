use crate::builder::CompiledMatcher;
use crate::error::{CompileError, InputError};
use crate::value::Map;
use std::str::FromStr;
use xtract_template::Template;

/// A compiled template, ready to be applied to any number of inputs.
///
/// # Example
///
/// ```
/// use xtract_match::{Extractor, Key};
///
/// let extractor = Extractor::new("{{ day: 2d }}-{{ month: 2d }}-{{ year: 4d }}").unwrap();
///
/// let date = extractor.extract("31-12-2014").unwrap();
/// assert_eq!(date[&Key::from("year")].as_i64(), Some(2014));
///
/// assert!(extractor.extract("31-12-14").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Extractor {
    template: Template,
    matcher: CompiledMatcher,
}

impl Extractor {
    pub fn new(template: &str) -> Result<Self, CompileError> {
        let template = Template::parse(template)?;
        let matcher = CompiledMatcher::build(&template)?;
        Ok(Self { template, matcher })
    }

    pub fn extract(&self, input: &str) -> Option<Map> {
        self.matcher.extract(input)
    }

    pub fn extract_bytes(&self, input: &[u8]) -> Result<Option<Map>, InputError> {
        self.matcher.extract_bytes(input)
    }

    pub fn is_match(&self, input: &str) -> bool {
        self.matcher.is_match(input)
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn matcher(&self) -> &CompiledMatcher {
        &self.matcher
    }
}

impl FromStr for Extractor {
    type Err = CompileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Shorthand for [`Extractor::new`].
pub fn compile(template: &str) -> Result<Extractor, CompileError> {
    Extractor::new(template)
}
