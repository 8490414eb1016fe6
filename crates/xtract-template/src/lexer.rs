//! Splits a template into literal spans and raw tag bodies.

use crate::error::TemplateError;

pub const OPEN: &str = "{{";
pub const CLOSE: &str = "}}";

/// A lexed piece of a template, borrowing from the template text.
#[derive(Debug, Clone, PartialEq)]
pub enum Token<'a> {
    Literal(&'a str),
    Tag(RawTag<'a>),
}

/// The text between `{{` and `}}`, untrimmed.
///
/// `before` and `after` hold the literal characters touching the tag. They are
/// `None` at the edges of the template and when the neighbour is another tag.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTag<'a> {
    pub body: &'a str,
    pub offset: usize,
    pub before: Option<char>,
    pub after: Option<char>,
}

pub fn lex(template: &str) -> Result<Vec<Token<'_>>, TemplateError> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < template.len() {
        let rest = &template[pos..];
        let Some(start) = rest.find(OPEN) else {
            check_literal(rest, pos)?;
            tokens.push(Token::Literal(rest));
            break;
        };

        if start > 0 {
            check_literal(&rest[..start], pos)?;
            tokens.push(Token::Literal(&rest[..start]));
        }

        let offset = pos + start;
        let body_start = offset + OPEN.len();
        let Some(len) = template[body_start..].find(CLOSE) else {
            return Err(TemplateError::UnterminatedTag { offset });
        };
        let body = &template[body_start..body_start + len];
        if body.contains(OPEN) {
            return Err(TemplateError::NestedTag { offset });
        }

        tokens.push(Token::Tag(RawTag {
            body,
            offset,
            before: None,
            after: None,
        }));
        pos = body_start + len + CLOSE.len();
    }

    link_neighbours(&mut tokens);
    Ok(tokens)
}

fn check_literal(literal: &str, pos: usize) -> Result<(), TemplateError> {
    match literal.find(CLOSE) {
        Some(i) => Err(TemplateError::UnexpectedClose { offset: pos + i }),
        None => Ok(()),
    }
}

fn link_neighbours(tokens: &mut [Token<'_>]) {
    for i in 0..tokens.len() {
        let before = match i.checked_sub(1).map(|j| &tokens[j]) {
            Some(Token::Literal(text)) => text.chars().next_back(),
            _ => None,
        };
        let after = match tokens.get(i + 1) {
            Some(Token::Literal(text)) => text.chars().next(),
            _ => None,
        };
        if let Token::Tag(tag) = &mut tokens[i] {
            tag.before = before;
            tag.after = after;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(body: &str, offset: usize, before: Option<char>, after: Option<char>) -> Token<'_> {
        Token::Tag(RawTag {
            body,
            offset,
            before,
            after,
        })
    }

    #[test]
    fn test_literal_only() {
        assert_eq!(lex("hello world").unwrap(), vec![Token::Literal("hello world")]);
    }

    #[test]
    fn test_empty_template() {
        assert_eq!(lex("").unwrap(), vec![]);
    }

    #[test]
    fn test_single_tag() {
        assert_eq!(lex("{{ foo }}").unwrap(), vec![tag(" foo ", 0, None, None)]);
    }

    #[test]
    fn test_neighbours() {
        let tokens = lex("{{ a }}, {{ b }}!").unwrap();
        assert_eq!(
            tokens,
            vec![
                tag(" a ", 0, None, Some(',')),
                Token::Literal(", "),
                tag(" b ", 9, Some(' '), Some('!')),
                Token::Literal("!"),
            ]
        );
    }

    #[test]
    fn test_adjacent_tags_have_no_literal_neighbour() {
        let tokens = lex("x{{a}}{{b}}y").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Literal("x"),
                tag("a", 1, Some('x'), None),
                tag("b", 6, None, Some('y')),
                Token::Literal("y"),
            ]
        );
    }

    #[test]
    fn test_multibyte_neighbours() {
        let tokens = lex("→{{ a }}é").unwrap();
        assert_eq!(tokens[1], tag(" a ", 3, Some('→'), Some('é')));
    }

    #[test]
    fn test_first_close_ends_tag() {
        let tokens = lex("{{ a }}}").unwrap();
        assert_eq!(tokens, vec![tag(" a ", 0, None, Some('}')), Token::Literal("}")]);
        assert_eq!(
            lex("{{ a }}}}").unwrap_err(),
            TemplateError::UnexpectedClose { offset: 7 }
        );
    }

    #[test]
    fn test_unterminated() {
        assert_eq!(
            lex("abc {{ foo ").unwrap_err(),
            TemplateError::UnterminatedTag { offset: 4 }
        );
    }

    #[test]
    fn test_nested_open() {
        assert_eq!(
            lex("{{ a {{ b }}").unwrap_err(),
            TemplateError::NestedTag { offset: 0 }
        );
    }

    #[test]
    fn test_stray_close() {
        assert_eq!(
            lex("a }} b").unwrap_err(),
            TemplateError::UnexpectedClose { offset: 2 }
        );
    }

    #[test]
    fn test_single_braces_are_literal() {
        let tokens = lex("{a} {{ b }} {c}").unwrap();
        assert_eq!(tokens[0], Token::Literal("{a} "));
        assert_eq!(tokens[2], Token::Literal(" {c}"));
    }
}
