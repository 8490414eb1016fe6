//! Typed values produced by an extraction.

use std::collections::BTreeMap;
use std::fmt;
use winnow::ascii::{digit0, digit1};
use winnow::combinator::{alt, opt};
use winnow::prelude::*;
use winnow::token::one_of;
use xtract_template::Key;

/// A nested extraction result keyed by path segment.
pub type Map = BTreeMap<Key, Value>;

/// A captured leaf after type inference.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl Scalar {
    /// Infers the type of captured text.
    ///
    /// Digit strings become integers only when printing the integer gives back
    /// the exact same text. Unsigned ones that don't (`"007"`) stay text; signed
    /// ones (`"+5"`, `"-007"`) are read as floats like any other decimal literal
    /// (`"6.28"`, `".5"`, `"1e3"`). Everything else is text.
    pub fn cast(text: &str) -> Self {
        if recognize(integer_literal, text) {
            match text.parse::<i64>() {
                Ok(n) if n.to_string() == text => return Scalar::Integer(n),
                // Unsigned digit strings keep their exact spelling.
                _ if text.bytes().all(|b| b.is_ascii_digit()) => {
                    return Scalar::Text(text.to_string())
                }
                _ => {}
            }
        }
        if recognize(float_literal, text) {
            if let Ok(f) = text.parse::<f64>() {
                if f.is_finite() {
                    return Scalar::Float(f);
                }
            }
        }
        Scalar::Text(text.to_string())
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Scalar::Text(_) => "text",
            Scalar::Integer(_) => "integer",
            Scalar::Float(_) => "float",
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(s) => f.write_str(s),
            Scalar::Integer(n) => write!(f, "{}", n),
            Scalar::Float(x) => write!(f, "{}", x),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Scalar(Scalar),
    Map(Map),
}

impl Value {
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Value::Scalar(s) => Some(s),
            Value::Map(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Scalar(Scalar::Text(s)) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Scalar(Scalar::Integer(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Scalar(Scalar::Float(x)) => Some(*x),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(m) => Some(m),
            Value::Scalar(_) => None,
        }
    }

    /// Looks up a dotted path below this value, e.g. `"foo.bar"`.
    pub fn get(&self, path: &str) -> Option<&Value> {
        path.split('.')
            .try_fold(self, |value, segment| value.as_map()?.get(&Key::from(segment)))
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Scalar(s) => s.type_name(),
            Value::Map(_) => "map",
        }
    }
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        Value::Scalar(scalar)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Map(map)
    }
}

// ============ Numeric Literals ============

fn sign(input: &mut &str) -> ModalResult<Option<char>> {
    opt(one_of(['+', '-'])).parse_next(input)
}

fn integer_literal(input: &mut &str) -> ModalResult<()> {
    (sign, digit1).void().parse_next(input)
}

fn exponent(input: &mut &str) -> ModalResult<()> {
    (one_of(['e', 'E']), sign, digit1).void().parse_next(input)
}

fn float_literal(input: &mut &str) -> ModalResult<()> {
    (
        sign,
        alt(((digit1, opt(('.', digit0))).void(), ('.', digit1).void())),
        opt(exponent),
    )
        .void()
        .parse_next(input)
}

fn recognize(mut parser: impl FnMut(&mut &str) -> ModalResult<()>, text: &str) -> bool {
    let mut input = text;
    parser(&mut input).is_ok() && input.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cast_integer() {
        assert_eq!(Scalar::cast("31"), Scalar::Integer(31));
        assert_eq!(Scalar::cast("0"), Scalar::Integer(0));
        assert_eq!(Scalar::cast("-12"), Scalar::Integer(-12));
    }

    #[test]
    fn test_leading_zero_stays_text() {
        assert_eq!(Scalar::cast("007"), Scalar::Text("007".into()));
        assert_eq!(Scalar::cast("00"), Scalar::Text("00".into()));
    }

    #[test]
    fn test_unsigned_integer_that_does_not_round_trip_stays_text() {
        assert_eq!(
            Scalar::cast("99999999999999999999"),
            Scalar::Text("99999999999999999999".into())
        );
    }

    #[test]
    fn test_signed_integer_that_does_not_round_trip_is_float() {
        assert_eq!(Scalar::cast("+5"), Scalar::Float(5.0));
        assert_eq!(Scalar::cast("-007"), Scalar::Float(-7.0));
        match Scalar::cast("-0") {
            Scalar::Float(x) => assert!(x == 0.0 && x.is_sign_negative()),
            other => panic!("expected float, got {:?}", other),
        }
        assert_eq!(
            Scalar::cast("-99999999999999999999"),
            Scalar::Float(-99999999999999999999.0)
        );
    }

    #[test]
    fn test_cast_float() {
        assert_eq!(Scalar::cast("6.28"), Scalar::Float(6.28));
        assert_eq!(Scalar::cast("06.28"), Scalar::Float(6.28));
        assert_eq!(Scalar::cast(".5"), Scalar::Float(0.5));
        assert_eq!(Scalar::cast("12."), Scalar::Float(12.0));
        assert_eq!(Scalar::cast("-1.5e3"), Scalar::Float(-1500.0));
        assert_eq!(Scalar::cast("2E2"), Scalar::Float(200.0));
    }

    #[test]
    fn test_cast_text() {
        for text in ["", "foo", ".", "-", "1.2.3", " 5", "5 ", "inf", "NaN", "1e", "0x1f", "1e999"] {
            assert_eq!(Scalar::cast(text), Scalar::Text(text.into()), "{text:?}");
        }
    }

    #[test]
    fn test_unicode_digits_are_text() {
        assert_eq!(Scalar::cast("٣"), Scalar::Text("٣".into()));
    }

    #[test]
    fn test_get_path() {
        let mut inner = Map::new();
        inner.insert(Key::from("bar"), Value::Scalar(Scalar::Integer(1)));
        let mut outer = Map::new();
        outer.insert(Key::from("foo"), Value::Map(inner));
        let value = Value::Map(outer);

        assert_eq!(value.get("foo.bar").and_then(Value::as_i64), Some(1));
        assert_eq!(value.get("foo").map(Value::type_name), Some("map"));
        assert!(value.get("foo.baz").is_none());
        assert!(value.get("foo.bar.baz").is_none());
    }
}
