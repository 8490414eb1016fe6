//! Conversion of extracted values to JSON.

use serde_json::{Map as JsonMap, Number};
use xtract_match::{Key, Map, Scalar, Value};

/// Maps whose keys are exactly `0..n` become arrays; all others become objects.
pub fn to_json(map: &Map) -> serde_json::Value {
    if is_sequence(map) {
        return serde_json::Value::Array(map.values().map(value_to_json).collect());
    }
    let mut object = JsonMap::new();
    for (key, value) in map {
        object.insert(key.to_string(), value_to_json(value));
    }
    serde_json::Value::Object(object)
}

fn value_to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Map(map) => to_json(map),
        Value::Scalar(Scalar::Text(s)) => serde_json::Value::String(s.clone()),
        Value::Scalar(Scalar::Integer(n)) => serde_json::Value::Number((*n).into()),
        Value::Scalar(Scalar::Float(x)) => Number::from_f64(*x)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
    }
}

fn is_sequence(map: &Map) -> bool {
    map.keys()
        .enumerate()
        .all(|(i, key)| *key == Key::Index(i))
}
