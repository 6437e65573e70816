use regex::Regex;
use serde_json::{Map, Value};

use crate::error::InvokeError;

/// Best-effort convert a CLI string into a typed JSON scalar.
///
/// Rules are tried in a fixed order and the first match wins: boolean and
/// null keywords (case-insensitive), integer, decimal, then the string
/// unchanged. Every input produces a value.
pub fn coerce(raw: &str) -> Value {
    match raw.to_lowercase().as_str() {
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        "null" | "none" => return Value::Null,
        _ => {}
    }

    let int_pattern = Regex::new(r"^-?\d+$").unwrap();
    if int_pattern.is_match(raw) {
        if let Ok(n) = raw.parse::<i64>() {
            return Value::Number(n.into());
        }
    }

    let decimal_pattern = Regex::new(r"^-?\d+\.\d*$").unwrap();
    if decimal_pattern.is_match(raw) {
        if let Some(n) = raw.parse::<f64>().ok().and_then(serde_json::Number::from_f64) {
            return Value::Number(n);
        }
    }

    Value::String(raw.to_string())
}

/// Split CLI tokens into an optional tool name and a coerced parameter map.
///
/// The first token is the tool name; every later token must be a `key=value`
/// pair, split on the first `=`.
pub fn parse_params(tokens: &[String]) -> Result<(Option<String>, Map<String, Value>), InvokeError> {
    let Some((tool, rest)) = tokens.split_first() else {
        return Ok((None, Map::new()));
    };

    let mut params = Map::new();
    for token in rest {
        let Some((key, value)) = token.split_once('=') else {
            return Err(InvokeError::BadParameter(token.clone()));
        };
        params.insert(key.to_string(), coerce(value));
    }

    Ok((Some(tool.clone()), params))
}
