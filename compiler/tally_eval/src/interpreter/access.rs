//! Member (`a.b`) and index (`a[i]`) access.

use tally_ir::{format_number, Value};

use crate::errors::{property_of_nullish, EvalResult};

/// `receiver.property`
///
/// Objects yield the entry or `undefined`; arrays and strings know
/// `length`; every other non-nullish receiver yields `undefined`.
pub(super) fn member(receiver: &Value, property: &str) -> EvalResult {
    match receiver {
        Value::Null | Value::Undefined => Err(property_of_nullish(property, receiver)),
        Value::Object(map) => Ok(map.get(property).cloned().unwrap_or(Value::Undefined)),
        Value::Array(items) if property == "length" => Ok(length(items.len())),
        Value::String(s) if property == "length" => Ok(length(s.chars().count())),
        _ => Ok(Value::Undefined),
    }
}

/// `receiver[key]`
///
/// Numeric keys index arrays and strings; string keys behave like member
/// access. Out-of-range or fractional positions yield `undefined`.
pub(super) fn index(receiver: &Value, key: &Value) -> EvalResult {
    match (receiver, key) {
        (Value::Null | Value::Undefined, _) => {
            Err(property_of_nullish(&key.to_string(), receiver))
        }
        (Value::Array(items), Value::Number(n)) => Ok(position(*n)
            .and_then(|i| items.get(i))
            .cloned()
            .unwrap_or(Value::Undefined)),
        (Value::String(s), Value::Number(n)) => Ok(position(*n)
            .and_then(|i| s.chars().nth(i))
            .map_or(Value::Undefined, |c| Value::string(c.to_string()))),
        (Value::Object(_), Value::Number(n)) => member(receiver, &format_number(*n)),
        (_, Value::String(property)) => member(receiver, property),
        _ => Ok(Value::Undefined),
    }
}

/// A non-negative integral index.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "guarded: n is a non-negative integer below 2^53"
)]
fn position(n: f64) -> Option<usize> {
    if n >= 0.0 && n.fract() == 0.0 && n < 9_007_199_254_740_992.0 {
        Some(n as usize)
    } else {
        None
    }
}

#[expect(clippy::cast_precision_loss, reason = "lengths far below 2^52")]
fn length(len: usize) -> Value {
    Value::Number(len as f64)
}
