//! Aggregate builtins: `sum`, `avg`, `min`, `max`.
//!
//! Every aggregate first flattens its arguments into a list of finite
//! numbers: objects and arrays contribute their values at any depth, and
//! anything else (strings, booleans, `null`, `NaN`, infinities, functions)
//! is dropped.

use tally_ir::{BuiltinFn, Value};

/// Aggregates in registration order.
pub const AGGREGATES: &[(&str, BuiltinFn)] = &[
    ("sum", sum),
    ("avg", avg),
    ("min", min),
    ("max", max),
];

/// Collect the finite numbers reachable from `args`.
pub fn flatten(args: &[Value]) -> Vec<f64> {
    let mut out = Vec::new();
    for arg in args {
        collect(arg, &mut out);
    }
    out
}

fn collect(value: &Value, out: &mut Vec<f64>) {
    match value {
        Value::Number(n) if n.is_finite() => out.push(*n),
        Value::Array(items) => {
            for item in items.iter() {
                collect(item, out);
            }
        }
        Value::Object(map) => {
            for item in map.values() {
                collect(item, out);
            }
        }
        _ => {}
    }
}

/// Total of all numbers; `0` when there are none.
pub fn sum(args: &[Value]) -> Value {
    Value::Number(flatten(args).iter().sum())
}

/// Arithmetic mean; `0` when there are no numbers.
pub fn avg(args: &[Value]) -> Value {
    let numbers = flatten(args);
    if numbers.is_empty() {
        return Value::Number(0.0);
    }
    #[expect(
        clippy::cast_precision_loss,
        reason = "element counts far below 2^52"
    )]
    let count = numbers.len() as f64;
    Value::Number(numbers.iter().sum::<f64>() / count)
}

/// Smallest number; `Infinity` when there are none.
pub fn min(args: &[Value]) -> Value {
    Value::Number(flatten(args).into_iter().fold(f64::INFINITY, f64::min))
}

/// Largest number; `-Infinity` when there are none.
pub fn max(args: &[Value]) -> Value {
    Value::Number(flatten(args).into_iter().fold(f64::NEG_INFINITY, f64::max))
}
