//! Binary and unary operator implementations.
//!
//! Direct enum dispatch over the fixed operator set. `&&` and `||` never
//! reach here: they short-circuit, so the interpreter handles them before
//! evaluating the right operand.

use tally_ir::{BinaryOp, UnaryOp, Value};

use crate::errors::{binary_type_mismatch, unary_type_mismatch, EvalResult};

/// Apply a non-short-circuiting binary operator to two evaluated operands.
pub fn evaluate_binary(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => eval_add(left, right),
        BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div | BinaryOp::Mod | BinaryOp::Pow => {
            match (left, right) {
                (Value::Number(a), Value::Number(b)) => Ok(Value::Number(arith(*a, *b, op))),
                _ => Err(binary_type_mismatch(op, left, right)),
            }
        }
        BinaryOp::Eq => Ok(Value::Bool(left.loose_equals(right))),
        BinaryOp::NotEq => Ok(Value::Bool(!left.loose_equals(right))),
        BinaryOp::StrictEq => Ok(Value::Bool(left.strict_equals(right))),
        BinaryOp::StrictNotEq => Ok(Value::Bool(!left.strict_equals(right))),
        BinaryOp::Lt | BinaryOp::LtEq | BinaryOp::Gt | BinaryOp::GtEq => {
            eval_comparison(left, right, op)
        }
        BinaryOp::And | BinaryOp::Or => Err(binary_type_mismatch(op, left, right)),
    }
}

/// `+` adds numbers and concatenates when either side is a string.
fn eval_add(left: &Value, right: &Value) -> EvalResult {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
        (Value::String(_), _) | (_, Value::String(_)) => {
            Ok(Value::string(format!("{left}{right}")))
        }
        _ => Err(binary_type_mismatch(BinaryOp::Add, left, right)),
    }
}

#[inline]
fn arith(a: f64, b: f64, op: BinaryOp) -> f64 {
    match op {
        BinaryOp::Sub => a - b,
        BinaryOp::Mul => a * b,
        BinaryOp::Div => a / b,
        // Truncated remainder, sign follows the dividend.
        BinaryOp::Mod => a % b,
        BinaryOp::Pow => a.powf(b),
        _ => unreachable!("arith called with non-arithmetic operator"),
    }
}

/// Ordering over two numbers or two strings. Any comparison with `NaN` is
/// false.
fn eval_comparison(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    let ordering = match (left, right) {
        (Value::Number(a), Value::Number(b)) => a.partial_cmp(b),
        (Value::String(a), Value::String(b)) => Some(a.as_str().cmp(b.as_str())),
        _ => return Err(binary_type_mismatch(op, left, right)),
    };
    let result = ordering.is_some_and(|ord| match op {
        BinaryOp::Lt => ord.is_lt(),
        BinaryOp::LtEq => ord.is_le(),
        BinaryOp::Gt => ord.is_gt(),
        BinaryOp::GtEq => ord.is_ge(),
        _ => false,
    });
    Ok(Value::Bool(result))
}

/// Apply a unary operator.
pub fn evaluate_unary(value: &Value, op: UnaryOp) -> EvalResult {
    match (value, op) {
        (Value::Number(n), UnaryOp::Neg) => Ok(Value::Number(-n)),
        (Value::Number(n), UnaryOp::Plus) => Ok(Value::Number(*n)),
        (_, UnaryOp::Not) => Ok(Value::Bool(!value.is_truthy())),
        _ => Err(unary_type_mismatch(op, value)),
    }
}
