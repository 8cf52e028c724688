//! The math library exposed to expressions.
//!
//! A fixed allow-list of numeric functions and constants, bound as the
//! lowest-precedence names of every line. Functions never fail: a missing or
//! non-numeric argument reads as `NaN`.

use std::f64::consts;

use tally_ir::{BuiltinFn, Value};

/// Named numeric constants.
pub const MATH_CONSTANTS: &[(&str, f64)] = &[
    ("pi", consts::PI),
    ("e", consts::E),
    ("PI", consts::PI),
    ("E", consts::E),
    ("LN2", consts::LN_2),
    ("LN10", consts::LN_10),
    ("LOG2E", consts::LOG2_E),
    ("LOG10E", consts::LOG10_E),
    ("SQRT2", consts::SQRT_2),
    ("SQRT1_2", consts::FRAC_1_SQRT_2),
    ("Infinity", f64::INFINITY),
    ("NaN", f64::NAN),
];

/// Named numeric functions.
pub const MATH_FUNCTIONS: &[(&str, BuiltinFn)] = &[
    ("abs", abs),
    ("acos", acos),
    ("acosh", acosh),
    ("asin", asin),
    ("asinh", asinh),
    ("atan", atan),
    ("atan2", atan2),
    ("atanh", atanh),
    ("cbrt", cbrt),
    ("ceil", ceil),
    ("cos", cos),
    ("cosh", cosh),
    ("exp", exp),
    ("expm1", expm1),
    ("floor", floor),
    ("hypot", hypot),
    ("log", log),
    ("log10", log10),
    ("log1p", log1p),
    ("log2", log2),
    ("pow", pow),
    ("round", round),
    ("sign", sign),
    ("sin", sin),
    ("sinh", sinh),
    ("sqrt", sqrt),
    ("tan", tan),
    ("tanh", tanh),
    ("trunc", trunc),
];

/// Positional numeric argument, `NaN` when absent or not a number.
#[inline]
fn arg(args: &[Value], index: usize) -> f64 {
    args.get(index).and_then(Value::as_number).unwrap_or(f64::NAN)
}

macro_rules! unary_math {
    ($($name:ident => $method:ident),* $(,)?) => {
        $(
            fn $name(args: &[Value]) -> Value {
                Value::Number(arg(args, 0).$method())
            }
        )*
    };
}

unary_math! {
    abs => abs,
    acos => acos,
    acosh => acosh,
    asin => asin,
    asinh => asinh,
    atan => atan,
    atanh => atanh,
    cbrt => cbrt,
    ceil => ceil,
    cos => cos,
    cosh => cosh,
    exp => exp,
    expm1 => exp_m1,
    floor => floor,
    log => ln,
    log10 => log10,
    log1p => ln_1p,
    log2 => log2,
    sin => sin,
    sinh => sinh,
    sqrt => sqrt,
    tan => tan,
    tanh => tanh,
    trunc => trunc,
}

fn atan2(args: &[Value]) -> Value {
    Value::Number(arg(args, 0).atan2(arg(args, 1)))
}

fn pow(args: &[Value]) -> Value {
    Value::Number(arg(args, 0).powf(arg(args, 1)))
}

/// Square root of the sum of squares of every argument; `0` for none.
fn hypot(args: &[Value]) -> Value {
    let mut sum = 0.0;
    for index in 0..args.len() {
        let n = arg(args, index);
        if n.is_infinite() {
            return Value::Number(f64::INFINITY);
        }
        sum += n * n;
    }
    Value::Number(sum.sqrt())
}

/// Round half up (towards `+Infinity`), so `round(-2.5)` is `-2`.
fn round(args: &[Value]) -> Value {
    let n = arg(args, 0);
    if !n.is_finite() || n.fract() == 0.0 {
        return Value::Number(n);
    }
    Value::Number((n + 0.5).floor())
}

/// `-1`, `0` or `1`; zero and `NaN` pass through unchanged.
fn sign(args: &[Value]) -> Value {
    let n = arg(args, 0);
    if n == 0.0 || n.is_nan() {
        return Value::Number(n);
    }
    Value::Number(n.signum())
}
