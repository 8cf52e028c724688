//! Runtime values for Tally documents.
//!
//! # Heap Values
//!
//! Strings, objects, arrays and user functions live behind [`Heap`]. Build
//! them through the factory methods:
//!
//! ```text
//! let s = Value::string("hello");
//! let obj = Value::object(ObjectMap::new());
//! let list = Value::array(vec![Value::Number(1.0)]);
//! ```
//!
//! # Display
//!
//! `Display` renders a value the way a document shows a result: integral
//! numbers without a fractional part, `Infinity`/`NaN` spelled out, strings
//! bare at the top level and quoted inside arrays and objects.

mod heap;

use std::fmt;

use indexmap::IndexMap;

pub use heap::Heap;

/// Insertion-ordered string-keyed mapping used for objects and scope snapshots.
pub type ObjectMap = IndexMap<String, Value>;

/// Native function signature for math and aggregate builtins.
///
/// Builtins are total: inputs they cannot use produce `NaN` (math) or are
/// skipped (aggregates) rather than failing.
pub type BuiltinFn = fn(&[Value]) -> Value;

/// A user-defined function: parameter names plus the unevaluated body text.
///
/// The body is parsed again on every call and resolved against the caller's
/// bindings, so it sees whatever names exist at call time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserFunction {
    pub name: String,
    pub parameter_names: Vec<String>,
    pub body_text: String,
}

/// A callable value.
#[derive(Clone, Debug)]
pub enum FunctionValue {
    /// Native builtin (math library or aggregate).
    Builtin {
        name: &'static str,
        func: BuiltinFn,
    },
    /// Wrapper around a user-defined function.
    User(Heap<UserFunction>),
}

impl FunctionValue {
    /// Wrap a user function so it can be called like any other value.
    pub fn user(func: UserFunction) -> Self {
        FunctionValue::User(Heap::new(func))
    }

    /// Name the function was registered under.
    pub fn name(&self) -> &str {
        match self {
            FunctionValue::Builtin { name, .. } => name,
            FunctionValue::User(func) => &func.name,
        }
    }
}

/// Runtime value of a Tally expression.
#[derive(Clone, Debug)]
pub enum Value {
    /// IEEE-754 double; `NaN` and the infinities are ordinary values.
    Number(f64),
    String(Heap<String>),
    Bool(bool),
    Null,
    /// Result of looking up something that is not there. Distinct from `Null`.
    Undefined,
    Object(Heap<ObjectMap>),
    Array(Heap<Vec<Value>>),
    Function(FunctionValue),
}

impl Value {
    /// Create a string value.
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(Heap::new(s.into()))
    }

    /// Create an object value.
    pub fn object(map: ObjectMap) -> Self {
        Value::Object(Heap::new(map))
    }

    /// Create an empty object value.
    pub fn empty_object() -> Self {
        Value::object(ObjectMap::new())
    }

    /// Create an array value.
    pub fn array(items: Vec<Value>) -> Self {
        Value::Array(Heap::new(items))
    }

    /// Create a builtin function value.
    pub fn builtin(name: &'static str, func: BuiltinFn) -> Self {
        Value::Function(FunctionValue::Builtin { name, func })
    }

    /// Create a user function wrapper value.
    pub fn user_function(func: UserFunction) -> Self {
        Value::Function(FunctionValue::user(func))
    }

    /// Type name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Bool(_) => "boolean",
            Value::Null => "null",
            Value::Undefined => "undefined",
            Value::Object(_) => "object",
            Value::Array(_) => "array",
            Value::Function(_) => "function",
        }
    }

    /// The numeric payload, if this is a number.
    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The string payload, if this is a string.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Borrow the entries of an object.
    #[inline]
    pub fn as_object(&self) -> Option<&ObjectMap> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Mutable access to the entries of an object (copy-on-write).
    #[inline]
    pub fn as_object_mut(&mut self) -> Option<&mut ObjectMap> {
        match self {
            Value::Object(map) => Some(map.make_mut()),
            _ => None,
        }
    }

    /// Object entries for writing, replacing any non-object value with a
    /// fresh empty object first.
    pub fn force_object(&mut self) -> &mut ObjectMap {
        if !matches!(self, Value::Object(_)) {
            *self = Value::empty_object();
        }
        match self {
            Value::Object(map) => map.make_mut(),
            _ => unreachable!("force_object just stored an object"),
        }
    }

    /// JavaScript-style truthiness: `false`, `0`, `NaN`, `""`, `null` and
    /// `undefined` are falsy; everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::String(s) => !s.is_empty(),
            Value::Bool(b) => *b,
            Value::Null | Value::Undefined => false,
            Value::Object(_) | Value::Array(_) | Value::Function(_) => true,
        }
    }

    #[inline]
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Null | Value::Undefined)
    }

    /// Structural equality (`===`).
    ///
    /// Numbers follow IEEE comparison (`NaN` is never equal), objects and
    /// arrays compare element-wise, functions compare by identity.
    pub fn strict_equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a.as_str() == b.as_str(),
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Null, Value::Null) | (Value::Undefined, Value::Undefined) => true,
            (Value::Array(a), Value::Array(b)) => {
                a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x.strict_equals(y))
            }
            (Value::Object(a), Value::Object(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .all(|(k, v)| b.get(k).is_some_and(|w| v.strict_equals(w)))
            }
            (Value::Function(a), Value::Function(b)) => match (a, b) {
                (FunctionValue::Builtin { name: x, .. }, FunctionValue::Builtin { name: y, .. }) => {
                    x == y
                }
                (FunctionValue::User(x), FunctionValue::User(y)) => x.ptr_eq(y) || **x == **y,
                _ => false,
            },
            _ => false,
        }
    }

    /// Loose equality (`==`): strict equality, plus `null == undefined`.
    pub fn loose_equals(&self, other: &Value) -> bool {
        (self.is_nullish() && other.is_nullish()) || self.strict_equals(other)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.strict_equals(other)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

/// Format a number the way results are shown to users.
///
/// Follows JavaScript `String(n)`: shortest round-trip digits, integral
/// values without a fractional part, `-0` as `0`, exponent form (`1e+21`,
/// `1e-7`) outside `[1e-6, 1e21)`, and `NaN`, `Infinity`, `-Infinity`.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    if (1e-6..1e21).contains(&n.abs()) {
        return format!("{n}");
    }
    let exp = format!("{n:e}");
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
        _ => exp,
    }
}

/// Display adapter for values nested inside arrays and objects, where
/// strings are quoted.
struct Nested<'a>(&'a Value);

impl fmt::Display for Nested<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::String(s) => write!(f, "{:?}", s.as_str()),
            other => write!(f, "{other}"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => f.write_str(&format_number(*n)),
            Value::String(s) => f.write_str(s),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Null => f.write_str("null"),
            Value::Undefined => f.write_str("undefined"),
            Value::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", Nested(item))?;
                }
                write!(f, "]")
            }
            Value::Object(map) => {
                if map.is_empty() {
                    return write!(f, "{{}}");
                }
                write!(f, "{{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{k}: {}", Nested(v))?;
                }
                write!(f, "}}")
            }
            Value::Function(func) => write!(f, "[function {}]", func.name()),
        }
    }
}
