//! Evaluation errors.
//!
//! `EvalErrorKind` is the typed category; `EvalError` pairs it with the
//! rendered message that ends up in a line's `Error` result. Build errors
//! through the factory functions below so `kind` and `message` always agree.

use std::fmt;

use tally_ir::{BinaryOp, UnaryOp, Value};
use tally_parse::ParseError;
use tally_stack::DepthExceeded;

/// Result of evaluating an expression.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    /// The expression text did not tokenize or parse.
    Parse { message: String },

    // Names
    UndefinedVariable { name: String },

    // Operators
    BinaryTypeMismatch {
        op: BinaryOp,
        left: &'static str,
        right: &'static str,
    },
    UnaryTypeMismatch { op: UnaryOp, operand: &'static str },

    // Access
    PropertyOfNullish {
        property: String,
        receiver: &'static str,
    },

    // Calls
    NotCallable { callee: String },
    CallDepthExceeded { limit: usize },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse { message } => write!(f, "syntax error: {message}"),
            Self::UndefinedVariable { name } => write!(f, "{name} is not defined"),
            Self::BinaryTypeMismatch { op, left, right } => {
                write!(f, "cannot apply `{}` to {left} and {right}", op.as_symbol())
            }
            Self::UnaryTypeMismatch { op, operand } => {
                write!(f, "cannot apply unary `{}` to {operand}", op.as_symbol())
            }
            Self::PropertyOfNullish { property, receiver } => {
                write!(f, "cannot read properties of {receiver} (reading '{property}')")
            }
            Self::NotCallable { callee } => write!(f, "{callee} is not a function"),
            Self::CallDepthExceeded { limit } => {
                write!(f, "{}", DepthExceeded { limit: *limit })
            }
        }
    }
}

/// Evaluation error for a single line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Human readable message, carried verbatim into the line's result.
    pub message: String,
    /// User functions the error unwound through, innermost first.
    pub call_trace: Vec<String>,
}

impl EvalError {
    /// Create an error from a structured kind.
    pub fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        EvalError {
            kind,
            message,
            call_trace: Vec::new(),
        }
    }

    /// Record that the error unwound out of the user function `name`.
    ///
    /// Direct recursion collapses into a single entry.
    #[must_use]
    pub fn in_function(mut self, name: &str) -> Self {
        if self.call_trace.last().map(String::as_str) != Some(name) {
            self.call_trace.push(name.to_string());
        }
        self
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for EvalError {}

impl From<ParseError> for EvalError {
    fn from(err: ParseError) -> Self {
        parse_error(&err)
    }
}

impl From<DepthExceeded> for EvalError {
    fn from(err: DepthExceeded) -> Self {
        call_depth_exceeded(err.limit)
    }
}

// Factories

#[cold]
pub fn parse_error(err: &ParseError) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Parse {
        message: err.to_string(),
    })
}

#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}

#[cold]
pub fn binary_type_mismatch(op: BinaryOp, left: &Value, right: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::BinaryTypeMismatch {
        op,
        left: left.type_name(),
        right: right.type_name(),
    })
}

#[cold]
pub fn unary_type_mismatch(op: UnaryOp, operand: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnaryTypeMismatch {
        op,
        operand: operand.type_name(),
    })
}

#[cold]
pub fn property_of_nullish(property: &str, receiver: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::PropertyOfNullish {
        property: property.to_string(),
        receiver: receiver.type_name(),
    })
}

/// `callee` is the source-level description of what was called, such as
/// `total` or `rates.vat`.
#[cold]
pub fn not_callable(callee: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotCallable {
        callee: callee.into(),
    })
}

#[cold]
pub fn call_depth_exceeded(limit: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::CallDepthExceeded { limit })
}
