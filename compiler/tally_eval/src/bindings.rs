//! The explicit name table an expression is evaluated against.
//!
//! An expression can reach nothing but what is in its [`Bindings`]. The
//! document loop assembles a fresh table for every line by layering sources
//! from lowest to highest precedence:
//!
//! | Layer | Source                              |
//! |-------|-------------------------------------|
//! | 1     | math library                        |
//! | 2     | aggregates (`sum`, `avg`, ...)      |
//! | 3     | external variables                  |
//! | 4     | scope variables                     |
//! | 5     | user-function wrappers              |
//! | 6     | `ans` and `_` (last answer)         |
//!
//! A later layer replaces any same-named entry of an earlier one.

use rustc_hash::FxHashMap;
use tally_ir::{ObjectMap, Value};

use crate::builtins::AGGREGATES;
use crate::math::{MATH_CONSTANTS, MATH_FUNCTIONS};
use crate::scope::Scope;

/// Name of the last-answer binding and its short alias.
pub const LAST_ANSWER_NAMES: [&str; 2] = ["ans", "_"];

/// Flat name → value table.
#[derive(Clone, Debug, Default)]
pub struct Bindings {
    names: FxHashMap<String, Value>,
}

impl Bindings {
    /// An empty table.
    pub fn new() -> Self {
        Bindings::default()
    }

    /// Only the math library.
    pub fn math() -> Self {
        let mut bindings = Bindings::new();
        for (name, n) in MATH_CONSTANTS {
            bindings.insert(*name, Value::Number(*n));
        }
        for (name, func) in MATH_FUNCTIONS {
            bindings.insert(*name, Value::builtin(*name, *func));
        }
        bindings
    }

    /// Math library plus aggregates: the layers that never change between
    /// lines.
    pub fn builtins() -> Self {
        let mut bindings = Bindings::math();
        for (name, func) in AGGREGATES {
            bindings.insert(*name, Value::builtin(*name, *func));
        }
        bindings
    }

    /// Layer the per-line sources on top of `builtins`.
    pub fn assemble(
        builtins: &Bindings,
        external: Option<&ObjectMap>,
        scope: &Scope,
        last_answer: &Value,
    ) -> Self {
        let mut bindings = builtins.clone();
        if let Some(external) = external {
            bindings.extend_from(external);
        }
        bindings.extend_from(scope.variables());
        for (name, func) in scope.functions() {
            bindings.insert(name, Value::Function(func.clone()));
        }
        for name in LAST_ANSWER_NAMES {
            bindings.insert(name, last_answer.clone());
        }
        tracing::trace!(names = bindings.len(), "assembled line bindings");
        bindings
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.names.get(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.names.insert(name.into(), value);
    }

    fn extend_from(&mut self, map: &ObjectMap) {
        for (name, value) in map {
            self.names.insert(name.clone(), value.clone());
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn external(entries: &[(&str, f64)]) -> ObjectMap {
        entries
            .iter()
            .map(|(k, v)| ((*k).to_string(), Value::Number(*v)))
            .collect()
    }

    #[test]
    fn builtins_hold_math_and_aggregates() {
        let bindings = Bindings::builtins();
        assert!(bindings.contains("sqrt"));
        assert!(bindings.contains("pi"));
        assert!(bindings.contains("sum"));
        assert!(!Bindings::math().contains("sum"));
        assert!(Bindings::new().is_empty());
    }

    #[test]
    fn layers_override_in_order() {
        let builtins = Bindings::builtins();
        let mut scope = Scope::new();
        scope.set_variable("rate", Value::Number(2.0));
        scope.set_variable("sqrt", Value::Number(9.0));
        scope.set_variable("f", Value::Number(1.0));
        scope.define_function("f", vec!["x".to_string()], "x");

        let ext = external(&[("rate", 1.0), ("budget", 500.0), ("pi", 3.0)]);
        let bindings = Bindings::assemble(&builtins, Some(&ext), &scope, &Value::Number(42.0));

        assert_eq!(bindings.get("pi"), Some(&Value::Number(3.0)));
        assert_eq!(bindings.get("budget"), Some(&Value::Number(500.0)));
        assert_eq!(bindings.get("rate"), Some(&Value::Number(2.0)));
        assert_eq!(bindings.get("sqrt"), Some(&Value::Number(9.0)));
        assert_eq!(bindings.get("f").map(Value::type_name), Some("function"));
        assert_eq!(bindings.get("ans"), Some(&Value::Number(42.0)));
        assert_eq!(bindings.get("_"), Some(&Value::Number(42.0)));
    }

    #[test]
    fn last_answer_beats_scope_ans() {
        let mut scope = Scope::new();
        scope.set_variable("ans", Value::Number(1.0));
        let bindings =
            Bindings::assemble(&Bindings::builtins(), None, &scope, &Value::Number(7.0));
        assert_eq!(bindings.get("ans"), Some(&Value::Number(7.0)));
    }
}
