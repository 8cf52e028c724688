//! Variable and function store for one document evaluation.
//!
//! Variables are addressed by dot paths (`trip.hotel.cost`). Writing through
//! a path creates the intermediate objects it needs; an intermediate that
//! holds a non-object value is replaced by an empty object without error.

use rustc_hash::FxHashMap;
use tally_ir::{FunctionValue, ObjectMap, UserFunction, Value};

/// Running state of a document: top-level variables and user functions.
#[derive(Clone, Debug, Default)]
pub struct Scope {
    variables: ObjectMap,
    functions: FxHashMap<String, FunctionValue>,
}

impl Scope {
    pub fn new() -> Self {
        Scope::default()
    }

    /// Store `value` at `path`, creating or overwriting intermediates.
    pub fn set_variable(&mut self, path: &str, value: Value) {
        let mut segments = path.split('.');
        let first = segments.next().unwrap_or(path);
        let rest: Vec<&str> = segments.collect();

        let Some((leaf, intermediates)) = rest.split_last() else {
            self.variables.insert(first.to_string(), value);
            return;
        };

        let mut slot = self
            .variables
            .entry(first.to_string())
            .or_insert_with(Value::empty_object);
        log_overwrite(slot, first);

        for segment in intermediates {
            slot = slot
                .force_object()
                .entry((*segment).to_string())
                .or_insert_with(Value::empty_object);
            log_overwrite(slot, segment);
        }

        slot.force_object().insert((*leaf).to_string(), value);
    }

    /// Read the value at `path`, or `None` when any segment is missing or an
    /// intermediate is not an object.
    pub fn get_variable(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let mut current = self.variables.get(segments.next()?)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }

    /// Define (or redefine) a user function. The last definition wins.
    pub fn define_function(
        &mut self,
        name: &str,
        parameter_names: Vec<String>,
        body_text: &str,
    ) {
        let func = UserFunction {
            name: name.to_string(),
            parameter_names,
            body_text: body_text.to_string(),
        };
        self.functions
            .insert(name.to_string(), FunctionValue::user(func));
    }

    /// Look up a user function by name.
    pub fn function(&self, name: &str) -> Option<&UserFunction> {
        match self.functions.get(name)? {
            FunctionValue::User(func) => Some(func),
            FunctionValue::Builtin { .. } => None,
        }
    }

    /// Every user function as a callable wrapper, keyed by name.
    pub fn functions(&self) -> impl Iterator<Item = (&str, &FunctionValue)> {
        self.functions.iter().map(|(name, func)| (name.as_str(), func))
    }

    /// Top-level variables, in first-assignment order.
    #[inline]
    pub fn variables(&self) -> &ObjectMap {
        &self.variables
    }

    /// Shallow copy of the top-level variables.
    ///
    /// Nested objects are shared with the scope but copy-on-write, so later
    /// assignments never show through the snapshot.
    pub fn snapshot_top_level_variables(&self) -> ObjectMap {
        self.variables.clone()
    }
}

fn log_overwrite(slot: &Value, segment: &str) {
    if !matches!(slot, Value::Object(_)) {
        tracing::debug!(
            segment,
            replaced = slot.type_name(),
            "dot-path assignment overwrites non-object value"
        );
    }
}

#[cfg(test)]
mod tests;
