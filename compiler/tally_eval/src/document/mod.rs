//! The document evaluation loop.
//!
//! One pass over the lines, in order. State is the [`Scope`] plus the last
//! successful answer (initially `0`). Only expression lines that succeed
//! change the state; a failing line records its error and leaves both
//! untouched.

use tally_ir::{
    ClassifiedLine, EvaluationOutput, EvaluationResult, LineKind, ObjectMap, ResultKind, Value,
};
use tally_parse::classify_line;

use crate::bindings::{Bindings, LAST_ANSWER_NAMES};
use crate::config::EvalConfig;
use crate::evaluate_with;
use crate::scope::Scope;

/// Evaluate a document with default settings.
pub fn evaluate_document(text: &str, external: Option<&ObjectMap>) -> EvaluationOutput {
    evaluate_document_with(text, external, &EvalConfig::default())
}

/// Evaluate a document.
#[tracing::instrument(level = "debug", skip_all, fields(bytes = text.len()))]
pub fn evaluate_document_with(
    text: &str,
    external: Option<&ObjectMap>,
    config: &EvalConfig,
) -> EvaluationOutput {
    let mut evaluator = DocumentEvaluator::new(external, *config);
    let results = split_lines(text)
        .enumerate()
        .map(|(index, line)| evaluator.evaluate_line(index + 1, line))
        .collect();

    EvaluationOutput {
        results,
        variables: evaluator.scope.snapshot_top_level_variables(),
    }
}

/// Split on `\n`, dropping a trailing `\r` from each line. A final newline
/// does not start another line.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let body = text.strip_suffix('\n').unwrap_or(text);
    let lines = if text.is_empty() { None } else { Some(body) };
    lines
        .into_iter()
        .flat_map(|body| body.split('\n'))
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

struct DocumentEvaluator<'e> {
    scope: Scope,
    last_answer: Value,
    builtins: Bindings,
    external: Option<&'e ObjectMap>,
    config: EvalConfig,
}

impl<'e> DocumentEvaluator<'e> {
    fn new(external: Option<&'e ObjectMap>, config: EvalConfig) -> Self {
        DocumentEvaluator {
            scope: Scope::new(),
            last_answer: Value::Number(0.0),
            builtins: Bindings::builtins(),
            external,
            config,
        }
    }

    fn evaluate_line(&mut self, line_number: usize, text: &str) -> EvaluationResult {
        let ClassifiedLine { kind, .. } = classify_line(text);
        let result = match kind {
            LineKind::Text => ResultKind::Text,
            LineKind::Comment => ResultKind::Comment,
            LineKind::FunctionDefinition {
                function_name,
                parameter_names,
                body_text,
            } => {
                self.scope
                    .define_function(&function_name, parameter_names, &body_text);
                ResultKind::FunctionDefined {
                    name: function_name,
                }
            }
            LineKind::Expression {
                target_path,
                expression_text,
            } => self.evaluate_expression(line_number, target_path, &expression_text),
        };
        EvaluationResult::new(line_number, result)
    }

    fn evaluate_expression(
        &mut self,
        line_number: usize,
        target_path: Option<String>,
        expression_text: &str,
    ) -> ResultKind {
        let bindings =
            Bindings::assemble(&self.builtins, self.external, &self.scope, &self.last_answer);
        let value = match evaluate_with(expression_text, &bindings, &self.config) {
            Ok(value) => value,
            Err(err) => {
                tracing::debug!(
                    line = line_number,
                    error = %err,
                    trace = ?err.call_trace,
                    "line failed"
                );
                return ResultKind::Error {
                    message: err.message,
                };
            }
        };

        let result = match target_path {
            Some(target) => {
                self.scope.set_variable(&target, value.clone());
                ResultKind::Assignment {
                    target,
                    value: value.clone(),
                }
            }
            None => ResultKind::Value(value.clone()),
        };

        for name in LAST_ANSWER_NAMES {
            self.scope.set_variable(name, value.clone());
        }
        self.last_answer = value;
        result
    }
}
