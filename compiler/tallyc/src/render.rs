//! Plain-text rendering of evaluation output and classifications.

use tally_ir::{ClassifiedLine, EvaluationOutput, EvaluationResult, LineKind, ObjectMap, ResultKind};

/// One gutter-prefixed line per result, for example `3 | total = 42`.
///
/// Text and comment lines render as an empty gutter so output lines up with
/// the source document.
pub fn render_results(output: &EvaluationOutput) -> String {
    let width = gutter_width(output.results.len());
    let mut out = String::new();
    for result in &output.results {
        out.push_str(&render_result(result, width));
        out.push('\n');
    }
    out
}

fn render_result(result: &EvaluationResult, width: usize) -> String {
    let number = result.line_number;
    match &result.kind {
        ResultKind::Value(value) => format!("{number:>width$} | {value}"),
        ResultKind::Assignment { target, value } => format!("{number:>width$} | {target} = {value}"),
        ResultKind::FunctionDefined { name } => format!("{number:>width$} | fn {name}(...)"),
        ResultKind::Error { message } => format!("{number:>width$} | error: {message}"),
        ResultKind::Text | ResultKind::Comment => format!("{number:>width$} |"),
    }
}

/// Final scope as `name = value` lines, in first-assignment order.
pub fn render_variables(variables: &ObjectMap) -> String {
    variables
        .iter()
        .map(|(name, value)| format!("{name} = {value}\n"))
        .collect()
}

/// Classification of one line, for example
/// `2 | assignment | rate = 0.2`.
pub fn render_classification(line_number: usize, line: &ClassifiedLine, width: usize) -> String {
    let tag = line.kind.tag();
    let detail = match &line.kind {
        LineKind::Text | LineKind::Comment => line.raw_text.trim().to_string(),
        LineKind::Expression {
            target_path: Some(target),
            expression_text,
        } => format!("{target} = {expression_text}"),
        LineKind::Expression {
            target_path: None,
            expression_text,
        } => expression_text.clone(),
        LineKind::FunctionDefinition {
            function_name,
            parameter_names,
            body_text,
        } => format!(
            "{function_name}({}) = {body_text}",
            parameter_names.join(", ")
        ),
    };
    if detail.is_empty() {
        format!("{line_number:>width$} | {tag}")
    } else {
        format!("{line_number:>width$} | {tag} | {detail}")
    }
}

/// Digits needed for the largest line number.
pub fn gutter_width(lines: usize) -> usize {
    let mut width = 1;
    let mut n = lines;
    while n >= 10 {
        n /= 10;
        width += 1;
    }
    width
}
