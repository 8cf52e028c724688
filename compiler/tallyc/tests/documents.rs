//! End-to-end document evaluation through the public `tallyc` API.

use pretty_assertions::assert_eq;
use tallyc::{
    classify_line, evaluate_document, evaluate_document_with, EvalConfig, EvaluationOutput,
    LineKind, ObjectMap, ResultKind, Value,
};

const BUDGET: &str = include_str!("fixtures/budget.tally");

fn line(output: &EvaluationOutput, number: usize) -> &ResultKind {
    &output.results[number - 1].kind
}

fn shown(output: &EvaluationOutput, number: usize) -> String {
    match line(output, number) {
        ResultKind::Value(value) | ResultKind::Assignment { value, .. } => value.to_string(),
        ResultKind::Error { message } => format!("error: {message}"),
        other => format!("{other:?}"),
    }
}

#[test]
fn budget_document_without_externals() {
    let output = evaluate_document(BUDGET, None);

    assert_eq!(output.results.len(), 17);
    assert_eq!(line(&output, 1), &ResultKind::Comment);
    assert_eq!(line(&output, 2), &ResultKind::Text);
    assert_eq!(line(&output, 3), &ResultKind::Text);
    assert_eq!(shown(&output, 9), "1950");
    assert_eq!(shown(&output, 10), "487.5");
    assert_eq!(
        line(&output, 12),
        &ResultKind::FunctionDefined {
            name: "perPerson".to_string()
        }
    );
    assert_eq!(shown(&output, 13), "650");
    assert_eq!(shown(&output, 14), "error: heads is not defined");
    assert_eq!(line(&output, 16), &ResultKind::Text);
    assert_eq!(shown(&output, 17), "error: income is not defined");
    assert_eq!(output.error_count(), 2);

    let names: Vec<&str> = output.variables.keys().map(String::as_str).collect();
    assert_eq!(
        names,
        vec!["rent", "ans", "_", "utilities", "food", "total"]
    );
    assert_eq!(
        output.variable("food").map(ToString::to_string),
        Some("{groceries: 420, dining: 150}".to_string())
    );
    assert_eq!(output.variable("ans"), Some(&Value::Number(650.0)));
}

#[test]
fn budget_document_with_externals() {
    let mut external = ObjectMap::new();
    external.insert("heads".to_string(), Value::Number(2.0));
    external.insert("income".to_string(), Value::Number(3000.0));
    external.insert("rent".to_string(), Value::Number(1.0));

    let output = evaluate_document(BUDGET, Some(&external));

    assert_eq!(output.error_count(), 0);
    assert_eq!(shown(&output, 14), "975");
    assert_eq!(shown(&output, 17), "1050");
    assert_eq!(output.variable("rent"), Some(&Value::Number(1200.0)));
    assert!(output.variable("heads").is_none());
}

#[test]
fn classification_matches_evaluation() {
    let output = evaluate_document(BUDGET, None);
    for (index, text) in BUDGET.lines().enumerate() {
        let classified = classify_line(text);
        assert_eq!(classified.raw_text, text);
        let result = line(&output, index + 1);
        let consistent = match classified.kind {
            LineKind::Text => matches!(result, ResultKind::Text),
            LineKind::Comment => matches!(result, ResultKind::Comment),
            LineKind::FunctionDefinition { .. } => {
                matches!(result, ResultKind::FunctionDefined { .. })
            }
            LineKind::Expression {
                target_path: Some(_),
                ..
            } => matches!(
                result,
                ResultKind::Assignment { .. } | ResultKind::Error { .. }
            ),
            LineKind::Expression {
                target_path: None, ..
            } => matches!(result, ResultKind::Value(_) | ResultKind::Error { .. }),
        };
        assert!(consistent, "line {} `{text}` -> {result:?}", index + 1);
    }
}

#[test]
fn evaluation_is_deterministic() {
    assert_eq!(evaluate_document(BUDGET, None), evaluate_document(BUDGET, None));
}

#[test]
fn configured_call_depth() {
    let text = "count(n) = n == 0 ? 0 : 1 + count(n - 1)\ncount(100)";
    let config = EvalConfig::default().with_max_call_depth(50);
    let limited = evaluate_document_with(text, None, &config);
    assert_eq!(
        shown(&limited, 2),
        "error: maximum call depth exceeded (limit: 50)"
    );
    assert_eq!(shown(&evaluate_document(text, None), 2), "100");
}

#[test]
fn runaway_recursion_is_an_error_not_a_crash() {
    let output = evaluate_document("loop(x) = loop(x)\nloop(1)\n1 + 1", None);
    assert_eq!(
        shown(&output, 2),
        "error: maximum call depth exceeded (limit: 10000)"
    );
    assert_eq!(shown(&output, 3), "2");
}
