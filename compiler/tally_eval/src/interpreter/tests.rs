use pretty_assertions::assert_eq;
use tally_ir::{FunctionValue, UserFunction, Value};

use crate::{evaluate, evaluate_with, Bindings, EvalConfig, EvalErrorKind};

fn bindings() -> Bindings {
    let mut bindings = Bindings::builtins();
    bindings.insert("price", Value::Number(20.0));
    bindings.insert("name", Value::string("tally"));
    bindings.insert("items", Value::array(vec![Value::Number(3.0), Value::Number(4.0)]));
    bindings
}

fn with_function(mut bindings: Bindings, name: &str, params: &[&str], body: &str) -> Bindings {
    let func = UserFunction {
        name: name.to_string(),
        parameter_names: params.iter().map(ToString::to_string).collect(),
        body_text: body.to_string(),
    };
    bindings.insert(name, Value::Function(FunctionValue::user(func)));
    bindings
}

fn eval(text: &str) -> Result<String, String> {
    eval_in(&bindings(), text)
}

fn eval_in(bindings: &Bindings, text: &str) -> Result<String, String> {
    evaluate(text, bindings)
        .map(|v| v.to_string())
        .map_err(|e| e.message)
}

fn ok(s: &str) -> Result<String, String> {
    Ok(s.to_string())
}

fn err(s: &str) -> Result<String, String> {
    Err(s.to_string())
}

#[test]
fn test_arithmetic_and_precedence() {
    assert_eq!(eval("price * 1.5 + 2"), ok("32"));
    assert_eq!(eval("(1 + 2) * 3"), ok("9"));
    assert_eq!(eval("2 ^ 3 ^ 2"), ok("512"));
    assert_eq!(eval("-2 ** 2"), ok("-4"));
    assert_eq!(eval("10 % 4"), ok("2"));
    assert_eq!(eval("1 / 0"), ok("Infinity"));
    assert_eq!(eval("0.1 + 0.2"), ok("0.30000000000000004"));
}

#[test]
fn test_math_library() {
    assert_eq!(eval("sqrt(16) + abs(-2)"), ok("6"));
    assert_eq!(eval("round(pi * 100) / 100"), ok("3.14"));
    assert_eq!(eval("max(1, items, 2)"), ok("4"));
}

#[test]
fn test_strings() {
    assert_eq!(eval("'hello ' + name"), ok("hello tally"));
    assert_eq!(eval("name.length"), ok("5"));
    assert_eq!(eval("name[0]"), ok("t"));
    assert_eq!(eval("\"total: \" + price"), ok("total: 20"));
}

#[test]
fn test_logical_and_conditional() {
    assert_eq!(eval("price > 10 ? 'big' : 'small'"), ok("big"));
    assert_eq!(eval("0 || 'fallback'"), ok("fallback"));
    assert_eq!(eval("price && name"), ok("tally"));
    assert_eq!(eval("null && missing"), ok("null"));
    assert_eq!(eval("1 || missing"), ok("1"));
    assert_eq!(eval("!price"), ok("false"));
    assert_eq!(eval("null == undefined"), ok("true"));
    assert_eq!(eval("null === undefined"), ok("false"));
}

#[test]
fn test_literals_and_access() {
    assert_eq!(eval("[1, 'a', [true]]"), ok("[1, \"a\", [true]]"));
    assert_eq!(eval("{a: 1, 'b c': [2]}"), ok("{a: 1, b c: [2]}"));
    assert_eq!(eval("{a: {b: 5}}.a.b"), ok("5"));
    assert_eq!(eval("{a: 1}.zzz"), ok("undefined"));
    assert_eq!(eval("{a: 1}['a']"), ok("1"));
    assert_eq!(eval("items[1]"), ok("4"));
    assert_eq!(eval("items[5]"), ok("undefined"));
    assert_eq!(eval("items.length"), ok("2"));
    assert_eq!(eval("{1: 'one'}[1]"), ok("one"));
}

#[test]
fn test_runtime_errors() {
    assert_eq!(eval("missing + 1"), err("missing is not defined"));
    assert_eq!(eval("price()"), err("price is not a function"));
    assert_eq!(eval("Math.floor(1)"), err("Math is not defined"));
    assert_eq!(eval("items.length()"), err("items.length is not a function"));
    assert_eq!(
        eval("null.x"),
        err("cannot read properties of null (reading 'x')")
    );
    assert_eq!(
        eval("undefined[0]"),
        err("cannot read properties of undefined (reading '0')")
    );
    assert_eq!(eval("name * 2"), err("cannot apply `*` to string and number"));
}

#[test]
fn test_parse_errors_surface_as_eval_errors() {
    let result = evaluate("3 +", &bindings());
    assert!(matches!(
        result.map_err(|e| e.kind),
        Err(EvalErrorKind::Parse { .. })
    ));
    assert_eq!(
        eval("2 pm"),
        err("syntax error: unexpected identifier `pm` after end of expression")
    );
}

#[test]
fn test_user_function_calls() {
    let bindings = with_function(bindings(), "tip", &["amount", "pct"], "amount * pct / 100");
    assert_eq!(eval_in(&bindings, "tip(80, 15)"), ok("12"));
    assert_eq!(eval_in(&bindings, "tip(price, 10) + price"), ok("22"));
    // missing arguments are undefined, extras ignored
    assert_eq!(
        eval_in(&bindings, "tip(80)"),
        err("cannot apply `*` to number and undefined")
    );
    assert_eq!(eval_in(&bindings, "tip(80, 15, 99)"), ok("12"));
}

#[test]
fn test_parameters_shadow_and_do_not_leak() {
    let bindings = with_function(bindings(), "double", &["price"], "price * 2");
    let bindings = with_function(bindings, "outer", &["secret"], "inner()");
    let bindings = with_function(bindings, "inner", &[], "secret");
    assert_eq!(eval_in(&bindings, "double(3)"), ok("6"));
    assert_eq!(eval_in(&bindings, "price"), ok("20"));
    assert_eq!(eval_in(&bindings, "outer(1)"), err("secret is not defined"));
}

#[test]
fn test_recursion() {
    let bindings = with_function(
        bindings(),
        "fib",
        &["n"],
        "n < 2 ? n : fib(n - 1) + fib(n - 2)",
    );
    assert_eq!(eval_in(&bindings, "fib(15)"), ok("610"));
}

#[test]
fn test_call_depth_limit() {
    let bindings = with_function(bindings(), "forever", &["x"], "forever(x + 1)");
    let config = EvalConfig::default().with_max_call_depth(32);
    let error = evaluate_with("forever(0)", &bindings, &config);
    assert_eq!(
        error.clone().map_err(|e| e.message),
        Err("maximum call depth exceeded (limit: 32)".to_string())
    );
    assert_eq!(
        error.map_err(|e| e.call_trace),
        Err(vec!["forever".to_string()])
    );
}

#[test]
fn test_body_parse_error_reported_at_call() {
    let bindings = with_function(bindings(), "broken", &[], "1 +* 2");
    let result = evaluate("broken()", &bindings);
    assert!(matches!(
        result.as_ref().map_err(|e| &e.kind),
        Err(EvalErrorKind::Parse { .. })
    ));
    assert_eq!(result.map_err(|e| e.call_trace), Err(vec!["broken".to_string()]));
}

#[test]
fn test_deeply_nested_expression() {
    let depth = 3000;
    let text = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(eval(&text), ok("1"));
    let negations = format!("{}1", "-".repeat(depth));
    assert_eq!(eval(&negations), ok("1"));
}
