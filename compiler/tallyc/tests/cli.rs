//! Argument handling and rendering behind the `tally` binary.

use pretty_assertions::assert_eq;
use tallyc::commands::{
    build_externals, classify_source, eval_source, parse_eval_args, resolve_config, EvalOptions,
};
use tallyc::{EvalConfig, ObjectMap, Value};

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

#[test]
fn parses_eval_arguments() {
    let options = parse_eval_args(&args(&[
        "notes.tally",
        "--var",
        "rate=0.2",
        "--var=base = 2 * 50",
        "--max-depth=64",
    ]));
    assert_eq!(
        options,
        Ok(EvalOptions {
            path: "notes.tally".to_string(),
            vars: vec![
                ("rate".to_string(), "0.2".to_string()),
                ("base".to_string(), "2 * 50".to_string()),
            ],
            max_depth: Some(64),
        })
    );
}

#[test]
fn stdin_path_is_accepted() {
    assert_eq!(
        parse_eval_args(&args(&["-"])).map(|o| o.path),
        Ok("-".to_string())
    );
}

#[test]
fn rejects_bad_eval_arguments() {
    assert_eq!(
        parse_eval_args(&args(&["--max-depth=64"])),
        Err("missing file path".to_string())
    );
    assert_eq!(
        parse_eval_args(&args(&["a.tally", "b.tally"])),
        Err("unexpected argument 'b.tally'".to_string())
    );
    assert_eq!(
        parse_eval_args(&args(&["a.tally", "--var"])),
        Err("--var needs a `name=expression` argument".to_string())
    );
    assert_eq!(
        parse_eval_args(&args(&["a.tally", "--var", "1x=2"])),
        Err("invalid --var name '1x'".to_string())
    );
    assert_eq!(
        parse_eval_args(&args(&["a.tally", "--max-depth=0"])),
        Err("invalid call depth '0': expected a positive integer".to_string())
    );
    assert_eq!(
        parse_eval_args(&args(&["a.tally", "--fast"])),
        Err("unknown option '--fast'".to_string())
    );
}

#[test]
fn externals_see_only_the_math_library() {
    let vars = vec![
        ("area".to_string(), "round(pi * 2 ^ 2)".to_string()),
        ("label".to_string(), "'q' + 1".to_string()),
    ];
    let externals = build_externals(&vars);
    assert_eq!(
        externals.as_ref().map(|m| m.get("area").cloned()),
        Ok(Some(Value::Number(13.0)))
    );
    assert_eq!(
        externals.map(|m| m.get("label").map(ToString::to_string)),
        Ok(Some("q1".to_string()))
    );

    let aggregate = vec![("total".to_string(), "sum(1, 2)".to_string())];
    assert_eq!(
        build_externals(&aggregate),
        Err("--var total: sum is not defined".to_string())
    );
}

#[test]
fn config_resolution_order() {
    assert_eq!(resolve_config(None, None), Ok(EvalConfig::default()));
    assert_eq!(
        resolve_config(None, Some("32")).map(|c| c.max_call_depth),
        Ok(32)
    );
    assert_eq!(
        resolve_config(Some(8), Some("32")).map(|c| c.max_call_depth),
        Ok(8)
    );
    assert_eq!(
        resolve_config(None, Some("deep")),
        Err("TALLY_MAX_CALL_DEPTH: invalid call depth 'deep': expected a positive integer".to_string())
    );
}

#[test]
fn eval_output_layout() {
    let source = "Lunch break\nprice = 12\ntip(p) = p * 0.2\ntip(price)\nnope\n";
    let (rendered, errors) = eval_source(source, &ObjectMap::new(), &EvalConfig::default());
    assert_eq!(
        rendered,
        "1 |\n\
         2 | price = 12\n\
         3 | fn tip(...)\n\
         4 | 2.4000000000000004\n\
         5 | error: nope is not defined\n\
         --\n\
         price = 12\n\
         ans = 2.4000000000000004\n\
         _ = 2.4000000000000004\n"
    );
    assert_eq!(errors, 1);
}

#[test]
fn eval_output_pads_gutter() {
    let source = (1..=10).map(|n| n.to_string()).collect::<Vec<_>>().join("\n");
    let (rendered, errors) = eval_source(&source, &ObjectMap::new(), &EvalConfig::default());
    assert!(rendered.starts_with(" 1 | 1\n 2 | 2\n"));
    assert!(rendered.contains("\n10 | 10\n"));
    assert_eq!(errors, 0);
}

#[test]
fn classify_output_layout() {
    let source = "# header\nrate = 0.2\ntax(x) = x * rate\ntax(100)\nsee you\n";
    assert_eq!(
        classify_source(source),
        "1 | comment | # header\n\
         2 | assignment | rate = 0.2\n\
         3 | function | tax(x) = x * rate\n\
         4 | expression | tax(100)\n\
         5 | text | see you\n"
    );
}
