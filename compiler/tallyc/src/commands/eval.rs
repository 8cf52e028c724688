//! The `eval` command: evaluate a document and print one line per input line.

use tally_eval::{evaluate, evaluate_document_with, Bindings, EvalConfig};
use tally_ir::ObjectMap;
use tally_parse::is_identifier;

use super::read_source_or_exit;
use crate::render::{render_results, render_variables};

/// Environment variable overriding the user-function call depth limit.
pub const MAX_DEPTH_ENV: &str = "TALLY_MAX_CALL_DEPTH";

/// Parsed `tally eval` arguments.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvalOptions {
    pub path: String,
    /// `--var name=expr` pairs in command-line order.
    pub vars: Vec<(String, String)>,
    /// `--max-depth=N`
    pub max_depth: Option<usize>,
}

/// Parse the arguments following `tally eval`.
pub fn parse_eval_args(args: &[String]) -> Result<EvalOptions, String> {
    let mut options = EvalOptions::default();
    let mut path = None;
    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];
        if arg == "--var" {
            let Some(pair) = args.get(i + 1) else {
                return Err("--var needs a `name=expression` argument".to_string());
            };
            options.vars.push(split_var(pair)?);
            i += 2;
            continue;
        }
        if let Some(pair) = arg.strip_prefix("--var=") {
            options.vars.push(split_var(pair)?);
        } else if let Some(depth) = arg.strip_prefix("--max-depth=") {
            options.max_depth = Some(parse_depth(depth)?);
        } else if arg == "-" || !arg.starts_with('-') {
            if path.is_some() {
                return Err(format!("unexpected argument '{arg}'"));
            }
            path = Some(arg.clone());
        } else {
            return Err(format!("unknown option '{arg}'"));
        }
        i += 1;
    }
    options.path = path.ok_or_else(|| "missing file path".to_string())?;
    Ok(options)
}

fn split_var(pair: &str) -> Result<(String, String), String> {
    let Some((name, expr)) = pair.split_once('=') else {
        return Err(format!("invalid --var '{pair}': expected name=expression"));
    };
    let name = name.trim();
    if !is_identifier(name) {
        return Err(format!("invalid --var name '{name}'"));
    }
    Ok((name.to_string(), expr.trim().to_string()))
}

fn parse_depth(text: &str) -> Result<usize, String> {
    match text.trim().parse::<usize>() {
        Ok(depth) if depth > 0 => Ok(depth),
        _ => Err(format!("invalid call depth '{text}': expected a positive integer")),
    }
}

/// Evaluate each `--var` expression against the math library only.
pub fn build_externals(vars: &[(String, String)]) -> Result<ObjectMap, String> {
    let math = Bindings::math();
    let mut externals = ObjectMap::new();
    for (name, expr) in vars {
        let value = evaluate(expr, &math).map_err(|e| format!("--var {name}: {e}"))?;
        externals.insert(name.clone(), value);
    }
    Ok(externals)
}

/// Effective settings: the `--max-depth` flag wins over the environment
/// value, which wins over the default.
pub fn resolve_config(flag: Option<usize>, env: Option<&str>) -> Result<EvalConfig, String> {
    let config = EvalConfig::default();
    if let Some(depth) = flag {
        return Ok(config.with_max_call_depth(depth));
    }
    match env {
        Some(text) => parse_depth(text)
            .map(|depth| config.with_max_call_depth(depth))
            .map_err(|e| format!("{MAX_DEPTH_ENV}: {e}")),
        None => Ok(config),
    }
}

/// Evaluate `source` and render results followed by the final scope.
///
/// Returns the rendered text and the number of failed lines.
pub fn eval_source(source: &str, externals: &ObjectMap, config: &EvalConfig) -> (String, usize) {
    let external = if externals.is_empty() {
        None
    } else {
        Some(externals)
    };
    let output = evaluate_document_with(source, external, config);
    let mut rendered = render_results(&output);
    if !output.variables.is_empty() {
        rendered.push_str("--\n");
        rendered.push_str(&render_variables(&output.variables));
    }
    (rendered, output.error_count())
}

/// Run `tally eval`. Exits with status 1 on usage errors, unreadable input,
/// or when any line failed.
pub fn eval_file(args: &[String]) {
    let options = match parse_eval_args(args) {
        Ok(options) => options,
        Err(msg) => {
            eprintln!("error: {msg}");
            eprintln!("Usage: tally eval <file|-> [--var name=expr]... [--max-depth=N]");
            std::process::exit(1);
        }
    };

    let env_depth = std::env::var(MAX_DEPTH_ENV).ok();
    let config = resolve_config(options.max_depth, env_depth.as_deref()).unwrap_or_else(|msg| {
        eprintln!("error: {msg}");
        std::process::exit(1);
    });
    let externals = build_externals(&options.vars).unwrap_or_else(|msg| {
        eprintln!("error: {msg}");
        std::process::exit(1);
    });

    tracing::debug!(
        path = %options.path,
        max_call_depth = config.max_call_depth,
        externals = externals.len(),
        "evaluating document"
    );
    let source = read_source_or_exit(&options.path);
    let (rendered, errors) = eval_source(&source, &externals, &config);
    print!("{rendered}");
    if errors > 0 {
        std::process::exit(1);
    }
}
