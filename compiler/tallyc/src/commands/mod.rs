//! CLI command implementations for the `tally` binary.

mod classify;
mod eval;

pub use classify::{classify_file, classify_source};
pub use eval::{
    build_externals, eval_file, eval_source, parse_eval_args, resolve_config, EvalOptions,
    MAX_DEPTH_ENV,
};

/// Read a document from `path`, or from stdin when `path` is `-`.
pub fn read_source(path: &str) -> Result<String, String> {
    if path == "-" {
        let mut content = String::new();
        return match std::io::Read::read_to_string(&mut std::io::stdin(), &mut content) {
            Ok(_) => Ok(content),
            Err(e) => Err(format!("error reading stdin: {e}")),
        };
    }
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        std::io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        std::io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {e}"),
    })
}

/// Read a document or exit with the error on stderr.
pub(crate) fn read_source_or_exit(path: &str) -> String {
    match read_source(path) {
        Ok(content) => content,
        Err(msg) => {
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}
