//! The `classify` command: show how each line of a document is read.

use tally_eval::split_lines;
use tally_parse::classify_line;

use super::read_source_or_exit;
use crate::render::{gutter_width, render_classification};

/// Render the classification of every line of `source`.
pub fn classify_source(source: &str) -> String {
    let lines: Vec<&str> = split_lines(source).collect();
    let width = gutter_width(lines.len());
    let mut out = String::new();
    for (index, line) in lines.iter().enumerate() {
        out.push_str(&render_classification(index + 1, &classify_line(line), width));
        out.push('\n');
    }
    out
}

pub fn classify_file(path: &str) {
    let source = read_source_or_exit(path);
    print!("{}", classify_source(&source));
}
