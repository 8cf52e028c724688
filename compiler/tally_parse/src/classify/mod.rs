//! Line classification.
//!
//! Decides, from the shape of the text alone, what a document line is.
//! Rules are tried in a fixed priority order and the first match wins:
//!
//! 1. empty (after trimming) → `Text`
//! 2. starts with `#` or `//` → `Comment`
//! 3. `name(p1, p2) = body` → `FunctionDefinition`
//! 4. `dot.path = expression` → `Expression` with a target
//! 5. looks like an expression → `Expression`
//! 6. anything else → `Text`
//!
//! The "looks like an expression" test is a deliberately coarse heuristic;
//! which prose lines it catches is user-visible, so the rule set is fixed.

use tally_ir::{ClassifiedLine, LineKind};

/// Operator characters whose presence anywhere marks a line as code.
const ARITHMETIC_CHARS: &[u8] = b"+-*/%^";
const COMPARISON_CHARS: &[u8] = b"<>";

/// Characters that must not sit directly before an assignment `=`.
const COMPOUND_PREFIXES: &[u8] = b"!<>=";

#[inline]
fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b == b'$'
}

#[inline]
fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$'
}

/// End offset of the identifier starting at `start`, if one starts there.
fn scan_identifier(bytes: &[u8], start: usize) -> Option<usize> {
    if !bytes.get(start).copied().is_some_and(is_ident_start) {
        return None;
    }
    let mut end = start + 1;
    while bytes.get(end).copied().is_some_and(is_ident_continue) {
        end += 1;
    }
    Some(end)
}

/// End offset of the dot-path (`a`, `a.b`, `a.b.c`) starting at `start`.
///
/// A trailing `.` that is not followed by an identifier is not consumed.
fn scan_dot_path(bytes: &[u8], start: usize) -> Option<usize> {
    let mut end = scan_identifier(bytes, start)?;
    while bytes.get(end) == Some(&b'.') {
        match scan_identifier(bytes, end + 1) {
            Some(next) => end = next,
            None => break,
        }
    }
    Some(end)
}

fn skip_whitespace(bytes: &[u8], mut pos: usize) -> usize {
    while bytes.get(pos).is_some_and(u8::is_ascii_whitespace) {
        pos += 1;
    }
    pos
}

/// Whether `text` is exactly one identifier.
pub fn is_identifier(text: &str) -> bool {
    scan_identifier(text.as_bytes(), 0) == Some(text.len())
}

/// Whether `text` is exactly a dot-path of identifiers (`a`, `a.b.c`).
pub fn is_dot_path(text: &str) -> bool {
    scan_dot_path(text.as_bytes(), 0) == Some(text.len())
}

/// Classify one document line. Never fails.
pub fn classify_line(line: &str) -> ClassifiedLine {
    let kind = classify_trimmed(line.trim());
    tracing::trace!(kind = kind.tag(), line, "classified line");
    ClassifiedLine::new(line, kind)
}

fn classify_trimmed(text: &str) -> LineKind {
    if text.is_empty() {
        return LineKind::Text;
    }
    if text.starts_with('#') || text.starts_with("//") {
        return LineKind::Comment;
    }
    if let Some(definition) = match_function_definition(text) {
        return definition;
    }
    if let Some(assignment) = match_assignment(text) {
        return assignment;
    }
    if looks_like_expression(text) {
        return LineKind::Expression {
            target_path: None,
            expression_text: text.to_string(),
        };
    }
    LineKind::Text
}

/// Whether the `=` at `eq` is a plain assignment and not part of `==`, `!=`,
/// `<=`, `>=` or `===`.
fn is_assignment_eq(bytes: &[u8], eq: usize) -> bool {
    if bytes.get(eq) != Some(&b'=') || bytes.get(eq + 1) == Some(&b'=') {
        return false;
    }
    let before = eq.checked_sub(1).and_then(|i| bytes.get(i));
    !before.is_some_and(|b| COMPOUND_PREFIXES.contains(b))
}

/// Non-empty text after the `=` at `eq`, with leading whitespace skipped.
fn right_hand_side(text: &str, eq: usize) -> Option<&str> {
    let rest = text.get(eq + 1..)?.trim_start();
    (!rest.is_empty()).then_some(rest)
}

/// `name(p1, p2, ...) = body`
fn match_function_definition(text: &str) -> Option<LineKind> {
    let bytes = text.as_bytes();
    let name_end = scan_identifier(bytes, 0)?;
    if bytes.get(name_end) != Some(&b'(') {
        return None;
    }
    let params_start = name_end + 1;
    let params_end = params_start + text.get(params_start..)?.find(')')?;
    let parameter_names = parse_parameter_list(text.get(params_start..params_end)?)?;

    let eq = skip_whitespace(bytes, params_end + 1);
    if !is_assignment_eq(bytes, eq) {
        return None;
    }
    let body_text = right_hand_side(text, eq)?;

    Some(LineKind::FunctionDefinition {
        function_name: text[..name_end].to_string(),
        parameter_names,
        body_text: body_text.to_string(),
    })
}

/// Comma-separated identifiers; empty entries are dropped, anything else
/// that is not an identifier rejects the whole list.
fn parse_parameter_list(list: &str) -> Option<Vec<String>> {
    list.split(',')
        .map(str::trim)
        .filter(|param| !param.is_empty())
        .map(|param| is_identifier(param).then(|| param.to_string()))
        .collect()
}

/// `dot.path = expression`
fn match_assignment(text: &str) -> Option<LineKind> {
    let bytes = text.as_bytes();
    let path_end = scan_dot_path(bytes, 0)?;
    let eq = skip_whitespace(bytes, path_end);
    if !is_assignment_eq(bytes, eq) {
        return None;
    }
    let expression_text = right_hand_side(text, eq)?.trim_end();
    Some(LineKind::Expression {
        target_path: Some(text[..path_end].to_string()),
        expression_text: expression_text.to_string(),
    })
}

/// The fixed "is this code?" heuristic for lines that are neither
/// definitions nor assignments.
fn looks_like_expression(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.iter().any(|b| ARITHMETIC_CHARS.contains(b))
        || bytes.iter().any(|b| COMPARISON_CHARS.contains(b))
        || bytes.contains(&b'=')
        || has_call_shape(bytes)
        || is_numeric_literal(text)
        || is_dot_path(text)
}

/// An identifier immediately followed by `(`.
fn has_call_shape(bytes: &[u8]) -> bool {
    bytes.iter().enumerate().any(|(i, &b)| {
        b == b'('
            && bytes[..i]
                .iter()
                .rev()
                .take_while(|&&c| is_ident_continue(c))
                .any(|&c| is_ident_start(c))
    })
}

/// `-?digits(.digits)?`
fn is_numeric_literal(text: &str) -> bool {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    all_digits(int_part) && frac_part.map_or(true, all_digits)
}
