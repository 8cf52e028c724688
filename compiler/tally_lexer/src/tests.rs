use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn kinds(source: &str) -> Vec<TokenKind> {
    match lex(source) {
        Ok(tokens) => tokens.into_iter().map(|t| t.kind).collect(),
        Err(err) => panic!("lex failed for {source:?}: {err}"),
    }
}

#[test]
fn test_arithmetic_expression() {
    assert_eq!(
        kinds("amount * pct / 100"),
        vec![
            TokenKind::Ident("amount".to_string()),
            TokenKind::Star,
            TokenKind::Ident("pct".to_string()),
            TokenKind::Slash,
            TokenKind::Number(100.0),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_number_forms() {
    assert_eq!(
        kinds("12 3.5 .5 1e3 2.5E-2"),
        vec![
            TokenKind::Number(12.0),
            TokenKind::Number(3.5),
            TokenKind::Number(0.5),
            TokenKind::Number(1000.0),
            TokenKind::Number(0.025),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_operators_longest_match() {
    assert_eq!(
        kinds("=== == = !== != ! ** * <= < >= > && ||"),
        vec![
            TokenKind::EqEqEq,
            TokenKind::EqEq,
            TokenKind::Eq,
            TokenKind::NotEqEq,
            TokenKind::NotEq,
            TokenKind::Bang,
            TokenKind::StarStar,
            TokenKind::Star,
            TokenKind::LtEq,
            TokenKind::Lt,
            TokenKind::GtEq,
            TokenKind::Gt,
            TokenKind::AmpAmp,
            TokenKind::PipePipe,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_keywords_and_dollar_identifiers() {
    assert_eq!(
        kinds("true false null undefined $rate _"),
        vec![
            TokenKind::True,
            TokenKind::False,
            TokenKind::Null,
            TokenKind::Undefined,
            TokenKind::Ident("$rate".to_string()),
            TokenKind::Ident("_".to_string()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_string_escapes_and_unicode() {
    assert_eq!(
        kinds("'it\\'s' \"caf\u{e9}\" \"a\\tb\""),
        vec![
            TokenKind::String("it's".to_string()),
            TokenKind::String("caf\u{e9}".to_string()),
            TokenKind::String("a\tb".to_string()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_spans() {
    let tokens = lex("ab + 1").unwrap_or_default();
    let spans: Vec<_> = tokens.iter().map(|t| (t.span.start, t.span.end)).collect();
    assert_eq!(spans, vec![(0, 2), (3, 4), (5, 6), (6, 6)]);
}

#[test]
fn test_errors() {
    assert_eq!(
        lex("\"open"),
        Err(LexError::UnterminatedString { offset: 0 })
    );
    assert_eq!(
        lex("a @ b"),
        Err(LexError::UnexpectedChar { ch: '@', offset: 2 })
    );
    assert_eq!(
        lex("a & b"),
        Err(LexError::UnexpectedChar { ch: '&', offset: 2 })
    );
}

proptest! {
    #[test]
    fn lex_never_panics_and_ends_with_eof(source in "\\PC{0,40}") {
        if let Ok(tokens) = lex(&source) {
            prop_assert_eq!(tokens.last().map(|t| t.kind.clone()), Some(TokenKind::Eof));
        }
    }
}
