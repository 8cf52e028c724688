//! Classified document lines.

/// A document line tagged with what the classifier decided it is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassifiedLine {
    /// The line exactly as it appeared in the document.
    pub raw_text: String,
    pub kind: LineKind,
}

/// The classification of one line. Exactly one tag applies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineKind {
    /// Free prose, or an empty line.
    Text,
    /// Starts with `#` or `//`.
    Comment,
    /// Code to evaluate, optionally assigning the result to a dot-path.
    Expression {
        target_path: Option<String>,
        expression_text: String,
    },
    /// `name(params) = body`
    FunctionDefinition {
        function_name: String,
        parameter_names: Vec<String>,
        body_text: String,
    },
}

impl ClassifiedLine {
    pub fn new(raw_text: impl Into<String>, kind: LineKind) -> Self {
        ClassifiedLine {
            raw_text: raw_text.into(),
            kind,
        }
    }

    /// Whether the line will be handed to the evaluator.
    pub fn is_code(&self) -> bool {
        matches!(
            self.kind,
            LineKind::Expression { .. } | LineKind::FunctionDefinition { .. }
        )
    }
}

impl LineKind {
    /// Short lowercase tag, used by the CLI and in trace output.
    pub fn tag(&self) -> &'static str {
        match self {
            LineKind::Text => "text",
            LineKind::Comment => "comment",
            LineKind::Expression {
                target_path: Some(_),
                ..
            } => "assignment",
            LineKind::Expression { .. } => "expression",
            LineKind::FunctionDefinition { .. } => "function",
        }
    }
}
