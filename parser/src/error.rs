//! Parser error types.

use crate::{ComponentKind, Span};
use std::fmt;

/// What went wrong while parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// One or more required components are absent.
    MissingComponent,
    /// Unbalanced delimiters or an entry with the wrong token shape.
    Malformed,
    /// A label, symbol, transition key or component appears twice.
    Duplicate,
}

/// A parse error with location information.
#[derive(Debug, Clone)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub message: String,
    pub span: Span,
    /// The component being parsed when the error occurred, if any.
    pub component: Option<ComponentKind>,
    pub expected: Option<Vec<String>>,
    pub found: Option<String>,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, message: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            message: message.into(),
            span,
            component: None,
            expected: None,
            found: None,
        }
    }

    pub fn malformed(message: impl Into<String>, span: Span) -> Self {
        Self::new(ParseErrorKind::Malformed, message, span)
    }

    pub fn duplicate(what: &str, name: impl Into<String>, span: Span) -> Self {
        let name = name.into();
        Self {
            kind: ParseErrorKind::Duplicate,
            message: format!("duplicate {} '{}'", what, name),
            span,
            component: None,
            expected: None,
            found: Some(name),
        }
    }

    pub fn missing_components(missing: &[ComponentKind], span: Span) -> Self {
        let names: Vec<String> = missing.iter().map(|k| k.key().to_string()).collect();
        Self {
            kind: ParseErrorKind::MissingComponent,
            message: format!("missing component(s): {}", names.join(", ")),
            span,
            component: None,
            expected: Some(names),
            found: None,
        }
    }

    pub fn with_component(mut self, component: ComponentKind) -> Self {
        self.component = Some(component);
        self
    }

    pub fn with_expected(mut self, expected: Vec<String>) -> Self {
        self.expected = Some(expected);
        self
    }

    pub fn with_found(mut self, found: impl Into<String>) -> Self {
        self.found = Some(found.into());
        self
    }

    pub fn unexpected_eof(span: Span, expected: &str) -> Self {
        Self {
            kind: ParseErrorKind::Malformed,
            message: format!("unexpected end of input, expected {}", expected),
            span,
            component: None,
            expected: Some(vec![expected.to_string()]),
            found: Some("end of input".to_string()),
        }
    }

    pub fn unexpected_token(span: Span, expected: &str, found: &str) -> Self {
        Self {
            kind: ParseErrorKind::Malformed,
            message: format!("expected {}, found {}", expected, found),
            span,
            component: None,
            expected: Some(vec![expected.to_string()]),
            found: Some(found.to_string()),
        }
    }

    pub fn line(&self) -> usize {
        self.span.line
    }

    pub fn column(&self) -> usize {
        self.span.column
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.component {
            Some(component) => write!(
                f,
                "Parse error in '{}' at line {}, column {}: {}",
                component.key(),
                self.span.line,
                self.span.column,
                self.message
            ),
            None => write!(
                f,
                "Parse error at line {}, column {}: {}",
                self.span.line, self.span.column, self.message
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;
