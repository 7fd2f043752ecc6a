//! Compiler error types.

use automa_model::BuildError;
use automa_parser::{ParseError, ParseErrorKind};
use std::fmt;
use thiserror::Error;

/// Errors that can occur during compilation.
#[derive(Debug, Error)]
pub enum CompileError {
    /// Parse error from the parser.
    #[error("{0}")]
    Parse(#[from] ParseError),

    /// Cross-component validation error from the builder.
    #[error("Invalid automaton: {0}")]
    Build(#[from] BuildError),
}

/// The reportable family a compile failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    MissingComponent,
    MalformedComponent,
    DuplicateEntry,
    ReferentialIntegrity,
    IncompleteTransitionFunction,
}

impl ErrorCategory {
    pub fn name(&self) -> &'static str {
        match self {
            ErrorCategory::MissingComponent => "missing component",
            ErrorCategory::MalformedComponent => "malformed component",
            ErrorCategory::DuplicateEntry => "duplicate entry",
            ErrorCategory::ReferentialIntegrity => "referential integrity",
            ErrorCategory::IncompleteTransitionFunction => "incomplete transition function",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "syntax error ({})", self.name())
    }
}

impl CompileError {
    /// Classify this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            CompileError::Parse(err) => match err.kind {
                ParseErrorKind::MissingComponent => ErrorCategory::MissingComponent,
                ParseErrorKind::Malformed => ErrorCategory::MalformedComponent,
                ParseErrorKind::Duplicate => ErrorCategory::DuplicateEntry,
            },
            CompileError::Build(err) => match err {
                BuildError::MissingStartState => ErrorCategory::MissingComponent,
                BuildError::EmptyName => ErrorCategory::MalformedComponent,
                BuildError::DuplicateState(_)
                | BuildError::DuplicateSymbol(_)
                | BuildError::DuplicateAcceptState(_)
                | BuildError::DuplicateTransition(_) => ErrorCategory::DuplicateEntry,
                BuildError::NoStates
                | BuildError::UnknownStartState(_)
                | BuildError::UnknownAcceptState(_)
                | BuildError::UnknownTransitionSource(_)
                | BuildError::UnknownTransitionSymbol(_)
                | BuildError::UnknownTransitionTarget { .. } => ErrorCategory::ReferentialIntegrity,
                BuildError::IncompleteTransitionFunction(_) => {
                    ErrorCategory::IncompleteTransitionFunction
                }
            },
        }
    }
}

/// Result type for compiler operations.
pub type CompileResult<T> = Result<T, CompileError>;
