//! Error types for the scenario framework.

use automa_compiler::ErrorCategory;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for scenario operations.
pub type ScenarioResult<T> = Result<T, ScenarioError>;

/// Errors that can occur when running scenarios.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// Failed to read a file.
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to parse an inputs file.
    #[error("failed to parse inputs file '{path}': {message}")]
    InputsParse { path: PathBuf, message: String },

    /// Failed to compile the automaton.
    #[error("failed to compile automaton '{path}': {message}")]
    AutomatonCompile { path: PathBuf, message: String },

    /// The automaton compiled although a failure was expected.
    #[error("automaton '{path}' compiled, expected {expected}")]
    UnexpectedCompile {
        path: PathBuf,
        expected: ErrorCategory,
    },

    /// The automaton failed to compile with the wrong category.
    #[error("automaton '{path}' failed with {actual}, expected {expected}: {message}")]
    WrongCompileError {
        path: PathBuf,
        expected: ErrorCategory,
        actual: ErrorCategory,
        message: String,
    },

    /// Assertion failed.
    #[error("assertion failed for step '{step}': {message}")]
    AssertionFailed { step: String, message: String },

    /// Step not found in inputs file.
    #[error("step '{step}' not found in inputs file")]
    StepNotFound { step: String },

    /// Missing automaton.
    #[error("automaton not specified for scenario '{scenario}'")]
    MissingAutomaton { scenario: String },

    /// Missing inputs file.
    #[error("inputs not specified for scenario '{scenario}'")]
    MissingInputs { scenario: String },
}

impl ScenarioError {
    pub fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    pub fn inputs_parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::InputsParse {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn automaton_compile(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::AutomatonCompile {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn assertion_failed(step: impl Into<String>, message: impl Into<String>) -> Self {
        Self::AssertionFailed {
            step: step.into(),
            message: message.into(),
        }
    }

    pub fn step_not_found(step: impl Into<String>) -> Self {
        Self::StepNotFound { step: step.into() }
    }

    pub fn missing_automaton(scenario: impl Into<String>) -> Self {
        Self::MissingAutomaton {
            scenario: scenario.into(),
        }
    }

    pub fn missing_inputs(scenario: impl Into<String>) -> Self {
        Self::MissingInputs {
            scenario: scenario.into(),
        }
    }
}
