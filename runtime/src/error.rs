//! Runtime error types.

use automa_core::{Label, Symbol};
use thiserror::Error;

/// Runtime failures. None of them corrupt the runtime: after an error the
/// current state is whatever it was before the failing operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// No transition is defined for the current state and symbol.
    #[error("no transition defined from state '{state}' on symbol '{symbol}'")]
    UndefinedTransition { state: Label, symbol: Symbol },

    /// An input character is outside the alphabet.
    #[error("input symbol '{symbol}' at position {position} is not in the alphabet")]
    InvalidInputSymbol { symbol: char, position: usize },
}

/// Result type for runtime operations.
pub type RuntimeResult<T> = Result<T, RuntimeError>;
