//! Result types for input checks and full runs.

use automa_core::Label;
use serde::Serialize;

/// Whether every character of an input string belongs to the alphabet.
///
/// This is a syntactic pre-check only. It never steps the automaton and
/// says nothing about acceptance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputEvaluation {
    /// The evaluated input.
    pub input: String,
    /// True if every character is in the alphabet.
    pub valid: bool,
    /// Char index of the first character outside the alphabet.
    pub invalid_position: Option<usize>,
    /// The first character outside the alphabet.
    pub invalid_symbol: Option<char>,
}

impl InputEvaluation {
    pub(crate) fn passed(input: &str) -> Self {
        Self {
            input: input.to_string(),
            valid: true,
            invalid_position: None,
            invalid_symbol: None,
        }
    }

    pub(crate) fn failed(input: &str, position: usize, symbol: char) -> Self {
        Self {
            input: input.to_string(),
            valid: false,
            invalid_position: Some(position),
            invalid_symbol: Some(symbol),
        }
    }
}

/// Result of running an automaton over a whole input string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunOutcome {
    /// True if the run ended in an accept state.
    pub accepted: bool,
    /// The state the run ended in.
    pub final_state: Label,
    /// Every visited state, starting with the start state.
    pub path: Vec<Label>,
}

impl RunOutcome {
    /// Number of symbols consumed.
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}
