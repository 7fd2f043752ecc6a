//! Compile configuration.

/// Options controlling how strictly an automaton is validated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompileOptions {
    /// Reject automata whose transition function does not cover every
    /// `(state, symbol)` pair.
    pub require_total_transitions: bool,
}

impl CompileOptions {
    /// Default options: partial transition functions are accepted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Strict options: the transition function must be total.
    pub fn strict() -> Self {
        Self::new().with_total_transitions(true)
    }

    pub fn with_total_transitions(mut self, require: bool) -> Self {
        self.require_total_transitions = require;
        self
    }
}
