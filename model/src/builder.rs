//! AutomatonBuilder for constructing an immutable Automaton.

use crate::Automaton;
use automa_core::{Label, Symbol, TransitionKey};
use indexmap::{IndexMap, IndexSet};
use thiserror::Error;

/// Errors that can occur during automaton construction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("Automaton name must not be empty")]
    EmptyName,

    #[error("Duplicate state: {0}")]
    DuplicateState(Label),

    #[error("Duplicate symbol: {0}")]
    DuplicateSymbol(Symbol),

    #[error("Duplicate accept state: {0}")]
    DuplicateAcceptState(Label),

    #[error("Duplicate transition key: {0}")]
    DuplicateTransition(TransitionKey),

    #[error("Automaton declares no states")]
    NoStates,

    #[error("No start state declared")]
    MissingStartState,

    #[error("Start state '{0}' is not a declared state")]
    UnknownStartState(Label),

    #[error("Accept state '{0}' is not a declared state")]
    UnknownAcceptState(Label),

    #[error("Transition {0} starts from an undeclared state")]
    UnknownTransitionSource(TransitionKey),

    #[error("Transition {0} reads a symbol outside the alphabet")]
    UnknownTransitionSymbol(TransitionKey),

    #[error("Transition {key} targets undeclared state '{target}'")]
    UnknownTransitionTarget { key: TransitionKey, target: Label },

    #[error("No transition defined for {0}")]
    IncompleteTransitionFunction(TransitionKey),
}

/// Builder for constructing an immutable Automaton.
///
/// Duplicates are rejected as they are added. Cross references between the
/// components are only checked in [`AutomatonBuilder::build`], so components
/// may be added in any order.
#[derive(Debug, Default)]
pub struct AutomatonBuilder {
    name: String,
    states: IndexSet<Label>,
    alphabet: IndexSet<Symbol>,
    transitions: IndexMap<TransitionKey, Label>,
    start_state: Option<Label>,
    accept_states: IndexSet<Label>,
    /// Reject automata whose transition function is partial.
    require_total: bool,
}

impl AutomatonBuilder {
    /// Create a new builder for the automaton `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Add a state.
    pub fn add_state(&mut self, label: impl Into<Label>) -> Result<(), BuildError> {
        let label = label.into();
        if self.states.contains(&label) {
            return Err(BuildError::DuplicateState(label));
        }
        self.states.insert(label);
        Ok(())
    }

    /// Add an input symbol to the alphabet.
    pub fn add_symbol(&mut self, symbol: impl Into<Symbol>) -> Result<(), BuildError> {
        let symbol = symbol.into();
        if !self.alphabet.insert(symbol) {
            return Err(BuildError::DuplicateSymbol(symbol));
        }
        Ok(())
    }

    /// Add the transition `from --symbol--> to`.
    pub fn add_transition(
        &mut self,
        from: impl Into<Label>,
        symbol: impl Into<Symbol>,
        to: impl Into<Label>,
    ) -> Result<(), BuildError> {
        let key = TransitionKey::new(from, symbol);
        if self.transitions.contains_key(&key) {
            return Err(BuildError::DuplicateTransition(key));
        }
        self.transitions.insert(key, to.into());
        Ok(())
    }

    /// Set the start state. A later call replaces an earlier one.
    pub fn start_state(&mut self, label: impl Into<Label>) {
        self.start_state = Some(label.into());
    }

    /// Mark a state as accepting.
    pub fn add_accept_state(&mut self, label: impl Into<Label>) -> Result<(), BuildError> {
        let label = label.into();
        if self.accept_states.contains(&label) {
            return Err(BuildError::DuplicateAcceptState(label));
        }
        self.accept_states.insert(label);
        Ok(())
    }

    /// Require every `(state, symbol)` pair to have a transition.
    pub fn require_total(&mut self, require: bool) {
        self.require_total = require;
    }

    /// Validate and build the immutable Automaton.
    pub fn build(self) -> Result<Automaton, BuildError> {
        if self.name.is_empty() {
            return Err(BuildError::EmptyName);
        }
        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        let start_state = self.start_state.ok_or(BuildError::MissingStartState)?;
        if !self.states.contains(&start_state) {
            return Err(BuildError::UnknownStartState(start_state));
        }

        if let Some(label) = self
            .accept_states
            .iter()
            .find(|label| !self.states.contains(*label))
        {
            return Err(BuildError::UnknownAcceptState(label.clone()));
        }

        for (key, target) in &self.transitions {
            if !self.states.contains(&key.state) {
                return Err(BuildError::UnknownTransitionSource(key.clone()));
            }
            if !self.alphabet.contains(&key.symbol) {
                return Err(BuildError::UnknownTransitionSymbol(key.clone()));
            }
            if !self.states.contains(target) {
                return Err(BuildError::UnknownTransitionTarget {
                    key: key.clone(),
                    target: target.clone(),
                });
            }
        }

        if self.require_total {
            for state in &self.states {
                for symbol in &self.alphabet {
                    let key = TransitionKey::new(state.clone(), *symbol);
                    if !self.transitions.contains_key(&key) {
                        return Err(BuildError::IncompleteTransitionFunction(key));
                    }
                }
            }
        }

        Ok(Automaton::new(
            self.name,
            self.states,
            self.alphabet,
            self.transitions,
            start_state,
            self.accept_states,
        ))
    }
}
