//! The automaton runtime.

use crate::{InputEvaluation, RunOutcome, RuntimeError, RuntimeResult, Snapshot, SnapshotTransition};
use automa_core::{Label, Symbol};
use automa_model::Automaton;
use std::sync::Arc;
use tracing::{debug, trace};

/// A compiled automaton plus its live current state.
///
/// Created once per compiled automaton and reused across input strings.
/// Compiling a new automaton means creating a new runtime, never mutating
/// this one into a different machine.
#[derive(Debug, Clone)]
pub struct AutomatonRuntime {
    /// The automaton (shared, read-only).
    automaton: Arc<Automaton>,
    /// Always a member of the automaton's states.
    current_state: Label,
}

impl AutomatonRuntime {
    /// Create a runtime positioned at the start state.
    pub fn new(automaton: Arc<Automaton>) -> Self {
        let current_state = automaton.start_state().clone();
        Self {
            automaton,
            current_state,
        }
    }

    /// Get the automaton.
    pub fn automaton(&self) -> &Arc<Automaton> {
        &self.automaton
    }

    pub fn current_state(&self) -> &Label {
        &self.current_state
    }

    /// Move back to the start state.
    pub fn reset(&mut self) {
        self.current_state = self.automaton.start_state().clone();
    }

    pub fn is_accepting(&self) -> bool {
        self.automaton.is_accepting_state(self.current_state.as_str())
    }

    pub fn symbol_in_alphabet(&self, symbol: impl Into<Symbol>) -> bool {
        self.automaton.has_symbol(symbol.into())
    }

    /// Follow the transition for `symbol` from the current state.
    ///
    /// On a miss the current state is left unchanged.
    pub fn step(&mut self, symbol: impl Into<Symbol>) -> RuntimeResult<&Label> {
        let symbol = symbol.into();
        match self.automaton.transition(&self.current_state, symbol) {
            Some(target) => {
                trace!(from = %self.current_state, %symbol, to = %target, "step");
                self.current_state = target.clone();
                Ok(&self.current_state)
            }
            None => {
                debug!(state = %self.current_state, %symbol, "Undefined transition");
                Err(RuntimeError::UndefinedTransition {
                    state: self.current_state.clone(),
                    symbol,
                })
            }
        }
    }

    /// Returns true if every character of `input` is in the alphabet.
    pub fn char_in_alphabet(&self, input: &str) -> bool {
        input.chars().all(|c| self.symbol_in_alphabet(c))
    }

    /// Check every character of `input` against the alphabet, reporting the
    /// first one that is not in it.
    pub fn check_input(&self, input: &str) -> RuntimeResult<()> {
        match self.first_invalid(input) {
            Some((position, symbol)) => {
                debug!(input, position, %symbol, "Input rejected");
                Err(RuntimeError::InvalidInputSymbol { symbol, position })
            }
            None => Ok(()),
        }
    }

    pub fn evaluate_input(&self, input: &str) -> InputEvaluation {
        match self.first_invalid(input) {
            Some((position, symbol)) => InputEvaluation::failed(input, position, symbol),
            None => InputEvaluation::passed(input),
        }
    }

    fn first_invalid(&self, input: &str) -> Option<(usize, char)> {
        input
            .chars()
            .enumerate()
            .find(|(_, c)| !self.symbol_in_alphabet(*c))
    }

    /// Run the whole input from the start state.
    ///
    /// The input is checked against the alphabet before any step is taken.
    /// If a transition is undefined the error is returned and the runtime
    /// stays in the last state it reached.
    pub fn run(&mut self, input: &str) -> RuntimeResult<RunOutcome> {
        self.reset();
        self.check_input(input)?;

        let mut path = Vec::with_capacity(input.chars().count() + 1);
        path.push(self.current_state.clone());
        for c in input.chars() {
            let next = self.step(c)?;
            path.push(next.clone());
        }

        let accepted = self.is_accepting();
        debug!(input, final_state = %self.current_state, accepted, "Run finished");
        Ok(RunOutcome {
            accepted,
            final_state: self.current_state.clone(),
            path,
        })
    }

    /// Copy out everything a renderer needs.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            name: self.automaton.name().to_string(),
            states: self.automaton.states().iter().cloned().collect(),
            transitions: self
                .automaton
                .transition_list()
                .map(|t| SnapshotTransition {
                    from: t.from.clone(),
                    symbol: t.symbol,
                    to: t.to.clone(),
                })
                .collect(),
            accept_states: self.automaton.accept_states().iter().cloned().collect(),
            start_state: self.automaton.start_state().clone(),
            current_state: self.current_state.clone(),
        }
    }
}

impl From<Automaton> for AutomatonRuntime {
    fn from(automaton: Automaton) -> Self {
        Self::new(Arc::new(automaton))
    }
}

impl From<Arc<Automaton>> for AutomatonRuntime {
    fn from(automaton: Arc<Automaton>) -> Self {
        Self::new(automaton)
    }
}
