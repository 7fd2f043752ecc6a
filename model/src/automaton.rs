//! The immutable automaton.

use automa_core::{Label, Symbol, TransitionKey};
use indexmap::{IndexMap, IndexSet};
use serde::{Serialize, Serializer};

/// A validated deterministic finite automaton.
///
/// States, symbols and transitions keep declaration order. There are no
/// mutators; renderers and runtimes only ever read it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Automaton {
    name: String,
    states: IndexSet<Label>,
    alphabet: IndexSet<Symbol>,
    #[serde(serialize_with = "serialize_transitions")]
    transitions: IndexMap<TransitionKey, Label>,
    start_state: Label,
    accept_states: IndexSet<Label>,
}

/// A borrowed view of one transition, `from --symbol--> to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Transition<'a> {
    pub from: &'a Label,
    pub symbol: Symbol,
    pub to: &'a Label,
}

fn serialize_transitions<S: Serializer>(
    transitions: &IndexMap<TransitionKey, Label>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(transitions.iter().map(|(key, to)| Transition {
        from: &key.state,
        symbol: key.symbol,
        to,
    }))
}

impl Automaton {
    /// Only the builder constructs automata, after validation.
    pub(crate) fn new(
        name: String,
        states: IndexSet<Label>,
        alphabet: IndexSet<Symbol>,
        transitions: IndexMap<TransitionKey, Label>,
        start_state: Label,
        accept_states: IndexSet<Label>,
    ) -> Self {
        Self {
            name,
            states,
            alphabet,
            transitions,
            start_state,
            accept_states,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// States in declaration order.
    pub fn states(&self) -> &IndexSet<Label> {
        &self.states
    }

    /// Symbols in declaration order.
    pub fn alphabet(&self) -> &IndexSet<Symbol> {
        &self.alphabet
    }

    /// The transition function, in declaration order.
    pub fn transitions(&self) -> &IndexMap<TransitionKey, Label> {
        &self.transitions
    }

    /// Iterate over transitions as `from --symbol--> to` views.
    pub fn transition_list(&self) -> impl Iterator<Item = Transition<'_>> {
        self.transitions.iter().map(|(key, to)| Transition {
            from: &key.state,
            symbol: key.symbol,
            to,
        })
    }

    /// Look up the target of `(state, symbol)`, if the transition is defined.
    pub fn transition(&self, state: &Label, symbol: Symbol) -> Option<&Label> {
        self.transitions
            .get(&TransitionKey::new(state.clone(), symbol))
    }

    pub fn start_state(&self) -> &Label {
        &self.start_state
    }

    pub fn accept_states(&self) -> &IndexSet<Label> {
        &self.accept_states
    }

    pub fn is_state(&self, label: &str) -> bool {
        self.states.contains(label)
    }

    pub fn has_symbol(&self, symbol: Symbol) -> bool {
        self.alphabet.contains(&symbol)
    }

    pub fn is_accepting_state(&self, label: &str) -> bool {
        self.accept_states.contains(label)
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn symbol_count(&self) -> usize {
        self.alphabet.len()
    }

    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }

    /// Returns true if every `(state, symbol)` pair has a transition.
    pub fn is_total(&self) -> bool {
        self.transitions.len() == self.states.len() * self.alphabet.len()
    }
}
