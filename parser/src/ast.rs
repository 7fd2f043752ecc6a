//! Syntax types for automaton definitions.

use crate::lexer::Token;
use automa_core::{Label, Symbol, TransitionKey};
use indexmap::IndexMap;
use std::fmt;

/// Source location for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn new(start: usize, end: usize, line: usize, column: usize) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }
}

/// The five required sections of an automaton body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComponentKind {
    States,
    Alphabet,
    TransitionFunc,
    StartState,
    AcceptStates,
}

impl ComponentKind {
    /// All components, in canonical order.
    pub const ALL: [ComponentKind; 5] = [
        ComponentKind::States,
        ComponentKind::Alphabet,
        ComponentKind::TransitionFunc,
        ComponentKind::StartState,
        ComponentKind::AcceptStates,
    ];

    /// The literal key introducing this component in source text.
    pub fn key(&self) -> &'static str {
        match self {
            ComponentKind::States => "states",
            ComponentKind::Alphabet => "alphabet",
            ComponentKind::TransitionFunc => "transition_func",
            ComponentKind::StartState => "start_state",
            ComponentKind::AcceptStates => "accept_states",
        }
    }

    /// Look up a component by its key (exact match).
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.key() == key)
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One component's value as found in the source.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub kind: ComponentKind,
    /// Value tokens between `=` and `;`.
    pub tokens: Vec<Token>,
    /// The value with all whitespace removed, e.g. `{q0,q1}`.
    pub text: String,
    /// Span of the whole `key = value` entry.
    pub span: Span,
}

impl Component {
    /// The entry as written without whitespace, e.g. `states={q0,q1}`.
    pub fn entry_text(&self) -> String {
        format!("{}={}", self.kind.key(), self.text)
    }
}

/// All five components of an automaton body. Only produced when every one is present.
#[derive(Debug, Clone, PartialEq)]
pub struct Components {
    pub states: Component,
    pub alphabet: Component,
    pub transition_func: Component,
    pub start_state: Component,
    pub accept_states: Component,
}

impl Components {
    pub fn get(&self, kind: ComponentKind) -> &Component {
        match kind {
            ComponentKind::States => &self.states,
            ComponentKind::Alphabet => &self.alphabet,
            ComponentKind::TransitionFunc => &self.transition_func,
            ComponentKind::StartState => &self.start_state,
            ComponentKind::AcceptStates => &self.accept_states,
        }
    }

    /// Iterate over components in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = &Component> {
        ComponentKind::ALL.into_iter().map(move |kind| self.get(kind))
    }
}

/// Result of splitting source text into its header name and components.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitSource {
    pub name: String,
    pub components: Components,
}

/// The five typed component values of one automaton definition.
///
/// Each value has passed its own component parser; nothing here has been
/// cross-checked against the other components yet.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedAutomaton {
    pub name: String,
    pub states: Vec<Label>,
    pub alphabet: Vec<Symbol>,
    pub transitions: IndexMap<TransitionKey, Label>,
    pub start_state: Label,
    pub accept_states: Vec<Label>,
}
