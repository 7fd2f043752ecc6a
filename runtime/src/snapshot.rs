//! By-value view of a runtime for renderers.

use automa_core::{Label, Symbol};
use serde::Serialize;

/// One edge of the transition graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotTransition {
    pub from: Label,
    pub symbol: Symbol,
    pub to: Label,
}

/// Everything a renderer needs to draw the automaton and highlight the
/// active node. Owns its data; it is not updated when the runtime steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub name: String,
    pub states: Vec<Label>,
    pub transitions: Vec<SnapshotTransition>,
    pub accept_states: Vec<Label>,
    pub start_state: Label,
    pub current_state: Label,
}

impl Snapshot {
    /// Returns true if `label` is the highlighted node.
    pub fn is_current(&self, label: &str) -> bool {
        self.current_state == label
    }

    /// Outgoing edges of `label`, in declaration order.
    pub fn edges_from<'a>(&'a self, label: &'a str) -> impl Iterator<Item = &'a SnapshotTransition> {
        self.transitions.iter().filter(move |t| t.from == label)
    }
}
