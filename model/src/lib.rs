//! Automa Model
//!
//! The immutable `Automaton` value and the `AutomatonBuilder` that is the
//! only way to construct one. A built automaton has passed every structural
//! check: it is never observable in a partially validated state.

mod automaton;
mod builder;

pub use automaton::{Automaton, Transition};
pub use builder::{AutomatonBuilder, BuildError};
