//! Automa Core Types
//!
//! This crate provides the vocabulary shared by every stage of the pipeline:
//! - State labels (`Label`)
//! - Alphabet symbols (`Symbol`)
//! - Transition keys (`TransitionKey`), the `(state, symbol)` pair a transition is indexed by

mod label;

pub use label::*;
