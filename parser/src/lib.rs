//! Automa Parser
//!
//! This crate provides parsing for automaton definition source text:
//! - Lexing into a typed token stream with source spans
//! - Splitting an `automaton <name> { ... }` block into its five components
//! - Per-component parsing (states, alphabet, transition_func, start_state, accept_states)
//! - Error handling with location information

mod ast;
mod error;
mod lexer;
mod parser;

pub use ast::*;
pub use error::*;
pub use lexer::{join_words, Lexer, Token, TokenKind};
pub use parser::{
    parse_accept_states, parse_alphabet, parse_automaton, parse_start_state, parse_states,
    parse_transitions, split, Parser,
};
