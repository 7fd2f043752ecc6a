//! Automa Compiler
//!
//! Transform automaton source text into a validated `Automaton`.
//!
//! Responsibilities:
//! - Split the source into its five components
//! - Parse each component into typed values
//! - Cross-validate the components through the model builder
//! - Classify every failure into a reportable category

mod compiler;
mod error;
mod options;

pub use compiler::{compile, Compiler};
pub use error::{CompileError, CompileResult, ErrorCategory};
pub use options::CompileOptions;
