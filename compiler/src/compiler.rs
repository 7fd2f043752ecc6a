//! Main compiler implementation.

use crate::{CompileError, CompileOptions, CompileResult};
use automa_model::{Automaton, AutomatonBuilder};
use automa_parser::{parse_automaton, ParsedAutomaton};
use tracing::debug;

/// The Compiler transforms automaton source into a validated Automaton.
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    options: CompileOptions,
}

impl Compiler {
    /// Create a compiler with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a compiler with the given options.
    pub fn with_options(options: CompileOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    /// Compile automaton source into an Automaton.
    pub fn compile(&self, source: &str) -> CompileResult<Automaton> {
        debug!(
            bytes = source.len(),
            require_total = self.options.require_total_transitions,
            "Compiling automaton"
        );

        let result = parse_automaton(source)
            .map_err(CompileError::from)
            .and_then(|parsed| self.build(parsed));

        match &result {
            Ok(automaton) => debug!(
                name = automaton.name(),
                states = automaton.state_count(),
                symbols = automaton.symbol_count(),
                transitions = automaton.transition_count(),
                "Automaton compiled"
            ),
            Err(err) => debug!(category = err.category().name(), error = %err, "Automaton rejected"),
        }
        result
    }

    /// Feed the parsed components into the model builder.
    fn build(&self, parsed: ParsedAutomaton) -> CompileResult<Automaton> {
        let mut builder = AutomatonBuilder::new(parsed.name);
        for state in parsed.states {
            builder.add_state(state)?;
        }
        for symbol in parsed.alphabet {
            builder.add_symbol(symbol)?;
        }
        for (key, target) in parsed.transitions {
            builder.add_transition(key.state, key.symbol, target)?;
        }
        builder.start_state(parsed.start_state);
        for state in parsed.accept_states {
            builder.add_accept_state(state)?;
        }
        builder.require_total(self.options.require_total_transitions);

        Ok(builder.build()?)
    }
}

/// Compile automaton source with default options.
pub fn compile(source: &str) -> CompileResult<Automaton> {
    Compiler::new().compile(source)
}
