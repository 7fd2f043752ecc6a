//! Automa Runtime
//!
//! Simulate a compiled `Automaton` against input strings.
//!
//! The runtime is the single owner of mutable simulation state. The
//! automaton itself is shared read-only; renderers read a by-value
//! `Snapshot` rather than holding a reference into the runtime.

mod error;
mod evaluation;
mod runtime;
mod snapshot;

pub use error::{RuntimeError, RuntimeResult};
pub use evaluation::{InputEvaluation, RunOutcome};
pub use runtime::AutomatonRuntime;
pub use snapshot::{Snapshot, SnapshotTransition};
