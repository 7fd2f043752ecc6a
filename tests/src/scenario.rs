//! Scenario definition and builder.

use std::path::{Path, PathBuf};

use automa_compiler::{CompileOptions, ErrorCategory};

use crate::assertion::{Assertion, AssertionBuilder};
use crate::error::{ScenarioError, ScenarioResult};
use crate::loader::Inputs;
use crate::runner::Runner;

/// A step in a scenario with its assertion.
#[derive(Debug)]
pub struct Step {
    /// Step name (matches `--# name` in the inputs file).
    pub name: String,
    /// Assertion to verify the result.
    pub assertion: Assertion,
}

/// A complete test scenario.
pub struct Scenario {
    /// Scenario name (for reporting).
    name: String,
    /// Path to the automaton source file.
    automaton_path: Option<PathBuf>,
    /// Inline automaton source.
    automaton_source: Option<String>,
    /// Path to the inputs file.
    inputs_path: Option<PathBuf>,
    /// Parsed inputs (if loaded inline).
    inputs: Option<Inputs>,
    /// Compile options.
    options: CompileOptions,
    /// Expected compile failure, if the automaton must be rejected.
    expected_compile_error: Option<ErrorCategory>,
    /// Steps with assertions.
    steps: Vec<Step>,
    /// Base path for resolving relative paths.
    base_path: PathBuf,
}

impl Scenario {
    /// Create a new scenario with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            automaton_path: None,
            automaton_source: None,
            inputs_path: None,
            inputs: None,
            options: CompileOptions::default(),
            expected_compile_error: None,
            steps: Vec::new(),
            base_path: scenarios_root(),
        }
    }

    /// Set the base path for resolving relative paths.
    pub fn base_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.base_path = path.into();
        self
    }

    /// Set the automaton file path (relative to scenarios/).
    pub fn automaton(mut self, path: impl Into<PathBuf>) -> Self {
        self.automaton_path = Some(path.into());
        self
    }

    /// Use inline automaton source instead of a file.
    pub fn automaton_source(mut self, source: impl Into<String>) -> Self {
        self.automaton_source = Some(source.into());
        self
    }

    /// Set the inputs file path (relative to scenarios/).
    pub fn inputs(mut self, path: impl Into<PathBuf>) -> Self {
        self.inputs_path = Some(path.into());
        self
    }

    /// Load inputs from a string.
    pub fn inputs_source(mut self, source: &str) -> ScenarioResult<Self> {
        self.inputs = Some(Inputs::parse(source)?);
        Ok(self)
    }

    /// Set the compile options.
    pub fn options(mut self, options: CompileOptions) -> Self {
        self.options = options;
        self
    }

    /// Expect the automaton to be rejected with the given category.
    pub fn expect_compile_error(mut self, category: ErrorCategory) -> Self {
        self.expected_compile_error = Some(category);
        self
    }

    /// Add a step with an assertion.
    ///
    /// The step name must match a `--# name` marker in the inputs file.
    pub fn step<F>(mut self, name: impl Into<String>, assertion_fn: F) -> Self
    where
        F: FnOnce(AssertionBuilder) -> AssertionBuilder,
    {
        let name = name.into();
        let assertion = assertion_fn(AssertionBuilder::new()).build();
        self.steps.push(Step { name, assertion });
        self
    }

    /// Run the scenario and return the result.
    pub fn run(&self) -> ScenarioResult<()> {
        crate::init_tracing();
        Runner::new(self)?.run()
    }

    /// Get the scenario name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn compile_options(&self) -> CompileOptions {
        self.options
    }

    pub fn expected_compile_error(&self) -> Option<ErrorCategory> {
        self.expected_compile_error
    }

    /// Load the automaton source, returning it with the path used for reporting.
    pub fn load_automaton(&self) -> ScenarioResult<(PathBuf, String)> {
        if let Some(ref source) = self.automaton_source {
            return Ok((PathBuf::from("<inline>"), source.clone()));
        }

        let path = match &self.automaton_path {
            Some(p) => self.resolve_path(p),
            None => return Err(ScenarioError::missing_automaton(&self.name)),
        };
        let source =
            std::fs::read_to_string(&path).map_err(|e| ScenarioError::file_read(&path, e))?;
        Ok((path, source))
    }

    /// Get the inputs, loading from file if needed.
    ///
    /// A scenario with no steps needs no inputs.
    pub fn load_inputs(&self) -> ScenarioResult<Inputs> {
        if let Some(ref inputs) = self.inputs {
            return Ok(inputs.clone());
        }

        match &self.inputs_path {
            Some(p) => Inputs::load(&self.resolve_path(p)),
            None if self.steps.is_empty() => Inputs::parse(""),
            None => Err(ScenarioError::missing_inputs(&self.name)),
        }
    }

    /// Get the steps.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Resolve a path relative to the base path.
    fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_path.join(path)
        }
    }
}

/// Get the scenarios root directory.
///
/// This looks for `scenarios/` at the workspace root.
fn scenarios_root() -> PathBuf {
    if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
        // tests -> workspace root
        if let Some(workspace) = PathBuf::from(manifest_dir).parent() {
            let scenarios = workspace.join("scenarios");
            if scenarios.exists() {
                return scenarios;
            }
        }
    }

    let cwd = std::env::current_dir().unwrap_or_default();
    for dir in [Some(cwd.as_path()), cwd.parent()].into_iter().flatten() {
        let scenarios = dir.join("scenarios");
        if scenarios.exists() {
            return scenarios;
        }
    }

    PathBuf::from("scenarios")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_builder() {
        let scenario = Scenario::new("test")
            .automaton("level-1/hector/automaton.dfa")
            .inputs("level-1/hector/inputs/basic.txt")
            .step("zero", |a| a.accepted())
            .step("one", |a| a.rejected());

        assert_eq!(scenario.name(), "test");
        assert_eq!(scenario.steps().len(), 2);
        assert_eq!(scenario.steps()[0].name, "zero");
        assert_eq!(scenario.steps()[1].name, "one");
        assert_eq!(scenario.expected_compile_error(), None);
    }

    #[test]
    fn test_missing_automaton() {
        let scenario = Scenario::new("nothing");

        let err = scenario.load_automaton().unwrap_err();

        assert!(matches!(err, ScenarioError::MissingAutomaton { .. }));
    }

    #[test]
    fn test_steps_without_inputs() {
        let scenario = Scenario::new("no_inputs").step("s", |a| a.accepted());

        assert!(matches!(
            scenario.load_inputs(),
            Err(ScenarioError::MissingInputs { .. })
        ));
    }

    #[test]
    fn test_relative_paths_resolve_against_base() {
        let scenario = Scenario::new("paths")
            .base_path("/tmp/scn")
            .automaton("a/automaton.dfa");

        let err = scenario.load_automaton().unwrap_err();

        assert!(err.to_string().contains("/tmp/scn/a/automaton.dfa"));
    }
}
