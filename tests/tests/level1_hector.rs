//! Level 1 - Hector integration tests.
//!
//! Two states over {0,1}; accepting exactly when the run ends in q1.

use automa_tests::prelude::*;

mod basic_runs {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("basic_runs")
            .automaton("level-1/hector/automaton.dfa")
            .inputs("level-1/hector/inputs/basic.txt")
            .step("single_zero", |a| a.accepted().final_state("q1"))
            .step("single_one", |a| a.rejected().final_state("q0"))
            .step("zero_then_ones", |a| {
                a.accepted().path(&["q0", "q1", "q1", "q1", "q1"])
            })
            .step("ends_in_zero_from_q1", |a| a.rejected().final_state("q0").steps(4))
            .step("empty", |a| a.rejected().path(&["q0"]))
            .step("bad_symbol", |a| a.invalid_input(1))
            .step("letters", |a| {
                a.invalid_input(0)
                    .error_pattern(r"^input symbol 'a' at position 0 is not in the alphabet$")
            })
    }

    #[test]
    fn test_runs_from_start_state() {
        scenario().run().unwrap();
    }
}

mod persistent_session {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("persistent_session")
            .automaton("level-1/hector/automaton.dfa")
            .inputs("level-1/hector/inputs/session.txt")
            .step("enter_q1", |a| a.accepted())
            .step("stay_in_q1", |a| a.accepted().path(&["q1", "q1", "q1"]))
            .step("back_to_q0", |a| a.rejected().path(&["q1", "q0"]))
            // the pre-check fails before any symbol is consumed
            .step("rejected_input_keeps_state", |a| a.invalid_input(1))
            .step("resume_after_rejection", |a| a.accepted().path(&["q0", "q1"]))
            .step("fresh_run", |a| a.rejected().path(&["q0", "q0"]))
    }

    #[test]
    fn test_runtime_state_carries_across_steps() {
        scenario().run().unwrap();
    }
}

mod strict_compile {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("strict_compile")
            .automaton("level-1/hector/automaton.dfa")
            .inputs("level-1/hector/inputs/basic.txt")
            .options(CompileOptions::strict())
            .step("single_zero", |a| a.accepted())
    }

    #[test]
    fn test_total_automaton_passes_strict_options() {
        scenario().run().unwrap();
    }
}

#[test]
fn test_wrong_expectation_is_reported() {
    let err = Scenario::new("wrong")
        .automaton("level-1/hector/automaton.dfa")
        .inputs("level-1/hector/inputs/basic.txt")
        .step("single_one", |a| a.accepted())
        .run()
        .unwrap_err();

    assert!(matches!(err, ScenarioError::AssertionFailed { .. }));
}

#[test]
fn test_unknown_step_is_reported() {
    let err = Scenario::new("unknown_step")
        .automaton("level-1/hector/automaton.dfa")
        .inputs("level-1/hector/inputs/basic.txt")
        .step("no_such_step", |a| a.accepted())
        .run()
        .unwrap_err();

    assert!(matches!(err, ScenarioError::StepNotFound { .. }));
}
