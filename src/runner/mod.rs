//! Executor secuencial: run loop con short-circuit y acumulación de errores.

pub mod core;
pub mod executor;
pub mod state;

pub use self::core::{StepFn, StepRunner};
pub use executor::StepExecutor;
pub use state::RunState;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::StepOutcome;
    use serde_json::Value;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn plain(outcome: fn() -> StepOutcome<Value>) -> crate::step::Step<StepFn<Value>> {
        StepRunner::step("step", move |_| Ok(outcome()))
    }

    #[test]
    fn all_proceeding_steps_succeed_with_no_errors() {
        let mut runner: StepRunner = StepRunner::new();
        let state = runner.run_steps(vec![plain(StepOutcome::proceed),
                                          plain(StepOutcome::proceed),
                                          plain(StepOutcome::proceed)])
                          .unwrap();

        assert!(state.succeeded());
        assert!(state.errors().is_empty());
        assert_eq!(state.outcomes().len(), 3);
        assert!(state.finished_at().is_some());
    }

    #[test]
    fn stop_short_circuits_and_records_the_message_once() {
        let ran_third = Rc::new(RefCell::new(false));
        let mut runner: StepRunner = StepRunner::new();
        let flag = Rc::clone(&ran_third);

        let state = runner.run_steps(vec![
                              StepRunner::step("one", |_| Ok(StepOutcome::proceed())),
                              StepRunner::step("two", |_| Ok(StepOutcome::stop("stopped on one"))),
                              StepRunner::step("three", move |_| {
                                  *flag.borrow_mut() = true;
                                  Ok(StepOutcome::proceed())
                              }),
                          ])
                          .unwrap();

        assert!(!state.succeeded());
        assert_eq!(state.errors(), ["stopped on one".to_string()]);
        // la lista capturada llega hasta el step que cortó, inclusive
        assert_eq!(state.outcomes().len(), 2);
        assert_eq!(state.outcomes()[1].step_label.as_deref(), Some("two"));
        assert!(!*ran_third.borrow());
        assert!(state.short_circuited());
    }

    #[test]
    fn invalid_continues_but_fails_the_run() {
        let mut runner: StepRunner = StepRunner::new();
        let state = runner.run_steps(vec![
                              StepRunner::step("check a", |_| Ok(StepOutcome::invalid("a is malformed"))),
                              StepRunner::step("check b", |_| Ok(StepOutcome::invalid("b is missing"))),
                              StepRunner::step("check c", |_| Ok(StepOutcome::proceed())),
                          ])
                          .unwrap();

        assert!(!state.succeeded());
        assert!(!state.short_circuited());
        assert_eq!(state.errors(),
                   ["a is malformed".to_string(), "b is missing".to_string()]);
        assert_eq!(state.outcomes().len(), 3);
    }

    #[test]
    fn halt_stops_without_recording_an_error() {
        let mut runner: StepRunner = StepRunner::new();
        let state = runner.run_steps(vec![plain(StepOutcome::proceed), plain(StepOutcome::halt)])
                          .unwrap();

        assert!(!state.succeeded());
        assert!(state.errors().is_empty());
        assert_eq!(state.outcomes().len(), 2);
    }

    #[test]
    fn advance_listeners_fire_once_per_step() {
        let count = Rc::new(RefCell::new(0));
        let labels = Rc::new(RefCell::new(Vec::new()));
        let mut runner: StepRunner = StepRunner::new();
        let counter = Rc::clone(&count);
        let label_sink = Rc::clone(&labels);
        runner.on_advance(move |outcome| {
                  *counter.borrow_mut() += 1;
                  label_sink.borrow_mut().push(outcome.step_label.clone().unwrap_or_default());
              });

        runner.run_steps(vec![StepRunner::step("a", |_| Ok(StepOutcome::proceed())),
                              StepRunner::step("b", |_| Ok(StepOutcome::proceed())),
                              StepRunner::step("c", |_| Ok(StepOutcome::proceed())),
                              StepRunner::step("d", |_| Ok(StepOutcome::proceed()))])
              .unwrap();

        assert_eq!(*count.borrow(), 4);
        assert_eq!(*labels.borrow(), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn advance_fires_for_the_short_circuiting_step_too() {
        let count = Rc::new(RefCell::new(0));
        let mut runner: StepRunner = StepRunner::new();
        let counter = Rc::clone(&count);
        runner.on_advance(move |_| *counter.borrow_mut() += 1);

        runner.run_steps(vec![plain(StepOutcome::proceed), plain(StepOutcome::halt), plain(StepOutcome::proceed)])
              .unwrap();

        assert_eq!(*count.borrow(), 2);
    }

    #[test]
    fn seeded_error_sink_is_preserved_and_extended() {
        let mut runner: StepRunner = StepRunner::new();
        let seeded = RunState::seeded(vec!["earlier failure".to_string()]);

        let state = runner.run_steps_with(vec![StepRunner::step("only", |_| Ok(StepOutcome::invalid("late failure")))],
                                          seeded)
                          .unwrap();

        assert!(!state.succeeded());
        assert_eq!(state.errors(),
                   ["earlier failure".to_string(), "late failure".to_string()]);
    }

    #[test]
    fn seeded_errors_fail_an_otherwise_clean_run() {
        let mut runner: StepRunner = StepRunner::new();
        let state = runner.run_steps_with(vec![plain(StepOutcome::proceed)],
                                          RunState::seeded(vec!["carried over".to_string()]))
                          .unwrap();
        assert!(!state.succeeded());
    }

    #[test]
    fn safely_wrapped_step_stops_with_the_fault_preserved() {
        let mut runner: StepRunner = StepRunner::new();
        let state = runner.run_steps(vec![StepRunner::step("four", |_| {
                              Ok(StepOutcome::safely("on four", || Err("stopped on four")))
                          })])
                          .unwrap();

        let outcome = state.last_outcome().unwrap();
        assert!(!outcome.continues);
        assert_eq!(outcome.message.as_deref(), Some("on four"));
        assert_eq!(outcome.error.as_ref().unwrap().to_string(), "stopped on four");
        assert_eq!(state.errors(), ["on four".to_string()]);
    }

    #[test]
    fn a_step_firing_an_unregistered_event_aborts_the_run() {
        let mut runner: StepRunner = StepRunner::new();
        let err = runner.run_steps(vec![StepRunner::step("emits", |events| events.proceed(Some("unheard")))])
                        .unwrap_err();
        assert_eq!(err, crate::errors::EngineError::EventMissing("unheard".to_string()));
    }

    #[test]
    fn built_steps_expose_their_label_before_running() {
        let steps = vec![StepRunner::<Value>::step("validate email", |_| Ok(StepOutcome::proceed())),
                         StepRunner::<Value>::step("persist", |_| Ok(StepOutcome::proceed()))];

        // el host puede inspeccionar la secuencia que armó antes de correrla
        let labels: Vec<_> = steps.iter().map(|s| s.label().to_string()).collect();
        assert_eq!(labels, vec!["validate email", "persist"]);

        let mut runner: StepRunner = StepRunner::new();
        let state = runner.run_steps(steps).unwrap();
        assert_eq!(state.outcomes()[0].step_label.as_deref(), Some("validate email"));
    }

    #[test]
    fn a_fatal_error_aborts_and_discards_the_run_state() {
        let advanced = Rc::new(RefCell::new(0));
        let mut runner: StepRunner = StepRunner::new();
        let counter = Rc::clone(&advanced);
        runner.on_advance(move |_| *counter.borrow_mut() += 1);

        let err = runner.run_steps_with(vec![
                            StepRunner::step("ok", |_| Ok(StepOutcome::proceed())),
                            StepRunner::step("emits", |events| events.proceed(Some("unheard"))),
                        ],
                        RunState::seeded(vec!["earlier failure".to_string()]))
                        .unwrap_err();

        // el estado (sink sembrado incluido) no sobrevive al error fatal;
        // lo ya observado por los listeners sí
        assert_eq!(err, crate::errors::EngineError::EventMissing("unheard".to_string()));
        assert_eq!(*advanced.borrow(), 1);
    }

    #[test]
    fn empty_sequence_succeeds() {
        let mut runner: StepRunner = StepRunner::new();
        let state = runner.run_steps(Vec::new()).unwrap();
        assert!(state.succeeded());
        assert!(state.outcomes().is_empty());
    }
}
