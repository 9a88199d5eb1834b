//! Shared run loop for every executor variant.
//!
//! The loop itself is a provided trait method; each variant supplies only how
//! a single step is invoked (`execute_step`), which is where the plain,
//! chained-ownership and shared-mutable runners diverge. This keeps the
//! short-circuit and accumulation semantics in exactly one place.

use crate::errors::EngineError;
use crate::event::EventRegistry;
use crate::runner::RunState;
use crate::step::{Step, StepOutcome};

pub trait StepExecutor<P> {
    /// Closure shape of one step for this executor variant.
    type StepFn;

    /// Invoke a single step, producing its outcome. Fatal configuration
    /// errors (missing event, unregistered delegate) propagate as `Err`.
    fn execute_step(&mut self, run: Self::StepFn, state: &mut RunState<P>) -> Result<StepOutcome<P>, EngineError>;

    /// Registry whose advance listeners observe every recorded outcome.
    fn events_mut(&mut self) -> &mut EventRegistry<P>;

    /// Run the ordered sequence with a fresh per-run state.
    fn run_steps(&mut self, steps: Vec<Step<Self::StepFn>>) -> Result<RunState<P>, EngineError> {
        self.run_steps_with(steps, RunState::new())
    }

    /// Run the ordered sequence over a caller-supplied state (seeded error
    /// sink, or continuation of prior bookkeeping).
    ///
    /// Per step: invoke it, record the outcome (label + message
    /// accumulation), fire every advance listener with the recorded outcome,
    /// and stop iterating the moment an outcome does not continue. Steps
    /// after the break are never invoked.
    ///
    /// A fatal `EngineError` aborts the run and discards the in-flight
    /// state, seeded errors and already-captured outcomes included; fatal
    /// errors signal a setup mistake, so no run bookkeeping survives them.
    /// Listeners already invoked keep whatever they observed.
    fn run_steps_with(&mut self, steps: Vec<Step<Self::StepFn>>, mut state: RunState<P>) -> Result<RunState<P>, EngineError> {
        for step in steps {
            let (label, run) = step.into_parts();
            let outcome = self.execute_step(run, &mut state)?;
            let continues = state.record(&label, outcome);
            if let Some(recorded) = state.last_outcome() {
                self.events_mut().fire_advance(recorded);
            }
            if !continues {
                state.mark_short_circuited();
                break;
            }
        }
        state.finish();
        Ok(state)
    }
}
