//! Variante de valor compartido mutable.
//!
//! El runner guarda un único valor por la vida del host; cada step lo recibe
//! por referencia mutable y lo modifica in place. El executor nunca reasigna
//! el valor guardado: solo adjunta un snapshot al outcome de cada step para
//! que un listener externo pueda observar el payload en ese punto de la
//! corrida.

use serde_json::Value;

use crate::errors::EngineError;
use crate::event::EventRegistry;
use crate::runner::{RunState, StepExecutor, StepRunner};
use crate::step::{Step, StepOutcome};

/// Closure de un step compartido: registry + payload por referencia mutable.
pub type SharedStepFn<P> = Box<dyn FnOnce(&mut EventRegistry<P>, &mut P) -> Result<StepOutcome<P>, EngineError>>;

/// Runner con payload compartido mutable entre todos los steps.
pub struct SharedPayloadRunner<P = Value> {
    inner: StepRunner<P>,
    payload: P,
}

impl<P> SharedPayloadRunner<P> {
    pub fn new(initial: P) -> Self {
        Self { inner: StepRunner::new(),
               payload: initial }
    }

    /// Construye un step etiquetado para este runner.
    pub fn step(label: impl Into<String>,
                run: impl FnOnce(&mut EventRegistry<P>, &mut P) -> Result<StepOutcome<P>, EngineError> + 'static)
                -> Step<SharedStepFn<P>> {
        Step::new(label, Box::new(run) as SharedStepFn<P>)
    }

    /// El valor tal como quedó después de la corrida.
    pub fn final_payload(&self) -> &P {
        &self.payload
    }

    pub fn events(&self) -> &EventRegistry<P> {
        self.inner.events()
    }

    pub fn on_advance(&mut self, listener: impl FnMut(&StepOutcome<P>) + 'static) -> &mut Self {
        self.inner.on_advance(listener);
        self
    }
}

impl<P> StepExecutor<P> for SharedPayloadRunner<P> where P: Clone
{
    type StepFn = SharedStepFn<P>;

    fn execute_step(&mut self, run: SharedStepFn<P>, _state: &mut RunState<P>) -> Result<StepOutcome<P>, EngineError> {
        let mut outcome = run(self.inner.events_mut(), &mut self.payload)?;
        // snapshot para observación externa; el slot no se reasigna
        outcome.payload = Some(self.payload.clone());
        Ok(outcome)
    }

    fn events_mut(&mut self) -> &mut EventRegistry<P> {
        self.inner.events_mut()
    }
}
