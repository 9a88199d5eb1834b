//! Variante de propiedad encadenada (pipeline).
//!
//! Cada step recibe el payload actual por valor; la propiedad se transfiere
//! al step en la frontera de invocación. El executor reasigna su slot con el
//! valor llevado por el outcome inmediatamente después de que el step
//! retorna, antes de invocar al siguiente. Un outcome sin payload deja el
//! slot en el valor por defecto (igual que el nil -> default del original).

use serde_json::Value;

use crate::errors::EngineError;
use crate::event::EventRegistry;
use crate::runner::{RunState, StepExecutor, StepRunner};
use crate::step::{Step, StepOutcome};

/// Closure de un step de pipeline: registry + payload entrante por valor.
pub type PipelineStepFn<P> = Box<dyn FnOnce(&mut EventRegistry<P>, P) -> Result<StepOutcome<P>, EngineError>>;

/// Runner con payload encadenado entre steps sucesivos.
pub struct PipelineRunner<P = Value> {
    inner: StepRunner<P>,
    payload: P,
}

impl<P> PipelineRunner<P> {
    pub fn new(initial: P) -> Self {
        Self { inner: StepRunner::new(),
               payload: initial }
    }

    /// Reemplaza el payload inicial antes de una corrida.
    pub fn set_initial_payload(&mut self, payload: P) {
        self.payload = payload;
    }

    /// Construye un step etiquetado para este runner.
    pub fn step(label: impl Into<String>,
                run: impl FnOnce(&mut EventRegistry<P>, P) -> Result<StepOutcome<P>, EngineError> + 'static)
                -> Step<PipelineStepFn<P>> {
        Step::new(label, Box::new(run) as PipelineStepFn<P>)
    }

    /// Último valor reasignado al slot (o el inicial si ningún step corrió).
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

impl<P> StepExecutor<P> for PipelineRunner<P> where P: Clone + Default
{
    type StepFn = PipelineStepFn<P>;

    fn execute_step(&mut self, run: PipelineStepFn<P>, _state: &mut RunState<P>) -> Result<StepOutcome<P>, EngineError> {
        let input = std::mem::take(&mut self.payload);
        let outcome = run(self.inner.events_mut(), input)?;
        self.payload = match &outcome.payload {
            Some(next) => next.clone(),
            None => P::default(),
        };
        Ok(outcome)
    }

    fn events_mut(&mut self) -> &mut EventRegistry<P> {
        self.inner.events_mut()
    }
}
