//! Executor secuencial plano.

use serde_json::Value;

use crate::errors::EngineError;
use crate::event::{EventDelegate, EventRegistry};
use crate::runner::{RunState, StepExecutor};
use crate::step::{Step, StepOutcome};

/// Closure de un step plano: recibe el registry (para emitir eventos) y
/// devuelve su outcome. Los errores fatales de despacho se propagan.
pub type StepFn<P> = Box<dyn FnOnce(&mut EventRegistry<P>) -> Result<StepOutcome<P>, EngineError>>;

/// Runner de steps sin propagación de payload.
///
/// El host embebe un `StepRunner` y le entrega, por corrida, la secuencia
/// ordenada de steps (closures ya ligados a la instancia del host). El
/// registry embebido persiste entre corridas; el `RunState` no.
pub struct StepRunner<P = Value> {
    events: EventRegistry<P>,
}

impl<P> StepRunner<P> {
    pub fn new() -> Self {
        Self { events: EventRegistry::new() }
    }

    /// Construye un step etiquetado para este runner.
    pub fn step(label: impl Into<String>,
                run: impl FnOnce(&mut EventRegistry<P>) -> Result<StepOutcome<P>, EngineError> + 'static)
                -> Step<StepFn<P>> {
        Step::new(label, Box::new(run) as StepFn<P>)
    }

    pub fn events(&self) -> &EventRegistry<P> {
        &self.events
    }

    // Conveniencias de registración que delegan en el registry embebido.

    pub fn on(&mut self, event: &str, listener: impl FnMut(&StepOutcome<P>, &str) + 'static) -> &mut Self {
        self.events.on(event, listener);
        self
    }

    pub fn on_missing(&mut self, listener: impl FnMut(&StepOutcome<P>, &str) + 'static) -> &mut Self {
        self.events.on_missing(listener);
        self
    }

    pub fn on_advance(&mut self, listener: impl FnMut(&StepOutcome<P>) + 'static) -> &mut Self {
        self.events.on_advance(listener);
        self
    }

    pub fn handler(&mut self, event: &str, method: &str) -> &mut Self {
        self.events.handler(event, method);
        self
    }

    pub fn register_delegate(&mut self, delegate: Box<dyn EventDelegate<P>>) -> &mut Self {
        self.events.register_delegate(delegate);
        self
    }
}

impl<P> Default for StepRunner<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> StepExecutor<P> for StepRunner<P> {
    type StepFn = StepFn<P>;

    fn execute_step(&mut self, run: StepFn<P>, _state: &mut RunState<P>) -> Result<StepOutcome<P>, EngineError> {
        run(&mut self.events)
    }

    fn events_mut(&mut self) -> &mut EventRegistry<P> {
        &mut self.events
    }
}
