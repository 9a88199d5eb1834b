//! Registro de eventos nombrados y su algoritmo de despacho.

use std::collections::HashMap;

use chrono::Utc;
use serde_json::Value;

use super::{EventDelegate, EventRecord};
use crate::errors::EngineError;
use crate::step::{StepFault, StepOutcome};

/// Evento reservado al que enruta `stop_with_exception`.
pub const EXCEPTION_EVENT: &str = "exception";

/// Listener inline: recibe el outcome y el nombre del evento despachado.
pub type ListenerFn<P> = Box<dyn FnMut(&StepOutcome<P>, &str)>;

/// Listener de avance: se dispara después de cada despacho y, vía el run
/// loop, después de cada step sin importar su outcome.
pub type AdvanceFn<P> = Box<dyn FnMut(&StepOutcome<P>)>;

enum EventHandler<P> {
    Listener(ListenerFn<P>),
    /// Nombre de método a invocar sobre el delegado registrado.
    Delegated(String),
}

/// Mapa de nombre de evento a lista ordenada de handlers, más las dos listas
/// especiales: catch-all (eventos sin listener) y avance.
///
/// Se puebla durante el setup del host, es de solo lectura (en cuanto a
/// registración) durante la ejecución y persiste entre corridas.
pub struct EventRegistry<P = Value> {
    events: HashMap<String, Vec<EventHandler<P>>>,
    missing: Vec<EventHandler<P>>,
    advance: Vec<AdvanceFn<P>>,
    delegate: Option<Box<dyn EventDelegate<P>>>,
    last_event: Option<String>,
    records: Vec<EventRecord>,
}

impl<P> EventRegistry<P> {
    pub fn new() -> Self {
        Self { events: HashMap::new(),
               missing: Vec::new(),
               advance: Vec::new(),
               delegate: None,
               last_event: None,
               records: Vec::new() }
    }

    // ---- registración (fase de setup) ----

    /// Registra un listener inline para `event`, preservando el orden.
    pub fn on(&mut self, event: &str, listener: impl FnMut(&StepOutcome<P>, &str) + 'static) -> &mut Self {
        self.events
            .entry(event.to_string())
            .or_default()
            .push(EventHandler::Listener(Box::new(listener)));
        self
    }

    /// Registra un listener catch-all para eventos sin lista propia.
    pub fn on_missing(&mut self, listener: impl FnMut(&StepOutcome<P>, &str) + 'static) -> &mut Self {
        self.missing.push(EventHandler::Listener(Box::new(listener)));
        self
    }

    /// Registra un listener de avance.
    pub fn on_advance(&mut self, listener: impl FnMut(&StepOutcome<P>) + 'static) -> &mut Self {
        self.advance.push(Box::new(listener));
        self
    }

    /// Registra el enrutamiento de `event` hacia un método del delegado.
    pub fn handler(&mut self, event: &str, method: &str) -> &mut Self {
        self.events
            .entry(event.to_string())
            .or_default()
            .push(EventHandler::Delegated(method.to_string()));
        self
    }

    /// Registra el objeto delegado usado por las entradas de `handler`.
    pub fn register_delegate(&mut self, delegate: Box<dyn EventDelegate<P>>) -> &mut Self {
        self.delegate = Some(delegate);
        self
    }

    // ---- despacho ----

    /// Despacha `outcome` bajo el nombre `name`.
    ///
    /// Resuelve la lista de listeners del nombre; si está vacía cae al
    /// catch-all; si tampoco hay, `EventMissing`. Invoca los handlers en
    /// orden de registración, luego todos los listeners de avance, y por
    /// último registra `last_event_fired` y el `EventRecord` del journal.
    pub fn dispatch(&mut self, name: &str, outcome: &StepOutcome<P>) -> Result<(), EngineError> {
        let handlers = match self.events.get_mut(name) {
            Some(list) if !list.is_empty() => list,
            _ => &mut self.missing,
        };
        if handlers.is_empty() {
            return Err(EngineError::EventMissing(name.to_string()));
        }

        for handler in handlers.iter_mut() {
            match handler {
                EventHandler::Listener(listener) => listener(outcome, name),
                EventHandler::Delegated(method) => {
                    let delegate = self.delegate
                                       .as_mut()
                                       .ok_or_else(|| EngineError::DelegateMissing(method.clone()))?;
                    delegate.call(method, outcome, name)?;
                }
            }
        }

        self.fire_advance(outcome);

        self.last_event = Some(name.to_string());
        let seq = self.records.len() as u64;
        self.records.push(EventRecord { seq,
                                        event: name.to_string(),
                                        ts: Utc::now() });
        Ok(())
    }

    /// Invoca todos los listeners de avance con `outcome`.
    pub fn fire_advance(&mut self, outcome: &StepOutcome<P>) {
        for listener in self.advance.iter_mut() {
            listener(outcome);
        }
    }

    /// Despacho manual de un evento, fuera del ciclo de steps.
    pub fn fire(&mut self, event: &str, payload: Option<P>) -> Result<StepOutcome<P>, EngineError> {
        let outcome = match payload {
            Some(p) => StepOutcome::proceed_with(p),
            None => StepOutcome::proceed(),
        };
        self.dispatch(event, &outcome)?;
        Ok(outcome)
    }

    // ---- emisores de outcome para steps ----
    //
    // Versiones con evento explícito de los constructores de StepOutcome:
    // construyen el outcome, lo despachan y lo devuelven para que el step
    // lo retorne al executor.

    /// Proceed; con `Some(event)` despacha, con `None` es no-op de despacho.
    pub fn proceed(&mut self, event: Option<&str>) -> Result<StepOutcome<P>, EngineError> {
        let outcome = StepOutcome::proceed();
        if let Some(name) = event {
            self.dispatch(name, &outcome)?;
        }
        Ok(outcome)
    }

    /// Proceed despachando `event` y llevando `payload` al siguiente step.
    pub fn proceed_with(&mut self, event: &str, payload: P) -> Result<StepOutcome<P>, EngineError> {
        let outcome = StepOutcome::proceed_with(payload);
        self.dispatch(event, &outcome)?;
        Ok(outcome)
    }

    /// Stop duro notificado bajo `event`.
    pub fn stop(&mut self, event: &str, message: impl Into<String>) -> Result<StepOutcome<P>, EngineError> {
        let outcome = StepOutcome::stop(message);
        self.dispatch(event, &outcome)?;
        Ok(outcome)
    }

    /// Corte silencioso notificado bajo `event`.
    pub fn halt(&mut self, event: &str) -> Result<StepOutcome<P>, EngineError> {
        let outcome = StepOutcome::halt();
        self.dispatch(event, &outcome)?;
        Ok(outcome)
    }

    /// Invalid notificado bajo `event`; la corrida continúa.
    pub fn invalid(&mut self, event: &str, message: impl Into<String>) -> Result<StepOutcome<P>, EngineError> {
        let outcome = StepOutcome::invalid(message);
        self.dispatch(event, &outcome)?;
        Ok(outcome)
    }

    /// Convierte un fault en outcome y lo enruta al evento `exception`.
    pub fn stop_with_exception(&mut self,
                               description: impl Into<String>,
                               fault: impl Into<StepFault>)
                               -> Result<StepOutcome<P>, EngineError> {
        let outcome = StepOutcome::stop_with_exception(description, fault);
        self.dispatch(EXCEPTION_EVENT, &outcome)?;
        Ok(outcome)
    }

    // ---- introspección ----

    /// Nombre del último evento despachado, si hubo alguno.
    pub fn last_event_fired(&self) -> Option<&str> {
        self.last_event.as_deref()
    }

    /// Journal de despachos en orden de append.
    pub fn records(&self) -> &[EventRecord] {
        &self.records
    }
}

impl<P> Default for EventRegistry<P> {
    fn default() -> Self {
        Self::new()
    }
}
