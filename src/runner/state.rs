//! Estado explícito de una corrida.
//!
//! Cada invocación de `run_steps` crea (o recibe) un `RunState` propio, de
//! modo que corridas repetidas sobre el mismo runner son inequívocas sobre
//! qué se resetea (este estado) y qué persiste (el registry de eventos y el
//! payload compartido). El estado pertenece en exclusiva a una corrida en
//! vuelo; nunca se comparte entre corridas concurrentes.

use chrono::{DateTime, Utc};
use serde_json::Value;
use uuid::Uuid;

use crate::step::StepOutcome;

#[derive(Debug)]
pub struct RunState<P = Value> {
    run_id: Uuid,
    started_at: DateTime<Utc>,
    finished_at: Option<DateTime<Utc>>,
    errors: Vec<String>,
    outcomes: Vec<StepOutcome<P>>,
    short_circuited: bool,
}

impl<P> RunState<P> {
    pub fn new() -> Self {
        Self::seeded(Vec::new())
    }

    /// Estado con lista de errores pre-poblada (sink externo del caller).
    /// Los errores previos se preservan y cuentan para el resultado global.
    pub fn seeded(errors: Vec<String>) -> Self {
        Self { run_id: Uuid::new_v4(),
               started_at: Utc::now(),
               finished_at: None,
               errors,
               outcomes: Vec::new(),
               short_circuited: false }
    }

    /// Registra el outcome de un step: asigna la etiqueta, acumula el
    /// mensaje (si hay) exactamente una vez sin importar `continues`, y
    /// captura el outcome. Devuelve si la corrida debe continuar.
    pub(crate) fn record(&mut self, label: &str, mut outcome: StepOutcome<P>) -> bool {
        outcome.step_label = Some(label.to_string());
        if let Some(message) = &outcome.message {
            self.errors.push(message.clone());
        }
        let continues = outcome.continues;
        self.outcomes.push(outcome);
        continues
    }

    pub(crate) fn mark_short_circuited(&mut self) {
        self.short_circuited = true;
    }

    pub(crate) fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    /// Resultado global: la corrida recorrió todos los steps y la lista de
    /// errores quedó vacía. La conjunción es necesaria porque `invalid`
    /// continúa pero marca fallo.
    pub fn succeeded(&self) -> bool {
        !self.short_circuited && self.errors.is_empty()
    }

    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }

    /// Mensajes de error acumulados, en orden de aparición.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Outcomes capturados por step, en orden de ejecución.
    pub fn outcomes(&self) -> &[StepOutcome<P>] {
        &self.outcomes
    }

    pub fn last_outcome(&self) -> Option<&StepOutcome<P>> {
        self.outcomes.last()
    }

    /// La corrida cortó antes de agotar la secuencia.
    pub fn short_circuited(&self) -> bool {
        self.short_circuited
    }
}

impl<P> Default for RunState<P> {
    fn default() -> Self {
        Self::new()
    }
}
