//! Contenedor etiquetado de un step.
//!
//! El host registra closures ya ligados a su instancia (en lugar de
//! referencias simbólicas resueltas en runtime); la etiqueta identifica al
//! step en los outcomes capturados.

/// Un step etiquetado. `F` es el closure concreto de cada variante de runner
/// (ver `StepRunner::step`, `PipelineRunner::step`, `SharedPayloadRunner::step`).
pub struct Step<F> {
    label: String,
    run: F,
}

impl<F> Step<F> {
    pub fn new(label: impl Into<String>, run: F) -> Self {
        Self { label: label.into(),
               run }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub(crate) fn into_parts(self) -> (String, F) {
        (self.label, self.run)
    }
}
