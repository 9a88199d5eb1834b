//! Resultado tri-estado de un step.
//!
//! Un `StepOutcome` es un value object inmutable una vez devuelto:
//! - `continues == true` sin mensaje: el step terminó bien.
//! - `continues == true` con mensaje (`invalid`): la corrida sigue pero el
//!   mensaje entra a la lista de errores y el resultado global será fallo.
//! - `continues == false` con mensaje (`stop`): fallo duro, corta la corrida.
//! - `continues == false` sin mensaje (`halt`): corte deliberado sin error.
//! - `error` solo lo puebla el wrapper `safely`; conserva el fault original
//!   mientras `message` queda como etiqueta humana.

use serde_json::Value;

/// Fault capturado por `safely`. Cualquier error (o string) convertible a un
/// error boxeado puede viajar en el outcome para inspección posterior.
pub type StepFault = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Resultado de ejecutar un step. `P` es el tipo del payload encadenado;
/// por defecto JSON neutro, igual que el payload de los artifacts del engine.
#[derive(Debug)]
pub struct StepOutcome<P = Value> {
    pub continues: bool,
    pub message: Option<String>,
    pub error: Option<StepFault>,
    pub payload: Option<P>,
    /// Etiqueta del step que produjo el outcome; la asigna el executor al
    /// registrarlo en el estado de la corrida.
    pub step_label: Option<String>,
}

impl<P> StepOutcome<P> {
    fn bare(continues: bool) -> Self {
        Self { continues,
               message: None,
               error: None,
               payload: None,
               step_label: None }
    }

    /// El step terminó bien; la corrida continúa.
    #[inline]
    pub fn proceed() -> Self {
        Self::bare(true)
    }

    /// Proceed llevando un nuevo payload hacia el siguiente step.
    #[inline]
    pub fn proceed_with(payload: P) -> Self {
        Self { payload: Some(payload),
               ..Self::bare(true) }
    }

    /// Fallo duro: el mensaje entra a la lista de errores y la corrida corta.
    pub fn stop(message: impl Into<String>) -> Self {
        Self { message: Some(message.into()),
               ..Self::bare(false) }
    }

    /// `stop` reportando además el payload al momento del corte (diagnóstico).
    pub fn stop_with(payload: P, message: impl Into<String>) -> Self {
        Self { payload: Some(payload),
               ..Self::stop(message) }
    }

    /// Corte deliberado sin registrar error.
    #[inline]
    pub fn halt() -> Self {
        Self::bare(false)
    }

    /// `halt` reportando el payload al momento del corte.
    #[inline]
    pub fn halt_with(payload: P) -> Self {
        Self { payload: Some(payload),
               ..Self::bare(false) }
    }

    /// Registra un error pero permite que la corrida continúe. Útil para
    /// validaciones donde se quieren acumular todos los errores.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self { message: Some(message.into()),
               ..Self::bare(true) }
    }

    /// `invalid` llevando el payload hacia el siguiente step.
    pub fn invalid_with(payload: P, message: impl Into<String>) -> Self {
        Self { payload: Some(payload),
               ..Self::invalid(message) }
    }

    /// Outcome no-continuante con el fault original preservado en `error`.
    /// `description` es la etiqueta humana que entra como `message`.
    pub fn stop_with_exception(description: impl Into<String>, fault: impl Into<StepFault>) -> Self {
        Self { message: Some(description.into()),
               error: Some(fault.into()),
               ..Self::bare(false) }
    }

    /// Ejecuta `block` y convierte cualquier fault en `stop_with_exception`.
    /// Única frontera sancionada donde un fault se vuelve outcome en lugar de
    /// propagarse al caller.
    pub fn safely<E>(description: &str, block: impl FnOnce() -> Result<(), E>) -> Self
        where E: Into<StepFault>
    {
        match block() {
            Ok(()) => Self::proceed(),
            Err(fault) => Self::stop_with_exception(description, fault),
        }
    }

    /// Variante de `safely` para steps de pipeline: en éxito el valor devuelto
    /// por el block viaja como payload del outcome.
    pub fn safely_into<E>(description: &str, block: impl FnOnce() -> Result<P, E>) -> Self
        where E: Into<StepFault>
    {
        match block() {
            Ok(payload) => Self::proceed_with(payload),
            Err(fault) => Self::stop_with_exception(description, fault),
        }
    }
}
