//! Enrutamiento de eventos hacia un objeto handler externo.

use crate::errors::EngineError;
use crate::step::StepOutcome;

/// Objeto delegado para entradas registradas con `EventRegistry::handler`.
///
/// El despacho llama `call` con el nombre de método registrado; la
/// implementación enruta por nombre y debe devolver
/// `EngineError::UnknownHandlerMethod` para métodos que no maneja. El
/// delegado tiene que registrarse antes de cualquier despacho que lo use.
pub trait EventDelegate<P> {
    fn call(&mut self, method: &str, outcome: &StepOutcome<P>, event: &str) -> Result<(), EngineError>;
}
