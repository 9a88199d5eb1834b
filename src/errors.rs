//! Errores fatales de configuración del motor.
//!
//! Estos errores indican un fallo de programación (setup incompleto), no una
//! condición de ejecución: se propagan con `Err` y nunca se absorben en la
//! lista de errores acumulados de una corrida.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum EngineError {
    #[error("no event registered for {0}")] EventMissing(String),
    #[error("no delegate registered for handler method {0}")] DelegateMissing(String),
    #[error("delegate does not handle method {0}")] UnknownHandlerMethod(String),
    #[error("internal: {0}")] Internal(String),
}
