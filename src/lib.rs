//! stepflow: motor secuencial de steps con short-circuit.
//!
//! El host embebe uno de los runners y obtiene ejecución orquestada y
//! observable de secuencias de steps sin escribir su propio loop:
//! - `StepRunner`: executor plano (acumulación de errores, short-circuit).
//! - `EventRegistry`: overlay de eventos nombrados sobre el mismo loop.
//! - `PipelineRunner` / `SharedPayloadRunner`: propagación de payload con
//!   propiedad encadenada o valor compartido mutable.

pub mod errors;
pub mod event;
pub mod payload;
pub mod runner;
pub mod step;

pub use errors::EngineError;
pub use event::{EventDelegate, EventRecord, EventRegistry, EXCEPTION_EVENT};
pub use payload::{PipelineRunner, SharedPayloadRunner};
pub use runner::{RunState, StepExecutor, StepRunner};
pub use step::{Step, StepFault, StepOutcome};
