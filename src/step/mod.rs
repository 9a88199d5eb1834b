//! Definiciones relacionadas a Steps.
//!
//! Un Step es una unidad de trabajo dentro de una secuencia ordenada. Cada
//! invocación produce un `StepOutcome` tri-estado que el executor usa para
//! decidir si continuar. Este módulo define:
//! - `StepOutcome`: el resultado tri-estado y sus constructores.
//! - `StepFault` y los wrappers `safely` (única frontera fault -> outcome).
//! - `Step`: contenedor etiquetado para el closure de cada variante de runner.

pub mod definition;
pub mod outcome;

pub use definition::Step;
pub use outcome::{StepFault, StepOutcome};
