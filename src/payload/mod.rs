//! Las dos variantes de propagación de payload.
//!
//! Ambas decoran al executor con un slot de payload, pero con modelos de
//! propiedad opuestos que nunca se mezclan dentro de una corrida:
//! - `PipelineRunner`: propiedad encadenada; cada step recibe el payload por
//!   valor y devuelve el nuevo en su outcome.
//! - `SharedPayloadRunner`: valor compartido mutable; los steps lo mutan in
//!   place y el executor nunca lo reasigna.

pub mod pipeline;
pub mod shared;

pub use pipeline::{PipelineRunner, PipelineStepFn};
pub use shared::{SharedPayloadRunner, SharedStepFn};
