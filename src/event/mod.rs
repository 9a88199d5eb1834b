//! Overlay de eventos: registro de listeners nombrados y despacho.
//!
//! El overlay decora el reporte de outcomes del executor: en lugar de (o
//! además de) devolver un valor, un step puede emitir una notificación
//! nombrada que el registry enruta a sus listeners, con fallback catch-all y
//! listeners de avance. Despachar un evento sin listener y sin catch-all es
//! `EngineError::EventMissing`: el sistema nunca descarta en silencio una
//! notificación que el caller esperaba observar.

pub mod delegate;
pub mod record;
pub mod registry;

pub use delegate::EventDelegate;
pub use record::EventRecord;
pub use registry::{EventRegistry, EXCEPTION_EVENT};
