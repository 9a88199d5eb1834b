//! Registro serializable de despachos (journal append-only).
//!
//! Cada despacho exitoso agrega un `EventRecord` al journal del registry,
//! con `seq` asignado en orden de append. El journal complementa a
//! `last_event_fired` para introspección posterior a la corrida.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRecord {
    pub seq: u64,
    pub event: String,
    pub ts: DateTime<Utc>, // metadato, no participa del despacho
}
