//! Diagnostic Record Store boundary
//!
//! Persistence is owned by the host application. The engine only defines the
//! interface it expects (`DiagnosticStore`) and a caller-side facade
//! (`DiagnosticRecorder`) that never lets a storage failure touch an
//! already computed `DiagnosticResult`.
//!
//! - `memory.rs` - In-process reference store (tests, demo binary)
//! - `recorder.rs` - Save / history / resolve facade over any store

pub mod memory;
pub mod recorder;

pub use memory::InMemoryDiagnosticStore;
pub use recorder::DiagnosticRecorder;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Storage failure reported by a `DiagnosticStore`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("diagnostic store unavailable: {0}")]
    Unavailable(String),

    #[error("diagnostic record {0} not found")]
    NotFound(Uuid),
}

/// A diagnosis the caller chose to keep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDiagnostic {
    pub plant_id: String,
    /// Symptom selection that produced the diagnosis
    pub symptoms: Vec<String>,
    pub diagnosis: String,
    pub treatment_plan: serde_json::Value,
}

/// Stored diagnostic session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedDiagnostic {
    pub id: Uuid,
    pub plant_id: String,
    pub symptoms: Vec<String>,
    pub diagnosis: String,
    pub treatment_plan: serde_json::Value,
    pub resolved: bool,
    pub created_at: DateTime<Utc>,
}

/// Persistence for diagnostic sessions
///
/// Implementations may be slow or fail at any time; callers go through
/// `DiagnosticRecorder`, which turns failures into `None` / `false`.
#[async_trait]
pub trait DiagnosticStore: Send + Sync {
    /// Persist a new record
    async fn save(&self, record: NewDiagnostic) -> Result<PersistedDiagnostic, StoreError>;

    /// Records for a plant, newest first
    async fn list(&self, plant_id: &str) -> Result<Vec<PersistedDiagnostic>, StoreError>;

    /// Set the resolved flag of an existing record
    async fn set_resolved(&self, id: Uuid, resolved: bool) -> Result<(), StoreError>;
}
