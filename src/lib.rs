//! Plant Health Diagnostic Engine
//!
//! Ranks likely causes for a set of observed plant symptoms, builds an
//! urgency-tiered care plan and suggests a container when roots are affected.
//!
//! - `catalog/`: Symptom catalog, issue knowledgebase, validation
//! - `scorer`: Coverage × commonness scoring and top-3 ranking
//! - `plan/`: Care actions, follow-up reminders, pot recommendations
//! - `engine`: Assembles a `DiagnosticResult` (single and batch)
//! - `store/`: Persistence boundary for diagnostic history
//! - `insights`: Injected cache for externally sourced care notes
//!
//! Diagnosis is pure and synchronous; only the store boundary is async.

pub mod catalog;
pub mod scorer;
pub mod plan;
pub mod engine;
pub mod store;
pub mod insights;

// Re-export commonly used types
pub use catalog::{
    get_symptoms, get_symptoms_by_category, Issue, Knowledgebase, KnowledgebaseError, Severity,
    Symptom, SymptomCategory,
};
pub use scorer::{RankedIssue, MAX_CAUSES};
pub use plan::{CareAction, DiagnosticResult, PotMaterial, PotRecommendation, Urgency};
pub use engine::{diagnose, DiagnosticEngine};
pub use store::{
    DiagnosticRecorder, DiagnosticStore, InMemoryDiagnosticStore, NewDiagnostic,
    PersistedDiagnostic, StoreError,
};
pub use insights::CareInsightCache;
