use serde_json::{Map, Value};
use std::sync::Arc;
use uuid::Uuid;

use super::{DiagnosticStore, NewDiagnostic, PersistedDiagnostic};
use crate::insights::CareInsightCache;
use crate::plan::DiagnosticResult;

/// Caller-side access to diagnostic history
///
/// Borrows computed results rather than consuming them, so a failed save
/// leaves the caller with a result it can still display.
pub struct DiagnosticRecorder<S> {
    store: S,
    insights: Option<Arc<CareInsightCache>>,
}

impl<S: DiagnosticStore> DiagnosticRecorder<S> {
    pub fn new(store: S) -> Self {
        Self { store, insights: None }
    }

    /// Attach a care-note cache; notes for the ranked causes are copied into
    /// each saved treatment plan under `care_insights`
    pub fn with_insights(mut self, insights: Arc<CareInsightCache>) -> Self {
        self.insights = Some(insights);
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn insights(&self) -> Option<&CareInsightCache> {
        self.insights.as_deref()
    }

    /// Persist a computed diagnosis
    ///
    /// Returns `None` if the store rejected it; the failure is logged.
    pub async fn save_diagnostic<T: AsRef<str>>(
        &self,
        plant_id: &str,
        symptoms: &[T],
        result: &DiagnosticResult,
    ) -> Option<PersistedDiagnostic> {
        let mut treatment_plan = result.treatment_plan();
        if let Some(notes) = self.care_notes(result).await {
            if let Value::Object(plan) = &mut treatment_plan {
                plan.insert("care_insights".to_string(), Value::Object(notes));
            }
        }

        let record = NewDiagnostic {
            plant_id: plant_id.to_string(),
            symptoms: symptoms.iter().map(|s| s.as_ref().to_string()).collect(),
            diagnosis: result.diagnosis_label(),
            treatment_plan,
        };

        match self.store.save(record).await {
            Ok(saved) => {
                tracing::info!("Saved diagnostic {} for plant {}", saved.id, plant_id);
                Some(saved)
            }
            Err(e) => {
                tracing::warn!("Failed to save diagnostic for plant {}: {}", plant_id, e);
                None
            }
        }
    }

    /// Diagnostic history for a plant, newest first
    ///
    /// Returns `None` if the store could not be read; the failure is logged.
    /// A plant with no records yields `Some` of an empty list.
    pub async fn get_diagnostic_history(&self, plant_id: &str) -> Option<Vec<PersistedDiagnostic>> {
        match self.store.list(plant_id).await {
            Ok(records) => Some(records),
            Err(e) => {
                tracing::warn!("Failed to load diagnostic history for plant {}: {}", plant_id, e);
                None
            }
        }
    }

    /// Mark a diagnosis resolved or open again; `false` if the update failed
    pub async fn update_diagnostic_status(&self, diagnostic_id: Uuid, resolved: bool) -> bool {
        match self.store.set_resolved(diagnostic_id, resolved).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Failed to update diagnostic {}: {}", diagnostic_id, e);
                false
            }
        }
    }

    async fn care_notes(&self, result: &DiagnosticResult) -> Option<Map<String, Value>> {
        let cache = self.insights.as_ref()?;

        let mut notes = Map::new();
        for cause in &result.possible_causes {
            let issue_notes = cache.insights(&cause.issue.name).await;
            if !issue_notes.is_empty() {
                notes.insert(cause.issue.name.clone(), Value::from(issue_notes));
            }
        }

        (!notes.is_empty()).then_some(notes)
    }
}
