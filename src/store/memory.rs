use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{DiagnosticStore, NewDiagnostic, PersistedDiagnostic, StoreError};

/// In-process store kept in insertion order
#[derive(Debug, Default)]
pub struct InMemoryDiagnosticStore {
    records: RwLock<Vec<PersistedDiagnostic>>,
    /// When set, every call fails with `StoreError::Unavailable`
    outage: Option<String>,
}

impl InMemoryDiagnosticStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that rejects every call, for exercising failure handling
    pub fn unavailable(reason: &str) -> Self {
        Self {
            records: RwLock::default(),
            outage: Some(reason.to_string()),
        }
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    fn check_available(&self) -> Result<(), StoreError> {
        match &self.outage {
            Some(reason) => Err(StoreError::Unavailable(reason.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl DiagnosticStore for InMemoryDiagnosticStore {
    async fn save(&self, record: NewDiagnostic) -> Result<PersistedDiagnostic, StoreError> {
        self.check_available()?;

        let persisted = PersistedDiagnostic {
            id: Uuid::new_v4(),
            plant_id: record.plant_id,
            symptoms: record.symptoms,
            diagnosis: record.diagnosis,
            treatment_plan: record.treatment_plan,
            resolved: false,
            created_at: Utc::now(),
        };

        self.records.write().await.push(persisted.clone());
        Ok(persisted)
    }

    async fn list(&self, plant_id: &str) -> Result<Vec<PersistedDiagnostic>, StoreError> {
        self.check_available()?;

        // Reverse insertion order first so records sharing a timestamp are
        // still newest first after the stable sort
        let mut records: Vec<PersistedDiagnostic> = self
            .records
            .read()
            .await
            .iter()
            .rev()
            .filter(|r| r.plant_id == plant_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(records)
    }

    async fn set_resolved(&self, id: Uuid, resolved: bool) -> Result<(), StoreError> {
        self.check_available()?;

        let mut records = self.records.write().await;
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(StoreError::NotFound(id))?;
        record.resolved = resolved;
        Ok(())
    }
}
