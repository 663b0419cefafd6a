//! Care Insight Cache
//!
//! Holds extra care notes gathered outside the diagnostic core (for example
//! tips returned by the chat assistant), keyed by issue name. The cache is
//! injected by the host, typically into a `DiagnosticRecorder`, and is the
//! only mutable knowledge store: the diagnostic knowledgebase itself is never
//! written after load.

use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;

const MAX_ISSUES: u64 = 1_000;
const NOTE_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Shareable map of issue name -> care notes
#[derive(Clone)]
pub struct CareInsightCache {
    notes: Cache<String, Arc<Vec<String>>>,
}

impl Default for CareInsightCache {
    fn default() -> Self {
        Self::new()
    }
}

impl CareInsightCache {
    pub fn new() -> Self {
        Self {
            notes: Cache::builder()
                .max_capacity(MAX_ISSUES)
                .time_to_live(NOTE_TTL)
                .build(),
        }
    }

    /// Record a note for an issue; identical notes are kept once
    ///
    /// Returns `true` if the note was new.
    pub async fn record(&self, issue: &str, note: &str) -> bool {
        let mut added = false;

        self.notes
            .entry(issue.to_string())
            .and_upsert_with(|existing| {
                let mut notes: Vec<String> = existing
                    .map(|entry| entry.into_value().as_ref().clone())
                    .unwrap_or_default();
                if !notes.iter().any(|n| n == note) {
                    notes.push(note.to_string());
                    added = true;
                }
                std::future::ready(Arc::new(notes))
            })
            .await;

        added
    }

    /// Notes for an issue in recording order
    pub async fn insights(&self, issue: &str) -> Vec<String> {
        self.notes
            .get(issue)
            .await
            .map(|notes| notes.as_ref().clone())
            .unwrap_or_default()
    }

    /// Number of issues with at least one note
    pub async fn len(&self) -> u64 {
        self.notes.run_pending_tasks().await;
        self.notes.entry_count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    pub async fn clear(&self) {
        self.notes.invalidate_all();
        self.notes.run_pending_tasks().await;
    }
}
