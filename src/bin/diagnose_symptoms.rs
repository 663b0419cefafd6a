// Diagnose a symptom selection from the command line and print the result
//
// Usage: cargo run --bin diagnose_symptoms -- yellowing-leaves root-rot
//
// PLANT_KB_PATH  - JSON knowledgebase to use instead of the built-in one
// PLANT_ID       - if set, the result is also saved to an in-memory store
// PLANT_NOTE     - optional care note attached to the top cause before saving

use plant_diagnostic_rust::{
    CareInsightCache, DiagnosticEngine, DiagnosticRecorder, InMemoryDiagnosticStore, Knowledgebase,
};
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "plant_diagnostic_rust=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let symptoms: Vec<String> = std::env::args().skip(1).collect();

    let loaded = match std::env::var("PLANT_KB_PATH") {
        Ok(path) => Some(Knowledgebase::load(Path::new(&path))?),
        Err(_) => None,
    };
    let kb = loaded.as_ref().unwrap_or_else(|| Knowledgebase::builtin());

    if symptoms.is_empty() {
        tracing::info!("No symptoms given. Known symptom ids:");
        for symptom in kb.symptoms() {
            tracing::info!("  {:<22} {}", symptom.id, symptom.name);
        }
    }

    let engine = DiagnosticEngine::new(kb);
    let result = engine.diagnose(&symptoms);

    println!("{}", serde_json::to_string_pretty(&result)?);

    if let Ok(plant_id) = std::env::var("PLANT_ID") {
        let insights = Arc::new(CareInsightCache::new());
        if let (Ok(note), Some(top)) = (std::env::var("PLANT_NOTE"), result.possible_causes.first()) {
            insights.record(&top.issue.name, &note).await;
        }

        let recorder =
            DiagnosticRecorder::new(InMemoryDiagnosticStore::new()).with_insights(insights);
        match recorder.save_diagnostic(&plant_id, &symptoms, &result).await {
            Some(saved) => tracing::info!("Recorded as {} ({})", saved.id, saved.diagnosis),
            None => tracing::warn!("Diagnosis computed but not recorded"),
        }
    }

    Ok(())
}
