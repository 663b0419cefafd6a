//! Symptom Catalog and Issue Knowledgebase
//!
//! Read-only reference data for the diagnostic engine.
//!
//! ## Architecture
//! - `types.rs` - Symptom / Issue records and their enums
//! - `symptoms.rs` - Built-in symptom catalog (static table)
//! - `issues.rs` - Built-in issue knowledgebase (static table)
//! - `validation.rs` - Integrity checks over a knowledgebase
//!
//! The built-in tables are materialized once per process. An alternative
//! knowledgebase can be loaded from JSON and injected into a
//! `DiagnosticEngine`; nothing mutates a knowledgebase after construction.

pub mod types;
pub mod symptoms;
pub mod issues;
pub mod validation;

pub use types::{Issue, Severity, Symptom, SymptomCategory};
pub use validation::{validate, KnowledgebaseDefect, KnowledgebaseError};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// Symptom catalog plus the issues defined over it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Knowledgebase {
    symptoms: Vec<Symptom>,
    issues: Vec<Issue>,
}

static BUILTIN: OnceLock<Knowledgebase> = OnceLock::new();

impl Knowledgebase {
    /// Unchecked constructor for tables already known to be consistent
    pub(crate) fn new(symptoms: Vec<Symptom>, issues: Vec<Issue>) -> Self {
        Self { symptoms, issues }
    }

    /// Build a knowledgebase from owned tables, rejecting any integrity defect
    pub fn try_new(symptoms: Vec<Symptom>, issues: Vec<Issue>) -> Result<Self, KnowledgebaseError> {
        let kb = Self::new(symptoms, issues);
        validate(&kb)?;
        Ok(kb)
    }

    /// The process-wide built-in knowledgebase
    pub fn builtin() -> &'static Knowledgebase {
        BUILTIN.get_or_init(|| {
            Knowledgebase::new(symptoms::builtin_symptoms(), issues::builtin_issues())
        })
    }

    /// Load a knowledgebase from a JSON document
    ///
    /// Expected shape: `{ "symptoms": [...], "issues": [...] }`.
    /// The document is validated before it is returned.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read knowledgebase file: {:?}", path))?;

        let kb = Self::from_json(&contents)
            .with_context(|| format!("Invalid knowledgebase in {:?}", path))?;

        tracing::info!(
            "Loaded knowledgebase from {:?} ({} symptoms, {} issues)",
            path,
            kb.symptoms.len(),
            kb.issues.len()
        );

        Ok(kb)
    }

    /// Parse and validate a knowledgebase from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let kb: Knowledgebase = serde_json::from_str(json)
            .with_context(|| "Failed to parse knowledgebase JSON")?;
        validate(&kb)?;
        Ok(kb)
    }

    /// All symptoms in catalog order
    pub fn symptoms(&self) -> &[Symptom] {
        &self.symptoms
    }

    /// Symptoms of one category, in catalog order
    pub fn symptoms_by_category(&self, category: SymptomCategory) -> Vec<&Symptom> {
        self.symptoms
            .iter()
            .filter(|s| s.category == category)
            .collect()
    }

    pub fn symptom(&self, id: &str) -> Option<&Symptom> {
        self.symptoms.iter().find(|s| s.id == id)
    }

    /// All issues in declaration order (the ranker's tie-break order)
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn issue(&self, name: &str) -> Option<&Issue> {
        self.issues.iter().find(|i| i.name == name)
    }
}

/// Full built-in symptom catalog, in catalog order
pub fn get_symptoms() -> &'static [Symptom] {
    Knowledgebase::builtin().symptoms()
}

/// Built-in symptoms of one category, in catalog order
pub fn get_symptoms_by_category(category: SymptomCategory) -> Vec<&'static Symptom> {
    Knowledgebase::builtin().symptoms_by_category(category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_symptoms_is_stable() {
        let first: Vec<&str> = get_symptoms().iter().map(|s| s.id.as_str()).collect();
        let second: Vec<&str> = get_symptoms().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), symptoms::SYMPTOM_TABLE.len());
        assert_eq!(first[0], "yellowing-leaves");
    }

    #[test]
    fn test_symptoms_by_category_preserves_order() {
        let roots: Vec<&str> = get_symptoms_by_category(SymptomCategory::Roots)
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(
            roots,
            vec!["root-rot", "root-bound", "dry-brittle-roots", "salt-crust-on-soil", "foul-soil-odor"]
        );

        // Categories partition the catalog
        let total: usize = SymptomCategory::all()
            .iter()
            .map(|c| get_symptoms_by_category(*c).len())
            .sum();
        assert_eq!(total, get_symptoms().len());
    }

    #[test]
    fn test_lookup_by_id_and_name() {
        let kb = Knowledgebase::builtin();
        assert_eq!(kb.symptom("leggy-stems").map(|s| s.category), Some(SymptomCategory::Stems));
        assert!(kb.symptom("not-a-symptom").is_none());
        assert_eq!(kb.issue("Overwatering").map(|i| i.severity), Some(Severity::High));
    }

    #[test]
    fn test_from_json_roundtrips_builtin() {
        let json = serde_json::to_string(Knowledgebase::builtin()).unwrap();
        let kb = Knowledgebase::from_json(&json).unwrap();
        assert_eq!(kb.symptoms(), Knowledgebase::builtin().symptoms());
        assert_eq!(kb.issues(), Knowledgebase::builtin().issues());
    }

    #[test]
    fn test_from_json_rejects_dangling_symptom() {
        let json = r#"{
            "symptoms": [
                { "id": "leaf-drop", "category": "leaves", "name": "Leaf Drop", "description": "" }
            ],
            "issues": [
                {
                    "name": "Drafts",
                    "symptoms": ["leaf-drop", "cold-leaves"],
                    "causes": [],
                    "treatments": ["Move away from the door"],
                    "prevention": [],
                    "severity": "low",
                    "commonness": 0.2
                }
            ]
        }"#;

        let err = Knowledgebase::from_json(json).unwrap_err();
        let root = err.downcast_ref::<KnowledgebaseError>().unwrap();
        assert_eq!(root.defects.len(), 1);
    }

    #[test]
    fn test_try_new_validates_tables() {
        let symptoms = Knowledgebase::builtin().symptoms().to_vec();
        let mut issues = Knowledgebase::builtin().issues().to_vec();
        assert!(Knowledgebase::try_new(symptoms.clone(), issues.clone()).is_ok());

        issues[0].symptoms.push("root-rot".to_string());
        let err = Knowledgebase::try_new(symptoms, issues).unwrap_err();
        assert_eq!(
            err.defects,
            vec![KnowledgebaseDefect::RepeatedSymptom {
                issue: "Overwatering".to_string(),
                symptom: "root-rot".to_string(),
            }]
        );
    }

    #[test]
    fn test_load_missing_file_has_context() {
        let err = Knowledgebase::load(Path::new("/nonexistent/kb.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read knowledgebase file"));
    }
}
