//! Knowledgebase Integrity Checks
//!
//! Catches authoring mistakes in the symptom catalog and issue table: an
//! issue pointing at a symptom that does not exist, duplicate keys, weights
//! outside [0, 1]. The built-in tables are covered by tests; JSON documents
//! are checked when loaded.

use rustc_hash::FxHashSet;
use thiserror::Error;

use super::Knowledgebase;

/// A single integrity defect
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KnowledgebaseDefect {
    #[error("duplicate symptom id '{0}'")]
    DuplicateSymptomId(String),

    #[error("duplicate issue name '{0}'")]
    DuplicateIssueName(String),

    #[error("issue '{0}' has no defining symptoms")]
    EmptySymptomSet(String),

    #[error("issue '{issue}' references unknown symptom '{symptom}'")]
    UnknownSymptom { issue: String, symptom: String },

    #[error("issue '{issue}' lists symptom '{symptom}' more than once")]
    RepeatedSymptom { issue: String, symptom: String },

    #[error("issue '{issue}' has commonness {value} outside [0, 1]")]
    CommonnessOutOfRange { issue: String, value: f64 },

    #[error("issue '{0}' has no treatments")]
    NoTreatments(String),
}

/// Knowledgebase failed validation
#[derive(Debug, Clone, PartialEq, Error)]
#[error("knowledgebase has {} defect(s): {}", .defects.len(), summarize(.defects))]
pub struct KnowledgebaseError {
    pub defects: Vec<KnowledgebaseDefect>,
}

fn summarize(defects: &[KnowledgebaseDefect]) -> String {
    defects
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Validate a knowledgebase, reporting every defect found
pub fn validate(kb: &Knowledgebase) -> Result<(), KnowledgebaseError> {
    let mut defects = Vec::new();

    let mut symptom_ids: FxHashSet<&str> = FxHashSet::default();
    for symptom in kb.symptoms() {
        if !symptom_ids.insert(symptom.id.as_str()) {
            defects.push(KnowledgebaseDefect::DuplicateSymptomId(symptom.id.clone()));
        }
    }

    let mut issue_names: FxHashSet<&str> = FxHashSet::default();
    for issue in kb.issues() {
        if !issue_names.insert(issue.name.as_str()) {
            defects.push(KnowledgebaseDefect::DuplicateIssueName(issue.name.clone()));
        }

        if issue.symptoms.is_empty() {
            defects.push(KnowledgebaseDefect::EmptySymptomSet(issue.name.clone()));
        }

        let mut seen: FxHashSet<&str> = FxHashSet::default();
        for symptom in &issue.symptoms {
            if !symptom_ids.contains(symptom.as_str()) {
                defects.push(KnowledgebaseDefect::UnknownSymptom {
                    issue: issue.name.clone(),
                    symptom: symptom.clone(),
                });
            }
            if !seen.insert(symptom.as_str()) {
                defects.push(KnowledgebaseDefect::RepeatedSymptom {
                    issue: issue.name.clone(),
                    symptom: symptom.clone(),
                });
            }
        }

        // NaN fails both comparisons, so check finiteness explicitly
        if !issue.commonness.is_finite() || !(0.0..=1.0).contains(&issue.commonness) {
            defects.push(KnowledgebaseDefect::CommonnessOutOfRange {
                issue: issue.name.clone(),
                value: issue.commonness,
            });
        }

        if issue.treatments.is_empty() {
            defects.push(KnowledgebaseDefect::NoTreatments(issue.name.clone()));
        }
    }

    if defects.is_empty() {
        Ok(())
    } else {
        Err(KnowledgebaseError { defects })
    }
}
