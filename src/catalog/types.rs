use serde::{Deserialize, Serialize};

/// Part of the plant a symptom is observed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymptomCategory {
    Leaves,
    Stems,
    Roots,
    Growth,
}

impl SymptomCategory {
    /// Friendly name for display
    pub fn display_name(&self) -> &'static str {
        match self {
            SymptomCategory::Leaves => "Leaves",
            SymptomCategory::Stems => "Stems",
            SymptomCategory::Roots => "Roots",
            SymptomCategory::Growth => "Growth",
        }
    }

    /// Get all categories in catalog order
    pub fn all() -> &'static [SymptomCategory] {
        &[
            SymptomCategory::Leaves,
            SymptomCategory::Stems,
            SymptomCategory::Roots,
            SymptomCategory::Growth,
        ]
    }
}

/// A user-observable plant condition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Symptom {
    pub id: String,
    pub category: SymptomCategory,
    pub name: String,
    pub description: String,
}

/// How serious an issue is left untreated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// A candidate cause, defined by the symptoms it produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub name: String,
    /// Defining symptom ids, in declaration order
    pub symptoms: Vec<String>,
    pub causes: Vec<String>,
    /// Ordered: the action plan takes a prefix of this list
    pub treatments: Vec<String>,
    pub prevention: Vec<String>,
    pub severity: Severity,
    /// Prevalence weight in [0, 1]
    pub commonness: f64,
}

impl Issue {
    /// True if `symptom_id` is one of this issue's defining symptoms
    pub fn has_symptom(&self, symptom_id: &str) -> bool {
        self.symptoms.iter().any(|s| s == symptom_id)
    }
}
