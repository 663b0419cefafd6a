use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::scorer::RankedIssue;

/// Complete output of one diagnostic session
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DiagnosticResult {
    /// Ranked shortlist, best first (at most 3)
    pub possible_causes: Vec<RankedIssue>,
    pub recommended_actions: Vec<CareAction>,
    /// Present only when root symptoms were observed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pot_recommendations: Option<Vec<PotRecommendation>>,
    pub follow_up_schedule: Vec<String>,
}

impl DiagnosticResult {
    /// Result for an empty selection: every field empty
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.possible_causes.is_empty()
            && self.recommended_actions.is_empty()
            && self.pot_recommendations.is_none()
            && self.follow_up_schedule.is_empty()
    }

    /// Human-readable diagnosis, e.g. "Overwatering, Nutrient Deficiency"
    pub fn diagnosis_label(&self) -> String {
        if self.possible_causes.is_empty() {
            return "No clear diagnosis".to_string();
        }

        self.possible_causes
            .iter()
            .map(|c| c.issue.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Snapshot of the remediation plan as stored alongside a diagnosis
    pub fn treatment_plan(&self) -> serde_json::Value {
        json!({
            "recommended_actions": self.recommended_actions,
            "pot_recommendations": self.pot_recommendations,
            "follow_up_schedule": self.follow_up_schedule,
        })
    }
}

/// How soon a care action should happen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Immediate,
    WithinDays,
    Ongoing,
}

impl Urgency {
    pub fn display_name(&self) -> &'static str {
        match self {
            Urgency::Immediate => "Immediate",
            Urgency::WithinDays => "Within days",
            Urgency::Ongoing => "Ongoing",
        }
    }
}

/// One step of the remediation plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareAction {
    pub action: String,
    pub urgency: Urgency,
    pub instructions: Vec<String>,
    pub expected_results: String,
    pub timeframe: String,
}

/// Container material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PotMaterial {
    Terracotta,
    Ceramic,
    Plastic,
    Fabric,
    Hanging,
}

/// Container guidance derived from root symptoms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PotRecommendation {
    pub size: String,
    pub material: PotMaterial,
    pub drainage: bool,
    pub reasoning: String,
}
