//! Pot Recommendation Generator
//!
//! Container guidance is driven by the raw root symptoms, not by the ranked
//! diagnosis: a root-bound plant needs a bigger pot whatever else is wrong.
//! Triggers are independent, so several can fire for one selection.

use rustc_hash::FxHashSet;

use super::types::{PotMaterial, PotRecommendation};

/// Symptoms that produce container guidance
pub const ROOT_TRIGGERS: [&str; 3] = ["root-rot", "root-bound", "dry-brittle-roots"];

/// Fixed recommendation for one trigger symptom
#[derive(Debug, Clone, Copy)]
struct PotRule {
    trigger: &'static str,
    size: &'static str,
    material: PotMaterial,
    drainage: bool,
    reasoning: &'static str,
}

impl PotRule {
    fn to_recommendation(&self) -> PotRecommendation {
        PotRecommendation {
            size: self.size.to_string(),
            material: self.material,
            drainage: self.drainage,
            reasoning: self.reasoning.to_string(),
        }
    }
}

static POT_RULES: &[PotRule] = &[
    PotRule {
        trigger: "root-rot",
        size: "Same size or slightly smaller",
        material: PotMaterial::Terracotta,
        drainage: true,
        reasoning: "Terracotta is porous, improving air circulation and evaporation around the roots to prevent root rot from returning",
    },
    PotRule {
        trigger: "root-bound",
        size: "2-4 inches larger in diameter",
        material: PotMaterial::Ceramic,
        drainage: true,
        reasoning: "A larger pot gives the roots room to grow and spread out",
    },
    PotRule {
        trigger: "dry-brittle-roots",
        size: "Current size or slightly larger",
        material: PotMaterial::Plastic,
        drainage: true,
        reasoning: "Plastic retains moisture longer, helping dried-out roots recover",
    },
];

const FALLBACK: PotRule = PotRule {
    trigger: "",
    size: "Same size",
    material: PotMaterial::Terracotta,
    drainage: true,
    reasoning: "A breathable pot with drainage suits most recovering plants",
};

/// True if the selection contains any root trigger
pub fn has_root_trigger(selection: &FxHashSet<&str>) -> bool {
    ROOT_TRIGGERS.iter().any(|t| selection.contains(t))
}

/// Container guidance for the selection, or `None` without root symptoms
pub fn generate_pot_recommendations(selection: &FxHashSet<&str>) -> Option<Vec<PotRecommendation>> {
    if !has_root_trigger(selection) {
        return None;
    }

    let mut recommendations: Vec<PotRecommendation> = POT_RULES
        .iter()
        .filter(|rule| selection.contains(rule.trigger))
        .map(PotRule::to_recommendation)
        .collect();

    if recommendations.is_empty() {
        tracing::warn!("Root trigger matched but no pot rule applied; using default");
        recommendations.push(FALLBACK.to_recommendation());
    }

    Some(recommendations)
}
