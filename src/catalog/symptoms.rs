//! Built-in Symptom Catalog
//!
//! Every symptom a user can tick in the diagnostic form, grouped by the part
//! of the plant it appears on. Declaration order is the catalog order and is
//! what `get_symptoms()` returns.

use super::types::{Symptom, SymptomCategory};
use SymptomCategory::*;

/// A single catalog row
#[derive(Debug, Clone, Copy)]
pub struct SymptomDef {
    pub id: &'static str,
    pub category: SymptomCategory,
    pub name: &'static str,
    pub description: &'static str,
}

impl SymptomDef {
    pub fn to_symptom(&self) -> Symptom {
        Symptom {
            id: self.id.to_string(),
            category: self.category,
            name: self.name.to_string(),
            description: self.description.to_string(),
        }
    }
}

// ============================================================================
// EMBEDDED SYMPTOM DATA
// ============================================================================

pub static SYMPTOM_TABLE: &[SymptomDef] = &[
    // --- Leaves ---
    SymptomDef { id: "yellowing-leaves", category: Leaves, name: "Yellowing Leaves", description: "Leaves turning yellow, often starting with the lower or older leaves" },
    SymptomDef { id: "brown-leaf-tips", category: Leaves, name: "Brown Leaf Tips", description: "Tips of the leaves turning brown and dry" },
    SymptomDef { id: "brown-crispy-edges", category: Leaves, name: "Brown Crispy Edges", description: "Leaf margins browning and becoming crisp to the touch" },
    SymptomDef { id: "wilting-leaves", category: Leaves, name: "Wilting Leaves", description: "Leaves drooping and losing firmness" },
    SymptomDef { id: "leaf-drop", category: Leaves, name: "Leaf Drop", description: "Healthy-looking or yellowed leaves falling off" },
    SymptomDef { id: "leaf-spots", category: Leaves, name: "Leaf Spots", description: "Brown, black or yellow spots, sometimes with a halo" },
    SymptomDef { id: "white-powdery-coating", category: Leaves, name: "White Powdery Coating", description: "Dusty white film on the leaf surface" },
    SymptomDef { id: "curling-leaves", category: Leaves, name: "Curling Leaves", description: "Leaves curling inward, outward or cupping" },
    SymptomDef { id: "pale-leaves", category: Leaves, name: "Pale Leaves", description: "New or existing leaves looking washed out or light green" },
    SymptomDef { id: "sticky-residue", category: Leaves, name: "Sticky Residue", description: "Shiny, sticky honeydew on leaves or surfaces below the plant" },
    SymptomDef { id: "pest-presence", category: Leaves, name: "Visible Pests", description: "Insects, webbing or cottony masses on leaves and stems" },
    SymptomDef { id: "bleached-patches", category: Leaves, name: "Bleached Patches", description: "White or tan scorched patches on the leaves facing the light" },
    // --- Stems ---
    SymptomDef { id: "soft-mushy-stem", category: Stems, name: "Soft Mushy Stem", description: "Stem base feels soft, dark or collapses when pressed" },
    SymptomDef { id: "leggy-stems", category: Stems, name: "Leggy Stems", description: "Long, stretched stems with wide gaps between leaves" },
    SymptomDef { id: "stem-lesions", category: Stems, name: "Stem Lesions", description: "Sunken, discoloured or oozing areas on the stem" },
    SymptomDef { id: "drooping-stems", category: Stems, name: "Drooping Stems", description: "Stems bending over and unable to hold the plant upright" },
    // --- Roots ---
    SymptomDef { id: "root-rot", category: Roots, name: "Root Rot", description: "Brown or black roots that are mushy and smell bad" },
    SymptomDef { id: "root-bound", category: Roots, name: "Root Bound", description: "Roots circling the pot or growing out of the drainage holes" },
    SymptomDef { id: "dry-brittle-roots", category: Roots, name: "Dry Brittle Roots", description: "Roots that are shrivelled and snap easily" },
    SymptomDef { id: "salt-crust-on-soil", category: Roots, name: "Salt Crust on Soil", description: "White crust on the soil surface or pot rim" },
    SymptomDef { id: "foul-soil-odor", category: Roots, name: "Foul Soil Odor", description: "Sour or rotten smell coming from the potting mix" },
    // --- Growth ---
    SymptomDef { id: "stunted-growth", category: Growth, name: "Stunted Growth", description: "Plant is much smaller than expected for its age" },
    SymptomDef { id: "no-new-growth", category: Growth, name: "No New Growth", description: "No new leaves or shoots during the growing season" },
    SymptomDef { id: "small-new-leaves", category: Growth, name: "Small New Leaves", description: "New leaves coming in noticeably smaller than older ones" },
    SymptomDef { id: "no-flowering", category: Growth, name: "No Flowering", description: "A flowering plant that fails to bloom in season" },
];

/// Build the owned symptom list in catalog order
pub fn builtin_symptoms() -> Vec<Symptom> {
    SYMPTOM_TABLE.iter().map(SymptomDef::to_symptom).collect()
}
