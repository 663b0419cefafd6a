//! Built-in Issue Knowledgebase
//!
//! Candidate causes the scorer ranks. Each issue is defined by the subset of
//! catalog symptoms it produces, its severity and a prevalence weight.
//!
//! Declaration order is significant: the ranker breaks score ties by it.
//! Treatment order is significant too: the action plan takes a prefix.

use super::types::{Issue, Severity};

/// A single knowledgebase row
#[derive(Debug, Clone, Copy)]
pub struct IssueDef {
    pub name: &'static str,
    pub symptoms: &'static [&'static str],
    pub causes: &'static [&'static str],
    pub treatments: &'static [&'static str],
    pub prevention: &'static [&'static str],
    pub severity: Severity,
    pub commonness: f64,
}

impl IssueDef {
    pub fn to_issue(&self) -> Issue {
        fn owned(items: &[&str]) -> Vec<String> {
            items.iter().map(|s| s.to_string()).collect()
        }

        Issue {
            name: self.name.to_string(),
            symptoms: owned(self.symptoms),
            causes: owned(self.causes),
            treatments: owned(self.treatments),
            prevention: owned(self.prevention),
            severity: self.severity,
            commonness: self.commonness,
        }
    }
}

// ============================================================================
// EMBEDDED ISSUE DATA
// ============================================================================

pub static ISSUE_TABLE: &[IssueDef] = &[
    IssueDef {
        name: "Overwatering",
        symptoms: &["yellowing-leaves", "soft-mushy-stem", "root-rot", "leaf-drop"],
        causes: &[
            "Watering on a schedule instead of checking soil moisture",
            "Pot without drainage holes",
            "Dense potting mix that stays wet",
        ],
        treatments: &[
            "Stop watering and let the top 2-3 inches of soil dry out",
            "Remove the plant and trim any black or mushy roots",
            "Repot in fresh, well-draining mix",
            "Water only when the top inch of soil is dry",
        ],
        prevention: &[
            "Check soil moisture with a finger before watering",
            "Use pots with drainage holes",
            "Empty saucers after watering",
        ],
        severity: Severity::High,
        commonness: 0.8,
    },
    IssueDef {
        name: "Underwatering",
        symptoms: &["wilting-leaves", "brown-crispy-edges", "dry-brittle-roots", "leaf-drop"],
        causes: &[
            "Infrequent watering",
            "Potting mix that has become hydrophobic",
            "Hot, dry room conditions",
        ],
        treatments: &[
            "Bottom-water by soaking the pot for 20-30 minutes",
            "Water thoroughly until it drains from the bottom",
            "Trim fully crisp leaves",
            "Move away from heaters and hot windows",
        ],
        prevention: &[
            "Set a reminder to check soil twice a week",
            "Water more often in summer",
        ],
        severity: Severity::Medium,
        commonness: 0.7,
    },
    IssueDef {
        name: "Nutrient Deficiency",
        symptoms: &["yellowing-leaves", "pale-leaves", "stunted-growth", "small-new-leaves"],
        causes: &[
            "Potting mix exhausted after a year or more",
            "No fertilizer during the growing season",
        ],
        treatments: &[
            "Apply a balanced liquid fertilizer at half strength",
            "Feed every 2-4 weeks during spring and summer",
            "Refresh the top layer of potting mix with compost",
        ],
        prevention: &[
            "Fertilize regularly in the growing season",
            "Repot every 1-2 years",
        ],
        severity: Severity::Medium,
        commonness: 0.6,
    },
    IssueDef {
        name: "Insufficient Light",
        symptoms: &["leggy-stems", "pale-leaves", "no-new-growth", "no-flowering"],
        causes: &[
            "Plant placed too far from a window",
            "Short winter days",
        ],
        treatments: &[
            "Move the plant closer to a bright window",
            "Add a grow light for 10-12 hours a day",
            "Rotate the pot weekly for even growth",
            "Prune leggy stems to encourage bushier growth",
        ],
        prevention: &[
            "Match the plant to the light available in the room",
            "Supplement with grow lights in winter",
        ],
        severity: Severity::Low,
        commonness: 0.6,
    },
    IssueDef {
        name: "Pest Infestation",
        symptoms: &["pest-presence", "sticky-residue", "leaf-spots", "curling-leaves"],
        causes: &[
            "Pests brought in on new plants",
            "Dry indoor air favouring spider mites",
            "Overfeeding with nitrogen attracting aphids",
        ],
        treatments: &[
            "Isolate the plant from other plants",
            "Wipe leaves and spray with insecticidal soap or neem oil",
            "Repeat treatment weekly for 3-4 weeks",
            "Remove heavily infested leaves",
        ],
        prevention: &[
            "Quarantine new plants for two weeks",
            "Inspect the undersides of leaves regularly",
        ],
        severity: Severity::Medium,
        commonness: 0.5,
    },
    IssueDef {
        name: "Fungal Disease",
        symptoms: &["white-powdery-coating", "leaf-spots", "stem-lesions"],
        causes: &[
            "Poor air circulation",
            "Water sitting on the leaves",
            "High humidity with cool temperatures",
        ],
        treatments: &[
            "Remove and dispose of affected leaves",
            "Apply a fungicide or a baking soda spray",
            "Improve airflow around the plant",
            "Water at the soil level instead of over the leaves",
        ],
        prevention: &[
            "Space plants for good air movement",
            "Water in the morning so leaves dry quickly",
        ],
        severity: Severity::High,
        commonness: 0.4,
    },
    IssueDef {
        name: "Root Bound",
        symptoms: &["root-bound", "stunted-growth", "wilting-leaves", "no-new-growth"],
        causes: &[
            "Plant has outgrown its container",
            "Several years without repotting",
        ],
        treatments: &[
            "Repot into a container 2-4 inches larger",
            "Gently loosen circling roots before repotting",
            "Water thoroughly after repotting",
        ],
        prevention: &[
            "Check the drainage holes for roots each spring",
            "Repot actively growing plants every 1-2 years",
        ],
        severity: Severity::Medium,
        commonness: 0.5,
    },
    IssueDef {
        name: "Low Humidity",
        symptoms: &["brown-leaf-tips", "brown-crispy-edges", "curling-leaves"],
        causes: &[
            "Heating or air conditioning drying the air",
            "Tropical plant in a dry room",
        ],
        treatments: &[
            "Group plants together to raise local humidity",
            "Place the pot on a pebble tray with water",
            "Run a humidifier nearby",
        ],
        prevention: &[
            "Keep humidity-loving plants away from vents",
            "Use a hygrometer to monitor room humidity",
        ],
        severity: Severity::Low,
        commonness: 0.5,
    },
    IssueDef {
        name: "Sun Scorch",
        symptoms: &["bleached-patches", "brown-crispy-edges", "wilting-leaves"],
        causes: &[
            "Sudden move into direct sun",
            "Intense afternoon sun through glass",
        ],
        treatments: &[
            "Move the plant out of direct afternoon sun",
            "Filter light with a sheer curtain",
            "Trim badly scorched leaves",
        ],
        prevention: &[
            "Acclimate plants to brighter light over 1-2 weeks",
        ],
        severity: Severity::Medium,
        commonness: 0.3,
    },
    IssueDef {
        name: "Fertilizer Burn",
        symptoms: &["brown-leaf-tips", "salt-crust-on-soil", "wilting-leaves"],
        causes: &[
            "Fertilizer applied too often or too strong",
            "Feeding a dry plant",
        ],
        treatments: &[
            "Flush the soil with plenty of water to leach salts",
            "Remove the white crust from the soil surface",
            "Pause feeding for 4-6 weeks",
        ],
        prevention: &[
            "Dilute fertilizer to half the label strength",
            "Always water before feeding",
        ],
        severity: Severity::Medium,
        commonness: 0.3,
    },
    IssueDef {
        name: "Bacterial Soft Rot",
        symptoms: &["soft-mushy-stem", "stem-lesions", "foul-soil-odor"],
        causes: &[
            "Bacteria entering through wounds",
            "Warm, waterlogged conditions",
        ],
        treatments: &[
            "Cut away all soft tissue with a sterilized blade",
            "Take healthy cuttings if the base is lost",
            "Discard infected soil and disinfect the pot",
        ],
        prevention: &[
            "Sterilize pruning tools",
            "Avoid wetting the stem base",
        ],
        severity: Severity::High,
        commonness: 0.3,
    },
    IssueDef {
        name: "Temperature Stress",
        symptoms: &["leaf-drop", "curling-leaves", "drooping-stems"],
        causes: &[
            "Cold drafts from doors or windows",
            "Placement next to a radiator or vent",
        ],
        treatments: &[
            "Move the plant to a spot with a steady temperature",
            "Keep it away from drafts and heat sources",
            "Hold off on fertilizer until it recovers",
        ],
        prevention: &[
            "Keep most houseplants between 15-27°C",
        ],
        severity: Severity::Medium,
        commonness: 0.4,
    },
];

/// Build the owned issue list in knowledgebase order
pub fn builtin_issues() -> Vec<Issue> {
    ISSUE_TABLE.iter().map(IssueDef::to_issue).collect()
}
