//! Remediation plan synthesis
//!
//! - `types.rs` - DiagnosticResult, CareAction, PotRecommendation
//! - `actions.rs` - Urgency-tiered care actions and follow-up reminders
//! - `pots.rs` - Container guidance from root symptoms

pub mod types;
pub mod actions;
pub mod pots;

pub use types::{CareAction, DiagnosticResult, PotMaterial, PotRecommendation, Urgency};
pub use actions::{generate_action_plan, general_health_check, ActionPlan, GENERAL_CHECK_ACTION};
pub use pots::{generate_pot_recommendations, has_root_trigger, ROOT_TRIGGERS};
