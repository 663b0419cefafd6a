//! Action Plan Generator
//!
//! Turns the ranked shortlist into care actions, one per issue in rank
//! order, followed by a fixed general health check. Urgency comes from
//! severity; the plan is not re-sorted by urgency.

use super::types::{CareAction, Urgency};
use crate::catalog::Severity;
use crate::scorer::RankedIssue;

/// Treatments copied into an immediate (high severity) action
const IMMEDIATE_INSTRUCTIONS: usize = 3;
/// Treatments copied into a monitor-and-treat action
const MONITOR_INSTRUCTIONS: usize = 2;

pub const GENERAL_CHECK_ACTION: &str = "General Plant Health Check";

const GENERAL_CHECK_INSTRUCTIONS: [&str; 4] = [
    "Check soil moisture before each watering",
    "Inspect leaves and stems weekly for new symptoms",
    "Make sure the plant gets suitable light and airflow",
    "Remove dead or dying leaves and debris",
];

/// Care actions plus the reminders that go with them
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ActionPlan {
    pub actions: Vec<CareAction>,
    pub follow_up: Vec<String>,
}

impl Urgency {
    /// Urgency tier for an issue of the given severity
    pub fn from_severity(severity: Severity) -> Self {
        match severity {
            Severity::High => Urgency::Immediate,
            Severity::Medium => Urgency::WithinDays,
            Severity::Low => Urgency::Ongoing,
        }
    }
}

/// Build the action plan for a non-empty selection
///
/// Always ends with the general health check, even when nothing ranked.
pub fn generate_action_plan(ranked: &[RankedIssue]) -> ActionPlan {
    let mut plan = ActionPlan::default();

    for ranked_issue in ranked {
        let (action, follow_up) = action_for_issue(ranked_issue);
        plan.actions.push(action);
        plan.follow_up.push(follow_up);
    }

    plan.actions.push(general_health_check());
    plan
}

fn action_for_issue(ranked: &RankedIssue) -> (CareAction, String) {
    let issue = &ranked.issue;
    let urgency = Urgency::from_severity(issue.severity);

    match issue.severity {
        Severity::High => (
            CareAction {
                action: format!("Address {}", issue.name),
                urgency,
                instructions: first_treatments(&issue.treatments, IMMEDIATE_INSTRUCTIONS),
                expected_results: "Symptoms should begin to improve within 3-7 days".to_string(),
                timeframe: "1-2 weeks".to_string(),
            },
            format!("Check for {} improvement in 3 days", issue.name),
        ),
        Severity::Medium | Severity::Low => (
            CareAction {
                action: format!("Monitor and treat {}", issue.name),
                urgency,
                instructions: first_treatments(&issue.treatments, MONITOR_INSTRUCTIONS),
                expected_results: "Gradual improvement over 1-2 weeks".to_string(),
                timeframe: "2-4 weeks".to_string(),
            },
            format!("Monitor {} progress weekly", issue.name),
        ),
    }
}

fn first_treatments(treatments: &[String], n: usize) -> Vec<String> {
    treatments.iter().take(n).cloned().collect()
}

/// The trailing checklist appended to every non-empty plan
pub fn general_health_check() -> CareAction {
    CareAction {
        action: GENERAL_CHECK_ACTION.to_string(),
        urgency: Urgency::Ongoing,
        instructions: GENERAL_CHECK_INSTRUCTIONS.iter().map(|s| s.to_string()).collect(),
        expected_results: "Maintained plant health and early problem detection".to_string(),
        timeframe: "Ongoing".to_string(),
    }
}
