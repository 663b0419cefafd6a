//! Diagnosis Integration Tests
//!
//! Runs full diagnoses against the built-in knowledgebase: the documented
//! scenarios plus the ordering and gating properties that must hold for any
//! selection.

use approx::assert_relative_eq;
use plant_diagnostic_rust::plan::{GENERAL_CHECK_ACTION, ROOT_TRIGGERS};
use plant_diagnostic_rust::{
    diagnose, get_symptoms, DiagnosticEngine, DiagnosticResult, Knowledgebase, PotMaterial,
    Severity, Urgency, MAX_CAUSES,
};

/// A spread of selections used for the property checks
fn sample_selections() -> Vec<Vec<String>> {
    let ids: Vec<String> = get_symptoms().iter().map(|s| s.id.clone()).collect();
    let mut selections: Vec<Vec<String>> = Vec::new();

    // Every single symptom
    for id in &ids {
        selections.push(vec![id.clone()]);
    }
    // Sliding windows of 2..=5 symptoms
    for width in 2..=5 {
        for window in ids.windows(width) {
            selections.push(window.to_vec());
        }
    }
    // Everything at once, and some noise
    selections.push(ids.clone());
    selections.push(vec!["no-such-symptom".to_string(), "leaf-drop".to_string()]);

    selections
}

fn names(result: &DiagnosticResult) -> Vec<&str> {
    result
        .possible_causes
        .iter()
        .map(|c| c.issue.name.as_str())
        .collect()
}

#[test]
fn scenario_a_overwatering() {
    let result = diagnose(&["yellowing-leaves", "soft-mushy-stem", "root-rot"]);

    assert_eq!(result.possible_causes[0].issue.name, "Overwatering");
    assert_eq!(result.possible_causes[0].match_count, 3);
    assert_relative_eq!(result.possible_causes[0].score, 0.6, epsilon = 1e-12);

    let pots = result.pot_recommendations.as_ref().expect("root-rot triggers pots");
    assert!(pots.iter().any(|p| p.material == PotMaterial::Terracotta));
}

#[test]
fn scenario_b_empty_selection() {
    let empty: Vec<String> = Vec::new();
    let result = diagnose(&empty);

    assert!(result.possible_causes.is_empty());
    assert!(result.recommended_actions.is_empty());
    assert!(result.pot_recommendations.is_none());
    assert!(result.follow_up_schedule.is_empty());

    let json = serde_json::to_value(&result).unwrap();
    assert!(json.get("pot_recommendations").is_none());
}

#[test]
fn scenario_c_pest_presence_only() {
    let result = diagnose(&["pest-presence"]);

    assert_eq!(names(&result), vec!["Pest Infestation"]);
    assert_relative_eq!(result.possible_causes[0].score, 0.125, epsilon = 1e-12);

    assert_eq!(result.recommended_actions.len(), 2);
    assert_eq!(result.recommended_actions[0].urgency, Urgency::WithinDays);
    assert_eq!(result.recommended_actions[0].action, "Monitor and treat Pest Infestation");
    assert_eq!(result.recommended_actions[1].action, GENERAL_CHECK_ACTION);
    assert_eq!(result.follow_up_schedule, vec!["Monitor Pest Infestation progress weekly"]);
}

#[test]
fn scenario_d_actions_follow_rank_order() {
    // Overwatering (high, 0.2) outranks Pest Infestation (medium, 0.125)
    let result = diagnose(&["pest-presence", "root-rot"]);

    assert_eq!(names(&result), vec!["Overwatering", "Pest Infestation"]);
    assert_eq!(result.recommended_actions[0].urgency, Urgency::Immediate);
    assert_eq!(result.recommended_actions[0].action, "Address Overwatering");
    assert_eq!(result.recommended_actions[1].urgency, Urgency::WithinDays);
    assert_eq!(
        result.follow_up_schedule,
        vec![
            "Check for Overwatering improvement in 3 days",
            "Monitor Pest Infestation progress weekly",
        ]
    );
}

#[test]
fn lower_severity_can_rank_first() {
    // Insufficient Light (low, 0.3) outranks Fungal Disease (high, 0.133):
    // the plan keeps rank order rather than sorting by urgency
    let result = diagnose(&["leggy-stems", "no-flowering", "stem-lesions"]);

    assert_eq!(result.possible_causes[0].issue.name, "Insufficient Light");
    assert_eq!(result.recommended_actions[0].urgency, Urgency::Ongoing);
    let fungal = result
        .recommended_actions
        .iter()
        .position(|a| a.action == "Address Fungal Disease")
        .expect("fungal disease ranked");
    assert!(fungal > 0);
}

#[test]
fn score_ties_break_by_knowledgebase_order() {
    // Pest Infestation and Root Bound both score 1/4 × 0.5
    let result = diagnose(&["root-bound", "pest-presence"]);
    assert_eq!(names(&result), vec!["Pest Infestation", "Root Bound"]);

    let reversed = diagnose(&["pest-presence", "root-bound"]);
    assert_eq!(names(&reversed), names(&result));
}

#[test]
fn causes_overlap_selection_and_are_sorted() {
    for selection in sample_selections() {
        let result = diagnose(&selection);

        assert!(result.possible_causes.len() <= MAX_CAUSES);
        for cause in &result.possible_causes {
            assert!(
                cause.issue.symptoms.iter().any(|s| selection.contains(s)),
                "{} shares nothing with {:?}",
                cause.issue.name,
                selection
            );
        }
        for pair in result.possible_causes.windows(2) {
            assert!(pair[0].score >= pair[1].score, "{:?}", selection);
        }
    }
}

#[test]
fn one_action_per_cause_with_matching_urgency() {
    for selection in sample_selections() {
        let result = diagnose(&selection);

        assert_eq!(result.recommended_actions.len(), result.possible_causes.len() + 1);
        assert_eq!(result.follow_up_schedule.len(), result.possible_causes.len());
        assert_eq!(
            result.recommended_actions.last().map(|a| a.action.as_str()),
            Some(GENERAL_CHECK_ACTION)
        );

        for (cause, action) in result.possible_causes.iter().zip(&result.recommended_actions) {
            let expected = match cause.issue.severity {
                Severity::High => Urgency::Immediate,
                Severity::Medium => Urgency::WithinDays,
                Severity::Low => Urgency::Ongoing,
            };
            assert_eq!(action.urgency, expected);
            assert!(action.action.ends_with(&cause.issue.name));
            assert!(action.instructions.len() <= 3);
        }
    }
}

#[test]
fn pot_recommendations_present_iff_root_trigger() {
    for selection in sample_selections() {
        let result = diagnose(&selection);
        let triggered = selection.iter().any(|s| ROOT_TRIGGERS.contains(&s.as_str()));
        assert_eq!(result.pot_recommendations.is_some(), triggered, "{:?}", selection);
    }
}

#[test]
fn pots_are_independent_of_ranked_causes() {
    // Root Bound is not in the top three here, but its pot advice still shows
    let result = diagnose(&[
        "yellowing-leaves",
        "soft-mushy-stem",
        "leaf-drop",
        "wilting-leaves",
        "brown-crispy-edges",
        "pale-leaves",
        "root-bound",
    ]);

    assert!(!result
        .possible_causes
        .iter()
        .any(|c| c.issue.name == "Root Bound"));
    let pots = result.pot_recommendations.unwrap();
    assert_eq!(pots.len(), 1);
    assert_eq!(pots[0].material, PotMaterial::Ceramic);
    assert_eq!(pots[0].size, "2-4 inches larger in diameter");
}

#[test]
fn diagnosis_is_deterministic() {
    for selection in sample_selections() {
        assert_eq!(diagnose(&selection), diagnose(&selection));
    }
}

#[test]
fn batch_matches_sequential() {
    let selections = sample_selections();
    let engine = DiagnosticEngine::new(Knowledgebase::builtin());

    let batch = engine.diagnose_batch(&selections);
    let sequential: Vec<DiagnosticResult> = selections.iter().map(|s| engine.diagnose(s)).collect();

    assert_eq!(batch, sequential);
}

#[test]
fn result_serializes_with_snake_case_tags() {
    let result = diagnose(&["root-rot"]);
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["recommended_actions"][0]["urgency"], "immediate");
    assert_eq!(json["pot_recommendations"][0]["material"], "terracotta");
    assert_eq!(json["possible_causes"][0]["name"], "Overwatering");
    assert_eq!(json["possible_causes"][0]["severity"], "high");
    assert_eq!(json["possible_causes"][0]["symptoms"][2], "root-rot");
    assert!(json["recommended_actions"][0]["expected_results"].is_string());
    assert!(json["follow_up_schedule"].is_array());

    let back: DiagnosticResult = serde_json::from_value(json).unwrap();
    assert_eq!(back, result);
}

#[test]
fn diagnosis_label_lists_ranked_causes() {
    assert_eq!(
        diagnose(&["pest-presence", "root-rot"]).diagnosis_label(),
        "Overwatering, Pest Infestation"
    );
    assert_eq!(diagnose(&["no-such-symptom"]).diagnosis_label(), "No clear diagnosis");
}
