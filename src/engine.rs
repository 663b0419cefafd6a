//! Diagnostic Engine - assembles ranked causes, care plan and pot guidance
//!
//! The engine borrows a read-only knowledgebase and holds no other state, so
//! one engine can serve any number of threads. Batch diagnosis runs
//! selections in parallel with Rayon.

use rayon::prelude::*;
use rustc_hash::FxHashSet;

use crate::catalog::Knowledgebase;
use crate::plan::{generate_action_plan, generate_pot_recommendations, DiagnosticResult};
use crate::scorer::rank_issues;

/// Diagnoses symptom selections against an injected knowledgebase
#[derive(Debug, Clone, Copy)]
pub struct DiagnosticEngine<'kb> {
    kb: &'kb Knowledgebase,
}

impl DiagnosticEngine<'static> {
    /// Engine over the built-in knowledgebase
    pub fn builtin() -> Self {
        Self::new(Knowledgebase::builtin())
    }
}

impl<'kb> DiagnosticEngine<'kb> {
    pub fn new(kb: &'kb Knowledgebase) -> Self {
        Self { kb }
    }

    pub fn knowledgebase(&self) -> &'kb Knowledgebase {
        self.kb
    }

    /// Diagnose one symptom selection
    ///
    /// Duplicates collapse and unknown ids are ignored. An empty selection
    /// returns `DiagnosticResult::empty()` without running any generator.
    pub fn diagnose<S: AsRef<str>>(&self, selected: &[S]) -> DiagnosticResult {
        let selection: FxHashSet<&str> = selected.iter().map(|s| s.as_ref()).collect();

        if selection.is_empty() {
            tracing::debug!("Empty symptom selection, nothing to diagnose");
            return DiagnosticResult::empty();
        }

        let possible_causes = rank_issues(self.kb, &selection);
        let plan = generate_action_plan(&possible_causes);
        let pot_recommendations = generate_pot_recommendations(&selection);

        tracing::debug!(
            "Diagnosed {} symptom(s): {} cause(s) [{}], {} action(s)",
            selection.len(),
            possible_causes.len(),
            possible_causes
                .iter()
                .map(|c| format!("{}={:.3}", c.issue.name, c.score))
                .collect::<Vec<_>>()
                .join(", "),
            plan.actions.len()
        );

        DiagnosticResult {
            possible_causes,
            recommended_actions: plan.actions,
            pot_recommendations,
            follow_up_schedule: plan.follow_up,
        }
    }

    /// Diagnose independent selections in parallel, preserving input order
    pub fn diagnose_batch<S>(&self, selections: &[Vec<S>]) -> Vec<DiagnosticResult>
    where
        S: AsRef<str> + Sync,
    {
        selections
            .par_iter()
            .map(|selected| self.diagnose(selected))
            .collect()
    }
}

/// Diagnose a selection against the built-in knowledgebase
pub fn diagnose<S: AsRef<str>>(selected: &[S]) -> DiagnosticResult {
    DiagnosticEngine::builtin().diagnose(selected)
}
