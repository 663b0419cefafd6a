//! Diagnostic Scorer + Ranker
//!
//! Scores every issue against the observed symptom set and keeps the best
//! three.
//!
//! Algorithm:
//! 1. match_count = |issue.symptoms ∩ selection|; issues with 0 are dropped
//! 2. score = (match_count / |issue.symptoms|) × issue.commonness
//!    (coverage ratio scaled by prevalence)
//! 3. Stable sort by score descending, so ties keep knowledgebase order
//! 4. Truncate to MAX_CAUSES

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::catalog::{Issue, Knowledgebase};

/// Upper bound on ranked causes returned by a diagnosis
pub const MAX_CAUSES: usize = 3;

/// Issue that survived ranking, with the numbers behind its position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedIssue {
    #[serde(flatten)]
    pub issue: Issue,
    /// Coverage ratio × commonness
    pub score: f64,
    pub match_count: usize,
    /// Observed symptoms that matched, in the issue's declaration order
    pub matched_symptoms: SmallVec<[String; 4]>,
}

impl RankedIssue {
    /// Fraction of the issue's defining symptoms that were observed
    pub fn coverage(&self) -> f64 {
        self.match_count as f64 / self.issue.symptoms.len() as f64
    }
}

/// Borrowed candidate used while ranking
#[derive(Debug, Clone, Copy)]
struct Candidate<'kb> {
    issue: &'kb Issue,
    match_count: usize,
    score: f64,
}

/// Score a single issue against the selection
///
/// Returns `None` when no defining symptom was observed.
pub fn score_issue(issue: &Issue, selection: &FxHashSet<&str>) -> Option<(usize, f64)> {
    if issue.symptoms.is_empty() {
        return None;
    }

    let match_count = issue
        .symptoms
        .iter()
        .filter(|s| selection.contains(s.as_str()))
        .count();

    if match_count == 0 {
        return None;
    }

    let coverage = match_count as f64 / issue.symptoms.len() as f64;
    Some((match_count, coverage * issue.commonness))
}

/// Rank knowledgebase issues for an already de-duplicated selection
///
/// An empty selection yields an empty ranking. Ids that no issue uses are
/// simply never matched.
pub fn rank_issues(kb: &Knowledgebase, selection: &FxHashSet<&str>) -> Vec<RankedIssue> {
    if selection.is_empty() {
        return Vec::new();
    }

    let mut candidates: Vec<Candidate> = kb
        .issues()
        .iter()
        .filter_map(|issue| {
            score_issue(issue, selection).map(|(match_count, score)| Candidate {
                issue,
                match_count,
                score,
            })
        })
        .collect();

    // sort_by is stable: equal scores stay in knowledgebase order
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
    candidates.truncate(MAX_CAUSES);

    candidates
        .into_iter()
        .map(|c| RankedIssue {
            issue: c.issue.clone(),
            score: c.score,
            match_count: c.match_count,
            matched_symptoms: c
                .issue
                .symptoms
                .iter()
                .filter(|s| selection.contains(s.as_str()))
                .cloned()
                .collect(),
        })
        .collect()
}
