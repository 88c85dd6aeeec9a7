use crate::config::SimilarityOptions;
use crate::error::Result;
use crate::normalize::is_blank;
use crate::similarity::Aggregator;
use serde::Serialize;
use std::cmp::Ordering;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityResult {
    /// The candidate as compared, i.e. after the pre-comparison pipeline.
    pub label: String,
    pub percentage: f64,
}

impl Aggregator {
    /// Scores every non-blank candidate against `text`, best match first.
    ///
    /// Equal percentages are ordered by ascending label.
    pub fn rank<S: AsRef<str>>(&self, text: Option<&str>, candidates: &[S]) -> Vec<SimilarityResult> {
        let text = self.prepare(text);
        let labels: Vec<String> = candidates
            .iter()
            .map(|c| self.prepare(Some(c.as_ref())))
            .filter(|c| !is_blank(c))
            .collect();

        if is_blank(&text) || labels.is_empty() {
            return Vec::new();
        }

        let mut results: Vec<SimilarityResult> = labels
            .into_iter()
            .map(|label| {
                let percentage = self.score_prepared(&text, &label);
                SimilarityResult { label, percentage }
            })
            .collect();
        results.sort_by(ranking_order);

        debug!(
            candidates = candidates.len(),
            ranked = results.len(),
            best = results.first().map(|r| r.percentage),
            "ranked candidates"
        );
        results
    }
}

/// Ranks `candidates` by similarity to `text`.
pub fn rank_similarities<S: AsRef<str>>(
    text: Option<&str>,
    candidates: &[S],
    options: &SimilarityOptions,
) -> Result<Vec<SimilarityResult>> {
    let aggregator = Aggregator::from_options(options)?;
    Ok(aggregator.rank(text, candidates))
}

fn ranking_order(a: &SimilarityResult, b: &SimilarityResult) -> Ordering {
    b.percentage
        .total_cmp(&a.percentage)
        .then_with(|| a.label.cmp(&b.label))
}
