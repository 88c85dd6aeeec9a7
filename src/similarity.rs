use crate::config::{NormalizationOptions, SimilarityOptions};
use crate::error::{Error, Result};
use crate::metric::{Jaccard, JaroWinkler, Levenshtein, SimilarityMetric};
use crate::normalize::{is_blank, normalize};
use tracing::{debug, trace};

/// Averages a fixed list of metrics into a two-decimal percentage.
///
/// Build one from [`SimilarityOptions`] for the stock metrics, or from an
/// arbitrary metric list with [`Aggregator::with_metrics`].
pub struct Aggregator {
    metrics: Vec<Box<dyn SimilarityMetric>>,
    normalization: Option<NormalizationOptions>,
}

impl Aggregator {
    /// Stock metrics in the fixed order Levenshtein, Jaro-Winkler, Jaccard.
    ///
    /// Fails with [`Error::InvalidConfiguration`] when no metric is enabled.
    pub fn from_options(options: &SimilarityOptions) -> Result<Self> {
        let mut metrics: Vec<Box<dyn SimilarityMetric>> = Vec::new();
        if options.use_levenshtein {
            metrics.push(Box::new(Levenshtein));
        }
        if options.use_jaro_winkler {
            metrics.push(Box::new(JaroWinkler));
        }
        if options.use_jaccard {
            metrics.push(Box::new(Jaccard));
        }
        let normalization = options
            .normalize_before_compare
            .then(|| options.normalization.clone());
        Self::with_metrics(metrics, normalization)
    }

    pub fn with_metrics(
        metrics: Vec<Box<dyn SimilarityMetric>>,
        normalization: Option<NormalizationOptions>,
    ) -> Result<Self> {
        if metrics.is_empty() {
            return Err(Error::InvalidConfiguration(
                "at least one similarity metric must be enabled".to_string(),
            ));
        }
        Ok(Aggregator {
            metrics,
            normalization,
        })
    }

    pub fn metric_names(&self) -> Vec<&'static str> {
        self.metrics.iter().map(|m| m.name()).collect()
    }

    /// Applies the configured pre-comparison pipeline, or passes the text
    /// through untouched when comparison is on raw input.
    pub fn prepare(&self, text: Option<&str>) -> String {
        match &self.normalization {
            Some(options) => normalize(text, options),
            None => text.unwrap_or_default().to_string(),
        }
    }

    pub fn percentage(&self, text: Option<&str>, candidate: Option<&str>) -> f64 {
        let text = self.prepare(text);
        let candidate = self.prepare(candidate);
        self.score_prepared(&text, &candidate)
    }

    /// Scores two already prepared strings. Blank input on either side
    /// scores `0.0`.
    pub(crate) fn score_prepared(&self, text: &str, candidate: &str) -> f64 {
        if is_blank(text) || is_blank(candidate) {
            return 0.0;
        }
        let mut total = 0.0;
        for metric in &self.metrics {
            let score = metric.similarity(text, candidate);
            trace!(metric = metric.name(), score, "metric score");
            total += score;
        }
        let percentage = round_percentage(total / self.metrics.len() as f64 * 100.0);
        debug!(text, candidate, percentage, "similarity");
        percentage
    }
}

/// Similarity of `text` and `candidate` as a percentage in `[0, 100]`.
pub fn similarity_percentage(
    text: Option<&str>,
    candidate: Option<&str>,
    options: &SimilarityOptions,
) -> Result<f64> {
    let aggregator = Aggregator::from_options(options)?;
    Ok(aggregator.percentage(text, candidate))
}

/// Rounds to two decimals, ties to even.
pub fn round_percentage(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
