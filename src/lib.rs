pub mod config;
pub mod convert;
pub mod error;
pub mod metric;
pub mod normalize;
pub mod rank;
pub mod similarity;

pub use config::{
    CharacterClass, Locale, NormalizationOptions, SimilarityOptions, SpacePolicy, TextCase,
    TrimMode,
};
pub use error::{Error, Result};
pub use metric::{Jaccard, JaroWinkler, Levenshtein, SimilarityMetric};
pub use normalize::normalize;
pub use rank::{rank_similarities, SimilarityResult};
pub use similarity::{similarity_percentage, Aggregator};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_end_to_end() {
        let options = SimilarityOptions::all_metrics();
        let results = rank_similarities(
            Some("  Résumé  writing "),
            &["resume writing", "Resume Writer", "cover letter", ""],
            &options,
        )
        .unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].label, "resume writing");
        assert_eq!(results[0].percentage, 100.0);
        assert_eq!(results[1].label, "resume writer");
        assert!(results[1].percentage > results[2].percentage);
    }

    #[test]
    fn test_determinism() {
        let options = SimilarityOptions::all_metrics();
        let candidates = ["alpha", "alphabet", "beta", "alpah"];
        let r1 = rank_similarities(Some("alpha"), &candidates, &options).unwrap();
        let r2 = rank_similarities(Some("alpha"), &candidates, &options).unwrap();
        assert_eq!(r1, r2);
    }
}
