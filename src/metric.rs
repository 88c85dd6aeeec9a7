use std::collections::HashSet;
use strsim::{jaro_winkler, normalized_levenshtein};

/// A string similarity function scoring two strings in `[0.0, 1.0]`.
///
/// Implementations must be stateless so one instance can be shared across
/// threads and calls.
pub trait SimilarityMetric: Send + Sync {
    fn similarity(&self, a: &str, b: &str) -> f64;

    fn name(&self) -> &'static str;
}

/// `1 - edit_distance / max(len_a, len_b)`, lengths counted in chars.
#[derive(Debug, Clone, Copy, Default)]
pub struct Levenshtein;

impl SimilarityMetric for Levenshtein {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        normalized_levenshtein(a, b)
    }

    fn name(&self) -> &'static str {
        "Levenshtein"
    }
}

/// Jaro similarity boosted for shared prefixes (up to four chars).
#[derive(Debug, Clone, Copy, Default)]
pub struct JaroWinkler;

impl SimilarityMetric for JaroWinkler {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        jaro_winkler(a, b)
    }

    fn name(&self) -> &'static str {
        "JaroWinkler"
    }
}

/// Jaccard index over the sets of whitespace-separated tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct Jaccard;

impl SimilarityMetric for Jaccard {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        let tokens_a: HashSet<&str> = a.split_whitespace().collect();
        let tokens_b: HashSet<&str> = b.split_whitespace().collect();
        let union = tokens_a.union(&tokens_b).count();
        if union == 0 {
            return 1.0;
        }
        let intersection = tokens_a.intersection(&tokens_b).count();
        intersection as f64 / union as f64
    }

    fn name(&self) -> &'static str {
        "Jaccard"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stock() -> Vec<Box<dyn SimilarityMetric>> {
        vec![Box::new(Levenshtein), Box::new(JaroWinkler), Box::new(Jaccard)]
    }

    #[test]
    fn test_identical_strings_score_one() {
        for metric in stock() {
            for s in ["abc", "attack on titan", "a", "進撃の巨人"] {
                assert_eq!(metric.similarity(s, s), 1.0, "{} failed for '{}'", metric.name(), s);
            }
        }
    }

    #[test]
    fn test_levenshtein_scores() {
        assert_eq!(Levenshtein.similarity("abc", "xyz"), 0.0);
        assert!((Levenshtein.similarity("abc", "ab") - 2.0 / 3.0).abs() < 1e-12);
        assert!((Levenshtein.similarity("kitten", "sitting") - (1.0 - 3.0 / 7.0)).abs() < 1e-12);
    }

    #[test]
    fn test_jaro_winkler_prefers_shared_prefix() {
        let prefixed = JaroWinkler.similarity("martha", "marhta");
        assert!((prefixed - 0.9611).abs() < 1e-3);
        assert!(JaroWinkler.similarity("abc", "xyz") < 0.5);
    }

    #[test]
    fn test_jaccard_token_sets() {
        assert_eq!(Jaccard.similarity("the quick fox", "the lazy fox"), 0.5);
        assert_eq!(Jaccard.similarity("a b", "c d"), 0.0);
        // duplicates collapse into the set
        assert_eq!(Jaccard.similarity("a a b", "b a"), 1.0);
        assert_eq!(Jaccard.similarity("", "  "), 1.0);
        assert_eq!(Jaccard.similarity("abc", ""), 0.0);
    }

    #[test]
    fn test_symmetric_metrics() {
        let pairs = [("bleach", "breach"), ("one piece", "piece one"), ("abc", "")];
        for (a, b) in pairs {
            assert_eq!(Levenshtein.similarity(a, b), Levenshtein.similarity(b, a));
            assert_eq!(Jaccard.similarity(a, b), Jaccard.similarity(b, a));
        }
    }

    #[test]
    fn test_scores_are_bounded() {
        let pairs = [("naruto", "bleach"), ("", "something"), ("a", ""), ("ab cd", "cd")];
        for metric in stock() {
            for (a, b) in pairs {
                let score = metric.similarity(a, b);
                assert!((0.0..=1.0).contains(&score), "{} out of bounds: {}", metric.name(), score);
            }
        }
    }

    #[test]
    fn test_metric_names() {
        assert_eq!(Levenshtein.name(), "Levenshtein");
        assert_eq!(JaroWinkler.name(), "JaroWinkler");
        assert_eq!(Jaccard.name(), "Jaccard");
    }
}
