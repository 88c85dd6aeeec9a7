use crate::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TrimMode {
    #[default]
    Trim,
    TrimStart,
    TrimEnd,
    #[serde(other)]
    None,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TextCase {
    #[default]
    Lower,
    Upper,
    TitleCase,
    #[serde(other)]
    None,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CharacterClass {
    LettersOnly,
    NumbersOnly,
    LettersAndNumbers,
    LettersNumbersAndSpaces,
    #[default]
    #[serde(other)]
    None,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SpacePolicy {
    #[default]
    CollapseDuplicates,
    RemoveAll,
    #[serde(other)]
    None,
}

/// Case-mapping rules used by the case stage.
///
/// `Invariant` is the plain Unicode mapping. `Turkic` adds the Turkish and
/// Azerbaijani dotted/dotless i pairs (`I` <-> `ı`, `İ` <-> `i`).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    Turkic,
    #[default]
    #[serde(other)]
    Invariant,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NormalizationOptions {
    #[serde(default = "default_true")]
    pub remove_accents: bool,

    #[serde(default)]
    pub trim: TrimMode,

    #[serde(default)]
    pub case: TextCase,

    #[serde(default)]
    pub character_class: CharacterClass,

    #[serde(default)]
    pub space_policy: SpacePolicy,

    #[serde(default)]
    pub locale: Locale,
}

impl NormalizationOptions {
    /// Options with every stage switched off; `normalize` then only applies
    /// the blank-input guard.
    pub fn none() -> Self {
        NormalizationOptions {
            remove_accents: false,
            trim: TrimMode::None,
            case: TextCase::None,
            character_class: CharacterClass::None,
            space_policy: SpacePolicy::None,
            locale: Locale::Invariant,
        }
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

impl Default for NormalizationOptions {
    fn default() -> Self {
        NormalizationOptions {
            remove_accents: true,
            trim: TrimMode::Trim,
            case: TextCase::Lower,
            character_class: CharacterClass::None,
            space_policy: SpacePolicy::CollapseDuplicates,
            locale: Locale::Invariant,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SimilarityOptions {
    #[serde(default = "default_true")]
    pub use_levenshtein: bool,

    #[serde(default)]
    pub use_jaro_winkler: bool,

    #[serde(default)]
    pub use_jaccard: bool,

    #[serde(default = "default_true")]
    pub normalize_before_compare: bool,

    /// Pipeline applied to both sides when `normalize_before_compare` is set.
    #[serde(default)]
    pub normalization: NormalizationOptions,
}

impl SimilarityOptions {
    pub fn all_metrics() -> Self {
        SimilarityOptions {
            use_levenshtein: true,
            use_jaro_winkler: true,
            use_jaccard: true,
            ..SimilarityOptions::default()
        }
    }

    pub fn any_metric_enabled(&self) -> bool {
        self.use_levenshtein || self.use_jaro_winkler || self.use_jaccard
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

impl Default for SimilarityOptions {
    fn default() -> Self {
        SimilarityOptions {
            use_levenshtein: true,
            use_jaro_winkler: false,
            use_jaccard: false,
            normalize_before_compare: true,
            normalization: NormalizationOptions::default(),
        }
    }
}

fn default_true() -> bool {
    true
}
