use crate::config::{CharacterClass, Locale, NormalizationOptions, SpacePolicy, TextCase, TrimMode};
use regex::{Captures, Regex};
use std::sync::LazyLock;
use unicode_general_category::{get_general_category, GeneralCategory};
use unicode_normalization::UnicodeNormalization;

static RE_MULTI_SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static RE_ANY_SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s").unwrap());
static RE_WORD_START: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(^|\s)(\S)").unwrap());

static RE_NON_LETTER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-zA-Z]").unwrap());
static RE_NON_DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^0-9]").unwrap());
static RE_NON_ALNUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9]").unwrap());
static RE_NON_ALNUM_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9\s]").unwrap());

/// Runs the full pipeline: accents, trim, case, spacing, character class.
///
/// Absent or blank input short-circuits to an empty string. Later stages are
/// not re-guarded, so e.g. a filter that strips everything yields `""`.
pub fn normalize(text: Option<&str>, options: &NormalizationOptions) -> String {
    let text = match text {
        Some(t) if !is_blank(t) => t,
        _ => return String::new(),
    };

    let mut text = if options.remove_accents {
        remove_accents(text)
    } else {
        text.to_string()
    };
    text = apply_trim(&text, options.trim).to_string();
    text = apply_case(&text, options.case, options.locale);
    text = apply_space_policy(&text, options.space_policy);
    apply_character_class(&text, options.character_class)
}

pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Canonical decomposition with nonspacing marks (Mn) dropped. Spacing and
/// enclosing marks are kept, and the result is left decomposed.
pub fn remove_accents(text: &str) -> String {
    text.nfd()
        .filter(|c| get_general_category(*c) != GeneralCategory::NonspacingMark)
        .collect()
}

pub fn apply_trim(text: &str, mode: TrimMode) -> &str {
    match mode {
        TrimMode::None => text,
        TrimMode::Trim => text.trim(),
        TrimMode::TrimStart => text.trim_start(),
        TrimMode::TrimEnd => text.trim_end(),
    }
}

pub fn apply_case(text: &str, case: TextCase, locale: Locale) -> String {
    match case {
        TextCase::None => text.to_string(),
        TextCase::Lower => lowercase(text, locale),
        TextCase::Upper => uppercase(text, locale),
        TextCase::TitleCase => title_case(text, locale),
    }
}

pub fn apply_space_policy(text: &str, policy: SpacePolicy) -> String {
    match policy {
        SpacePolicy::None => text.to_string(),
        SpacePolicy::CollapseDuplicates => RE_MULTI_SPACE.replace_all(text, " ").to_string(),
        SpacePolicy::RemoveAll => RE_ANY_SPACE.replace_all(text, "").to_string(),
    }
}

pub fn apply_character_class(text: &str, class: CharacterClass) -> String {
    let re = match class {
        CharacterClass::None => return text.to_string(),
        CharacterClass::LettersOnly => &*RE_NON_LETTER,
        CharacterClass::NumbersOnly => &*RE_NON_DIGIT,
        CharacterClass::LettersAndNumbers => &*RE_NON_ALNUM,
        CharacterClass::LettersNumbersAndSpaces => &*RE_NON_ALNUM_SPACE,
    };
    re.replace_all(text, "").to_string()
}

/// Lowercases everything, then uppercases the first character of each
/// whitespace-delimited word.
fn title_case(text: &str, locale: Locale) -> String {
    let lower = lowercase(text, locale);
    RE_WORD_START
        .replace_all(&lower, |caps: &Captures| {
            format!("{}{}", &caps[1], uppercase(&caps[2], locale))
        })
        .to_string()
}

fn lowercase(text: &str, locale: Locale) -> String {
    match locale {
        Locale::Invariant => text.to_lowercase(),
        Locale::Turkic => {
            let mut out = String::with_capacity(text.len());
            for c in text.chars() {
                match c {
                    'I' => out.push('ı'),
                    '\u{130}' => out.push('i'),
                    _ => out.extend(c.to_lowercase()),
                }
            }
            out
        }
    }
}

fn uppercase(text: &str, locale: Locale) -> String {
    match locale {
        Locale::Invariant => text.to_uppercase(),
        Locale::Turkic => {
            let mut out = String::with_capacity(text.len());
            for c in text.chars() {
                match c {
                    'i' => out.push('\u{130}'),
                    _ => out.extend(c.to_uppercase()),
                }
            }
            out
        }
    }
}
