use crate::config::{CharacterClass, NormalizationOptions, TextCase};
use crate::normalize::{is_blank, normalize};

fn word_preset(case: TextCase) -> NormalizationOptions {
    NormalizationOptions {
        case,
        character_class: CharacterClass::LettersNumbersAndSpaces,
        ..NormalizationOptions::default()
    }
}

/// `"  Olá, Mundo!  "` -> `"ola-mundo"`.
pub fn to_slug(text: Option<&str>) -> String {
    normalize(text, &word_preset(TextCase::Lower)).replace(' ', "-")
}

pub fn to_pascal_case(text: Option<&str>) -> String {
    normalize(text, &word_preset(TextCase::TitleCase)).replace(' ', "")
}

pub fn to_camel_case(text: Option<&str>) -> String {
    let pascal = to_pascal_case(text);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) if pascal.chars().count() > 1 => {
            first.to_lowercase().chain(chars).collect()
        }
        _ => pascal,
    }
}

/// Uppercase initials of every word at least `min_word_len` chars long.
///
/// When fewer than `min_result_len` initials come out, the first
/// `fallback_len` chars of the normalized text are returned instead.
/// Both minimums are clamped to at least 1.
pub fn initials(
    text: Option<&str>,
    min_word_len: usize,
    min_result_len: usize,
    fallback_len: usize,
) -> String {
    let options = NormalizationOptions {
        case: TextCase::Upper,
        ..NormalizationOptions::default()
    };
    let text = normalize(text, &options);
    if text.is_empty() {
        return text;
    }
    let min_word_len = min_word_len.max(1);
    let min_result_len = min_result_len.max(1);

    let result: String = text
        .split(' ')
        .filter(|word| word.chars().count() >= min_word_len)
        .filter_map(|word| word.chars().next())
        .collect();

    if result.chars().count() < min_result_len {
        return left(Some(text.as_str()), fallback_len);
    }
    result
}

/// [`initials`] with 3-char words, at least 2 initials and a 3-char fallback.
pub fn default_initials(text: Option<&str>) -> String {
    initials(text, 3, 2, 3)
}

pub fn left(text: Option<&str>, len: usize) -> String {
    match text {
        Some(t) if !is_blank(t) => t.chars().take(len).collect(),
        _ => String::new(),
    }
}

pub fn right(text: Option<&str>, len: usize) -> String {
    match text {
        Some(t) if !is_blank(t) => {
            let skip = t.chars().count().saturating_sub(len);
            t.chars().skip(skip).collect()
        }
        _ => String::new(),
    }
}
