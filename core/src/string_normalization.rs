use unidecode::unidecode;

/// Folds a location name for loose matching: ASCII transliteration,
/// lowercase, single spaces.
pub fn clean_str(input: &str) -> String {
    unidecode(input)
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
}
