/// Strip ASCII punctuation and uppercase the rest.
///
/// Whitespace is left untouched, so `"Kay/O "` becomes `"KAYO "`.
/// Applying it twice yields the same string as applying it once.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect::<String>()
        .to_uppercase()
}
