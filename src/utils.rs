/// Uppercase the first character of a word and lowercase the rest.
/// Uses full Unicode case mapping, so the first character may expand (`ß` -> `SS`).
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut result = String::with_capacity(word.len());
            result.extend(first.to_uppercase());
            result.push_str(&chars.as_str().to_lowercase());
            result
        }
        None => String::new(),
    }
}

/// Join words with a separator, lowercasing each
pub fn join_lowercase<S: AsRef<str>>(words: &[S], separator: &str) -> String {
    words
        .iter()
        .map(|w| w.as_ref().to_lowercase())
        .collect::<Vec<_>>()
        .join(separator)
}
