//! String manipulation utilities

/// Pluralize a word based on count
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else if let Some(stem) = word.strip_suffix("ex") {
        format!("{stem}ices")
    } else {
        format!("{word}s")
    }
}

/// Join vertex-like labels into an arrow path, e.g. `V0 → V2 → V1`
pub fn arrow_path<T: std::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" → ")
}
