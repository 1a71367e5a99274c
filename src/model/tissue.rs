/// Canonical display form of a tissue name: words split on runs of `_` or
/// space, first character of each word uppercased, joined by single spaces.
/// Applying it twice is a no-op.
pub fn title_case(raw: &str) -> String {
    raw.split(['_', ' '])
        .filter(|word| !word.is_empty())
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/tissue.rs"]
mod tests;
