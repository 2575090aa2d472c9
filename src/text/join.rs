use std::fmt::Display;

/// Render each item with `Display`, join them with `sep` and trim the result
pub fn string_for_slice<T: Display>(items: &[T], sep: &str) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(sep)
        .trim()
        .to_string()
}
