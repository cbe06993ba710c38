/// Cut `text` to `max_len` characters, ending in "..." when there is room for it.
pub fn truncate(text: &str, max_len: usize) -> String {
    let char_count = text.chars().count();

    if char_count <= max_len {
        text.to_string()
    } else if max_len <= 3 {
        text.chars().take(max_len).collect()
    } else {
        let truncated: String = text.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

/// Column width that fits every value plus the header, capped at `max`.
pub fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>, max: usize) -> usize {
    values
        .map(|v| v.chars().count())
        .chain(std::iter::once(header.chars().count()))
        .max()
        .unwrap_or(0)
        .min(max)
}
