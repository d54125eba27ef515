/// Normalizes a header for comparison: trimmed and lowercased.
pub fn normalize_header_key(raw: &str) -> String {
    raw.trim().to_lowercase()
}
