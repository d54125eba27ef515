//! Header and cell cleanup applied while reading.

/// Trims a header and removes a leading byte-order mark.
pub fn normalize_header(raw: &str) -> String {
    raw.trim_start_matches('\u{feff}').trim().to_string()
}

/// Returns true if every cell in a record is blank.
pub fn is_blank_record(record: &csv::StringRecord) -> bool {
    record.iter().all(|value| value.trim().is_empty())
}
