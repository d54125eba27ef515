//! Row-level cleanup: trimming and missing-value detection.

use fauna_model::ColumnMapping;

/// Cell spellings treated as missing after trimming (exact match).
///
/// Tokens are compared after the trim, so `" NA "` is missing just like `"NA"`
/// and a written `name` can never turn missing on a second pass.
pub const MISSING_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Returns true if a trimmed cell counts as missing.
pub fn is_missing(value: &str) -> bool {
    MISSING_TOKENS.contains(&value)
}

/// Trims a cell, returning `None` if it is absent or missing.
pub fn clean_cell(cell: Option<&str>) -> Option<&str> {
    let trimmed = cell?.trim();
    if is_missing(trimmed) { None } else { Some(trimmed) }
}

/// The three selected cells of a row, trimmed and non-missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrimmedRow<'a> {
    pub name: &'a str,
    pub speed: &'a str,
    pub diet: &'a str,
}

/// Selects and trims the mapped cells, or `None` if any is missing.
pub fn normalize_row<'a>(
    row: &'a [Option<String>],
    mapping: &ColumnMapping,
) -> Option<TrimmedRow<'a>> {
    let cell = |index: usize| clean_cell(row.get(index).and_then(|cell| cell.as_deref()));
    Some(TrimmedRow {
        name: cell(mapping.name.index)?,
        speed: cell(mapping.speed.index)?,
        diet: cell(mapping.diet.index)?,
    })
}
