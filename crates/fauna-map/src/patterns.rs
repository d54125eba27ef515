use fauna_model::ColumnRole;

const NAME_CANDIDATES: &[&str] = &["name", "animal", "species"];
const SPEED_CANDIDATES: &[&str] = &["speed", "velocity"];
const DIET_CANDIDATES: &[&str] = &["diet"];

/// Header candidates for a role, lowercase.
pub fn role_candidates(role: ColumnRole) -> &'static [&'static str] {
    match role {
        ColumnRole::Name => NAME_CANDIDATES,
        ColumnRole::Speed => SPEED_CANDIDATES,
        ColumnRole::Diet => DIET_CANDIDATES,
    }
}

/// Fixed column index used when no header matches a role.
///
/// Falls back to column 0 when the table is too narrow.
pub fn positional_fallback(role: ColumnRole, column_count: usize) -> usize {
    let preferred = match role {
        ColumnRole::Name => 0,
        ColumnRole::Speed => 1,
        ColumnRole::Diet => 2,
    };
    if preferred < column_count { preferred } else { 0 }
}
