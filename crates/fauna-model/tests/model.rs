//! Integration tests for the shared model types.

use fauna_model::{
    CanonicalRow, ColumnMapping, ColumnRole, Diet, FaunaError, MatchKind, RawTable,
    ResolvedColumn,
};

fn column(index: usize, header: &str, kind: MatchKind) -> ResolvedColumn {
    ResolvedColumn {
        index,
        header: header.to_string(),
        kind,
    }
}

#[test]
fn ragged_rows_are_padded_to_header_width() {
    let mut table = RawTable::new(vec!["name".into(), "speed".into(), "diet".into()]);
    table.push_row(vec![Some("Lion".into())]);
    table.push_row(vec![
        Some("Hare".into()),
        Some("70".into()),
        Some("plants".into()),
        Some("extra".into()),
    ]);

    assert_eq!(table.row_count(), 2);
    assert_eq!(table.rows[0].len(), 3);
    assert_eq!(table.rows[1].len(), 3);
    assert_eq!(table.cell(0, 0), Some("Lion"));
    assert_eq!(table.cell(0, 2), None);
    assert_eq!(table.cell(1, 2), Some("plants"));
    assert_eq!(table.cell(5, 0), None);
}

#[test]
fn mapping_reports_positional_fallback() {
    let mut mapping = ColumnMapping {
        name: column(0, "Animal", MatchKind::Exact),
        speed: column(1, "Top Speed", MatchKind::Substring),
        diet: column(2, "Food", MatchKind::Positional),
    };
    assert!(mapping.has_fallback());
    assert_eq!(mapping.indices(), [0, 1, 2]);
    assert_eq!(mapping.get(ColumnRole::Speed).header, "Top Speed");

    mapping.diet.kind = MatchKind::Exact;
    assert!(!mapping.has_fallback());
}

#[test]
fn diet_names_parse_case_insensitively() {
    assert_eq!(" Omnivore ".parse::<Diet>().ok(), Some(Diet::Omnivore));
    assert!(matches!(
        "meat".parse::<Diet>(),
        Err(FaunaError::UnknownDiet(value)) if value == "meat"
    ));
    assert_eq!("Speed".parse::<ColumnRole>().ok(), Some(ColumnRole::Speed));
}

#[test]
fn speed_text_has_one_decimal() {
    assert_eq!(CanonicalRow::new("Sloth", 0.3, Diet::Herbivore).speed_text(), "0.3");
    assert_eq!(CanonicalRow::new("Lion", 80.0, Diet::Carnivore).speed_text(), "80.0");
}
