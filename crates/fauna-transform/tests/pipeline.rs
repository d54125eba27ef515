//! Integration tests for the cleaning pipeline.

use fauna_model::{CanonicalRow, Diet, MatchKind, RawTable};
use fauna_transform::{clean_table, parse_speed};
use proptest::prelude::*;

fn table(headers: &[&str], rows: &[Vec<&str>]) -> RawTable {
    let mut table = RawTable::new(headers.iter().map(|h| (*h).to_string()).collect());
    for row in rows {
        table.push_row(row.iter().map(|v| Some((*v).to_string())).collect());
    }
    table
}

/// Renders rows the way the writer does and loads them back as a raw table.
fn as_written(rows: &[CanonicalRow]) -> RawTable {
    let mut table = RawTable::new(vec!["name".into(), "speed".into(), "diet".into()]);
    for row in rows {
        table.push_row(vec![
            Some(row.name.clone()),
            Some(row.speed_text()),
            Some(row.diet.as_str().to_string()),
        ]);
    }
    table
}

#[test]
fn cleans_a_messy_sheet() {
    let table = table(
        &["Animal", "Top Speed (km/h)", "Eating Habits"],
        &[
            vec!["  Cheetah ", "100-120 km/h", "Strict Carnivore"],
            vec!["Elephant", "forty", "Herbivore (grazer)"],
            vec!["Grizzly Bear", "fast (~35mph)", "eats plants and meat"],
            vec!["Raccoon", "twenty-four", "mixed"],
            vec!["Unicorn", "unknown", "plants"],
            vec!["", "50", "meat"],
            vec!["Ant", "0.3", "nan"],
            vec!["Crow", "50", "seeds"],
        ],
    );

    let outcome = clean_table(&table);

    assert_eq!(outcome.mapping.diet.kind, MatchKind::Positional);
    assert_eq!(
        outcome.rows,
        vec![
            CanonicalRow::new("Cheetah", 110.0, Diet::Carnivore),
            CanonicalRow::new("Elephant", 40.0, Diet::Herbivore),
            CanonicalRow::new("Grizzly Bear", 35.0, Diet::Carnivore),
            CanonicalRow::new("Raccoon", 24.0, Diet::Omnivore),
        ]
    );
    assert_eq!(outcome.counts.input_rows, 8);
    assert_eq!(outcome.counts.dropped_missing, 2);
    assert_eq!(outcome.counts.dropped_speed, 1);
    assert_eq!(outcome.counts.dropped_diet, 1);
}

#[test]
fn parses_common_speed_formats() {
    assert_eq!(parse_speed("30-40 km/h"), Some(35.0));
    assert_eq!(parse_speed("thirty"), Some(30.0));
    assert_eq!(parse_speed("fast (~60mph)"), Some(60.0));
    assert_eq!(parse_speed("unknown"), None);
}

#[test]
fn reruns_are_stable() {
    let table = table(
        &["name", "speed", "diet"],
        &[
            vec!["Pronghorn", "86.7 km/h", "grazer"],
            vec!["Ostrich", "sixty to seventy", "omnivore"],
            vec!["Sailfish", "1.25-1.3", "predator"],
        ],
    );
    let first = clean_table(&table);
    let second = clean_table(&as_written(&first.rows));
    assert_eq!(second.rows, first.rows);
    assert_eq!(second.counts.dropped(), 0);
}

#[test]
fn padded_missing_tokens_drop_on_every_pass() {
    let table = table(
        &["name", "speed", "diet"],
        &[
            vec![" NA ", "40", "meat"],
            vec!["Lion", " null", "meat"],
            vec!["Zebra", "60", "plants"],
        ],
    );
    let first = clean_table(&table);
    assert_eq!(first.rows, vec![CanonicalRow::new("Zebra", 60.0, Diet::Herbivore)]);
    assert_eq!(first.counts.dropped_missing, 2);

    let second = clean_table(&as_written(&first.rows));
    assert_eq!(second.rows, first.rows);
}

#[test]
fn range_means_round_half_to_even() {
    let table = table(
        &["name", "speed", "diet"],
        &[
            vec!["Snail", "0.2-0.3", "plants"],
            vec!["Sloth", "0.45 km/h", "leaves and plants"],
        ],
    );
    let speeds: Vec<f64> = clean_table(&table).rows.iter().map(|row| row.speed).collect();
    assert_eq!(speeds, vec![0.2, 0.4]);
}

fn cell_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec![
            "", " ", "nan", "N/A", "Lion", "  Zebra ", "forty-five", "30-40 km/h", "12.5",
            "thirty to forty", "fast (~60mph)", "unknown", "carnivore", "plants", "mixed",
            "hunts at night", "insects",
        ])
        .prop_map(str::to_string),
        "[ -~]{0,12}",
        "[0-9]{1,3}(\\.[0-9])?",
    ]
}

fn table_strategy() -> impl Strategy<Value = RawTable> {
    prop::collection::vec(prop::collection::vec(cell_strategy(), 3), 0..20).prop_map(|rows| {
        let mut table = RawTable::new(vec!["Animal".into(), "Speed".into(), "Diet".into()]);
        for row in rows {
            table.push_row(row.into_iter().map(Some).collect());
        }
        table
    })
}

proptest! {
    #[test]
    fn never_fabricates_rows(table in table_strategy()) {
        let outcome = clean_table(&table);
        prop_assert!(outcome.rows.len() <= table.row_count());
        prop_assert_eq!(outcome.counts.output_rows + outcome.counts.dropped(), table.row_count());
    }

    #[test]
    fn output_rows_are_canonical(table in table_strategy()) {
        for row in clean_table(&table).rows {
            prop_assert!(!row.name.is_empty());
            prop_assert_eq!(row.name.trim(), row.name.as_str());
            prop_assert!(row.speed.is_finite());
            prop_assert!(row.speed >= 0.0);
            prop_assert_eq!((row.speed * 10.0).round() / 10.0, row.speed);
            prop_assert!(Diet::ALL.contains(&row.diet));
        }
    }

    #[test]
    fn cleaning_is_idempotent(table in table_strategy()) {
        let first = clean_table(&table);
        let second = clean_table(&as_written(&first.rows));
        prop_assert_eq!(second.rows, first.rows);
    }

    #[test]
    fn speed_parser_never_goes_negative(text in "\\PC{0,24}") {
        if let Some(speed) = parse_speed(&text) {
            prop_assert!(speed >= 0.0);
        }
    }
}
