//! Integration tests for canonical CSV output.

use std::fs;

use fauna_model::{CanonicalRow, Diet};
use fauna_output::{OutputPlan, render_canonical_csv, write_canonical_csv, write_outputs};
use tempfile::TempDir;

fn rows() -> Vec<CanonicalRow> {
    vec![
        CanonicalRow::new("Cheetah", 110.0, Diet::Carnivore),
        CanonicalRow::new("Grizzly Bear, brown", 35.0, Diet::Omnivore),
        CanonicalRow::new("Sloth", 0.3, Diet::Herbivore),
    ]
}

#[test]
fn renders_header_and_one_decimal_speeds() {
    let csv = render_canonical_csv(&rows(), b',').expect("render");
    insta::assert_snapshot!(csv.trim_end(), @r#"
    name,speed,diet
    Cheetah,110.0,carnivore
    "Grizzly Bear, brown",35.0,omnivore
    Sloth,0.3,herbivore
    "#);
}

#[test]
fn empty_output_still_has_header() {
    let csv = render_canonical_csv(&[], b',').expect("render");
    assert_eq!(csv, "name,speed,diet\n");
}

#[test]
fn writes_file_and_creates_parent_dirs() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("nested").join("out.csv");

    write_canonical_csv(&path, &rows(), b';').expect("write");

    let written = fs::read_to_string(&path).expect("read back");
    assert!(written.starts_with("name;speed;diet\nCheetah;110.0;carnivore\n"));
}

#[test]
fn writes_labeled_and_sample_copies() {
    let dir = TempDir::new().expect("temp dir");
    let plan = OutputPlan::new(dir.path(), "Ada");

    let written = write_outputs(&rows(), &plan).expect("write outputs");

    assert_eq!(written.len(), 2);
    assert!(written[0].ends_with("Ada - Cleaned Animal Data.csv"));
    assert!(written[1].ends_with("sample_animals.csv"));
    let primary = fs::read_to_string(&written[0]).expect("read primary");
    let sample = fs::read_to_string(&written[1]).expect("read sample");
    assert_eq!(primary, sample);
}
