//! Integration tests for the report module.

use std::path::PathBuf;

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

use mic_cli::report::{ColumnSummary, ValidationReport, describe_normalization};
use mic_core::ValidationOptions;
use mic_ingest::validate_frame;

fn test_df(columns: Vec<(&str, Vec<&str>)>) -> DataFrame {
    let cols: Vec<Column> = columns
        .into_iter()
        .map(|(name, values)| {
            Series::new(
                name.into(),
                values.iter().copied().map(String::from).collect::<Vec<_>>(),
            )
            .into_column()
        })
        .collect();
    DataFrame::new(cols).unwrap()
}

fn report_for(df: &DataFrame, columns: &[&str]) -> ValidationReport {
    let columns: Vec<String> = columns.iter().copied().map(String::from).collect();
    let (cleaned, validations) =
        validate_frame(df, &columns, &ValidationOptions::new().quiet()).unwrap();
    ValidationReport {
        source: PathBuf::from("isolates.csv"),
        rows: cleaned.height(),
        columns: validations
            .iter()
            .map(ColumnSummary::from_validation)
            .collect(),
        output: None,
    }
}

#[test]
fn test_report_summarizes_columns() {
    let df = test_df(vec![
        ("AMX", vec!["<=0.5", "1", "2", "foo", ">=16"]),
        ("CIP", vec!["0.25", "0.25", "", "1", "4"]),
    ]);
    let report = report_for(&df, &["AMX", "CIP"]);

    assert!(report.has_invalid());
    assert_eq!(report.total_invalid(), 1);
    let amx = &report.columns[0];
    assert_eq!(amx.values, 5);
    assert_eq!(amx.valid, 4);
    assert_eq!(amx.invalid_percentage, 20);
    assert_eq!(amx.median, Some(1.5));
    assert_eq!(amx.mic50.map(|mic| mic.as_str()), Some("1"));
    assert_eq!(amx.mic90.map(|mic| mic.as_str()), Some("16"));
    assert_eq!(report.columns[1].invalid, 0);
}

#[test]
fn test_report_serializes_to_json() {
    let df = test_df(vec![("GEN", vec!["<=1", "2", "x"])]);
    let report = report_for(&df, &["GEN"]);
    insta::assert_json_snapshot!(report, @r#"
    {
      "source": "isolates.csv",
      "rows": 3,
      "columns": [
        {
          "column": "GEN",
          "values": 3,
          "valid": 2,
          "invalid": 1,
          "invalid_percentage": 33,
          "min": 1.0,
          "median": 1.5,
          "max": 2.0,
          "mic50": "1",
          "mic90": "2",
          "invalid_inputs": [
            "x"
          ]
        }
      ],
      "output": null
    }
    "#);
}

#[test]
fn test_normalization_outcomes() {
    let outcomes: Vec<(String, Option<String>, &str)> = ["<= 0,5", "0.3333", "S", "16.0 mg/L"]
        .into_iter()
        .map(describe_normalization)
        .map(|outcome| {
            (
                outcome.raw,
                outcome.mic.map(|mic| mic.to_string()),
                outcome.note,
            )
        })
        .collect();
    assert_eq!(
        outcomes,
        vec![
            ("<= 0,5".to_string(), Some("<=0.5".to_string()), "valid"),
            ("0.3333".to_string(), None, "not a valid MIC level"),
            ("S".to_string(), None, "no MIC content"),
            ("16.0 mg/L".to_string(), Some("16".to_string()), "valid"),
        ]
    );
}
