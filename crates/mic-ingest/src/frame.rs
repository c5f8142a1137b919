//! Column-level validation of MIC data in a `DataFrame`.

use anyhow::{Context, Result};
use mic_common::{any_to_string, any_to_string_non_empty};
use mic_core::{
    Diagnostic, MicError, MicVector, RawInput, ValidationOptions, all_valid_mics, validate,
};
use polars::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

/// Validated values and diagnostic for one column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnValidation {
    pub column: String,
    pub values: MicVector,
    pub diagnostic: Diagnostic,
}

/// Raw input for one cell. Floats keep their numeric form so they are
/// formatted the same way as numeric input elsewhere.
pub fn any_to_raw_input(value: AnyValue<'_>) -> RawInput {
    match value {
        AnyValue::Null => RawInput::Missing,
        AnyValue::Float32(v) => RawInput::Number(f64::from(v)),
        AnyValue::Float64(v) => RawInput::Number(v),
        other => RawInput::Text(any_to_string(other)),
    }
}

fn require_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column> {
    if !df.get_column_names().iter().any(|column| column.as_str() == name) {
        return Err(MicError::InvalidArgument(format!("unknown column '{name}'")).into());
    }
    df.column(name).with_context(|| format!("read column {name}"))
}

/// Validate one column, labelling the diagnostic with the column name.
///
/// Missing cells are always kept so the result lines up with the frame rows.
pub fn validate_column(
    df: &DataFrame,
    name: &str,
    options: &ValidationOptions,
) -> Result<ColumnValidation> {
    let column = require_column(df, name)?;
    let inputs =
        (0..df.height()).map(|idx| any_to_raw_input(column.get(idx).unwrap_or(AnyValue::Null)));
    let options = options
        .clone()
        .with_drop_missing(false)
        .with_column(name);
    let validated = validate(inputs, &options);
    debug!(
        column = name,
        rows = df.height(),
        invalid = validated.diagnostic.invalid_count,
        "validated column"
    );
    Ok(ColumnValidation {
        column: name.to_string(),
        values: validated.values,
        diagnostic: validated.diagnostic,
    })
}

/// Validate several columns and replace them with their canonical text.
///
/// With `drop_missing`, rows where every validated column is missing are
/// removed from the returned frame.
pub fn validate_frame(
    df: &DataFrame,
    columns: &[String],
    options: &ValidationOptions,
) -> Result<(DataFrame, Vec<ColumnValidation>)> {
    let mut out = df.clone();
    let mut reports = Vec::with_capacity(columns.len());
    for name in columns {
        let report = validate_column(df, name, options)?;
        let series = Series::new(name.as_str().into(), report.values.as_strings());
        out.with_column(series)
            .with_context(|| format!("replace column {name}"))?;
        reports.push(report);
    }
    if options.drop_missing && !reports.is_empty() {
        let keep: Vec<bool> = (0..out.height())
            .map(|idx| {
                reports
                    .iter()
                    .any(|report| report.values.get(idx).flatten().is_some())
            })
            .collect();
        let mask = BooleanChunked::new("keep".into(), keep);
        out = out.filter(&mask).context("drop rows without MICs")?;
    }
    info!(
        columns = columns.len(),
        rows = out.height(),
        "validated MIC columns"
    );
    Ok((out, reports))
}

/// Columns whose non-blank cells are all valid MICs, in frame order.
/// Columns without any non-blank cell are never guessed.
pub fn guess_mic_columns(df: &DataFrame) -> Vec<String> {
    df.get_columns()
        .iter()
        .filter(|column| {
            let values: Vec<String> = (0..column.len())
                .filter_map(|idx| any_to_string_non_empty(column.get(idx).unwrap_or(AnyValue::Null)))
                .collect();
            !values.is_empty() && all_valid_mics(&values)
        })
        .map(|column| column.name().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> DataFrame {
        DataFrame::new(vec![
            Series::new("ID".into(), vec!["a1", "a2", "a3"]).into(),
            Series::new("AMX".into(), vec![Some("<= 0,5"), Some("foo"), None]).into(),
            Series::new("GEN".into(), vec![Some(1.0), None, Some(0.25)]).into(),
        ])
        .unwrap()
    }

    #[test]
    fn raw_input_keeps_numbers_numeric() {
        assert_eq!(any_to_raw_input(AnyValue::Null), RawInput::Missing);
        assert_eq!(any_to_raw_input(AnyValue::Float64(0.5)), RawInput::Number(0.5));
        assert_eq!(
            any_to_raw_input(AnyValue::Int32(4)),
            RawInput::Text("4".to_string())
        );
    }

    #[test]
    fn column_diagnostic_carries_the_column_name() {
        let report = validate_column(&frame(), "AMX", &ValidationOptions::new().quiet()).unwrap();
        assert_eq!(report.values.as_strings(), [Some("<=0.5"), None, None]);
        assert_eq!(report.diagnostic.column.as_deref(), Some("AMX"));
        assert_eq!(report.diagnostic.invalid_inputs, ["foo"]);
    }

    #[test]
    fn unknown_column_is_a_call_error() {
        let err = validate_column(&frame(), "CIP", &ValidationOptions::new()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<MicError>(),
            Some(MicError::InvalidArgument(_))
        ));
    }

    #[test]
    fn guesses_columns_of_valid_mics() {
        assert_eq!(guess_mic_columns(&frame()), ["GEN"]);
    }
}
