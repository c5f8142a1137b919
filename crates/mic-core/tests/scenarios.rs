#![allow(missing_docs)]

use std::io;
use std::sync::{Arc, Mutex};

use mic_core::{
    KeepOperators, MicVector, RawInput, ValidationOptions, as_mic, ops, stats, to_number,
    validate,
};

#[test]
fn mixed_text_and_numbers_normalize_to_canonical_levels() {
    let inputs: Vec<RawInput> = vec![
        ">=32".into(),
        "1.0".into(),
        "1".into(),
        "1.00".into(),
        8.into(),
        "<=0.128".into(),
        "8".into(),
        "16".into(),
        "16".into(),
    ];
    let validated = validate(inputs, &ValidationOptions::new());
    assert_eq!(
        validated.values.as_strings(),
        [
            Some(">=32"),
            Some("1"),
            Some("1"),
            Some("1"),
            Some("8"),
            Some("<=0.128"),
            Some("8"),
            Some("16"),
            Some("16"),
        ]
    );
    assert!(validated.diagnostic.is_empty());
}

#[test]
fn trailing_interpretation_is_stripped() {
    let validated = validate(["<=0.002; S"], &ValidationOptions::new());
    assert_eq!(validated.values.as_strings(), [Some("<=0.002")]);
    assert!(validated.diagnostic.is_empty());
}

#[test]
fn projection_discards_comparators() {
    let values = as_mic([
        RawInput::from(16),
        1.into(),
        8.into(),
        8.into(),
        64.into(),
        ">=128".into(),
    ]);
    assert_eq!(
        values.to_f64(),
        [
            Some(16.0),
            Some(1.0),
            Some(8.0),
            Some(8.0),
            Some(64.0),
            Some(128.0)
        ]
    );
    assert_eq!(stats::median(&values, false), Some(12.0));
    assert_eq!(to_number(">=128"), Some(128.0));
}

#[test]
fn one_garbage_token_is_reported_once() {
    let inputs = ["1", "2", "4", "8", "foo", "16", "32", ">=64", "<=0.5"];
    let validated = validate(inputs, &ValidationOptions::new().quiet());
    assert_eq!(validated.values.missing_count(), 1);
    assert_eq!(validated.diagnostic.invalid_count, 1);
    assert_eq!(validated.diagnostic.evaluated, 9);
    assert_eq!(validated.diagnostic.percentage(), 11);
    assert_eq!(validated.diagnostic.invalid_inputs, ["foo"]);
    insta::assert_snapshot!(
        validated.diagnostic.message(),
        @r#"1 result truncated (11%) that were invalid MICs: "foo""#
    );
}

#[test]
fn sorting_uses_numeric_projection() {
    let values = as_mic(["16", "1", "8", "8", ">=128"]);
    assert_eq!(
        values.sorted(false).as_strings(),
        [Some("1"), Some("8"), Some("8"), Some("16"), Some(">=128")]
    );
    assert_eq!(
        values.sorted(true).as_strings(),
        [Some(">=128"), Some("16"), Some("8"), Some("8"), Some("1")]
    );
}

#[test]
fn arithmetic_returns_plain_numbers() {
    let a = as_mic([">=8", "<=0.25"]);
    let b = as_mic(["2", "4"]);
    assert_eq!(ops::add(&a, &b).unwrap(), [Some(10.0), Some(4.25)]);
    assert_eq!(ops::div(&a, &b).unwrap(), [Some(4.0), Some(0.0625)]);
    assert_eq!(ops::le(&a, &b).unwrap(), [Some(false), Some(true)]);
}

#[test]
fn edges_policy_during_validation() {
    let validated = validate(
        ["2", "<0.25", ">=4", "1", "16", "<=16"],
        &ValidationOptions::new()
            .with_keep_operators(KeepOperators::Edges)
            .quiet(),
    );
    assert_eq!(
        validated.values.to_string(),
        "[2, <=0.25, 4, 1, >=16, >=16]"
    );
}

#[test]
fn serializes_as_canonical_strings() {
    let values = as_mic([Some("<=0.5"), None, Some("4")]);
    let json = serde_json::to_string(&values).unwrap();
    assert_eq!(json, r#"["<=0.5",null,"4"]"#);
    let back: MicVector = serde_json::from_str(&json).unwrap();
    assert_eq!(back, values);
    assert!(serde_json::from_str::<MicVector>(r#"["0.50"]"#).is_err());
}

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Captured {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

fn capture_logs(run: impl FnOnce()) -> String {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .finish();
    tracing::subscriber::with_default(subscriber, run);
    captured.contents()
}

#[test]
fn one_warning_per_batch_with_column_context() {
    let logs = capture_logs(|| {
        validate(
            ["foo", "bar", "4", "foo"],
            &ValidationOptions::new().with_column("AMX"),
        );
    });
    let warnings: Vec<&str> = logs.lines().filter(|line| line.contains("WARN")).collect();
    assert_eq!(warnings.len(), 1, "{logs}");
    assert!(warnings[0].contains(
        r#"3 results in column 'AMX' truncated (75%) that were invalid MICs: "bar" and "foo""#
    ));
    assert!(warnings[0].contains("invalid_count=3"));
}

#[test]
fn quiet_validation_does_not_log() {
    let logs = capture_logs(|| {
        let validated = validate(["foo"], &ValidationOptions::new().quiet());
        assert_eq!(validated.diagnostic.invalid_count, 1);
    });
    assert!(logs.is_empty(), "{logs}");
}

#[test]
fn column_context_does_not_leak_between_calls() {
    let first = validate(["x"], &ValidationOptions::new().with_column("A").quiet());
    let second = validate(["y"], &ValidationOptions::new().quiet());
    assert_eq!(first.diagnostic.column.as_deref(), Some("A"));
    assert_eq!(second.diagnostic.column, None);
}
