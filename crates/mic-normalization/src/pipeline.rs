//! The cleanup pipeline.
//!
//! Each step rewrites the whole string. Order matters: later steps assume
//! the character set and comparator spelling produced by earlier ones.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::candidate::Candidate;

static OPERATOR_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([<=>]) +").expect("Invalid operator space regex"));

static BARE_DOT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^|[^0-9])\.").expect("Invalid bare dot regex"));

static UP_TO_LAST_DOT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.*\..*\.").expect("Invalid multi dot regex"));

static TRAILING_DOT_ZERO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.+0$").expect("Invalid trailing .0 regex"));

static TRAILING_NON_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9]+$").expect("Invalid trailing non-digit regex"));

static LEADING_ZEROS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^|[^0-9])0+\.").expect("Invalid leading zeros regex"));

/// Rewrite one raw token into a canonical-form candidate.
///
/// The result is only a candidate: whether it is a valid MIC is decided by
/// a lookup in the canonical level table, not here.
pub fn normalize(raw: &str) -> Candidate {
    if raw.trim().is_empty() {
        return Candidate::Blank;
    }
    let cleaned = clean(raw);
    if cleaned.is_empty() {
        trace!(raw, "input has no parseable MIC content");
        return Candidate::Unparseable;
    }
    Candidate::Value(cleaned)
}

/// Run every cleanup step in order.
pub fn clean(raw: &str) -> String {
    let value = decimal_comma(raw);
    let value = unicode_comparators(&value);
    let value = strip_foreign_characters(&value);
    let value = join_comparator_and_number(&value);
    let value = reorder_comparators(&value);
    let value = leading_zero_for_bare_dot(&value);
    let value = keep_last_fraction(&value);
    let value = strip_trailing_dot_zero(&value);
    let value = strip_trailing_non_digits(&value);
    let value = single_leading_zero(&value);
    let value = recover_double_zero(&value);
    let value = strip_fraction_zeros(&value);
    let value = strip_trailing_dot(&value);
    value.trim().to_string()
}

/// `"0,5"` -> `"0.5"`.
fn decimal_comma(value: &str) -> String {
    value.replace(',', ".")
}

/// `"≤2"` -> `"<=2"`, `"≥2"` -> `">=2"`.
fn unicode_comparators(value: &str) -> String {
    value.replace('\u{2264}', "<=").replace('\u{2265}', ">=")
}

/// Keep only ASCII letters, digits, `.`, `<`, `>`, `=` and spaces.
///
/// This is what drops qualifiers such as `"; S"` from `"<=0.002; S"`
/// (the remaining `" S"` is removed by [`strip_trailing_non_digits`]).
fn strip_foreign_characters(value: &str) -> String {
    value
        .chars()
        .filter(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '.' | '<' | '>' | '=' | ' '))
        .collect()
}

/// `"<= 4"` -> `"<=4"`.
fn join_comparator_and_number(value: &str) -> String {
    OPERATOR_SPACE.replace_all(value, "${1}").into_owned()
}

/// `"=<"` -> `"<="`, `"=>"` -> `">="`.
fn reorder_comparators(value: &str) -> String {
    value.replace("=<", "<=").replace("=>", ">=")
}

/// `".5"` -> `"0.5"`, `"<.5"` -> `"<0.5"`.
fn leading_zero_for_bare_dot(value: &str) -> String {
    BARE_DOT.replace_all(value, "${1}0.").into_owned()
}

/// `"<=0.2560.512"` -> `"0.512"`: with several dots only the last fragment survives.
fn keep_last_fraction(value: &str) -> String {
    if value.matches('.').count() > 1 {
        UP_TO_LAST_DOT.replace(value, "0.").into_owned()
    } else {
        value.to_string()
    }
}

/// `"4.0"` -> `"4"`.
fn strip_trailing_dot_zero(value: &str) -> String {
    TRAILING_DOT_ZERO.replace(value, "").into_owned()
}

/// `"4 mg/L"` -> `"4"`.
fn strip_trailing_non_digits(value: &str) -> String {
    TRAILING_NON_DIGITS.replace(value, "").into_owned()
}

/// `"<=000.5"` -> `"<=0.5"`.
fn single_leading_zero(value: &str) -> String {
    LEADING_ZEROS.replace_all(value, "${1}0.").into_owned()
}

/// `"0025"` -> `"0.025"`, a decimal point that was most likely lost.
fn recover_double_zero(value: &str) -> String {
    match value.strip_prefix("00") {
        Some(rest) if !value.contains('.') => format!("0.0{rest}"),
        _ => value.to_string(),
    }
}

/// `"0.500"` -> `"0.5"`. The integer part is never touched.
fn strip_fraction_zeros(value: &str) -> String {
    if value.contains('.') {
        value.trim_end_matches('0').to_string()
    } else {
        value.to_string()
    }
}

/// `"4."` -> `"4"`.
fn strip_trailing_dot(value: &str) -> String {
    value.strip_suffix('.').unwrap_or(value).to_string()
}
