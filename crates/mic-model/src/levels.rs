//! Canonical MIC level table.
//!
//! The table is the cross product of the five [`Comparator`]s with a fixed set
//! of magnitudes taken from the dilution series used in susceptibility
//! testing. Membership in this table is the only acceptance criterion for a
//! normalized measurement, so the generated set must stay stable across
//! releases.
//!
//! ## Magnitude series
//!
//! | series | values |
//! |---|---|
//! | ten-thousandths | 0.0001, 0.0002, 0.0003, 0.0004, 0.0006, 0.0008 |
//! | thousandths | 0.001–0.009 and 0.0011–0.0099 (no trailing zero) |
//! | hundredths | 0.01–0.09 and 0.011–0.099 (no trailing zero) |
//! | tenths | 0.1–0.99 |
//! | known fractions | 0.125, 0.128, 0.156, 0.165, 0.256, 0.512, 0.625 |
//! | two-fold fractions | 0.0625, 0.03125, 0.015625 |
//! | whole numbers | 1–102, plus 1.5 |
//! | powers of two | 128, 256, 512, 1024, 2048, 4096 |
//! | multiples of 80 | 160, 240, ..., 960 |
//!
//! Levels are ordered by magnitude, then by comparator in table order
//! (`<`, `<=`, bare, `>=`, `>`), so the five levels of one magnitude are
//! always contiguous.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::comparator::Comparator;
use crate::numeric::to_number;

const TEN_THOUSANDTHS: [u32; 6] = [1, 2, 3, 4, 6, 8];

const KNOWN_FRACTIONS: [&str; 7] = ["0.125", "0.128", "0.156", "0.165", "0.256", "0.512", "0.625"];

const TWO_FOLD_FRACTIONS: [&str; 3] = ["0.0625", "0.03125", "0.015625"];

const HALF_STEPS: [&str; 1] = ["1.5"];

static TABLE: LazyLock<LevelTable> = LazyLock::new(LevelTable::build);

/// Drop insignificant zeros from the fractional part ("0.50" -> "0.5").
fn trim_fraction(value: String) -> String {
    if value.contains('.') {
        value.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        value
    }
}

fn without_trailing_zero(n: &u32) -> bool {
    n % 10 != 0
}

/// All magnitudes of the dilution series, unsorted and possibly repeated.
fn series() -> Vec<String> {
    let mut values = Vec::new();
    values.extend(TEN_THOUSANDTHS.iter().map(|n| format!("0.000{n}")));
    values.extend(
        (1..100u32)
            .filter(without_trailing_zero)
            .map(|n| format!("0.00{n}")),
    );
    values.extend(
        (1..100u32)
            .filter(without_trailing_zero)
            .map(|n| format!("0.0{n}")),
    );
    values.extend((1..100u32).map(|n| trim_fraction(format!("0.{n}"))));
    values.extend(KNOWN_FRACTIONS.into_iter().map(String::from));
    values.extend(TWO_FOLD_FRACTIONS.into_iter().map(String::from));
    values.extend((1..=102u32).map(|n| n.to_string()));
    values.extend(HALF_STEPS.into_iter().map(String::from));
    values.extend((7..=12u32).map(|exp| (1u32 << exp).to_string()));
    values.extend((2..=12u32).map(|k| (80 * k).to_string()));
    values
}

/// Distinct magnitudes in ascending numeric order.
pub fn magnitudes() -> Vec<String> {
    let mut values: Vec<(f64, String)> = series()
        .into_iter()
        .filter_map(|value| to_number(&value).map(|number| (number, value)))
        .collect();
    values.sort_by(|a, b| a.0.total_cmp(&b.0));
    values.dedup_by(|a, b| a.1 == b.1);
    values.into_iter().map(|(_, value)| value).collect()
}

/// Generate the sorted, duplicate-free canonical level strings.
pub fn generate() -> Vec<String> {
    magnitudes()
        .iter()
        .flat_map(|magnitude| {
            Comparator::ALL
                .into_iter()
                .map(move |comparator| format!("{comparator}{magnitude}"))
        })
        .collect()
}

/// Immutable lookup over the canonical levels.
#[derive(Debug)]
pub struct LevelTable {
    levels: Vec<String>,
    magnitudes: Vec<f64>,
    ranks: HashMap<String, usize>,
}

impl LevelTable {
    fn build() -> Self {
        let levels = generate();
        let magnitudes = levels
            .iter()
            .map(|level| to_number(level).unwrap_or(f64::NAN))
            .collect();
        let ranks = levels
            .iter()
            .enumerate()
            .map(|(rank, level)| (level.clone(), rank))
            .collect();
        Self {
            levels,
            magnitudes,
            ranks,
        }
    }

    /// The process-wide table, built on first use.
    pub fn global() -> &'static LevelTable {
        &TABLE
    }

    /// Number of levels.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Sorted position of a canonical string.
    pub fn rank_of(&self, value: &str) -> Option<usize> {
        self.ranks.get(value).copied()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.ranks.contains_key(value)
    }

    /// Canonical string at a sorted position.
    pub fn get(&self, rank: usize) -> Option<&str> {
        self.levels.get(rank).map(String::as_str)
    }

    /// Numeric projection of the level at a sorted position.
    pub fn magnitude(&self, rank: usize) -> Option<f64> {
        self.magnitudes.get(rank).copied()
    }

    /// All levels in sorted order.
    pub fn levels(&self) -> &[String] {
        &self.levels
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.levels.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn magnitudes_are_distinct_and_ascending() {
        let values = magnitudes();
        for pair in values.windows(2) {
            let (a, b) = (to_number(&pair[0]), to_number(&pair[1]));
            assert!(a < b, "{} should sort before {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn tenths_collapse_trailing_zero_duplicates() {
        let values = magnitudes();
        assert!(values.contains(&"0.1".to_string()));
        assert!(!values.contains(&"0.10".to_string()));
        assert_eq!(values.iter().filter(|v| v.as_str() == "0.5").count(), 1);
    }

    #[test]
    fn table_is_cross_product_of_comparators() {
        let table = LevelTable::global();
        assert_eq!(table.len(), magnitudes().len() * Comparator::ALL.len());
        assert_eq!(table.get(0), Some("<0.0001"));
        assert_eq!(table.get(1), Some("<=0.0001"));
        assert_eq!(table.get(2), Some("0.0001"));
        assert_eq!(table.get(table.len() - 1), Some(">4096"));
    }

    #[test]
    fn rank_lookup_matches_position() {
        let table = LevelTable::global();
        for (rank, level) in table.iter().enumerate() {
            assert_eq!(table.rank_of(level), Some(rank));
        }
    }
}
