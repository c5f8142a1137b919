#![allow(missing_docs)]

use mic_core::{LevelTable, ValidationOptions, ops, to_number, validate};
use proptest::prelude::*;

fn level() -> impl Strategy<Value = String> {
    prop::sample::select(LevelTable::global().levels().to_vec())
}

fn invalid_token() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["foo", "3000", "R", "S; I", "0.3333", "<>", "12000"])
        .prop_map(str::to_string)
}

fn any_token() -> impl Strategy<Value = String> {
    prop_oneof![
        level(),
        invalid_token(),
        "[<=>≤≥ ]{0,3}[0-9]{0,4}[.,]?[0-9]{0,3}[ a-zA-Z;/]{0,4}",
        "\\PC{0,12}",
    ]
}

fn quiet() -> ValidationOptions {
    ValidationOptions::new().quiet()
}

proptest! {
    #[test]
    fn validation_is_idempotent(tokens in prop::collection::vec(any_token(), 0..20)) {
        let once = validate(&tokens, &quiet()).values;
        let twice = validate(once.as_strings(), &quiet());
        prop_assert_eq!(&twice.values, &once);
        prop_assert!(twice.diagnostic.is_empty());
    }

    #[test]
    fn accepted_values_stay_in_the_table(tokens in prop::collection::vec(any_token(), 0..20)) {
        let values = validate(&tokens, &quiet()).values;
        for mic in values.present() {
            let number = to_number(mic.as_str()).unwrap();
            prop_assert!(number.is_finite());
            prop_assert!(number >= 0.0);
            prop_assert!(LevelTable::global().contains(&mic.to_string()));
        }
    }

    #[test]
    fn comparators_lead_the_display_only(token in level()) {
        let values = validate([token.as_str()], &quiet()).values;
        let mic = values[0].unwrap();
        prop_assert!(mic.to_string().starts_with(mic.comparator().as_str()));
        prop_assert!(!mic.magnitude_str().contains(['<', '=', '>']));
    }

    #[test]
    fn addition_is_plain_projection(a in level(), b in level()) {
        let left = validate([a.as_str()], &quiet()).values;
        let right = validate([b.as_str()], &quiet()).values;
        let expected = to_number(&a).unwrap() + to_number(&b).unwrap();
        prop_assert_eq!(ops::add(&left, &right).unwrap(), vec![Some(expected)]);
    }

    #[test]
    fn diagnostic_counts_out_of_table_tokens(
        valid in prop::collection::vec(level(), 0..15),
        invalid in prop::collection::vec(invalid_token(), 1..6),
    ) {
        let mut tokens = valid.clone();
        tokens.extend(invalid.iter().cloned());
        let validated = validate(&tokens, &quiet());

        let n = tokens.len();
        let k = invalid.len();
        let mut distinct = invalid.clone();
        distinct.sort();
        distinct.dedup();

        prop_assert_eq!(validated.diagnostic.invalid_count, k);
        prop_assert_eq!(validated.diagnostic.evaluated, n);
        prop_assert_eq!(
            validated.diagnostic.percentage(),
            (100.0 * k as f64 / n as f64).round_ties_even() as u32
        );
        prop_assert_eq!(&validated.diagnostic.invalid_inputs, &distinct);
    }
}
