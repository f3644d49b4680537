#![allow(missing_docs, clippy::missing_docs_in_private_items, clippy::arithmetic_side_effects)]

use std::collections::BTreeSet;

use initial_table::{EMPTY_MESSAGE, InitialTable, TableExtensions};
use proptest::prelude::*;

/// Any name, including empty and non-alphabetic ones
fn any_name() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z][a-z]{0,6}",
        "[0-9 _-][A-Za-z0-9]{0,4}",
        Just(String::new()),
        any::<String>(),
    ]
}

proptest! {
    #[test]
    fn added_names_exist_until_removed(names in prop::collection::vec(any_name(), 1..60)) {
        let mut table = InitialTable::new();
        for name in &names {
            table.add(name.clone());
            prop_assert!(table.exists(name));
        }
        prop_assert_eq!(table.len(), names.len());
        prop_assert!(table.contains_all(&names));

        let distinct: BTreeSet<&String> = names.iter().collect();
        for name in distinct {
            prop_assert!(table.exists(name));
            prop_assert!(table.remove(name).is_some());
            prop_assert!(!table.exists(name));
        }
        prop_assert!(table.is_empty());
        prop_assert_eq!(table.used_buckets(), 0);
        prop_assert_eq!(table.to_string(), EMPTY_MESSAGE);
    }

    #[test]
    fn fresh_table_is_empty(capacity in 1usize..200, query in any_name()) {
        let table = InitialTable::with_capacity(capacity);
        prop_assert!(!table.exists(&query));
        prop_assert_eq!(table.to_string(), EMPTY_MESSAGE);
    }

    #[test]
    fn counters_stay_consistent(names in prop::collection::vec(any_name(), 0..80), capacity in 1usize..40) {
        let mut table = InitialTable::with_capacity(capacity);
        table.extend(names.iter().cloned());

        let lengths = table.chain_lengths();
        prop_assert_eq!(lengths.len(), table.capacity());
        prop_assert_eq!(lengths.iter().sum::<usize>(), table.len());
        prop_assert_eq!(lengths.iter().filter(|&&length| length > 0).count(), table.used_buckets());
        prop_assert!(table.used_buckets() <= table.capacity());
        prop_assert!(table.len() >= table.used_buckets());

        // Every entry sits in the bucket its name maps to right now
        for index in 0..table.capacity() {
            for name in table.chain(index) {
                prop_assert_eq!(table.bucket_index(name), index);
            }
        }
    }

    #[test]
    fn growth_keeps_every_name(capacity in 1usize..30) {
        // Letters at distinct code points, so each new letter can claim a fresh bucket
        let letters: Vec<String> = (b'A'..=b'Z').map(|code| char::from(code).to_string()).collect();
        let mut table = InitialTable::with_capacity(capacity);
        table.extend(letters.iter().cloned());

        prop_assert!(table.contains_all(&letters));
        prop_assert_eq!(table.len(), 26);
        if capacity < 26 {
            prop_assert!(table.capacity() >= capacity * 2);
        }
    }

    #[test]
    fn remove_takes_all_duplicates(name in any_name(), copies in 1usize..10, others in prop::collection::vec(any_name(), 0..10)) {
        let mut table = InitialTable::new();
        table.extend(others.iter().filter(|other| **other != name).cloned());
        for _ in 0..copies {
            table.add(name.clone());
        }
        let before = table.len();

        let removed = table.remove(&name);
        prop_assert_eq!(removed.as_ref().map(|entry| entry.name()), Some(name.as_str()));
        prop_assert!(!table.exists(&name));
        prop_assert_eq!(table.len(), before - copies);
    }

    #[test]
    fn bucket_index_depends_on_initial_only(initial in "[A-Za-z]", tail_a in "[a-z]{0,5}", tail_b in "[a-z]{0,5}", capacity in 1usize..100) {
        let table = InitialTable::with_capacity(capacity);
        let upper = initial.to_uppercase();
        let lower = initial.to_lowercase();
        let index = table.bucket_index(&format!("{upper}{tail_a}"));
        prop_assert_eq!(index, table.bucket_index(&format!("{lower}{tail_b}")));
        prop_assert!(index < capacity);
    }
}
