use super::check_invariants;
use crate::{Error, IndexTree};
use proptest::{
    prelude::*,
    test_runner::{Config, TestRunner},
};
use proptest_derive::Arbitrary;
use std::collections::BTreeMap;

#[derive(Clone, Arbitrary, Debug)]
enum TreeOp {
    Insert,
    Lookup,
}

fn insert_lookup_against_model(input: Vec<(String, u16, TreeOp)>, max_keys: usize) {
    let mut model = BTreeMap::<String, u16>::new();
    let mut tree = IndexTree::with_max_keys(max_keys).unwrap();

    for (key, value, op) in input {
        match op {
            TreeOp::Insert => {
                let previous = tree.insert(key.clone(), value);
                assert_eq!(previous, model.insert(key, value));
                check_invariants(&tree);
            }
            TreeOp::Lookup => match model.get(&key) {
                Some(expected) => assert_eq!(tree.lookup(&key), Ok(expected)),
                None => assert_eq!(tree.lookup(&key), Err(Error::NotFound)),
            },
        }
    }

    assert_eq!(tree.len(), model.len());
    assert!(tree.iter().eq(model.iter()));
    assert!(tree.iter().rev().eq(model.iter().rev()));
    for (key, value) in &model {
        assert_eq!(tree.get(key), Some(value));
    }
}

fn run(max_keys: usize, key_pattern: &'static str, cases: u32) {
    let config = Config {
        cases,
        source_file: Some("src/tests/tree.rs"),
        verbose: 0,
        ..Config::default()
    };
    let mut runner = TestRunner::new(config);

    runner
        .run(
            &proptest::collection::vec(
                (key_pattern, any::<u16>(), any::<TreeOp>()),
                0..300,
            ),
            |input| {
                insert_lookup_against_model(input, max_keys);
                Ok(())
            },
        )
        .unwrap();
}

#[test]
fn matches_model_at_minimum_capacity() {
    // Narrow key space so overwrites and lookups of present keys are common.
    run(3, "[a-e]{1,3}", 64);
}

#[test]
fn matches_model_at_even_capacity() {
    run(4, "[a-z]{1,4}", 64);
}

#[test]
fn matches_model_at_wide_capacity() {
    run(17, "[a-z0-9]{0,8}", 32);
}

proptest! {
    #[test]
    fn every_inserted_key_is_found(keys in proptest::collection::btree_set(any::<u32>(), 0..500)) {
        let mut tree = IndexTree::new();
        for key in keys.iter().rev() {
            tree.insert(*key, key.wrapping_mul(3));
        }

        check_invariants(&tree);
        for key in &keys {
            let expected = key.wrapping_mul(3);
            prop_assert_eq!(tree.lookup(key), Ok(&expected));
        }
        prop_assert!(tree.keys().eq(keys.iter()));
    }
}
