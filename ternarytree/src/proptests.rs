use super::*;

use proptest::prelude::*;
use std::collections::BTreeMap;

#[derive(Clone, Debug)]
enum Op {
    Insert(String, u32),
    Set(String, u32),
    Remove(String),
    RemoveEntry(String, u32),
    Get(String),
    Optimize,
    Clear,
}

// A narrow alphabet and short keys force prefix sharing and key collisions,
// which is where the interesting structural transitions live.
fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    let key = "[a-c]{1,6}";
    let op = prop_oneof![
        4 => (key, any::<u32>()).prop_map(|(k, v)| Op::Insert(k, v)),
        4 => (key, any::<u32>()).prop_map(|(k, v)| Op::Set(k, v)),
        3 => key.prop_map(Op::Remove),
        1 => (key, any::<u32>()).prop_map(|(k, v)| Op::RemoveEntry(k, v)),
        2 => key.prop_map(Op::Get),
        1 => Just(Op::Optimize),
        1 => Just(Op::Clear),
    ];
    prop::collection::vec(op, 0..=120)
}

proptest! {
    #[test]
    fn operations_match_reference_model(ops in ops_strategy()) {
        let mut map: TernaryTreeMap<u32> = TernaryTreeMap::new();
        let mut model: BTreeMap<String, u32> = BTreeMap::new();

        for op in ops {
            match op {
                Op::Insert(key, value) => {
                    let result = map.insert(&key, value);
                    if model.contains_key(&key) {
                        prop_assert!(result.unwrap_err().is_duplicate_key());
                    } else {
                        prop_assert!(result.is_ok());
                        model.insert(key, value);
                    }
                }
                Op::Set(key, value) => {
                    let previous = map.set(&key, value).unwrap();
                    prop_assert_eq!(previous, model.insert(key, value));
                }
                Op::Remove(key) => {
                    prop_assert_eq!(map.remove(&key), model.remove(&key));
                }
                Op::RemoveEntry(key, value) => {
                    let expected = model.get(&key) == Some(&value);
                    prop_assert_eq!(map.remove_entry(&key, &value), expected);
                    if expected {
                        model.remove(&key);
                    }
                }
                Op::Get(key) => {
                    prop_assert_eq!(map.get(&key), model.get(&key));
                }
                Op::Optimize => map.optimize(),
                Op::Clear => {
                    map.clear();
                    model.clear();
                }
            }

            prop_assert_eq!(map.len(), model.len());
            let validation = map.check_invariants_detailed();
            prop_assert!(validation.is_ok(), "{:?}", validation);
        }

        // Iteration order and contents must match the ordered reference map.
        let items: Vec<(String, u32)> = map.items().map(|(k, v)| (k, *v)).collect();
        let expected: Vec<(String, u32)> = model.iter().map(|(k, v)| (k.clone(), *v)).collect();
        prop_assert_eq!(items, expected);
    }

    #[test]
    fn fuzzy_search_at_distance_zero_is_exact_prefix_search(
        keys in prop::collection::btree_set("[a-c]{1,6}", 0..40),
        prefix in "[a-c]{1,4}",
    ) {
        let mut map = TernaryTreeMap::new();
        for key in &keys {
            map.insert(key, key.clone()).unwrap();
        }

        let mut exact: Vec<String> = map.starts_with(&prefix).unwrap().cloned().collect();
        exact.sort();

        let mut fuzzy: Vec<String> = Vec::new();
        for hit in map.starts_with_fuzzy(&prefix, 0).unwrap() {
            prop_assert_eq!(hit.edit_distance, 0);
            fuzzy.push(hit.value.clone());
        }
        fuzzy.sort();

        prop_assert_eq!(exact, fuzzy);
    }
}
