//! Behavioral tests for the public map surface, exercising operations in
//! combination.

use ternarytree::{TernaryTreeError, TernaryTreeMap};

fn map_of(keys: &[&str]) -> TernaryTreeMap<String> {
    let mut map = TernaryTreeMap::new();
    for key in keys {
        map.insert(key, key.to_string()).unwrap();
    }
    map
}

#[test]
fn adding_a_duplicate_key_fails() {
    let mut map = TernaryTreeMap::new();
    map.insert("Test", "Data").unwrap();

    let err = map.insert("Test", "Data").unwrap_err();
    assert_eq!(err, TernaryTreeError::duplicate_key("Test"));
    assert_eq!(map.len(), 1);
}

#[test]
fn values_returns_all_values() {
    let map = map_of(&["a", "aa", "c", "b"]);
    let mut values: Vec<&String> = map.values().collect();
    values.sort();
    assert_eq!(values, [&"a", &"aa", &"b", &"c"]);
}

#[test]
fn keys_returns_all_keys_in_ascending_order() {
    let map = map_of(&["a", "aa", "c", "b"]);
    let keys: Vec<String> = map.keys().collect();
    assert_eq!(keys, ["a", "aa", "b", "c"]);
}

#[test]
fn all_key_value_pairs_can_be_enumerated() {
    let map = map_of(&["a", "aa", "c", "b"]);
    let items: Vec<(String, &String)> = map.items().collect();
    let expected: Vec<String> = ["a", "aa", "b", "c"].iter().map(|s| s.to_string()).collect();

    assert_eq!(
        items.iter().map(|(k, _)| k.clone()).collect::<Vec<_>>(),
        expected
    );
    assert!(items.iter().all(|(k, v)| &k == v));
}

#[test]
fn contains_key_distinguishes_prefixes_and_extensions() {
    let mut map = TernaryTreeMap::new();
    let key = "Test";

    assert!(!map.contains_key(key));
    map.insert(key, "Data").unwrap();

    assert!(map.contains_key(key));
    assert!(!map.contains_key(&key[..3]));
    assert!(!map.contains_key("Testt"));
}

#[test]
fn get_item_returns_each_stored_value_and_fails_on_absent_keys() {
    let mut map = TernaryTreeMap::new();
    map.insert("Test1", 1).unwrap();
    map.insert("Test2", 2).unwrap();

    assert_eq!(map.get_item("Test1").unwrap(), &1);
    assert_eq!(map.get_item("Test2").unwrap(), &2);
    assert_eq!(map.get_item("Test3"), Err(TernaryTreeError::KeyNotFound));
}

#[test]
fn len_tracks_every_insertion() {
    let mut map = TernaryTreeMap::new();
    assert_eq!(map.len(), 0);

    for i in 1..=34 {
        map.insert(&format!("Test{}", i), "").unwrap();
        assert_eq!(map.len(), i);
    }
}

#[test]
fn set_overwrites_without_growing() {
    let mut map = TernaryTreeMap::new();

    map.set("Test1", 2).unwrap();
    map.set("Test2", 1).unwrap();
    assert_eq!(map.len(), 2);

    map.set("Test1", 1).unwrap();
    map.set("Test2", 2).unwrap();
    assert_eq!(map.len(), 2);

    assert_eq!(map.get("Test1"), Some(&1));
    assert_eq!(map.get("Test2"), Some(&2));
}

#[test]
fn removing_every_key_empties_the_map() {
    let mut map = map_of(&["a", "aa", "c", "b"]);

    assert_eq!(map.remove("d"), None);
    assert_eq!(map.remove("a"), Some("a".to_string()));
    assert_eq!(map.remove("b"), Some("b".to_string()));
    assert_eq!(map.remove("c"), Some("c".to_string()));
    assert_eq!(map.remove("aa"), Some("aa".to_string()));
    assert_eq!(map.remove("d"), None);

    assert_eq!(map.len(), 0);
    for key in ["a", "b", "c", "aa"] {
        assert!(!map.contains_key(key));
    }
    map.check_invariants_detailed().unwrap();
}

#[test]
fn removing_some_keys_keeps_the_rest() {
    let mut map = map_of(&["a", "aa", "c", "b"]);

    map.remove("d");
    map.remove("a");
    map.remove("b");
    map.remove("c");
    map.remove("d");

    assert_eq!(map.len(), 1);
    assert!(!map.contains_key("a"));
    assert!(!map.contains_key("b"));
    assert!(!map.contains_key("c"));
    assert!(map.contains_key("aa"));
    map.check_invariants_detailed().unwrap();
}

#[test]
fn clear_resets_and_the_map_stays_usable() {
    let mut map = TernaryTreeMap::new();

    map.insert("Test", "data").unwrap();
    map.clear();
    map.insert("Test", "data").unwrap();
    map.clear();

    assert_eq!(map.len(), 0);
    assert!(!map.contains_key("Test"));
}

#[test]
fn optimize_changes_no_query_results() {
    let mut map = map_of(&["testa", "testb", "test", "tesk", "team", "toast"]);
    let items_before: Vec<(String, String)> = map.items().map(|(k, v)| (k, v.clone())).collect();
    let prefixed_before: Vec<String> = map.starts_with("tes").unwrap().cloned().collect();

    for _ in 0..3 {
        map.optimize();

        let items: Vec<(String, String)> = map.items().map(|(k, v)| (k, v.clone())).collect();
        assert_eq!(items, items_before);

        let mut prefixed: Vec<String> = map.starts_with("tes").unwrap().cloned().collect();
        let mut expected = prefixed_before.clone();
        prefixed.sort();
        expected.sort();
        assert_eq!(prefixed, expected);

        assert_eq!(map.len(), items_before.len());
        map.check_invariants_detailed().unwrap();
    }
}

#[test]
fn prefix_results_track_removals() {
    let mut map = map_of(&["testa", "testb", "test", "tesk"]);

    map.remove("testb");
    let mut matched: Vec<&String> = map.starts_with("test").unwrap().collect();
    matched.sort();
    assert_eq!(matched, [&"test", &"testa"]);

    map.remove("test");
    let mut matched: Vec<&String> = map.starts_with("test").unwrap().collect();
    matched.sort();
    assert_eq!(matched, [&"testa"]);
}

#[test]
fn fuzzy_results_survive_optimize() {
    let mut map = map_of(&["lurcheck", "luarcheck"]);
    map.optimize();

    let hits: Vec<(String, usize)> = map
        .starts_with_fuzzy("lurarcheck", 1)
        .unwrap()
        .map(|hit| (hit.value.clone(), hit.edit_distance))
        .collect();
    assert_eq!(hits, [("luarcheck".to_string(), 1)]);
}
