use packed_json::{equal, Kind, JsonTree};

#[test]
fn sorts_object_keys_lexicographically() {
    let tree = JsonTree::parse(r#"{"b":2,"a":1}"#).unwrap();
    let sorted = tree.sorted();
    let keys: Vec<_> = sorted.keys(0).map(|k| sorted.key_text(k).to_string()).collect();
    assert_eq!(keys, vec!["a", "b"]);
}

#[test]
fn sort_recurses_into_nested_objects_and_preserves_array_order() {
    let tree = JsonTree::parse(r#"{"z":[{"y":1,"x":2}],"a":1}"#).unwrap();
    let sorted = tree.sorted();
    let keys: Vec<_> = sorted.keys(0).map(|k| sorted.key_text(k).to_string()).collect();
    assert_eq!(keys, vec!["a", "z"]);
    assert_eq!(sorted.serialize(), r#"{"a":1,"z":[{"x":2,"y":1}]}"#);
}

#[test]
fn stable_sort_preserves_relative_order_of_equal_keys() {
    // `sorted` alone never drops duplicates (only `deduplicate` does); a
    // stable sort keeps the two "a" entries in their original order.
    let tree = JsonTree::parse(r#"{"a":1,"a":2}"#).unwrap();
    assert_eq!(tree.sorted().serialize(), r#"{"a":1,"a":2}"#);
}

#[test]
fn equal_trees_after_independent_sorting() {
    let a = JsonTree::parse(r#"{"a":1,"b":2}"#).unwrap().sorted();
    let b = JsonTree::parse(r#"{"b":2,"a":1}"#).unwrap().sorted();
    assert!(equal(&a, &b));
}

#[test]
fn equal_handles_null_and_bool_without_an_atom_table_lookup() {
    let a = JsonTree::parse(r#"{"a":null,"b":true,"c":false}"#).unwrap().sorted();
    let b = JsonTree::parse(r#"{"b":true,"c":false,"a":null}"#).unwrap().sorted();
    assert!(equal(&a, &b));

    let mismatched = JsonTree::parse(r#"{"a":null,"b":false,"c":false}"#).unwrap().sorted();
    assert!(!equal(&a, &mismatched));
}

#[test]
fn unequal_trees_differ() {
    let a = JsonTree::parse(r#"{"a":1}"#).unwrap().sorted();
    let b = JsonTree::parse(r#"{"a":2}"#).unwrap().sorted();
    assert!(!equal(&a, &b));
}

#[test]
fn equal_trees_of_different_length_differ() {
    let a = JsonTree::parse(r#"{"a":1}"#).unwrap().sorted();
    let b = JsonTree::parse(r#"{"a":1,"b":2}"#).unwrap().sorted();
    assert!(!equal(&a, &b));
}

#[test]
fn deduplicate_keeps_the_first_occurrence() {
    let tree = JsonTree::parse(r#"{"a":1,"a":2}"#).unwrap();
    let deduped = tree.sorted().deduplicate();
    assert_eq!(deduped.serialize(), r#"{"a":1}"#);
}

#[test]
fn deduplicate_collapses_runs_longer_than_two() {
    let tree = JsonTree::parse(r#"{"b":9,"a":1,"a":2,"a":3}"#).unwrap();
    let deduped = tree.sorted().deduplicate();
    assert_eq!(deduped.serialize(), r#"{"a":1,"b":9}"#);
}

#[test]
fn deduplicate_recurses_into_retained_values() {
    let tree = JsonTree::parse(r#"{"a":{"x":1,"x":2}}"#).unwrap();
    let deduped = tree.sorted().deduplicate();
    assert_eq!(deduped.serialize(), r#"{"a":{"x":1}}"#);
}

#[test]
fn deduplicate_within_array_elements() {
    let tree = JsonTree::parse(r#"[{"a":1,"a":2},{"b":3}]"#).unwrap();
    let deduped = tree.sorted().deduplicate();
    assert_eq!(deduped.serialize(), r#"[{"a":1},{"b":3}]"#);
}

#[test]
fn empty_tree_sorts_and_dedups_to_itself() {
    let tree = JsonTree::empty();
    let sorted = tree.sorted();
    assert!(sorted.is_empty());
    assert!(sorted.deduplicate().is_empty());
}

#[test]
fn sorted_tree_kind_matches_source() {
    let tree = JsonTree::parse("[1,2,3]").unwrap();
    let sorted = tree.sorted();
    assert_eq!(sorted.kind(0), Kind::Array);
}

#[test]
fn sort_rebuilds_a_minimal_atom_table() {
    let tree = JsonTree::parse(r#"{"b":"x","a":"x"}"#).unwrap();
    let sorted = tree.sorted();
    // Both values are the text "x"; the rebuilt table interns it once.
    assert_eq!(sorted.atoms().len(), 3);
}
