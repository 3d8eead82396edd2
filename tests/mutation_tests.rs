use packed_json::JsonTree;

#[test]
fn scenario_2_remove_array_element() {
    let mut tree = JsonTree::parse(r#"{"a":[1,false,{"key":[4,5]},4]}"#).unwrap();
    tree.remove("/a/1").unwrap();
    assert_eq!(tree.serialize(), r#"{"a":[1,{"key":[4,5]},4]}"#);
}

#[test]
fn scenario_3_replace_array_element() {
    let mut tree = JsonTree::parse(r#"{"a":1,"b":{"c":2,"d":3},"e":[4,5,6]}"#).unwrap();
    let seven = JsonTree::parse("7").unwrap();
    tree.replace("/e/2", &seven).unwrap();
    assert_eq!(tree.serialize(), r#"{"a":1,"b":{"c":2,"d":3},"e":[4,5,7]}"#);
}

#[test]
fn replace_missing_target_is_an_error() {
    let mut tree = JsonTree::parse(r#"{"a":1}"#).unwrap();
    let two = JsonTree::parse("2").unwrap();
    assert!(tree.replace("/b", &two).is_err());
}

#[test]
fn scenario_4_add_appends_new_key() {
    let mut tree = JsonTree::parse(r#"{"a":1,"b":{"c":2},"d":3}"#).unwrap();
    let value = JsonTree::parse(r#"{"f":5}"#).unwrap();
    tree.add("/b/e", &value).unwrap();
    assert_eq!(tree.serialize(), r#"{"a":1,"b":{"c":2,"e":{"f":5}},"d":3}"#);
}

#[test]
fn add_to_existing_array_index_inserts_before() {
    let mut tree = JsonTree::parse("[1,2,3]").unwrap();
    let value = JsonTree::parse("99").unwrap();
    tree.add("/1", &value).unwrap();
    assert_eq!(tree.serialize(), "[1,99,2,3]");
}

#[test]
fn add_dash_appends_to_array() {
    let mut tree = JsonTree::parse("[1,2,3]").unwrap();
    let value = JsonTree::parse("4").unwrap();
    tree.add("/-", &value).unwrap();
    assert_eq!(tree.serialize(), "[1,2,3,4]");
}

#[test]
fn add_to_existing_object_key_replaces() {
    let mut tree = JsonTree::parse(r#"{"a":1}"#).unwrap();
    let value = JsonTree::parse("2").unwrap();
    tree.add("/a", &value).unwrap();
    assert_eq!(tree.serialize(), r#"{"a":2}"#);
}

#[test]
fn add_at_root_replaces_whole_document() {
    let mut tree = JsonTree::parse(r#"{"a":1}"#).unwrap();
    let value = JsonTree::parse("[1,2]").unwrap();
    tree.add("", &value).unwrap();
    assert_eq!(tree.serialize(), "[1,2]");
}

#[test]
fn remove_root_leaves_an_empty_tree() {
    let mut tree = JsonTree::parse("[1,2]").unwrap();
    tree.remove("").unwrap();
    assert!(tree.is_empty());
}

#[test]
fn remove_missing_target_is_an_error() {
    let mut tree = JsonTree::parse(r#"{"a":1}"#).unwrap();
    assert!(tree.remove("/b").is_err());
}

#[test]
fn scenario_5_copy_ancestor_of_destination_errors() {
    let mut tree = JsonTree::parse(r#"{"a":{"x":1}}"#).unwrap();
    assert!(tree.copy("/a", "/a/x").is_err());
}

#[test]
fn copy_then_remove_restores_original_shape() {
    let mut tree = JsonTree::parse(r#"{"a":1,"b":{"c":2}}"#).unwrap();
    let before = tree.serialize();
    tree.copy("/a", "/b/copied").unwrap();
    tree.remove("/b/copied").unwrap();
    assert_eq!(tree.serialize(), before);
}

#[test]
fn copy_leaves_the_source_untouched() {
    let mut tree = JsonTree::parse(r#"{"a":{"x":1},"b":{}}"#).unwrap();
    tree.copy("/a", "/b/a").unwrap();
    assert_eq!(tree.serialize(), r#"{"a":{"x":1},"b":{"a":{"x":1}}}"#);
}

#[test]
fn move_within_the_same_array_forward() {
    let mut tree = JsonTree::parse("[1,2,3]").unwrap();
    tree.r#move("/0", "/-").unwrap();
    assert_eq!(tree.serialize(), "[2,3,1]");
}

#[test]
fn move_within_the_same_array_backward() {
    let mut tree = JsonTree::parse("[1,2,3]").unwrap();
    tree.r#move("/2", "/0").unwrap();
    assert_eq!(tree.serialize(), "[3,1,2]");
}

#[test]
fn move_renames_an_object_key() {
    let mut tree = JsonTree::parse(r#"{"a":1,"b":2}"#).unwrap();
    tree.r#move("/a", "/c").unwrap();
    assert_eq!(tree.serialize(), r#"{"b":2,"c":1}"#);
}

#[test]
fn move_ancestor_of_destination_errors() {
    let mut tree = JsonTree::parse(r#"{"a":{"x":1}}"#).unwrap();
    assert!(tree.r#move("/a", "/a/x").is_err());
}

#[test]
fn scenario_7_test_compares_by_span() {
    let tree = JsonTree::parse(r#"{"arr":[1,2,3,4]}"#).unwrap();
    let matching = JsonTree::parse("[1,2,3,4]").unwrap();
    let mismatched = JsonTree::parse("[1,2,3]").unwrap();
    assert!(tree.test("/arr", &matching).unwrap());
    assert!(!tree.test("/arr", &mismatched).unwrap());
}

#[test]
fn test_compares_atom_text_not_atom_id_across_trees() {
    // "hello" is atom id 4 in `tree` (after z, 1, a) but atom id 1 in
    // `value`; `test` must compare by text, not raw id.
    let tree = JsonTree::parse(r#"{"z":1,"a":"hello"}"#).unwrap();
    let value = JsonTree::parse(r#""hello""#).unwrap();
    assert!(tree.test("/a", &value).unwrap());
}

#[test]
fn test_missing_path_is_an_error() {
    let tree = JsonTree::parse(r#"{"a":1}"#).unwrap();
    let one = JsonTree::parse("1").unwrap();
    assert!(tree.test("/b", &one).is_err());
}
