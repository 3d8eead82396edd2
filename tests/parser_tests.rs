use packed_json::{Kind, JsonTree};

#[test]
fn parses_scalars() {
    assert_eq!(JsonTree::parse("null").unwrap().kind(0), Kind::Null);
    assert_eq!(JsonTree::parse("true").unwrap().kind(0), Kind::Bool);
    assert_eq!(JsonTree::parse("42").unwrap().kind(0), Kind::Int);
    assert_eq!(JsonTree::parse("4.2").unwrap().kind(0), Kind::Float);
    assert_eq!(JsonTree::parse("1e10").unwrap().kind(0), Kind::Float);
    assert_eq!(JsonTree::parse("\"hi\"").unwrap().kind(0), Kind::String);
}

#[test]
fn rejects_trailing_garbage() {
    assert!(JsonTree::parse("1 2").is_err());
    assert!(JsonTree::parse("{} {}").is_err());
}

#[test]
fn rejects_missing_colon() {
    assert!(JsonTree::parse(r#"{"a" 1}"#).is_err());
}

#[test]
fn reports_line_and_column_on_error() {
    let err = JsonTree::parse("{\n  \"a\": ,\n}").unwrap_err();
    assert_eq!(err.line, 2);
}

#[test]
fn unescapes_strings() {
    let tree = JsonTree::parse(r#""a\nbA""#).unwrap();
    assert_eq!(tree.try_str("").unwrap(), "a\nbA");
}

#[test]
fn unescapes_surrogate_pairs() {
    let tree = JsonTree::parse("\"\\uD83D\\uDE00\"").unwrap();
    assert_eq!(tree.try_str("").unwrap(), "\u{1F600}");
}

#[test]
fn scenario_1_resolves_a_nested_path_after_parsing() {
    let tree = JsonTree::parse(r#"{"a":[1,false,{"key":[4,5]},4]}"#).unwrap();
    assert_eq!(tree.kind_at("/a/2/key/0"), Some(Kind::Int));
    assert_eq!(tree.kind(0), Kind::Object);
}

#[test]
fn rejects_malformed_number() {
    assert!(JsonTree::parse("01").is_err());
    assert!(JsonTree::parse("1.").is_err());
    assert!(JsonTree::parse("-").is_err());
}

#[test]
fn rejects_unterminated_string() {
    assert!(JsonTree::parse("\"abc").is_err());
}
