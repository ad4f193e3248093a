use super::*;

#[test]
fn test_parse_dotted_path() {
    let name = FqName::parse("jet.String.length");
    assert_eq!(name.len(), 3);
    assert_eq!(name.path_segments(), ["jet", "String", "length"]);
    assert_eq!(name.short_name(), Some("length"));
    assert!(name.is_in_root_namespace());
}

#[test]
fn test_root_path() {
    let root = FqName::parse("");
    assert!(root.is_root());
    assert_eq!(root, FqName::ROOT);
    assert_eq!(root.parent(), None);
    assert_eq!(root.short_name(), None);
    assert_eq!(root.to_string(), "<root>");
}

#[test]
fn test_parent_and_child() {
    let name = FqName::parse("jet.Int");
    assert_eq!(name.child("plus"), FqName::parse("jet.Int.plus"));
    assert_eq!(name.parent(), Some(FqName::parse("jet")));
    assert_eq!(FqName::parse("jet").parent(), Some(FqName::ROOT));
}

#[test]
fn test_display_joins_with_dots() {
    assert_eq!(FqName::parse("foo.bar.baz").to_string(), "foo.bar.baz");
    assert!(!FqName::parse("foo.bar").is_in_root_namespace());
}
