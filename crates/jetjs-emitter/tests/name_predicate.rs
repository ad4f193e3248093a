use super::*;

#[test]
fn test_accepts_exactly_the_listed_names() {
    let predicate = NamePredicate::new(["a", "b", "c"]);
    for name in ["a", "b", "c"] {
        assert!(predicate.accepts(name), "{name} should be accepted");
    }
    for name in ["d", "A", "", "ab", "a|b"] {
        assert!(!predicate.accepts(name), "{name} should be rejected");
    }
}

#[test]
fn test_parse_alternatives() {
    let predicate = NamePredicate::parse_alternatives("String|CharSequence");
    assert_eq!(predicate.names(), ["String", "CharSequence"]);
    assert!(predicate.accepts("CharSequence"));
    assert!(!predicate.accepts("string"));
}

#[test]
fn test_root_namespace_predicate() {
    let root = NamePredicate::root_namespace();
    assert!(root.accepts("jet"));
    assert!(!root.accepts("kotlin"));
}

#[test]
fn test_display_and_serialization() {
    let predicate = NamePredicate::new(["Int", "Long"]);
    assert_eq!(predicate.to_string(), "Int|Long");
    assert_eq!(
        serde_json::to_string(&predicate).expect("serialize"),
        r#"["Int","Long"]"#
    );
}
