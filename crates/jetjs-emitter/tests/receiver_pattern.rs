use super::*;
use jetjs_descriptors::{DescriptorArena, DescriptorId, FunctionSpec};

struct Fixture {
    descriptors: DescriptorArena,
    array_of: DescriptorId,
    starts_with: DescriptorId,
    nested: DescriptorId,
}

fn fixture() -> Fixture {
    let mut descriptors = DescriptorArena::new();
    let jet = descriptors.ensure_namespace_path("jet");
    let array_of = descriptors.add_function(jet, "arrayOf", FunctionSpec::member());
    let starts_with = descriptors.add_function(jet, "startsWith", FunctionSpec::extension());
    let collections = descriptors.ensure_namespace_path("jet.collections");
    let nested = descriptors.add_function(collections, "arrayOf", FunctionSpec::member());
    Fixture {
        descriptors,
        array_of,
        starts_with,
        nested,
    }
}

#[test]
fn test_matches_full_name_sequence() {
    let f = fixture();
    let pattern = ReceiverPattern::new(["jet", "arrayOf"]);
    assert!(pattern.matches(&f.descriptors, f.array_of));
    assert!(!pattern.matches(&f.descriptors, f.nested));

    let nested = ReceiverPattern::new(["jet", "collections", "arrayOf"]);
    assert!(nested.matches(&f.descriptors, f.nested));
    assert!(!nested.matches(&f.descriptors, f.array_of));
}

#[test]
fn test_receiver_presence_must_agree() {
    let f = fixture();
    let without = ReceiverPattern::new(["jet", "startsWith"]);
    assert!(!without.matches(&f.descriptors, f.starts_with));

    let with = ReceiverPattern::new(["jet", "startsWith"]).receiver_exists(true);
    assert!(with.requires_receiver());
    assert!(with.matches(&f.descriptors, f.starts_with));

    let with_on_member = ReceiverPattern::new(["jet", "arrayOf"]).receiver_exists(true);
    assert!(!with_on_member.matches(&f.descriptors, f.array_of));
}

#[test]
fn test_root_must_be_reached_exactly_when_names_run_out() {
    let f = fixture();
    // Names exhausted before the root namespace.
    assert!(!ReceiverPattern::new(["arrayOf"]).matches(&f.descriptors, f.array_of));
    // Root namespace reached with names left.
    assert!(!ReceiverPattern::new(["app", "jet", "arrayOf"]).matches(&f.descriptors, f.array_of));
}

#[test]
fn test_name_mismatch_and_empty_pattern() {
    let f = fixture();
    assert!(!ReceiverPattern::new(["jet", "listOf"]).matches(&f.descriptors, f.array_of));
    assert!(!ReceiverPattern::new(["kotlin", "arrayOf"]).matches(&f.descriptors, f.array_of));
    assert!(!ReceiverPattern::new(Vec::<String>::new()).matches(&f.descriptors, f.array_of));
    assert!(!ReceiverPattern::new(["jet"]).matches(&f.descriptors, DescriptorId(999)));
}

#[test]
fn test_serialized_form() {
    let pattern = ReceiverPattern::new(["jet", "toString"]).receiver_exists(true);
    let json = serde_json::to_value(&pattern).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!({ "names": ["jet", "toString"], "receiver_exists": true })
    );
}
