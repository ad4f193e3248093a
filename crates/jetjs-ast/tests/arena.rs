use super::*;

#[test]
fn test_children_precede_parents() {
    let mut arena = NodeArena::new();
    let a = arena.add_name("a");
    let one = arena.add_int(1);
    let sum = arena.add_binary(a, OperationToken::Plus, one);

    assert_eq!(arena.len(), 3);
    assert!(a < sum && one < sum);
    assert!(matches!(
        arena.get(sum),
        Some(Node::Binary {
            operation: OperationToken::Plus,
            right: Some(_),
            ..
        })
    ));
}

#[test]
fn test_add_call_creates_callee_and_positional_arguments() {
    let mut arena = NodeArena::new();
    let x = arena.add_name("x");
    let call = arena.add_call("println", &[x]);

    let Some(Node::Call { callee, arguments }) = arena.get(call) else {
        panic!("expected call node");
    };
    assert_eq!(arena.name_text(*callee), Some("println"));
    assert_eq!(arguments.len(), 1);
    assert_eq!(arguments[0].argument_expression(), Some(x));
    assert_eq!(arguments[0].name, None);
}

#[test]
fn test_operation_expressions() {
    let mut arena = NodeArena::new();
    let flag = arena.add_name("flag");
    let not = arena.add_prefix(OperationToken::Excl, flag);
    let paren = arena.add_parenthesized(not);

    assert!(arena.get(not).is_some_and(Node::is_operation_expression));
    assert_eq!(
        arena.get(not).and_then(Node::operation_token),
        Some(OperationToken::Excl)
    );
    assert!(!arena.get(paren).is_some_and(Node::is_operation_expression));
}

#[test]
fn test_operation_token_spelling() {
    assert_eq!(OperationToken::Plus.js_operator(), Some("+"));
    assert_eq!(OperationToken::Elvis.js_operator(), None);
    assert_eq!(OperationToken::ExclExcl.as_str(), "!!");
    assert_eq!(OperationToken::Mul.function_name(), Some("times"));
    assert_eq!(OperationToken::GtEq.function_name(), Some("compareTo"));
    assert!(OperationToken::PlusAssign.is_assignment());
    assert!(OperationToken::Lt.is_comparison());
    assert!(OperationToken::NotEq.is_equality());
}

#[test]
fn test_identifier_texts_include_property_names() {
    let mut arena = NodeArena::new();
    let init = arena.add_name("source");
    arena.add_property("target", false, Some(init));
    let names: Vec<&str> = arena.identifier_texts().collect();
    assert_eq!(names, vec!["source", "target"]);
}

#[test]
fn test_arena_json_shape() {
    let mut arena = NodeArena::new();
    let s = arena.add_string("hi");
    arena.add_name("s");
    let json = serde_json::to_value(&arena).expect("serialize arena");
    assert_eq!(json[0]["node"], "constant");
    assert_eq!(json[1]["node"], "simple_name");
    assert_eq!(json[1]["name"], "s");

    let back: NodeArena = serde_json::from_value(json).expect("deserialize arena");
    assert_eq!(back.get(s), Some(&Node::Constant(Constant::String("hi".into()))));
}
