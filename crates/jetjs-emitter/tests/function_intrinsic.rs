use super::*;
use crate::intrinsics::IntrinsicCall;
use crate::test_support::print;
use jetjs_ast::OperationToken;

fn ids(names: &[&str]) -> Vec<IRNode> {
    names.iter().map(|name| IRNode::id(*name)).collect()
}

fn apply(intrinsic: &FunctionIntrinsic, receiver: Option<&str>, arguments: &[&str]) -> String {
    let call = IntrinsicCall::new(receiver.map(IRNode::id), ids(arguments));
    print(&intrinsic.apply(call).expect("intrinsic applies"))
}

#[test]
fn test_operators() {
    let plus = FunctionIntrinsic::BinaryOperator {
        operator: "+".to_string(),
    };
    assert_eq!(apply(&plus, Some("a"), &["b"]), "a + b");
    assert_eq!(apply(&FunctionIntrinsic::TruncatingDivision, Some("a"), &["b"]), "a / b | 0");
    let not = FunctionIntrinsic::PrefixOperator {
        operator: "!".to_string(),
    };
    assert_eq!(apply(&not, Some("flag"), &[]), "!flag");
    let inc = FunctionIntrinsic::Increment {
        operator: "+".to_string(),
    };
    assert_eq!(apply(&inc, Some("i"), &[]), "i + 1");
}

#[test]
fn test_arity_is_checked() {
    let plus = FunctionIntrinsic::BinaryOperator {
        operator: "+".to_string(),
    };
    let err = plus
        .apply(IntrinsicCall::new(Some(IRNode::id("a")), vec![]))
        .expect_err("missing operand");
    assert_eq!(
        err,
        LoweringError::IntrinsicArity {
            intrinsic: "binary_operator",
            expected: 2,
            found: 1,
        }
    );

    let method = FunctionIntrinsic::MethodCall {
        method: "trim".to_string(),
    };
    assert!(method.apply(IntrinsicCall::new(None, vec![])).is_err());
}

#[test]
fn test_member_and_element_access() {
    let length = FunctionIntrinsic::PropertyAccess {
        property: "length".to_string(),
    };
    assert_eq!(apply(&length, Some("s"), &[]), "s.length");
    assert_eq!(apply(&FunctionIntrinsic::ElementGet, Some("a"), &["i"]), "a[i]");
    assert_eq!(apply(&FunctionIntrinsic::ElementSet, Some("a"), &["i", "v"]), "a[i] = v");
    let method = FunctionIntrinsic::MethodCall {
        method: "startsWith".to_string(),
    };
    assert_eq!(apply(&method, Some("s"), &["p"]), "s.startsWith(p)");
}

#[test]
fn test_calls() {
    let library = FunctionIntrinsic::LibraryCall {
        function: "hashCode".to_string(),
    };
    assert_eq!(apply(&library, Some("o"), &[]), "jet.hashCode(o)");
    let global = FunctionIntrinsic::GlobalCall {
        function: "console.log".to_string(),
    };
    assert_eq!(apply(&global, None, &["message"]), "console.log(message)");
    let constructor = FunctionIntrinsic::Constructor {
        constructor: "jet.NumberRange".to_string(),
    };
    assert_eq!(apply(&constructor, Some("a"), &["b"]), "new jet.NumberRange(a, b)");
    assert_eq!(apply(&FunctionIntrinsic::ArrayOf, None, &["a", "b"]), "[a, b]");
    assert_eq!(apply(&FunctionIntrinsic::ArrayOf, None, &[]), "[]");
}

#[test]
fn test_comparison_uses_call_site_operator() {
    let compare = FunctionIntrinsic::PrimitiveComparison;
    let call = IntrinsicCall::new(Some(IRNode::id("a")), ids(&["b"]))
        .with_operation(OperationToken::GtEq);
    assert_eq!(print(&compare.apply(call).expect("applies")), "a >= b");
    assert_eq!(apply(&compare, Some("a"), &["b"]), "jet.compare(a, b)");
}

#[test]
fn test_equals() {
    let primitive = FunctionIntrinsic::Equals { primitive: true };
    let object = FunctionIntrinsic::Equals { primitive: false };
    assert_eq!(apply(&primitive, Some("a"), &["b"]), "a === b");
    assert_eq!(apply(&object, Some("a"), &["b"]), "jet.equals(a, b)");

    let negated = |intrinsic: &FunctionIntrinsic| {
        let call = IntrinsicCall::new(Some(IRNode::id("a")), ids(&["b"]))
            .with_operation(OperationToken::NotEq);
        print(&intrinsic.apply(call).expect("applies"))
    };
    assert_eq!(negated(&primitive), "a !== b");
    assert_eq!(negated(&object), "!jet.equals(a, b)");
}

#[test]
fn test_deserialize_intrinsic() {
    let intrinsic: FunctionIntrinsic =
        serde_json::from_str(r#"{ "kind": "method_call", "method": "trim" }"#).expect("valid");
    assert_eq!(
        intrinsic,
        FunctionIntrinsic::MethodCall {
            method: "trim".to_string()
        }
    );
    assert_eq!(intrinsic.name(), "method_call");
}
