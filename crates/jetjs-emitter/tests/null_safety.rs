use super::*;
use crate::null_safety::{
    is_not_null_check, is_null_check, needs_caching, not_null_conditional,
    not_null_conditional_source, not_null_conditional_test_expression, safe_access,
    temporary_if_needed,
};
use crate::test_support::print;
use jetjs_descriptors::ResolvedProgram;

fn f_call() -> IRNode {
    IRNode::call(IRNode::id("f"), vec![])
}

#[test]
fn test_null_check_text() {
    assert_eq!(print(&is_null_check(IRNode::id("x"))), "x === null || x === void 0");
    assert_eq!(print(&is_not_null_check(IRNode::id("x"))), "x !== null && x !== void 0");
}

#[test]
fn test_needs_caching() {
    assert!(!needs_caching(&IRNode::id("x")));
    assert!(needs_caching(&IRNode::prop(IRNode::id("a"), "b")));
    assert!(needs_caching(&f_call()));
    assert!(needs_caching(&IRNode::this()));
    assert!(needs_caching(&IRNode::number("1")));
}

#[test]
fn test_bare_identifier_needs_no_temporary() {
    let program = ResolvedProgram::new();
    let registry = IntrinsicRegistry::empty();
    let mut context = TranslationContext::new(&program, &registry);

    let lowered = not_null_conditional(IRNode::id("x"), IRNode::number("0"), &mut context);
    assert_eq!(context.temporary_count(), 0);
    assert_eq!(print(&lowered), "x !== null && x !== void 0 ? x : 0");
}

#[test]
fn test_other_expressions_use_exactly_one_temporary() {
    let program = ResolvedProgram::new();
    let registry = IntrinsicRegistry::empty();

    for expression in [IRNode::prop(IRNode::id("a"), "b"), f_call()] {
        let mut context = TranslationContext::new(&program, &registry);
        let lowered = not_null_conditional(expression.clone(), IRNode::number("0"), &mut context);
        assert_eq!(context.temporary_count(), 1);
        assert_eq!(
            print(&lowered),
            format!("(_a = {}) !== null && _a !== void 0 ? _a : 0", print(&expression))
        );
    }
}

#[test]
fn test_test_expression_for_cached_value() {
    let program = ResolvedProgram::new();
    let registry = IntrinsicRegistry::empty();
    let mut context = TranslationContext::new(&program, &registry);
    let cached = context.declare_temporary(f_call());
    assert_eq!(
        print(&not_null_conditional_test_expression(&cached)),
        "(_a = f()) !== null && _a !== void 0"
    );
}

#[test]
fn test_temporary_if_needed() {
    let program = ResolvedProgram::new();
    let registry = IntrinsicRegistry::empty();
    let mut context = TranslationContext::new(&program, &registry);

    let (temporary, reference) = temporary_if_needed(IRNode::id("x"), &mut context);
    assert!(temporary.is_none());
    assert_eq!(reference, IRNode::id("x"));

    let (temporary, reference) = temporary_if_needed(f_call(), &mut context);
    let temporary = temporary.expect("call is cached");
    assert_eq!(temporary.value(), &f_call());
    assert_eq!(reference, IRNode::id("_a"));
}

#[test]
fn test_source_adapter_lowers_first() {
    let mut program = ResolvedProgram::new();
    let a = program.nodes.add_name("a");
    let b = program.nodes.add_name("b");
    let access = program.nodes.add_dot_qualified(a, b);
    let registry = IntrinsicRegistry::empty();
    let mut context = TranslationContext::new(&program, &registry);

    let lowered = not_null_conditional_source(access, IRNode::string("none"), &mut context)
        .expect("lowers");
    assert_eq!(
        print(&lowered),
        "(_a = a.b) !== null && _a !== void 0 ? _a : \"none\""
    );
}

#[test]
fn test_temporaries_avoid_program_names() {
    let mut program = ResolvedProgram::new();
    program.nodes.add_name("_a");
    let registry = IntrinsicRegistry::empty();
    let mut context = TranslationContext::new(&program, &registry);

    let lowered = not_null_conditional(f_call(), IRNode::NullLiteral, &mut context);
    assert_eq!(
        print(&lowered),
        "(_b = f()) !== null && _b !== void 0 ? _b : null"
    );
}

#[test]
fn test_safe_access() {
    let program = ResolvedProgram::new();
    let registry = IntrinsicRegistry::empty();
    let mut context = TranslationContext::new(&program, &registry);

    let simple = safe_access(IRNode::id("a"), &mut context, |reference, _| {
        Ok(IRNode::prop(reference, "b"))
    })
    .expect("lowers");
    assert_eq!(print(&simple), "a !== null && a !== void 0 ? a.b : null");

    let cached = safe_access(f_call(), &mut context, |reference, _| {
        Ok(IRNode::call(IRNode::prop(reference, "g"), vec![]))
    })
    .expect("lowers");
    assert_eq!(
        print(&cached),
        "(_a = f()) !== null && _a !== void 0 ? _a.g() : null"
    );
}
