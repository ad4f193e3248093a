use super::*;
use crate::intrinsics::intrinsic_for_descriptor;
use crate::test_support::program_with_std_lib;
use jetjs_ast::OperationToken;
use jetjs_descriptors::FunctionSpec;

#[test]
fn test_unresolved_operator_assumes_intrinsic() {
    let (mut program, _) = program_with_std_lib();
    let a = program.nodes.add_name("a");
    let b = program.nodes.add_name("b");
    let sum = program.nodes.add_binary(a, OperationToken::Plus, b);

    let registry = IntrinsicRegistry::empty();
    let context = TranslationContext::new(&program, &registry);
    assert!(has_corresponding_intrinsic(&context, sum));
}

#[test]
fn test_resolved_operator_consults_registry() {
    let (mut program, std) = program_with_std_lib();
    let app = program.descriptors.ensure_namespace_path("app");
    let vec_class = program.descriptors.add_class(app, "Vec");
    let vec_plus = program
        .descriptors
        .add_function(vec_class, "plus", FunctionSpec::member());

    let a = program.nodes.add_name("a");
    let b = program.nodes.add_name("b");
    let int_sum = program.nodes.add_binary(a, OperationToken::Plus, b);
    let vec_sum = program.nodes.add_binary(a, OperationToken::Plus, b);
    program.bindings.record_operation(int_sum, std.int_plus);
    program.bindings.record_operation(vec_sum, vec_plus);

    let builtin = IntrinsicRegistry::builtin();
    let context = TranslationContext::new(&program, &builtin);
    assert!(has_corresponding_intrinsic(&context, int_sum));
    assert!(!has_corresponding_intrinsic(&context, vec_sum));

    let empty = IntrinsicRegistry::empty();
    let context = TranslationContext::new(&program, &empty);
    assert!(!has_corresponding_intrinsic(&context, int_sum));
}

#[test]
fn test_intrinsic_for_descriptor_uses_newest_rule() {
    let (program, std) = program_with_std_lib();
    let mut registry = IntrinsicRegistry::builtin();
    {
        let context = TranslationContext::new(&program, &registry);
        assert_eq!(
            intrinsic_for_descriptor(&context, std.int_plus).map(FunctionIntrinsic::name),
            Some("binary_operator")
        );
        assert!(intrinsic_for_descriptor(&context, std.jet).is_none());
    }

    registry.register_pattern(
        "Int.plus",
        FunctionIntrinsic::LibraryCall {
            function: "add".to_string(),
        },
    );
    let context = TranslationContext::new(&program, &registry);
    assert_eq!(
        intrinsic_for_descriptor(&context, std.int_plus).map(FunctionIntrinsic::name),
        Some("library_call")
    );
}
