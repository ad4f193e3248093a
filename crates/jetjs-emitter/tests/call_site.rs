use super::*;
use crate::call_site::{
    assign_to_backing_field, backing_field_reference, create_data_descriptor,
    default_accessor_descriptor, define_property, generate_call_argument_list, qualified_reference,
    translate_argument_list, translate_base_expression, translate_expression_list,
    translate_initializer_for_property, translate_left_expression, translate_property_as_descriptor,
    translate_right_expression,
};
use crate::test_support::print;
use jetjs_ast::{Node, OperationToken, ValueArgument};
use jetjs_descriptors::{DescriptorId, FunctionSpec, Modality, PropertySpec, ResolvedProgram};

fn context_for<'a>(
    program: &'a ResolvedProgram,
    registry: &'a IntrinsicRegistry,
) -> TranslationContext<'a> {
    TranslationContext::new(program, registry)
}

#[test]
fn test_generate_call_argument_list() {
    let receiver = IRNode::id("r");
    assert_eq!(
        generate_call_argument_list(receiver.clone(), vec![]),
        vec![receiver.clone()]
    );
    assert_eq!(
        generate_call_argument_list(receiver.clone(), vec![IRNode::id("a"), IRNode::id("b")]),
        vec![receiver, IRNode::id("a"), IRNode::id("b")]
    );
}

#[test]
fn test_empty_argument_list_is_empty() {
    let program = ResolvedProgram::new();
    let registry = IntrinsicRegistry::empty();
    let mut context = context_for(&program, &registry);
    assert_eq!(translate_argument_list(&mut context, &[]), Ok(vec![]));
    assert_eq!(context.temporary_count(), 0);
}

#[test]
fn test_arguments_are_lowered_in_order() {
    let mut program = ResolvedProgram::new();
    let one = program.nodes.add_int(1);
    let name = program.nodes.add_name("x");
    let text = program.nodes.add_string("s");
    let registry = IntrinsicRegistry::empty();
    let mut context = context_for(&program, &registry);

    let arguments = [
        ValueArgument::positional(one),
        ValueArgument {
            name: Some("label".to_string()),
            expression: Some(name),
        },
        ValueArgument::positional(text),
    ];
    let lowered = translate_argument_list(&mut context, &arguments).expect("lowers");
    assert_eq!(
        lowered,
        vec![IRNode::number("1"), IRNode::id("x"), IRNode::string("s")]
    );

    let list = translate_expression_list(&mut context, &[text, one]).expect("lowers");
    assert_eq!(list, vec![IRNode::string("s"), IRNode::number("1")]);
}

#[test]
#[should_panic(expected = "argument with no expression")]
fn test_argument_without_expression_panics() {
    let program = ResolvedProgram::new();
    let registry = IntrinsicRegistry::empty();
    let mut context = context_for(&program, &registry);
    let arguments = [ValueArgument {
        name: None,
        expression: None,
    }];
    let _ = translate_argument_list(&mut context, &arguments);
}

#[test]
fn test_operands_of_operation_expressions() {
    let mut program = ResolvedProgram::new();
    let a = program.nodes.add_name("a");
    let b = program.nodes.add_name("b");
    let sum = program.nodes.add_binary(a, OperationToken::Plus, b);
    let negated = program.nodes.add_prefix(OperationToken::Excl, a);
    let registry = IntrinsicRegistry::empty();
    let mut context = context_for(&program, &registry);

    assert_eq!(translate_left_expression(&mut context, sum), Ok(IRNode::id("a")));
    assert_eq!(translate_right_expression(&mut context, sum), Ok(IRNode::id("b")));
    assert_eq!(translate_base_expression(&mut context, negated), Ok(IRNode::id("a")));
}

#[test]
#[should_panic(expected = "binary expression should have a right expression")]
fn test_binary_without_right_side_panics() {
    let mut program = ResolvedProgram::new();
    let a = program.nodes.add_name("a");
    let incomplete = program.nodes.add(Node::Binary {
        left: a,
        operation: OperationToken::Plus,
        right: None,
    });
    let registry = IntrinsicRegistry::empty();
    let mut context = context_for(&program, &registry);
    let _ = translate_right_expression(&mut context, incomplete);
}

#[test]
#[should_panic(expected = "unary expression should have a base expression")]
fn test_unary_without_base_panics() {
    let mut program = ResolvedProgram::new();
    let incomplete = program.nodes.add(Node::Prefix {
        operation: OperationToken::Minus,
        base: None,
    });
    let registry = IntrinsicRegistry::empty();
    let mut context = context_for(&program, &registry);
    let _ = translate_base_expression(&mut context, incomplete);
}

#[test]
fn test_property_descriptor_entries() {
    let mut program = ResolvedProgram::new();
    let app = program.descriptors.ensure_namespace_path("app");
    let point = program.descriptors.add_class(app, "Point");
    let member = program.descriptors.add_property(point, "x", PropertySpec::var());
    let extension = program
        .descriptors
        .add_property(app, "size", PropertySpec::val().extension());
    let open_extension = program.descriptors.add_property(
        app,
        "width",
        PropertySpec::val().extension().with_modality(Modality::Open),
    );
    let registry = IntrinsicRegistry::empty();
    let context = context_for(&program, &registry);
    let f = IRNode::id("f");

    let getter = translate_property_as_descriptor(&context, member.getter, f.clone()).unwrap();
    assert_eq!(getter, IRProperty::init_string("get", f.clone()));
    let setter = member.setter.expect("var has a setter");
    let setter = translate_property_as_descriptor(&context, setter, f.clone()).unwrap();
    assert_eq!(setter, IRProperty::init_string("set", f.clone()));

    let data = translate_property_as_descriptor(&context, extension.getter, f.clone()).unwrap();
    assert_eq!(data.key.text(), "get_size");
    assert_eq!(print(&data.value), "{ value: f, writable: false }");

    let writable = translate_property_as_descriptor(&context, open_extension.getter, f).unwrap();
    assert_eq!(print(&writable.value), "{ value: f, writable: true }");
}

#[test]
fn test_unknown_descriptor_is_an_error() {
    let program = ResolvedProgram::new();
    let registry = IntrinsicRegistry::empty();
    let context = context_for(&program, &registry);
    let missing = DescriptorId(99);
    let unknown = LoweringError::UnknownDescriptor(missing);

    assert_eq!(
        translate_property_as_descriptor(&context, missing, IRNode::id("f")),
        Err(unknown.clone())
    );
    assert_eq!(context.name_for_descriptor(missing), Err(unknown.clone()));
    assert_eq!(qualified_reference(&context, missing), Err(unknown.clone()));
    assert_eq!(backing_field_reference(&context, missing), Err(unknown.clone()));
    assert_eq!(
        define_property(&context, missing, IRNode::object(Vec::new())),
        Err(unknown)
    );
}

#[test]
fn test_create_data_descriptor() {
    let descriptor = create_data_descriptor(IRNode::number("1"), true);
    assert_eq!(print(&descriptor), "{ value: 1, writable: true }");
}

#[test]
fn test_backing_field() {
    let mut program = ResolvedProgram::new();
    let app = program.descriptors.ensure_namespace_path("app");
    let counter = program.descriptors.add_class(app, "Counter");
    let count = program.descriptors.add_property(counter, "count", PropertySpec::var());
    let registry = IntrinsicRegistry::empty();
    let context = context_for(&program, &registry);

    assert_eq!(print(&backing_field_reference(&context, count.property).unwrap()), "this.$count");
    assert_eq!(
        print(&assign_to_backing_field(&context, count.property, IRNode::number("0")).unwrap()),
        "this.$count = 0"
    );

    let accessors = default_accessor_descriptor(&context, count.property).unwrap();
    assert_eq!(
        print(&IRNode::expr_stmt(define_property(&context, count.property, accessors).unwrap())),
        "Object.defineProperty(this, \"count\", {\n    \"get\": function () {\n        return this.$count;\n    },\n    \"set\": function (value) {\n        this.$count = value;\n    }\n});"
    );
}

#[test]
fn test_qualified_reference() {
    let mut program = ResolvedProgram::new();
    let util = program.descriptors.ensure_namespace_path("app.util");
    let helper = program.descriptors.add_function(util, "helper", FunctionSpec::member());
    let top = program
        .descriptors
        .add_function(program.descriptors.root(), "main", FunctionSpec::member());
    let widget = program.descriptors.add_class(util, "Widget");
    let draw = program.descriptors.add_function(widget, "draw", FunctionSpec::member());
    let registry = IntrinsicRegistry::empty();
    let context = context_for(&program, &registry);

    assert_eq!(print(&qualified_reference(&context, helper).unwrap()), "app.util.helper");
    assert_eq!(print(&qualified_reference(&context, top).unwrap()), "main");
    assert_eq!(print(&qualified_reference(&context, widget).unwrap()), "app.util.Widget");
    assert_eq!(print(&qualified_reference(&context, draw).unwrap()), "draw");
}

#[test]
fn test_initializer_for_property() {
    let mut program = ResolvedProgram::new();
    let one = program.nodes.add_int(1);
    let with_initializer = program.nodes.add_property("a", false, Some(one));
    let without = program.nodes.add_property("b", true, None);
    let registry = IntrinsicRegistry::empty();
    let mut context = context_for(&program, &registry);

    assert_eq!(
        translate_initializer_for_property(&mut context, with_initializer),
        Ok(Some(IRNode::number("1")))
    );
    assert_eq!(translate_initializer_for_property(&mut context, without), Ok(None));
    assert_eq!(
        translate_initializer_for_property(&mut context, one),
        Err(LoweringError::NotAnExpression(one))
    );
}
