//! Standard library intrinsics.

use super::function_intrinsic::FunctionIntrinsic;
use super::name_predicate::NamePredicate;
use super::receiver_pattern::ReceiverPattern;
use super::registry::IntrinsicRegistry;

const INTEGRAL: &str = "Int|Long|Short|Byte";
const NUMBER: &str = "Int|Long|Short|Byte|Double|Float";
const PRIMITIVE: &str = "Int|Long|Short|Byte|Double|Float|Char|Boolean|String";

fn binary(operator: &str) -> FunctionIntrinsic {
    FunctionIntrinsic::BinaryOperator {
        operator: operator.to_string(),
    }
}

fn prefix(operator: &str) -> FunctionIntrinsic {
    FunctionIntrinsic::PrefixOperator {
        operator: operator.to_string(),
    }
}

fn number_member(registry: &mut IntrinsicRegistry, types: &str, member: &str, intrinsic: FunctionIntrinsic) {
    registry.register_prefixed(NamePredicate::parse_alternatives(types), member, intrinsic);
}

pub(super) fn register_builtins(registry: &mut IntrinsicRegistry) {
    // Arithmetic
    for (member, operator) in [("plus", "+"), ("minus", "-"), ("times", "*"), ("mod", "%")] {
        number_member(registry, NUMBER, member, binary(operator));
    }
    number_member(registry, "Double|Float", "div", binary("/"));
    number_member(registry, INTEGRAL, "div", FunctionIntrinsic::TruncatingDivision);
    number_member(registry, NUMBER, "unaryMinus", prefix("-"));
    number_member(registry, NUMBER, "unaryPlus", prefix("+"));
    for (member, operator) in [("inc", "+"), ("dec", "-")] {
        number_member(
            registry,
            &format!("{NUMBER}|Char"),
            member,
            FunctionIntrinsic::Increment {
                operator: operator.to_string(),
            },
        );
    }
    number_member(
        registry,
        &format!("{NUMBER}|Char|String"),
        "compareTo",
        FunctionIntrinsic::PrimitiveComparison,
    );
    number_member(registry, NUMBER, "rangeTo", FunctionIntrinsic::Constructor {
        constructor: "jet.NumberRange".to_string(),
    });

    // Boolean
    registry.register_pattern("Boolean.not", prefix("!"));
    registry.register_pattern("Boolean.and", binary("&&"));
    registry.register_pattern("Boolean.or", binary("||"));

    // Strings and arrays
    registry.register_prefixed(
        NamePredicate::new(["String", "CharSequence"]),
        "length",
        FunctionIntrinsic::PropertyAccess {
            property: "length".to_string(),
        },
    );
    registry.register_pattern(
        "Array.size",
        FunctionIntrinsic::PropertyAccess {
            property: "length".to_string(),
        },
    );
    registry.register_pattern("Array.get", FunctionIntrinsic::ElementGet);
    registry.register_pattern("Array.set", FunctionIntrinsic::ElementSet);
    registry.register(
        ReceiverPattern::new(["jet", "arrayOf"]),
        FunctionIntrinsic::ArrayOf,
    );
    registry.register(
        ReceiverPattern::new(["jet", "startsWith"]).receiver_exists(true),
        FunctionIntrinsic::MethodCall {
            method: "startsWith".to_string(),
        },
    );

    // Any
    registry.register_pattern("Any.equals", FunctionIntrinsic::Equals { primitive: false });
    number_member(registry, PRIMITIVE, "equals", FunctionIntrinsic::Equals { primitive: true });
    for member in ["hashCode", "toString"] {
        registry.register_pattern(
            &format!("Any.{member}"),
            FunctionIntrinsic::LibraryCall {
                function: member.to_string(),
            },
        );
    }
    registry.register(
        ReceiverPattern::new(["jet", "toString"]).receiver_exists(true),
        FunctionIntrinsic::LibraryCall {
            function: "toString".to_string(),
        },
    );

    // Console
    for member in ["print", "println"] {
        registry.register(
            ReceiverPattern::new(["jet", "io", member]),
            FunctionIntrinsic::GlobalCall {
                function: "console.log".to_string(),
            },
        );
    }
}
