//! Emission of expression nodes.

use crate::location::emit_location;
use crate::types::emit_type;
use serde_json::{Map, Value};
use tinyc_ast::{Expr, LiteralKind, MemberKind};

fn literal_kind_str(kind: LiteralKind) -> &'static str {
    match kind {
        LiteralKind::Integer => "integer",
        LiteralKind::Double => "double",
        LiteralKind::Char => "char",
        LiteralKind::String => "string",
    }
}

fn member_kind_str(kind: MemberKind) -> &'static str {
    match kind {
        MemberKind::Dot => "dot",
        MemberKind::Arrow => "arrow",
    }
}

pub(crate) fn emit_expr(expr: &Expr) -> Value {
    let mut object = Map::new();
    match expr {
        Expr::Literal(n) => {
            object.insert("nodeType".into(), "Literal".into());
            object.insert("kind".into(), literal_kind_str(n.kind).into());
            object.insert("value".into(), n.text.clone().into());
            object.insert("location".into(), emit_location(n.location));
        }
        Expr::Identifier(n) => {
            object.insert("nodeType".into(), "Identifier".into());
            object.insert("name".into(), n.name.as_str().into());
            object.insert("location".into(), emit_location(n.location));
        }
        Expr::Binary(n) => {
            object.insert("nodeType".into(), "BinaryExpression".into());
            object.insert("operator".into(), n.operator.as_str().into());
            object.insert("left".into(), emit_expr(&n.left));
            object.insert("right".into(), emit_expr(&n.right));
            object.insert("location".into(), emit_location(n.location));
        }
        Expr::Unary(n) => {
            object.insert("nodeType".into(), "UnaryExpression".into());
            object.insert("operator".into(), n.operator.as_str().into());
            object.insert("operand".into(), emit_expr(&n.operand));
            object.insert("prefix".into(), n.prefix.into());
            object.insert("location".into(), emit_location(n.location));
        }
        Expr::Cast(n) => {
            object.insert("nodeType".into(), "CastExpression".into());
            object.insert("targetType".into(), emit_type(&n.target_type));
            object.insert("expression".into(), emit_expr(&n.expression));
            object.insert("location".into(), emit_location(n.location));
        }
        Expr::Call(n) => {
            object.insert("nodeType".into(), "CallExpression".into());
            object.insert("callee".into(), emit_expr(&n.callee));
            object.insert(
                "arguments".into(),
                Value::Array(n.arguments.iter().map(emit_expr).collect()),
            );
            object.insert("location".into(), emit_location(n.location));
        }
        Expr::Index(n) => {
            object.insert("nodeType".into(), "IndexExpression".into());
            object.insert("array".into(), emit_expr(&n.array));
            object.insert("index".into(), emit_expr(&n.index));
            object.insert("location".into(), emit_location(n.location));
        }
        Expr::Member(n) => {
            object.insert("nodeType".into(), "MemberExpression".into());
            object.insert("object".into(), emit_expr(&n.object));
            object.insert("member".into(), n.member.as_str().into());
            object.insert("kind".into(), member_kind_str(n.kind).into());
            object.insert("location".into(), emit_location(n.location));
        }
        Expr::Comma(n) => {
            object.insert("nodeType".into(), "CommaExpression".into());
            object.insert(
                "expressions".into(),
                Value::Array(n.expressions.iter().map(emit_expr).collect()),
            );
            object.insert("location".into(), emit_location(n.location));
        }
    }
    Value::Object(object)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinyc_ast::{BinaryExpression, BinaryOperator, Identifier};
    use tinyc_util::{SourceLocation, Symbol};

    fn loc() -> SourceLocation {
        SourceLocation::new(Symbol::intern("t.tc"), 1, 1)
    }

    #[test]
    fn binary_expression_field_order_is_operator_left_right_location() {
        let expr = Expr::Binary(BinaryExpression {
            operator: BinaryOperator::Add,
            left: Box::new(Expr::Identifier(Identifier {
                name: Symbol::intern("a"),
                location: loc(),
            })),
            right: Box::new(Expr::Identifier(Identifier {
                name: Symbol::intern("b"),
                location: loc(),
            })),
            location: loc(),
        });
        let value = emit_expr(&expr);
        let obj = value.as_object().unwrap();
        let keys: Vec<_> = obj.keys().collect();
        assert_eq!(keys, vec!["nodeType", "operator", "left", "right", "location"]);
        assert_eq!(value["operator"], "+");
    }
}
