//! Emission of statement nodes, including the `for`-loop's init clause and
//! switch cases.

use crate::declarations::emit_declaration;
use crate::expressions::emit_expr;
use crate::location::emit_location;
use serde_json::{Map, Value};
use tinyc_ast::{Block, Case, ForInit, Stmt};

pub(crate) fn emit_block(block: &Block) -> Value {
    let mut object = Map::new();
    object.insert("nodeType".into(), "Block".into());
    object.insert(
        "statements".into(),
        Value::Array(block.statements.iter().map(emit_stmt).collect()),
    );
    object.insert("location".into(), emit_location(block.location));
    Value::Object(object)
}

pub(crate) fn emit_stmt(stmt: &Stmt) -> Value {
    let mut object = Map::new();
    match stmt {
        Stmt::Block(n) => return emit_block(n),
        Stmt::Expression(n) => {
            object.insert("nodeType".into(), "ExpressionStatement".into());
            object.insert("expression".into(), emit_expr(&n.expression));
            object.insert("location".into(), emit_location(n.location));
        }
        Stmt::Declaration(n) => return emit_declaration(n),
        Stmt::If(n) => {
            object.insert("nodeType".into(), "IfStatement".into());
            object.insert("condition".into(), emit_expr(&n.condition));
            object.insert("then".into(), emit_stmt(&n.then_branch));
            if let Some(else_branch) = &n.else_branch {
                object.insert("else".into(), emit_stmt(else_branch));
            }
            object.insert("location".into(), emit_location(n.location));
        }
        Stmt::While(n) => {
            object.insert("nodeType".into(), "WhileStatement".into());
            object.insert("condition".into(), emit_expr(&n.condition));
            object.insert("body".into(), emit_stmt(&n.body));
            object.insert("location".into(), emit_location(n.location));
        }
        Stmt::DoWhile(n) => {
            object.insert("nodeType".into(), "DoWhileStatement".into());
            object.insert("body".into(), emit_stmt(&n.body));
            object.insert("condition".into(), emit_expr(&n.condition));
            object.insert("location".into(), emit_location(n.location));
        }
        Stmt::For(n) => {
            object.insert("nodeType".into(), "ForStatement".into());
            match &n.init {
                ForInit::Empty => {}
                ForInit::Expression(e) => {
                    object.insert("init".into(), emit_expr(e));
                }
                ForInit::Declaration(d) => {
                    object.insert("init".into(), emit_declaration(d));
                }
            }
            if let Some(condition) = &n.condition {
                object.insert("condition".into(), emit_expr(condition));
            }
            if let Some(step) = &n.step {
                object.insert("update".into(), emit_expr(step));
            }
            object.insert("body".into(), emit_stmt(&n.body));
            object.insert("location".into(), emit_location(n.location));
        }
        Stmt::Switch(n) => {
            object.insert("nodeType".into(), "SwitchStatement".into());
            object.insert("discriminant".into(), emit_expr(&n.discriminant));
            object.insert(
                "cases".into(),
                Value::Array(n.cases.iter().map(emit_case).collect()),
            );
            object.insert("location".into(), emit_location(n.location));
        }
        Stmt::Break(n) => {
            object.insert("nodeType".into(), "BreakStatement".into());
            object.insert("location".into(), emit_location(n.location));
        }
        Stmt::Continue(n) => {
            object.insert("nodeType".into(), "ContinueStatement".into());
            object.insert("location".into(), emit_location(n.location));
        }
        Stmt::Return(n) => {
            object.insert("nodeType".into(), "ReturnStatement".into());
            if let Some(value) = &n.value {
                object.insert("value".into(), emit_expr(value));
            }
            object.insert("location".into(), emit_location(n.location));
        }
    }
    Value::Object(object)
}

/// A switch case's fields, in the order the schema specifies: `isDefault`,
/// optional `value`, `body`. Unlike every other node, cases carry neither
/// `nodeType` nor `location` — the schema's field-order rule names only
/// these three.
fn emit_case(case: &Case) -> Value {
    let mut object = Map::new();
    object.insert("isDefault".into(), case.is_default.into());
    if let Some(value) = case.value {
        object.insert("value".into(), value.into());
    }
    object.insert(
        "body".into(),
        Value::Array(case.body.iter().map(emit_stmt).collect()),
    );
    Value::Object(object)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinyc_ast::{Break, Identifier};
    use tinyc_util::{SourceLocation, Symbol};

    fn loc() -> SourceLocation {
        SourceLocation::new(Symbol::intern("t.tc"), 1, 1)
    }

    #[test]
    fn case_object_has_no_node_type_or_location() {
        let case = Case {
            is_default: true,
            value: None,
            body: vec![Stmt::Break(Break { location: loc() })],
            location: loc(),
        };
        let value = emit_case(&case);
        let obj = value.as_object().unwrap();
        assert!(!obj.contains_key("nodeType"));
        assert!(!obj.contains_key("location"));
        assert_eq!(obj.keys().next().unwrap(), "isDefault");
    }

    #[test]
    fn non_default_case_includes_its_value() {
        let case = Case {
            is_default: false,
            value: Some(1),
            body: Vec::new(),
            location: loc(),
        };
        let value = emit_case(&case);
        let obj = value.as_object().unwrap();
        let keys: Vec<_> = obj.keys().collect();
        assert_eq!(keys, vec!["isDefault", "value", "body"]);
        assert_eq!(obj.get("value").unwrap(), &Value::from(1));
    }

    #[test]
    fn if_without_else_omits_the_else_field() {
        let stmt = Stmt::If(tinyc_ast::If {
            condition: tinyc_ast::Expr::Identifier(Identifier {
                name: Symbol::intern("x"),
                location: loc(),
            }),
            then_branch: Box::new(Stmt::Break(Break { location: loc() })),
            else_branch: None,
            location: loc(),
        });
        let value = emit_stmt(&stmt);
        assert!(!value.as_object().unwrap().contains_key("else"));
    }
}
