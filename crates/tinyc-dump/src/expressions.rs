//! Expression rendering.

use crate::types::type_to_string;
use crate::Dumper;
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
        MemberKind::Dot => ".",
        MemberKind::Arrow => "->",
    }
}

impl<'a> Dumper<'a> {
    pub(crate) fn dump_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Literal(n) => self.line(&format!(
                "Literal {} {:?} ({})",
                literal_kind_str(n.kind),
                n.text,
                n.location
            )),
            Expr::Identifier(n) => {
                self.line(&format!("Identifier {} ({})", n.name.as_str(), n.location))
            }
            Expr::Binary(n) => {
                self.line(&format!(
                    "BinaryExpression {} ({})",
                    n.operator.as_str(),
                    n.location
                ));
                self.indent += 1;
                self.section("Left:", |d| d.dump_expr(&n.left));
                self.section("Right:", |d| d.dump_expr(&n.right));
                self.indent -= 1;
            }
            Expr::Unary(n) => {
                let position = if n.prefix { "prefix" } else { "postfix" };
                self.line(&format!(
                    "UnaryExpression {} ({}) ({})",
                    n.operator.as_str(),
                    position,
                    n.location
                ));
                self.indent += 1;
                self.section("Operand:", |d| d.dump_expr(&n.operand));
                self.indent -= 1;
            }
            Expr::Cast(n) => {
                self.line(&format!(
                    "CastExpression -> {} ({})",
                    type_to_string(&n.target_type),
                    n.location
                ));
                self.indent += 1;
                self.section("Expression:", |d| d.dump_expr(&n.expression));
                self.indent -= 1;
            }
            Expr::Call(n) => {
                self.line(&format!("CallExpression ({})", n.location));
                self.indent += 1;
                self.section("Callee:", |d| d.dump_expr(&n.callee));
                self.section("Arguments:", |d| {
                    for argument in &n.arguments {
                        d.dump_expr(argument);
                    }
                });
                self.indent -= 1;
            }
            Expr::Index(n) => {
                self.line(&format!("IndexExpression ({})", n.location));
                self.indent += 1;
                self.section("Array:", |d| d.dump_expr(&n.array));
                self.section("Index:", |d| d.dump_expr(&n.index));
                self.indent -= 1;
            }
            Expr::Member(n) => {
                self.line(&format!(
                    "MemberExpression {} {} ({})",
                    member_kind_str(n.kind),
                    n.member.as_str(),
                    n.location
                ));
                self.indent += 1;
                self.section("Object:", |d| d.dump_expr(&n.object));
                self.indent -= 1;
            }
            Expr::Comma(n) => {
                self.line(&format!("CommaExpression ({})", n.location));
                self.indent += 1;
                self.section("Expressions:", |d| {
                    for expression in &n.expressions {
                        d.dump_expr(expression);
                    }
                });
                self.indent -= 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinyc_ast::{BinaryExpression, BinaryOperator, Identifier};
    use tinyc_util::{SourceLocation, Symbol};

    fn loc() -> SourceLocation {
        SourceLocation::new(Symbol::intern("t.tc"), 1, 1)
    }

    fn render(expr: &Expr) -> String {
        let mut out = String::new();
        crate::Dumper {
            out: &mut out,
            indent: 0,
        }
        .dump_expr(expr);
        out
    }

    #[test]
    fn binary_expression_indents_left_and_right_sections() {
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
        let text = render(&expr);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "BinaryExpression + (t.tc:1:1)");
        assert_eq!(lines[1], "  Left:");
        assert_eq!(lines[2], "    Identifier a (t.tc:1:1)");
        assert_eq!(lines[3], "  Right:");
        assert_eq!(lines[4], "    Identifier b (t.tc:1:1)");
    }
}
