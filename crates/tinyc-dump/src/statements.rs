//! Statement rendering, including the `for`-loop's init clause and switch
//! cases.

use crate::Dumper;
use tinyc_ast::{Block, Case, ForInit, Stmt};

impl<'a> Dumper<'a> {
    pub(crate) fn dump_block(&mut self, block: &Block) {
        self.line(&format!("Block ({})", block.location));
        self.indent += 1;
        for statement in &block.statements {
            self.dump_stmt(statement);
        }
        self.indent -= 1;
    }

    pub(crate) fn dump_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Block(n) => self.dump_block(n),
            Stmt::Expression(n) => {
                self.line(&format!("ExpressionStatement ({})", n.location));
                self.indent += 1;
                self.dump_expr(&n.expression);
                self.indent -= 1;
            }
            Stmt::Declaration(n) => self.dump_declaration(n),
            Stmt::If(n) => {
                self.line(&format!("IfStatement ({})", n.location));
                self.indent += 1;
                self.section("Condition:", |d| d.dump_expr(&n.condition));
                self.section("Then:", |d| d.dump_stmt(&n.then_branch));
                if let Some(else_branch) = &n.else_branch {
                    self.section("Else:", |d| d.dump_stmt(else_branch));
                }
                self.indent -= 1;
            }
            Stmt::While(n) => {
                self.line(&format!("WhileStatement ({})", n.location));
                self.indent += 1;
                self.section("Condition:", |d| d.dump_expr(&n.condition));
                self.section("Body:", |d| d.dump_stmt(&n.body));
                self.indent -= 1;
            }
            Stmt::DoWhile(n) => {
                self.line(&format!("DoWhileStatement ({})", n.location));
                self.indent += 1;
                self.section("Body:", |d| d.dump_stmt(&n.body));
                self.section("Condition:", |d| d.dump_expr(&n.condition));
                self.indent -= 1;
            }
            Stmt::For(n) => {
                self.line(&format!("ForStatement ({})", n.location));
                self.indent += 1;
                match &n.init {
                    ForInit::Empty => {}
                    ForInit::Expression(e) => self.section("Init:", |d| d.dump_expr(e)),
                    ForInit::Declaration(decl) => {
                        self.section("Init:", |d| d.dump_declaration(decl))
                    }
                }
                if let Some(condition) = &n.condition {
                    self.section("Condition:", |d| d.dump_expr(condition));
                }
                if let Some(step) = &n.step {
                    self.section("Update:", |d| d.dump_expr(step));
                }
                self.section("Body:", |d| d.dump_stmt(&n.body));
                self.indent -= 1;
            }
            Stmt::Switch(n) => {
                self.line(&format!("SwitchStatement ({})", n.location));
                self.indent += 1;
                self.section("Discriminant:", |d| d.dump_expr(&n.discriminant));
                self.section("Cases:", |d| {
                    for case in &n.cases {
                        d.dump_case(case);
                    }
                });
                self.indent -= 1;
            }
            Stmt::Break(n) => self.line(&format!("BreakStatement ({})", n.location)),
            Stmt::Continue(n) => self.line(&format!("ContinueStatement ({})", n.location)),
            Stmt::Return(n) => {
                self.line(&format!("ReturnStatement ({})", n.location));
                if let Some(value) = &n.value {
                    self.indent += 1;
                    self.section("Value:", |d| d.dump_expr(value));
                    self.indent -= 1;
                }
            }
        }
    }

    fn dump_case(&mut self, case: &Case) {
        if case.is_default {
            self.line(&format!("Case default ({})", case.location));
        } else {
            self.line(&format!("Case ({})", case.location));
        }
        self.indent += 1;
        if let Some(value) = case.value {
            self.line(&format!("Value: {value}"));
        }
        self.section("Body:", |d| {
            for statement in &case.body {
                d.dump_stmt(statement);
            }
        });
        self.indent -= 1;
    }
}
