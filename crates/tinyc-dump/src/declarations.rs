//! Declaration rendering.

use crate::types::type_to_string;
use crate::Dumper;
use tinyc_ast::{Declaration, Field, Parameter, Variable};

impl<'a> Dumper<'a> {
    fn dump_parameter(&mut self, parameter: &Parameter) {
        self.line(&format!(
            "Parameter {} {} ({})",
            type_to_string(&parameter.ty),
            parameter.name.as_str(),
            parameter.location
        ));
    }

    fn dump_field(&mut self, field: &Field) {
        self.line(&format!(
            "Field {} {} ({})",
            type_to_string(&field.ty),
            field.name.as_str(),
            field.location
        ));
    }

    fn dump_variable(&mut self, variable: &Variable) {
        self.line(&format!(
            "VariableDeclaration {} {} ({})",
            type_to_string(&variable.ty),
            variable.name.as_str(),
            variable.location
        ));
        self.indent += 1;
        if let Some(array_size) = &variable.array_size {
            self.section("ArraySize:", |d| d.dump_expr(array_size));
        }
        if let Some(initializer) = &variable.initializer {
            self.section("Initializer:", |d| d.dump_expr(initializer));
        }
        self.indent -= 1;
    }

    pub(crate) fn dump_declaration(&mut self, declaration: &Declaration) {
        match declaration {
            Declaration::Variable(n) => self.dump_variable(n),
            Declaration::Function(n) => {
                let kind = if n.is_definition() { "definition" } else { "declaration" };
                self.line(&format!(
                    "FunctionDeclaration {} {} -> {} ({})",
                    n.name.as_str(),
                    kind,
                    type_to_string(&n.return_type),
                    n.location
                ));
                self.indent += 1;
                self.section("Parameters:", |d| {
                    for parameter in &n.parameters {
                        d.dump_parameter(parameter);
                    }
                });
                if let Some(body) = &n.body {
                    self.section("Body:", |d| d.dump_block(body));
                }
                self.indent -= 1;
            }
            Declaration::Struct(n) => {
                let kind = if n.is_definition() { "definition" } else { "forward declaration" };
                self.line(&format!(
                    "StructDeclaration {} {} ({})",
                    n.name.as_str(),
                    kind,
                    n.location
                ));
                if let Some(fields) = &n.fields {
                    self.indent += 1;
                    self.section("Fields:", |d| {
                        for field in fields {
                            d.dump_field(field);
                        }
                    });
                    self.indent -= 1;
                }
            }
            Declaration::FunctionPointer(n) => {
                self.line(&format!(
                    "FunctionPointerDeclaration {} -> {} ({})",
                    n.name.as_str(),
                    type_to_string(&n.return_type),
                    n.location
                ));
                self.indent += 1;
                self.section("ParameterTypes:", |d| {
                    for parameter_type in &n.parameter_types {
                        d.line(&type_to_string(parameter_type));
                    }
                });
                self.indent -= 1;
            }
            Declaration::Multiple(n) => {
                self.line(&format!("MultipleDeclaration ({})", n.location));
                self.indent += 1;
                for variable in &n.declarations {
                    self.dump_variable(variable);
                }
                self.indent -= 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinyc_ast::{PrimitiveKind, StructDeclaration, Type};
    use tinyc_util::{SourceLocation, Symbol};

    fn loc() -> SourceLocation {
        SourceLocation::new(Symbol::intern("t.tc"), 1, 1)
    }

    fn render(declaration: &Declaration) -> String {
        let mut out = String::new();
        crate::Dumper {
            out: &mut out,
            indent: 0,
        }
        .dump_declaration(declaration);
        out
    }

    #[test]
    fn forward_declared_struct_has_no_fields_section() {
        let decl = Declaration::Struct(StructDeclaration {
            name: Symbol::intern("Node"),
            fields: None,
            location: loc(),
        });
        let text = render(&decl);
        assert!(text.contains("forward declaration"));
        assert!(!text.contains("Fields:"));
    }

    #[test]
    fn struct_definition_with_empty_body_still_has_a_fields_section() {
        let decl = Declaration::Struct(StructDeclaration {
            name: Symbol::intern("Empty"),
            fields: Some(Vec::new()),
            location: loc(),
        });
        let text = render(&decl);
        assert!(text.contains("definition"));
        assert!(text.contains("Fields:"));
    }

    #[test]
    fn variable_without_initializer_has_no_initializer_section() {
        let decl = Declaration::Variable(Variable {
            ty: Type::Primitive {
                kind: PrimitiveKind::Int,
                location: loc(),
            },
            name: Symbol::intern("x"),
            array_size: None,
            initializer: None,
            location: loc(),
        });
        let text = render(&decl);
        assert!(!text.contains("Initializer:"));
    }

    #[test]
    fn multiple_declaration_renders_each_sibling() {
        let variable = |name: &str| Variable {
            ty: Type::Primitive {
                kind: PrimitiveKind::Int,
                location: loc(),
            },
            name: Symbol::intern(name),
            array_size: None,
            initializer: None,
            location: loc(),
        };
        let decl = Declaration::Multiple(tinyc_ast::MultipleDeclaration {
            declarations: vec![variable("a"), variable("b")],
            location: loc(),
        });
        let text = render(&decl);
        assert!(text.contains("VariableDeclaration int a"));
        assert!(text.contains("VariableDeclaration int b"));
    }
}
