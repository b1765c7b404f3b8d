//! Emission of declaration nodes.

use crate::expressions::emit_expr;
use crate::location::emit_location;
use crate::statements::emit_block;
use crate::types::emit_type;
use serde_json::{Map, Value};
use tinyc_ast::{Declaration, Field, Parameter, Variable};

fn emit_parameter(param: &Parameter) -> Value {
    let mut object = Map::new();
    object.insert("nodeType".into(), "Parameter".into());
    object.insert("type".into(), emit_type(&param.ty));
    object.insert("name".into(), param.name.as_str().into());
    object.insert("location".into(), emit_location(param.location));
    Value::Object(object)
}

fn emit_field(field: &Field) -> Value {
    let mut object = Map::new();
    object.insert("nodeType".into(), "Field".into());
    object.insert("type".into(), emit_type(&field.ty));
    object.insert("name".into(), field.name.as_str().into());
    object.insert("location".into(), emit_location(field.location));
    Value::Object(object)
}

fn emit_variable(variable: &Variable) -> Value {
    let mut object = Map::new();
    object.insert("nodeType".into(), "VariableDeclaration".into());
    object.insert("type".into(), emit_type(&variable.ty));
    object.insert("name".into(), variable.name.as_str().into());
    if let Some(array_size) = &variable.array_size {
        object.insert("arraySize".into(), emit_expr(array_size));
    }
    if let Some(initializer) = &variable.initializer {
        object.insert("initializer".into(), emit_expr(initializer));
    }
    object.insert("location".into(), emit_location(variable.location));
    Value::Object(object)
}

pub(crate) fn emit_declaration(declaration: &Declaration) -> Value {
    let mut object = Map::new();
    match declaration {
        Declaration::Variable(n) => return emit_variable(n),
        Declaration::Function(n) => {
            object.insert("nodeType".into(), "FunctionDeclaration".into());
            object.insert("returnType".into(), emit_type(&n.return_type));
            object.insert("name".into(), n.name.as_str().into());
            object.insert(
                "parameters".into(),
                Value::Array(n.parameters.iter().map(emit_parameter).collect()),
            );
            object.insert("isDefinition".into(), n.is_definition().into());
            if let Some(body) = &n.body {
                object.insert("body".into(), emit_block(body));
            }
            object.insert("location".into(), emit_location(n.location));
        }
        Declaration::Struct(n) => {
            object.insert("nodeType".into(), "StructDeclaration".into());
            object.insert("name".into(), n.name.as_str().into());
            object.insert("isDefinition".into(), n.is_definition().into());
            if let Some(fields) = &n.fields {
                object.insert(
                    "fields".into(),
                    Value::Array(fields.iter().map(emit_field).collect()),
                );
            }
            object.insert("location".into(), emit_location(n.location));
        }
        Declaration::FunctionPointer(n) => {
            object.insert("nodeType".into(), "FunctionPointerDeclaration".into());
            object.insert("returnType".into(), emit_type(&n.return_type));
            object.insert("name".into(), n.name.as_str().into());
            object.insert(
                "parameterTypes".into(),
                Value::Array(n.parameter_types.iter().map(emit_type).collect()),
            );
            object.insert("location".into(), emit_location(n.location));
        }
        Declaration::Multiple(n) => {
            object.insert("nodeType".into(), "MultipleDeclaration".into());
            object.insert(
                "declarations".into(),
                Value::Array(n.declarations.iter().map(emit_variable).collect()),
            );
            object.insert("location".into(), emit_location(n.location));
        }
    }
    Value::Object(object)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinyc_ast::{PrimitiveKind, StructDeclaration, Type};
    use tinyc_util::{SourceLocation, Symbol};

    fn loc() -> SourceLocation {
        SourceLocation::new(Symbol::intern("t.tc"), 1, 1)
    }

    #[test]
    fn forward_declared_struct_omits_fields_array() {
        let decl = Declaration::Struct(StructDeclaration {
            name: Symbol::intern("Node"),
            fields: None,
            location: loc(),
        });
        let value = emit_declaration(&decl);
        assert!(!value.as_object().unwrap().contains_key("fields"));
        assert_eq!(value["isDefinition"], false);
    }

    #[test]
    fn struct_with_empty_body_emits_an_empty_fields_array() {
        let decl = Declaration::Struct(StructDeclaration {
            name: Symbol::intern("Empty"),
            fields: Some(Vec::new()),
            location: loc(),
        });
        let value = emit_declaration(&decl);
        assert_eq!(value["isDefinition"], true);
        assert_eq!(value["fields"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn variable_without_initializer_omits_initializer_field() {
        let decl = Declaration::Variable(tinyc_ast::Variable {
            ty: Type::Primitive {
                kind: PrimitiveKind::Int,
                location: loc(),
            },
            name: Symbol::intern("x"),
            array_size: None,
            initializer: None,
            location: loc(),
        });
        let value = emit_declaration(&decl);
        assert!(!value.as_object().unwrap().contains_key("initializer"));
    }
}
