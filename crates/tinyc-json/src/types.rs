//! Emission of type nodes.

use crate::location::emit_location;
use serde_json::{Map, Value};
use tinyc_ast::{PrimitiveKind, Type};

fn primitive_kind_str(kind: PrimitiveKind) -> &'static str {
    match kind {
        PrimitiveKind::Int => "int",
        PrimitiveKind::Double => "double",
        PrimitiveKind::Char => "char",
        PrimitiveKind::Void => "void",
    }
}

pub(crate) fn emit_type(ty: &Type) -> Value {
    let mut object = Map::new();
    match ty {
        Type::Primitive { kind, location } => {
            object.insert("nodeType".into(), "PrimitiveType".into());
            object.insert("kind".into(), primitive_kind_str(*kind).into());
            object.insert("location".into(), emit_location(*location));
        }
        Type::Named { name, location } => {
            object.insert("nodeType".into(), "NamedType".into());
            object.insert("name".into(), name.as_str().into());
            object.insert("location".into(), emit_location(*location));
        }
        Type::Pointer { base, location } => {
            object.insert("nodeType".into(), "PointerType".into());
            object.insert("base".into(), emit_type(base));
            object.insert("location".into(), emit_location(*location));
        }
    }
    Value::Object(object)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinyc_util::{SourceLocation, Symbol};

    fn loc() -> tinyc_util::SourceLocation {
        SourceLocation::new(Symbol::intern("t.tc"), 1, 1)
    }

    #[test]
    fn primitive_type_emits_its_kind() {
        let ty = Type::Primitive {
            kind: PrimitiveKind::Int,
            location: loc(),
        };
        let value = emit_type(&ty);
        assert_eq!(value["nodeType"], "PrimitiveType");
        assert_eq!(value["kind"], "int");
    }

    #[test]
    fn pointer_type_nests_its_base() {
        let ty = Type::Pointer {
            base: Box::new(Type::Primitive {
                kind: PrimitiveKind::Int,
                location: loc(),
            }),
            location: loc(),
        };
        let value = emit_type(&ty);
        assert_eq!(value["nodeType"], "PointerType");
        assert_eq!(value["base"]["nodeType"], "PrimitiveType");
    }

    #[test]
    fn node_type_is_first_field() {
        let ty = Type::Named {
            name: Symbol::intern("Node"),
            location: loc(),
        };
        let value = emit_type(&ty);
        let obj = value.as_object().unwrap();
        assert_eq!(obj.keys().next().unwrap(), "nodeType");
        assert_eq!(obj.keys().last().unwrap(), "location");
    }
}
