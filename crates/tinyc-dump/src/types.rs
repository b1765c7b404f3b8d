//! Types are rendered inline as a single spelled-out string rather than as
//! their own indented subtree — a pointer chain is just as readable on one
//! line as it would be spread across several.

use tinyc_ast::{PrimitiveKind, Type};

pub(crate) fn type_to_string(ty: &Type) -> String {
    match ty {
        Type::Primitive { kind, .. } => primitive_kind_str(*kind).to_string(),
        Type::Named { name, .. } => format!("struct {}", name.as_str()),
        Type::Pointer { base, .. } => format!("{}*", type_to_string(base)),
    }
}

fn primitive_kind_str(kind: PrimitiveKind) -> &'static str {
    match kind {
        PrimitiveKind::Int => "int",
        PrimitiveKind::Double => "double",
        PrimitiveKind::Char => "char",
        PrimitiveKind::Void => "void",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinyc_util::{SourceLocation, Symbol};

    fn loc() -> SourceLocation {
        SourceLocation::new(Symbol::intern("t.tc"), 1, 1)
    }

    #[test]
    fn pointer_chain_renders_with_trailing_stars() {
        let ty = Type::Pointer {
            base: Box::new(Type::Pointer {
                base: Box::new(Type::Primitive {
                    kind: PrimitiveKind::Int,
                    location: loc(),
                }),
                location: loc(),
            }),
            location: loc(),
        };
        assert_eq!(type_to_string(&ty), "int**");
    }

    #[test]
    fn named_type_renders_as_struct_name() {
        let ty = Type::Named {
            name: Symbol::intern("Node"),
            location: loc(),
        };
        assert_eq!(type_to_string(&ty), "struct Node");
    }
}
