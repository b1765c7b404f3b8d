//! Declaration nodes: variables, parameters, functions, structs, function
//! pointer typedefs, and multi-variable declaration statements.

use crate::expressions::Expr;
use crate::statements::Block;
use crate::types::Type;
use tinyc_util::{SourceLocation, Symbol};

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub ty: Type,
    pub name: Symbol,
    pub location: SourceLocation,
}

/// A single variable declaration: `Type name[size]_opt = init_opt ;`
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub ty: Type,
    pub name: Symbol,
    pub array_size: Option<Box<Expr>>,
    pub initializer: Option<Box<Expr>>,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDeclaration {
    pub return_type: Type,
    pub name: Symbol,
    pub parameters: Vec<Parameter>,
    pub body: Option<Block>,
    pub location: SourceLocation,
}

impl FunctionDeclaration {
    /// A `FunctionDeclaration` is a definition iff it has a body.
    pub fn is_definition(&self) -> bool {
        self.body.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub ty: Type,
    pub name: Symbol,
    pub location: SourceLocation,
}

/// `fields: None` is a forward declaration (`struct Name;`); `fields:
/// Some(_)` (possibly empty) is a definition, whose braces were present
/// even if no fields were inside them.
#[derive(Debug, Clone, PartialEq)]
pub struct StructDeclaration {
    pub name: Symbol,
    pub fields: Option<Vec<Field>>,
    pub location: SourceLocation,
}

impl StructDeclaration {
    pub fn is_definition(&self) -> bool {
        self.fields.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionPointerDeclaration {
    pub return_type: Type,
    pub name: Symbol,
    pub parameter_types: Vec<Type>,
    pub location: SourceLocation,
}

/// Sibling variable declarations sharing one statement, each repeating its
/// own type keyword: `int a = 1, int b = 2;`. A TinyC quirk, not C.
#[derive(Debug, Clone, PartialEq)]
pub struct MultipleDeclaration {
    pub declarations: Vec<Variable>,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    Variable(Variable),
    Function(FunctionDeclaration),
    Struct(StructDeclaration),
    FunctionPointer(FunctionPointerDeclaration),
    Multiple(MultipleDeclaration),
}

impl Declaration {
    pub fn location(&self) -> SourceLocation {
        match self {
            Declaration::Variable(n) => n.location,
            Declaration::Function(n) => n.location,
            Declaration::Struct(n) => n.location,
            Declaration::FunctionPointer(n) => n.location,
            Declaration::Multiple(n) => n.location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PrimitiveKind;

    fn loc() -> SourceLocation {
        SourceLocation::new(Symbol::intern("t.tc"), 1, 1)
    }

    #[test]
    fn function_declaration_without_body_is_not_a_definition() {
        let f = FunctionDeclaration {
            return_type: Type::Primitive {
                kind: PrimitiveKind::Int,
                location: loc(),
            },
            name: Symbol::intern("f"),
            parameters: Vec::new(),
            body: None,
            location: loc(),
        };
        assert!(!f.is_definition());
    }

    #[test]
    fn struct_with_empty_body_is_still_a_definition() {
        let s = StructDeclaration {
            name: Symbol::intern("S"),
            fields: Some(Vec::new()),
            location: loc(),
        };
        assert!(s.is_definition());
    }

    #[test]
    fn struct_forward_declaration_is_not_a_definition() {
        let s = StructDeclaration {
            name: Symbol::intern("S"),
            fields: None,
            location: loc(),
        };
        assert!(!s.is_definition());
    }
}
