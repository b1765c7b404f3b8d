//! The type grammar: base types, struct references, and pointer nesting.

use crate::core::Parser;
use tinyc_ast::{PrimitiveKind, Type};
use tinyc_lex::TokenKind;
use tinyc_util::ParserResult;

impl Parser {
    /// `int | double | char | struct Identifier`, with no pointer stars
    /// consumed. Struct-typed objects aren't named directly in the
    /// grammar table but the AST carries a `Named` type node for exactly
    /// this production — `struct Identifier` used wherever a base type is
    /// expected.
    pub(crate) fn parse_base_type(&mut self) -> ParserResult<Type> {
        let location = self.current_location();
        match self.current_kind() {
            TokenKind::Int => {
                self.advance();
                Ok(Type::Primitive {
                    kind: PrimitiveKind::Int,
                    location,
                })
            }
            TokenKind::Double => {
                self.advance();
                Ok(Type::Primitive {
                    kind: PrimitiveKind::Double,
                    location,
                })
            }
            TokenKind::Char => {
                self.advance();
                Ok(Type::Primitive {
                    kind: PrimitiveKind::Char,
                    location,
                })
            }
            TokenKind::Struct => {
                self.advance();
                let name_tok = self.expect(TokenKind::Identifier, "a struct name")?;
                Ok(Type::Named {
                    name: name_tok.lexeme(),
                    location,
                })
            }
            _ => Err(self.error(format!(
                "expected a type, found {:?}",
                self.current_kind()
            ))),
        }
    }

    /// Wraps `base` in one `Pointer` layer per consumed `*`. All layers
    /// share `base`'s location: the pointer stars are part of the same
    /// type production, not productions of their own.
    fn wrap_pointers(&mut self, mut ty: Type) -> Type {
        let location = ty.location();
        while self.match_kind(TokenKind::Star) {
            ty = Type::Pointer {
                base: Box::new(ty),
                location,
            };
        }
        ty
    }

    /// A full object type: a base type followed by zero or more `*`.
    /// `void` is never accepted here directly — callers that must accept
    /// `void*` go through [`Parser::parse_object_type`] instead.
    pub(crate) fn parse_non_void_type(&mut self) -> ParserResult<Type> {
        let base = self.parse_base_type()?;
        Ok(self.wrap_pointers(base))
    }

    /// A type usable for a variable, parameter, or field: a non-void type,
    /// or `void` followed by *one or more* `*` (void is never an object
    /// type on its own).
    pub(crate) fn parse_object_type(&mut self) -> ParserResult<Type> {
        if self.check(TokenKind::Void) {
            let location = self.current_location();
            self.advance();
            if !self.check(TokenKind::Star) {
                return Err(self.error("'void' is not a valid object type"));
            }
            let void_ty = Type::Primitive {
                kind: PrimitiveKind::Void,
                location,
            };
            return Ok(self.wrap_pointers(void_ty));
        }
        self.parse_non_void_type()
    }

    /// A function return type: like [`Parser::parse_object_type`] but bare
    /// `void` (no stars) is also accepted.
    pub(crate) fn parse_return_type(&mut self) -> ParserResult<Type> {
        if self.check(TokenKind::Void) {
            let location = self.current_location();
            self.advance();
            let void_ty = Type::Primitive {
                kind: PrimitiveKind::Void,
                location,
            };
            return Ok(self.wrap_pointers(void_ty));
        }
        self.parse_non_void_type()
    }
}
