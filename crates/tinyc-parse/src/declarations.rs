//! Declaration parsing: structs, function-pointer typedefs, functions, and
//! variable declarations (including the `MultipleDeclaration` sibling
//! form), shared between global scope ([`crate::program`]) and statement
//! scope ([`crate::statements`]).

use crate::core::Parser;
use tinyc_ast::{
    Declaration, Field, FunctionDeclaration, FunctionPointerDeclaration, MultipleDeclaration,
    Parameter, StructDeclaration, Type, Variable,
};
use tinyc_lex::TokenKind;
use tinyc_util::{ParserResult, Symbol};

impl Parser {
    pub(crate) fn starts_type(&self) -> bool {
        matches!(
            self.current_kind(),
            TokenKind::Int | TokenKind::Double | TokenKind::Char | TokenKind::Void | TokenKind::Struct
        )
    }

    /// `struct Name ;` (forward declaration) or
    /// `struct Name { field* } ;` (definition, body possibly empty).
    /// Both paths return the constructed node — see the struct-declaration
    /// note in this crate's top-level docs about the source bug this
    /// corrects.
    pub(crate) fn parse_struct_declaration(&mut self) -> ParserResult<StructDeclaration> {
        let location = self.current_location();
        self.advance(); // 'struct'
        let name = self.expect(TokenKind::Identifier, "a struct name")?.lexeme();

        if self.match_kind(TokenKind::Semicolon) {
            return Ok(StructDeclaration {
                name,
                fields: None,
                location,
            });
        }

        self.expect(TokenKind::LBrace, "'{'")?;
        let mut fields = Vec::new();
        while !self.check(TokenKind::RBrace) {
            let field_location = self.current_location();
            let ty = self.parse_object_type()?;
            let field_name = self.expect(TokenKind::Identifier, "a field name")?.lexeme();
            self.expect(TokenKind::Semicolon, "';'")?;
            fields.push(Field {
                ty,
                name: field_name,
                location: field_location,
            });
        }
        self.expect(TokenKind::RBrace, "'}'")?;
        self.expect(TokenKind::Semicolon, "';'")?;

        Ok(StructDeclaration {
            name,
            fields: Some(fields),
            location,
        })
    }

    /// `typedef ReturnType ( * Name ) ( ParamTypeList_opt ) ;`
    pub(crate) fn parse_function_pointer_typedef(
        &mut self,
    ) -> ParserResult<FunctionPointerDeclaration> {
        let location = self.current_location();
        self.advance(); // 'typedef'
        let return_type = self.parse_return_type()?;
        self.expect(TokenKind::LParen, "'('")?;
        self.expect(TokenKind::Star, "'*'")?;
        let name = self.expect(TokenKind::Identifier, "a typedef name")?.lexeme();
        self.expect(TokenKind::RParen, "')'")?;
        self.expect(TokenKind::LParen, "'('")?;

        let mut parameter_types = Vec::new();
        if !self.check(TokenKind::RParen) {
            parameter_types.push(self.parse_object_type()?);
            while self.match_kind(TokenKind::Comma) {
                parameter_types.push(self.parse_object_type()?);
            }
        }
        self.expect(TokenKind::RParen, "')'")?;
        self.expect(TokenKind::Semicolon, "';'")?;

        Ok(FunctionPointerDeclaration {
            return_type,
            name,
            parameter_types,
            location,
        })
    }

    /// A `void`-rooted top-level item: either a function (`void name(` or
    /// `void* name(` ...) or a pointer-typed global variable (`void*
    /// name;`). Bare `void name;` with no star and no `(` is rejected —
    /// TinyC has no void-typed objects.
    pub(crate) fn parse_void_rooted_item(&mut self) -> ParserResult<Declaration> {
        let location = self.current_location();
        let return_type = self.parse_return_type()?; // consumes 'void' plus any '*'
        let has_pointer = return_type.pointer_depth() > 0;
        let name = self.expect(TokenKind::Identifier, "an identifier")?.lexeme();

        if self.check(TokenKind::LParen) {
            return self
                .parse_function_tail(return_type, name, location)
                .map(Declaration::Function);
        }
        if !has_pointer {
            return Err(self.error("'void' is not a valid object type"));
        }
        self.parse_variable_declaration_tail(return_type, name, location)
    }

    /// A non-`void` top-level item: a base type plus zero or more `*`,
    /// then an identifier, then global-scope disambiguation on the next
    /// token (`(` ⇒ function, one of `[ = , ;` ⇒ variable).
    pub(crate) fn parse_non_void_item(&mut self) -> ParserResult<Declaration> {
        let location = self.current_location();
        let ty = self.parse_non_void_type()?;
        let name = self.expect(TokenKind::Identifier, "an identifier")?.lexeme();

        match self.current_kind() {
            TokenKind::LParen => self
                .parse_function_tail(ty, name, location)
                .map(Declaration::Function),
            TokenKind::LBracket | TokenKind::Assign | TokenKind::Comma | TokenKind::Semicolon => {
                self.parse_variable_declaration_tail(ty, name, location)
            }
            _ => Err(self.error(format!(
                "expected '(', '[', '=', ',' or ';' after '{}', found {:?}",
                name,
                self.current_kind()
            ))),
        }
    }

    /// Parses the `( params ) (; | block)` tail shared by function
    /// declarations and definitions, given the return type, name, and
    /// location already consumed.
    fn parse_function_tail(
        &mut self,
        return_type: Type,
        name: Symbol,
        location: tinyc_util::SourceLocation,
    ) -> ParserResult<FunctionDeclaration> {
        self.expect(TokenKind::LParen, "'('")?;
        let parameters = self.parse_parameter_list()?;
        self.expect(TokenKind::RParen, "')'")?;

        let body = if self.match_kind(TokenKind::Semicolon) {
            None
        } else {
            Some(self.parse_block()?)
        };

        Ok(FunctionDeclaration {
            return_type,
            name,
            parameters,
            body,
            location,
        })
    }

    fn parse_parameter_list(&mut self) -> ParserResult<Vec<Parameter>> {
        let mut parameters = Vec::new();
        if self.check(TokenKind::RParen) {
            return Ok(parameters);
        }
        loop {
            let location = self.current_location();
            let ty = self.parse_object_type()?;
            let name = self.expect(TokenKind::Identifier, "a parameter name")?.lexeme();
            parameters.push(Parameter { ty, name, location });
            if !self.match_kind(TokenKind::Comma) {
                break;
            }
        }
        Ok(parameters)
    }

    /// Parses the `[size]_opt (= init)_opt` tail of a single variable,
    /// given its type, name, and location already consumed. Does not
    /// consume a trailing `,` or `;` — callers own the statement
    /// terminator.
    fn parse_variable_rest(
        &mut self,
        ty: Type,
        name: Symbol,
        location: tinyc_util::SourceLocation,
    ) -> ParserResult<Variable> {
        let array_size = if self.match_kind(TokenKind::LBracket) {
            let size = self.parse_expr()?;
            self.expect(TokenKind::RBracket, "']'")?;
            Some(Box::new(size))
        } else {
            None
        };

        let initializer = if self.match_kind(TokenKind::Assign) {
            Some(Box::new(self.parse_expr()?))
        } else {
            None
        };

        Ok(Variable {
            ty,
            name,
            array_size,
            initializer,
            location,
        })
    }

    /// Parses the rest of a variable-declaration statement given its
    /// first type/name/location, handling the `MultipleDeclaration`
    /// sibling form (`, Type name ...`, each sibling repeating its own
    /// type keyword) and the trailing `;`. Shared between global scope
    /// and statement scope — the grammar is identical in both.
    pub(crate) fn parse_variable_declaration_tail(
        &mut self,
        first_ty: Type,
        first_name: Symbol,
        location: tinyc_util::SourceLocation,
    ) -> ParserResult<Declaration> {
        let first = self.parse_variable_rest(first_ty, first_name, location)?;

        if !self.check(TokenKind::Comma) {
            self.expect(TokenKind::Semicolon, "';'")?;
            return Ok(Declaration::Variable(first));
        }

        let mut siblings = vec![first];
        while self.match_kind(TokenKind::Comma) {
            let sibling_location = self.current_location();
            let ty = self.parse_object_type()?;
            let name = self.expect(TokenKind::Identifier, "an identifier")?.lexeme();
            siblings.push(self.parse_variable_rest(ty, name, sibling_location)?);
        }
        self.expect(TokenKind::Semicolon, "';'")?;

        Ok(Declaration::Multiple(MultipleDeclaration {
            declarations: siblings,
            location,
        }))
    }

    /// A single variable declaration with no sibling/terminator handling,
    /// used for a `for` loop's `init` clause — the caller consumes the
    /// loop's own `;`.
    pub(crate) fn parse_single_variable_declaration(&mut self) -> ParserResult<Declaration> {
        let location = self.current_location();
        let ty = self.parse_object_type()?;
        let name = self.expect(TokenKind::Identifier, "an identifier")?.lexeme();
        let variable = self.parse_variable_rest(ty, name, location)?;
        Ok(Declaration::Variable(variable))
    }

    /// A local declaration statement: the same `Type name ... ;` grammar
    /// as a global variable declaration, reached from
    /// [`crate::statements::Parser::parse_statement`] when the current
    /// token starts a type.
    pub(crate) fn parse_declaration_statement(&mut self) -> ParserResult<tinyc_ast::Stmt> {
        let location = self.current_location();
        let ty = self.parse_object_type()?;
        let name = self.expect(TokenKind::Identifier, "an identifier")?.lexeme();
        let declaration = self.parse_variable_declaration_tail(ty, name, location)?;
        Ok(tinyc_ast::Stmt::Declaration(declaration))
    }
}
