//! The parser's entry point: `parseProgram`, repeatedly dispatching to one
//! of the four program-item productions until `EndOfFile`.

use crate::core::Parser;
use tinyc_ast::{Declaration, Program};
use tinyc_lex::TokenKind;
use tinyc_util::{ParserResult, SourceLocation};

impl Parser {
    /// Parses an entire token stream into a [`Program`]. The program's own
    /// location is always the whole-file sentinel, regardless of where its
    /// first declaration begins.
    pub fn parse_program(&mut self) -> ParserResult<Program> {
        let filename = self.filename();
        let mut declarations = Vec::new();
        while !self.is_at_end() {
            declarations.push(self.parse_program_item()?);
        }
        Ok(Program {
            declarations,
            location: SourceLocation::whole_file(filename),
        })
    }

    pub(crate) fn parse_program_item(&mut self) -> ParserResult<Declaration> {
        match self.current_kind() {
            TokenKind::Struct => Ok(Declaration::Struct(self.parse_struct_declaration()?)),
            TokenKind::Typedef => {
                Ok(Declaration::FunctionPointer(self.parse_function_pointer_typedef()?))
            }
            TokenKind::Void => self.parse_void_rooted_item(),
            TokenKind::Int | TokenKind::Double | TokenKind::Char => self.parse_non_void_item(),
            _ => Err(self.error(format!(
                "expected a struct, typedef, or declaration, found {:?}",
                self.current_kind()
            ))),
        }
    }
}
