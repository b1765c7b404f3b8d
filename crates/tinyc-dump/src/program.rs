//! Rendering of the `Program` root node.

use crate::Dumper;
use tinyc_ast::Program;

impl<'a> Dumper<'a> {
    pub(crate) fn dump_program(&mut self, program: &Program) {
        self.line("Program");
        self.indent += 1;
        for declaration in &program.declarations {
            self.dump_declaration(declaration);
        }
        self.indent -= 1;
    }
}
