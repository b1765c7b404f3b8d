//! The translation-unit root node.

use crate::declarations::Declaration;
use tinyc_util::SourceLocation;

/// The root of a parsed file: an ordered list of top-level declarations.
/// `location` is the whole-file sentinel (`SourceLocation::whole_file`),
/// not the location of the first declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub declarations: Vec<Declaration>,
    pub location: SourceLocation,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinyc_util::Symbol;

    #[test]
    fn empty_program_location_is_whole_file() {
        let program = Program {
            declarations: Vec::new(),
            location: SourceLocation::whole_file(Symbol::intern("t.tc")),
        };
        assert!(program.location.is_whole_file());
        assert!(program.declarations.is_empty());
    }
}
