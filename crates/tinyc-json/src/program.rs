//! Emission of the `Program` root node.

use crate::declarations::emit_declaration;
use crate::location::emit_location;
use serde_json::{Map, Value};
use tinyc_ast::Program;

pub(crate) fn emit_program(program: &Program) -> Value {
    let mut object = Map::new();
    object.insert("nodeType".into(), "Program".into());
    object.insert(
        "declarations".into(),
        Value::Array(program.declarations.iter().map(emit_declaration).collect()),
    );
    object.insert("location".into(), emit_location(program.location));
    Value::Object(object)
}
