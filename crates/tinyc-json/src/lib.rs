//! Deterministic JSON serialization of a [`tinyc_ast::Program`] into the
//! frontend's documented wire schema.
//!
//! The emitter builds a `serde_json::Value` tree via `serde_json::Map`
//! (which preserves insertion order with the `preserve_order` feature
//! enabled workspace-wide) rather than relying on `#[derive(Serialize)]`
//! struct field order. Field order and omission are part of the schema
//! contract (every node's `nodeType` first, `location` last, optional
//! single-node fields omitted entirely when absent) — building the
//! `Value` tree by hand keeps that contract explicit and safe against a
//! struct being reordered during a future refactor.

mod declarations;
mod expressions;
mod location;
mod mode;
mod program;
mod statements;
mod types;

pub use mode::Mode;

use tinyc_ast::Program;

/// Serializes `program` to a JSON string in the given [`Mode`].
pub fn emit(program: &Program, mode: Mode) -> String {
    let value = program::emit_program(program);
    match mode {
        Mode::Compact => serde_json::to_string(&value).expect("Value is always serializable"),
        Mode::Pretty => {
            serde_json::to_string_pretty(&value).expect("Value is always serializable")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> Program {
        tinyc_parse::parse(source, "t.tc").unwrap()
    }

    #[test]
    fn compact_output_has_no_extraneous_whitespace() {
        let program = parse("int x = 0;");
        let json = emit(&program, Mode::Compact);
        assert!(!json.contains('\n'));
        assert!(json.starts_with(r#"{"nodeType":"Program""#));
    }

    #[test]
    fn pretty_output_is_two_space_indented() {
        let program = parse("int x = 0;");
        let json = emit(&program, Mode::Pretty);
        assert!(json.contains("\n  \"nodeType\""));
    }

    #[test]
    fn node_type_is_always_the_first_field() {
        let program = parse("int x = 0;");
        let json = emit(&program, Mode::Compact);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.keys().next().unwrap(), "nodeType");
    }

    #[test]
    fn location_is_always_the_last_field() {
        let program = parse("int x = 0;");
        let json = emit(&program, Mode::Compact);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.keys().last().unwrap(), "location");
    }

    #[test]
    fn program_location_is_whole_file_sentinel() {
        let program = parse("int x = 0;");
        let json = emit(&program, Mode::Compact);
        assert!(json.contains(r#""line":0,"column":0"#) || json.contains(r#""column":0,"line":0"#) || json.contains(r#""line": 0"#));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let loc = &value["location"];
        assert_eq!(loc["line"], 0);
        assert_eq!(loc["column"], 0);
    }

    #[test]
    fn emission_is_deterministic_across_runs() {
        let program = parse("int add(int a, int b) { return a + b; }");
        let first = emit(&program, Mode::Compact);
        let second = emit(&program, Mode::Compact);
        assert_eq!(first, second);
    }
}
