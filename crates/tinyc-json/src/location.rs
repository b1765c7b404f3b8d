//! Emission of the `location` object every node carries as its last field.

use serde_json::{json, Value};
use tinyc_util::SourceLocation;

pub(crate) fn emit_location(location: SourceLocation) -> Value {
    json!({
        "filename": location.filename().as_str(),
        "line": location.line(),
        "column": location.column(),
    })
}
