//! The emitter's two output modes.

/// Selects whitespace formatting for [`crate::emit`]. Field order and
/// omission rules are identical in both modes — only whitespace differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// No extra whitespace.
    Compact,
    /// Two-space indentation, one field per line.
    Pretty,
}
