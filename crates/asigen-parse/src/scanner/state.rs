//! Explicit scanner progress.

use super::declaration::Declaration;
use super::patterns::Skip;

/// Cursor and block nesting of one scan.
///
/// `depth` is signed: unbalanced `}` drive it below zero and nothing
/// corrects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanState {
    /// Byte offset of the cursor
    pub offset: usize,
    /// Unmatched `{` seen outside any declaration match
    pub depth: i32,
}

impl ScanState {
    /// State at the start of a file.
    pub fn new() -> Self {
        Self::default()
    }

    /// True while the cursor is inside an opaque block.
    pub fn in_block(&self) -> bool {
        self.depth > 0
    }
}

/// What a single scanner step did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Stepped over whitespace, a comment, a string or an include
    Skipped(Skip),
    /// Consumed `{`
    Entered,
    /// Consumed `}`
    Exited,
    /// Recognized a declaration and moved past it
    Declared(Declaration),
    /// Moved one character without recognizing anything
    Advanced,
}
