use super::token_kind::{TokenFlags, TokenKind};
use crate::source::{TextRange, TextSize};

/// A single scanned token. `text` is a lazy substring view into the original
/// buffer (spec §3: "a value view (lazy substring)") — no owned `String` is
/// allocated until something downstream asks for a *decoded* literal value
/// (see `cst::node_ext::StringLiteralValue`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'input> {
    pub kind: TokenKind,
    pub text: &'input str,
    pub range: TextRange,
    pub flags: TokenFlags,
}

impl<'input> Token<'input> {
    pub fn new(kind: TokenKind, text: &'input str, start: TextSize) -> Self {
        let end = start + TextSize::of(text);
        Self {
            kind,
            text,
            range: TextRange::new(start, end),
            flags: TokenFlags::NONE,
        }
    }

    pub fn with_flags(mut self, flags: TokenFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn len(&self) -> TextSize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}
