/// Raw lexical category produced by the cursor. Keywords are *not* their own
/// variants here — like apollo-parser's GraphQL lexer, an identifier's text is
/// compared against the keyword table by the grammar that expects a keyword
/// in that position (`model`, `namespace`, ...), since the same identifier
/// text is a valid field/property name elsewhere in the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Ident,
    StringLiteral,
    NumericLiteral,

    Newline,
    Whitespace,
    LineComment,
    BlockComment,

    At,
    AtAt,
    Hash,
    LBrace,
    RBrace,
    LParen,
    RParen,
    LBracket,
    RBracket,
    LAngle,
    RAngle,
    Colon,
    ColonColon,
    Semicolon,
    Comma,
    Eq,
    Dot,
    Question,
    Pipe,
    Amp,
    AmpAmp,
    PipePipe,
    Bang,
    BangEq,
    EqEq,
    LtEq,
    GtEq,
    Plus,
    Minus,
    Star,
    Slash,
    Ellipsis,
    FatArrow,

    /// A single byte/char the cursor didn't recognize; preserved in the
    /// tree as an `ERROR_TOKEN` so byte offsets never drift (see the
    /// apollo-parser's `lexer_error_*_preserves_byte_positions` tests).
    Unknown,

    Eof,
}

impl TokenKind {
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Newline | TokenKind::Whitespace | TokenKind::LineComment | TokenKind::BlockComment
        )
    }
}

use crate::bitset::bitflags_lite;

bitflags_lite! {
    /// Per-token flags (spec §3: at least `DocComment`, `Unterminated`).
    pub struct TokenFlags: u8 {
        const NONE = 0;
        const DOC_COMMENT = 1 << 0;
        const UNTERMINATED = 1 << 1;
        const TRIPLE_QUOTED = 1 << 2;
    }
}
