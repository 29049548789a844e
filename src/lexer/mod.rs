mod cursor;
mod token;
mod token_kind;

use crate::source::TextSize;
use cursor::Cursor;

pub use token::Token;
pub use token_kind::{TokenFlags, TokenKind};

/// Pull-based scanner (component C). Owns the remaining input and hands out
/// one token at a time; the parser is the only thing that drives it
/// forward, and it never looks ahead further than the single token it
/// currently holds (spec §4.1).
#[derive(Debug, Clone)]
pub(crate) struct Lexer<'input> {
    input: &'input str,
    pos: TextSize,
}

impl<'input> Lexer<'input> {
    pub(crate) fn new(input: &'input str) -> Self {
        Self {
            input,
            pos: TextSize::from(0),
        }
    }

    /// A scanner scoped to `[range.start(), range.end())` of `source`, used to
    /// re-scan a doc comment's interior in doc mode without losing absolute
    /// positions (spec §4.1 `scanRange`, §9 "scoped mode switching"). Takes
    /// the *original* full buffer rather than slicing `self.input`: by the
    /// time a token is `current`, the main cursor has already advanced past
    /// it, so `self.input` no longer starts at `range`.
    pub(crate) fn for_range(source: &'input str, start: TextSize, end: TextSize) -> Lexer<'input> {
        let start_u: u32 = start.into();
        let end_u: u32 = end.into();
        Lexer {
            input: &source[start_u as usize..end_u as usize],
            pos: start,
        }
    }

    pub(crate) fn position(&self) -> TextSize {
        self.pos
    }

    /// Advance one syntax-mode token.
    pub(crate) fn scan(&mut self) -> Token<'input> {
        self.next_token(false)
    }

    /// Advance one doc-mode token: only `*`, `@name`, and free text runs are
    /// recognized; everything else falls back to syntax-mode scanning so a
    /// doc comment body can still contain e.g. punctuation-free prose.
    pub(crate) fn scan_doc(&mut self) -> Token<'input> {
        self.next_token(true)
    }

    fn next_token(&mut self, doc_mode: bool) -> Token<'input> {
        if self.input.is_empty() {
            return Token::new(TokenKind::Eof, "", self.pos);
        }

        let start = self.pos;
        let mut cursor = Cursor::new(self.input);
        let first = cursor.first();

        let (kind, flags) = if doc_mode {
            self.scan_doc_token(&mut cursor, first)
        } else {
            self.scan_syntax_token(&mut cursor, first)
        };

        let consumed = cursor.len_consumed().max(1);
        let text = &self.input[..consumed];
        self.input = &self.input[consumed..];
        self.pos += TextSize::from(consumed as u32);
        Token::new(kind, text, start).with_flags(flags)
    }

    fn scan_syntax_token(&self, cursor: &mut Cursor<'input>, first: char) -> (TokenKind, TokenFlags) {
        cursor.bump();
        let kind = match first {
            c if is_newline(c) => {
                return (TokenKind::Newline, TokenFlags::NONE);
            }
            c if is_whitespace(c) => {
                cursor.eat_while(|c| is_whitespace(c) && !is_newline(c));
                TokenKind::Whitespace
            }
            '/' if cursor.first() == '/' => {
                cursor.bump();
                cursor.eat_while(|c| !is_newline(c));
                TokenKind::LineComment
            }
            '/' if cursor.first() == '*' => {
                cursor.bump();
                return self.scan_block_comment(cursor);
            }
            c if is_ident_start(c) => {
                cursor.eat_while(is_ident_continue);
                TokenKind::Ident
            }
            '"' => return self.scan_string_literal(cursor),
            c if c.is_ascii_digit() => {
                cursor.eat_while(|c| c.is_ascii_alphanumeric() || c == '.' || c == '_');
                TokenKind::NumericLiteral
            }
            '@' if cursor.first() == '@' => {
                cursor.bump();
                TokenKind::AtAt
            }
            '@' => TokenKind::At,
            '#' => TokenKind::Hash,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            '<' if cursor.first() == '=' => {
                cursor.bump();
                TokenKind::LtEq
            }
            '<' => TokenKind::LAngle,
            '>' if cursor.first() == '=' => {
                cursor.bump();
                TokenKind::GtEq
            }
            '>' => TokenKind::RAngle,
            ':' if cursor.first() == ':' => {
                cursor.bump();
                TokenKind::ColonColon
            }
            ':' => TokenKind::Colon,
            ';' => TokenKind::Semicolon,
            ',' => TokenKind::Comma,
            '=' if cursor.first() == '=' => {
                cursor.bump();
                TokenKind::EqEq
            }
            '=' if cursor.first() == '>' => {
                cursor.bump();
                TokenKind::FatArrow
            }
            '=' => TokenKind::Eq,
            '.' if cursor.first() == '.' && cursor.second() == '.' => {
                cursor.bump();
                cursor.bump();
                TokenKind::Ellipsis
            }
            '.' => TokenKind::Dot,
            '?' => TokenKind::Question,
            '|' if cursor.first() == '|' => {
                cursor.bump();
                TokenKind::PipePipe
            }
            '|' => TokenKind::Pipe,
            '&' if cursor.first() == '&' => {
                cursor.bump();
                TokenKind::AmpAmp
            }
            '&' => TokenKind::Amp,
            '!' if cursor.first() == '=' => {
                cursor.bump();
                TokenKind::BangEq
            }
            '!' => TokenKind::Bang,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            _ => TokenKind::Unknown,
        };
        (kind, TokenFlags::NONE)
    }

    fn scan_block_comment(&self, cursor: &mut Cursor<'input>) -> (TokenKind, TokenFlags) {
        let mut flags = TokenFlags::NONE;
        if cursor.first() == '*' && cursor.second() != '/' {
            flags.insert(TokenFlags::DOC_COMMENT);
        }
        loop {
            if cursor.is_eof() {
                flags.insert(TokenFlags::UNTERMINATED);
                break;
            }
            if cursor.first() == '*' && cursor.second() == '/' {
                cursor.bump();
                cursor.bump();
                break;
            }
            cursor.bump();
        }
        (TokenKind::BlockComment, flags)
    }

    fn scan_string_literal(&self, cursor: &mut Cursor<'input>) -> (TokenKind, TokenFlags) {
        // The opening `"` was already consumed by the caller.
        let mut flags = TokenFlags::NONE;
        if cursor.first() == '"' && cursor.second() == '"' {
            flags.insert(TokenFlags::TRIPLE_QUOTED);
            cursor.bump();
            cursor.bump();
            loop {
                if cursor.is_eof() {
                    flags.insert(TokenFlags::UNTERMINATED);
                    break;
                }
                if cursor.first() == '"' && cursor.second() == '"' && cursor.third() == '"' {
                    cursor.bump();
                    cursor.bump();
                    cursor.bump();
                    break;
                }
                cursor.bump();
            }
            return (TokenKind::StringLiteral, flags);
        }

        loop {
            if cursor.is_eof() {
                flags.insert(TokenFlags::UNTERMINATED);
                break;
            }
            match cursor.first() {
                '"' => {
                    cursor.bump();
                    break;
                }
                '\\' => {
                    cursor.bump();
                    if !cursor.is_eof() {
                        cursor.bump();
                    }
                }
                c if is_newline(c) => {
                    flags.insert(TokenFlags::UNTERMINATED);
                    break;
                }
                _ => {
                    cursor.bump();
                }
            }
        }
        (TokenKind::StringLiteral, flags)
    }

    fn scan_doc_token(&self, cursor: &mut Cursor<'input>, first: char) -> (TokenKind, TokenFlags) {
        match first {
            c if is_newline(c) => {
                cursor.bump();
                (TokenKind::Newline, TokenFlags::NONE)
            }
            c if is_whitespace(c) => {
                cursor.bump();
                cursor.eat_while(|c| is_whitespace(c) && !is_newline(c));
                (TokenKind::Whitespace, TokenFlags::NONE)
            }
            '*' => {
                cursor.bump();
                (TokenKind::Star, TokenFlags::NONE)
            }
            '@' if is_ident_start(cursor.second()) => {
                cursor.bump();
                (TokenKind::At, TokenFlags::NONE)
            }
            _ => {
                cursor.bump();
                cursor.eat_while(|c| !is_newline(c) && !is_whitespace(c) && c != '*');
                (TokenKind::Ident, TokenFlags::NONE)
            }
        }
    }
}

pub(crate) fn is_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}' | '\u{000A}' | '\u{000B}' | '\u{000C}' | '\u{000D}' | '\u{0020}' | '\u{FEFF}'
    )
}

pub(crate) fn is_newline(c: char) -> bool {
    matches!(c, '\n' | '\r')
}

pub(crate) fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_ascii_alphabetic()
}

pub(crate) fn is_ident_continue(c: char) -> bool {
    c == '_' || c.is_ascii_alphanumeric()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<TokenKind> {
        let mut lexer = Lexer::new(src);
        let mut out = Vec::new();
        loop {
            let tok = lexer.scan();
            if tok.kind == TokenKind::Eof {
                break;
            }
            out.push(tok.kind);
        }
        out
    }

    #[test]
    fn scans_model_header() {
        use TokenKind::*;
        assert_eq!(
            kinds("model Foo {"),
            vec![Ident, Whitespace, Ident, Whitespace, LBrace]
        );
    }

    #[test]
    fn scans_doc_comment_flag() {
        let mut lexer = Lexer::new("/** hello */");
        let tok = lexer.scan();
        assert_eq!(tok.kind, TokenKind::BlockComment);
        assert!(tok.flags.contains(TokenFlags::DOC_COMMENT));
    }

    #[test]
    fn non_doc_block_comment_has_no_flag() {
        let mut lexer = Lexer::new("/* hello */");
        let tok = lexer.scan();
        assert_eq!(tok.kind, TokenKind::BlockComment);
        assert!(!tok.flags.contains(TokenFlags::DOC_COMMENT));
    }

    #[test]
    fn unterminated_block_comment_at_eof() {
        let mut lexer = Lexer::new("/* oops");
        let tok = lexer.scan();
        assert!(tok.flags.contains(TokenFlags::UNTERMINATED));
        assert_eq!(tok.range.end(), TextSize::from(7));
    }

    #[test]
    fn triple_quoted_string() {
        let mut lexer = Lexer::new(r#""""hi there""" rest"#);
        let tok = lexer.scan();
        assert_eq!(tok.kind, TokenKind::StringLiteral);
        assert!(tok.flags.contains(TokenFlags::TRIPLE_QUOTED));
        assert_eq!(tok.text, r#""""hi there""""#);
    }

    #[test]
    fn escaped_quote_in_string() {
        let mut lexer = Lexer::new(r#""a\"b" x"#);
        let tok = lexer.scan();
        assert_eq!(tok.kind, TokenKind::StringLiteral);
        assert_eq!(tok.text, r#""a\"b""#);
    }

    #[test]
    fn numeric_hex_literal() {
        let mut lexer = Lexer::new("0x1F,");
        let tok = lexer.scan();
        assert_eq!(tok.kind, TokenKind::NumericLiteral);
        assert_eq!(tok.text, "0x1F");
    }

    #[test]
    fn spread_token() {
        let mut lexer = Lexer::new("...Foo");
        let tok = lexer.scan();
        assert_eq!(tok.kind, TokenKind::Ellipsis);
    }
}
