//! The fixed list kinds named in spec §4.5, each built once as a `const
//! ListKind` so every call site shares one description of its delimiters
//! and recovery policy instead of re-deriving it inline.

use crate::lexer::TokenKind;
use crate::parser::list::ListKind;
use crate::syntax_kind::SyntaxKind;
use crate::syntax_kind::T;

pub(crate) const OPERATION_PARAMETERS: ListKind = ListKind {
    name: "parameter",
    open: Some((TokenKind::LParen, T!['('])),
    close: (TokenKind::RParen, T![')']),
    delimiter: Some((TokenKind::Comma, T![,])),
    tolerated_delimiter: Some((TokenKind::Semicolon, T![;])),
    allow_empty: true,
    tolerated_delimiter_is_valid: true,
    trailing_delimiter_is_valid: true,
    allowed_statement_keyword: None,
};

pub(crate) const FUNCTION_PARAMETERS: ListKind = OPERATION_PARAMETERS;

pub(crate) const DECORATOR_ARGUMENTS: ListKind = ListKind {
    name: "argument",
    open: Some((TokenKind::LParen, T!['('])),
    close: (TokenKind::RParen, T![')']),
    delimiter: Some((TokenKind::Comma, T![,])),
    tolerated_delimiter: None,
    allow_empty: true,
    tolerated_delimiter_is_valid: false,
    trailing_delimiter_is_valid: true,
    allowed_statement_keyword: None,
};

pub(crate) const CALL_ARGUMENTS: ListKind = DECORATOR_ARGUMENTS;

pub(crate) const MODEL_PROPERTIES: ListKind = ListKind {
    name: "property",
    open: Some((TokenKind::LBrace, T!['{'])),
    close: (TokenKind::RBrace, T!['}']),
    delimiter: Some((TokenKind::Semicolon, T![;])),
    tolerated_delimiter: Some((TokenKind::Comma, T![,])),
    allow_empty: true,
    tolerated_delimiter_is_valid: true,
    trailing_delimiter_is_valid: true,
    allowed_statement_keyword: None,
};

pub(crate) const ENUM_MEMBERS: ListKind = MODEL_PROPERTIES;

pub(crate) const INTERFACE_MEMBERS: ListKind = ListKind {
    name: "operation",
    open: Some((TokenKind::LBrace, T!['{'])),
    close: (TokenKind::RBrace, T!['}']),
    delimiter: Some((TokenKind::Semicolon, T![;])),
    tolerated_delimiter: Some((TokenKind::Comma, T![,])),
    allow_empty: true,
    tolerated_delimiter_is_valid: false,
    trailing_delimiter_is_valid: true,
    allowed_statement_keyword: Some(T![op]),
};

pub(crate) const UNION_VARIANTS: ListKind = MODEL_PROPERTIES;

pub(crate) const TEMPLATE_PARAMETERS: ListKind = ListKind {
    name: "template parameter",
    open: Some((TokenKind::LAngle, T![<])),
    close: (TokenKind::RAngle, T![>]),
    delimiter: Some((TokenKind::Comma, T![,])),
    tolerated_delimiter: None,
    allow_empty: false,
    tolerated_delimiter_is_valid: false,
    trailing_delimiter_is_valid: false,
    allowed_statement_keyword: None,
};

pub(crate) const TEMPLATE_ARGUMENTS: ListKind = TEMPLATE_PARAMETERS;

pub(crate) const TUPLE: ListKind = ListKind {
    name: "element",
    open: Some((TokenKind::LBracket, T!['['])),
    close: (TokenKind::RBracket, T![']']),
    delimiter: Some((TokenKind::Comma, T![,])),
    tolerated_delimiter: None,
    allow_empty: true,
    tolerated_delimiter_is_valid: false,
    trailing_delimiter_is_valid: true,
    allowed_statement_keyword: None,
};

pub(crate) const PROJECTION_EXPRESSION: ListKind = ListKind {
    name: "expression",
    open: Some((TokenKind::LParen, T!['('])),
    close: (TokenKind::RParen, T![')']),
    delimiter: Some((TokenKind::Comma, T![,])),
    tolerated_delimiter: None,
    allow_empty: true,
    tolerated_delimiter_is_valid: false,
    trailing_delimiter_is_valid: false,
    allowed_statement_keyword: None,
};

pub(crate) const PROJECTION_PARAMETER: ListKind = ListKind {
    name: "parameter",
    open: Some((TokenKind::LParen, T!['('])),
    close: (TokenKind::RParen, T![')']),
    delimiter: Some((TokenKind::Comma, T![,])),
    tolerated_delimiter: None,
    allow_empty: true,
    tolerated_delimiter_is_valid: false,
    trailing_delimiter_is_valid: false,
    allowed_statement_keyword: None,
};
