//! The single tagged variant over every token and node kind the CST can
//! contain. Modeled after apollo-parser's generated `SyntaxKind`, but authored
//! by hand since this grammar has no ungrammar-style generator of its own.

#![allow(non_camel_case_types)]

/// ~60 node kinds plus tokens, per spec §3. A single enum (sum type) rather
/// than a subclass hierarchy, so that `rowan::Language::kind_from_raw` is a
/// trivial numeric round-trip and `tree_utils::visit_children`'s
/// exhaustiveness check is a compile-time guarantee (spec §9, "Sum types
/// over node kinds").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    // --- trivia & literal tokens ---
    WHITESPACE,
    NEWLINE,
    LINE_COMMENT,
    BLOCK_COMMENT,
    EOF,
    ERROR_TOKEN,

    IDENT,
    STRING_LITERAL,
    NUMERIC_LITERAL,

    // doc-mode tokens (§4.1 scanDoc)
    DOC_STAR,
    DOC_TAG_AT,
    DOC_TEXT_TOKEN,

    // --- punctuation ---
    L_BRACE,
    R_BRACE,
    L_PAREN,
    R_PAREN,
    L_BRACKET,
    R_BRACKET,
    L_ANGLE,
    R_ANGLE,
    COLON,
    COLON_COLON,
    SEMICOLON,
    COMMA,
    EQ,
    DOT,
    QUESTION,
    PIPE,
    AMP,
    AMP_AMP,
    PIPE_PIPE,
    AT,
    AT_AT,
    HASH,
    BANG,
    BANG_EQ,
    EQ_EQ,
    LT_EQ,
    GT_EQ,
    PLUS,
    MINUS,
    STAR,
    SLASH,
    ELLIPSIS,
    FAT_ARROW,

    // --- keywords ---
    MODEL_KW,
    SCALAR_KW,
    NAMESPACE_KW,
    INTERFACE_KW,
    UNION_KW,
    OP_KW,
    ENUM_KW,
    ALIAS_KW,
    USING_KW,
    IMPORT_KW,
    EXTENDS_KW,
    IS_KW,
    EXTERN_KW,
    FN_KW,
    DEC_KW,
    PROJECTION_KW,
    TO_KW,
    FROM_KW,
    IF_KW,
    ELSE_KW,
    RETURN_KW,
    TRUE_KW,
    FALSE_KW,
    VOID_KW,
    NEVER_KW,
    UNKNOWN_KW,

    // --- annotation-list nodes ---
    DECORATOR_LIST,
    DECORATOR_EXPRESSION,
    AUGMENT_DECORATOR_STATEMENT,
    DIRECTIVE_LIST,
    DIRECTIVE_EXPRESSION,
    DOC_LIST,
    MODIFIER_LIST,

    // --- doc nodes ---
    DOC,
    DOC_TEXT,
    DOC_PARAM_TAG,
    DOC_TEMPLATE_TAG,
    DOC_RETURNS_TAG,
    DOC_UNKNOWN_TAG,

    // --- names & lists ---
    NAME,
    DOTTED_NAME,
    TEMPLATE_PARAMETER_LIST,
    TEMPLATE_PARAMETER,
    TEMPLATE_ARGUMENT_LIST,
    HERITAGE_LIST,
    MODEL_PROPERTY_LIST,
    ENUM_MEMBER_LIST,
    UNION_VARIANT_LIST,
    INTERFACE_MEMBER_LIST,
    OPERATION_PARAMETER_LIST,
    FUNCTION_PARAMETER_LIST,
    CALL_ARGUMENT_LIST,
    TUPLE_ELEMENT_LIST,

    // --- expressions ---
    IDENTIFIER_EXPRESSION,
    MEMBER_EXPRESSION,
    TYPE_REFERENCE,
    UNION_EXPRESSION,
    INTERSECTION_EXPRESSION,
    ARRAY_EXPRESSION,
    TUPLE_EXPRESSION,
    MODEL_EXPRESSION,
    PARENTHESIZED_EXPRESSION,
    STRING_LITERAL_EXPRESSION,
    NUMERIC_LITERAL_EXPRESSION,
    BOOLEAN_LITERAL_EXPRESSION,
    VOID_EXPRESSION,
    NEVER_EXPRESSION,
    UNKNOWN_EXPRESSION,

    // --- members ---
    MODEL_PROPERTY,
    MODEL_SPREAD_PROPERTY,
    ENUM_MEMBER,
    ENUM_SPREAD_MEMBER,
    UNION_VARIANT,
    OPERATION_SIGNATURE_DECLARATION,
    OPERATION_SIGNATURE_REFERENCE,
    FUNCTION_PARAMETER,

    // --- declarations ---
    NAMESPACE_STATEMENT,
    MODEL_STATEMENT,
    SCALAR_STATEMENT,
    INTERFACE_STATEMENT,
    UNION_STATEMENT,
    OPERATION_STATEMENT,
    ENUM_STATEMENT,
    ALIAS_STATEMENT,
    USING_STATEMENT,
    IMPORT_STATEMENT,
    DECORATOR_DECLARATION_STATEMENT,
    FUNCTION_DECLARATION_STATEMENT,
    EMPTY_STATEMENT,
    INVALID_STATEMENT,

    // --- projections ---
    PROJECTION_STATEMENT,
    PROJECTION,
    PROJECTION_MODEL_SELECTOR,
    PROJECTION_OPERATION_SELECTOR,
    PROJECTION_INTERFACE_SELECTOR,
    PROJECTION_UNION_SELECTOR,
    PROJECTION_ENUM_SELECTOR,
    PROJECTION_IDENTIFIER_SELECTOR,
    PROJECTION_PARAMETER_LIST,
    PROJECTION_PARAMETER,
    PROJECTION_BLOCK_EXPRESSION,
    PROJECTION_EXPRESSION_STATEMENT,
    PROJECTION_IF_EXPRESSION,
    PROJECTION_LAMBDA_EXPRESSION,
    PROJECTION_LAMBDA_PARAMETER,
    PROJECTION_TUPLE_EXPRESSION,
    PROJECTION_MODEL_EXPRESSION,
    PROJECTION_CALL_EXPRESSION,
    PROJECTION_MEMBER_EXPRESSION,
    PROJECTION_DECORATOR_REFERENCE_EXPRESSION,
    PROJECTION_RETURN_EXPRESSION,
    PROJECTION_LOGICAL_EXPRESSION,
    PROJECTION_RELATIONAL_EXPRESSION,
    PROJECTION_EQUALITY_EXPRESSION,
    PROJECTION_ARITHMETIC_EXPRESSION,
    PROJECTION_UNARY_EXPRESSION,
    PROJECTION_PARENTHESIZED_EXPRESSION,

    // --- root ---
    SCRIPT,

    // must stay last: used as a bound check by `rowan::Language`
    __LAST,
}

impl SyntaxKind {
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            SyntaxKind::WHITESPACE
                | SyntaxKind::NEWLINE
                | SyntaxKind::LINE_COMMENT
                | SyntaxKind::BLOCK_COMMENT
        )
    }

    pub fn is_comment(self) -> bool {
        matches!(self, SyntaxKind::LINE_COMMENT | SyntaxKind::BLOCK_COMMENT)
    }

    pub(crate) fn keyword_from_str(s: &str) -> Option<SyntaxKind> {
        Some(match s {
            "model" => SyntaxKind::MODEL_KW,
            "scalar" => SyntaxKind::SCALAR_KW,
            "namespace" => SyntaxKind::NAMESPACE_KW,
            "interface" => SyntaxKind::INTERFACE_KW,
            "union" => SyntaxKind::UNION_KW,
            "op" => SyntaxKind::OP_KW,
            "enum" => SyntaxKind::ENUM_KW,
            "alias" => SyntaxKind::ALIAS_KW,
            "using" => SyntaxKind::USING_KW,
            "import" => SyntaxKind::IMPORT_KW,
            "extends" => SyntaxKind::EXTENDS_KW,
            "is" => SyntaxKind::IS_KW,
            "extern" => SyntaxKind::EXTERN_KW,
            "fn" => SyntaxKind::FN_KW,
            "dec" => SyntaxKind::DEC_KW,
            "projection" => SyntaxKind::PROJECTION_KW,
            "to" => SyntaxKind::TO_KW,
            "from" => SyntaxKind::FROM_KW,
            "if" => SyntaxKind::IF_KW,
            "else" => SyntaxKind::ELSE_KW,
            "return" => SyntaxKind::RETURN_KW,
            "true" => SyntaxKind::TRUE_KW,
            "false" => SyntaxKind::FALSE_KW,
            "void" => SyntaxKind::VOID_KW,
            "never" => SyntaxKind::NEVER_KW,
            "unknown" => SyntaxKind::UNKNOWN_KW,
            _ => return None,
        })
    }

    /// Statement-leading keywords, used by the list driver's error-recovery
    /// re-synchronization (spec §4.5 step 3) and the top-level "invalid
    /// statement" recovery (§4.3).
    pub(crate) fn is_statement_keyword(self) -> bool {
        matches!(
            self,
            SyntaxKind::MODEL_KW
                | SyntaxKind::SCALAR_KW
                | SyntaxKind::NAMESPACE_KW
                | SyntaxKind::INTERFACE_KW
                | SyntaxKind::UNION_KW
                | SyntaxKind::OP_KW
                | SyntaxKind::ENUM_KW
                | SyntaxKind::ALIAS_KW
                | SyntaxKind::USING_KW
                | SyntaxKind::IMPORT_KW
                | SyntaxKind::PROJECTION_KW
                | SyntaxKind::EXTERN_KW
                | SyntaxKind::FN_KW
                | SyntaxKind::DEC_KW
                | SyntaxKind::AT_AT
                | SyntaxKind::SEMICOLON
        )
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        rowan::SyntaxKind(kind as u16)
    }
}

/// Shorthand for punctuation/keyword `SyntaxKind`s, mirroring apollo-parser's
/// `T!`/`S!` macros.
macro_rules! T {
    [@] => { $crate::syntax_kind::SyntaxKind::AT };
    [@@] => { $crate::syntax_kind::SyntaxKind::AT_AT };
    [#] => { $crate::syntax_kind::SyntaxKind::HASH };
    ['{'] => { $crate::syntax_kind::SyntaxKind::L_BRACE };
    ['}'] => { $crate::syntax_kind::SyntaxKind::R_BRACE };
    ['('] => { $crate::syntax_kind::SyntaxKind::L_PAREN };
    [')'] => { $crate::syntax_kind::SyntaxKind::R_PAREN };
    ['['] => { $crate::syntax_kind::SyntaxKind::L_BRACKET };
    [']'] => { $crate::syntax_kind::SyntaxKind::R_BRACKET };
    [<] => { $crate::syntax_kind::SyntaxKind::L_ANGLE };
    [>] => { $crate::syntax_kind::SyntaxKind::R_ANGLE };
    [:] => { $crate::syntax_kind::SyntaxKind::COLON };
    [::] => { $crate::syntax_kind::SyntaxKind::COLON_COLON };
    [;] => { $crate::syntax_kind::SyntaxKind::SEMICOLON };
    [,] => { $crate::syntax_kind::SyntaxKind::COMMA };
    [=] => { $crate::syntax_kind::SyntaxKind::EQ };
    [.] => { $crate::syntax_kind::SyntaxKind::DOT };
    [?] => { $crate::syntax_kind::SyntaxKind::QUESTION };
    [|] => { $crate::syntax_kind::SyntaxKind::PIPE };
    [&] => { $crate::syntax_kind::SyntaxKind::AMP };
    [&&] => { $crate::syntax_kind::SyntaxKind::AMP_AMP };
    [||] => { $crate::syntax_kind::SyntaxKind::PIPE_PIPE };
    [!] => { $crate::syntax_kind::SyntaxKind::BANG };
    [!=] => { $crate::syntax_kind::SyntaxKind::BANG_EQ };
    [==] => { $crate::syntax_kind::SyntaxKind::EQ_EQ };
    [<=] => { $crate::syntax_kind::SyntaxKind::LT_EQ };
    [>=] => { $crate::syntax_kind::SyntaxKind::GT_EQ };
    [+] => { $crate::syntax_kind::SyntaxKind::PLUS };
    [-] => { $crate::syntax_kind::SyntaxKind::MINUS };
    [*] => { $crate::syntax_kind::SyntaxKind::STAR };
    [/] => { $crate::syntax_kind::SyntaxKind::SLASH };
    [...] => { $crate::syntax_kind::SyntaxKind::ELLIPSIS };
    [=>] => { $crate::syntax_kind::SyntaxKind::FAT_ARROW };
    [model] => { $crate::syntax_kind::SyntaxKind::MODEL_KW };
    [scalar] => { $crate::syntax_kind::SyntaxKind::SCALAR_KW };
    [namespace] => { $crate::syntax_kind::SyntaxKind::NAMESPACE_KW };
    [interface] => { $crate::syntax_kind::SyntaxKind::INTERFACE_KW };
    [union] => { $crate::syntax_kind::SyntaxKind::UNION_KW };
    [op] => { $crate::syntax_kind::SyntaxKind::OP_KW };
    [enum] => { $crate::syntax_kind::SyntaxKind::ENUM_KW };
    [alias] => { $crate::syntax_kind::SyntaxKind::ALIAS_KW };
    [using] => { $crate::syntax_kind::SyntaxKind::USING_KW };
    [import] => { $crate::syntax_kind::SyntaxKind::IMPORT_KW };
    [extends] => { $crate::syntax_kind::SyntaxKind::EXTENDS_KW };
    [is] => { $crate::syntax_kind::SyntaxKind::IS_KW };
    [extern] => { $crate::syntax_kind::SyntaxKind::EXTERN_KW };
    [fn] => { $crate::syntax_kind::SyntaxKind::FN_KW };
    [dec] => { $crate::syntax_kind::SyntaxKind::DEC_KW };
    [projection] => { $crate::syntax_kind::SyntaxKind::PROJECTION_KW };
    [to] => { $crate::syntax_kind::SyntaxKind::TO_KW };
    [from] => { $crate::syntax_kind::SyntaxKind::FROM_KW };
    [if] => { $crate::syntax_kind::SyntaxKind::IF_KW };
    [else] => { $crate::syntax_kind::SyntaxKind::ELSE_KW };
    [return] => { $crate::syntax_kind::SyntaxKind::RETURN_KW };
    [true] => { $crate::syntax_kind::SyntaxKind::TRUE_KW };
    [false] => { $crate::syntax_kind::SyntaxKind::FALSE_KW };
    [void] => { $crate::syntax_kind::SyntaxKind::VOID_KW };
    [never] => { $crate::syntax_kind::SyntaxKind::NEVER_KW };
    [unknown] => { $crate::syntax_kind::SyntaxKind::UNKNOWN_KW };
}

pub(crate) use T;
