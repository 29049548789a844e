//! Hand-written accessors that need more than `support::{child, children,
//! token}` can express: literal decoding, and the handful of places where
//! two differently-meaning children share one `SyntaxKind` and can only be
//! told apart by their position relative to a token or to each other.
//!
//! Grounded in apollo-parser's `cst/node_ext.rs`: `unescape_string` and
//! `unescape_block_string` below are the same algorithm (including the
//! `BlockStringValue(rawValue)` spec steps), adapted to this grammar's
//! delimiters and deferred numeric-literal parsing.

use crate::cst::{
    AstNode, BooleanLiteralExpression, Expr, FunctionParameter, ModelProperty, NamespaceStatement,
    NumericLiteralExpression, Projection, ProjectionBlockExpression, ProjectionExpr,
    ProjectionIfExpression, StringLiteralExpression, TemplateParameter,
};
use crate::parser::SyntaxNode;
use crate::syntax_kind::SyntaxKind;

/// Lazily-decoded text of a `STRING_LITERAL` token: plain double-quoted or
/// triple-quoted, escape sequences resolved on demand rather than at parse
/// time (spec: the CST stays lossless, decoding is a CST-layer concern).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StringLiteralValue {
    raw: String,
}

impl StringLiteralValue {
    pub(crate) fn new(raw: &str) -> Self {
        Self { raw: raw.to_string() }
    }

    /// The token text with its quotes still attached.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Decoded string contents: dequoted, escapes resolved, and — for
    /// triple-quoted strings — dedented per `BlockStringValue`.
    pub fn value(&self) -> String {
        if is_triple_quoted(&self.raw) {
            unescape_block_string(&self.raw[3..self.raw.len() - 3])
        } else {
            let end = if self.raw.ends_with('"') { self.raw.len() - 1 } else { self.raw.len() };
            unescape_string(&self.raw[1..end])
        }
    }
}

fn is_triple_quoted(raw: &str) -> bool {
    raw.starts_with(TRIPLE_QUOTE)
}

const TRIPLE_QUOTE: &str = r#"""""#;

/// Resolve `\"`, `\\`, `\/`, `\b`, `\f`, `\n`, `\r`, `\t`, `\uXXXX`. Assumes
/// the lexer already rejected anything else, same as apollo-parser's version.
fn unescape_string(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut iter = input.chars();
    while let Some(c) = iter.next() {
        match c {
            '\\' => {
                let Some(c2) = iter.next() else {
                    output.push(c);
                    break;
                };
                let mut unicode = || {
                    let value = iter.by_ref().take(4).fold(0u32, |acc, c| {
                        let digit = c.to_digit(16).unwrap_or(0);
                        (acc << 4) + digit
                    });
                    char::from_u32(value).unwrap_or('\u{fffd}')
                };
                match c2 {
                    '"' | '\\' | '/' => output.push(c2),
                    'b' => output.push('\u{0008}'),
                    'f' => output.push('\u{000c}'),
                    'n' => output.push('\n'),
                    'r' => output.push('\r'),
                    't' => output.push('\t'),
                    'u' => output.push(unicode()),
                    _ => (),
                }
            }
            _ => output.push(c),
        }
    }
    output
}

struct Lines<'a> {
    input: &'a str,
    finished: bool,
}

impl<'a> Lines<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, finished: false }
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let Some(index) = memchr::memchr2(b'\r', b'\n', self.input.as_bytes()) else {
            self.finished = true;
            return Some(self.input);
        };
        let line = &self.input[..index];
        let rest = match self.input.get(index..=index + 1) {
            Some("\r\n") => &self.input[index + 2..],
            _ => &self.input[index + 1..],
        };
        self.input = rest;
        Some(line)
    }
}

fn split_lines(input: &str) -> impl Iterator<Item = &str> {
    Lines::new(input)
}

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t')
}

fn is_whitespace_line(line: &str) -> bool {
    line.chars().all(is_whitespace)
}

fn count_indent(line: &str) -> usize {
    line.chars().take_while(|&c| is_whitespace(c)).count()
}

/// Dedent and unescape a triple-quoted string's interior, the same
/// `BlockStringValue(rawValue)` steps as apollo-parser's block strings:
/// indentation is measured from every line but the first, lines made of
/// only whitespace are dropped off the front and back, and the remaining
/// lines are rejoined with `\n`.
fn unescape_block_string(raw_value: &str) -> String {
    let common_indent = split_lines(raw_value)
        .skip(1)
        .filter_map(|line| {
            let length = line.len();
            let indent = count_indent(line);
            (indent < length).then_some(indent)
        })
        .min()
        .unwrap_or(0);

    let mut lines = split_lines(raw_value)
        .enumerate()
        .map(|(index, line)| {
            if index == 0 {
                line
            } else {
                &line[common_indent.min(line.len())..]
            }
        })
        .skip_while(|line| is_whitespace_line(line));

    let mut formatted = String::with_capacity(raw_value.len());
    if let Some(line) = lines.next() {
        formatted.push_str(&unescape_string(line));
    }
    let mut final_char_index = formatted.len();
    for line in lines {
        formatted.push('\n');
        formatted.push_str(&unescape_string(line));
        if !is_whitespace_line(line) {
            final_char_index = formatted.len();
        }
    }
    formatted.truncate(final_char_index);
    formatted
}

impl StringLiteralExpression {
    pub fn value(&self) -> Option<StringLiteralValue> {
        self.string_literal_token().map(|t| StringLiteralValue::new(t.text()))
    }
}

/// Lazily-decoded contents of a `NUMERIC_LITERAL` token. The lexer accepts
/// anything alphanumeric plus `.`/`_` as one token (cursor.rs), so unlike
/// apollo-parser's pre-split `IntValue`/`FloatValue`, format sniffing (hex,
/// octal, binary, decimal, exponent, underscore separators) happens here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NumericLiteralValue {
    raw: String,
}

impl NumericLiteralValue {
    pub(crate) fn new(raw: &str) -> Self {
        Self { raw: raw.to_string() }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    fn cleaned(&self) -> String {
        self.raw.chars().filter(|&c| c != '_').collect()
    }

    /// True for `0x`/`0o`/`0b`-prefixed literals, which only have an integer
    /// form — `as_f64` still works for these by going through `as_i64`.
    pub fn is_radix_prefixed(&self) -> bool {
        let s = &self.raw;
        s.len() > 1 && s.starts_with('0') && matches!(s.as_bytes()[1], b'x' | b'X' | b'o' | b'O' | b'b' | b'B')
    }

    /// Parses as an integer, honoring a `0x`/`0o`/`0b` radix prefix.
    pub fn as_i64(&self) -> Option<i64> {
        let cleaned = self.cleaned();
        if let Some(rest) = cleaned.strip_prefix("0x").or_else(|| cleaned.strip_prefix("0X")) {
            i64::from_str_radix(rest, 16).ok()
        } else if let Some(rest) = cleaned.strip_prefix("0o").or_else(|| cleaned.strip_prefix("0O")) {
            i64::from_str_radix(rest, 8).ok()
        } else if let Some(rest) = cleaned.strip_prefix("0b").or_else(|| cleaned.strip_prefix("0B")) {
            i64::from_str_radix(rest, 2).ok()
        } else {
            cleaned.parse().ok()
        }
    }

    /// Parses as a decimal float. Radix-prefixed literals go through
    /// `as_i64` first since Rust's float parser doesn't understand them.
    pub fn as_f64(&self) -> Option<f64> {
        if self.is_radix_prefixed() {
            self.as_i64().map(|v| v as f64)
        } else {
            self.cleaned().parse().ok()
        }
    }
}

impl NumericLiteralExpression {
    pub fn value(&self) -> Option<NumericLiteralValue> {
        self.numeric_literal_token().map(|t| NumericLiteralValue::new(t.text()))
    }
}

impl BooleanLiteralExpression {
    pub fn value(&self) -> Option<bool> {
        if self.true_token().is_some() {
            Some(true)
        } else if self.false_token().is_some() {
            Some(false)
        } else {
            None
        }
    }
}

/// Splits a node's `Expr`-castable children into those before and those
/// after its first `EQ` token — the shape `TemplateParameter`, `ModelProperty`
/// and `FunctionParameter` all share (an optional bound/type expression,
/// then `=`, then an optional default expression), grounded directly in how
/// `template.rs`/`model.rs`/`decorator.rs` emit those children in source
/// order with the `=` token left unwrapped between them.
fn expr_children_split_on_eq(syntax: &SyntaxNode) -> (Option<Expr>, Option<Expr>) {
    let eq_start = syntax
        .children_with_tokens()
        .filter_map(|it| it.into_token())
        .find(|t| t.kind() == SyntaxKind::EQ)
        .map(|t| t.text_range().start());

    let mut before = None;
    let mut after = None;
    for child in syntax.children() {
        let Some(expr) = Expr::cast(child) else { continue };
        match eq_start {
            Some(pos) if expr.syntax().text_range().start() >= pos => {
                if after.is_none() {
                    after = Some(expr);
                }
            }
            _ => {
                if before.is_none() {
                    before = Some(expr);
                }
            }
        }
    }
    (before, after)
}

impl TemplateParameter {
    /// The `extends` bound, if any — the `Expr` child before `=` (or the
    /// only one, if there's no default).
    pub fn bound(&self) -> Option<Expr> {
        expr_children_split_on_eq(self.syntax()).0
    }

    /// The default type, if any — the `Expr` child after `=`.
    pub fn default(&self) -> Option<Expr> {
        expr_children_split_on_eq(self.syntax()).1
    }
}

impl ModelProperty {
    pub fn type_expr(&self) -> Option<Expr> {
        expr_children_split_on_eq(self.syntax()).0
    }

    pub fn default_value(&self) -> Option<Expr> {
        expr_children_split_on_eq(self.syntax()).1
    }
}

impl FunctionParameter {
    pub fn type_expr(&self) -> Option<Expr> {
        expr_children_split_on_eq(self.syntax()).0
    }

    pub fn default_value(&self) -> Option<Expr> {
        expr_children_split_on_eq(self.syntax()).1
    }
}

impl ProjectionIfExpression {
    pub fn then_block(&self) -> Option<ProjectionBlockExpression> {
        self.blocks().next()
    }

    pub fn else_block(&self) -> Option<ProjectionBlockExpression> {
        self.blocks().nth(1)
    }
}

impl Projection {
    pub fn is_to(&self) -> bool {
        self.to_token().is_some()
    }
}

impl NamespaceStatement {
    /// True when this segment was terminated by `;` rather than a `{...}`
    /// body. A braced body's `{`/`}` are direct token children of this same node
    /// (see `grammar::statement::parse_block_body`), so their absence is
    /// enough to tell the two forms apart.
    pub fn is_blockless(&self) -> bool {
        !self
            .syntax
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .any(|t| t.kind() == SyntaxKind::L_BRACE)
    }
}

/// The `IDENTIFIER_EXPRESSION`/literal leaves a `ProjectionExpr` and a type-
/// level `Expr` share don't round-trip through `Expr::cast`/`ProjectionExpr::
/// cast` interchangeably by construction — this just makes the common case
/// (reading a projection selector's plain identifier) convenient.
impl crate::cst::ProjectionIdentifierSelector {
    pub fn name(&self) -> Option<crate::cst::Name> {
        match self.reference()? {
            Expr::Identifier(it) => it.name(),
            _ => None,
        }
    }
}

/// Walks preceding siblings to find the doc/directive/decorator/modifier
/// prelude that `common::parse_annotations_prelude` and
/// `decorator::parse_modifier_prefixed_declaration` attach ahead of a
/// statement, in that fixed order, rather than nesting it inside the
/// statement node.
pub trait Annotated: AstNode {
    fn doc_list(&self) -> Option<crate::cst::DocList> {
        preceding_sibling_of_kind(self.syntax(), SyntaxKind::DOC_LIST).and_then(crate::cst::DocList::cast)
    }

    fn directive_list(&self) -> Option<crate::cst::DirectiveList> {
        preceding_sibling_of_kind(self.syntax(), SyntaxKind::DIRECTIVE_LIST).and_then(crate::cst::DirectiveList::cast)
    }

    fn decorator_list(&self) -> Option<crate::cst::DecoratorList> {
        preceding_sibling_of_kind(self.syntax(), SyntaxKind::DECORATOR_LIST).and_then(crate::cst::DecoratorList::cast)
    }

    fn modifier_list(&self) -> Option<crate::cst::ModifierList> {
        preceding_sibling_of_kind(self.syntax(), SyntaxKind::MODIFIER_LIST).and_then(crate::cst::ModifierList::cast)
    }
}

/// Scans backward over contiguous `{DOC,DIRECTIVE,DECORATOR,MODIFIER}_LIST`
/// siblings (the only kinds the prelude ever emits ahead of a statement) for
/// one of `kind`, stopping as soon as a sibling outside that set is seen.
fn preceding_sibling_of_kind(syntax: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxNode> {
    let mut current = syntax.prev_sibling();
    while let Some(node) = current {
        if node.kind() == kind {
            return Some(node);
        }
        if !matches!(
            node.kind(),
            SyntaxKind::DOC_LIST | SyntaxKind::DIRECTIVE_LIST | SyntaxKind::DECORATOR_LIST | SyntaxKind::MODIFIER_LIST
        ) {
            break;
        }
        current = node.prev_sibling();
    }
    None
}

impl Annotated for crate::cst::NamespaceStatement {}
impl Annotated for crate::cst::ModelStatement {}
impl Annotated for crate::cst::ScalarStatement {}
impl Annotated for crate::cst::InterfaceStatement {}
impl Annotated for crate::cst::UnionStatement {}
impl Annotated for crate::cst::OperationStatement {}
impl Annotated for crate::cst::EnumStatement {}
impl Annotated for crate::cst::AliasStatement {}
impl Annotated for crate::cst::UsingStatement {}
impl Annotated for crate::cst::ImportStatement {}
impl Annotated for crate::cst::DecoratorDeclarationStatement {}
impl Annotated for crate::cst::FunctionDeclarationStatement {}
impl Annotated for crate::cst::AugmentDecoratorStatement {}
impl Annotated for crate::cst::ProjectionStatement {}
impl Annotated for crate::cst::ModelProperty {}
impl Annotated for crate::cst::ModelSpreadProperty {}
impl Annotated for crate::cst::EnumMember {}
impl Annotated for crate::cst::EnumSpreadMember {}
impl Annotated for crate::cst::FunctionParameter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unescape_handles_basic_escapes() {
        assert_eq!(unescape_string(r#"a\nb\tc"#), "a\nb\tc");
        assert_eq!(unescape_string(r#"A"#), "A");
    }

    #[test]
    fn block_string_dedents_and_trims() {
        let raw = "\n    hello\n    world\n    ";
        assert_eq!(unescape_block_string(raw), "hello\nworld");
    }

    #[test]
    fn numeric_literal_value_reads_radixes() {
        assert_eq!(NumericLiteralValue::new("0x1F").as_i64(), Some(31));
        assert_eq!(NumericLiteralValue::new("0b1010").as_i64(), Some(10));
        assert_eq!(NumericLiteralValue::new("0o17").as_i64(), Some(15));
        assert_eq!(NumericLiteralValue::new("1_000.5").as_f64(), Some(1000.5));
    }
}
