//! The crate's public surface: a builder-style [`Parser`] plus the
//! [`SyntaxTree`] it produces, mirroring the shape of `apollo-parser`'s
//! `Parser`/`SyntaxTree` pair (`parser/mod.rs` and `parser/syntax_tree.rs`)
//! but built over this grammar's `Script` root and diagnostic side tables
//! instead of a GraphQL `Document`.
//!
//! The internal, crate-private `parser::Parser` (module-private grammar
//! cursor) is reused here rather than re-implemented: this module is a thin
//! public shell around it, exposing the two entry points
//! (`parse`/`parseStandaloneTypeReference`) and the builder shape
//! (`Parser::new(text).with_options(options).with_recursion_limit(n)`).

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::rc::Rc;

use crate::cst::{AstNode, Script, TypeReference};
use crate::diagnostics::Diagnostic;
use crate::parser::grammar::{expr, statement};
use crate::parser::{ParseOptions, ParseOutput, Parser as InternalParser, SyntaxElement, SyntaxNode};
use crate::source::{TextRange, TextSize};
use crate::syntax_kind::SyntaxKind;

/// Parse TSP source into a typed, error-recovering CST.
///
/// ## Example
///
/// ```
/// use tsp_parser::Parser;
///
/// let source = "model Widget { name: string, weight?: int32 }";
/// let tree = Parser::new(source).parse();
/// assert!(tree.diagnostics().is_empty());
/// assert_eq!(tree.script().statements().count(), 1);
/// ```
#[derive(Debug)]
pub struct Parser<'input> {
    source: &'input str,
    options: ParseOptions,
    recursion_limit: Option<usize>,
}

impl<'input> Parser<'input> {
    /// Create a new parser over `input`. Doc comments are parsed by default;
    /// comment trivia collection is opt-in.
    pub fn new(input: &'input str) -> Self {
        Self {
            source: input,
            options: ParseOptions::default(),
            recursion_limit: None,
        }
    }

    /// Override the default [`ParseOptions`].
    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    /// Override the default recursion limit used to bound adversarially
    /// nested input.
    pub fn with_recursion_limit(mut self, limit: usize) -> Self {
        self.recursion_limit = Some(limit);
        self
    }

    fn build_internal(&self) -> InternalParser<'input> {
        let mut p = InternalParser::new(self.source).with_options(self.options);
        if let Some(limit) = self.recursion_limit {
            p = p.with_recursion_limit(limit);
        }
        p
    }

    /// Parse a whole script: `parse(code, options) -> ScriptNode`.
    pub fn parse(self) -> SyntaxTree {
        let mut p = self.build_internal();
        let guard = p.start_node(SyntaxKind::SCRIPT);
        statement::parse_script_body(&mut p);
        guard.finish_node();
        SyntaxTree::from_output(p.finish())
    }

    /// Parse a single reference expression and nothing else:
    /// `parseStandaloneTypeReference(code) -> (TypeReferenceNode,
    /// Diagnostics[])`. Anything left before EOF is reported as an
    /// unexpected trailing token.
    pub fn parse_type_reference(self) -> (TypeReference, Vec<Diagnostic>) {
        let mut p = self.build_internal();
        expr::parse_standalone_type_reference(&mut p);
        if !p.at_eof() {
            let found = p.describe_current();
            p.err_at_current(
                crate::diagnostics::DiagnosticCode::TokenExpected {
                    expected: "end of input".to_string(),
                    found,
                },
                false,
            );
        }
        let out = p.finish();
        let reference = TypeReference::cast(out.green)
            .expect("parse_standalone_type_reference always produces a TYPE_REFERENCE root");
        (reference, out.diagnostics)
    }
}

/// Parse `source` with the default [`ParseOptions`]. Shorthand for
/// `Parser::new(source).parse()`.
pub fn parse(source: &str) -> SyntaxTree {
    Parser::new(source).parse()
}

/// Parse a single standalone reference expression, e.g. for resolving the
/// string value of an out-of-band reference.
pub fn parse_standalone_type_reference(source: &str) -> (TypeReference, Vec<Diagnostic>) {
    Parser::new(source).parse_type_reference()
}

/// The finished product of a parse: a typed [`Script`] root plus every side
/// table the tree layer needs (diagnostics, collected comments, the
/// printable bit, and the two side tables that stand in for mutable
/// per-node flags on an otherwise-immutable rowan tree — see DESIGN.md,
/// "Node flags on an immutable tree").
pub struct SyntaxTree {
    green: SyntaxNode,
    diagnostics: Vec<Diagnostic>,
    printable: bool,
    options: ParseOptions,
    comments: Vec<(TextRange, String)>,
    node_errors: Rc<HashSet<(TextSize, SyntaxKind)>>,
    synthetic_identifiers: Rc<HashMap<TextSize, u32>>,
    recursion_high: usize,
}

impl SyntaxTree {
    fn from_output(out: ParseOutput) -> Self {
        Self {
            green: out.green,
            diagnostics: out.diagnostics,
            printable: out.printable,
            options: out.options,
            comments: out.comments,
            node_errors: out.node_errors,
            synthetic_identifiers: out.synthetic_identifiers,
            recursion_high: out.recursion_high,
        }
    }

    /// The root `Script` node.
    pub fn script(&self) -> Script {
        Script::cast(self.green.clone()).expect("parse always produces a SCRIPT root")
    }

    /// The raw, untyped root node, for callers that want `SyntaxNode`-level
    /// access (e.g. `tree_utils` queries by position).
    pub fn syntax(&self) -> &SyntaxNode {
        &self.green
    }

    /// Diagnostics collected during parsing, in the order they were
    /// emitted, after same-position suppression.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Whether the tree is safe to feed to a pretty-printer: unset the
    /// moment any non-printable error was reported.
    pub fn printable(&self) -> bool {
        self.printable
    }

    /// The `ParseOptions` snapshot this tree was built with.
    pub fn options(&self) -> ParseOptions {
        self.options
    }

    /// Comment trivia collected while parsing; empty unless
    /// `ParseOptions::comments` was set.
    pub fn comments(&self) -> &[(TextRange, String)] {
        &self.comments
    }

    /// The high-water mark of recursion depth reached while parsing this
    /// tree, for diagnostics/telemetry about how close a parse came to the
    /// recursion limit.
    pub fn recursion_high(&self) -> usize {
        self.recursion_high
    }

    /// True if `node` (or any descendant) caused a diagnostic to be
    /// emitted. Delegates to [`crate::tree_utils::has_parse_error`].
    pub fn has_parse_error(&self, node: &SyntaxNode) -> bool {
        crate::tree_utils::has_parse_error(node, &self.node_errors)
    }

    /// The synthetic display value of a missing-identifier `NAME` node
    /// produced at `pos`, e.g. `"<missing identifier>3"`. This
    /// table — not the green token's own (empty) text — is where the
    /// unique counter value lives, since rowan's green tokens can't carry
    /// text that didn't come from the source buffer.
    pub fn synthetic_identifier_value(&self, pos: TextSize) -> Option<String> {
        self.synthetic_identifiers
            .get(&pos)
            .map(|n| format!("<missing identifier>{n}"))
    }
}

impl fmt::Debug for SyntaxTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn print(f: &mut fmt::Formatter<'_>, indent: usize, element: SyntaxElement) -> fmt::Result {
            let kind: SyntaxKind = element.kind();
            write!(f, "{:indent$}", "", indent = indent)?;
            match element {
                rowan::NodeOrToken::Node(node) => {
                    writeln!(f, "- {kind:?}@{:?}", node.text_range())?;
                    for child in node.children_with_tokens() {
                        print(f, indent + 2, child)?;
                    }
                    Ok(())
                }
                rowan::NodeOrToken::Token(token) => {
                    writeln!(f, "- {kind:?}@{:?} {:?}", token.text_range(), token.text())
                }
            }
        }
        print(f, 0, self.green.clone().into())?;
        for diagnostic in &self.diagnostics {
            writeln!(f, "- {diagnostic:?}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_model() {
        let tree = parse("model M { x: string; y?: int32 = 3 }");
        assert!(tree.diagnostics().is_empty(), "{:?}", tree.diagnostics());
        let script = tree.script();
        assert_eq!(script.statements().count(), 1);
    }

    #[test]
    fn standalone_type_reference_rejects_trailing_garbage() {
        let (reference, diagnostics) = parse_standalone_type_reference("Foo<Bar> @@@");
        assert_eq!(reference.syntax().kind(), SyntaxKind::TYPE_REFERENCE);
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn standalone_type_reference_accepts_bare_identifier() {
        let (reference, diagnostics) = parse_standalone_type_reference("Foo");
        assert!(diagnostics.is_empty(), "{diagnostics:?}");
        assert!(reference.arguments().is_none());
    }

    #[test]
    fn builder_overrides_apply() {
        let tree = Parser::new("model M {}")
            .with_options(ParseOptions {
                comments: true,
                docs: true,
            })
            .with_recursion_limit(50)
            .parse();
        assert!(tree.options().comments);
    }
}
