//! Shared prelude parsing: doc comments, directives, decorators (spec §4.3:
//! "reads in order: doc-comment list, directive list, decorator list").
//! Used by both the top-level/block statement driver and every list item in
//! component D, so a model property or enum member gets the same doc and
//! decorator handling as a top-level declaration.

use crate::diagnostics::DiagnosticCode;
use crate::lexer::{TokenFlags, TokenKind};
use crate::parser::grammar::{doc, expr};
use crate::parser::Parser;
use crate::syntax_kind::SyntaxKind;

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct AnnotationsPrelude {
    pub had_docs: bool,
    pub had_directives: bool,
    pub had_decorators: bool,
}

impl AnnotationsPrelude {
    pub(crate) fn any(&self) -> bool {
        self.had_docs || self.had_directives || self.had_decorators
    }
}

pub(crate) fn at_doc_comment(p: &mut Parser) -> bool {
    p.at(TokenKind::BlockComment) && p.current_flags().contains(TokenFlags::DOC_COMMENT)
}

/// Non-consuming peek used by the list driver (spec §4.5 step 1/3) to tell
/// whether an iteration begins with an annotation prelude.
pub(crate) fn at_annotation_prelude(p: &mut Parser) -> bool {
    p.at(TokenKind::At) || p.at(TokenKind::Hash) || at_doc_comment(p)
}

/// Parse the doc/directive/decorator prelude. `invalid_target`, when set, is
/// the description used in `invalid-decorator-location` /
/// `invalid-directive-location` diagnostics — the prelude is still parsed
/// (so the tree stays complete) but flagged as misplaced.
pub(crate) fn parse_annotations_prelude(p: &mut Parser, invalid_target: Option<&str>) -> AnnotationsPrelude {
    let mut prelude = AnnotationsPrelude::default();

    if at_doc_comment(p) {
        prelude.had_docs = true;
        let _guard = p.start_node(SyntaxKind::DOC_LIST);
        while at_doc_comment(p) {
            doc::parse_doc(p);
        }
    }

    if p.at(TokenKind::Hash) {
        prelude.had_directives = true;
        let _guard = p.start_node(SyntaxKind::DIRECTIVE_LIST);
        while p.at(TokenKind::Hash) {
            parse_directive(p, invalid_target);
        }
    }

    if p.at(TokenKind::At) {
        prelude.had_decorators = true;
        let _guard = p.start_node(SyntaxKind::DECORATOR_LIST);
        while p.at(TokenKind::At) {
            parse_decorator(p, invalid_target);
        }
    }

    prelude
}

/// `#name args… ` terminated by newline (spec GLOSSARY "Directive").
fn parse_directive(p: &mut Parser, invalid_target: Option<&str>) {
    let _guard = p.start_node(SyntaxKind::DIRECTIVE_EXPRESSION);
    p.bump(SyntaxKind::HASH);

    let name = if p.at(TokenKind::Ident) {
        let text = p.current_text().to_string();
        let _name_guard = p.start_node(SyntaxKind::NAME);
        p.bump(SyntaxKind::IDENT);
        Some(text)
    } else {
        p.missing_name();
        None
    };

    p.with_newline_significant(|p| {
        while !p.at(TokenKind::Newline) && !p.at(TokenKind::Semicolon) && !p.at_eof() {
            let before = p.stream_position();
            expr::parse_primary_expr(p);
            if p.stream_position() == before {
                break;
            }
        }
    });

    if invalid_target.is_some() {
        p.err(DiagnosticCode::InvalidDirectiveLocation, false);
    }
    if let Some(name) = name {
        if name != "suppress" {
            p.err(DiagnosticCode::UnknownDirective { name }, false);
        }
    }
}

/// `A.B.C` as a flat `DottedName` node (used by `using`; namespace
/// declarations instead decompose the same syntax into a nested chain of
/// `NamespaceStatement`s, see `grammar::namespace`).
pub(crate) fn parse_dotted_name(p: &mut Parser) {
    use crate::syntax_kind::T;
    let _guard = p.start_node(SyntaxKind::DOTTED_NAME);
    parse_name_segment(p);
    while p.at(TokenKind::Dot) {
        p.bump(T![.]);
        parse_name_segment(p);
    }
}

fn parse_name_segment(p: &mut Parser) {
    if p.at(TokenKind::Ident) {
        let _name = p.start_node(SyntaxKind::NAME);
        p.bump(SyntaxKind::IDENT);
    } else {
        p.missing_name();
    }
}

/// The keyword-expression names (spec §4.4's `true`/`false`/`void`/`never`/
/// `unknown` primary expressions) a declaration may never be named after:
/// `model void {}` would shadow a name every type-expression slot already
/// resolves to a builtin meaning, not a reference.
fn is_reserved_identifier(text: &str) -> bool {
    matches!(text, "true" | "false" | "void" | "never" | "unknown")
}

/// Parses a declaration's `NAME` the same way every statement form does
/// (`model`/`namespace`/`interface`/`union`/`op`/`enum`/`alias`/`scalar`):
/// an identifier, or a synthesized missing name if none is present. Flags
/// (without rejecting — the tree stays complete) a reserved keyword-
/// expression name used in that slot.
pub(crate) fn parse_declaration_name(p: &mut Parser) {
    if p.at(TokenKind::Ident) {
        let text = p.current_text().to_string();
        let _name = p.start_node(SyntaxKind::NAME);
        p.bump(SyntaxKind::IDENT);
        if is_reserved_identifier(&text) {
            p.err(DiagnosticCode::ReservedIdentifier { name: text }, false);
        }
    } else {
        p.missing_name();
    }
}

/// `@name(args…)` — a decorator expression, one entry of a `DecoratorList`.
fn parse_decorator(p: &mut Parser, invalid_target: Option<&str>) {
    let _guard = p.start_node(SyntaxKind::DECORATOR_EXPRESSION);
    p.bump(SyntaxKind::AT);
    expr::parse_reference_expr(p);
    if p.at(TokenKind::LParen) {
        expr::parse_call_arguments(p);
    }
    if invalid_target.is_some() {
        p.err(DiagnosticCode::InvalidDecoratorLocation, false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::grammar::model;

    #[test]
    fn reserved_keyword_expression_name_is_flagged() {
        let mut p = Parser::new("model void {}");
        model::parse_model_statement(&mut p);
        let out = p.finish();
        assert_eq!(out.diagnostics.len(), 1);
        assert!(matches!(
            out.diagnostics[0].code,
            DiagnosticCode::ReservedIdentifier { ref name } if name == "void"
        ));
        // The tree still carries the name rather than dropping it.
        assert!(format!("{:#?}", out.green).contains("IDENT@"));
    }

    #[test]
    fn ordinary_name_is_not_flagged() {
        let mut p = Parser::new("model Widget {}");
        model::parse_model_statement(&mut p);
        let out = p.finish();
        assert!(out.diagnostics.is_empty(), "{:?}", out.diagnostics);
    }
}
