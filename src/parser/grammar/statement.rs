//! Top-level and block-level statement dispatch. Every statement, wherever
//! it occurs, goes through the same loop: parse the doc/directive/decorator
//! prelude, look at what's left, and route to one production or another.
//! Ordering invariants (at most one blockless namespace, imports first,
//! nothing of that sort inside a block) are tracked locally as the loop
//! runs rather than as a second pass over the finished tree.

use crate::diagnostics::DiagnosticCode;
use crate::lexer::TokenKind;
use crate::parser::grammar::{alias, common, decorator, import, interface, model, namespace, operation, projection, scalar, union_, using};
use crate::parser::Parser;
use crate::syntax_kind::SyntaxKind;
use crate::syntax_kind::T;

/// Statements that do not themselves accept a decorator prelude. Applying a
/// decorator ahead of one of these is still parsed (the tree stays
/// complete) but reported as misplaced.
fn decorators_invalid_here(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::AUGMENT_DECORATOR_STATEMENT
            | SyntaxKind::IMPORT_STATEMENT
            | SyntaxKind::ALIAS_STATEMENT
            | SyntaxKind::USING_STATEMENT
            | SyntaxKind::PROJECTION_STATEMENT
            | SyntaxKind::EMPTY_STATEMENT
    )
}

/// Tracks the ordering invariants across one statement list (spec §4.3).
/// A fresh one is created per file and per block body — blockless-namespace
/// and import placement are judged relative to the statements around them,
/// not globally across nested blocks.
#[derive(Default)]
struct OrderState {
    seen_declaration: bool,
    seen_using: bool,
    seen_blockless_namespace: bool,
}

/// Drives the script root: statements until EOF.
pub(crate) fn parse_script_body(p: &mut Parser) {
    let mut state = OrderState::default();
    while !p.at_eof() {
        parse_one_statement(p, true, &mut state);
    }
}

/// `{ ... }` block body used by namespace declarations with a brace form.
/// Import and blockless-namespace are never valid inside a block, so they
/// are still parsed (for a complete tree) but always flagged.
pub(crate) fn parse_block_body(p: &mut Parser) {
    p.expect(TokenKind::LBrace, T!['{'], "{");
    let mut state = OrderState::default();
    while !p.at(TokenKind::RBrace) && !p.at_eof() {
        let before = p.stream_position();
        parse_one_statement(p, false, &mut state);
        if p.stream_position() == before {
            break;
        }
    }
    p.expect(TokenKind::RBrace, T!['}'], "}");
}

/// The prelude is emitted as preceding siblings of the statement node (the
/// same convention `common::parse_annotations_prelude`'s other call sites
/// use for list items), not wrapped inside it — each branch of `dispatch`
/// opens its own statement node after the prelude has already been written.
fn parse_one_statement(p: &mut Parser, top_level: bool, state: &mut OrderState) {
    let prelude = common::parse_annotations_prelude(p, None);

    let (kind, role) = dispatch(p, top_level);

    if prelude.had_decorators && decorators_invalid_here(kind) {
        p.err(DiagnosticCode::InvalidDecoratorLocation, false);
    }

    apply_ordering_invariants(p, role, top_level, state);
}

/// How a parsed statement participates in the file-ordering invariants —
/// distinct from its `SyntaxKind`, since a braced `namespace A { ... }` is a
/// plain declaration for ordering purposes while a blockless `namespace A;`
/// is not (spec §4.3).
#[derive(Clone, Copy, PartialEq, Eq)]
enum OrderRole {
    BlocklessNamespace,
    Import,
    Using,
    Inert,
    Declaration,
}

/// Parses exactly one statement body (the caller has already consumed its
/// prelude) and returns the `SyntaxKind` it produced plus its ordering role,
/// so the caller can wrap the node and apply the ordering checks uniformly.
fn dispatch(p: &mut Parser, top_level: bool) -> (SyntaxKind, OrderRole) {
    if p.at(TokenKind::AtAt) {
        decorator::parse_augment_decorator_statement(p);
        return (SyntaxKind::AUGMENT_DECORATOR_STATEMENT, OrderRole::Declaration);
    }
    if p.at(TokenKind::Semicolon) {
        let _guard = p.start_node(SyntaxKind::EMPTY_STATEMENT);
        p.bump(T![;]);
        return (SyntaxKind::EMPTY_STATEMENT, OrderRole::Inert);
    }
    if p.at_keyword("import") {
        import::parse_import_statement(p);
        return (SyntaxKind::IMPORT_STATEMENT, OrderRole::Import);
    }
    if p.at_keyword("model") {
        model::parse_model_statement(p);
        return (SyntaxKind::MODEL_STATEMENT, OrderRole::Declaration);
    }
    if p.at_keyword("scalar") {
        scalar::parse_scalar_statement(p);
        return (SyntaxKind::SCALAR_STATEMENT, OrderRole::Declaration);
    }
    if p.at_keyword("namespace") {
        let blockless = namespace::parse_namespace_statement(p);
        let role = if blockless { OrderRole::BlocklessNamespace } else { OrderRole::Declaration };
        return (SyntaxKind::NAMESPACE_STATEMENT, role);
    }
    if p.at_keyword("interface") {
        interface::parse_interface_statement(p);
        return (SyntaxKind::INTERFACE_STATEMENT, OrderRole::Declaration);
    }
    if p.at_keyword("union") {
        union_::parse_union_statement(p);
        return (SyntaxKind::UNION_STATEMENT, OrderRole::Declaration);
    }
    if p.at_keyword("op") {
        operation::parse_operation_statement(p);
        return (SyntaxKind::OPERATION_STATEMENT, OrderRole::Declaration);
    }
    if p.at_keyword("enum") {
        super::enum_::parse_enum_statement(p);
        return (SyntaxKind::ENUM_STATEMENT, OrderRole::Declaration);
    }
    if p.at_keyword("alias") {
        alias::parse_alias_statement(p);
        return (SyntaxKind::ALIAS_STATEMENT, OrderRole::Declaration);
    }
    if p.at_keyword("using") {
        using::parse_using_statement(p);
        return (SyntaxKind::USING_STATEMENT, OrderRole::Using);
    }
    if p.at_keyword("projection") {
        projection::parse_projection_statement(p);
        return (SyntaxKind::PROJECTION_STATEMENT, OrderRole::Declaration);
    }
    if p.at_keyword("extern") || p.at_keyword("fn") || p.at_keyword("dec") {
        let kind = decorator::parse_modifier_prefixed_declaration(p);
        return (kind, OrderRole::Declaration);
    }

    (parse_invalid_statement(p), OrderRole::Inert)
}

/// Consumes tokens until a statement keyword, `@`/`@@`, `;`, or EOF, and
/// reports the whole span with one diagnostic (spec §4.3 "otherwise" row).
fn parse_invalid_statement(p: &mut Parser) -> SyntaxKind {
    let _guard = p.start_node(SyntaxKind::INVALID_STATEMENT);
    let found = p.describe_current();
    p.err(
        DiagnosticCode::TokenExpected {
            expected: "statement".to_string(),
            found,
        },
        false,
    );
    while !p.at_statement_recovery_point() {
        let before = p.stream_position();
        p.bump(SyntaxKind::ERROR_TOKEN);
        if p.stream_position() == before {
            break;
        }
    }
    SyntaxKind::INVALID_STATEMENT
}

fn apply_ordering_invariants(p: &mut Parser, role: OrderRole, top_level: bool, state: &mut OrderState) {
    match role {
        OrderRole::Import => {
            if !top_level {
                p.err(DiagnosticCode::ImportFirstTopLevel, false);
            } else if state.seen_declaration || state.seen_using || state.seen_blockless_namespace {
                p.err(DiagnosticCode::ImportFirst, false);
            }
        }
        OrderRole::BlocklessNamespace => {
            if !top_level {
                p.err(DiagnosticCode::BlocklessNamespaceFirstTopLevel, false);
            } else if state.seen_blockless_namespace {
                p.err(DiagnosticCode::MultipleBlocklessNamespace, false);
            } else if state.seen_declaration {
                p.err(DiagnosticCode::BlocklessNamespaceFirst, false);
            }
            state.seen_blockless_namespace = true;
        }
        OrderRole::Using => {
            state.seen_using = true;
        }
        OrderRole::Inert => {}
        OrderRole::Declaration => {
            state.seen_declaration = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(src: &str) -> (crate::parser::SyntaxNode, Vec<crate::diagnostics::Diagnostic>) {
        let mut p = Parser::new(src);
        let _guard = p.start_node(SyntaxKind::SCRIPT);
        parse_script_body(&mut p);
        drop(_guard);
        let out = p.finish();
        (out.green, out.diagnostics)
    }

    #[test]
    fn sequence_of_declarations() {
        let (tree, diags) = parse("import \"./a.tsp\"; model M { x: string } using A.B;");
        assert!(diags.is_empty(), "{diags:?}");
        assert!(format!("{tree:#?}").contains("MODEL_STATEMENT"));
    }

    #[test]
    fn import_after_declaration_is_flagged() {
        let (_, diags) = parse("model M { x: string } import \"./a.tsp\";");
        assert_eq!(diags.len(), 1);
        assert!(matches!(diags[0].code, DiagnosticCode::ImportFirst));
    }

    #[test]
    fn blockless_namespace_after_declaration_is_flagged() {
        let (_, diags) = parse("model M {} namespace A;");
        assert_eq!(diags.len(), 1);
        assert!(matches!(diags[0].code, DiagnosticCode::BlocklessNamespaceFirst));
    }

    #[test]
    fn second_blockless_namespace_is_flagged() {
        let (_, diags) = parse("namespace A; namespace B;");
        assert_eq!(diags.len(), 1);
        assert!(matches!(diags[0].code, DiagnosticCode::MultipleBlocklessNamespace));
    }

    #[test]
    fn empty_statement_parses_clean() {
        let (_, diags) = parse(";;;");
        assert!(diags.is_empty(), "{diags:?}");
    }

    #[test]
    fn garbage_token_recovers_as_invalid_statement() {
        let (tree, diags) = parse("%%% model M {}");
        assert_eq!(diags.len(), 1);
        assert!(format!("{tree:#?}").contains("INVALID_STATEMENT"));
        assert!(format!("{tree:#?}").contains("MODEL_STATEMENT"));
    }

    #[test]
    fn decorator_on_using_is_flagged() {
        let (_, diags) = parse("@foo using A.B;");
        assert_eq!(diags.len(), 1);
        assert!(matches!(diags[0].code, DiagnosticCode::InvalidDecoratorLocation));
    }
}
