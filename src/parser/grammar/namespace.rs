//! `namespace` declarations: `namespace A.B.C;` decomposes into three
//! properly-nested `NamespaceStatement` nodes — `A` outermost, `C`
//! innermost — terminating at the leaf whose body is absent (a blockless
//! namespace) or present (a braced body). Decorators/directives/docs
//! preceding the whole statement are parsed as preceding siblings by the
//! statement driver before this runs, so they end up attached to `A`, the
//! first segment parsed, with no special-casing needed here.

use crate::lexer::TokenKind;
use crate::parser::grammar::{common, statement};
use crate::parser::Parser;
use crate::syntax_kind::SyntaxKind;
use crate::syntax_kind::T;

/// Returns `true` when the statement is blockless (terminated by `;` rather
/// than a `{...}` body) — the caller uses this to apply the
/// blockless-namespace ordering invariants, which don't apply to a namespace
/// that carries its own body.
pub(crate) fn parse_namespace_statement(p: &mut Parser) -> bool {
    let _guard = p.start_node(SyntaxKind::NAMESPACE_STATEMENT);
    p.bump(T![namespace]);
    common::parse_declaration_name(p);
    parse_namespace_rest(p)
}

/// Each additional `.segment` nests one more `NamespaceStatement` inside the
/// previous one, bottoming out at the body (`{...}` or `;`).
fn parse_namespace_rest(p: &mut Parser) -> bool {
    if p.at(TokenKind::Dot) {
        let _guard = p.start_node(SyntaxKind::NAMESPACE_STATEMENT);
        p.bump(T![.]);
        common::parse_declaration_name(p);
        parse_namespace_rest(p)
    } else if p.at(TokenKind::LBrace) {
        statement::parse_block_body(p);
        false
    } else {
        p.expect(TokenKind::Semicolon, T![;], ";");
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::Parser;

    #[test]
    fn blockless_dotted_namespace_nests() {
        let mut p = Parser::new("namespace A.B.C;");
        let blockless = super::parse_namespace_statement(&mut p);
        let out = p.finish();
        assert!(blockless);
        assert!(out.diagnostics.is_empty(), "{:?}", out.diagnostics);
        assert_eq!(
            format!("{:#?}", out.green).matches("NAMESPACE_STATEMENT").count(),
            3
        );
    }

    #[test]
    fn namespace_with_block_body() {
        let mut p = Parser::new("namespace A { model M {} }");
        let blockless = super::parse_namespace_statement(&mut p);
        let out = p.finish();
        assert!(!blockless);
        assert!(out.diagnostics.is_empty(), "{:?}", out.diagnostics);
        assert!(format!("{:#?}", out.green).contains("MODEL_STATEMENT"));
    }
}
