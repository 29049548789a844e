//! `scalar` declarations (spec §4.3): `scalar Id<T> extends Base;` — no body.

use crate::lexer::TokenKind;
use crate::parser::grammar::{common, expr, template};
use crate::parser::Parser;
use crate::syntax_kind::SyntaxKind;
use crate::syntax_kind::T;

pub(crate) fn parse_scalar_statement(p: &mut Parser) {
    let _guard = p.start_node(SyntaxKind::SCALAR_STATEMENT);
    p.bump(T![scalar]);

    common::parse_declaration_name(p);

    template::parse_template_parameters_opt(p);

    if p.at_keyword("extends") {
        p.bump(T![extends]);
        expr::parse_reference_expr(p);
    }

    p.expect(TokenKind::Semicolon, T![;], ";");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(src: &str) -> Vec<crate::diagnostics::Diagnostic> {
        let mut p = Parser::new(src);
        parse_scalar_statement(&mut p);
        p.finish().diagnostics
    }

    #[test]
    fn scalar_with_extends() {
        assert!(parse("scalar UUID extends string;").is_empty());
    }

    #[test]
    fn scalar_without_extends() {
        assert!(parse("scalar Bytes;").is_empty());
    }
}
