//! `alias` declarations (spec §4.3): `alias Id<T> = expr;`.

use crate::lexer::TokenKind;
use crate::parser::grammar::{common, expr, template};
use crate::parser::Parser;
use crate::syntax_kind::SyntaxKind;
use crate::syntax_kind::T;

pub(crate) fn parse_alias_statement(p: &mut Parser) {
    let _guard = p.start_node(SyntaxKind::ALIAS_STATEMENT);
    p.bump(T![alias]);

    common::parse_declaration_name(p);

    template::parse_template_parameters_opt(p);
    p.expect(TokenKind::Eq, T![=], "=");
    expr::parse_expr(p);
    p.expect(TokenKind::Semicolon, T![;], ";");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_alias() {
        let mut p = Parser::new("alias Name = string;");
        parse_alias_statement(&mut p);
        assert!(p.finish().diagnostics.is_empty());
    }
}
