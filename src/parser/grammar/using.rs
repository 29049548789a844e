//! `using` statements (spec §4.3): `using A.B.C;`.

use crate::lexer::TokenKind;
use crate::parser::grammar::common;
use crate::parser::Parser;
use crate::syntax_kind::SyntaxKind;
use crate::syntax_kind::T;

pub(crate) fn parse_using_statement(p: &mut Parser) {
    let _guard = p.start_node(SyntaxKind::USING_STATEMENT);
    p.bump(T![using]);
    common::parse_dotted_name(p);
    p.expect(TokenKind::Semicolon, T![;], ";");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dotted_using() {
        let mut p = Parser::new("using A.B.C;");
        parse_using_statement(&mut p);
        assert!(p.finish().diagnostics.is_empty());
    }
}
