//! `union` declarations (spec §4.3): `union Id<T> { variants }`.

use crate::lexer::TokenKind;
use crate::parser::grammar::{common, expr, list_kinds, template};
use crate::parser::Parser;
use crate::syntax_kind::SyntaxKind;
use crate::syntax_kind::T;

pub(crate) fn parse_union_statement(p: &mut Parser) {
    let _guard = p.start_node(SyntaxKind::UNION_STATEMENT);
    p.bump(T![union]);

    common::parse_declaration_name(p);

    template::parse_template_parameters_opt(p);

    let _list = p.start_node(SyntaxKind::UNION_VARIANT_LIST);
    p.parse_list(
        &list_kinds::UNION_VARIANTS,
        common::at_annotation_prelude,
        parse_union_variant,
    );
}

/// `name: Type` (a discriminated variant) or a bare `Type` (anonymous).
fn parse_union_variant(p: &mut Parser) {
    let _guard = p.start_node(SyntaxKind::UNION_VARIANT);
    common::parse_annotations_prelude(p, None);

    if p.at(TokenKind::Ident) && !p.at_any_keyword() && p.peek_second_significant_kind() == TokenKind::Colon {
        let _name = p.start_node(SyntaxKind::NAME);
        p.bump(SyntaxKind::IDENT);
        p.expect(TokenKind::Colon, T![:], ":");
    }
    expr::parse_expr(p);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(src: &str) -> (crate::parser::SyntaxNode, Vec<crate::diagnostics::Diagnostic>) {
        let mut p = Parser::new(src);
        parse_union_statement(&mut p);
        let out = p.finish();
        (out.green, out.diagnostics)
    }

    #[test]
    fn anonymous_variants() {
        let (tree, diags) = parse("union Pet { Cat, Dog }");
        assert!(diags.is_empty(), "{diags:?}");
        assert_eq!(format!("{tree:#?}").matches("UNION_VARIANT\n").count(), 2);
    }

    #[test]
    fn discriminated_variants() {
        let (tree, diags) = parse("union Shape { circle: Circle; square: Square }");
        assert!(diags.is_empty(), "{diags:?}");
        assert!(format!("{tree:#?}").contains("NAME"));
    }
}
