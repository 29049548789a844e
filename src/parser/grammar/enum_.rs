//! `enum` declarations (spec §4.3): `enum Id { member, member: literal }`.

use crate::diagnostics::DiagnosticCode;
use crate::lexer::TokenKind;
use crate::parser::grammar::{common, expr, list_kinds};
use crate::parser::Parser;
use crate::syntax_kind::SyntaxKind;
use crate::syntax_kind::T;

pub(crate) fn parse_enum_statement(p: &mut Parser) {
    let _guard = p.start_node(SyntaxKind::ENUM_STATEMENT);
    p.bump(T![enum]);

    common::parse_declaration_name(p);

    let _list = p.start_node(SyntaxKind::ENUM_MEMBER_LIST);
    p.parse_list(
        &list_kinds::ENUM_MEMBERS,
        common::at_annotation_prelude,
        parse_enum_member_item,
    );
}

fn parse_enum_member_item(p: &mut Parser) {
    common::parse_annotations_prelude(p, None);
    if p.at(TokenKind::Ellipsis) {
        let _guard = p.start_node(SyntaxKind::ENUM_SPREAD_MEMBER);
        p.bump(T![...]);
        expr::parse_reference_expr(p);
    } else {
        parse_enum_member(p);
    }
}

/// `name` or `name: literal`; the literal must be a string or a number
/// (spec §4.3: "literals must be string or numeric").
fn parse_enum_member(p: &mut Parser) {
    let _guard = p.start_node(SyntaxKind::ENUM_MEMBER);

    if p.at(TokenKind::Ident) {
        let _name = p.start_node(SyntaxKind::NAME);
        p.bump(SyntaxKind::IDENT);
    } else {
        p.missing_name();
    }

    if p.at(TokenKind::Colon) {
        p.bump(T![:]);
        match p.current_kind() {
            TokenKind::StringLiteral | TokenKind::NumericLiteral => expr::parse_expr(p),
            _ => {
                let found = p.describe_current();
                p.err(
                    DiagnosticCode::TokenExpected {
                        expected: "string or numeric literal".to_string(),
                        found,
                    },
                    false,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(src: &str) -> (crate::parser::SyntaxNode, Vec<crate::diagnostics::Diagnostic>) {
        let mut p = Parser::new(src);
        parse_enum_statement(&mut p);
        let out = p.finish();
        (out.green, out.diagnostics)
    }

    #[test]
    fn plain_and_valued_members() {
        let (tree, diags) = parse(r#"enum Dir { Up, Down: "down", Count: 3 }"#);
        assert!(diags.is_empty(), "{diags:?}");
        assert_eq!(format!("{tree:#?}").matches("ENUM_MEMBER\n").count(), 3);
    }

    #[test]
    fn non_literal_value_reports() {
        let (_, diags) = parse("enum Dir { Up: Down }");
        assert_eq!(diags.len(), 1);
    }
}
