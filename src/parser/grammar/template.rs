//! Template parameter lists (`<T, U = string>`), shared by every declaration
//! form that can carry one: model, scalar, interface, union, operation,
//! alias (spec §4.3 "freedom in tree shape" for each declaration's header).

use crate::lexer::TokenKind;
use crate::parser::grammar::{expr, list_kinds};
use crate::parser::Parser;
use crate::syntax_kind::SyntaxKind;
use crate::syntax_kind::T;

/// Parses `< T, U = Default, ... >` if present; a no-op otherwise.
pub(crate) fn parse_template_parameters_opt(p: &mut Parser) {
    if !p.at(TokenKind::LAngle) {
        return;
    }
    let _guard = p.start_node(SyntaxKind::TEMPLATE_PARAMETER_LIST);
    p.parse_list(&list_kinds::TEMPLATE_PARAMETERS, |_| false, parse_template_parameter);
}

fn parse_template_parameter(p: &mut Parser) {
    let _guard = p.start_node(SyntaxKind::TEMPLATE_PARAMETER);
    if p.at(TokenKind::Ident) {
        let _name = p.start_node(SyntaxKind::NAME);
        p.bump(SyntaxKind::IDENT);
    } else {
        p.missing_name();
    }
    if p.at_keyword("extends") {
        p.bump(T![extends]);
        expr::parse_expr(p);
    }
    if p.at(TokenKind::Eq) {
        p.bump(T![=]);
        expr::parse_expr(p);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(src: &str) -> crate::parser::SyntaxNode {
        let mut p = Parser::new(src);
        parse_template_parameters_opt(&mut p);
        p.finish().green
    }

    #[test]
    fn template_parameters_with_constraint_and_default() {
        let tree = parse("<T extends string = \"x\">");
        let dump = format!("{tree:#?}");
        assert!(dump.contains("TEMPLATE_PARAMETER_LIST"));
        assert!(dump.contains("TEMPLATE_PARAMETER"));
    }

    #[test]
    fn no_template_parameters_is_a_no_op() {
        let tree = parse("");
        assert!(!format!("{tree:#?}").contains("TEMPLATE_PARAMETER"));
    }
}
