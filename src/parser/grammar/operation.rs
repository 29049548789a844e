//! `op` declarations (spec §4.3 "Operation") and the operation-signature
//! grammar shared with interface members (spec §4.3 "Interface": "operations
//! inside an interface omit the `op` keyword... tolerated but optional").

use crate::lexer::TokenKind;
use crate::parser::grammar::{common, expr, list_kinds, template};
use crate::parser::Parser;
use crate::syntax_kind::SyntaxKind;
use crate::syntax_kind::T;

/// Top-level `op foo(a: string): Result;` or `op foo is Bar;`. The `op`
/// keyword is mandatory here — the caller has already dispatched on it.
pub(crate) fn parse_operation_statement(p: &mut Parser) {
    let _guard = p.start_node(SyntaxKind::OPERATION_STATEMENT);
    p.bump(T![op]);
    parse_operation_body(p);
    p.expect(TokenKind::Semicolon, T![;], ";");
}

/// One member of an `InterfaceMembers` list (spec §4.5): same signature
/// grammar, but the leading `op` is optional (still consumed if present).
pub(crate) fn parse_interface_operation_member(p: &mut Parser) {
    let _guard = p.start_node(SyntaxKind::OPERATION_STATEMENT);
    if p.at_keyword("op") {
        p.bump(T![op]);
    }
    parse_operation_body(p);
}

fn parse_operation_body(p: &mut Parser) {
    common::parse_declaration_name(p);

    template::parse_template_parameters_opt(p);

    if p.at_keyword("is") {
        let _guard = p.start_node(SyntaxKind::OPERATION_SIGNATURE_REFERENCE);
        p.bump(T![is]);
        expr::parse_reference_expr(p);
    } else {
        let _guard = p.start_node(SyntaxKind::OPERATION_SIGNATURE_DECLARATION);
        parse_operation_parameter_list(p);
        p.expect(TokenKind::Colon, T![:], ":");
        expr::parse_expr(p);
    }
}

fn parse_operation_parameter_list(p: &mut Parser) {
    let _guard = p.start_node(SyntaxKind::OPERATION_PARAMETER_LIST);
    p.parse_list(
        &list_kinds::OPERATION_PARAMETERS,
        common::at_annotation_prelude,
        parse_operation_parameter,
    );
}

/// An operation parameter is grammatically a model property (spec §4.5:
/// "OperationParameters (`( , ; )`, properties allowed)"), including
/// spreads, so it's parsed the same way rather than duplicating the logic.
fn parse_operation_parameter(p: &mut Parser) {
    super::model::parse_one_model_property_or_spread(p);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(src: &str) -> (crate::parser::SyntaxNode, Vec<crate::diagnostics::Diagnostic>) {
        let mut p = Parser::new(src);
        parse_operation_statement(&mut p);
        let out = p.finish();
        (out.green, out.diagnostics)
    }

    #[test]
    fn declaration_form_zero_diagnostics() {
        // spec §8 scenario 4
        let (tree, diags) = parse("op foo(a: string, b?: int32): Result;");
        assert!(diags.is_empty(), "{diags:?}");
        assert!(format!("{tree:#?}").contains("OPERATION_SIGNATURE_DECLARATION"));
    }

    #[test]
    fn reference_form() {
        let (tree, diags) = parse("op foo is Bar;");
        assert!(diags.is_empty(), "{diags:?}");
        assert!(format!("{tree:#?}").contains("OPERATION_SIGNATURE_REFERENCE"));
    }
}
