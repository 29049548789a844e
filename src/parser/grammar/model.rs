//! `model` declarations and the `ModelProperties` list kind they share with
//! model expressions (`{...}` in primary-expression position) and
//! projection model expressions (spec §4.3, §4.5, §4.6).

use crate::diagnostics::DiagnosticCode;
use crate::lexer::TokenKind;
use crate::parser::grammar::{common, expr, list_kinds, template};
use crate::parser::Parser;
use crate::syntax_kind::SyntaxKind;
use crate::syntax_kind::T;

/// `model Id<T> extends Base is Other { props }` (spec §4.3 "Model").
/// `extends` and `is` are mutually exclusive; when `is` is used the brace
/// body may be omitted in favor of a trailing `;`.
pub(crate) fn parse_model_statement(p: &mut Parser) {
    let _guard = p.start_node(SyntaxKind::MODEL_STATEMENT);
    p.bump(T![model]);

    common::parse_declaration_name(p);

    template::parse_template_parameters_opt(p);

    let mut has_is = false;
    if p.at_keyword("extends") {
        p.bump(T![extends]);
        expr::parse_expr(p);
    } else if p.at_keyword("is") {
        has_is = true;
        p.bump(T![is]);
        expr::parse_expr(p);
    }

    if p.at(TokenKind::LBrace) {
        parse_model_property_list(p);
    } else if has_is {
        p.expect(TokenKind::Semicolon, T![;], ";");
    } else {
        p.expect(TokenKind::LBrace, T!['{'], "{");
    }
}

/// The `ModelProperties` list kind (spec §4.5): `{ prop; prop, }`, trailing
/// delimiter accepted silently. Shared verbatim by model declarations,
/// model expressions (`expr.rs`), and projection model expressions.
pub(crate) fn parse_model_property_list(p: &mut Parser) {
    let _guard = p.start_node(SyntaxKind::MODEL_PROPERTY_LIST);
    p.parse_list(
        &list_kinds::MODEL_PROPERTIES,
        common::at_annotation_prelude,
        parse_model_property_item,
    );
}

fn parse_model_property_item(p: &mut Parser) {
    parse_one_model_property_or_spread(p);
}

/// One item of a `ModelProperties`-shaped list: a property or a spread,
/// with its own annotation prelude. Also the grammar for one
/// `OperationParameters`/`FunctionParameters` item (spec §4.5: "properties
/// allowed"), so it's exposed to `operation.rs` rather than duplicated.
pub(crate) fn parse_one_model_property_or_spread(p: &mut Parser) {
    common::parse_annotations_prelude(p, None);
    if p.at(TokenKind::Ellipsis) {
        parse_model_spread_property(p);
    } else {
        parse_model_property(p);
    }
}

fn parse_model_spread_property(p: &mut Parser) {
    let _guard = p.start_node(SyntaxKind::MODEL_SPREAD_PROPERTY);
    p.bump(T![...]);
    expr::parse_expr(p);
}

/// `name?: Type = default`.
fn parse_model_property(p: &mut Parser) {
    let _guard = p.start_node(SyntaxKind::MODEL_PROPERTY);

    if p.at(TokenKind::Ident) {
        let _name = p.start_node(SyntaxKind::NAME);
        p.bump(SyntaxKind::IDENT);
    } else if p.at(TokenKind::StringLiteral) {
        let _name = p.start_node(SyntaxKind::NAME);
        p.bump(SyntaxKind::STRING_LITERAL);
    } else {
        p.missing_name();
    }

    let optional = p.at(TokenKind::Question);
    if optional {
        p.bump(T![?]);
    }

    p.expect(TokenKind::Colon, T![:], ":");
    expr::parse_expr(p);

    if p.at(TokenKind::Eq) {
        p.bump(T![=]);
        expr::parse_expr(p);
        if !optional {
            // `y: string = 3` (spec §8 scenario 2): default without `?`.
            p.err(DiagnosticCode::DefaultOptional, false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(src: &str) -> (crate::parser::SyntaxNode, Vec<crate::diagnostics::Diagnostic>) {
        let mut p = Parser::new(src);
        parse_model_statement(&mut p);
        let out = p.finish();
        (out.green, out.diagnostics)
    }

    #[test]
    fn simple_model_two_properties_zero_diagnostics() {
        // spec §8 scenario 1
        let (tree, diags) = parse("model M { x: string; y?: int32 = 3 }");
        assert!(diags.is_empty(), "{diags:?}");
        let dump = format!("{tree:#?}");
        assert_eq!(dump.matches("MODEL_PROPERTY").count(), 2);
    }

    #[test]
    fn default_without_optional_reports_but_keeps_default() {
        // spec §8 scenario 2
        let (tree, diags) = parse("model M { x: string = 3 }");
        assert_eq!(diags.len(), 1);
        assert!(matches!(diags[0].code, DiagnosticCode::DefaultOptional));
        assert!(format!("{tree:#?}").contains("NUMERIC_LITERAL_EXPRESSION"));
    }

    #[test]
    fn is_without_body_then_semicolon() {
        let (_, diags) = parse("model M is Other;");
        assert!(diags.is_empty(), "{diags:?}");
    }

    #[test]
    fn model_spread_property() {
        let (tree, diags) = parse("model M { ...Base; x: string }");
        assert!(diags.is_empty(), "{diags:?}");
        assert!(format!("{tree:#?}").contains("MODEL_SPREAD_PROPERTY"));
    }
}
