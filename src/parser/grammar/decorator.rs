//! `@@` augment-decorator statements, `dec` decorator declarations, `fn`
//! function declarations, and the `extern` modifier they share.

use crate::diagnostics::DiagnosticCode;
use crate::lexer::TokenKind;
use crate::parser::grammar::{common, expr, list_kinds};
use crate::parser::Parser;
use crate::syntax_kind::SyntaxKind;
use crate::syntax_kind::T;

/// `@@target(targetType, args…);`. Requires at least one argument; the
/// first must be a type reference, or it is replaced with a synthetic
/// missing reference and `augment-decorator-target` is reported.
pub(crate) fn parse_augment_decorator_statement(p: &mut Parser) {
    let _guard = p.start_node(SyntaxKind::AUGMENT_DECORATOR_STATEMENT);
    p.bump(T![@@]);
    expr::parse_reference_expr(p);

    let mut argument_count = 0u32;
    {
        let _args = p.start_node(SyntaxKind::CALL_ARGUMENT_LIST);
        p.parse_list(&list_kinds::CALL_ARGUMENTS, |_| false, |p| {
            if argument_count == 0 {
                parse_augment_target(p);
            } else {
                expr::parse_expr(p);
            }
            argument_count += 1;
        });
    }
    if argument_count == 0 {
        p.err(DiagnosticCode::AugmentDecoratorTarget, false);
    }
    p.expect(TokenKind::Semicolon, T![;], ";");
}

/// The first augment-decorator argument must look like a reference
/// expression (spec's "type reference"); anything else is swapped for a
/// synthetic missing identifier wrapped the same way a real reference would
/// be, so downstream consumers always see an `IdentifierExpression` there.
fn parse_augment_target(p: &mut Parser) {
    if p.at(TokenKind::Ident) && !p.at_any_keyword() {
        expr::parse_reference_expr(p);
    } else {
        let _guard = p.start_node(SyntaxKind::IDENTIFIER_EXPRESSION);
        p.missing_name();
        p.err(DiagnosticCode::AugmentDecoratorTarget, false);
    }
}

/// `extern`, `fn`, `dec` dispatch — the caller already knows one of these
/// three keywords is current. Returns the produced statement's kind so the
/// statement driver can apply decorator-prelude and ordering checks
/// uniformly across every statement form.
pub(crate) fn parse_modifier_prefixed_declaration(p: &mut Parser) -> SyntaxKind {
    let modifiers = p.checkpoint_node();
    let mut had_modifiers = false;
    while p.at_keyword("extern") {
        had_modifiers = true;
        p.bump(T![extern]);
    }
    if had_modifiers {
        modifiers.wrap_node(SyntaxKind::MODIFIER_LIST).finish_node();
    }

    if p.at_keyword("fn") {
        parse_function_declaration(p);
        SyntaxKind::FUNCTION_DECLARATION_STATEMENT
    } else if p.at_keyword("dec") {
        parse_decorator_declaration(p);
        SyntaxKind::DECORATOR_DECLARATION_STATEMENT
    } else {
        let found = p.describe_current();
        p.err(
            DiagnosticCode::TokenExpected {
                expected: "'fn' or 'dec'".to_string(),
                found,
            },
            false,
        );
        SyntaxKind::INVALID_STATEMENT
    }
}

/// `dec name(target, params…);` — at least one parameter (the target),
/// which may not itself be optional.
fn parse_decorator_declaration(p: &mut Parser) {
    let _guard = p.start_node(SyntaxKind::DECORATOR_DECLARATION_STATEMENT);
    p.bump(T![dec]);

    if p.at(TokenKind::Ident) {
        let _name = p.start_node(SyntaxKind::NAME);
        p.bump(SyntaxKind::IDENT);
    } else {
        p.missing_name();
    }

    let info = parse_function_parameter_list(p);
    if info.count == 0 || info.first_is_optional {
        p.err(DiagnosticCode::DecoratorDeclTarget, false);
    }

    p.expect(TokenKind::Semicolon, T![;], ";");
}

/// `fn name(params): returnType;` — the return type is optional.
fn parse_function_declaration(p: &mut Parser) {
    let _guard = p.start_node(SyntaxKind::FUNCTION_DECLARATION_STATEMENT);
    p.bump(T![fn]);

    if p.at(TokenKind::Ident) {
        let _name = p.start_node(SyntaxKind::NAME);
        p.bump(SyntaxKind::IDENT);
    } else {
        p.missing_name();
    }

    parse_function_parameter_list(p);

    if p.at(TokenKind::Colon) {
        p.bump(T![:]);
        expr::parse_expr(p);
    }

    p.expect(TokenKind::Semicolon, T![;], ";");
}

struct ParameterListInfo {
    count: u32,
    first_is_optional: bool,
}

/// `FunctionParameters` (spec §4.5), shared by `fn` and `dec`: rest implies
/// non-optional and must be last, and every optional parameter must follow
/// every required one.
fn parse_function_parameter_list(p: &mut Parser) -> ParameterListInfo {
    let _list = p.start_node(SyntaxKind::FUNCTION_PARAMETER_LIST);
    let mut count = 0u32;
    let mut first_is_optional = false;
    let mut seen_optional = false;
    let mut seen_rest = false;
    p.parse_list(&list_kinds::FUNCTION_PARAMETERS, common::at_annotation_prelude, |p| {
        let (optional, is_rest) = parse_function_parameter(p, seen_optional, seen_rest);
        if count == 0 {
            first_is_optional = optional;
        }
        count += 1;
        if is_rest {
            seen_rest = true;
        } else if optional {
            seen_optional = true;
        }
    });
    ParameterListInfo { count, first_is_optional }
}

/// `...name?: Type = default`, returning `(optional, is_rest)` so the list
/// driver's closure can track cross-parameter ordering state.
fn parse_function_parameter(p: &mut Parser, seen_optional: bool, seen_rest: bool) -> (bool, bool) {
    common::parse_annotations_prelude(p, None);
    let _guard = p.start_node(SyntaxKind::FUNCTION_PARAMETER);

    if seen_rest {
        p.err(DiagnosticCode::RestParameterLast, false);
    }

    let is_rest = p.at(TokenKind::Ellipsis);
    if is_rest {
        p.bump(T![...]);
    }

    if p.at(TokenKind::Ident) {
        let _name = p.start_node(SyntaxKind::NAME);
        p.bump(SyntaxKind::IDENT);
    } else {
        p.missing_name();
    }

    let optional = p.at(TokenKind::Question);
    if optional {
        p.bump(T![?]);
    }

    if is_rest && optional {
        p.err(DiagnosticCode::RestParameterRequired, false);
    }
    if !is_rest && !optional && seen_optional {
        p.err(DiagnosticCode::RequiredParameterFirst, false);
    }

    p.expect(TokenKind::Colon, T![:], ":");
    expr::parse_expr(p);

    if p.at(TokenKind::Eq) {
        p.bump(T![=]);
        expr::parse_expr(p);
        if !optional {
            p.err(DiagnosticCode::DefaultRequired, false);
        }
    }

    (optional, is_rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_statement(src: &str, at: &str) -> (crate::parser::SyntaxNode, Vec<crate::diagnostics::Diagnostic>) {
        let mut p = Parser::new(src);
        match at {
            "augment" => parse_augment_decorator_statement(&mut p),
            "modifier" => {
                parse_modifier_prefixed_declaration(&mut p);
            }
            _ => unreachable!(),
        }
        let out = p.finish();
        (out.green, out.diagnostics)
    }

    #[test]
    fn augment_decorator_with_target_and_args() {
        let (tree, diags) = parse_statement(r#"@@doc(Widget, "a widget");"#, "augment");
        assert!(diags.is_empty(), "{diags:?}");
        assert!(format!("{tree:#?}").contains("AUGMENT_DECORATOR_STATEMENT"));
    }

    #[test]
    fn augment_decorator_missing_target_recovers() {
        let (_, diags) = parse_statement(r#"@@doc();"#, "augment");
        assert_eq!(diags.len(), 1);
        assert!(matches!(diags[0].code, DiagnosticCode::AugmentDecoratorTarget));
    }

    #[test]
    fn decorator_declaration_with_target() {
        let (tree, diags) = parse_statement("dec doc(target: unknown, text: string);", "modifier");
        assert!(diags.is_empty(), "{diags:?}");
        assert!(format!("{tree:#?}").contains("DECORATOR_DECLARATION_STATEMENT"));
    }

    #[test]
    fn decorator_declaration_without_target_reports() {
        let (_, diags) = parse_statement("dec doc();", "modifier");
        assert_eq!(diags.len(), 1);
        assert!(matches!(diags[0].code, DiagnosticCode::DecoratorDeclTarget));
    }

    #[test]
    fn extern_function_declaration() {
        let (tree, diags) = parse_statement("extern fn parseInt(s: string): int32;", "modifier");
        assert!(diags.is_empty(), "{diags:?}");
        let dump = format!("{tree:#?}");
        assert!(dump.contains("MODIFIER_LIST"));
        assert!(dump.contains("FUNCTION_DECLARATION_STATEMENT"));
    }

    #[test]
    fn rest_parameter_must_be_last() {
        let (_, diags) = parse_statement("fn f(...rest: string, extra: string): void;", "modifier");
        assert_eq!(diags.len(), 1);
        assert!(matches!(diags[0].code, DiagnosticCode::RestParameterLast));
    }

    #[test]
    fn required_after_optional_reports() {
        let (_, diags) = parse_statement("fn f(a?: string, b: string): void;", "modifier");
        assert_eq!(diags.len(), 1);
        assert!(matches!(diags[0].code, DiagnosticCode::RequiredParameterFirst));
    }

    #[test]
    fn default_without_optional_reports() {
        let (_, diags) = parse_statement("fn f(a: string = \"x\"): void;", "modifier");
        assert_eq!(diags.len(), 1);
        assert!(matches!(diags[0].code, DiagnosticCode::DefaultRequired));
    }
}
