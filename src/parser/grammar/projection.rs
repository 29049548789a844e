//! `projection` declarations: `projection selector#id { from {...} to {...} }`.
//! The body is a small embedded expression language of its own — a
//! precedence chain (`return` prefix, `||`, `&&`, equality, relational,
//! additive, multiplicative, unary `!`, call, `@`-decorator-reference,
//! member access, primary) that shares only its model-expression primary
//! form with the outer type-expression grammar (`expr.rs`).

use crate::diagnostics::DiagnosticCode;
use crate::lexer::TokenKind;
use crate::parser::grammar::{expr, list_kinds};
use crate::parser::Parser;
use crate::syntax_kind::SyntaxKind;
use crate::syntax_kind::T;

pub(crate) fn parse_projection_statement(p: &mut Parser) {
    let _guard = p.start_node(SyntaxKind::PROJECTION_STATEMENT);
    p.bump(T![projection]);
    parse_selector(p);
    p.expect(TokenKind::Hash, T![#], "#");
    if p.at(TokenKind::Ident) {
        let _name = p.start_node(SyntaxKind::NAME);
        p.bump(SyntaxKind::IDENT);
    } else {
        p.missing_name();
    }

    p.expect(TokenKind::LBrace, T!['{'], "{");
    let mut seen_from = false;
    let mut seen_to = false;
    while !p.at(TokenKind::RBrace) && !p.at_eof() {
        let before = p.stream_position();
        if p.at_keyword("from") {
            if seen_from {
                p.err(
                    DiagnosticCode::DuplicateSymbol {
                        kind: "projection".to_string(),
                        name: "from".to_string(),
                    },
                    false,
                );
            }
            seen_from = true;
            parse_direction(p, true);
        } else if p.at_keyword("to") {
            if seen_to {
                p.err(
                    DiagnosticCode::DuplicateSymbol {
                        kind: "projection".to_string(),
                        name: "to".to_string(),
                    },
                    false,
                );
            }
            seen_to = true;
            parse_direction(p, false);
        } else {
            let found = p.describe_current();
            p.err(
                DiagnosticCode::TokenExpected {
                    expected: "'from' or 'to'".to_string(),
                    found,
                },
                false,
            );
            p.bump(SyntaxKind::ERROR_TOKEN);
        }
        if p.stream_position() == before {
            break;
        }
    }
    p.expect(TokenKind::RBrace, T!['}'], "}");
}

/// A bare `model`/`op`/`interface`/`union`/`enum` keyword selects every
/// declaration of that kind; anything else is a reference to one specific
/// named declaration.
fn parse_selector(p: &mut Parser) {
    let kind = if p.at_keyword("model") {
        Some((T![model], SyntaxKind::PROJECTION_MODEL_SELECTOR))
    } else if p.at_keyword("op") {
        Some((T![op], SyntaxKind::PROJECTION_OPERATION_SELECTOR))
    } else if p.at_keyword("interface") {
        Some((T![interface], SyntaxKind::PROJECTION_INTERFACE_SELECTOR))
    } else if p.at_keyword("union") {
        Some((T![union], SyntaxKind::PROJECTION_UNION_SELECTOR))
    } else if p.at_keyword("enum") {
        Some((T![enum], SyntaxKind::PROJECTION_ENUM_SELECTOR))
    } else {
        None
    };

    if let Some((token, node)) = kind {
        let _guard = p.start_node(node);
        p.bump(token);
    } else {
        let _guard = p.start_node(SyntaxKind::PROJECTION_IDENTIFIER_SELECTOR);
        expr::parse_reference_expr(p);
    }
}

/// `('from'|'to') ('(' params ')')? '{' statements '}'`.
fn parse_direction(p: &mut Parser, is_from: bool) {
    let _guard = p.start_node(SyntaxKind::PROJECTION);
    if is_from {
        p.bump(T![from]);
    } else {
        p.bump(T![to]);
    }
    if p.at(TokenKind::LParen) {
        let _list = p.start_node(SyntaxKind::PROJECTION_PARAMETER_LIST);
        p.parse_list(&list_kinds::PROJECTION_PARAMETER, |_| false, parse_parameter);
    }
    parse_block_expr(p);
}

fn parse_parameter(p: &mut Parser) {
    let _guard = p.start_node(SyntaxKind::PROJECTION_PARAMETER);
    if p.at(TokenKind::Ident) {
        let _name = p.start_node(SyntaxKind::NAME);
        p.bump(SyntaxKind::IDENT);
    } else {
        p.missing_name();
    }
}

fn parse_block_expr(p: &mut Parser) {
    let _guard = p.start_node(SyntaxKind::PROJECTION_BLOCK_EXPRESSION);
    p.expect(TokenKind::LBrace, T!['{'], "{");
    while !p.at(TokenKind::RBrace) && !p.at_eof() {
        let before = p.stream_position();
        parse_expr_statement(p);
        if p.stream_position() == before {
            break;
        }
    }
    p.expect(TokenKind::RBrace, T!['}'], "}");
}

fn parse_expr_statement(p: &mut Parser) {
    let _guard = p.start_node(SyntaxKind::PROJECTION_EXPRESSION_STATEMENT);
    parse_projection_expr(p);
    p.expect(TokenKind::Semicolon, T![;], ";");
}

// --- expression precedence chain, loosest to tightest ----------------------

pub(crate) fn parse_projection_expr(p: &mut Parser) {
    parse_return_expr(p);
}

fn parse_return_expr(p: &mut Parser) {
    if p.at_keyword("return") {
        let _guard = p.start_node(SyntaxKind::PROJECTION_RETURN_EXPRESSION);
        p.bump(T![return]);
        parse_logical_or_expr(p);
    } else {
        parse_logical_or_expr(p);
    }
}

fn parse_logical_or_expr(p: &mut Parser) {
    let checkpoint = p.checkpoint_node();
    parse_logical_and_expr(p);
    let mut had_op = false;
    while p.at(TokenKind::PipePipe) {
        had_op = true;
        p.bump(T![||]);
        parse_logical_and_expr(p);
    }
    if had_op {
        checkpoint.wrap_node(SyntaxKind::PROJECTION_LOGICAL_EXPRESSION).finish_node();
    }
}

fn parse_logical_and_expr(p: &mut Parser) {
    let checkpoint = p.checkpoint_node();
    parse_equality_expr(p);
    let mut had_op = false;
    while p.at(TokenKind::AmpAmp) {
        had_op = true;
        p.bump(T![&&]);
        parse_equality_expr(p);
    }
    if had_op {
        checkpoint.wrap_node(SyntaxKind::PROJECTION_LOGICAL_EXPRESSION).finish_node();
    }
}

fn parse_equality_expr(p: &mut Parser) {
    let checkpoint = p.checkpoint_node();
    parse_relational_expr(p);
    let mut had_op = false;
    while p.at(TokenKind::EqEq) || p.at(TokenKind::BangEq) {
        had_op = true;
        if p.at(TokenKind::EqEq) {
            p.bump(T![==]);
        } else {
            p.bump(T![!=]);
        }
        parse_relational_expr(p);
    }
    if had_op {
        checkpoint.wrap_node(SyntaxKind::PROJECTION_EQUALITY_EXPRESSION).finish_node();
    }
}

fn parse_relational_expr(p: &mut Parser) {
    let checkpoint = p.checkpoint_node();
    parse_additive_expr(p);
    let mut had_op = false;
    while p.at(TokenKind::LAngle) || p.at(TokenKind::LtEq) || p.at(TokenKind::RAngle) || p.at(TokenKind::GtEq) {
        had_op = true;
        if p.at(TokenKind::LAngle) {
            p.bump(T![<]);
        } else if p.at(TokenKind::LtEq) {
            p.bump(T![<=]);
        } else if p.at(TokenKind::RAngle) {
            p.bump(T![>]);
        } else {
            p.bump(T![>=]);
        }
        parse_additive_expr(p);
    }
    if had_op {
        checkpoint.wrap_node(SyntaxKind::PROJECTION_RELATIONAL_EXPRESSION).finish_node();
    }
}

fn parse_additive_expr(p: &mut Parser) {
    let checkpoint = p.checkpoint_node();
    parse_multiplicative_expr(p);
    let mut had_op = false;
    while p.at(TokenKind::Plus) || p.at(TokenKind::Minus) {
        had_op = true;
        if p.at(TokenKind::Plus) {
            p.bump(T![+]);
        } else {
            p.bump(T![-]);
        }
        parse_multiplicative_expr(p);
    }
    if had_op {
        checkpoint.wrap_node(SyntaxKind::PROJECTION_ARITHMETIC_EXPRESSION).finish_node();
    }
}

fn parse_multiplicative_expr(p: &mut Parser) {
    let checkpoint = p.checkpoint_node();
    parse_unary_expr(p);
    let mut had_op = false;
    while p.at(TokenKind::Star) || p.at(TokenKind::Slash) {
        had_op = true;
        if p.at(TokenKind::Star) {
            p.bump(T![*]);
        } else {
            p.bump(T![/]);
        }
        parse_unary_expr(p);
    }
    if had_op {
        checkpoint.wrap_node(SyntaxKind::PROJECTION_ARITHMETIC_EXPRESSION).finish_node();
    }
}

fn parse_unary_expr(p: &mut Parser) {
    if p.at(TokenKind::Bang) {
        let _guard = p.start_node(SyntaxKind::PROJECTION_UNARY_EXPRESSION);
        p.bump(T![!]);
        parse_call_expr(p);
    } else {
        parse_call_expr(p);
    }
}

/// `expr(args)`, repeatable: `f(a)(b)` calls the result of `f(a)`.
fn parse_call_expr(p: &mut Parser) {
    let checkpoint = p.checkpoint_node();
    parse_decorator_reference_expr(p);
    while p.at(TokenKind::LParen) {
        let guard = checkpoint.wrap_node(SyntaxKind::PROJECTION_CALL_EXPRESSION);
        let _args = p.start_node(SyntaxKind::CALL_ARGUMENT_LIST);
        p.parse_list(&list_kinds::PROJECTION_EXPRESSION, |_| false, parse_projection_expr);
        drop(_args);
        guard.finish_node();
    }
}

fn parse_decorator_reference_expr(p: &mut Parser) {
    if p.at(TokenKind::At) {
        let _guard = p.start_node(SyntaxKind::PROJECTION_DECORATOR_REFERENCE_EXPRESSION);
        p.bump(T![@]);
        parse_member_access_expr(p);
    } else {
        parse_member_access_expr(p);
    }
}

fn parse_member_access_expr(p: &mut Parser) {
    let checkpoint = p.checkpoint_node();
    parse_primary_expr(p);
    while p.at(TokenKind::Dot) || p.at(TokenKind::ColonColon) {
        if p.at(TokenKind::Dot) {
            p.bump(T![.]);
        } else {
            p.bump(T![::]);
        }
        if p.at(TokenKind::Ident) && !p.at_any_keyword() {
            let _name = p.start_node(SyntaxKind::NAME);
            p.bump(SyntaxKind::IDENT);
        } else {
            p.missing_name();
        }
        checkpoint.wrap_node(SyntaxKind::PROJECTION_MEMBER_EXPRESSION).finish_node();
    }
}

fn parse_primary_expr(p: &mut Parser) {
    match p.current_kind() {
        TokenKind::StringLiteral => {
            let _g = p.start_node(SyntaxKind::STRING_LITERAL_EXPRESSION);
            p.bump(SyntaxKind::STRING_LITERAL);
        }
        TokenKind::NumericLiteral => {
            let _g = p.start_node(SyntaxKind::NUMERIC_LITERAL_EXPRESSION);
            p.bump(SyntaxKind::NUMERIC_LITERAL);
        }
        TokenKind::LBracket => parse_tuple_expr(p),
        TokenKind::LBrace => parse_model_expr(p),
        TokenKind::LParen => parse_parenthesized_or_lambda(p),
        TokenKind::Ident if p.at_keyword("true") => {
            let _g = p.start_node(SyntaxKind::BOOLEAN_LITERAL_EXPRESSION);
            p.bump(T![true]);
        }
        TokenKind::Ident if p.at_keyword("false") => {
            let _g = p.start_node(SyntaxKind::BOOLEAN_LITERAL_EXPRESSION);
            p.bump(T![false]);
        }
        TokenKind::Ident if p.at_keyword("void") => {
            let _g = p.start_node(SyntaxKind::VOID_EXPRESSION);
            p.bump(T![void]);
        }
        TokenKind::Ident if p.at_keyword("never") => {
            let _g = p.start_node(SyntaxKind::NEVER_EXPRESSION);
            p.bump(T![never]);
        }
        TokenKind::Ident if p.at_keyword("unknown") => {
            let _g = p.start_node(SyntaxKind::UNKNOWN_EXPRESSION);
            p.bump(T![unknown]);
        }
        TokenKind::Ident if p.at_keyword("if") => parse_if_expr(p),
        TokenKind::Ident => {
            let _g = p.start_node(SyntaxKind::IDENTIFIER_EXPRESSION);
            let _name = p.start_node(SyntaxKind::NAME);
            p.bump(SyntaxKind::IDENT);
        }
        _ => {
            let found = p.describe_current();
            p.err(
                DiagnosticCode::TokenExpected {
                    expected: "expression".to_string(),
                    found,
                },
                false,
            );
        }
    }
}

fn parse_tuple_expr(p: &mut Parser) {
    let _guard = p.start_node(SyntaxKind::PROJECTION_TUPLE_EXPRESSION);
    p.parse_list(&list_kinds::TUPLE, |_| false, parse_projection_expr);
}

fn parse_model_expr(p: &mut Parser) {
    let _guard = p.start_node(SyntaxKind::PROJECTION_MODEL_EXPRESSION);
    super::model::parse_model_property_list(p);
}

/// `if cond { ... } (else if cond { ... })* (else { ... })?`, the `else if`
/// chain modeled as nested `PROJECTION_IF_EXPRESSION`s rather than a list,
/// so each `else` owns exactly one branch node.
fn parse_if_expr(p: &mut Parser) {
    let _guard = p.start_node(SyntaxKind::PROJECTION_IF_EXPRESSION);
    p.bump(T![if]);
    parse_projection_expr(p);
    parse_block_expr(p);
    if p.at_keyword("else") {
        p.bump(T![else]);
        if p.at_keyword("if") {
            parse_if_expr(p);
        } else {
            parse_block_expr(p);
        }
    }
}

/// `(expr, expr, ...)` is a lambda's parameter list when `=>` follows the
/// closing paren, and a single parenthesized expression otherwise. Knowing
/// which one applies requires seeing past the whole group, so this peeks
/// ahead before committing to either shape — reparsing the content
/// retroactively as lambda parameters after the fact isn't possible with a
/// checkpoint that wraps a single growing span.
fn parse_parenthesized_or_lambda(p: &mut Parser) {
    if p.peek_past_parens_then(TokenKind::FatArrow) {
        parse_lambda_expr(p);
    } else {
        parse_parenthesized_expr(p);
    }
}

fn parse_lambda_expr(p: &mut Parser) {
    let _guard = p.start_node(SyntaxKind::PROJECTION_LAMBDA_EXPRESSION);
    {
        let _list = p.start_node(SyntaxKind::PROJECTION_PARAMETER_LIST);
        p.parse_list(&list_kinds::PROJECTION_PARAMETER, |_| false, |p| {
            let _param = p.start_node(SyntaxKind::PROJECTION_LAMBDA_PARAMETER);
            if p.at(TokenKind::Ident) && !p.at_any_keyword() {
                let _name = p.start_node(SyntaxKind::NAME);
                p.bump(SyntaxKind::IDENT);
            } else {
                p.missing_name();
            }
        });
    }
    p.expect(TokenKind::FatArrow, T![=>], "=>");
    parse_block_expr(p);
}

/// A parenthesized group must hold exactly one expression; extra
/// comma-separated expressions are still parsed (for a complete tree) but
/// reported once as trailing.
fn parse_parenthesized_expr(p: &mut Parser) {
    let _guard = p.start_node(SyntaxKind::PROJECTION_PARENTHESIZED_EXPRESSION);
    p.bump(T!['(']);
    parse_projection_expr(p);
    let mut had_extra = false;
    while p.at(TokenKind::Comma) {
        had_extra = true;
        p.bump(T![,]);
        if p.at(TokenKind::RParen) {
            break;
        }
        parse_projection_expr(p);
    }
    if had_extra {
        p.err(
            DiagnosticCode::TrailingToken {
                token: "expression".to_string(),
            },
            false,
        );
    }
    p.expect(TokenKind::RParen, T![')'], ")");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(src: &str) -> (crate::parser::SyntaxNode, Vec<crate::diagnostics::Diagnostic>) {
        let mut p = Parser::new(src);
        parse_projection_statement(&mut p);
        let out = p.finish();
        (out.green, out.diagnostics)
    }

    #[test]
    fn model_selector_with_both_directions() {
        let (tree, diags) = parse("projection model#p { to { return self; } from { return self; } }");
        assert!(diags.is_empty(), "{diags:?}");
        let dump = format!("{tree:#?}");
        assert!(dump.contains("PROJECTION_MODEL_SELECTOR"));
        assert_eq!(dump.matches("PROJECTION\n").count(), 2);
        assert!(dump.contains("PROJECTION_RETURN_EXPRESSION"));
    }

    #[test]
    fn duplicate_direction_reports() {
        let (_, diags) = parse("projection model#p { to { return self; } to { return self; } }");
        assert_eq!(diags.len(), 1);
        assert!(matches!(diags[0].code, DiagnosticCode::DuplicateSymbol { .. }));
    }

    #[test]
    fn identifier_selector() {
        let (tree, diags) = parse("projection Widget#rename { to { return self; } }");
        assert!(diags.is_empty(), "{diags:?}");
        assert!(format!("{tree:#?}").contains("PROJECTION_IDENTIFIER_SELECTOR"));
    }

    #[test]
    fn lambda_vs_parenthesized_expression() {
        let (tree, _) = parse(
            "projection model#p { to { return (x, y) => { return x; }; return (1 + 2); } }",
        );
        let dump = format!("{tree:#?}");
        assert!(dump.contains("PROJECTION_LAMBDA_EXPRESSION"));
        assert!(dump.contains("PROJECTION_PARENTHESIZED_EXPRESSION"));
        assert!(dump.contains("PROJECTION_ARITHMETIC_EXPRESSION"));
    }

    #[test]
    fn if_else_if_chain() {
        let (tree, diags) = parse(
            "projection model#p { to { if a { return 1; } else if b { return 2; } else { return 3; } } }",
        );
        assert!(diags.is_empty(), "{diags:?}");
        assert_eq!(format!("{tree:#?}").matches("PROJECTION_IF_EXPRESSION").count(), 2);
    }

    #[test]
    fn member_and_call_chain() {
        let (tree, diags) = parse("projection model#p { to { return self.name.toString(); } }");
        assert!(diags.is_empty(), "{diags:?}");
        let dump = format!("{tree:#?}");
        assert!(dump.contains("PROJECTION_MEMBER_EXPRESSION"));
        assert!(dump.contains("PROJECTION_CALL_EXPRESSION"));
    }
}
