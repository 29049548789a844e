//! Primary expression grammar (component E, spec §4.4). Precedence, lowest
//! to highest: union (`|`), intersection (`&`), array postfix (`T[]`),
//! primary. Reference expressions (`A.B.C<...>`) and template argument lists
//! live here too since every precedence level eventually bottoms out at one.

use crate::diagnostics::DiagnosticCode;
use crate::lexer::TokenKind;
use crate::parser::grammar::list_kinds;
use crate::parser::Parser;
use crate::syntax_kind::SyntaxKind;
use crate::syntax_kind::T;

/// Entry point for any position that expects a type/value expression:
/// model property types, `alias` right-hand sides, `extends`/`is` clauses,
/// decorator and call arguments, tuple/array elements, enum member values.
pub(crate) fn parse_expr(p: &mut Parser) {
    parse_union_expr(p);
}

fn parse_union_expr(p: &mut Parser) {
    let checkpoint = p.checkpoint_node();
    // A leading `|` is permitted and discarded (spec §4.4.1).
    let had_leading = p.at(TokenKind::Pipe);
    if had_leading {
        p.bump(T![|]);
    }
    parse_intersection_expr(p);
    let mut had_bar = had_leading;
    while p.at(TokenKind::Pipe) {
        had_bar = true;
        p.bump(T![|]);
        parse_intersection_expr(p);
    }
    if had_bar {
        checkpoint.wrap_node(SyntaxKind::UNION_EXPRESSION).finish_node();
    }
}

fn parse_intersection_expr(p: &mut Parser) {
    let checkpoint = p.checkpoint_node();
    let had_leading = p.at(TokenKind::Amp);
    if had_leading {
        p.bump(T![&]);
    }
    parse_array_expr(p);
    let mut had_amp = had_leading;
    while p.at(TokenKind::Amp) {
        had_amp = true;
        p.bump(T![&]);
        parse_array_expr(p);
    }
    if had_amp {
        checkpoint
            .wrap_node(SyntaxKind::INTERSECTION_EXPRESSION)
            .finish_node();
    }
}

fn parse_array_expr(p: &mut Parser) {
    let checkpoint = p.checkpoint_node();
    parse_primary_expr(p);
    while p.at(TokenKind::LBracket) {
        // `T[]`, repeatable: `T[][]` is a two-deep array type.
        let guard = checkpoint.wrap_node(SyntaxKind::ARRAY_EXPRESSION);
        p.bump(T!['[']);
        p.expect(TokenKind::RBracket, T![']'], "]");
        guard.finish_node();
        if !p.at(TokenKind::LBracket) {
            break;
        }
    }
}

pub(crate) fn parse_primary_expr(p: &mut Parser) {
    let guard = p.enter_recursion();
    if guard.limited() {
        p.limit_err(DiagnosticCode::UnexpectedToken {
            found: "<recursion limit>".into(),
        });
        return;
    }

    match p.current_kind() {
        TokenKind::At => {
            // A stray `@` in expression position: parse the decorator list
            // so the tree stays complete, then flag it (spec §4.4).
            let _g = p.start_node(SyntaxKind::DECORATOR_LIST);
            while p.at(TokenKind::At) {
                parse_stray_decorator(p);
            }
            p.err(DiagnosticCode::InvalidDecoratorLocation, false);
        }
        TokenKind::Hash => {
            let _g = p.start_node(SyntaxKind::DIRECTIVE_LIST);
            p.bump(T![#]);
            if p.at(TokenKind::Ident) {
                p.bump(SyntaxKind::IDENT);
            }
            p.err(DiagnosticCode::InvalidDirectiveLocation, false);
        }
        TokenKind::StringLiteral => {
            let _g = p.start_node(SyntaxKind::STRING_LITERAL_EXPRESSION);
            p.bump(SyntaxKind::STRING_LITERAL);
        }
        TokenKind::NumericLiteral => {
            let _g = p.start_node(SyntaxKind::NUMERIC_LITERAL_EXPRESSION);
            p.bump(SyntaxKind::NUMERIC_LITERAL);
        }
        TokenKind::LBrace => parse_model_expr(p),
        TokenKind::LBracket => parse_tuple_expr(p),
        TokenKind::LParen => parse_parenthesized_expr(p),
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
        TokenKind::Ident => parse_reference_expr(p),
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

/// Parses one `@name(...)` without treating it as a misplaced-decorator
/// error itself — the caller wraps the whole run in one diagnostic so a
/// `@a @b x` expression position reports once, not per decorator.
fn parse_stray_decorator(p: &mut Parser) {
    let _guard = p.start_node(SyntaxKind::DECORATOR_EXPRESSION);
    p.bump(T![@]);
    parse_reference_expr(p);
    if p.at(TokenKind::LParen) {
        parse_call_arguments(p);
    }
}

/// `A.B.C<...>` — an identifier or a chain of member accesses, with an
/// optional trailing template argument list (spec §4.4 "Reference
/// expressions"). Member-expression identifiers after `.` are *not*
/// recovered from keywords: `@Outer.model M{}` parses as an incomplete
/// `@Outer.` decorator followed by `model M{}`, never as `@Outer.model`
/// applied to `M{}` (spec §4.4).
pub(crate) fn parse_reference_expr(p: &mut Parser) {
    let checkpoint = p.checkpoint_node();
    parse_name_or_missing(p);
    checkpoint.wrap_node(SyntaxKind::IDENTIFIER_EXPRESSION).finish_node();

    // Re-wrapping the *same* checkpoint on every iteration nests correctly:
    // the second wrap's node contains the first wrap's finished node plus
    // the new `.member`, giving left-associative `MemberExpr(MemberExpr(A,
    // B), C)` for `A.B.C` without needing a fresh checkpoint per dot.
    while p.at(TokenKind::Dot) {
        p.bump(T![.]);
        if p.at(TokenKind::Ident) && !p.at_any_keyword() {
            let _name = p.start_node(SyntaxKind::NAME);
            p.bump(SyntaxKind::IDENT);
        } else {
            p.missing_name();
        }
        checkpoint.wrap_node(SyntaxKind::MEMBER_EXPRESSION).finish_node();
    }

    if p.at(TokenKind::LAngle) {
        parse_template_arguments(p);
        checkpoint.wrap_node(SyntaxKind::TYPE_REFERENCE).finish_node();
    }
}

fn parse_name_or_missing(p: &mut Parser) {
    if p.at(TokenKind::Ident) {
        let _guard = p.start_node(SyntaxKind::NAME);
        p.bump(SyntaxKind::IDENT);
    } else {
        p.missing_name();
    }
}

/// Like [`parse_reference_expr`], but always wraps the result in a
/// `TYPE_REFERENCE` node even without a trailing `<...>` list. Used only by
/// the standalone `parse_standalone_type_reference` entry point, which
/// promises callers a `TypeReferenceNode` unconditionally; every in-grammar
/// caller keeps using `parse_reference_expr` so a bare `Foo` stays an
/// `IDENTIFIER_EXPRESSION`/`MEMBER_EXPRESSION` there.
pub(crate) fn parse_standalone_type_reference(p: &mut Parser) {
    let checkpoint = p.checkpoint_node();
    parse_name_or_missing(p);
    checkpoint.wrap_node(SyntaxKind::IDENTIFIER_EXPRESSION).finish_node();

    while p.at(TokenKind::Dot) {
        p.bump(T![.]);
        if p.at(TokenKind::Ident) && !p.at_any_keyword() {
            let _name = p.start_node(SyntaxKind::NAME);
            p.bump(SyntaxKind::IDENT);
        } else {
            p.missing_name();
        }
        checkpoint.wrap_node(SyntaxKind::MEMBER_EXPRESSION).finish_node();
    }

    if p.at(TokenKind::LAngle) {
        parse_template_arguments(p);
    }
    checkpoint.wrap_node(SyntaxKind::TYPE_REFERENCE).finish_node();
}

pub(crate) fn parse_template_arguments(p: &mut Parser) {
    let _guard = p.start_node(SyntaxKind::TEMPLATE_ARGUMENT_LIST);
    p.parse_list(&list_kinds::TEMPLATE_ARGUMENTS, |_| false, |p| parse_expr(p));
}

pub(crate) fn parse_call_arguments(p: &mut Parser) {
    let _guard = p.start_node(SyntaxKind::CALL_ARGUMENT_LIST);
    p.parse_list(&list_kinds::CALL_ARGUMENTS, |_| false, |p| parse_expr(p));
}

fn parse_model_expr(p: &mut Parser) {
    let _guard = p.start_node(SyntaxKind::MODEL_EXPRESSION);
    super::model::parse_model_property_list(p);
}

fn parse_tuple_expr(p: &mut Parser) {
    let _guard = p.start_node(SyntaxKind::TUPLE_EXPRESSION);
    let _list = p.start_node(SyntaxKind::TUPLE_ELEMENT_LIST);
    p.parse_list(&list_kinds::TUPLE, |_| false, |p| parse_expr(p));
}

fn parse_parenthesized_expr(p: &mut Parser) {
    let _guard = p.start_node(SyntaxKind::PARENTHESIZED_EXPRESSION);
    p.bump(T!['(']);
    parse_expr(p);
    p.expect(TokenKind::RParen, T![')'], ")");
}

/// A comma-separated run of reference expressions with no surrounding
/// delimiters (spec §4.5 `Heritage`): `extends A, B, C`. Not routed through
/// the generic list driver because heritage clauses have no open/close
/// bracket of their own — they end wherever the caller's own lookahead
/// (`{`, `;`, `is`, ...) says to stop.
pub(crate) fn parse_heritage_list(p: &mut Parser, node_kind: SyntaxKind) {
    let _guard = p.start_node(node_kind);
    parse_reference_expr(p);
    while p.at(TokenKind::Comma) {
        p.bump(T![,]);
        parse_reference_expr(p);
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::grammar::expr;
    use crate::parser::Parser;

    fn parse(src: &str) -> crate::parser::SyntaxNode {
        let mut p = Parser::new(src);
        expr::parse_expr(&mut p);
        let out = p.finish();
        out.green
    }

    #[test]
    fn union_expr() {
        let tree = parse("string | int32");
        assert_eq!(format!("{tree:?}"), format!("{tree:?}"));
        assert!(format!("{tree:#?}").contains("UNION_EXPRESSION"));
    }

    #[test]
    fn leading_bar_discarded_but_still_union() {
        let tree = parse("| string | int32");
        assert!(format!("{tree:#?}").contains("UNION_EXPRESSION"));
    }

    #[test]
    fn array_postfix_repeatable() {
        let tree = parse("string[][]");
        let dump = format!("{tree:#?}");
        assert_eq!(dump.matches("ARRAY_EXPRESSION").count(), 2);
    }

    #[test]
    fn template_args_on_reference() {
        let tree = parse("Array<string>");
        assert!(format!("{tree:#?}").contains("TYPE_REFERENCE"));
    }
}
