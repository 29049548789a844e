//! Position- and error-aware queries over a finished tree (component G).
//! Everything here is read-only: rowan's red tree already gives every node a
//! non-owning parent pointer, so the usual worry about "cyclic references"
//! needing a dedicated parent-linking post-pass doesn't apply —
//! `SyntaxNode::parent`/`ancestors` come for free.

use std::collections::HashSet;

use crate::cst::{AstNode, Expr};
use crate::parser::{SyntaxElement, SyntaxNode};
use crate::source::TextSize;
use crate::syntax_kind::SyntaxKind;

/// Structural child iteration covering every node-or-token kind the tree can
/// contain. `assert_visitable` is never meant to do anything at runtime; its
/// job is to fail to compile if a `SyntaxKind` variant is ever added without
/// a matching arm here, so this walk can't silently go stale.
pub fn visit_children(node: &SyntaxNode, mut cb: impl FnMut(SyntaxElement)) {
    for element in node.children_with_tokens() {
        assert_visitable(element.kind());
        cb(element);
    }
}

fn assert_visitable(kind: SyntaxKind) {
    match kind {
        SyntaxKind::WHITESPACE
        | SyntaxKind::NEWLINE
        | SyntaxKind::LINE_COMMENT
        | SyntaxKind::BLOCK_COMMENT
        | SyntaxKind::EOF
        | SyntaxKind::ERROR_TOKEN
        | SyntaxKind::IDENT
        | SyntaxKind::STRING_LITERAL
        | SyntaxKind::NUMERIC_LITERAL
        | SyntaxKind::DOC_STAR
        | SyntaxKind::DOC_TAG_AT
        | SyntaxKind::DOC_TEXT_TOKEN
        | SyntaxKind::L_BRACE
        | SyntaxKind::R_BRACE
        | SyntaxKind::L_PAREN
        | SyntaxKind::R_PAREN
        | SyntaxKind::L_BRACKET
        | SyntaxKind::R_BRACKET
        | SyntaxKind::L_ANGLE
        | SyntaxKind::R_ANGLE
        | SyntaxKind::COLON
        | SyntaxKind::COLON_COLON
        | SyntaxKind::SEMICOLON
        | SyntaxKind::COMMA
        | SyntaxKind::EQ
        | SyntaxKind::DOT
        | SyntaxKind::QUESTION
        | SyntaxKind::PIPE
        | SyntaxKind::AMP
        | SyntaxKind::AMP_AMP
        | SyntaxKind::PIPE_PIPE
        | SyntaxKind::AT
        | SyntaxKind::AT_AT
        | SyntaxKind::HASH
        | SyntaxKind::BANG
        | SyntaxKind::BANG_EQ
        | SyntaxKind::EQ_EQ
        | SyntaxKind::LT_EQ
        | SyntaxKind::GT_EQ
        | SyntaxKind::PLUS
        | SyntaxKind::MINUS
        | SyntaxKind::STAR
        | SyntaxKind::SLASH
        | SyntaxKind::ELLIPSIS
        | SyntaxKind::FAT_ARROW
        | SyntaxKind::MODEL_KW
        | SyntaxKind::SCALAR_KW
        | SyntaxKind::NAMESPACE_KW
        | SyntaxKind::INTERFACE_KW
        | SyntaxKind::UNION_KW
        | SyntaxKind::OP_KW
        | SyntaxKind::ENUM_KW
        | SyntaxKind::ALIAS_KW
        | SyntaxKind::USING_KW
        | SyntaxKind::IMPORT_KW
        | SyntaxKind::EXTENDS_KW
        | SyntaxKind::IS_KW
        | SyntaxKind::EXTERN_KW
        | SyntaxKind::FN_KW
        | SyntaxKind::DEC_KW
        | SyntaxKind::PROJECTION_KW
        | SyntaxKind::TO_KW
        | SyntaxKind::FROM_KW
        | SyntaxKind::IF_KW
        | SyntaxKind::ELSE_KW
        | SyntaxKind::RETURN_KW
        | SyntaxKind::TRUE_KW
        | SyntaxKind::FALSE_KW
        | SyntaxKind::VOID_KW
        | SyntaxKind::NEVER_KW
        | SyntaxKind::UNKNOWN_KW
        | SyntaxKind::DECORATOR_LIST
        | SyntaxKind::DECORATOR_EXPRESSION
        | SyntaxKind::AUGMENT_DECORATOR_STATEMENT
        | SyntaxKind::DIRECTIVE_LIST
        | SyntaxKind::DIRECTIVE_EXPRESSION
        | SyntaxKind::DOC_LIST
        | SyntaxKind::MODIFIER_LIST
        | SyntaxKind::DOC
        | SyntaxKind::DOC_TEXT
        | SyntaxKind::DOC_PARAM_TAG
        | SyntaxKind::DOC_TEMPLATE_TAG
        | SyntaxKind::DOC_RETURNS_TAG
        | SyntaxKind::DOC_UNKNOWN_TAG
        | SyntaxKind::NAME
        | SyntaxKind::DOTTED_NAME
        | SyntaxKind::TEMPLATE_PARAMETER_LIST
        | SyntaxKind::TEMPLATE_PARAMETER
        | SyntaxKind::TEMPLATE_ARGUMENT_LIST
        | SyntaxKind::HERITAGE_LIST
        | SyntaxKind::MODEL_PROPERTY_LIST
        | SyntaxKind::ENUM_MEMBER_LIST
        | SyntaxKind::UNION_VARIANT_LIST
        | SyntaxKind::INTERFACE_MEMBER_LIST
        | SyntaxKind::OPERATION_PARAMETER_LIST
        | SyntaxKind::FUNCTION_PARAMETER_LIST
        | SyntaxKind::CALL_ARGUMENT_LIST
        | SyntaxKind::TUPLE_ELEMENT_LIST
        | SyntaxKind::IDENTIFIER_EXPRESSION
        | SyntaxKind::MEMBER_EXPRESSION
        | SyntaxKind::TYPE_REFERENCE
        | SyntaxKind::UNION_EXPRESSION
        | SyntaxKind::INTERSECTION_EXPRESSION
        | SyntaxKind::ARRAY_EXPRESSION
        | SyntaxKind::TUPLE_EXPRESSION
        | SyntaxKind::MODEL_EXPRESSION
        | SyntaxKind::PARENTHESIZED_EXPRESSION
        | SyntaxKind::STRING_LITERAL_EXPRESSION
        | SyntaxKind::NUMERIC_LITERAL_EXPRESSION
        | SyntaxKind::BOOLEAN_LITERAL_EXPRESSION
        | SyntaxKind::VOID_EXPRESSION
        | SyntaxKind::NEVER_EXPRESSION
        | SyntaxKind::UNKNOWN_EXPRESSION
        | SyntaxKind::MODEL_PROPERTY
        | SyntaxKind::MODEL_SPREAD_PROPERTY
        | SyntaxKind::ENUM_MEMBER
        | SyntaxKind::ENUM_SPREAD_MEMBER
        | SyntaxKind::UNION_VARIANT
        | SyntaxKind::OPERATION_SIGNATURE_DECLARATION
        | SyntaxKind::OPERATION_SIGNATURE_REFERENCE
        | SyntaxKind::FUNCTION_PARAMETER
        | SyntaxKind::NAMESPACE_STATEMENT
        | SyntaxKind::MODEL_STATEMENT
        | SyntaxKind::SCALAR_STATEMENT
        | SyntaxKind::INTERFACE_STATEMENT
        | SyntaxKind::UNION_STATEMENT
        | SyntaxKind::OPERATION_STATEMENT
        | SyntaxKind::ENUM_STATEMENT
        | SyntaxKind::ALIAS_STATEMENT
        | SyntaxKind::USING_STATEMENT
        | SyntaxKind::IMPORT_STATEMENT
        | SyntaxKind::DECORATOR_DECLARATION_STATEMENT
        | SyntaxKind::FUNCTION_DECLARATION_STATEMENT
        | SyntaxKind::EMPTY_STATEMENT
        | SyntaxKind::INVALID_STATEMENT
        | SyntaxKind::PROJECTION_STATEMENT
        | SyntaxKind::PROJECTION
        | SyntaxKind::PROJECTION_MODEL_SELECTOR
        | SyntaxKind::PROJECTION_OPERATION_SELECTOR
        | SyntaxKind::PROJECTION_INTERFACE_SELECTOR
        | SyntaxKind::PROJECTION_UNION_SELECTOR
        | SyntaxKind::PROJECTION_ENUM_SELECTOR
        | SyntaxKind::PROJECTION_IDENTIFIER_SELECTOR
        | SyntaxKind::PROJECTION_PARAMETER_LIST
        | SyntaxKind::PROJECTION_PARAMETER
        | SyntaxKind::PROJECTION_BLOCK_EXPRESSION
        | SyntaxKind::PROJECTION_EXPRESSION_STATEMENT
        | SyntaxKind::PROJECTION_IF_EXPRESSION
        | SyntaxKind::PROJECTION_LAMBDA_EXPRESSION
        | SyntaxKind::PROJECTION_LAMBDA_PARAMETER
        | SyntaxKind::PROJECTION_TUPLE_EXPRESSION
        | SyntaxKind::PROJECTION_MODEL_EXPRESSION
        | SyntaxKind::PROJECTION_CALL_EXPRESSION
        | SyntaxKind::PROJECTION_MEMBER_EXPRESSION
        | SyntaxKind::PROJECTION_DECORATOR_REFERENCE_EXPRESSION
        | SyntaxKind::PROJECTION_RETURN_EXPRESSION
        | SyntaxKind::PROJECTION_LOGICAL_EXPRESSION
        | SyntaxKind::PROJECTION_RELATIONAL_EXPRESSION
        | SyntaxKind::PROJECTION_EQUALITY_EXPRESSION
        | SyntaxKind::PROJECTION_ARITHMETIC_EXPRESSION
        | SyntaxKind::PROJECTION_UNARY_EXPRESSION
        | SyntaxKind::PROJECTION_PARENTHESIZED_EXPRESSION
        | SyntaxKind::SCRIPT => {}
        SyntaxKind::__LAST => unreachable!("__LAST is a bound marker, never a real tree node"),
    }
}

/// Returns the deepest node-or-token whose range contains `position`,
/// preferring children over the node itself — including token children
/// (`NAME` wraps a single `IDENT` token with no child nodes, so a `children()`
/// walk could never descend past it; `children_with_tokens()` is required
/// to actually reach leaves). When `filter` is given and matches a node
/// before any child does, that ancestor is returned immediately instead of
/// descending further; tokens are never passed to `filter` since it takes a
/// `&SyntaxNode`.
pub fn get_node_at_position(
    root: &SyntaxNode,
    position: TextSize,
    filter: Option<&dyn Fn(&SyntaxNode) -> bool>,
) -> SyntaxElement {
    let mut current: SyntaxElement = root.clone().into();
    loop {
        if let Some(node) = current.as_node() {
            if let Some(f) = filter {
                if f(node) {
                    return current;
                }
            }
            match node.children_with_tokens().find(|c| c.text_range().contains_inclusive(position)) {
                Some(child) => current = child,
                None => return current,
            }
        } else {
            return current;
        }
    }
}

/// True if `node` itself was the innermost node open when a diagnostic fired,
/// or any descendant was. `node_errors` is the `(TextSize, SyntaxKind)` side
/// table `Parser::finish` produces (see DESIGN.md, "Node flags on an
/// immutable tree") — a direct set lookup over `descendants()` stands in for
/// a per-node memoized flag, since rowan's green tree has no room for
/// mutable bits to memoize into.
pub fn has_parse_error(node: &SyntaxNode, node_errors: &HashSet<(TextSize, SyntaxKind)>) -> bool {
    node.descendants()
        .any(|d| node_errors.contains(&(d.text_range().start(), d.kind())))
}

/// What an identifier reference sits inside of, classified by walking up
/// past the member-expression chain it's part of and inspecting the first
/// ancestor outside that chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierContext {
    TypeReference,
    Decorator,
    FunctionCall,
    Using,
    Declaration,
    Other,
}

/// `id` is the innermost `IDENTIFIER_EXPRESSION`/`NAME` in a (possibly
/// dotted) reference. Walks past `MEMBER_EXPRESSION`/`TYPE_REFERENCE`
/// wrapper nodes — those represent the same logical reference, just with
/// more of `A.B.C<T>` attached — then classifies by what holds the result.
pub fn get_identifier_context(id: &SyntaxNode) -> IdentifierContext {
    let mut current = id.clone();
    while matches!(
        current.parent().map(|p| p.kind()),
        Some(SyntaxKind::MEMBER_EXPRESSION) | Some(SyntaxKind::TYPE_REFERENCE)
    ) {
        current = current.parent().expect("checked by the match above");
    }

    let Some(parent) = current.parent() else {
        return IdentifierContext::Other;
    };

    match parent.kind() {
        SyntaxKind::DECORATOR_EXPRESSION | SyntaxKind::AUGMENT_DECORATOR_STATEMENT => IdentifierContext::Decorator,
        SyntaxKind::PROJECTION_CALL_EXPRESSION | SyntaxKind::PROJECTION_DECORATOR_REFERENCE_EXPRESSION => {
            IdentifierContext::FunctionCall
        }
        SyntaxKind::USING_STATEMENT | SyntaxKind::DOTTED_NAME => IdentifierContext::Using,
        SyntaxKind::NAME if is_declaration_name_slot(&parent) => IdentifierContext::Declaration,
        SyntaxKind::ARRAY_EXPRESSION
        | SyntaxKind::UNION_EXPRESSION
        | SyntaxKind::INTERSECTION_EXPRESSION
        | SyntaxKind::MODEL_PROPERTY
        | SyntaxKind::TEMPLATE_PARAMETER
        | SyntaxKind::FUNCTION_PARAMETER
        | SyntaxKind::HERITAGE_LIST
        | SyntaxKind::MODEL_STATEMENT
        | SyntaxKind::SCALAR_STATEMENT
        | SyntaxKind::OPERATION_SIGNATURE_DECLARATION
        | SyntaxKind::PROJECTION_IDENTIFIER_SELECTOR
        | SyntaxKind::UNION_VARIANT => IdentifierContext::TypeReference,
        _ => IdentifierContext::Other,
    }
}

/// A `NAME` node is a declaration's own name (as opposed to a reference to
/// someone else's) when its parent is a statement/member kind whose `name()`
/// accessor this `NAME` would be the target of.
fn is_declaration_name_slot(name_node: &SyntaxNode) -> bool {
    let Some(grandparent) = name_node.parent() else { return false };
    matches!(
        grandparent.kind(),
        SyntaxKind::NAMESPACE_STATEMENT
            | SyntaxKind::MODEL_STATEMENT
            | SyntaxKind::SCALAR_STATEMENT
            | SyntaxKind::INTERFACE_STATEMENT
            | SyntaxKind::UNION_STATEMENT
            | SyntaxKind::OPERATION_STATEMENT
            | SyntaxKind::ENUM_STATEMENT
            | SyntaxKind::ALIAS_STATEMENT
            | SyntaxKind::DECORATOR_DECLARATION_STATEMENT
            | SyntaxKind::FUNCTION_DECLARATION_STATEMENT
            | SyntaxKind::TEMPLATE_PARAMETER
            | SyntaxKind::MODEL_PROPERTY
            | SyntaxKind::FUNCTION_PARAMETER
            | SyntaxKind::ENUM_MEMBER
            | SyntaxKind::UNION_VARIANT
            | SyntaxKind::PROJECTION_STATEMENT
            | SyntaxKind::PROJECTION_PARAMETER
            | SyntaxKind::PROJECTION_LAMBDA_PARAMETER
    )
}

pub fn is_import_statement(node: &SyntaxNode) -> bool {
    node.kind() == SyntaxKind::IMPORT_STATEMENT
}

/// The nearest strict ancestor satisfying `filter`, walking up via rowan's
/// built-in (non-owning) parent pointers.
pub fn get_first_ancestor(node: &SyntaxNode, filter: impl Fn(&SyntaxNode) -> bool) -> Option<SyntaxNode> {
    node.ancestors().skip(1).find(filter)
}

/// Resolves an `Expr` down to the plain identifier it names, if it is one —
/// used by callers of `get_identifier_context` to go from e.g. a
/// `MemberExpression`'s final segment back to the `Name` node being queried.
pub fn innermost_name(expr: &Expr) -> Option<crate::cst::Name> {
    match expr {
        Expr::Identifier(it) => it.name(),
        Expr::Member(it) => it.name(),
        Expr::TypeReference(it) => match it.base()? {
            Expr::Identifier(inner) => inner.name(),
            Expr::Member(inner) => inner.name(),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::grammar::statement::parse_script_body;
    use crate::parser::Parser;

    fn parse_script(src: &str) -> SyntaxNode {
        let mut p = Parser::new(src);
        let _guard = p.start_node(SyntaxKind::SCRIPT);
        parse_script_body(&mut p);
        drop(_guard);
        p.finish().green
    }

    #[test]
    fn node_at_position_prefers_deepest_child() {
        let tree = parse_script("model M { x: string }");
        let pos = TextSize::from(6); // inside "M"
        let found = get_node_at_position(&tree, pos, None);
        assert_eq!(found.kind(), SyntaxKind::IDENT);
        assert!(found.as_token().is_some());
    }

    #[test]
    fn using_context_is_detected() {
        let tree = parse_script("using A.B;");
        let dotted = tree
            .descendants()
            .find(|n| n.kind() == SyntaxKind::DOTTED_NAME)
            .unwrap();
        let first_name = dotted.children().find(|n| n.kind() == SyntaxKind::NAME).unwrap();
        assert_eq!(get_identifier_context(&first_name), IdentifierContext::Using);
    }

    #[test]
    fn decorator_context_is_detected() {
        let tree = parse_script("@foo model M {}");
        let decorator_expr = tree
            .descendants()
            .find(|n| n.kind() == SyntaxKind::DECORATOR_EXPRESSION)
            .unwrap();
        let ident_expr = decorator_expr
            .descendants()
            .find(|n| n.kind() == SyntaxKind::IDENTIFIER_EXPRESSION)
            .unwrap();
        assert_eq!(get_identifier_context(&ident_expr), IdentifierContext::Decorator);
    }

    #[test]
    fn has_parse_error_finds_descendant_flag() {
        let src = "model { x: string }"; // missing model name
        let mut p = Parser::new(src);
        let _guard = p.start_node(SyntaxKind::SCRIPT);
        parse_script_body(&mut p);
        drop(_guard);
        let out = p.finish();
        assert!(!out.diagnostics.is_empty());
        assert!(has_parse_error(&out.green, &out.node_errors));
    }
}
