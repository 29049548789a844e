//! `interface` declarations: `interface Id<T> extends A, B { op-members }`.
//! Members reuse the operation-signature grammar (`operation.rs`), which
//! tolerates an optional leading `op` keyword for exactly this context.

use crate::parser::grammar::{common, expr, list_kinds, operation, template};
use crate::parser::Parser;
use crate::syntax_kind::SyntaxKind;
use crate::syntax_kind::T;

pub(crate) fn parse_interface_statement(p: &mut Parser) {
    let _guard = p.start_node(SyntaxKind::INTERFACE_STATEMENT);
    p.bump(T![interface]);

    common::parse_declaration_name(p);

    template::parse_template_parameters_opt(p);

    if p.at_keyword("extends") {
        p.bump(T![extends]);
        expr::parse_heritage_list(p, SyntaxKind::HERITAGE_LIST);
    }

    let _list = p.start_node(SyntaxKind::INTERFACE_MEMBER_LIST);
    p.parse_list(
        &list_kinds::INTERFACE_MEMBERS,
        common::at_annotation_prelude,
        parse_interface_member_item,
    );
}

fn parse_interface_member_item(p: &mut Parser) {
    common::parse_annotations_prelude(p, None);
    operation::parse_interface_operation_member(p);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(src: &str) -> (crate::parser::SyntaxNode, Vec<crate::diagnostics::Diagnostic>) {
        let mut p = Parser::new(src);
        parse_interface_statement(&mut p);
        let out = p.finish();
        (out.green, out.diagnostics)
    }

    #[test]
    fn members_omit_op_keyword() {
        let (tree, diags) = parse("interface Store { read(id: string): Item; write(item: Item): void; }");
        assert!(diags.is_empty(), "{diags:?}");
        assert_eq!(format!("{tree:#?}").matches("OPERATION_STATEMENT\n").count(), 2);
    }

    #[test]
    fn extends_list_and_explicit_op() {
        let (tree, diags) = parse("interface Extended extends Base, Other { op read(): void; }");
        assert!(diags.is_empty(), "{diags:?}");
        assert!(format!("{tree:#?}").contains("HERITAGE_LIST"));
    }
}
