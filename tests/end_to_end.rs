//! End-to-end scenarios straight off the grammar: each test feeds a literal
//! source string through the public [`tsp_parser::Parser`] and checks the
//! observable shape of the resulting tree, the way a consumer (formatter,
//! language server) would see it.

use tsp_parser::cst::{AstNode, Expr, OperationSignature, Statement};
use tsp_parser::{DiagnosticCode, Parser};

#[test]
fn model_with_optional_property_and_default() {
    let tree = Parser::new("model M { x: string; y?: int32 = 3 }").parse();
    assert!(tree.diagnostics().is_empty(), "{:?}", tree.diagnostics());

    let script = tree.script();
    let statements: Vec<_> = script.statements().collect();
    assert_eq!(statements.len(), 1);

    let Statement::Model(model) = &statements[0] else {
        panic!("expected a model statement");
    };
    assert_eq!(model.name().unwrap().ident_token().unwrap().text(), "M");

    let properties: Vec<_> = model.property_list().unwrap().properties().collect();
    assert_eq!(properties.len(), 2);
}

#[test]
fn default_without_optional_is_flagged_but_tree_survives() {
    let tree = Parser::new("model M { x: string = 3 }").parse();
    assert_eq!(tree.diagnostics().len(), 1);
    assert!(matches!(tree.diagnostics()[0].code, DiagnosticCode::DefaultOptional));

    // The default expression is still in the tree despite the diagnostic.
    let text = format!("{tree:?}");
    assert!(text.contains("NUMERIC_LITERAL"));
}

#[test]
fn dotted_blockless_namespace_nests_three_deep() {
    let tree = Parser::new("namespace A.B.C;").parse();
    assert!(tree.diagnostics().is_empty(), "{:?}", tree.diagnostics());

    let script = tree.script();
    let Statement::Namespace(outer) = script.statements().next().unwrap() else {
        panic!("expected a namespace statement");
    };
    assert!(outer.is_blockless());

    let middle = outer.statements().next().unwrap();
    let Statement::Namespace(middle) = middle else {
        panic!("expected nested namespace");
    };
    let inner = middle.statements().next().unwrap();
    let Statement::Namespace(inner) = inner else {
        panic!("expected innermost namespace");
    };
    assert!(inner.statements().next().is_none());
}

#[test]
fn operation_declaration_vs_reference() {
    let tree = Parser::new("op foo(a: string, b?: int32): Result;").parse();
    assert!(tree.diagnostics().is_empty(), "{:?}", tree.diagnostics());

    let script = tree.script();
    let Statement::Operation(op) = script.statements().next().unwrap() else {
        panic!("expected an operation statement");
    };
    let OperationSignature::Declaration(decl) = op.signature().unwrap() else {
        panic!("expected an operation signature declaration");
    };
    let params: Vec<_> = decl.parameters().unwrap().parameters().collect();
    assert_eq!(params.len(), 2);
    assert!(params[1].question_token().is_some());

    let tree = Parser::new("op foo is Bar;").parse();
    assert!(tree.diagnostics().is_empty(), "{:?}", tree.diagnostics());
    let script = tree.script();
    let Statement::Operation(op) = script.statements().next().unwrap() else {
        panic!("expected an operation statement");
    };
    let OperationSignature::Reference(reference) = op.signature().unwrap() else {
        panic!("expected an operation signature reference");
    };
    let Expr::Identifier(base) = reference.reference().unwrap() else {
        panic!("expected an identifier reference");
    };
    assert_eq!(base.name().unwrap().ident_token().unwrap().text(), "Bar");
}

#[test]
fn interface_missing_delimiter_recovers_with_one_diagnostic() {
    let tree = Parser::new("interface I { op a(): void op b(): void }").parse();
    assert_eq!(tree.diagnostics().len(), 1);

    let script = tree.script();
    let Statement::Interface(iface) = script.statements().next().unwrap() else {
        panic!("expected an interface statement");
    };
    let members: Vec<_> = iface.member_list().unwrap().members().collect();
    assert_eq!(members.len(), 2);
}

#[test]
fn projection_with_to_and_from() {
    let tree = Parser::new("projection model#p { to { return self; } from { return self; } }").parse();
    assert!(tree.diagnostics().is_empty(), "{:?}", tree.diagnostics());

    let script = tree.script();
    let Statement::Projection(proj) = script.statements().next().unwrap() else {
        panic!("expected a projection statement");
    };
    assert_eq!(proj.name().unwrap().ident_token().unwrap().text(), "p");
    let directions: Vec<_> = proj.directions().collect();
    assert_eq!(directions.len(), 2);
    assert!(directions.iter().any(|d| d.is_to()));
    assert!(directions.iter().any(|d| !d.is_to()));
}

#[test]
fn duplicate_projection_direction_is_flagged() {
    let tree = Parser::new("projection model#p { to { return self; } to { return self; } }").parse();
    assert_eq!(tree.diagnostics().len(), 1);
    assert!(matches!(tree.diagnostics()[0].code, DiagnosticCode::DuplicateSymbol { .. }));
}

#[test]
fn empty_input_yields_empty_script_with_no_diagnostics() {
    let tree = Parser::new("").parse();
    assert!(tree.diagnostics().is_empty());
    assert_eq!(tree.script().statements().count(), 0);
    assert!(tree.printable());
}

#[test]
fn progress_guard_terminates_on_pathological_input() {
    // `model M { ]` — a stray `]` where a property or `}` was expected.
    // The mere fact this call returns proves the list driver's progress
    // guard broke out of the property-item loop instead of spinning on a
    // token it can't consume; the stray `]` then falls out to a top-level
    // `INVALID_STATEMENT` recovery, so a handful of diagnostics is
    // expected, not an unbounded pile.
    let tree = Parser::new("model M { ]").parse();
    assert!(!tree.diagnostics().is_empty());
    assert!(tree.diagnostics().len() <= 6, "{:?}", tree.diagnostics());
}

#[test]
fn trailing_comma_is_silent_in_model_properties_but_flagged_in_template_arguments() {
    let tree = Parser::new("model M { x: string, }").parse();
    assert!(tree.diagnostics().is_empty(), "{:?}", tree.diagnostics());

    let tree = Parser::new("alias A = Foo<string,>;").parse();
    assert!(tree
        .diagnostics()
        .iter()
        .any(|d| matches!(d.code, DiagnosticCode::TrailingToken { .. })));
}

#[test]
fn parse_diagnostics_never_duplicate_a_position() {
    let tree = Parser::new("model %%% M @ { ] } )))").parse();
    let mut seen = std::collections::HashSet::new();
    for diagnostic in tree.diagnostics() {
        assert!(seen.insert(diagnostic.range), "duplicate diagnostic at {:?}", diagnostic.range);
    }
}
