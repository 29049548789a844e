//! `import` statements: `import "./relative/path.tsp";`. The target is a
//! string literal module path, not a dotted name — unlike `using`, an
//! import names a file or package, not a symbol already in scope.

use crate::diagnostics::DiagnosticCode;
use crate::lexer::TokenKind;
use crate::parser::Parser;
use crate::syntax_kind::SyntaxKind;
use crate::syntax_kind::T;

pub(crate) fn parse_import_statement(p: &mut Parser) {
    let _guard = p.start_node(SyntaxKind::IMPORT_STATEMENT);
    p.bump(T![import]);
    if p.at(TokenKind::StringLiteral) {
        p.bump(SyntaxKind::STRING_LITERAL);
    } else {
        let found = p.describe_current();
        p.err(
            DiagnosticCode::TokenExpected {
                expected: "string literal".to_string(),
                found,
            },
            false,
        );
    }
    p.expect(TokenKind::Semicolon, T![;], ";");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(src: &str) -> Vec<crate::diagnostics::Diagnostic> {
        let mut p = Parser::new(src);
        parse_import_statement(&mut p);
        p.finish().diagnostics
    }

    #[test]
    fn string_path() {
        assert!(parse(r#"import "./foo.tsp";"#).is_empty());
    }

    #[test]
    fn missing_path_reports() {
        let diags = parse("import ;");
        assert_eq!(diags.len(), 1);
    }
}
