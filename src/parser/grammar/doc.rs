//! Doc-comment parsing (spec §4.1 `scanDoc`, §3 "Doc comment"). A doc
//! comment is re-scanned word-by-word in doc mode over its own full token
//! range (delimiters included) so the decomposed pieces still concatenate
//! back to the original bytes — including the unterminated case, where the
//! range simply runs to EOF instead of stopping two bytes early (spec §8).

use crate::diagnostics::DiagnosticCode;
use crate::lexer::TokenKind;
use crate::parser::Parser;
use crate::syntax_kind::SyntaxKind;

/// Parse one doc comment. Assumes `p` currently sits on a doc-flagged
/// `BlockComment` token.
pub(crate) fn parse_doc(p: &mut Parser) {
    if !p.docs_enabled() {
        p.bump_comment_as_trivia();
        return;
    }

    let range = p.current_range();
    let _guard = p.start_node(SyntaxKind::DOC);
    p.scan_doc_range(range, |p| {
        parse_doc_text_run(p);
        while p.at(TokenKind::At) {
            parse_doc_tag(p);
        }
    });
}

fn parse_doc_text_run(p: &mut Parser) {
    let _guard = p.start_node(SyntaxKind::DOC_TEXT);
    loop {
        match p.current_kind() {
            TokenKind::Eof | TokenKind::At => break,
            TokenKind::Star => p.bump(SyntaxKind::DOC_STAR),
            _ => p.bump(SyntaxKind::DOC_TEXT_TOKEN),
        }
    }
}

/// `@param name description…`, `@template T description…`,
/// `@returns description…`, or an unrecognized `@tag` (spec §3 doc nodes).
fn parse_doc_tag(p: &mut Parser) {
    let checkpoint = p.checkpoint_node();
    p.bump(SyntaxKind::DOC_TAG_AT);

    let tag_name = if p.at(TokenKind::Ident) {
        p.current_text().to_string()
    } else {
        String::new()
    };
    let kind = match tag_name.as_str() {
        "param" => SyntaxKind::DOC_PARAM_TAG,
        "template" => SyntaxKind::DOC_TEMPLATE_TAG,
        "returns" => SyntaxKind::DOC_RETURNS_TAG,
        _ => SyntaxKind::DOC_UNKNOWN_TAG,
    };
    let _guard = checkpoint.wrap_node(kind);

    if p.at(TokenKind::Ident) {
        p.bump(SyntaxKind::DOC_TEXT_TOKEN);
    } else {
        p.warn(DiagnosticCode::DocInvalidIdentifier);
    }

    if matches!(kind, SyntaxKind::DOC_PARAM_TAG | SyntaxKind::DOC_TEMPLATE_TAG) {
        if p.at(TokenKind::Ident) {
            let _name_guard = p.start_node(SyntaxKind::NAME);
            p.bump(SyntaxKind::IDENT);
        } else {
            p.warn(DiagnosticCode::DocInvalidIdentifier);
        }
    }

    parse_doc_text_run(p);
}
