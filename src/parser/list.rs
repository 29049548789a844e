//! Generic delimited-list driver (component D). Every bracketed or
//! semicolon/comma-separated construct in the grammar — model properties,
//! enum members, operation parameters, template argument lists, and so on —
//! is an instantiation of this one driver (spec §4.5), rather than each
//! having its own hand-written loop.

use crate::diagnostics::DiagnosticCode;
use crate::lexer::TokenKind;
use crate::parser::Parser;
use crate::syntax_kind::SyntaxKind;

/// Static description of one list kind. The fixed list kinds named in
/// spec §4.5 (`OperationParameters`, `ModelProperties`, `TemplateArguments`,
/// ...) are each a `const ListKind` built from this in the owning grammar
/// module.
pub(crate) struct ListKind {
    /// Human-readable delimiter name used in `token-expected` messages.
    pub name: &'static str,
    pub open: Option<(TokenKind, SyntaxKind)>,
    pub close: (TokenKind, SyntaxKind),
    pub delimiter: Option<(TokenKind, SyntaxKind)>,
    pub tolerated_delimiter: Option<(TokenKind, SyntaxKind)>,
    pub allow_empty: bool,
    pub tolerated_delimiter_is_valid: bool,
    pub trailing_delimiter_is_valid: bool,
    /// A statement keyword that should *not* trigger end-of-list recovery
    /// even though it normally would (e.g. `op` inside `InterfaceMembers`).
    pub allowed_statement_keyword: Option<SyntaxKind>,
}

impl Parser<'_> {
    fn at_list_close(&mut self, kind: &ListKind) -> bool {
        self.at(kind.close.0)
    }

    /// Whether the parser sits at a point the list driver should treat as
    /// "nothing more to parse here", ignoring `allowed_statement_keyword`.
    fn at_list_recovery_point(&mut self, kind: &ListKind) -> bool {
        if self.at_eof() || self.at_list_close(kind) {
            return true;
        }
        if self.current_kind() == TokenKind::Ident {
            if let Some(sk) = SyntaxKind::keyword_from_str(self.current_text()) {
                if Some(sk) == kind.allowed_statement_keyword {
                    return false;
                }
                return sk.is_statement_keyword();
            }
        }
        false
    }

    /// Drive one delimited list (spec §4.5). `at_prelude` peeks (without
    /// consuming) whether the next tokens are a doc/directive/decorator
    /// prelude; `parse_item` consumes that prelude (if any, unless this
    /// list kind forbids annotations there) plus exactly one list item.
    pub(crate) fn parse_list(
        &mut self,
        kind: &ListKind,
        mut at_prelude: impl FnMut(&mut Self) -> bool,
        mut parse_item: impl FnMut(&mut Self),
    ) {
        if let Some((open_kind, open_syntax)) = kind.open {
            self.expect(open_kind, open_syntax, kind.name);
        }

        loop {
            let has_prelude = at_prelude(self);

            if kind.allow_empty && !has_prelude && self.at_list_close(kind) {
                break;
            }
            if !has_prelude && self.at_list_recovery_point(kind) {
                break;
            }

            let before = self.stream_position();
            parse_item(self);

            if let Some((delim_kind, delim_syntax)) = kind.delimiter {
                if self.at(delim_kind) {
                    self.bump(delim_syntax);
                    if self.at_list_close(kind) && kind.trailing_delimiter_is_valid {
                        // trailing delimiter, silently accepted
                    } else if self.at_list_close(kind) && !kind.trailing_delimiter_is_valid {
                        self.err_at_current(
                            DiagnosticCode::TrailingToken {
                                token: kind.name.to_string(),
                            },
                            false,
                        );
                    }
                } else if let Some((tol_kind, tol_syntax)) = kind.tolerated_delimiter {
                    if self.at(tol_kind) {
                        if !kind.tolerated_delimiter_is_valid {
                            self.err_at_current(
                                DiagnosticCode::TrailingToken {
                                    token: kind.name.to_string(),
                                },
                                false,
                            );
                        }
                        self.bump(tol_syntax);
                    } else if !self.at_list_close(kind) && !self.at_eof() {
                        let found = self.current_text().to_string();
                        self.err(
                            DiagnosticCode::TokenExpected {
                                expected: kind.name.to_string(),
                                found,
                            },
                            false,
                        );
                    }
                } else if !self.at_list_close(kind) && !self.at_eof() {
                    let found = self.current_text().to_string();
                    self.err(
                        DiagnosticCode::TokenExpected {
                            expected: kind.name.to_string(),
                            found,
                        },
                        false,
                    );
                }
            }

            if self.at_list_close(kind) || self.at_eof() {
                break;
            }

            // Progress guard (spec §4.5 step 8): if nothing advanced the
            // stream this iteration, stop rather than loop forever on
            // malformed input like `model M { ]`.
            if self.stream_position() == before {
                break;
            }
        }

        if self.at_list_close(kind) {
            self.bump(kind.close.1);
        }
    }
}
