//! Parser core (component E's host): token-stream bookkeeping, tree
//! construction, mode switching between syntax and doc scanning, and
//! diagnostic emission. The actual grammar lives in `grammar/*`; this module
//! only provides the primitives every grammar function is built out of,
//! mirroring how apollo-parser splits `parser/mod.rs` from `parser/grammar/*`.

mod language;
mod tree_builder;

pub(crate) mod list;

pub(crate) mod grammar;

use std::cell::RefCell;
use std::collections::HashMap;
use std::collections::HashSet;
use std::rc::Rc;

pub use language::{SyntaxElement, SyntaxElementChildren, SyntaxNode, SyntaxNodeChildren, SyntaxToken};

use crate::diagnostics::{Diagnostic, DiagnosticCode, DiagnosticsSink, Severity};
use crate::lexer::{Lexer, Token, TokenFlags, TokenKind};
use crate::limit::{LimitTracker, RecursionGuard};
use crate::source::{TextRange, TextSize};
use crate::syntax_kind::SyntaxKind;
use tree_builder::TreeBuilder;

pub(crate) const DEFAULT_RECURSION_LIMIT: usize = 500;

/// Options recognized by `parse` (spec §4.2, §6).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Collect comment trivia into the script's `comments` list.
    pub comments: bool,
    /// Parse doc comments (`/** ... */`) into structured `Doc` nodes.
    pub docs: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            comments: false,
            docs: true,
        }
    }
}

/// Which scanning mode the lexer is currently in. Doc mode is only ever
/// entered for the duration of re-scanning a single doc comment's interior
/// (spec §9 "scoped mode switching"); everything else uses syntax mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Syntax,
    Doc,
}

/// The finished product of a parse: the green tree plus every side table the
/// CST layer needs to answer questions rowan's immutable tree can't answer
/// on its own (error flags, synthesized-identifier text). See DESIGN.md,
/// "Node flags on an immutable tree", for why these live beside the tree
/// rather than on it.
pub(crate) struct ParseOutput {
    pub(crate) green: SyntaxNode,
    pub(crate) diagnostics: Vec<Diagnostic>,
    pub(crate) printable: bool,
    pub(crate) options: ParseOptions,
    pub(crate) comments: Vec<(TextRange, String)>,
    pub(crate) node_errors: Rc<HashSet<(TextSize, SyntaxKind)>>,
    pub(crate) synthetic_identifiers: Rc<HashMap<TextSize, u32>>,
    pub(crate) recursion_high: usize,
}

pub(crate) struct Parser<'input> {
    /// The full original buffer, kept around so doc-comment sub-scans can be
    /// constructed at arbitrary absolute ranges (see `scan_doc_range`).
    source: &'input str,
    lexer: Lexer<'input>,
    current_token: Option<Token<'input>>,
    builder: Rc<RefCell<TreeBuilder>>,
    /// Whitespace/comment/newline tokens queued to be attached to the tree
    /// as trivia before the next real token.
    ignored: Vec<Token<'input>>,
    diagnostics: DiagnosticsSink,
    recursion_limit: LimitTracker,
    /// Once a recursion-limit error fires, further diagnostics are
    /// discarded — they're artifacts of the early bailout, not real errors.
    accept_errors: bool,
    mode: Mode,
    /// End of the previously consumed token; missing-punctuation diagnostics
    /// are anchored here rather than at the (possibly far-away) next token
    /// (spec §7 policy 5).
    previous_token_end: TextSize,
    /// `Newline` is ordinarily trivia; directive argument lists turn it
    /// significant so a directive's arguments don't run past end of line.
    new_line_is_trivia: bool,
    missing_identifier_counter: u32,
    options: ParseOptions,
    comments: Vec<(TextRange, String)>,
    node_errors: HashSet<(TextSize, SyntaxKind)>,
    synthetic_identifiers: HashMap<TextSize, u32>,
    open_nodes: Rc<RefCell<Vec<(TextSize, SyntaxKind)>>>,
}

impl<'input> Parser<'input> {
    pub(crate) fn new(source: &'input str) -> Self {
        Self {
            source,
            lexer: Lexer::new(source),
            current_token: None,
            builder: Rc::new(RefCell::new(TreeBuilder::new())),
            ignored: Vec::new(),
            diagnostics: DiagnosticsSink::new(),
            recursion_limit: LimitTracker::new(DEFAULT_RECURSION_LIMIT),
            accept_errors: true,
            mode: Mode::Syntax,
            previous_token_end: TextSize::from(0),
            new_line_is_trivia: true,
            missing_identifier_counter: 0,
            options: ParseOptions::default(),
            comments: Vec::new(),
            node_errors: HashSet::new(),
            synthetic_identifiers: HashMap::new(),
            open_nodes: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub(crate) fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    pub(crate) fn with_recursion_limit(mut self, limit: usize) -> Self {
        self.recursion_limit = LimitTracker::new(limit);
        self
    }

    pub(crate) fn finish(mut self) -> ParseOutput {
        self.flush_comments_if_any_remaining();
        let printable = self.diagnostics.printable();
        let green = Rc::try_unwrap(self.builder)
            .expect("no NodeGuard/Checkpoint should outlive parsing")
            .into_inner()
            .finish();
        ParseOutput {
            green,
            diagnostics: self.diagnostics.into_diagnostics(),
            printable,
            options: self.options,
            comments: self.comments,
            node_errors: Rc::new(self.node_errors),
            synthetic_identifiers: Rc::new(self.synthetic_identifiers),
            recursion_high: self.recursion_limit.high,
        }
    }

    fn flush_comments_if_any_remaining(&mut self) {
        // Comments are recorded as they're skipped (see `skip_ignored`); no
        // end-of-parse work is needed, this exists so `finish` has a single
        // obvious place to extend if that ever changes.
    }

    // --- token stream -----------------------------------------------------

    fn next_raw_token(&mut self) -> Token<'input> {
        match self.mode {
            Mode::Syntax => self.lexer.scan(),
            Mode::Doc => self.lexer.scan_doc(),
        }
    }

    pub(crate) fn peek_token(&mut self) -> Option<&Token<'input>> {
        if self.current_token.is_none() {
            let token = self.next_raw_token();
            self.current_token = Some(token);
        }
        self.current_token.as_ref()
    }

    pub(crate) fn current_kind(&mut self) -> TokenKind {
        self.peek_token().map(|t| t.kind).unwrap_or(TokenKind::Eof)
    }

    pub(crate) fn current_text(&mut self) -> &'input str {
        self.peek_token().map(|t| t.text).unwrap_or("")
    }

    pub(crate) fn current_flags(&mut self) -> TokenFlags {
        self.peek_token().map(|t| t.flags).unwrap_or(TokenFlags::NONE)
    }

    pub(crate) fn current_range(&mut self) -> TextRange {
        self.peek_token()
            .map(|t| t.range)
            .unwrap_or(TextRange::new(self.previous_token_end, self.previous_token_end))
    }

    pub(crate) fn at(&mut self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    pub(crate) fn at_eof(&mut self) -> bool {
        self.at(TokenKind::Eof)
    }

    /// A cheap marker of "how far the stream has advanced", used by list
    /// drivers' progress guard (spec §4.5 step 8): if this is unchanged
    /// across a whole loop iteration, the iteration consumed nothing.
    pub(crate) fn stream_position(&mut self) -> TextSize {
        self.current_range().start()
    }

    /// True when the current token is an identifier whose text equals `kw`
    /// (spec §4.1: keyword recognition is the grammar's job, not the
    /// scanner's).
    pub(crate) fn at_keyword(&mut self, kw: &str) -> bool {
        self.current_kind() == TokenKind::Ident && self.current_text() == kw
    }

    pub(crate) fn at_any_keyword(&mut self) -> bool {
        self.current_kind() == TokenKind::Ident
            && SyntaxKind::keyword_from_str(self.current_text()).is_some()
    }

    /// Peeks the token kind that follows the current one, skipping trivia,
    /// without consuming anything. The scanner contract (spec §4.1) is
    /// deliberately one-token lookahead, and every other grammar production
    /// respects that; this is the one narrow exception, needed to
    /// disambiguate a union variant's `name: Type` form from a bare `Type`
    /// that happens to start with an identifier (spec §4.3 "Union"). It
    /// clones the lexer rather than mutating the real one, so it can never
    /// desynchronize the parser's actual position.
    pub(crate) fn peek_second_significant_kind(&mut self) -> TokenKind {
        self.peek_token();
        let mut lexer = self.lexer.clone();
        loop {
            let tok = match self.mode {
                Mode::Syntax => lexer.scan(),
                Mode::Doc => lexer.scan_doc(),
            };
            if !tok.kind.is_trivia() {
                return tok.kind;
            }
        }
    }

    /// Scans ahead from the current `(` past its matching `)` (tracking
    /// nesting depth) and reports whether the next significant token beyond
    /// it is `want`, without consuming anything. Used to tell a projection
    /// lambda's parameter list apart from a parenthesized expression before
    /// committing to either parse (spec §4.6 "parenthesized-or-lambda") —
    /// the one case where the scanner's usual one-token lookahead isn't
    /// enough, since an arbitrary-length argument list can sit ahead of the
    /// deciding `=>`. Clones the lexer so the real parser position never
    /// moves.
    pub(crate) fn peek_past_parens_then(&mut self, want: TokenKind) -> bool {
        self.peek_token();
        let mut lexer = self.lexer.clone();
        let mut depth: i32 = 1;
        loop {
            let tok = match self.mode {
                Mode::Syntax => lexer.scan(),
                Mode::Doc => lexer.scan_doc(),
            };
            if tok.kind.is_trivia() {
                continue;
            }
            match tok.kind {
                TokenKind::Eof => return false,
                TokenKind::LParen => depth += 1,
                TokenKind::RParen => {
                    depth -= 1;
                    if depth == 0 {
                        loop {
                            let next = match self.mode {
                                Mode::Syntax => lexer.scan(),
                                Mode::Doc => lexer.scan_doc(),
                            };
                            if !next.kind.is_trivia() {
                                return next.kind == want;
                            }
                        }
                    }
                }
                _ => {}
            }
        }
    }

    /// True when the current token begins a new statement (used by error
    /// recovery re-synchronization, spec §4.3/§4.5).
    pub(crate) fn at_statement_recovery_point(&mut self) -> bool {
        if self.at_eof() || self.at(TokenKind::Semicolon) || self.at(TokenKind::At) || self.at(TokenKind::AtAt) {
            return true;
        }
        if self.current_kind() == TokenKind::Ident {
            if let Some(kind) = SyntaxKind::keyword_from_str(self.current_text()) {
                return kind.is_statement_keyword();
            }
        }
        false
    }

    fn take_current(&mut self) -> Token<'input> {
        self.peek_token();
        self.current_token.take().expect("peek_token always fills current_token")
    }

    /// Queue whitespace/newline/comment tokens ahead of the next real token.
    /// Doc-flagged block comments are left as `current` so the statement
    /// driver's doc-comment-list prelude can route them to `grammar::doc`
    /// instead of swallowing them as plain trivia.
    fn skip_ignored(&mut self) {
        loop {
            let kind = self.current_kind();
            let is_trivia_newline = kind == TokenKind::Newline && self.new_line_is_trivia;
            let is_plain_comment = matches!(kind, TokenKind::LineComment)
                || (kind == TokenKind::BlockComment && !self.current_flags().contains(TokenFlags::DOC_COMMENT));
            if kind == TokenKind::Whitespace || is_trivia_newline || is_plain_comment {
                let token = self.take_current();
                if self.options.comments && matches!(token.kind, TokenKind::LineComment | TokenKind::BlockComment) {
                    self.comments.push((token.range, token.text.to_string()));
                }
                self.ignored.push(token);
                continue;
            }
            break;
        }
    }

    /// Flush queued trivia tokens into the tree as plain tokens.
    fn push_ignored(&mut self) {
        let tokens = std::mem::take(&mut self.ignored);
        for token in tokens {
            let kind = match token.kind {
                TokenKind::Whitespace => SyntaxKind::WHITESPACE,
                TokenKind::Newline => SyntaxKind::NEWLINE,
                TokenKind::LineComment => SyntaxKind::LINE_COMMENT,
                TokenKind::BlockComment => SyntaxKind::BLOCK_COMMENT,
                _ => unreachable!("only trivia kinds are ever queued"),
            };
            self.builder.borrow_mut().token(kind, token.text);
        }
    }

    /// Consume the current token, tagging it `kind` in the tree, and queue
    /// whatever trivia follows.
    pub(crate) fn bump(&mut self, kind: SyntaxKind) {
        self.push_ignored();
        let token = self.take_current();
        self.previous_token_end = token.range.end();
        if token.kind == TokenKind::Unknown {
            self.builder.borrow_mut().token(SyntaxKind::ERROR_TOKEN, token.text);
        } else {
            self.builder.borrow_mut().token(kind, token.text);
        }
        self.skip_ignored();
    }

    /// Bump the current token if it matches `token_kind`; otherwise emit
    /// `code` anchored at `previous_token_end` and leave the token stream
    /// untouched (the caller decides whether to synthesize a placeholder).
    pub(crate) fn expect(&mut self, token_kind: TokenKind, syntax_kind: SyntaxKind, expected_desc: &str) -> bool {
        if self.at(token_kind) {
            self.bump(syntax_kind);
            true
        } else {
            let found = self.describe_current();
            self.err(
                DiagnosticCode::TokenExpected {
                    expected: expected_desc.to_string(),
                    found,
                },
                false,
            );
            false
        }
    }

    pub(crate) fn expect_keyword(&mut self, kw: &str, syntax_kind: SyntaxKind) -> bool {
        if self.at_keyword(kw) {
            self.bump(syntax_kind);
            true
        } else {
            let found = self.describe_current();
            self.err(
                DiagnosticCode::TokenExpected {
                    expected: format!("'{kw}'"),
                    found,
                },
                false,
            );
            false
        }
    }

    pub(crate) fn describe_current(&mut self) -> String {
        if self.at_eof() {
            "EOF".to_string()
        } else {
            self.current_text().to_string()
        }
    }

    /// Insert a zero-width synthetic token of kind `kind` without consuming
    /// anything from the stream, anchored at `previous_token_end`. Used for
    /// error recovery placeholders (missing identifiers, missing punctuation
    /// we choose to synthesize rather than merely report).
    pub(crate) fn missing_token(&mut self, kind: SyntaxKind) {
        self.push_ignored();
        self.builder.borrow_mut().token(kind, "");
    }

    /// Emit a synthetic `Name` node: an empty `NAME` wrapping a zero-width
    /// `IDENT`, with a uniquely-numbered display value recorded in the
    /// `synthetic_identifiers` side table (see DESIGN.md — rowan's green
    /// tokens can't carry text that didn't come from the source buffer, so
    /// the `"<missing identifier>N"` display value lives beside the tree
    /// rather than inside it).
    pub(crate) fn missing_name(&mut self) {
        self.missing_identifier_counter += 1;
        let pos = self.previous_token_end;
        self.synthetic_identifiers.insert(pos, self.missing_identifier_counter);
        let _guard = self.start_node(SyntaxKind::NAME);
        self.missing_token(SyntaxKind::IDENT);
    }

    pub(crate) fn docs_enabled(&self) -> bool {
        self.options.docs
    }

    /// Consume the current (doc-flagged) comment as a plain trivia token,
    /// used when `ParseOptions::docs` is off — the comment is preserved in
    /// the tree but never decomposed into doc tags.
    pub(crate) fn bump_comment_as_trivia(&mut self) {
        self.push_ignored();
        let token = self.take_current();
        if self.options.comments {
            self.comments.push((token.range, token.text.to_string()));
        }
        let kind = match token.kind {
            TokenKind::LineComment => SyntaxKind::LINE_COMMENT,
            TokenKind::BlockComment => SyntaxKind::BLOCK_COMMENT,
            _ => unreachable!("only called on a comment token"),
        };
        self.builder.borrow_mut().token(kind, token.text);
        self.skip_ignored();
    }

    // --- diagnostics --------------------------------------------------------

    pub(crate) fn err(&mut self, code: DiagnosticCode, non_printable: bool) {
        self.err_at(code, self.error_point(), non_printable);
    }

    pub(crate) fn err_at_current(&mut self, code: DiagnosticCode, non_printable: bool) {
        let range = self.current_range();
        self.err_at(code, range, non_printable);
    }

    fn err_at(&mut self, code: DiagnosticCode, range: TextRange, non_printable: bool) {
        if !self.accept_errors {
            return;
        }
        self.diagnostics.push(code, Severity::Error, range, non_printable);
        if let Some(&(pos, kind)) = self.open_nodes.borrow().last() {
            self.node_errors.insert((pos, kind));
        }
    }

    /// Push one final diagnostic for hitting the recursion limit, then stop
    /// accepting further diagnostics: once the limit trips, the parser
    /// unwinds through a lot of half-finished productions that would
    /// otherwise each report their own (spurious) error.
    pub(crate) fn limit_err(&mut self, code: DiagnosticCode) {
        if !self.accept_errors {
            return;
        }
        let range = self.current_range();
        self.diagnostics.push(code, Severity::Error, range, true);
        self.accept_errors = false;
    }

    pub(crate) fn warn(&mut self, code: DiagnosticCode) {
        if !self.accept_errors {
            return;
        }
        let range = self.current_range();
        self.diagnostics.push(code, Severity::Warning, range, true);
    }

    /// One-code-unit span right after the previous token, per spec §7.5.
    fn error_point(&self) -> TextRange {
        TextRange::new(self.previous_token_end, self.previous_token_end)
    }

    // --- tree construction --------------------------------------------------

    pub(crate) fn start_node(&mut self, kind: SyntaxKind) -> NodeGuard {
        self.push_ignored();
        let start = self.peek_token().map(|t| t.range.start()).unwrap_or(self.previous_token_end);
        self.open_nodes.borrow_mut().push((start, kind));
        self.builder.borrow_mut().start_node(kind);
        NodeGuard::new(self.builder.clone(), self.open_nodes.clone())
    }

    pub(crate) fn checkpoint_node(&mut self) -> Checkpoint {
        self.push_ignored();
        let start = self.peek_token().map(|t| t.range.start()).unwrap_or(self.previous_token_end);
        let checkpoint = self.builder.borrow().checkpoint();
        Checkpoint::new(self.builder.clone(), self.open_nodes.clone(), checkpoint, start)
    }

    // --- recursion guard ------------------------------------------------

    pub(crate) fn enter_recursion(&mut self) -> RecursionGuard<'_> {
        RecursionGuard::enter(&mut self.recursion_limit)
    }

    pub(crate) fn recursion_limited(&self) -> bool {
        self.recursion_limit.limited()
    }

    // --- doc-comment scoped mode switching (spec §9 scanRange) -----------

    /// Re-scans `range` of the original buffer in doc mode, running `f`
    /// with the parser's token stream temporarily swapped to that sub-scan.
    /// Both the lexer and the saved lookahead are restored on return,
    /// guaranteeing release of the scope on every exit path (spec §9).
    pub(crate) fn scan_doc_range<R>(&mut self, range: TextRange, f: impl FnOnce(&mut Self) -> R) -> R {
        let saved_lexer = std::mem::replace(
            &mut self.lexer,
            Lexer::for_range(self.source, range.start(), range.end()),
        );
        let saved_token = self.current_token.take();
        let saved_mode = self.mode;
        self.mode = Mode::Doc;

        let result = f(self);

        self.lexer = saved_lexer;
        self.current_token = saved_token;
        self.mode = saved_mode;
        result
    }

    /// Scoped `newLineIsTrivia = false` for directive argument parsing
    /// (spec §3: "Newline is normally trivia but becomes significant while
    /// parsing directive arguments").
    pub(crate) fn with_newline_significant<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        let saved = self.new_line_is_trivia;
        self.new_line_is_trivia = false;
        let result = f(self);
        self.new_line_is_trivia = saved;
        result
    }
}

/// Auto-closes the node it was handed by `Parser::start_node` when dropped,
/// so grammar functions don't need an explicit "close node" call on every
/// return path (including early returns inside error recovery).
#[must_use]
pub(crate) struct NodeGuard {
    builder: Rc<RefCell<TreeBuilder>>,
    open_nodes: Rc<RefCell<Vec<(TextSize, SyntaxKind)>>>,
}

impl NodeGuard {
    fn new(builder: Rc<RefCell<TreeBuilder>>, open_nodes: Rc<RefCell<Vec<(TextSize, SyntaxKind)>>>) -> Self {
        Self { builder, open_nodes }
    }

    pub(crate) fn finish_node(self) {
        drop(self);
    }
}

impl Drop for NodeGuard {
    fn drop(&mut self) {
        self.builder.borrow_mut().finish_node();
        self.open_nodes.borrow_mut().pop();
    }
}

/// A rowan checkpoint that can later wrap everything parsed since it was
/// taken in a new parent node — used for postfix-style and left-recursive
/// grammar (`T[]`, `T | U`, `A.B.C`) where whether a wrapper node is needed,
/// or how many are needed, isn't known until after the wrapped content has
/// already been parsed. `wrap_node` can be called more than once on the same
/// checkpoint: each call wraps *everything emitted since the checkpoint was
/// taken*, including a previous wrap, which is exactly the nesting a
/// left-associative chain like `A.B.C` needs (the second wrap's node
/// contains the first wrap's finished node as its first child).
#[must_use]
#[derive(Clone)]
pub(crate) struct Checkpoint {
    builder: Rc<RefCell<TreeBuilder>>,
    open_nodes: Rc<RefCell<Vec<(TextSize, SyntaxKind)>>>,
    checkpoint: rowan::Checkpoint,
    start: TextSize,
}

impl Checkpoint {
    fn new(
        builder: Rc<RefCell<TreeBuilder>>,
        open_nodes: Rc<RefCell<Vec<(TextSize, SyntaxKind)>>>,
        checkpoint: rowan::Checkpoint,
        start: TextSize,
    ) -> Self {
        Self {
            builder,
            open_nodes,
            checkpoint,
            start,
        }
    }

    pub(crate) fn wrap_node(&self, kind: SyntaxKind) -> NodeGuard {
        self.builder.borrow_mut().start_node_at(self.checkpoint, kind);
        self.open_nodes.borrow_mut().push((self.start, kind));
        NodeGuard::new(self.builder.clone(), self.open_nodes.clone())
    }
}
