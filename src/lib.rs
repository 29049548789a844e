//! A lossless, error-recovering recursive-descent parser for the TSP
//! schema/API description language: a type-oriented schema language whose
//! grammar looks like a cross between TypeScript's type syntax and an IDL.
//!
//! Three things make this parser worth a dedicated crate rather than a
//! generic parser-combinator sketch (see the module docs on [`parser`] and
//! [`cst`] for the how):
//!
//! - **Editor-grade losslessness.** Every token — including whitespace and
//!   comments — is either attached to the tree or recoverable from it, and
//!   positions are preserved end-to-end, so the same tree serves a batch
//!   compiler and a language server's completion/hover/goto-definition.
//! - **Aggressive error recovery.** The parser never aborts on the first
//!   syntax error; it synthesizes missing tokens, skips to a
//!   resynchronization point, and still returns a structurally complete
//!   tree so downstream passes can run on malformed input.
//! - **An embedded expression language.** `projection` statements parse a
//!   second grammar — operator precedence, lambdas, blocks, `if`/`else` —
//!   sharing the same scanner and tree-building infrastructure as the
//!   primary grammar.
//!
//! ```
//! use tsp_parser::Parser;
//!
//! let tree = Parser::new("model Pet { name: string, species?: string }").parse();
//! assert!(tree.printable());
//! for statement in tree.script().statements() {
//!     println!("{statement:?}");
//! }
//! ```
//!
//! Semantic resolution, the type checker, decorator evaluation, code
//! emitters, and the CLI driver are all out of scope here (spec §1) — this
//! crate's job ends at a diagnosed, traversable concrete syntax tree.

mod api;
mod bitset;
pub mod cst;
pub mod diagnostics;
mod lexer;
mod limit;
mod parser;
pub mod source;
pub mod syntax_kind;
pub mod tree_utils;

pub use api::{parse, parse_standalone_type_reference, Parser, SyntaxTree};
pub use diagnostics::{Diagnostic, DiagnosticCode, Severity};
pub use parser::{ParseOptions, SyntaxElement, SyntaxNode, SyntaxNodeChildren, SyntaxToken};
pub use syntax_kind::SyntaxKind;
