//! Typed AST layer over the raw [`SyntaxNode`] tree, mirroring apollo-parser's
//! `ast` module: casting from an untyped node to a typed wrapper is a
//! zero-cost pointer reinterpretation, not a second parse.
//!
//! Unlike apollo-parser, this grammar has no ungrammar file to generate
//! `nodes.rs` from, so `nodes.rs` is hand-written; [`ast_node`] is the local
//! stand-in for the codegen step, expanding to the same struct-plus-impl
//! shape apollo-parser's generator produces.

mod node_ext;
mod nodes;

use std::marker::PhantomData;

use crate::parser::{SyntaxElementChildren, SyntaxNode, SyntaxNodeChildren, SyntaxToken};
use crate::syntax_kind::SyntaxKind;

pub use node_ext::{NumericLiteralValue, StringLiteralValue};
pub use nodes::*;

/// Converts an untyped [`SyntaxNode`] to a typed wrapper and back. The
/// conversion is free: every wrapper is a single `SyntaxNode` field.
pub trait AstNode {
    fn can_cast(kind: SyntaxKind) -> bool
    where
        Self: Sized;

    fn cast(syntax: SyntaxNode) -> Option<Self>
    where
        Self: Sized;

    fn syntax(&self) -> &SyntaxNode;
}

/// An iterator over `SyntaxNode` children of a particular AST type.
#[derive(Debug, Clone)]
pub struct AstChildren<N> {
    inner: SyntaxNodeChildren,
    ph: PhantomData<N>,
}

impl<N> AstChildren<N> {
    fn new(parent: &SyntaxNode) -> Self {
        AstChildren {
            inner: parent.children(),
            ph: PhantomData,
        }
    }
}

impl<N: AstNode> Iterator for AstChildren<N> {
    type Item = N;
    fn next(&mut self) -> Option<N> {
        self.inner.find_map(N::cast)
    }
}

mod support {
    use super::{AstChildren, AstNode, SyntaxElementChildren, SyntaxKind, SyntaxNode, SyntaxToken};

    pub(super) fn child<N: AstNode>(parent: &SyntaxNode) -> Option<N> {
        parent.children().find_map(N::cast)
    }

    pub(super) fn children<N: AstNode>(parent: &SyntaxNode) -> AstChildren<N> {
        AstChildren::new(parent)
    }

    pub(super) fn token(parent: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxToken> {
        parent
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .find(|it| it.kind() == kind)
    }

    /// All direct node-or-token children in document order, decorators and
    /// docs included — used by `tree_utils::visit_children`'s uniform walk.
    pub(super) fn elements(parent: &SyntaxNode) -> SyntaxElementChildren {
        parent.children_with_tokens()
    }
}

pub(crate) use support::elements;

/// Defines a typed node wrapper plus its `AstNode` impl. Accessor methods
/// are added in `nodes.rs` in a separate `impl` block per type, same as the
/// apollo-parser's generated file, just written by hand instead of generated.
macro_rules! ast_node {
    ($name:ident, $kind:expr) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name {
            pub(crate) syntax: SyntaxNode,
        }

        impl AstNode for $name {
            fn can_cast(kind: SyntaxKind) -> bool {
                kind == $kind
            }

            fn cast(syntax: SyntaxNode) -> Option<Self> {
                Self::can_cast(syntax.kind()).then_some(Self { syntax })
            }

            fn syntax(&self) -> &SyntaxNode {
                &self.syntax
            }
        }
    };
}

pub(crate) use ast_node;
