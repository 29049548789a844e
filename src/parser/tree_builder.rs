use rowan::GreenNodeBuilder;

use crate::parser::language::SyntaxNode;
use crate::syntax_kind::SyntaxKind;

/// Thin wrapper around `rowan::GreenNodeBuilder`, kept in its own module the
/// way apollo-parser keeps `SyntaxTreeBuilder` in `syntax_tree.rs`.
#[derive(Debug)]
pub(crate) struct TreeBuilder {
    builder: GreenNodeBuilder<'static>,
}

impl TreeBuilder {
    pub(crate) fn new() -> Self {
        Self {
            builder: GreenNodeBuilder::new(),
        }
    }

    pub(crate) fn start_node(&mut self, kind: SyntaxKind) {
        self.builder.start_node(kind.into());
    }

    pub(crate) fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    pub(crate) fn token(&mut self, kind: SyntaxKind, text: &str) {
        self.builder.token(kind.into(), text);
    }

    pub(crate) fn checkpoint(&self) -> rowan::Checkpoint {
        self.builder.checkpoint()
    }

    pub(crate) fn start_node_at(&mut self, checkpoint: rowan::Checkpoint, kind: SyntaxKind) {
        self.builder.start_node_at(checkpoint, kind.into());
    }

    pub(crate) fn finish(self) -> SyntaxNode {
        SyntaxNode::new_root(self.builder.finish())
    }
}
