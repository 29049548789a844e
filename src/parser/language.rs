use crate::syntax_kind::SyntaxKind;

/// The `rowan::Language` impl tying our hand-written `SyntaxKind` to rowan's
/// green/red tree machinery, exactly like apollo-parser's `Lang`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Lang {}

impl rowan::Language for Lang {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        assert!(raw.0 < SyntaxKind::__LAST as u16);
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

pub type SyntaxNode = rowan::SyntaxNode<Lang>;
pub type SyntaxToken = rowan::SyntaxToken<Lang>;
pub type SyntaxElement = rowan::SyntaxElement<Lang>;
pub type SyntaxNodeChildren = rowan::SyntaxNodeChildren<Lang>;
pub type SyntaxElementChildren = rowan::SyntaxElementChildren<Lang>;
