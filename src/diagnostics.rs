//! Diagnostic sink (component B).
//!
//! Modeled after apollo-parser's `Error` type (message + data + index), widened
//! into a typed, string-keyed code catalog per spec §6, with severities and
//! same-position suppression per §7.

use crate::source::TextRange;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// The catalog of diagnostic codes the parser can emit. Each variant owns
/// the data it needs to render its own message, so there is no separate
/// format-string table to keep in sync.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiagnosticCode {
    #[error("expected {expected}, found {found}")]
    TokenExpected { expected: String, found: String },

    #[error("unexpected token {found}")]
    UnexpectedToken { found: String },

    #[error("trailing {token} is not allowed here")]
    TrailingToken { token: String },

    #[error("imports must come before any namespace, model, or other declaration")]
    ImportFirst,

    #[error("import statements are not allowed inside a block")]
    ImportFirstTopLevel,

    #[error("blockless namespaces are not supported in blocks")]
    BlocklessNamespaceFirstTopLevel,

    #[error("blockless namespaces must come before any other declaration")]
    BlocklessNamespaceFirst,

    #[error("multiple blockless namespaces are not supported in the same file")]
    MultipleBlocklessNamespace,

    #[error("duplicate {kind} \"{name}\"")]
    DuplicateSymbol { kind: String, name: String },

    #[error("a default value requires the parameter to be marked optional with `?`")]
    DefaultRequired,

    #[error("a default value requires the property to be marked optional with `?`")]
    DefaultOptional,

    #[error("required parameters must come before optional parameters")]
    RequiredParameterFirst,

    #[error("rest parameter must not be optional")]
    RestParameterRequired,

    #[error("rest parameter must be the last parameter")]
    RestParameterLast,

    #[error("{name} is a reserved identifier")]
    ReservedIdentifier { name: String },

    #[error("decorators are not valid here")]
    InvalidDecoratorLocation,

    #[error("directives are not valid here")]
    InvalidDirectiveLocation,

    #[error("unknown directive #{name}")]
    UnknownDirective { name: String },

    #[error("augment decorator target must be a type reference")]
    AugmentDecoratorTarget,

    #[error("decorator declarations must have at least one parameter for the target")]
    DecoratorDeclTarget,

    #[error("doc comment tag is missing its identifier")]
    DocInvalidIdentifier,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub code: DiagnosticCode,
    pub severity: Severity,
    pub range: TextRange,
    /// Non-printable diagnostics clear the script-wide `printable` bit.
    pub non_printable: bool,
}

impl Diagnostic {
    pub fn message(&self) -> String {
        self.code.to_string()
    }
}

/// Accumulates diagnostics for a single parse, enforcing same-position
/// suppression: consecutive diagnostics at the identical "real position"
/// after the first are dropped (§7.2). This prevents cascades triggered by
/// synthesized-token insertion during error recovery.
#[derive(Debug, Default)]
pub struct DiagnosticsSink {
    diagnostics: Vec<Diagnostic>,
    real_position_of_last_error: Option<TextRange>,
    printable: bool,
}

impl DiagnosticsSink {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
            real_position_of_last_error: None,
            printable: true,
        }
    }

    /// Push a diagnostic. `non_printable` errors clear `printable`
    /// permanently for this parse; `Severity::Warning` never does.
    pub fn push(
        &mut self,
        code: DiagnosticCode,
        severity: Severity,
        range: TextRange,
        non_printable: bool,
    ) {
        if severity == Severity::Error && self.real_position_of_last_error == Some(range) {
            return;
        }
        if severity == Severity::Error {
            self.real_position_of_last_error = Some(range);
        }
        if non_printable && severity == Severity::Error {
            self.printable = false;
        }
        self.diagnostics.push(Diagnostic {
            code,
            severity,
            range,
            non_printable,
        });
    }

    pub fn printable(&self) -> bool {
        self.printable
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::TextSize;

    fn range(lo: u32, hi: u32) -> TextRange {
        TextRange::new(TextSize::from(lo), TextSize::from(hi))
    }

    #[test]
    fn same_position_suppression() {
        let mut sink = DiagnosticsSink::new();
        sink.push(
            DiagnosticCode::UnexpectedToken {
                found: "}".into(),
            },
            Severity::Error,
            range(3, 3),
            false,
        );
        sink.push(
            DiagnosticCode::UnexpectedToken {
                found: "]".into(),
            },
            Severity::Error,
            range(3, 3),
            false,
        );
        sink.push(
            DiagnosticCode::UnexpectedToken {
                found: ")".into(),
            },
            Severity::Error,
            range(5, 5),
            false,
        );
        assert_eq!(sink.diagnostics().len(), 2);
    }

    #[test]
    fn warnings_never_clear_printable() {
        let mut sink = DiagnosticsSink::new();
        sink.push(
            DiagnosticCode::DocInvalidIdentifier,
            Severity::Warning,
            range(0, 1),
            true,
        );
        assert!(sink.printable());
    }

    #[test]
    fn non_printable_error_clears_printable() {
        let mut sink = DiagnosticsSink::new();
        sink.push(
            DiagnosticCode::UnexpectedToken { found: "x".into() },
            Severity::Error,
            range(0, 1),
            true,
        );
        assert!(!sink.printable());
    }
}
