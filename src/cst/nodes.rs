//! Hand-written counterpart to apollo-parser's generated `nodes.rs`: one
//! struct plus `AstNode` impl per non-token [`SyntaxKind`], and a handful of
//! sum-type enums over the node-kind groups that need one (statements,
//! type-level expressions, the projection expression language).
//!
//! Accessors here stick to the mechanical one-liners `support::{child,
//! children, token}` can express directly. Anything that needs extra logic
//! to disambiguate same-kind siblings (a property's declared type vs. its
//! default value, both plain `Expr` children separated only by an `=`
//! token) lives in `node_ext.rs` instead.

use super::{ast_node, support, AstChildren, AstNode};
use crate::parser::{SyntaxNode, SyntaxToken};
use crate::syntax_kind::SyntaxKind::{self, *};

ast_node!(Name, NAME);
impl Name {
    pub fn ident_token(&self) -> Option<SyntaxToken> {
        support::token(&self.syntax, IDENT)
    }
    pub fn string_literal_token(&self) -> Option<SyntaxToken> {
        support::token(&self.syntax, STRING_LITERAL)
    }
}

ast_node!(DottedName, DOTTED_NAME);
impl DottedName {
    pub fn segments(&self) -> AstChildren<Name> {
        support::children(&self.syntax)
    }
}

ast_node!(TemplateParameterList, TEMPLATE_PARAMETER_LIST);
impl TemplateParameterList {
    pub fn parameters(&self) -> AstChildren<TemplateParameter> {
        support::children(&self.syntax)
    }
}

ast_node!(TemplateParameter, TEMPLATE_PARAMETER);
impl TemplateParameter {
    pub fn name(&self) -> Option<Name> {
        support::child(&self.syntax)
    }
    pub fn extends_token(&self) -> Option<SyntaxToken> {
        support::token(&self.syntax, EXTENDS_KW)
    }
    pub fn eq_token(&self) -> Option<SyntaxToken> {
        support::token(&self.syntax, EQ)
    }
}

ast_node!(TemplateArgumentList, TEMPLATE_ARGUMENT_LIST);
impl TemplateArgumentList {
    pub fn arguments(&self) -> AstChildren<Expr> {
        support::children(&self.syntax)
    }
}

ast_node!(HeritageList, HERITAGE_LIST);
impl HeritageList {
    pub fn references(&self) -> AstChildren<Expr> {
        support::children(&self.syntax)
    }
}

ast_node!(ModelPropertyList, MODEL_PROPERTY_LIST);
impl ModelPropertyList {
    pub fn properties(&self) -> AstChildren<ModelMember> {
        support::children(&self.syntax)
    }
}

ast_node!(EnumMemberList, ENUM_MEMBER_LIST);
impl EnumMemberList {
    pub fn members(&self) -> AstChildren<EnumMemberEntry> {
        support::children(&self.syntax)
    }
}

ast_node!(UnionVariantList, UNION_VARIANT_LIST);
impl UnionVariantList {
    pub fn variants(&self) -> AstChildren<UnionVariant> {
        support::children(&self.syntax)
    }
}

ast_node!(InterfaceMemberList, INTERFACE_MEMBER_LIST);
impl InterfaceMemberList {
    pub fn operations(&self) -> AstChildren<OperationStatement> {
        support::children(&self.syntax)
    }
}

ast_node!(OperationParameterList, OPERATION_PARAMETER_LIST);
impl OperationParameterList {
    pub fn parameters(&self) -> AstChildren<ModelMember> {
        support::children(&self.syntax)
    }
}

ast_node!(FunctionParameterList, FUNCTION_PARAMETER_LIST);
impl FunctionParameterList {
    pub fn parameters(&self) -> AstChildren<FunctionParameter> {
        support::children(&self.syntax)
    }
}

ast_node!(CallArgumentList, CALL_ARGUMENT_LIST);
impl CallArgumentList {
    /// Arguments when this list sits under a type-level decorator or call
    /// (`expr.rs`, `decorator.rs`).
    pub fn arguments(&self) -> AstChildren<Expr> {
        support::children(&self.syntax)
    }
    /// Arguments when this same node kind is reused by a projection call
    /// expression (`projection.rs::parse_call_expr`).
    pub fn projection_arguments(&self) -> AstChildren<ProjectionExpr> {
        support::children(&self.syntax)
    }
}

ast_node!(TupleElementList, TUPLE_ELEMENT_LIST);
impl TupleElementList {
    pub fn elements(&self) -> AstChildren<Expr> {
        support::children(&self.syntax)
    }
}

// --- expressions (type-level grammar, expr.rs) -----------------------------

ast_node!(IdentifierExpression, IDENTIFIER_EXPRESSION);
impl IdentifierExpression {
    pub fn name(&self) -> Option<Name> {
        support::child(&self.syntax)
    }
}

ast_node!(MemberExpression, MEMBER_EXPRESSION);
impl MemberExpression {
    pub fn base(&self) -> Option<Expr> {
        support::child(&self.syntax)
    }
    pub fn name(&self) -> Option<Name> {
        support::child(&self.syntax)
    }
}

ast_node!(TypeReference, TYPE_REFERENCE);
impl TypeReference {
    pub fn base(&self) -> Option<Expr> {
        support::child(&self.syntax)
    }
    pub fn arguments(&self) -> Option<TemplateArgumentList> {
        support::child(&self.syntax)
    }
}

ast_node!(UnionExpression, UNION_EXPRESSION);
impl UnionExpression {
    pub fn members(&self) -> AstChildren<Expr> {
        support::children(&self.syntax)
    }
}

ast_node!(IntersectionExpression, INTERSECTION_EXPRESSION);
impl IntersectionExpression {
    pub fn members(&self) -> AstChildren<Expr> {
        support::children(&self.syntax)
    }
}

ast_node!(ArrayExpression, ARRAY_EXPRESSION);
impl ArrayExpression {
    pub fn element_type(&self) -> Option<Expr> {
        support::child(&self.syntax)
    }
}

ast_node!(TupleExpression, TUPLE_EXPRESSION);
impl TupleExpression {
    pub fn element_list(&self) -> Option<TupleElementList> {
        support::child(&self.syntax)
    }
}

ast_node!(ModelExpression, MODEL_EXPRESSION);
impl ModelExpression {
    pub fn property_list(&self) -> Option<ModelPropertyList> {
        support::child(&self.syntax)
    }
}

ast_node!(ParenthesizedExpression, PARENTHESIZED_EXPRESSION);
impl ParenthesizedExpression {
    pub fn inner(&self) -> Option<Expr> {
        support::child(&self.syntax)
    }
}

ast_node!(StringLiteralExpression, STRING_LITERAL_EXPRESSION);
impl StringLiteralExpression {
    pub fn string_literal_token(&self) -> Option<SyntaxToken> {
        support::token(&self.syntax, STRING_LITERAL)
    }
}

ast_node!(NumericLiteralExpression, NUMERIC_LITERAL_EXPRESSION);
impl NumericLiteralExpression {
    pub fn numeric_literal_token(&self) -> Option<SyntaxToken> {
        support::token(&self.syntax, NUMERIC_LITERAL)
    }
}

ast_node!(BooleanLiteralExpression, BOOLEAN_LITERAL_EXPRESSION);
impl BooleanLiteralExpression {
    pub fn true_token(&self) -> Option<SyntaxToken> {
        support::token(&self.syntax, TRUE_KW)
    }
    pub fn false_token(&self) -> Option<SyntaxToken> {
        support::token(&self.syntax, FALSE_KW)
    }
}

ast_node!(VoidExpression, VOID_EXPRESSION);
ast_node!(NeverExpression, NEVER_EXPRESSION);
ast_node!(UnknownExpression, UNKNOWN_EXPRESSION);

// --- members ----------------------------------------------------------------

ast_node!(ModelProperty, MODEL_PROPERTY);
impl ModelProperty {
    pub fn name(&self) -> Option<Name> {
        support::child(&self.syntax)
    }
    pub fn question_token(&self) -> Option<SyntaxToken> {
        support::token(&self.syntax, QUESTION)
    }
    pub fn eq_token(&self) -> Option<SyntaxToken> {
        support::token(&self.syntax, EQ)
    }
}

ast_node!(ModelSpreadProperty, MODEL_SPREAD_PROPERTY);
impl ModelSpreadProperty {
    pub fn target(&self) -> Option<Expr> {
        support::child(&self.syntax)
    }
}

ast_node!(EnumMember, ENUM_MEMBER);
impl EnumMember {
    pub fn name(&self) -> Option<Name> {
        support::child(&self.syntax)
    }
    pub fn colon_token(&self) -> Option<SyntaxToken> {
        support::token(&self.syntax, COLON)
    }
    pub fn value(&self) -> Option<Expr> {
        support::child(&self.syntax)
    }
}

ast_node!(EnumSpreadMember, ENUM_SPREAD_MEMBER);
impl EnumSpreadMember {
    pub fn target(&self) -> Option<Expr> {
        support::child(&self.syntax)
    }
}

ast_node!(UnionVariant, UNION_VARIANT);
impl UnionVariant {
    pub fn name(&self) -> Option<Name> {
        support::child(&self.syntax)
    }
    pub fn colon_token(&self) -> Option<SyntaxToken> {
        support::token(&self.syntax, COLON)
    }
    pub fn variant_type(&self) -> Option<Expr> {
        support::child(&self.syntax)
    }
}

ast_node!(OperationSignatureDeclaration, OPERATION_SIGNATURE_DECLARATION);
impl OperationSignatureDeclaration {
    pub fn parameters(&self) -> Option<OperationParameterList> {
        support::child(&self.syntax)
    }
    pub fn colon_token(&self) -> Option<SyntaxToken> {
        support::token(&self.syntax, COLON)
    }
    pub fn return_type(&self) -> Option<Expr> {
        support::child(&self.syntax)
    }
}

ast_node!(OperationSignatureReference, OPERATION_SIGNATURE_REFERENCE);
impl OperationSignatureReference {
    pub fn is_token(&self) -> Option<SyntaxToken> {
        support::token(&self.syntax, IS_KW)
    }
    pub fn reference(&self) -> Option<Expr> {
        support::child(&self.syntax)
    }
}

ast_node!(FunctionParameter, FUNCTION_PARAMETER);
impl FunctionParameter {
    pub fn ellipsis_token(&self) -> Option<SyntaxToken> {
        support::token(&self.syntax, ELLIPSIS)
    }
    pub fn name(&self) -> Option<Name> {
        support::child(&self.syntax)
    }
    pub fn question_token(&self) -> Option<SyntaxToken> {
        support::token(&self.syntax, QUESTION)
    }
    pub fn eq_token(&self) -> Option<SyntaxToken> {
        support::token(&self.syntax, EQ)
    }
}

// --- annotation-list nodes ---------------------------------------------------

ast_node!(DecoratorList, DECORATOR_LIST);
impl DecoratorList {
    pub fn decorators(&self) -> AstChildren<DecoratorExpression> {
        support::children(&self.syntax)
    }
}

ast_node!(DecoratorExpression, DECORATOR_EXPRESSION);
impl DecoratorExpression {
    pub fn at_token(&self) -> Option<SyntaxToken> {
        support::token(&self.syntax, AT)
    }
    pub fn name_ref(&self) -> Option<Expr> {
        support::child(&self.syntax)
    }
    pub fn arguments(&self) -> Option<CallArgumentList> {
        support::child(&self.syntax)
    }
}

ast_node!(AugmentDecoratorStatement, AUGMENT_DECORATOR_STATEMENT);
impl AugmentDecoratorStatement {
    pub fn at_at_token(&self) -> Option<SyntaxToken> {
        support::token(&self.syntax, AT_AT)
    }
    pub fn target(&self) -> Option<Expr> {
        support::child(&self.syntax)
    }
    pub fn arguments(&self) -> Option<CallArgumentList> {
        support::child(&self.syntax)
    }
}

ast_node!(DirectiveList, DIRECTIVE_LIST);
impl DirectiveList {
    pub fn directives(&self) -> AstChildren<DirectiveExpression> {
        support::children(&self.syntax)
    }
}

ast_node!(DirectiveExpression, DIRECTIVE_EXPRESSION);
impl DirectiveExpression {
    pub fn hash_token(&self) -> Option<SyntaxToken> {
        support::token(&self.syntax, HASH)
    }
    pub fn name(&self) -> Option<Name> {
        support::child(&self.syntax)
    }
    pub fn arguments(&self) -> AstChildren<Expr> {
        support::children(&self.syntax)
    }
}

ast_node!(DocList, DOC_LIST);
impl DocList {
    pub fn docs(&self) -> AstChildren<Doc> {
        support::children(&self.syntax)
    }
}

ast_node!(ModifierList, MODIFIER_LIST);
impl ModifierList {
    pub fn is_extern(&self) -> bool {
        support::token(&self.syntax, EXTERN_KW).is_some()
    }
}

// --- doc nodes ---------------------------------------------------------------

ast_node!(Doc, DOC);
impl Doc {
    pub fn text(&self) -> Option<DocText> {
        support::child(&self.syntax)
    }
    pub fn param_tags(&self) -> AstChildren<DocParamTag> {
        support::children(&self.syntax)
    }
    pub fn template_tags(&self) -> AstChildren<DocTemplateTag> {
        support::children(&self.syntax)
    }
    pub fn returns_tags(&self) -> AstChildren<DocReturnsTag> {
        support::children(&self.syntax)
    }
    pub fn unknown_tags(&self) -> AstChildren<DocUnknownTag> {
        support::children(&self.syntax)
    }
}

ast_node!(DocText, DOC_TEXT);
ast_node!(DocParamTag, DOC_PARAM_TAG);
impl DocParamTag {
    pub fn name(&self) -> Option<Name> {
        support::child(&self.syntax)
    }
}
ast_node!(DocTemplateTag, DOC_TEMPLATE_TAG);
impl DocTemplateTag {
    pub fn name(&self) -> Option<Name> {
        support::child(&self.syntax)
    }
}
ast_node!(DocReturnsTag, DOC_RETURNS_TAG);
ast_node!(DocUnknownTag, DOC_UNKNOWN_TAG);

// --- declarations -------------------------------------------------------------

ast_node!(NamespaceStatement, NAMESPACE_STATEMENT);
impl NamespaceStatement {
    pub fn name(&self) -> Option<Name> {
        support::child(&self.syntax)
    }
    pub fn nested(&self) -> Option<NamespaceStatement> {
        support::child(&self.syntax)
    }
    pub fn statements(&self) -> AstChildren<Statement> {
        support::children(&self.syntax)
    }
}

ast_node!(ModelStatement, MODEL_STATEMENT);
impl ModelStatement {
    pub fn name(&self) -> Option<Name> {
        support::child(&self.syntax)
    }
    pub fn template_parameters(&self) -> Option<TemplateParameterList> {
        support::child(&self.syntax)
    }
    pub fn extends_token(&self) -> Option<SyntaxToken> {
        support::token(&self.syntax, EXTENDS_KW)
    }
    pub fn is_token(&self) -> Option<SyntaxToken> {
        support::token(&self.syntax, IS_KW)
    }
    pub fn base(&self) -> Option<Expr> {
        support::child(&self.syntax)
    }
    pub fn property_list(&self) -> Option<ModelPropertyList> {
        support::child(&self.syntax)
    }
}

ast_node!(ScalarStatement, SCALAR_STATEMENT);
impl ScalarStatement {
    pub fn name(&self) -> Option<Name> {
        support::child(&self.syntax)
    }
    pub fn template_parameters(&self) -> Option<TemplateParameterList> {
        support::child(&self.syntax)
    }
    pub fn extends_token(&self) -> Option<SyntaxToken> {
        support::token(&self.syntax, EXTENDS_KW)
    }
    pub fn base(&self) -> Option<Expr> {
        support::child(&self.syntax)
    }
}

ast_node!(InterfaceStatement, INTERFACE_STATEMENT);
impl InterfaceStatement {
    pub fn name(&self) -> Option<Name> {
        support::child(&self.syntax)
    }
    pub fn template_parameters(&self) -> Option<TemplateParameterList> {
        support::child(&self.syntax)
    }
    pub fn heritage_list(&self) -> Option<HeritageList> {
        support::child(&self.syntax)
    }
    pub fn member_list(&self) -> Option<InterfaceMemberList> {
        support::child(&self.syntax)
    }
}

ast_node!(UnionStatement, UNION_STATEMENT);
impl UnionStatement {
    pub fn name(&self) -> Option<Name> {
        support::child(&self.syntax)
    }
    pub fn template_parameters(&self) -> Option<TemplateParameterList> {
        support::child(&self.syntax)
    }
    pub fn variant_list(&self) -> Option<UnionVariantList> {
        support::child(&self.syntax)
    }
}

ast_node!(OperationStatement, OPERATION_STATEMENT);
impl OperationStatement {
    pub fn op_token(&self) -> Option<SyntaxToken> {
        support::token(&self.syntax, OP_KW)
    }
    pub fn name(&self) -> Option<Name> {
        support::child(&self.syntax)
    }
    pub fn template_parameters(&self) -> Option<TemplateParameterList> {
        support::child(&self.syntax)
    }
    pub fn signature(&self) -> Option<OperationSignature> {
        self.syntax.children().find_map(OperationSignature::cast)
    }
}

ast_node!(EnumStatement, ENUM_STATEMENT);
impl EnumStatement {
    pub fn name(&self) -> Option<Name> {
        support::child(&self.syntax)
    }
    pub fn member_list(&self) -> Option<EnumMemberList> {
        support::child(&self.syntax)
    }
}

ast_node!(AliasStatement, ALIAS_STATEMENT);
impl AliasStatement {
    pub fn name(&self) -> Option<Name> {
        support::child(&self.syntax)
    }
    pub fn template_parameters(&self) -> Option<TemplateParameterList> {
        support::child(&self.syntax)
    }
    pub fn eq_token(&self) -> Option<SyntaxToken> {
        support::token(&self.syntax, EQ)
    }
    pub fn value(&self) -> Option<Expr> {
        support::child(&self.syntax)
    }
}

ast_node!(UsingStatement, USING_STATEMENT);
impl UsingStatement {
    pub fn name(&self) -> Option<DottedName> {
        support::child(&self.syntax)
    }
}

ast_node!(ImportStatement, IMPORT_STATEMENT);
impl ImportStatement {
    pub fn path_token(&self) -> Option<SyntaxToken> {
        support::token(&self.syntax, STRING_LITERAL)
    }
}

ast_node!(DecoratorDeclarationStatement, DECORATOR_DECLARATION_STATEMENT);
impl DecoratorDeclarationStatement {
    pub fn name(&self) -> Option<Name> {
        support::child(&self.syntax)
    }
    pub fn parameters(&self) -> Option<FunctionParameterList> {
        support::child(&self.syntax)
    }
}

ast_node!(FunctionDeclarationStatement, FUNCTION_DECLARATION_STATEMENT);
impl FunctionDeclarationStatement {
    pub fn name(&self) -> Option<Name> {
        support::child(&self.syntax)
    }
    pub fn parameters(&self) -> Option<FunctionParameterList> {
        support::child(&self.syntax)
    }
    pub fn colon_token(&self) -> Option<SyntaxToken> {
        support::token(&self.syntax, COLON)
    }
    pub fn return_type(&self) -> Option<Expr> {
        support::child(&self.syntax)
    }
}

ast_node!(EmptyStatement, EMPTY_STATEMENT);
ast_node!(InvalidStatement, INVALID_STATEMENT);

// --- projections ---------------------------------------------------------------

ast_node!(ProjectionStatement, PROJECTION_STATEMENT);
impl ProjectionStatement {
    pub fn selector(&self) -> Option<ProjectionSelector> {
        self.syntax.children().find_map(ProjectionSelector::cast)
    }
    pub fn name(&self) -> Option<Name> {
        support::child(&self.syntax)
    }
    pub fn directions(&self) -> AstChildren<Projection> {
        support::children(&self.syntax)
    }
}

ast_node!(Projection, PROJECTION);
impl Projection {
    pub fn from_token(&self) -> Option<SyntaxToken> {
        support::token(&self.syntax, FROM_KW)
    }
    pub fn to_token(&self) -> Option<SyntaxToken> {
        support::token(&self.syntax, TO_KW)
    }
    pub fn is_from(&self) -> bool {
        self.from_token().is_some()
    }
    pub fn parameter_list(&self) -> Option<ProjectionParameterList> {
        support::child(&self.syntax)
    }
    pub fn block(&self) -> Option<ProjectionBlockExpression> {
        support::child(&self.syntax)
    }
}

ast_node!(ProjectionModelSelector, PROJECTION_MODEL_SELECTOR);
ast_node!(ProjectionOperationSelector, PROJECTION_OPERATION_SELECTOR);
ast_node!(ProjectionInterfaceSelector, PROJECTION_INTERFACE_SELECTOR);
ast_node!(ProjectionUnionSelector, PROJECTION_UNION_SELECTOR);
ast_node!(ProjectionEnumSelector, PROJECTION_ENUM_SELECTOR);
ast_node!(ProjectionIdentifierSelector, PROJECTION_IDENTIFIER_SELECTOR);
impl ProjectionIdentifierSelector {
    pub fn reference(&self) -> Option<Expr> {
        support::child(&self.syntax)
    }
}

ast_node!(ProjectionParameterList, PROJECTION_PARAMETER_LIST);
impl ProjectionParameterList {
    pub fn parameters(&self) -> AstChildren<ProjectionParameter> {
        support::children(&self.syntax)
    }
    pub fn lambda_parameters(&self) -> AstChildren<ProjectionLambdaParameter> {
        support::children(&self.syntax)
    }
}

ast_node!(ProjectionParameter, PROJECTION_PARAMETER);
impl ProjectionParameter {
    pub fn name(&self) -> Option<Name> {
        support::child(&self.syntax)
    }
}

ast_node!(ProjectionBlockExpression, PROJECTION_BLOCK_EXPRESSION);
impl ProjectionBlockExpression {
    pub fn statements(&self) -> AstChildren<ProjectionExpressionStatement> {
        support::children(&self.syntax)
    }
}

ast_node!(ProjectionExpressionStatement, PROJECTION_EXPRESSION_STATEMENT);
impl ProjectionExpressionStatement {
    pub fn expr(&self) -> Option<ProjectionExpr> {
        self.syntax.children().find_map(ProjectionExpr::cast)
    }
}

ast_node!(ProjectionIfExpression, PROJECTION_IF_EXPRESSION);
impl ProjectionIfExpression {
    pub fn condition(&self) -> Option<ProjectionExpr> {
        self.syntax.children().find_map(ProjectionExpr::cast)
    }
    pub fn blocks(&self) -> AstChildren<ProjectionBlockExpression> {
        support::children(&self.syntax)
    }
    pub fn else_if(&self) -> Option<ProjectionIfExpression> {
        support::child(&self.syntax)
    }
}

ast_node!(ProjectionLambdaExpression, PROJECTION_LAMBDA_EXPRESSION);
impl ProjectionLambdaExpression {
    pub fn parameter_list(&self) -> Option<ProjectionParameterList> {
        support::child(&self.syntax)
    }
    pub fn body(&self) -> Option<ProjectionBlockExpression> {
        support::child(&self.syntax)
    }
}

ast_node!(ProjectionLambdaParameter, PROJECTION_LAMBDA_PARAMETER);
impl ProjectionLambdaParameter {
    pub fn name(&self) -> Option<Name> {
        support::child(&self.syntax)
    }
}

ast_node!(ProjectionTupleExpression, PROJECTION_TUPLE_EXPRESSION);
impl ProjectionTupleExpression {
    pub fn elements(&self) -> AstChildren<ProjectionExpr> {
        support::children(&self.syntax)
    }
}

ast_node!(ProjectionModelExpression, PROJECTION_MODEL_EXPRESSION);
impl ProjectionModelExpression {
    pub fn property_list(&self) -> Option<ModelPropertyList> {
        support::child(&self.syntax)
    }
}

ast_node!(ProjectionCallExpression, PROJECTION_CALL_EXPRESSION);
impl ProjectionCallExpression {
    pub fn callee(&self) -> Option<ProjectionExpr> {
        self.syntax.children().find_map(ProjectionExpr::cast)
    }
    pub fn arguments(&self) -> Option<CallArgumentList> {
        support::child(&self.syntax)
    }
}

ast_node!(ProjectionMemberExpression, PROJECTION_MEMBER_EXPRESSION);
impl ProjectionMemberExpression {
    pub fn base(&self) -> Option<ProjectionExpr> {
        self.syntax.children().find_map(ProjectionExpr::cast)
    }
    pub fn name(&self) -> Option<Name> {
        support::child(&self.syntax)
    }
}

ast_node!(ProjectionDecoratorReferenceExpression, PROJECTION_DECORATOR_REFERENCE_EXPRESSION);
impl ProjectionDecoratorReferenceExpression {
    pub fn target(&self) -> Option<ProjectionExpr> {
        self.syntax.children().find_map(ProjectionExpr::cast)
    }
}

ast_node!(ProjectionReturnExpression, PROJECTION_RETURN_EXPRESSION);
impl ProjectionReturnExpression {
    pub fn value(&self) -> Option<ProjectionExpr> {
        self.syntax.children().find_map(ProjectionExpr::cast)
    }
}

ast_node!(ProjectionLogicalExpression, PROJECTION_LOGICAL_EXPRESSION);
impl ProjectionLogicalExpression {
    pub fn operands(&self) -> AstChildren<ProjectionExpr> {
        support::children(&self.syntax)
    }
}

ast_node!(ProjectionRelationalExpression, PROJECTION_RELATIONAL_EXPRESSION);
impl ProjectionRelationalExpression {
    pub fn operands(&self) -> AstChildren<ProjectionExpr> {
        support::children(&self.syntax)
    }
}

ast_node!(ProjectionEqualityExpression, PROJECTION_EQUALITY_EXPRESSION);
impl ProjectionEqualityExpression {
    pub fn operands(&self) -> AstChildren<ProjectionExpr> {
        support::children(&self.syntax)
    }
}

ast_node!(ProjectionArithmeticExpression, PROJECTION_ARITHMETIC_EXPRESSION);
impl ProjectionArithmeticExpression {
    pub fn operands(&self) -> AstChildren<ProjectionExpr> {
        support::children(&self.syntax)
    }
}

ast_node!(ProjectionUnaryExpression, PROJECTION_UNARY_EXPRESSION);
impl ProjectionUnaryExpression {
    pub fn operand(&self) -> Option<ProjectionExpr> {
        self.syntax.children().find_map(ProjectionExpr::cast)
    }
}

ast_node!(ProjectionParenthesizedExpression, PROJECTION_PARENTHESIZED_EXPRESSION);
impl ProjectionParenthesizedExpression {
    pub fn expr(&self) -> Option<ProjectionExpr> {
        self.syntax.children().find_map(ProjectionExpr::cast)
    }
    pub fn all_expressions(&self) -> AstChildren<ProjectionExpr> {
        support::children(&self.syntax)
    }
}

// --- root -----------------------------------------------------------------

ast_node!(Script, SCRIPT);
impl Script {
    pub fn statements(&self) -> AstChildren<Statement> {
        support::children(&self.syntax)
    }
}

// --- sum types --------------------------------------------------------------

/// Anything `parse_one_statement` can produce, at either top level or inside
/// a `{ ... }` block body.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Statement {
    Namespace(NamespaceStatement),
    Model(ModelStatement),
    Scalar(ScalarStatement),
    Interface(InterfaceStatement),
    Union(UnionStatement),
    Operation(OperationStatement),
    Enum(EnumStatement),
    Alias(AliasStatement),
    Using(UsingStatement),
    Import(ImportStatement),
    DecoratorDeclaration(DecoratorDeclarationStatement),
    FunctionDeclaration(FunctionDeclarationStatement),
    AugmentDecorator(AugmentDecoratorStatement),
    Projection(ProjectionStatement),
    Empty(EmptyStatement),
    Invalid(InvalidStatement),
}

impl AstNode for Statement {
    fn can_cast(kind: SyntaxKind) -> bool {
        matches!(
            kind,
            NAMESPACE_STATEMENT
                | MODEL_STATEMENT
                | SCALAR_STATEMENT
                | INTERFACE_STATEMENT
                | UNION_STATEMENT
                | OPERATION_STATEMENT
                | ENUM_STATEMENT
                | ALIAS_STATEMENT
                | USING_STATEMENT
                | IMPORT_STATEMENT
                | DECORATOR_DECLARATION_STATEMENT
                | FUNCTION_DECLARATION_STATEMENT
                | AUGMENT_DECORATOR_STATEMENT
                | PROJECTION_STATEMENT
                | EMPTY_STATEMENT
                | INVALID_STATEMENT
        )
    }

    fn cast(syntax: SyntaxNode) -> Option<Self> {
        let res = match syntax.kind() {
            NAMESPACE_STATEMENT => Statement::Namespace(NamespaceStatement { syntax }),
            MODEL_STATEMENT => Statement::Model(ModelStatement { syntax }),
            SCALAR_STATEMENT => Statement::Scalar(ScalarStatement { syntax }),
            INTERFACE_STATEMENT => Statement::Interface(InterfaceStatement { syntax }),
            UNION_STATEMENT => Statement::Union(UnionStatement { syntax }),
            OPERATION_STATEMENT => Statement::Operation(OperationStatement { syntax }),
            ENUM_STATEMENT => Statement::Enum(EnumStatement { syntax }),
            ALIAS_STATEMENT => Statement::Alias(AliasStatement { syntax }),
            USING_STATEMENT => Statement::Using(UsingStatement { syntax }),
            IMPORT_STATEMENT => Statement::Import(ImportStatement { syntax }),
            DECORATOR_DECLARATION_STATEMENT => {
                Statement::DecoratorDeclaration(DecoratorDeclarationStatement { syntax })
            }
            FUNCTION_DECLARATION_STATEMENT => {
                Statement::FunctionDeclaration(FunctionDeclarationStatement { syntax })
            }
            AUGMENT_DECORATOR_STATEMENT => Statement::AugmentDecorator(AugmentDecoratorStatement { syntax }),
            PROJECTION_STATEMENT => Statement::Projection(ProjectionStatement { syntax }),
            EMPTY_STATEMENT => Statement::Empty(EmptyStatement { syntax }),
            INVALID_STATEMENT => Statement::Invalid(InvalidStatement { syntax }),
            _ => return None,
        };
        Some(res)
    }

    fn syntax(&self) -> &SyntaxNode {
        match self {
            Statement::Namespace(it) => &it.syntax,
            Statement::Model(it) => &it.syntax,
            Statement::Scalar(it) => &it.syntax,
            Statement::Interface(it) => &it.syntax,
            Statement::Union(it) => &it.syntax,
            Statement::Operation(it) => &it.syntax,
            Statement::Enum(it) => &it.syntax,
            Statement::Alias(it) => &it.syntax,
            Statement::Using(it) => &it.syntax,
            Statement::Import(it) => &it.syntax,
            Statement::DecoratorDeclaration(it) => &it.syntax,
            Statement::FunctionDeclaration(it) => &it.syntax,
            Statement::AugmentDecorator(it) => &it.syntax,
            Statement::Projection(it) => &it.syntax,
            Statement::Empty(it) => &it.syntax,
            Statement::Invalid(it) => &it.syntax,
        }
    }
}

/// The type-level expression grammar (`expr.rs`): everything a model
/// property's type, an `extends` clause, or a decorator argument can be.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    Identifier(IdentifierExpression),
    Member(MemberExpression),
    TypeReference(TypeReference),
    Union(UnionExpression),
    Intersection(IntersectionExpression),
    Array(ArrayExpression),
    Tuple(TupleExpression),
    Model(ModelExpression),
    Parenthesized(ParenthesizedExpression),
    StringLiteral(StringLiteralExpression),
    NumericLiteral(NumericLiteralExpression),
    BooleanLiteral(BooleanLiteralExpression),
    Void(VoidExpression),
    Never(NeverExpression),
    Unknown(UnknownExpression),
}

impl AstNode for Expr {
    fn can_cast(kind: SyntaxKind) -> bool {
        matches!(
            kind,
            IDENTIFIER_EXPRESSION
                | MEMBER_EXPRESSION
                | TYPE_REFERENCE
                | UNION_EXPRESSION
                | INTERSECTION_EXPRESSION
                | ARRAY_EXPRESSION
                | TUPLE_EXPRESSION
                | MODEL_EXPRESSION
                | PARENTHESIZED_EXPRESSION
                | STRING_LITERAL_EXPRESSION
                | NUMERIC_LITERAL_EXPRESSION
                | BOOLEAN_LITERAL_EXPRESSION
                | VOID_EXPRESSION
                | NEVER_EXPRESSION
                | UNKNOWN_EXPRESSION
        )
    }

    fn cast(syntax: SyntaxNode) -> Option<Self> {
        let res = match syntax.kind() {
            IDENTIFIER_EXPRESSION => Expr::Identifier(IdentifierExpression { syntax }),
            MEMBER_EXPRESSION => Expr::Member(MemberExpression { syntax }),
            TYPE_REFERENCE => Expr::TypeReference(TypeReference { syntax }),
            UNION_EXPRESSION => Expr::Union(UnionExpression { syntax }),
            INTERSECTION_EXPRESSION => Expr::Intersection(IntersectionExpression { syntax }),
            ARRAY_EXPRESSION => Expr::Array(ArrayExpression { syntax }),
            TUPLE_EXPRESSION => Expr::Tuple(TupleExpression { syntax }),
            MODEL_EXPRESSION => Expr::Model(ModelExpression { syntax }),
            PARENTHESIZED_EXPRESSION => Expr::Parenthesized(ParenthesizedExpression { syntax }),
            STRING_LITERAL_EXPRESSION => Expr::StringLiteral(StringLiteralExpression { syntax }),
            NUMERIC_LITERAL_EXPRESSION => Expr::NumericLiteral(NumericLiteralExpression { syntax }),
            BOOLEAN_LITERAL_EXPRESSION => Expr::BooleanLiteral(BooleanLiteralExpression { syntax }),
            VOID_EXPRESSION => Expr::Void(VoidExpression { syntax }),
            NEVER_EXPRESSION => Expr::Never(NeverExpression { syntax }),
            UNKNOWN_EXPRESSION => Expr::Unknown(UnknownExpression { syntax }),
            _ => return None,
        };
        Some(res)
    }

    fn syntax(&self) -> &SyntaxNode {
        match self {
            Expr::Identifier(it) => &it.syntax,
            Expr::Member(it) => &it.syntax,
            Expr::TypeReference(it) => &it.syntax,
            Expr::Union(it) => &it.syntax,
            Expr::Intersection(it) => &it.syntax,
            Expr::Array(it) => &it.syntax,
            Expr::Tuple(it) => &it.syntax,
            Expr::Model(it) => &it.syntax,
            Expr::Parenthesized(it) => &it.syntax,
            Expr::StringLiteral(it) => &it.syntax,
            Expr::NumericLiteral(it) => &it.syntax,
            Expr::BooleanLiteral(it) => &it.syntax,
            Expr::Void(it) => &it.syntax,
            Expr::Never(it) => &it.syntax,
            Expr::Unknown(it) => &it.syntax,
        }
    }
}

/// One item of a `ModelProperties`-shaped list (model bodies, model
/// expressions, operation/function parameter lists).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ModelMember {
    Property(ModelProperty),
    Spread(ModelSpreadProperty),
}

impl AstNode for ModelMember {
    fn can_cast(kind: SyntaxKind) -> bool {
        matches!(kind, MODEL_PROPERTY | MODEL_SPREAD_PROPERTY)
    }

    fn cast(syntax: SyntaxNode) -> Option<Self> {
        let res = match syntax.kind() {
            MODEL_PROPERTY => ModelMember::Property(ModelProperty { syntax }),
            MODEL_SPREAD_PROPERTY => ModelMember::Spread(ModelSpreadProperty { syntax }),
            _ => return None,
        };
        Some(res)
    }

    fn syntax(&self) -> &SyntaxNode {
        match self {
            ModelMember::Property(it) => &it.syntax,
            ModelMember::Spread(it) => &it.syntax,
        }
    }
}

/// One item of an `enum` body: a plain member or a spread.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EnumMemberEntry {
    Member(EnumMember),
    Spread(EnumSpreadMember),
}

impl AstNode for EnumMemberEntry {
    fn can_cast(kind: SyntaxKind) -> bool {
        matches!(kind, ENUM_MEMBER | ENUM_SPREAD_MEMBER)
    }

    fn cast(syntax: SyntaxNode) -> Option<Self> {
        let res = match syntax.kind() {
            ENUM_MEMBER => EnumMemberEntry::Member(EnumMember { syntax }),
            ENUM_SPREAD_MEMBER => EnumMemberEntry::Spread(EnumSpreadMember { syntax }),
            _ => return None,
        };
        Some(res)
    }

    fn syntax(&self) -> &SyntaxNode {
        match self {
            EnumMemberEntry::Member(it) => &it.syntax,
            EnumMemberEntry::Spread(it) => &it.syntax,
        }
    }
}

/// An operation's body: either a full parameter/return-type declaration or a
/// reference to another named signature (`op foo is Bar;`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OperationSignature {
    Declaration(OperationSignatureDeclaration),
    Reference(OperationSignatureReference),
}

impl AstNode for OperationSignature {
    fn can_cast(kind: SyntaxKind) -> bool {
        matches!(kind, OPERATION_SIGNATURE_DECLARATION | OPERATION_SIGNATURE_REFERENCE)
    }

    fn cast(syntax: SyntaxNode) -> Option<Self> {
        let res = match syntax.kind() {
            OPERATION_SIGNATURE_DECLARATION => {
                OperationSignature::Declaration(OperationSignatureDeclaration { syntax })
            }
            OPERATION_SIGNATURE_REFERENCE => {
                OperationSignature::Reference(OperationSignatureReference { syntax })
            }
            _ => return None,
        };
        Some(res)
    }

    fn syntax(&self) -> &SyntaxNode {
        match self {
            OperationSignature::Declaration(it) => &it.syntax,
            OperationSignature::Reference(it) => &it.syntax,
        }
    }
}

/// What a `projection` statement selects: every declaration of a kind, or
/// one specific named declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProjectionSelector {
    Model(ProjectionModelSelector),
    Operation(ProjectionOperationSelector),
    Interface(ProjectionInterfaceSelector),
    Union(ProjectionUnionSelector),
    Enum(ProjectionEnumSelector),
    Identifier(ProjectionIdentifierSelector),
}

impl AstNode for ProjectionSelector {
    fn can_cast(kind: SyntaxKind) -> bool {
        matches!(
            kind,
            PROJECTION_MODEL_SELECTOR
                | PROJECTION_OPERATION_SELECTOR
                | PROJECTION_INTERFACE_SELECTOR
                | PROJECTION_UNION_SELECTOR
                | PROJECTION_ENUM_SELECTOR
                | PROJECTION_IDENTIFIER_SELECTOR
        )
    }

    fn cast(syntax: SyntaxNode) -> Option<Self> {
        let res = match syntax.kind() {
            PROJECTION_MODEL_SELECTOR => ProjectionSelector::Model(ProjectionModelSelector { syntax }),
            PROJECTION_OPERATION_SELECTOR => {
                ProjectionSelector::Operation(ProjectionOperationSelector { syntax })
            }
            PROJECTION_INTERFACE_SELECTOR => {
                ProjectionSelector::Interface(ProjectionInterfaceSelector { syntax })
            }
            PROJECTION_UNION_SELECTOR => ProjectionSelector::Union(ProjectionUnionSelector { syntax }),
            PROJECTION_ENUM_SELECTOR => ProjectionSelector::Enum(ProjectionEnumSelector { syntax }),
            PROJECTION_IDENTIFIER_SELECTOR => {
                ProjectionSelector::Identifier(ProjectionIdentifierSelector { syntax })
            }
            _ => return None,
        };
        Some(res)
    }

    fn syntax(&self) -> &SyntaxNode {
        match self {
            ProjectionSelector::Model(it) => &it.syntax,
            ProjectionSelector::Operation(it) => &it.syntax,
            ProjectionSelector::Interface(it) => &it.syntax,
            ProjectionSelector::Union(it) => &it.syntax,
            ProjectionSelector::Enum(it) => &it.syntax,
            ProjectionSelector::Identifier(it) => &it.syntax,
        }
    }
}

/// The projection body's own expression language (`projection.rs`'s
/// precedence chain). Shares its literal and identifier leaves with
/// [`Expr`] — `IdentifierExpression`, `StringLiteralExpression`, and the
/// rest are the same node kinds in both grammars.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProjectionExpr {
    Identifier(IdentifierExpression),
    StringLiteral(StringLiteralExpression),
    NumericLiteral(NumericLiteralExpression),
    BooleanLiteral(BooleanLiteralExpression),
    Void(VoidExpression),
    Never(NeverExpression),
    Unknown(UnknownExpression),
    Tuple(ProjectionTupleExpression),
    Model(ProjectionModelExpression),
    Parenthesized(ProjectionParenthesizedExpression),
    Lambda(ProjectionLambdaExpression),
    If(ProjectionIfExpression),
    Return(ProjectionReturnExpression),
    Logical(ProjectionLogicalExpression),
    Equality(ProjectionEqualityExpression),
    Relational(ProjectionRelationalExpression),
    Arithmetic(ProjectionArithmeticExpression),
    Unary(ProjectionUnaryExpression),
    Call(ProjectionCallExpression),
    DecoratorReference(ProjectionDecoratorReferenceExpression),
    Member(ProjectionMemberExpression),
}

impl AstNode for ProjectionExpr {
    fn can_cast(kind: SyntaxKind) -> bool {
        matches!(
            kind,
            IDENTIFIER_EXPRESSION
                | STRING_LITERAL_EXPRESSION
                | NUMERIC_LITERAL_EXPRESSION
                | BOOLEAN_LITERAL_EXPRESSION
                | VOID_EXPRESSION
                | NEVER_EXPRESSION
                | UNKNOWN_EXPRESSION
                | PROJECTION_TUPLE_EXPRESSION
                | PROJECTION_MODEL_EXPRESSION
                | PROJECTION_PARENTHESIZED_EXPRESSION
                | PROJECTION_LAMBDA_EXPRESSION
                | PROJECTION_IF_EXPRESSION
                | PROJECTION_RETURN_EXPRESSION
                | PROJECTION_LOGICAL_EXPRESSION
                | PROJECTION_EQUALITY_EXPRESSION
                | PROJECTION_RELATIONAL_EXPRESSION
                | PROJECTION_ARITHMETIC_EXPRESSION
                | PROJECTION_UNARY_EXPRESSION
                | PROJECTION_CALL_EXPRESSION
                | PROJECTION_DECORATOR_REFERENCE_EXPRESSION
                | PROJECTION_MEMBER_EXPRESSION
        )
    }

    fn cast(syntax: SyntaxNode) -> Option<Self> {
        let res = match syntax.kind() {
            IDENTIFIER_EXPRESSION => ProjectionExpr::Identifier(IdentifierExpression { syntax }),
            STRING_LITERAL_EXPRESSION => ProjectionExpr::StringLiteral(StringLiteralExpression { syntax }),
            NUMERIC_LITERAL_EXPRESSION => ProjectionExpr::NumericLiteral(NumericLiteralExpression { syntax }),
            BOOLEAN_LITERAL_EXPRESSION => ProjectionExpr::BooleanLiteral(BooleanLiteralExpression { syntax }),
            VOID_EXPRESSION => ProjectionExpr::Void(VoidExpression { syntax }),
            NEVER_EXPRESSION => ProjectionExpr::Never(NeverExpression { syntax }),
            UNKNOWN_EXPRESSION => ProjectionExpr::Unknown(UnknownExpression { syntax }),
            PROJECTION_TUPLE_EXPRESSION => ProjectionExpr::Tuple(ProjectionTupleExpression { syntax }),
            PROJECTION_MODEL_EXPRESSION => ProjectionExpr::Model(ProjectionModelExpression { syntax }),
            PROJECTION_PARENTHESIZED_EXPRESSION => {
                ProjectionExpr::Parenthesized(ProjectionParenthesizedExpression { syntax })
            }
            PROJECTION_LAMBDA_EXPRESSION => ProjectionExpr::Lambda(ProjectionLambdaExpression { syntax }),
            PROJECTION_IF_EXPRESSION => ProjectionExpr::If(ProjectionIfExpression { syntax }),
            PROJECTION_RETURN_EXPRESSION => ProjectionExpr::Return(ProjectionReturnExpression { syntax }),
            PROJECTION_LOGICAL_EXPRESSION => ProjectionExpr::Logical(ProjectionLogicalExpression { syntax }),
            PROJECTION_EQUALITY_EXPRESSION => ProjectionExpr::Equality(ProjectionEqualityExpression { syntax }),
            PROJECTION_RELATIONAL_EXPRESSION => {
                ProjectionExpr::Relational(ProjectionRelationalExpression { syntax })
            }
            PROJECTION_ARITHMETIC_EXPRESSION => {
                ProjectionExpr::Arithmetic(ProjectionArithmeticExpression { syntax })
            }
            PROJECTION_UNARY_EXPRESSION => ProjectionExpr::Unary(ProjectionUnaryExpression { syntax }),
            PROJECTION_CALL_EXPRESSION => ProjectionExpr::Call(ProjectionCallExpression { syntax }),
            PROJECTION_DECORATOR_REFERENCE_EXPRESSION => {
                ProjectionExpr::DecoratorReference(ProjectionDecoratorReferenceExpression { syntax })
            }
            PROJECTION_MEMBER_EXPRESSION => ProjectionExpr::Member(ProjectionMemberExpression { syntax }),
            _ => return None,
        };
        Some(res)
    }

    fn syntax(&self) -> &SyntaxNode {
        match self {
            ProjectionExpr::Identifier(it) => &it.syntax,
            ProjectionExpr::StringLiteral(it) => &it.syntax,
            ProjectionExpr::NumericLiteral(it) => &it.syntax,
            ProjectionExpr::BooleanLiteral(it) => &it.syntax,
            ProjectionExpr::Void(it) => &it.syntax,
            ProjectionExpr::Never(it) => &it.syntax,
            ProjectionExpr::Unknown(it) => &it.syntax,
            ProjectionExpr::Tuple(it) => &it.syntax,
            ProjectionExpr::Model(it) => &it.syntax,
            ProjectionExpr::Parenthesized(it) => &it.syntax,
            ProjectionExpr::Lambda(it) => &it.syntax,
            ProjectionExpr::If(it) => &it.syntax,
            ProjectionExpr::Return(it) => &it.syntax,
            ProjectionExpr::Logical(it) => &it.syntax,
            ProjectionExpr::Equality(it) => &it.syntax,
            ProjectionExpr::Relational(it) => &it.syntax,
            ProjectionExpr::Arithmetic(it) => &it.syntax,
            ProjectionExpr::Unary(it) => &it.syntax,
            ProjectionExpr::Call(it) => &it.syntax,
            ProjectionExpr::DecoratorReference(it) => &it.syntax,
            ProjectionExpr::Member(it) => &it.syntax,
        }
    }
}
