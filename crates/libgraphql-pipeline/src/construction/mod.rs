//! Builds a [`QueryDocument`](crate::document::QueryDocument) from a parsed
//! [`SourceDocument`](crate::syntax::SourceDocument).
//!
//! Construction is itself a rule walk: the [`ConstructionPipeline`] visits
//! syntax nodes and the steps in [`construction_rules()`] turn each one into
//! a document part, resolving schema types as they go.

mod construction_pipeline;
mod document_constructor;
mod steps;

pub use construction_pipeline::ConstructionPipeline;
pub use construction_pipeline::ConstructionState;
pub use document_constructor::DocumentConstructor;

use crate::rules::RulePackage;
use crate::syntax::SyntaxNodeKind;
use std::sync::LazyLock;

static CONSTRUCTION_RULES: LazyLock<RulePackage<ConstructionPipeline>> =
    LazyLock::new(|| {
        use steps::*;
        RulePackage::builder()
            .add(SyntaxNodeKind::Document, ExecutableDefinitionsOnly)
            .add(SyntaxNodeKind::OperationDefinition, OperationNodeToPart)
            .add(SyntaxNodeKind::VariableDefinition, VariableDefinitionToPart)
            .add(SyntaxNodeKind::Field, FieldNodeToPart)
            .add(SyntaxNodeKind::FragmentSpread, FragmentSpreadToPart)
            .add(SyntaxNodeKind::InlineFragment, InlineFragmentToPart)
            .add(SyntaxNodeKind::FragmentDefinition, FragmentDefinitionToPart)
            .add(SyntaxNodeKind::Directive, DirectiveNodeToPart)
            .add(SyntaxNodeKind::Directive, InjectDefaultDirectiveArguments)
            .add(SyntaxNodeKind::Argument, ArgumentNodeToPart)
            .add(SyntaxNodeKind::ObjectField, ObjectFieldNodeToPart)
            .add(SyntaxNodeKind::Value, ValueNodeToPart)
            .build()
    });

/// The shared, immutable package of construction steps.
pub fn construction_rules() -> &'static RulePackage<ConstructionPipeline> {
    &CONSTRUCTION_RULES
}

#[cfg(test)]
mod tests;
