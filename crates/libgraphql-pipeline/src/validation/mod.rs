//! Checks a constructed [`QueryDocument`](crate::document::QueryDocument)
//! against the validation rules of the GraphQL specification.
//!
//! Every step in [`validation_rules()`] implements one numbered rule (plus
//! an operation depth limit). Steps only read the document; anything they
//! need to remember across parts lives in the walk's
//! [`ContextMetadata`](crate::rules::ContextMetadata).

mod document_validator;
mod selections;
mod steps;
mod validation_pipeline;
mod values;

pub use document_validator::DocumentValidator;
pub use document_validator::ValidationResult;
pub use validation_pipeline::ValidationPipeline;
pub use validation_pipeline::ValidationState;

use crate::document::DocumentPartKind;
use crate::rules::RulePackage;
use std::sync::LazyLock;

static VALIDATION_RULES: LazyLock<RulePackage<ValidationPipeline>> =
    LazyLock::new(|| {
        use steps::*;
        use DocumentPartKind as Kind;

        // Order matters within a kind: steps that record bookkeeping in the
        // walk's metadata are registered before the steps that read it.
        RulePackage::builder()
            .add(Kind::Operation, OperationNameUniqueness)
            .add(Kind::Operation, LoneAnonymousOperation)
            .add(Kind::Operation, SubscriptionSingleRootField)
            .add(Kind::Operation, AllVariableUsesDefined)
            .add(Kind::Operation, AllVariableUsagesAllowed)
            .add(Kind::Operation, MaxQueryDepth)
            .add(Kind::Operation, FieldSelectionMerging)

            .add(Kind::Variable, VariableUniqueness)
            .add(Kind::Variable, VariablesAreInputTypes)
            .add(Kind::Variable, AllVariablesUsed)

            .add(Kind::FieldSelection, FieldSelectionsExist)
            .add(Kind::FieldSelection, FieldSelectionMerging)
            .add(Kind::FieldSelection, LeafFieldSelections)
            .add(Kind::FieldSelection, RequiredArguments)
            .add(Kind::FieldSelection, DeprecatedFieldUsage)

            .add(Kind::FragmentSpread, FragmentSpreadTargetDefined)
            .add(Kind::FragmentSpread, FragmentSpreadIsPossible)

            .add(Kind::InlineFragment, FragmentTypeConditionExists)
            .add(Kind::InlineFragment, FragmentsOnCompositeTypes)
            .add(Kind::InlineFragment, FragmentSpreadIsPossible)

            .add(Kind::NamedFragmentDefinition, FragmentNameUniqueness)
            .add(Kind::NamedFragmentDefinition, FragmentTypeConditionExists)
            .add(Kind::NamedFragmentDefinition, FragmentsOnCompositeTypes)
            .add(Kind::NamedFragmentDefinition, FragmentsMustBeUsed)
            .add(Kind::NamedFragmentDefinition, FragmentSpreadsMustNotFormCycles)
            .add(Kind::NamedFragmentDefinition, FieldSelectionMerging)

            .add(Kind::Directive, DirectivesAreDefined)
            .add(Kind::Directive, DirectivesAreInValidLocations)
            .add(Kind::Directive, DirectivesAreUniquePerLocation)
            .add(Kind::Directive, RequiredArguments)

            .add(Kind::InputArgument, ArgumentNames)
            .add(Kind::InputArgument, ArgumentUniqueness)

            .add(Kind::InputObjectField, InputObjectFieldNames)
            .add(Kind::InputObjectField, InputObjectFieldUniqueness)

            .add(Kind::ScalarValue, ValuesOfCorrectType)
            .add(Kind::ListValue, ValuesOfCorrectType)
            .add(Kind::ComplexValue, ValuesOfCorrectType)
            .add(Kind::ComplexValue, InputObjectRequiredFields)
            .build()
    });

/// The shared, immutable package of validation steps.
pub fn validation_rules() -> &'static RulePackage<ValidationPipeline> {
    &VALIDATION_RULES
}

#[cfg(test)]
mod tests;
