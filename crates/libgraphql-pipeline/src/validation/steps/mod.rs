mod argument_steps;
mod directive_steps;
mod field_steps;
mod fragment_steps;
mod operation_steps;
mod value_steps;
mod variable_steps;

pub(super) use argument_steps::ArgumentNames;
pub(super) use argument_steps::ArgumentUniqueness;
pub(super) use argument_steps::RequiredArguments;
pub(super) use directive_steps::DirectivesAreDefined;
pub(super) use directive_steps::DirectivesAreInValidLocations;
pub(super) use directive_steps::DirectivesAreUniquePerLocation;
pub(super) use field_steps::DeprecatedFieldUsage;
pub(super) use field_steps::FieldSelectionMerging;
pub(super) use field_steps::FieldSelectionsExist;
pub(super) use field_steps::LeafFieldSelections;
pub(super) use fragment_steps::FragmentNameUniqueness;
pub(super) use fragment_steps::FragmentSpreadIsPossible;
pub(super) use fragment_steps::FragmentSpreadTargetDefined;
pub(super) use fragment_steps::FragmentSpreadsMustNotFormCycles;
pub(super) use fragment_steps::FragmentTypeConditionExists;
pub(super) use fragment_steps::FragmentsMustBeUsed;
pub(super) use fragment_steps::FragmentsOnCompositeTypes;
pub(super) use operation_steps::AllVariableUsagesAllowed;
pub(super) use operation_steps::AllVariableUsesDefined;
pub(super) use operation_steps::LoneAnonymousOperation;
pub(super) use operation_steps::MaxQueryDepth;
pub(super) use operation_steps::OperationNameUniqueness;
pub(super) use operation_steps::SubscriptionSingleRootField;
pub(super) use value_steps::InputObjectFieldNames;
pub(super) use value_steps::InputObjectFieldUniqueness;
pub(super) use value_steps::InputObjectRequiredFields;
pub(super) use value_steps::ValuesOfCorrectType;
pub(super) use variable_steps::AllVariablesUsed;
pub(super) use variable_steps::VariableUniqueness;
pub(super) use variable_steps::VariablesAreInputTypes;

use crate::document::PartId;
use std::collections::HashMap;
use std::collections::HashSet;

/// Names already seen under each parent part. Uniqueness rules record each
/// name the first time they see it and report every later occurrence.
///
/// `Tag` only distinguishes one rule's bookkeeping from another's within
/// the walk's metadata.
#[derive(Debug)]
pub(super) struct SeenNames<Tag> {
    by_parent: HashMap<PartId, HashSet<String>>,
    tag: std::marker::PhantomData<fn() -> Tag>,
}
impl<Tag> std::default::Default for SeenNames<Tag> {
    fn default() -> Self {
        Self {
            by_parent: HashMap::new(),
            tag: std::marker::PhantomData,
        }
    }
}
impl<Tag> SeenNames<Tag> {
    /// Record `name` under `parent`. Returns `false` if it was already
    /// recorded there.
    pub(super) fn insert(&mut self, parent: PartId, name: &str) -> bool {
        self.by_parent
            .entry(parent)
            .or_default()
            .insert(name.to_string())
    }
}
