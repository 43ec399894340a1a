use crate::document::DocumentPart;
use crate::document::PartData;
use crate::document::QueryDocument;
use crate::messages::anchors;
use crate::rules::RuleContext;
use crate::rules::RuleStep;
use crate::schema::GraphQLType;
use crate::validation::ValidationPipeline;
use crate::validation::selections;
use crate::validation::validation_pipeline::active_part;
use crate::validation::validation_pipeline::report;
use std::collections::HashSet;

/// The type condition written on an inline fragment or fragment
/// definition.
fn type_condition(part: &DocumentPart) -> Option<&str> {
    match part.data() {
        PartData::InlineFragment { type_condition } => type_condition.as_deref(),
        PartData::NamedFragmentDefinition { type_condition, .. } =>
            Some(type_condition.as_str()),
        _ => None,
    }
}

/// `"F" ` for named fragments, nothing for inline ones, so messages read
/// naturally either way.
fn fragment_label(part: &DocumentPart) -> String {
    match part.data() {
        PartData::NamedFragmentDefinition { name, .. } => format!("\"{name}\" "),
        PartData::FragmentSpread { fragment_name } => format!("\"{fragment_name}\" "),
        _ => String::new(),
    }
}

/// The first definition of the fragment `part` defines or spreads.
fn first_definition_of<'d>(document: &'d QueryDocument, part: &DocumentPart) -> Option<&'d DocumentPart> {
    document.named_fragment(part.name()?)
}

/// [5.5.2.1](https://spec.graphql.org/October2021/#sec-Fragment-spread-target-defined)
pub(crate) struct FragmentSpreadTargetDefined;
impl RuleStep<ValidationPipeline> for FragmentSpreadTargetDefined {
    fn name(&self) -> &'static str {
        "FragmentSpreadTargetDefined"
    }

    fn execute(&self, ctx: &mut RuleContext<'_, ValidationPipeline>) -> bool {
        let spread = active_part(ctx);
        if first_definition_of(ctx.state().document, spread).is_some() {
            return true;
        }
        report(
            ctx,
            spread.id(),
            anchors::FRAGMENT_SPREAD_TARGET_DEFINED,
            format!("Unknown fragment \"{}\"", spread.name().unwrap_or_default()),
        );
        false
    }
}

/// [5.5.2.3](https://spec.graphql.org/October2021/#sec-Fragment-spread-is-possible)
///
/// Runs on fragment spreads and inline fragments. A spread is possible when
/// some object type could satisfy both the enclosing type and the
/// fragment's type condition.
pub(crate) struct FragmentSpreadIsPossible;
impl RuleStep<ValidationPipeline> for FragmentSpreadIsPossible {
    fn name(&self) -> &'static str {
        "FragmentSpreadIsPossible"
    }

    fn execute(&self, ctx: &mut RuleContext<'_, ValidationPipeline>) -> bool {
        let state = *ctx.state();
        let fragment = active_part(ctx);
        let Some(parent_type) = state.document.owner_type(fragment.id()) else {
            return true;
        };
        let fragment_type = match fragment.data() {
            PartData::FragmentSpread { .. } =>
                first_definition_of(state.document, fragment)
                    .and_then(|definition| definition.graph_type()),
            _ => type_condition(fragment),
        };
        let Some(fragment_type) = fragment_type else {
            return true;
        };
        let is_composite =
            state.schema
                .find_type(fragment_type)
                .is_some_and(GraphQLType::is_composite);
        if !is_composite {
            return true;
        }

        let parent_possible = state.schema.possible_types(parent_type);
        let overlaps =
            state.schema.possible_types(fragment_type)
                .iter()
                .any(|type_name| parent_possible.contains(type_name));
        if overlaps {
            return true;
        }
        report(
            ctx,
            fragment.id(),
            anchors::FRAGMENT_SPREAD_IS_POSSIBLE,
            format!(
                "Fragment {}cannot be spread here as objects of type \"{parent_type}\" \
                can never be of type \"{fragment_type}\"",
                fragment_label(fragment),
            ),
        );
        false
    }
}

/// [5.5.1.2](https://spec.graphql.org/October2021/#sec-Fragment-Spread-Type-Existence)
///
/// Nothing beneath a fragment on an unknown type is validated.
pub(crate) struct FragmentTypeConditionExists;
impl FragmentTypeConditionExists {
    fn unknown_type<'a>(ctx: &RuleContext<'a, ValidationPipeline>) -> Option<&'a str> {
        let type_name = type_condition(active_part(ctx))?;
        match ctx.state().schema.find_type(type_name) {
            Some(_) => None,
            None => Some(type_name),
        }
    }
}
impl RuleStep<ValidationPipeline> for FragmentTypeConditionExists {
    fn name(&self) -> &'static str {
        "FragmentTypeConditionExists"
    }

    fn execute(&self, ctx: &mut RuleContext<'_, ValidationPipeline>) -> bool {
        let Some(type_name) = Self::unknown_type(ctx) else {
            return true;
        };
        let fragment = active_part(ctx);
        report(
            ctx,
            fragment.id(),
            anchors::FRAGMENT_SPREAD_TYPE_EXISTENCE,
            format!(
                "Fragment {}cannot condition on unknown type \"{type_name}\"",
                fragment_label(fragment),
            ),
        );
        false
    }

    fn should_allow_child_contexts_to_execute(
        &self,
        ctx: &RuleContext<'_, ValidationPipeline>,
    ) -> bool {
        Self::unknown_type(ctx).is_none()
    }
}

/// [5.5.1.3](https://spec.graphql.org/October2021/#sec-Fragments-On-Composite-Types)
///
/// Nothing beneath a fragment on a leaf or input type is validated.
pub(crate) struct FragmentsOnCompositeTypes;
impl FragmentsOnCompositeTypes {
    fn non_composite_type<'a>(ctx: &RuleContext<'a, ValidationPipeline>) -> Option<&'a GraphQLType> {
        let type_name = type_condition(active_part(ctx))?;
        ctx.state()
            .schema
            .find_type(type_name)
            .filter(|graphql_type| !graphql_type.is_composite())
    }
}
impl RuleStep<ValidationPipeline> for FragmentsOnCompositeTypes {
    fn name(&self) -> &'static str {
        "FragmentsOnCompositeTypes"
    }

    fn execute(&self, ctx: &mut RuleContext<'_, ValidationPipeline>) -> bool {
        let Some(graphql_type) = Self::non_composite_type(ctx) else {
            return true;
        };
        let fragment = active_part(ctx);
        report(
            ctx,
            fragment.id(),
            anchors::FRAGMENTS_ON_COMPOSITE_TYPES,
            format!(
                "Fragment {}cannot condition on non composite type \"{}\"",
                fragment_label(fragment),
                graphql_type.name(),
            ),
        );
        false
    }

    fn should_allow_child_contexts_to_execute(
        &self,
        ctx: &RuleContext<'_, ValidationPipeline>,
    ) -> bool {
        Self::non_composite_type(ctx).is_none()
    }
}

/// [5.5.1.1](https://spec.graphql.org/October2021/#sec-Fragment-Name-Uniqueness)
///
/// Every definition after the first one with a given name is reported.
pub(crate) struct FragmentNameUniqueness;
impl RuleStep<ValidationPipeline> for FragmentNameUniqueness {
    fn name(&self) -> &'static str {
        "FragmentNameUniqueness"
    }

    fn execute(&self, ctx: &mut RuleContext<'_, ValidationPipeline>) -> bool {
        let definition = active_part(ctx);
        let is_first =
            first_definition_of(ctx.state().document, definition)
                .is_none_or(|first| first.id() == definition.id());
        if is_first {
            return true;
        }
        report(
            ctx,
            definition.id(),
            anchors::FRAGMENT_NAME_UNIQUENESS,
            format!(
                "There can be only one fragment named \"{}\"",
                definition.name().unwrap_or_default(),
            ),
        );
        false
    }
}

/// The names of every fragment reachable from at least one operation.
#[derive(Debug, Default)]
struct UsedFragments(Option<HashSet<String>>);

/// [5.5.1.4](https://spec.graphql.org/October2021/#sec-Fragments-Must-Be-Used)
///
/// A fragment only spread by other unused fragments is itself unused.
pub(crate) struct FragmentsMustBeUsed;
impl RuleStep<ValidationPipeline> for FragmentsMustBeUsed {
    fn name(&self) -> &'static str {
        "FragmentsMustBeUsed"
    }

    fn execute(&self, ctx: &mut RuleContext<'_, ValidationPipeline>) -> bool {
        let document = ctx.state().document;
        let definition = active_part(ctx);
        let name = definition.name().unwrap_or_default();

        let used_fragments =
            ctx.metadata_mut()
                .get_or_default::<UsedFragments>()
                .0
                .get_or_insert_with(|| {
                    document.operations()
                        .iter()
                        .flat_map(|op_id| selections::reachable_fragments(document, *op_id))
                        .filter_map(|fragment_id| document.part(fragment_id).name())
                        .map(str::to_string)
                        .collect()
                });
        if used_fragments.contains(name) {
            return true;
        }
        report(
            ctx,
            definition.id(),
            anchors::FRAGMENTS_MUST_BE_USED,
            format!("Fragment \"{name}\" is never used"),
        );
        false
    }
}

/// Every fragment spread cycle in the document, computed on first use.
#[derive(Debug, Default)]
struct FragmentCycles(Option<Vec<Vec<String>>>);

/// [5.5.2.2](https://spec.graphql.org/October2021/#sec-Fragment-spreads-must-not-form-cycles)
///
/// Each distinct cycle is reported once, on the definition of the
/// alphabetically first fragment that takes part in it.
pub(crate) struct FragmentSpreadsMustNotFormCycles;
impl RuleStep<ValidationPipeline> for FragmentSpreadsMustNotFormCycles {
    fn name(&self) -> &'static str {
        "FragmentSpreadsMustNotFormCycles"
    }

    fn execute(&self, ctx: &mut RuleContext<'_, ValidationPipeline>) -> bool {
        let document = ctx.state().document;
        let definition = active_part(ctx);
        let is_first =
            first_definition_of(document, definition)
                .is_some_and(|first| first.id() == definition.id());
        if !is_first {
            return true;
        }
        let name = definition.name().unwrap_or_default();

        let cycles: Vec<String> =
            ctx.metadata_mut()
                .get_or_default::<FragmentCycles>()
                .0
                .get_or_insert_with(|| selections::fragment_cycles(document))
                .iter()
                .filter(|cycle| cycle.first().map(String::as_str) == Some(name))
                .map(|cycle| cycle.join(" -> "))
                .collect();

        let acyclic = cycles.is_empty();
        for cycle in cycles {
            report(
                ctx,
                definition.id(),
                anchors::FRAGMENT_SPREADS_MUST_NOT_FORM_CYCLES,
                format!("Cannot spread fragment \"{name}\" within itself: {cycle}"),
            );
        }
        acyclic
    }
}
