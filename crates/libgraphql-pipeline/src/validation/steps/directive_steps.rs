use super::SeenNames;
use crate::document::DocumentPart;
use crate::document::PartData;
use crate::messages::anchors;
use crate::rules::RuleContext;
use crate::rules::RuleStep;
use crate::schema::DirectiveLocation;
use crate::schema::OperationKind;
use crate::validation::ValidationPipeline;
use crate::validation::validation_pipeline::active_part;
use crate::validation::validation_pipeline::report;

/// The location a directive applied to `target` occupies.
fn directive_location(target: &DocumentPart) -> Option<DirectiveLocation> {
    Some(match target.data() {
        PartData::Operation { operation_kind, .. } => match operation_kind {
            OperationKind::Mutation => DirectiveLocation::Mutation,
            OperationKind::Query => DirectiveLocation::Query,
            OperationKind::Subscription => DirectiveLocation::Subscription,
        },
        PartData::Variable { .. } => DirectiveLocation::VariableDefinition,
        PartData::FieldSelection { .. } => DirectiveLocation::Field,
        PartData::FragmentSpread { .. } => DirectiveLocation::FragmentSpread,
        PartData::InlineFragment { .. } => DirectiveLocation::InlineFragment,
        PartData::NamedFragmentDefinition { .. } => DirectiveLocation::FragmentDefinition,
        _ => return None,
    })
}

/// [5.7.1](https://spec.graphql.org/October2021/#sec-Directives-Are-Defined)
///
/// The arguments of an unknown directive are not validated.
pub(crate) struct DirectivesAreDefined;
impl DirectivesAreDefined {
    fn is_unknown(ctx: &RuleContext<'_, ValidationPipeline>) -> bool {
        let name = active_part(ctx).name().unwrap_or_default();
        ctx.state().schema.find_directive(name).is_none()
    }
}
impl RuleStep<ValidationPipeline> for DirectivesAreDefined {
    fn name(&self) -> &'static str {
        "DirectivesAreDefined"
    }

    fn execute(&self, ctx: &mut RuleContext<'_, ValidationPipeline>) -> bool {
        if !Self::is_unknown(ctx) {
            return true;
        }
        let directive = active_part(ctx);
        report(
            ctx,
            directive.id(),
            anchors::DIRECTIVES_ARE_DEFINED,
            format!("Unknown directive \"@{}\"", directive.name().unwrap_or_default()),
        );
        false
    }

    fn should_allow_child_contexts_to_execute(
        &self,
        ctx: &RuleContext<'_, ValidationPipeline>,
    ) -> bool {
        !Self::is_unknown(ctx)
    }
}

/// [5.7.2](https://spec.graphql.org/October2021/#sec-Directives-Are-In-Valid-Locations)
pub(crate) struct DirectivesAreInValidLocations;
impl RuleStep<ValidationPipeline> for DirectivesAreInValidLocations {
    fn name(&self) -> &'static str {
        "DirectivesAreInValidLocations"
    }

    fn execute(&self, ctx: &mut RuleContext<'_, ValidationPipeline>) -> bool {
        let state = *ctx.state();
        let directive = active_part(ctx);
        let name = directive.name().unwrap_or_default();
        let Some(definition) = state.schema.find_directive(name) else {
            return true;
        };
        let Some(location) =
            directive.parent()
                .map(|target_id| state.document.part(target_id))
                .and_then(directive_location) else {
            return true;
        };
        if definition.is_allowed_at(location) {
            return true;
        }
        report(
            ctx,
            directive.id(),
            anchors::DIRECTIVES_ARE_IN_VALID_LOCATIONS,
            format!("Directive \"@{name}\" may not be used on {location}"),
        );
        false
    }
}

/// [5.7.3](https://spec.graphql.org/October2021/#sec-Directives-Are-Unique-Per-Location)
///
/// Repeatable directives and unknown directives are exempt.
pub(crate) struct DirectivesAreUniquePerLocation;
impl RuleStep<ValidationPipeline> for DirectivesAreUniquePerLocation {
    fn name(&self) -> &'static str {
        "DirectivesAreUniquePerLocation"
    }

    fn should_execute(&self, ctx: &RuleContext<'_, ValidationPipeline>) -> bool {
        let name = active_part(ctx).name().unwrap_or_default();
        ctx.state()
            .schema
            .find_directive(name)
            .is_some_and(|definition| !definition.is_repeatable())
    }

    fn execute(&self, ctx: &mut RuleContext<'_, ValidationPipeline>) -> bool {
        let directive = active_part(ctx);
        let (Some(target_id), Some(name)) = (directive.parent(), directive.name()) else {
            return true;
        };

        let first_use =
            ctx.metadata_mut()
                .get_or_default::<SeenNames<Self>>()
                .insert(target_id, name);
        if !first_use {
            report(
                ctx,
                directive.id(),
                anchors::DIRECTIVES_ARE_UNIQUE_PER_LOCATION,
                format!("The directive \"@{name}\" can only be used once at this location"),
            );
        }
        first_use
    }
}
