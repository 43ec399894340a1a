use super::SeenNames;
use crate::document::DocumentPart;
use crate::document::DocumentPartKind;
use crate::document::PartData;
use crate::document::QueryDocument;
use crate::messages::anchors;
use crate::rules::RuleContext;
use crate::rules::RuleStep;
use crate::validation::ValidationPipeline;
use crate::validation::validation_pipeline::active_part;
use crate::validation::validation_pipeline::report;

/// How the field or directive owning some arguments is referred to in
/// messages, e.g. `field "User.friends"` or `directive "@tag"`.
fn describe_container(document: &QueryDocument, container: &DocumentPart) -> String {
    match container.data() {
        PartData::Directive { name } => format!("directive \"@{name}\""),
        PartData::FieldSelection { name, .. } => match document.owner_type(container.id()) {
            Some(owner) => format!("field \"{owner}.{name}\""),
            None => format!("field \"{name}\""),
        },
        _ => "\"(unknown)\"".to_string(),
    }
}

/// [5.4.1](https://spec.graphql.org/October2021/#sec-Argument-Names)
///
/// The value of an unknown argument is not validated.
pub(crate) struct ArgumentNames;
impl ArgumentNames {
    fn is_unknown(ctx: &RuleContext<'_, ValidationPipeline>) -> bool {
        let state = ctx.state();
        let argument = active_part(ctx);
        let Some(container_id) = argument.parent() else {
            return false;
        };
        let Some(arg_defs) = state.document.argument_definitions(state.schema, container_id) else {
            return false;
        };
        !arg_defs.contains_key(argument.name().unwrap_or_default())
    }
}
impl RuleStep<ValidationPipeline> for ArgumentNames {
    fn name(&self) -> &'static str {
        "ArgumentNames"
    }

    fn execute(&self, ctx: &mut RuleContext<'_, ValidationPipeline>) -> bool {
        if !Self::is_unknown(ctx) {
            return true;
        }
        let argument = active_part(ctx);
        let document = ctx.state().document;
        let container = argument.parent().map(|container_id| document.part(container_id));
        let described = container
            .map(|container| describe_container(document, container))
            .unwrap_or_default();
        report(
            ctx,
            argument.id(),
            anchors::ARGUMENT_NAMES,
            format!(
                "Unknown argument \"{}\" on {described}",
                argument.name().unwrap_or_default(),
            ),
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

/// [5.4.2](https://spec.graphql.org/October2021/#sec-Argument-Uniqueness)
///
/// The first occurrence of a name is accepted; every later one under the
/// same field or directive is reported where it occurs.
pub(crate) struct ArgumentUniqueness;
impl RuleStep<ValidationPipeline> for ArgumentUniqueness {
    fn name(&self) -> &'static str {
        "ArgumentUniqueness"
    }

    fn execute(&self, ctx: &mut RuleContext<'_, ValidationPipeline>) -> bool {
        let argument = active_part(ctx);
        let (Some(container_id), Some(name)) = (argument.parent(), argument.name()) else {
            return true;
        };

        let first_use =
            ctx.metadata_mut()
                .get_or_default::<SeenNames<Self>>()
                .insert(container_id, name);
        if !first_use {
            report(
                ctx,
                argument.id(),
                anchors::ARGUMENT_UNIQUENESS,
                format!("There can be only one argument named \"{name}\""),
            );
        }
        first_use
    }
}

/// [5.4.2.1](https://spec.graphql.org/October2021/#sec-Required-Arguments)
///
/// Runs on fields and directives. Only checks that a required argument is
/// present; an explicit `null` for one is reported by
/// [`ValuesOfCorrectType`](super::ValuesOfCorrectType).
pub(crate) struct RequiredArguments;
impl RuleStep<ValidationPipeline> for RequiredArguments {
    fn name(&self) -> &'static str {
        "RequiredArguments"
    }

    fn execute(&self, ctx: &mut RuleContext<'_, ValidationPipeline>) -> bool {
        let state = *ctx.state();
        let container = active_part(ctx);
        let Some(arg_defs) = state.document.argument_definitions(state.schema, container.id()) else {
            return true;
        };

        let supplied: Vec<&str> =
            state.document
                .children_of_kind(container.id(), DocumentPartKind::InputArgument)
                .iter()
                .filter_map(|arg_id| state.document.part(*arg_id).name())
                .collect();
        let missing: Vec<String> =
            arg_defs.values()
                .filter(|arg_def| arg_def.is_required())
                .filter(|arg_def| !supplied.contains(&arg_def.name()))
                .map(|arg_def| format!(
                    "Argument \"{}\" of type \"{}\" is required on {}, but it was \
                    not provided",
                    arg_def.name(),
                    arg_def.type_annotation(),
                    describe_container(state.document, container),
                ))
                .collect();

        let all_supplied = missing.is_empty();
        for text in missing {
            report(ctx, container.id(), anchors::REQUIRED_ARGUMENTS, text);
        }
        all_supplied
    }
}
