use crate::document::DocumentPart;
use crate::document::DocumentPartKind;
use crate::document::PartData;
use crate::document::PartId;
use crate::document::ScalarValueKind;
use crate::messages::Message;
use crate::messages::MessageSeverity;
use crate::messages::anchors;
use crate::messages::codes;
use crate::rules::RuleContext;
use crate::rules::RuleStep;
use crate::schema::OperationKind;
use crate::validation::ValidationPipeline;
use crate::validation::selections;
use crate::validation::validation_pipeline::located;
use crate::validation::validation_pipeline::report;
use std::collections::HashMap;
use std::collections::HashSet;

/// The names of the variables each operation actually uses, recorded when
/// the operation is entered and checked on each of its `Variable` parts.
#[derive(Debug, Default)]
pub(super) struct UsedVariables(HashMap<PartId, HashSet<String>>);
impl UsedVariables {
    pub(super) fn is_used(&self, operation: PartId, name: &str) -> bool {
        self.0.get(&operation).is_some_and(|names| names.contains(name))
    }
}

/// How an operation is referred to in messages.
pub(super) fn operation_label(operation: &DocumentPart) -> String {
    match operation.name() {
        Some(name) => format!("\"{name}\""),
        None => "(anonymous)".to_string(),
    }
}

fn operation_kind(operation: &DocumentPart) -> Option<OperationKind> {
    match operation.data() {
        PartData::Operation { operation_kind, .. } => Some(*operation_kind),
        _ => None,
    }
}

/// The `Variable` part `operation` declares for `name`, if any.
fn variable_definition<'d>(
    ctx: &RuleContext<'d, ValidationPipeline>,
    operation: PartId,
    name: &str,
) -> Option<&'d DocumentPart> {
    let document = ctx.state().document;
    document.children_of_kind(operation, DocumentPartKind::Variable)
        .iter()
        .map(|var_id| document.part(*var_id))
        .find(|var| var.name() == Some(name))
}

/// [5.2.1.1](https://spec.graphql.org/October2021/#sec-Operation-Name-Uniqueness)
pub(crate) struct OperationNameUniqueness;
impl RuleStep<ValidationPipeline> for OperationNameUniqueness {
    fn name(&self) -> &'static str {
        "OperationNameUniqueness"
    }

    fn execute(&self, ctx: &mut RuleContext<'_, ValidationPipeline>) -> bool {
        let id = *ctx.active();
        let Some(name) = ctx.state().document.part(id).name() else {
            return true;
        };

        let first_use =
            ctx.metadata_mut()
                .get_or_default::<super::SeenNames<Self>>()
                .insert(PartId::ROOT, name);
        if !first_use {
            report(
                ctx,
                id,
                anchors::OPERATION_NAME_UNIQUENESS,
                format!("There can be only one operation named \"{name}\""),
            );
        }
        first_use
    }
}

/// [5.2.2.1](https://spec.graphql.org/October2021/#sec-Lone-Anonymous-Operation)
pub(crate) struct LoneAnonymousOperation;
impl RuleStep<ValidationPipeline> for LoneAnonymousOperation {
    fn name(&self) -> &'static str {
        "LoneAnonymousOperation"
    }

    fn should_execute(&self, ctx: &RuleContext<'_, ValidationPipeline>) -> bool {
        ctx.state().document.part(*ctx.active()).name().is_none()
    }

    fn execute(&self, ctx: &mut RuleContext<'_, ValidationPipeline>) -> bool {
        if ctx.state().document.operations().len() == 1 {
            return true;
        }
        report(
            ctx,
            *ctx.active(),
            anchors::LONE_ANONYMOUS_OPERATION,
            "This anonymous operation must be the only defined operation",
        );
        false
    }
}

/// [5.2.3.1](https://spec.graphql.org/October2021/#sec-Single-root-field)
///
/// Root fields are counted by response key after flattening fragments, so
/// `{ a ...F }` with `fragment F on Subscription { a }` has one root field.
pub(crate) struct SubscriptionSingleRootField;
impl RuleStep<ValidationPipeline> for SubscriptionSingleRootField {
    fn name(&self) -> &'static str {
        "SubscriptionSingleRootField"
    }

    fn should_execute(&self, ctx: &RuleContext<'_, ValidationPipeline>) -> bool {
        let operation = ctx.state().document.part(*ctx.active());
        operation_kind(operation) == Some(OperationKind::Subscription)
    }

    fn execute(&self, ctx: &mut RuleContext<'_, ValidationPipeline>) -> bool {
        let id = *ctx.active();
        let document = ctx.state().document;
        let response_keys: HashSet<&str> =
            ctx.metadata_mut()
                .get_or_default::<selections::CollectedFields>()
                .of(document, id)
                .iter()
                .filter_map(|field_id| document.part(*field_id).data().response_key())
                .collect();
        if response_keys.len() <= 1 {
            return true;
        }

        let label = operation_label(document.part(id));
        report(
            ctx,
            id,
            anchors::SINGLE_ROOT_FIELD,
            format!("Subscription {label} must select only one top level field"),
        );
        false
    }
}

/// [5.8.3](https://spec.graphql.org/October2021/#sec-All-Variable-Uses-Defined)
///
/// Also records which of the operation's variables are used, for
/// [`AllVariablesUsed`](super::AllVariablesUsed).
pub(crate) struct AllVariableUsesDefined;
impl RuleStep<ValidationPipeline> for AllVariableUsesDefined {
    fn name(&self) -> &'static str {
        "AllVariableUsesDefined"
    }

    fn execute(&self, ctx: &mut RuleContext<'_, ValidationPipeline>) -> bool {
        let id = *ctx.active();
        let document = ctx.state().document;
        let label = operation_label(document.part(id));

        let mut used = HashSet::new();
        let mut undefined = vec![];
        for usage_id in selections::variable_usages(document, id) {
            let Some(name) = document.part(usage_id).name() else {
                continue;
            };
            if variable_definition(ctx, id, name).is_some() {
                used.insert(name.to_string());
            } else {
                undefined.push((usage_id, name));
            }
        }
        ctx.metadata_mut()
            .get_or_default::<UsedVariables>()
            .0
            .insert(id, used);

        for (usage_id, name) in &undefined {
            report(
                ctx,
                *usage_id,
                anchors::ALL_VARIABLE_USES_DEFINED,
                format!("Variable \"${name}\" is not defined by operation {label}"),
            );
        }
        undefined.is_empty()
    }
}

/// [5.8.5](https://spec.graphql.org/October2021/#sec-All-Variable-Usages-are-Allowed)
pub(crate) struct AllVariableUsagesAllowed;
impl AllVariableUsagesAllowed {
    /// Whether the variable declares a default other than `null`.
    fn has_non_null_default(ctx: &RuleContext<'_, ValidationPipeline>, var: &DocumentPart) -> bool {
        let document = ctx.state().document;
        var.children().iter().any(|child_id| match document.part(child_id).data() {
            PartData::ScalarValue { kind, .. } => *kind != ScalarValueKind::Null,
            data => data.kind().is_value(),
        })
    }

    /// Whether the argument or input field the usage is passed to declares
    /// a default value.
    fn location_has_default(ctx: &RuleContext<'_, ValidationPipeline>, usage_id: PartId) -> bool {
        let state = ctx.state();
        state.document
            .part(usage_id)
            .parent()
            .and_then(|parent_id| state.document.input_value_definition(state.schema, parent_id))
            .is_some_and(|input_value| input_value.default_value().is_some())
    }
}
impl RuleStep<ValidationPipeline> for AllVariableUsagesAllowed {
    fn name(&self) -> &'static str {
        "AllVariableUsagesAllowed"
    }

    fn execute(&self, ctx: &mut RuleContext<'_, ValidationPipeline>) -> bool {
        let id = *ctx.active();
        let document = ctx.state().document;

        let mut disallowed = vec![];
        for usage_id in selections::variable_usages(document, id) {
            let usage = document.part(usage_id);
            let Some(name) = usage.name() else {
                continue;
            };
            let Some(var) = variable_definition(ctx, id, name) else {
                continue;
            };
            let (Some(var_type), Some(location_type)) =
                (var.type_expression(), usage.type_expression()) else {
                continue;
            };

            let allowed =
                if !location_type.nullable() && var_type.nullable() {
                    let has_default =
                        Self::has_non_null_default(ctx, var)
                            || Self::location_has_default(ctx, usage_id);
                    has_default
                        && var_type.is_compatible_variable_for(&location_type.as_nullable())
                } else {
                    var_type.is_compatible_variable_for(location_type)
                };
            if !allowed {
                disallowed.push((
                    usage_id,
                    format!(
                        "Variable \"${name}\" of type \"{var_type}\" used in position \
                        expecting type \"{location_type}\"",
                    ),
                ));
            }
        }

        let all_allowed = disallowed.is_empty();
        for (usage_id, text) in disallowed {
            report(ctx, usage_id, anchors::ALL_VARIABLE_USAGES_ARE_ALLOWED, text);
        }
        all_allowed
    }
}

/// Rejects operations whose field selections nest deeper than
/// [`PipelineConfig::max_query_depth`](crate::PipelineConfig::max_query_depth).
pub(crate) struct MaxQueryDepth;
impl RuleStep<ValidationPipeline> for MaxQueryDepth {
    fn name(&self) -> &'static str {
        "MaxQueryDepth"
    }

    fn should_execute(&self, ctx: &RuleContext<'_, ValidationPipeline>) -> bool {
        ctx.state().config.max_query_depth.is_some()
    }

    fn execute(&self, ctx: &mut RuleContext<'_, ValidationPipeline>) -> bool {
        let Some(max_depth) = ctx.state().config.max_query_depth else {
            return true;
        };
        let id = *ctx.active();
        let document = ctx.state().document;
        let depth = ctx.metadata_mut()
            .get_or_default::<selections::SelectionDepths>()
            .of(document, id);
        if depth <= max_depth {
            return true;
        }

        let label = operation_label(document.part(id));
        let message = located(ctx, id, Message::new(
            MessageSeverity::Error,
            codes::MAX_DEPTH_EXCEEDED,
            format!(
                "Operation {label} has a depth of {depth}, which exceeds the \
                maximum allowed depth of {max_depth}",
            ),
        ));
        ctx.add_message(message);
        false
    }
}
