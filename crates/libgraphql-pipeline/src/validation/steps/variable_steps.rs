use super::SeenNames;
use super::operation_steps::UsedVariables;
use super::operation_steps::operation_label;
use crate::messages::anchors;
use crate::rules::RuleContext;
use crate::rules::RuleStep;
use crate::validation::ValidationPipeline;
use crate::validation::validation_pipeline::active_part;
use crate::validation::validation_pipeline::report;

/// [5.8.1](https://spec.graphql.org/October2021/#sec-Variable-Uniqueness)
pub(crate) struct VariableUniqueness;
impl RuleStep<ValidationPipeline> for VariableUniqueness {
    fn name(&self) -> &'static str {
        "VariableUniqueness"
    }

    fn execute(&self, ctx: &mut RuleContext<'_, ValidationPipeline>) -> bool {
        let var = active_part(ctx);
        let (Some(operation), Some(name)) = (var.parent(), var.name()) else {
            return true;
        };

        let first_use =
            ctx.metadata_mut()
                .get_or_default::<SeenNames<Self>>()
                .insert(operation, name);
        if !first_use {
            report(
                ctx,
                var.id(),
                anchors::VARIABLE_UNIQUENESS,
                format!("There can be only one variable named \"${name}\""),
            );
        }
        first_use
    }
}

/// [5.8.2](https://spec.graphql.org/October2021/#sec-Variables-Are-Input-Types)
pub(crate) struct VariablesAreInputTypes;
impl RuleStep<ValidationPipeline> for VariablesAreInputTypes {
    fn name(&self) -> &'static str {
        "VariablesAreInputTypes"
    }

    fn execute(&self, ctx: &mut RuleContext<'_, ValidationPipeline>) -> bool {
        let var = active_part(ctx);
        let Some(var_type) = var.type_expression() else {
            return true;
        };
        let name = var.name().unwrap_or_default();
        let type_name = var_type.innermost_name();

        let text = match ctx.state().schema.find_type(type_name) {
            Some(graphql_type) if graphql_type.is_input_type() => return true,
            Some(_) => format!(
                "Variable \"${name}\" cannot be of non-input type \"{var_type}\"",
            ),
            None => format!(
                "Variable \"${name}\" is declared with unknown type \"{type_name}\"",
            ),
        };
        report(ctx, var.id(), anchors::VARIABLES_ARE_INPUT_TYPES, text);
        false
    }
}

/// [5.8.4](https://spec.graphql.org/October2021/#sec-All-Variables-Used)
///
/// Relies on the usages [`AllVariableUsesDefined`](super::AllVariableUsesDefined)
/// recorded when the enclosing operation was visited.
pub(crate) struct AllVariablesUsed;
impl RuleStep<ValidationPipeline> for AllVariablesUsed {
    fn name(&self) -> &'static str {
        "AllVariablesUsed"
    }

    fn execute(&self, ctx: &mut RuleContext<'_, ValidationPipeline>) -> bool {
        let var = active_part(ctx);
        let (Some(operation), Some(name)) = (var.parent(), var.name()) else {
            return true;
        };
        let used =
            ctx.metadata()
                .get::<UsedVariables>()
                .is_some_and(|used| used.is_used(operation, name));
        if used {
            return true;
        }

        let label = operation_label(ctx.state().document.part(operation));
        report(
            ctx,
            var.id(),
            anchors::ALL_VARIABLES_USED,
            format!("Variable \"${name}\" is never used in operation {label}"),
        );
        false
    }
}
