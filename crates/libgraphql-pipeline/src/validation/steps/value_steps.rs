use super::SeenNames;
use crate::document::DocumentPartKind;
use crate::document::PartData;
use crate::document::PartId;
use crate::document::ScalarValueKind;
use crate::messages::anchors;
use crate::rules::RuleContext;
use crate::rules::RuleStep;
use crate::schema::GraphQLType;
use crate::schema::GraphQLTypeKind;
use crate::schema::Schema;
use crate::validation::ValidationPipeline;
use crate::validation::validation_pipeline::active_part;
use crate::validation::validation_pipeline::report;
use crate::validation::values;

const BUILTIN_SCALARS: [&str; 5] = ["Boolean", "Float", "ID", "Int", "String"];

/// Custom scalars may be written as any literal, lists and objects
/// included.
fn is_custom_scalar(graphql_type: &GraphQLType) -> bool {
    graphql_type.kind() == GraphQLTypeKind::Scalar
        && !BUILTIN_SCALARS.contains(&graphql_type.name())
}

/// The input object type of the `ComplexValue` part `id`, if it is known.
fn input_object_type<'s>(
    ctx: &RuleContext<'s, ValidationPipeline>,
    id: PartId,
) -> Option<&'s GraphQLType> {
    let state = ctx.state();
    let schema: &'s Schema = state.schema;
    let type_name = state.document.part(id).type_expression()?.innermost_name();
    schema.find_type(type_name)
        .filter(|graphql_type| graphql_type.kind() == GraphQLTypeKind::InputObject)
}

/// [5.6.1](https://spec.graphql.org/October2021/#sec-Values-of-Correct-Type)
///
/// Runs on literal scalars, lists and input objects. A single item where a
/// list is expected is checked against the list's item type, following
/// input coercion. Variables are checked by
/// [`AllVariableUsagesAllowed`](super::AllVariableUsagesAllowed) instead.
pub(crate) struct ValuesOfCorrectType;
impl RuleStep<ValidationPipeline> for ValuesOfCorrectType {
    fn name(&self) -> &'static str {
        "ValuesOfCorrectType"
    }

    fn execute(&self, ctx: &mut RuleContext<'_, ValidationPipeline>) -> bool {
        let state = *ctx.state();
        let value = active_part(ctx);
        let Some(expected) = value.type_expression() else {
            return true;
        };
        let Some(graphql_type) = state.schema.find_type(expected.innermost_name()) else {
            return true;
        };

        let found = match value.data() {
            PartData::ScalarValue { kind: ScalarValueKind::Null, .. } => {
                if expected.nullable() {
                    return true;
                }
                "null".to_string()
            },
            PartData::ScalarValue { kind, text } => {
                if values::is_literal_of_type(state.schema, graphql_type.name(), *kind, text) {
                    return true;
                }
                values::render_value(state.document, value.id())
            },
            PartData::ListValue => {
                if expected.is_list() || is_custom_scalar(graphql_type) {
                    return true;
                }
                "a list".to_string()
            },
            PartData::ComplexValue => {
                let accepts_object =
                    graphql_type.kind() == GraphQLTypeKind::InputObject
                        || is_custom_scalar(graphql_type);
                if accepts_object {
                    return true;
                }
                "an object".to_string()
            },
            _ => return true,
        };

        report(
            ctx,
            value.id(),
            anchors::VALUES_OF_CORRECT_TYPE,
            format!("Expected value of type \"{expected}\", found {found}"),
        );
        false
    }
}

/// [5.6.2](https://spec.graphql.org/October2021/#sec-Input-Object-Field-Names)
///
/// The value of an unknown input field is not validated.
pub(crate) struct InputObjectFieldNames;
impl InputObjectFieldNames {
    /// `Some(type_name)` when the input object type is known but declares
    /// no field with the active part's name.
    fn undeclared_on<'a>(ctx: &RuleContext<'a, ValidationPipeline>) -> Option<&'a str> {
        let field = active_part(ctx);
        let input_type = input_object_type(ctx, field.parent()?)?;
        match input_type.input_field(field.name().unwrap_or_default()) {
            Some(_) => None,
            None => Some(input_type.name()),
        }
    }
}
impl RuleStep<ValidationPipeline> for InputObjectFieldNames {
    fn name(&self) -> &'static str {
        "InputObjectFieldNames"
    }

    fn execute(&self, ctx: &mut RuleContext<'_, ValidationPipeline>) -> bool {
        let Some(type_name) = Self::undeclared_on(ctx) else {
            return true;
        };
        let field = active_part(ctx);
        report(
            ctx,
            field.id(),
            anchors::INPUT_OBJECT_FIELD_NAMES,
            format!(
                "Field \"{}\" is not defined by type \"{type_name}\"",
                field.name().unwrap_or_default(),
            ),
        );
        false
    }

    fn should_allow_child_contexts_to_execute(
        &self,
        ctx: &RuleContext<'_, ValidationPipeline>,
    ) -> bool {
        Self::undeclared_on(ctx).is_none()
    }
}

/// [5.6.3](https://spec.graphql.org/October2021/#sec-Input-Object-Field-Uniqueness)
pub(crate) struct InputObjectFieldUniqueness;
impl RuleStep<ValidationPipeline> for InputObjectFieldUniqueness {
    fn name(&self) -> &'static str {
        "InputObjectFieldUniqueness"
    }

    fn execute(&self, ctx: &mut RuleContext<'_, ValidationPipeline>) -> bool {
        let field = active_part(ctx);
        let (Some(object_id), Some(name)) = (field.parent(), field.name()) else {
            return true;
        };

        let first_use =
            ctx.metadata_mut()
                .get_or_default::<SeenNames<Self>>()
                .insert(object_id, name);
        if !first_use {
            report(
                ctx,
                field.id(),
                anchors::INPUT_OBJECT_FIELD_UNIQUENESS,
                format!("There can be only one input field named \"{name}\""),
            );
        }
        first_use
    }
}

/// [5.6.4](https://spec.graphql.org/October2021/#sec-Input-Object-Required-Fields)
pub(crate) struct InputObjectRequiredFields;
impl RuleStep<ValidationPipeline> for InputObjectRequiredFields {
    fn name(&self) -> &'static str {
        "InputObjectRequiredFields"
    }

    fn execute(&self, ctx: &mut RuleContext<'_, ValidationPipeline>) -> bool {
        let document = ctx.state().document;
        let object = active_part(ctx);
        let Some(input_type) = input_object_type(ctx, object.id()) else {
            return true;
        };

        let supplied: Vec<&str> =
            document.children_of_kind(object.id(), DocumentPartKind::InputObjectField)
                .iter()
                .filter_map(|field_id| document.part(*field_id).name())
                .collect();
        let missing: Vec<String> =
            input_type.input_fields()
                .values()
                .filter(|field_def| field_def.is_required())
                .filter(|field_def| !supplied.contains(&field_def.name()))
                .map(|field_def| format!(
                    "Field \"{}.{}\" of required type \"{}\" was not provided",
                    input_type.name(),
                    field_def.name(),
                    field_def.type_annotation(),
                ))
                .collect();

        let all_supplied = missing.is_empty();
        for text in missing {
            report(ctx, object.id(), anchors::INPUT_OBJECT_REQUIRED_FIELDS, text);
        }
        all_supplied
    }
}
