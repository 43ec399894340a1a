use crate::construction::ConstructionPipeline;
use crate::document::DocumentPart;
use crate::document::PartData;
use crate::document::PartId;
use crate::document::QueryDocument;
use crate::document::ScalarValueKind;
use crate::loc::SourceLocation;
use crate::rules::RuleContext;
use crate::rules::RuleStep;
use crate::schema::ConstValue;
use crate::schema::Schema;
use crate::schema::TypeAnnotation;
use crate::syntax::SyntaxNode;
use crate::syntax::name_text;
use std::collections::HashSet;

/// Creates a `Directive` part under the part the directive annotates.
pub(crate) struct DirectiveNodeToPart;
impl RuleStep<ConstructionPipeline> for DirectiveNodeToPart {
    fn name(&self) -> &'static str {
        "DirectiveNodeToPart"
    }

    fn execute(&self, ctx: &mut RuleContext<'_, ConstructionPipeline>) -> bool {
        let node = ctx.active().clone();
        let SyntaxNode::Directive(directive) = &node else {
            return true;
        };
        let name = name_text(directive.name()).unwrap_or_default();
        ctx.state_mut().attach_part_with_graph_type(
            &node,
            PartData::Directive { name },
            None,
            None,
        );
        true
    }
}

/// Adds an `InputArgument` part (and its value) for every argument the
/// directive's definition declares a default for but the document does not
/// supply.
///
/// Runs right after [`DirectiveNodeToPart`] so the injected arguments land
/// under the directive part before any supplied argument is constructed.
pub(crate) struct InjectDefaultDirectiveArguments;
impl RuleStep<ConstructionPipeline> for InjectDefaultDirectiveArguments {
    fn name(&self) -> &'static str {
        "InjectDefaultDirectiveArguments"
    }

    fn should_execute(&self, ctx: &RuleContext<'_, ConstructionPipeline>) -> bool {
        ctx.state().active_part().is_some()
    }

    fn execute(&self, ctx: &mut RuleContext<'_, ConstructionPipeline>) -> bool {
        let node = ctx.active().clone();
        let SyntaxNode::Directive(directive) = &node else {
            return true;
        };
        let Some(directive_id) = ctx.state().active_part() else {
            return true;
        };
        let state = ctx.state_mut();
        let schema = state.schema();
        let name = name_text(directive.name()).unwrap_or_default();
        let Some(directive_def) = schema.find_directive(&name) else {
            return true;
        };

        let supplied: HashSet<String> =
            directive.arguments()
                .map(|args| {
                    args.arguments()
                        .filter_map(|arg| name_text(arg.name()))
                        .collect()
                })
                .unwrap_or_default();

        let location = *state.document().part(directive_id).location();
        for (arg_name, arg_def) in directive_def.arguments() {
            let Some(default_value) = arg_def.default_value() else {
                continue;
            };
            if supplied.contains(arg_name) {
                continue;
            }

            tracing::trace!(
                directive = name.as_str(),
                argument = arg_name.as_str(),
                "injecting default directive argument",
            );
            let type_expression = arg_def.type_annotation().clone();
            let argument_part =
                DocumentPart::new(
                    directive_id,
                    PartData::InputArgument {
                        injected: true,
                        name: arg_name.clone(),
                    },
                    location,
                )
                .with_graph_type(known_type(schema, &type_expression))
                .with_type_expression(Some(type_expression.clone()));
            let argument_id =
                state.document_mut().add_child(directive_id, argument_part);

            add_const_value(
                state.document_mut(),
                schema,
                argument_id,
                default_value,
                Some(type_expression),
                location,
            );
        }
        true
    }
}

fn known_type(schema: &Schema, type_expression: &TypeAnnotation) -> Option<String> {
    let name = type_expression.innermost_name();
    schema.find_type(name).map(|_| name.to_string())
}

/// Build the part subtree for a value taken from the schema.
fn add_const_value(
    document: &mut QueryDocument,
    schema: &Schema,
    parent: PartId,
    value: &ConstValue,
    expected_type: Option<TypeAnnotation>,
    location: SourceLocation,
) -> PartId {
    let scalar = |kind, text: String| PartData::ScalarValue { kind, text };
    let data = match value {
        ConstValue::Boolean(b) => scalar(ScalarValueKind::Boolean, b.to_string()),
        ConstValue::Enum(name) => scalar(ScalarValueKind::Enum, name.clone()),
        ConstValue::Float(f) => scalar(ScalarValueKind::Float, f.to_string()),
        ConstValue::Int(i) => scalar(ScalarValueKind::Int, i.to_string()),
        ConstValue::List(_) => PartData::ListValue,
        ConstValue::Null => scalar(ScalarValueKind::Null, "null".to_string()),
        ConstValue::Object(_) => PartData::ComplexValue,
        ConstValue::String(s) => scalar(ScalarValueKind::String, s.clone()),
    };

    let part =
        DocumentPart::new(parent, data, location)
            .with_graph_type(expected_type.as_ref().and_then(|t| known_type(schema, t)))
            .with_type_expression(expected_type.clone());
    let id = document.add_child(parent, part);

    match value {
        ConstValue::List(items) => {
            let item_type = expected_type.as_ref().and_then(|t| t.item_type()).cloned();
            for item in items {
                add_const_value(document, schema, id, item, item_type.clone(), location);
            }
        },

        ConstValue::Object(fields) => {
            let input_type =
                expected_type.as_ref()
                    .and_then(|t| schema.find_type(t.innermost_name()));
            for (field_name, field_value) in fields {
                let field_type =
                    input_type.and_then(|t| t.input_field(field_name))
                        .map(|field_def| field_def.type_annotation().clone());
                let field_part =
                    DocumentPart::new(
                        id,
                        PartData::InputObjectField { name: field_name.clone() },
                        location,
                    )
                    .with_graph_type(field_type.as_ref().and_then(|t| known_type(schema, t)))
                    .with_type_expression(field_type.clone());
                let field_id = document.add_child(id, field_part);
                add_const_value(document, schema, field_id, field_value, field_type, location);
            }
        },

        ConstValue::Boolean(_)
            | ConstValue::Enum(_)
            | ConstValue::Float(_)
            | ConstValue::Int(_)
            | ConstValue::Null
            | ConstValue::String(_) => (),
    }
    id
}
