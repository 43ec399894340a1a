use crate::document::PartData;
use crate::document::PartId;
use crate::document::QueryDocument;
use crate::document::ScalarValueKind;
use crate::schema::GraphQLTypeKind;
use crate::schema::Schema;

/// Render the value rooted at part `id` back into GraphQL syntax.
///
/// Two values render identically exactly when they are the same literal
/// value, which makes the result usable as a comparison key.
pub(super) fn render_value(document: &QueryDocument, id: PartId) -> String {
    let part = document.part(id);
    match part.data() {
        PartData::ScalarValue { kind: ScalarValueKind::String, text } =>
            format!("{text:?}"),
        PartData::ScalarValue { text, .. } => text.clone(),
        PartData::VariableReference { name } => format!("${name}"),
        PartData::ListValue => {
            let items: Vec<String> =
                part.children()
                    .iter()
                    .map(|item_id| render_value(document, item_id))
                    .collect();
            format!("[{}]", items.join(", "))
        },
        PartData::ComplexValue => {
            let fields: Vec<String> =
                part.children()
                    .iter()
                    .map(|field_id| render_entry(document, field_id))
                    .collect();
            format!("{{{}}}", fields.join(", "))
        },
        PartData::InputArgument { .. } | PartData::InputObjectField { .. } =>
            render_entry(document, id),
        _ => String::new(),
    }
}

/// Render a `name: value` pair for an argument or input object field.
pub(super) fn render_entry(document: &QueryDocument, id: PartId) -> String {
    let part = document.part(id);
    let value =
        part.children()
            .iter()
            .next()
            .map(|value_id| render_value(document, value_id))
            .unwrap_or_default();
    format!("{}: {value}", part.name().unwrap_or_default())
}

/// Whether a non-null scalar or enum literal is acceptable for the named
/// input type `type_name`.
///
/// Custom scalars accept any literal. Unknown types are not checked here.
pub(super) fn is_literal_of_type(
    schema: &Schema,
    type_name: &str,
    kind: ScalarValueKind,
    text: &str,
) -> bool {
    match type_name {
        "Int" => kind == ScalarValueKind::Int && text.parse::<i32>().is_ok(),
        "Float" => matches!(kind, ScalarValueKind::Int | ScalarValueKind::Float),
        "String" => kind == ScalarValueKind::String,
        "Boolean" => kind == ScalarValueKind::Boolean,
        "ID" => matches!(kind, ScalarValueKind::Int | ScalarValueKind::String),
        _ => match schema.find_type(type_name) {
            Some(graphql_type) => match graphql_type.kind() {
                GraphQLTypeKind::Enum =>
                    kind == ScalarValueKind::Enum
                        && graphql_type.enum_values().iter().any(|value| value == text),
                GraphQLTypeKind::Scalar => true,
                GraphQLTypeKind::InputObject
                    | GraphQLTypeKind::Interface
                    | GraphQLTypeKind::Object
                    | GraphQLTypeKind::Union => false,
            },
            None => true,
        },
    }
}
