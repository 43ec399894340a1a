use crate::construction::ConstructionPipeline;
use crate::document::DocumentPartKind;
use crate::document::PartData;
use crate::document::ScalarValueKind;
use crate::rules::RuleContext;
use crate::rules::RuleStep;
use crate::syntax::SyntaxNode;
use crate::syntax::name_text;
use apollo_parser::cst;

/// Creates an `InputArgument` part typed with the argument's declared type
/// on the enclosing field or directive.
pub(crate) struct ArgumentNodeToPart;
impl RuleStep<ConstructionPipeline> for ArgumentNodeToPart {
    fn name(&self) -> &'static str {
        "ArgumentNodeToPart"
    }

    fn execute(&self, ctx: &mut RuleContext<'_, ConstructionPipeline>) -> bool {
        let node = ctx.active().clone();
        let SyntaxNode::Argument(argument) = &node else {
            return true;
        };
        let name = name_text(argument.name()).unwrap_or_default();

        let state = ctx.state_mut();
        let type_expression =
            state.document()
                .argument_definitions(state.schema(), state.parent_part())
                .and_then(|arg_defs| arg_defs.get(&name))
                .map(|arg_def| arg_def.type_annotation().clone());

        state.attach_part(
            &node,
            PartData::InputArgument {
                injected: false,
                name,
            },
            type_expression,
        );
        true
    }
}

/// Creates an `InputObjectField` part typed with the field's declared type
/// on the enclosing input object.
pub(crate) struct ObjectFieldNodeToPart;
impl RuleStep<ConstructionPipeline> for ObjectFieldNodeToPart {
    fn name(&self) -> &'static str {
        "ObjectFieldNodeToPart"
    }

    fn execute(&self, ctx: &mut RuleContext<'_, ConstructionPipeline>) -> bool {
        let node = ctx.active().clone();
        let SyntaxNode::ObjectField(object_field) = &node else {
            return true;
        };
        let name = name_text(object_field.name()).unwrap_or_default();

        let state = ctx.state_mut();
        let schema = state.schema();
        let type_expression =
            state.document()
                .part(state.parent_part())
                .type_expression()
                .and_then(|object_type| schema.find_type(object_type.innermost_name()))
                .and_then(|input_type| input_type.input_field(&name))
                .map(|field_def| field_def.type_annotation().clone());

        state.attach_part(&node, PartData::InputObjectField { name }, type_expression);
        true
    }
}

/// Creates the part for a literal value or variable reference.
///
/// The expected type comes from the enclosing argument, input object field
/// or variable definition. Items of a list value expect the list's item
/// type.
pub(crate) struct ValueNodeToPart;
impl RuleStep<ConstructionPipeline> for ValueNodeToPart {
    fn name(&self) -> &'static str {
        "ValueNodeToPart"
    }

    fn execute(&self, ctx: &mut RuleContext<'_, ConstructionPipeline>) -> bool {
        let node = ctx.active().clone();
        let SyntaxNode::Value(value) = &node else {
            return true;
        };

        let state = ctx.state_mut();
        let container = state.document().part(state.parent_part());
        let expected_type = match container.kind() {
            DocumentPartKind::ListValue =>
                container.type_expression().and_then(|t| t.item_type()).cloned(),
            _ => container.type_expression().cloned(),
        };

        state.attach_part(&node, value_data(value), expected_type);
        true
    }
}

fn value_data(value: &cst::Value) -> PartData {
    let scalar = |kind, text: Option<String>| PartData::ScalarValue {
        kind,
        text: text.unwrap_or_default(),
    };
    match value {
        cst::Value::BooleanValue(b) => scalar(
            ScalarValueKind::Boolean,
            Some(b.true_token().is_some().to_string()),
        ),
        cst::Value::EnumValue(e) =>
            scalar(ScalarValueKind::Enum, name_text(e.name())),
        cst::Value::FloatValue(f) => scalar(
            ScalarValueKind::Float,
            f.float_token().map(|token| token.text().to_string()),
        ),
        cst::Value::IntValue(i) => scalar(
            ScalarValueKind::Int,
            i.int_token().map(|token| token.text().to_string()),
        ),
        cst::Value::ListValue(_) => PartData::ListValue,
        cst::Value::NullValue(_) =>
            scalar(ScalarValueKind::Null, Some("null".to_string())),
        cst::Value::ObjectValue(_) => PartData::ComplexValue,
        cst::Value::StringValue(s) =>
            scalar(ScalarValueKind::String, Some(String::from(s))),
        cst::Value::Variable(var) => PartData::VariableReference {
            name: name_text(var.name()).unwrap_or_default(),
        },
    }
}
