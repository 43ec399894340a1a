use crate::construction::ConstructionPipeline;
use crate::document::PartData;
use crate::rules::RuleContext;
use crate::rules::RuleStep;
use crate::syntax::SyntaxNode;
use crate::syntax::name_text;

/// Creates a `FieldSelection` part. Its type is the declared return type of
/// the field on the enclosing part's type, when both are known.
pub(crate) struct FieldNodeToPart;
impl RuleStep<ConstructionPipeline> for FieldNodeToPart {
    fn name(&self) -> &'static str {
        "FieldNodeToPart"
    }

    fn execute(&self, ctx: &mut RuleContext<'_, ConstructionPipeline>) -> bool {
        let node = ctx.active().clone();
        let SyntaxNode::Field(field) = &node else {
            return true;
        };
        let name = name_text(field.name()).unwrap_or_default();
        let alias = field.alias().and_then(|alias| name_text(alias.name()));

        let state = ctx.state_mut();
        let schema = state.schema();
        let type_expression =
            state.document()
                .part(state.parent_part())
                .graph_type()
                .and_then(|owner| schema.find_field(owner, &name))
                .map(|field_def| field_def.type_annotation().clone());

        state.attach_part(
            &node,
            PartData::FieldSelection { alias, name },
            type_expression,
        );
        true
    }
}
