use crate::construction::ConstructionPipeline;
use crate::document::PartData;
use crate::messages::Message;
use crate::rules::RuleContext;
use crate::rules::RuleStep;
use crate::schema::OperationKind;
use crate::syntax::SyntaxNode;
use crate::syntax::name_text;

/// Creates an `Operation` part typed with the schema's root type for the
/// operation's kind.
///
/// An operation whose kind the schema has no root type for (e.g. a
/// `mutation` against a read-only schema) is reported and nothing beneath
/// it is constructed.
pub(crate) struct OperationNodeToPart;
impl OperationNodeToPart {
    fn operation_kind(ctx: &RuleContext<'_, ConstructionPipeline>) -> Option<OperationKind> {
        match ctx.active() {
            SyntaxNode::OperationDefinition(op_def) =>
                Some(OperationKind::from_cst(op_def)),
            _ => None,
        }
    }
}
impl RuleStep<ConstructionPipeline> for OperationNodeToPart {
    fn name(&self) -> &'static str {
        "OperationNodeToPart"
    }

    fn execute(&self, ctx: &mut RuleContext<'_, ConstructionPipeline>) -> bool {
        let node = ctx.active().clone();
        let SyntaxNode::OperationDefinition(op_def) = &node else {
            return true;
        };
        let operation_kind = OperationKind::from_cst(op_def);
        let name = name_text(op_def.name());

        let state = ctx.state_mut();
        let root_type = state.schema().root_type(operation_kind).map(str::to_string);
        let supported = root_type.is_some();
        let id = state.attach_part_with_graph_type(
            &node,
            PartData::Operation {
                name,
                operation_kind,
            },
            root_type,
            None,
        );

        if !supported {
            let document = ctx.state().document();
            let message =
                Message::invalid_document(format!(
                    "The schema does not support {operation_kind} operations",
                ))
                .at(*document.part(id).location())
                .with_path(document.path(id));
            ctx.add_message(message);
        }
        supported
    }

    fn should_allow_child_contexts_to_execute(
        &self,
        ctx: &RuleContext<'_, ConstructionPipeline>,
    ) -> bool {
        match Self::operation_kind(ctx) {
            Some(kind) => ctx.state().schema().root_type(kind).is_some(),
            None => true,
        }
    }
}
